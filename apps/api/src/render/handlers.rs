use std::time::Duration;

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::render::normalize::normalize;
use crate::render::theme::{Theme, ThemeOptions};
use crate::render::{render_html, render_pdf};
use crate::state::AppState;

/// Body of both render endpoints: the stored record plus optional theme overrides.
#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    #[serde(default)]
    pub resume: Value,
    #[serde(flatten)]
    pub theme: ThemeOptions,
}

impl RenderRequest {
    /// Validates the record and resolves the theme: request, then record, then config.
    fn prepare(self, defaults: &ThemeOptions) -> Result<(Value, Theme), AppError> {
        if !self.resume.is_object() {
            return Err(AppError::Validation(
                "`resume` must be a JSON object".to_string(),
            ));
        }
        let theme = self
            .theme
            .or(ThemeOptions::from_record(&self.resume))
            .or(defaults.clone())
            .resolve();
        Ok((self.resume, theme))
    }
}

/// Runs a CPU-bound render off the async executor under `timeout`.
async fn run_render<T, F>(timeout: Duration, job: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    match tokio::time::timeout(timeout, tokio::task::spawn_blocking(job)).await {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => Err(AppError::Internal(anyhow::anyhow!(
            "spawn_blocking failed in render: {e}"
        ))),
        Err(_) => Err(AppError::Timeout(timeout.as_millis())),
    }
}

/// `resume-<id>.pdf` from the record's `id`, or `resume-draft.pdf`.
fn download_filename(record: &Value) -> String {
    let id = match record.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    };
    let id: String = id
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    if id.is_empty() {
        "resume-draft.pdf".to_string()
    } else {
        format!("resume-{id}.pdf")
    }
}

/// POST /api/v1/resumes/render/html
pub async fn handle_render_html(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Result<Html<String>, AppError> {
    let (record, theme) = req.prepare(&state.config.theme_defaults)?;
    let template = theme.template.as_str();

    let html = run_render(state.config.render_timeout, move || {
        Ok(render_html(&normalize(&record), &theme))
    })
    .await?;

    info!(template, format = "html", bytes = html.len(), "Resume rendered");
    Ok(Html(html))
}

/// POST /api/v1/resumes/render/pdf
pub async fn handle_render_pdf(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Result<Response, AppError> {
    let (record, theme) = req.prepare(&state.config.theme_defaults)?;
    let template = theme.template.as_str();
    let filename = download_filename(&record);

    let pdf = run_render(state.config.render_timeout, move || {
        Ok(render_pdf(&normalize(&record), &theme)?)
    })
    .await?;

    info!(template, format = "pdf", bytes = pdf.len(), %filename, "Resume rendered");
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        Bytes::from(pdf),
    )
        .into_response())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
