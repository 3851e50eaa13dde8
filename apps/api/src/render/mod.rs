//! Resume rendering engine.
//!
//! Raw records go through [`normalize::normalize`] into a [`CanonicalResume`];
//! [`dispatch::dispatch`] picks the template's renderers; HTML comes back as
//! a string and PDF as bytes via the drawing surface and [`pdf::writer`].
//! Rendering is synchronous and touches no shared state, so callers may run
//! any number of renders in parallel.

pub mod dispatch;
pub mod format;
pub mod handlers;
pub mod html;
pub mod normalize;
pub mod pdf;
pub mod theme;

use thiserror::Error;
use tracing::debug;

use crate::models::resume::CanonicalResume;
use crate::render::format::resolve_pdf_base_font;
use crate::render::pdf::surface::Surface;
use crate::render::theme::Theme;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF generation failed: {0}")]
    Pdf(String),
}

/// Complete HTML document for `resume` in the theme's template.
pub fn render_html(resume: &CanonicalResume, theme: &Theme) -> String {
    let html = (dispatch::dispatch(theme.template.as_str()).html)(resume, theme);
    debug!(
        template = theme.template.as_str(),
        bytes = html.len(),
        "Rendered HTML"
    );
    html
}

/// Records the template's drawing operations without producing bytes.
pub fn draw_pdf(resume: &CanonicalResume, theme: &Theme) -> Surface {
    let mut surface = Surface::new(resolve_pdf_base_font(&theme.font_key));
    (dispatch::dispatch(theme.template.as_str()).pdf)(resume, theme, &mut surface);
    surface
}

/// PDF document for `resume` in the theme's template.
pub fn render_pdf(resume: &CanonicalResume, theme: &Theme) -> Result<Vec<u8>, RenderError> {
    let surface = draw_pdf(resume, theme);
    let title = match resume.personal_info.full_name.as_str() {
        "" => "Resume",
        name => name,
    };
    let bytes = pdf::writer::write_pdf(&surface, title)?;
    debug!(
        template = theme.template.as_str(),
        font = surface.base_font().as_str(),
        pages = surface.page_count(),
        bytes = bytes.len(),
        "Rendered PDF"
    );
    Ok(bytes)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
