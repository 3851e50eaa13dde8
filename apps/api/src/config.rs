use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::render::theme::ThemeOptions;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_RENDER_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Deadline for a single render, owned by the HTTP layer.
    pub render_timeout: Duration,
    pub max_body_bytes: usize,
    /// Service-wide theme defaults, consulted after the request and the record.
    pub theme_defaults: ThemeOptions,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            render_timeout: Duration::from_millis(DEFAULT_RENDER_TIMEOUT_MS),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            theme_defaults: ThemeOptions::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", DEFAULT_PORT)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            render_timeout: Duration::from_millis(parse_env(
                "RENDER_TIMEOUT_MS",
                DEFAULT_RENDER_TIMEOUT_MS,
            )?),
            max_body_bytes: parse_env("MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?,
            theme_defaults: ThemeOptions {
                template: optional_env("DEFAULT_TEMPLATE"),
                accent_color: optional_env("DEFAULT_ACCENT_COLOR"),
                font_family: optional_env("DEFAULT_FONT_FAMILY"),
            },
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
