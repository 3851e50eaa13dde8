use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::render::format::{hex_to_rgb, is_known_font, parse_hex, Rgb, DEFAULT_FONT_KEY};

pub const DEFAULT_ACCENT_COLOR: &str = "#3B82F6";

/// The five visual designs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    #[default]
    Classic,
    Modern,
    Minimal,
    Bold,
    Professional,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 5] = [
        TemplateKind::Classic,
        TemplateKind::Modern,
        TemplateKind::Minimal,
        TemplateKind::Bold,
        TemplateKind::Professional,
    ];

    /// Strict lookup, case-insensitive. `minimal-image` is a legacy alias of `minimal`.
    pub fn parse(id: &str) -> Option<Self> {
        match id.trim().to_lowercase().as_str() {
            "classic" => Some(TemplateKind::Classic),
            "modern" => Some(TemplateKind::Modern),
            "minimal" | "minimal-image" => Some(TemplateKind::Minimal),
            "bold" => Some(TemplateKind::Bold),
            "professional" => Some(TemplateKind::Professional),
            _ => None,
        }
    }

    /// Lenient lookup: anything unknown is `Classic`.
    pub fn from_id(id: &str) -> Self {
        Self::parse(id).unwrap_or_else(|| {
            debug!(template = id, "Unknown template id, using classic");
            TemplateKind::Classic
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Classic => "classic",
            TemplateKind::Modern => "modern",
            TemplateKind::Minimal => "minimal",
            TemplateKind::Bold => "bold",
            TemplateKind::Professional => "professional",
        }
    }
}

/// Theme customizing one render: template, accent color and font key.
///
/// Construct through [`Theme::new`] / [`ThemeOptions::resolve`] so the accent
/// is always a bare `#RRGGBB` value (CSS alpha suffixes are appended to it)
/// and the font key is lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub template: TemplateKind,
    pub accent_color: String,
    pub font_key: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            template: TemplateKind::Classic,
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            font_key: DEFAULT_FONT_KEY.to_string(),
        }
    }
}

impl Theme {
    pub fn new(template: TemplateKind, accent_color: &str, font_key: &str) -> Self {
        let accent_color = match parse_hex(accent_color) {
            Some(rgb) => rgb.to_hex(),
            None => {
                debug!(accent_color, "Invalid accent color, using default");
                DEFAULT_ACCENT_COLOR.to_string()
            }
        };
        let font_key = match font_key.trim() {
            "" => DEFAULT_FONT_KEY.to_string(),
            key => key.to_lowercase(),
        };
        Self {
            template,
            accent_color,
            font_key,
        }
    }

    /// Accent color as RGB, resolved once per render.
    pub fn accent_rgb(&self) -> Rgb {
        hex_to_rgb(&self.accent_color)
    }
}

/// Optional theme fields as they arrive from a request, a stored record or config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeOptions {
    pub template: Option<String>,
    pub accent_color: Option<String>,
    pub font_family: Option<String>,
}

impl ThemeOptions {
    /// Reads the theme fields stored on a resume record.
    pub fn from_record(raw: &Value) -> Self {
        let field = |key: &str| {
            raw.get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        Self {
            template: field("template"),
            accent_color: field("accentColor"),
            font_family: field("fontFamily"),
        }
    }

    /// Field-wise fallback: values set on `self` win over `other`.
    ///
    /// A value only wins when it is usable (known template, valid color,
    /// known font); otherwise the next layer is consulted.
    pub fn or(self, other: ThemeOptions) -> ThemeOptions {
        ThemeOptions {
            template: self
                .template
                .filter(|t| TemplateKind::parse(t).is_some())
                .or(other.template),
            accent_color: self
                .accent_color
                .filter(|c| parse_hex(c).is_some())
                .or(other.accent_color),
            font_family: self
                .font_family
                .filter(|f| is_known_font(f))
                .or(other.font_family),
        }
    }

    /// Resolves to a concrete theme; absent or unusable values take the built-in defaults.
    pub fn resolve(&self) -> Theme {
        let template = self
            .template
            .as_deref()
            .map(TemplateKind::from_id)
            .unwrap_or_default();
        Theme::new(
            template,
            self.accent_color.as_deref().unwrap_or(DEFAULT_ACCENT_COLOR),
            self.font_family.as_deref().unwrap_or(DEFAULT_FONT_KEY),
        )
    }
}
