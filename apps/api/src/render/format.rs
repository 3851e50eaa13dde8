//! Shared formatting helpers used by both the HTML and PDF renderers.
//!
//! Everything here is total: bad input resolves to an empty string or a
//! documented default, never an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Text escaping
// ────────────────────────────────────────────────────────────────────────────

/// Replaces `& < > " '` with HTML entities.
///
/// Not idempotent: escaping twice double-escapes, so callers escape exactly
/// once per output position.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes `text` and turns every `\n` into a `<br>` element.
pub fn format_text_with_line_breaks(text: &str) -> String {
    escape_html(text).replace('\n', "<br>")
}

// ────────────────────────────────────────────────────────────────────────────
// Dates
// ────────────────────────────────────────────────────────────────────────────

/// Display conventions produced by the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateFormat {
    /// `DD/MM/YYYY`, used for the birth date.
    DayMonthYear,
    /// `MM/YYYY`, used for every timeline date.
    MonthYear,
}

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parses an ISO-like date string. Timestamps with an offset are read in UTC.
pub(crate) fn parse_date(input: &str) -> Option<NaiveDate> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }

    const DATETIME_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
    ];
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    // Year precision ("2019") means January 1st.
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        return s.parse().ok().and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1));
    }

    // Month precision ("2024-03") means the first of the month.
    NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").ok()
}

/// Renders a calendar date in the requested display convention.
pub fn format_date(date: NaiveDate, format: DateFormat) -> String {
    match format {
        DateFormat::DayMonthYear => date.format("%d/%m/%Y").to_string(),
        DateFormat::MonthYear => date.format("%m/%Y").to_string(),
    }
}

/// Formats an ISO-like date string for display. Unparseable input yields `""`.
pub fn format_date_for_display(input: &str, format: DateFormat) -> String {
    parse_date(input)
        .map(|d| format_date(d, format))
        .unwrap_or_default()
}

/// Formats a Unix timestamp in milliseconds (UTC).
pub fn format_timestamp_millis(millis: i64, format: DateFormat) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| format_date(dt.date_naive(), format))
        .unwrap_or_default()
}

/// Turns `MM/YYYY` into `Mon YYYY` (e.g. `Jan 2024`).
///
/// Anything that is not two `/`-separated parts with a month in `1..=12`
/// passes through unchanged, including full `DD/MM/YYYY` dates.
pub fn format_date_short(date: &str) -> String {
    let parts: Vec<&str> = date.split('/').collect();
    if let [month, year] = parts.as_slice() {
        if let Ok(m) = month.trim().parse::<usize>() {
            if (1..=12).contains(&m) {
                return format!("{} {}", MONTH_NAMES[m - 1], year);
            }
        }
    }
    date.to_string()
}

/// `"<start> - <Present|end>"` as shown in every experience entry.
pub fn date_range(start: &str, end: &str, is_current: bool) -> String {
    let start = if start.is_empty() {
        String::new()
    } else {
        format_date_short(start)
    };
    let end = if is_current {
        "Present".to_string()
    } else if end.is_empty() {
        String::new()
    } else {
        format_date_short(end)
    };
    format!("{start} - {end}")
}

// ────────────────────────────────────────────────────────────────────────────
// Fonts
// ────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_FONT_KEY: &str = "inter";

const FONT_STACKS: &[(&str, &str)] = &[
    ("times", "Times New Roman, serif"),
    ("inter", "Inter, system-ui, sans-serif"),
    ("georgia", "Georgia, serif"),
    ("arial", "Arial, Helvetica, sans-serif"),
    ("roboto", "Roboto, sans-serif"),
    ("poppins", "Poppins, sans-serif"),
    ("mulish", "Mulish, sans-serif"),
    ("helvetica", "Helvetica Neue, Helvetica, Arial, sans-serif"),
    (
        "calibri",
        "Calibri, Candara, Segoe, Segoe UI, Optima, Arial, sans-serif",
    ),
    (
        "garamond",
        "Garamond, Baskerville, Baskerville Old Face, Hoefler Text, Times New Roman, serif",
    ),
    ("cambria", "Cambria, Georgia, serif"),
    ("nunito", "Nunito, sans-serif"),
    ("montserrat", "Montserrat, sans-serif"),
];

/// Returns true when `key` names a known font (case-insensitive).
pub fn is_known_font(key: &str) -> bool {
    let key = key.trim().to_lowercase();
    FONT_STACKS.iter().any(|(k, _)| *k == key)
}

/// Maps a font key to a CSS font stack. Unknown keys get the Inter stack.
pub fn resolve_font_family(key: &str) -> &'static str {
    let key = key.trim().to_lowercase();
    FONT_STACKS
        .iter()
        .find(|(k, _)| *k == key)
        .or_else(|| FONT_STACKS.iter().find(|(k, _)| *k == DEFAULT_FONT_KEY))
        .map(|(_, stack)| *stack)
        .unwrap_or("sans-serif")
}

/// The two standard PDF families the PDF path can use without embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseFont {
    Helvetica,
    TimesRoman,
}

impl BaseFont {
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseFont::Helvetica => "Helvetica",
            BaseFont::TimesRoman => "Times-Roman",
        }
    }
}

const SERIF_KEYS: &[&str] = &["times", "georgia", "garamond", "cambria"];

/// Collapses a font key to Times-Roman (serif keys) or Helvetica (everything else).
pub fn resolve_pdf_base_font(key: &str) -> BaseFont {
    let key = key.trim().to_lowercase();
    if SERIF_KEYS.contains(&key.as_str()) {
        BaseFont::TimesRoman
    } else {
        BaseFont::Helvetica
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Colors
// ────────────────────────────────────────────────────────────────────────────

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// `#RRGGBB`, uppercase.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Fallback for unparseable colors: `#3B82F6`.
pub const DEFAULT_ACCENT_RGB: Rgb = Rgb::new(59, 130, 246);

/// Parses exactly six hex digits, with or without a leading `#`.
pub(crate) fn parse_hex(hex: &str) -> Option<Rgb> {
    let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Parses a hex color, falling back to `(59, 130, 246)`.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    parse_hex(hex).unwrap_or(DEFAULT_ACCENT_RGB)
}

/// Composites `fg` at `alpha` opacity over an opaque `bg`.
pub fn blend(fg: Rgb, bg: Rgb, alpha: f32) -> Rgb {
    let a = alpha.clamp(0.0, 1.0);
    let mix = |f: u8, b: u8| (f as f32 * a + b as f32 * (1.0 - a)).round() as u8;
    Rgb::new(mix(fg.r, bg.r), mix(fg.g, bg.g), mix(fg.b, bg.b))
}

/// Perceived brightness on a 0..=255 scale (Rec. 601 weights).
pub fn luminance(color: Rgb) -> f32 {
    0.299 * color.r as f32 + 0.587 * color.g as f32 + 0.114 * color.b as f32
}

/// PDF stand-in for CSS alpha suffixes such as `#3B82F633`.
pub fn blend_with_white(color: Rgb, alpha: f32) -> Rgb {
    blend(color, Rgb::WHITE, alpha)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── escape_html ─────────────────────────────────────────────────────────

    #[test]
    fn test_escape_html_all_special_characters() {
        assert_eq!(escape_html("<a>&\"'"), "&lt;a&gt;&amp;&quot;&#039;");
    }

    #[test]
    fn test_escape_html_empty_and_plain() {
        assert_eq!(escape_html(""), "");
        assert_eq!(escape_html("Nguyễn Văn A"), "Nguyễn Văn A");
    }

    #[test]
    fn test_escape_html_is_not_idempotent() {
        let once = escape_html("&");
        assert_eq!(escape_html(&once), "&amp;amp;");
    }

    #[test]
    fn test_line_breaks_escape_first() {
        assert_eq!(
            format_text_with_line_breaks("a<b\nc"),
            "a&lt;b<br>c",
            "escaping must happen before <br> insertion"
        );
        assert_eq!(format_text_with_line_breaks(""), "");
    }

    // ── format_date_for_display ─────────────────────────────────────────────

    #[test]
    fn test_format_date_rfc3339_day_month_year() {
        assert_eq!(
            format_date_for_display("2024-03-15T00:00:00Z", DateFormat::DayMonthYear),
            "15/03/2024"
        );
    }

    #[test]
    fn test_format_date_plain_month_year() {
        assert_eq!(
            format_date_for_display("2024-03-15", DateFormat::MonthYear),
            "03/2024"
        );
    }

    #[test]
    fn test_format_date_offset_is_read_in_utc() {
        assert_eq!(
            format_date_for_display("2024-03-15T23:30:00-02:00", DateFormat::DayMonthYear),
            "16/03/2024"
        );
    }

    #[test]
    fn test_format_date_variants() {
        assert_eq!(
            format_date_for_display("2021-07-01T08:00:00.000", DateFormat::MonthYear),
            "07/2021"
        );
        assert_eq!(
            format_date_for_display("2021-07", DateFormat::MonthYear),
            "07/2021"
        );
        assert_eq!(
            format_date_for_display("2021/07/09", DateFormat::DayMonthYear),
            "09/07/2021"
        );
    }

    #[test]
    fn test_format_date_year_only_is_january() {
        assert_eq!(format_date_for_display("2019", DateFormat::MonthYear), "01/2019");
        assert_eq!(format_date_for_display(" 2019 ", DateFormat::DayMonthYear), "01/01/2019");
        assert_eq!(format_date_for_display("19", DateFormat::MonthYear), "");
    }

    #[test]
    fn test_format_date_unparseable_is_empty() {
        assert_eq!(format_date_for_display("", DateFormat::MonthYear), "");
        assert_eq!(format_date_for_display("yesterday", DateFormat::MonthYear), "");
        assert_eq!(format_date_for_display("2024-13-40", DateFormat::MonthYear), "");
    }

    #[test]
    fn test_format_timestamp_millis() {
        // 2024-03-15T00:00:00Z
        assert_eq!(
            format_timestamp_millis(1_710_460_800_000, DateFormat::DayMonthYear),
            "15/03/2024"
        );
    }

    // ── format_date_short ───────────────────────────────────────────────────

    #[test]
    fn test_format_date_short_valid() {
        assert_eq!(format_date_short("03/2024"), "Mar 2024");
        assert_eq!(format_date_short("12/1999"), "Dec 1999");
    }

    #[test]
    fn test_format_date_short_passthrough() {
        assert_eq!(format_date_short("13/2024"), "13/2024");
        assert_eq!(format_date_short("00/2024"), "00/2024");
        assert_eq!(format_date_short(""), "");
        assert_eq!(format_date_short("15/03/2024"), "15/03/2024");
        assert_eq!(format_date_short("spring"), "spring");
    }

    #[test]
    fn test_date_range_current_and_missing() {
        assert_eq!(date_range("01/2022", "", true), "Jan 2022 - Present");
        assert_eq!(date_range("01/2022", "06/2023", false), "Jan 2022 - Jun 2023");
        assert_eq!(date_range("", "", false), " - ");
    }

    // ── fonts ───────────────────────────────────────────────────────────────

    #[test]
    fn test_resolve_font_family_known_and_case() {
        assert_eq!(resolve_font_family("Georgia"), "Georgia, serif");
        assert_eq!(resolve_font_family("roboto"), "Roboto, sans-serif");
    }

    #[test]
    fn test_resolve_font_family_unknown_falls_back_to_inter() {
        assert_eq!(resolve_font_family("comic-sans"), "Inter, system-ui, sans-serif");
        assert_eq!(resolve_font_family(""), "Inter, system-ui, sans-serif");
    }

    #[test]
    fn test_resolve_pdf_base_font_two_way_split() {
        for key in ["times", "Georgia", "garamond", "CAMBRIA"] {
            assert_eq!(resolve_pdf_base_font(key), BaseFont::TimesRoman, "{key}");
        }
        for key in ["inter", "arial", "roboto", "unknown", ""] {
            assert_eq!(resolve_pdf_base_font(key), BaseFont::Helvetica, "{key}");
        }
        assert_eq!(BaseFont::TimesRoman.as_str(), "Times-Roman");
    }

    // ── colors ──────────────────────────────────────────────────────────────

    #[test]
    fn test_hex_to_rgb_with_and_without_hash() {
        assert_eq!(hex_to_rgb("#10B981"), Rgb::new(16, 185, 129));
        assert_eq!(hex_to_rgb("ff0000"), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_hex_to_rgb_invalid_falls_back() {
        for bad in ["", "#fff", "#GGGGGG", "#3B82F6AA", "blue"] {
            assert_eq!(hex_to_rgb(bad), Rgb::new(59, 130, 246), "{bad}");
        }
    }

    #[test]
    fn test_blend_with_white_endpoints() {
        let c = Rgb::new(59, 130, 246);
        assert_eq!(blend_with_white(c, 1.0), c);
        assert_eq!(blend_with_white(c, 0.0), Rgb::WHITE);
        assert_eq!(blend_with_white(Rgb::new(0, 0, 0), 0.5), Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_blend_over_dark_background() {
        let dark = Rgb::new(17, 24, 39);
        let out = blend(Rgb::new(255, 255, 255), dark, 0.2);
        assert!(out.r > dark.r && out.r < 255);
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(Rgb::new(59, 130, 246).to_hex(), "#3B82F6");
    }
}
