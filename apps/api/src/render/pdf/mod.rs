//! PDF renderers, one module per template, plus the layout pieces they share.
//!
//! A renderer only issues drawing operations against a `Surface`; creating
//! the surface and turning it into bytes is the caller's job (see
//! `render::render_pdf`). Text is measured with the base-font tables so
//! wrapping, right alignment and accent bars line up without a layout engine.

pub mod bold;
pub mod classic;
pub mod metrics;
pub mod minimal;
pub mod modern;
pub mod professional;
pub mod surface;
pub mod writer;

use crate::models::resume::{
    CertificationItem, EducationItem, ExperienceItem, PersonalInfo, ProjectItem,
};
use crate::render::format::{date_range, format_date_short, Rgb};
use crate::render::pdf::metrics::FontFace;
use crate::render::pdf::surface::{Align, Position, Surface, TextStyle, ASCENT, CONTENT_WIDTH, MARGIN};

// ────────────────────────────────────────────────────────────────────────────
// Palette (Tailwind grays used by the HTML stylesheets)
// ────────────────────────────────────────────────────────────────────────────

pub(crate) const GRAY_900: Rgb = Rgb::new(17, 24, 39);
pub(crate) const GRAY_800: Rgb = Rgb::new(31, 41, 55);
pub(crate) const GRAY_700: Rgb = Rgb::new(55, 65, 81);
pub(crate) const GRAY_500: Rgb = Rgb::new(107, 114, 128);
pub(crate) const GRAY_400: Rgb = Rgb::new(156, 163, 175);
pub(crate) const GRAY_300: Rgb = Rgb::new(209, 213, 219);

pub(crate) const BAR_WIDTH: f32 = 3.0;

// ────────────────────────────────────────────────────────────────────────────
// Columns
// ────────────────────────────────────────────────────────────────────────────

/// Horizontal band a block of content is laid out in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Column {
    pub x: f32,
    pub width: f32,
}

impl Column {
    pub const FULL: Column = Column {
        x: MARGIN,
        width: CONTENT_WIDTH,
    };

    pub fn inset(self, by: f32) -> Column {
        Column {
            x: self.x + by,
            width: (self.width - by).max(0.0),
        }
    }
}

/// The deeper of two positions (later page wins, then larger y).
pub(crate) fn lowest(a: Position, b: Position) -> Position {
    if (b.page, b.y) > (a.page, a.y) {
        b
    } else {
        a
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Entries
// ────────────────────────────────────────────────────────────────────────────

/// `label value` line under an entry; the label is set in bold inline.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Detail {
    pub label: &'static str,
    pub value: String,
}

impl Detail {
    fn new(label: &'static str, value: &str) -> Option<Detail> {
        (!value.is_empty()).then(|| Detail {
            label,
            value: value.to_string(),
        })
    }
}

/// A timeline entry (experience, education, certification or project).
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Entry<'a> {
    pub title: &'a str,
    pub subtitle: String,
    pub date: String,
    pub details: Vec<Detail>,
    pub description: &'a str,
    pub tags: &'a [String],
}

impl<'a> Entry<'a> {
    pub fn experience(exp: &'a ExperienceItem) -> Self {
        Self {
            title: &exp.position,
            subtitle: exp.company.clone(),
            date: date_range(&exp.start_date_display, &exp.end_date_display, exp.is_current),
            details: Vec::new(),
            description: &exp.description,
            tags: &[],
        }
    }

    /// `graduated_label` prefixes the date as a detail line instead of a date column.
    pub fn education(edu: &'a EducationItem, graduated_label: bool) -> Self {
        let short = format_date_short(&edu.graduation_date_display);
        let (date, mut details) = if graduated_label {
            (String::new(), Detail::new("Graduated: ", &short).into_iter().collect())
        } else {
            (short, Vec::new())
        };
        details.extend(Detail::new("GPA: ", &edu.gpa));
        Self {
            title: &edu.degree,
            subtitle: edu.institution_line(),
            date,
            details,
            description: "",
            tags: &[],
        }
    }

    pub fn certification(cert: &'a CertificationItem) -> Self {
        let details = [
            Detail::new("ID: ", &cert.credential_id),
            Detail::new("View Credential: ", &cert.credential_url),
        ]
        .into_iter()
        .flatten()
        .collect();
        Self {
            title: &cert.name,
            subtitle: cert.issuer.clone(),
            date: cert.date_line(),
            details,
            description: "",
            tags: &[],
        }
    }

    pub fn project(proj: &'a ProjectItem) -> Self {
        Self {
            title: &proj.name,
            subtitle: String::new(),
            date: String::new(),
            details: Vec::new(),
            description: &proj.description,
            tags: &proj.technologies,
        }
    }
}

/// Chip look for tag lists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ChipLook {
    pub size: f32,
    pub text: Rgb,
    pub fill: Option<Rgb>,
    pub border: Option<Rgb>,
}

/// How a template draws its entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct EntryLook {
    pub title: TextStyle,
    pub subtitle: TextStyle,
    pub date: TextStyle,
    pub detail: TextStyle,
    pub body: TextStyle,
    /// Text inset from the column edge (room for the accent bar).
    pub indent: f32,
    /// Extra inset of the description block.
    pub body_indent: f32,
    /// Accent bar along the left edge, drawn after the text.
    pub bar: Option<Rgb>,
    /// Right-aligned date on the title line; otherwise the date gets its own line.
    pub date_beside_title: bool,
    pub chips: ChipLook,
    /// Space after the entry.
    pub gap: f32,
}

/// Writes one entry into `col` and leaves the cursor below it at the column edge.
pub(crate) fn write_entry(s: &mut Surface, col: Column, entry: &Entry<'_>, look: &EntryLook) {
    let inner = col.inset(look.indent);
    s.ensure_space(look.title.line_height() * 2.0);
    let start = s.position();
    s.set_x(inner.x);

    let date_inline = look.date_beside_title && !entry.date.is_empty() && !entry.title.is_empty();
    if date_inline {
        let date_width = s.measure(&entry.date, look.date.face, look.date.size);
        let y = s.y() + (look.title.size - look.date.size) * ASCENT;
        s.text_at(
            inner.x,
            y,
            &entry.date,
            look.date.width(inner.width).align(Align::Right),
        );
        s.write_text(
            entry.title,
            look.title.width((inner.width - date_width - 8.0).max(look.title.size)),
        );
    } else {
        s.write_text(entry.title, look.title.width(inner.width));
    }

    if !entry.subtitle.is_empty() {
        s.write_text(&entry.subtitle, look.subtitle.width(inner.width));
    }
    if !date_inline && !entry.date.is_empty() {
        s.write_text(&entry.date, look.date.width(inner.width));
    }

    for detail in &entry.details {
        let label = TextStyle {
            face: FontFace::Bold,
            ..look.detail
        };
        s.write_text(detail.label, label.continued());
        s.write_text(&detail.value, look.detail.width(inner.width));
    }

    if !entry.description.is_empty() {
        s.advance(2.0);
        let body = inner.inset(look.body_indent);
        s.set_x(body.x);
        s.write_text(entry.description, look.body.width(body.width));
        s.set_x(inner.x);
    }

    if !entry.tags.is_empty() {
        s.advance(3.0);
        draw_chips(s, inner, entry.tags, &look.chips);
    }

    let end = s.position();
    if let Some(color) = look.bar {
        s.fill_bar(col.x, BAR_WIDTH, start, end, color);
    }
    s.set_x(col.x);
    s.advance(look.gap);
}

/// Flows `items` as chips across `col`, wrapping to new rows.
pub(crate) fn draw_chips(s: &mut Surface, col: Column, items: &[String], look: &ChipLook) {
    let style = TextStyle::regular(look.size, look.text);
    let pad_x = look.size * 0.6;
    let pad_y = look.size * 0.3;
    let height = style.line_height() + 2.0 * pad_y;
    let gap = 4.0;

    let mut x = col.x;
    s.ensure_space(height);
    for item in items.iter().filter(|i| !i.is_empty()) {
        let width = (s.measure(item, FontFace::Regular, look.size) + 2.0 * pad_x).min(col.width);
        if x > col.x && x + width > col.x + col.width {
            x = col.x;
            s.advance(height + gap);
            s.ensure_space(height);
        }
        let y = s.y();
        if let Some(fill) = look.fill {
            s.fill_rect(x, y, width, height, fill);
        }
        if let Some(border) = look.border {
            stroke_box(s, x, y, width, height, border);
        }
        s.text_at(x + pad_x, y + pad_y, item, style);
        x += width + gap;
    }
    s.advance(height);
}

/// Rectangle outline on the current page.
pub(crate) fn stroke_box(s: &mut Surface, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
    let (right, bottom) = (x + width, y + height);
    s.stroke_line((x, y), (right, y), 0.75, color);
    s.stroke_line((right, y), (right, bottom), 0.75, color);
    s.stroke_line((right, bottom), (x, bottom), 0.75, color);
    s.stroke_line((x, bottom), (x, y), 0.75, color);
}

// ────────────────────────────────────────────────────────────────────────────
// Header pieces
// ────────────────────────────────────────────────────────────────────────────

/// Contact fields in display order, empty ones skipped.
pub(crate) fn contact_parts(info: &PersonalInfo) -> Vec<String> {
    let birth = format_date_short(&info.birth_date_display);
    let parts: [&str; 7] = [
        &birth,
        &info.gender,
        &info.email,
        &info.phone,
        &info.location,
        &info.website,
        &info.language,
    ];
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn contact_line(info: &PersonalInfo) -> String {
    contact_parts(info).join("  |  ")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
