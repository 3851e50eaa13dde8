//! Stateful page-drawing surface the PDF templates write to.
//!
//! Coordinates are points with a top-left origin and y growing downwards,
//! matching how the templates reason about vertical flow. The surface only
//! records a display list; `writer::write_pdf` turns it into bytes. One
//! surface per render, never shared.

use serde::Serialize;

use crate::render::format::{BaseFont, Rgb};
use crate::render::pdf::metrics::{font_table, FontFace};

// ────────────────────────────────────────────────────────────────────────────
// Page geometry (A4, 50pt margins)
// ────────────────────────────────────────────────────────────────────────────

pub const PAGE_WIDTH: f32 = 595.28;
pub const PAGE_HEIGHT: f32 = 841.89;
pub const MARGIN: f32 = 50.0;
/// Full-width column between the left and right margins.
pub const CONTENT_WIDTH: f32 = 495.0;

/// Baseline offset from the top of a text line, as a fraction of the font size.
pub const ASCENT: f32 = 0.8;
const LINE_HEIGHT: f32 = 1.25;

// ────────────────────────────────────────────────────────────────────────────
// Display list
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// One recorded drawing operation. `page` is zero-based.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawOp {
    FillRect {
        page: usize,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
    },
    StrokeLine {
        page: usize,
        from: (f32, f32),
        to: (f32, f32),
        thickness: f32,
        color: Rgb,
    },
    /// `y` is the baseline.
    Text {
        page: usize,
        x: f32,
        y: f32,
        text: String,
        face: FontFace,
        size: f32,
        color: Rgb,
    },
}

impl DrawOp {
    pub fn page(&self) -> usize {
        match self {
            DrawOp::FillRect { page, .. }
            | DrawOp::StrokeLine { page, .. }
            | DrawOp::Text { page, .. } => *page,
        }
    }
}

/// A vertical location that survives page breaks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub page: usize,
    pub y: f32,
}

// ────────────────────────────────────────────────────────────────────────────
// Text options
// ────────────────────────────────────────────────────────────────────────────

/// Options for one `write_text` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub face: FontFace,
    pub size: f32,
    pub color: Rgb,
    /// Wrap width; `None` means "to the right margin".
    pub width: Option<f32>,
    pub align: Align,
    /// Inline mode: no wrapping, no line break, the next write continues on the same line.
    pub continued: bool,
    /// Extra space after each line.
    pub line_gap: f32,
}

impl TextStyle {
    pub fn regular(size: f32, color: Rgb) -> Self {
        Self {
            face: FontFace::Regular,
            size,
            color,
            width: None,
            align: Align::Left,
            continued: false,
            line_gap: 0.0,
        }
    }

    pub fn bold(size: f32, color: Rgb) -> Self {
        Self {
            face: FontFace::Bold,
            ..Self::regular(size, color)
        }
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn continued(mut self) -> Self {
        self.continued = true;
        self
    }

    pub fn line_gap(mut self, gap: f32) -> Self {
        self.line_gap = gap;
        self
    }

    pub fn line_height(&self) -> f32 {
        self.size * LINE_HEIGHT + self.line_gap
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Surface
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Surface {
    base: BaseFont,
    ops: Vec<DrawOp>,
    page_count: usize,
    page: usize,
    x: f32,
    y: f32,
    /// Width already used by an unfinished inline run.
    run_offset: f32,
    background: Option<Rgb>,
}

impl Surface {
    /// A single blank A4 page with the cursor at the top-left margin.
    pub fn new(base: BaseFont) -> Self {
        Self {
            base,
            ops: Vec::new(),
            page_count: 1,
            page: 0,
            x: MARGIN,
            y: MARGIN,
            run_offset: 0.0,
            background: None,
        }
    }

    pub fn base_font(&self) -> BaseFont {
        self.base
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn position(&self) -> Position {
        Position {
            page: self.page,
            y: self.y,
        }
    }

    // ── cursor ──────────────────────────────────────────────────────────────

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.run_offset = 0.0;
    }

    pub fn set_x(&mut self, x: f32) {
        self.x = x;
        self.run_offset = 0.0;
    }

    /// Moves the cursor down by `dy` points. Never breaks the page by itself.
    pub fn advance(&mut self, dy: f32) {
        self.y += dy;
    }

    /// Returns to a previously captured position (used by column layouts).
    pub fn seek(&mut self, position: Position) {
        self.page = position.page.min(self.page_count - 1);
        self.y = position.y;
        self.run_offset = 0.0;
    }

    /// Starts a new page when fewer than `height` points remain above the bottom margin.
    pub fn ensure_space(&mut self, height: f32) {
        if self.y + height > PAGE_HEIGHT - MARGIN && self.y > MARGIN {
            self.next_page();
        }
    }

    fn next_page(&mut self) {
        self.page += 1;
        if self.page == self.page_count {
            self.page_count += 1;
            if let Some(color) = self.background {
                self.paint_background(self.page, color);
            }
        }
        self.y = MARGIN;
        self.run_offset = 0.0;
    }

    // ── shapes ──────────────────────────────────────────────────────────────

    /// Fills every page, current and future, with `color` underneath all other drawing.
    pub fn set_page_background(&mut self, color: Rgb) {
        self.background = Some(color);
        for page in (0..self.page_count).rev() {
            self.ops.insert(
                0,
                DrawOp::FillRect {
                    page,
                    x: 0.0,
                    y: 0.0,
                    width: PAGE_WIDTH,
                    height: PAGE_HEIGHT,
                    color,
                },
            );
        }
    }

    fn paint_background(&mut self, page: usize, color: Rgb) {
        self.ops.push(DrawOp::FillRect {
            page,
            x: 0.0,
            y: 0.0,
            width: PAGE_WIDTH,
            height: PAGE_HEIGHT,
            color,
        });
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.ops.push(DrawOp::FillRect {
            page: self.page,
            x,
            y,
            width,
            height,
            color,
        });
    }

    pub fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), thickness: f32, color: Rgb) {
        self.ops.push(DrawOp::StrokeLine {
            page: self.page,
            from,
            to,
            thickness,
            color,
        });
    }

    /// Vertical bar at `x` covering `from..to`, split across every page in between.
    pub fn fill_bar(&mut self, x: f32, width: f32, from: Position, to: Position, color: Rgb) {
        for page in from.page..=to.page.max(from.page) {
            let top = if page == from.page { from.y } else { MARGIN };
            let bottom = if page == to.page {
                to.y
            } else {
                PAGE_HEIGHT - MARGIN
            };
            if bottom > top {
                self.ops.push(DrawOp::FillRect {
                    page,
                    x,
                    y: top,
                    width,
                    height: bottom - top,
                    color,
                });
            }
        }
    }

    // ── text ────────────────────────────────────────────────────────────────

    /// Width of `text` on a single line in points.
    pub fn measure(&self, text: &str, face: FontFace, size: f32) -> f32 {
        font_table(self.base, face).measure(text, size)
    }

    /// Lines `text` wraps into at the style's width starting from the cursor.
    pub fn wrap(&self, text: &str, style: &TextStyle) -> Vec<String> {
        font_table(self.base, style.face).wrap(text, style.size, self.wrap_width(style))
    }

    /// Vertical extent `write_text` would consume for `text`.
    pub fn height_of(&self, text: &str, style: &TextStyle) -> f32 {
        self.wrap(text, style).len() as f32 * style.line_height()
    }

    fn wrap_width(&self, style: &TextStyle) -> f32 {
        style
            .width
            .unwrap_or(PAGE_WIDTH - MARGIN - self.x)
            .max(style.size)
    }

    /// Writes `text` at the cursor, wrapping and paginating as needed.
    ///
    /// Regular writes leave the cursor below the last line. Continued writes
    /// stay on the current line; the next regular write finishes that line
    /// when it fits, otherwise it wraps onto the lines below.
    pub fn write_text(&mut self, text: &str, style: TextStyle) {
        if style.continued {
            self.write_inline(text, &style);
            return;
        }

        if self.run_offset > 0.0 {
            let room = self.wrap_width(&style) - self.run_offset;
            let fits = self.measure(&text.replace('\n', " "), style.face, style.size) <= room;
            if fits {
                self.write_inline(text, &style);
            }
            self.run_offset = 0.0;
            self.y += style.line_height();
            if fits {
                return;
            }
        }

        let width = self.wrap_width(&style);
        let lines = self.wrap(text, &style);
        for line in lines {
            self.ensure_space(style.line_height());
            if !line.is_empty() {
                let line_width = self.measure(&line, style.face, style.size);
                let x = match style.align {
                    Align::Left => self.x,
                    Align::Center => self.x + (width - line_width).max(0.0) / 2.0,
                    Align::Right => self.x + (width - line_width).max(0.0),
                };
                self.push_text(x, line, &style);
            }
            self.y += style.line_height();
        }
    }

    fn write_inline(&mut self, text: &str, style: &TextStyle) {
        let text = text.replace('\n', " ");
        if text.is_empty() {
            return;
        }
        if self.run_offset == 0.0 {
            self.ensure_space(style.line_height());
        }
        let x = self.x + self.run_offset;
        self.run_offset += self.measure(&text, style.face, style.size);
        self.push_text(x, text, style);
    }

    fn push_text(&mut self, x: f32, text: String, style: &TextStyle) {
        self.ops.push(DrawOp::Text {
            page: self.page,
            x,
            y: self.y + style.size * ASCENT,
            text,
            face: style.face,
            size: style.size,
            color: style.color,
        });
    }

    /// Single line at an absolute position; the cursor does not move.
    pub fn text_at(&mut self, x: f32, y: f32, text: &str, style: TextStyle) {
        if text.is_empty() {
            return;
        }
        let line = text.replace('\n', " ");
        let x = match style.align {
            Align::Left => x,
            Align::Right | Align::Center => {
                let line_width = self.measure(&line, style.face, style.size);
                let width = style.width.unwrap_or(line_width);
                if style.align == Align::Right {
                    x + (width - line_width).max(0.0)
                } else {
                    x + (width - line_width).max(0.0) / 2.0
                }
            }
        };
        self.ops.push(DrawOp::Text {
            page: self.page,
            x,
            y: y + style.size * ASCENT,
            text: line,
            face: style.face,
            size: style.size,
            color: style.color,
        });
    }

    /// All text runs in drawing order, for assertions and debugging.
    pub fn text_runs(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb = Rgb::new(0, 0, 0);

    // ── cursor and text ─────────────────────────────────────────────────────

    #[test]
    fn test_write_text_advances_cursor_per_line() {
        let mut s = Surface::new(BaseFont::Helvetica);
        let style = TextStyle::regular(10.0, BLACK);
        s.write_text("one\ntwo", style);
        assert_eq!(s.text_runs(), vec!["one", "two"]);
        assert!((s.y() - (MARGIN + 2.0 * style.line_height())).abs() < 1e-3);
    }

    #[test]
    fn test_height_of_matches_write_text() {
        let mut s = Surface::new(BaseFont::TimesRoman);
        let style = TextStyle::regular(9.0, BLACK).width(120.0);
        let text = "A fairly long description that has to wrap over several lines of a narrow column";
        let expected = s.height_of(text, &style);
        let before = s.y();
        s.write_text(text, style);
        assert!((s.y() - before - expected).abs() < 1e-3);
    }

    #[test]
    fn test_continued_text_stays_on_one_line() {
        let mut s = Surface::new(BaseFont::Helvetica);
        let bold = TextStyle::bold(10.0, BLACK);
        let regular = TextStyle::regular(10.0, BLACK);
        s.write_text("Engineer", bold.continued());
        s.write_text(" | Acme", regular);

        let texts: Vec<(f32, f32)> = s
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { x, y, .. } => Some((*x, *y)),
                _ => None,
            })
            .collect();
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[0].1, texts[1].1, "inline runs share a baseline");
        assert!(texts[1].0 > texts[0].0);
        assert!((s.y() - (MARGIN + regular.line_height())).abs() < 1e-3);
    }

    #[test]
    fn test_continued_run_wraps_when_remainder_overflows() {
        let mut s = Surface::new(BaseFont::Helvetica);
        let width = 160.0;
        let label = TextStyle::bold(8.5, BLACK);
        let value = TextStyle::regular(8.5, BLACK).width(width);
        s.write_text("View Credential: ", label.continued());
        s.write_text(
            "https://www.credly.com/badges/0f8c2a5e-7d3b-4c1a-9e6f-2b8d4a7c9e10/public_url",
            value,
        );

        for op in s.ops() {
            if let DrawOp::Text { x, text, face, size, .. } = op {
                let end = x + s.measure(text, *face, *size);
                assert!(end <= MARGIN + width + 1e-3, "{text:?} ends at {end}");
            }
        }
        assert!(s.text_runs().len() >= 3, "label line plus wrapped value lines");
        assert_eq!(s.text_runs()[0], "View Credential: ");
    }

    #[test]
    fn test_right_aligned_text_ends_at_column_edge() {
        let mut s = Surface::new(BaseFont::Helvetica);
        let style = TextStyle::regular(10.0, BLACK).width(200.0).align(Align::Right);
        s.write_text("Jan 2022 - Present", style);
        let DrawOp::Text { x, text, .. } = &s.ops()[0] else {
            panic!("expected a text op");
        };
        let end = x + s.measure(text, FontFace::Regular, 10.0);
        assert!((end - (MARGIN + 200.0)).abs() < 1e-3);
    }

    #[test]
    fn test_empty_text_draws_nothing() {
        let mut s = Surface::new(BaseFont::Helvetica);
        s.write_text("", TextStyle::regular(10.0, BLACK));
        s.text_at(MARGIN, MARGIN, "", TextStyle::regular(10.0, BLACK));
        assert!(s.ops().is_empty());
        assert_eq!(s.y(), MARGIN);
    }

    // ── pagination ──────────────────────────────────────────────────────────

    #[test]
    fn test_overflow_starts_new_page() {
        let mut s = Surface::new(BaseFont::Helvetica);
        let style = TextStyle::regular(12.0, BLACK);
        let text = vec!["line"; 80].join("\n");
        s.write_text(&text, style);
        assert!(s.page_count() >= 2, "80 lines of 12pt must overflow one A4 page");
        for op in s.ops() {
            if let DrawOp::Text { y, .. } = op {
                assert!(*y <= PAGE_HEIGHT - MARGIN, "text below bottom margin at {y}");
            }
        }
    }

    #[test]
    fn test_background_covers_every_page_first() {
        let mut s = Surface::new(BaseFont::Helvetica);
        let dark = Rgb::new(17, 24, 39);
        s.set_page_background(dark);
        s.write_text(&vec!["x"; 90].join("\n"), TextStyle::regular(12.0, Rgb::WHITE));

        for page in 0..s.page_count() {
            let first = s
                .ops()
                .iter()
                .find(|op| op.page() == page)
                .expect("every page has ops");
            assert!(
                matches!(first, DrawOp::FillRect { width, color, .. } if *width == PAGE_WIDTH && *color == dark),
                "page {page} must start with the background fill"
            );
        }
    }

    #[test]
    fn test_seek_returns_to_earlier_page() {
        let mut s = Surface::new(BaseFont::Helvetica);
        let origin = s.position();
        s.write_text(&vec!["x"; 90].join("\n"), TextStyle::regular(12.0, BLACK));
        assert!(s.position().page > 0);
        s.seek(origin);
        assert_eq!(s.position(), origin);
        s.write_text("right column", TextStyle::regular(12.0, BLACK));
        assert_eq!(s.ops().last().map(DrawOp::page), Some(0));
    }

    #[test]
    fn test_fill_bar_spans_pages() {
        let mut s = Surface::new(BaseFont::Helvetica);
        let from = Position { page: 0, y: 700.0 };
        let to = Position { page: 1, y: 120.0 };
        s.fill_bar(MARGIN, 3.0, from, to, BLACK);
        assert_eq!(s.ops().len(), 2);
        assert_eq!(s.ops()[0].page(), 0);
        assert_eq!(s.ops()[1].page(), 1);
    }
}
