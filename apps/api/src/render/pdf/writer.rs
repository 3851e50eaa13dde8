//! Materializes a recorded `Surface` into PDF bytes with `printpdf`.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use printpdf::lopdf::{self, Object, StringFormat};
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, CustomPdfConformance, IndirectFontRef, Line, Mm, OffsetDateTime, PdfConformance,
    PdfDocument, PdfLayerReference, Point, Polygon,
};
use tracing::debug;

use crate::render::format::{BaseFont, Rgb};
use crate::render::pdf::metrics::FontFace;
use crate::render::pdf::surface::{DrawOp, Surface, PAGE_HEIGHT, PAGE_WIDTH};
use crate::render::RenderError;

const PT_TO_MM: f32 = 0.352_777_78;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn get(&self, face: FontFace) -> &IndirectFontRef {
        match face {
            FontFace::Regular => &self.regular,
            FontFace::Bold => &self.bold,
        }
    }
}

fn mm(pt: f32) -> Mm {
    Mm(pt * PT_TO_MM)
}

/// Surface coordinates are top-left based; PDF user space starts bottom-left.
fn point(x: f32, y: f32) -> Point {
    Point::new(mm(x), mm(PAGE_HEIGHT - y))
}

fn pdf_color(color: Rgb) -> printpdf::Color {
    printpdf::Color::Rgb(printpdf::Rgb::new(
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
        None,
    ))
}

fn pdf_err(e: impl std::fmt::Display) -> RenderError {
    RenderError::Pdf(e.to_string())
}

/// Stable 32-hex-digit file identifier: same title and drawing, same id.
fn document_id(surface: &Surface, title: &str) -> String {
    let fingerprint = format!("{title}\n{:?}\n{:?}", surface.base_font(), surface.ops());
    let half = |salt: u8| {
        let mut hasher = DefaultHasher::new();
        salt.hash(&mut hasher);
        fingerprint.hash(&mut hasher);
        hasher.finish()
    };
    format!("{:016x}{:016x}", half(0), half(1))
}

/// Replaces the trailer `/ID` pair, which printpdf fills with a fresh value per save.
fn stamp_trailer_id(raw: &[u8], id: &str) -> Result<Vec<u8>, RenderError> {
    let mut doc = lopdf::Document::load_mem(raw).map_err(pdf_err)?;
    let id = Object::String(id.as_bytes().to_vec(), StringFormat::Literal);
    doc.trailer.set("ID", Object::Array(vec![id.clone(), id]));
    let mut buf = Vec::new();
    doc.save_to(&mut buf).map_err(pdf_err)?;
    Ok(buf)
}

/// Writes every page of `surface` and returns the finished document.
///
/// Output is a pure function of the surface and title: dates are pinned to
/// the Unix epoch, XMP metadata is off and the file id is content-derived.
pub fn write_pdf(surface: &Surface, title: &str) -> Result<Vec<u8>, RenderError> {
    let page_count = surface
        .ops()
        .iter()
        .map(|op| op.page() + 1)
        .max()
        .unwrap_or(1)
        .max(surface.page_count());

    let id = document_id(surface, title);
    let (doc, page1, layer1) =
        PdfDocument::new(title, mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "Layer 1");
    let doc = doc
        .with_conformance(PdfConformance::Custom(CustomPdfConformance {
            requires_xmp_metadata: false,
            requires_icc_profile: false,
            allows_default_fonts: true,
            ..Default::default()
        }))
        .with_document_id(id.clone())
        .with_creation_date(OffsetDateTime::UNIX_EPOCH)
        .with_mod_date(OffsetDateTime::UNIX_EPOCH)
        .with_metadata_date(OffsetDateTime::UNIX_EPOCH);

    let (regular, bold) = match surface.base_font() {
        BaseFont::Helvetica => (BuiltinFont::Helvetica, BuiltinFont::HelveticaBold),
        BaseFont::TimesRoman => (BuiltinFont::TimesRoman, BuiltinFont::TimesBold),
    };
    let fonts = Fonts {
        regular: doc.add_builtin_font(regular).map_err(pdf_err)?,
        bold: doc.add_builtin_font(bold).map_err(pdf_err)?,
    };

    let mut layers = vec![doc.get_page(page1).get_layer(layer1)];
    for _ in 1..page_count {
        let (page, layer) = doc.add_page(mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "Layer 1");
        layers.push(doc.get_page(page).get_layer(layer));
    }

    for op in surface.ops() {
        if let Some(layer) = layers.get(op.page()) {
            draw_op(layer, op, &fonts);
        }
    }

    let raw = doc.save_to_bytes().map_err(pdf_err)?;
    let buf = stamp_trailer_id(&raw, &id)?;

    debug!(pages = page_count, bytes = buf.len(), "PDF written");
    Ok(buf)
}

fn draw_op(layer: &PdfLayerReference, op: &DrawOp, fonts: &Fonts) {
    match op {
        DrawOp::FillRect {
            x,
            y,
            width,
            height,
            color,
            ..
        } => {
            layer.set_fill_color(pdf_color(*color));
            let points = vec![
                (point(*x, *y), false),
                (point(x + width, *y), false),
                (point(x + width, y + height), false),
                (point(*x, y + height), false),
            ];
            layer.add_polygon(Polygon {
                rings: vec![points],
                mode: PaintMode::Fill,
                winding_order: WindingOrder::NonZero,
            });
        }
        DrawOp::StrokeLine {
            from,
            to,
            thickness,
            color,
            ..
        } => {
            layer.set_outline_color(pdf_color(*color));
            layer.set_outline_thickness(*thickness);
            layer.add_line(Line {
                points: vec![(point(from.0, from.1), false), (point(to.0, to.1), false)],
                is_closed: false,
            });
        }
        DrawOp::Text {
            x,
            y,
            text,
            face,
            size,
            color,
            ..
        } => {
            layer.set_fill_color(pdf_color(*color));
            layer.use_text(text.as_str(), *size, mm(*x), mm(PAGE_HEIGHT - y), fonts.get(*face));
        }
    }
}
