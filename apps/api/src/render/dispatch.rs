//! Maps a template identifier to its HTML and PDF renderers.

use std::fmt;

use crate::models::resume::CanonicalResume;
use crate::render::pdf::surface::Surface;
use crate::render::theme::{TemplateKind, Theme};
use crate::render::{html, pdf};

pub type HtmlRenderer = fn(&CanonicalResume, &Theme) -> String;
pub type PdfRenderer = fn(&CanonicalResume, &Theme, &mut Surface);

/// The two renderers of one template. Pairs compare by template.
#[derive(Clone, Copy)]
pub struct RendererPair {
    pub kind: TemplateKind,
    pub html: HtmlRenderer,
    pub pdf: PdfRenderer,
}

impl PartialEq for RendererPair {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for RendererPair {}

impl fmt::Debug for RendererPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RendererPair").field("kind", &self.kind).finish()
    }
}

fn for_kind(kind: TemplateKind) -> RendererPair {
    let (html, pdf): (HtmlRenderer, PdfRenderer) = match kind {
        TemplateKind::Classic => (html::classic::render, pdf::classic::render),
        TemplateKind::Modern => (html::modern::render, pdf::modern::render),
        TemplateKind::Minimal => (html::minimal::render, pdf::minimal::render),
        TemplateKind::Bold => (html::bold::render, pdf::bold::render),
        TemplateKind::Professional => (html::professional::render, pdf::professional::render),
    };
    RendererPair { kind, html, pdf }
}

/// Renderer pair for `template_id`; unknown ids get the classic pair.
pub fn dispatch(template_id: &str) -> RendererPair {
    for_kind(TemplateKind::from_id(template_id))
}
