//! Bold: every page filled dark before anything else, oversized name, light
//! text throughout, accent bars on experience and project entries.

use crate::models::resume::CanonicalResume;
use crate::render::format::{blend, luminance, Rgb};
use crate::render::pdf::surface::{Surface, TextStyle, MARGIN};
use crate::render::pdf::{
    contact_line, draw_chips, stroke_box, write_entry, ChipLook, Column, Entry, EntryLook,
    GRAY_300, GRAY_400, GRAY_500, GRAY_700, GRAY_800, GRAY_900,
};
use crate::render::theme::Theme;

const BACKGROUND: Rgb = GRAY_900;
const MIN_ACCENT_CONTRAST: f32 = 80.0;

/// The theme accent, lifted toward white when it would sink into the dark fill.
fn legible_accent(accent: Rgb) -> Rgb {
    if luminance(accent) - luminance(BACKGROUND) >= MIN_ACCENT_CONTRAST {
        accent
    } else {
        blend(accent, Rgb::WHITE, 0.4)
    }
}

fn heading(s: &mut Surface, title: &str, accent: Rgb) {
    let col = Column::FULL;
    s.ensure_space(52.0);
    let y = s.y();
    s.fill_rect(col.x, y + 5.0, 7.0, 7.0, accent);
    s.set_x(col.x + 14.0);
    s.write_text(
        &title.to_uppercase(),
        TextStyle::bold(18.0, Rgb::WHITE).width(col.width - 14.0),
    );
    s.set_x(col.x);
    s.advance(12.0);
}

fn chips(accent: Rgb, size: f32) -> ChipLook {
    ChipLook {
        size,
        text: accent,
        fill: Some(blend(accent, BACKGROUND, 0.125)),
        border: None,
    }
}

fn timeline_look(accent: Rgb) -> EntryLook {
    EntryLook {
        title: TextStyle::bold(14.0, Rgb::WHITE),
        subtitle: TextStyle::regular(11.0, GRAY_400),
        date: TextStyle::regular(9.0, GRAY_500),
        detail: TextStyle::regular(9.0, GRAY_500),
        body: TextStyle::regular(10.0, GRAY_300).line_gap(2.0),
        indent: 14.0,
        body_indent: 18.0,
        bar: Some(accent),
        date_beside_title: false,
        chips: chips(accent, 8.0),
        gap: 16.0,
    }
}

fn record_look(accent: Rgb) -> EntryLook {
    EntryLook {
        title: TextStyle::bold(12.0, Rgb::WHITE),
        subtitle: TextStyle::regular(10.0, GRAY_400),
        date: TextStyle::regular(8.5, GRAY_500),
        detail: TextStyle::regular(8.5, GRAY_500),
        body: TextStyle::regular(9.5, GRAY_300),
        indent: 0.0,
        body_indent: 0.0,
        bar: None,
        date_beside_title: false,
        chips: chips(accent, 8.0),
        gap: 12.0,
    }
}

fn contact_bar(s: &mut Surface, contact: &str) {
    let col = Column::FULL;
    let pad = 14.0;
    let style = TextStyle::regular(9.5, GRAY_300).width(col.width - 2.0 * pad);
    s.set_x(col.x + pad);
    let height = s.height_of(contact, &style) + 2.0 * pad;
    s.ensure_space(height);
    let y = s.y();
    s.fill_rect(col.x, y, col.width, height, GRAY_800);
    stroke_box(s, col.x, y, col.width, height, GRAY_700);
    s.advance(pad);
    s.write_text(contact, style);
    s.set_x(col.x);
    s.advance(pad + 16.0);
}

pub fn render(resume: &CanonicalResume, theme: &Theme, s: &mut Surface) {
    s.set_page_background(BACKGROUND);

    let accent = legible_accent(theme.accent_rgb());
    let col = Column::FULL;
    let info = &resume.personal_info;

    s.move_to(col.x, MARGIN);
    if !info.profession.is_empty() {
        s.write_text(
            &info.profession.to_uppercase(),
            TextStyle::regular(10.0, accent).width(col.width),
        );
        s.advance(4.0);
    }
    s.write_text(&info.full_name, TextStyle::bold(34.0, Rgb::WHITE).width(col.width));
    s.advance(14.0);

    let contact = contact_line(info);
    if !contact.is_empty() {
        contact_bar(s, &contact);
    }

    if !resume.summary.is_empty() {
        s.write_text(
            &resume.summary,
            TextStyle::regular(12.0, GRAY_300).width(col.width).line_gap(3.0),
        );
        s.advance(28.0);
    }

    let timeline = timeline_look(accent);
    let record = record_look(accent);

    if !resume.experience.is_empty() {
        heading(s, "Experience", accent);
        for exp in &resume.experience {
            write_entry(s, col, &Entry::experience(exp), &timeline);
        }
        s.advance(8.0);
    }

    if !resume.education.is_empty() {
        heading(s, "Education", accent);
        for edu in &resume.education {
            write_entry(s, col, &Entry::education(edu, false), &record);
        }
        s.advance(8.0);
    }

    if !resume.certification.is_empty() {
        heading(s, "Certifications", accent);
        for cert in &resume.certification {
            write_entry(s, col, &Entry::certification(cert), &record);
        }
        s.advance(8.0);
    }

    if !resume.project.is_empty() {
        heading(s, "Projects", accent);
        for proj in &resume.project {
            write_entry(s, col, &Entry::project(proj), &timeline);
        }
        s.advance(8.0);
    }

    if !resume.skills.is_empty() {
        heading(s, "Skills", accent);
        draw_chips(s, col, &resume.skills, &chips(accent, 10.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ExperienceItem;
    use crate::render::html::fixtures::{acme_engineer, full, name_only};
    use crate::render::pdf::surface::{DrawOp, PAGE_WIDTH};
    use crate::render::pdf::test_support::{draw, joined_text};

    #[test]
    fn test_name_only_draws_just_the_name() {
        let surface = draw(render, &name_only(), &Theme::default());
        assert_eq!(surface.text_runs(), vec!["Nguyen Van A"]);
    }

    #[test]
    fn test_position_before_company_and_present() {
        let surface = draw(render, &acme_engineer(), &Theme::default());
        let runs = surface.text_runs();
        let engineer = runs.iter().position(|t| *t == "Engineer").expect("position");
        let acme = runs.iter().position(|t| *t == "Acme").expect("company");
        assert!(engineer < acme);
        assert!(runs.contains(&"Jan 2022 - Present"));
    }

    #[test]
    fn test_background_precedes_text_on_every_page() {
        let mut resume = full();
        let item = resume.experience[0].clone();
        resume.experience = (0..30)
            .map(|i| ExperienceItem {
                description: format!("Role {i}. Led the platform team through two migrations."),
                ..item.clone()
            })
            .collect();
        let surface = draw(render, &resume, &Theme::default());
        assert!(surface.page_count() >= 2);
        for page in 0..surface.page_count() {
            let first = surface
                .ops()
                .iter()
                .find(|op| op.page() == page)
                .expect("page has ops");
            assert!(
                matches!(first, DrawOp::FillRect { width, color, .. }
                    if *width == PAGE_WIDTH && *color == BACKGROUND),
                "page {page} starts with {first:?}"
            );
        }
    }

    #[test]
    fn test_text_is_light_on_dark() {
        let surface = draw(render, &full(), &Theme::default());
        for op in surface.ops() {
            if let DrawOp::Text { text, color, .. } = op {
                assert!(
                    luminance(*color) > luminance(BACKGROUND) + 60.0,
                    "{text:?} drawn in low-contrast {color:?}"
                );
            }
        }
    }

    #[test]
    fn test_dark_accent_is_lifted_for_text() {
        let theme = Theme::new(Default::default(), "#111827", "inter");
        let surface = draw(render, &full(), &theme);
        for op in surface.ops() {
            if let DrawOp::Text { text, color, .. } = op {
                assert!(
                    luminance(*color) > luminance(BACKGROUND) + 60.0,
                    "{text:?} drawn in low-contrast {color:?}"
                );
            }
        }
        let bright = Rgb::new(59, 130, 246);
        assert_eq!(legible_accent(bright), bright);
    }

    #[test]
    fn test_uppercase_headings_in_fixed_order() {
        let text = joined_text(&draw(render, &full(), &Theme::default()));
        let offsets: Vec<usize> = ["EXPERIENCE", "EDUCATION", "CERTIFICATIONS", "PROJECTS", "SKILLS"]
            .iter()
            .map(|h| text.find(h).unwrap_or_else(|| panic!("missing {h}")))
            .collect();
        assert!(offsets.windows(2).all(|w| w[0] < w[1]), "{offsets:?}");
        assert!(text.starts_with("BACKEND ENGINEER\nTran <Thi> B"));
    }
}
