//! Professional: solid accent header band, contact bar over a tinted rule,
//! single column with small uppercase section labels.

use crate::models::resume::CanonicalResume;
use crate::render::format::{blend_with_white, Rgb};
use crate::render::pdf::surface::{Surface, TextStyle, PAGE_WIDTH};
use crate::render::pdf::{
    contact_line, draw_chips, write_entry, ChipLook, Column, Entry, EntryLook, GRAY_500, GRAY_700,
    GRAY_900,
};
use crate::render::theme::Theme;

const BAND_PAD: f32 = 32.0;

fn heading(s: &mut Surface, title: &str, accent: Rgb) {
    let col = Column::FULL;
    s.ensure_space(40.0);
    s.set_x(col.x);
    s.write_text(
        &title.to_uppercase(),
        TextStyle::bold(10.0, accent).width(col.width),
    );
    s.advance(8.0);
}

fn entry_look(accent: Rgb) -> EntryLook {
    EntryLook {
        title: TextStyle::bold(12.0, GRAY_900),
        subtitle: TextStyle::regular(11.0, GRAY_700),
        date: TextStyle::regular(9.0, GRAY_500),
        detail: TextStyle::regular(9.0, GRAY_500),
        body: TextStyle::regular(9.5, GRAY_700).line_gap(2.0),
        indent: 0.0,
        body_indent: 0.0,
        bar: None,
        date_beside_title: true,
        chips: ChipLook {
            size: 8.5,
            text: accent,
            fill: None,
            border: Some(blend_with_white(accent, 0.5)),
        },
        gap: 14.0,
    }
}

fn header(s: &mut Surface, resume: &CanonicalResume, accent: Rgb) {
    let info = &resume.personal_info;
    let col = Column::FULL;
    let name = TextStyle::bold(24.0, Rgb::WHITE).width(col.width);
    let profession = TextStyle::regular(13.0, Rgb::WHITE).width(col.width);

    s.move_to(col.x, BAND_PAD);
    let mut height = BAND_PAD + s.height_of(&info.full_name, &name) + BAND_PAD;
    if !info.profession.is_empty() {
        height += 4.0 + s.height_of(&info.profession, &profession);
    }
    s.fill_rect(0.0, 0.0, PAGE_WIDTH, height, accent);

    s.write_text(&info.full_name, name);
    if !info.profession.is_empty() {
        s.advance(4.0);
        s.write_text(&info.profession, profession);
    }

    s.move_to(col.x, height + 20.0);
    let contact = contact_line(info);
    if !contact.is_empty() {
        s.write_text(&contact, TextStyle::regular(9.5, GRAY_900).width(col.width));
        s.advance(12.0);
        let y = s.y();
        s.stroke_line(
            (col.x, y),
            (col.x + col.width, y),
            2.0,
            blend_with_white(accent, 0.25),
        );
        s.advance(20.0);
    }
}

pub fn render(resume: &CanonicalResume, theme: &Theme, s: &mut Surface) {
    let accent = theme.accent_rgb();
    let col = Column::FULL;
    header(s, resume, accent);

    if !resume.summary.is_empty() {
        heading(s, "Professional Summary", accent);
        s.write_text(
            &resume.summary,
            TextStyle::regular(10.5, GRAY_700).width(col.width).line_gap(3.0),
        );
        s.advance(18.0);
    }

    let look = entry_look(accent);

    if !resume.experience.is_empty() {
        heading(s, "Professional Experience", accent);
        for exp in &resume.experience {
            write_entry(s, col, &Entry::experience(exp), &look);
        }
        s.advance(6.0);
    }

    if !resume.education.is_empty() {
        heading(s, "Education", accent);
        for edu in &resume.education {
            write_entry(s, col, &Entry::education(edu, true), &look);
        }
        s.advance(6.0);
    }

    if !resume.certification.is_empty() {
        heading(s, "Certifications", accent);
        for cert in &resume.certification {
            write_entry(s, col, &Entry::certification(cert), &look);
        }
        s.advance(6.0);
    }

    if !resume.project.is_empty() {
        heading(s, "Projects", accent);
        let project_look = EntryLook {
            indent: 14.0,
            bar: Some(blend_with_white(accent, 0.5)),
            ..look
        };
        for proj in &resume.project {
            write_entry(s, col, &Entry::project(proj), &project_look);
        }
        s.advance(6.0);
    }

    if !resume.skills.is_empty() {
        heading(s, "Technical Skills", accent);
        draw_chips(
            s,
            col,
            &resume.skills,
            &ChipLook {
                size: 9.5,
                text: accent,
                fill: None,
                border: Some(accent),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::html::fixtures::{acme_engineer, full, name_only};
    use crate::render::pdf::surface::DrawOp;
    use crate::render::pdf::test_support::{draw, joined_text};
    use crate::render::pdf::BAR_WIDTH;

    fn baseline(surface: &Surface, needle: &str) -> f32 {
        surface
            .ops()
            .iter()
            .find_map(|op| match op {
                DrawOp::Text { text, y, .. } if text == needle => Some(*y),
                _ => None,
            })
            .unwrap_or_else(|| panic!("no text run {needle:?}"))
    }

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
    fn test_header_band_and_labels() {
        let theme = Theme::new(Default::default(), "#0F766E", "inter");
        let surface = draw(render, &full(), &theme);
        assert!(matches!(
            &surface.ops()[0],
            DrawOp::FillRect { x, y, width, color, .. }
                if (*x, *y, *width) == (0.0, 0.0, PAGE_WIDTH) && *color == Rgb::new(15, 118, 110)
        ));
        let text = joined_text(&surface);
        assert!(text.contains("PROFESSIONAL EXPERIENCE"));
        assert!(text.contains("TECHNICAL SKILLS"));
        assert_eq!(baseline(&surface, "Graduated: "), baseline(&surface, "Jun 2019"));
    }

    #[test]
    fn test_only_projects_carry_bars() {
        let surface = draw(render, &full(), &Theme::default());
        let bars: Vec<usize> = surface
            .ops()
            .iter()
            .enumerate()
            .filter(|(_, op)| matches!(op, DrawOp::FillRect { width, .. } if *width == BAR_WIDTH))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(bars.len(), 1, "one project, one bar");
        let forge = surface
            .ops()
            .iter()
            .position(|op| matches!(op, DrawOp::Text { text, .. } if text == "Forge"))
            .expect("project title");
        assert!(bars[0] > forge);
    }
}
