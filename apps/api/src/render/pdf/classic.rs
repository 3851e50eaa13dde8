//! Classic: centered header over an accent rule, one column of barred entries.

use crate::models::resume::CanonicalResume;
use crate::render::format::{blend_with_white, Rgb};
use crate::render::pdf::surface::{Align, Surface, TextStyle, MARGIN};
use crate::render::pdf::{
    contact_line, draw_chips, write_entry, ChipLook, Column, Entry, EntryLook, GRAY_500, GRAY_700,
    GRAY_900,
};
use crate::render::theme::Theme;

fn heading(s: &mut Surface, title: &str, accent: Rgb) {
    let col = Column::FULL;
    s.ensure_space(48.0);
    s.set_x(col.x);
    s.write_text(title, TextStyle::bold(14.0, accent).width(col.width));
    s.advance(2.0);
    let y = s.y();
    s.stroke_line(
        (col.x, y),
        (col.x + col.width, y),
        1.0,
        blend_with_white(accent, 0.2),
    );
    s.advance(8.0);
}

fn entry_look(accent: Rgb) -> EntryLook {
    EntryLook {
        title: TextStyle::bold(12.0, GRAY_900),
        subtitle: TextStyle::regular(11.0, GRAY_700),
        date: TextStyle::regular(9.0, GRAY_500),
        detail: TextStyle::regular(9.0, GRAY_500),
        body: TextStyle::regular(9.5, GRAY_700).line_gap(1.5),
        indent: 12.0,
        body_indent: 0.0,
        bar: Some(accent),
        date_beside_title: true,
        chips: ChipLook {
            size: 8.5,
            text: accent,
            fill: Some(blend_with_white(accent, 0.2)),
            border: None,
        },
        gap: 12.0,
    }
}

pub fn render(resume: &CanonicalResume, theme: &Theme, s: &mut Surface) {
    let accent = theme.accent_rgb();
    let col = Column::FULL;
    let info = &resume.personal_info;

    s.move_to(col.x, MARGIN);
    let centered = |style: TextStyle| style.width(col.width).align(Align::Center);
    s.write_text(&info.full_name, centered(TextStyle::bold(24.0, GRAY_900)));
    if !info.profession.is_empty() {
        s.advance(2.0);
        s.write_text(&info.profession, centered(TextStyle::regular(13.0, GRAY_700)));
    }
    let contact = contact_line(info);
    if !contact.is_empty() {
        s.advance(4.0);
        s.write_text(&contact, centered(TextStyle::regular(9.0, GRAY_500)));
    }
    s.advance(8.0);
    let y = s.y();
    s.stroke_line((col.x, y), (col.x + col.width, y), 2.0, accent);
    s.advance(18.0);

    if !resume.summary.is_empty() {
        heading(s, "Professional Summary", accent);
        s.write_text(
            &resume.summary,
            TextStyle::regular(10.5, GRAY_700).width(col.width).line_gap(2.0),
        );
        s.advance(14.0);
    }

    let look = entry_look(accent);

    if !resume.experience.is_empty() {
        heading(s, "Professional Experience", accent);
        for exp in &resume.experience {
            write_entry(s, col, &Entry::experience(exp), &look);
        }
        s.advance(4.0);
    }

    if !resume.education.is_empty() {
        heading(s, "Education", accent);
        for edu in &resume.education {
            write_entry(s, col, &Entry::education(edu, false), &look);
        }
        s.advance(4.0);
    }

    if !resume.certification.is_empty() {
        heading(s, "Certifications", accent);
        for cert in &resume.certification {
            write_entry(s, col, &Entry::certification(cert), &look);
        }
        s.advance(4.0);
    }

    if !resume.project.is_empty() {
        heading(s, "Projects", accent);
        for proj in &resume.project {
            write_entry(s, col, &Entry::project(proj), &look);
        }
        s.advance(4.0);
    }

    if !resume.skills.is_empty() {
        heading(s, "Skills", accent);
        draw_chips(
            s,
            col,
            &resume.skills,
            &ChipLook {
                size: 9.5,
                ..look.chips
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ExperienceItem;
    use crate::render::html::fixtures::{acme_engineer, full, name_only};
    use crate::render::pdf::surface::{DrawOp, PAGE_HEIGHT};
    use crate::render::pdf::test_support::{draw, joined_text};

    #[test]
    fn test_name_only_draws_just_the_name() {
        let surface = draw(render, &name_only(), &Theme::default());
        assert_eq!(surface.text_runs(), vec!["Nguyen Van A"]);
        assert_eq!(surface.page_count(), 1);
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
    fn test_section_order() {
        let text = joined_text(&draw(render, &full(), &Theme::default()));
        let order = [
            "Professional Summary",
            "Professional Experience",
            "Education",
            "Certifications",
            "Projects",
            "Skills",
        ];
        let offsets: Vec<usize> = order
            .iter()
            .map(|h| text.find(h).unwrap_or_else(|| panic!("missing {h}")))
            .collect();
        assert!(offsets.windows(2).all(|w| w[0] < w[1]), "{offsets:?}");
    }

    #[test]
    fn test_accent_bars_follow_entry_text() {
        let theme = Theme::new(Default::default(), "#FF0000", "inter");
        let surface = draw(render, &acme_engineer(), &theme);
        let ops = surface.ops();
        let bar = ops
            .iter()
            .position(|op| {
                matches!(op, DrawOp::FillRect { width, color, .. }
                    if *width == crate::render::pdf::BAR_WIDTH && *color == Rgb::new(255, 0, 0))
            })
            .expect("accent bar");
        let company = ops
            .iter()
            .position(|op| matches!(op, DrawOp::Text { text, .. } if text == "Acme"))
            .expect("company text");
        assert!(bar > company, "bar is drawn after the text it spans");
    }

    #[test]
    fn test_long_history_paginates_inside_margins() {
        let mut resume = acme_engineer();
        let item = resume.experience[0].clone();
        resume.experience = (0..25)
            .map(|i| ExperienceItem {
                description: format!("Entry {i}. Shipped features and fixed bugs across the stack."),
                ..item.clone()
            })
            .collect();
        let surface = draw(render, &resume, &Theme::default());
        assert!(surface.page_count() >= 2);
        for op in surface.ops() {
            if let DrawOp::Text { y, .. } = op {
                assert!(*y >= MARGIN && *y <= PAGE_HEIGHT - MARGIN, "text at {y}");
            }
        }
    }
}
