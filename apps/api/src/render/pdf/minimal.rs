//! Minimal: centered light header, divider-led summary across the page, then
//! two equal columns with uppercase accent headings and no rules or bars.

use crate::models::resume::CanonicalResume;
use crate::render::format::{blend_with_white, Rgb};
use crate::render::pdf::surface::{Align, Surface, TextStyle, MARGIN, PAGE_WIDTH};
use crate::render::pdf::{
    contact_line, lowest, write_entry, ChipLook, Column, Entry, EntryLook, GRAY_400,
    GRAY_500, GRAY_700, GRAY_900,
};
use crate::render::theme::Theme;

const LEFT: Column = Column {
    x: MARGIN,
    width: 225.0,
};
const RIGHT: Column = Column {
    x: MARGIN + 270.0,
    width: 225.0,
};

fn heading(s: &mut Surface, col: Column, title: &str, accent: Rgb) {
    s.ensure_space(40.0);
    s.set_x(col.x);
    s.write_text(
        &title.to_uppercase(),
        TextStyle::regular(11.0, accent).width(col.width),
    );
    s.advance(10.0);
}

fn entry_look(accent: Rgb) -> EntryLook {
    EntryLook {
        title: TextStyle::bold(11.0, GRAY_900),
        subtitle: TextStyle::regular(9.5, GRAY_500),
        date: TextStyle::regular(8.5, GRAY_400),
        detail: TextStyle::regular(8.5, accent),
        body: TextStyle::regular(9.5, GRAY_700).line_gap(2.0),
        indent: 0.0,
        body_indent: 0.0,
        bar: None,
        date_beside_title: true,
        chips: ChipLook {
            size: 8.0,
            text: accent,
            fill: Some(blend_with_white(accent, 0.0625)),
            border: None,
        },
        gap: 14.0,
    }
}

fn left_column(s: &mut Surface, resume: &CanonicalResume, look: &EntryLook, accent: Rgb) {
    if !resume.experience.is_empty() {
        heading(s, LEFT, "Experience", accent);
        for exp in &resume.experience {
            write_entry(s, LEFT, &Entry::experience(exp), look);
        }
        s.advance(8.0);
    }

    if !resume.education.is_empty() {
        heading(s, LEFT, "Education", accent);
        for edu in &resume.education {
            write_entry(s, LEFT, &Entry::education(edu, false), look);
        }
        s.advance(8.0);
    }

    if !resume.certification.is_empty() {
        heading(s, LEFT, "Certifications", accent);
        for cert in &resume.certification {
            write_entry(s, LEFT, &Entry::certification(cert), look);
        }
    }
}

fn right_column(s: &mut Surface, resume: &CanonicalResume, look: &EntryLook, accent: Rgb) {
    if !resume.skills.is_empty() {
        heading(s, RIGHT, "Skills", accent);
        let style = TextStyle::regular(10.0, GRAY_700).width(RIGHT.width).line_gap(3.0);
        for skill in resume.skills.iter().filter(|skill| !skill.is_empty()) {
            s.write_text(skill, style);
        }
        s.advance(16.0);
    }

    if !resume.project.is_empty() {
        heading(s, RIGHT, "Projects", accent);
        for proj in &resume.project {
            write_entry(s, RIGHT, &Entry::project(proj), look);
        }
    }
}

pub fn render(resume: &CanonicalResume, theme: &Theme, s: &mut Surface) {
    let accent = theme.accent_rgb();
    let col = Column::FULL;
    let info = &resume.personal_info;
    let centered = |style: TextStyle| style.width(col.width).align(Align::Center);

    s.move_to(col.x, MARGIN);
    s.write_text(&info.full_name, centered(TextStyle::regular(24.0, GRAY_900)));
    if !info.profession.is_empty() {
        s.advance(2.0);
        s.write_text(&info.profession, centered(TextStyle::regular(13.0, GRAY_500)));
    }
    let contact = contact_line(info);
    if !contact.is_empty() {
        s.advance(8.0);
        s.write_text(&contact, centered(TextStyle::regular(9.0, GRAY_500)));
    }
    s.advance(28.0);

    if !resume.summary.is_empty() {
        let y = s.y();
        let mid = PAGE_WIDTH / 2.0;
        s.stroke_line((mid - 24.0, y), (mid + 24.0, y), 1.0, accent);
        s.advance(20.0);
        s.write_text(
            &resume.summary,
            TextStyle::regular(11.0, GRAY_700).width(col.width).line_gap(3.0),
        );
        s.advance(24.0);
    }

    let look = entry_look(accent);
    let origin = s.position();
    left_column(s, resume, &look, accent);
    let left_end = s.position();

    s.seek(origin);
    s.set_x(RIGHT.x);
    right_column(s, resume, &look, accent);
    let right_end = s.position();

    s.seek(lowest(left_end, right_end));
    s.set_x(MARGIN);
}
