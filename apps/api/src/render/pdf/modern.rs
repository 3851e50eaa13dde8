//! Modern: stepped-gradient header band, then a wide main column beside a
//! narrow side column. Both columns start at the same point below the band.

use crate::models::resume::CanonicalResume;
use crate::render::format::{blend_with_white, Rgb};
use crate::render::pdf::surface::{Surface, TextStyle, MARGIN, PAGE_WIDTH};
use crate::render::pdf::{
    contact_line, draw_chips, lowest, stroke_box, write_entry, ChipLook, Column, Entry,
    EntryLook, GRAY_500, GRAY_700, GRAY_900,
};
use crate::render::theme::Theme;

const MAIN: Column = Column {
    x: MARGIN,
    width: 315.0,
};
const SIDE: Column = Column {
    x: MARGIN + 335.0,
    width: 160.0,
};

const GRADIENT_STEPS: usize = 8;
const HEADER_PAD: f32 = 32.0;

fn heading(s: &mut Surface, col: Column, title: &str, accent: Rgb) {
    s.ensure_space(44.0);
    let y = s.y();
    s.fill_rect(col.x, y, 3.0, 18.0, accent);
    s.set_x(col.x + 10.0);
    s.write_text(title, TextStyle::bold(16.0, GRAY_900).width(col.width - 10.0));
    s.set_x(col.x);
    s.advance(8.0);
}

fn chips(accent: Rgb, size: f32) -> ChipLook {
    ChipLook {
        size,
        text: accent,
        fill: Some(blend_with_white(accent, 0.125)),
        border: None,
    }
}

fn header(s: &mut Surface, resume: &CanonicalResume, accent: Rgb) {
    let info = &resume.personal_info;
    let col = Column::FULL;
    let name = TextStyle::bold(26.0, Rgb::WHITE).width(col.width);
    let profession = TextStyle::regular(13.0, Rgb::WHITE).width(col.width);
    let contact_style = TextStyle::regular(9.5, Rgb::WHITE).width(col.width);
    let contact = contact_line(info);

    s.move_to(col.x, HEADER_PAD);
    let mut height = HEADER_PAD + s.height_of(&info.full_name, &name);
    if !info.profession.is_empty() {
        height += 4.0 + s.height_of(&info.profession, &profession);
    }
    if !contact.is_empty() {
        height += 12.0 + s.height_of(&contact, &contact_style);
    }
    height += HEADER_PAD - 8.0;

    // Stepped approximation of the 135deg gradient towards 87% opacity.
    let step = PAGE_WIDTH / GRADIENT_STEPS as f32;
    for i in 0..GRADIENT_STEPS {
        let alpha = 1.0 - 0.13 * i as f32 / (GRADIENT_STEPS - 1) as f32;
        s.fill_rect(step * i as f32, 0.0, step + 0.5, height, blend_with_white(accent, alpha));
    }

    s.write_text(&info.full_name, name);
    if !info.profession.is_empty() {
        s.advance(4.0);
        s.write_text(&info.profession, profession);
    }
    if !contact.is_empty() {
        s.advance(12.0);
        s.write_text(&contact, contact_style);
    }
    s.move_to(col.x, height + 24.0);
}

fn main_column(s: &mut Surface, resume: &CanonicalResume, accent: Rgb) {
    if !resume.summary.is_empty() {
        heading(s, MAIN, "About Me", accent);
        s.write_text(
            &resume.summary,
            TextStyle::regular(10.5, GRAY_700).width(MAIN.width).line_gap(2.0),
        );
        s.advance(16.0);
    }

    if !resume.experience.is_empty() {
        heading(s, MAIN, "Experience", accent);
        let look = EntryLook {
            title: TextStyle::bold(13.0, GRAY_900),
            subtitle: TextStyle::bold(11.0, accent),
            date: TextStyle::regular(9.0, GRAY_500),
            detail: TextStyle::regular(9.0, GRAY_500),
            body: TextStyle::regular(9.5, GRAY_700).line_gap(1.5),
            indent: 14.0,
            body_indent: 0.0,
            bar: None,
            date_beside_title: true,
            chips: chips(accent, 8.5),
            gap: 14.0,
        };
        for exp in &resume.experience {
            s.ensure_space(look.title.line_height() * 2.0);
            let y = s.y();
            s.fill_rect(MAIN.x, y + 4.0, 6.0, 6.0, accent);
            write_entry(s, MAIN, &Entry::experience(exp), &look);
        }
        s.advance(4.0);
    }

    if !resume.project.is_empty() {
        heading(s, MAIN, "Projects", accent);
        let look = EntryLook {
            title: TextStyle::bold(13.0, GRAY_900),
            subtitle: TextStyle::regular(10.0, GRAY_700),
            date: TextStyle::regular(9.0, GRAY_500),
            detail: TextStyle::regular(9.0, GRAY_500),
            body: TextStyle::regular(9.5, GRAY_700).line_gap(1.5),
            indent: 0.0,
            body_indent: 0.0,
            bar: None,
            date_beside_title: false,
            chips: chips(accent, 8.5),
            gap: 0.0,
        };
        let border = blend_with_white(accent, 0.19);
        let inner = Column {
            x: MAIN.x + 12.0,
            width: MAIN.width - 24.0,
        };
        for proj in &resume.project {
            s.ensure_space(48.0);
            let start = s.position();
            s.advance(10.0);
            write_entry(s, inner, &Entry::project(proj), &look);
            s.advance(10.0);
            let end = s.position();
            if start.page == end.page {
                stroke_box(s, MAIN.x, start.y, MAIN.width, end.y - start.y, border);
            } else {
                s.fill_bar(MAIN.x, 0.75, start, end, border);
                s.fill_bar(MAIN.x + MAIN.width - 0.75, 0.75, start, end, border);
            }
            s.set_x(MAIN.x);
            s.advance(12.0);
        }
    }
}

fn side_column(s: &mut Surface, resume: &CanonicalResume, accent: Rgb) {
    let look = EntryLook {
        title: TextStyle::bold(11.0, GRAY_900),
        subtitle: TextStyle::regular(9.5, GRAY_700),
        date: TextStyle::regular(8.5, GRAY_500),
        detail: TextStyle::regular(8.5, accent),
        body: TextStyle::regular(9.0, GRAY_700),
        indent: 10.0,
        body_indent: 0.0,
        bar: Some(accent),
        date_beside_title: false,
        chips: chips(accent, 9.0),
        gap: 12.0,
    };

    if !resume.education.is_empty() {
        heading(s, SIDE, "Education", accent);
        for edu in &resume.education {
            write_entry(s, SIDE, &Entry::education(edu, false), &look);
        }
        s.advance(4.0);
    }

    if !resume.certification.is_empty() {
        heading(s, SIDE, "Certifications", accent);
        for cert in &resume.certification {
            write_entry(s, SIDE, &Entry::certification(cert), &look);
        }
        s.advance(4.0);
    }

    if !resume.skills.is_empty() {
        heading(s, SIDE, "Skills", accent);
        draw_chips(s, SIDE, &resume.skills, &look.chips);
    }
}

pub fn render(resume: &CanonicalResume, theme: &Theme, s: &mut Surface) {
    let accent = theme.accent_rgb();
    header(s, resume, accent);

    let origin = s.position();
    s.set_x(MAIN.x);
    main_column(s, resume, accent);
    let main_end = s.position();

    s.seek(origin);
    s.set_x(SIDE.x);
    side_column(s, resume, accent);
    let side_end = s.position();

    s.seek(lowest(main_end, side_end));
    s.set_x(MARGIN);
}
