//! HTML renderers, one module per template, plus the pieces they share.
//!
//! Every renderer returns a complete `<html>` document with an inline
//! `<style>` block. Stylesheets are `const` templates with `{accent}` and
//! `{font_family}` placeholders; translucent accent variants are written
//! as `{accent}33`-style 8-digit hex colors, which is why the theme keeps
//! the accent as a bare `#RRGGBB`.

pub mod bold;
pub mod classic;
pub mod minimal;
pub mod modern;
pub mod professional;

use crate::models::resume::{CertificationItem, ExperienceItem, PersonalInfo};
use crate::render::format::{
    date_range, escape_html, format_date_short, format_text_with_line_breaks,
    resolve_font_family,
};
use crate::render::theme::Theme;

/// Wraps a template body into a full document with the themed stylesheet.
///
/// Only the stylesheet goes through placeholder replacement; user text in
/// `title` and `body` is never scanned for placeholders.
pub(crate) fn document(css: &str, theme: &Theme, title: &str, body: &str) -> String {
    let css = css
        .replace("{accent}", &theme.accent_color)
        .replace("{font_family}", resolve_font_family(&theme.font_key));
    let title = if title.is_empty() {
        "Resume".to_string()
    } else {
        escape_html(title)
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <style>
{css}
  </style>
</head>
<body>
{body}
</body>
</html>
"#
    )
}

/// `<img>` for the avatar, or nothing when no image URL is set.
pub(crate) fn avatar(info: &PersonalInfo, class: &str) -> String {
    if info.image_url.is_empty() {
        return String::new();
    }
    format!(
        r#"<img src="{}" alt="{}" class="{}">"#,
        escape_html(&info.image_url),
        escape_html(&info.full_name),
        class
    )
}

/// Contact entries in display order, already escaped; empty fields are skipped.
///
/// `link_style` is the inline style of the website anchor.
pub(crate) fn contact_items(info: &PersonalInfo, link_style: &str) -> Vec<String> {
    let mut items = Vec::new();
    if !info.birth_date_display.is_empty() {
        items.push(escape_html(&format_date_short(&info.birth_date_display)));
    }
    for value in [&info.gender, &info.email, &info.phone, &info.location] {
        if !value.is_empty() {
            items.push(escape_html(value));
        }
    }
    if !info.website.is_empty() {
        let href = escape_html(&info.website);
        let style = if link_style.is_empty() {
            String::new()
        } else {
            format!(r#" style="{link_style}""#)
        };
        items.push(format!(r#"<a href="{href}"{style}>{href}</a>"#));
    }
    if !info.language.is_empty() {
        items.push(escape_html(&info.language));
    }
    items
}

/// Contact entries wrapped in `<div class="{class}">`.
pub(crate) fn contact_divs(info: &PersonalInfo, class: &str, link_style: &str) -> String {
    contact_items(info, link_style)
        .into_iter()
        .map(|item| {
            if class.is_empty() {
                format!("<div>{item}</div>")
            } else {
                format!(r#"<div class="{class}">{item}</div>"#)
            }
        })
        .collect()
}

pub(crate) fn experience_dates(exp: &ExperienceItem) -> String {
    escape_html(&date_range(
        &exp.start_date_display,
        &exp.end_date_display,
        exp.is_current,
    ))
}

pub(crate) fn certification_dates(cert: &CertificationItem) -> String {
    escape_html(&cert.date_line())
}

pub(crate) fn short_date(display: &str) -> String {
    escape_html(&format_date_short(display))
}

/// Multi-line user text: escaped, with `\n` as `<br>`.
pub(crate) fn multiline(text: &str) -> String {
    format_text_with_line_breaks(text)
}

/// One `<span class="{class}">` per entry.
pub(crate) fn tags(items: &[String], class: &str) -> String {
    items
        .iter()
        .map(|item| format!(r#"<span class="{class}">{}</span>"#, escape_html(item)))
        .collect()
}

/// `<a>` to a credential, or nothing.
pub(crate) fn credential_link(url: &str, style: &str, label: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    format!(
        r#"<div style="margin-top: 4px;"><a href="{}" target="_blank" style="{style}">{label}</a></div>"#,
        escape_html(url)
    )
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::resume::*;

    /// Only the name is set; every section must be omitted.
    pub fn name_only() -> CanonicalResume {
        CanonicalResume {
            personal_info: PersonalInfo {
                full_name: "Nguyen Van A".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// The single current Acme position used across renderer tests.
    pub fn acme_engineer() -> CanonicalResume {
        CanonicalResume {
            personal_info: PersonalInfo {
                full_name: "Nguyen Van A".to_string(),
                ..Default::default()
            },
            experience: vec![ExperienceItem {
                company: "Acme".to_string(),
                position: "Engineer".to_string(),
                is_current: true,
                start_date_display: "01/2022".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    /// Every section populated, including markup that must be escaped.
    pub fn full() -> CanonicalResume {
        CanonicalResume {
            personal_info: PersonalInfo {
                full_name: "Tran <Thi> B".to_string(),
                profession: "Backend Engineer".to_string(),
                birth_date_display: "02/08/1995".to_string(),
                gender: "Female".to_string(),
                email: "b@example.com".to_string(),
                phone: "+84 912 345 678".to_string(),
                location: "Hanoi".to_string(),
                website: "https://b.dev".to_string(),
                language: "English".to_string(),
                image_url: "https://cdn.example.com/b.png".to_string(),
            },
            summary: "Builds services.\nLikes Rust & Go.".to_string(),
            experience: vec![
                ExperienceItem {
                    company: "Acme".to_string(),
                    position: "Engineer".to_string(),
                    description: "Shipped the rendering pipeline.\nOwned on-call.".to_string(),
                    is_current: true,
                    start_date_display: "01/2022".to_string(),
                    end_date_display: String::new(),
                },
                ExperienceItem {
                    company: "Globex".to_string(),
                    position: "Intern".to_string(),
                    description: "Wrote tests.".to_string(),
                    is_current: false,
                    start_date_display: "06/2020".to_string(),
                    end_date_display: "12/2021".to_string(),
                },
            ],
            education: vec![EducationItem {
                institution: "HUST".to_string(),
                degree: "BSc".to_string(),
                field: "Computer Science".to_string(),
                graduation_date_display: "06/2019".to_string(),
                gpa: "3.6".to_string(),
            }],
            project: vec![ProjectItem {
                name: "Forge".to_string(),
                description: "A build tool.".to_string(),
                technologies: vec!["Rust".to_string(), "Axum".to_string()],
            }],
            certification: vec![CertificationItem {
                name: "CKA".to_string(),
                issuer: "CNCF".to_string(),
                issue_date_display: "01/2023".to_string(),
                expiry_date_display: "01/2026".to_string(),
                credential_id: "ABC-123".to_string(),
                credential_url: "https://cncf.io/verify".to_string(),
            }],
            skills: vec!["Rust".to_string(), "PostgreSQL".to_string()],
        }
    }

    pub const SECTION_HEADINGS: [&str; 6] = [
        "Professional Summary",
        "Experience",
        "Education",
        "Certifications",
        "Projects",
        "Skills",
    ];
}
