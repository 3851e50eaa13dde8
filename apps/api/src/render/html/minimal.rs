//! Minimal: centered light header, divider-led summary, two equal columns.
//!
//! Left: experience, education, certifications. Right: skills, projects.

use crate::models::resume::CanonicalResume;
use crate::render::format::escape_html;
use crate::render::html::{
    avatar, certification_dates, contact_divs, credential_link, document, experience_dates,
    multiline, short_date, tags,
};
use crate::render::theme::Theme;

const CSS: &str = r#"    * { margin: 0; padding: 0; box-sizing: border-box; }
    body {
      font-family: {font_family};
      background-color: #ffffff;
      color: #111827;
      line-height: 1.6;
      padding: 32px;
      max-width: 210mm;
      margin: 0 auto;
    }
    .header-minimal { text-align: center; margin-bottom: 48px; }
    .avatar-minimal {
      width: 96px;
      height: 96px;
      border-radius: 50%;
      object-fit: cover;
      border: 2px solid {accent};
      margin-bottom: 24px;
    }
    h1 { font-size: 30px; font-weight: 300; color: #111827; margin-bottom: 8px; }
    .profession-minimal { font-size: 18px; font-weight: 300; color: #6B7280; margin-bottom: 24px; }
    .contact-minimal {
      display: flex;
      flex-wrap: wrap;
      justify-content: center;
      gap: 24px;
      font-size: 14px;
      color: #6B7280;
    }
    .divider { width: 48px; height: 1px; background-color: {accent}; margin: 0 auto 40px; }
    .summary-text { color: #374151; line-height: 1.8; font-size: 18px; font-weight: 300; margin-bottom: 40px; }
    .two-column { display: grid; grid-template-columns: 1fr 1fr; gap: 48px; }
    .block { margin-bottom: 40px; }
    h2 {
      font-size: 18px;
      font-weight: 500;
      color: {accent};
      margin-bottom: 24px;
      text-transform: uppercase;
      letter-spacing: 1px;
    }
    .item-minimal { margin-bottom: 24px; }
    .item-header { display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 8px; }
    .item-title { font-size: 16px; font-weight: 500; color: #111827; }
    .item-subtitle { font-size: 14px; color: #6B7280; }
    .item-date { font-size: 12px; color: #9CA3AF; font-weight: 300; }
    .item-meta { display: flex; justify-content: space-between; margin-top: 4px; }
    .item-accent { font-size: 12px; font-weight: 500; color: {accent}; }
    .item-desc { font-size: 14px; color: #374151; line-height: 1.8; font-weight: 300; }
    .skill-item { font-size: 14px; color: #374151; font-weight: 300; margin-bottom: 8px; }
    .tech-minimal {
      font-size: 12px;
      padding: 4px 8px;
      border-radius: 4px;
      display: inline-block;
      margin: 2px 2px 2px 0;
      background-color: {accent}10;
      color: {accent};
    }
    @media print {
      body { padding: 0; }
      .block { page-break-inside: avoid; }
    }"#;

fn left_column(resume: &CanonicalResume) -> String {
    let mut out = String::new();

    if !resume.experience.is_empty() {
        out.push_str(r#"<div class="block"><h2>Experience</h2>"#);
        for exp in &resume.experience {
            out.push_str(&format!(
                r#"<div class="item-minimal"><div class="item-header"><div><div class="item-title">{}</div><div class="item-subtitle">{}</div></div><div class="item-date">{}</div></div>"#,
                escape_html(&exp.position),
                escape_html(&exp.company),
                experience_dates(exp)
            ));
            if !exp.description.is_empty() {
                out.push_str(&format!(
                    r#"<div class="item-desc">{}</div>"#,
                    multiline(&exp.description)
                ));
            }
            out.push_str("</div>");
        }
        out.push_str("</div>");
    }

    if !resume.education.is_empty() {
        out.push_str(r#"<div class="block"><h2>Education</h2>"#);
        for edu in &resume.education {
            let gpa = if edu.gpa.is_empty() {
                String::new()
            } else {
                format!(r#"<span class="item-accent">GPA: {}</span>"#, escape_html(&edu.gpa))
            };
            out.push_str(&format!(
                r#"<div class="item-minimal"><div class="item-title">{}</div><div class="item-subtitle">{}</div><div class="item-meta"><span class="item-date">{}</span>{}</div></div>"#,
                escape_html(&edu.degree),
                escape_html(&edu.institution_line()),
                short_date(&edu.graduation_date_display),
                gpa
            ));
        }
        out.push_str("</div>");
    }

    if !resume.certification.is_empty() {
        out.push_str(r#"<div class="block"><h2>Certifications</h2>"#);
        for cert in &resume.certification {
            let issuer = if cert.issuer.is_empty() {
                String::new()
            } else {
                format!(r#"<div class="item-subtitle">{}</div>"#, escape_html(&cert.issuer))
            };
            let id = if cert.credential_id.is_empty() {
                String::new()
            } else {
                format!(
                    r#"<span class="item-date">ID: {}</span>"#,
                    escape_html(&cert.credential_id)
                )
            };
            out.push_str(&format!(
                r#"<div class="item-minimal"><div class="item-title">{}</div>{}<div class="item-meta"><span class="item-date">{}</span>{}</div>{}</div>"#,
                escape_html(&cert.name),
                issuer,
                certification_dates(cert),
                id,
                credential_link(
                    &cert.credential_url,
                    "font-size: 12px; color: #6B7280;",
                    "View Credential"
                )
            ));
        }
        out.push_str("</div>");
    }

    out
}

fn right_column(resume: &CanonicalResume) -> String {
    let mut out = String::new();

    if !resume.skills.is_empty() {
        out.push_str(r#"<div class="block"><h2>Skills</h2>"#);
        for skill in &resume.skills {
            out.push_str(&format!(
                r#"<div class="skill-item">{}</div>"#,
                escape_html(skill)
            ));
        }
        out.push_str("</div>");
    }

    if !resume.project.is_empty() {
        out.push_str(r#"<div class="block"><h2>Projects</h2>"#);
        for proj in &resume.project {
            out.push_str(&format!(
                r#"<div class="item-minimal"><div class="item-title">{}</div>"#,
                escape_html(&proj.name)
            ));
            if !proj.description.is_empty() {
                out.push_str(&format!(
                    r#"<div class="item-desc">{}</div>"#,
                    multiline(&proj.description)
                ));
            }
            if !proj.technologies.is_empty() {
                out.push_str(&format!(
                    r#"<div style="margin-top: 8px;">{}</div>"#,
                    tags(&proj.technologies, "tech-minimal")
                ));
            }
            out.push_str("</div>");
        }
        out.push_str("</div>");
    }

    out
}

pub fn render(resume: &CanonicalResume, theme: &Theme) -> String {
    let info = &resume.personal_info;
    let mut body = format!(
        r#"<div class="header-minimal">{}<h1>{}</h1><p class="profession-minimal">{}</p><div class="contact-minimal">{}</div></div>"#,
        avatar(info, "avatar-minimal"),
        escape_html(&info.full_name),
        escape_html(&info.profession),
        contact_divs(info, "", "color: #6B7280;")
    );

    if !resume.summary.is_empty() {
        body.push_str(&format!(
            r#"<div><div class="divider"></div><p class="summary-text">{}</p></div>"#,
            multiline(&resume.summary)
        ));
    }

    body.push_str(&format!(
        r#"<div class="two-column"><div>{}</div><div>{}</div></div>"#,
        left_column(resume),
        right_column(resume)
    ));

    document(CSS, theme, &info.full_name, &body)
}
