//! Bold: dark page, oversized name, two columns (2fr / 1fr).
//!
//! Left: experience, projects. Right: skills, education, certifications.

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
      background-color: #111827;
      color: white;
      line-height: 1.6;
      padding: 40px;
      max-width: 210mm;
      margin: 0 auto;
    }
    .hero { margin-bottom: 48px; }
    .hero-header { display: flex; align-items: flex-end; justify-content: space-between; margin-bottom: 24px; }
    .hero-text { flex: 1; }
    .profession-label {
      font-size: 14px;
      text-transform: uppercase;
      letter-spacing: 2px;
      color: {accent};
      margin-bottom: 8px;
    }
    h1 { font-size: 72px; font-weight: 900; line-height: 1.1; }
    .avatar-bold {
      width: 192px;
      height: 192px;
      border-radius: 50%;
      object-fit: cover;
      border: 4px solid {accent};
      box-shadow: 0 8px 16px rgba(0,0,0,0.3);
    }
    .contact-bar {
      background-color: rgba(31, 41, 55, 0.8);
      border: 1px solid #374151;
      border-radius: 16px;
      padding: 24px;
      margin-bottom: 24px;
      display: flex;
      flex-wrap: wrap;
      gap: 24px;
      font-size: 14px;
      color: #D1D5DB;
    }
    .contact-item-bold { display: flex; align-items: center; gap: 8px; }
    .summary-bold { font-size: 18px; line-height: 1.8; color: #D1D5DB; max-width: 800px; }
    .main-grid { display: grid; grid-template-columns: 2fr 1fr; gap: 48px; }
    .block { margin-bottom: 48px; }
    .side-block { margin-bottom: 32px; }
    h2 { font-size: 32px; font-weight: 900; text-transform: uppercase; letter-spacing: 1px; margin-bottom: 32px; }
    h3 { font-size: 20px; font-weight: 900; text-transform: uppercase; margin-bottom: 16px; }
    .section-dot { color: {accent}; margin-right: 8px; }
    .experience-item-bold { border-left: 4px solid {accent}; padding-left: 24px; margin-bottom: 32px; }
    .exp-title-bold { font-size: 24px; font-weight: bold; margin-bottom: 4px; }
    .exp-company-bold { color: #9CA3AF; margin-bottom: 8px; }
    .exp-date-bold { font-size: 14px; color: #6B7280; margin-bottom: 8px; }
    .exp-desc-bold { color: #D1D5DB; line-height: 1.8; margin-left: 32px; }
    .project-item-bold { border-left: 4px solid {accent}; padding-left: 24px; margin-bottom: 24px; }
    .project-title-bold { font-size: 20px; font-weight: bold; margin-bottom: 8px; }
    .project-desc-bold { color: #D1D5DB; margin-bottom: 12px; }
    .tech-bold {
      font-size: 12px;
      padding: 4px 8px;
      border-radius: 999px;
      font-weight: bold;
      display: inline-block;
      margin: 4px 4px 4px 0;
      background-color: {accent}20;
      color: {accent};
    }
    .skill-box {
      padding: 12px;
      border-radius: 8px;
      font-weight: bold;
      margin-bottom: 8px;
      background-color: {accent}20;
      color: {accent};
    }
    .entry-bold { margin-bottom: 16px; }
    .entry-title-bold { font-size: 18px; font-weight: bold; margin-bottom: 4px; }
    .entry-subtitle-bold { color: #9CA3AF; font-size: 14px; }
    .entry-meta-bold { font-size: 12px; color: #6B7280; margin-top: 4px; }
    @media print {
      body { padding: 0; }
      .block { page-break-inside: avoid; }
    }"#;

fn heading(title: &str) -> String {
    format!(r#"<h2><span class="section-dot">&#9679;</span>{title}</h2>"#)
}

fn main_column(resume: &CanonicalResume) -> String {
    let mut out = String::new();

    if !resume.experience.is_empty() {
        out.push_str(&format!(r#"<div class="block">{}"#, heading("Experience")));
        for exp in &resume.experience {
            out.push_str(&format!(
                r#"<div class="experience-item-bold"><div class="exp-title-bold">{}</div><div class="exp-company-bold">{}</div><div class="exp-date-bold">{}</div>"#,
                escape_html(&exp.position),
                escape_html(&exp.company),
                experience_dates(exp)
            ));
            if !exp.description.is_empty() {
                out.push_str(&format!(
                    r#"<div class="exp-desc-bold">{}</div>"#,
                    multiline(&exp.description)
                ));
            }
            out.push_str("</div>");
        }
        out.push_str("</div>");
    }

    if !resume.project.is_empty() {
        out.push_str(&format!(r#"<div class="block">{}"#, heading("Projects")));
        for proj in &resume.project {
            out.push_str(&format!(
                r#"<div class="project-item-bold"><div class="project-title-bold">{}</div>"#,
                escape_html(&proj.name)
            ));
            if !proj.description.is_empty() {
                out.push_str(&format!(
                    r#"<div class="project-desc-bold">{}</div>"#,
                    multiline(&proj.description)
                ));
            }
            if !proj.technologies.is_empty() {
                out.push_str(&format!("<div>{}</div>", tags(&proj.technologies, "tech-bold")));
            }
            out.push_str("</div>");
        }
        out.push_str("</div>");
    }

    out
}

fn side_column(resume: &CanonicalResume, theme: &Theme) -> String {
    let mut out = String::new();

    if !resume.skills.is_empty() {
        out.push_str(r#"<div class="side-block"><h3>Skills</h3>"#);
        for skill in &resume.skills {
            out.push_str(&format!(r#"<div class="skill-box">{}</div>"#, escape_html(skill)));
        }
        out.push_str("</div>");
    }

    if !resume.education.is_empty() {
        out.push_str(r#"<div class="side-block"><h3>Education</h3>"#);
        for edu in &resume.education {
            let mut meta = Vec::new();
            if !edu.graduation_date_display.is_empty() {
                meta.push(short_date(&edu.graduation_date_display));
            }
            if !edu.gpa.is_empty() {
                meta.push(format!("GPA: {}", escape_html(&edu.gpa)));
            }
            let meta = if meta.is_empty() {
                String::new()
            } else {
                format!(r#"<div class="entry-meta-bold">{}</div>"#, meta.join(" &bull; "))
            };
            out.push_str(&format!(
                r#"<div class="entry-bold"><div class="entry-title-bold">{}</div><div class="entry-subtitle-bold">{}</div>{}</div>"#,
                escape_html(&edu.degree),
                escape_html(&edu.institution_line()),
                meta
            ));
        }
        out.push_str("</div>");
    }

    if !resume.certification.is_empty() {
        out.push_str(r#"<div class="side-block"><h3>Certifications</h3>"#);
        for cert in &resume.certification {
            let issuer = if cert.issuer.is_empty() {
                String::new()
            } else {
                format!(
                    r#"<div class="entry-subtitle-bold">{}</div>"#,
                    escape_html(&cert.issuer)
                )
            };
            let mut meta = Vec::new();
            let dates = certification_dates(cert);
            if !dates.is_empty() {
                meta.push(dates);
            }
            if !cert.credential_id.is_empty() {
                meta.push(format!("ID: {}", escape_html(&cert.credential_id)));
            }
            let meta = if meta.is_empty() {
                String::new()
            } else {
                format!(r#"<div class="entry-meta-bold">{}</div>"#, meta.join(" &bull; "))
            };
            let link_style = format!("font-size: 12px; color: {};", theme.accent_color);
            out.push_str(&format!(
                r#"<div class="entry-bold"><div class="entry-title-bold">{}</div>{}{}{}</div>"#,
                escape_html(&cert.name),
                issuer,
                meta,
                credential_link(&cert.credential_url, &link_style, "View Credential &rarr;")
            ));
        }
        out.push_str("</div>");
    }

    out
}

pub fn render(resume: &CanonicalResume, theme: &Theme) -> String {
    let info = &resume.personal_info;
    let summary = if resume.summary.is_empty() {
        String::new()
    } else {
        format!(r#"<p class="summary-bold">{}</p>"#, multiline(&resume.summary))
    };
    let body = format!(
        r#"<div class="hero"><div class="hero-header"><div class="hero-text"><div class="profession-label">{}</div><h1>{}</h1></div>{}</div><div class="contact-bar">{}</div>{}</div>
<div class="main-grid"><div>{}</div><div>{}</div></div>"#,
        escape_html(&info.profession),
        escape_html(&info.full_name),
        avatar(info, "avatar-bold"),
        contact_divs(info, "contact-item-bold", "color: #D1D5DB;"),
        summary,
        main_column(resume),
        side_column(resume, theme)
    );
    document(CSS, theme, &info.full_name, &body)
}
