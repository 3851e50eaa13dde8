//! Professional: solid accent header band, small-caps labels, single column.

use crate::models::resume::CanonicalResume;
use crate::render::format::escape_html;
use crate::render::html::{
    avatar, contact_divs, credential_link, document, experience_dates, multiline, short_date,
    tags,
};
use crate::render::theme::Theme;

const CSS: &str = r#"    * { margin: 0; padding: 0; box-sizing: border-box; }
    body {
      font-family: {font_family};
      background-color: #ffffff;
      color: #111827;
      line-height: 1.6;
      padding: 40px;
      max-width: 210mm;
      margin: 0 auto;
    }
    .header-professional {
      background-color: {accent};
      color: white;
      padding: 32px;
      margin: -40px -40px 32px -40px;
    }
    .header-flex { display: flex; align-items: center; justify-content: space-between; }
    .header-text h1 { font-size: 36px; font-weight: bold; margin-bottom: 8px; }
    .header-text p { font-size: 18px; font-weight: 300; opacity: 0.95; }
    .avatar-professional {
      width: 128px;
      height: 128px;
      border-radius: 8px;
      object-fit: cover;
      border: 4px solid white;
    }
    .contact-bar {
      display: flex;
      flex-wrap: wrap;
      gap: 24px;
      font-size: 14px;
      padding: 32px 0;
      border-bottom: 2px solid {accent}40;
      margin-bottom: 32px;
    }
    .contact-item-professional { display: flex; align-items: center; gap: 8px; }
    h2 {
      font-size: 14px;
      font-weight: bold;
      text-transform: uppercase;
      letter-spacing: 2px;
      color: {accent};
      margin-bottom: 16px;
    }
    .section-professional { margin-bottom: 32px; }
    .summary-professional { color: #374151; line-height: 1.8; }
    .exp-item-professional { margin-bottom: 24px; }
    .exp-header-professional { display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 8px; }
    .exp-title-professional { font-size: 18px; font-weight: 600; color: #111827; }
    .exp-company-professional { color: #374151; font-weight: 500; }
    .exp-date-professional { font-size: 12px; color: #6B7280; }
    .exp-desc-professional { color: #374151; font-size: 14px; line-height: 1.8; }
    .entry-professional { margin-bottom: 16px; }
    .entry-title-professional { font-size: 18px; font-weight: 600; color: #111827; }
    .entry-subtitle-professional { color: #374151; }
    .entry-meta-professional { font-size: 14px; color: #6B7280; margin-top: 4px; }
    .project-item-professional { border-left: 4px solid {accent}80; padding-left: 16px; margin-bottom: 16px; }
    .project-title-professional { font-size: 18px; font-weight: 600; color: #111827; margin-bottom: 4px; }
    .project-desc-professional { color: #374151; font-size: 14px; line-height: 1.8; margin-bottom: 8px; }
    .tech-professional {
      font-size: 12px;
      padding: 6px 12px;
      border-radius: 999px;
      border: 1px solid {accent}80;
      color: {accent};
      display: inline-block;
      margin: 4px 4px 4px 0;
    }
    .skill-professional {
      font-size: 14px;
      padding: 6px 12px;
      border-radius: 4px;
      border: 1px solid {accent};
      color: {accent};
      display: inline-block;
      margin: 4px 4px 4px 0;
    }
    @media print {
      body { padding: 0; }
      .header-professional { margin: 0 0 32px 0; }
      .section-professional { page-break-inside: avoid; }
    }"#;

fn section(title: &str, content: &str) -> String {
    format!(r#"<div class="section-professional"><h2>{title}</h2>{content}</div>"#)
}

fn meta_line(parts: Vec<String>) -> String {
    if parts.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="entry-meta-professional">{}</div>"#,
            parts.join(" &bull; ")
        )
    }
}

pub fn render(resume: &CanonicalResume, theme: &Theme) -> String {
    let info = &resume.personal_info;
    let mut body = format!(
        r#"<div class="header-professional"><div class="header-flex"><div class="header-text"><h1>{}</h1><p>{}</p></div>{}</div></div>
<div class="contact-bar">{}</div>"#,
        escape_html(&info.full_name),
        escape_html(&info.profession),
        avatar(info, "avatar-professional"),
        contact_divs(info, "contact-item-professional", "color: #111827;")
    );

    if !resume.summary.is_empty() {
        body.push_str(&section(
            "Professional Summary",
            &format!(
                r#"<p class="summary-professional">{}</p>"#,
                multiline(&resume.summary)
            ),
        ));
    }

    if !resume.experience.is_empty() {
        let mut items = String::new();
        for exp in &resume.experience {
            items.push_str(&format!(
                r#"<div class="exp-item-professional"><div class="exp-header-professional"><div><div class="exp-title-professional">{}</div><div class="exp-company-professional">{}</div></div><span class="exp-date-professional">{}</span></div>"#,
                escape_html(&exp.position),
                escape_html(&exp.company),
                experience_dates(exp)
            ));
            if !exp.description.is_empty() {
                items.push_str(&format!(
                    r#"<div class="exp-desc-professional">{}</div>"#,
                    multiline(&exp.description)
                ));
            }
            items.push_str("</div>");
        }
        body.push_str(&section("Professional Experience", &items));
    }

    if !resume.education.is_empty() {
        let mut items = String::new();
        for edu in &resume.education {
            let mut meta = Vec::new();
            if !edu.graduation_date_display.is_empty() {
                meta.push(format!("Graduated: {}", short_date(&edu.graduation_date_display)));
            }
            if !edu.gpa.is_empty() {
                meta.push(format!("GPA: {}", escape_html(&edu.gpa)));
            }
            items.push_str(&format!(
                r#"<div class="entry-professional"><div class="entry-title-professional">{}</div><div class="entry-subtitle-professional">{}</div>{}</div>"#,
                escape_html(&edu.degree),
                escape_html(&edu.institution_line()),
                meta_line(meta)
            ));
        }
        body.push_str(&section("Education", &items));
    }

    if !resume.certification.is_empty() {
        let mut items = String::new();
        for cert in &resume.certification {
            let issuer = if cert.issuer.is_empty() {
                String::new()
            } else {
                format!(
                    r#"<div class="entry-subtitle-professional">{}</div>"#,
                    escape_html(&cert.issuer)
                )
            };
            let mut meta = Vec::new();
            if !cert.issue_date_display.is_empty() {
                meta.push(format!("Issued: {}", short_date(&cert.issue_date_display)));
            }
            if !cert.expiry_date_display.is_empty() {
                meta.push(format!("Expires: {}", short_date(&cert.expiry_date_display)));
            }
            if !cert.credential_id.is_empty() {
                meta.push(format!("ID: {}", escape_html(&cert.credential_id)));
            }
            items.push_str(&format!(
                r#"<div class="entry-professional"><div class="entry-title-professional">{}</div>{}{}{}</div>"#,
                escape_html(&cert.name),
                issuer,
                meta_line(meta),
                credential_link(
                    &cert.credential_url,
                    "font-size: 14px; color: #2563eb;",
                    "View Credential"
                )
            ));
        }
        body.push_str(&section("Certifications", &items));
    }

    if !resume.project.is_empty() {
        let mut items = String::new();
        for proj in &resume.project {
            items.push_str(&format!(
                r#"<div class="project-item-professional"><div class="project-title-professional">{}</div>"#,
                escape_html(&proj.name)
            ));
            if !proj.description.is_empty() {
                items.push_str(&format!(
                    r#"<div class="project-desc-professional">{}</div>"#,
                    multiline(&proj.description)
                ));
            }
            if !proj.technologies.is_empty() {
                items.push_str(&format!(
                    "<div>{}</div>",
                    tags(&proj.technologies, "tech-professional")
                ));
            }
            items.push_str("</div>");
        }
        body.push_str(&section("Projects", &items));
    }

    if !resume.skills.is_empty() {
        body.push_str(&section(
            "Technical Skills",
            &format!("<div>{}</div>", tags(&resume.skills, "skill-professional")),
        ));
    }

    document(CSS, theme, &info.full_name, &body)
}
