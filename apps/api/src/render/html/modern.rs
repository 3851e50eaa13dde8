//! Modern: gradient header band, two columns (2fr / 1fr).
//!
//! Left: summary, experience, projects. Right: education, certifications, skills.

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
    }
    .header-gradient {
      background: linear-gradient(135deg, {accent} 0%, {accent}dd 100%);
      color: white;
      padding: 32px;
    }
    .header-content { max-width: 1200px; margin: 0 auto; }
    .header-flex { display: flex; align-items: flex-start; gap: 24px; margin-bottom: 24px; }
    .avatar-modern {
      width: 80px;
      height: 80px;
      border-radius: 50%;
      object-fit: cover;
      border: 4px solid white;
      box-shadow: 0 4px 6px rgba(0,0,0,0.1);
      flex-shrink: 0;
    }
    .header-text h1 { font-size: 36px; font-weight: bold; margin-bottom: 8px; }
    .header-text p { font-size: 20px; opacity: 0.9; }
    .contact-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 16px;
      font-size: 14px;
    }
    .content-wrapper { padding: 32px; max-width: 1200px; margin: 0 auto; }
    .main-grid { display: grid; grid-template-columns: 2fr 1fr; gap: 32px; }
    .block { margin-bottom: 32px; }
    h2 { font-size: 24px; font-weight: bold; margin-bottom: 16px; display: flex; align-items: center; }
    .section-bar {
      width: 4px;
      height: 32px;
      background-color: {accent};
      margin-right: 12px;
      border-radius: 2px;
    }
    .summary { color: #374151; line-height: 1.8; font-size: 18px; }
    .experience-item { margin-bottom: 24px; position: relative; padding-left: 20px; }
    .experience-dot {
      width: 12px;
      height: 12px;
      border-radius: 50%;
      background-color: {accent};
      position: absolute;
      left: 0;
      top: 8px;
    }
    .experience-header {
      display: flex;
      justify-content: space-between;
      align-items: flex-start;
      margin-bottom: 8px;
    }
    .experience-title { font-size: 20px; font-weight: bold; color: #111827; }
    .experience-company { font-size: 18px; font-weight: 600; color: {accent}; }
    .experience-date { font-size: 14px; color: #6B7280; font-weight: 500; }
    .experience-desc { color: #374151; line-height: 1.8; }
    .project-card {
      border: 1px solid {accent}30;
      border-radius: 8px;
      padding: 24px;
      margin-bottom: 24px;
    }
    .project-title { font-size: 20px; font-weight: bold; margin-bottom: 12px; }
    .project-desc { color: #374151; line-height: 1.8; margin-bottom: 16px; }
    .tech-tag {
      padding: 6px 12px;
      font-size: 12px;
      border-radius: 999px;
      font-weight: 500;
      display: inline-block;
      margin: 4px 4px 4px 0;
      background-color: {accent}20;
      color: {accent};
    }
    .entry-item {
      border-left: 4px solid {accent};
      padding-left: 16px;
      margin-bottom: 16px;
    }
    .entry-title { font-size: 18px; font-weight: bold; color: #111827; }
    .entry-subtitle { font-size: 16px; font-weight: 600; color: #374151; margin-top: 4px; }
    .entry-meta { display: flex; justify-content: space-between; margin-top: 8px; font-size: 14px; color: #6B7280; }
    .entry-accent { font-weight: 500; color: {accent}; }
    .skill-tag-modern {
      padding: 8px 16px;
      font-size: 14px;
      border-radius: 999px;
      font-weight: 500;
      display: inline-block;
      margin: 4px 4px 4px 0;
      background-color: {accent}20;
      color: {accent};
    }
    @media print {
      .block { page-break-inside: avoid; }
    }"#;

fn heading(title: &str) -> String {
    format!(r#"<h2><span class="section-bar"></span>{title}</h2>"#)
}

fn main_column(resume: &CanonicalResume) -> String {
    let mut out = String::new();

    if !resume.summary.is_empty() {
        out.push_str(&format!(
            r#"<div class="block">{}<p class="summary">{}</p></div>"#,
            heading("About Me"),
            multiline(&resume.summary)
        ));
    }

    if !resume.experience.is_empty() {
        out.push_str(&format!(r#"<div class="block">{}"#, heading("Experience")));
        for exp in &resume.experience {
            out.push_str(&format!(
                r#"<div class="experience-item"><div class="experience-dot"></div><div class="experience-header"><div><div class="experience-title">{}</div><div class="experience-company">{}</div></div><div class="experience-date">{}</div></div>"#,
                escape_html(&exp.position),
                escape_html(&exp.company),
                experience_dates(exp)
            ));
            if !exp.description.is_empty() {
                out.push_str(&format!(
                    r#"<div class="experience-desc">{}</div>"#,
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
                r#"<div class="project-card"><div class="project-title">{}</div>"#,
                escape_html(&proj.name)
            ));
            if !proj.description.is_empty() {
                out.push_str(&format!(
                    r#"<div class="project-desc">{}</div>"#,
                    multiline(&proj.description)
                ));
            }
            if !proj.technologies.is_empty() {
                out.push_str(&format!("<div>{}</div>", tags(&proj.technologies, "tech-tag")));
            }
            out.push_str("</div>");
        }
        out.push_str("</div>");
    }

    out
}

fn side_column(resume: &CanonicalResume, theme: &Theme) -> String {
    let mut out = String::new();

    if !resume.education.is_empty() {
        out.push_str(&format!(r#"<div class="block">{}"#, heading("Education")));
        for edu in &resume.education {
            let gpa = if edu.gpa.is_empty() {
                String::new()
            } else {
                format!(r#"<span class="entry-accent">GPA: {}</span>"#, escape_html(&edu.gpa))
            };
            out.push_str(&format!(
                r#"<div class="entry-item"><div class="entry-title">{}</div><div class="entry-subtitle">{}</div><div class="entry-meta"><span>{}</span>{}</div></div>"#,
                escape_html(&edu.degree),
                escape_html(&edu.institution_line()),
                short_date(&edu.graduation_date_display),
                gpa
            ));
        }
        out.push_str("</div>");
    }

    if !resume.certification.is_empty() {
        out.push_str(&format!(r#"<div class="block">{}"#, heading("Certifications")));
        for cert in &resume.certification {
            let issuer = if cert.issuer.is_empty() {
                String::new()
            } else {
                format!(r#"<div class="entry-subtitle">{}</div>"#, escape_html(&cert.issuer))
            };
            let id = if cert.credential_id.is_empty() {
                String::new()
            } else {
                format!("<span>ID: {}</span>", escape_html(&cert.credential_id))
            };
            let link_style = format!("font-size: 14px; color: {};", theme.accent_color);
            out.push_str(&format!(
                r#"<div class="entry-item"><div class="entry-title">{}</div>{}<div class="entry-meta"><span>{}</span>{}</div>{}</div>"#,
                escape_html(&cert.name),
                issuer,
                certification_dates(cert),
                id,
                credential_link(&cert.credential_url, &link_style, "View Credential &rarr;")
            ));
        }
        out.push_str("</div>");
    }

    if !resume.skills.is_empty() {
        out.push_str(&format!(
            r#"<div class="block">{}<div>{}</div></div>"#,
            heading("Skills"),
            tags(&resume.skills, "skill-tag-modern")
        ));
    }

    out
}

pub fn render(resume: &CanonicalResume, theme: &Theme) -> String {
    let info = &resume.personal_info;
    let body = format!(
        r#"<div class="header-gradient"><div class="header-content"><div class="header-flex">{}<div class="header-text"><h1>{}</h1><p>{}</p></div></div><div class="contact-grid">{}</div></div></div>
<div class="content-wrapper"><div class="main-grid"><div>{}</div><div>{}</div></div></div>"#,
        avatar(info, "avatar-modern"),
        escape_html(&info.full_name),
        escape_html(&info.profession),
        contact_divs(info, "", "color: white; text-decoration: underline;"),
        main_column(resume),
        side_column(resume, theme)
    );
    document(CSS, theme, &info.full_name, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::html::fixtures::{acme_engineer, full, name_only, SECTION_HEADINGS};

    #[test]
    fn test_name_only_has_no_sections() {
        let html = render(&name_only(), &Theme::default());
        assert!(html.contains("Nguyen Van A"));
        for heading in SECTION_HEADINGS {
            assert!(!html.contains(heading), "unexpected heading {heading:?}");
        }
        assert!(!html.contains("About Me"));
    }

    #[test]
    fn test_position_before_company_and_present() {
        let html = render(&acme_engineer(), &Theme::default());
        assert!(html.find("Engineer").expect("position") < html.find("Acme").expect("company"));
        assert!(html.contains("Present"));
    }

    #[test]
    fn test_two_column_split() {
        let html = render(&full(), &Theme::default());
        let projects = html.find("Projects</h2>").expect("projects");
        let education = html.find("Education</h2>").expect("education");
        let skills = html.find("Skills</h2>").expect("skills");
        assert!(projects < education, "projects stay in the main column");
        assert!(education < skills);
        assert!(html.contains("About Me"));
    }

    #[test]
    fn test_gradient_and_credential_use_accent() {
        let theme = Theme::new(Default::default(), "#FF0000", "inter");
        let html = render(&full(), &theme);
        assert!(html.contains("#FF0000dd"));
        assert!(html.contains("font-size: 14px; color: #FF0000;"));
        assert!(!html.contains("{accent}"));
    }
}
