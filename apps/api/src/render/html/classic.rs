//! Classic: centered header, accent-bordered entries, single column.

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
    .header {
      text-align: center;
      margin-bottom: 32px;
      padding-bottom: 24px;
      border-bottom: 2px solid {accent};
    }
    .avatar {
      width: 96px;
      height: 96px;
      border-radius: 50%;
      object-fit: cover;
      border: 2px solid {accent};
      margin-bottom: 16px;
    }
    h1 { font-size: 24px; font-weight: bold; color: #111827; margin-bottom: 8px; }
    .profession { font-size: 18px; color: #374151; margin-bottom: 16px; }
    .contact-info {
      display: flex;
      flex-wrap: wrap;
      justify-content: center;
      gap: 16px;
      font-size: 14px;
      color: #6B7280;
    }
    .contact-item { display: flex; align-items: center; gap: 4px; }
    h2 { font-size: 20px; font-weight: bold; color: {accent}; margin-bottom: 16px; }
    .section { margin-bottom: 24px; }
    .section-item {
      border-left: 4px solid {accent};
      padding-left: 16px;
      margin-bottom: 16px;
    }
    .section-header {
      display: flex;
      justify-content: space-between;
      align-items: flex-start;
      margin-bottom: 8px;
    }
    .section-title { font-size: 18px; font-weight: 600; color: #111827; }
    .section-subtitle { font-size: 16px; font-weight: 500; color: #374151; }
    .section-date { font-size: 14px; color: #6B7280; }
    .section-content { color: #374151; line-height: 1.8; }
    .tag-list { display: flex; flex-wrap: wrap; gap: 8px; }
    .skill-tag {
      padding: 6px 12px;
      font-size: 14px;
      border-radius: 4px;
      background-color: {accent}33;
      color: {accent};
    }
    .tech-tag {
      padding: 4px 8px;
      font-size: 12px;
      border-radius: 4px;
      background-color: {accent}33;
      color: {accent};
    }
    .gpa { font-size: 14px; color: #6B7280; margin-top: 4px; }
    a { color: #2563eb; text-decoration: none; }
    a:hover { text-decoration: underline; }
    @media print {
      body { padding: 0; }
      .section { page-break-inside: avoid; }
    }"#;

pub fn render(resume: &CanonicalResume, theme: &Theme) -> String {
    let info = &resume.personal_info;
    let mut body = String::new();

    body.push_str(r#"<div class="header">"#);
    body.push_str(&avatar(info, "avatar"));
    body.push_str(&format!("<h1>{}</h1>", escape_html(&info.full_name)));
    if !info.profession.is_empty() {
        body.push_str(&format!(
            r#"<p class="profession">{}</p>"#,
            escape_html(&info.profession)
        ));
    }
    body.push_str(&format!(
        r#"<div class="contact-info">{}</div></div>"#,
        contact_divs(info, "contact-item", "")
    ));

    if !resume.summary.is_empty() {
        body.push_str(&format!(
            r#"<div class="section"><h2>Professional Summary</h2><div class="section-content">{}</div></div>"#,
            multiline(&resume.summary)
        ));
    }

    if !resume.experience.is_empty() {
        body.push_str(r#"<div class="section"><h2>Professional Experience</h2>"#);
        for exp in &resume.experience {
            body.push_str(&format!(
                r#"<div class="section-item"><div class="section-header"><div><div class="section-title">{}</div><div class="section-subtitle">{}</div></div><div class="section-date">{}</div></div>"#,
                escape_html(&exp.position),
                escape_html(&exp.company),
                experience_dates(exp)
            ));
            if !exp.description.is_empty() {
                body.push_str(&format!(
                    r#"<div class="section-content">{}</div>"#,
                    multiline(&exp.description)
                ));
            }
            body.push_str("</div>");
        }
        body.push_str("</div>");
    }

    if !resume.education.is_empty() {
        body.push_str(r#"<div class="section"><h2>Education</h2>"#);
        for edu in &resume.education {
            let gpa = if edu.gpa.is_empty() {
                String::new()
            } else {
                format!(r#"<div class="gpa">GPA: {}</div>"#, escape_html(&edu.gpa))
            };
            body.push_str(&format!(
                r#"<div class="section-item"><div class="section-header"><div><div class="section-title">{}</div><div class="section-subtitle">{}</div>{}</div><div class="section-date">{}</div></div></div>"#,
                escape_html(&edu.degree),
                escape_html(&edu.institution_line()),
                gpa,
                short_date(&edu.graduation_date_display)
            ));
        }
        body.push_str("</div>");
    }

    if !resume.certification.is_empty() {
        body.push_str(r#"<div class="section"><h2>Certifications</h2>"#);
        for cert in &resume.certification {
            let mut details = String::new();
            if !cert.issuer.is_empty() {
                details.push_str(&format!(
                    r#"<div class="section-subtitle">{}</div>"#,
                    escape_html(&cert.issuer)
                ));
            }
            if !cert.credential_id.is_empty() {
                details.push_str(&format!(
                    r#"<div class="gpa">ID: {}</div>"#,
                    escape_html(&cert.credential_id)
                ));
            }
            details.push_str(&credential_link(&cert.credential_url, "", "View Credential"));
            body.push_str(&format!(
                r#"<div class="section-item"><div class="section-header"><div><div class="section-title">{}</div>{}</div><div class="section-date">{}</div></div></div>"#,
                escape_html(&cert.name),
                details,
                certification_dates(cert)
            ));
        }
        body.push_str("</div>");
    }

    if !resume.project.is_empty() {
        body.push_str(r#"<div class="section"><h2>Projects</h2>"#);
        for proj in &resume.project {
            body.push_str(&format!(
                r#"<div class="section-item"><div class="section-title">{}</div>"#,
                escape_html(&proj.name)
            ));
            if !proj.description.is_empty() {
                body.push_str(&format!(
                    r#"<div class="section-content">{}</div>"#,
                    multiline(&proj.description)
                ));
            }
            if !proj.technologies.is_empty() {
                body.push_str(&format!(
                    r#"<div class="tag-list" style="margin-top: 8px;">{}</div>"#,
                    tags(&proj.technologies, "tech-tag")
                ));
            }
            body.push_str("</div>");
        }
        body.push_str("</div>");
    }

    if !resume.skills.is_empty() {
        body.push_str(&format!(
            r#"<div class="section"><h2>Skills</h2><div class="tag-list">{}</div></div>"#,
            tags(&resume.skills, "skill-tag")
        ));
    }

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
        assert!(!html.contains("<img"), "no avatar without an image URL");
    }

    #[test]
    fn test_position_before_company_and_present() {
        let html = render(&acme_engineer(), &Theme::default());
        let engineer = html.find("Engineer").expect("position rendered");
        let acme = html.find("Acme").expect("company rendered");
        assert!(engineer < acme);
        assert!(html.contains("Jan 2022 - Present"));
    }

    #[test]
    fn test_full_resume_sections_in_order() {
        let html = render(&full(), &Theme::default());
        let order = [
            "Professional Summary",
            "Professional Experience",
            "Education",
            "Certifications",
            "Projects",
            "Skills",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|h| html.find(&format!("<h2>{h}</h2>")).expect(h))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn test_full_resume_content_and_escaping() {
        let html = render(&full(), &Theme::default());
        assert!(html.contains("Tran &lt;Thi&gt; B"));
        assert!(!html.contains("Tran <Thi> B"));
        assert!(html.contains("Builds services.<br>Likes Rust &amp; Go."));
        assert!(html.contains("HUST - Computer Science"));
        assert!(html.contains("GPA: 3.6"));
        assert!(html.contains("ID: ABC-123"));
        assert!(html.contains("Jan 2023 - Jan 2026"));
        assert!(html.contains("View Credential"));
        assert!(html.contains("Jun 2020 - Dec 2021"));
        assert!(html.contains(r#"class="avatar""#));
    }

    #[test]
    fn test_accent_alpha_suffix() {
        let theme = Theme::new(Default::default(), "#10B981", "inter");
        let html = render(&full(), &theme);
        assert!(html.contains("background-color: #10B98133;"));
        assert!(html.contains("border-left: 4px solid #10B981;"));
    }
}
