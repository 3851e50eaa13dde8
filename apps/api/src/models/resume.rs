use serde::{Deserialize, Serialize};

/// The single normalized shape every renderer consumes.
///
/// Built fresh per render by `render::normalize::normalize`; dates are already
/// display strings and every list is present (possibly empty).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalResume {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<ExperienceItem>,
    pub education: Vec<EducationItem>,
    pub project: Vec<ProjectItem>,
    pub certification: Vec<CertificationItem>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub profession: String,
    /// `DD/MM/YYYY`.
    pub birth_date_display: String,
    pub gender: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub language: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub company: String,
    pub position: String,
    pub description: String,
    pub is_current: bool,
    /// `MM/YYYY`.
    pub start_date_display: String,
    /// `MM/YYYY`; always empty when `is_current`.
    pub end_date_display: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationItem {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub graduation_date_display: String,
    pub gpa: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItem {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationItem {
    pub name: String,
    pub issuer: String,
    pub issue_date_display: String,
    pub expiry_date_display: String,
    pub credential_id: String,
    pub credential_url: String,
}

impl EducationItem {
    /// `institution - field`, or just the institution.
    pub fn institution_line(&self) -> String {
        if self.field.is_empty() {
            self.institution.clone()
        } else {
            format!("{} - {}", self.institution, self.field)
        }
    }
}

impl CertificationItem {
    /// `Mon YYYY - Mon YYYY`; either side may be missing.
    pub fn date_line(&self) -> String {
        use crate::render::format::format_date_short;

        let issue = format_date_short(&self.issue_date_display);
        match (issue.is_empty(), self.expiry_date_display.is_empty()) {
            (_, true) => issue,
            (true, false) => format!("- {}", format_date_short(&self.expiry_date_display)),
            (false, false) => format!(
                "{} - {}",
                issue,
                format_date_short(&self.expiry_date_display)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_institution_line_with_and_without_field() {
        let mut edu = EducationItem {
            institution: "HUST".to_string(),
            ..Default::default()
        };
        assert_eq!(edu.institution_line(), "HUST");
        edu.field = "Computer Science".to_string();
        assert_eq!(edu.institution_line(), "HUST - Computer Science");
    }

    #[test]
    fn test_certification_date_line() {
        let mut cert = CertificationItem {
            issue_date_display: "01/2023".to_string(),
            ..Default::default()
        };
        assert_eq!(cert.date_line(), "Jan 2023");
        cert.expiry_date_display = "01/2026".to_string();
        assert_eq!(cert.date_line(), "Jan 2023 - Jan 2026");
        cert.issue_date_display.clear();
        assert_eq!(cert.date_line(), "- Jan 2026");
    }
}
