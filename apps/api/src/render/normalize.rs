//! Stored resume record to `CanonicalResume`.
//!
//! Stored records carry several historical naming conventions
//! (`company` vs `companyName`, `position` vs `jobTitle`, snake_case vs
//! camelCase). Each entity declares `(canonical field, [aliases])` pairs in
//! priority order; one generic resolver picks the first non-empty alias.
//!
//! `normalize` is total: any JSON value (including non-objects) yields a
//! complete `CanonicalResume` with empty strings / empty lists for anything
//! missing or malformed.

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::models::resume::{
    CanonicalResume, CertificationItem, EducationItem, ExperienceItem, PersonalInfo, ProjectItem,
};
use crate::render::format::{format_date_for_display, format_timestamp_millis, DateFormat};

/// `(canonical field, source aliases in priority order)`.
type FieldTable = &'static [(&'static str, &'static [&'static str])];

// ────────────────────────────────────────────────────────────────────────────
// Alias tables
// ────────────────────────────────────────────────────────────────────────────

const RESUME_FIELDS: FieldTable = &[
    ("fullName", &["name", "fullName", "full_name"]),
    ("profession", &["profession"]),
    ("birthDate", &["dateOfBirth", "birthDate", "date_of_birth"]),
    ("gender", &["gender"]),
    ("email", &["email"]),
    ("phone", &["phoneNumber", "phone", "phone_number"]),
    ("location", &["address", "location"]),
    ("website", &["website", "websites"]),
    ("language", &["language"]),
    ("imageUrl", &["avatar", "image", "imageUrl"]),
    ("summary", &["summary", "professional"]),
    ("experience", &["experiences", "experience"]),
    ("education", &["educations", "education"]),
    ("project", &["projects", "project"]),
    ("certification", &["certifications", "certification"]),
    ("skills", &["skills"]),
];

const EXPERIENCE_FIELDS: FieldTable = &[
    ("company", &["companyName", "company"]),
    ("position", &["jobTitle", "position"]),
    ("description", &["jobDescription", "description"]),
    ("isCurrent", &["isCurrent", "is_current"]),
    ("startDate", &["startDate", "start_date"]),
    ("endDate", &["endDate", "end_date"]),
];

const EDUCATION_FIELDS: FieldTable = &[
    ("institution", &["institutionName", "institution"]),
    ("degree", &["degree"]),
    ("field", &["fieldOfStudy", "field"]),
    ("graduationDate", &["graduationDate", "graduation_date"]),
    ("gpa", &["gpa"]),
];

const PROJECT_FIELDS: FieldTable = &[
    ("name", &["projectName", "name"]),
    ("description", &["description"]),
    ("technologies", &["technologies"]),
];

const CERTIFICATION_FIELDS: FieldTable = &[
    ("name", &["name"]),
    ("issuer", &["issuer"]),
    ("issueDate", &["issueDate", "issue_date"]),
    ("expiryDate", &["expiryDate", "expiry_date"]),
    ("credentialId", &["credentialId", "credential_id"]),
    ("credentialUrl", &["credentialUrl", "credential_url"]),
];

// ────────────────────────────────────────────────────────────────────────────
// Generic resolution
// ────────────────────────────────────────────────────────────────────────────

/// JS-style truthiness: empty strings, zero, false and null are "absent".
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Scalar → display text. Containers have no text form.
fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// The canonical fields of one source object, each bound to its winning alias value.
struct Resolved<'a> {
    values: HashMap<&'static str, &'a Value>,
}

impl<'a> Resolved<'a> {
    fn new(source: &'a Value, table: FieldTable) -> Self {
        let values = table
            .iter()
            .filter_map(|(canonical, aliases)| {
                aliases
                    .iter()
                    .filter_map(|alias| source.get(*alias))
                    .find(|v| is_truthy(v))
                    .map(|v| (*canonical, v))
            })
            .collect();
        Self { values }
    }

    fn get(&self, field: &str) -> Option<&'a Value> {
        self.values.get(field).copied()
    }

    fn text(&self, field: &str) -> String {
        self.get(field).and_then(as_text).unwrap_or_default()
    }

    fn flag(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    fn date(&self, field: &str, format: DateFormat) -> String {
        match self.get(field) {
            Some(Value::String(s)) => format_date_for_display(s, format),
            Some(Value::Number(n)) => n
                .as_i64()
                .map(|ms| format_timestamp_millis(ms, format))
                .unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn list(&self, field: &str) -> &'a [Value] {
        match self.get(field) {
            Some(Value::Array(items)) => items.as_slice(),
            _ => &[],
        }
    }

    /// Non-empty text entries of a list field; falsy entries are dropped.
    fn text_list(&self, field: &str) -> Vec<String> {
        self.list(field).iter().filter_map(as_text).collect()
    }

    /// A single string, or the first usable entry of a list.
    fn first_text(&self, field: &str) -> String {
        match self.get(field) {
            Some(Value::Array(items)) => items.iter().find_map(as_text).unwrap_or_default(),
            Some(v) => as_text(v).unwrap_or_default(),
            None => String::new(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Per-entity mapping
// ────────────────────────────────────────────────────────────────────────────

fn experience_item(source: &Value) -> ExperienceItem {
    let f = Resolved::new(source, EXPERIENCE_FIELDS);
    let is_current = f.flag("isCurrent");
    ExperienceItem {
        company: f.text("company"),
        position: f.text("position"),
        description: f.text("description"),
        is_current,
        start_date_display: f.date("startDate", DateFormat::MonthYear),
        end_date_display: if is_current {
            String::new()
        } else {
            f.date("endDate", DateFormat::MonthYear)
        },
    }
}

fn education_item(source: &Value) -> EducationItem {
    let f = Resolved::new(source, EDUCATION_FIELDS);
    EducationItem {
        institution: f.text("institution"),
        degree: f.text("degree"),
        field: f.text("field"),
        graduation_date_display: f.date("graduationDate", DateFormat::MonthYear),
        gpa: f.text("gpa"),
    }
}

fn project_item(source: &Value) -> ProjectItem {
    let f = Resolved::new(source, PROJECT_FIELDS);
    ProjectItem {
        name: f.text("name"),
        description: f.text("description"),
        technologies: f.text_list("technologies"),
    }
}

fn certification_item(source: &Value) -> CertificationItem {
    let f = Resolved::new(source, CERTIFICATION_FIELDS);
    CertificationItem {
        name: f.text("name"),
        issuer: f.text("issuer"),
        issue_date_display: f.date("issueDate", DateFormat::MonthYear),
        expiry_date_display: f.date("expiryDate", DateFormat::MonthYear),
        credential_id: f.text("credentialId"),
        credential_url: f.text("credentialUrl"),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Public entry point
// ────────────────────────────────────────────────────────────────────────────

/// Converts a stored resume record into the canonical shape. Never fails.
pub fn normalize(raw: &Value) -> CanonicalResume {
    let f = Resolved::new(raw, RESUME_FIELDS);

    let resume = CanonicalResume {
        personal_info: PersonalInfo {
            full_name: f.text("fullName"),
            profession: f.text("profession"),
            birth_date_display: f.date("birthDate", DateFormat::DayMonthYear),
            gender: f.text("gender"),
            email: f.text("email"),
            phone: f.text("phone"),
            location: f.text("location"),
            website: f.first_text("website"),
            language: f.text("language"),
            image_url: f.text("imageUrl"),
        },
        summary: f.text("summary"),
        experience: f.list("experience").iter().map(experience_item).collect(),
        education: f.list("education").iter().map(education_item).collect(),
        project: f.list("project").iter().map(project_item).collect(),
        certification: f
            .list("certification")
            .iter()
            .map(certification_item)
            .collect(),
        skills: f.text_list("skills"),
    };

    debug!(
        experience = resume.experience.len(),
        education = resume.education.len(),
        project = resume.project.len(),
        certification = resume.certification.len(),
        skills = resume.skills.len(),
        "Normalized resume record"
    );

    resume
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ── totality ────────────────────────────────────────────────────────────

    #[test]
    fn test_empty_object_yields_empty_resume() {
        let resume = normalize(&json!({}));
        assert_eq!(resume, CanonicalResume::default());
    }

    #[test]
    fn test_non_object_inputs_never_fail() {
        for raw in [json!(null), json!(42), json!("resume"), json!([1, 2, 3]), json!(true)] {
            assert_eq!(normalize(&raw), CanonicalResume::default(), "{raw}");
        }
    }

    #[test]
    fn test_non_array_lists_become_empty() {
        let raw = json!({
            "experiences": "none",
            "educations": {"degree": "BSc"},
            "projects": 3,
            "certifications": null,
            "skills": "Rust, Go"
        });
        let resume = normalize(&raw);
        assert!(resume.experience.is_empty());
        assert!(resume.education.is_empty());
        assert!(resume.project.is_empty());
        assert!(resume.certification.is_empty());
        assert!(resume.skills.is_empty());
    }

    // ── personal info ───────────────────────────────────────────────────────

    #[test]
    fn test_personal_info_aliases() {
        let raw = json!({
            "name": "Tran Thi B",
            "profession": "Designer",
            "dateOfBirth": "1995-08-02T00:00:00.000Z",
            "gender": "Female",
            "email": "b@example.com",
            "phoneNumber": "+84 912 345 678",
            "address": "Hanoi",
            "website": ["https://b.dev", "https://other.dev"],
            "language": "Vietnamese, English",
            "avatar": "https://cdn.example.com/b.png"
        });
        let info = normalize(&raw).personal_info;
        assert_eq!(info.full_name, "Tran Thi B");
        assert_eq!(info.birth_date_display, "02/08/1995");
        assert_eq!(info.phone, "+84 912 345 678");
        assert_eq!(info.location, "Hanoi");
        assert_eq!(info.website, "https://b.dev", "first website wins");
        assert_eq!(info.image_url, "https://cdn.example.com/b.png");
    }

    #[test]
    fn test_website_as_plain_string() {
        let resume = normalize(&json!({"website": "https://solo.dev"}));
        assert_eq!(resume.personal_info.website, "https://solo.dev");
    }

    #[test]
    fn test_summary_prefers_summary_then_professional() {
        let both = normalize(&json!({"summary": "S", "professional": "P"}));
        assert_eq!(both.summary, "S");
        let fallback = normalize(&json!({"summary": "", "professional": "P"}));
        assert_eq!(fallback.summary, "P");
    }

    #[test]
    fn test_unparseable_birth_date_is_empty() {
        let resume = normalize(&json!({"dateOfBirth": "sometime"}));
        assert_eq!(resume.personal_info.birth_date_display, "");
    }

    // ── experience ──────────────────────────────────────────────────────────

    #[test]
    fn test_experience_both_naming_conventions() {
        let raw = json!({
            "experiences": [
                {"companyName": "Acme", "jobTitle": "Engineer", "jobDescription": "Built things",
                 "startDate": "2020-01-10", "endDate": "2021-06-30"},
                {"company": "Globex", "position": "Lead", "description": "Led things",
                 "start_date": "2021-07-01", "end_date": "2023-02-01"}
            ]
        });
        let exp = normalize(&raw).experience;
        assert_eq!(exp.len(), 2);
        assert_eq!(exp[0].company, "Acme");
        assert_eq!(exp[0].position, "Engineer");
        assert_eq!(exp[0].start_date_display, "01/2020");
        assert_eq!(exp[0].end_date_display, "06/2021");
        assert_eq!(exp[1].company, "Globex");
        assert_eq!(exp[1].description, "Led things");
        assert_eq!(exp[1].end_date_display, "02/2023");
    }

    #[test]
    fn test_current_position_has_no_end_date() {
        let raw = json!({
            "experiences": [
                {"company": "Acme", "isCurrent": true, "startDate": "2022-01-01", "endDate": "2024-01-01"},
                {"company": "Initech", "is_current": true, "end_date": "2024-01-01"}
            ]
        });
        for item in normalize(&raw).experience {
            assert!(item.is_current);
            assert_eq!(item.end_date_display, "", "current position must not show an end date");
        }
    }

    #[test]
    fn test_non_object_list_entries_map_to_empty_items() {
        let raw = json!({"experiences": ["oops", null]});
        let exp = normalize(&raw).experience;
        assert_eq!(exp, vec![ExperienceItem::default(), ExperienceItem::default()]);
    }

    // ── education / project / certification ────────────────────────────────

    #[test]
    fn test_education_aliases_and_numeric_gpa() {
        let raw = json!({
            "educations": [
                {"institutionName": "HUST", "degree": "BSc", "fieldOfStudy": "CS",
                 "graduationDate": "2019-06-15", "gpa": 3.6}
            ]
        });
        let edu = &normalize(&raw).education[0];
        assert_eq!(edu.institution, "HUST");
        assert_eq!(edu.field, "CS");
        assert_eq!(edu.graduation_date_display, "06/2019");
        assert_eq!(edu.gpa, "3.6");
    }

    #[test]
    fn test_year_only_graduation_date() {
        let raw = json!({
            "education": [{"institution": "HUST", "graduationDate": "2019"}]
        });
        assert_eq!(normalize(&raw).education[0].graduation_date_display, "01/2019");
    }

    #[test]
    fn test_project_technologies_drop_falsy_entries() {
        let raw = json!({
            "projects": [{"projectName": "Forge", "technologies": ["Rust", "", null, "Axum"]}]
        });
        let proj = &normalize(&raw).project[0];
        assert_eq!(proj.name, "Forge");
        assert_eq!(proj.technologies, vec!["Rust", "Axum"]);
    }

    #[test]
    fn test_certification_aliases() {
        let raw = json!({
            "certifications": [
                {"name": "CKA", "issuer": "CNCF", "issue_date": "2023-01-05",
                 "expiryDate": "2026-01-05", "credential_id": "ABC-123",
                 "credentialUrl": "https://cncf.io/verify"}
            ]
        });
        let cert = &normalize(&raw).certification[0];
        assert_eq!(cert.issue_date_display, "01/2023");
        assert_eq!(cert.expiry_date_display, "01/2026");
        assert_eq!(cert.credential_id, "ABC-123");
        assert_eq!(cert.credential_url, "https://cncf.io/verify");
    }

    #[test]
    fn test_skills_keep_only_text_entries() {
        let resume = normalize(&json!({"skills": ["Rust", "", {"x": 1}, "SQL"]}));
        assert_eq!(resume.skills, vec!["Rust", "SQL"]);
    }

    #[test]
    fn test_epoch_millis_dates_are_accepted() {
        let raw = json!({"experiences": [{"startDate": 1_710_460_800_000_i64}]});
        assert_eq!(normalize(&raw).experience[0].start_date_display, "03/2024");
    }
}
