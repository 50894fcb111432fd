use std::collections::HashMap;

use crate::errors::AppError;

/// Form fields every resume submission must carry, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "name",
    "email",
    "phone",
    "summary",
    "experience",
    "education",
    "skills",
];

/// One resume submission. Lives for a single request; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub summary: String,
    pub experience: String,
    pub education: String,
    /// Raw comma split of the `skills` field. May contain empty entries.
    pub skills: Vec<String>,
}

impl ResumeData {
    /// Builds resume data from decoded form fields.
    /// Fails with `MissingField` naming the first absent key; empty values are accepted.
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self, AppError> {
        if let Some(missing) = REQUIRED_FIELDS.iter().find(|k| !fields.contains_key(**k)) {
            return Err(AppError::MissingField((*missing).to_string()));
        }

        let field = |key: &str| fields.get(key).cloned().unwrap_or_default();

        Ok(ResumeData {
            name: field("name"),
            email: field("email"),
            phone: field("phone"),
            summary: field("summary"),
            experience: field("experience"),
            education: field("education"),
            skills: split_skills(&field("skills")),
        })
    }
}

/// Splits on `,` only: no trimming, no dedup, empty entries kept.
pub fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_form() -> HashMap<String, String> {
        [
            ("name", "Linus"),
            ("email", "linus@example.com"),
            ("phone", "555-0199"),
            ("summary", "Kernel hacker"),
            ("experience", "Maintainer"),
            ("education", "University of Helsinki"),
            ("skills", "C, git,Linux"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_split_skills_keeps_empty_entries() {
        assert_eq!(split_skills("a,b,,c"), vec!["a", "b", "", "c"]);
    }

    #[test]
    fn test_split_skills_does_not_trim() {
        assert_eq!(split_skills(" rust , go"), vec![" rust ", " go"]);
    }

    #[test]
    fn test_split_skills_empty_input_is_single_empty_entry() {
        assert_eq!(split_skills(""), vec![""]);
    }

    #[test]
    fn test_from_fields_builds_all_fields() {
        let data = ResumeData::from_fields(&full_form()).unwrap();
        assert_eq!(data.name, "Linus");
        assert_eq!(data.education, "University of Helsinki");
        assert_eq!(data.skills, vec!["C", " git", "Linux"]);
    }

    #[test]
    fn test_from_fields_reports_missing_key() {
        let mut form = full_form();
        form.remove("phone");
        match ResumeData::from_fields(&form) {
            Err(AppError::MissingField(key)) => assert_eq!(key, "phone"),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn test_from_fields_reports_first_missing_key_in_order() {
        let mut form = full_form();
        form.remove("skills");
        form.remove("email");
        match ResumeData::from_fields(&form) {
            Err(AppError::MissingField(key)) => assert_eq!(key, "email"),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn test_from_fields_accepts_empty_values() {
        let mut form = full_form();
        form.insert("summary".to_string(), String::new());
        let data = ResumeData::from_fields(&form).unwrap();
        assert_eq!(data.summary, "");
    }
}
