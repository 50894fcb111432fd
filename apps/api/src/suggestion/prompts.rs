// Section-specific prompt templates for the suggestion chain.
// Replace `{context}` before sending.

use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

pub const SUMMARY_PROMPT_TEMPLATE: &str =
    "Write a professional summary for someone with this background: {context}";

pub const EXPERIENCE_PROMPT_TEMPLATE: &str =
    "Write a strong work experience bullet point for this role: {context}";

pub const EDUCATION_PROMPT_TEMPLATE: &str =
    "Write a short academic background summary based on this: {context}";

/// Resume sections eligible for a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Summary,
    Experience,
    Education,
}

impl Section {
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Summary => "summary",
            Section::Experience => "experience",
            Section::Education => "education",
        }
    }

    fn template(self) -> &'static str {
        match self {
            Section::Summary => SUMMARY_PROMPT_TEMPLATE,
            Section::Experience => EXPERIENCE_PROMPT_TEMPLATE,
            Section::Education => EDUCATION_PROMPT_TEMPLATE,
        }
    }

    /// Builds the provider prompt for this section. Context is inserted verbatim.
    pub fn prompt(self, context: &str) -> String {
        self.template().replace("{context}", context)
    }

    /// Deterministic last-tier suggestion.
    pub fn fallback_suggestion(self) -> String {
        format!("This is a sample {} suggestion.", self.as_str())
    }
}

impl FromStr for Section {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summary" => Ok(Section::Summary),
            "experience" => Ok(Section::Experience),
            "education" => Ok(Section::Education),
            _ => Err(AppError::InvalidSection),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_per_section() {
        assert_eq!(
            Section::Summary.prompt("5 years in backend engineering"),
            "Write a professional summary for someone with this background: 5 years in backend engineering"
        );
        assert_eq!(
            Section::Experience.prompt("SRE at a bank"),
            "Write a strong work experience bullet point for this role: SRE at a bank"
        );
        assert_eq!(
            Section::Education.prompt(""),
            "Write a short academic background summary based on this: "
        );
    }

    #[test]
    fn test_context_with_braces_is_not_reinterpreted() {
        let prompt = Section::Summary.prompt("likes {context} literally");
        assert!(prompt.ends_with("likes {context} literally"));
    }

    #[test]
    fn test_parse_is_exact_match() {
        assert_eq!("education".parse::<Section>().unwrap(), Section::Education);
        assert!(matches!("Summary".parse::<Section>(), Err(AppError::InvalidSection)));
        assert!(matches!("skills".parse::<Section>(), Err(AppError::InvalidSection)));
        assert!(matches!("".parse::<Section>(), Err(AppError::InvalidSection)));
    }

    #[test]
    fn test_fallback_text() {
        assert_eq!(
            Section::Experience.fallback_suggestion(),
            "This is a sample experience suggestion."
        );
    }
}
