//! Client-side validation run before any mutating request
//!
//! Rules are checked in a fixed order and the first failure wins:
//! 1. name pattern and length
//! 2. duplicate (name, grade, major) among the other records
//! 3. grade and major selected

use super::model::{Draft, Grade, Major, NewStudent, Student, StudentFields, StudentId};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Minimum number of characters in a name
pub const MIN_NAME_LEN: usize = 3;

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9\s]*$").expect("name pattern compiles"))
}

/// Rejection reasons, reported to the user verbatim
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    InvalidName,
    Duplicate,
    MissingSelection,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName => {
                write!(f, "name must start with a letter and be at least 3 characters.")
            }
            Self::Duplicate => write!(f, "duplicate student."),
            Self::MissingSelection => write!(f, "grade and major are required."),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A draft that passed every rule; all fields are present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    pub name: String,
    pub grade: Grade,
    pub major: Major,
}

impl ValidDraft {
    pub fn into_new_student(self, id: StudentId) -> NewStudent {
        NewStudent {
            id,
            name: self.name,
            grade: self.grade,
            major: self.major,
        }
    }

    pub fn into_fields(self) -> StudentFields {
        StudentFields {
            name: self.name,
            grade: self.grade,
            major: self.major,
        }
    }
}

/// Check that a name starts with a letter, holds only letters, digits and
/// whitespace, and is long enough
pub fn is_valid_name(name: &str) -> bool {
    name.chars().count() >= MIN_NAME_LEN && name_pattern().is_match(name)
}

/// Validate `draft` against the current roster.
///
/// `editing` names the record being edited; it is skipped by the duplicate
/// check so saving an unchanged row is allowed.
pub fn validate(
    draft: &Draft,
    existing: &[Student],
    editing: Option<StudentId>,
) -> Result<ValidDraft, ValidationError> {
    if !is_valid_name(&draft.name) {
        return Err(ValidationError::InvalidName);
    }

    let duplicate = existing.iter().any(|s| {
        Some(s.id) != editing
            && s.name == draft.name
            && Some(s.grade) == draft.grade
            && Some(s.major) == draft.major
    });
    if duplicate {
        return Err(ValidationError::Duplicate);
    }

    match (draft.grade, draft.major) {
        (Some(grade), Some(major)) => Ok(ValidDraft {
            name: draft.name.clone(),
            grade,
            major,
        }),
        _ => Err(ValidationError::MissingSelection),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> Student {
        Student {
            id: 1,
            name: "Ann Lee".to_string(),
            grade: Grade::B,
            major: Major::Biotechnology,
        }
    }

    fn draft(name: &str, grade: Option<Grade>, major: Option<Major>) -> Draft {
        Draft {
            name: name.to_string(),
            grade,
            major,
        }
    }

    #[test]
    fn test_name_rule() {
        assert!(is_valid_name("Ann"));
        assert!(is_valid_name("Ann Lee 2"));
        assert!(!is_valid_name("1Al"));
        assert!(!is_valid_name("Al"));
        assert!(!is_valid_name(" Ann"));
        assert!(!is_valid_name("Ann-Lee"));
        assert!(!is_valid_name(""));
    }

    #[test]
    fn test_valid_draft_passes() {
        let d = draft("Bob Ray", Some(Grade::A), Some(Major::CivilEngineering));
        let valid = validate(&d, &[ann()], None).unwrap();
        assert_eq!(valid.name, "Bob Ray");
        assert_eq!(valid.grade, Grade::A);
        assert_eq!(valid.major, Major::CivilEngineering);
    }

    #[test]
    fn test_duplicate_rejected_on_create() {
        let d = draft("Ann Lee", Some(Grade::B), Some(Major::Biotechnology));
        assert_eq!(validate(&d, &[ann()], None), Err(ValidationError::Duplicate));
    }

    #[test]
    fn test_duplicate_ignores_record_being_edited() {
        let d = draft("Ann Lee", Some(Grade::B), Some(Major::Biotechnology));
        assert!(validate(&d, &[ann()], Some(1)).is_ok());
        assert_eq!(
            validate(&d, &[ann()], Some(2)),
            Err(ValidationError::Duplicate)
        );
    }

    #[test]
    fn test_rules_short_circuit_in_order() {
        // Bad name wins over a missing selection
        let d = draft("1Al", None, None);
        assert_eq!(validate(&d, &[], None), Err(ValidationError::InvalidName));

        // Duplicate is only possible with selections set, so an unset
        // selection falls through to rule 3
        let d = draft("Ann Lee", None, Some(Major::Biotechnology));
        assert_eq!(
            validate(&d, &[ann()], None),
            Err(ValidationError::MissingSelection)
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::InvalidName.to_string(),
            "name must start with a letter and be at least 3 characters."
        );
        assert_eq!(ValidationError::Duplicate.to_string(), "duplicate student.");
        assert_eq!(
            ValidationError::MissingSelection.to_string(),
            "grade and major are required."
        );
    }
}
