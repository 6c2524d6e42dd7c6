//! Student records, enumerated fields and the editable draft
//!
//! Wire names match the Student Directory Service exactly: grades are single
//! letters and majors are the human-readable program names. Decoding a record
//! with an unknown grade or major fails, which is how schema mismatches from
//! the service are caught before they reach the roster.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned by the Student Directory Service
pub type StudentId = u64;

/// One enrolled student, as stored by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub grade: Grade,
    pub major: Major,
}

/// Letter grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Grade {
    pub const ALL: [Grade; 6] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::E, Grade::F];

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
            Grade::F => "F",
        }
    }

    /// Parse a select value. Placeholders and unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Degree program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Major {
    #[serde(rename = "Computer science")]
    ComputerScience,
    #[serde(rename = "Information Science")]
    InformationScience,
    #[serde(rename = "Electronics and communication")]
    ElectronicsAndCommunication,
    #[serde(rename = "Electrical and electronics")]
    ElectricalAndElectronics,
    #[serde(rename = "Mechanical engineering")]
    MechanicalEngineering,
    #[serde(rename = "Civil engineering")]
    CivilEngineering,
    #[serde(rename = "Construction technology")]
    ConstructionTechnology,
    #[serde(rename = "Biotechnology")]
    Biotechnology,
    #[serde(rename = "Industrial production")]
    IndustrialProduction,
}

impl Major {
    pub const ALL: [Major; 9] = [
        Major::ComputerScience,
        Major::InformationScience,
        Major::ElectronicsAndCommunication,
        Major::ElectricalAndElectronics,
        Major::MechanicalEngineering,
        Major::CivilEngineering,
        Major::ConstructionTechnology,
        Major::Biotechnology,
        Major::IndustrialProduction,
    ];

    /// Program name as sent over the wire and shown in the table
    pub fn as_str(&self) -> &'static str {
        match self {
            Major::ComputerScience => "Computer science",
            Major::InformationScience => "Information Science",
            Major::ElectronicsAndCommunication => "Electronics and communication",
            Major::ElectricalAndElectronics => "Electrical and electronics",
            Major::MechanicalEngineering => "Mechanical engineering",
            Major::CivilEngineering => "Civil engineering",
            Major::ConstructionTechnology => "Construction technology",
            Major::Biotechnology => "Biotechnology",
            Major::IndustrialProduction => "Industrial production",
        }
    }

    /// Parse a select value, case-insensitively. Placeholders yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for Major {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Step through a select's options, with the empty placeholder before the
/// first option (like a `<select>` whose first entry is "Select ...").
pub fn cycle_option<T: Copy + PartialEq>(options: &[T], current: Option<T>, forward: bool) -> Option<T> {
    let len = options.len();
    if len == 0 {
        return None;
    }
    // Position 0 is the placeholder, 1..=len are the options
    let pos = current
        .and_then(|c| options.iter().position(|o| *o == c))
        .map(|i| i + 1)
        .unwrap_or(0);
    let next = if forward {
        (pos + 1) % (len + 1)
    } else {
        (pos + len) % (len + 1)
    };
    next.checked_sub(1).map(|i| options[i])
}

/// Draft field addressed by `update_draft_field`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DraftField {
    #[default]
    Name,
    Grade,
    Major,
}

impl DraftField {
    pub const ALL: [DraftField; 3] = [DraftField::Name, DraftField::Grade, DraftField::Major];

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Name => "Name",
            DraftField::Grade => "Grade",
            DraftField::Major => "Major",
        }
    }

    pub fn next(self) -> Self {
        match self {
            DraftField::Name => DraftField::Grade,
            DraftField::Grade => DraftField::Major,
            DraftField::Major => DraftField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            DraftField::Name => DraftField::Major,
            DraftField::Grade => DraftField::Name,
            DraftField::Major => DraftField::Grade,
        }
    }
}

/// Pending, unvalidated values shared by the creation form and the edit row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub grade: Option<Grade>,
    pub major: Option<Major>,
}

impl Draft {
    /// Seed a draft from an existing record (entering edit mode)
    pub fn from_student(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            grade: Some(student.grade),
            major: Some(student.major),
        }
    }

    /// Merge one field. Select fields accept their wire value; anything else
    /// (including the placeholder) clears the selection.
    pub fn set(&mut self, field: DraftField, value: &str) {
        match field {
            DraftField::Name => self.name = value.to_string(),
            DraftField::Grade => self.grade = Grade::parse(value),
            DraftField::Major => self.major = Major::parse(value),
        }
    }

    /// Display value for a field (empty for an unset select)
    pub fn value(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Grade => self.grade.map(|g| g.as_str()).unwrap_or(""),
            DraftField::Major => self.major.map(|m| m.as_str()).unwrap_or(""),
        }
    }
}

/// `POST /students` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub id: StudentId,
    pub name: String,
    pub grade: Grade,
    pub major: Major,
}

impl From<NewStudent> for Student {
    fn from(new: NewStudent) -> Self {
        Self {
            id: new.id,
            name: new.name,
            grade: new.grade,
            major: new.major,
        }
    }
}

/// `PUT /students/{id}` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentFields {
    pub name: String,
    pub grade: Grade,
    pub major: Major,
}

/// Tentative id for a new record: one past the last record the service
/// returned, or 1 for an empty collection. The service's echo is authoritative.
///
/// `None` when the last id is already `StudentId::MAX`.
pub fn next_id(students: &[Student]) -> Option<StudentId> {
    match students.last() {
        Some(last) => last.id.checked_add(1),
        None => Some(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_wire_format() {
        let json = r#"{"id":1,"name":"Ann Lee","grade":"B","major":"Biotechnology"}"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.grade, Grade::B);
        assert_eq!(student.major, Major::Biotechnology);
        assert_eq!(serde_json::to_string(&student).unwrap(), json);
    }

    #[test]
    fn test_unknown_grade_is_rejected() {
        let json = r#"{"id":1,"name":"Ann Lee","grade":"Z","major":"Biotechnology"}"#;
        assert!(serde_json::from_str::<Student>(json).is_err());
    }

    #[test]
    fn test_string_id_is_rejected() {
        let json = r#"{"id":"1","name":"Ann Lee","grade":"B","major":"Biotechnology"}"#;
        assert!(serde_json::from_str::<Student>(json).is_err());
    }

    #[test]
    fn test_placeholders_clear_selection() {
        let mut draft = Draft {
            name: "Ann".into(),
            grade: Some(Grade::A),
            major: Some(Major::Biotechnology),
        };
        draft.set(DraftField::Grade, "Select Grade");
        draft.set(DraftField::Major, "default");
        assert_eq!(draft.grade, None);
        assert_eq!(draft.major, None);
        assert_eq!(draft.name, "Ann");
    }

    #[test]
    fn test_major_parse_ignores_case() {
        assert_eq!(
            Major::parse("computer Science"),
            Some(Major::ComputerScience)
        );
        assert_eq!(Major::parse(""), None);
    }

    #[test]
    fn test_cycle_option_wraps_through_placeholder() {
        let grades = Grade::ALL;
        assert_eq!(cycle_option(&grades, None, true), Some(Grade::A));
        assert_eq!(cycle_option(&grades, Some(Grade::F), true), None);
        assert_eq!(cycle_option(&grades, None, false), Some(Grade::F));
        assert_eq!(cycle_option(&grades, Some(Grade::A), false), None);
    }

    #[test]
    fn test_next_id_follows_last_record() {
        assert_eq!(next_id(&[]), Some(1));
        let students = vec![
            Student {
                id: 7,
                name: "Ann Lee".into(),
                grade: Grade::B,
                major: Major::Biotechnology,
            },
            Student {
                id: 3,
                name: "Bob Ray".into(),
                grade: Grade::C,
                major: Major::CivilEngineering,
            },
        ];
        assert_eq!(next_id(&students), Some(4));
    }

    #[test]
    fn test_next_id_stops_at_max() {
        let last = Student {
            id: StudentId::MAX,
            name: "Ann Lee".into(),
            grade: Grade::B,
            major: Major::Biotechnology,
        };
        assert_eq!(next_id(&[last]), None);
    }

    #[test]
    fn test_grade_parse_ignores_case() {
        assert_eq!(Grade::parse("b"), Some(Grade::B));
        assert_eq!(Grade::parse(" f "), Some(Grade::F));
        assert_eq!(Grade::parse("Select Grade"), None);
    }
}
