//! Roster state and its transitions
//!
//! `RosterState` owns everything the front end shows: the records, which row
//! is being edited, the shared draft and the creation form toggle. Every
//! method here is synchronous and does no IO. Mutating operations are split
//! in two:
//!
//! - `prepare_*` validates and returns a `Ticket` describing the request
//! - `apply` folds the request's `Outcome` back in once it completes
//!
//! A failed request never changes state; it only produces a `Notice`.

use super::error::{RosterError, ServiceError};
use super::model::{Draft, DraftField, Student, StudentFields, StudentId};
use super::validation::{self, ValidDraft, ValidationError};

/// Display mode of a single row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMode {
    Viewing,
    Editing,
}

/// A directory call the driver should perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    LoadAll,
    /// Re-read the collection for the next id, then create
    Create(ValidDraft),
    Update { id: StudentId, fields: StudentFields },
    Delete { id: StudentId },
}

impl Request {
    pub fn label(&self) -> &'static str {
        match self {
            Self::LoadAll => "load",
            Self::Create(_) => "create",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
        }
    }
}

/// A request tagged with a sequence number for log correlation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub seq: u64,
    pub request: Request,
}

/// Result of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Loaded(Result<Vec<Student>, ServiceError>),
    Created(Result<Student, ServiceError>),
    Updated {
        id: StudentId,
        result: Result<Student, ServiceError>,
    },
    Deleted {
        id: StudentId,
        result: Result<(), ServiceError>,
    },
}

/// An outcome paired with the ticket it answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub seq: u64,
    pub outcome: Outcome,
}

/// Message for the user after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Transient confirmation
    Success(String),
    /// Rejected before any request was sent
    Invalid(ValidationError),
    /// The service call failed
    Failed(ServiceError),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Self::Success(msg) => msg.clone(),
            Self::Invalid(e) => e.to_string(),
            Self::Failed(e) => e.user_message().to_string(),
        }
    }

    /// Whether the user must acknowledge this notice
    pub fn is_blocking(&self) -> bool {
        !matches!(self, Self::Success(_))
    }
}

/// Client-side roster state
#[derive(Debug, Clone, Default)]
pub struct RosterState {
    students: Vec<Student>,
    editing_id: Option<StudentId>,
    form_data: Draft,
    show_form: bool,
    next_seq: u64,
}

impl RosterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn editing_id(&self) -> Option<StudentId> {
        self.editing_id
    }

    pub fn form_data(&self) -> &Draft {
        &self.form_data
    }

    pub fn show_form(&self) -> bool {
        self.show_form
    }

    pub fn row_mode(&self, id: StudentId) -> RowMode {
        if self.editing_id == Some(id) {
            RowMode::Editing
        } else {
            RowMode::Viewing
        }
    }

    fn ticket(&mut self, request: Request) -> Ticket {
        self.next_seq += 1;
        Ticket {
            seq: self.next_seq,
            request,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Form and edit transitions
    // ─────────────────────────────────────────────────────────────────────

    /// Show the creation form. The draft is shared with the edit row, so any
    /// open edit is abandoned and the form starts empty.
    pub fn begin_create(&mut self) {
        self.editing_id = None;
        self.form_data = Draft::default();
        self.show_form = true;
    }

    /// Hide the creation form and discard its draft
    pub fn cancel_create(&mut self) {
        self.show_form = false;
        self.form_data = Draft::default();
    }

    pub fn toggle_form(&mut self) {
        if self.show_form {
            self.cancel_create();
        } else {
            self.begin_create();
        }
    }

    /// Put `student`'s row into edit mode, seeding the draft from it.
    /// Any other unsaved edit is dropped.
    pub fn begin_edit(&mut self, student: &Student) {
        self.show_form = false;
        self.editing_id = Some(student.id);
        self.form_data = Draft::from_student(student);
    }

    /// Leave edit mode without saving
    pub fn cancel_edit(&mut self) {
        if self.editing_id.take().is_some() {
            self.form_data = Draft::default();
        }
    }

    /// Merge one field into the draft; validation waits for submit
    pub fn update_draft_field(&mut self, field: DraftField, value: &str) {
        self.form_data.set(field, value);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Request preparation
    // ─────────────────────────────────────────────────────────────────────

    pub fn prepare_load(&mut self) -> Ticket {
        self.ticket(Request::LoadAll)
    }

    /// Run the validation rules over the current draft. `editing` is the
    /// row being saved, excluded from the duplicate check.
    pub fn validate_draft(&self, editing: Option<StudentId>) -> Result<ValidDraft, ValidationError> {
        validation::validate(&self.form_data, &self.students, editing)
    }

    /// Validate the draft for a create
    pub fn prepare_create(&mut self) -> Result<Ticket, ValidationError> {
        let valid = self.validate_draft(None)?;
        Ok(self.ticket(Request::Create(valid)))
    }

    /// Validate the draft for saving row `id`
    pub fn prepare_edit(&mut self, id: StudentId) -> Result<Ticket, RosterError> {
        if self.student(id).is_none() {
            return Err(RosterError::UnknownStudent(id));
        }
        let valid = self.validate_draft(Some(id))?;
        Ok(self.ticket(Request::Update {
            id,
            fields: valid.into_fields(),
        }))
    }

    /// Ticket for deleting `id`. The caller is responsible for confirming
    /// with the user before asking.
    pub fn prepare_delete(&mut self, id: StudentId) -> Result<Ticket, RosterError> {
        if self.student(id).is_none() {
            return Err(RosterError::UnknownStudent(id));
        }
        Ok(self.ticket(Request::Delete { id }))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Completion
    // ─────────────────────────────────────────────────────────────────────

    /// Fold a finished request into the state. Failures leave the state
    /// untouched and come back as a `Notice`.
    pub fn apply(&mut self, outcome: Outcome) -> Option<Notice> {
        match outcome {
            Outcome::Loaded(Ok(students)) => {
                tracing::info!(count = students.len(), "Roster loaded");
                self.students = students;
                // Drop an edit whose row vanished
                if let Some(id) = self.editing_id {
                    if self.student(id).is_none() {
                        self.cancel_edit();
                    }
                }
                None
            }
            Outcome::Loaded(Err(e)) => {
                tracing::error!("Fetch error: {}", e);
                Some(Notice::Failed(e))
            }

            Outcome::Created(Ok(student)) => {
                tracing::info!(id = student.id, "Student created");
                let message = format!("Added {}", student.name);
                self.students.push(student);
                self.form_data = Draft::default();
                self.show_form = false;
                Some(Notice::Success(message))
            }
            Outcome::Created(Err(e)) => {
                tracing::error!("Error creating student: {}", e);
                Some(Notice::Failed(e))
            }

            Outcome::Updated {
                id,
                result: Ok(student),
            } => {
                let message = format!("Saved {}", student.name);
                match self.students.iter_mut().find(|s| s.id == id) {
                    Some(slot) => *slot = student,
                    None => {
                        tracing::warn!(id, "Updated student is no longer in the roster");
                    }
                }
                tracing::info!(id, "Student updated");
                if self.editing_id == Some(id) {
                    self.cancel_edit();
                }
                Some(Notice::Success(message))
            }
            Outcome::Updated { id, result: Err(e) } => {
                tracing::error!(id, "Error updating student: {}", e);
                Some(Notice::Failed(e))
            }

            Outcome::Deleted { id, result: Ok(()) } => {
                let before = self.students.len();
                self.students.retain(|s| s.id != id);
                if self.editing_id == Some(id) {
                    self.cancel_edit();
                }
                tracing::info!(id, removed = before - self.students.len(), "Student deleted");
                Some(Notice::Success(format!("Deleted student {}", id)))
            }
            Outcome::Deleted { id, result: Err(e) } => {
                tracing::error!(id, "Error deleting student: {}", e);
                Some(Notice::Failed(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::error::Operation;
    use crate::roster::model::{Grade, Major};

    fn student(id: StudentId, name: &str, grade: Grade, major: Major) -> Student {
        Student {
            id,
            name: name.to_string(),
            grade,
            major,
        }
    }

    fn loaded() -> RosterState {
        let mut state = RosterState::new();
        state.apply(Outcome::Loaded(Ok(vec![
            student(1, "Ann Lee", Grade::B, Major::Biotechnology),
            student(2, "Bob Ray", Grade::A, Major::CivilEngineering),
        ])));
        state
    }

    #[test]
    fn test_begin_edit_twice_keeps_second() {
        let mut state = loaded();
        let ann = state.students()[0].clone();
        let bob = state.students()[1].clone();

        state.begin_edit(&ann);
        state.update_draft_field(DraftField::Name, "Ann Changed");
        state.begin_edit(&bob);

        assert_eq!(state.editing_id(), Some(2));
        assert_eq!(state.form_data(), &Draft::from_student(&bob));
        assert_eq!(state.row_mode(1), RowMode::Viewing);
        assert_eq!(state.row_mode(2), RowMode::Editing);
        // The abandoned draft never reached the roster
        assert_eq!(state.students()[0].name, "Ann Lee");
    }

    #[test]
    fn test_cancel_edit_returns_to_viewing() {
        let mut state = loaded();
        let ann = state.students()[0].clone();
        state.begin_edit(&ann);
        state.update_draft_field(DraftField::Name, "Ann Changed");
        state.cancel_edit();

        assert_eq!(state.editing_id(), None);
        assert_eq!(state.row_mode(1), RowMode::Viewing);
        assert_eq!(state.form_data(), &Draft::default());
        assert_eq!(state.students()[0].name, "Ann Lee");
    }

    #[test]
    fn test_toggle_form_discards_draft() {
        let mut state = loaded();
        state.toggle_form();
        assert!(state.show_form());
        state.update_draft_field(DraftField::Name, "Cara");
        state.toggle_form();
        assert!(!state.show_form());
        assert_eq!(state.form_data(), &Draft::default());
    }

    #[test]
    fn test_prepare_create_rejects_bad_name() {
        let mut state = loaded();
        state.begin_create();
        state.update_draft_field(DraftField::Name, "Al");
        state.update_draft_field(DraftField::Grade, "A");
        state.update_draft_field(DraftField::Major, "Biotechnology");
        assert_eq!(state.prepare_create(), Err(ValidationError::InvalidName));
    }

    #[test]
    fn test_created_appends_and_closes_form() {
        let mut state = loaded();
        state.begin_create();
        state.update_draft_field(DraftField::Name, "Cara Diaz");
        state.update_draft_field(DraftField::Grade, "C");
        state.update_draft_field(DraftField::Major, "Biotechnology");
        let ticket = state.prepare_create().unwrap();
        assert!(matches!(ticket.request, Request::Create(_)));

        let notice = state.apply(Outcome::Created(Ok(student(
            3,
            "Cara Diaz",
            Grade::C,
            Major::Biotechnology,
        ))));
        assert!(matches!(notice, Some(Notice::Success(_))));
        assert_eq!(state.students().len(), 3);
        assert_eq!(state.students()[2].id, 3);
        assert!(!state.show_form());
        assert_eq!(state.form_data(), &Draft::default());
    }

    #[test]
    fn test_failed_create_keeps_form_open() {
        let mut state = loaded();
        state.begin_create();
        state.update_draft_field(DraftField::Name, "Cara Diaz");
        let err = ServiceError::status(Operation::Create, 500, "");
        let notice = state.apply(Outcome::Created(Err(err.clone())));
        assert_eq!(notice, Some(Notice::Failed(err)));
        assert!(state.show_form());
        assert_eq!(state.form_data().name, "Cara Diaz");
        assert_eq!(state.students().len(), 2);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut state = loaded();
        let ann = state.students()[0].clone();
        state.begin_edit(&ann);
        state.update_draft_field(DraftField::Grade, "A");
        let ticket = state.prepare_edit(1).unwrap();
        let Request::Update { id, fields } = ticket.request else {
            panic!("expected update request");
        };
        assert_eq!(id, 1);
        assert_eq!(fields.grade, Grade::A);

        state.apply(Outcome::Updated {
            id: 1,
            result: Ok(student(1, "Ann Lee", Grade::A, Major::Biotechnology)),
        });
        assert_eq!(state.students()[0].grade, Grade::A);
        assert_eq!(state.students()[1].name, "Bob Ray");
        assert_eq!(state.editing_id(), None);
    }

    #[test]
    fn test_failed_update_keeps_edit_open() {
        let mut state = loaded();
        let ann = state.students()[0].clone();
        state.begin_edit(&ann);
        state.apply(Outcome::Updated {
            id: 1,
            result: Err(ServiceError::network(Operation::Update, "timeout")),
        });
        assert_eq!(state.editing_id(), Some(1));
        assert_eq!(state.students()[0], ann);
    }

    #[test]
    fn test_prepare_edit_duplicate_of_other_row() {
        let mut state = loaded();
        let bob = state.students()[1].clone();
        state.begin_edit(&bob);
        state.update_draft_field(DraftField::Name, "Ann Lee");
        state.update_draft_field(DraftField::Grade, "B");
        state.update_draft_field(DraftField::Major, "Biotechnology");
        assert_eq!(
            state.prepare_edit(2),
            Err(RosterError::Validation(ValidationError::Duplicate))
        );
        assert_eq!(state.editing_id(), Some(2));
    }

    #[test]
    fn test_prepare_edit_unknown_id() {
        let mut state = loaded();
        assert_eq!(state.prepare_edit(99), Err(RosterError::UnknownStudent(99)));
    }

    #[test]
    fn test_deleted_removes_only_that_row() {
        let mut state = loaded();
        state.prepare_delete(1).unwrap();
        state.apply(Outcome::Deleted {
            id: 1,
            result: Ok(()),
        });
        assert_eq!(state.students().len(), 1);
        assert_eq!(state.students()[0].id, 2);
    }

    #[test]
    fn test_failed_load_leaves_roster_empty() {
        let mut state = RosterState::new();
        let notice = state.apply(Outcome::Loaded(Err(ServiceError::status(
            Operation::List,
            500,
            "",
        ))));
        assert!(notice.map(|n| n.is_blocking()).unwrap_or(false));
        assert!(state.students().is_empty());
    }

    #[test]
    fn test_tickets_are_sequenced() {
        let mut state = loaded();
        let a = state.prepare_load();
        let b = state.prepare_delete(2).unwrap();
        assert!(b.seq > a.seq);
    }
}
