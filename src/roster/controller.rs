//! Awaitable roster facade
//!
//! `Roster` pairs a `RosterState` with a directory and runs each operation
//! to completion before returning. The CLI uses it directly; the TUI drives
//! the same state transitions through spawned `effects` instead.

use super::directory::StudentDirectory;
use super::effects;
use super::error::RosterError;
use super::model::{DraftField, Student, StudentId};
use super::state::{Outcome, RosterState};

pub struct Roster<D> {
    state: RosterState,
    directory: D,
}

impl<D: StudentDirectory> Roster<D> {
    pub fn new(directory: D) -> Self {
        Self {
            state: RosterState::new(),
            directory,
        }
    }

    pub fn state(&self) -> &RosterState {
        &self.state
    }

    pub fn students(&self) -> &[Student] {
        self.state.students()
    }

    /// Fetch the whole collection. Failures are logged and leave the roster
    /// as it was; nothing is returned to the caller.
    pub async fn load_all(&mut self) {
        // Already logged by `apply`
        let _ = self.reload().await;
    }

    /// `load_all` for callers that need to know whether it worked. Returns
    /// the number of records loaded.
    pub async fn reload(&mut self) -> Result<usize, RosterError> {
        let result = effects::load(&self.directory).await;
        self.state.apply(Outcome::Loaded(result.clone()));
        Ok(result?.len())
    }

    pub fn begin_create(&mut self) {
        self.state.begin_create();
    }

    pub fn begin_edit(&mut self, student: &Student) {
        self.state.begin_edit(student);
    }

    pub fn update_draft_field(&mut self, field: DraftField, value: &str) {
        self.state.update_draft_field(field, value);
    }

    /// Validate the draft and create a record from it.
    ///
    /// # Errors
    /// `RosterError::Validation` without touching the network, or
    /// `RosterError::Service` if the id lookup or the create call fails.
    pub async fn submit_create(&mut self) -> Result<Student, RosterError> {
        let valid = self.state.validate_draft(None).inspect_err(|e| {
            tracing::debug!("Create rejected: {}", e);
        })?;

        let result = effects::create(&self.directory, valid).await;
        self.state.apply(Outcome::Created(result.clone()));
        Ok(result?)
    }

    /// Validate the draft and save it over record `id`. The edit stays open
    /// on any failure.
    pub async fn submit_edit(&mut self, id: StudentId) -> Result<Student, RosterError> {
        if self.state.student(id).is_none() {
            tracing::warn!(id, "Save requested for a student that is not in the roster");
            return Err(RosterError::UnknownStudent(id));
        }

        let valid = self.state.validate_draft(Some(id)).inspect_err(|e| {
            tracing::debug!(id, "Edit rejected: {}", e);
        })?;

        let result = effects::update(&self.directory, id, valid.into_fields()).await;
        self.state.apply(Outcome::Updated {
            id,
            result: result.clone(),
        });
        Ok(result?)
    }

    /// Delete record `id` once `confirm` agrees. Returns `Ok(false)` when the
    /// user declined; nothing is sent in that case.
    pub async fn delete_student<F>(&mut self, id: StudentId, confirm: F) -> Result<bool, RosterError>
    where
        F: FnOnce(&Student) -> bool,
    {
        let student = self
            .state
            .student(id)
            .cloned()
            .ok_or(RosterError::UnknownStudent(id))?;

        if !confirm(&student) {
            tracing::debug!(id, "Delete not confirmed");
            return Ok(false);
        }

        let result = self.directory.delete(id).await;
        self.state.apply(Outcome::Deleted {
            id,
            result: result.clone(),
        });
        result?;
        Ok(true)
    }
}
