//! Executes roster requests against a directory
//!
//! These functions hold no state, so the TUI can run them on a spawned task
//! and send the `Completion` back to the event loop.

use super::directory::StudentDirectory;
use super::error::{Operation, ServiceError};
use super::model::{next_id, Student, StudentFields, StudentId};
use super::state::{Completion, Outcome, Request, Ticket};
use super::validation::ValidDraft;

/// Run one ticket to completion
pub async fn execute<D: StudentDirectory>(directory: &D, ticket: Ticket) -> Completion {
    let seq = ticket.seq;
    tracing::debug!(seq, request = ticket.request.label(), "Dispatching request");

    let outcome = match ticket.request {
        Request::LoadAll => Outcome::Loaded(load(directory).await),
        Request::Create(draft) => Outcome::Created(create(directory, draft).await),
        Request::Update { id, fields } => Outcome::Updated {
            id,
            result: update(directory, id, fields).await,
        },
        Request::Delete { id } => Outcome::Deleted {
            id,
            result: directory.delete(id).await,
        },
    };

    tracing::debug!(seq, "Request completed");
    Completion { seq, outcome }
}

pub async fn load<D: StudentDirectory>(directory: &D) -> Result<Vec<Student>, ServiceError> {
    directory.list().await
}

/// Re-read the collection to pick the next id, then create the record
pub async fn create<D: StudentDirectory>(
    directory: &D,
    draft: ValidDraft,
) -> Result<Student, ServiceError> {
    let current = directory
        .list()
        .await
        .map_err(|e| e.during(Operation::Lookup))?;
    let id = next_id(&current)
        .ok_or_else(|| ServiceError::schema(Operation::Lookup, "id space exhausted"))?;
    tracing::debug!(id, "Creating student with next id");
    directory.create(&draft.into_new_student(id)).await
}

pub async fn update<D: StudentDirectory>(
    directory: &D,
    id: StudentId,
    fields: StudentFields,
) -> Result<Student, ServiceError> {
    directory.update(id, &fields).await
}
