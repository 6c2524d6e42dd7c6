//! Service and roster error types

use super::model::StudentId;
use super::validation::ValidationError;
use std::fmt;

/// Which directory call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Loading the roster
    List,
    /// Re-reading the roster to pick the next id before a create
    Lookup,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Lookup => "lookup",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    /// Message shown to the user when this operation fails
    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::List => "Failed to load students.",
            Self::Lookup => "Failed to fetch student data. Please try again later.",
            Self::Create => "Failed to create student. Please try again later.",
            Self::Update => "Failed to update student. Please try again later.",
            Self::Delete => "Failed to delete student. Please try again later.",
        }
    }
}

/// What went wrong talking to the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// Connection, timeout or other transport error
    Network(String),
    /// Non-success HTTP status
    Status { status: u16, body: String },
    /// Response body did not decode into the expected shape
    Schema(String),
    /// HTTP client could not be built
    Client(String),
}

/// A failed call to the Student Directory Service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError {
    pub operation: Operation,
    pub kind: FailureKind,
}

impl ServiceError {
    pub fn new(operation: Operation, kind: FailureKind) -> Self {
        Self { operation, kind }
    }

    pub fn network(operation: Operation, message: impl Into<String>) -> Self {
        Self::new(operation, FailureKind::Network(message.into()))
    }

    pub fn status(operation: Operation, status: u16, body: impl Into<String>) -> Self {
        Self::new(
            operation,
            FailureKind::Status {
                status,
                body: body.into(),
            },
        )
    }

    pub fn schema(operation: Operation, message: impl Into<String>) -> Self {
        Self::new(operation, FailureKind::Schema(message.into()))
    }

    /// Re-tag the error with the operation the caller was performing
    pub fn during(mut self, operation: Operation) -> Self {
        self.operation = operation;
        self
    }

    pub fn user_message(&self) -> &'static str {
        self.operation.failure_message()
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = self.operation.as_str();
        match &self.kind {
            FailureKind::Network(msg) => write!(f, "{} failed: network error: {}", op, msg),
            FailureKind::Status { status, body } if body.is_empty() => {
                write!(f, "{} failed: HTTP {}", op, status)
            }
            FailureKind::Status { status, body } => {
                write!(f, "{} failed: HTTP {}: {}", op, status, body)
            }
            FailureKind::Schema(msg) => write!(f, "{} failed: unexpected payload: {}", op, msg),
            FailureKind::Client(msg) => write!(f, "{} failed: client error: {}", op, msg),
        }
    }
}

impl std::error::Error for ServiceError {}

/// Anything a roster operation can report back to its caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    Validation(ValidationError),
    Service(ServiceError),
    /// The id is not in the roster
    UnknownStudent(StudentId),
}

impl RosterError {
    /// Text for an alert or stderr
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Service(e) => e.user_message().to_string(),
            Self::UnknownStudent(id) => format!("Student {} not found.", id),
        }
    }
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "validation failed: {}", e),
            Self::Service(e) => write!(f, "{}", e),
            Self::UnknownStudent(id) => write!(f, "student {} not found", id),
        }
    }
}

impl std::error::Error for RosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Service(e) => Some(e),
            Self::UnknownStudent(_) => None,
        }
    }
}

impl From<ValidationError> for RosterError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<ServiceError> for RosterError {
    fn from(e: ServiceError) -> Self {
        Self::Service(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_display() {
        let err = ServiceError::status(Operation::Create, 500, "boom");
        assert_eq!(err.to_string(), "create failed: HTTP 500: boom");

        let err = ServiceError::status(Operation::Delete, 404, "");
        assert_eq!(err.to_string(), "delete failed: HTTP 404");
    }

    #[test]
    fn test_during_retags_message() {
        let err = ServiceError::network(Operation::List, "refused").during(Operation::Lookup);
        assert_eq!(err.operation, Operation::Lookup);
        assert_eq!(
            err.user_message(),
            "Failed to fetch student data. Please try again later."
        );
    }

    #[test]
    fn test_roster_error_user_message() {
        let err = RosterError::from(ValidationError::Duplicate);
        assert_eq!(err.user_message(), "duplicate student.");

        let err = RosterError::from(ServiceError::network(Operation::Update, "timeout"));
        assert_eq!(
            err.user_message(),
            "Failed to update student. Please try again later."
        );
    }
}
