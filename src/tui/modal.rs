// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return actions.
// App just holds Option<Modal>, input routing acts on returned ModalAction.

use crate::roster::{Notice, StudentId};
use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    Close,
    /// The user accepted a confirmation prompt
    Confirm,
}

/// Available modal types
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Keyboard shortcuts
    Help,
    /// Blocking message the user must acknowledge
    Alert(Notice),
    /// Yes/no prompt before deleting a student
    ConfirmDelete { id: StudentId, name: String },
}

impl Modal {
    pub fn help() -> Self {
        Modal::Help
    }

    pub fn alert(notice: Notice) -> Self {
        Modal::Alert(notice)
    }

    pub fn confirm_delete(id: StudentId, name: impl Into<String>) -> Self {
        Modal::ConfirmDelete {
            id,
            name: name.into(),
        }
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::Alert(_) => match key {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::ConfirmDelete { .. } => match key {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => ModalAction::Confirm,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => ModalAction::Close,
                _ => ModalAction::None,
            },
        }
    }
}
