//! Interactive trait for components that handle keyboard input
//!
//! The App routes input to whichever component owns focus. A component
//! either consumes the key or lets it bubble up for App-level handling.

use crossterm::event::KeyEvent;

/// Result of handling a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was not handled, should bubble up
    No,
}

impl Handled {
    pub fn was_handled(self) -> bool {
        self == Self::Yes
    }
}

/// Trait for components that handle keyboard input
///
/// ```text
/// KeyEvent
///    │
///    ▼
/// App (modal, Ctrl+C)
///    │
///    │ if not handled
///    ▼
/// Focused component (via Interactive)
///    │
///    │ Handled::Yes or Handled::No
///    ▼
/// App (fallback: n, e, d, r, ?, q)
/// ```
pub trait Interactive {
    /// Returns `Handled::Yes` if the component consumed the event
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Keybind hints shown in the status bar while this component has focus
    fn focus_hint(&self) -> &'static str;
}
