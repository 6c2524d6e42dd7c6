//! Contracts for TUI components
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                    App                      │
//! │  (routes keys: modal > draft > table)       │
//! └─────────────────────────────────────────────┘
//!                       │
//!              ┌────────┴────────┐
//!              ▼                 ▼
//!        ┌──────────┐     ┌──────────────┐
//!        │  Roster  │     │   Student    │
//!        │  Table   │     │   Form       │
//!        └──────────┘     └──────────────┘
//! ```
//!
//! - [`Interactive`] - components that consume keyboard input

mod interactive;

pub use interactive::{Handled, Interactive};
