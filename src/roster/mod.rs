//! Student roster core
//!
//! Everything the front ends share lives here. The TUI and the CLI are thin
//! drivers over these modules:
//!
//! ```text
//! model ──► validation ──► state (pure transitions)
//!                            │  Ticket           ▲ Outcome
//!                            ▼                   │
//!                         effects ──► directory (HTTP / demo / fakes)
//!
//! controller = state + effects, awaited inline (CLI, tests)
//! ```
//!
//! The TUI never awaits a request while holding state: it takes a `Ticket`
//! from `RosterState`, spawns `effects::execute`, and applies the returned
//! `Completion` when it arrives on the event loop.

pub mod controller;
pub mod directory;
pub mod effects;
pub mod error;
pub mod model;
pub mod state;
pub mod validation;

pub use controller::Roster;
pub use directory::HttpDirectory;
pub use error::RosterError;
pub use model::{Draft, DraftField, Grade, Major, NewStudent, Student, StudentFields, StudentId};
pub use state::{Completion, Notice, Outcome, RosterState, RowMode, Ticket};
