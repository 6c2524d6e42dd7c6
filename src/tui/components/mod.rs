// Components module - reusable UI building blocks
//
// - Title bar: app name, request spinner, service URL
// - Roster table: the student rows, including the inline edit row
// - Student form: creation form and draft key handling
// - Logs panel: tail of the in-memory log buffer
// - Status bar: roster size and keybind hints
// - Toast: transient success messages

pub mod formatters;
pub mod logs_panel;
pub mod roster_table;
pub mod status_bar;
pub mod student_form;
pub mod title_bar;
pub mod toast;

pub use roster_table::{RosterTable, TableView};
pub use student_form::{FormInput, StudentForm};
pub use toast::Toast;
