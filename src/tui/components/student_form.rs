//! Draft editor shared by the creation form and the inline edit row
//!
//! The component only tracks which field has focus. Keystrokes are turned
//! into `FormInput` values; the App applies them to the roster draft through
//! `update_draft_field`, so the draft has a single owner.

use crate::roster::model::cycle_option;
use crate::roster::{Draft, DraftField, Grade, Major};
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const GRADE_PLACEHOLDER: &str = "Select Grade";
pub const MAJOR_PLACEHOLDER: &str = "Select Major";

/// What a keystroke means for the draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormInput {
    Ignored,
    /// Focus moved between fields
    Moved,
    /// New value for one field
    Set(DraftField, String),
    Submit,
    Cancel,
}

#[derive(Debug, Default)]
pub struct StudentForm {
    field: DraftField,
}

impl StudentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self) -> DraftField {
        self.field
    }

    /// Focus the name field again
    pub fn reset(&mut self) {
        self.field = DraftField::Name;
    }

    pub fn input(&mut self, key: KeyEvent, draft: &Draft) -> FormInput {
        match key.code {
            KeyCode::Enter => return FormInput::Submit,
            KeyCode::Esc => return FormInput::Cancel,
            KeyCode::Tab | KeyCode::Down => {
                self.field = self.field.next();
                return FormInput::Moved;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.field = self.field.prev();
                return FormInput::Moved;
            }
            _ => {}
        }

        match self.field {
            DraftField::Name => match key.code {
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    let mut name = draft.name.clone();
                    name.push(c);
                    FormInput::Set(DraftField::Name, name)
                }
                KeyCode::Backspace => {
                    let mut name = draft.name.clone();
                    name.pop();
                    FormInput::Set(DraftField::Name, name)
                }
                _ => FormInput::Ignored,
            },
            DraftField::Grade => match key.code {
                KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                    let next = cycle_option(&Grade::ALL, draft.grade, key.code != KeyCode::Left);
                    FormInput::Set(DraftField::Grade, next.map(|g| g.as_str()).unwrap_or("").to_string())
                }
                // Typing the letter picks it directly
                KeyCode::Char(c) => match Grade::parse(&c.to_ascii_uppercase().to_string()) {
                    Some(grade) => FormInput::Set(DraftField::Grade, grade.as_str().to_string()),
                    None => FormInput::Ignored,
                },
                _ => FormInput::Ignored,
            },
            DraftField::Major => match key.code {
                KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                    let next = cycle_option(&Major::ALL, draft.major, key.code != KeyCode::Left);
                    FormInput::Set(DraftField::Major, next.map(|m| m.as_str()).unwrap_or("").to_string())
                }
                _ => FormInput::Ignored,
            },
        }
    }

    pub fn focus_hint(&self) -> &'static str {
        match self.field {
            DraftField::Name => "type:name  Tab:next field  Enter:submit  Esc:cancel",
            _ => "←/→:choose  Tab:next field  Enter:submit  Esc:cancel",
        }
    }

    /// Render the creation form
    pub fn render(&self, f: &mut Frame, area: Rect, draft: &Draft, theme: &Theme) {
        let label_style = Style::default().fg(theme.muted);
        let lines: Vec<Line> = DraftField::ALL
            .iter()
            .map(|&field| {
                let focused = field == self.field;
                let marker = if focused { "▸ " } else { "  " };
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(theme.highlight)),
                    Span::styled(format!("{:<6} ", field.label()), label_style),
                    Span::styled(display_value(draft, field, focused), field_style(draft, field, focused, theme)),
                ])
            })
            .collect();

        let form = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(theme.border_style(true))
                .title(" Add Student "),
        );
        f.render_widget(form, area);
    }
}

/// Cell text for a draft field. The focused name field shows a cursor,
/// focused selects show arrows.
pub fn display_value(draft: &Draft, field: DraftField, focused: bool) -> String {
    let value = draft.value(field);
    match field {
        DraftField::Name if focused => format!("{}▏", value),
        DraftField::Name => value.to_string(),
        DraftField::Grade | DraftField::Major => {
            let shown = if value.is_empty() {
                if field == DraftField::Grade {
                    GRADE_PLACEHOLDER
                } else {
                    MAJOR_PLACEHOLDER
                }
            } else {
                value
            };
            if focused {
                format!("◂ {} ▸", shown)
            } else {
                shown.to_string()
            }
        }
    }
}

pub fn field_style(draft: &Draft, field: DraftField, focused: bool, theme: &Theme) -> Style {
    let base = if draft.value(field).is_empty() && field != DraftField::Name {
        Style::default().fg(theme.muted)
    } else {
        Style::default().fg(theme.foreground)
    };
    if focused {
        base.fg(theme.editing).add_modifier(Modifier::BOLD)
    } else {
        base
    }
}
