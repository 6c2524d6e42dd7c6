//! Roster table component
//!
//! One row per student with alternating backgrounds. The row being edited
//! renders the shared draft in place of the stored record, with the focused
//! field highlighted.

use super::formatters::truncate;
use super::student_form::{display_value, field_style};
use crate::roster::{DraftField, RosterState, RowMode, StudentId};
use crate::theme::Theme;
use crate::tui::traits::{Handled, Interactive};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

const PAGE: usize = 10;
const MAJOR_WIDTH: usize = 30;

/// Inputs to one table render
pub struct TableView<'a> {
    pub state: &'a RosterState,
    /// Focused draft field when a row is being edited
    pub edit_field: DraftField,
    pub theme: &'a Theme,
    pub show_actions: bool,
    pub focused: bool,
}

pub struct RosterTable {
    table_state: TableState,
    len: usize,
}

impl RosterTable {
    pub fn new() -> Self {
        Self {
            table_state: TableState::default(),
            len: 0,
        }
    }

    /// Keep the selection inside the current row count
    pub fn sync(&mut self, len: usize) {
        self.len = len;
        let selected = match (len, self.table_state.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some(i.min(len - 1)),
        };
        self.table_state.select(selected);
    }

    pub fn selected(&self) -> Option<usize> {
        self.table_state.selected().filter(|&i| i < self.len)
    }

    /// Move the selection onto the row with `id`
    pub fn select_id(&mut self, state: &RosterState, id: StudentId) {
        if let Some(i) = state.students().iter().position(|s| s.id == id) {
            self.table_state.select(Some(i));
        }
    }

    fn move_by(&mut self, delta: isize) {
        if self.len == 0 {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, self.len as isize - 1);
        self.table_state.select(Some(next as usize));
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, view: TableView<'_>) {
        let TableView {
            state,
            edit_field,
            theme,
            show_actions,
            focused,
        } = view;

        let mut header_cells = vec!["ID", "Name", "Grade", "Major"];
        if show_actions {
            header_cells.push("Actions");
        }
        let header = Row::new(header_cells).style(theme.header_style()).height(1);

        let rows: Vec<Row> = state
            .students()
            .iter()
            .enumerate()
            .map(|(i, student)| {
                let editing = state.row_mode(student.id) == RowMode::Editing;
                let mut cells = vec![Cell::from(student.id.to_string()).style(Style::default().fg(theme.id))];

                if editing {
                    let draft = state.form_data();
                    for field in DraftField::ALL {
                        let focused_field = field == edit_field;
                        cells.push(
                            Cell::from(display_value(draft, field, focused_field))
                                .style(field_style(draft, field, focused_field, theme)),
                        );
                    }
                } else {
                    cells.push(Cell::from(student.name.clone()));
                    cells.push(Cell::from(student.grade.as_str()));
                    cells.push(Cell::from(truncate(student.major.as_str(), MAJOR_WIDTH)));
                }

                if show_actions {
                    let hint = if editing { "Enter save · Esc cancel" } else { "e edit · d delete" };
                    cells.push(Cell::from(hint).style(Style::default().fg(theme.muted)));
                }

                let style = if editing {
                    theme.row_style(i).add_modifier(Modifier::BOLD)
                } else {
                    theme.row_style(i).fg(theme.foreground)
                };
                Row::new(cells).style(style)
            })
            .collect();

        let mut widths = vec![
            Constraint::Length(5),
            Constraint::Min(16),
            Constraint::Length(16),
            Constraint::Length(MAJOR_WIDTH as u16 + 4),
        ];
        if show_actions {
            widths.push(Constraint::Length(24));
        }

        let title = if state.students().is_empty() {
            " Students (none) ".to_string()
        } else {
            format!(" Students ({}) ", state.students().len())
        };

        let table = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(
                Style::default()
                    .fg(theme.selection_fg)
                    .bg(theme.selection)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▸ ")
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(theme.border_type)
                    .border_style(theme.border_style(focused))
                    .title(title)
                    .title_bottom(Line::from(" n new · r reload ").right_aligned()),
            );

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}

impl Default for RosterTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Interactive for RosterTable {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_by(1),
            KeyCode::PageUp => self.move_by(-(PAGE as isize)),
            KeyCode::PageDown => self.move_by(PAGE as isize),
            KeyCode::Home | KeyCode::Char('g') => self.move_by(-(self.len as isize)),
            KeyCode::End | KeyCode::Char('G') => self.move_by(self.len as isize),
            _ => return Handled::No,
        }
        Handled::Yes
    }

    fn focus_hint(&self) -> &'static str {
        "↑↓:select  n:new  e:edit  d:delete  r:reload  ?:help  q:quit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(table: &mut RosterTable, code: KeyCode) -> Handled {
        table.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn selection_clamps_to_rows() {
        let mut table = RosterTable::new();
        table.sync(0);
        assert_eq!(table.selected(), None);

        table.sync(3);
        assert_eq!(table.selected(), Some(0));
        press(&mut table, KeyCode::End);
        assert_eq!(table.selected(), Some(2));

        // Last row deleted
        table.sync(2);
        assert_eq!(table.selected(), Some(1));
    }

    #[test]
    fn navigation_keys() {
        let mut table = RosterTable::new();
        table.sync(25);
        assert_eq!(press(&mut table, KeyCode::Down), Handled::Yes);
        assert_eq!(table.selected(), Some(1));
        press(&mut table, KeyCode::PageDown);
        assert_eq!(table.selected(), Some(11));
        press(&mut table, KeyCode::Home);
        assert_eq!(table.selected(), Some(0));
        press(&mut table, KeyCode::Up);
        assert_eq!(table.selected(), Some(0));
        assert_eq!(press(&mut table, KeyCode::Char('x')), Handled::No);
    }
}
