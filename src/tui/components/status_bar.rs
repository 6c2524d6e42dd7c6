// Status bar component
//
// Roster size, uptime and the keybinds for whatever has focus.

use super::formatters::student_count;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);
    let count = student_count(app.state.students().len());

    let status_text = if bp.at_least(Breakpoint::Wide) {
        format!(" {} │ {} │ {}", count, app.uptime(), app.focus_hint())
    } else {
        format!(" {} │ {}", count, app.focus_hint())
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
