// Title bar component
//
// App name, a spinner while requests are in flight, and the service URL.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let activity = match app.in_flight() {
        0 => String::new(),
        1 => format!(" {} working", app.spinner_char()),
        n => format!(" {} {} requests", app.spinner_char(), n),
    };

    let title_text = format!(" 🎓 Student Management System{}", activity);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.title))
        .title_top(Line::from(" ? ").right_aligned());

    if Breakpoint::from_width(area.width).at_least(Breakpoint::Normal) {
        block = block.title_bottom(Line::from(format!(" {} ", app.service_url())).right_aligned());
    }

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(block);

    f.render_widget(title, area);
}
