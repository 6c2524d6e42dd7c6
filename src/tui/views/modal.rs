// Modal overlay rendering
//
// Modals are rendered on top of the main content:
// - Help modal: keyboard shortcuts and current config
// - Alert modal: validation and service failures
// - Delete confirmation

use crate::roster::Notice;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;
use crate::tui::modal::Modal;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::Alert(notice) => render_alert(f, app, notice),
        Modal::ConfirmDelete { id, name } => render_confirm_delete(f, app, *id, name),
    }
}

/// Render the help modal overlay
fn render_help(f: &mut Frame, app: &App) {
    let key_style = Style::default().fg(app.theme.highlight);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.title)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(app.theme.border);

    // "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Roster", header_style)),
        kb("↑/↓, j/k", "Select student"),
        kb("PgUp/PgDn", "Jump 10 rows"),
        kb("n", "Show / hide add form"),
        kb("e, Enter", "Edit selected row"),
        kb("d", "Delete selected student"),
        kb("r", "Reload from service"),
        Line::raw(""),
        Line::from(Span::styled("  Form & Edit Row", header_style)),
        kb("Tab/↓", "Next field"),
        kb("←/→", "Choose grade / major"),
        kb("Enter", "Submit / save"),
        kb("Esc", "Cancel"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("?", "Toggle this help"),
        kb("q, Ctrl+C", "Quit"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(app.theme.name.as_str(), key_style),
        ]),
    ]);

    let area = centered_rect(44, 24, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .border_type(app.theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}

fn render_alert(f: &mut Frame, app: &App, notice: &Notice) {
    let (title, color) = match notice {
        Notice::Invalid(_) => (" Invalid Input ", app.theme.warning),
        Notice::Failed(_) => (" Request Failed ", app.theme.error),
        Notice::Success(_) => (" Done ", app.theme.success),
    };
    let message = notice.message();

    let width = (message.width() as u16 + 6).clamp(30, 60);
    let area = centered_rect(width, 5, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(message)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(app.theme.foreground).bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .border_type(app.theme.border_type)
                .title(title)
                .title_bottom(Line::from(" Enter to dismiss ").centered()),
        );

    f.render_widget(paragraph, area);
}

fn render_confirm_delete(f: &mut Frame, app: &App, id: u64, name: &str) {
    let prompt = format!("Delete {} (#{})? [y/N]", name, id);

    let width = (prompt.width() as u16 + 6).clamp(30, 60);
    let area = centered_rect(width, 3, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(prompt)
        .alignment(Alignment::Center)
        .style(Style::default().fg(app.theme.foreground).bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.warning))
                .border_type(app.theme.border_type)
                .title(" Confirm "),
        );

    f.render_widget(paragraph, area);
}
