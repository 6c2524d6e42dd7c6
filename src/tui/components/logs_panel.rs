//! Logs panel component
//!
//! Shows the tail of the in-memory log buffer, color-coded by level. Always
//! follows the newest entry.

use crate::logging::{LogEntry, LogLevel};
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the last entries that fit in `area`
pub fn render(f: &mut Frame, area: Rect, entries: &[LogEntry], theme: &Theme) {
    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| ListItem::new(format_log_entry(entry)).style(log_level_style(&entry.level, theme)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.muted))
            .title(" Logs "),
    );

    f.render_widget(list, area);
}

/// Rows available for entries inside the panel borders
pub fn visible_rows(area: Rect) -> usize {
    area.height.saturating_sub(2) as usize
}

fn format_log_entry(entry: &LogEntry) -> String {
    // Last path segment is enough to tell modules apart
    let module = entry.target.rsplit("::").next().unwrap_or(&entry.target);
    format!(
        "{} {:5} {:<10} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        module,
        entry.message
    )
}

fn log_level_style(level: &LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default().fg(theme.error),
        LogLevel::Warn => Style::default().fg(theme.warning),
        LogLevel::Info => Style::default().fg(theme.foreground),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.muted),
    }
}
