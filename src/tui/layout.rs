// Responsive layout for the roster screen
//
// Breakpoints decide what fits: narrow terminals drop the logs panel and the
// actions column, wide ones get a taller logs panel.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Terminal width classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 60 cols: split pane, minimal terminal
    Compact,
    /// 60-99 cols
    Normal,
    /// 100+ cols
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    pub fn at_least(&self, min: Breakpoint) -> bool {
        *self >= min
    }

    /// Rows for the logs panel (0 hides it)
    fn logs_height(&self, screen_height: u16) -> u16 {
        // Keep the table usable on short terminals
        if screen_height < 24 {
            return 0;
        }
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 6,
            Breakpoint::Wide => 8,
        }
    }

    /// Whether the table has room for the actions hint column
    pub fn show_actions(&self) -> bool {
        self.at_least(Breakpoint::Normal)
    }
}

/// Creation form height: three fields plus borders
pub const FORM_HEIGHT: u16 = 5;

/// Screen regions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub breakpoint: Breakpoint,
    pub title: Rect,
    pub table: Rect,
    pub form: Option<Rect>,
    pub logs: Option<Rect>,
    pub status: Rect,
}

impl AppLayout {
    pub fn new(area: Rect, show_form: bool) -> Self {
        let breakpoint = Breakpoint::from_width(area.width);
        let logs_height = breakpoint.logs_height(area.height);

        let mut constraints = vec![Constraint::Length(3), Constraint::Min(5)];
        if show_form {
            constraints.push(Constraint::Length(FORM_HEIGHT));
        }
        if logs_height > 0 {
            constraints.push(Constraint::Length(logs_height));
        }
        constraints.push(Constraint::Length(2));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let mut next = 2;
        let form = show_form.then(|| {
            next += 1;
            chunks[next - 1]
        });
        let logs = (logs_height > 0).then(|| {
            next += 1;
            chunks[next - 1]
        });

        Self {
            breakpoint,
            title: chunks[0],
            table: chunks[1],
            form,
            logs,
            status: chunks[next],
        }
    }
}

/// Centered rect for modal dialogs, clamped to `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(59), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
    }

    #[test]
    fn wide_layout_with_form() {
        let layout = AppLayout::new(Rect::new(0, 0, 120, 40), true);
        let form = layout.form.unwrap();
        let logs = layout.logs.unwrap();

        assert_eq!(layout.title.height, 3);
        assert_eq!(form.height, FORM_HEIGHT);
        assert_eq!(logs.height, 8);
        assert_eq!(layout.status.height, 2);
        assert!(layout.table.y < form.y && form.y < logs.y && logs.y < layout.status.y);
        assert_eq!(layout.status.bottom(), 40);
    }

    #[test]
    fn compact_layout_hides_logs() {
        let layout = AppLayout::new(Rect::new(0, 0, 50, 40), false);
        assert_eq!(layout.form, None);
        assert_eq!(layout.logs, None);
        assert!(!layout.breakpoint.show_actions());
        assert_eq!(layout.table.y, 3);
    }

    #[test]
    fn centered_rect_clamps() {
        let area = Rect::new(0, 0, 30, 10);
        let r = centered_rect(50, 6, area);
        assert_eq!(r.width, 30);
        assert_eq!(r.y, 2);
    }
}
