// Theme support for the TUI
//
// Color palettes selected via `theme` in the config file.
// "auto" uses the terminal's ANSI palette, named themes use true color (RGB).

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Table
    pub header: Color,
    pub row_even: Color,
    pub row_odd: Color,
    pub selection: Color,
    pub editing: Color,
    pub id: Color,

    // Feedback
    pub success: Color,
    pub error: Color,
    pub warning: Color,

    // Chrome
    pub background: Color,
    pub foreground: Color,
    pub selection_fg: Color,
    pub border_type: BorderType,
    pub title: Color,
    pub border: Color,
    pub highlight: Color,
    pub status_bar: Color,
    pub muted: Color,
}

impl Theme {
    /// Load theme by name; unknown names get "auto"
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            "gruvbox" => Self::gruvbox(),
            _ => Self::auto(),
        }
    }

    /// Auto theme - uses terminal's ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            header: Color::Cyan,
            row_even: Color::Reset,
            row_odd: Color::DarkGray,
            selection: Color::Blue,
            editing: Color::Yellow,
            id: Color::Gray,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            background: Color::Reset,
            foreground: Color::Reset,
            selection_fg: Color::White,
            border_type: BorderType::Plain,
            title: Color::Cyan,
            border: Color::White,
            highlight: Color::Yellow,
            status_bar: Color::Green,
            muted: Color::DarkGray,
        }
    }

    /// Dracula theme - https://draculatheme.com
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            header: Color::Rgb(0x8b, 0xe9, 0xfd),    // cyan
            row_even: Color::Rgb(0x28, 0x2a, 0x36),  // background
            row_odd: Color::Rgb(0x34, 0x37, 0x46),   // current line
            selection: Color::Rgb(0x44, 0x47, 0x5a), // selection
            editing: Color::Rgb(0xff, 0xb8, 0x6c),   // orange
            id: Color::Rgb(0x62, 0x72, 0xa4),        // comment
            success: Color::Rgb(0x50, 0xfa, 0x7b),   // green
            error: Color::Rgb(0xff, 0x55, 0x55),     // red
            warning: Color::Rgb(0xf1, 0xfa, 0x8c),   // yellow
            background: Color::Rgb(0x28, 0x2a, 0x36),
            foreground: Color::Rgb(0xf8, 0xf8, 0xf2),
            selection_fg: Color::Rgb(0xf8, 0xf8, 0xf2),
            border_type: BorderType::Rounded,
            title: Color::Rgb(0xbd, 0x93, 0xf9),     // purple
            border: Color::Rgb(0x62, 0x72, 0xa4),    // comment
            highlight: Color::Rgb(0xf1, 0xfa, 0x8c), // yellow
            status_bar: Color::Rgb(0x50, 0xfa, 0x7b),
            muted: Color::Rgb(0x62, 0x72, 0xa4),
        }
    }

    /// Nord theme - https://nordtheme.com
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            header: Color::Rgb(0x88, 0xc0, 0xd0),    // frost cyan
            row_even: Color::Rgb(0x2e, 0x34, 0x40),  // polar night 0
            row_odd: Color::Rgb(0x3b, 0x42, 0x52),   // polar night 1
            selection: Color::Rgb(0x43, 0x4c, 0x5e), // polar night 2
            editing: Color::Rgb(0xd0, 0x87, 0x70),   // aurora orange
            id: Color::Rgb(0x81, 0xa1, 0xc1),        // frost blue
            success: Color::Rgb(0xa3, 0xbe, 0x8c),   // aurora green
            error: Color::Rgb(0xbf, 0x61, 0x6a),     // aurora red
            warning: Color::Rgb(0xeb, 0xcb, 0x8b),   // aurora yellow
            background: Color::Rgb(0x2e, 0x34, 0x40),
            foreground: Color::Rgb(0xd8, 0xde, 0xe9),
            selection_fg: Color::Rgb(0xec, 0xef, 0xf4),
            border_type: BorderType::Rounded,
            title: Color::Rgb(0x88, 0xc0, 0xd0),
            border: Color::Rgb(0x4c, 0x56, 0x6a),    // polar night 3
            highlight: Color::Rgb(0xeb, 0xcb, 0x8b),
            status_bar: Color::Rgb(0xa3, 0xbe, 0x8c),
            muted: Color::Rgb(0x4c, 0x56, 0x6a),
        }
    }

    /// Gruvbox theme - https://github.com/morhetz/gruvbox
    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            header: Color::Rgb(0x83, 0xa5, 0x98),    // aqua
            row_even: Color::Rgb(0x28, 0x28, 0x28),  // bg0
            row_odd: Color::Rgb(0x3c, 0x38, 0x36),   // bg1
            selection: Color::Rgb(0x50, 0x49, 0x45), // bg2
            editing: Color::Rgb(0xfe, 0x80, 0x19),   // orange
            id: Color::Rgb(0x92, 0x83, 0x74),        // gray
            success: Color::Rgb(0xb8, 0xbb, 0x26),   // green
            error: Color::Rgb(0xfb, 0x49, 0x34),     // red
            warning: Color::Rgb(0xfa, 0xbd, 0x2f),   // yellow
            background: Color::Rgb(0x28, 0x28, 0x28),
            foreground: Color::Rgb(0xeb, 0xdb, 0xb2),
            selection_fg: Color::Rgb(0xfb, 0xf1, 0xc7),
            border_type: BorderType::Plain,
            title: Color::Rgb(0x83, 0xa5, 0x98),
            border: Color::Rgb(0x92, 0x83, 0x74),
            highlight: Color::Rgb(0xfa, 0xbd, 0x2f),
            status_bar: Color::Rgb(0xb8, 0xbb, 0x26),
            muted: Color::Rgb(0x92, 0x83, 0x74),
        }
    }

    /// Background for table row `index` (alternating)
    pub fn row_style(&self, index: usize) -> Style {
        let bg = if index % 2 == 0 {
            self.row_even
        } else {
            self.row_odd
        };
        Style::default().bg(bg)
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.highlight)
        } else {
            Style::default().fg(self.border)
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::auto()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name_falls_back_to_auto() {
        assert_eq!(Theme::by_name("Nord").name, "nord");
        assert_eq!(Theme::by_name("monokai").name, "auto");
    }

    #[test]
    fn test_rows_alternate() {
        let theme = Theme::dracula();
        assert_ne!(theme.row_style(0), theme.row_style(1));
        assert_eq!(theme.row_style(0), theme.row_style(2));
    }
}
