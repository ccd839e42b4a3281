//! Light and dark palettes

use ratatui::style::{Color, Modifier, Style};

/// Colors used by every screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    /// Publication bars
    pub bars: Color,
    /// Citation line
    pub line: Color,
}

impl Theme {
    pub const LIGHT: Theme = Theme {
        background: Color::White,
        text: Color::Black,
        muted: Color::DarkGray,
        accent: Color::Blue,
        highlight: Color::LightBlue,
        error: Color::Red,
        success: Color::Green,
        bars: Color::Blue,
        line: Color::Red,
    };

    pub const DARK: Theme = Theme {
        background: Color::Black,
        text: Color::White,
        muted: Color::Gray,
        accent: Color::Cyan,
        highlight: Color::DarkGray,
        error: Color::LightRed,
        success: Color::LightGreen,
        bars: Color::LightBlue,
        line: Color::LightRed,
    };

    pub fn for_dark_mode(dark: bool) -> Theme {
        if dark {
            Theme::DARK
        } else {
            Theme::LIGHT
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default().bg(self.highlight).add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }
}
