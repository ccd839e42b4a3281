//! TUI views, one per route

mod auth_view;
mod home_view;
mod profile_view;

pub use auth_view::AuthView;
pub use home_view::HomeView;
pub use profile_view::ProfileView;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};
use tui_textarea::TextArea;

use crate::widgets::Theme;

/// Single-line text field with a bordered title.
pub(crate) fn text_field(title: &str, placeholder: &str) -> TextArea<'static> {
    let mut field = TextArea::default();
    field.set_block(Block::default().title(title.to_string()).borders(Borders::ALL));
    field.set_placeholder_text(placeholder.to_string());
    field.set_cursor_line_style(Style::default());
    field
}

/// Current text of a single-line field.
pub(crate) fn field_text(field: &TextArea<'_>) -> String {
    field.lines().join(" ")
}

/// Restyle a field's border for focus and theme.
pub(crate) fn style_field(field: &mut TextArea<'_>, title: &str, focused: bool, theme: Theme) {
    let border = if focused {
        Style::default().fg(theme.accent)
    } else {
        theme.muted()
    };
    field.set_block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_style(border),
    );
    field.set_style(theme.base());
}

/// Helper function to create a centered rect
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
