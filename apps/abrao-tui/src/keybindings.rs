//! Keybinding definitions

use crossterm::event::KeyCode;

/// Keybinding action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Enter command mode
    EnterCommandMode,
    /// Start typing into the screen's text field
    EnterInsertMode,
    /// Close a popup, or go back
    Cancel,
    /// Move up in list
    MoveUp,
    /// Move down in list
    MoveDown,
    /// Previous tab (dashboard) or field (form)
    PrevTab,
    /// Next tab (dashboard) or field (form)
    NextTab,
    /// Jump to the biography tab
    Tab1,
    /// Jump to the publications tab
    Tab2,
    /// Jump to the metrics tab
    Tab3,
    /// Open / submit
    Select,
    /// Toggle help
    ToggleHelp,
    ToggleSidebar,
    ToggleDarkMode,
    /// Switch between most recent and most cited
    ToggleSort,
    /// Step the year filter
    CycleYear,
    /// Move the sidebar keyword cursor
    NextKeyword,
    /// Filter works by the keyword under the cursor
    ApplyKeyword,
    ClearKeyword,
    Export,
    Reload,
    /// Open the form in sign-in mode
    SignIn,
    /// Open the form in sign-up mode
    SignUp,
    /// Switch the form between sign-in and sign-up
    ToggleAuthMode,
}

/// Get the action for a key in normal mode
pub fn normal_mode_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char(':') => Some(Action::EnterCommandMode),
        KeyCode::Char('i') | KeyCode::Char('/') => Some(Action::EnterInsertMode),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => Some(Action::PrevTab),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => Some(Action::NextTab),
        KeyCode::Char('1') => Some(Action::Tab1),
        KeyCode::Char('2') => Some(Action::Tab2),
        KeyCode::Char('3') => Some(Action::Tab3),
        KeyCode::Char('b') => Some(Action::ToggleSidebar),
        KeyCode::Char('d') => Some(Action::ToggleDarkMode),
        KeyCode::Char('o') => Some(Action::ToggleSort),
        KeyCode::Char('y') => Some(Action::CycleYear),
        KeyCode::Char('n') => Some(Action::NextKeyword),
        KeyCode::Char('f') => Some(Action::ApplyKeyword),
        KeyCode::Char('x') => Some(Action::ClearKeyword),
        KeyCode::Char('e') => Some(Action::Export),
        KeyCode::Char('r') => Some(Action::Reload),
        KeyCode::Char('s') => Some(Action::SignIn),
        KeyCode::Char('S') => Some(Action::SignUp),
        KeyCode::Char('t') => Some(Action::ToggleAuthMode),
        KeyCode::Enter => Some(Action::Select),
        KeyCode::Esc => Some(Action::Cancel),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vim_and_arrow_keys_agree() {
        assert_eq!(normal_mode_action(KeyCode::Char('j')), normal_mode_action(KeyCode::Down));
        assert_eq!(normal_mode_action(KeyCode::Char('l')), normal_mode_action(KeyCode::Tab));
        assert_eq!(normal_mode_action(KeyCode::BackTab), Some(Action::PrevTab));
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(normal_mode_action(KeyCode::Char('z')), None);
        assert_eq!(normal_mode_action(KeyCode::F(5)), None);
    }
}
