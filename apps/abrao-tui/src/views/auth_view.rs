//! Cadastro: sign-in and sign-up form

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_textarea::TextArea;

use abrao_core::state::{AuthField, AuthForm, AuthMode, AuthStatus};

use super::{centered_rect, field_text, style_field, text_field};
use crate::widgets::Theme;

/// One text field per form field; the form itself lives in `AuthForm`.
pub struct AuthView {
    name: TextArea<'static>,
    email: TextArea<'static>,
    password: TextArea<'static>,
}

impl AuthView {
    pub fn new() -> Self {
        let mut password = text_field(AuthField::Password.label(), "");
        password.set_mask_char('•');
        Self {
            name: text_field(AuthField::Name.label(), ""),
            email: text_field(AuthField::Email.label(), "nome@exemplo.com"),
            password,
        }
    }

    fn field(&self, field: AuthField) -> &TextArea<'static> {
        match field {
            AuthField::Name => &self.name,
            AuthField::Email => &self.email,
            AuthField::Password => &self.password,
        }
    }

    fn field_mut(&mut self, field: AuthField) -> &mut TextArea<'static> {
        match field {
            AuthField::Name => &mut self.name,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
        }
    }

    pub fn value(&self, field: AuthField) -> String {
        field_text(self.field(field))
    }

    pub fn input(&mut self, field: AuthField, key: KeyEvent) {
        self.field_mut(field).input(key);
    }

    /// Empty the password box after a successful submission.
    pub fn clear_password(&mut self) {
        let mut password = text_field(AuthField::Password.label(), "");
        password.set_mask_char('•');
        self.password = password;
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        form: &AuthForm,
        theme: Theme,
        editing: bool,
    ) {
        frame.render_widget(Block::default().style(theme.base()), area);

        let panel = centered_rect(50, 80, area);
        let block = Block::default()
            .title(form.mode.submit_label())
            .borders(Borders::ALL)
            .border_style(theme.muted());
        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        let fields = form.mode.fields();
        let mut constraints = vec![Constraint::Length(2)]; // Heading
        constraints.extend(fields.iter().map(|_| Constraint::Length(3)));
        constraints.push(Constraint::Length(2)); // Status
        constraints.push(Constraint::Min(0)); // Hints
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        frame.render_widget(
            Paragraph::new(Line::styled(form.mode.heading(), theme.title())),
            chunks[0],
        );

        for (i, field) in fields.iter().enumerate() {
            let mut text = self.field(*field).clone();
            let focused = editing && form.focused() == *field;
            style_field(&mut text, field.label(), focused, theme);
            frame.render_widget(&text, chunks[i + 1]);
        }

        let status = match &form.status {
            AuthStatus::Idle => Line::raw(""),
            AuthStatus::Submitting => Line::styled("Enviando...", theme.muted()),
            AuthStatus::Succeeded(message) => {
                Line::styled(message.clone(), Style::default().fg(theme.success))
            }
            AuthStatus::Failed(message) => Line::styled(message.clone(), theme.error()),
        };
        frame.render_widget(Paragraph::new(status), chunks[fields.len() + 1]);

        let switch = match form.mode.toggled() {
            AuthMode::SignIn => "Já tem conta? t para entrar",
            AuthMode::SignUp => "Não tem conta? t para cadastrar",
        };
        let hints = vec![
            Line::styled(
                "i para editar, Tab para trocar de campo, Enter para enviar",
                theme.muted(),
            ),
            Line::styled(switch, theme.muted()),
        ];
        frame.render_widget(Paragraph::new(hints), chunks[fields.len() + 2]);
    }
}

impl Default for AuthView {
    fn default() -> Self {
        Self::new()
    }
}
