//! Sign-in / sign-up form state (the "cadastro" screen)

use crate::model::{AuthOutcome, Credentials, Registration, UserRecord};

use super::request::{Request, RequestKind, RequestTracker, Response};

/// Which field set the form shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn heading(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Hello, Welcome Back!",
            AuthMode::SignUp => "Hello, Welcome!",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Entrar",
            AuthMode::SignUp => "Cadastrar",
        }
    }

    pub fn fields(&self) -> &'static [AuthField] {
        match self {
            AuthMode::SignIn => &[AuthField::Email, AuthField::Password],
            AuthMode::SignUp => &[AuthField::Name, AuthField::Email, AuthField::Password],
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Name,
    Email,
    Password,
}

impl AuthField {
    pub fn label(&self) -> &'static str {
        match self {
            AuthField::Name => "Nome",
            AuthField::Email => "E-mail",
            AuthField::Password => "Senha",
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, AuthField::Password)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

#[derive(Debug, Default)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
    pub status: AuthStatus,
    focus: usize,
    user: Option<UserRecord>,
    tracker: RequestTracker,
}

impl AuthForm {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn focused(&self) -> AuthField {
        let fields = self.mode.fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.mode.fields().len();
    }

    pub fn focus_prev(&mut self) {
        let len = self.mode.fields().len();
        self.focus = (self.focus + len - 1) % len;
    }

    pub fn value(&self, field: AuthField) -> &str {
        match field {
            AuthField::Name => &self.name,
            AuthField::Email => &self.email,
            AuthField::Password => &self.password,
        }
    }

    pub fn set_field(&mut self, field: AuthField, value: impl Into<String>) {
        let value = value.into();
        match field {
            AuthField::Name => self.name = value,
            AuthField::Email => self.email = value,
            AuthField::Password => self.password = value,
        }
    }

    /// Switch between sign-in and sign-up, clearing any shown message and
    /// superseding an outstanding submission.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.focus = 0;
        self.status = AuthStatus::Idle;
        self.tracker.invalidate(RequestKind::Auth);
    }

    /// Validate and build the submission for the current mode.
    pub fn submit(&mut self) -> Option<Request> {
        let missing = self
            .mode
            .fields()
            .iter()
            .any(|field| self.value(*field).trim().is_empty());
        if missing {
            self.status = AuthStatus::Failed("Preencha todos os campos obrigatórios".to_string());
            return None;
        }

        self.status = AuthStatus::Submitting;
        let ticket = self.tracker.issue(RequestKind::Auth);
        let email = self.email.trim().to_string();
        Some(match self.mode {
            AuthMode::SignIn => Request::SignIn {
                ticket,
                credentials: Credentials {
                    email,
                    password: self.password.clone(),
                },
            },
            AuthMode::SignUp => Request::SignUp {
                ticket,
                registration: Registration {
                    name: self.name.trim().to_string(),
                    email,
                    password: self.password.clone(),
                },
            },
        })
    }

    /// Apply a submission result. Returns false for responses this form did
    /// not issue or that were superseded.
    pub fn apply(&mut self, response: Response) -> bool {
        let Response::Auth { ticket, result } = response else {
            return false;
        };
        if !self.tracker.accept(ticket) {
            return false;
        }
        self.status = match result {
            Ok(AuthOutcome::Accepted { message, user }) => {
                if let Some(user) = user {
                    tracing::info!(user_id = user.id, "signed in");
                    self.user = Some(user);
                }
                self.password.clear();
                AuthStatus::Succeeded(message)
            }
            Ok(AuthOutcome::Rejected { message }) => AuthStatus::Failed(message),
            Err(e) => {
                tracing::warn!("auth request failed: {}", e);
                AuthStatus::Failed(format!("Erro: {}", e))
            }
        };
        true
    }

    pub fn is_submitting(&self) -> bool {
        self.status == AuthStatus::Submitting
    }

    /// Hand the authenticated user over to the session.
    pub fn take_user(&mut self) -> Option<UserRecord> {
        self.user.take()
    }
}
