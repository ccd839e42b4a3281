//! Application state and main render loop

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use abrao_core::identifiers::normalize_orcid;
use abrao_core::model::UserRecord;
use abrao_core::state::{
    AuthForm, AuthMode, ChartSlot, DashboardState, HomeState, Request, Response, Route, Tab,
};
use abrao_core::{is_orcid, AbraoConfig, SortOrder};

use crate::keybindings::{normal_mode_action, Action};
use crate::mode::Mode;
use crate::views::{centered_rect, AuthView, HomeView, ProfileView};
use crate::widgets::{ModeIndicator, Theme, WorksChart};

/// The screen behind the current route
pub enum Screen {
    Home { state: HomeState, view: HomeView },
    Dashboard { state: DashboardState, view: ProfileView },
    Cadastro { form: AuthForm, view: AuthView },
}

/// Main application state
pub struct App {
    /// Current mode (NORMAL, INSERT, COMMAND)
    pub mode: Mode,
    pub route: Route,
    pub screen: Screen,
    pub config: AbraoConfig,
    /// User signed in during this run
    pub session: Option<UserRecord>,
    /// Command input buffer
    pub command_buffer: String,
    /// Status message
    pub status_message: Option<String>,
    /// Whether to show the help overlay
    pub show_help: bool,
    /// Works-by-year chart of the open dashboard
    chart: ChartSlot<WorksChart>,
    /// Requests waiting to be dispatched
    outbox: Vec<Request>,
}

impl App {
    /// Create the application on `route`
    pub fn new(config: AbraoConfig, route: Route) -> Self {
        let mut app = Self {
            mode: Mode::Normal,
            route: Route::Home,
            screen: Screen::Home {
                state: HomeState::new(config.api.max_search_results),
                view: HomeView::new(),
            },
            config,
            session: None,
            command_buffer: String::new(),
            status_message: None,
            show_help: false,
            chart: ChartSlot::new(),
            outbox: Vec::new(),
        };
        app.navigate(route);
        app
    }

    /// Leave the current screen and mount the one for `route`.
    pub fn navigate(&mut self, route: Route) {
        tracing::info!("navigating to {}", route);
        self.chart.release();
        self.mode = Mode::Normal;
        self.screen = match &route {
            Route::Home => Screen::Home {
                state: HomeState::new(self.config.api.max_search_results),
                view: HomeView::new(),
            },
            Route::Cadastro(mode) => Screen::Cadastro {
                form: AuthForm::new(*mode),
                view: AuthView::new(),
            },
            Route::Dashboard { author_id } => {
                let mut state = DashboardState::new(author_id.clone(), &self.config.ui);
                self.outbox.push(state.mount());
                Screen::Dashboard {
                    state,
                    view: ProfileView::new(),
                }
            }
        };
        self.route = route;
    }

    /// Drain the requests produced since the last call.
    pub fn take_requests(&mut self) -> Vec<Request> {
        std::mem::take(&mut self.outbox)
    }

    /// Hand a finished request to the current screen.
    pub fn on_response(&mut self, response: Response) {
        let is_stats = matches!(response, Response::Stats { .. });
        let accepted = match &mut self.screen {
            Screen::Home { state, .. } => state.apply(response),
            Screen::Dashboard { state, .. } => state.apply(response),
            Screen::Cadastro { form, view } => {
                let accepted = form.apply(response);
                if let Some(user) = form.take_user() {
                    view.clear_password();
                    tracing::info!(user_id = user.id, "signed in");
                    self.session = Some(user);
                }
                accepted
            }
        };
        if accepted && is_stats {
            self.rebuild_chart();
        }
    }

    fn rebuild_chart(&mut self) {
        if let Screen::Dashboard { state, .. } = &self.screen {
            if let Some(series) = state.stats.loaded() {
                let theme = Theme::for_dark_mode(state.dark_mode);
                self.chart.replace_with(|| WorksChart::new(series, theme));
            }
        }
    }

    fn theme(&self) -> Theme {
        match &self.screen {
            Screen::Dashboard { state, .. } => Theme::for_dark_mode(state.dark_mode),
            _ => Theme::for_dark_mode(self.config.ui.dark_mode),
        }
    }

    /// Render the application
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        // Status bar at top, content in middle, command line at bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Status bar
                Constraint::Min(0),    // Main content
                Constraint::Length(1), // Command line
            ])
            .split(size);

        self.render_status_bar(frame, chunks[0]);

        let editing = self.mode == Mode::Insert;
        match &self.screen {
            Screen::Home { state, view } => {
                view.render(frame, chunks[1], state, self.theme(), editing)
            }
            Screen::Dashboard { state, view } => {
                view.render(frame, chunks[1], state, self.chart.current(), editing)
            }
            Screen::Cadastro { form, view } => {
                view.render(frame, chunks[1], form, self.theme(), editing)
            }
        }

        self.render_command_line(frame, chunks[2]);

        if self.show_help {
            self.render_help_overlay(frame, size);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let user = match &self.session {
            Some(user) => Span::styled(
                format!(" {} ", user.name),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            None => Span::raw(" visitante "),
        };

        let line = Line::from(vec![
            ModeIndicator::new(self.mode).as_span(),
            Span::styled(format!(" {} ", self.route), Style::default().fg(Color::Cyan)),
            Span::raw("|"),
            user,
            Span::raw("| ? ajuda "),
        ]);

        let status_bar = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
        frame.render_widget(status_bar, area);
    }

    fn render_command_line(&self, frame: &mut Frame, area: Rect) {
        let notice = match &self.screen {
            Screen::Dashboard { state, .. } => state.notice.clone(),
            _ => None,
        };
        let content = match self.mode {
            Mode::Command => format!(":{}", self.command_buffer),
            Mode::Insert => "-- INSERIR -- Esc para sair, Enter para enviar".to_string(),
            Mode::Normal => self
                .status_message
                .clone()
                .or(notice)
                .unwrap_or_else(|| self.hint().to_string()),
        };

        frame.render_widget(Paragraph::new(content), area);
    }

    fn hint(&self) -> &'static str {
        match &self.screen {
            Screen::Home { .. } => "i buscar | j/k mover | Enter abrir | s entrar | : comandos",
            Screen::Dashboard { .. } => "1-3 abas | j/k mover | Enter detalhes | o ordenar | y ano",
            Screen::Cadastro { .. } => "i editar | Enter enviar | t alternar | Esc voltar",
        }
    }

    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_text = r#"
Abrao TUI - Ajuda

Navegação:
  j/k       - Mover nas listas
  h/l, Tab  - Aba (ou campo) anterior/seguinte
  1/2/3     - Biografia / Publicações / Métricas
  Enter     - Abrir / enviar
  Esc       - Fechar detalhes / voltar
  i ou /    - Editar o campo de texto
  b         - Mostrar/ocultar barra lateral
  d         - Modo escuro

Perfil:
  o         - Alternar Mais recentes / Mais citadas
  y         - Próximo ano do filtro
  n / f / x - Próxima palavra-chave / filtrar / limpar
  e         - Exportar XML
  r         - Recarregar

Conta:
  s / S     - Entrar / Cadastrar
  t         - Alternar entrar e cadastrar

Comandos (: para o modo de comando):
  :open <orcid>  :go <caminho>  :home
  :signin  :signup  :export  :dark
  :sort [desc]  :year [AAAA]  :reload  :q
"#;

        let block = Block::default()
            .title("Ajuda")
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black));

        let help_area = centered_rect(70, 85, area);
        frame.render_widget(Clear, help_area);
        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, help_area);
    }

    /// Handle a key press, returns true if app should quit
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }
        match self.mode {
            Mode::Normal => self.handle_normal_key(code),
            Mode::Insert => self.handle_insert_key(code, modifiers),
            Mode::Command => self.handle_command_key(code),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) -> bool {
        if self.show_help {
            if matches!(code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return false;
        }

        let Some(action) = normal_mode_action(code) else {
            return false;
        };
        self.status_message = None;

        match action {
            Action::Quit => return true,
            Action::EnterCommandMode => {
                self.mode = Mode::Command;
                self.command_buffer.clear();
            }
            Action::EnterInsertMode => {
                if let Screen::Dashboard { state, .. } = &mut self.screen {
                    if state.profile.loaded().is_none() || state.modal.is_some() {
                        return false;
                    }
                    let requests = state.set_tab(Tab::Publications);
                    self.outbox.extend(requests);
                }
                self.mode = Mode::Insert;
            }
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::SignIn => self.navigate(Route::Cadastro(AuthMode::SignIn)),
            Action::SignUp => self.navigate(Route::Cadastro(AuthMode::SignUp)),
            Action::ToggleDarkMode => self.toggle_dark_mode(),
            other => self.screen_action(other),
        }
        false
    }

    /// Apply a normal-mode action to the current screen.
    fn screen_action(&mut self, action: Action) {
        let mut navigate_to = None;
        let mut requests = Vec::new();

        match &mut self.screen {
            Screen::Home { state, .. } => match action {
                Action::MoveDown => state.select_next(),
                Action::MoveUp => state.select_prev(),
                Action::Select => match state.open_selected() {
                    Some(route) => navigate_to = Some(route),
                    None => requests.extend(state.submit()),
                },
                Action::ToggleSidebar => state.toggle_sidebar(),
                _ => {}
            },
            Screen::Dashboard { state, .. } => {
                if state.modal.is_some() {
                    if matches!(action, Action::Cancel | Action::Select) {
                        state.close_modal();
                    }
                    return;
                }
                match action {
                    Action::MoveDown => state.select_next_work(),
                    Action::MoveUp => state.select_prev_work(),
                    Action::NextTab => requests = state.next_tab(),
                    Action::PrevTab => requests = state.prev_tab(),
                    Action::Tab1 => requests = state.set_tab(Tab::Biography),
                    Action::Tab2 => requests = state.set_tab(Tab::Publications),
                    Action::Tab3 => requests = state.set_tab(Tab::Metrics),
                    Action::Select => {
                        if state.tab == Tab::Publications {
                            requests.extend(state.open_selected_work());
                        }
                    }
                    Action::Cancel => navigate_to = Some(Route::Home),
                    Action::ToggleSidebar => state.toggle_sidebar(),
                    Action::ToggleSort => requests.extend(state.toggle_sort()),
                    Action::CycleYear => state.cycle_year_filter(),
                    Action::NextKeyword => state.keyword_cursor_next(),
                    Action::ApplyKeyword => requests = state.select_keyword_at_cursor(),
                    Action::ClearKeyword => requests = state.clear_keyword(),
                    Action::Export => requests.push(state.export(self.config.export_dir())),
                    Action::Reload => {
                        self.chart.release();
                        requests = state.reload();
                    }
                    _ => {}
                }
            }
            Screen::Cadastro { form, .. } => match action {
                Action::NextTab | Action::MoveDown => form.focus_next(),
                Action::PrevTab | Action::MoveUp => form.focus_prev(),
                Action::Select => requests.extend(form.submit()),
                Action::ToggleAuthMode => {
                    form.toggle_mode();
                    self.route = Route::Cadastro(form.mode);
                }
                Action::Cancel => navigate_to = Some(Route::Home),
                _ => {}
            },
        }

        self.outbox.extend(requests);
        if let Some(route) = navigate_to {
            self.navigate(route);
        }
    }

    fn toggle_dark_mode(&mut self) {
        if let Screen::Dashboard { state, .. } = &mut self.screen {
            state.toggle_dark_mode();
            self.config.ui.dark_mode = state.dark_mode;
            self.rebuild_chart();
        } else {
            self.config.ui.dark_mode = !self.config.ui.dark_mode;
        }
    }

    fn handle_insert_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if code == KeyCode::Esc {
            self.mode = Mode::Normal;
            return false;
        }

        let key = KeyEvent::new(code, modifiers);
        let mut requests = Vec::new();
        match &mut self.screen {
            Screen::Home { state, view } => {
                if code == KeyCode::Enter {
                    requests.extend(state.submit());
                    self.mode = Mode::Normal;
                } else {
                    view.input(key);
                    state.set_query(view.query());
                }
            }
            Screen::Dashboard { state, view } => {
                if code == KeyCode::Enter {
                    self.mode = Mode::Normal;
                } else {
                    view.input(key);
                    state.set_title_filter(view.title_filter());
                }
            }
            Screen::Cadastro { form, view } => match code {
                KeyCode::Tab => form.focus_next(),
                KeyCode::BackTab => form.focus_prev(),
                KeyCode::Enter => {
                    requests.extend(form.submit());
                    self.mode = Mode::Normal;
                }
                _ => {
                    let field = form.focused();
                    view.input(field, key);
                    form.set_field(field, view.value(field));
                }
            },
        }
        self.outbox.extend(requests);
        false
    }

    fn handle_command_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                self.command_buffer.clear();
            }
            KeyCode::Enter => {
                self.mode = Mode::Normal;
                if self.execute_command() {
                    return true;
                }
            }
            KeyCode::Backspace => {
                self.command_buffer.pop();
            }
            KeyCode::Char(c) => {
                self.command_buffer.push(c);
            }
            _ => {}
        }
        false
    }

    fn dashboard_mut(&mut self) -> Option<&mut DashboardState> {
        match &mut self.screen {
            Screen::Dashboard { state, .. } => Some(state),
            _ => None,
        }
    }

    fn execute_command(&mut self) -> bool {
        let buffer = std::mem::take(&mut self.command_buffer);
        let parts: Vec<&str> = buffer.split_whitespace().collect();
        let Some(&command) = parts.first() else {
            return false;
        };
        let argument = parts.get(1).copied().unwrap_or("");

        match command {
            "q" | "quit" => return true,
            "home" => self.navigate(Route::Home),
            "open" => {
                let orcid = normalize_orcid(argument);
                if argument.is_empty() {
                    self.status_message = Some("Uso: :open <orcid>".to_string());
                } else if is_orcid(&orcid) {
                    self.navigate(Route::dashboard(orcid));
                } else {
                    self.status_message = Some(format!("ORCID inválido: {}", argument));
                }
            }
            "go" => match Route::parse(argument) {
                Some(route) => self.navigate(route),
                None => self.status_message = Some(format!("Rota desconhecida: {}", argument)),
            },
            "signin" => self.navigate(Route::Cadastro(AuthMode::SignIn)),
            "signup" => self.navigate(Route::Cadastro(AuthMode::SignUp)),
            "dark" => self.toggle_dark_mode(),
            "export" => {
                let directory = self.config.export_dir();
                match self.dashboard_mut() {
                    Some(state) => {
                        let request = state.export(directory);
                        self.outbox.push(request);
                    }
                    None => self.status_message = Some(no_profile_message()),
                }
            }
            "sort" => match self.dashboard_mut() {
                Some(state) => {
                    let request = state.set_sort(SortOrder::from_value(argument));
                    self.outbox.extend(request);
                }
                None => self.status_message = Some(no_profile_message()),
            },
            "year" => match self.dashboard_mut() {
                Some(state) => state.set_year_filter(argument),
                None => self.status_message = Some(no_profile_message()),
            },
            "reload" => {
                self.chart.release();
                match self.dashboard_mut() {
                    Some(state) => {
                        let requests = state.reload();
                        self.outbox.extend(requests);
                    }
                    None => self.status_message = Some(no_profile_message()),
                }
            }
            _ => {
                self.status_message = Some(format!("Comando desconhecido: {}", command));
            }
        }
        false
    }
}

fn no_profile_message() -> String {
    "Abra um perfil primeiro (:open <orcid>)".to_string()
}
