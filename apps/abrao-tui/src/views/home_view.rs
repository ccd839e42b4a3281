//! Home: researcher search
//!
//! Search box, inline status line and the suggestion list. The sidebar
//! holds the header actions and starts closed.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use tui_textarea::TextArea;

use abrao_core::state::HomeState;

use super::{field_text, style_field, text_field};
use crate::widgets::Theme;

const SEARCH_TITLE: &str = "Buscar por nome ou ORCID";

/// Home view state
pub struct HomeView {
    search: TextArea<'static>,
}

impl HomeView {
    pub fn new() -> Self {
        Self {
            search: text_field(SEARCH_TITLE, "Ex.: Josiah Carberry ou 0000-0002-1825-0097"),
        }
    }

    /// Feed a key to the search box.
    pub fn input(&mut self, key: KeyEvent) {
        self.search.input(key);
    }

    pub fn query(&self) -> String {
        field_text(&self.search)
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &HomeState,
        theme: Theme,
        editing: bool,
    ) {
        frame.render_widget(Block::default().style(theme.base()), area);

        let main_area = if state.sidebar_open {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(24), Constraint::Min(0)])
                .split(area);
            self.render_sidebar(frame, chunks[0], theme);
            chunks[1]
        } else {
            area
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Search box
                Constraint::Length(1), // Notice
                Constraint::Min(0),    // Results
            ])
            .split(main_area);

        let header = Paragraph::new(vec![
            Line::styled("ABRAO", theme.title()),
            Line::styled("Perfis de pesquisadores a partir do ORCID", theme.muted()),
        ]);
        frame.render_widget(header, chunks[0]);

        let mut search = self.search.clone();
        style_field(&mut search, SEARCH_TITLE, editing, theme);
        frame.render_widget(&search, chunks[1]);

        if let Some(notice) = state.notice() {
            let style = if notice.starts_with("Falha") {
                theme.error()
            } else {
                theme.muted()
            };
            frame.render_widget(Paragraph::new(Line::styled(notice, style)), chunks[2]);
        }

        self.render_results(frame, chunks[3], state, theme);
    }

    fn render_results(&self, frame: &mut Frame, area: Rect, state: &HomeState, theme: Theme) {
        let items: Vec<ListItem> = state
            .results
            .iter()
            .enumerate()
            .map(|(i, hit)| {
                let style = if i == state.selected {
                    theme.selected()
                } else {
                    theme.base()
                };
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{}  ", hit.full_name)),
                    Span::styled(hit.orcid.clone(), theme.muted()),
                ]))
                .style(style)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title("Resultados")
                .borders(Borders::ALL)
                .border_style(theme.muted()),
        );
        frame.render_widget(list, area);
    }

    fn render_sidebar(&self, frame: &mut Frame, area: Rect, theme: Theme) {
        let items = vec![
            ListItem::new("Início"),
            ListItem::new("Entrar       (s)"),
            ListItem::new("Cadastrar    (S)"),
        ];
        let list = List::new(items).style(theme.base()).block(
            Block::default()
                .title("Menu")
                .borders(Borders::ALL)
                .border_style(theme.muted()),
        );
        frame.render_widget(list, area);
    }
}

impl Default for HomeView {
    fn default() -> Self {
        Self::new()
    }
}
