//! Researcher dashboard
//!
//! Sidebar with the personal sections and keywords, then three tabs:
//! - Biografia: biography, names, contacts, employment and education
//! - Publicações: title filter, year and sort controls, the work list
//! - Métricas: metrics list beside the works-by-year chart
//!
//! The work detail popup is drawn over everything.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Tabs, Wrap},
    Frame,
};
use tui_textarea::TextArea;

use abrao_core::model::{Affiliation, Profile, Work};
use abrao_core::state::{DashboardState, DashboardView, Load, Tab, WorkModal};

use super::{centered_rect, field_text, style_field, text_field};
use crate::widgets::{MetricsPanel, Theme, WorksChart};

const FILTER_TITLE: &str = "Filtrar por título";

/// Dashboard view state
pub struct ProfileView {
    title_filter: TextArea<'static>,
}

impl ProfileView {
    pub fn new() -> Self {
        Self {
            title_filter: text_field(FILTER_TITLE, "Buscar trabalhos por título..."),
        }
    }

    pub fn input(&mut self, key: KeyEvent) {
        self.title_filter.input(key);
    }

    pub fn title_filter(&self) -> String {
        field_text(&self.title_filter)
    }

    /// Render the dashboard
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &DashboardState,
        chart: Option<&WorksChart>,
        editing: bool,
    ) {
        let theme = Theme::for_dark_mode(state.dark_mode);
        frame.render_widget(Block::default().style(theme.base()), area);

        let profile = match state.view() {
            DashboardView::Loading => {
                frame.render_widget(Paragraph::new("Carregando...").style(theme.muted()), area);
                return;
            }
            DashboardView::Failed(error) => {
                let text = vec![
                    Line::styled(format!("Erro: {}", error), theme.error()),
                    Line::styled("Pressione r para tentar novamente", theme.muted()),
                ];
                frame.render_widget(Paragraph::new(text), area);
                return;
            }
            DashboardView::Ready(profile) => profile,
        };

        let main_area = if state.sidebar_open {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(32), Constraint::Min(0)])
                .split(area);
            self.render_sidebar(frame, chunks[0], state, profile, theme);
            chunks[1]
        } else {
            area
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Name
                Constraint::Length(3), // Tabs
                Constraint::Min(0),    // Tab content
            ])
            .split(main_area);

        let header = Line::from(vec![
            Span::styled(profile.display_name().to_string(), theme.title()),
            Span::styled(format!("  {}", state.author_id), theme.muted()),
        ]);
        frame.render_widget(Paragraph::new(header), chunks[0]);

        let tabs = Tabs::new(Tab::ALL.iter().map(|t| t.title()))
            .select(state.tab.index())
            .style(theme.muted())
            .highlight_style(theme.title().add_modifier(Modifier::UNDERLINED))
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(tabs, chunks[1]);

        match state.tab {
            Tab::Biography => self.render_biography(frame, chunks[2], profile, theme),
            Tab::Publications => self.render_publications(frame, chunks[2], state, theme, editing),
            Tab::Metrics => self.render_metrics(frame, chunks[2], state, chart, theme),
        }

        if let Some(modal) = &state.modal {
            self.render_modal(frame, area, modal, theme);
        }
    }

    fn render_sidebar(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &DashboardState,
        profile: &Profile,
        theme: Theme,
    ) {
        let personal = &profile.personal;
        let mut lines = vec![
            Line::styled(profile.display_name().to_string(), theme.title()),
            Line::raw(""),
        ];

        let mut section = |title: &str, items: Vec<String>| {
            if items.is_empty() {
                return;
            }
            lines.push(Line::styled(title.to_string(), theme.muted()));
            lines.extend(items.into_iter().map(|item| Line::raw(format!("  {}", item))));
            lines.push(Line::raw(""));
        };
        section("Outros nomes", personal.other_names.clone());
        section("URLs", personal.urls.clone());
        section("E-mails", personal.emails.clone());
        section("Países", personal.countries.clone());
        section(
            "Identificadores externos",
            personal.external_ids.iter().map(|id| id.to_string()).collect(),
        );

        lines.push(Line::styled("Palavras-chave", theme.muted()));
        if profile.keywords.is_empty() {
            lines.push(Line::raw("  -"));
        }
        for (i, keyword) in profile.keywords.iter().enumerate() {
            let active = state.keyword.as_deref() == Some(keyword.as_str());
            let marker = if i == state.keyword_cursor { ">" } else { " " };
            let style = if active {
                theme.selected()
            } else {
                theme.base()
            };
            lines.push(Line::styled(format!("{} {}", marker, keyword), style));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.muted()),
        );
        frame.render_widget(paragraph, area);
    }

    fn render_biography(&self, frame: &mut Frame, area: Rect, profile: &Profile, theme: Theme) {
        let personal = &profile.personal;
        let mut lines = vec![Line::styled("Biografia", theme.title())];
        lines.push(Line::raw(
            personal
                .biography
                .clone()
                .filter(|b| !b.trim().is_empty())
                .unwrap_or_else(|| "Sem biografia disponível.".to_string()),
        ));

        if !personal.other_names.is_empty() {
            lines.push(Line::raw(""));
            lines.push(Line::styled("Também conhecido como", theme.title()));
            lines.push(Line::raw(personal.other_names.join(", ")));
        }
        if !personal.emails.is_empty() {
            lines.push(Line::raw(""));
            lines.push(Line::styled("E-mails", theme.title()));
            lines.extend(personal.emails.iter().map(|e| Line::raw(e.clone())));
        }

        affiliation_section(&mut lines, "Empregos", &profile.employments, theme);
        affiliation_section(&mut lines, "Educação", &profile.educations, theme);

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
    }

    fn render_publications(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &DashboardState,
        theme: Theme,
        editing: bool,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title filter
                Constraint::Length(1), // Year / sort / keyword
                Constraint::Min(0),    // Works
            ])
            .split(area);

        let mut filter = self.title_filter.clone();
        style_field(&mut filter, FILTER_TITLE, editing, theme);
        frame.render_widget(&filter, chunks[0]);

        let year = if state.filter.year.trim().is_empty() {
            "Todos".to_string()
        } else {
            state.filter.year.trim().to_string()
        };
        let mut controls = vec![
            Span::styled("Ano: ", theme.muted()),
            Span::raw(format!("{}  ", year)),
            Span::styled("Ordenar por: ", theme.muted()),
            Span::raw(format!("{}  ", state.sort.label())),
        ];
        if let Some(keyword) = &state.keyword {
            controls.push(Span::styled("Palavra-chave: ", theme.muted()));
            controls.push(Span::styled(keyword.clone(), theme.title()));
        }
        frame.render_widget(Paragraph::new(Line::from(controls)), chunks[1]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.muted());
        if state.works_loading() {
            frame.render_widget(Paragraph::new("Carregando...").block(block), chunks[2]);
            return;
        }
        let works = state.displayed_works();
        if works.is_empty() {
            frame.render_widget(
                Paragraph::new("Nenhum trabalho encontrado.")
                    .style(theme.muted())
                    .block(block),
                chunks[2],
            );
            return;
        }

        let items: Vec<ListItem> = works
            .iter()
            .enumerate()
            .map(|(i, work)| {
                let style = if i == state.selected_work {
                    theme.selected()
                } else {
                    theme.base()
                };
                ListItem::new(work_line(work, theme)).style(style)
            })
            .collect();
        let title = format!("Trabalhos ({})", works.len());
        frame.render_widget(List::new(items).block(block.title(title)), chunks[2]);
    }

    fn render_metrics(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &DashboardState,
        chart: Option<&WorksChart>,
        theme: Theme,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(44), Constraint::Min(0)])
            .split(area);

        frame.render_widget(MetricsPanel::new(&state.metrics, theme), chunks[0]);

        match (&state.stats, chart) {
            (Load::Loaded(_), Some(chart)) => frame.render_widget(chart, chunks[1]),
            (Load::Failed(error), _) => frame.render_widget(
                Paragraph::new(format!("Erro: {}", error)).style(theme.error()),
                chunks[1],
            ),
            _ => frame.render_widget(
                Paragraph::new("Carregando...").style(theme.muted()),
                chunks[1],
            ),
        }
    }

    fn render_modal(&self, frame: &mut Frame, area: Rect, modal: &WorkModal, theme: Theme) {
        let popup = centered_rect(70, 60, area);
        frame.render_widget(Clear, popup);

        let mut lines = Vec::new();
        match modal.detail() {
            Some(detail) => {
                let title = detail.title.clone().unwrap_or_else(|| modal.work.title.clone());
                lines.push(Line::styled(title, theme.title()));
                lines.push(Line::raw(""));
                let year = match detail.orcid_publication_year.value() {
                    Some(_) => detail.orcid_publication_year,
                    None => detail.publication_year,
                };
                push_field(&mut lines, "Ano", Some(year.to_string()), theme);
                push_field(&mut lines, "Tipo", detail.kind.clone(), theme);
                push_field(&mut lines, "Publicado em", detail.container.clone(), theme);
                push_field(
                    &mut lines,
                    "Citações",
                    detail.cited_by_count.map(|n| n.to_string()),
                    theme,
                );
                push_field(&mut lines, "DOI", detail.doi.clone(), theme);
                push_field(&mut lines, "URL", detail.url.clone(), theme);
                if !detail.authorships.is_empty() {
                    lines.push(Line::styled("Autores", theme.muted()));
                    for author in &detail.authorships {
                        let name = author.author_name.as_deref().unwrap_or("Autor sem nome");
                        let orcid = author
                            .author_orcid
                            .as_deref()
                            .map(|o| format!(" ({})", o))
                            .unwrap_or_default();
                        lines.push(Line::raw(format!("  {}{}", name, orcid)));
                    }
                }
            }
            None => {
                let work = &modal.work;
                lines.push(Line::styled(work.title.clone(), theme.title()));
                lines.push(Line::raw(""));
                push_field(&mut lines, "Ano", Some(work.year.to_string()), theme);
                push_field(&mut lines, "Tipo", work.kind.clone(), theme);
                push_field(&mut lines, "Publicado em", work.container.clone(), theme);
                push_field(
                    &mut lines,
                    "Citações",
                    work.citations.map(|n| n.to_string()),
                    theme,
                );
                push_field(&mut lines, "DOI", work.doi.clone(), theme);
                push_field(&mut lines, "URL", work.url.clone(), theme);
                if modal.is_loading() {
                    lines.push(Line::raw(""));
                    lines.push(Line::styled("Carregando detalhes...", theme.muted()));
                }
            }
        }

        let block = Block::default()
            .title("Detalhes do trabalho (Esc para fechar)")
            .borders(Borders::ALL)
            .style(theme.base());
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
        frame.render_widget(paragraph, popup);
    }
}

impl Default for ProfileView {
    fn default() -> Self {
        Self::new()
    }
}

fn work_line(work: &Work, theme: Theme) -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!("{}  ", work.year), theme.muted()),
        Span::raw(work.title.clone()),
    ];
    if let Some(citations) = work.citations {
        spans.push(Span::styled(format!("  ({} citações)", citations), theme.muted()));
    }
    Line::from(spans)
}

fn push_field(lines: &mut Vec<Line<'static>>, label: &str, value: Option<String>, theme: Theme) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", label), theme.muted()),
            Span::raw(value),
        ]));
    }
}

fn affiliation_section(
    lines: &mut Vec<Line<'static>>,
    title: &str,
    entries: &[Affiliation],
    theme: Theme,
) {
    if entries.is_empty() {
        return;
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled(title.to_string(), theme.title()));
    for entry in entries {
        let organization = entry.organization.as_deref().unwrap_or("-");
        lines.push(Line::raw(organization.to_string()));
        let headline = entry.headline();
        if !headline.is_empty() {
            lines.push(Line::styled(format!("  {}", headline), theme.muted()));
        }
        lines.push(Line::styled(format!("  {}", entry.period()), theme.muted()));
    }
}
