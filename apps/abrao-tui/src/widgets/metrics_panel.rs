//! Aggregated metrics list

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use abrao_core::format::{format_count, format_decimal};
use abrao_core::model::Metrics;
use abrao_core::state::Load;

use super::Theme;

pub struct MetricsPanel<'a> {
    metrics: &'a Load<Metrics>,
    theme: Theme,
}

impl<'a> MetricsPanel<'a> {
    pub fn new(metrics: &'a Load<Metrics>, theme: Theme) -> Self {
        Self { metrics, theme }
    }

    /// Label / value pairs in display order, numbers in pt-BR format.
    pub fn rows(metrics: &Metrics) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("Total de publicações", format_count(metrics.total_publications)),
            ("Total de citações", format_count(metrics.total_citations)),
            ("Média de citações", format_decimal(metrics.mean_citations)),
            ("Fator de impacto (2 anos)", format_decimal(metrics.impact_factor)),
            ("Índice h", format_count(metrics.h_index as u64)),
            ("Índice i10", format_count(metrics.i10_index as u64)),
        ];
        if let Some(most_cited) = &metrics.most_cited {
            rows.push((
                "Citações da pesquisa mais citada",
                format_count(most_cited.citations()),
            ));
        }
        rows
    }
}

impl Widget for MetricsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Métricas")
            .borders(Borders::ALL)
            .border_style(self.theme.muted());

        let lines: Vec<Line> = match self.metrics {
            Load::Idle => Vec::new(),
            Load::Loading => vec![Line::styled("Carregando...", self.theme.muted())],
            Load::Failed(e) => vec![Line::styled(format!("Erro: {}", e), self.theme.error())],
            Load::Loaded(metrics) => {
                let mut lines: Vec<Line> = Self::rows(metrics)
                    .into_iter()
                    .map(|(label, value)| {
                        Line::from(vec![
                            Span::raw(format!("{}: ", label)),
                            Span::styled(
                                value,
                                Style::default()
                                    .fg(self.theme.accent)
                                    .add_modifier(Modifier::BOLD),
                            ),
                        ])
                    })
                    .collect();
                if let Some(title) = metrics.most_cited.as_ref().and_then(|m| m.title()) {
                    lines.push(Line::styled(format!("  {}", title), self.theme.muted()));
                }
                lines
            }
        };

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
