//! Publications-per-year bars over a citations-per-year line

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    symbols,
    text::Line,
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph,
        Widget,
    },
};

use abrao_core::model::{YearBucket, YearSeries};

use super::Theme;

/// A chart built from one `YearSeries`. Rebuilt, never updated in place.
#[derive(Debug)]
pub struct WorksChart {
    buckets: Vec<YearBucket>,
    citation_points: Vec<(f64, f64)>,
    max_publications: u64,
    max_citations: u64,
    theme: Theme,
}

impl WorksChart {
    pub fn new(series: &YearSeries, theme: Theme) -> Self {
        let buckets = series.buckets();
        let citation_points = buckets
            .iter()
            .map(|b| (b.year as f64, b.citations as f64))
            .collect();
        tracing::debug!(years = buckets.len(), "chart built");
        Self {
            max_publications: series.max_publications(),
            max_citations: series.max_citations(),
            buckets,
            citation_points,
            theme,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn years(&self) -> Vec<i32> {
        self.buckets.iter().map(|b| b.year).collect()
    }

    fn year_bounds(&self) -> [f64; 2] {
        let first = self.buckets.first().map_or(0, |b| b.year) as f64;
        let last = self.buckets.last().map_or(0, |b| b.year) as f64;
        if first < last {
            [first, last]
        } else {
            [first - 1.0, last + 1.0]
        }
    }

    fn render_bars(&self, area: Rect, buf: &mut Buffer) {
        let bars: Vec<Bar> = self
            .buckets
            .iter()
            .map(|b| {
                Bar::default()
                    .value(b.publications)
                    .label(Line::from(b.year.to_string()))
                    .style(Style::default().fg(self.theme.bars))
            })
            .collect();

        BarChart::default()
            .block(
                Block::default()
                    .title("Publicações por ano")
                    .borders(Borders::ALL),
            )
            .data(BarGroup::default().bars(&bars))
            .bar_width(4)
            .bar_gap(1)
            .max(self.max_publications.max(1))
            .render(area, buf);
    }

    fn render_line(&self, area: Rect, buf: &mut Buffer) {
        let [x_min, x_max] = self.year_bounds();
        let y_max = self.max_citations.max(1) as f64;

        let dataset = Dataset::default()
            .name("Citações")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(self.theme.line))
            .data(&self.citation_points);

        Chart::new(vec![dataset])
            .block(Block::default().title("Citações por ano").borders(Borders::ALL))
            .x_axis(
                Axis::default()
                    .bounds([x_min, x_max])
                    .labels(vec![format!("{}", x_min as i32), format!("{}", x_max as i32)]),
            )
            .y_axis(
                Axis::default()
                    .bounds([0.0, y_max])
                    .labels(vec!["0".to_string(), format!("{}", y_max as u64)]),
            )
            .render(area, buf);
    }
}

impl Widget for &WorksChart {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.is_empty() {
            Paragraph::new("Nenhum dado disponível")
                .block(Block::default().title("Gráfico").borders(Borders::ALL))
                .render(area, buf);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        self.render_bars(chunks[0], buf);
        self.render_line(chunks[1], buf);
    }
}

impl Drop for WorksChart {
    fn drop(&mut self) {
        tracing::debug!(years = self.buckets.len(), "chart dropped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> YearSeries {
        YearSeries {
            years: vec![2021, 2019, 2020],
            publications: vec![3, 1, 2],
            citations: vec![5, 40, 12],
        }
    }

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_years_sorted() {
        let chart = WorksChart::new(&series(), Theme::LIGHT);
        assert_eq!(chart.years(), vec![2019, 2020, 2021]);
        assert_eq!(chart.year_bounds(), [2019.0, 2021.0]);
    }

    #[test]
    fn test_single_year_bounds_widened() {
        let series = YearSeries {
            years: vec![2020],
            publications: vec![1],
            citations: vec![3],
        };
        let chart = WorksChart::new(&series, Theme::DARK);
        assert_eq!(chart.year_bounds(), [2019.0, 2021.0]);
    }

    #[test]
    fn test_render_labels() {
        let chart = WorksChart::new(&series(), Theme::LIGHT);
        let area = Rect::new(0, 0, 60, 24);
        let mut buf = Buffer::empty(area);
        (&chart).render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Publicações por ano"));
        assert!(text.contains("Citações por ano"));
        assert!(text.contains("2020"));
    }

    #[test]
    fn test_empty_series() {
        let chart = WorksChart::new(&YearSeries::default(), Theme::LIGHT);
        let area = Rect::new(0, 0, 40, 5);
        let mut buf = Buffer::empty(area);
        (&chart).render(area, &mut buf);
        assert!(buffer_text(&buf).contains("Nenhum dado disponível"));
    }
}
