//! TUI widgets

mod metrics_panel;
mod mode_indicator;
mod theme;
mod works_chart;

pub use metrics_panel::MetricsPanel;
pub use mode_indicator::ModeIndicator;
pub use theme::Theme;
pub use works_chart::WorksChart;
