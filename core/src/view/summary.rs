use crate::dataset::{Dataset, Metric};
use crate::math::stats::StatsHelper;
use crate::session::state::{ChartType, SessionState};
use serde::Serialize;

/// Precision for column names outside the known metrics.
pub const DEFAULT_PRECISION: usize = 3;

pub const NO_DATA: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

/// Display line of the summary sidebar, e.g. `Mean: 0.642`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatLine {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSummary {
    pub metric: Metric,
    pub precision: usize,
    /// `None` when the dataset has no tracks.
    pub stats: Option<SummaryStats>,
    display: Vec<StatLine>,
}

impl MetricSummary {
    pub fn new(metric: Metric, stats: Option<SummaryStats>) -> Self {
        let precision = metric.precision();
        Self {
            metric,
            precision,
            stats,
            display: stat_lines(stats, precision),
        }
    }

    pub fn has_data(&self) -> bool {
        self.stats.is_some()
    }

    /// Sidebar lines in display order, `N/A` throughout when there is no data.
    pub fn formatted(&self) -> &[StatLine] {
        &self.display
    }
}

fn stat_lines(stats: Option<SummaryStats>, precision: usize) -> Vec<StatLine> {
    let values = match stats {
        Some(stats) => [stats.mean, stats.median, stats.min, stats.max]
            .map(|value| format_value(value, precision)),
        None => [(); 4].map(|_| NO_DATA.to_string()),
    };
    ["Mean", "Median", "Min", "Max"]
        .into_iter()
        .zip(values)
        .map(|(label, value)| StatLine { label, value })
        .collect()
}

/// Summary block shown in the sidebar for the active selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryPanel {
    pub heading: String,
    pub summaries: Vec<MetricSummary>,
}

/// Precision for callers holding a raw column name rather than a `Metric`.
pub fn precision_for_column(column: &str) -> usize {
    column
        .parse::<Metric>()
        .map(Metric::precision)
        .unwrap_or(DEFAULT_PRECISION)
}

pub fn format_value(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

pub fn summarize(dataset: &Dataset, metric: Metric) -> MetricSummary {
    MetricSummary::new(metric, column_stats(&dataset.column(metric)))
}

fn column_stats(column: &[f64]) -> Option<SummaryStats> {
    Some(SummaryStats {
        mean: StatsHelper::mean(column)?,
        median: StatsHelper::median(column)?,
        min: StatsHelper::min(column)?,
        max: StatsHelper::max(column)?,
    })
}

/// Primary metric only for bar charts, both metrics for scatter plots.
pub fn summary_panel(dataset: &Dataset, state: &SessionState) -> SummaryPanel {
    let mut summaries = vec![summarize(dataset, state.primary_metric)];
    if state.chart_type == ChartType::ScatterPlot {
        if let Some(secondary) = state.secondary_metric {
            summaries.push(summarize(dataset, secondary));
        }
    }
    SummaryPanel {
        heading: format!("{} - Summary Statistics", dataset.name),
        summaries,
    }
}
