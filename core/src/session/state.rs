use crate::dataset::{DatasetName, Metric};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartType {
    #[default]
    #[serde(rename = "Bar Chart")]
    BarChart,
    #[serde(rename = "Scatter Plot")]
    ScatterPlot,
}

impl ChartType {
    pub const ALL: [ChartType; 2] = [ChartType::BarChart, ChartType::ScatterPlot];

    pub fn label(self) -> &'static str {
        match self {
            ChartType::BarChart => "Bar Chart",
            ChartType::ScatterPlot => "Scatter Plot",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ChartType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ChartType::ALL
            .iter()
            .copied()
            .find(|chart| chart.label() == value)
            .ok_or_else(|| format!("unknown chart type {value:?}"))
    }
}

/// Selections of a single interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub selected_dataset: DatasetName,
    pub primary_metric: Metric,
    /// Only used by scatter plots, kept while bar charts are shown.
    pub secondary_metric: Option<Metric>,
    pub chart_type: ChartType,
}

impl SessionState {
    pub fn secondary_selector_enabled(&self) -> bool {
        self.chart_type == ChartType::ScatterPlot
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            selected_dataset: DatasetName::AllTracks,
            primary_metric: Metric::Popularity,
            secondary_metric: Some(Metric::Danceability),
            chart_type: ChartType::BarChart,
        }
    }
}
