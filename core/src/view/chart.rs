use crate::dataset::{AxisRange, Dataset, Metric};
use crate::math::stats::StatsHelper;
use crate::prelude::{CoreError, CoreResult};
use crate::session::state::{ChartType, SessionState};
use serde::Serialize;
use std::collections::BTreeMap;

pub const CHART_COLOR: &str = "rgba(29, 215, 84, 0.8)";
pub const CHART_HEIGHT: u32 = 700;

/// Field shown in a point tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HoverField {
    Name,
    Artists,
    Metric(Metric),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarPoint {
    pub name: String,
    pub artists: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChartSpec {
    pub y_metric: Metric,
    pub points: Vec<BarPoint>,
    pub y_range: AxisRange,
    pub hover_fields: Vec<HoverField>,
    pub labels: BTreeMap<String, String>,
    pub color: &'static str,
    pub height: u32,
}

impl BarChartSpec {
    pub fn x_values(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn y_values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }
}

/// Scatter point: `x`/`y` are normalized, `raw_x`/`raw_y` feed the tooltip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub name: String,
    pub artists: String,
    pub x: f64,
    pub y: f64,
    pub raw_x: f64,
    pub raw_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChartSpec {
    pub x_metric: Metric,
    pub y_metric: Metric,
    pub points: Vec<ScatterPoint>,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub hover_fields: Vec<HoverField>,
    pub labels: BTreeMap<String, String>,
    pub color: &'static str,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    Bar(BarChartSpec),
    Scatter(ScatterChartSpec),
}

impl ChartSpec {
    pub fn chart_type(&self) -> ChartType {
        match self {
            ChartSpec::Bar(_) => ChartType::BarChart,
            ChartSpec::Scatter(_) => ChartType::ScatterPlot,
        }
    }
}

pub fn prepare_chart(dataset: &Dataset, state: &SessionState) -> CoreResult<ChartSpec> {
    match state.chart_type {
        ChartType::BarChart => Ok(ChartSpec::Bar(bar_chart(dataset, state.primary_metric))),
        ChartType::ScatterPlot => {
            let secondary = state
                .secondary_metric
                .ok_or(CoreError::MissingSecondaryMetric)?;
            scatter_plot(dataset, state.primary_metric, secondary).map(ChartSpec::Scatter)
        }
    }
}

pub fn bar_chart(dataset: &Dataset, metric: Metric) -> BarChartSpec {
    let points = dataset
        .tracks
        .iter()
        .map(|track| BarPoint {
            name: track.name.clone(),
            artists: track.artists.clone(),
            value: metric.value(track),
        })
        .collect();

    BarChartSpec {
        y_metric: metric,
        points,
        y_range: metric.axis_range(),
        hover_fields: vec![HoverField::Artists, HoverField::Metric(metric)],
        labels: labels([
            ("name", "Track Name"),
            ("popularity", "Popularity"),
            ("artists", "Artists"),
        ]),
        color: CHART_COLOR,
        height: CHART_HEIGHT,
    }
}

pub fn scatter_plot(
    dataset: &Dataset,
    x_metric: Metric,
    y_metric: Metric,
) -> CoreResult<ScatterChartSpec> {
    if dataset.is_empty() {
        return Err(CoreError::EmptyDataset(dataset.name));
    }
    let raw_x = dataset.column(x_metric);
    let raw_y = dataset.column(y_metric);
    let x = normalized_column(&raw_x, x_metric)?;
    let y = normalized_column(&raw_y, y_metric)?;

    let points = dataset
        .tracks
        .iter()
        .enumerate()
        .map(|(row, track)| ScatterPoint {
            name: track.name.clone(),
            artists: track.artists.clone(),
            x: x[row],
            y: y[row],
            raw_x: raw_x[row],
            raw_y: raw_y[row],
        })
        .collect();

    let x_label = format!("{x_metric}_normalized");
    let y_label = format!("{y_metric}_normalized");
    Ok(ScatterChartSpec {
        x_metric,
        y_metric,
        points,
        x_range: AxisRange::UNIT,
        y_range: AxisRange::UNIT,
        hover_fields: vec![
            HoverField::Name,
            HoverField::Artists,
            HoverField::Metric(x_metric),
            HoverField::Metric(y_metric),
        ],
        labels: labels([
            ("name", "Track Name"),
            (x_label.as_str(), x_metric.as_str()),
            (y_label.as_str(), y_metric.as_str()),
            ("artists", "Artists"),
        ]),
        color: CHART_COLOR,
        height: CHART_HEIGHT,
    })
}

fn normalized_column(values: &[f64], metric: Metric) -> CoreResult<Vec<f64>> {
    StatsHelper::normalize(values).ok_or(CoreError::DegenerateColumn { metric })
}

fn labels<const N: usize>(pairs: [(&str, &str); N]) -> BTreeMap<String, String> {
    pairs
        .into_iter()
        .map(|(field, label)| (field.to_string(), label.to_string()))
        .collect()
}
