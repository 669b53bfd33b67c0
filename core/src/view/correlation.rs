use crate::dataset::{Dataset, Metric};
use crate::math::matrix::MatrixHelper;
use ndarray::Array2;
use serde::Serialize;

pub const HEATMAP_COLOR_SCALE: &str = "RdBu";
pub const HEATMAP_SIZE: u32 = 400;

/// Pearson correlation across the plot metrics of one dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub metrics: Vec<Metric>,
    pub values: Array2<Option<f64>>,
}

impl CorrelationMatrix {
    pub fn get(&self, row: Metric, col: Metric) -> Option<f64> {
        let i = self.metrics.iter().position(|&m| m == row)?;
        let j = self.metrics.iter().position(|&m| m == col)?;
        self.values[[i, j]]
    }

    pub fn is_symmetric(&self) -> bool {
        self.values == self.values.t()
    }
}

/// Heat-map hand-off for the charting side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationSpec {
    pub title: String,
    pub matrix: CorrelationMatrix,
    pub color_scale: &'static str,
    pub color_label: &'static str,
    pub aspect: &'static str,
    pub width: u32,
    pub height: u32,
}

pub fn correlation_matrix(dataset: &Dataset) -> CorrelationMatrix {
    let metrics = Metric::ALL.to_vec();
    let columns = MatrixHelper::column_matrix(dataset, &metrics);
    CorrelationMatrix {
        values: MatrixHelper::correlation(columns.view()),
        metrics,
    }
}

pub fn correlation_spec(dataset: &Dataset) -> CorrelationSpec {
    CorrelationSpec {
        title: format!("{} - Correlation Matrix", dataset.name),
        matrix: correlation_matrix(dataset),
        color_scale: HEATMAP_COLOR_SCALE,
        color_label: "Correlation",
        aspect: "auto",
        width: HEATMAP_SIZE,
        height: HEATMAP_SIZE,
    }
}
