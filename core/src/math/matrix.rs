use crate::dataset::{Dataset, Metric};
use crate::math::stats::StatsHelper;
use ndarray::{Array2, ArrayView2};

pub struct MatrixHelper;

impl MatrixHelper {
    /// Tracks as rows, metrics as columns.
    pub fn column_matrix(dataset: &Dataset, metrics: &[Metric]) -> Array2<f64> {
        Array2::from_shape_fn((dataset.len(), metrics.len()), |(row, col)| {
            metrics[col].value(&dataset.tracks[row])
        })
    }

    /// Pairwise Pearson correlation between the columns of `columns`.
    ///
    /// The result is symmetric with 1.0 on the diagonal; undefined pairs are `None`.
    pub fn correlation(columns: ArrayView2<f64>) -> Array2<Option<f64>> {
        let width = columns.ncols();
        let series: Vec<Vec<f64>> = columns.columns().into_iter().map(|c| c.to_vec()).collect();

        let mut matrix = Array2::from_elem((width, width), None);
        for i in 0..width {
            matrix[[i, i]] = Some(1.0);
            for j in (i + 1)..width {
                let r = StatsHelper::pearson(&series[i], &series[j]);
                matrix[[i, j]] = r;
                matrix[[j, i]] = r;
            }
        }
        matrix
    }
}
