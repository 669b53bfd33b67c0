use crate::dataset::{DatasetName, Metric};

/// Common error type for view-model computations.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("dataset {0} is not available from the track source")]
    MissingDataset(DatasetName),
    #[error("dataset {0} has no tracks")]
    EmptyDataset(DatasetName),
    #[error("column {metric} has no spread to normalize (min == max)")]
    DegenerateColumn { metric: Metric },
    #[error("scatter plot requested without a secondary metric")]
    MissingSecondaryMetric,
}

pub type CoreResult<T> = Result<T, CoreError>;
