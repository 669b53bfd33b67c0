pub mod catalog;
pub mod track;

pub use catalog::{Dataset, DatasetCatalog, DatasetName, InMemorySource, TrackSource};
pub use track::{AxisRange, Metric, Track};
