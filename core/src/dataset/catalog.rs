use crate::dataset::track::{Metric, Track};
use crate::prelude::{CoreError, CoreResult};
use crate::telemetry::log::LogManager;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Named subsets offered by the dataset filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DatasetName {
    #[default]
    #[serde(rename = "All Tracks")]
    AllTracks,
    #[serde(rename = "My Tracks")]
    MyTracks,
    #[serde(rename = "USA Tracks")]
    UsaTracks,
    #[serde(rename = "Global Tracks")]
    GlobalTracks,
}

impl DatasetName {
    pub const ALL: [DatasetName; 4] = [
        DatasetName::AllTracks,
        DatasetName::MyTracks,
        DatasetName::UsaTracks,
        DatasetName::GlobalTracks,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DatasetName::AllTracks => "All Tracks",
            DatasetName::MyTracks => "My Tracks",
            DatasetName::UsaTracks => "USA Tracks",
            DatasetName::GlobalTracks => "Global Tracks",
        }
    }

    fn index(self) -> usize {
        match self {
            DatasetName::AllTracks => 0,
            DatasetName::MyTracks => 1,
            DatasetName::UsaTracks => 2,
            DatasetName::GlobalTracks => 3,
        }
    }
}

impl fmt::Display for DatasetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DatasetName {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        DatasetName::ALL
            .iter()
            .copied()
            .find(|name| name.label() == value)
            .ok_or_else(|| format!("unknown dataset {value:?}"))
    }
}

/// Ordered, immutable table of tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub name: DatasetName,
    pub tracks: Vec<Track>,
}

impl Dataset {
    pub fn new(name: DatasetName, tracks: Vec<Track>) -> Self {
        Self { name, tracks }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Values of one metric column in row order.
    pub fn column(&self, metric: Metric) -> Vec<f64> {
        self.tracks.iter().map(|track| metric.value(track)).collect()
    }

    pub fn names(&self) -> Vec<&str> {
        self.tracks.iter().map(|track| track.name.as_str()).collect()
    }
}

/// Data-access collaborator that hands over already-typed tables.
pub trait TrackSource {
    fn load(&self, name: DatasetName) -> CoreResult<Vec<Track>>;
}

/// Source backed by tables that are already in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    tables: HashMap<DatasetName, Vec<Track>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, name: DatasetName, tracks: Vec<Track>) -> Self {
        self.tables.insert(name, tracks);
        self
    }

    pub fn insert(&mut self, name: DatasetName, tracks: Vec<Track>) {
        self.tables.insert(name, tracks);
    }
}

impl TrackSource for InMemorySource {
    fn load(&self, name: DatasetName) -> CoreResult<Vec<Track>> {
        self.tables
            .get(&name)
            .cloned()
            .ok_or(CoreError::MissingDataset(name))
    }
}

/// The four datasets, loaded once at startup and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct DatasetCatalog {
    datasets: Vec<Dataset>,
}

impl DatasetCatalog {
    pub fn load<S: TrackSource + ?Sized>(source: &S) -> CoreResult<Self> {
        let logger = LogManager::new();
        let mut datasets = Vec::with_capacity(DatasetName::ALL.len());
        for name in DatasetName::ALL {
            let tracks = source.load(name)?;
            logger.record(&format!("loaded {} with {} tracks", name, tracks.len()));
            datasets.push(Dataset::new(name, tracks));
        }
        Ok(Self { datasets })
    }

    pub fn get(&self, name: DatasetName) -> &Dataset {
        &self.datasets[name.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dataset> {
        self.datasets.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures::{sample_source, track};

    #[test]
    fn dataset_name_parses_only_fixed_labels() {
        assert_eq!("USA Tracks".parse::<DatasetName>(), Ok(DatasetName::UsaTracks));
        assert!("usa tracks".parse::<DatasetName>().is_err());
        assert!("Local Tracks".parse::<DatasetName>().is_err());
    }

    #[test]
    fn catalog_loads_every_dataset_once() {
        let catalog = DatasetCatalog::load(&sample_source()).unwrap();
        assert_eq!(catalog.iter().count(), 4);
        for name in DatasetName::ALL {
            assert_eq!(catalog.get(name).name, name);
        }
        assert_eq!(catalog.get(DatasetName::AllTracks).len(), 6);
    }

    #[test]
    fn catalog_reports_missing_table() {
        let source = InMemorySource::new().with_table(DatasetName::AllTracks, Vec::new());
        let err = DatasetCatalog::load(&source).unwrap_err();
        assert_eq!(err, CoreError::MissingDataset(DatasetName::MyTracks));
    }

    #[test]
    fn column_reads_metric_in_row_order() {
        let dataset = Dataset::new(
            DatasetName::MyTracks,
            vec![track("a", 10, 0.2), track("b", 90, 0.8)],
        );
        assert_eq!(dataset.column(Metric::Popularity), vec![10.0, 90.0]);
        assert_eq!(dataset.column(Metric::Danceability), vec![0.2, 0.8]);
        assert_eq!(dataset.names(), vec!["a", "b"]);
    }

    #[test]
    fn dataset_name_serializes_as_label() {
        let json = serde_json::to_string(&DatasetName::GlobalTracks).unwrap();
        assert_eq!(json, "\"Global Tracks\"");
    }
}
