use crate::generator::profile::GeneratorConfig;
use anyhow::Context;
use edacore::UiEvent;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Initial selector values. Each one goes through the session controller,
/// so values outside the fixed choices are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selections {
    pub dataset: Option<String>,
    pub metric: Option<String>,
    pub secondary_metric: Option<String>,
    pub chart_type: Option<String>,
}

impl Selections {
    /// Selections set here win over the ones in `self`.
    pub fn overridden_by(self, other: Selections) -> Self {
        Self {
            dataset: other.dataset.or(self.dataset),
            metric: other.metric.or(self.metric),
            secondary_metric: other.secondary_metric.or(self.secondary_metric),
            chart_type: other.chart_type.or(self.chart_type),
        }
    }

    /// The chart type goes before the secondary metric, whose selector is
    /// only enabled for scatter plots.
    pub fn to_events(&self) -> Vec<UiEvent> {
        let mut events = Vec::new();
        if let Some(dataset) = &self.dataset {
            events.push(UiEvent::DatasetSelected(Some(dataset.clone())));
        }
        if let Some(metric) = &self.metric {
            events.push(UiEvent::PrimaryMetricSelected(metric.clone()));
        }
        if let Some(chart_type) = &self.chart_type {
            events.push(UiEvent::ChartTypeSelected(chart_type.clone()));
        }
        if let Some(metric) = &self.secondary_metric {
            events.push(UiEvent::SecondaryMetricSelected(metric.clone()));
        }
        events
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    #[serde(flatten)]
    pub generator: GeneratorConfig,
    #[serde(flatten)]
    pub selections: Selections,
    /// Interactions replayed after the initial selections.
    pub events: Vec<UiEvent>,
}

impl DashboardConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading dashboard config {}", path_ref.display()))?;
        let config: DashboardConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing dashboard config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(seed: u64, selections: Selections) -> Self {
        Self {
            generator: GeneratorConfig {
                seed,
                ..GeneratorConfig::default()
            },
            selections,
            events: Vec::new(),
        }
    }

    /// Initial selections followed by the scripted interactions.
    pub fn interactions(&self) -> Vec<UiEvent> {
        let mut events = self.selections.to_events();
        events.extend(self.events.iter().cloned());
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_keeps_default_table_sizes() {
        let cfg = DashboardConfig::from_args(5, Selections::default());
        assert_eq!(cfg.generator.seed, 5);
        assert_eq!(cfg.generator.my_tracks, 100);
        assert!(cfg.interactions().is_empty());
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"seed: 3\nmy_tracks: 10\ndataset: USA Tracks\nmetric: energy\nevents:\n  - event: chart_type_selected\n    value: Scatter Plot\n  - event: secondary_metric_selected\n    value: valence\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = DashboardConfig::load(&path).unwrap();
        assert_eq!(cfg.generator.seed, 3);
        assert_eq!(cfg.generator.my_tracks, 10);
        assert_eq!(cfg.generator.usa_tracks, 50);
        assert_eq!(
            cfg.interactions(),
            vec![
                UiEvent::DatasetSelected(Some("USA Tracks".into())),
                UiEvent::PrimaryMetricSelected("energy".into()),
                UiEvent::ChartTypeSelected("Scatter Plot".into()),
                UiEvent::SecondaryMetricSelected("valence".into()),
            ]
        );
    }

    #[test]
    fn config_load_reports_missing_file() {
        let err = DashboardConfig::load("/nonexistent/dashboard.yaml").unwrap_err();
        assert!(err.to_string().contains("reading dashboard config"));
    }

    #[test]
    fn chart_type_is_selected_before_secondary_metric() {
        let selections = Selections {
            secondary_metric: Some("valence".into()),
            chart_type: Some("Scatter Plot".into()),
            ..Default::default()
        };
        assert_eq!(
            selections.to_events(),
            vec![
                UiEvent::ChartTypeSelected("Scatter Plot".into()),
                UiEvent::SecondaryMetricSelected("valence".into()),
            ]
        );
    }

    #[test]
    fn command_line_selections_override_file() {
        let file = Selections {
            dataset: Some("My Tracks".into()),
            metric: Some("energy".into()),
            ..Default::default()
        };
        let cli = Selections {
            metric: Some("valence".into()),
            ..Default::default()
        };
        let merged = file.overridden_by(cli);
        assert_eq!(merged.dataset.as_deref(), Some("My Tracks"));
        assert_eq!(merged.metric.as_deref(), Some("valence"));
    }
}
