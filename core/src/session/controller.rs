use crate::dataset::{DatasetName, Metric};
use crate::session::state::{ChartType, SessionState};
use crate::telemetry::log::LogManager;
use std::str::FromStr;

/// Owns the session state and applies selector changes to it.
///
/// Setters take the raw selector value. Anything outside the fixed choices
/// leaves the state untouched and reports `false`.
pub struct SessionController {
    state: SessionState,
    logger: LogManager,
}

impl SessionController {
    pub fn new() -> Self {
        Self::with_state(SessionState::default())
    }

    pub fn with_state(state: SessionState) -> Self {
        Self {
            state,
            logger: LogManager::for_origin("session"),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn set_dataset(&mut self, name: &str) -> bool {
        match self.parse::<DatasetName>(name) {
            Some(dataset) => {
                self.state.selected_dataset = dataset;
                true
            }
            None => false,
        }
    }

    /// The dataset filter yields nothing when a pill is deselected.
    pub fn select_dataset(&mut self, name: Option<&str>) -> bool {
        match name {
            Some(name) => self.set_dataset(name),
            None => {
                self.logger.detail("dataset filter cleared, keeping selection");
                false
            }
        }
    }

    pub fn set_primary_metric(&mut self, metric: &str) -> bool {
        match self.parse::<Metric>(metric) {
            Some(metric) => {
                self.state.primary_metric = metric;
                true
            }
            None => false,
        }
    }

    pub fn set_secondary_metric(&mut self, metric: &str) -> bool {
        match self.parse::<Metric>(metric) {
            Some(metric) => {
                self.state.secondary_metric = Some(metric);
                true
            }
            None => false,
        }
    }

    pub fn set_chart_type(&mut self, chart_type: &str) -> bool {
        let Some(chart_type) = self.parse::<ChartType>(chart_type) else {
            return false;
        };
        let entering_scatter =
            chart_type == ChartType::ScatterPlot && self.state.chart_type != ChartType::ScatterPlot;
        self.state.chart_type = chart_type;
        if entering_scatter && self.state.secondary_metric.is_none() {
            self.state.secondary_metric = Some(Metric::ALL[0]);
        }
        true
    }

    fn parse<T: FromStr<Err = String>>(&self, value: &str) -> Option<T> {
        match value.parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(reason) => {
                self.logger.detail(&format!("ignoring selection: {reason}"));
                None
            }
        }
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_dashboard() {
        let controller = SessionController::new();
        let state = controller.state();
        assert_eq!(state.selected_dataset, DatasetName::AllTracks);
        assert_eq!(state.primary_metric, Metric::Popularity);
        assert_eq!(state.secondary_metric, Some(Metric::Danceability));
        assert_eq!(state.chart_type, ChartType::BarChart);
        assert!(!state.secondary_selector_enabled());
    }

    #[test]
    fn invalid_dataset_leaves_selection_unchanged() {
        let mut controller = SessionController::new();
        assert!(controller.set_dataset("My Tracks"));
        assert!(!controller.set_dataset("Local Tracks"));
        assert!(!controller.select_dataset(None));
        assert_eq!(controller.state().selected_dataset, DatasetName::MyTracks);
    }

    #[test]
    fn invalid_metrics_are_ignored() {
        let mut controller = SessionController::new();
        assert!(!controller.set_primary_metric("tempo"));
        assert!(!controller.set_secondary_metric(""));
        assert_eq!(controller.state().primary_metric, Metric::Popularity);
        assert_eq!(controller.state().secondary_metric, Some(Metric::Danceability));
    }

    #[test]
    fn last_write_wins() {
        let mut controller = SessionController::new();
        controller.set_primary_metric("energy");
        controller.set_primary_metric("liveness");
        assert_eq!(controller.state().primary_metric, Metric::Liveness);
    }

    #[test]
    fn entering_scatter_fills_unset_secondary_with_first_metric() {
        let mut controller = SessionController::with_state(SessionState {
            secondary_metric: None,
            ..SessionState::default()
        });
        assert!(controller.set_chart_type("Scatter Plot"));
        assert_eq!(controller.state().secondary_metric, Some(Metric::Popularity));
        assert!(controller.state().secondary_selector_enabled());
    }

    #[test]
    fn secondary_metric_survives_chart_toggles() {
        let mut controller = SessionController::new();
        controller.set_chart_type("Scatter Plot");
        controller.set_secondary_metric("valence");
        controller.set_chart_type("Bar Chart");
        controller.set_dataset("Global Tracks");
        controller.set_chart_type("Scatter Plot");
        assert_eq!(controller.state().secondary_metric, Some(Metric::Valence));
    }

    #[test]
    fn unknown_chart_type_is_ignored() {
        let mut controller = SessionController::new();
        assert!(!controller.set_chart_type("Pie Chart"));
        assert_eq!(controller.state().chart_type, ChartType::BarChart);
    }
}
