use crate::dataset::DatasetCatalog;
use crate::session::{SessionController, SessionState};
use crate::telemetry::log::LogManager;
use crate::telemetry::metrics::{Counters, InteractionMetrics};
use crate::view::chart::{prepare_chart, ChartSpec};
use crate::view::correlation::{correlation_spec, CorrelationSpec};
use crate::view::summary::{summary_panel, SummaryPanel};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Discrete selection events delivered by the UI collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "value", rename_all = "snake_case")]
pub enum UiEvent {
    DatasetSelected(Option<String>),
    PrimaryMetricSelected(String),
    SecondaryMetricSelected(String),
    ChartTypeSelected(String),
}

/// Everything the presentation side needs to draw one dashboard frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub state: SessionState,
    pub summary: SummaryPanel,
    pub secondary_selector_enabled: bool,
    pub correlation: CorrelationSpec,
    /// Last chart that could be computed; `None` only if none ever could.
    pub chart: Option<ChartSpec>,
    /// Why the chart for the current state could not be computed.
    pub notice: Option<String>,
}

/// Session-scoped controller plus the derived view for the active selection.
pub struct DashboardViewModel {
    catalog: Arc<DatasetCatalog>,
    controller: SessionController,
    view: DashboardView,
    metrics: InteractionMetrics,
    logger: LogManager,
}

impl DashboardViewModel {
    pub fn new(catalog: Arc<DatasetCatalog>) -> Self {
        Self::with_state(catalog, SessionState::default())
    }

    pub fn with_state(catalog: Arc<DatasetCatalog>, state: SessionState) -> Self {
        let controller = SessionController::with_state(state);
        let logger = LogManager::for_origin("viewmodel");
        let metrics = InteractionMetrics::new();
        let view = compute_view(&catalog, controller.state(), None, &logger, &metrics);
        Self {
            catalog,
            controller,
            view,
            metrics,
            logger,
        }
    }

    pub fn state(&self) -> &SessionState {
        self.controller.state()
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn metrics(&self) -> Counters {
        self.metrics.snapshot()
    }

    /// Applies one interaction and recomputes the view when the state changed.
    pub fn handle(&mut self, event: UiEvent) -> &DashboardView {
        let applied = match &event {
            UiEvent::DatasetSelected(name) => self.controller.select_dataset(name.as_deref()),
            UiEvent::PrimaryMetricSelected(metric) => self.controller.set_primary_metric(metric),
            // The secondary selector is disabled outside scatter plots.
            UiEvent::SecondaryMetricSelected(metric) => {
                self.controller.state().secondary_selector_enabled()
                    && self.controller.set_secondary_metric(metric)
            }
            UiEvent::ChartTypeSelected(chart) => self.controller.set_chart_type(chart),
        };

        if !applied {
            self.metrics.record_ignored();
            self.logger.detail(&format!("ignored {event:?}"));
            return &self.view;
        }

        self.metrics.record_applied();
        let previous_chart = self.view.chart.take();
        self.view = compute_view(
            &self.catalog,
            self.controller.state(),
            previous_chart,
            &self.logger,
            &self.metrics,
        );
        &self.view
    }
}

fn compute_view(
    catalog: &DatasetCatalog,
    state: &SessionState,
    previous_chart: Option<ChartSpec>,
    logger: &LogManager,
    metrics: &InteractionMetrics,
) -> DashboardView {
    let dataset = catalog.get(state.selected_dataset);
    let (chart, notice) = match prepare_chart(dataset, state) {
        Ok(chart) => (Some(chart), None),
        Err(err) => {
            metrics.record_failed();
            logger.warn(&format!("keeping previous chart: {err}"));
            (previous_chart, Some(err.to_string()))
        }
    };
    logger.record(&format!(
        "recomputed {} / {} / {}",
        state.selected_dataset, state.primary_metric, state.chart_type
    ));

    DashboardView {
        state: *state,
        summary: summary_panel(dataset, state),
        secondary_selector_enabled: state.secondary_selector_enabled(),
        correlation: correlation_spec(dataset),
        chart,
        notice,
    }
}
