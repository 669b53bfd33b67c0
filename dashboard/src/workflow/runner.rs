use crate::generator::profile::SyntheticSource;
use crate::workflow::config::DashboardConfig;
use anyhow::Context;
use edacore::{DashboardViewModel, DatasetCatalog};
use log::info;
use std::sync::Arc;

/// Builds the session for a config and replays its interactions.
#[derive(Clone)]
pub struct Runner {
    config: DashboardConfig,
}

impl Runner {
    pub fn new(config: DashboardConfig) -> Self {
        Self { config }
    }

    pub fn load_catalog(&self) -> anyhow::Result<DatasetCatalog> {
        let source = SyntheticSource::new(self.config.generator.clone());
        DatasetCatalog::load(&source).context("loading track datasets")
    }

    pub fn execute(&self) -> anyhow::Result<DashboardViewModel> {
        let catalog = Arc::new(self.load_catalog()?);
        let mut view_model = DashboardViewModel::new(catalog);

        for event in self.config.interactions() {
            view_model.handle(event);
        }

        let counters = view_model.metrics();
        info!(
            "replayed interactions: {} applied, {} ignored, {} failed",
            counters.applied, counters.ignored, counters.failed
        );
        Ok(view_model)
    }
}
