//! View-model core for the track exploratory-data-analysis dashboard.
//!
//! The crate owns session state, dataset selection, summary statistics,
//! the correlation matrix and chart preparation. Loading tables and drawing
//! widgets belong to the collaborators that sit on either side of it.

pub mod dataset;
pub mod math;
pub mod prelude;
pub mod session;
pub mod telemetry;
pub mod view;
pub mod viewmodel;

pub use dataset::{Dataset, DatasetCatalog, DatasetName, Metric, Track, TrackSource};
pub use prelude::{CoreError, CoreResult};
pub use session::{ChartType, SessionController, SessionState};
pub use viewmodel::{DashboardView, DashboardViewModel, UiEvent};
