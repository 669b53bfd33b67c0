pub mod chart;
pub mod correlation;
pub mod summary;

pub use chart::{prepare_chart, ChartSpec};
pub use correlation::{correlation_matrix, correlation_spec, CorrelationMatrix, CorrelationSpec};
pub use summary::{summarize, summary_panel, MetricSummary, SummaryPanel};
