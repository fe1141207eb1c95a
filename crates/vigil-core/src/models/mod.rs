//! Wire-facing models: statuses, probe results, and aggregate reports.

mod probe_result;
mod process_metrics;
mod report;
mod status;

pub use probe_result::{CheckEntry, ProbeResult};
pub use process_metrics::ProcessMetrics;
pub use report::{AggregateReport, DetailedReport};
pub use status::{HealthStatus, Tier};
