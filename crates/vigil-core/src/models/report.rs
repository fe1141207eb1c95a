use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CheckEntry, HealthStatus, ProcessMetrics};

/// One evaluation of a probe subset, reduced to an overall status.
///
/// `checks` is sorted by probe name so two evaluations over the same set
/// are comparable modulo timestamps and latencies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateReport {
    pub status: HealthStatus,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub environment: String,
    pub uptime_seconds: u64,
    pub checks: Vec<CheckEntry>,
}

impl AggregateReport {
    /// Dominance reduction over a set of statuses.
    ///
    /// An empty set reduces to Healthy by convention: a view that selects
    /// no probes has nothing to complain about.
    pub fn reduce<I>(statuses: I) -> HealthStatus
    where
        I: IntoIterator<Item = HealthStatus>,
    {
        statuses
            .into_iter()
            .fold(HealthStatus::Healthy, HealthStatus::worst)
    }
}

/// Aggregate report plus host/process metrics, served by the detailed view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedReport {
    #[serde(flatten)]
    pub report: AggregateReport,
    pub process: ProcessMetrics,
}
