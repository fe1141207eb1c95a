use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::HealthStatus;

/// Outcome of a single probe run.
///
/// `duration_ms` is stamped by the aggregator around the probe call, not
/// self-reported. `error` is only set when the probe itself failed to
/// execute, as opposed to observing an unhealthy dependency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeResult {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub duration_ms: u64,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub details: BTreeMap<String, serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProbeResult {
    fn new(status: HealthStatus, message: Option<String>) -> Self {
        Self {
            status,
            message,
            duration_ms: 0,
            details: BTreeMap::new(),
            error: None,
        }
    }

    pub fn healthy() -> Self {
        Self::new(HealthStatus::Healthy, None)
    }

    pub fn healthy_with(message: impl Into<String>) -> Self {
        Self::new(HealthStatus::Healthy, Some(message.into()))
    }

    pub fn degraded(message: impl Into<String>) -> Self {
        Self::new(HealthStatus::Degraded, Some(message.into()))
    }

    pub fn unhealthy(message: impl Into<String>) -> Self {
        Self::new(HealthStatus::Unhealthy, Some(message.into()))
    }

    /// Unhealthy result for a probe that failed to execute at all.
    pub fn execution_error(error: impl Into<String>) -> Self {
        let mut result = Self::new(HealthStatus::Unhealthy, None);
        result.error = Some(error.into());
        result
    }

    /// Attach a diagnostic key/value pair.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

/// A named probe result inside an aggregate report.
///
/// Flattened on the wire: `{"name": "db", "status": "healthy", ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckEntry {
    pub name: String,
    #[serde(flatten)]
    pub result: ProbeResult,
}
