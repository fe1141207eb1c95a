//! Process-wide health state: start time and immutable identity metadata.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use vigil_core::config::ServiceConfig;

/// Initialized exactly once at process start, never mutated afterwards.
/// Shared as `Arc<HealthState>`; concurrent reads need no locking.
#[derive(Debug)]
pub struct HealthState {
    version: String,
    environment: String,
    start_time: Instant,
    started_at: DateTime<Utc>,
}

impl HealthState {
    pub fn new(version: impl Into<String>, environment: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            environment: environment.into(),
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    pub fn from_config(service: &ServiceConfig) -> Self {
        Self::new(service.version.clone(), service.environment.clone())
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.uptime().as_secs()
    }
}
