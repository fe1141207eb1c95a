use std::time::Duration;

use crate::models::{ProbeResult, Tier};

/// Execution budget handed to every probe run.
///
/// Cancellation is cooperative: a probe must push this deadline into its own
/// I/O client (request timeout, connect timeout). The aggregator stops
/// waiting when the deadline elapses but does not kill the underlying task;
/// a probe that ignores the budget keeps running in the background and its
/// result is discarded.
#[derive(Debug, Clone, Copy)]
pub struct ProbeContext {
    pub deadline: Duration,
}

impl ProbeContext {
    pub fn new(deadline: Duration) -> Self {
        Self { deadline }
    }
}

/// A single named unit of work asserting that one dependency is functioning.
#[async_trait::async_trait]
pub trait IProbe: Send + Sync {
    /// Unique, stable identifier. Keys the registry and the response map.
    fn name(&self) -> &str;

    /// Criticality tier controlling which endpoint views include this probe.
    fn tier(&self) -> Tier;

    /// Assert the dependency is functioning, within the given budget.
    async fn run(&self, ctx: &ProbeContext) -> ProbeResult;
}
