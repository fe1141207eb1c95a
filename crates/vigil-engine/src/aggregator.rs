//! Deadline-bounded concurrent evaluation of a probe subset.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{warn, Instrument};
use vigil_core::constants::TIMEOUT_MESSAGE_PREFIX;
use vigil_core::errors::{VigilError, VigilResult};
use vigil_core::models::{AggregateReport, CheckEntry, ProbeResult};
use vigil_core::traits::{IProbe, ProbeContext};

use crate::state::HealthState;

/// Fans out one task per probe, waits for completion bounded by the
/// deadline, and reduces the results to one overall status.
///
/// Stateless across calls; every evaluation is independent, which keeps the
/// endpoints safe under arbitrary concurrent load.
pub struct Aggregator;

impl Aggregator {
    /// Evaluate `probes` concurrently within `deadline`.
    ///
    /// Total wall-clock cost is bounded by the deadline plus scheduling
    /// slack, not by the sum of probe durations. A probe that misses the
    /// deadline is reported as Unhealthy with a timeout message; a probe
    /// that panics is reported as Unhealthy with `error` set. Neither
    /// aborts its siblings. Only a non-positive deadline is an error.
    pub async fn evaluate(
        state: &HealthState,
        probes: &[Arc<dyn IProbe>],
        deadline: Duration,
    ) -> VigilResult<AggregateReport> {
        if deadline.is_zero() {
            return Err(VigilError::InvalidDeadline {
                millis: deadline.as_millis() as i64,
            });
        }

        let span = crate::evaluate_span!(probes.len(), deadline.as_millis() as u64);
        Self::run_all(state, probes, deadline).instrument(span).await
    }

    async fn run_all(
        state: &HealthState,
        probes: &[Arc<dyn IProbe>],
        deadline: Duration,
    ) -> VigilResult<AggregateReport> {
        let wait_until = tokio::time::Instant::now() + deadline;
        let ctx = ProbeContext::new(deadline);

        let handles: Vec<(String, tokio::task::JoinHandle<ProbeResult>)> = probes
            .iter()
            .map(|probe| {
                let probe = Arc::clone(probe);
                let name = probe.name().to_string();
                let span = crate::probe_span!(name, probe.tier());
                let handle = tokio::spawn(
                    async move {
                        let started = Instant::now();
                        let mut result = probe.run(&ctx).await;
                        // Latency is stamped here, not self-reported by the probe.
                        result.duration_ms = started.elapsed().as_millis() as u64;
                        result
                    }
                    .instrument(span),
                );
                (name, handle)
            })
            .collect();

        let mut checks = Vec::with_capacity(handles.len());
        for (name, handle) in handles {
            let result = match tokio::time::timeout_at(wait_until, handle).await {
                Ok(Ok(result)) => result,
                Ok(Err(join_err)) => {
                    let reason = if join_err.is_panic() {
                        describe_panic(join_err.into_panic())
                    } else {
                        "probe task was cancelled".to_string()
                    };
                    warn!(probe = %name, %reason, "probe failed to execute");
                    ProbeResult::execution_error(reason)
                }
                Err(_) => {
                    // The underlying task keeps running detached; its result
                    // is discarded. Cancellation is cooperative via the
                    // deadline in ProbeContext.
                    warn!(probe = %name, deadline_ms = deadline.as_millis() as u64, "probe timed out");
                    let mut result = ProbeResult::unhealthy(format!(
                        "{TIMEOUT_MESSAGE_PREFIX}{} ms",
                        deadline.as_millis()
                    ));
                    result.duration_ms = deadline.as_millis() as u64;
                    result
                }
            };
            checks.push(CheckEntry { name, result });
        }

        // Completion order is unspecified; the output order is not.
        checks.sort_by(|a, b| a.name.cmp(&b.name));
        let status = AggregateReport::reduce(checks.iter().map(|c| c.result.status));

        Ok(AggregateReport {
            status,
            timestamp: chrono::Utc::now(),
            version: state.version().to_string(),
            environment: state.environment().to_string(),
            uptime_seconds: state.uptime_seconds(),
            checks,
        })
    }

    /// Synthetic Unhealthy report for when the probe subset itself could
    /// not be obtained. The endpoint must still produce a well-formed body.
    pub fn unavailable(state: &HealthState, error: &VigilError) -> AggregateReport {
        let mut result = ProbeResult::execution_error(error.to_string());
        result.message = Some("probe registry unavailable".to_string());
        AggregateReport {
            status: vigil_core::models::HealthStatus::Unhealthy,
            timestamp: chrono::Utc::now(),
            version: state.version().to_string(),
            environment: state.environment().to_string(),
            uptime_seconds: state.uptime_seconds(),
            checks: vec![CheckEntry {
                name: "registry".to_string(),
                result,
            }],
        }
    }
}

fn describe_panic(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panicked: {s}")
    } else {
        "panicked".to_string()
    }
}
