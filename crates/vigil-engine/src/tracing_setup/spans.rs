//! Span definitions for the aggregation path.
//!
//! Each span carries duration-relevant metadata via the `tracing` crate.

/// Span for one aggregator evaluation.
#[macro_export]
macro_rules! evaluate_span {
    ($probe_count:expr, $deadline_ms:expr) => {
        tracing::info_span!("vigil.evaluate", probe_count = $probe_count, deadline_ms = $deadline_ms)
    };
}

/// Span for a single probe run.
#[macro_export]
macro_rules! probe_span {
    ($name:expr, $tier:expr) => {
        tracing::info_span!("vigil.probe", probe = %$name, tier = ?$tier)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const EVALUATE: &str = "vigil.evaluate";
    pub const PROBE: &str = "vigil.probe";
}
