//! # vigil-engine
//!
//! The aggregation core: a tiered probe registry, a deadline-bounded
//! concurrent aggregator, and the immutable process-wide health state.

pub mod aggregator;
pub mod registry;
pub mod state;
pub mod tracing_setup;

pub use aggregator::Aggregator;
pub use registry::ProbeRegistry;
pub use state::HealthState;
pub use tracing_setup::init_tracing;
