//! # vigil-core
//!
//! Foundation crate for the vigil health-check system.
//! Defines the status model, probe trait, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{DeadlineConfig, ServiceConfig, VigilConfig};
pub use errors::{VigilError, VigilResult};
pub use models::{AggregateReport, CheckEntry, HealthStatus, ProbeResult, Tier};
pub use traits::{IProbe, ProbeContext};
