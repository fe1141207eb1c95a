/// Vigil system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default environment name when none is configured.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Default per-view deadlines (milliseconds).
pub const DEFAULT_LIVENESS_DEADLINE_MS: u64 = 5_000;
pub const DEFAULT_READINESS_DEADLINE_MS: u64 = 10_000;
pub const DEFAULT_STARTUP_DEADLINE_MS: u64 = 30_000;
pub const DEFAULT_DETAILED_DEADLINE_MS: u64 = 15_000;

/// Prefix of the message synthesized for a probe that misses its deadline.
pub const TIMEOUT_MESSAGE_PREFIX: &str = "timed out after ";
