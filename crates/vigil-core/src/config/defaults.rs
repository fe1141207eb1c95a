//! Default values backing `Default` impls of the config structs.

pub use crate::constants::{
    DEFAULT_DETAILED_DEADLINE_MS, DEFAULT_LIVENESS_DEADLINE_MS, DEFAULT_READINESS_DEADLINE_MS,
    DEFAULT_STARTUP_DEADLINE_MS,
};
