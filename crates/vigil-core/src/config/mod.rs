//! Service configuration: identity metadata and per-view deadlines.

mod defaults;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{VigilError, VigilResult};

/// Top-level configuration for a vigil-backed service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VigilConfig {
    pub service: ServiceConfig,
    pub deadlines: DeadlineConfig,
}

impl VigilConfig {
    /// Parse from a TOML string and validate.
    pub fn from_toml_str(input: &str) -> VigilResult<Self> {
        let config: VigilConfig =
            toml::from_str(input).map_err(|e| VigilError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// All deadlines must be positive.
    pub fn validate(&self) -> VigilResult<()> {
        let d = &self.deadlines;
        for (name, ms) in [
            ("liveness", d.liveness_ms),
            ("readiness", d.readiness_ms),
            ("startup", d.startup_ms),
            ("detailed", d.detailed_ms),
        ] {
            if ms == 0 {
                return Err(VigilError::ConfigError(format!(
                    "{name} deadline must be positive"
                )));
            }
        }
        Ok(())
    }
}

/// Immutable service identity, set once at process start.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub version: String,
    pub environment: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            version: crate::constants::VERSION.to_string(),
            environment: crate::constants::DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

/// Per-view evaluation deadlines (milliseconds).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct DeadlineConfig {
    pub liveness_ms: u64,
    pub readiness_ms: u64,
    pub startup_ms: u64,
    pub detailed_ms: u64,
}

impl Default for DeadlineConfig {
    fn default() -> Self {
        Self {
            liveness_ms: defaults::DEFAULT_LIVENESS_DEADLINE_MS,
            readiness_ms: defaults::DEFAULT_READINESS_DEADLINE_MS,
            startup_ms: defaults::DEFAULT_STARTUP_DEADLINE_MS,
            detailed_ms: defaults::DEFAULT_DETAILED_DEADLINE_MS,
        }
    }
}

impl DeadlineConfig {
    pub fn liveness(&self) -> Duration {
        Duration::from_millis(self.liveness_ms)
    }

    pub fn readiness(&self) -> Duration {
        Duration::from_millis(self.readiness_ms)
    }

    pub fn startup(&self) -> Duration {
        Duration::from_millis(self.startup_ms)
    }

    pub fn detailed(&self) -> Duration {
        Duration::from_millis(self.detailed_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_view_table() {
        let config = VigilConfig::default();
        assert_eq!(config.deadlines.liveness_ms, 5_000);
        assert_eq!(config.deadlines.readiness_ms, 10_000);
        assert_eq!(config.deadlines.startup_ms, 30_000);
        assert_eq!(config.deadlines.detailed_ms, 15_000);
        assert_eq!(config.service.environment, "development");
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config = VigilConfig::from_toml_str(
            r#"
            [service]
            environment = "production"

            [deadlines]
            liveness_ms = 2000
            "#,
        )
        .unwrap();
        assert_eq!(config.service.environment, "production");
        assert_eq!(config.deadlines.liveness_ms, 2_000);
        assert_eq!(config.deadlines.readiness_ms, 10_000);
    }

    #[test]
    fn zero_deadline_fails_validation() {
        let err = VigilConfig::from_toml_str(
            r#"
            [deadlines]
            startup_ms = 0
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("startup"));
    }
}
