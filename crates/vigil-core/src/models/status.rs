use serde::{Deserialize, Serialize};

/// Health of a single probe or of the whole service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthStatus {
    /// Severity rank used for dominance reduction: Unhealthy > Degraded > Healthy.
    pub fn severity(self) -> u8 {
        match self {
            HealthStatus::Healthy => 0,
            HealthStatus::Degraded => 1,
            HealthStatus::Unhealthy => 2,
        }
    }

    /// The more severe of two statuses.
    pub fn worst(a: HealthStatus, b: HealthStatus) -> HealthStatus {
        if a.severity() >= b.severity() {
            a
        } else {
            b
        }
    }

    pub fn is_healthy(self) -> bool {
        matches!(self, HealthStatus::Healthy)
    }

    /// True unless the status is Unhealthy.
    pub fn is_operational(self) -> bool {
        !matches!(self, HealthStatus::Unhealthy)
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthStatus::Healthy => write!(f, "healthy"),
            HealthStatus::Degraded => write!(f, "degraded"),
            HealthStatus::Unhealthy => write!(f, "unhealthy"),
        }
    }
}

/// Criticality tier of a probe, controlling which endpoint view includes it.
///
/// Critical probes participate in liveness; Critical and Standard in
/// readiness and startup; Advisory probes only appear in the detailed view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Critical,
    Standard,
    Advisory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unhealthy_dominates() {
        assert_eq!(
            HealthStatus::worst(HealthStatus::Healthy, HealthStatus::Unhealthy),
            HealthStatus::Unhealthy
        );
        assert_eq!(
            HealthStatus::worst(HealthStatus::Unhealthy, HealthStatus::Degraded),
            HealthStatus::Unhealthy
        );
    }

    #[test]
    fn degraded_dominates_healthy() {
        assert_eq!(
            HealthStatus::worst(HealthStatus::Healthy, HealthStatus::Degraded),
            HealthStatus::Degraded
        );
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&HealthStatus::Degraded).unwrap(),
            "\"degraded\""
        );
        assert_eq!(serde_json::to_string(&Tier::Critical).unwrap(), "\"critical\"");
    }
}
