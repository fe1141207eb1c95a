//! Free-disk-space probe.
//!
//! The measurement is injected through [`SpaceSource`] so the probe owns
//! only the thresholds; the embedder wires in whatever statfs mechanism its
//! platform offers. Below 15% free is Degraded, below 5% is Unhealthy.

use vigil_core::models::{ProbeResult, Tier};
use vigil_core::traits::{IProbe, ProbeContext};

const UNHEALTHY_FREE_PERCENT: f64 = 5.0;
const DEGRADED_FREE_PERCENT: f64 = 15.0;

/// Supplies the free-space percentage for the volume being watched.
pub trait SpaceSource: Send + Sync {
    fn free_percent(&self) -> std::io::Result<f64>;
}

impl<F> SpaceSource for F
where
    F: Fn() -> std::io::Result<f64> + Send + Sync,
{
    fn free_percent(&self) -> std::io::Result<f64> {
        self()
    }
}

pub struct DiskSpaceProbe {
    name: String,
    tier: Tier,
    source: Box<dyn SpaceSource>,
}

impl DiskSpaceProbe {
    pub fn new(name: impl Into<String>, tier: Tier, source: impl SpaceSource + 'static) -> Self {
        Self {
            name: name.into(),
            tier,
            source: Box::new(source),
        }
    }
}

#[async_trait::async_trait]
impl IProbe for DiskSpaceProbe {
    fn name(&self) -> &str {
        &self.name
    }

    fn tier(&self) -> Tier {
        self.tier
    }

    async fn run(&self, _ctx: &ProbeContext) -> ProbeResult {
        let free = match self.source.free_percent() {
            Ok(free) => free,
            Err(err) => return ProbeResult::execution_error(format!("statfs failed: {err}")),
        };

        let result = if free < UNHEALTHY_FREE_PERCENT {
            ProbeResult::unhealthy(format!("only {free:.1}% disk space free"))
        } else if free < DEGRADED_FREE_PERCENT {
            ProbeResult::degraded(format!("{free:.1}% disk space free"))
        } else {
            ProbeResult::healthy()
        };
        result.with_detail("free_percent", (free * 10.0).round() / 10.0)
    }
}
