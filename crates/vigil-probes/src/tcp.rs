//! TCP connectivity probe for dependencies without an HTTP surface
//! (databases, caches, message brokers).

use std::time::Instant;

use tokio::net::TcpStream;
use vigil_core::models::{ProbeResult, Tier};
use vigil_core::traits::{IProbe, ProbeContext};

/// Dials `host:port` within the context budget. A completed handshake is
/// Healthy; refusal or timeout is Unhealthy.
pub struct TcpProbe {
    name: String,
    tier: Tier,
    addr: String,
}

impl TcpProbe {
    pub fn new(name: impl Into<String>, tier: Tier, addr: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tier,
            addr: addr.into(),
        }
    }
}

#[async_trait::async_trait]
impl IProbe for TcpProbe {
    fn name(&self) -> &str {
        &self.name
    }

    fn tier(&self) -> Tier {
        self.tier
    }

    async fn run(&self, ctx: &ProbeContext) -> ProbeResult {
        let started = Instant::now();
        match tokio::time::timeout(ctx.deadline, TcpStream::connect(&self.addr)).await {
            Ok(Ok(_stream)) => ProbeResult::healthy()
                .with_detail("connect_ms", started.elapsed().as_millis() as u64),
            Ok(Err(err)) => {
                ProbeResult::unhealthy(format!("connect to {} failed: {err}", self.addr))
            }
            Err(_) => ProbeResult::unhealthy(format!("connect to {} timed out", self.addr)),
        }
    }
}
