//! HTTP dependency probe: a GET against an endpoint that should answer 2xx.

use vigil_core::models::{ProbeResult, Tier};
use vigil_core::traits::{IProbe, ProbeContext};

/// Probes an HTTP endpoint with a GET request bounded by the context budget.
///
/// A 2xx answer is Healthy. Any other status is Degraded: the dependency is
/// reachable but unhappy, which is worth surfacing without pulling the
/// instance out of rotation on its own. Transport errors and timeouts are
/// Unhealthy.
pub struct HttpProbe {
    name: String,
    tier: Tier,
    url: String,
    client: reqwest::Client,
}

impl HttpProbe {
    pub fn new(name: impl Into<String>, tier: Tier, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tier,
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Reuse an existing client (connection pools, proxies, TLS config).
    pub fn with_client(
        name: impl Into<String>,
        tier: Tier,
        url: impl Into<String>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            name: name.into(),
            tier,
            url: url.into(),
            client,
        }
    }
}

#[async_trait::async_trait]
impl IProbe for HttpProbe {
    fn name(&self) -> &str {
        &self.name
    }

    fn tier(&self) -> Tier {
        self.tier
    }

    async fn run(&self, ctx: &ProbeContext) -> ProbeResult {
        let response = self
            .client
            .get(&self.url)
            .timeout(ctx.deadline)
            .send()
            .await;

        match response {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    ProbeResult::healthy().with_detail("status_code", status.as_u16())
                } else {
                    ProbeResult::degraded(format!("endpoint answered {status}"))
                        .with_detail("status_code", status.as_u16())
                }
            }
            Err(err) if err.is_timeout() => {
                ProbeResult::unhealthy(format!("request to {} timed out", self.url))
            }
            Err(err) => {
                tracing::debug!(probe = %self.name, error = %err, "http probe failed");
                ProbeResult::unhealthy(format!("request to {} failed: {err}", self.url))
            }
        }
    }
}
