//! Closure-backed probe, the building block for composition roots and tests.

use std::future::Future;
use std::pin::Pin;

use vigil_core::models::{ProbeResult, Tier};
use vigil_core::traits::{IProbe, ProbeContext};

type ProbeFn =
    Box<dyn Fn(ProbeContext) -> Pin<Box<dyn Future<Output = ProbeResult> + Send>> + Send + Sync>;

/// A probe defined by a name, a tier, and an async closure.
pub struct FnProbe {
    name: String,
    tier: Tier,
    run: ProbeFn,
}

impl FnProbe {
    pub fn new<F, Fut>(name: impl Into<String>, tier: Tier, run: F) -> Self
    where
        F: Fn(ProbeContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ProbeResult> + Send + 'static,
    {
        Self {
            name: name.into(),
            tier,
            run: Box::new(move |ctx| Box::pin(run(ctx))),
        }
    }
}

#[async_trait::async_trait]
impl IProbe for FnProbe {
    fn name(&self) -> &str {
        &self.name
    }

    fn tier(&self) -> Tier {
        self.tier
    }

    async fn run(&self, ctx: &ProbeContext) -> ProbeResult {
        (self.run)(*ctx).await
    }
}
