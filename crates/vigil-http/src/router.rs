//! The four endpoint views over the aggregator.
//!
//! | Route              | Tiers                | Deadline     | 503 when            |
//! |--------------------|----------------------|--------------|---------------------|
//! | `/health`          | Critical             | liveness_ms  | Unhealthy           |
//! | `/health/ready`    | Critical + Standard  | readiness_ms | Degraded, Unhealthy |
//! | `/health/startup`  | Critical + Standard  | startup_ms   | Degraded, Unhealthy |
//! | `/health/detailed` | all                  | detailed_ms  | never               |
//!
//! Liveness tolerates Degraded so a slow dependency cannot trigger restarts;
//! readiness and startup pull the instance out of rotation on anything
//! non-Healthy; detailed is for humans and must never cause automated
//! action. Handlers never return 500: an engine failure becomes a synthetic
//! Unhealthy aggregate with a single `registry` error entry.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tracing::error;
use vigil_core::config::DeadlineConfig;
use vigil_core::models::{AggregateReport, DetailedReport, Tier};
use vigil_engine::{Aggregator, HealthState, ProbeRegistry};

use crate::process;

const LIVENESS_TIERS: &[Tier] = &[Tier::Critical];
const READINESS_TIERS: &[Tier] = &[Tier::Critical, Tier::Standard];
const DETAILED_TIERS: &[Tier] = &[Tier::Critical, Tier::Standard, Tier::Advisory];

/// Shared handler state: the registry, the immutable health state, and the
/// per-view deadlines.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ProbeRegistry>,
    pub state: Arc<HealthState>,
    pub deadlines: DeadlineConfig,
}

impl AppState {
    pub fn new(registry: Arc<ProbeRegistry>, state: Arc<HealthState>, deadlines: DeadlineConfig) -> Self {
        Self {
            registry,
            state,
            deadlines,
        }
    }
}

/// Build the health router.
pub fn router(app: AppState) -> Router {
    Router::new()
        .route("/health", get(liveness))
        .route("/health/ready", get(readiness))
        .route("/health/startup", get(startup))
        .route("/health/detailed", get(detailed))
        .with_state(app)
}

/// Bind `addr` and serve the health router until the process exits.
pub async fn serve(addr: SocketAddr, app: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "health endpoints listening");
    axum::serve(listener, router(app)).await
}

/// Select, evaluate, and fall back to a synthetic report on engine failure.
async fn evaluate_view(app: &AppState, tiers: &[Tier], deadline: Duration) -> AggregateReport {
    let probes = match app.registry.select(tiers) {
        Ok(probes) => probes,
        Err(err) => {
            error!(error = %err, "probe selection failed");
            return Aggregator::unavailable(&app.state, &err);
        }
    };
    match Aggregator::evaluate(&app.state, &probes, deadline).await {
        Ok(report) => report,
        Err(err) => {
            error!(error = %err, "evaluation failed");
            Aggregator::unavailable(&app.state, &err)
        }
    }
}

fn availability_code(available: bool) -> StatusCode {
    if available {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// Liveness: critical probes only. Degraded is still alive; only Unhealthy
/// asks the orchestrator for a restart.
async fn liveness(State(app): State<AppState>) -> impl IntoResponse {
    let report = evaluate_view(&app, LIVENESS_TIERS, app.deadlines.liveness()).await;
    (availability_code(report.status.is_operational()), Json(report))
}

/// Readiness: anything non-Healthy pulls the instance out of rotation.
async fn readiness(State(app): State<AppState>) -> impl IntoResponse {
    let report = evaluate_view(&app, READINESS_TIERS, app.deadlines.readiness()).await;
    (availability_code(report.status.is_healthy()), Json(report))
}

/// Startup: readiness semantics with a boot-window deadline.
async fn startup(State(app): State<AppState>) -> impl IntoResponse {
    let report = evaluate_view(&app, READINESS_TIERS, app.deadlines.startup()).await;
    (availability_code(report.status.is_healthy()), Json(report))
}

/// Detailed: every tier plus process metrics, always 200. The true status
/// lives in the body; this view must never trigger automated action.
async fn detailed(State(app): State<AppState>) -> impl IntoResponse {
    let report = evaluate_view(&app, DETAILED_TIERS, app.deadlines.detailed()).await;
    let detailed = DetailedReport {
        report,
        process: process::collect(),
    };
    (StatusCode::OK, Json(detailed))
}
