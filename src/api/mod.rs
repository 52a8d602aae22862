//! Read API over the stored leaders.
//!
//! Axum router with JSON bodies and open CORS. Route handlers validate
//! client input first, then query the store and reshape rows into the
//! client-facing document; errors map to 400 (validation), 404 (no data),
//! or 500 (everything else) with an `{"error": ...}` body.

mod handlers;
pub mod responses;

use std::sync::Arc;
use std::time::Instant;

use axum::body::Body;
use axum::extract::Request;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tracing::info;

use crate::cli::types::Season;
use crate::error::Result;
use crate::espn::EspnClient;
use crate::ingest::WeekPolicy;
use crate::storage::LeaderDatabase;

pub use handlers::IngestParams;

/// Shared state for all routes: explicitly constructed and injected, so
/// tests can substitute an in-memory store and a mock ESPN endpoint.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Mutex<LeaderDatabase>>,
    pub espn: EspnClient,
    pub season: Season,
    pub week_policy: Arc<dyn WeekPolicy>,
}

impl AppState {
    pub fn new(
        db: LeaderDatabase,
        espn: EspnClient,
        season: Season,
        week_policy: Arc<dyn WeekPolicy>,
    ) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
            espn,
            season,
            week_policy,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::current_week))
        .route("/current", get(handlers::current_week))
        .route("/week/:week", get(handlers::week_leaders))
        .route("/season", get(handlers::season_leaders))
        .route("/stat/:stat_type", get(handlers::stat_history))
        .route("/health", get(handlers::health))
        .route("/ingest", post(handlers::trigger_ingest))
        .fallback(handlers::unknown_route)
        .layer(middleware::from_fn(cors_middleware))
        .layer(middleware::from_fn(log_middleware))
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    info!(addr = %listener.local_addr()?, "read API listening");
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}

/// CORS-open: every origin may read. Preflight requests are answered
/// directly.
async fn cors_middleware(req: Request<Body>, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        let mut resp = StatusCode::NO_CONTENT.into_response();
        let headers = resp.headers_mut();
        headers.insert("access-control-allow-origin", HeaderValue::from_static("*"));
        headers.insert(
            "access-control-allow-methods",
            HeaderValue::from_static("GET, POST, OPTIONS"),
        );
        headers.insert(
            "access-control-allow-headers",
            HeaderValue::from_static("content-type"),
        );
        return resp;
    }

    let mut resp = next.run(req).await;
    resp.headers_mut()
        .insert("access-control-allow-origin", HeaderValue::from_static("*"));
    resp
}

async fn log_middleware(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let resp = next.run(req).await;

    info!(
        %method,
        path = %path,
        status = resp.status().as_u16(),
        latency_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    resp
}
