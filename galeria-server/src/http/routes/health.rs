//! Operational endpoints - host identity and health check
//!
//! Both must keep working with the database unreachable: "/" is what a
//! load balancer probes, and /health reports probe failures as data.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Hostname response
#[derive(Serialize)]
pub struct HostnameResponse {
    pub hostname: String,
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub api: &'static str,
    pub hostname: String,
    pub database: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_error: Option<String>,
}

pub(crate) fn local_hostname() -> String {
    hostname::get()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|_| "unknown".to_owned())
}

/// GET / - machine hostname, for watching load balancing
async fn get_hostname() -> Json<HostnameResponse> {
    Json(HostnameResponse {
        hostname: local_hostname(),
    })
}

/// GET /health - API liveness plus a best-effort database probe
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let mut response = HealthResponse {
        api: "online",
        hostname: local_hostname(),
        database: "disconnected",
        database_error: None,
    };

    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => response.database = "connected",
        Err(err) => response.database_error = Some(err.to_string()),
    }

    Json(response)
}

/// Operational routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_hostname))
        .route("/health", get(health))
}
