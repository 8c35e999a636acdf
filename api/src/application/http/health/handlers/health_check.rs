use axum::extract::State;
use chrono::{DateTime, Utc};
use recipe_analyzer_core::domain::health::ports::HealthCheckService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    /// `healthy` when the database answered, `unhealthy` otherwise.
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub database_latency_ms: Option<u64>,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Health check",
    responses(
        (status = 200, body = HealthResponse),
        (status = 503, body = HealthResponse),
    ),
)]
pub async fn health_check(State(state): State<AppState>) -> Response<HealthResponse> {
    let version = env!("CARGO_PKG_VERSION").to_string();

    match state.service.health().await {
        Ok(latency) => Response::OK(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
            version,
            database_latency_ms: Some(latency),
        }),
        Err(e) => {
            tracing::error!("health check failed: {}", e);
            Response::ServiceUnavailable(HealthResponse {
                status: "unhealthy".to_string(),
                timestamp: Utc::now(),
                version,
                database_latency_ms: None,
            })
        }
    }
}
