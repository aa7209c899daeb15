use crate::audit;
use crate::config::AuditConfig;
use crate::results::{AuditRequest, ErrorResponse};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

/// Shared state for request handlers
pub struct AppState {
    /// Service configuration
    pub config: AuditConfig,

    /// Pooled HTTP client used for content fetches, link probes and the
    /// page speed API
    pub http: reqwest::Client,
}

impl AppState {
    /// Builds the shared state, including the pooled HTTP client
    pub fn new(config: AuditConfig) -> Result<Self, Box<dyn Error>> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()?;

        Ok(Self { config, http })
    }
}

/// Builds the application router with CORS open to any origin
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/api/audit", post(handle_audit))
        .layer(cors)
        .with_state(state)
}

/// Binds the listener and serves requests until shutdown
pub async fn serve(config: AuditConfig) -> Result<(), Box<dyn Error>> {
    let port = config.listen_port;
    let state = Arc::new(AppState::new(config)?);
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    ::log::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Handles `POST /api/audit`: runs the full pipeline for the requested URL.
///
/// A successful audit returns the aggregated report with status 200; any
/// stage failure returns status 500 with the error message.
async fn handle_audit(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AuditRequest>,
) -> Response {
    match audit::run(&state, &request.url).await {
        Ok(report) => Json(report).into_response(),
        Err(e) => {
            ::log::error!("Audit of {} failed: {}", request.url, e);
            let body = ErrorResponse {
                error: e.to_string(),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_builds_from_default_config() {
        let state = AppState::new(AuditConfig::default()).unwrap();
        assert_eq!(state.config.listen_port, 5000);
    }
}
