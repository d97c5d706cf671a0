//! Itinerary backend: an HTTP front for Ollama.
//!
//! Routes:
//! - `POST /generate_itinerary` takes a trip request and answers
//!   `{"itinerary": "..."}`
//! - `GET /health` answers `{"status": "ok"}`

use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use log::{error, info, warn};
use tokio::signal::unix::{signal, SignalKind};
use waypoint_core::{
    backend::OllamaClient,
    gateway::{ItineraryReply, GENERATE_ITINERARY_PATH},
    models::TripRequest,
    BackendConfig, GatewayError, WaypointError,
};

#[derive(Clone)]
pub struct AppState {
    ollama: Arc<OllamaClient>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidTrip(#[from] WaypointError),

    #[error("model backend failed: {0}")]
    Model(#[from] GatewayError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = match &self {
            ApiError::InvalidTrip(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Model(_) => StatusCode::BAD_GATEWAY,
        };
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (code, body).into_response()
    }
}

pub fn router(ollama: OllamaClient) -> Router {
    Router::new()
        .route(GENERATE_ITINERARY_PATH, post(generate_itinerary))
        .route("/health", get(health))
        .with_state(AppState {
            ollama: Arc::new(ollama),
        })
}

async fn generate_itinerary(
    State(state): State<AppState>,
    Json(trip): Json<TripRequest>,
) -> Result<Json<ItineraryReply>, ApiError> {
    trip.validate()?;
    info!(
        "Generating {}-day itinerary for {} with {}",
        trip.day_count(),
        trip.destination,
        trip.model
    );

    let itinerary = state.ollama.generate_itinerary(&trip).await.map_err(|e| {
        warn!("Ollama request failed: {e}");
        e
    })?;
    Ok(Json(ItineraryReply { itinerary }))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Serves the backend on `bind` (or the configured address) until SIGINT or
/// SIGTERM.
pub async fn run_http_server(config: &BackendConfig, bind: Option<SocketAddr>) -> Result<()> {
    let addr = match bind {
        Some(addr) => addr,
        None => config
            .bind
            .parse()
            .with_context(|| format!("Invalid bind address '{}'", config.bind))?,
    };
    let ollama = OllamaClient::new(config).context("Failed to create Ollama client")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(
        "Itinerary backend listening on http://{} (Ollama at {})",
        listener.local_addr()?,
        config.ollama_url
    );

    axum::serve(listener, router(ollama))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| error!("Server error: {e:?}"))?;

    info!("Itinerary backend shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let (mut sigint, mut sigterm) = match (
        signal(SignalKind::interrupt()),
        signal(SignalKind::terminate()),
    ) {
        (Ok(sigint), Ok(sigterm)) => (sigint, sigterm),
        (Err(e), _) | (_, Err(e)) => {
            error!("Failed to install signal handlers: {e}");
            return std::future::pending().await;
        }
    };

    tokio::select! {
        _ = sigint.recv() => info!("Received SIGINT, shutting down gracefully..."),
        _ = sigterm.recv() => info!("Received SIGTERM, shutting down gracefully..."),
    }
}
