//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{DefaultBodyLimit, FromRef},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::models::AppConfig;
use crate::services::BeadService;

/// Slack on top of the base64-expanded image limit for the JSON envelope.
const BODY_OVERHEAD: usize = 64 * 1024;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub service: Arc<BeadService>,
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Arc<BeadService> {
    fn from_ref(state: &AppState) -> Self {
        state.service.clone()
    }
}

/// Create application state from loaded configuration.
pub fn create_app_state(config: AppConfig) -> AppState {
    let service = Arc::new(BeadService::new(&config));
    AppState {
        config: Arc::new(config),
        service,
    }
}

/// Largest request body accepted: an image at the byte limit, base64
/// encoded inside a JSON data URL.
fn body_limit(config: &AppConfig) -> usize {
    config
        .limits
        .max_image_bytes
        .saturating_mul(4)
        .div_ceil(3)
        .saturating_add(BODY_OVERHEAD)
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let body_limit = body_limit(&state.config);

    Router::new()
        // Image operations
        .route("/api/pixelate", post(api::handle_pixelate))
        .route("/api/bead-preview", post(api::handle_bead_preview))
        .route("/api/bead-colors", post(api::handle_bead_colors))
        .route("/api/bead-colors/csv", post(api::handle_bead_colors_csv))
        // Palettes
        .route("/api/palettes", get(api::handle_list_palettes))
        .route("/api/palettes/import", post(api::handle_import_palette))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
}
