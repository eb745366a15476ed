//! Top-level router configuration.
//!
//! # Route Structure
//!
//! There are no per-path routes: every method and path is handed to
//! [`gateway_handler`], which lets the request router decide between
//! redirect, shorten and the canned error pages.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::api::handlers::gateway_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;

/// Constructs the application router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .fallback(gateway_handler)
        .with_state(state)
        .layer(tracing::layer())
}
