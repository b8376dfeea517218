//! Pulseira Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

/// Build the full application router over the given state.
///
/// Includes the session and trace layers; Sentry tower layers are added by
/// the binary so tests do not need a Sentry client.
#[must_use]
pub fn app(state: state::AppState) -> Router {
    let session_layer = middleware::session::create_session_layer(state.config());

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(routes::routes())
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
