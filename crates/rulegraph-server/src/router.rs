//! Axum router setup for the rule graph server

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::{
    handlers::{
        get_expression, get_graph, health_check, put_graph, render_document, render_expression,
    },
    ServerState,
};

/// Create the axum router with all routes
pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        // Stateless rendering
        .route("/api/expression", post(render_expression))
        .route("/api/document", post(render_document))
        // Held snapshot, recomputed on every PUT
        .route("/api/graph", get(get_graph).put(put_graph))
        .route("/api/graph/expression", get(get_expression))
        .route("/api/health", get(health_check))
        // The editor runs on its own dev-server origin
        .layer(CorsLayer::permissive())
        .with_state(state)
}
