//! REST API handlers for the rule graph server

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use rulegraph_core::{Expression, GenerateError, GraphSnapshot, RuleDocument};
use serde::Serialize;

use crate::ServerState;

/// Expression list for a graph, with the snapshot sequence when it is the held graph.
#[derive(Debug, Serialize)]
pub struct ExpressionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u64>,
    pub expressions: Vec<Expression>,
}

/// A rendered rule document.
#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub expressions: Vec<Expression>,
    /// One plain-text line per expression.
    pub text: Vec<String>,
    /// `None` when the rule has no duration requirement.
    pub temporal_threshold_seconds: Option<u64>,
    pub target_objects: Vec<String>,
    pub alert_message: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Generation failure surfaced to HTTP clients as 422.
#[derive(Debug)]
pub struct ApiError(GenerateError);

impl From<GenerateError> for ApiError {
    fn from(err: GenerateError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}

/// Generate expressions for a posted graph without touching the held one
pub async fn render_expression(
    State(state): State<Arc<ServerState>>,
    Json(graph): Json<GraphSnapshot>,
) -> Result<Json<ExpressionResponse>, ApiError> {
    let expressions = graph.expressions(&state.options)?;
    Ok(Json(ExpressionResponse {
        sequence: None,
        expressions,
    }))
}

/// Replace the held graph and return its fresh expressions
pub async fn put_graph(
    State(state): State<Arc<ServerState>>,
    Json(graph): Json<GraphSnapshot>,
) -> Result<Json<ExpressionResponse>, ApiError> {
    let (sequence, expressions) = state.replace(graph).await.map_err(|e| {
        tracing::warn!("Rejected graph snapshot: {}", e);
        e
    })?;
    Ok(Json(ExpressionResponse {
        sequence: Some(sequence),
        expressions,
    }))
}

/// Get the held graph as JSON
pub async fn get_graph(State(state): State<Arc<ServerState>>) -> Json<GraphSnapshot> {
    let held = state.held.read().await;
    Json(held.graph.clone())
}

/// Get the expressions derived from the held graph
pub async fn get_expression(State(state): State<Arc<ServerState>>) -> Json<ExpressionResponse> {
    let held = state.held.read().await;
    Json(ExpressionResponse {
        sequence: Some(held.sequence),
        expressions: held.expressions.clone(),
    })
}

/// Render a complete rule document
pub async fn render_document(
    State(state): State<Arc<ServerState>>,
    Json(document): Json<RuleDocument>,
) -> Result<Json<DocumentResponse>, ApiError> {
    let expressions = document.expressions(&state.options)?;
    let text = expressions.iter().map(Expression::text).collect();
    let temporal_threshold_seconds = document
        .trigger_logic
        .temporal_threshold()
        .map(|d| d.as_secs());

    Ok(Json(DocumentResponse {
        expressions,
        text,
        temporal_threshold_seconds,
        target_objects: document.visual_detection.target_objects,
        alert_message: document.alert_message,
    }))
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    let health = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    Json(health)
}
