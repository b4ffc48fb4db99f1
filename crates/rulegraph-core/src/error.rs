//! Error types for expression generation and rule document loading.

use thiserror::Error;

/// Errors that can occur while generating tokens.
///
/// Malformed but acyclic graphs never fail; they degrade to empty or
/// placeholder contributions instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// A logic node was reached again while its own subtree was being generated.
    #[error("cycle detected at node {node_id}")]
    CycleDetected { node_id: String },
}

/// Errors that can occur while loading a rule document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document file could not be read.
    #[error("failed to read rule document: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON for the rule schema.
    #[error("invalid rule document: {0}")]
    Json(#[from] serde_json::Error),
}
