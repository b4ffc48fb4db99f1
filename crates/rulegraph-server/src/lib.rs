//! HTTP server exposing the expression generator to the rule editor

pub mod config;
pub mod handlers;
pub mod router;

use std::sync::Arc;

use rulegraph_core::{Expression, GenerateError, GeneratorOptions, GraphSnapshot};
use tokio::sync::RwLock;

pub use config::ServerConfig;

/// The graph snapshot currently held by the server and its derived expressions.
#[derive(Debug, Default)]
pub struct HeldGraph {
    pub graph: GraphSnapshot,
    pub expressions: Vec<Expression>,
    /// Bumped on every accepted replacement.
    pub sequence: u64,
}

/// State shared by all request handlers.
#[derive(Debug)]
pub struct ServerState {
    pub held: RwLock<HeldGraph>,
    pub options: GeneratorOptions,
}

impl ServerState {
    pub fn new(options: GeneratorOptions) -> Self {
        ServerState {
            held: RwLock::new(HeldGraph::default()),
            options,
        }
    }

    /// Replace the held snapshot, recomputing everything from scratch.
    ///
    /// A snapshot that fails generation is rejected and the previous one stays.
    pub async fn replace(
        &self,
        graph: GraphSnapshot,
    ) -> Result<(u64, Vec<Expression>), GenerateError> {
        let expressions = graph.expressions(&self.options)?;

        let mut held = self.held.write().await;
        held.sequence += 1;
        held.graph = graph;
        held.expressions = expressions.clone();

        tracing::debug!(
            "Graph snapshot #{} accepted: {} nodes, {} expressions",
            held.sequence,
            held.graph.nodes.len(),
            expressions.len()
        );
        Ok((held.sequence, expressions))
    }
}

/// The rule graph HTTP server.
pub struct RuleGraphServer {
    config: ServerConfig,
    state: Arc<ServerState>,
}

impl RuleGraphServer {
    pub fn new(config: ServerConfig) -> Self {
        let state = Arc::new(ServerState::new(config.options.clone()));
        RuleGraphServer { config, state }
    }

    pub fn state(&self) -> Arc<ServerState> {
        Arc::clone(&self.state)
    }

    /// Bind and serve until the process is stopped.
    pub async fn start(self) -> anyhow::Result<()> {
        let addr = self.config.addr();
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!("Listening on http://{}", listener.local_addr()?);

        let app = router::create_router(self.state);
        axum::serve(listener, app).await?;
        Ok(())
    }
}
