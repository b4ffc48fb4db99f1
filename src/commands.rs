//! CLI command implementations

use anyhow::Context;
use rulegraph_core::{Expression, RuleDocument};
use rulegraph_server::config::generator_options_from_env;
use rulegraph_server::{RuleGraphServer, ServerConfig};
use std::path::Path;

use crate::Format;

pub fn render(file: &Path, format: Format) -> anyhow::Result<()> {
    tracing::debug!("Rendering rule document: {}", file.display());

    let document = RuleDocument::from_path(file)
        .with_context(|| format!("cannot load {}", file.display()))?;
    let expressions = document.expressions(&generator_options_from_env())?;

    println!("{}", format_expressions(&expressions, format)?);
    Ok(())
}

/// Text mode prints `<rootId>: <expression>` per root; JSON mode the expression list.
pub fn format_expressions(expressions: &[Expression], format: Format) -> anyhow::Result<String> {
    match format {
        Format::Text => Ok(expressions
            .iter()
            .map(|e| format!("{}: {}", e.root_id, e))
            .collect::<Vec<_>>()
            .join("\n")),
        Format::Json => Ok(serde_json::to_string_pretty(expressions)?),
    }
}

pub async fn serve(host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    let mut config = ServerConfig::from_env()?;
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    tracing::info!("rulegraph v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Starting rulegraph server on {}", config.addr());

    RuleGraphServer::new(config).start().await
}
