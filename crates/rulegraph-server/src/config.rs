//! Server configuration from the environment

use anyhow::Context;
use rulegraph_core::GeneratorOptions;

pub const HOST_VAR: &str = "RULEGRAPH_HOST";
pub const PORT_VAR: &str = "RULEGRAPH_PORT";
pub const CONTENT_FALLBACK_VAR: &str = "RULEGRAPH_CONTENT_FALLBACK";
pub const TODO_PLACEHOLDER_VAR: &str = "RULEGRAPH_TODO_PLACEHOLDER";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 7891;

/// Where the HTTP API listens and which placeholders it renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub options: GeneratorOptions,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            options: GeneratorOptions::default(),
        }
    }
}

/// Load a `.env` file from the working directory if one exists.
fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
    }
}

/// Placeholder overrides from the environment (and `.env`), shared by every entry point.
pub fn generator_options_from_env() -> GeneratorOptions {
    load_dotenv();
    generator_options_from_lookup(|key| std::env::var(key).ok())
}

/// Apply `RULEGRAPH_CONTENT_FALLBACK` / `RULEGRAPH_TODO_PLACEHOLDER` over the defaults.
pub fn generator_options_from_lookup<F>(lookup: F) -> GeneratorOptions
where
    F: Fn(&str) -> Option<String>,
{
    let mut options = GeneratorOptions::default();
    if let Some(fallback) = lookup(CONTENT_FALLBACK_VAR) {
        options.content_fallback = fallback;
    }
    if let Some(placeholder) = lookup(TODO_PLACEHOLDER_VAR) {
        options.todo_placeholder = placeholder;
    }
    options
}

impl ServerConfig {
    /// Read `RULEGRAPH_*` variables, loading a `.env` file first if one exists.
    pub fn from_env() -> anyhow::Result<Self> {
        load_dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup; unset keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ServerConfig {
            options: generator_options_from_lookup(&lookup),
            ..ServerConfig::default()
        };

        if let Some(host) = lookup(HOST_VAR) {
            config.host = host;
        }
        if let Some(port) = lookup(PORT_VAR) {
            config.port = port
                .parse()
                .with_context(|| format!("{} is not a valid port: {}", PORT_VAR, port))?;
        }

        Ok(config)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
