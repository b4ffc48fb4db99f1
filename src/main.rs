//! Rulegraph CLI entry point

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "rulegraph")]
#[command(about = "Compile trigger logic graphs into renderable expressions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the trigger expressions of a rule document
    Render {
        /// Rule document (JSON)
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Start the HTTP API
    Serve {
        /// Port to listen on (overrides RULEGRAPH_PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides RULEGRAPH_HOST)
        #[arg(long)]
        host: Option<String>,
    },
    /// Show version
    Version,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so rendered output stays pipeable
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "rulegraph={level},rulegraph_core={level},rulegraph_server={level}",
            level = log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Render { file, format } => commands::render(&file, format),
        Commands::Serve { port, host } => commands::serve(host, port).await,
        Commands::Version => {
            println!("rulegraph v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
