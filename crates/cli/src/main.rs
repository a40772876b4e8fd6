//! Tessera CLI — the main entry point.
//!
//! Commands:
//! - `init`   — Write a default config file
//! - `serve`  — Start the HTTP gateway
//! - `check`  — Validate config and probe the provider

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "tessera",
    about = "Tessera — a chat service speaking HTML fragments",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init,

    /// Start the HTTP gateway server
    Serve {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Validate the configuration and probe the provider
    Check,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Init => commands::init::run().await?,
        Commands::Serve { port } => commands::serve::run(port).await?,
        Commands::Check => commands::check::run().await?,
    }

    Ok(())
}
