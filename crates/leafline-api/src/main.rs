//! Leafline CLI and REST API entry point.
//!
//! Binary name: `leafline`
//!
//! Parses CLI arguments, initializes database and services, then dispatches
//! to the appropriate command handler or starts the REST API server.

mod cli;
mod http;
mod state;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,leafline=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let state = AppState::init().await?;

    match cli.command {
        Commands::Serve { addr } => {
            let addr = addr.unwrap_or_else(|| state.config.server.bind_addr.clone());
            let router = http::router::build_router(state)?;
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!(%addr, "leafline listening");
            axum::serve(listener, router).await?;
        }

        Commands::Ask { message, lang } => {
            cli::chat::ask(&state, message, lang).await?;
        }

        Commands::History => {
            cli::chat::history(&state, cli.json).await?;
        }

        Commands::Clear { yes } => {
            cli::chat::clear(&state, yes).await?;
        }
    }

    Ok(())
}
