use anyhow::{Context, Result};
use clap::Parser;
use dotenvy::dotenv;
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod cli;
mod common;
mod config;
mod docs;
mod infrastructure;
mod modules;
mod routes;
mod state;
mod workers;

use cli::{Cli, Command};
use config::settings::AppConfig;
use infrastructure::storage::s3::StorageService;
use modules::frames::service::FrameService;
use state::AppState;
use workers::{FfmpegExtractor, YtDlpFetcher};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    dotenv().ok();

    // Logs go to stderr so `invoke` keeps stdout for the response.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::new().context("Invalid environment configuration")?;
    let storage = StorageService::new(&config).await;

    let state = AppState::new(
        config.clone(),
        Arc::new(YtDlpFetcher::new(config.ytdlp_bin.clone())),
        Arc::new(FfmpegExtractor::new(config.ffmpeg_bin.clone())),
        Arc::new(storage),
    );

    match cli.command {
        Some(Command::Invoke) => invoke_once(&state).await,
        None => serve(state).await,
    }
}

/// Handle a single event from stdin and print the envelope on stdout.
async fn invoke_once(state: &AppState) -> Result<()> {
    let mut event = String::new();
    tokio::io::stdin()
        .read_to_string(&mut event)
        .await
        .context("Failed to read event from stdin")?;

    let response = FrameService::invoke_event(state, &event).await;
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}

async fn serve(state: AppState) -> Result<()> {
    let addr = format!("0.0.0.0:{}", state.config.server_port);
    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("🚀 Frame service running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
