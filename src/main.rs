//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `seo_insight` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use seo_insight::app::{print_search_statistics, render_regions, render_view, shutdown_signal};
use seo_insight::config::{Cli, Command};
use seo_insight::dashboard::{start_dashboard_server, DashboardState};
use seo_insight::export::export_view;
use seo_insight::initialization::init_logger_with;
use seo_insight::{GeminiClient, StateCoordinator, SubmitOutcome};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // Try loading from current directory first, then from the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run(cli).await {
        eprintln!("seo_insight error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    if cli.command == Command::Regions {
        println!("{}", render_regions(cli.region));
        return Ok(());
    }

    let config = cli.config();
    if config.api_key.is_none() {
        log::warn!("No API key found; set GEMINI_API_KEY (or API_KEY) or pass --api-key");
    }
    let backend = GeminiClient::from_config(&config)
        .await
        .context("Failed to initialize generative backend client")?;
    info!("Using model {} at {}", backend.model(), backend.endpoint());
    let coordinator = Arc::new(StateCoordinator::with_region(
        Arc::new(backend),
        config.default_region,
    ));

    if let Command::Serve { port } = cli.command {
        let state = DashboardState::new(Arc::clone(&coordinator));
        start_dashboard_server(port, state, shutdown_signal()).await?;
        print_search_statistics(&coordinator.stats());
        return Ok(());
    }

    let Some((query, forced_mode)) = cli.command.search_request() else {
        return Ok(());
    };
    let outcome = coordinator.search(query, forced_mode).await;
    let view = coordinator.snapshot().await;

    match outcome {
        SubmitOutcome::Ignored => anyhow::bail!("Query must not be empty"),
        SubmitOutcome::Failed { message, .. } => anyhow::bail!("{}", message),
        SubmitOutcome::Completed { .. } | SubmitOutcome::Superseded { .. } => {
            println!("{}", render_view(&view));
        }
    }

    if let Some(dir) = &config.export_dir {
        let written = export_view(dir, &view)
            .with_context(|| format!("Failed to export results to {}", dir.display()))?;
        for path in written {
            println!("Exported {}", path.display());
        }
    }
    Ok(())
}
