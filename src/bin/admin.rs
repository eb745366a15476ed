//! CLI administration tool for short-link.
//!
//! Talks to the configured store directly, without going through the HTTP
//! server.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- shorten https://example.com/page
//!
//! # Look up an identifier
//! cargo run --bin admin -- resolve aB3dE5g
//!
//! # Replay a proxy event through the request router
//! cargo run --bin admin -- invoke event.json
//!
//! # Show the effective configuration
//! cargo run --bin admin -- config
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`short_link::config`].

use short_link::api::dto::proxy_event::ProxyEvent;
use short_link::application::services::RequestRouter;
use short_link::config::{self, Config, StoreBackend, mask_connection_string};
use short_link::error::AppError;
use short_link::server::{build_router, build_store};
use short_link::telemetry;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// CLI tool for managing short-link.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store a URL under a new identifier
    Shorten {
        /// URL including its scheme, e.g. https://example.com
        url: String,
    },

    /// Print the URL stored under an identifier
    Resolve {
        /// Identifier, e.g. aB3dE5g
        id: String,
    },

    /// Run a proxy event JSON file through the request router
    Invoke {
        /// Path to the event file
        event_file: PathBuf,
    },

    /// Print the validated configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env().context("Invalid configuration")?;
    telemetry::init_tracing(&config);

    match cli.command {
        Commands::Shorten { url } => shorten(&config, &url).await?,
        Commands::Resolve { id } => resolve(&config, &id).await?,
        Commands::Invoke { event_file } => invoke(&config, &event_file).await?,
        Commands::Config => print_config(&config),
    }

    Ok(())
}

async fn connect_router(config: &Config) -> Result<Arc<RequestRouter>> {
    if config.store_backend == StoreBackend::Memory {
        println!(
            "{}",
            "⚠️  Using the in-memory store; nothing will be persisted".yellow()
        );
        println!();
    }

    let store = build_store(config).await?;

    Ok(build_router(config, store))
}

async fn shorten(config: &Config, url: &str) -> Result<()> {
    let router = connect_router(config).await?;

    match router.shorten(Some(url)).await {
        Ok(id) => {
            println!("{}", "✅ Link created".green().bold());
            println!("  Id:  {}", id.bright_yellow().bold());
            println!("  URL: {}", url.cyan());
            Ok(())
        }
        Err(AppError::InvalidUrl(reason)) => {
            println!("{} {}", "❌ Invalid URL:".red(), reason);
            std::process::exit(2);
        }
        Err(e) => Err(anyhow::anyhow!("Failed to shorten URL: {}", e)),
    }
}

async fn resolve(config: &Config, id: &str) -> Result<()> {
    let router = connect_router(config).await?;

    match router.resolve(&format!("/{id}")).await {
        Ok(url) => {
            println!("  {} → {}", id.bright_yellow(), url.cyan());
            Ok(())
        }
        Err(AppError::InvalidPath(_)) | Err(AppError::NotFound(_)) => {
            println!("{} {}", "❌ Not found:".red(), id);
            std::process::exit(1);
        }
        Err(e) => Err(anyhow::anyhow!("Failed to resolve id: {}", e)),
    }
}

async fn invoke(config: &Config, event_file: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(event_file)
        .with_context(|| format!("Failed to read {}", event_file.display()))?;
    let event: ProxyEvent = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid proxy event", event_file.display()))?;

    let router = connect_router(config).await?;
    let response = router.handle(event.into_routed_request()).await;

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

fn print_config(config: &Config) {
    println!("{}", "⚙️  Configuration".bright_blue().bold());
    println!();

    let row = |name: &str, value: String| {
        println!("  {:<26} {}", name.bright_white(), value);
    };

    row("Store backend", config.store_backend.to_string().cyan().to_string());
    if let Some(ref url) = config.database_url {
        row("Database", mask_connection_string(url));
    }
    if let Some(ref url) = config.redis_url {
        row("Redis", mask_connection_string(url));
    }
    row("Link table", config.link_table.clone());
    row("Id length", config.id_length.to_string());
    row(
        "Max allocation attempts",
        config.max_allocation_attempts.to_string(),
    );
    row(
        "Store timeouts",
        format!(
            "connect {}ms, read {}ms",
            config.store_connect_timeout_ms, config.store_read_timeout_ms
        ),
    );
    row("Listen", config.listen_addr.clone());
    row("Log", format!("{} ({})", config.log_level, config.log_format));
    row("Log responses", config.log_responses.to_string());
    println!();
}
