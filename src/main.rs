//! Ethereum Dashboard API server entry point.

use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use eth_dashboard::api::{create_router, ApiDoc};
use eth_dashboard::config::Config;
use eth_dashboard::metrics;
use eth_dashboard::probe::{probe, DEFAULT_TIMEOUT};
use eth_dashboard::utils::{bind_listener, shutdown_signal};

/// Ethereum Dashboard API server.
#[derive(Parser, Debug)]
#[command(name = "eth-dashboard")]
#[command(about = "API server for the Ethereum Dashboard")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port.
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Address to bind.
    #[arg(long, env = "HOST")]
    host: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the HTTP API (default).
    Serve {
        /// HTTP server port.
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Address to bind.
        #[arg(long, env = "HOST")]
        host: Option<String>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Print the OpenAPI document as JSON.
    Openapi,

    /// Probe a running instance's health endpoint.
    Probe {
        /// Base URL of the running instance.
        #[arg(short, long, default_value = "http://127.0.0.1:8000")]
        url: String,

        /// Request timeout in seconds.
        #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
        timeout: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // .env may carry RUST_LOG, so read it before the filter is built
    dotenvy::dotenv().ok();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("eth_dashboard=debug,info")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(args.log_json.then(|| fmt::layer().json()))
        .with((!args.log_json).then(|| fmt::layer()))
        .with(filter)
        .init();

    // Handle subcommands
    match args.command {
        Some(Command::Serve { port, host }) => cmd_serve(port, host).await,
        Some(Command::CheckConfig) => cmd_check_config(),
        Some(Command::Openapi) => cmd_openapi(),
        Some(Command::Probe { url, timeout }) => cmd_probe(&url, timeout).await,
        None => cmd_serve(args.port, args.host).await,
    }
}

/// Load configuration, apply CLI overrides and validate.
fn load_config(port: Option<u16>, host: Option<String>) -> anyhow::Result<Config> {
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    // Override with CLI args if provided
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(host) = host {
        config.host = host;
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    Ok(config)
}

/// Serve the HTTP API until a shutdown signal arrives.
async fn cmd_serve(port: Option<u16>, host: Option<String>) -> anyhow::Result<()> {
    info!("Loading configuration...");
    let config = load_config(port, host)?;

    let cors = config.cors_policy();
    info!("Allowed origins: {}", cors.allowed_origins.join(", "));
    info!("Allow credentials: {}", cors.allow_credentials);

    if let Some(metrics_addr) = config.metrics_addr() {
        metrics::install_exporter(metrics_addr)?;
    }

    let router = create_router(&cors)?;

    let addr = config.socket_addr().map_err(|e| anyhow::anyhow!(e))?;
    let listener = bind_listener(addr).await?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

/// Check configuration validity.
fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("ETHEREUM DASHBOARD API - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    let cors = config.cors_policy();
    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Listen Address: {}:{}", config.host, config.port);
    println!("  Allowed Origins: {}", cors.allowed_origins.join(", "));
    println!("  Allow Credentials: {}", cors.allow_credentials);
    match config.metrics_port {
        Some(port) => println!("  Metrics: port {}", port),
        None => println!("  Metrics: Disabled"),
    }
    println!("  Log Level: {}", config.rust_log);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Print the OpenAPI document.
fn cmd_openapi() -> anyhow::Result<()> {
    println!("{}", ApiDoc::to_pretty_json()?);
    Ok(())
}

/// Probe a running instance; a non-zero exit means unhealthy.
async fn cmd_probe(url: &str, timeout_secs: u64) -> anyhow::Result<()> {
    match probe(url, Duration::from_secs(timeout_secs)).await {
        Ok(response) => {
            info!("{} is {:?}", url, response.status);
            Ok(())
        }
        Err(e) => {
            error!("Health probe failed: {}", e);
            Err(e.into())
        }
    }
}
