//! Weather dashboard entry point.

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use weather_board::api::create_router;
use weather_board::config::Config;
use weather_board::lifecycle::ServiceManager;
use weather_board::metrics;
use weather_board::registry::CityRegistry;
use weather_board::state::AppState;
use weather_board::utils::shutdown_signal;

/// Weather dashboard for a fixed set of monitored cities.
#[derive(Parser, Debug)]
#[command(name = "weather-board")]
#[command(about = "Single-page weather dashboard backed by the OpenWeather API")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// HTTP server port (overrides PORT from the environment).
    #[arg(short, long)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check configuration validity without starting the server.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("weather_board=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    metrics::init_metrics();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(),
        None => cmd_serve(args.port).await,
    }
}

/// Check configuration validity.
fn cmd_check_config() -> anyhow::Result<()> {
    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {e}");
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {e}");
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("Configuration Summary:");
    println!("  Upstream URL: {}", config.openweather_api_url);
    println!("  Upstream timeout: {}ms", config.upstream_timeout_ms);
    println!("  Display timezone: {}", config.display_timezone);
    println!("  Port: {}", config.port);
    println!(
        "  Monitored cities: {}",
        CityRegistry::global().monitored().join(", ")
    );

    Ok(())
}

/// Run the HTTP server.
async fn cmd_serve(port_override: Option<u16>) -> anyhow::Result<()> {
    info!("Loading configuration...");
    let config = Config::load()?;
    config.validate()?;

    let display_tz = config.display_tz()?;
    let port = port_override.unwrap_or(config.port);

    // Create app state and start services; a startup failure here is
    // fatal to the process.
    let state = AppState::new(CityRegistry::global(), display_tz);
    let mut manager = ServiceManager::new(state.clone());
    manager.start(&config).await?;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {addr}");

    let router = create_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    manager.stop().await;

    Ok(())
}
