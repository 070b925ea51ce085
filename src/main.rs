//! Recipe CRUD service entry point.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use recipe_crud::api::{create_router, AppState};
use recipe_crud::config::{Config, Frontend, LogFormat};
use recipe_crud::metrics;
use recipe_crud::recipes::{MemStore, RecipeStore};
use recipe_crud::utils::shutdown_signal;
use recipe_crud::AppError;

/// In-memory recipe CRUD service.
#[derive(Parser, Debug)]
#[command(name = "recipe-crud")]
#[command(about = "Serve CRUD operations over an in-memory recipe store")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,

    /// HTTP front end: routed, nested or dispatch (overrides FRONTEND).
    #[arg(short, long)]
    frontend: Option<Frontend>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the recipe API (default).
    Serve {
        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,

        /// HTTP front end: routed, nested or dispatch (overrides FRONTEND).
        #[arg(short, long)]
        frontend: Option<Frontend>,
    },

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::load().map_err(AppError::from)?;
    if args.verbose {
        config.verbose = true;
    }

    init_logging(&config);

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::Serve { port, frontend }) => cmd_serve(config, port, frontend).await,
        None => cmd_serve(config, args.port, args.frontend).await,
    }
}

fn init_logging(config: &Config) {
    let filter = if config.verbose {
        EnvFilter::new("recipe_crud=debug,info")
    } else {
        EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    match config.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init(),
    }
}

/// Check configuration validity.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("RECIPE CRUD - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Bind Address: {}:{}", config.host, config.port);
    println!("  Front End: {}", config.frontend);
    println!("  Log Format: {}", config.log_format);
    println!("  Metrics: {}", if config.metrics_enabled { "Enabled" } else { "Disabled" });
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(
    mut config: Config,
    port_override: Option<u16>,
    frontend_override: Option<Frontend>,
) -> anyhow::Result<()> {
    if let Some(port) = port_override {
        config.port = port;
    }
    if let Some(frontend) = frontend_override {
        config.frontend = frontend;
    }

    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        AppError::InvalidConfig(e)
    })?;

    let store: Arc<dyn RecipeStore> = Arc::new(MemStore::new());
    let mut state = AppState::new(store);

    if config.metrics_enabled {
        match metrics::install_recorder() {
            Ok(handle) => state = state.with_metrics(handle),
            Err(e) => warn!("Metrics disabled: {}", e),
        }
    }

    let addr = config.bind_addr().map_err(AppError::InvalidConfig)?;
    let listener = TcpListener::bind(addr).await.map_err(AppError::from)?;
    info!("HTTP server listening on {}", addr);
    info!("Front end: {}", config.frontend);

    let router = create_router(state, config.frontend);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::from)?;

    info!("Server stopped");
    Ok(())
}
