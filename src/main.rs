//! apigw-router command line.
//!
//! # Commands
//!
//! ```text
//!     check    routes.toml               → validate the manifest, list routes
//!     resolve  routes.toml + event.json  → run one event through the resolver
//!     serve    routes.toml               → local API Gateway emulator
//! ```
//!
//! The manifest's stub handlers stand in for real Lambda handlers, so the
//! same route table can be checked, replayed against captured events, and
//! exercised over HTTP without deploying anything.

use std::error::Error;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::json;
use tokio::net::TcpListener;

use apigw_router::config::{load_config, RouterConfig};
use apigw_router::event::{extract, load_event, EventFormat};
use apigw_router::http::EmulatorServer;
use apigw_router::lifecycle::{shutdown_on_signal, Shutdown};
use apigw_router::observability::init_logging;
use apigw_router::stub::{resolver_from_config, table_from_config};

#[derive(Parser)]
#[command(name = "apigw-router")]
#[command(about = "Route API Gateway events to handlers", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a routes manifest and list its routes
    Check {
        #[arg(short, long, default_value = "routes.toml")]
        config: PathBuf,
    },
    /// Resolve a single event file against the manifest
    Resolve {
        #[arg(short, long, default_value = "routes.toml")]
        config: PathBuf,

        #[arg(short, long)]
        event: PathBuf,
    },
    /// Run the local API Gateway emulator
    Serve {
        #[arg(short, long, default_value = "routes.toml")]
        config: PathBuf,

        /// Overrides `server.bind_address`
        #[arg(short, long)]
        bind: Option<SocketAddr>,

        /// Overrides `server.event_format` (v1 or v2)
        #[arg(short, long)]
        format: Option<EventFormat>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli.command).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands) -> Result<ExitCode, Box<dyn Error>> {
    match command {
        Commands::Check { config } => check(&config),
        Commands::Resolve { config, event } => resolve(&config, &event).await,
        Commands::Serve {
            config,
            bind,
            format,
        } => serve(&config, bind, format).await,
    }
}

fn check(path: &Path) -> Result<ExitCode, Box<dyn Error>> {
    let config = load_config(path)?;
    let table = table_from_config(&config);

    println!("{}: {} routes", path.display(), table.len());
    for route in table.iter() {
        println!("  {:<24} {}", route.pattern().as_str(), route.methods().methods().join(", "));
    }
    Ok(ExitCode::SUCCESS)
}

async fn resolve(config_path: &Path, event_path: &Path) -> Result<ExitCode, Box<dyn Error>> {
    let config = load_config(config_path)?;
    init_logging(&config.logging)?;

    let event = load_event(event_path)?;
    tracing::info!(request = ?extract(&event), "Resolving event");

    let outcome = resolver_from_config(&config).resolve(event).await;
    match outcome {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let body = json!({ "status": e.status(), "message": e.to_string() });
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn serve(
    path: &Path,
    bind: Option<SocketAddr>,
    format: Option<EventFormat>,
) -> Result<ExitCode, Box<dyn Error>> {
    let mut config: RouterConfig = load_config(path)?;
    if let Some(addr) = bind {
        config.server.bind_address = addr.to_string();
    }
    if let Some(format) = format {
        config.server.event_format = format;
    }

    init_logging(&config.logging)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.server.bind_address,
        event_format = %config.server.event_format,
        routes = config.routes.len(),
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.server.bind_address).await?;

    let shutdown = Shutdown::new();
    tokio::spawn(shutdown_on_signal(shutdown.clone()));

    EmulatorServer::new(&config).run(listener, shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(ExitCode::SUCCESS)
}
