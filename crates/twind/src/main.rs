//! twind - Car Twin State Daemon
//!
//! REST API for recording and aggregating car simulation state snapshots.
//!
//! Usage:
//!   twind [OPTIONS] [config.toml]
//!
//! Options:
//!   -p, --port <port>  Listen port (overrides the config file)
//!
//! If no config file is provided, the server listens on the default port with
//! an empty in-memory store.

use std::net::SocketAddr;

use twin_api::{create_router, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Port used when neither the config file nor the CLI provides one
const DEFAULT_PORT: u16 = 3000;

/// Parsed command-line arguments
struct Args {
    /// Server config file (TOML)
    config_path: Option<String>,
    /// Listen port override
    port: Option<u16>,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut result = Args {
        config_path: None,
        port: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--port" | "-p" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse() {
                        Ok(port) => result.port = Some(port),
                        Err(_) => tracing::error!("Invalid port: {}", args[i + 1]),
                    }
                    i += 2;
                } else {
                    tracing::error!("Missing argument for --port");
                    i += 1;
                }
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                // Positional argument = config file
                result.config_path = Some(arg.to_string());
                i += 1;
            }
            _ => {
                tracing::warn!("Unknown argument: {}", args[i]);
                i += 1;
            }
        }
    }

    result
}

fn print_help() {
    eprintln!(
        r#"twind - Car Twin State Daemon

Usage: twind [OPTIONS] [config.toml]

Options:
  -p, --port <port>  Listen port (overrides the config file)
  -h, --help         Print this help message

Examples:
  # Run on the default port
  twind

  # Run with config file
  twind config.toml

  # Run on an explicit port
  twind --port 8080
"#
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "twind=info,twin_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting twind (Car Twin State Daemon)");

    // Parse command-line arguments
    let args = parse_args();

    // Resolve the listen port: CLI flag beats config file beats default
    let config_port = match args.config_path {
        Some(ref path) => {
            tracing::info!("Loading config from: {}", path);
            Some(load_config_port(path)?)
        }
        None => None,
    };
    let port = args.port.or(config_port).unwrap_or(DEFAULT_PORT);

    // Create the app state and router
    let state = AppState::new();
    let app = create_router(state);

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on http://{}", addr);

    // Run the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Read the listen port from a TOML config file's `[server]` section
fn load_config_port(path: &str) -> anyhow::Result<u16> {
    let content = std::fs::read_to_string(path)?;
    let config: toml::Value = toml::from_str(&content)?;

    let port = config
        .get("server")
        .and_then(|s| s.get("port"))
        .and_then(|p| p.as_integer())
        .unwrap_or(DEFAULT_PORT as i64) as u16;

    Ok(port)
}
