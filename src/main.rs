//! hello-ec2: greeting service entry point.
//!
//! Parses the command line, initializes tracing, loads configuration, builds
//! the router and serves it until SIGTERM/SIGINT. Startup failures are logged
//! to standard error and end the process with a non-zero exit code.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hello_ec2::config::{AppConfig, DEFAULT_LOG_FILTER};
use hello_ec2::http::start_server;
use hello_ec2::{create_router, AppError};

/// hello-ec2: Hello World from an immutable EC2 instance
#[derive(Parser, Debug)]
#[command(name = "hello-ec2", version, about)]
struct Args {
    /// Path to configuration file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "hello_ec2=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Address to bind, overriding http.host
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overriding http.port
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Logging(msg)) => {
            eprintln!("Failed to initialize logging: {msg}");
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!(error = %e, "Fatal startup error");
            // The log filter may exclude the line above; stderr always gets it.
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    // Load configuration before tracing so the log format is known; a load
    // failure is reported once the default text subscriber is up.
    let loaded = match &args.config {
        Some(path) => AppConfig::load(path),
        None => Ok(AppConfig::default()),
    };

    let json_logs = loaded
        .as_ref()
        .map(|config| config.logging.is_json())
        .unwrap_or(false);
    init_tracing(args.log_level.clone(), json_logs)?;

    let mut config = loaded?;
    if let Some(host) = args.host {
        config.http.host = host;
    }
    if let Some(port) = args.port {
        config.http.port = port;
    }

    tracing::info!(
        config = args.config.as_deref().unwrap_or("<defaults>"),
        host = %config.http.host,
        port = config.http.port,
        log_format = %config.logging.format,
        "Loaded configuration"
    );

    let addr = config.socket_addr()?;
    let app = create_router();

    start_server(app, addr).await?;

    Ok(())
}

/// Initialize tracing with priority: CLI > env > default. Logs go to stderr.
fn init_tracing(log_level: Option<String>, json: bool) -> Result<(), AppError> {
    let log_filter = log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));

    let result = if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    result.map_err(|e| AppError::Logging(e.to_string()))
}
