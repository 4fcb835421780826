//! hello-api entry point.
//!
//! Parses arguments, loads configuration, initializes tracing, builds the
//! router and serves it until a shutdown signal arrives.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hello_api::config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER};
use hello_api::create_router;
use hello_api::http::start_server;

/// hello-api: a greeting and a health probe over HTTP
#[derive(Parser, Debug)]
#[command(name = "hello-api", version, about)]
struct Args {
    /// Path to a TOML configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "hello_api=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

fn init_tracing(log_filter: &str, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(log_filter));
    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Logging format lives in the config, so load it first
    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => {
            let config = AppConfig::default();
            config.validate()?;
            config
        }
    };

    // Filter priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, config.logging.format);

    tracing::info!(path = ?args.config, "Loaded configuration");
    tracing::info!(
        origins = ?config.cors.allow_origins,
        credentials = config.cors.allow_credentials,
        methods = ?config.cors.allow_methods,
        headers = ?config.cors.allow_headers,
        "CORS policy configured"
    );

    let app = create_router(&config)?;
    start_server(app, &config).await?;

    Ok(())
}
