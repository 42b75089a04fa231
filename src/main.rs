//! CarRental WebUI - server-rendered car rental booking application
//!
//! Lists available cars, accepts booking submissions that mark a car
//! unavailable, and serves an admin view of all bookings.

use std::env;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};

use carrental_webui::config::{LogFormat, LogTarget};
use carrental_webui::{db, web, AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_help();
        return Ok(());
    }

    if args.iter().any(|arg| arg == "--version" || arg == "-V") {
        println!("CarRental WebUI {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration first (before logging, so we know log format)
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize logging based on configuration
    // The guard must be kept alive for the duration of the program
    // to ensure log messages are flushed to files
    let _log_guard = init_logging(&config);

    info!("CarRental WebUI starting up");

    // Initialize database connection pool and run migrations
    info!("Initializing database connection");
    let pool = db::init_pool(&config.database)
        .await
        .context("Failed to initialize database")?;

    // Seed the car catalog on first run
    db::seed::seed_cars(&pool)
        .await
        .context("Failed to seed car catalog")?;

    // Create application state
    let state = AppState {
        config: config.clone(),
        db: pool,
    };

    // Build the router
    let app = create_router(state);

    // Start the server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address configuration")?;

    info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("HTTP server is ready to accept connections");

    axum::serve(listener, app).await.context("HTTP server error")?;

    Ok(())
}

/// Build the application router with middleware
fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Initialize the logging/tracing infrastructure
fn init_logging(config: &AppConfig) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match &config.logging.target {
        LogTarget::Console => {
            // Console-only logging (development mode)
            let subscriber = tracing_subscriber::registry().with(env_filter);
            match config.logging.format {
                LogFormat::Json => subscriber.with(fmt::layer().json().with_target(true)).init(),
                LogFormat::Compact => subscriber
                    .with(fmt::layer().compact().with_target(false))
                    .init(),
                LogFormat::Pretty => subscriber.with(fmt::layer().with_target(true)).init(),
            }
            None
        }
        LogTarget::File => {
            // File-only logging (production mode)
            let (writer, guard) = create_file_writer(config);
            let subscriber = tracing_subscriber::registry().with(env_filter);
            match config.logging.format {
                LogFormat::Json => subscriber
                    .with(fmt::layer().json().with_target(true).with_writer(writer))
                    .init(),
                LogFormat::Compact => subscriber
                    .with(
                        fmt::layer()
                            .compact()
                            .with_target(false)
                            .with_writer(writer),
                    )
                    .init(),
                LogFormat::Pretty => subscriber
                    .with(fmt::layer().with_target(true).with_writer(writer))
                    .init(),
            }
            Some(guard)
        }
        LogTarget::Both => {
            // Both console and file logging
            let (writer, guard) = create_file_writer(config);
            let subscriber = tracing_subscriber::registry().with(env_filter);
            match config.logging.format {
                LogFormat::Json => subscriber
                    .with(fmt::layer().json().with_target(true))
                    .with(fmt::layer().json().with_target(true).with_writer(writer))
                    .init(),
                LogFormat::Compact => subscriber
                    .with(fmt::layer().compact().with_target(false))
                    .with(
                        fmt::layer()
                            .compact()
                            .with_target(false)
                            .with_writer(writer),
                    )
                    .init(),
                LogFormat::Pretty => subscriber
                    .with(fmt::layer().with_target(true))
                    .with(fmt::layer().with_target(true).with_writer(writer))
                    .init(),
            }
            Some(guard)
        }
    }
}

/// Create a file writer with optional daily rotation
fn create_file_writer(
    config: &AppConfig,
) -> (
    tracing_appender::non_blocking::NonBlocking,
    tracing_appender::non_blocking::WorkerGuard,
) {
    let log_config = &config.logging;

    // Ensure log directory exists
    if let Err(e) = std::fs::create_dir_all(&log_config.log_dir) {
        eprintln!(
            "Warning: Failed to create log directory {:?}: {}",
            log_config.log_dir, e
        );
    }

    let file_appender = if log_config.daily_rotation {
        tracing_appender::rolling::daily(&log_config.log_dir, &log_config.log_prefix)
    } else {
        tracing_appender::rolling::never(&log_config.log_dir, &log_config.log_prefix)
    };

    tracing_appender::non_blocking(file_appender)
}

fn print_help() {
    println!("CarRental WebUI {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("USAGE:");
    println!("    carrental-webui [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Print this help message");
    println!("    -V, --version    Print the version");
    println!();
    println!("CONFIGURATION:");
    println!("    Reads config.yaml from the current directory,");
    println!("    /etc/carrental-webui/, or the user config directory.");
    println!("    Set CARRENTAL_CONFIG to point at a specific file.");
    println!();
    println!("ENVIRONMENT:");
    println!("    CARRENTAL_HOST          Bind address (default 127.0.0.1)");
    println!("    CARRENTAL_PORT          Bind port (default 5080)");
    println!("    DATABASE_URL            SQLite database URL");
    println!("    RUST_LOG                Log filter (default from config)");
    println!("    CARRENTAL_LOG_FORMAT    pretty | compact | json");
}
