//! Paperdesk API Server
//!
//! HTTP frontend for the Paperdesk tool workspace. Provides REST API
//! endpoints for:
//!
//! - Tool catalog listing
//! - File processing (merge, scan, conversions, AI extraction)
//! - Document chat
//!
//! ## Architecture
//!
//! Each request runs an ephemeral workspace: files go in, one artifact
//! comes out. The server adds:
//!
//! - Rate limiting via tower-governor
//! - CORS for the browser frontend
//! - The AI extraction adapter, shared across requests

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use paperdesk_ai::{AiConfig, DocumentAi};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;

use api::{handle_chat, handle_health, handle_list_tools, handle_process};

/// Command-line arguments for the Paperdesk server
#[derive(Parser, Debug)]
#[command(name = "paperdesk-server")]
#[command(about = "Paperdesk API server for PDF tool processing")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Rate limit: requests per second per IP
    #[arg(long, default_value = "10")]
    rate_limit: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// AI extraction adapter; one HTTP client for all requests
    pub ai: Arc<DocumentAi>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Paperdesk server on {}:{}", args.host, args.port);

    // Create rate limiter configuration
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(args.rate_limit.into())
            .burst_size(args.rate_limit * 2)
            .finish()
            .expect("Failed to create rate limiter config"),
    );

    // Create shared state
    let ai_config = AiConfig::from_env();
    let ai = DocumentAi::new(ai_config).map_err(|e| anyhow::anyhow!(e.to_string()))?;
    if !ai.is_configured() {
        warn!("PAPERDESK_AI_KEY not set; AI-backed tools will report a configuration error");
    }
    let state = AppState { ai: Arc::new(ai) };

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(handle_health))
        // API endpoints
        .route("/api/tools", get(handle_list_tools))
        .route("/api/process", post(handle_process))
        .route("/api/chat", post(handle_chat))
        // Apply middleware
        .layer(GovernorLayer {
            config: governor_conf,
        })
        .layer(cors)
        .with_state(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Rate limit: {} requests/second per IP", args.rate_limit);

    axum::serve(listener, app).await?;

    Ok(())
}
