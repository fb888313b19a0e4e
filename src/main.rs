//! Sentiment Analyzer - Main Entry Point
//!
//! Serves per-sentence and overall sentiment analysis over HTTP.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sentiment_analyzer::api::{create_router, AppState};
use sentiment_analyzer::types::{LogFormat, ServiceConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = ServiceConfig::from_env();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "sentiment_analyzer=info,tower_http=debug".into()),
    );
    match config.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }

    info!("Starting Sentiment Analyzer v{}", env!("CARGO_PKG_VERSION"));

    let addr = config.bind_address();
    let state = Arc::new(AppState::new(config));
    info!(
        tokenizer = state.pipeline.tokenizer_name(),
        tokenizer_description = state.pipeline.tokenizer_description(),
        model = state.pipeline.model_name(),
        "Pipeline ready"
    );

    let app = create_router(state);

    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr.as_str()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
