use std::sync::Arc;
use std::time::Instant;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod currencies;
mod models;
mod routes;
mod services;
mod utils;

use api::exchangerates::ExchangeRatesClient;
use config::Config;
use routes::AppState;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fx_charts=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("📈 Starting FX Charts v{}...", env!("CARGO_PKG_VERSION"));

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return;
        }
    };

    let client = match ExchangeRatesClient::new(&config) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create exchange-rate client: {}", e);
            return;
        }
    };
    info!("Exchange rates from {} (timeout {}s)", config.api_url, config.api_timeout.as_secs());
    if config.api_key.is_none() {
        info!("No FX_API_KEY set, requesting rates without an access key");
    }

    let addr = config.listen_addr();
    let state = Arc::new(AppState {
        config,
        client,
        started_at: Instant::now(),
    });
    let app = routes::router(state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            return;
        }
    };

    info!("FX Charts running at http://{}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}
