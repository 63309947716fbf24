mod aggregator;
mod api;
mod config;
mod error;
mod models;
mod source;
mod utils;

use std::sync::Arc;

use log::{error, info};
use time::OffsetDateTime;

use config::ServiceConfig;
use source::GeneratedSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_secs()
        .init();

    // Load configuration
    let config = match ServiceConfig::new() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };

    // Build the stand-in dataset once at startup; the API only ever reads it
    let source = Arc::new(GeneratedSource::new(
        OffsetDateTime::now_utc(),
        config.history_days,
        config.sample_interval_mins,
    ));
    info!(
        "Generated {} readings covering the past {} days at {}-minute intervals",
        source.len(),
        config.history_days,
        config.sample_interval_mins
    );

    let app = api::router(source);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);
    info!("Endpoints:");
    info!("  - GET /indicators?startDate=..&endDate=..&step=..");
    info!("  - GET /indicators/GetAllTemperatureData");
    info!("  - GET /indicators/GetAllHumidityData");
    info!("  - GET /indicators/GetData?param=..");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for Ctrl+C");
    info!("Shutdown requested, exiting gracefully");
}
