use clap::Parser;
use ship_info::utils::{logger, validation::Validate};
use ship_info::{server, ServiceConfig, UpstreamAggregator};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServiceConfig::parse();

    logger::init_logger(config.verbose);

    tracing::info!("Starting ship-info service");
    if config.verbose {
        tracing::debug!("Service config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!("Captain's log upstream: {}", config.log_endpoint);
    tracing::info!("Crew upstream: {}", config.crew_endpoint);

    let aggregator = Arc::new(UpstreamAggregator::new(config.clone()));

    server::serve(aggregator, &config).await?;

    Ok(())
}
