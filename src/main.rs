use anyhow::Context;
use clap::Parser;
use std::sync::Arc;

use cargocrazee_ai::adapters::weather::OpenWeatherApi;
use cargocrazee_ai::server;
use cargocrazee_ai::utils::{logger, validation::Validate};
use cargocrazee_ai::{AppConfig, HubCatalog, Optimizer, RouteProvider, WeatherProvider};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::parse();
    logger::init_server_logger(config.verbose);

    tracing::info!("Starting CargoCrazee AI service");

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let catalog = Arc::new(HubCatalog::bundled().context("Failed to load hub catalog")?);
    tracing::info!("Loaded {} industrial hubs", catalog.len());

    let weather = WeatherProvider::new(OpenWeatherApi::new(
        &config.openweather_url,
        &config.openweather_api_key,
    ));
    let routes = RouteProvider::new(
        &config.openroute_url,
        &config.openroute_api_key,
        &config.osrm_url,
    );
    let optimizer = Arc::new(Optimizer::new(weather, routes, catalog));

    let address = config.bind_addr().context("Invalid bind address")?;
    server::run(address, optimizer, config.allowed_origins()).await;

    Ok(())
}
