use crate::utils::error::{AiServiceError, Result};
use crate::utils::validation::{validate_api_key, validate_url, Validate};
use clap::Parser;
use std::net::{IpAddr, SocketAddr};

const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:3000"];

#[derive(Debug, Clone, Parser)]
#[command(name = "cargocrazee-ai")]
#[command(about = "AI route optimization service for CargoCrazee deliveries")]
pub struct AppConfig {
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub openweather_api_key: String,

    #[arg(long, env = "OPENROUTE_API_KEY", hide_env_values = true)]
    pub openroute_api_key: String,

    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value = "8000")]
    pub port: u16,

    #[arg(long, env = "CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,

    #[arg(
        long,
        env = "OPENWEATHER_URL",
        default_value = "https://api.openweathermap.org"
    )]
    pub openweather_url: String,

    #[arg(
        long,
        env = "OPENROUTE_URL",
        default_value = "https://api.openrouteservice.org"
    )]
    pub openroute_url: String,

    #[arg(long, env = "OSRM_URL", default_value = "https://router.project-osrm.org")]
    pub osrm_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl AppConfig {
    /// Configured CORS origins, falling back to the local dev origins when
    /// the list is empty or blank.
    pub fn allowed_origins(&self) -> Vec<String> {
        let configured: Vec<String> = self
            .cors_origins
            .iter()
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        if configured.is_empty() {
            DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect()
        } else {
            configured
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| AiServiceError::ConfigError {
                message: format!("Invalid host address: {}", self.host),
            })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_api_key("openweather_api_key", &self.openweather_api_key)?;
        validate_api_key("openroute_api_key", &self.openroute_api_key)?;
        validate_url("openweather_url", &self.openweather_url)?;
        validate_url("openroute_url", &self.openroute_url)?;
        validate_url("osrm_url", &self.osrm_url)?;
        for origin in self.allowed_origins() {
            validate_url("cors_origins", &origin)?;
        }
        Ok(())
    }
}
