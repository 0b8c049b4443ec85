pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use adapters::{RouteProvider, WeatherProvider};
pub use config::AppConfig;
pub use crate::core::{HubCatalog, Optimizer};
pub use utils::error::{AiServiceError, Result};
