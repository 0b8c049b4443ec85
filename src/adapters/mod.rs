// Adapters layer: concrete clients for the external weather and routing
// systems, each absorbing its own upstream failures.

pub mod routing;
pub mod weather;

pub use routing::{OpenRouteDirections, OsrmFallback, RouteProvider};
pub use weather::{fallback_conditions, OpenWeatherApi, WeatherProvider};
