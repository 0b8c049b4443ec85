use crate::domain::model::{Coordinate, RouteSummary, WeatherSnapshot};
use crate::utils::error::Result;
use async_trait::async_trait;

/// A live source of current conditions for a coordinate. Failures are
/// absorbed by the provider wrapping the source, never by callers.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn conditions(&self, point: Coordinate) -> Result<WeatherSnapshot>;
}

/// One tier in the route fallback chain. Tiers are tried in order; a
/// returned error hands over to the next tier.
#[async_trait]
pub trait RouteStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        departure_time: Option<&str>,
    ) -> Result<RouteSummary>;
}
