use crate::domain::model::{Coordinate, RouteSource, RouteSummary};
use crate::domain::ports::RouteStrategy;
use crate::utils::error::{AiServiceError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

const DIRECTIONS_TIMEOUT: Duration = Duration::from_secs(15);
const OSRM_TIMEOUT: Duration = Duration::from_secs(10);

// One degree of latitude or longitude taken as the equatorial meridian
// constant. All served routes sit within one metro region.
pub const KM_PER_DEGREE: f64 = 111.0;
pub const MINUTES_PER_KM: f64 = 2.5;

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    #[serde(default)]
    features: Vec<DirectionsFeature>,
}

#[derive(Debug, Deserialize)]
struct DirectionsFeature {
    properties: DirectionsProperties,
    geometry: Value,
}

#[derive(Debug, Deserialize)]
struct DirectionsProperties {
    segments: Vec<DirectionsSegment>,
}

#[derive(Debug, Deserialize)]
struct DirectionsSegment {
    distance: f64,
    duration: f64,
    #[serde(default)]
    steps: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct OsrmResponse {
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    #[serde(default)]
    distance: f64,
    #[serde(default)]
    duration: f64,
}

/// Tier 1: OpenRoute driving directions, API-key authenticated.
pub struct OpenRouteDirections {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenRouteDirections {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DIRECTIONS_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl RouteStrategy for OpenRouteDirections {
    fn name(&self) -> &'static str {
        "openroute"
    }

    async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        departure_time: Option<&str>,
    ) -> Result<RouteSummary> {
        let url = format!("{}/v2/directions/driving-car", self.base_url);

        let mut body = json!({
            "coordinates": [
                [origin.lon, origin.lat],
                [destination.lon, destination.lat]
            ],
            "instructions": true,
            "geometry": true,
            "preference": "fastest",
            "units": "km",
        });
        if let Some(departure) = departure_time {
            body["departure"] = json!(departure);
        }

        let directions: DirectionsResponse = self
            .client
            .post(&url)
            .header("Authorization", &self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let feature = directions
            .features
            .into_iter()
            .next()
            .ok_or_else(|| AiServiceError::provider("openroute", "no route found"))?;
        let segment = feature
            .properties
            .segments
            .into_iter()
            .next()
            .ok_or_else(|| AiServiceError::provider("openroute", "route has no segments"))?;

        Ok(RouteSummary {
            distance_km: segment.distance / 1000.0,
            estimated_time_minutes: segment.duration / 60.0,
            steps: segment.steps,
            geometry: Some(feature.geometry),
            source: RouteSource::OpenRoute,
        })
    }
}

/// Tier 2: unauthenticated public OSRM instance.
pub struct OsrmFallback {
    client: reqwest::Client,
    base_url: String,
}

impl OsrmFallback {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(OSRM_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RouteStrategy for OsrmFallback {
    fn name(&self) -> &'static str {
        "osrm"
    }

    async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        _departure_time: Option<&str>,
    ) -> Result<RouteSummary> {
        let url = format!(
            "{}/route/v1/driving/{},{};{},{}",
            self.base_url, origin.lon, origin.lat, destination.lon, destination.lat
        );

        let osrm: OsrmResponse = self
            .client
            .get(&url)
            .query(&[
                ("overview", "false"),
                ("alternatives", "false"),
                ("steps", "false"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let route = osrm
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| AiServiceError::provider("osrm", "no route found"))?;

        Ok(RouteSummary {
            distance_km: round2(route.distance / 1000.0),
            estimated_time_minutes: round1(route.duration / 60.0),
            steps: Vec::new(),
            geometry: None,
            source: RouteSource::Osrm,
        })
    }
}

/// Terminal tier: planar estimate from raw coordinate deltas. Always
/// succeeds, so the fallback chain is guaranteed to terminate.
pub fn planar_route(origin: Coordinate, destination: Coordinate) -> RouteSummary {
    let distance =
        ((origin.lat - destination.lat).abs() + (origin.lon - destination.lon).abs()) * KM_PER_DEGREE;

    RouteSummary {
        distance_km: round2(distance),
        estimated_time_minutes: round1(distance * MINUTES_PER_KM),
        steps: Vec::new(),
        geometry: None,
        source: RouteSource::Planar,
    }
}

/// Ordered fallback chain over route strategies. Tiers are tried strictly
/// in order; the first success short-circuits the rest.
pub struct RouteProvider {
    strategies: Vec<Box<dyn RouteStrategy>>,
}

impl RouteProvider {
    pub fn new(
        openroute_url: impl Into<String>,
        openroute_api_key: impl Into<String>,
        osrm_url: impl Into<String>,
    ) -> Self {
        Self::with_strategies(vec![
            Box::new(OpenRouteDirections::new(openroute_url, openroute_api_key)),
            Box::new(OsrmFallback::new(osrm_url)),
        ])
    }

    pub fn with_strategies(strategies: Vec<Box<dyn RouteStrategy>>) -> Self {
        Self { strategies }
    }

    pub async fn fetch(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        departure_time: Option<&str>,
    ) -> RouteSummary {
        for strategy in &self.strategies {
            match strategy.route(origin, destination, departure_time).await {
                Ok(summary) => {
                    tracing::debug!("Route resolved via {}", strategy.name());
                    return summary;
                }
                Err(err) => {
                    tracing::warn!("Route tier {} failed: {}", strategy.name(), err);
                }
            }
        }
        planar_route(origin, destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn directions_body() -> serde_json::Value {
        json!({
            "features": [{
                "properties": {
                    "segments": [{
                        "distance": 18432.0,
                        "duration": 1680.0,
                        "steps": [{"instruction": "Head north"}]
                    }]
                },
                "geometry": {"type": "LineString", "coordinates": [[77.27, 28.53], [77.10, 28.85]]}
            }]
        })
    }

    fn osrm_body() -> serde_json::Value {
        json!({"routes": [{"distance": 21987.0, "duration": 1530.0}]})
    }

    fn provider_for(openroute: &MockServer, osrm: &MockServer) -> RouteProvider {
        RouteProvider::new(openroute.base_url(), "test-key", osrm.base_url())
    }

    #[tokio::test]
    async fn test_primary_success_short_circuits_fallbacks() {
        let openroute = MockServer::start();
        let osrm = MockServer::start();
        let directions_mock = openroute.mock(|when, then| {
            when.method(POST)
                .path("/v2/directions/driving-car")
                .header("Authorization", "test-key");
            then.status(200).json_body(directions_body());
        });
        let osrm_mock = osrm.mock(|when, then| {
            when.method(GET).path_contains("/route/v1/driving");
            then.status(200).json_body(osrm_body());
        });

        let provider = provider_for(&openroute, &osrm);
        let summary = provider
            .fetch(
                Coordinate::new(28.53, 77.27),
                Coordinate::new(28.85, 77.10),
                None,
            )
            .await;

        directions_mock.assert();
        osrm_mock.assert_hits(0);
        assert_eq!(summary.source, RouteSource::OpenRoute);
        assert_eq!(summary.distance_km, 18.432);
        assert_eq!(summary.estimated_time_minutes, 28.0);
        assert_eq!(summary.steps.len(), 1);
        assert!(summary.geometry.is_some());
    }

    #[tokio::test]
    async fn test_primary_failure_falls_through_to_osrm() {
        let openroute = MockServer::start();
        let osrm = MockServer::start();
        openroute.mock(|when, then| {
            when.method(POST).path("/v2/directions/driving-car");
            then.status(500);
        });
        let osrm_mock = osrm.mock(|when, then| {
            when.method(GET)
                .path("/route/v1/driving/77.27,28.53;77.1,28.85")
                .query_param("overview", "false");
            then.status(200).json_body(osrm_body());
        });

        let provider = provider_for(&openroute, &osrm);
        let summary = provider
            .fetch(
                Coordinate::new(28.53, 77.27),
                Coordinate::new(28.85, 77.10),
                None,
            )
            .await;

        osrm_mock.assert();
        assert_eq!(summary.source, RouteSource::Osrm);
        assert_eq!(summary.distance_km, 21.99); // rounded to 2 decimals
        assert_eq!(summary.estimated_time_minutes, 25.5); // rounded to 1
        assert!(summary.steps.is_empty());
        assert!(summary.geometry.is_none());
    }

    #[tokio::test]
    async fn test_empty_feature_set_counts_as_tier_failure() {
        let openroute = MockServer::start();
        let osrm = MockServer::start();
        openroute.mock(|when, then| {
            when.method(POST).path("/v2/directions/driving-car");
            then.status(200).json_body(json!({"features": []}));
        });
        let osrm_mock = osrm.mock(|when, then| {
            when.method(GET).path_contains("/route/v1/driving");
            then.status(200).json_body(osrm_body());
        });

        let provider = provider_for(&openroute, &osrm);
        let summary = provider
            .fetch(
                Coordinate::new(28.53, 77.27),
                Coordinate::new(28.85, 77.10),
                None,
            )
            .await;

        osrm_mock.assert();
        assert_eq!(summary.source, RouteSource::Osrm);
    }

    #[tokio::test]
    async fn test_all_tiers_down_uses_planar_estimate() {
        let openroute = MockServer::start();
        let osrm = MockServer::start();
        openroute.mock(|when, then| {
            when.method(POST).path("/v2/directions/driving-car");
            then.status(502);
        });
        osrm.mock(|when, then| {
            when.method(GET).path_contains("/route/v1/driving");
            then.status(502);
        });

        let provider = provider_for(&openroute, &osrm);
        let summary = provider
            .fetch(
                Coordinate::new(28.53, 77.27),
                Coordinate::new(28.85, 77.10),
                None,
            )
            .await;

        // (|28.53-28.85| + |77.27-77.10|) * 111 = 54.39
        assert_eq!(summary.source, RouteSource::Planar);
        assert_eq!(summary.distance_km, 54.39);
        assert_eq!(summary.estimated_time_minutes, 136.0);
    }

    #[tokio::test]
    async fn test_departure_time_is_forwarded_to_primary() {
        let openroute = MockServer::start();
        let osrm = MockServer::start();
        let directions_mock = openroute.mock(|when, then| {
            when.method(POST)
                .path("/v2/directions/driving-car")
                .body_contains("2025-11-02T09:30:00");
            then.status(200).json_body(directions_body());
        });

        let provider = provider_for(&openroute, &osrm);
        let summary = provider
            .fetch(
                Coordinate::new(28.53, 77.27),
                Coordinate::new(28.85, 77.10),
                Some("2025-11-02T09:30:00"),
            )
            .await;

        directions_mock.assert();
        assert_eq!(summary.source, RouteSource::OpenRoute);
    }

    struct FailingStrategy;

    #[async_trait]
    impl RouteStrategy for FailingStrategy {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn route(
            &self,
            _origin: Coordinate,
            _destination: Coordinate,
            _departure_time: Option<&str>,
        ) -> Result<RouteSummary> {
            Err(AiServiceError::provider("failing", "unavailable"))
        }
    }

    struct StaticStrategy(f64);

    #[async_trait]
    impl RouteStrategy for StaticStrategy {
        fn name(&self) -> &'static str {
            "static"
        }

        async fn route(
            &self,
            _origin: Coordinate,
            _destination: Coordinate,
            _departure_time: Option<&str>,
        ) -> Result<RouteSummary> {
            Ok(RouteSummary {
                distance_km: self.0,
                estimated_time_minutes: self.0,
                steps: Vec::new(),
                geometry: None,
                source: RouteSource::Osrm,
            })
        }
    }

    #[tokio::test]
    async fn test_strategy_order_is_respected() {
        let provider = RouteProvider::with_strategies(vec![
            Box::new(FailingStrategy),
            Box::new(StaticStrategy(7.0)),
            Box::new(StaticStrategy(99.0)),
        ]);

        let summary = provider
            .fetch(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0), None)
            .await;
        assert_eq!(summary.distance_km, 7.0);
    }

    #[test]
    fn test_planar_route_handles_degenerate_pairs() {
        let same = planar_route(Coordinate::new(28.6, 77.2), Coordinate::new(28.6, 77.2));
        assert_eq!(same.distance_km, 0.0);
        assert_eq!(same.estimated_time_minutes, 0.0);

        let wild = planar_route(Coordinate::new(200.0, -400.0), Coordinate::new(0.0, 0.0));
        assert!(wild.distance_km > 0.0);
        assert_eq!(wild.source, RouteSource::Planar);
    }
}
