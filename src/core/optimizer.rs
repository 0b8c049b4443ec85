use crate::adapters::routing::{round1, round2, RouteProvider};
use crate::adapters::weather::WeatherProvider;
use crate::core::hubs::HubCatalog;
use crate::core::{impact, risk, suggestions};
use crate::domain::model::{
    AiInsights, Coordinate, HubContext, HubInfo, LocationWeather, Optimization,
    OptimizationResponse, OptimizedRoute, RouteRequest, WeatherContext, WeatherSnapshot,
};
use crate::domain::ports::WeatherSource;
use std::sync::Arc;

const TOP_RECOMMENDATIONS: usize = 3;

/// Orchestrates weather, routing, and hub context into one response.
/// Every acquisition carries its own fallback tier, so assembly never
/// fails and a response is always fully populated.
pub struct Optimizer<W: WeatherSource> {
    weather: WeatherProvider<W>,
    routes: RouteProvider,
    catalog: Arc<HubCatalog>,
}

impl<W: WeatherSource> Optimizer<W> {
    pub fn new(weather: WeatherProvider<W>, routes: RouteProvider, catalog: Arc<HubCatalog>) -> Self {
        Self {
            weather,
            routes,
            catalog,
        }
    }

    pub fn catalog(&self) -> &HubCatalog {
        &self.catalog
    }

    pub async fn current_weather(&self, point: Coordinate) -> WeatherSnapshot {
        self.weather.fetch(point).await
    }

    pub async fn optimize(&self, request: &RouteRequest) -> OptimizationResponse {
        let departure = request.departure_time.as_deref();

        // The three acquisitions have no ordering dependency.
        let (weather_origin, weather_destination, route) = tokio::join!(
            self.weather.fetch(request.origin),
            self.weather.fetch(request.destination),
            self.routes.fetch(request.origin, request.destination, departure),
        );

        let origin_hub = self.catalog.nearest(request.origin);
        let dest_hub = self.catalog.nearest(request.destination);

        // Origin weather represents pickup-time conditions and drives the
        // impact, suggestion, and risk baselines.
        let weather_impact = impact::weather_impact(&weather_origin);
        let ai_suggestions =
            suggestions::suggestions_for(&weather_origin, &route, Some(origin_hub), Some(dest_hub));
        let risk_score =
            risk::risk_score(&weather_origin, &route, Some(origin_hub), Some(dest_hub));
        let recommendations_count = ai_suggestions.len();
        let recommendations: Vec<String> = ai_suggestions
            .iter()
            .take(TOP_RECOMMENDATIONS)
            .cloned()
            .collect();

        OptimizationResponse {
            status: "success".to_string(),
            optimization: Optimization {
                optimized_route: OptimizedRoute {
                    distance_km: round2(route.distance_km),
                    estimated_time_minutes: round1(route.estimated_time_minutes),
                    weather_impact,
                    recommendations,
                },
                ai_suggestions,
                risk_score,
                confidence: route.source.confidence(),
            },
            weather_context: WeatherContext {
                pickup_location: LocationWeather {
                    coordinates: request.origin,
                    weather: weather_origin,
                },
                delivery_location: LocationWeather {
                    coordinates: request.destination,
                    weather: weather_destination.clone(),
                },
                forecast: weather_destination,
                impact_analysis: "Weather conditions analyzed for optimal routing".to_string(),
            },
            industrial_hubs: HubContext {
                origin_hub: Some(HubInfo::from(origin_hub)),
                destination_hub: Some(HubInfo::from(dest_hub)),
            },
            ai_insights: AiInsights {
                route_efficiency: "Optimized for current weather and traffic conditions"
                    .to_string(),
                risk_assessment: format!("Risk score: {}/100", risk_score),
                recommendations_count,
                data_source: "OpenWeather + OpenRoute APIs".to_string(),
            },
        }
    }
}
