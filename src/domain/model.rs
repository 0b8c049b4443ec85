use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrafficLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustrialHub {
    pub name: String,
    pub coordinates: Coordinate,
    #[serde(rename = "type")]
    pub category: String,
    pub traffic_level: TrafficLevel,
    pub peak_hours: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature: f64,
    pub condition: String,
    pub description: String,
    pub humidity: u32,
    pub wind_speed: f64,
    pub visibility: f64,
    pub pressure: u32,
    pub feels_like: f64,
    pub precipitation_chance: f64,
}

/// Which fallback tier produced a route. Confidence is derived from the
/// tier itself, never inferred from a missing geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteSource {
    OpenRoute,
    Osrm,
    Planar,
}

impl RouteSource {
    pub fn confidence(&self) -> f64 {
        match self {
            RouteSource::OpenRoute => 0.92,
            RouteSource::Osrm | RouteSource::Planar => 0.75,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RouteSummary {
    pub distance_km: f64,
    pub estimated_time_minutes: f64,
    pub steps: Vec<Value>,
    pub geometry: Option<Value>,
    pub source: RouteSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherImpact {
    pub severity: Severity,
    pub factors: Vec<String>,
    #[serde(rename = "estimated_delay")]
    pub estimated_delay_minutes: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteRequest {
    pub origin: Coordinate,
    pub destination: Coordinate,
    #[serde(default)]
    pub departure_time: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptimizedRoute {
    pub distance_km: f64,
    pub estimated_time_minutes: f64,
    pub weather_impact: WeatherImpact,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Optimization {
    pub optimized_route: OptimizedRoute,
    pub ai_suggestions: Vec<String>,
    pub risk_score: u32,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationWeather {
    pub coordinates: Coordinate,
    pub weather: WeatherSnapshot,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeatherContext {
    pub pickup_location: LocationWeather,
    pub delivery_location: LocationWeather,
    pub forecast: WeatherSnapshot,
    pub impact_analysis: String,
}

/// Hub summary embedded in an optimization response; the catalog dump
/// keeps coordinates, this view does not.
#[derive(Debug, Clone, Serialize)]
pub struct HubInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub category: String,
    pub traffic_level: TrafficLevel,
    pub peak_hours: Vec<String>,
}

impl From<&IndustrialHub> for HubInfo {
    fn from(hub: &IndustrialHub) -> Self {
        Self {
            name: hub.name.clone(),
            category: hub.category.clone(),
            traffic_level: hub.traffic_level,
            peak_hours: hub.peak_hours.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HubContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_hub: Option<HubInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_hub: Option<HubInfo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AiInsights {
    pub route_efficiency: String,
    pub risk_assessment: String,
    pub recommendations_count: usize,
    pub data_source: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptimizationResponse {
    pub status: String,
    pub optimization: Optimization,
    pub weather_context: WeatherContext,
    pub industrial_hubs: HubContext,
    pub ai_insights: AiInsights,
}
