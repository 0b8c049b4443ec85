use crate::domain::model::{IndustrialHub, RouteSummary, TrafficLevel, WeatherSnapshot};

const BASE_RISK: u32 = 20;
const MAX_RISK: u32 = 100;

/// Additive 0-100 delivery risk over weather, travel time, and hub
/// traffic. Each trigger contributes independently; the sum is capped.
pub fn risk_score(
    weather: &WeatherSnapshot,
    route: &RouteSummary,
    origin_hub: Option<&IndustrialHub>,
    dest_hub: Option<&IndustrialHub>,
) -> u32 {
    let mut risk = BASE_RISK;

    if weather.precipitation_chance > 50.0 {
        risk += 25;
    }
    if weather.visibility < 5.0 {
        risk += 20;
    }
    if weather.wind_speed > 20.0 {
        risk += 15;
    }
    if weather.temperature > 35.0 {
        risk += 10;
    }

    if route.estimated_time_minutes > 180.0 {
        risk += 15;
    }

    if origin_hub.is_some_and(|hub| hub.traffic_level == TrafficLevel::High) {
        risk += 10;
    }
    if dest_hub.is_some_and(|hub| hub.traffic_level == TrafficLevel::High) {
        risk += 10;
    }

    risk.min(MAX_RISK)
}
