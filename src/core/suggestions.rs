use crate::domain::model::{IndustrialHub, RouteSummary, TrafficLevel, WeatherSnapshot};

const GENERAL_ADVISORIES: [&str; 3] = [
    "Use real-time traffic updates for dynamic routing",
    "Consider micro-warehouses for last-mile delivery",
    "Monitor air quality for delivery personnel safety",
];

/// Advisory list in fixed rule order: route length, precipitation, heat,
/// visibility, origin hub, destination hub, then the general advisories.
/// Append-only; callers may truncate to a prefix for a summary view.
pub fn suggestions_for(
    weather: &WeatherSnapshot,
    route: &RouteSummary,
    origin_hub: Option<&IndustrialHub>,
    dest_hub: Option<&IndustrialHub>,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if route.estimated_time_minutes > 120.0 {
        suggestions.push("Consider breaking journey into segments".to_string());
        suggestions.push("Plan for fuel stops along the way".to_string());
    }

    if weather.precipitation_chance > 50.0 {
        suggestions.push("Pack waterproof covers for cargo".to_string());
        suggestions.push("Allow extra time for loading/unloading".to_string());
    }

    if weather.temperature > 35.0 {
        suggestions.push("Ensure proper ventilation for perishable goods".to_string());
        suggestions.push("Monitor temperature-sensitive cargo".to_string());
    }

    if weather.visibility < 5.0 {
        suggestions.push("Use fog lights and drive carefully".to_string());
        suggestions.push("Consider delaying delivery if possible".to_string());
    }

    if let Some(hub) = origin_hub {
        if hub.traffic_level == TrafficLevel::High {
            suggestions.push(format!(
                "High traffic expected at {} during peak hours",
                hub.name
            ));
        }
        suggestions.push(format!(
            "Industrial hub type: {} - ensure appropriate packaging",
            hub.category
        ));
    }

    if let Some(hub) = dest_hub {
        if hub.traffic_level == TrafficLevel::High {
            suggestions.push(format!(
                "Plan arrival at {} outside peak hours: {:?}",
                hub.name, hub.peak_hours
            ));
        }
    }

    suggestions.extend(GENERAL_ADVISORIES.iter().map(|s| s.to_string()));
    suggestions
}
