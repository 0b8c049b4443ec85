use crate::domain::model::{Severity, WeatherImpact, WeatherSnapshot};

/// Converts a weather reading into a qualitative delay estimate. Rules
/// are evaluated independently and additively; severity only escalates,
/// and precipitation is checked before visibility so a high stays high.
pub fn weather_impact(weather: &WeatherSnapshot) -> WeatherImpact {
    let mut severity = Severity::Low;
    let mut factors = Vec::new();
    let mut estimated_delay_minutes = 0;

    if weather.precipitation_chance > 50.0 {
        severity = Severity::High;
        factors.push("Rain expected".to_string());
        estimated_delay_minutes += 30;
    }

    if weather.visibility < 5.0 {
        severity = severity.max(Severity::Medium);
        factors.push("Low visibility".to_string());
        estimated_delay_minutes += 15;
    }

    if weather.wind_speed > 20.0 {
        factors.push("High winds".to_string());
        estimated_delay_minutes += 10;
    }

    if weather.temperature > 35.0 {
        factors.push("High temperature".to_string());
        estimated_delay_minutes += 5;
    }

    WeatherImpact {
        severity,
        factors,
        estimated_delay_minutes,
    }
}
