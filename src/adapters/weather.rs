use crate::domain::model::{Coordinate, WeatherSnapshot};
use crate::domain::ports::WeatherSource;
use crate::utils::error::{AiServiceError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
// 24 hours ahead in a 3-hour-interval forecast series.
const DAY_AHEAD_INDEX: usize = 8;
const DEFAULT_VISIBILITY_METERS: f64 = 10_000.0;

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    main: MainBlock,
    weather: Vec<ConditionBlock>,
    wind: WindBlock,
    visibility: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    humidity: u32,
    pressure: u32,
    feels_like: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct Forecast {
    list: Vec<ForecastEntry>,
}

#[derive(Debug, Deserialize)]
struct ForecastEntry {
    #[serde(default)]
    pop: f64,
}

pub struct OpenWeatherApi {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherApi {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn location_query(&self, point: Coordinate) -> [(String, String); 4] {
        [
            ("lat".to_string(), point.lat.to_string()),
            ("lon".to_string(), point.lon.to_string()),
            ("appid".to_string(), self.api_key.clone()),
            ("units".to_string(), "metric".to_string()),
        ]
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherApi {
    async fn conditions(&self, point: Coordinate) -> Result<WeatherSnapshot> {
        let current_url = format!("{}/data/2.5/weather", self.base_url);
        let current: CurrentConditions = self
            .client
            .get(&current_url)
            .query(&self.location_query(point))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let condition = current
            .weather
            .first()
            .ok_or_else(|| AiServiceError::provider("openweather", "empty conditions array"))?;

        let mut snapshot = WeatherSnapshot {
            temperature: current.main.temp,
            condition: condition.main.clone(),
            description: condition.description.clone(),
            humidity: current.main.humidity,
            wind_speed: current.wind.speed,
            visibility: current.visibility.unwrap_or(DEFAULT_VISIBILITY_METERS) / 1000.0,
            pressure: current.main.pressure,
            feels_like: current.main.feels_like,
            precipitation_chance: 0.0,
        };

        // A non-2xx forecast keeps the zero precipitation default; a
        // malformed or truncated body fails the whole call instead.
        let forecast_url = format!("{}/data/2.5/forecast", self.base_url);
        let forecast_response = self
            .client
            .get(&forecast_url)
            .query(&self.location_query(point))
            .send()
            .await?;

        if forecast_response.status().is_success() {
            let forecast: Forecast = forecast_response.json().await?;
            let day_ahead = forecast.list.get(DAY_AHEAD_INDEX).ok_or_else(|| {
                AiServiceError::provider("openweather", "forecast series too short")
            })?;
            snapshot.precipitation_chance = day_ahead.pop * 100.0;
        }

        Ok(snapshot)
    }
}

/// Wraps a live source so that callers always get a usable snapshot:
/// any upstream failure is absorbed into the static fallback.
pub struct WeatherProvider<S: WeatherSource> {
    source: S,
    fallback: WeatherSnapshot,
}

impl<S: WeatherSource> WeatherProvider<S> {
    pub fn new(source: S) -> Self {
        Self::with_fallback(source, fallback_conditions())
    }

    pub fn with_fallback(source: S, fallback: WeatherSnapshot) -> Self {
        Self { source, fallback }
    }

    pub async fn fetch(&self, point: Coordinate) -> WeatherSnapshot {
        match self.source.conditions(point).await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!("Weather API error, serving fallback: {}", err);
                self.fallback.clone()
            }
        }
    }
}

/// Snapshot served whenever the live weather call fails.
pub fn fallback_conditions() -> WeatherSnapshot {
    WeatherSnapshot {
        temperature: 32.5,
        condition: "Partly Cloudy".to_string(),
        description: "partly cloudy".to_string(),
        humidity: 65,
        wind_speed: 12.5,
        visibility: 8.2,
        pressure: 1013,
        feels_like: 34.2,
        precipitation_chance: 20.0,
    }
}
