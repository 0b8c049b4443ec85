use crate::core::optimizer::Optimizer;
use crate::domain::model::{Coordinate, IndustrialHub, RouteRequest};
use crate::domain::ports::WeatherSource;
use chrono::{Duration, Utc};
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
const DELHI_CENTER: Coordinate = Coordinate {
    lat: 28.6139,
    lon: 77.2090,
};

pub async fn run<W>(address: SocketAddr, optimizer: Arc<Optimizer<W>>, cors_origins: Vec<String>)
where
    W: WeatherSource + Send + Sync + 'static,
{
    tracing::info!("Listening on {}", address);
    warp::serve(api(optimizer, cors_origins)).run(address).await
}

pub fn api<W>(
    optimizer: Arc<Optimizer<W>>,
    cors_origins: Vec<String>,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone
where
    W: WeatherSource + Send + Sync + 'static,
{
    let cors = warp::cors()
        .allow_origins(cors_origins.iter().map(String::as_str))
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type", "authorization"])
        .allow_credentials(true);

    let root = warp::path::end().and(warp::get()).map(|| {
        warp::reply::json(&json!({
            "message": "CargoCrazee AI Service is running!",
            "version": SERVICE_VERSION,
        }))
    });

    let health = warp::path!("health").and(warp::get()).map(|| {
        warp::reply::json(&json!({
            "status": "healthy",
            "service": "CargoCrazee AI",
            "timestamp": Utc::now().to_rfc3339(),
            "features": [
                "Real-time Route Optimization",
                "Live Weather Analysis",
                "Industrial Hub Intelligence",
                "Risk Assessment",
                "AI Suggestions"
            ],
            "apis": {
                "weather": "OpenWeather API",
                "routing": "OpenRoute API"
            },
        }))
    });

    let hubs = warp::path!("industrial-hubs")
        .and(warp::get())
        .and(with_optimizer(optimizer.clone()))
        .map(|optimizer: Arc<Optimizer<W>>| {
            let catalog = optimizer.catalog();
            let hubs: BTreeMap<&str, &IndustrialHub> = catalog
                .hubs()
                .iter()
                .map(|hub| (hub.name.as_str(), hub))
                .collect();
            warp::reply::json(&json!({
                "status": "success",
                "hubs": hubs,
                "count": catalog.len(),
            }))
        });

    let delhi_weather = warp::path!("weather" / "delhi")
        .and(warp::get())
        .and(with_optimizer(optimizer.clone()))
        .and_then(delhi_weather_handler);

    let optimize = warp::path!("route" / "optimize")
        .and(warp::post())
        .and(warp::body::json())
        .and(with_optimizer(optimizer))
        .and_then(optimize_handler);

    root.or(health)
        .or(hubs)
        .or(delhi_weather)
        .or(optimize)
        .recover(rejection)
        .with(cors)
}

fn with_optimizer<W>(
    optimizer: Arc<Optimizer<W>>,
) -> impl Filter<Extract = (Arc<Optimizer<W>>,), Error = Infallible> + Clone
where
    W: WeatherSource + Send + Sync + 'static,
{
    warp::any().map(move || optimizer.clone())
}

async fn optimize_handler<W>(
    request: RouteRequest,
    optimizer: Arc<Optimizer<W>>,
) -> Result<impl Reply, Infallible>
where
    W: WeatherSource + Send + Sync,
{
    let response = optimizer.optimize(&request).await;
    Ok(warp::reply::json(&response))
}

async fn delhi_weather_handler<W>(
    optimizer: Arc<Optimizer<W>>,
) -> Result<impl Reply, Infallible>
where
    W: WeatherSource + Send + Sync,
{
    let weather = optimizer.current_weather(DELHI_CENTER).await;
    let tomorrow = (Utc::now() + Duration::days(1)).format("%Y-%m-%d").to_string();

    Ok(warp::reply::json(&json!({
        "location": "Delhi, India",
        "date": tomorrow,
        "weather": weather,
        "forecast_source": "OpenWeather API",
        "last_updated": Utc::now().to_rfc3339(),
    })))
}

#[derive(Serialize)]
struct ErrorMessage {
    code: u16,
    message: String,
}

async fn rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (code, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found.")
    } else if err
        .find::<warp::filters::body::BodyDeserializeError>()
        .is_some()
    {
        (StatusCode::BAD_REQUEST, "Invalid request body.")
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed.")
    } else {
        tracing::error!("Unhandled rejection: {:?}", err);
        (StatusCode::INTERNAL_SERVER_ERROR, "AI optimization failed")
    };

    let json = warp::reply::json(&ErrorMessage {
        code: code.as_u16(),
        message: message.into(),
    });

    Ok(warp::reply::with_status(json, code))
}
