//! Masa Madre Weather Advisor - Weather Proxy
//!
//! A stateless HTTP proxy that resolves a location, queries OpenWeatherMap
//! and returns a normalized weather reading for the sourdough advisor
//! renderer.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather: external::openweather::WeatherClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let weather = external::openweather::WeatherClient::new(
            config.weather.api_endpoint.clone(),
            config.weather.geo_endpoint.clone(),
        );
        Self {
            config: Arc::new(config),
            weather,
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // Permissive CORS on every response; preflights short-circuit here
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Masa Madre Weather Advisor API v1.0"
}
