//! Route definitions for the weather proxy

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new().route(
        "/weather",
        get(handlers::get_weather).options(handlers::weather_options),
    )
}
