//! HTTP handler for the weather proxy endpoint

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::error::AppResult;
use crate::services::weather::WeatherService;
use crate::AppState;
use shared::models::weather::WeatherReport;
use shared::types::GpsCoordinates;

/// Query parameters for the weather endpoint.
///
/// Latitude and longitude only take effect when both are present; the
/// cache-busting `t` parameter sent by the renderer is ignored.
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Fetch and normalize current weather
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> AppResult<Json<WeatherReport>> {
    let coords = match (query.lat, query.lon) {
        (Some(lat), Some(lon)) => Some(GpsCoordinates::new(lat, lon)),
        _ => None,
    };

    let service = WeatherService::new(&state.weather, &state.config.weather);
    let report = service.fetch_report(coords).await?;
    Ok(Json(report))
}

/// Non-preflight OPTIONS requests short-circuit with an empty 200; the CORS
/// layer answers actual preflights before they reach the router.
pub async fn weather_options() -> StatusCode {
    StatusCode::OK
}
