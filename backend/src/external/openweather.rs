//! OpenWeatherMap API client
//!
//! Wraps the current-weather endpoints (by coordinates and by city) and the
//! direct geocoding endpoint. Only the fields the proxy consumes are
//! deserialized.

use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use shared::types::GpsCoordinates;

const FALLBACK_ERROR_MESSAGE: &str = "Error desconocido al obtener datos climáticos";

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    geo_url: String,
}

/// Current conditions payload (subset of the provider response)
#[derive(Debug, Deserialize)]
pub struct OwmCurrentResponse {
    pub main: OwmMain,
    pub wind: Option<OwmWind>,
    #[serde(default)]
    pub weather: Vec<OwmCondition>,
}

#[derive(Debug, Deserialize)]
pub struct OwmMain {
    pub temp: f64,
    pub humidity: i32,
    /// Ground-level barometric pressure, hPa; absent on the legacy endpoint
    pub grnd_level: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct OwmWind {
    /// Wind speed in m/s (metric units)
    pub speed: f64,
}

#[derive(Debug, Deserialize)]
pub struct OwmCondition {
    pub id: i32,
}

#[derive(Debug, Deserialize)]
struct OwmErrorBody {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeEntry {
    lat: f64,
    lon: f64,
}

impl WeatherClient {
    /// Create a new WeatherClient for the given endpoint base URLs
    pub fn new(base_url: String, geo_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            geo_url,
        }
    }

    /// Fetch current conditions by GPS coordinates
    pub async fn current_by_coords(
        &self,
        api_key: &str,
        coords: GpsCoordinates,
    ) -> AppResult<OwmCurrentResponse> {
        let url = format!(
            "{}/weather?lat={}&lon={}&appid={}&units=metric&lang=es",
            self.base_url, coords.latitude, coords.longitude, api_key
        );
        self.fetch_current(&url).await
    }

    /// Fetch current conditions via the legacy city endpoint
    pub async fn current_by_city(
        &self,
        api_key: &str,
        city_query: &str,
    ) -> AppResult<OwmCurrentResponse> {
        let url = format!(
            "{}/weather?q={}&appid={}&units=metric&lang=es",
            self.base_url, city_query, api_key
        );
        self.fetch_current(&url).await
    }

    /// Resolve a "City,CC" query to coordinates.
    ///
    /// Geocoding failure is recoverable (the caller falls back to the city
    /// endpoint), so transport, status and parse errors all report
    /// "no result".
    pub async fn geocode_city(&self, api_key: &str, city_query: &str) -> Option<GpsCoordinates> {
        let url = format!(
            "{}/direct?q={}&limit=1&appid={}",
            self.geo_url, city_query, api_key
        );

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Geocoding request failed for {}: {}", city_query, e);
                return None;
            }
        };
        if !response.status().is_success() {
            tracing::warn!(
                "Geocoding returned status {} for {}",
                response.status(),
                city_query
            );
            return None;
        }

        let entries: Vec<GeocodeEntry> = match response.json().await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Geocoding response unparsable for {}: {}", city_query, e);
                return None;
            }
        };
        entries
            .first()
            .map(|entry| GpsCoordinates::new(entry.lat, entry.lon))
    }

    async fn fetch_current(&self, url: &str) -> AppResult<OwmCurrentResponse> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED {
                return Err(AppError::UpstreamAuth);
            }
            let details = Self::extract_error_message(response).await;
            tracing::error!(status = %status, details = %details, "Weather API error");
            return Err(AppError::Upstream {
                status: status.as_u16(),
                details,
            });
        }

        Ok(response.json().await?)
    }

    /// Best-effort message extraction: JSON `message` field, then raw body
    /// text, then a fixed fallback.
    async fn extract_error_message(response: reqwest::Response) -> String {
        let Ok(text) = response.text().await else {
            return FALLBACK_ERROR_MESSAGE.to_string();
        };
        if let Ok(body) = serde_json::from_str::<OwmErrorBody>(&text) {
            if let Some(message) = body.message {
                return message;
            }
        }
        if text.trim().is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            text
        }
    }
}
