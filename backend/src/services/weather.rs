//! Weather service: resolves a location, queries the provider and normalizes
//! the payload into the proxy's wire shape

use chrono::{SecondsFormat, Utc};

use crate::config::WeatherConfig;
use crate::error::AppResult;
use crate::external::openweather::{OwmCurrentResponse, WeatherClient};
use shared::models::weather::{altitude_from_pressure, WeatherReport};
use shared::types::GpsCoordinates;

/// Stateless per-request weather service
pub struct WeatherService<'a> {
    client: &'a WeatherClient,
    config: &'a WeatherConfig,
}

impl<'a> WeatherService<'a> {
    /// Create a new WeatherService instance
    pub fn new(client: &'a WeatherClient, config: &'a WeatherConfig) -> Self {
        Self { client, config }
    }

    /// Produce a normalized report for the given coordinates, or for the
    /// configured default city when none are supplied.
    pub async fn fetch_report(
        &self,
        coords: Option<GpsCoordinates>,
    ) -> AppResult<WeatherReport> {
        let api_key = self.config.validated_key()?;

        let current = match coords {
            Some(coords) => self.client.current_by_coords(api_key, coords).await?,
            None => {
                let query = self.config.city_query();
                match self.client.geocode_city(api_key, &query).await {
                    Some(resolved) => self.client.current_by_coords(api_key, resolved).await?,
                    None => {
                        tracing::warn!(
                            "Geocoding found nothing for {}; using legacy city endpoint",
                            query
                        );
                        self.client.current_by_city(api_key, &query).await?
                    }
                }
            }
        };

        Ok(self.normalize(current))
    }

    fn normalize(&self, current: OwmCurrentResponse) -> WeatherReport {
        let altitude = current
            .main
            .grnd_level
            .map(altitude_from_pressure)
            .unwrap_or(self.config.default_altitude_m);

        WeatherReport {
            temperature: current.main.temp.round() as i32,
            humidity: current.main.humidity,
            // provider reports m/s; the wire shape is km/h
            wind_speed: current.wind.map(|w| (w.speed * 3.6).round() as i32),
            altitude: Some(altitude),
            weather_id: current
                .weather
                .first()
                .map(|condition| condition.id)
                .unwrap_or_default(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
