//! Weather wire types and altitude normalization

use serde::{Deserialize, Serialize};

/// Standard sea-level barometric pressure in hPa.
pub const SEA_LEVEL_PRESSURE_HPA: f64 = 1013.25;

/// Meters of elevation per hPa of pressure drop near sea level.
const METERS_PER_HPA: f64 = 8.43;

/// Upper bound for the normalized altitude.
pub const MAX_ALTITUDE_M: i32 = 5000;

/// Normalized weather reading returned by the proxy.
///
/// Produced fresh per request and never persisted. `wind_speed` is km/h and
/// `altitude` meters above sea level; both are omitted from the JSON body
/// when the upstream payload had no data for them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub temperature: i32,
    pub humidity: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude: Option<i32>,
    pub weather_id: i32,
    pub timestamp: String,
}

/// Error body returned by the proxy on any non-200 response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    pub details: String,
    pub timestamp: String,
}

/// Approximate altitude from barometric pressure.
///
/// Uses the linear near-sea-level approximation of the barometric formula;
/// the result is clamped to `[0, 5000]` meters.
pub fn altitude_from_pressure(pressure_hpa: f64) -> i32 {
    let raw = ((SEA_LEVEL_PRESSURE_HPA - pressure_hpa) * METERS_PER_HPA).round() as i32;
    raw.clamp(0, MAX_ALTITUDE_M)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sea_level_pressure_is_zero_altitude() {
        assert_eq!(altitude_from_pressure(SEA_LEVEL_PRESSURE_HPA), 0);
    }

    #[test]
    fn pressure_below_sea_level_clamps_to_zero() {
        assert_eq!(altitude_from_pressure(1030.0), 0);
    }

    #[test]
    fn vacuum_clamps_to_max() {
        assert_eq!(altitude_from_pressure(0.0), MAX_ALTITUDE_M);
    }

    #[test]
    fn monterrey_pressure_lands_near_city_altitude() {
        // ~949 hPa ground pressure corresponds to roughly 540 m
        assert_eq!(altitude_from_pressure(949.2), 540);
    }

    #[test]
    fn report_serializes_with_wire_names() {
        let report = WeatherReport {
            temperature: 26,
            humidity: 50,
            wind_speed: Some(14),
            altitude: Some(540),
            weather_id: 800,
            timestamp: "2024-06-01T12:00:00Z".to_string(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["windSpeed"], 14);
        assert_eq!(json["weatherId"], 800);
        assert_eq!(json["altitude"], 540);
    }

    #[test]
    fn report_omits_missing_optionals() {
        let report = WeatherReport {
            temperature: 26,
            humidity: 50,
            wind_speed: None,
            altitude: None,
            weather_id: 800,
            timestamp: "2024-06-01T12:00:00Z".to_string(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("windSpeed").is_none());
        assert!(json.get("altitude").is_none());
    }
}
