//! WebAssembly module for the Masa Madre Weather Advisor
//!
//! Runs the recommendation renderer in the browser:
//! - Location acquisition (geolocation with fallback, reverse geocoding)
//! - Weather fetch from the proxy
//! - Fermentation classification and recipe adjustments
//! - DOM rendering with a periodic refresh

use wasm_bindgen::prelude::*;

mod cycle;
mod location;
mod net;
mod view;

// Re-export shared types for use in JavaScript
pub use shared::advice::*;
pub use shared::render::*;
pub use shared::types::*;

/// Weather proxy endpoint, served from the same origin as the page.
const WEATHER_API_URL: &str = "/api/weather";

/// Initialize the WASM module and start the render loop.
#[wasm_bindgen(start)]
pub fn init() -> Result<(), JsValue> {
    cycle::start()
}

/// Difficulty label for a temperature reading.
#[wasm_bindgen]
pub fn classify_temperature(temperature_c: f64) -> String {
    shared::advice::classify(temperature_c).level.to_string()
}

/// Whether a temperature sits in the optimal fermentation window.
#[wasm_bindgen]
pub fn is_optimal_temperature(temperature_c: f64) -> bool {
    shared::advice::is_optimal(temperature_c)
}

/// Combined band-scaling factor for a humidity reading and an optional
/// altitude.
#[wasm_bindgen]
pub fn band_scaling_factor(humidity_pct: f64, altitude_m: Option<f64>) -> f64 {
    shared::advice::combined_factor(humidity_pct, altitude_m)
}

/// Full recommendation for a reading, serialized as JSON.
#[wasm_bindgen]
pub fn derive_recommendations(
    temperature_c: f64,
    humidity_pct: f64,
    altitude_m: Option<f64>,
) -> Result<String, JsValue> {
    let advice = shared::advice::recommend(temperature_c, humidity_pct, altitude_m);
    serde_json::to_string(&advice).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert a ground-level pressure reading (hPa) to meters above sea level.
#[wasm_bindgen]
pub fn altitude_from_pressure_hpa(pressure_hpa: f64) -> i32 {
    shared::models::weather::altitude_from_pressure(pressure_hpa)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_temperature() {
        assert_eq!(classify_temperature(15.0), "ALTO");
        assert_eq!(classify_temperature(22.0), "MEDIO-BAJO");
        assert_eq!(classify_temperature(26.0), "BAJO");
        assert_eq!(classify_temperature(30.0), "MEDIO-ALTO");
        assert_eq!(classify_temperature(35.0), "ALTO");
    }

    #[test]
    fn test_optimal_window() {
        assert!(!is_optimal_temperature(23.9));
        assert!(is_optimal_temperature(24.0));
        assert!(is_optimal_temperature(27.9));
        assert!(!is_optimal_temperature(28.0));
    }

    #[test]
    fn test_band_scaling_factor() {
        assert!((band_scaling_factor(50.0, Some(540.0)) - 0.82).abs() < 1e-9);
        assert!((band_scaling_factor(50.0, None) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_derive_recommendations_json() {
        let json = derive_recommendations(26.0, 50.0, Some(540.0)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["starter_percent"]["low"], 16);
        assert_eq!(value["starter_percent"]["high"], 20);
    }

    #[test]
    fn test_altitude_from_pressure() {
        assert_eq!(altitude_from_pressure_hpa(1013.25), 0);
        assert_eq!(altitude_from_pressure_hpa(949.2), 540);
    }
}
