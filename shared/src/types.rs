//! Common types used by the proxy and the renderer

use serde::{Deserialize, Serialize};

/// GPS coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A resolved location for one render cycle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub coordinates: GpsCoordinates,
    pub city: Option<String>,
    pub state: Option<String>,
}

impl Location {
    pub fn new(coordinates: GpsCoordinates) -> Self {
        Self {
            coordinates,
            city: None,
            state: None,
        }
    }

    /// Human-readable "City, State" label, or just the city when no state is
    /// known. `None` when nothing has been resolved yet.
    pub fn label(&self) -> Option<String> {
        match (&self.city, &self.state) {
            (Some(city), Some(state)) if state != city => {
                Some(format!("{}, {}", city, state))
            }
            (Some(city), _) => Some(city.clone()),
            _ => None,
        }
    }
}

/// Fallback location when geolocation is unavailable, denied, or timed out.
pub fn default_location() -> Location {
    Location {
        coordinates: GpsCoordinates::new(25.6866, -100.3161),
        city: Some("Monterrey".to_string()),
        state: Some("N.L.".to_string()),
    }
}
