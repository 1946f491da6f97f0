//! Location acquisition
//!
//! Browser geolocation with a bounded wait, then an optional reverse geocode
//! via Nominatim for the on-page label. Every failure mode (unsupported,
//! denied, timed out, geocoder down) degrades silently.

use js_sys::{Promise, Reflect};
use serde::Deserialize;
use shared::types::{default_location, GpsCoordinates, Location};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{PositionOptions, Window};

use crate::net;

const GEOLOCATION_TIMEOUT_MS: u32 = 5_000;
const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/reverse";

/// Resolve the location for one render cycle. Any geolocation failure
/// collapses to the default location.
pub async fn resolve(window: &Window) -> Location {
    match browser_position(window).await {
        Some(coords) => Location::new(coords),
        None => default_location(),
    }
}

async fn browser_position(window: &Window) -> Option<GpsCoordinates> {
    let geolocation = window.navigator().geolocation().ok()?;

    let promise = Promise::new(&mut |resolve, reject| {
        let options = PositionOptions::new();
        options.set_timeout(GEOLOCATION_TIMEOUT_MS);
        options.set_maximum_age(0);

        let fail = reject.clone();
        let on_success = Closure::once_into_js(move |position: JsValue| {
            let _ = resolve.call1(&JsValue::NULL, &position);
        });
        let on_error = Closure::once_into_js(move |error: JsValue| {
            let _ = reject.call1(&JsValue::NULL, &error);
        });

        if geolocation
            .get_current_position_with_error_callback_and_options(
                on_success.unchecked_ref(),
                Some(on_error.unchecked_ref()),
                &options,
            )
            .is_err()
        {
            let _ = fail.call0(&JsValue::NULL);
        }
    });

    let position = JsFuture::from(promise).await.ok()?;
    let coords = Reflect::get(&position, &JsValue::from_str("coords")).ok()?;
    let latitude = Reflect::get(&coords, &JsValue::from_str("latitude"))
        .ok()?
        .as_f64()?;
    let longitude = Reflect::get(&coords, &JsValue::from_str("longitude"))
        .ok()?
        .as_f64()?;
    Some(GpsCoordinates::new(latitude, longitude))
}

#[derive(Debug, Deserialize)]
struct NominatimResponse {
    address: Option<NominatimAddress>,
}

#[derive(Debug, Deserialize)]
struct NominatimAddress {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    municipality: Option<String>,
    state: Option<String>,
}

/// Reverse geocode coordinates into city and state names. `None` on any
/// failure; the caller keeps its placeholder label.
pub async fn reverse_geocode(
    window: &Window,
    coords: GpsCoordinates,
) -> Option<(String, Option<String>)> {
    let url = format!(
        "{}?lat={}&lon={}&format=json&addressdetails=1&zoom=10",
        NOMINATIM_URL, coords.latitude, coords.longitude
    );
    let body = net::fetch_text(window, &url).await.ok()?;
    let response: NominatimResponse = serde_json::from_str(&body).ok()?;
    let address = response.address?;

    let state = address.state.clone();
    // city > town > village > municipality, the usual Nominatim ladder
    let city = address
        .city
        .or(address.town)
        .or(address.village)
        .or(address.municipality)?;
    Some((city, state))
}
