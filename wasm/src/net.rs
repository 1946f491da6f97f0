//! Browser fetch plumbing for the proxy and the geocoder

use shared::models::weather::WeatherReport;
use shared::types::GpsCoordinates;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response, Window};

/// GET a URL and return the response body. Non-2xx statuses are errors with
/// the same message the page shows on failure.
pub async fn fetch_text(window: &Window, url: &str) -> Result<String, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Accept", "application/json")?;
    request.headers().set("Cache-Control", "no-cache")?;

    let response = JsFuture::from(window.fetch_with_request(&request)).await?;
    let response: Response = response.dyn_into()?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!(
            "Error HTTP: {}",
            response.status()
        )));
    }

    let text = JsFuture::from(response.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("respuesta no textual"))
}

/// Fetch a normalized weather report from the proxy for the given coordinates.
pub async fn fetch_weather(
    window: &Window,
    api_url: &str,
    coords: GpsCoordinates,
) -> Result<WeatherReport, JsValue> {
    // timestamp defeats intermediary caches
    let url = format!(
        "{}?lat={}&lon={}&t={}",
        api_url,
        coords.latitude,
        coords.longitude,
        js_sys::Date::now()
    );
    let body = fetch_text(window, &url).await?;
    serde_json::from_str(&body)
        .map_err(|e| JsValue::from_str(&format!("respuesta inválida del proxy: {}", e)))
}
