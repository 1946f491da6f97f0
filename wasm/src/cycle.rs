//! The render cycle: locate, fetch, derive, write
//!
//! A 30-minute timer and the refresh button both launch the same cycle.
//! Overlapping cycles are allowed; DOM writes are idempotent and
//! last-write-wins per field.

use shared::render::{self, AdviceView, RenderContext};
use shared::types::Location;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::location;
use crate::net;
use crate::view::DomView;

const REFRESH_INTERVAL_MS: i32 = 30 * 60 * 1000;

const LOCATION_PLACEHOLDER: &str = "Ubicación desconocida";

/// Run the initial cycle and wire up the periodic refresh and the manual
/// refresh button.
pub fn start() -> Result<(), JsValue> {
    run_cycle();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let tick = Closure::<dyn FnMut()>::new(run_cycle);
    window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        REFRESH_INTERVAL_MS,
    )?;
    tick.forget();

    if let Some(document) = window.document() {
        if let Some(button) = document.get_element_by_id("mm-refresh-button") {
            let on_click = Closure::<dyn FnMut()>::new(run_cycle);
            button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
            on_click.forget();
        }
    }

    Ok(())
}

fn run_cycle() {
    spawn_local(async {
        if let Err(error) = render_once().await {
            web_sys::console::error_2(
                &JsValue::from_str("Error al obtener datos climáticos:"),
                &error,
            );
        }
    });
}

async fn render_once() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let mut view = DomView::new(document);

    view.set_current_date(&current_date_label());
    render::render_loading(&mut view);

    let context = RenderContext::new(location::resolve(&window).await);

    match context.location.label() {
        Some(label) => view.set_location_label(&label),
        None => {
            view.set_location_label(LOCATION_PLACEHOLDER);
            // detached so a slow geocoder never delays the weather fetch
            spawn_label_update(context.location.clone());
        }
    }

    match net::fetch_weather(&window, crate::WEATHER_API_URL, context.location.coordinates).await {
        Ok(report) => {
            render::render_report(&mut view, &context, &report);
            view.set_last_updated(&last_updated_label());
            Ok(())
        }
        Err(error) => {
            let message = error.as_string().unwrap_or_default();
            render::render_error(&mut view, &message);
            Err(error)
        }
    }
}

fn spawn_label_update(location: Location) {
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some((city, state)) = location::reverse_geocode(&window, location.coordinates).await
        else {
            return;
        };

        let mut labelled = location;
        labelled.city = Some(city);
        labelled.state = state;

        if let (Some(document), Some(label)) = (window.document(), labelled.label()) {
            let mut view = DomView::new(document);
            view.set_location_label(&label);
        }
    });
}

/// Today's date in Spanish with the first letter capitalized, e.g.
/// "29 de agosto de 2025".
fn current_date_label() -> String {
    let options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&options, &"year".into(), &"numeric".into());
    let _ = js_sys::Reflect::set(&options, &"month".into(), &"long".into());
    let _ = js_sys::Reflect::set(&options, &"day".into(), &"numeric".into());
    let date = js_sys::Date::new_0().to_locale_date_string("es-MX", &options);
    capitalize_first(&String::from(date))
}

fn last_updated_label() -> String {
    let time = js_sys::Date::new_0().to_locale_time_string("es-MX");
    format!("Última actualización: {}", String::from(time))
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_only_the_first_letter() {
        assert_eq!(capitalize_first("viernes, 29 de agosto"), "Viernes, 29 de agosto");
        assert_eq!(capitalize_first("ágosto"), "Ágosto");
        assert_eq!(capitalize_first(""), "");
    }
}
