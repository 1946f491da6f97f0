//! Rendering pipeline: view abstraction and pure render functions
//!
//! The surface (DOM, test recorder) implements [`AdviceView`]; every setter
//! has a no-op default so a surface only wires the elements it actually has.
//! Classification and recommendation derivation stay unit-testable without
//! any rendering surface.

use crate::advice;
use crate::models::weather::WeatherReport;
use crate::types::Location;

/// Thermometer scale minimum, °C.
pub const THERMOMETER_MIN_C: f64 = 0.0;

/// Thermometer scale maximum, °C.
pub const THERMOMETER_MAX_C: f64 = 42.0;

/// Per-cycle state passed through the pipeline.
///
/// Replaces module-level globals so overlapping timer/manual cycles cannot
/// observe each other's partially updated state.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub location: Location,
    pub thermometer_min_c: f64,
    pub thermometer_max_c: f64,
}

impl RenderContext {
    pub fn new(location: Location) -> Self {
        Self {
            location,
            thermometer_min_c: THERMOMETER_MIN_C,
            thermometer_max_c: THERMOMETER_MAX_C,
        }
    }

    /// Indicator position on the thermometer as a percentage, clamped to
    /// `[0, 100]`.
    pub fn thermometer_position(&self, temperature_c: f64) -> f64 {
        let span = self.thermometer_max_c - self.thermometer_min_c;
        let position = (temperature_c - self.thermometer_min_c) / span * 100.0;
        position.clamp(0.0, 100.0)
    }
}

/// Optional setters exposed by a rendering surface.
///
/// Defaults are no-ops; a missing element on the page is simply skipped.
pub trait AdviceView {
    fn set_temperature(&mut self, _text: &str) {}
    fn set_humidity(&mut self, _text: &str) {}
    fn set_altitude(&mut self, _text: &str) {}
    fn set_weather_icon(&mut self, _class: &str) {}
    fn set_location_label(&mut self, _text: &str) {}
    fn set_current_date(&mut self, _text: &str) {}
    fn set_last_updated(&mut self, _text: &str) {}
    fn set_thermometer(&mut self, _position_pct: f64, _value_label: &str) {}
    fn set_optimal_zone_offset(&mut self, _left: &str) {}
    fn set_level(&mut self, _label: &str, _style_class: &str) {}
    fn set_level_description(&mut self, _text: &str) {}
    fn set_starter(&mut self, _value: &str, _description: &str) {}
    fn set_water(&mut self, _value: &str, _description: &str) {}
    fn set_bulk_ferment(&mut self, _value: &str, _description: &str) {}
    fn set_refrigeration(&mut self, _value: &str, _description: &str) {}
    fn set_pro_tip(&mut self, _text: &str) {}
}

/// Font Awesome class for an OpenWeatherMap condition id.
pub fn icon_class(weather_id: i32) -> &'static str {
    match weather_id {
        200..=299 => "fa-bolt",
        300..=399 => "fa-cloud-rain",
        500..=599 => "fa-cloud-showers-heavy",
        600..=699 => "fa-snowflake",
        700..=799 => "fa-smog",
        800 => "fa-sun",
        801..=899 => "fa-cloud",
        _ => "fa-cloud",
    }
}

/// Offset for the optimal-zone legend so the temperature indicator does not
/// cover it near the edges of the window.
pub fn optimal_zone_offset(temperature_c: f64) -> &'static str {
    // inclusive at 28, unlike the half-open difficulty window: the label
    // still collides with the indicator at the upper edge
    if !(advice::OPTIMAL_MIN_C..=advice::OPTIMAL_MAX_C).contains(&temperature_c) {
        return "50%";
    }
    let position_in_zone =
        (temperature_c - advice::OPTIMAL_MIN_C) / (advice::OPTIMAL_MAX_C - advice::OPTIMAL_MIN_C);
    if position_in_zone < 0.3 {
        "45%"
    } else if position_in_zone > 0.7 {
        "55%"
    } else {
        "50%"
    }
}

/// Show the in-flight placeholders while a fetch is running.
pub fn render_loading(view: &mut dyn AdviceView) {
    view.set_temperature("...");
    view.set_humidity("...");
    view.set_altitude("...");
}

/// Render a successful reading plus the advice derived from it.
pub fn render_report(view: &mut dyn AdviceView, context: &RenderContext, report: &WeatherReport) {
    let advice = advice::recommend(
        f64::from(report.temperature),
        f64::from(report.humidity),
        report.altitude.map(f64::from),
    );

    view.set_temperature(&report.temperature.to_string());
    view.set_humidity(&report.humidity.to_string());
    if let Some(altitude) = report.altitude {
        view.set_altitude(&altitude.to_string());
    }
    view.set_weather_icon(icon_class(report.weather_id));
    if let Some(label) = context.location.label() {
        view.set_location_label(&label);
    }

    let temperature_c = f64::from(report.temperature);
    view.set_thermometer(
        context.thermometer_position(temperature_c),
        &format!("{}°C", report.temperature),
    );
    view.set_optimal_zone_offset(optimal_zone_offset(temperature_c));

    let style_class = if advice.level.optimal {
        advice.level.level.style_class()
    } else {
        "level-not-optimal"
    };
    view.set_level(&advice.level.level.to_string(), style_class);
    view.set_level_description(advice.level.description);

    view.set_starter(
        &format!("{}%", advice.starter_percent),
        advice.starter_note,
    );
    view.set_water(&format!("{}°C", advice.water_temp_c), advice.water_note);
    view.set_bulk_ferment(
        &format!("{} horas", advice.bulk_ferment_hours),
        advice.bulk_note,
    );
    view.set_refrigeration(advice.refrigeration, advice.refrigeration_note);
    view.set_pro_tip(advice.pro_tip);
}

/// Render the error state: placeholders everywhere plus a message.
pub fn render_error(view: &mut dyn AdviceView, message: &str) {
    let message = if message.is_empty() {
        "No se pudieron obtener los datos climáticos."
    } else {
        message
    };

    view.set_temperature("N/A");
    view.set_humidity("N/A");
    view.set_altitude("N/A");
    view.set_level("ERROR", "level-not-optimal");
    view.set_level_description(message);
    view.set_starter("--", "");
    view.set_water("--", "");
    view.set_bulk_ferment("--", "");
    view.set_refrigeration("--", "");
    view.set_pro_tip(
        "Hubo un problema al obtener los datos climáticos. Por favor, intenta actualizar.",
    );
}
