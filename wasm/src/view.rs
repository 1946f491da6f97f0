//! DOM-backed rendering surface
//!
//! Each setter looks its element up by id and silently skips it when the
//! page does not embed that part of the widget.

use shared::render::AdviceView;
use wasm_bindgen::JsCast;
use web_sys::Document;

pub struct DomView {
    document: Document,
}

impl DomView {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(element) = self.document.get_element_by_id(id) {
            element.set_text_content(Some(text));
        }
    }

    fn set_style_left(&self, id: &str, left: &str) {
        let Some(element) = self.document.get_element_by_id(id) else {
            return;
        };
        if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
            let _ = element.style().set_property("left", left);
        }
    }
}

impl AdviceView for DomView {
    fn set_temperature(&mut self, text: &str) {
        self.set_text("mm-temperature", text);
    }

    fn set_humidity(&mut self, text: &str) {
        self.set_text("mm-humidity", text);
    }

    fn set_altitude(&mut self, text: &str) {
        self.set_text("mm-altitude", text);
    }

    fn set_weather_icon(&mut self, class: &str) {
        if let Some(element) = self.document.get_element_by_id("mm-weather-icon") {
            element.set_class_name(&format!("fas {}", class));
        }
    }

    fn set_location_label(&mut self, text: &str) {
        self.set_text("mm-location", text);
    }

    fn set_current_date(&mut self, text: &str) {
        self.set_text("mm-current-date", text);
    }

    fn set_last_updated(&mut self, text: &str) {
        self.set_text("mm-last-updated", text);
    }

    fn set_thermometer(&mut self, position_pct: f64, value_label: &str) {
        self.set_style_left("mm-temperature-indicator", &format!("{}%", position_pct));
        let indicator = self
            .document
            .get_element_by_id("mm-temperature-indicator")
            .and_then(|el| el.query_selector(".mm-indicator-value").ok().flatten());
        if let Some(value) = indicator {
            value.set_text_content(Some(value_label));
        }
    }

    fn set_optimal_zone_offset(&mut self, left: &str) {
        let label = self
            .document
            .query_selector(".mm-optimal-zone-label")
            .ok()
            .flatten();
        let Some(label) = label else { return };
        if let Ok(label) = label.dyn_into::<web_sys::HtmlElement>() {
            let _ = label.style().set_property("left", left);
        }
    }

    fn set_level(&mut self, label: &str, style_class: &str) {
        if let Some(element) = self.document.get_element_by_id("mm-level-value") {
            element.set_text_content(Some(label));
            element.set_class_name(&format!("mm-level-value {}", style_class));
        }
    }

    fn set_level_description(&mut self, text: &str) {
        self.set_text("mm-level-description", text);
    }

    fn set_starter(&mut self, value: &str, description: &str) {
        self.set_text("mm-rec-masa-madre", value);
        if !description.is_empty() {
            self.set_text("mm-rec-masa-madre-desc", description);
        }
    }

    fn set_water(&mut self, value: &str, description: &str) {
        self.set_text("mm-rec-agua", value);
        if !description.is_empty() {
            self.set_text("mm-rec-agua-desc", description);
        }
    }

    fn set_bulk_ferment(&mut self, value: &str, description: &str) {
        self.set_text("mm-rec-fermentacion", value);
        if !description.is_empty() {
            self.set_text("mm-rec-fermentacion-desc", description);
        }
    }

    fn set_refrigeration(&mut self, value: &str, description: &str) {
        self.set_text("mm-rec-refrigeracion", value);
        if !description.is_empty() {
            self.set_text("mm-rec-refrigeracion-desc", description);
        }
    }

    fn set_pro_tip(&mut self, text: &str) {
        self.set_text("mm-pro-tip", text);
    }
}
