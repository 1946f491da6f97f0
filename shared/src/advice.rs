//! Fermentation rule table and recipe adjustments
//!
//! Maps ambient temperature to five half-open difficulty bands, then scales
//! the numeric recommendations of the matched band by humidity and altitude
//! factors. The whole module is a total, deterministic, pure mapping: same
//! inputs always produce the same advice.

use serde::Serialize;
use std::fmt;

/// Lower bound of the optimal bulk-fermentation window (inclusive), °C.
pub const OPTIMAL_MIN_C: f64 = 24.0;

/// Upper bound of the optimal bulk-fermentation window (exclusive), °C.
pub const OPTIMAL_MAX_C: f64 = 28.0;

/// Altitude at which the altitude factor reaches zero, meters.
const ALTITUDE_DIVISOR_M: f64 = 3000.0;

/// Fermentation difficulty level
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    /// Below 20 °C (slow) or 32 °C and above (runaway)
    Alto,
    /// 20 to 24 °C
    MedioBajo,
    /// 24 to 28 °C, the optimal window
    Bajo,
    /// 28 to 32 °C
    MedioAlto,
}

impl DifficultyLevel {
    /// CSS class used by the rendering surface for this level.
    pub fn style_class(&self) -> &'static str {
        match self {
            DifficultyLevel::Alto => "level-high",
            DifficultyLevel::MedioBajo => "level-medium-low",
            DifficultyLevel::Bajo => "level-low",
            DifficultyLevel::MedioAlto => "level-medium-high",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyLevel::Alto => write!(f, "ALTO"),
            DifficultyLevel::MedioBajo => write!(f, "MEDIO-BAJO"),
            DifficultyLevel::Bajo => write!(f, "BAJO"),
            DifficultyLevel::MedioAlto => write!(f, "MEDIO-ALTO"),
        }
    }
}

/// Classified difficulty for a temperature
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FermentationLevel {
    pub level: DifficultyLevel,
    pub description: &'static str,
    /// Whether the temperature sits inside `[24, 28)` °C.
    pub optimal: bool,
}

/// Inclusive numeric band after scaling, e.g. "16-20"
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Band {
    pub low: i64,
    pub high: i64,
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// Full recommendation derived from one weather reading
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FermentationAdvice {
    pub level: FermentationLevel,
    pub starter_percent: Band,
    pub starter_note: &'static str,
    pub water_temp_c: Band,
    pub water_note: &'static str,
    pub bulk_ferment_hours: Band,
    pub bulk_note: &'static str,
    pub refrigeration: &'static str,
    pub refrigeration_note: &'static str,
    pub pro_tip: &'static str,
}

/// One row of the temperature rule table.
struct BandRow {
    /// Exclusive upper temperature bound; `None` for the open last row.
    max_c: Option<f64>,
    level: DifficultyLevel,
    level_description: &'static str,
    starter_pct: (f64, f64),
    starter_note: &'static str,
    water_c: (f64, f64),
    water_note: &'static str,
    bulk_hours: (f64, f64),
    bulk_note: &'static str,
    refrigeration: &'static str,
    refrigeration_note: &'static str,
    pro_tip: &'static str,
}

const BANDS: [BandRow; 5] = [
    BandRow {
        max_c: Some(20.0),
        level: DifficultyLevel::Alto,
        level_description: "Temperatura baja para fermentación. Tu masa madre trabajará lentamente, necesitando más tiempo y un mayor porcentaje de inoculante.",
        starter_pct: (30.0, 40.0),
        starter_note: "Aumenta el porcentaje de masa madre para acelerar la fermentación",
        water_c: (30.0, 35.0),
        water_note: "Usa agua tibia para activar las levaduras",
        bulk_hours: (5.0, 7.0),
        bulk_note: "Tiempo extendido debido a la baja temperatura",
        refrigeration: "No recomendada",
        refrigeration_note: "La refrigeración ralentizaría demasiado el proceso",
        pro_tip: "Coloca tu masa cerca de una fuente de calor indirecto (como el horno apagado con una taza de agua caliente) para mantener una temperatura constante.",
    },
    BandRow {
        max_c: Some(24.0),
        level: DifficultyLevel::MedioBajo,
        level_description: "Temperatura ligeramente baja. Tu masa madre fermentará más lento de lo normal.",
        starter_pct: (25.0, 30.0),
        starter_note: "Porcentaje ligeramente mayor para una fermentación óptima",
        water_c: (28.0, 30.0),
        water_note: "Agua ligeramente tibia para mantener la temperatura ideal",
        bulk_hours: (4.0, 5.0),
        bulk_note: "Tiempo ligeramente extendido",
        refrigeration: "Opcional",
        refrigeration_note: "Solo para sabores más ácidos",
        pro_tip: "Monitorea tu masa cada 30 minutos durante la fermentación para evitar sobrefermentación.",
    },
    BandRow {
        max_c: Some(28.0),
        level: DifficultyLevel::Bajo,
        level_description: "Condiciones ideales para fermentación de masa madre. Este es el rango óptimo para un pan con buen sabor y textura.",
        starter_pct: (20.0, 25.0),
        starter_note: "Porcentaje estándar para una fermentación equilibrada",
        water_c: (24.0, 26.0),
        water_note: "Agua a temperatura ambiente ideal",
        bulk_hours: (3.0, 4.0),
        bulk_note: "Tiempo óptimo para una buena fermentación",
        refrigeration: "Opcional",
        refrigeration_note: "Para sabores más complejos",
        pro_tip: "Este es el momento perfecto para experimentar con diferentes harinas y técnicas de fermentación.",
    },
    BandRow {
        max_c: Some(32.0),
        level: DifficultyLevel::MedioAlto,
        level_description: "Temperatura elevada. Tu masa madre fermentará más rápido de lo normal, requiriendo ajustes en los tiempos y porcentajes.",
        starter_pct: (15.0, 20.0),
        starter_note: "Reduce el porcentaje para controlar la velocidad de fermentación",
        water_c: (20.0, 22.0),
        water_note: "Agua ligeramente fría para contrarrestar el calor",
        bulk_hours: (2.5, 3.5),
        bulk_note: "Tiempo reducido para evitar sobrefermentación",
        refrigeration: "Recomendada (4-6h)",
        refrigeration_note: "Para controlar la fermentación y mejorar el sabor",
        pro_tip: "Realiza la fermentación final en refrigeración para obtener una miga más abierta y un sabor equilibrado.",
    },
    BandRow {
        max_c: None,
        level: DifficultyLevel::Alto,
        level_description: "Temperatura alta. La fermentación será muy rápida, con riesgo de sobrefermentación y sabor excesivamente ácido.",
        starter_pct: (10.0, 15.0),
        starter_note: "Porcentaje reducido para evitar fermentación excesiva",
        water_c: (15.0, 18.0),
        water_note: "Agua fría para neutralizar el calor ambiental",
        bulk_hours: (2.0, 3.0),
        bulk_note: "Monitorea cada 30 minutos",
        refrigeration: "Obligatoria (8-12h)",
        refrigeration_note: "Para controlar completamente la fermentación",
        pro_tip: "Si tu masa dobla en menos de 2 horas, refrigera inmediatamente para evitar que se colapse.",
    },
];

fn band_for(temperature_c: f64) -> &'static BandRow {
    BANDS
        .iter()
        .find(|band| match band.max_c {
            Some(max) => temperature_c < max,
            None => true,
        })
        .unwrap_or(&BANDS[BANDS.len() - 1])
}

/// Whether a temperature falls inside the optimal window `[24, 28)` °C.
pub fn is_optimal(temperature_c: f64) -> bool {
    (OPTIMAL_MIN_C..OPTIMAL_MAX_C).contains(&temperature_c)
}

/// Classify fermentation difficulty for a temperature.
pub fn classify(temperature_c: f64) -> FermentationLevel {
    let band = band_for(temperature_c);
    FermentationLevel {
        level: band.level,
        description: band.level_description,
        optimal: is_optimal(temperature_c),
    }
}

/// Altitude adjustment: fermentation speeds up with elevation, so numeric
/// bands shrink linearly, reaching zero at 3000 m.
pub fn altitude_factor(altitude_m: f64) -> f64 {
    1.0 - altitude_m / ALTITUDE_DIVISOR_M
}

/// Humidity adjustment: humid air shrinks the bands, dry air widens them.
pub fn humidity_factor(humidity_pct: f64) -> f64 {
    if humidity_pct > 70.0 {
        0.9
    } else if humidity_pct < 40.0 {
        1.1
    } else {
        1.0
    }
}

/// Combined scaling applied to every numeric bound.
pub fn combined_factor(humidity_pct: f64, altitude_m: Option<f64>) -> f64 {
    altitude_m.map_or(1.0, altitude_factor) * humidity_factor(humidity_pct)
}

fn scale(bound: f64, factor: f64) -> i64 {
    (bound * factor).round_ties_even() as i64
}

fn scale_band(bounds: (f64, f64), factor: f64) -> Band {
    Band {
        low: scale(bounds.0, factor),
        high: scale(bounds.1, factor),
    }
}

/// Derive the full recommendation for one weather reading.
pub fn recommend(
    temperature_c: f64,
    humidity_pct: f64,
    altitude_m: Option<f64>,
) -> FermentationAdvice {
    let band = band_for(temperature_c);
    let factor = combined_factor(humidity_pct, altitude_m);

    FermentationAdvice {
        level: classify(temperature_c),
        starter_percent: scale_band(band.starter_pct, factor),
        starter_note: band.starter_note,
        water_temp_c: scale_band(band.water_c, factor),
        water_note: band.water_note,
        bulk_ferment_hours: scale_band(band.bulk_hours, factor),
        bulk_note: band.bulk_note,
        refrigeration: band.refrigeration,
        refrigeration_note: band.refrigeration_note,
        pro_tip: band.pro_tip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_are_half_open() {
        assert_eq!(classify(19.9).level, DifficultyLevel::Alto);
        assert_eq!(classify(20.0).level, DifficultyLevel::MedioBajo);
        assert_eq!(classify(23.9).level, DifficultyLevel::MedioBajo);
        assert_eq!(classify(24.0).level, DifficultyLevel::Bajo);
        assert_eq!(classify(27.9).level, DifficultyLevel::Bajo);
        assert_eq!(classify(28.0).level, DifficultyLevel::MedioAlto);
        assert_eq!(classify(32.0).level, DifficultyLevel::Alto);
        assert_eq!(classify(45.0).level, DifficultyLevel::Alto);
    }

    #[test]
    fn cold_and_hot_extremes_carry_distinct_descriptions() {
        let cold = classify(10.0);
        let hot = classify(40.0);
        assert_eq!(cold.level, hot.level);
        assert_ne!(cold.description, hot.description);
    }

    #[test]
    fn optimal_window_marks_only_24_to_28() {
        assert!(!classify(23.9).optimal);
        assert!(classify(24.0).optimal);
        assert!(classify(26.0).optimal);
        assert!(!classify(28.0).optimal);
    }

    #[test]
    fn neutral_humidity_and_no_altitude_leave_factor_at_one() {
        assert_eq!(combined_factor(50.0, None), 1.0);
    }

    #[test]
    fn humidity_factor_thresholds() {
        assert_eq!(humidity_factor(71.0), 0.9);
        assert_eq!(humidity_factor(70.0), 1.0);
        assert_eq!(humidity_factor(40.0), 1.0);
        assert_eq!(humidity_factor(39.0), 1.1);
    }

    #[test]
    fn monterrey_reference_inputs_give_documented_starter_band() {
        // 26 °C, 50 % humidity, 540 m: combined factor (1 - 540/3000) * 1 = 0.82
        let advice = recommend(26.0, 50.0, Some(540.0));
        assert_eq!(advice.starter_percent.to_string(), "16-20");
        assert_eq!(advice.water_temp_c.to_string(), "20-21");
        assert!(advice.level.optimal);
    }

    #[test]
    fn unscaled_bands_match_the_table() {
        let advice = recommend(26.0, 50.0, None);
        assert_eq!(advice.starter_percent, Band { low: 20, high: 25 });
        assert_eq!(advice.water_temp_c, Band { low: 24, high: 26 });
        assert_eq!(advice.refrigeration, "Opcional");
    }

    #[test]
    fn refrigeration_escalates_with_heat() {
        assert_eq!(recommend(18.0, 50.0, None).refrigeration, "No recomendada");
        assert_eq!(
            recommend(30.0, 50.0, None).refrigeration,
            "Recomendada (4-6h)"
        );
        assert_eq!(
            recommend(35.0, 50.0, None).refrigeration,
            "Obligatoria (8-12h)"
        );
    }

    #[test]
    fn high_humidity_shrinks_bands() {
        let humid = recommend(26.0, 80.0, None);
        let neutral = recommend(26.0, 50.0, None);
        assert!(humid.starter_percent.high < neutral.starter_percent.high);
    }
}
