//! Property tests for the fermentation rule table

use proptest::prelude::*;
use shared::advice::{
    classify, combined_factor, humidity_factor, recommend, DifficultyLevel,
};
use shared::models::weather::{altitude_from_pressure, MAX_ALTITUDE_M};

/// Strategy for plausible ambient temperatures
fn temperature_strategy() -> impl Strategy<Value = f64> {
    -10.0f64..55.0
}

/// Strategy for humidity percentages
fn humidity_strategy() -> impl Strategy<Value = f64> {
    0.0f64..=100.0
}

/// Strategy for normalized altitudes
fn altitude_strategy() -> impl Strategy<Value = f64> {
    0.0f64..=5000.0
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every temperature maps to exactly one of the four labels.
    #[test]
    fn prop_classify_is_total(t in temperature_strategy()) {
        let level = classify(t).level;
        prop_assert!(matches!(
            level,
            DifficultyLevel::Alto
                | DifficultyLevel::MedioBajo
                | DifficultyLevel::Bajo
                | DifficultyLevel::MedioAlto
        ));
    }

    /// The optimal flag agrees with the half-open window.
    #[test]
    fn prop_optimal_flag_matches_window(t in temperature_strategy()) {
        let optimal = classify(t).optimal;
        prop_assert_eq!(optimal, (24.0..28.0).contains(&t));
    }

    /// Same inputs always produce the same advice.
    #[test]
    fn prop_recommend_is_deterministic(
        t in temperature_strategy(),
        h in humidity_strategy(),
        alt in altitude_strategy()
    ) {
        prop_assert_eq!(
            recommend(t, h, Some(alt)),
            recommend(t, h, Some(alt))
        );
    }

    /// Band ordering survives scaling: low never exceeds high for
    /// non-negative factors.
    #[test]
    fn prop_band_bounds_stay_ordered(
        t in temperature_strategy(),
        h in humidity_strategy(),
        alt in 0.0f64..=2700.0
    ) {
        let advice = recommend(t, h, Some(alt));
        prop_assert!(advice.starter_percent.low <= advice.starter_percent.high);
        prop_assert!(advice.water_temp_c.low <= advice.water_temp_c.high);
        prop_assert!(advice.bulk_ferment_hours.low <= advice.bulk_ferment_hours.high);
    }

    /// The humidity factor only ever takes its three documented values.
    #[test]
    fn prop_humidity_factor_is_three_valued(h in humidity_strategy()) {
        let f = humidity_factor(h);
        prop_assert!(f == 0.9 || f == 1.0 || f == 1.1);
    }

    /// Missing altitude means only humidity scales the bands.
    #[test]
    fn prop_no_altitude_uses_humidity_alone(h in humidity_strategy()) {
        prop_assert_eq!(combined_factor(h, None), humidity_factor(h));
    }

    /// Normalized altitude is always inside the clamp range.
    #[test]
    fn prop_altitude_always_clamped(pressure in -100.0f64..1500.0) {
        let altitude = altitude_from_pressure(pressure);
        prop_assert!(altitude >= 0);
        prop_assert!(altitude <= MAX_ALTITUDE_M);
    }
}
