//! Linear conversion engine
//!
//! Converts between any two units of the same category via their factors
//! relative to the category base unit. Same-unit conversion is not
//! special-cased; it degenerates to a multiply and divide by equal factors.

use allconv_core::{require_finite, ConvertError};

use crate::registry::{Category, REGISTRY};

/// Convert `value` from one unit to another within `category`.
pub fn convert(value: f64, from: &str, to: &str, category: Category) -> Result<f64, ConvertError> {
    let value = require_finite(value, "value")?;
    let from_factor = REGISTRY
        .factor(category, from)
        .ok_or_else(|| ConvertError::unknown_unit(from))?;
    let to_factor = REGISTRY
        .factor(category, to)
        .ok_or_else(|| ConvertError::unknown_unit(to))?;
    Ok(value * from_factor / to_factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use allconv_core::codes;

    fn assert_close(a: f64, b: f64) {
        let scale = a.abs().max(b.abs()).max(1.0);
        assert!((a - b).abs() <= 1e-9 * scale, "{} != {}", a, b);
    }

    #[test]
    fn test_km_to_mile() {
        let result = convert(100.0, "Kilometer", "Mile", Category::Length).unwrap();
        assert_close(result, 100_000.0 / 1609.344);
    }

    #[test]
    fn test_same_unit_is_identity() {
        let result = convert(42.5, "Pound", "Pound", Category::Mass).unwrap();
        assert_close(result, 42.5);
    }

    #[test]
    fn test_negative_value_passes_through() {
        // Sign policy belongs to the caller's parsing layer
        let result = convert(-3.0, "Meter", "Centimeter", Category::Length).unwrap();
        assert_close(result, -300.0);
    }

    #[test]
    fn test_round_trip_all_pairs() {
        for category in Category::ALL {
            let units = REGISTRY.units(category);
            for u1 in &units {
                for u2 in &units {
                    let there = convert(7.25, u1, u2, category).unwrap();
                    let back = convert(there, u2, u1, category).unwrap();
                    assert_close(back, 7.25);
                }
            }
        }
    }

    #[test]
    fn test_transitivity() {
        let direct = convert(5.0, "Mile", "Centimeter", Category::Length).unwrap();
        let via_meter = {
            let m = convert(5.0, "Mile", "Meter", Category::Length).unwrap();
            convert(m, "Meter", "Centimeter", Category::Length).unwrap()
        };
        assert_close(direct, via_meter);
    }

    #[test]
    fn test_unknown_unit() {
        let err = convert(1.0, "Cubit", "Meter", Category::Length).unwrap_err();
        assert_eq!(err.code, codes::UNKNOWN_UNIT);

        let err = convert(1.0, "Meter", "Cubit", Category::Length).unwrap_err();
        assert_eq!(err.code, codes::UNKNOWN_UNIT);
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = convert(f64::NAN, "Meter", "Foot", Category::Length).unwrap_err();
        assert_eq!(err.code, codes::PARSE_ERROR);
    }
}
