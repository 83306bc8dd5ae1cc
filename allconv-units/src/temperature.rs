//! Temperature conversion
//!
//! Affine, pair-specific formulas; a single multiplicative factor cannot
//! express these. Any finite value is accepted - there is deliberately no
//! floor at absolute zero.

use std::fmt;
use std::str::FromStr;

use allconv_core::{require_finite, ConvertError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TempScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TempScale {
    pub const ALL: [TempScale; 3] = [TempScale::Celsius, TempScale::Fahrenheit, TempScale::Kelvin];

    pub fn label(&self) -> &'static str {
        match self {
            TempScale::Celsius => "Celsius",
            TempScale::Fahrenheit => "Fahrenheit",
            TempScale::Kelvin => "Kelvin",
        }
    }
}

impl fmt::Display for TempScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TempScale {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Celsius" | "celsius" | "C" | "c" => Ok(TempScale::Celsius),
            "Fahrenheit" | "fahrenheit" | "F" | "f" => Ok(TempScale::Fahrenheit),
            "Kelvin" | "kelvin" | "K" | "k" => Ok(TempScale::Kelvin),
            other => Err(ConvertError::unknown_unit(other)),
        }
    }
}

/// Convert a temperature reading between scales.
pub fn convert(value: f64, from: TempScale, to: TempScale) -> Result<f64, ConvertError> {
    let value = require_finite(value, "value")?;
    use TempScale::*;
    let result = match (from, to) {
        (Celsius, Fahrenheit) => value * 9.0 / 5.0 + 32.0,
        (Celsius, Kelvin) => value + 273.15,
        (Fahrenheit, Celsius) => (value - 32.0) * 5.0 / 9.0,
        (Fahrenheit, Kelvin) => (value - 32.0) * 5.0 / 9.0 + 273.15,
        (Kelvin, Celsius) => value - 273.15,
        (Kelvin, Fahrenheit) => (value - 273.15) * 9.0 / 5.0 + 32.0,
        _ => value, // same scale
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use TempScale::*;

    #[test]
    fn test_freezing_point() {
        assert_eq!(convert(0.0, Celsius, Fahrenheit).unwrap(), 32.0);
    }

    #[test]
    fn test_boiling_point_kelvin() {
        assert_eq!(convert(100.0, Celsius, Kelvin).unwrap(), 373.15);
    }

    #[test]
    fn test_identity_per_scale() {
        for scale in TempScale::ALL {
            assert_eq!(convert(-40.5, scale, scale).unwrap(), -40.5);
        }
    }

    #[test]
    fn test_fahrenheit_to_kelvin() {
        let k = convert(32.0, Fahrenheit, Kelvin).unwrap();
        assert!((k - 273.15).abs() < 1e-12);
    }

    #[test]
    fn test_below_absolute_zero_accepted() {
        // No domain rejection; the original accepts any float
        let k = convert(-500.0, Celsius, Kelvin).unwrap();
        assert!(k < 0.0);
    }

    #[test]
    fn test_scale_parsing() {
        assert_eq!("Celsius".parse::<TempScale>().unwrap(), Celsius);
        assert_eq!("K".parse::<TempScale>().unwrap(), Kelvin);
        assert!("Rankine".parse::<TempScale>().is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(convert(f64::INFINITY, Celsius, Kelvin).is_err());
    }
}
