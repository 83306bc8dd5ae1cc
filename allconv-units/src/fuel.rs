//! Fuel efficiency conversion
//!
//! MPG (US) and L/100km are reciprocals of one another scaled by 235.215, so
//! the same formula applies in both directions. Zero input yields +infinity
//! rather than an error.

use std::fmt;
use std::str::FromStr;

use allconv_core::{require_finite, ConvertError};
use serde::{Deserialize, Serialize};

const RECIPROCAL_FACTOR: f64 = 235.215;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelUnit {
    MpgUs,
    LitersPer100Km,
}

impl FuelUnit {
    pub const ALL: [FuelUnit; 2] = [FuelUnit::MpgUs, FuelUnit::LitersPer100Km];

    pub fn label(&self) -> &'static str {
        match self {
            FuelUnit::MpgUs => "MPG (US)",
            FuelUnit::LitersPer100Km => "L/100km",
        }
    }
}

impl fmt::Display for FuelUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for FuelUnit {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FuelUnit::ALL
            .iter()
            .find(|u| u.label().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| ConvertError::unknown_unit(s))
    }
}

/// Convert fuel efficiency between MPG (US) and L/100km.
pub fn convert(value: f64, from: FuelUnit, to: FuelUnit) -> Result<f64, ConvertError> {
    let value = require_finite(value, "value")?;
    if from == to {
        return Ok(value);
    }
    if value == 0.0 {
        return Ok(f64::INFINITY);
    }
    Ok(RECIPROCAL_FACTOR / value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use FuelUnit::*;

    #[test]
    fn test_zero_maps_to_infinity() {
        let result = convert(0.0, MpgUs, LitersPer100Km).unwrap();
        assert!(result.is_infinite() && result.is_sign_positive());
    }

    #[test]
    fn test_factor_maps_to_one() {
        let result = convert(235.215, MpgUs, LitersPer100Km).unwrap();
        assert!((result - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_symmetric_in_both_directions() {
        let a = convert(30.0, MpgUs, LitersPer100Km).unwrap();
        let b = convert(30.0, LitersPer100Km, MpgUs).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_identity_when_equal() {
        assert_eq!(convert(8.5, LitersPer100Km, LitersPer100Km).unwrap(), 8.5);
    }

    #[test]
    fn test_label_parsing() {
        assert_eq!("MPG (US)".parse::<FuelUnit>().unwrap(), MpgUs);
        assert_eq!("L/100km".parse::<FuelUnit>().unwrap(), LitersPer100Km);
        assert!("MPG (UK)".parse::<FuelUnit>().is_err());
    }
}
