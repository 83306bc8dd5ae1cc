//! Body metrics: BMI and BMR/TDEE (Mifflin-St Jeor)

use std::fmt;
use std::str::FromStr;

use allconv_core::{require_finite, ConvertError};
use serde::{Deserialize, Serialize};

const LB_TO_KG: f64 = 0.45359237;
const IN_TO_M: f64 = 0.0254;

// ============ bmi ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    Lb,
}

impl FromStr for WeightUnit {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kg" => Ok(WeightUnit::Kg),
            "lb" => Ok(WeightUnit::Lb),
            other => Err(ConvertError::unknown_unit(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    M,
    Cm,
    In,
}

impl FromStr for HeightUnit {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m" => Ok(HeightUnit::M),
            "cm" => Ok(HeightUnit::Cm),
            "in" => Ok(HeightUnit::In),
            other => Err(ConvertError::unknown_unit(other)),
        }
    }
}

/// BMI band boundaries: <18.5, <25, <30, else
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obesity,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        }
    }

    fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obesity
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiReading {
    pub bmi: f64,
    pub category: BmiCategory,
}

/// Body mass index: weight in kg divided by height in meters squared.
pub fn bmi(
    weight: f64,
    weight_unit: WeightUnit,
    height: f64,
    height_unit: HeightUnit,
) -> Result<BmiReading, ConvertError> {
    let weight = require_finite(weight, "weight")?;
    let height = require_finite(height, "height")?;

    let weight_kg = match weight_unit {
        WeightUnit::Kg => weight,
        WeightUnit::Lb => weight * LB_TO_KG,
    };
    let height_m = match height_unit {
        HeightUnit::M => height,
        HeightUnit::Cm => height / 100.0,
        HeightUnit::In => height * IN_TO_M,
    };

    if height_m <= 0.0 || weight_kg <= 0.0 {
        return Err(ConvertError::domain_error("weight and height must be > 0"));
    }

    let bmi = weight_kg / (height_m * height_m);
    Ok(BmiReading {
        bmi,
        category: BmiCategory::from_bmi(bmi),
    })
}

// ============ bmr / tdee ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl FromStr for Sex {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" | "male" => Ok(Sex::Male),
            "Female" | "female" => Ok(Sex::Female),
            other => Err(ConvertError::parse_error(format!("unknown sex '{}'", other))),
        }
    }
}

/// Five fixed activity multipliers from 1.2 to 1.9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    SuperActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::SuperActive,
    ];

    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::SuperActive => 1.9,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
            ActivityLevel::SuperActive => "Super Active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityLevel::ALL
            .iter()
            .find(|a| a.label().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| ConvertError::parse_error(format!("unknown activity level '{}'", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyNeeds {
    /// Basal metabolic rate, kcal/day
    pub bmr: f64,
    /// Total daily energy expenditure, kcal/day
    pub tdee: f64,
}

/// Mifflin-St Jeor: `10w + 6.25h - 5a + {5 male, -161 female}`, then the
/// activity multiplier. Age is truncated toward zero.
pub fn bmr_tdee(
    weight_kg: f64,
    height_cm: f64,
    age_years: f64,
    sex: Sex,
    activity: ActivityLevel,
) -> Result<EnergyNeeds, ConvertError> {
    let w = require_finite(weight_kg, "weight")?;
    let h = require_finite(height_cm, "height")?;
    let a = require_finite(age_years, "age")?.trunc();

    let sex_term = match sex {
        Sex::Male => 5.0,
        Sex::Female => -161.0,
    };
    let bmr = 10.0 * w + 6.25 * h - 5.0 * a + sex_term;
    Ok(EnergyNeeds {
        bmr,
        tdee: bmr * activity.factor(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_normal() {
        let reading = bmi(70.0, WeightUnit::Kg, 1.75, HeightUnit::M).unwrap();
        assert!((reading.bmi - 22.857142857142858).abs() < 1e-9);
        assert_eq!(reading.category, BmiCategory::Normal);
    }

    #[test]
    fn test_bmi_underweight() {
        let reading = bmi(50.0, WeightUnit::Kg, 1.80, HeightUnit::M).unwrap();
        assert!((reading.bmi - 15.432098765432098).abs() < 1e-9);
        assert_eq!(reading.category, BmiCategory::Underweight);
    }

    #[test]
    fn test_bmi_unit_preconversion() {
        // 154.3235 lb ≈ 70 kg, 175 cm = 1.75 m
        let metric = bmi(70.0, WeightUnit::Kg, 175.0, HeightUnit::Cm).unwrap();
        let imperial = bmi(70.0 / 0.45359237, WeightUnit::Lb, 1.75 / 0.0254, HeightUnit::In).unwrap();
        assert!((metric.bmi - imperial.bmi).abs() < 1e-9);
    }

    #[test]
    fn test_bmi_band_edges() {
        // Exactly 25 falls in the Overweight band (< is strict)
        assert_eq!(BmiCategory::from_bmi(24.999), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obesity);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
    }

    #[test]
    fn test_bmi_rejects_non_positive() {
        assert!(bmi(0.0, WeightUnit::Kg, 1.75, HeightUnit::M).is_err());
        assert!(bmi(70.0, WeightUnit::Kg, 0.0, HeightUnit::M).is_err());
        assert!(bmi(-70.0, WeightUnit::Kg, 1.75, HeightUnit::M).is_err());
    }

    #[test]
    fn test_bmr_male() {
        // 10*80 + 6.25*180 - 5*30 + 5 = 800 + 1125 - 150 + 5 = 1780
        let needs = bmr_tdee(80.0, 180.0, 30.0, Sex::Male, ActivityLevel::Sedentary).unwrap();
        assert!((needs.bmr - 1780.0).abs() < 1e-9);
        assert!((needs.tdee - 1780.0 * 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_female() {
        // 10*60 + 6.25*165 - 5*25 - 161 = 600 + 1031.25 - 125 - 161 = 1345.25
        let needs = bmr_tdee(60.0, 165.0, 25.0, Sex::Female, ActivityLevel::VeryActive).unwrap();
        assert!((needs.bmr - 1345.25).abs() < 1e-9);
        assert!((needs.tdee - 1345.25 * 1.725).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_age_truncated() {
        let a = bmr_tdee(80.0, 180.0, 30.9, Sex::Male, ActivityLevel::Sedentary).unwrap();
        let b = bmr_tdee(80.0, 180.0, 30.0, Sex::Male, ActivityLevel::Sedentary).unwrap();
        assert_eq!(a.bmr, b.bmr);
    }

    #[test]
    fn test_activity_factors() {
        let factors: Vec<f64> = ActivityLevel::ALL.iter().map(|a| a.factor()).collect();
        assert_eq!(factors, vec![1.2, 1.375, 1.55, 1.725, 1.9]);
    }
}
