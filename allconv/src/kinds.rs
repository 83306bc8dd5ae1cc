//! The closed set of converters the application offers
//!
//! The original selector dispatched on display strings at every interaction;
//! here the selection is parsed into [`ConverterKind`] once, and everything
//! downstream matches on the enum. Labels and tab grouping are exactly the
//! original application's.

use std::fmt;
use std::str::FromStr;

use allconv_core::ConvertError;
use allconv_units::Category;
use serde::{Deserialize, Serialize};

/// Tabs of the original application, used only for presentation grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
    PhysicalUnits,
    DigitalUnits,
    HealthEducation,
    Finance,
    Miscellaneous,
}

impl Group {
    pub const ALL: [Group; 5] = [
        Group::PhysicalUnits,
        Group::DigitalUnits,
        Group::HealthEducation,
        Group::Finance,
        Group::Miscellaneous,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Group::PhysicalUnits => "Physical Units",
            Group::DigitalUnits => "Digital Units",
            Group::HealthEducation => "Health/Education",
            Group::Finance => "Finance",
            Group::Miscellaneous => "Miscellaneous",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Every converter the application offers, one variant per selector entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConverterKind {
    Length,
    Mass,
    Temperature,
    Volume,
    Area,
    Speed,
    Energy,
    Power,
    Pressure,
    Angle,
    Density,
    Storage,
    DataRate,
    Time,
    DecToHex,
    RgbToHex,
    Bmi,
    Cgpa,
    GradeConverter,
    AgeCalculator,
    DateDifference,
    BmrTdee,
    TipCalculator,
    DiscountCalculator,
    CurrencyConverter,
    Frequency,
    Force,
    Torque,
    Viscosity,
    FuelEfficiency,
    Illuminance,
}

impl ConverterKind {
    pub const ALL: [ConverterKind; 31] = [
        ConverterKind::Length,
        ConverterKind::Mass,
        ConverterKind::Temperature,
        ConverterKind::Volume,
        ConverterKind::Area,
        ConverterKind::Speed,
        ConverterKind::Energy,
        ConverterKind::Power,
        ConverterKind::Pressure,
        ConverterKind::Angle,
        ConverterKind::Density,
        ConverterKind::Storage,
        ConverterKind::DataRate,
        ConverterKind::Time,
        ConverterKind::DecToHex,
        ConverterKind::RgbToHex,
        ConverterKind::Bmi,
        ConverterKind::Cgpa,
        ConverterKind::GradeConverter,
        ConverterKind::AgeCalculator,
        ConverterKind::DateDifference,
        ConverterKind::BmrTdee,
        ConverterKind::TipCalculator,
        ConverterKind::DiscountCalculator,
        ConverterKind::CurrencyConverter,
        ConverterKind::Frequency,
        ConverterKind::Force,
        ConverterKind::Torque,
        ConverterKind::Viscosity,
        ConverterKind::FuelEfficiency,
        ConverterKind::Illuminance,
    ];

    /// Display string, identical to the original selector entry
    pub fn label(&self) -> &'static str {
        match self {
            ConverterKind::Length => "Length",
            ConverterKind::Mass => "Mass",
            ConverterKind::Temperature => "Temperature",
            ConverterKind::Volume => "Volume",
            ConverterKind::Area => "Area",
            ConverterKind::Speed => "Speed",
            ConverterKind::Energy => "Energy",
            ConverterKind::Power => "Power",
            ConverterKind::Pressure => "Pressure",
            ConverterKind::Angle => "Angle",
            ConverterKind::Density => "Density",
            ConverterKind::Storage => "Storage",
            ConverterKind::DataRate => "Data Rate",
            ConverterKind::Time => "Time",
            ConverterKind::DecToHex => "Decimal to Hex",
            ConverterKind::RgbToHex => "RGB to Hex",
            ConverterKind::Bmi => "BMI",
            ConverterKind::Cgpa => "CGPA",
            ConverterKind::GradeConverter => "Grade Converter",
            ConverterKind::AgeCalculator => "Age Calculator",
            ConverterKind::DateDifference => "Date Difference",
            ConverterKind::BmrTdee => "BMR/TDEE",
            ConverterKind::TipCalculator => "Tip Calculator",
            ConverterKind::DiscountCalculator => "Discount Calculator",
            ConverterKind::CurrencyConverter => "Currency Converter",
            ConverterKind::Frequency => "Frequency",
            ConverterKind::Force => "Force",
            ConverterKind::Torque => "Torque",
            ConverterKind::Viscosity => "Viscosity",
            ConverterKind::FuelEfficiency => "Fuel Efficiency",
            ConverterKind::Illuminance => "Illuminance",
        }
    }

    /// Tab the converter appears under
    pub fn group(&self) -> Group {
        match self {
            ConverterKind::Length
            | ConverterKind::Mass
            | ConverterKind::Temperature
            | ConverterKind::Volume
            | ConverterKind::Area
            | ConverterKind::Speed
            | ConverterKind::Energy
            | ConverterKind::Power
            | ConverterKind::Pressure
            | ConverterKind::Angle
            | ConverterKind::Density => Group::PhysicalUnits,
            ConverterKind::Storage
            | ConverterKind::DataRate
            | ConverterKind::Time
            | ConverterKind::DecToHex
            | ConverterKind::RgbToHex => Group::DigitalUnits,
            ConverterKind::Bmi
            | ConverterKind::Cgpa
            | ConverterKind::GradeConverter
            | ConverterKind::AgeCalculator
            | ConverterKind::DateDifference
            | ConverterKind::BmrTdee
            | ConverterKind::TipCalculator
            | ConverterKind::DiscountCalculator => Group::HealthEducation,
            ConverterKind::CurrencyConverter => Group::Finance,
            ConverterKind::Frequency
            | ConverterKind::Force
            | ConverterKind::Torque
            | ConverterKind::Viscosity
            | ConverterKind::FuelEfficiency
            | ConverterKind::Illuminance => Group::Miscellaneous,
        }
    }

    /// The registry category when the converter is a plain factor-table one
    pub fn linear_category(&self) -> Option<Category> {
        match self {
            ConverterKind::Length => Some(Category::Length),
            ConverterKind::Mass => Some(Category::Mass),
            ConverterKind::Volume => Some(Category::Volume),
            ConverterKind::Area => Some(Category::Area),
            ConverterKind::Speed => Some(Category::Speed),
            ConverterKind::Energy => Some(Category::Energy),
            ConverterKind::Power => Some(Category::Power),
            ConverterKind::Pressure => Some(Category::Pressure),
            ConverterKind::Angle => Some(Category::Angle),
            ConverterKind::Density => Some(Category::Density),
            ConverterKind::Storage => Some(Category::Storage),
            ConverterKind::DataRate => Some(Category::DataRate),
            ConverterKind::Time => Some(Category::Time),
            ConverterKind::Frequency => Some(Category::Frequency),
            ConverterKind::Force => Some(Category::Force),
            ConverterKind::Torque => Some(Category::Torque),
            ConverterKind::Viscosity => Some(Category::Viscosity),
            ConverterKind::Illuminance => Some(Category::Illuminance),
            _ => None,
        }
    }
}

impl fmt::Display for ConverterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ConverterKind {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                ConvertError::parse_error(format!("unknown converter: {s}"))
                    .with_suggestion("Run `allconv list` for the available converters")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_unique() {
        let mut labels: Vec<_> = ConverterKind::ALL.iter().map(|k| k.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), ConverterKind::ALL.len());
    }

    #[test]
    fn test_every_kind_parses_from_its_label() {
        for kind in ConverterKind::ALL {
            assert_eq!(kind.label().parse::<ConverterKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "data rate".parse::<ConverterKind>().unwrap(),
            ConverterKind::DataRate
        );
        assert!("Fortnights".parse::<ConverterKind>().is_err());
    }

    #[test]
    fn test_linear_kinds_cover_all_categories() {
        let linear: Vec<_> = ConverterKind::ALL
            .iter()
            .filter_map(|k| k.linear_category())
            .collect();
        assert_eq!(linear.len(), Category::ALL.len());
    }

    #[test]
    fn test_group_sizes_match_original_tabs() {
        let count = |g: Group| {
            ConverterKind::ALL
                .iter()
                .filter(|k| k.group() == g)
                .count()
        };
        assert_eq!(count(Group::PhysicalUnits), 11);
        assert_eq!(count(Group::DigitalUnits), 5);
        assert_eq!(count(Group::HealthEducation), 8);
        assert_eq!(count(Group::Finance), 1);
        assert_eq!(count(Group::Miscellaneous), 6);
    }
}
