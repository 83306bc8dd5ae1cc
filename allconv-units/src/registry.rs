//! Unit definitions - factor tables organized by category
//!
//! Every unit carries a multiplicative factor relative to its category's base
//! unit (the unit with factor 1.0). Tables are built once at process start and
//! never mutated afterwards.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use allconv_core::ConvertError;
use serde::{Deserialize, Serialize};

/// Global unit registry
pub static REGISTRY: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Closed set of linear unit categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Length,
    Mass,
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
    Frequency,
    Force,
    Torque,
    Viscosity,
    Illuminance,
}

impl Category {
    pub const ALL: [Category; 18] = [
        Category::Length,
        Category::Mass,
        Category::Volume,
        Category::Area,
        Category::Speed,
        Category::Energy,
        Category::Power,
        Category::Pressure,
        Category::Angle,
        Category::Density,
        Category::Storage,
        Category::DataRate,
        Category::Time,
        Category::Frequency,
        Category::Force,
        Category::Torque,
        Category::Viscosity,
        Category::Illuminance,
    ];

    /// Human-readable label, as shown by a selector
    pub fn label(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Mass => "Mass",
            Category::Volume => "Volume",
            Category::Area => "Area",
            Category::Speed => "Speed",
            Category::Energy => "Energy",
            Category::Power => "Power",
            Category::Pressure => "Pressure",
            Category::Angle => "Angle",
            Category::Density => "Density",
            Category::Storage => "Storage",
            Category::DataRate => "Data Rate",
            Category::Time => "Time",
            Category::Frequency => "Frequency",
            Category::Force => "Force",
            Category::Torque => "Torque",
            Category::Viscosity => "Viscosity",
            Category::Illuminance => "Illuminance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| ConvertError::unknown_unit(s))
    }
}

/// Registry of all linear unit tables
pub struct UnitRegistry {
    tables: HashMap<Category, HashMap<&'static str, f64>>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            tables: HashMap::new(),
        };
        registry.register_all_categories();
        registry
    }

    /// Factor relative to the category's base unit
    pub fn factor(&self, category: Category, unit: &str) -> Option<f64> {
        self.tables.get(&category)?.get(unit).copied()
    }

    /// Unit names in a category, sorted for stable presentation
    pub fn units(&self, category: Category) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self
            .tables
            .get(&category)
            .map(|t| t.keys().copied().collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }

    fn register(&mut self, category: Category, units: &[(&'static str, f64)]) {
        self.tables
            .insert(category, units.iter().copied().collect());
    }

    fn register_all_categories(&mut self) {
        // base: meter
        self.register(
            Category::Length,
            &[
                ("Meter", 1.0),
                ("Centimeter", 0.01),
                ("Millimeter", 0.001),
                ("Kilometer", 1000.0),
                ("Inch", 0.0254),
                ("Foot", 0.3048),
                ("Yard", 0.9144),
                ("Mile", 1609.344),
                ("Nautical Mile", 1852.0),
            ],
        );

        // base: kilogram
        self.register(
            Category::Mass,
            &[
                ("Milligram", 1e-6),
                ("Gram", 0.001),
                ("Kilogram", 1.0),
                ("Tonne", 1000.0),
                ("Ounce", 0.028349523125),
                ("Pound", 0.45359237),
            ],
        );

        // base: cubic meter
        self.register(
            Category::Volume,
            &[
                ("Cubic Meter", 1.0),
                ("Liter", 0.001),
                ("Milliliter", 1e-6),
                ("Gallon (US)", 0.003785411784),
                ("Quart (US)", 0.000946352946),
                ("Pint (US)", 0.000473176473),
                ("Cup (US)", 0.0002365882365),
            ],
        );

        // base: square meter
        self.register(
            Category::Area,
            &[
                ("Square Meter", 1.0),
                ("Square Centimeter", 1e-4),
                ("Square Kilometer", 1e6),
                ("Square Inch", 0.00064516),
                ("Square Foot", 0.09290304),
                ("Acre", 4046.8564224),
                ("Hectare", 10000.0),
            ],
        );

        // base: m/s
        self.register(
            Category::Speed,
            &[
                ("m/s", 1.0),
                ("km/h", 1.0 / 3.6),
                ("mph", 0.44704),
                ("knot", 0.514444),
            ],
        );

        // base: joule
        self.register(
            Category::Energy,
            &[
                ("Joule", 1.0),
                ("Kilojoule", 1000.0),
                ("Calorie", 4.184),
                ("Kilocalorie", 4184.0),
                ("Watt-hour", 3600.0),
                ("Kilowatt-hour", 3.6e6),
                ("Electronvolt", 1.602176634e-19),
            ],
        );

        // base: watt
        self.register(
            Category::Power,
            &[
                ("Watt", 1.0),
                ("Kilowatt", 1000.0),
                ("Horsepower (metric)", 735.49875),
                ("Horsepower (US)", 745.699872),
            ],
        );

        // base: pascal
        self.register(
            Category::Pressure,
            &[
                ("Pascal", 1.0),
                ("Bar", 1e5),
                ("Atmosphere", 101325.0),
                ("PSI", 6894.757293168),
                ("Torr", 133.322368),
            ],
        );

        // base: radian
        self.register(
            Category::Angle,
            &[
                ("Radian", 1.0),
                ("Degree", std::f64::consts::PI / 180.0),
                ("Gradian", std::f64::consts::PI / 200.0),
            ],
        );

        // base: kg/m^3
        self.register(
            Category::Density,
            &[
                ("kg/m³", 1.0),
                ("g/cm³", 1000.0),
                ("lb/ft³", 16.01846337),
            ],
        );

        // base: byte
        self.register(
            Category::Storage,
            &[
                ("Bit", 1.0 / 8.0),
                ("Byte", 1.0),
                ("Kilobyte (KB)", 1024.0),
                ("Megabyte (MB)", 1024.0 * 1024.0),
                ("Gigabyte (GB)", 1024.0 * 1024.0 * 1024.0),
                ("Terabyte (TB)", 1024.0 * 1024.0 * 1024.0 * 1024.0),
            ],
        );

        // base: bps
        self.register(
            Category::DataRate,
            &[
                ("bps", 1.0),
                ("Kbps", 1_000.0),
                ("Mbps", 1_000_000.0),
                ("Gbps", 1_000_000_000.0),
                ("KiB/s", 8.0 * 1024.0),
                ("MiB/s", 8.0 * 1024.0 * 1024.0),
                ("GiB/s", 8.0 * 1024.0 * 1024.0 * 1024.0),
            ],
        );

        // base: second
        self.register(
            Category::Time,
            &[
                ("Second", 1.0),
                ("Minute", 60.0),
                ("Hour", 3600.0),
                ("Day", 86400.0),
                ("Week", 604800.0),
                ("Year (365d)", 31536000.0),
            ],
        );

        // base: hertz
        self.register(
            Category::Frequency,
            &[
                ("Hertz", 1.0),
                ("Kilohertz", 1_000.0),
                ("Megahertz", 1_000_000.0),
                ("Gigahertz", 1_000_000_000.0),
            ],
        );

        // base: newton
        self.register(
            Category::Force,
            &[
                ("Newton", 1.0),
                ("Kilonewton", 1000.0),
                ("Pound-force", 4.4482216152605),
                ("Dyne", 1e-5),
            ],
        );

        // base: N·m
        self.register(
            Category::Torque,
            &[
                ("Newton-meter", 1.0),
                ("Foot-pound", 1.3558179483314004),
                ("Inch-pound", 0.1129848290276167),
            ],
        );

        // base: Pa·s
        self.register(
            Category::Viscosity,
            &[
                ("Pascal-second", 1.0),
                ("Poise", 0.1),
                ("Centipoise", 0.001),
            ],
        );

        // base: lux
        self.register(
            Category::Illuminance,
            &[("Lux", 1.0), ("Foot-candle", 10.76391041671)],
        );
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_registered() {
        for category in Category::ALL {
            assert!(
                !REGISTRY.units(category).is_empty(),
                "{} has no units",
                category
            );
        }
    }

    #[test]
    fn test_exactly_one_base_unit_per_category() {
        for category in Category::ALL {
            let bases: Vec<_> = REGISTRY
                .units(category)
                .into_iter()
                .filter(|u| REGISTRY.factor(category, u) == Some(1.0))
                .collect();
            assert_eq!(bases.len(), 1, "{} base units: {:?}", category, bases);
        }
    }

    #[test]
    fn test_all_factors_strictly_positive() {
        for category in Category::ALL {
            for unit in REGISTRY.units(category) {
                let factor = REGISTRY.factor(category, unit).unwrap();
                assert!(factor > 0.0, "{} {} factor {}", category, unit, factor);
                assert!(factor.is_finite());
            }
        }
    }

    #[test]
    fn test_factor_lookup() {
        assert_eq!(REGISTRY.factor(Category::Length, "Kilometer"), Some(1000.0));
        assert_eq!(REGISTRY.factor(Category::Mass, "Pound"), Some(0.45359237));
        assert_eq!(REGISTRY.factor(Category::Length, "Parsec"), None);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("Length".parse::<Category>().unwrap(), Category::Length);
        assert_eq!("data rate".parse::<Category>().unwrap(), Category::DataRate);
        assert!("Flavor".parse::<Category>().is_err());
    }
}
