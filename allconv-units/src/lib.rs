//! Allconv Units - Unit registry and unit conversion
//!
//! Provides the linear conversion engine plus the two unit converters that
//! cannot be expressed as a single multiplicative factor.
//!
//! Linear categories (factor tables relative to a base unit):
//! - Length (base: meter), Mass (kilogram), Volume (cubic meter)
//! - Area (square meter), Speed (m/s), Energy (joule), Power (watt)
//! - Pressure (pascal), Angle (radian), Density (kg/m³)
//! - Storage (byte), Data Rate (bps), Time (second), Frequency (hertz)
//! - Force (newton), Torque (N·m), Viscosity (Pa·s), Illuminance (lux)
//!
//! Non-linear:
//! - Temperature (affine, pair-specific)
//! - Fuel efficiency (reciprocal)

mod fuel;
mod linear;
mod registry;
mod temperature;

pub use fuel::FuelUnit;
pub use linear::convert;
pub use registry::{Category, UnitRegistry, REGISTRY};
pub use temperature::TempScale;

pub use fuel::convert as convert_fuel;
pub use temperature::convert as convert_temperature;
