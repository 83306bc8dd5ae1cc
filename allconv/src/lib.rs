//! Allconv - all-in-one conversion engine
//!
//! Facade over the converter crates:
//! - [`units`]: unit registry, linear engine, temperature, fuel efficiency
//! - [`formula`]: BMI, BMR/TDEE, CGPA, grades, dates, tip, discount, hex
//! - [`currency`]: rate cache, async fetcher, currency conversion
//! - [`ConverterKind`]: the closed set of converters and their tab grouping
//!
//! The `net` feature (default on) enables the HTTP rate fetcher; without it
//! currency conversion still works with a caller-supplied [`RateFetcher`].

pub use allconv_core as core;
pub use allconv_currency as currency;
pub use allconv_formula as formula;
pub use allconv_units as units;

mod kinds;

pub use kinds::{ConverterKind, Group};

pub use allconv_core::{codes, ConvertError};
pub use allconv_currency::{Conversion, CurrencyConverter, RateCache, RateFetcher, CURRENCIES};
pub use allconv_units::{Category, FuelUnit, TempScale, REGISTRY};

#[cfg(feature = "net")]
pub use allconv_currency::HttpRateFetcher;

/// Prelude for consumers wiring a presentation layer
pub mod prelude {
    pub use crate::kinds::{ConverterKind, Group};
    pub use allconv_core::prelude::*;
    pub use allconv_currency::{Conversion, CurrencyConverter, RateFetcher};
    pub use allconv_units::{Category, FuelUnit, TempScale};
}
