//! Allconv Core - Fundamental types
//!
//! This crate provides the types shared by every converter crate:
//! - `ConvertError`: structured, serializable conversion errors
//! - `require_finite`: the defensive numeric guard applied at the core boundary

mod error;

pub use error::{codes, ConvertError};

/// Reject non-finite input before it reaches a formula.
///
/// The presentation layer parses text into numbers; the core still guards
/// against NaN and infinities slipping through that parse.
pub fn require_finite(value: f64, arg: &str) -> Result<f64, ConvertError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConvertError::non_finite(arg))
    }
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::codes;
    pub use crate::{require_finite, ConvertError};
}
