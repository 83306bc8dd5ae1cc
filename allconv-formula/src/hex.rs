//! Hexadecimal renderings: picked RGB colors and decimal integers

use allconv_core::{require_finite, ConvertError};

/// Six uppercase hex digits for a picked color, without a `#` prefix.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("{:02X}{:02X}{:02X}", r, g, b)
}

/// Uppercase hex for a decimal entry, truncated toward zero; negatives keep a
/// leading minus sign rather than a two's-complement rendering.
pub fn dec_to_hex(value: f64) -> Result<String, ConvertError> {
    let value = require_finite(value, "value")?.trunc();
    if value < i64::MIN as f64 || value > i64::MAX as f64 {
        return Err(ConvertError::domain_error("value out of integer range"));
    }
    let n = value as i64;
    if n < 0 {
        Ok(format!("-{:X}", n.unsigned_abs()))
    } else {
        Ok(format!("{:X}", n))
    }
}
