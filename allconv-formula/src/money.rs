//! Tip and discount arithmetic
//!
//! Percent domain [0, 100] is enforced by the input widget, not here.

use allconv_core::{require_finite, ConvertError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TipResult {
    pub tip: f64,
    pub total: f64,
}

/// Tip adds `bill * percent / 100` on top of the bill.
pub fn tip(bill: f64, percent: f64) -> Result<TipResult, ConvertError> {
    let bill = require_finite(bill, "bill")?;
    let percent = require_finite(percent, "percent")?;
    let tip = bill * (percent / 100.0);
    Ok(TipResult {
        tip,
        total: bill + tip,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountResult {
    pub discount: f64,
    pub final_price: f64,
}

/// Discount subtracts `price * percent / 100` from the price.
pub fn discount(price: f64, percent: f64) -> Result<DiscountResult, ConvertError> {
    let price = require_finite(price, "price")?;
    let percent = require_finite(percent, "percent")?;
    let discount = price * (percent / 100.0);
    Ok(DiscountResult {
        discount,
        final_price: price - discount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tip() {
        let result = tip(80.0, 15.0).unwrap();
        assert!((result.tip - 12.0).abs() < 1e-12);
        assert!((result.total - 92.0).abs() < 1e-12);
    }

    #[test]
    fn test_tip_zero_percent() {
        let result = tip(80.0, 0.0).unwrap();
        assert_eq!(result.tip, 0.0);
        assert_eq!(result.total, 80.0);
    }

    #[test]
    fn test_discount() {
        let result = discount(200.0, 10.0).unwrap();
        assert!((result.discount - 20.0).abs() < 1e-12);
        assert!((result.final_price - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_full_discount() {
        let result = discount(59.99, 100.0).unwrap();
        assert!((result.final_price - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(tip(f64::NAN, 15.0).is_err());
        assert!(discount(100.0, f64::INFINITY).is_err());
    }
}
