//! The fixed currency selector list
//!
//! Codes are opaque string keys; membership in this list is the only
//! validation the application performs. The provider decides which pairs it
//! can actually quote.

/// Broad set of common currencies plus BTC/ETH, as offered by the selector
pub const CURRENCIES: [&str; 31] = [
    "USD", "EUR", "GBP", "JPY", "CAD", "AUD", "CHF", "CNY", "INR", "NZD", "SEK", "NOK", "DKK",
    "PLN", "CZK", "HUF", "MXN", "BRL", "ZAR", "HKD", "SGD", "KRW", "THB", "TWD", "AED", "SAR",
    "TRY", "ILS", "RUB", "BTC", "ETH",
];

/// Whether a code appears in the selector list
pub fn is_supported(code: &str) -> bool {
    CURRENCIES.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_list_size() {
        assert_eq!(CURRENCIES.len(), 31);
    }

    #[test]
    fn test_membership() {
        assert!(is_supported("USD"));
        assert!(is_supported("BTC"));
        assert!(!is_supported("usd"));
        assert!(!is_supported("XYZ"));
    }

    #[test]
    fn test_no_duplicates() {
        let mut sorted = CURRENCIES.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), CURRENCIES.len());
    }
}
