//! Currency conversion with a TTL rate cache
//!
//! Three pieces, composed by [`CurrencyConverter`]:
//!
//! - [`RateCache`]: per-base rate tables with a 30-minute freshness window
//! - [`RateFetcher`]: async source of rate tables; [`HttpRateFetcher`] is the
//!   HTTP implementation behind the `net` feature
//! - [`CurrencyConverter`]: validates amounts, serves from cache or fetches,
//!   multiplies by the quote rate
//!
//! Rates are whatever the provider last quoted; a conversion carries the rate
//! it used so callers can display it.

pub mod cache;
pub mod codes;
pub mod convert;
pub mod fetch;

pub use cache::{RateCache, RateCacheEntry, DEFAULT_TTL};
pub use codes::{is_supported, CURRENCIES};
pub use convert::{Conversion, CurrencyConverter};
pub use fetch::{FetchError, RateFetcher, FETCH_TIMEOUT};

#[cfg(feature = "net")]
pub use fetch::{HttpRateFetcher, DEFAULT_ENDPOINT};
