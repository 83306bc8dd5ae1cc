//! Rate fetcher - the only component with I/O
//!
//! One GET to the provider's "latest rates for base" endpoint, bounded by an
//! 8-second timeout. A non-200 status or a body without a non-empty rates
//! mapping is a failure, never a partial success. The fetcher never touches
//! the cache; its caller owns cache writes.

use std::collections::HashMap;
use std::time::Duration;

use allconv_core::ConvertError;
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Bound on the provider round trip
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(8);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("rate request timed out")]
    Timeout,
    #[error("rate provider returned HTTP {0}")]
    Status(u16),
    #[error("rate provider response lacked a rates mapping")]
    Malformed,
    #[error("network unavailable: {0}")]
    Unavailable(String),
}

impl From<FetchError> for ConvertError {
    fn from(err: FetchError) -> Self {
        ConvertError::fetch_failed(err.to_string())
    }
}

/// Source of rate tables keyed by base currency
#[async_trait]
pub trait RateFetcher: Send + Sync {
    async fn fetch(&self, base: &str) -> Result<HashMap<String, f64>, FetchError>;
}

/// Provider response body; fields other than `rates` are ignored
#[derive(Debug, Deserialize)]
struct RatesResponse {
    #[serde(default)]
    rates: HashMap<String, f64>,
}

#[cfg(feature = "net")]
pub use http::{HttpRateFetcher, DEFAULT_ENDPOINT};

#[cfg(feature = "net")]
mod http {
    use super::*;
    use tracing::debug;

    /// Free, no-key provider that also quotes BTC/ETH
    pub const DEFAULT_ENDPOINT: &str = "https://api.exchangerate.host/latest";

    /// HTTP client against a "latest rates" endpoint
    pub struct HttpRateFetcher {
        client: reqwest::Client,
        endpoint: String,
    }

    impl HttpRateFetcher {
        pub fn new() -> Result<Self, FetchError> {
            Self::with_endpoint(DEFAULT_ENDPOINT)
        }

        pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, FetchError> {
            let client = reqwest::Client::builder()
                .timeout(FETCH_TIMEOUT)
                .build()
                .map_err(|e| FetchError::Unavailable(e.to_string()))?;
            Ok(Self {
                client,
                endpoint: endpoint.into(),
            })
        }
    }

    #[async_trait]
    impl RateFetcher for HttpRateFetcher {
        async fn fetch(&self, base: &str) -> Result<HashMap<String, f64>, FetchError> {
            let url = format!("{}?base={}", self.endpoint, base);
            debug!(%base, "requesting latest rates");

            let response = self.client.get(&url).send().await.map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout
                } else {
                    FetchError::Unavailable(e.to_string())
                }
            })?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            let body: RatesResponse = response.json().await.map_err(|_| FetchError::Malformed)?;
            if body.rates.is_empty() {
                return Err(FetchError::Malformed);
            }
            Ok(body.rates)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_parsing() {
        let body: RatesResponse =
            serde_json::from_str(r#"{"base":"USD","date":"2024-01-01","rates":{"EUR":0.91,"GBP":0.79}}"#)
                .unwrap();
        assert_eq!(body.rates.len(), 2);
        assert_eq!(body.rates["EUR"], 0.91);
    }

    #[test]
    fn test_response_missing_rates_parses_empty() {
        let body: RatesResponse = serde_json::from_str(r#"{"base":"USD"}"#).unwrap();
        assert!(body.rates.is_empty());
    }

    #[test]
    fn test_fetch_error_becomes_convert_error() {
        let err: ConvertError = FetchError::Status(503).into();
        assert_eq!(err.code, allconv_core::codes::FETCH_FAILED);
        assert!(err.message.contains("503"));
    }
}
