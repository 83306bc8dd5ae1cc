//! Currency conversion engine
//!
//! Composes the rate cache and the fetcher. Check-fetch-store is atomic per
//! base: each base has a fetch slot, so overlapping requests for the same
//! stale base produce exactly one fetch while other bases proceed
//! independently. Fetch failure is reported outright even when a stale entry
//! exists; the original behaves the same way and the policy is preserved.

use std::collections::HashMap;
use std::sync::Arc;

use allconv_core::ConvertError;
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::cache::RateCache;
use crate::fetch::RateFetcher;

/// Conversion outcome: the converted amount and the rate that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub result: f64,
    pub rate: f64,
}

/// Stateful currency converter owning the cache, injectable anywhere
pub struct CurrencyConverter {
    fetcher: Arc<dyn RateFetcher>,
    cache: RwLock<RateCache>,
    fetch_slots: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl CurrencyConverter {
    pub fn new(fetcher: Arc<dyn RateFetcher>) -> Self {
        Self::with_cache(fetcher, RateCache::new())
    }

    pub fn with_cache(fetcher: Arc<dyn RateFetcher>, cache: RateCache) -> Self {
        Self {
            fetcher,
            cache: RwLock::new(cache),
            fetch_slots: Mutex::new(HashMap::new()),
        }
    }

    /// Convert `amount` from one currency to another.
    ///
    /// `force_refresh` bypasses cache freshness and always fetches; the
    /// same-currency identity touches neither cache nor network.
    pub async fn convert(
        &self,
        amount: f64,
        from: &str,
        to: &str,
        force_refresh: bool,
    ) -> Result<Conversion, ConvertError> {
        if !amount.is_finite() {
            return Err(ConvertError::invalid_amount("amount must be a finite number"));
        }
        if amount < 0.0 {
            return Err(ConvertError::invalid_amount("amount must not be negative"));
        }
        if from == to {
            return Ok(Conversion {
                result: amount,
                rate: 1.0,
            });
        }

        let rates = self.resolve_rates(from, force_refresh).await?;
        let rate = *rates
            .get(to)
            .ok_or_else(|| ConvertError::unsupported_pair(from, to))?;
        Ok(Conversion {
            result: amount * rate,
            rate,
        })
    }

    /// Fresh cache entry, or a fetch stored under the base's fetch slot.
    async fn resolve_rates(
        &self,
        base: &str,
        force_refresh: bool,
    ) -> Result<HashMap<String, f64>, ConvertError> {
        if !force_refresh {
            if let Some(rates) = self.fresh_rates(base).await {
                debug!(%base, "rate cache hit");
                return Ok(rates);
            }
        }

        let slot = {
            let mut slots = self.fetch_slots.lock().await;
            Arc::clone(slots.entry(base.to_string()).or_default())
        };
        let _guard = slot.lock().await;

        // A task that held the slot first may already have stored a table.
        if !force_refresh {
            if let Some(rates) = self.fresh_rates(base).await {
                debug!(%base, "rate cache hit");
                return Ok(rates);
            }
        }

        debug!(%base, force_refresh, "fetching rates");
        let rates = self.fetcher.fetch(base).await.map_err(|e| {
            warn!(%base, error = %e, "rate fetch failed");
            ConvertError::from(e)
        })?;
        self.cache
            .write()
            .await
            .insert(base, rates.clone(), Instant::now());
        Ok(rates)
    }

    async fn fresh_rates(&self, base: &str) -> Option<HashMap<String, f64>> {
        let cache = self.cache.read().await;
        let now = Instant::now();
        match cache.get(base) {
            Some(entry) if cache.is_fresh(entry, now) => Some(entry.rates.clone()),
            _ => None,
        }
    }
}
