//! 24-hour price delta enrichment.
//!
//! Fans out one history request per eligible outcome across the whole event
//! batch, gated by a shared semaphore, and writes the resulting deltas back
//! into the outcomes in place. Individual request failures downgrade to a
//! zero delta and never abort the batch.

use crate::config::EnrichmentConfig;
use crate::error::Result;
use crate::types::Event;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Source of 24-hour price deltas for outcome tokens.
#[async_trait]
pub trait PriceHistory: Send + Sync {
    /// Signed 24h price change for one token, in price units.
    async fn price_delta_24h(&self, token_id: &str) -> Result<Decimal>;
}

/// Fills `Outcome::price_delta` across an event batch.
pub struct DeltaEnricher {
    provider: Arc<dyn PriceHistory>,
    max_concurrent: usize,
    outcomes_per_market: usize,
}

impl DeltaEnricher {
    pub fn new(provider: Arc<dyn PriceHistory>, config: &EnrichmentConfig) -> Self {
        Self {
            provider,
            max_concurrent: config.max_concurrent.max(1),
            outcomes_per_market: config.outcomes_per_market,
        }
    }

    /// Fetch deltas for every eligible outcome and write them in place.
    ///
    /// Eligible means: within the first `outcomes_per_market` outcomes of
    /// its market and carrying a non-empty token id. All fetches across the
    /// batch share one semaphore capping in-flight requests. Returns only
    /// after every spawned fetch has completed; outcomes whose fetch failed
    /// keep a zero delta.
    pub async fn fill_price_deltas(&self, events: &mut [Event]) {
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent));
        let mut tasks: JoinSet<(usize, usize, usize, Decimal)> = JoinSet::new();

        for (ei, event) in events.iter().enumerate() {
            for (mi, market) in event.markets.iter().enumerate() {
                let capped = market.outcomes.iter().take(self.outcomes_per_market);
                for (oi, outcome) in capped.enumerate() {
                    if outcome.token_id.is_empty() {
                        continue;
                    }
                    let provider = Arc::clone(&self.provider);
                    let semaphore = Arc::clone(&semaphore);
                    let token_id = outcome.token_id.clone();
                    tasks.spawn(async move {
                        // Permit is held for the whole request and released
                        // by drop on every exit path.
                        let _permit = match semaphore.acquire_owned().await {
                            Ok(permit) => permit,
                            Err(_) => return (ei, mi, oi, Decimal::ZERO),
                        };
                        let delta = match provider.price_delta_24h(&token_id).await {
                            Ok(delta) => delta,
                            Err(e) => {
                                debug!("history fetch failed for {}: {}", token_id, e);
                                Decimal::ZERO
                            }
                        };
                        (ei, mi, oi, delta)
                    });
                }
            }
        }

        let spawned = tasks.len();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                // Each task targets a distinct outcome, so writes never overlap.
                Ok((ei, mi, oi, delta)) => {
                    events[ei].markets[mi].outcomes[oi].price_delta = delta;
                }
                Err(e) => warn!("delta fetch task failed: {}", e),
            }
        }
        debug!("Filled price deltas for {} outcomes", spawned);
    }
}
