//! CLOB API client
//!
//! Fetches 24-hour price history for outcome tokens.

use crate::error::{AppError, Result};
use crate::signal::enrichment::PriceHistory;
use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;

/// CLOB API client for price history lookups.
#[derive(Clone)]
pub struct ClobClient {
    http: Client,
    base_url: String,
}

/// One `(timestamp, price)` sample, oldest first in a series.
#[derive(Debug, Clone, Deserialize)]
pub struct PricePoint {
    pub t: i64,
    pub p: Decimal,
}

#[derive(Debug, Deserialize)]
struct HistoryResponse {
    #[serde(default)]
    history: Vec<PricePoint>,
}

impl ClobClient {
    /// Create a new CLOB client.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 24-hour price history for a token at 60-minute fidelity, oldest first.
    /// May be empty or shorter than two points for thin markets.
    pub async fn price_history(&self, token_id: &str) -> Result<Vec<PricePoint>> {
        let url = format!("{}/prices-history", self.base_url);
        let resp = self
            .http
            .get(&url)
            .query(&[("market", token_id), ("interval", "1d"), ("fidelity", "60")])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(AppError::Api(format!(
                "prices-history returned {}",
                resp.status()
            )));
        }

        let body: HistoryResponse = resp.json().await?;
        Ok(body.history)
    }
}

#[async_trait]
impl PriceHistory for ClobClient {
    async fn price_delta_24h(&self, token_id: &str) -> Result<Decimal> {
        let history = self.price_history(token_id).await?;
        match (history.first(), history.last()) {
            (Some(first), Some(last)) if history.len() >= 2 => {
                Ok((last.p - first.p).round_dp(4))
            }
            _ => Ok(Decimal::ZERO),
        }
    }
}
