//! Configuration loading.
//!
//! Values come from an optional `config.toml` and `POLYMARKET__`-prefixed
//! environment variables, layered over built-in defaults. Every threshold
//! in the signal pipeline is a field here rather than a hardcoded constant.

use crate::error::Result;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub polymarket: PolymarketConfig,
    #[serde(default)]
    pub enrichment: EnrichmentConfig,
    #[serde(default)]
    pub signal: SignalConfig,
}

impl Config {
    /// Load configuration, layering file and environment over defaults.
    /// A missing config file is fine; defaults apply.
    pub fn load(path: &str) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("POLYMARKET").separator("__"))
            .build()?;
        Ok(cfg.try_deserialize()?)
    }
}

/// Endpoints and HTTP behavior for the public Polymarket APIs.
#[derive(Debug, Clone, Deserialize)]
pub struct PolymarketConfig {
    #[serde(default = "default_gamma_url")]
    pub gamma_url: String,
    #[serde(default = "default_clob_url")]
    pub clob_url: String,
    /// Per-request timeout in seconds, shared by both APIs.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for PolymarketConfig {
    fn default() -> Self {
        Self {
            gamma_url: default_gamma_url(),
            clob_url: default_clob_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Bounds on the delta enrichment fan-out.
#[derive(Debug, Clone, Deserialize)]
pub struct EnrichmentConfig {
    /// Maximum in-flight history requests across the whole batch.
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,
    /// Only the first N outcomes per market are enriched.
    #[serde(default = "default_outcomes_per_market")]
    pub outcomes_per_market: usize,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            max_concurrent: default_max_concurrent(),
            outcomes_per_market: default_outcomes_per_market(),
        }
    }
}

/// Gating thresholds for the momentum scorer.
#[derive(Debug, Clone, Deserialize)]
pub struct SignalConfig {
    /// Outcomes priced at or below this are treated as near-resolved.
    #[serde(default = "default_min_price")]
    pub min_price: Decimal,
    /// Outcomes priced at or above this are treated as near-certain.
    #[serde(default = "default_max_price")]
    pub max_price: Decimal,
    /// Events with more than this share of lifetime volume in the last 24h
    /// are treated as live/expiring noise.
    #[serde(default = "default_surge_ratio")]
    pub surge_ratio: Decimal,
    /// Events closing within this many days are excluded.
    #[serde(default = "default_min_days_to_close")]
    pub min_days_to_close: i64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            min_price: default_min_price(),
            max_price: default_max_price(),
            surge_ratio: default_surge_ratio(),
            min_days_to_close: default_min_days_to_close(),
        }
    }
}

fn default_gamma_url() -> String {
    "https://gamma-api.polymarket.com".to_string()
}

fn default_clob_url() -> String {
    "https://clob.polymarket.com".to_string()
}

fn default_request_timeout_secs() -> u64 {
    15
}

fn default_max_concurrent() -> usize {
    20
}

fn default_outcomes_per_market() -> usize {
    5
}

fn default_min_price() -> Decimal {
    dec!(0.02)
}

fn default_max_price() -> Decimal {
    dec!(0.90)
}

fn default_surge_ratio() -> Decimal {
    dec!(0.6)
}

fn default_min_days_to_close() -> i64 {
    3
}
