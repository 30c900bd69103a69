//! HTTP clients for the public Polymarket APIs.

pub mod clob;
pub mod gamma;

pub use clob::ClobClient;
pub use gamma::GammaClient;

use crate::config::PolymarketConfig;
use crate::error::Result;
use std::time::Duration;

/// Bundles the Gamma (listing) and CLOB (price history) clients.
pub struct PolymarketClient {
    pub gamma: GammaClient,
    pub clob: ClobClient,
}

impl PolymarketClient {
    pub fn new(config: &PolymarketConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.request_timeout_secs);
        Ok(Self {
            gamma: GammaClient::new(&config.gamma_url, timeout)?,
            clob: ClobClient::new(&config.clob_url, timeout)?,
        })
    }
}
