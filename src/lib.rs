//! Polymarket Momentum Scout
//!
//! Surfaces the single most interesting momentum trade on Polymarket
//! prediction markets.
//!
//! ## Pipeline
//!
//! ```text
//! Gamma (top events) → Delta Enrichment (CLOB 24h history) → Scorer → Selector → Renderer
//! ```

pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod signal;
pub mod types;

#[cfg(test)]
mod types_tests;
