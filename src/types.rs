//! Core domain types shared across the pipeline.
//!
//! Event/Market/Outcome trees are built once per command from the Gamma
//! listing, mutated exactly once by delta enrichment, read by scoring, then
//! discarded. Nothing holds a reference across invocations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One possible resolution of a market.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outcome {
    pub name: String,
    /// Current price as a probability in [0, 1].
    pub price: Decimal,
    /// Signed price change over the prior 24 hours, in price units.
    /// Zero until enrichment runs.
    pub price_delta: Decimal,
    /// CLOB token id used to request price history. May be empty, in which
    /// case enrichment skips the outcome and the delta stays zero.
    pub token_id: String,
}

/// One resolvable question, grouping mutually exclusive outcomes.
///
/// Outcome order is source order and semantically relevant: only the first
/// few outcomes per market are enriched with deltas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Market {
    pub id: String,
    pub question: String,
    pub outcomes: Vec<Outcome>,
    pub volume: Decimal,
    pub volume_24hr: Decimal,
}

/// A real-world question containing one or more markets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub volume: Decimal,
    /// Expected to be at most `volume`, but the feed does not guarantee it.
    pub volume_24hr: Decimal,
    pub liquidity: Decimal,
    /// ISO-8601 close timestamp as sent by the API. Unparsable values are
    /// treated as absent by the scorer.
    pub end_date: Option<String>,
    pub markets: Vec<Market>,
}

/// Flattened snapshot of the winning outcome plus enough event context to
/// render it. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub event_title: String,
    pub event_slug: String,
    pub outcome_name: String,
    pub price: Decimal,
    pub delta: Decimal,
    pub event_vol_24h: Decimal,
    pub score: Decimal,
}
