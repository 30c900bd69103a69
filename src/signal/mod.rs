//! Momentum signal pipeline: delta enrichment, scoring, selection.
//!
//! ```text
//! top events → fill_price_deltas (bounded fan-out) → score → select best
//! ```

pub mod enrichment;
pub mod score;
pub mod select;

pub use enrichment::{DeltaEnricher, PriceHistory};
pub use score::{Gate, MomentumScorer, Score};
pub use select::find_best_trade;
