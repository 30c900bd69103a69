//! Candidate selection over a scored event batch.

use crate::signal::score::MomentumScorer;
use crate::types::{Candidate, Event};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Scan every event/outcome pair and keep the single best eligible candidate.
///
/// Traversal is event order then outcome order; equal scores keep the
/// earliest candidate. Returns `None` when nothing clears the gates with a
/// positive score, which callers must treat as "no recommendation" rather
/// than a failure.
pub fn find_best_trade(
    events: &[Event],
    scorer: &MomentumScorer,
    now: DateTime<Utc>,
) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    for event in events {
        for market in &event.markets {
            for outcome in &market.outcomes {
                // Mirrors the price-band gate, skipping near-resolved
                // outcomes before scoring.
                if outcome.price <= scorer.config().min_price
                    || outcome.price >= scorer.config().max_price
                {
                    continue;
                }

                let Some(score) = scorer.score(event, outcome, now).value() else {
                    continue;
                };
                if score <= Decimal::ZERO {
                    continue;
                }
                if best.as_ref().map_or(true, |b| score > b.score) {
                    best = Some(Candidate {
                        event_title: event.title.clone(),
                        event_slug: event.slug.clone(),
                        outcome_name: outcome.name.clone(),
                        price: outcome.price,
                        delta: outcome.price_delta,
                        event_vol_24h: event.volume_24hr,
                        score,
                    });
                }
            }
        }
    }

    best
}
