//! Momentum scoring.
//!
//! Maps one outcome plus its parent event context to either an eligible
//! score or the gate that disqualified it. Pure and deterministic for a
//! fixed `now`.

use crate::config::SignalConfig;
use crate::types::{Event, Outcome};
use chrono::{DateTime, Duration, Utc};
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

/// Why an outcome was excluded from scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// No upward 24h movement; only buys are recommended.
    Momentum,
    /// Price too close to 0 or 1, near-resolved or near-certain.
    PriceBand,
    /// Too large a share of lifetime volume traded in the last 24h,
    /// likely a live or expiring event.
    VolumeSurge,
    /// Event closes within the configured window.
    ClosingSoon,
}

/// Scoring result for one outcome. An `Ineligible` outcome is never
/// selected, whatever the other candidates look like.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Score {
    Eligible(Decimal),
    Ineligible(Gate),
}

impl Score {
    /// The computed score, if the outcome cleared every gate.
    pub fn value(self) -> Option<Decimal> {
        match self {
            Score::Eligible(score) => Some(score),
            Score::Ineligible(_) => None,
        }
    }
}

/// Momentum scorer: delta x volume weight x mid-range weight.
#[derive(Debug, Clone)]
pub struct MomentumScorer {
    config: SignalConfig,
}

impl MomentumScorer {
    pub fn new(config: SignalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SignalConfig {
        &self.config
    }

    /// Score one outcome in the context of its event.
    pub fn score(&self, event: &Event, outcome: &Outcome, now: DateTime<Utc>) -> Score {
        if outcome.price_delta <= Decimal::ZERO {
            return Score::Ineligible(Gate::Momentum);
        }
        if outcome.price <= self.config.min_price || outcome.price >= self.config.max_price {
            return Score::Ineligible(Gate::PriceBand);
        }
        if event.volume_24hr > event.volume * self.config.surge_ratio {
            return Score::Ineligible(Gate::VolumeSurge);
        }
        // An end date that fails to parse applies no gate.
        if let Some(closes) = event
            .end_date
            .as_deref()
            .and_then(|s| s.parse::<DateTime<Utc>>().ok())
        {
            if closes - now < Duration::days(self.config.min_days_to_close) {
                return Score::Ineligible(Gate::ClosingSoon);
            }
        }

        let vol_weight = (Decimal::ONE + event.volume_24hr)
            .checked_ln()
            .unwrap_or(Decimal::ZERO);

        Score::Eligible(outcome.price_delta * vol_weight * mid_distance(outcome.price))
    }
}

/// Mid-range weight: 1.0 at price 0.5, falling toward 0 at the extremes,
/// floored at 0.01 so an otherwise eligible outcome is never zeroed out.
fn mid_distance(price: Decimal) -> Decimal {
    (Decimal::ONE - (price - dec!(0.5)).abs() * dec!(2)).max(dec!(0.01))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_event() -> Event {
        Event {
            id: "e1".to_string(),
            slug: "test-event".to_string(),
            title: "Test event".to_string(),
            volume: dec!(1_000_000),
            volume_24hr: dec!(50_000),
            liquidity: dec!(100_000),
            end_date: None,
            markets: Vec::new(),
        }
    }

    fn test_outcome(price: Decimal, delta: Decimal) -> Outcome {
        Outcome {
            name: "Yes".to_string(),
            price,
            price_delta: delta,
            token_id: "tok".to_string(),
        }
    }

    fn scorer() -> MomentumScorer {
        MomentumScorer::new(SignalConfig::default())
    }

    fn now() -> DateTime<Utc> {
        "2026-08-01T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_worked_scenario() {
        // 5% of lifetime volume in 24h, closes 10 days out, price 0.40,
        // delta 0.05: vol_weight = ln(50001) ~ 10.82, mid = 0.80,
        // score ~ 0.433.
        let mut event = test_event();
        event.end_date = Some("2026-08-11T12:00:00Z".to_string());
        let outcome = test_outcome(dec!(0.40), dec!(0.05));

        let score = scorer().score(&event, &outcome, now()).value().unwrap();
        assert!((score - dec!(0.4328)).abs() < dec!(0.001));
    }

    #[test]
    fn test_gate_no_upward_momentum() {
        let event = test_event();
        for delta in [dec!(0), dec!(-0.05)] {
            let outcome = test_outcome(dec!(0.40), delta);
            assert_eq!(
                scorer().score(&event, &outcome, now()),
                Score::Ineligible(Gate::Momentum)
            );
        }
    }

    #[test]
    fn test_gate_price_band() {
        let event = test_event();
        for price in [dec!(0.01), dec!(0.02), dec!(0.90), dec!(0.95)] {
            let outcome = test_outcome(price, dec!(0.05));
            assert_eq!(
                scorer().score(&event, &outcome, now()),
                Score::Ineligible(Gate::PriceBand)
            );
        }
    }

    #[test]
    fn test_gate_volume_surge() {
        let mut event = test_event();
        // 70% of lifetime volume in the last 24h.
        event.volume = dec!(100_000);
        event.volume_24hr = dec!(70_000);
        let outcome = test_outcome(dec!(0.40), dec!(0.05));
        assert_eq!(
            scorer().score(&event, &outcome, now()),
            Score::Ineligible(Gate::VolumeSurge)
        );
    }

    #[test]
    fn test_gate_closing_soon() {
        let mut event = test_event();
        event.end_date = Some("2026-08-03T12:00:00Z".to_string());
        let outcome = test_outcome(dec!(0.40), dec!(0.05));
        assert_eq!(
            scorer().score(&event, &outcome, now()),
            Score::Ineligible(Gate::ClosingSoon)
        );
    }

    #[test]
    fn test_unparsable_end_date_applies_no_gate() {
        let mut event = test_event();
        event.end_date = Some("soon".to_string());
        let outcome = test_outcome(dec!(0.40), dec!(0.05));
        assert!(scorer().score(&event, &outcome, now()).value().is_some());
    }

    #[test]
    fn test_missing_end_date_applies_no_gate() {
        let event = test_event();
        let outcome = test_outcome(dec!(0.40), dec!(0.05));
        assert!(scorer().score(&event, &outcome, now()).value().is_some());
    }

    #[test]
    fn test_gates_fire_before_composite() {
        // A gated outcome is ineligible regardless of how strong the other
        // fields are.
        let mut event = test_event();
        event.volume_24hr = dec!(900_000);
        let outcome = test_outcome(dec!(0.95), dec!(0.30));
        assert_eq!(
            scorer().score(&event, &outcome, now()),
            Score::Ineligible(Gate::PriceBand)
        );
    }

    #[test]
    fn test_score_monotonic_in_delta() {
        let event = test_event();
        let small = scorer()
            .score(&event, &test_outcome(dec!(0.40), dec!(0.05)), now())
            .value()
            .unwrap();
        let large = scorer()
            .score(&event, &test_outcome(dec!(0.40), dec!(0.06)), now())
            .value()
            .unwrap();
        assert!(large > small);
    }

    #[test]
    fn test_score_symmetric_around_midpoint() {
        let event = test_event();
        let below = scorer()
            .score(&event, &test_outcome(dec!(0.35), dec!(0.05)), now())
            .value()
            .unwrap();
        let above = scorer()
            .score(&event, &test_outcome(dec!(0.65), dec!(0.05)), now())
            .value()
            .unwrap();
        assert_eq!(below, above);
    }

    #[test]
    fn test_mid_distance_peak_and_floor() {
        assert_eq!(mid_distance(dec!(0.5)), dec!(1));
        assert_eq!(mid_distance(dec!(0.4)), dec!(0.8));
        // Floored near the extremes rather than reaching zero.
        assert_eq!(mid_distance(dec!(0.999)), dec!(0.01));
        assert_eq!(mid_distance(dec!(0.001)), dec!(0.01));
        assert_eq!(mid_distance(dec!(1)), dec!(0.01));
    }

    #[test]
    fn test_zero_volume_event_scores_zero() {
        let mut event = test_event();
        event.volume = dec!(0);
        event.volume_24hr = dec!(0);
        let outcome = test_outcome(dec!(0.40), dec!(0.05));
        // ln(1) = 0, so the score collapses to zero but stays eligible.
        assert_eq!(
            scorer().score(&event, &outcome, now()),
            Score::Eligible(dec!(0))
        );
    }

    #[test]
    fn test_determinism() {
        let mut event = test_event();
        event.end_date = Some("2026-08-20T00:00:00Z".to_string());
        let outcome = test_outcome(dec!(0.40), dec!(0.05));
        let first = scorer().score(&event, &outcome, now());
        let second = scorer().score(&event, &outcome, now());
        assert_eq!(first, second);
    }
}
