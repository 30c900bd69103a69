//! Tests for core types

#[cfg(test)]
mod tests {
    use super::super::types::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_outcome_creation() {
        let outcome = Outcome {
            name: "Yes".to_string(),
            price: dec!(0.65),
            price_delta: Decimal::ZERO,
            token_id: "token123".to_string(),
        };
        assert_eq!(outcome.name, "Yes");
        assert_eq!(outcome.price, dec!(0.65));
        assert_eq!(outcome.price_delta, dec!(0));
    }

    #[test]
    fn test_market_preserves_outcome_order() {
        let market = Market {
            id: "m1".to_string(),
            question: "Who wins?".to_string(),
            outcomes: vec![
                Outcome {
                    name: "A".to_string(),
                    price: dec!(0.30),
                    price_delta: Decimal::ZERO,
                    token_id: "tok-a".to_string(),
                },
                Outcome {
                    name: "B".to_string(),
                    price: dec!(0.70),
                    price_delta: Decimal::ZERO,
                    token_id: "tok-b".to_string(),
                },
            ],
            volume: dec!(10000),
            volume_24hr: dec!(500),
        };
        let names: Vec<&str> = market.outcomes.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_event_creation() {
        let event = Event {
            id: "e1".to_string(),
            slug: "test-event".to_string(),
            title: "Test event".to_string(),
            volume: dec!(100_000),
            volume_24hr: dec!(5_000),
            liquidity: dec!(20_000),
            end_date: Some("2026-12-31T00:00:00Z".to_string()),
            markets: vec![],
        };
        assert_eq!(event.slug, "test-event");
        assert!(event.volume_24hr <= event.volume);
    }

    #[test]
    fn test_event_deserialization_roundtrip() {
        let event = Event {
            id: "e1".to_string(),
            slug: "s".to_string(),
            title: "T".to_string(),
            volume: dec!(1),
            volume_24hr: dec!(1),
            liquidity: dec!(1),
            end_date: None,
            markets: vec![],
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, "e1");
        assert!(back.end_date.is_none());
    }

    #[test]
    fn test_candidate_serialization() {
        let candidate = Candidate {
            event_title: "Big event".to_string(),
            event_slug: "big-event".to_string(),
            outcome_name: "Yes".to_string(),
            price: dec!(0.40),
            delta: dec!(0.05),
            event_vol_24h: dec!(50_000),
            score: dec!(0.43),
        };
        let json = serde_json::to_string(&candidate).unwrap();
        assert!(json.contains("\"event_slug\":\"big-event\""));
        assert!(json.contains("\"outcome_name\":\"Yes\""));
    }

    #[test]
    fn test_candidate_equality() {
        let make = || Candidate {
            event_title: "E".to_string(),
            event_slug: "e".to_string(),
            outcome_name: "Yes".to_string(),
            price: dec!(0.40),
            delta: dec!(0.05),
            event_vol_24h: dec!(50_000),
            score: dec!(0.43),
        };
        assert_eq!(make(), make());
    }
}
