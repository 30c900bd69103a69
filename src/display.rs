//! Terminal rendering and number formatting.

use crate::types::{Candidate, Event};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Format a USD volume: $1.2M, $340.0K, $88.
pub fn fmt_volume(usd: Decimal) -> String {
    if usd >= dec!(1_000_000) {
        format!("${:.1}M", usd / dec!(1_000_000))
    } else if usd >= dec!(1_000) {
        format!("${:.1}K", usd / dec!(1_000))
    } else {
        format!("${:.0}", usd)
    }
}

/// Format a probability as cents: 94¢, <1¢, 100¢.
pub fn fmt_price(price: Decimal) -> String {
    let cents = price * Decimal::ONE_HUNDRED;
    if cents < Decimal::ONE {
        "<1¢".to_string()
    } else if cents >= dec!(99.5) {
        "100¢".to_string()
    } else {
        format!("{:.0}¢", cents)
    }
}

/// Format a 24h price delta in cents: ▲0.4, ▼0.1, or — when flat.
pub fn fmt_delta(delta: Decimal) -> String {
    let cents = delta * Decimal::ONE_HUNDRED;
    if cents.abs() < dec!(0.05) {
        "—".to_string()
    } else if cents > Decimal::ZERO {
        format!("▲{:.1}", cents.abs())
    } else {
        format!("▼{:.1}", cents.abs())
    }
}

/// Truncate text to `width` characters with a trailing ellipsis.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let cut: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", cut)
}

/// Print a table of events.
pub fn render_events(events: &[Event]) {
    println!(
        "\n{:<52} {:>9} {:>9} {:>9}  {}",
        "Title", "Volume", "24h Vol", "Liquidity", "Closes"
    );
    println!("{}", "-".repeat(96));

    for event in events {
        let closes = event
            .end_date
            .as_deref()
            .map(|s| s.get(..10).unwrap_or(s))
            .unwrap_or("—");
        println!(
            "{:<52} {:>9} {:>9} {:>9}  {}",
            truncate(&event.title, 50),
            fmt_volume(event.volume),
            fmt_volume(event.volume_24hr),
            fmt_volume(event.liquidity),
            closes,
        );
    }
    println!();
}

/// Print the detail view for a single event.
pub fn render_event(event: &Event) {
    println!("\n📈 {}", event.title);
    println!("   https://polymarket.com/event/{}", event.slug);
    println!(
        "\nVolume: {}   24h: {}   Liquidity: {}",
        fmt_volume(event.volume),
        fmt_volume(event.volume_24hr),
        fmt_volume(event.liquidity),
    );
    if let Some(end) = &event.end_date {
        println!("Closes: {}", end);
    }

    for market in &event.markets {
        println!("\n  {}", market.question);
        for outcome in &market.outcomes {
            println!(
                "    {:<32} {:>6} {:>8}",
                truncate(&outcome.name, 30),
                fmt_price(outcome.price),
                fmt_delta(outcome.price_delta),
            );
        }
    }
    println!();
}

/// Print the trade-signal panel for the selected candidate.
pub fn render_recommendation(pick: &Candidate) {
    let delta_cents = pick.delta * Decimal::ONE_HUNDRED;
    let price_cents = pick.price * Decimal::ONE_HUNDRED;

    println!("\n━━━ POLYMARKET TRADE SIGNAL ━━━\n");
    println!("  Market:   {}", pick.event_title);
    println!("  Outcome:  {}", pick.outcome_name);
    println!(
        "  Action:   BUY {} @ {}",
        pick.outcome_name,
        fmt_price(pick.price)
    );
    println!();
    println!("  Signal");
    println!(
        "  ├─ Price:       {:.1}¢  ({:.1}% implied probability)",
        price_cents, price_cents
    );
    println!("  ├─ 24h move:    ▲{:.1}¢  (upward momentum)", delta_cents);
    println!(
        "  ├─ Market vol:  {} in last 24h",
        fmt_volume(pick.event_vol_24h)
    );
    println!(
        "  └─ Score:       {:.2}  (momentum x volume x mid-range weight)",
        pick.score
    );
    println!();
    println!(
        "  This outcome rose {:.1}¢ in 24h on {} of market volume,",
        delta_cents,
        fmt_volume(pick.event_vol_24h)
    );
    println!("  suggesting new information or shifting consensus. Its mid-range");
    println!(
        "  price ({:.0}¢) means the bet is still open and not near resolution.",
        price_cents
    );
    println!();
    println!("  https://polymarket.com/event/{}", pick.event_slug);
    println!("\n  ⚠  Heuristic signal only. Not financial advice.\n");
}
