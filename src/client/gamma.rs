//! Gamma API client for market data
//!
//! Public read-only listing of events with their markets and outcomes.

use crate::error::Result;
use crate::types::{Event, Market, Outcome};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Sort order for event listings, mapped to the Gamma `order` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Volume,
    Volume24hr,
    Liquidity,
    EndDate,
}

impl SortField {
    /// Parse a user-supplied sort name; unknown names fall back to 24h volume.
    pub fn parse(s: &str) -> Self {
        match s {
            "volume" => SortField::Volume,
            "liquidity" => SortField::Liquidity,
            "end_date" => SortField::EndDate,
            _ => SortField::Volume24hr,
        }
    }

    fn as_param(self) -> &'static str {
        match self {
            SortField::Volume => "volume",
            SortField::Volume24hr => "volume24hr",
            SortField::Liquidity => "liquidity",
            SortField::EndDate => "endDate",
        }
    }
}

/// Gamma API client for event listings.
#[derive(Clone)]
pub struct GammaClient {
    http: Client,
    base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
struct GammaEvent {
    #[serde(default)]
    id: String,
    #[serde(default)]
    slug: String,
    #[serde(default)]
    title: String,
    volume: Option<Decimal>,
    #[serde(rename = "volume24hr")]
    volume_24hr: Option<Decimal>,
    liquidity: Option<Decimal>,
    #[serde(rename = "endDate")]
    end_date: Option<String>,
    markets: Option<Vec<GammaMarket>>,
}

#[derive(Debug, Clone, Deserialize)]
struct GammaMarket {
    #[serde(default)]
    id: String,
    #[serde(default)]
    question: String,
    outcomes: Option<String>, // JSON string
    #[serde(rename = "outcomePrices")]
    outcome_prices: Option<String>, // JSON string "[\"0.55\", \"0.45\"]"
    #[serde(rename = "clobTokenIds")]
    clob_token_ids: Option<String>, // JSON string
    volume: Option<Decimal>,
    #[serde(rename = "volume24hr")]
    volume_24hr: Option<Decimal>,
    #[serde(rename = "groupItemTitle")]
    group_item_title: Option<String>,
}

/// By-slug endpoint returns either a single object or a one-element list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SlugResponse {
    Many(Vec<GammaEvent>),
    One(Box<GammaEvent>),
}

impl GammaClient {
    /// Create a new Gamma client.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get top active events sorted by the given field, largest first.
    pub async fn top_events(&self, limit: usize, sort: SortField) -> Result<Vec<Event>> {
        let url = format!("{}/events", self.base_url);
        let resp: Vec<GammaEvent> = self
            .http
            .get(&url)
            .query(&[
                ("active", "true"),
                ("closed", "false"),
                ("order", sort.as_param()),
                ("ascending", "false"),
                ("limit", &limit.to_string()),
            ])
            .send()
            .await?
            .json()
            .await?;

        debug!("Fetched {} events from Gamma", resp.len());
        Ok(resp.into_iter().map(parse_event).collect())
    }

    /// Get a single event by its slug, or `None` if it does not exist.
    pub async fn event_by_slug(&self, slug: &str) -> Result<Option<Event>> {
        let url = format!("{}/events/slug/{}", self.base_url, slug);
        let resp = self.http.get(&url).send().await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let data: SlugResponse = resp.json().await?;
        Ok(match data {
            SlugResponse::Many(events) => events.into_iter().next().map(parse_event),
            SlugResponse::One(event) => Some(parse_event(*event)),
        })
    }

    /// Client-side title search across active events.
    ///
    /// Gamma has no title-search parameter on `/events`, so this fetches the
    /// top 500 by volume and keeps events whose title contains every query
    /// term (case-insensitive).
    pub async fn search_events(&self, query: &str, limit: usize) -> Result<Vec<Event>> {
        let url = format!("{}/events", self.base_url);
        let resp: Vec<GammaEvent> = self
            .http
            .get(&url)
            .query(&[
                ("active", "true"),
                ("closed", "false"),
                ("order", "volume"),
                ("ascending", "false"),
                ("limit", "500"),
            ])
            .send()
            .await?
            .json()
            .await?;

        let needle = query.to_lowercase();
        let terms: Vec<&str> = needle.split_whitespace().collect();

        let mut matches = Vec::new();
        for raw in resp {
            let title = raw.title.to_lowercase();
            if terms.iter().all(|t| title.contains(t)) {
                matches.push(parse_event(raw));
                if matches.len() >= limit {
                    break;
                }
            }
        }
        Ok(matches)
    }
}

fn parse_event(ge: GammaEvent) -> Event {
    let markets = ge
        .markets
        .unwrap_or_default()
        .into_iter()
        .map(parse_market)
        .collect();

    Event {
        id: ge.id,
        slug: ge.slug,
        title: ge.title,
        volume: ge.volume.unwrap_or(Decimal::ZERO),
        volume_24hr: ge.volume_24hr.unwrap_or(Decimal::ZERO),
        liquidity: ge.liquidity.unwrap_or(Decimal::ZERO),
        end_date: ge.end_date,
        markets,
    }
}

fn parse_market(gm: GammaMarket) -> Market {
    let names: Vec<String> = gm
        .outcomes
        .as_deref()
        .and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default();

    let prices: Vec<Decimal> = gm
        .outcome_prices
        .as_deref()
        .and_then(parse_price_array)
        .unwrap_or_default();

    let token_ids: Vec<String> = gm
        .clob_token_ids
        .as_deref()
        .and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default();

    let group_title = gm.group_item_title.as_deref().map(str::trim).unwrap_or("");
    // Multi-outcome group events: each member market is itself one candidate
    // with Yes/No legs. Collapse to a single outcome named by the group
    // title, carrying the Yes price and token.
    let is_group_market = !group_title.is_empty() && names == ["Yes", "No"];

    let outcomes: Vec<Outcome> = if is_group_market {
        vec![Outcome {
            name: group_title.to_string(),
            price: prices.first().copied().unwrap_or(Decimal::ZERO),
            price_delta: Decimal::ZERO,
            token_id: token_ids.first().cloned().unwrap_or_default(),
        }]
    } else {
        names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Outcome {
                name,
                price: prices.get(i).copied().unwrap_or(Decimal::ZERO),
                price_delta: Decimal::ZERO,
                token_id: token_ids.get(i).cloned().unwrap_or_default(),
            })
            .collect()
    };

    Market {
        id: gm.id,
        question: gm.question,
        outcomes,
        volume: gm.volume.unwrap_or(Decimal::ZERO),
        volume_24hr: gm.volume_24hr.unwrap_or(Decimal::ZERO),
    }
}

/// Parse an outcome-price array. The API sends a JSON string of strings;
/// fall back to bare numbers for robustness.
fn parse_price_array(s: &str) -> Option<Vec<Decimal>> {
    if let Ok(string_prices) = serde_json::from_str::<Vec<String>>(s) {
        let parsed: Vec<Decimal> = string_prices
            .iter()
            .filter_map(|p| p.parse().ok())
            .collect();
        if !parsed.is_empty() {
            return Some(parsed);
        }
    }
    serde_json::from_str(s).ok()
}
