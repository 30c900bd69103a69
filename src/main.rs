//! Polymarket Momentum Scout
//!
//! Fetches live market data and surfaces the single most interesting trade
//! using a simple momentum signal. Heuristic tool, not financial advice.

use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use polymarket_momentum::{
    client::{gamma::SortField, PolymarketClient},
    config::Config,
    display,
    signal::{find_best_trade, DeltaEnricher, MomentumScorer},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "polymarket-momentum")]
#[command(about = "Momentum signal scout for Polymarket prediction markets")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend the single best momentum trade
    Recommend {
        /// Number of top events to scan
        #[arg(short = 'n', long, default_value = "30")]
        limit: usize,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// List top events sorted by volume
    Markets {
        /// Number of events to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
        /// Sort by: volume, volume_24hr, liquidity, end_date
        #[arg(long, default_value = "volume")]
        sort: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Show detail for a single event by slug
    Market {
        /// Event slug (from the polymarket.com URL)
        slug: String,
        /// Skip the 24h price delta fetch
        #[arg(long)]
        no_deltas: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Search active events by title
    Search {
        /// Search query
        query: String,
        /// Max results
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    match cli.command {
        Commands::Recommend { limit, format } => recommend(config, limit, format).await,
        Commands::Markets {
            limit,
            sort,
            format,
        } => show_markets(config, limit, &sort, format).await,
        Commands::Market {
            slug,
            no_deltas,
            format,
        } => show_event(config, &slug, no_deltas, format).await,
        Commands::Search {
            query,
            limit,
            format,
        } => search(config, &query, limit, format).await,
    }
}

async fn recommend(config: Config, limit: usize, format: OutputFormat) -> anyhow::Result<()> {
    let client = PolymarketClient::new(&config.polymarket)?;

    tracing::info!("Fetching top {} events", limit);
    let mut events = client.gamma.top_events(limit, SortField::Volume24hr).await?;

    tracing::info!("Fetching 24h price history");
    let enricher = DeltaEnricher::new(Arc::new(client.clob.clone()), &config.enrichment);
    enricher.fill_price_deltas(&mut events).await;

    let scorer = MomentumScorer::new(config.signal.clone());
    let pick = find_best_trade(&events, &scorer, Utc::now());

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&pick)?),
        OutputFormat::Table => match pick {
            Some(pick) => display::render_recommendation(&pick),
            None => println!("No clear momentum signal found right now."),
        },
    }
    Ok(())
}

async fn show_markets(
    config: Config,
    limit: usize,
    sort: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let client = PolymarketClient::new(&config.polymarket)?;
    let events = client.gamma.top_events(limit, SortField::parse(sort)).await?;

    match format {
        OutputFormat::Json => {
            let out: Vec<_> = events
                .iter()
                .map(|e| {
                    serde_json::json!({
                        "id": e.id,
                        "slug": e.slug,
                        "title": e.title,
                        "volume": e.volume,
                        "volume_24hr": e.volume_24hr,
                        "liquidity": e.liquidity,
                        "end_date": e.end_date,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Table => display::render_events(&events),
    }
    Ok(())
}

async fn show_event(
    config: Config,
    slug: &str,
    no_deltas: bool,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let client = PolymarketClient::new(&config.polymarket)?;

    let Some(mut event) = client.gamma.event_by_slug(slug).await? else {
        anyhow::bail!("no event found for slug: {}", slug);
    };

    if !no_deltas {
        let enricher = DeltaEnricher::new(Arc::new(client.clob.clone()), &config.enrichment);
        enricher
            .fill_price_deltas(std::slice::from_mut(&mut event))
            .await;
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&event)?),
        OutputFormat::Table => display::render_event(&event),
    }
    Ok(())
}

async fn search(
    config: Config,
    query: &str,
    limit: usize,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let client = PolymarketClient::new(&config.polymarket)?;
    let events = client.gamma.search_events(query, limit).await?;

    if events.is_empty() {
        println!("No results for: {}", query);
        return Ok(());
    }

    match format {
        OutputFormat::Json => {
            let out: Vec<_> = events
                .iter()
                .map(|e| {
                    serde_json::json!({
                        "id": e.id,
                        "slug": e.slug,
                        "title": e.title,
                        "volume": e.volume,
                        "volume_24hr": e.volume_24hr,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Table => {
            println!("\nResults for: {}", query);
            display::render_events(&events);
        }
    }
    Ok(())
}
