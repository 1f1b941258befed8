use clap::Parser;
use ingestion::{DEFAULT_MARKET_SLUG, GammaClient, NomineeAliases, OddsSync, match_markets};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "odds-sync")]
#[command(about = "Pulls nominee win probabilities from Polymarket into the odds store", long_about = None)]
#[command(version)]
struct Cli {
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    #[arg(long, env = "MARKET_SLUG", default_value = DEFAULT_MARKET_SLUG)]
    slug: String,

    /// Fetch and match without writing to the odds store
    #[arg(long)]
    dry_run: bool,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("sync={},ingestion={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = GammaClient::new();

    if cli.dry_run {
        let events = client.fetch_events(&cli.slug).await?;
        let event = events
            .into_iter()
            .next()
            .ok_or_else(|| format!("No active market found for slug '{}'", cli.slug))?;

        let report = match_markets(&event.markets, &NomineeAliases::best_picture_2026());
        for matched in &report.matched {
            tracing::info!(
                "  {} -> nominee {} @ {}",
                matched.film,
                matched.nominee_id,
                matched.odds
            );
        }
        tracing::info!(
            "Dry run: {} matched, {} ignored, {} malformed",
            report.matched.len(),
            report.ignored,
            report.malformed
        );
        return Ok(());
    }

    let database_url = cli
        .database_url
        .ok_or("DATABASE_URL is required unless --dry-run is set")?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    let report = OddsSync::new(&pool).run(&client, &cli.slug).await?;

    tracing::info!(
        "Updated {} odds from Polymarket ({} matched, {} failed, {} ignored)",
        report.applied.len(),
        report.matched,
        report.failed,
        report.ignored
    );
    for update in &report.applied {
        tracing::info!("  {} -> {} ({})", update.film, update.odds, update.percent);
    }

    Ok(())
}
