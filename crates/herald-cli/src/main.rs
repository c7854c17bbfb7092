use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use herald_cli::{Command, Settings};
use herald_client::{FeedClient, TelegramClient};
use herald_core::{choose_one, filter_new, AppError, CycleOutcome, CycleStats, HttpConfig};
use herald_store::PostedUrlStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Timestamped log lines on stderr are the only reporting channel
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let settings = Settings::parse();
    settings
        .validate()
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    let feeds = settings.feed_urls();

    let mut store = PostedUrlStore::load(&settings.posted_file).with_context(|| {
        format!(
            "Failed to load ledger {}",
            settings.posted_file.display()
        )
    })?;
    info!(
        "Loaded {} previously posted URLs from {}",
        store.len(),
        settings.posted_file.display()
    );

    let http = HttpConfig::default();
    let fetcher = FeedClient::new(&http)?;
    let telegram = TelegramClient::new(
        &http,
        &settings.bot_token,
        &settings.chat_id,
        settings.topic_id,
    )?;

    match settings.command {
        Command::Run => {
            // One cycle; a failed publish exits non-zero so external
            // schedulers can alert
            run_cycle(&feeds, &fetcher, &telegram, &mut store).await?;
        }
        Command::Watch { interval } => {
            let pause = Duration::from_secs(interval);
            loop {
                if let Err(e) = run_cycle(&feeds, &fetcher, &telegram, &mut store).await {
                    error!("Cycle failed: {}", e.user_message());
                }
                info!("Sleeping {}s until the next cycle", interval);
                tokio::time::sleep(pause).await;
            }
        }
    }

    Ok(())
}

/// One fetch → filter → select → publish → record sequence.
///
/// Feed failures are isolated: an unreachable or unparseable endpoint
/// is logged and skipped. A publish failure ends the cycle with an
/// error and without touching the ledger, so the item stays eligible
/// for the next run.
async fn run_cycle(
    feeds: &[String],
    fetcher: &FeedClient,
    telegram: &TelegramClient,
    store: &mut PostedUrlStore,
) -> Result<CycleOutcome, AppError> {
    info!("Fetching latest articles...");

    let mut stats = CycleStats::new();
    let mut items = Vec::new();
    for url in feeds {
        match fetcher.fetch(url).await {
            Ok(fetched) => {
                info!("Fetched {} items from {}", fetched.len(), url);
                stats.record_fetched(fetched.len());
                items.extend(fetched);
            }
            Err(e) => {
                error!("Skipping feed {}: {}", url, e);
                stats.record_failed();
            }
        }
    }

    let fresh = filter_new(items, |url| store.contains(url));
    stats.entries_new = fresh.len();
    info!(
        "{} new of {} entries across {} feeds ({} failed)",
        stats.entries_new,
        stats.entries_seen,
        stats.feeds_total(),
        stats.feeds_failed
    );

    let item = match choose_one(&fresh) {
        Some(item) => item,
        None => {
            info!("No new posts found. Everything up to date");
            return Ok(CycleOutcome::UpToDate);
        }
    };

    match telegram.send_article(item).await {
        Ok(()) => {
            store.record(&item.url)?;
            info!("Posted: {}", item.title);
            Ok(CycleOutcome::Posted {
                title: item.title.clone(),
                url: item.url.clone(),
            })
        }
        Err(e) => {
            error!("Failed to post {}: {}", item.title, e);
            Err(e)
        }
    }
}
