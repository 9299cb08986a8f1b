//! Seeds the CementCycle sample catalog.
//!
//! Writes to the PostgREST endpoint named by `SUPABASE_URL` / `SUPABASE_KEY`
//! (a `.env` file is honoured). Without `SUPABASE_URL` the catalog is built
//! into an in-memory store and only summarized.

use anyhow::Context;
use cementcycle_seeder::prelude::*;
use clap::{Arg, Command};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

async fn run<S: DocumentStore>(
    store: S,
    ctx: RunContext,
    seed: Option<u64>,
) -> anyhow::Result<(SeedReport, S)> {
    let sampler = match seed {
        Some(seed) => RandomSampler::seeded(seed),
        None => RandomSampler::from_entropy(),
    };

    let mut seeder = Seeder::new(store, ctx, sampler);
    let report = seeder
        .initialize_all_data()
        .await
        .context("initialization failed")?;

    Ok((report, seeder.into_store()))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let matches = Command::new("cementcycle-seed")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Seed the CementCycle sample catalog into a document store")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Collection mapping file")
                .takes_value(true)
                .default_value(cementcycle_seeder::config::DEFAULT_CONFIG_PATH),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("N")
                .help("Seed for the price history generator")
                .takes_value(true),
        )
        .get_matches();

    let seed = matches
        .value_of("seed")
        .map(str::parse::<u64>)
        .transpose()
        .context("--seed must be an unsigned integer")?;

    let config = SeederConfig::load(matches.value_of("config").unwrap_or_default());
    let ctx = RunContext::new(config);

    info!(
        project = %ctx.config().project_id,
        timestamp = %ctx.timestamp(),
        "CementCycle database initializer"
    );

    match std::env::var("SUPABASE_URL") {
        Ok(url) => {
            let key = std::env::var("SUPABASE_KEY").unwrap_or_default();
            let store = PostgrestStore::new(StoreOptions::new(&url, &key))?;
            let (report, _) = run(store, ctx, seed).await?;
            info!(documents = report.total_written(), "initialization complete");
        }
        Err(_) => {
            warn!("SUPABASE_URL not set, seeding an in-memory store");
            let (report, store) = run(InMemoryStore::new(), ctx, seed).await?;
            for name in store.collections() {
                let count = store.count(&name).await?;
                info!(collection = %name, count, "in-memory collection");
            }
            info!(documents = report.total_written(), "dry run complete");
        }
    }

    Ok(())
}
