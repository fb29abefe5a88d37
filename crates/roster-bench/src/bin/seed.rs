//! `seed` — idempotently create the cascade-benchmark fixture.
//!
//! Takes no arguments. `DATABASE_URL` must point at the store; its absence
//! aborts before any connection is attempted.

use anyhow::Context as _;
use roster_bench::{
  config::Config,
  seed::{SeedOutcome, seed_fixture},
};
use roster_store_sqlite::{SqliteStore, StoreOptions};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let config = Config::from_env().context("loading configuration")?;
  tracing::info!("DATABASE_URL is set");

  let store =
    SqliteStore::open(config.database_path(), StoreOptions::default())
      .await
      .with_context(|| {
        format!("opening store at {:?}", config.database_path())
      })?;

  let result = seed_fixture(&store).await;

  // Disconnect on success and failure alike.
  if let Err(e) = store.close().await {
    tracing::warn!("failed to close store cleanly: {e}");
  }

  match result.context("seeding failed")? {
    SeedOutcome::AlreadySeeded { user_id } => {
      tracing::info!(%user_id, "nothing to do");
    }
    SeedOutcome::Created { user_id, counts } => {
      tracing::info!(%user_id, "benchmark user created");
      tracing::info!("created related rows: {counts}");
    }
  }

  tracing::info!("seeding completed");
  Ok(())
}
