//! `bench` — measure the latency of one cascading delete of the seeded
//! benchmark subject.
//!
//! Takes no arguments. `DATABASE_URL` must point at the store; run the
//! `seed` binary first. The subject and all its related rows are
//! permanently removed; there is no rollback path.

use anyhow::Context as _;
use roster_bench::{bench::run_benchmark, config::Config};
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

  let result = run_benchmark(&store).await;

  // Disconnect on success and failure alike.
  if let Err(e) = store.close().await {
    tracing::warn!("failed to close store cleanly: {e}");
  }

  let report = result.context("benchmark failed")?;

  tracing::info!(
    "cascade delete took {:.3} ms",
    report.elapsed.as_secs_f64() * 1000.0,
  );

  if report.counts_after.is_zero() {
    tracing::info!("verified: no related rows remain for the deleted user");
  } else {
    tracing::warn!(
      "related rows survived the cascade: {}",
      report.counts_after,
    );
  }

  tracing::info!("benchmark completed");
  Ok(())
}
