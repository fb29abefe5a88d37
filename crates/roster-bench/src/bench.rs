//! The benchmark routine: time one cascading delete of the seeded subject.

use std::time::{Duration, Instant};

use roster_core::{related::RelatedCounts, store::UserStore};
use thiserror::Error;
use uuid::Uuid;

use crate::fixture;

#[derive(Debug, Error)]
pub enum BenchError<E: std::error::Error + 'static> {
  /// The fixture is absent; the scripts were run out of order. Nothing is
  /// deleted in this case.
  #[error("benchmark user not found; run the `seed` binary first")]
  FixtureMissing,

  #[error("store error: {0}")]
  Store(#[from] E),
}

/// What one benchmark run observed.
#[derive(Debug, Clone, Copy)]
pub struct BenchReport {
  pub user_id:       Uuid,
  /// Related rows in place when the delete was issued.
  pub counts_before: RelatedCounts,
  /// Wall-clock duration of the single delete statement.
  pub elapsed:       Duration,
  /// Related rows left after the delete; all zero when the cascade worked.
  pub counts_after:  RelatedCounts,
}

/// Delete the benchmark subject and measure the cascade.
///
/// The per-collection counts are taken before and after the delete; the
/// delete itself is a single call relying on the store's cascade rule.
pub async fn run_benchmark<S: UserStore>(
  store: &S,
) -> Result<BenchReport, BenchError<S::Error>> {
  let user = store
    .find_user_by_pseudo(fixture::BENCH_PSEUDO)
    .await?
    .ok_or(BenchError::FixtureMissing)?;
  tracing::info!(user_id = %user.user_id, "found benchmark user");

  let counts_before = store.related_counts(user.user_id).await?;
  tracing::info!("related rows to be cascade-deleted: {counts_before}");

  let started = Instant::now();
  store.delete_user(user.user_id).await?;
  let elapsed = started.elapsed();
  tracing::info!(?elapsed, "cascade delete finished");

  let counts_after = store.related_counts(user.user_id).await?;

  Ok(BenchReport {
    user_id: user.user_id,
    counts_before,
    elapsed,
    counts_after,
  })
}
