//! The seeding routine: ensure the benchmark fixture exists, exactly once.

use roster_core::{related::RelatedCounts, store::UserStore, user::UserRole};
use thiserror::Error;
use uuid::Uuid;

use crate::fixture;

#[derive(Debug, Error)]
pub enum SeedError<E: std::error::Error + 'static> {
  /// The store has users but none with the admin role, so authored child
  /// records have no one to reference. Signals an unexpected dataset, not
  /// a transient condition.
  #[error("no admin user available to author comments and histories")]
  AdminMissing,

  #[error("failed to hash the placeholder password: {0}")]
  PasswordHash(argon2::password_hash::Error),

  #[error("store error: {0}")]
  Store(#[from] E),
}

#[derive(Debug, Clone, Copy)]
pub enum SeedOutcome {
  /// The reserved handle was already taken; nothing was written.
  AlreadySeeded { user_id: Uuid },
  /// The subject and all related rows were created in one transaction.
  Created { user_id: Uuid, counts: RelatedCounts },
}

/// Idempotently create the benchmark fixture.
///
/// Running this twice leaves exactly one subject with the reserved handle
/// and one set of related rows; the second run is a no-op.
pub async fn seed_fixture<S: UserStore>(
  store: &S,
) -> Result<SeedOutcome, SeedError<S::Error>> {
  if store.first_user().await?.is_none() {
    tracing::info!("store is empty; bootstrapping an admin user");
    let hash = fixture::placeholder_password_hash()
      .map_err(SeedError::PasswordHash)?;
    store.create_user(fixture::bootstrap_admin(hash)).await?;
  }

  let admin = store
    .find_user_by_role(UserRole::Admin)
    .await?
    .ok_or(SeedError::AdminMissing)?;

  if let Some(existing) =
    store.find_user_by_pseudo(fixture::BENCH_PSEUDO).await?
  {
    tracing::info!(
      user_id = %existing.user_id,
      "benchmark user already exists; skipping creation",
    );
    return Ok(SeedOutcome::AlreadySeeded { user_id: existing.user_id });
  }

  let hash =
    fixture::placeholder_password_hash().map_err(SeedError::PasswordHash)?;
  let related = fixture::bench_related(admin.user_id);
  let counts = related.counts();

  let user = store
    .create_user_with_related(fixture::bench_subject(hash), related)
    .await?;

  Ok(SeedOutcome::Created { user_id: user.user_id, counts })
}
