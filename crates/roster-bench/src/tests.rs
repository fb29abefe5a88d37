//! End-to-end tests for the seed and benchmark routines against an
//! in-memory SQLite store.

use chrono::NaiveDate;
use roster_core::{
  store::UserStore,
  user::{Gender, NewUser, UserRole},
};
use roster_store_sqlite::{SqliteStore, StoreOptions};

use crate::{
  bench::{BenchError, run_benchmark},
  fixture,
  seed::{SeedError, SeedOutcome, seed_fixture},
};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory(StoreOptions::default())
    .await
    .expect("in-memory store")
}

fn plain_worker(pseudo: &str) -> NewUser {
  NewUser {
    pseudo:               pseudo.to_owned(),
    role:                 UserRole::Worker,
    first_name:           "Grace".into(),
    last_name:            "Hopper".into(),
    gender:               Gender::Female,
    phone:                "0000000000".into(),
    birth_date:           NaiveDate::from_ymd_opt(1992, 12, 9).unwrap(),
    personal_email:       "grace@example.com".into(),
    entry_date:           NaiveDate::from_ymd_opt(2021, 3, 15).unwrap(),
    password_hash:        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".into(),
    is_account_activated: true,
    is_blocked:           false,
  }
}

// ─── Seeding ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn seeding_an_empty_store_bootstraps_an_admin() {
  let s = store().await;

  seed_fixture(&s).await.unwrap();

  let admin = s.find_user_by_role(UserRole::Admin).await.unwrap().unwrap();
  assert_eq!(admin.pseudo, fixture::ADMIN_PSEUDO);
  assert!(admin.password_hash.starts_with("$argon2"));
}

#[tokio::test]
async fn seeding_creates_the_complete_fixture() {
  let s = store().await;

  let outcome = seed_fixture(&s).await.unwrap();
  let SeedOutcome::Created { user_id, counts } = outcome else {
    panic!("expected Created, got {outcome:?}");
  };

  assert_eq!(counts.documents, 2);
  assert_eq!(counts.comments, 2);
  assert_eq!(counts.histories, 1);
  assert_eq!(counts.time_off_periods, 1);
  assert_eq!(counts.absence_reasons, 1);

  // The payload counts match what actually landed in the store.
  assert_eq!(s.related_counts(user_id).await.unwrap(), counts);

  let subject =
    s.find_user_by_pseudo(fixture::BENCH_PSEUDO).await.unwrap().unwrap();
  assert_eq!(subject.user_id, user_id);
  assert_eq!(subject.role, UserRole::Worker);
}

#[tokio::test]
async fn seeding_twice_is_a_noop() {
  let s = store().await;

  let first = seed_fixture(&s).await.unwrap();
  let SeedOutcome::Created { user_id: created_id, counts } = first else {
    panic!("expected Created, got {first:?}");
  };

  let second = seed_fixture(&s).await.unwrap();
  let SeedOutcome::AlreadySeeded { user_id } = second else {
    panic!("expected AlreadySeeded, got {second:?}");
  };

  assert_eq!(user_id, created_id);
  assert_eq!(s.related_counts(user_id).await.unwrap(), counts);
}

#[tokio::test]
async fn seeding_reuses_an_existing_admin() {
  let s = store().await;

  let mut admin = plain_worker("resident_admin");
  admin.role = UserRole::Admin;
  s.create_user(admin).await.unwrap();

  seed_fixture(&s).await.unwrap();

  // No bootstrap admin was created alongside the existing one.
  assert!(
    s.find_user_by_pseudo(fixture::ADMIN_PSEUDO).await.unwrap().is_none()
  );
}

#[tokio::test]
async fn seeding_fails_when_populated_store_has_no_admin() {
  let s = store().await;
  s.create_user(plain_worker("worker_only")).await.unwrap();

  let err = seed_fixture(&s).await.unwrap_err();
  assert!(matches!(err, SeedError::AdminMissing));

  // Nothing was written past the check.
  assert!(
    s.find_user_by_pseudo(fixture::BENCH_PSEUDO).await.unwrap().is_none()
  );
}

// ─── Benchmarking ────────────────────────────────────────────────────────────

#[tokio::test]
async fn benchmark_without_fixture_fails_and_deletes_nothing() {
  let s = store().await;
  let bystander = s.create_user(plain_worker("bystander")).await.unwrap();

  let err = run_benchmark(&s).await.unwrap_err();
  assert!(matches!(err, BenchError::FixtureMissing));

  assert!(
    s.find_user_by_pseudo("bystander").await.unwrap().is_some(),
    "precondition failure must not delete user {}",
    bystander.user_id,
  );
}

#[tokio::test]
async fn benchmark_deletes_the_fixture_and_verifies_the_cascade() {
  let s = store().await;
  seed_fixture(&s).await.unwrap();

  let report = run_benchmark(&s).await.unwrap();

  assert_eq!(report.counts_before.documents, 2);
  assert_eq!(report.counts_before.comments, 2);
  assert_eq!(report.counts_before.histories, 1);
  assert_eq!(report.counts_before.time_off_periods, 1);
  assert_eq!(report.counts_before.absence_reasons, 1);
  assert!(report.counts_after.is_zero());

  assert!(
    s.find_user_by_pseudo(fixture::BENCH_PSEUDO).await.unwrap().is_none()
  );

  // The fixture is gone; a second run hits the precondition check.
  let err = run_benchmark(&s).await.unwrap_err();
  assert!(matches!(err, BenchError::FixtureMissing));
}

#[tokio::test]
async fn seed_and_benchmark_round_trip_leaves_only_the_admin() {
  let s = store().await;
  seed_fixture(&s).await.unwrap();
  run_benchmark(&s).await.unwrap();

  let remaining = s.first_user().await.unwrap().unwrap();
  assert_eq!(remaining.pseudo, fixture::ADMIN_PSEUDO);

  // Re-seeding after a benchmark recreates the fixture.
  let outcome = seed_fixture(&s).await.unwrap();
  assert!(matches!(outcome, SeedOutcome::Created { .. }));
}
