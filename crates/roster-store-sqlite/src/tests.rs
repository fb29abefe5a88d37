//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::NaiveDate;
use roster_core::{
  related::{
    DocumentKind, NewAbsenceReason, NewComment, NewDocument, NewHistoryEntry,
    NewRelatedRecords, NewTimeOffPeriod, TimeOffKind,
  },
  store::UserStore,
  user::{Gender, NewUser, UserRole},
};
use uuid::Uuid;

use crate::{SqliteStore, StoreOptions};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory(StoreOptions::default())
    .await
    .expect("in-memory store")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_user(pseudo: &str, role: UserRole) -> NewUser {
  NewUser {
    pseudo:               pseudo.to_owned(),
    role,
    first_name:           "Ada".into(),
    last_name:            "Lovelace".into(),
    gender:               Gender::Female,
    phone:                "0123456789".into(),
    birth_date:           date(1990, 1, 1),
    personal_email:       "ada@example.com".into(),
    entry_date:           date(2020, 6, 1),
    password_hash:        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".into(),
    is_account_activated: true,
    is_blocked:           false,
  }
}

fn full_related(author_id: Uuid) -> NewRelatedRecords {
  NewRelatedRecords {
    documents:        vec![
      NewDocument {
        kind: DocumentKind::IdentityCard,
        url:  "https://example.com/id.jpg".into(),
      },
      NewDocument {
        kind: DocumentKind::Contract,
        url:  "https://example.com/contract.pdf".into(),
      },
    ],
    comments:         vec![
      NewComment { author_id, message: "first note".into() },
      NewComment { author_id, message: "second note".into() },
    ],
    histories:        vec![NewHistoryEntry {
      author_id,
      message: "record created".into(),
    }],
    time_off_periods: vec![NewTimeOffPeriod {
      start_date:     date(2026, 8, 1),
      end_date:       date(2026, 8, 8),
      kind:           TimeOffKind::PaidTimeOff,
      number_of_days: 7,
      month:          date(2026, 8, 1),
      comment:        "vacation".into(),
    }],
    absence_reasons:  vec![NewAbsenceReason {
      reason:       "medical appointment".into(),
      absence_date: date(2026, 8, 3),
    }],
  }
}

// ─── Users ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_find_by_pseudo() {
  let s = store().await;

  let created = s.create_user(new_user("ada", UserRole::Worker)).await.unwrap();

  let fetched = s.find_user_by_pseudo("ada").await.unwrap().unwrap();
  assert_eq!(fetched.user_id, created.user_id);
  assert_eq!(fetched.pseudo, "ada");
  assert_eq!(fetched.role, UserRole::Worker);
  assert_eq!(fetched.gender, Gender::Female);
  assert_eq!(fetched.birth_date, date(1990, 1, 1));
  assert!(fetched.is_account_activated);
  assert!(!fetched.is_blocked);
}

#[tokio::test]
async fn find_by_pseudo_missing_returns_none() {
  let s = store().await;
  assert!(s.find_user_by_pseudo("nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn first_user_on_empty_store_is_none() {
  let s = store().await;
  assert!(s.first_user().await.unwrap().is_none());
}

#[tokio::test]
async fn first_user_returns_some_once_populated() {
  let s = store().await;
  s.create_user(new_user("ada", UserRole::Worker)).await.unwrap();
  assert!(s.first_user().await.unwrap().is_some());
}

#[tokio::test]
async fn find_user_by_role() {
  let s = store().await;
  s.create_user(new_user("worker_1", UserRole::Worker)).await.unwrap();
  let admin = s.create_user(new_user("admin_1", UserRole::Admin)).await.unwrap();

  let found = s.find_user_by_role(UserRole::Admin).await.unwrap().unwrap();
  assert_eq!(found.user_id, admin.user_id);
  assert_eq!(found.role, UserRole::Admin);
}

#[tokio::test]
async fn duplicate_pseudo_is_rejected() {
  let s = store().await;
  s.create_user(new_user("ada", UserRole::Worker)).await.unwrap();

  let err = s.create_user(new_user("ada", UserRole::Admin)).await.unwrap_err();
  assert!(matches!(err, crate::Error::PseudoTaken(p) if p == "ada"));
}

// ─── Nested writes ───────────────────────────────────────────────────────────

#[tokio::test]
async fn create_with_related_then_count() {
  let s = store().await;
  let admin = s.create_user(new_user("admin_1", UserRole::Admin)).await.unwrap();

  let user = s
    .create_user_with_related(
      new_user("subject", UserRole::Worker),
      full_related(admin.user_id),
    )
    .await
    .unwrap();

  let counts = s.related_counts(user.user_id).await.unwrap();
  assert_eq!(counts.documents, 2);
  assert_eq!(counts.comments, 2);
  assert_eq!(counts.histories, 1);
  assert_eq!(counts.time_off_periods, 1);
  assert_eq!(counts.absence_reasons, 1);
}

#[tokio::test]
async fn nested_write_rolls_back_on_dangling_author() {
  let s = store().await;

  // Author UUID that exists nowhere: the comment insert violates its
  // foreign key, and the whole transaction — parent included — must roll
  // back.
  let err = s
    .create_user_with_related(
      new_user("subject", UserRole::Worker),
      full_related(Uuid::new_v4()),
    )
    .await
    .unwrap_err();
  assert!(matches!(err, crate::Error::Database(_)));

  assert!(s.find_user_by_pseudo("subject").await.unwrap().is_none());
  assert!(s.first_user().await.unwrap().is_none());
}

#[tokio::test]
async fn related_counts_for_unknown_user_are_zero() {
  let s = store().await;
  let counts = s.related_counts(Uuid::new_v4()).await.unwrap();
  assert!(counts.is_zero());
}

// ─── Cascade delete ──────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_cascades_through_all_collections() {
  let s = store().await;
  let admin = s.create_user(new_user("admin_1", UserRole::Admin)).await.unwrap();
  let user = s
    .create_user_with_related(
      new_user("subject", UserRole::Worker),
      full_related(admin.user_id),
    )
    .await
    .unwrap();

  s.delete_user(user.user_id).await.unwrap();

  assert!(s.find_user_by_pseudo("subject").await.unwrap().is_none());
  let counts = s.related_counts(user.user_id).await.unwrap();
  assert!(counts.is_zero(), "expected cascade to clear all rows: {counts}");

  // The author is untouched.
  assert!(s.find_user_by_pseudo("admin_1").await.unwrap().is_some());
}

#[tokio::test]
async fn delete_missing_user_errors() {
  let s = store().await;
  let id = Uuid::new_v4();
  let err = s.delete_user(id).await.unwrap_err();
  assert!(matches!(err, crate::Error::UserNotFound(missing) if missing == id));
}
