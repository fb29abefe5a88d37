//! The deterministic benchmark fixture: fixed placeholder users and the
//! related-record payload the seeder creates in one nested write.

use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use chrono::{Datelike as _, Days, NaiveDate, Utc};
use rand_core::OsRng;
use roster_core::{
  related::{
    DocumentKind, NewAbsenceReason, NewComment, NewDocument, NewHistoryEntry,
    NewRelatedRecords, NewTimeOffPeriod, TimeOffKind,
  },
  user::{Gender, NewUser, UserRole},
};
use uuid::Uuid;

/// Reserved handle of the benchmark subject. At most one user ever carries
/// it; the seeder skips creation when it is taken.
pub const BENCH_PSEUDO: &str = "bench_subject";

/// Handle of the admin bootstrapped into an empty store.
pub const ADMIN_PSEUDO: &str = "admin_user";

const PLACEHOLDER_PASSWORD: &str = "changeme";

const TIME_OFF_DAYS: u64 = 7;

/// Hash the fixed placeholder password with a fresh salt.
pub fn placeholder_password_hash()
-> Result<String, argon2::password_hash::Error> {
  let salt = SaltString::generate(&mut OsRng);
  Ok(
    Argon2::default()
      .hash_password(PLACEHOLDER_PASSWORD.as_bytes(), &salt)?
      .to_string(),
  )
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// The admin created when the store has no users at all, so authored child
/// records have someone to reference.
pub fn bootstrap_admin(password_hash: String) -> NewUser {
  NewUser {
    pseudo:               ADMIN_PSEUDO.to_owned(),
    role:                 UserRole::Admin,
    first_name:           "Admin".into(),
    last_name:            "User".into(),
    gender:               Gender::Other,
    phone:                "0987654321".into(),
    birth_date:           ymd(1985, 1, 1),
    personal_email:       "admin@example.com".into(),
    entry_date:           Utc::now().date_naive(),
    password_hash,
    is_account_activated: true,
    is_blocked:           false,
  }
}

/// The benchmark subject itself.
pub fn bench_subject(password_hash: String) -> NewUser {
  NewUser {
    pseudo:               BENCH_PSEUDO.to_owned(),
    role:                 UserRole::Worker,
    first_name:           "Test".into(),
    last_name:            "User".into(),
    gender:               Gender::Other,
    phone:                "0123456789".into(),
    birth_date:           ymd(1990, 1, 1),
    personal_email:       "testuser@benchmark.example".into(),
    entry_date:           Utc::now().date_naive(),
    password_hash,
    is_account_activated: true,
    is_blocked:           false,
  }
}

/// Related rows for the benchmark subject: 2 documents, 2 comments and
/// 1 history entry authored by `admin_id`, 1 time-off period spanning the
/// coming week, 1 absence reason dated today.
pub fn bench_related(admin_id: Uuid) -> NewRelatedRecords {
  let today = Utc::now().date_naive();
  let week_out = today.checked_add_days(Days::new(TIME_OFF_DAYS)).unwrap_or(today);
  let month_start = today.with_day(1).unwrap_or(today);

  NewRelatedRecords {
    documents:        vec![
      NewDocument {
        kind: DocumentKind::IdentityCard,
        url:  "https://example.com/bench-identity.jpg".into(),
      },
      NewDocument {
        kind: DocumentKind::Contract,
        url:  "https://example.com/bench-contract.pdf".into(),
      },
    ],
    comments:         vec![
      NewComment {
        author_id: admin_id,
        message:   "benchmark comment 1".into(),
      },
      NewComment {
        author_id: admin_id,
        message:   "benchmark comment 2".into(),
      },
    ],
    histories:        vec![NewHistoryEntry {
      author_id: admin_id,
      message:   "benchmark subject seeded".into(),
    }],
    time_off_periods: vec![NewTimeOffPeriod {
      start_date:     today,
      end_date:       week_out,
      kind:           TimeOffKind::PaidTimeOff,
      number_of_days: TIME_OFF_DAYS as u32,
      month:          month_start,
      comment:        "Vacation".into(),
    }],
    absence_reasons:  vec![NewAbsenceReason {
      reason:       "Medical appointment".into(),
      absence_date: today,
    }],
  }
}
