//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings, calendar dates as ISO 8601
//! (`YYYY-MM-DD`), UUIDs as hyphenated lowercase strings, and enums as the
//! snake-case strings the schema comments list.

use chrono::{DateTime, NaiveDate, Utc};
use roster_core::{
  related::{DocumentKind, TimeOffKind},
  user::{Gender, User, UserRole},
};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── Timestamps & dates ──────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::Decode(format!("timestamp {s:?}: {e}")))
}

pub fn encode_date(d: NaiveDate) -> String { d.to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  s.parse()
    .map_err(|e| Error::Decode(format!("date {s:?}: {e}")))
}

// ─── UserRole ────────────────────────────────────────────────────────────────

pub fn encode_role(r: UserRole) -> &'static str {
  match r {
    UserRole::Admin => "admin",
    UserRole::Worker => "worker",
  }
}

pub fn decode_role(s: &str) -> Result<UserRole> {
  match s {
    "admin" => Ok(UserRole::Admin),
    "worker" => Ok(UserRole::Worker),
    other => Err(Error::Decode(format!("unknown role: {other:?}"))),
  }
}

// ─── Gender ──────────────────────────────────────────────────────────────────

pub fn encode_gender(g: Gender) -> &'static str {
  match g {
    Gender::Male => "male",
    Gender::Female => "female",
    Gender::Other => "other",
  }
}

pub fn decode_gender(s: &str) -> Result<Gender> {
  match s {
    "male" => Ok(Gender::Male),
    "female" => Ok(Gender::Female),
    "other" => Ok(Gender::Other),
    other => Err(Error::Decode(format!("unknown gender: {other:?}"))),
  }
}

// ─── Child enums (write-only: the workflow never reads children back) ────────

pub fn encode_document_kind(k: DocumentKind) -> &'static str {
  match k {
    DocumentKind::IdentityCard => "identity_card",
    DocumentKind::Contract => "contract",
    DocumentKind::Other => "other",
  }
}

pub fn encode_time_off_kind(k: TimeOffKind) -> &'static str {
  match k {
    TimeOffKind::PaidTimeOff => "paid_time_off",
    TimeOffKind::UnpaidTimeOff => "unpaid_time_off",
    TimeOffKind::SickLeave => "sick_leave",
  }
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `users` row.
pub struct RawUser {
  pub user_id:              String,
  pub pseudo:               String,
  pub role:                 String,
  pub first_name:           String,
  pub last_name:            String,
  pub gender:               String,
  pub phone:                String,
  pub birth_date:           String,
  pub personal_email:       String,
  pub entry_date:           String,
  pub password_hash:        String,
  pub is_account_activated: bool,
  pub is_blocked:           bool,
  pub created_at:           String,
}

impl RawUser {
  pub fn into_user(self) -> Result<User> {
    Ok(User {
      user_id:              decode_uuid(&self.user_id)?,
      pseudo:               self.pseudo,
      role:                 decode_role(&self.role)?,
      first_name:           self.first_name,
      last_name:            self.last_name,
      gender:               decode_gender(&self.gender)?,
      phone:                self.phone,
      birth_date:           decode_date(&self.birth_date)?,
      personal_email:       self.personal_email,
      entry_date:           decode_date(&self.entry_date)?,
      password_hash:        self.password_hash,
      is_account_activated: self.is_account_activated,
      is_blocked:           self.is_blocked,
      created_at:           decode_dt(&self.created_at)?,
    })
  }
}
