//! User — the parent entity every related record hangs off.
//!
//! Users are created and deleted whole; neither the seeder nor the
//! benchmarker ever updates one in place.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a user account is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
  /// Can author comments and history entries on other users' records.
  Admin,
  Worker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
  Male,
  Female,
  Other,
}

/// A persisted user row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  pub user_id:              Uuid,
  /// Unique handle; the benchmark fixture reserves one value of this.
  pub pseudo:               String,
  pub role:                 UserRole,
  pub first_name:           String,
  pub last_name:            String,
  pub gender:               Gender,
  pub phone:                String,
  pub birth_date:           NaiveDate,
  pub personal_email:       String,
  pub entry_date:           NaiveDate,
  /// PHC string (argon2); never a plaintext password.
  pub password_hash:        String,
  pub is_account_activated: bool,
  pub is_blocked:           bool,
  pub created_at:           DateTime<Utc>,
}

/// Insert shape for [`User`]. The store assigns `user_id` and `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
  pub pseudo:               String,
  pub role:                 UserRole,
  pub first_name:           String,
  pub last_name:            String,
  pub gender:               Gender,
  pub phone:                String,
  pub birth_date:           NaiveDate,
  pub personal_email:       String,
  pub entry_date:           NaiveDate,
  pub password_hash:        String,
  pub is_account_activated: bool,
  pub is_blocked:           bool,
}
