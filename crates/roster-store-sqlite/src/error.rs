//! Error type for `roster-store-sqlite`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  /// A stored value could not be decoded into its domain type.
  #[error("decode error: {0}")]
  Decode(String),

  /// Attempted to delete a user that does not exist.
  #[error("user not found: {0}")]
  UserNotFound(Uuid),

  /// The unique constraint on `users.pseudo` fired.
  #[error("pseudo already taken: {0:?}")]
  PseudoTaken(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
