//! Environment-sourced configuration, populated once at startup.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  /// The single required key is absent. Checked before any store
  /// connection is attempted.
  #[error("DATABASE_URL environment variable is not set")]
  MissingDatabaseUrl,

  #[error("configuration error: {0}")]
  Source(#[from] config::ConfigError),
}

#[derive(Debug, Clone)]
pub struct Config {
  /// Connection string for the store; for the SQLite backend this is a
  /// filesystem path, optionally prefixed with `sqlite://`.
  pub database_url: String,
}

impl Config {
  /// Load from the process environment.
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_source(config::Environment::default())
  }

  fn from_source(source: config::Environment) -> Result<Self, ConfigError> {
    let settings = config::Config::builder().add_source(source).build()?;

    match settings.get_string("database_url") {
      Ok(database_url) => Ok(Self { database_url }),
      Err(config::ConfigError::NotFound(_)) => {
        Err(ConfigError::MissingDatabaseUrl)
      }
      Err(e) => Err(e.into()),
    }
  }

  /// The SQLite database path within the configured URL.
  pub fn database_path(&self) -> &str {
    self
      .database_url
      .strip_prefix("sqlite://")
      .unwrap_or(&self.database_url)
  }
}
