//! [`SqliteStore`] — the SQLite implementation of [`UserStore`].

use std::{path::Path, time::Duration};

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use roster_core::{
  related::{NewRelatedRecords, RelatedCounts},
  store::UserStore,
  user::{NewUser, User, UserRole},
};

use crate::{
  encode::{
    RawUser, encode_date, encode_document_kind, encode_dt, encode_gender,
    encode_role, encode_time_off_kind, encode_uuid,
  },
  schema::SCHEMA,
  Error, Result,
};

// ─── Options ─────────────────────────────────────────────────────────────────

/// Connection-level knobs applied once at open.
#[derive(Debug, Clone, Copy)]
pub struct StoreOptions {
  /// Upper bound on how long a statement waits for a locked database
  /// before failing; bounds the cascade-delete transaction.
  pub busy_timeout: Duration,
}

impl Default for StoreOptions {
  fn default() -> Self {
    Self { busy_timeout: Duration::from_secs(45) }
  }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A roster user store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(
    path: impl AsRef<Path>,
    options: StoreOptions,
  ) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init(options).await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory(options: StoreOptions) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init(options).await?;
    Ok(store)
  }

  async fn init(&self, options: StoreOptions) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        conn.busy_timeout(options.busy_timeout)?;
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Explicitly disconnect. The binaries call this on every exit path.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await?;
    Ok(())
  }

  /// Run a single-row user query and decode the result.
  async fn query_one_user(
    &self,
    sql: String,
    params: Vec<String>,
  ) -> Result<Option<User>> {
    let raw: Option<RawUser> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &sql,
              rusqlite::params_from_iter(params.iter()),
              raw_user_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawUser::into_user).transpose()
  }
}

// ─── Row mapping ─────────────────────────────────────────────────────────────

const USER_COLUMNS: &str = "user_id, pseudo, role, first_name, last_name, \
   gender, phone, birth_date, personal_email, entry_date, password_hash, \
   is_account_activated, is_blocked, created_at";

fn raw_user_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawUser> {
  Ok(RawUser {
    user_id:              row.get(0)?,
    pseudo:               row.get(1)?,
    role:                 row.get(2)?,
    first_name:           row.get(3)?,
    last_name:            row.get(4)?,
    gender:               row.get(5)?,
    phone:                row.get(6)?,
    birth_date:           row.get(7)?,
    personal_email:       row.get(8)?,
    entry_date:           row.get(9)?,
    password_hash:        row.get(10)?,
    is_account_activated: row.get(11)?,
    is_blocked:           row.get(12)?,
    created_at:           row.get(13)?,
  })
}

// ─── Insert helpers ──────────────────────────────────────────────────────────

const INSERT_USER_SQL: &str = "INSERT INTO users (
     user_id, pseudo, role, first_name, last_name, gender, phone, birth_date,
     personal_email, entry_date, password_hash, is_account_activated,
     is_blocked, created_at
   ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)";

/// Column-ready strings for one `users` row.
struct EncodedUser {
  user_id:              String,
  pseudo:               String,
  role:                 String,
  first_name:           String,
  last_name:            String,
  gender:               String,
  phone:                String,
  birth_date:           String,
  personal_email:       String,
  entry_date:           String,
  password_hash:        String,
  is_account_activated: bool,
  is_blocked:           bool,
  created_at:           String,
}

impl EncodedUser {
  fn from_user(user: &User) -> Self {
    Self {
      user_id:              encode_uuid(user.user_id),
      pseudo:               user.pseudo.clone(),
      role:                 encode_role(user.role).to_owned(),
      first_name:           user.first_name.clone(),
      last_name:            user.last_name.clone(),
      gender:               encode_gender(user.gender).to_owned(),
      phone:                user.phone.clone(),
      birth_date:           encode_date(user.birth_date),
      personal_email:       user.personal_email.clone(),
      entry_date:           encode_date(user.entry_date),
      password_hash:        user.password_hash.clone(),
      is_account_activated: user.is_account_activated,
      is_blocked:           user.is_blocked,
      created_at:           encode_dt(user.created_at),
    }
  }

  fn insert(&self, conn: &rusqlite::Connection) -> rusqlite::Result<usize> {
    conn.execute(
      INSERT_USER_SQL,
      rusqlite::params![
        self.user_id,
        self.pseudo,
        self.role,
        self.first_name,
        self.last_name,
        self.gender,
        self.phone,
        self.birth_date,
        self.personal_email,
        self.entry_date,
        self.password_hash,
        self.is_account_activated,
        self.is_blocked,
        self.created_at,
      ],
    )
  }
}

/// Assign store-owned identity fields to an insert shape.
fn assign_identity(input: NewUser) -> User {
  User {
    user_id:              Uuid::new_v4(),
    pseudo:               input.pseudo,
    role:                 input.role,
    first_name:           input.first_name,
    last_name:            input.last_name,
    gender:               input.gender,
    phone:                input.phone,
    birth_date:           input.birth_date,
    personal_email:       input.personal_email,
    entry_date:           input.entry_date,
    password_hash:        input.password_hash,
    is_account_activated: input.is_account_activated,
    is_blocked:           input.is_blocked,
    created_at:           Utc::now(),
  }
}

/// Surface `UNIQUE(users.pseudo)` violations as their own error variant.
fn map_pseudo_conflict(e: tokio_rusqlite::Error, pseudo: &str) -> Error {
  if let tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(
    code,
    Some(message),
  )) = &e
    && code.code == rusqlite::ErrorCode::ConstraintViolation
    && message.contains("users.pseudo")
  {
    return Error::PseudoTaken(pseudo.to_owned());
  }
  Error::Database(e)
}

fn count_rows(
  conn: &rusqlite::Connection,
  sql: &str,
  user_id: &str,
) -> rusqlite::Result<u64> {
  let n: i64 = conn.query_row(sql, rusqlite::params![user_id], |r| r.get(0))?;
  Ok(n as u64)
}

// ─── UserStore impl ──────────────────────────────────────────────────────────

impl UserStore for SqliteStore {
  type Error = Error;

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn first_user(&self) -> Result<Option<User>> {
    self
      .query_one_user(
        format!("SELECT {USER_COLUMNS} FROM users LIMIT 1"),
        vec![],
      )
      .await
  }

  async fn find_user_by_pseudo(&self, pseudo: &str) -> Result<Option<User>> {
    self
      .query_one_user(
        format!("SELECT {USER_COLUMNS} FROM users WHERE pseudo = ?1 LIMIT 1"),
        vec![pseudo.to_owned()],
      )
      .await
  }

  async fn find_user_by_role(&self, role: UserRole) -> Result<Option<User>> {
    self
      .query_one_user(
        format!("SELECT {USER_COLUMNS} FROM users WHERE role = ?1 LIMIT 1"),
        vec![encode_role(role).to_owned()],
      )
      .await
  }

  async fn related_counts(&self, user_id: Uuid) -> Result<RelatedCounts> {
    let id_str = encode_uuid(user_id);

    let counts = self
      .conn
      .call(move |conn| {
        Ok(RelatedCounts {
          documents:        count_rows(
            conn,
            "SELECT COUNT(*) FROM documents WHERE user_id = ?1",
            &id_str,
          )?,
          comments:         count_rows(
            conn,
            "SELECT COUNT(*) FROM comments WHERE user_id = ?1",
            &id_str,
          )?,
          histories:        count_rows(
            conn,
            "SELECT COUNT(*) FROM histories WHERE user_id = ?1",
            &id_str,
          )?,
          time_off_periods: count_rows(
            conn,
            "SELECT COUNT(*) FROM time_off_periods WHERE user_id = ?1",
            &id_str,
          )?,
          absence_reasons:  count_rows(
            conn,
            "SELECT COUNT(*) FROM absence_reasons WHERE user_id = ?1",
            &id_str,
          )?,
        })
      })
      .await?;

    Ok(counts)
  }

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn create_user(&self, input: NewUser) -> Result<User> {
    let user = assign_identity(input);
    let encoded = EncodedUser::from_user(&user);

    self
      .conn
      .call(move |conn| {
        encoded.insert(conn)?;
        Ok(())
      })
      .await
      .map_err(|e| map_pseudo_conflict(e, &user.pseudo))?;

    Ok(user)
  }

  async fn create_user_with_related(
    &self,
    input: NewUser,
    related: NewRelatedRecords,
  ) -> Result<User> {
    let user = assign_identity(input);
    let encoded = EncodedUser::from_user(&user);
    let user_id_str = encode_uuid(user.user_id);
    let now_str = encode_dt(Utc::now());

    // Pre-encode all child rows so the closure moves plain strings only.
    let documents: Vec<(String, String, String, String)> = related
      .documents
      .iter()
      .map(|d| {
        (
          encode_uuid(Uuid::new_v4()),
          user_id_str.clone(),
          encode_document_kind(d.kind).to_owned(),
          d.url.clone(),
        )
      })
      .collect();

    let comments: Vec<(String, String, String, String, String)> = related
      .comments
      .iter()
      .map(|c| {
        (
          encode_uuid(Uuid::new_v4()),
          user_id_str.clone(),
          encode_uuid(c.author_id),
          c.message.clone(),
          now_str.clone(),
        )
      })
      .collect();

    let histories: Vec<(String, String, String, String, String)> = related
      .histories
      .iter()
      .map(|h| {
        (
          encode_uuid(Uuid::new_v4()),
          user_id_str.clone(),
          encode_uuid(h.author_id),
          h.message.clone(),
          now_str.clone(),
        )
      })
      .collect();

    #[allow(clippy::type_complexity)]
    let time_off_periods: Vec<(
      String,
      String,
      String,
      String,
      String,
      i64,
      String,
      String,
    )> = related
      .time_off_periods
      .iter()
      .map(|t| {
        (
          encode_uuid(Uuid::new_v4()),
          user_id_str.clone(),
          encode_date(t.start_date),
          encode_date(t.end_date),
          encode_time_off_kind(t.kind).to_owned(),
          i64::from(t.number_of_days),
          encode_date(t.month),
          t.comment.clone(),
        )
      })
      .collect();

    let absence_reasons: Vec<(String, String, String, String)> = related
      .absence_reasons
      .iter()
      .map(|a| {
        (
          encode_uuid(Uuid::new_v4()),
          user_id_str.clone(),
          a.reason.clone(),
          encode_date(a.absence_date),
        )
      })
      .collect();

    self
      .conn
      .call(move |conn| {
        // One transaction; a failing child insert rolls the parent back.
        let tx = conn.transaction()?;

        encoded.insert(&tx)?;

        for (id, uid, kind, url) in &documents {
          tx.execute(
            "INSERT INTO documents (document_id, user_id, kind, url)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![id, uid, kind, url],
          )?;
        }

        for (id, uid, author, message, at) in &comments {
          tx.execute(
            "INSERT INTO comments (comment_id, user_id, author_id, message, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![id, uid, author, message, at],
          )?;
        }

        for (id, uid, author, message, at) in &histories {
          tx.execute(
            "INSERT INTO histories (history_id, user_id, author_id, message, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![id, uid, author, message, at],
          )?;
        }

        for (id, uid, start, end, kind, days, month, comment) in
          &time_off_periods
        {
          tx.execute(
            "INSERT INTO time_off_periods (
               period_id, user_id, start_date, end_date, kind,
               number_of_days, month, comment
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            rusqlite::params![id, uid, start, end, kind, days, month, comment],
          )?;
        }

        for (id, uid, reason, date) in &absence_reasons {
          tx.execute(
            "INSERT INTO absence_reasons (absence_id, user_id, reason, absence_date)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![id, uid, reason, date],
          )?;
        }

        tx.commit()?;
        Ok(())
      })
      .await
      .map_err(|e| map_pseudo_conflict(e, &user.pseudo))?;

    Ok(user)
  }

  async fn delete_user(&self, user_id: Uuid) -> Result<()> {
    let id_str = encode_uuid(user_id);

    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM users WHERE user_id = ?1",
          rusqlite::params![id_str],
        )?)
      })
      .await?;

    if affected == 0 {
      return Err(Error::UserNotFound(user_id));
    }
    Ok(())
  }
}
