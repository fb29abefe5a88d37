//! SQL schema for the roster SQLite store.
//!
//! Executed once at connection startup. All five child tables reference
//! `users(user_id)` with `ON DELETE CASCADE` — deleting a user is a single
//! statement and the engine removes every related row. The authored tables
//! (`comments`, `histories`) also reference the author without cascade, so
//! deleting a subject never touches the admin who wrote about them.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS users (
    user_id              TEXT PRIMARY KEY,
    pseudo               TEXT NOT NULL UNIQUE,
    role                 TEXT NOT NULL,   -- 'admin' | 'worker'
    first_name           TEXT NOT NULL,
    last_name            TEXT NOT NULL,
    gender               TEXT NOT NULL,   -- 'male' | 'female' | 'other'
    phone                TEXT NOT NULL,
    birth_date           TEXT NOT NULL,   -- ISO 8601 date
    personal_email       TEXT NOT NULL,
    entry_date           TEXT NOT NULL,   -- ISO 8601 date
    password_hash        TEXT NOT NULL,   -- argon2 PHC string
    is_account_activated INTEGER NOT NULL,
    is_blocked           INTEGER NOT NULL,
    created_at           TEXT NOT NULL    -- ISO 8601 UTC; store-assigned
);

CREATE TABLE IF NOT EXISTS documents (
    document_id TEXT PRIMARY KEY,
    user_id     TEXT NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
    kind        TEXT NOT NULL,   -- 'identity_card' | 'contract' | 'other'
    url         TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS comments (
    comment_id TEXT PRIMARY KEY,
    user_id    TEXT NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
    author_id  TEXT NOT NULL REFERENCES users(user_id),
    message    TEXT NOT NULL,
    created_at TEXT NOT NULL
);

-- Linked via user_id, the same column name as every other child table.
CREATE TABLE IF NOT EXISTS histories (
    history_id TEXT PRIMARY KEY,
    user_id    TEXT NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
    author_id  TEXT NOT NULL REFERENCES users(user_id),
    message    TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS time_off_periods (
    period_id      TEXT PRIMARY KEY,
    user_id        TEXT NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
    start_date     TEXT NOT NULL,
    end_date       TEXT NOT NULL,
    kind           TEXT NOT NULL,   -- 'paid_time_off' | 'unpaid_time_off' | 'sick_leave'
    number_of_days INTEGER NOT NULL,
    month          TEXT NOT NULL,   -- first day of the accrual month
    comment        TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS absence_reasons (
    absence_id   TEXT PRIMARY KEY,
    user_id      TEXT NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
    reason       TEXT NOT NULL,
    absence_date TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS documents_user_idx        ON documents(user_id);
CREATE INDEX IF NOT EXISTS comments_user_idx         ON comments(user_id);
CREATE INDEX IF NOT EXISTS histories_user_idx        ON histories(user_id);
CREATE INDEX IF NOT EXISTS time_off_periods_user_idx ON time_off_periods(user_id);
CREATE INDEX IF NOT EXISTS absence_reasons_user_idx  ON absence_reasons(user_id);

PRAGMA user_version = 1;
";
