//! Seed and cascade-delete benchmark tooling for the roster user store.
//!
//! Ships two binaries sharing this library:
//!
//! - `seed` — idempotently creates the benchmark fixture (one subject user
//!   plus a fixed set of related rows), bootstrapping an admin first if the
//!   store is empty.
//! - `bench` — finds the fixture, reports per-collection counts, deletes the
//!   subject, and measures wall-clock latency of the cascading delete.
//!
//! The routines are generic over [`roster_core::store::UserStore`]; the
//! binaries wire in [`roster_store_sqlite::SqliteStore`].

pub mod bench;
pub mod config;
pub mod fixture;
pub mod seed;

#[cfg(test)]
mod tests;
