//! Core types and trait definitions for the roster user store.
//!
//! This crate is deliberately free of database dependencies. The store
//! backends (e.g. `roster-store-sqlite`) and the seed/benchmark tooling
//! (`roster-bench`) both depend on it; it depends on nothing proprietary.

pub mod related;
pub mod store;
pub mod user;
