//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL and seed data (SQLite-first)
//! - `sqlite.rs`: the SQLite-backed [`TriviaRepository`](crate::service::TriviaRepository)

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{Category, NewQuestion, Question};
pub use schema::{SQLITE_INIT, SQLITE_SEED_CATEGORIES};
pub use sqlite::{SqlitePool, SqliteStorage, connect};
