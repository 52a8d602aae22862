//! Storage layer for leader records.
//!
//! A thin abstraction over SQLite, organized into:
//! - `models`: data structures
//! - `schema`: database connection and schema management
//! - `queries`: upsert and the read paths the query service uses

pub mod models;
pub mod queries;
pub mod schema;


pub use models::*;
pub use schema::LeaderDatabase;
