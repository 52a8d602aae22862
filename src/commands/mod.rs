//! Command implementations for the NFL leaders CLI

pub mod common;
pub mod ingest;
pub mod serve;
