//! Roster - a small employee-records CRUD service
//!
//! Roster persists the full employee collection as a single JSON document
//! and exposes it over a simple HTTP API:
//! - List, create, update, and delete employees
//! - Whole-document reads and writes, last writer wins
//! - Pluggable store backend (JSON file or in-memory)

pub mod api;
pub mod config;
pub mod error;
pub mod storage;
pub mod types;

pub use error::{Error, Result};
