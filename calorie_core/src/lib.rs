#![forbid(unsafe_code)]

//! Core domain model and business logic for the kcal calorie tracker.
//!
//! This crate provides:
//! - Domain types (entries, entry kinds, summaries)
//! - The calorie ledger aggregate
//! - Persistence (key-value stores and the typed storage gateway)
//! - Input validation for presentation layers
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod store;
pub mod storage;
pub mod ledger;
pub mod validate;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use storage::Storage;
pub use ledger::Ledger;
