//! # Bookstock Core
//!
//! Core library for Bookstock - a single-user inventory tracker for a
//! bookstore, backed by a local SQLite file.
//!
//! This crate owns the record schema, validation, storage and aggregate
//! statistics, independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **storage**: `BookStore` trait and the SQLite implementation
//! - **validation**: pure field checks run before every mutation
//! - **service**: the `Inventory` operation surface used by the shell
//! - **stats**: summary values recomputed from a fresh scan
//! - **samples**: demo catalog for trying out a new store

pub mod error;
pub mod fs;
pub mod samples;
pub mod service;
pub mod stats;
pub mod storage;
pub mod validation;

pub use error::{ErrorKind, ErrorReport, InventoryError, Outcome, Result};
pub use samples::SeedReport;
pub use service::{Inventory, Shelf};
pub use stats::{sum_units, GenreCount, InventoryStats, PricePoint};
pub use storage::{Book, BookStore, SqliteStorage};
pub use validation::{BookDraft, ValidationError};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
