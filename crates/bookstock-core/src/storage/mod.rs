//! Storage abstraction layer.
//!
//! This module defines the `BookStore` trait and its SQLite implementation.

pub mod sqlite;
pub mod traits;
pub mod types;

pub use sqlite::SqliteStorage;
pub use traits::{BookIter, BookStore};
pub use types::{Book, ScanFilter, SearchTerm};
