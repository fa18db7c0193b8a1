//! Storage engine trait definition.
//!
//! `BookStore` is the seam between the inventory service and persistence.
//! The service only ever talks to this trait, so tests and alternative
//! backends can swap the engine without touching validation or reporting.

use super::types::Book;
use crate::error::Result;

/// Lazy, finite sequence of records produced by a scan.
pub type BookIter<'a> = Box<dyn Iterator<Item = Result<Book>> + 'a>;

/// Storage engine interface for book records.
///
/// All implementations must ensure:
/// - `id` stays unique; inserts never overwrite
/// - every mutation is atomic and touches exactly one record
/// - scans yield records in ascending id order and re-run on every call
pub trait BookStore {
    /// Create the backing table if it does not exist.
    ///
    /// Idempotent; safe to call on every startup.
    fn initialize(&self) -> Result<()>;

    /// Persist a new record.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::DuplicateKey` if the id is already stored.
    fn insert(&mut self, book: &Book) -> Result<()>;

    /// Get a record by id.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::NotFound` if the id is absent.
    fn get_by_id(&self, id: i64) -> Result<Book>;

    /// Replace the stock quantity of one record.
    fn update_quantity(&mut self, id: i64, quantity: i64) -> Result<()>;

    /// Replace the unit price of one record.
    fn update_price(&mut self, id: i64, price: f64) -> Result<()>;

    /// Permanently remove one record.
    fn delete(&mut self, id: i64) -> Result<()>;

    /// All records, ascending id.
    fn scan_all(&self) -> BookIter<'_>;

    /// Records whose genre equals `genre` exactly (case-sensitive).
    ///
    /// `None` selects records without a genre.
    fn scan_by_genre(&self, genre: Option<&str>) -> BookIter<'_>;

    /// Records whose title or author contains `term` (case-insensitive), or
    /// whose id equals `term` when it parses as an integer.
    fn search(&self, term: &str) -> BookIter<'_>;

    /// Release the underlying resources, reporting any failure.
    fn close(self) -> Result<()>
    where
        Self: Sized;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_definition_compiles() {
        fn _accepts_book_store<T: BookStore>(_store: T) {}
    }
}
