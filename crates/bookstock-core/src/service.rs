//! Inventory service: the operation surface used by the presentation shell.
//!
//! Each operation validates raw input, delegates to a `BookStore`, and turns
//! any failure into an `ErrorReport`. No records are cached between calls;
//! every read goes back to storage.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::{ErrorReport, InventoryError, Outcome, Result};
use crate::samples::{sample_books, SeedReport};
use crate::stats::InventoryStats;
use crate::storage::{Book, BookStore, SqliteStorage};
use crate::validation::{normalize_genre, parse_id, parse_price, parse_quantity, BookDraft};

/// Books sharing one genre.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shelf {
    pub genre: Option<String>,
    pub books: Vec<Book>,
}

/// Bookstore inventory backed by a `BookStore`.
pub struct Inventory<S: BookStore = SqliteStorage> {
    store: S,
}

impl Inventory<SqliteStorage> {
    /// Open the SQLite store at `path`, creating it if needed.
    pub fn open(path: &Path) -> Outcome<Self> {
        let store = SqliteStorage::open(path)?;
        Self::new(store)
    }

    /// Open an isolated in-memory inventory.
    pub fn open_in_memory() -> Outcome<Self> {
        let store = SqliteStorage::open_in_memory()?;
        Self::new(store)
    }
}

impl<S: BookStore> Inventory<S> {
    /// Wrap a store, making sure its schema exists.
    pub fn new(store: S) -> Outcome<Self> {
        store.initialize()?;
        Ok(Self { store })
    }

    /// Validate a draft and insert it as a new record.
    pub fn add_book(&mut self, draft: &BookDraft) -> Outcome<Book> {
        let result = self.insert_draft(draft);
        if let Ok(book) = &result {
            info!(id = book.id, title = %book.title, "added book");
        }
        report("add_book", result)
    }

    /// Remove a record, returning what was removed.
    pub fn remove_book(&mut self, id: &str) -> Outcome<Book> {
        let result = self.delete_by_raw_id(id);
        if let Ok(book) = &result {
            info!(id = book.id, title = %book.title, "removed book");
        }
        report("remove_book", result)
    }

    /// Look up one record.
    pub fn get_book(&self, id: &str) -> Outcome<Book> {
        let result = parse_id(id)
            .map_err(InventoryError::from)
            .and_then(|id| self.store.get_by_id(id));
        report("get_book", result)
    }

    /// Replace the stock quantity of a record, returning the updated record.
    pub fn set_quantity(&mut self, id: &str, quantity: &str) -> Outcome<Book> {
        let result = self.update_quantity(id, quantity);
        if let Ok(book) = &result {
            info!(id = book.id, quantity = book.quantity, "set quantity");
        }
        report("set_quantity", result)
    }

    /// Replace the unit price of a record, returning the updated record.
    pub fn set_price(&mut self, id: &str, price: &str) -> Outcome<Book> {
        let result = self.update_price(id, price);
        if let Ok(book) = &result {
            info!(id = book.id, price = book.price, "set price");
        }
        report("set_price", result)
    }

    /// Books matching a title/author fragment or an exact id.
    ///
    /// No match is not an error; the result is simply empty.
    pub fn find_books(&self, term: &str) -> Outcome<Vec<Book>> {
        report("find_books", self.store.search(term).collect())
    }

    /// Every book, ascending id.
    pub fn list_all(&self) -> Outcome<Vec<Book>> {
        report("list_all", self.store.scan_all().collect())
    }

    /// Books with exactly this genre; a blank genre lists books without one.
    pub fn list_by_genre(&self, genre: &str) -> Outcome<Vec<Book>> {
        let genre = normalize_genre(Some(genre));
        report(
            "list_by_genre",
            self.store.scan_by_genre(genre.as_deref()).collect(),
        )
    }

    /// Every book grouped by genre, genres in sorted order.
    pub fn shelves(&self) -> Outcome<Vec<Shelf>> {
        let result = self.store.scan_all().try_fold(
            BTreeMap::<Option<String>, Vec<Book>>::new(),
            |mut shelves, book| {
                let book = book?;
                shelves.entry(book.genre.clone()).or_default().push(book);
                Ok::<_, InventoryError>(shelves)
            },
        );

        report(
            "shelves",
            result.map(|shelves| {
                shelves
                    .into_iter()
                    .map(|(genre, books)| Shelf { genre, books })
                    .collect()
            }),
        )
    }

    /// Summary statistics recomputed from current storage.
    pub fn statistics(&self) -> Outcome<InventoryStats> {
        report("statistics", InventoryStats::collect(self.store.scan_all()))
    }

    /// Insert the demo catalog, leaving already-present ids untouched.
    pub fn seed_samples(&mut self) -> Outcome<SeedReport> {
        let mut seeded = SeedReport::default();
        for book in sample_books() {
            match self.store.insert(&book) {
                Ok(()) => seeded.added.push(book.id),
                Err(InventoryError::DuplicateKey(id)) => seeded.skipped.push(id),
                Err(err) => return report("seed_samples", Err(err)),
            }
        }
        info!(
            added = seeded.added.len(),
            skipped = seeded.skipped.len(),
            "seeded sample catalog"
        );
        Ok(seeded)
    }

    /// Release the store.
    pub fn close(self) -> Outcome<()> {
        report("close", self.store.close())
    }

    fn insert_draft(&mut self, draft: &BookDraft) -> Result<Book> {
        let book = draft.validate()?;
        self.store.insert(&book)?;
        self.store.get_by_id(book.id)
    }

    fn delete_by_raw_id(&mut self, id: &str) -> Result<Book> {
        let id = parse_id(id)?;
        let book = self.store.get_by_id(id)?;
        self.store.delete(id)?;
        Ok(book)
    }

    fn update_quantity(&mut self, id: &str, quantity: &str) -> Result<Book> {
        let id = parse_id(id)?;
        let quantity = parse_quantity(quantity)?;
        self.store.update_quantity(id, quantity)?;
        self.store.get_by_id(id)
    }

    fn update_price(&mut self, id: &str, price: &str) -> Result<Book> {
        let id = parse_id(id)?;
        let price = parse_price(price)?;
        self.store.update_price(id, price)?;
        self.store.get_by_id(id)
    }
}

fn report<T>(operation: &'static str, result: Result<T>) -> Outcome<T> {
    result.map_err(|err| {
        warn!(operation, kind = %err.kind(), error = %err, "operation rejected");
        ErrorReport::from(err)
    })
}
