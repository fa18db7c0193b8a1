//! SQLite storage backend.
//!
//! Books live in a single `books` table in a local SQLite file. Every
//! mutation is one autocommitted statement, so a record is either fully
//! written or not written at all.

mod row;
mod scan;

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use crate::error::{InventoryError, Result};
use crate::storage::traits::{BookIter, BookStore};
use crate::storage::types::{Book, ScanFilter};

use row::{BookRow, BOOK_COLUMNS};
use scan::{BookScan, DEFAULT_PAGE_SIZE};

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS books (
        id INTEGER PRIMARY KEY,
        title TEXT NOT NULL,
        author TEXT NOT NULL,
        quantity INTEGER NOT NULL CHECK (quantity >= 0),
        price REAL NOT NULL CHECK (price >= 0),
        genre TEXT
    );

    CREATE INDEX IF NOT EXISTS books_genre ON books (genre);
"#;

/// SQLite-backed book store.
pub struct SqliteStorage {
    path: Option<PathBuf>,
    conn: Connection,
    page_size: usize,
}

impl SqliteStorage {
    /// Open (or create) the store at `path` and make sure the schema exists.
    pub fn open(path: &Path) -> Result<Self> {
        crate::fs::ensure_parent_dir(path)?;
        let conn = Connection::open(path)?;
        let storage = Self {
            path: Some(path.to_path_buf()),
            conn,
            page_size: DEFAULT_PAGE_SIZE,
        };
        storage.initialize()?;
        debug!(path = %path.display(), "opened book store");
        Ok(storage)
    }

    /// Open a private in-memory store.
    pub fn open_in_memory() -> Result<Self> {
        let storage = Self {
            path: None,
            conn: Connection::open_in_memory()?,
            page_size: DEFAULT_PAGE_SIZE,
        };
        storage.initialize()?;
        Ok(storage)
    }

    /// Override the number of rows fetched per scan page.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Backing file, or `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn scan(&self, filter: ScanFilter) -> BookIter<'_> {
        Box::new(BookScan::new(&self.conn, filter, self.page_size))
    }

    fn require_changed(changed: usize, id: i64) -> Result<()> {
        if changed == 0 {
            return Err(InventoryError::NotFound(id));
        }
        Ok(())
    }
}

fn is_primary_key_conflict(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                || e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

impl BookStore for SqliteStorage {
    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    fn insert(&mut self, book: &Book) -> Result<()> {
        let result = self.conn.execute(
            "INSERT INTO books (id, title, author, quantity, price, genre) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                book.id,
                book.title,
                book.author,
                book.quantity,
                book.price,
                book.genre
            ],
        );

        match result {
            Ok(_) => {
                debug!(id = book.id, "inserted book");
                Ok(())
            }
            Err(err) if is_primary_key_conflict(&err) => Err(InventoryError::DuplicateKey(book.id)),
            Err(err) => Err(err.into()),
        }
    }

    fn get_by_id(&self, id: i64) -> Result<Book> {
        let sql = format!("SELECT {} FROM books WHERE id = ?1", BOOK_COLUMNS);
        let row = self
            .conn
            .query_row(&sql, [id], BookRow::from_row)
            .optional()?
            .ok_or(InventoryError::NotFound(id))?;
        Book::try_from(row)
    }

    fn update_quantity(&mut self, id: i64, quantity: i64) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE books SET quantity = ?1 WHERE id = ?2",
            params![quantity, id],
        )?;
        Self::require_changed(changed, id)?;
        debug!(id, quantity, "updated quantity");
        Ok(())
    }

    fn update_price(&mut self, id: i64, price: f64) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE books SET price = ?1 WHERE id = ?2",
            params![price, id],
        )?;
        Self::require_changed(changed, id)?;
        debug!(id, price, "updated price");
        Ok(())
    }

    fn delete(&mut self, id: i64) -> Result<()> {
        let changed = self.conn.execute("DELETE FROM books WHERE id = ?1", [id])?;
        Self::require_changed(changed, id)?;
        debug!(id, "deleted book");
        Ok(())
    }

    fn scan_all(&self) -> BookIter<'_> {
        self.scan(ScanFilter::All)
    }

    fn scan_by_genre(&self, genre: Option<&str>) -> BookIter<'_> {
        self.scan(ScanFilter::genre(genre))
    }

    fn search(&self, term: &str) -> BookIter<'_> {
        self.scan(ScanFilter::search(term))
    }

    fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, err)| InventoryError::from(err))
    }
}
