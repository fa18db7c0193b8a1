//! Keyset-paginated scans over the books table.
//!
//! A `BookScan` pulls one page of rows at a time (`WHERE id > cursor ORDER BY
//! id LIMIT n`), so a scan only holds a page in memory and each new scan
//! re-reads current state from the database.

use rusqlite::{params, Connection};

use super::row::{BookRow, BOOK_COLUMNS};
use crate::error::Result;
use crate::storage::types::{Book, ScanFilter};

/// Rows fetched per round trip.
pub const DEFAULT_PAGE_SIZE: usize = 64;

/// Lazy iterator over stored books in ascending id order.
pub struct BookScan<'a> {
    conn: &'a Connection,
    filter: ScanFilter,
    page_size: usize,
    cursor: Option<i64>,
    page: std::vec::IntoIter<Book>,
    exhausted: bool,
}

impl<'a> BookScan<'a> {
    pub fn new(conn: &'a Connection, filter: ScanFilter, page_size: usize) -> Self {
        Self {
            conn,
            filter,
            page_size: page_size.max(1),
            cursor: None,
            page: Vec::new().into_iter(),
            exhausted: false,
        }
    }

    fn fetch_page(&mut self) -> Result<Vec<Book>> {
        let limit = self.page_size as i64;

        let rows: Vec<BookRow> = match &self.filter {
            ScanFilter::Genre(Some(genre)) => {
                let sql = format!(
                    "SELECT {} FROM books WHERE (?1 IS NULL OR id > ?1) AND genre = ?3 ORDER BY id LIMIT ?2",
                    BOOK_COLUMNS
                );
                let mut stmt = self.conn.prepare_cached(&sql)?;
                let rows = stmt
                    .query_map(params![self.cursor, limit, genre], BookRow::from_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                rows
            }
            ScanFilter::Genre(None) => {
                let sql = format!(
                    "SELECT {} FROM books WHERE (?1 IS NULL OR id > ?1) AND genre IS NULL ORDER BY id LIMIT ?2",
                    BOOK_COLUMNS
                );
                let mut stmt = self.conn.prepare_cached(&sql)?;
                let rows = stmt
                    .query_map(params![self.cursor, limit], BookRow::from_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                rows
            }
            // Search terms are matched row by row in `next`.
            ScanFilter::All | ScanFilter::Search(_) => {
                let sql = format!(
                    "SELECT {} FROM books WHERE (?1 IS NULL OR id > ?1) ORDER BY id LIMIT ?2",
                    BOOK_COLUMNS
                );
                let mut stmt = self.conn.prepare_cached(&sql)?;
                let rows = stmt
                    .query_map(params![self.cursor, limit], BookRow::from_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                rows
            }
        };

        if rows.len() < self.page_size {
            self.exhausted = true;
        }
        if let Some(last) = rows.last() {
            self.cursor = Some(last.id);
        }

        rows.into_iter().map(Book::try_from).collect()
    }
}

impl Iterator for BookScan<'_> {
    type Item = Result<Book>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(book) = self.page.next() {
                if self.filter.matches(&book) {
                    return Some(Ok(book));
                }
                continue;
            }

            if self.exhausted {
                return None;
            }

            match self.fetch_page() {
                Ok(books) => self.page = books.into_iter(),
                Err(err) => {
                    self.exhausted = true;
                    return Some(Err(err));
                }
            }
        }
    }
}
