//! Book row type for database queries.

use rusqlite::Row;

use crate::error::{InventoryError, Result};
use crate::storage::types::Book;

/// Column list shared by every `SELECT` against `books`.
pub const BOOK_COLUMNS: &str = "id, title, author, quantity, price, genre";

/// Raw row data from the books table, before checking domain invariants.
#[derive(Debug)]
pub struct BookRow {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub quantity: i64,
    pub price: f64,
    pub genre: Option<String>,
}

impl BookRow {
    /// Map a row selected with `BOOK_COLUMNS`.
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            author: row.get(2)?,
            quantity: row.get(3)?,
            price: row.get(4)?,
            genre: row.get(5)?,
        })
    }
}

impl TryFrom<BookRow> for Book {
    type Error = InventoryError;

    fn try_from(row: BookRow) -> Result<Self> {
        if row.quantity < 0 {
            return Err(InventoryError::Storage(format!(
                "Corrupt row {}: negative quantity {}",
                row.id, row.quantity
            )));
        }
        if !(row.price.is_finite() && row.price >= 0.0) {
            return Err(InventoryError::Storage(format!(
                "Corrupt row {}: invalid price {}",
                row.id, row.price
            )));
        }

        Ok(Book {
            id: row.id,
            title: row.title,
            author: row.author,
            quantity: row.quantity,
            price: row.price,
            genre: row.genre,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(quantity: i64, price: f64) -> BookRow {
        BookRow {
            id: 7,
            title: "El código Da Vinci".to_string(),
            author: "Dan Brown".to_string(),
            quantity,
            price,
            genre: Some("Suspenso".to_string()),
        }
    }

    #[test]
    fn test_valid_row_converts() {
        let book = Book::try_from(row(7, 39.99)).unwrap();
        assert_eq!(book.id, 7);
        assert_eq!(book.genre.as_deref(), Some("Suspenso"));
    }

    #[test]
    fn test_corrupt_rows_are_storage_errors() {
        assert!(matches!(
            Book::try_from(row(-1, 1.0)),
            Err(InventoryError::Storage(_))
        ));
        assert!(matches!(
            Book::try_from(row(1, -0.5)),
            Err(InventoryError::Storage(_))
        ));
    }
}
