//! JSON output formatting for books, shelves and statistics.

use serde::Serialize;

use bookstock_core::{sum_units, Book, Shelf};

/// Convert a book to JSON for output.
pub fn book_json(book: &Book) -> serde_json::Value {
    serde_json::json!({
        "id": book.id,
        "title": book.title,
        "author": book.author,
        "quantity": book.quantity,
        "price": book.price,
        "genre": book.genre,
        "stock_value": book.stock_value(),
    })
}

/// Convert multiple books to a JSON array for output.
pub fn books_json(books: &[Book]) -> Vec<serde_json::Value> {
    books.iter().map(book_json).collect()
}

/// One genre group as it appears in JSON output.
#[derive(Serialize)]
pub struct ShelfJson<'a> {
    genre: Option<&'a str>,
    titles: usize,
    units: i128,
    books: Vec<serde_json::Value>,
}

/// Convert shelves to JSON, one object per genre.
///
/// Unit totals can exceed `i64`, so this stays a typed value and is only
/// turned into text by `print_json`.
pub fn shelves_json(shelves: &[Shelf]) -> Vec<ShelfJson<'_>> {
    shelves
        .iter()
        .map(|shelf| ShelfJson {
            genre: shelf.genre.as_deref(),
            titles: shelf.books.len(),
            units: sum_units(&shelf.books),
            books: books_json(&shelf.books),
        })
        .collect()
}

/// Print any serializable value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let output = serde_json::to_string_pretty(value)
        .map_err(|e| anyhow::anyhow!("Failed to serialize output: {}", e))?;
    println!("{}", output);
    Ok(())
}
