//! Core data types for the storage layer.

use serde::{Deserialize, Serialize};

/// A book record as persisted in the `books` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Caller-supplied primary key
    pub id: i64,

    pub title: String,

    pub author: String,

    /// Units in stock (never negative)
    pub quantity: i64,

    /// Unit price (never negative)
    pub price: f64,

    /// Optional genre label
    pub genre: Option<String>,
}

impl Book {
    /// Stock value of this record (quantity x price).
    pub fn stock_value(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}

/// Row selection applied by a scan.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanFilter {
    /// Every record
    All,

    /// Exact, case-sensitive genre match; `None` selects books without genre
    Genre(Option<String>),

    /// Title/author substring (case-insensitive) or exact id
    Search(SearchTerm),
}

impl ScanFilter {
    pub fn genre(genre: Option<&str>) -> Self {
        ScanFilter::Genre(genre.map(str::to_string))
    }

    pub fn search(term: &str) -> Self {
        ScanFilter::Search(SearchTerm::new(term))
    }

    /// Row-level check for filters that cannot be expressed in SQL.
    pub fn matches(&self, book: &Book) -> bool {
        match self {
            ScanFilter::All => true,
            ScanFilter::Genre(genre) => book.genre == *genre,
            ScanFilter::Search(term) => term.matches(book),
        }
    }
}

/// A prepared search term.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTerm {
    needle: String,
    id: Option<i64>,
}

impl SearchTerm {
    pub fn new(term: &str) -> Self {
        let term = term.trim();
        Self {
            needle: term.to_lowercase(),
            id: term.parse().ok(),
        }
    }

    pub fn matches(&self, book: &Book) -> bool {
        if self.id == Some(book.id) {
            return true;
        }
        book.title.to_lowercase().contains(&self.needle)
            || book.author.to_lowercase().contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: i64, title: &str, author: &str, genre: Option<&str>) -> Book {
        Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            quantity: 1,
            price: 1.0,
            genre: genre.map(str::to_string),
        }
    }

    #[test]
    fn test_stock_value() {
        let mut b = book(1, "Sapiens", "Harari", None);
        b.quantity = 10;
        b.price = 25.5;
        assert_eq!(b.stock_value(), 255.0);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let b = book(1, "Cien años de soledad", "Gabriel García Márquez", None);
        assert!(SearchTerm::new("AÑOS").matches(&b));
        assert!(SearchTerm::new("garcía").matches(&b));
        assert!(!SearchTerm::new("orwell").matches(&b));
    }

    #[test]
    fn test_search_matches_id() {
        let b = book(1984, "Nineteen Eighty-Four", "George Orwell", None);
        assert!(SearchTerm::new(" 1984 ").matches(&b));
        assert!(!SearchTerm::new("1985").matches(&b));
    }

    #[test]
    fn test_genre_filter_is_exact() {
        let b = book(1, "Dune", "Herbert", Some("Ficción"));
        assert!(ScanFilter::genre(Some("Ficción")).matches(&b));
        assert!(!ScanFilter::genre(Some("ficción")).matches(&b));
        assert!(!ScanFilter::genre(None).matches(&b));
    }
}
