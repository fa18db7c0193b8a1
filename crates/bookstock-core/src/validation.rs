//! Field validation for book records.
//!
//! Everything here is pure: raw text in, typed values or a specific
//! `ValidationError` out. The inventory service runs these checks before any
//! add or update reaches storage.

use thiserror::Error;

use crate::storage::Book;

/// A single field violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required text field is blank after trimming
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("Quantity must be a non-negative whole number (got \"{input}\")")]
    InvalidQuantity { input: String },

    #[error("Price must be a non-negative number (got \"{input}\")")]
    InvalidPrice { input: String },

    #[error("ID must be a whole number (got \"{input}\")")]
    InvalidId { input: String },
}

/// Trim a required text field, rejecting blanks.
pub fn require_text(field: &'static str, raw: &str) -> Result<String, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(value.to_string())
}

pub fn parse_id(raw: &str) -> Result<i64, ValidationError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidId {
            input: raw.trim().to_string(),
        })
}

/// Parse a stock quantity (whole number, zero allowed).
pub fn parse_quantity(raw: &str) -> Result<i64, ValidationError> {
    let value = raw.trim();
    let quantity = value
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidQuantity {
            input: value.to_string(),
        })?;
    check_quantity(quantity)
}

/// Parse a unit price (finite, zero allowed).
pub fn parse_price(raw: &str) -> Result<f64, ValidationError> {
    let value = raw.trim();
    let price = value
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidPrice {
            input: value.to_string(),
        })?;
    check_price(price)
}

pub fn check_quantity(quantity: i64) -> Result<i64, ValidationError> {
    if quantity < 0 {
        return Err(ValidationError::InvalidQuantity {
            input: quantity.to_string(),
        });
    }
    Ok(quantity)
}

pub fn check_price(price: f64) -> Result<f64, ValidationError> {
    // NaN fails both comparisons, so it lands here too.
    if !(price.is_finite() && price >= 0.0) {
        return Err(ValidationError::InvalidPrice {
            input: price.to_string(),
        });
    }
    Ok(price)
}

/// Genre is free text; blank means "no genre".
pub fn normalize_genre(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Unvalidated book fields as typed by an operator.
#[derive(Debug, Clone, Default)]
pub struct BookDraft {
    pub id: String,
    pub title: String,
    pub author: String,
    pub quantity: String,
    pub price: String,
    pub genre: Option<String>,
}

impl BookDraft {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        quantity: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            quantity: quantity.into(),
            price: price.into(),
            genre: None,
        }
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Check every field, reporting the first violation in field order.
    pub fn validate(&self) -> Result<Book, ValidationError> {
        Ok(Book {
            id: parse_id(&self.id)?,
            title: require_text("Title", &self.title)?,
            author: require_text("Author", &self.author)?,
            quantity: parse_quantity(&self.quantity)?,
            price: parse_price(&self.price)?,
            genre: normalize_genre(self.genre.as_deref()),
        })
    }
}
