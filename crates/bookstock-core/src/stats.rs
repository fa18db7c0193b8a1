//! Aggregate statistics over the live record set.
//!
//! Nothing here is persisted or cached: `InventoryStats::collect` folds a
//! fresh scan every time it is called.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::error::Result;
use crate::storage::Book;

/// A title paired with its unit price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoint {
    pub id: i64,
    pub title: String,
    pub price: f64,
}

impl PricePoint {
    fn of(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            price: book.price,
        }
    }
}

/// Summary of the current inventory.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct InventoryStats {
    /// Number of distinct records
    pub total_titles: usize,

    /// Sum of quantity over all records, widened so any number of
    /// `i64` quantities fits
    pub total_units: i128,

    /// Sum of quantity x price over all records
    pub total_value: f64,

    /// Mean unit price per title
    pub average_price: Option<f64>,

    /// Genre with the most titles
    pub top_genre: Option<GenreCount>,

    pub most_expensive: Option<PricePoint>,

    pub cheapest: Option<PricePoint>,

    /// Titles per genre; `None` collects books without a genre
    #[serde(serialize_with = "serialize_genre_counts")]
    pub genre_counts: BTreeMap<Option<String>, usize>,
}

/// Number of titles filed under one genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreCount {
    pub genre: Option<String>,
    pub titles: usize,
}

// JSON object keys must be strings, so the map goes out as a list of pairs.
fn serialize_genre_counts<S>(
    counts: &BTreeMap<Option<String>, usize>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(counts.iter().map(|(genre, &titles)| GenreCount {
        genre: genre.clone(),
        titles,
    }))
}

/// Total units across `books` without overflowing on large quantities.
pub fn sum_units<'a, I>(books: I) -> i128
where
    I: IntoIterator<Item = &'a Book>,
{
    books.into_iter().map(|book| i128::from(book.quantity)).sum()
}

impl InventoryStats {
    /// Fold a scan into statistics, stopping at the first storage error.
    pub fn collect<I>(books: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<Book>>,
    {
        let mut stats = Self::default();
        let mut price_sum = 0.0;

        for book in books {
            let book = book?;

            stats.total_titles += 1;
            stats.total_units += i128::from(book.quantity);
            stats.total_value += book.stock_value();
            price_sum += book.price;

            // Scans are id-ordered, so strict comparisons keep the lowest id on ties.
            if stats
                .most_expensive
                .as_ref()
                .map_or(true, |top| book.price > top.price)
            {
                stats.most_expensive = Some(PricePoint::of(&book));
            }
            if stats
                .cheapest
                .as_ref()
                .map_or(true, |low| book.price < low.price)
            {
                stats.cheapest = Some(PricePoint::of(&book));
            }

            *stats.genre_counts.entry(book.genre).or_insert(0) += 1;
        }

        if stats.total_titles > 0 {
            stats.average_price = Some(price_sum / stats.total_titles as f64);
        }

        // Ties go to the genre that sorts first.
        stats.top_genre = stats
            .genre_counts
            .iter()
            .fold(None::<GenreCount>, |best, (genre, &titles)| match best {
                Some(best) if best.titles >= titles => Some(best),
                _ => Some(GenreCount {
                    genre: genre.clone(),
                    titles,
                }),
            });

        Ok(stats)
    }

    pub fn is_empty(&self) -> bool {
        self.total_titles == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InventoryError;

    fn book(id: i64, quantity: i64, price: f64, genre: Option<&str>) -> Result<Book> {
        Ok(Book {
            id,
            title: format!("Book {}", id),
            author: "Anon".to_string(),
            quantity,
            price,
            genre: genre.map(str::to_string),
        })
    }

    #[test]
    fn test_empty_inventory() {
        let stats = InventoryStats::collect(Vec::new()).unwrap();
        assert!(stats.is_empty());
        assert_eq!(stats.total_value, 0.0);
        assert_eq!(stats.average_price, None);
        assert_eq!(stats.top_genre, None);
        assert!(stats.most_expensive.is_none());
    }

    #[test]
    fn test_totals() {
        let stats = InventoryStats::collect(vec![
            book(1, 10, 25.5, Some("Ficción")),
            book(2, 4, 10.0, Some("Historia")),
            book(3, 0, 99.0, Some("Ficción")),
        ])
        .unwrap();

        assert_eq!(stats.total_titles, 3);
        assert_eq!(stats.total_units, 14);
        assert_eq!(stats.total_value, 295.0);
        assert_eq!(stats.average_price, Some((25.5 + 10.0 + 99.0) / 3.0));
        assert_eq!(stats.genre_counts.get(&Some("Ficción".to_string())), Some(&2));
        assert_eq!(
            stats.top_genre,
            Some(GenreCount {
                genre: Some("Ficción".to_string()),
                titles: 2
            })
        );
        assert_eq!(stats.most_expensive.as_ref().map(|p| p.id), Some(3));
        assert_eq!(stats.cheapest.as_ref().map(|p| p.id), Some(2));
    }

    #[test]
    fn test_ties_prefer_lowest_id_and_first_genre() {
        let stats = InventoryStats::collect(vec![
            book(1, 1, 5.0, Some("Romance")),
            book(2, 1, 5.0, Some("Misterio")),
            book(3, 1, 5.0, None),
        ])
        .unwrap();

        assert_eq!(stats.most_expensive.as_ref().map(|p| p.id), Some(1));
        assert_eq!(stats.cheapest.as_ref().map(|p| p.id), Some(1));
        // None sorts before any named genre.
        assert_eq!(stats.top_genre.map(|top| top.genre), Some(None));
    }

    #[test]
    fn test_serializes_genre_counts_as_list() {
        let stats = InventoryStats::collect(vec![
            book(1, 2, 3.0, Some("Infantil")),
            book(2, 1, 1.0, None),
        ])
        .unwrap();

        let value = serde_json::to_value(&stats).unwrap();
        let counts = value["genre_counts"].as_array().unwrap();
        assert_eq!(counts.len(), 2);
        assert!(counts[0]["genre"].is_null());
        assert_eq!(counts[1]["genre"], "Infantil");
        assert_eq!(value["total_units"], 3);
    }

    #[test]
    fn test_total_units_exceeding_i64() {
        let stats = InventoryStats::collect(vec![
            book(1, i64::MAX, 0.0, None),
            book(2, i64::MAX, 0.0, None),
            book(3, 1, 0.0, None),
        ])
        .unwrap();
        assert_eq!(stats.total_units, 2 * i128::from(i64::MAX) + 1);

        let books: Vec<Book> = (1..=3)
            .map(|id| book(id, i64::MAX, 1.0, None).unwrap())
            .collect();
        assert_eq!(sum_units(&books), 3 * i128::from(i64::MAX));
    }

    #[test]
    fn test_storage_error_stops_collection() {
        let result = InventoryStats::collect(vec![
            book(1, 1, 1.0, None),
            Err(InventoryError::Storage("disk I/O error".into())),
        ]);
        assert!(matches!(result, Err(InventoryError::Storage(_))));
    }
}
