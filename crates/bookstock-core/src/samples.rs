//! Demo catalog for trying out a fresh store.

use crate::storage::Book;

/// (id, title, author, quantity, price, genre)
const SAMPLE_CATALOG: &[(i64, &str, &str, i64, f64, &str)] = &[
    (1, "Cien años de soledad", "Gabriel García Márquez", 15, 45.50, "Ficción"),
    (2, "Don Quijote de la Mancha", "Miguel de Cervantes", 8, 38.00, "Clásico"),
    (3, "1984", "George Orwell", 12, 32.75, "Distopía"),
    (4, "El principito", "Antoine de Saint-Exupéry", 20, 25.90, "Infantil"),
    (5, "Sapiens", "Yuval Noah Harari", 6, 52.00, "Historia"),
    (6, "La sombra del viento", "Carlos Ruiz Zafón", 10, 41.25, "Misterio"),
    (7, "El código Da Vinci", "Dan Brown", 7, 39.99, "Suspenso"),
    (8, "Orgullo y prejuicio", "Jane Austen", 9, 35.50, "Romance"),
];

/// The sample books, in id order.
pub fn sample_books() -> Vec<Book> {
    SAMPLE_CATALOG
        .iter()
        .map(|&(id, title, author, quantity, price, genre)| Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            quantity,
            price,
            genre: Some(genre.to_string()),
        })
        .collect()
}

/// Result of loading the sample catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct SeedReport {
    /// Ids inserted by this run
    pub added: Vec<i64>,

    /// Ids that were already present and left untouched
    pub skipped: Vec<i64>,
}
