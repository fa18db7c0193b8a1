//! Text and table output formatting.

use bookstock_core::{sum_units, Book, InventoryStats, Shelf};

use crate::ui::format::count_noun;
use crate::ui::{format_genre, format_price, kv, table, truncate, Column, UiContext};

const TITLE_WIDTH: usize = 40;

const BOOK_COLUMNS: [Column; 7] = [
    Column::numeric("ID"),
    Column::new("Title"),
    Column::new("Author"),
    Column::new("Genre"),
    Column::numeric("Qty"),
    Column::numeric("Price"),
    Column::numeric("Value"),
];

fn book_row(book: &Book, currency: &str) -> Vec<String> {
    vec![
        book.id.to_string(),
        truncate(&book.title, TITLE_WIDTH),
        truncate(&book.author, TITLE_WIDTH),
        format_genre(book.genre.as_deref()).to_string(),
        book.quantity.to_string(),
        format_price(book.price, currency),
        format_price(book.stock_value(), currency),
    ]
}

/// Table of books followed by a one-line summary.
///
/// Returns `empty` unchanged when there is nothing to show.
pub fn render_book_list(ctx: &UiContext, books: &[Book], currency: &str, empty: &str) -> String {
    if books.is_empty() {
        return empty.to_string();
    }
    let rows: Vec<Vec<String>> = books.iter().map(|b| book_row(b, currency)).collect();
    let units = sum_units(books);
    let value: f64 = books.iter().map(Book::stock_value).sum();
    format!(
        "{}\n{} | {} | {}",
        table(ctx, &BOOK_COLUMNS, &rows),
        count_noun(books.len(), "title", "titles"),
        count_noun(units, "unit", "units"),
        kv(ctx, "Value", &format_price(value, currency)),
    )
}

/// Field-by-field view of one book.
pub fn render_book_detail(ctx: &UiContext, book: &Book, currency: &str) -> String {
    [
        kv(ctx, "ID", &book.id.to_string()),
        kv(ctx, "Title", &book.title),
        kv(ctx, "Author", &book.author),
        kv(ctx, "Genre", format_genre(book.genre.as_deref())),
        kv(ctx, "Quantity", &book.quantity.to_string()),
        kv(ctx, "Price", &format_price(book.price, currency)),
        kv(ctx, "Stock Value", &format_price(book.stock_value(), currency)),
    ]
    .join("\n")
}

/// Books grouped under one heading per genre.
pub fn render_shelves(ctx: &UiContext, shelves: &[Shelf], currency: &str) -> String {
    if shelves.is_empty() {
        return "No books in inventory".to_string();
    }
    let columns = [
        Column::numeric("ID"),
        Column::new("Title"),
        Column::new("Author"),
        Column::numeric("Qty"),
        Column::numeric("Price"),
    ];
    shelves
        .iter()
        .map(|shelf| {
            let rows: Vec<Vec<String>> = shelf
                .books
                .iter()
                .map(|b| {
                    vec![
                        b.id.to_string(),
                        truncate(&b.title, TITLE_WIDTH),
                        truncate(&b.author, TITLE_WIDTH),
                        b.quantity.to_string(),
                        format_price(b.price, currency),
                    ]
                })
                .collect();
            format!(
                "{} ({})\n{}",
                format_genre(shelf.genre.as_deref()),
                count_noun(shelf.books.len(), "title", "titles"),
                table(ctx, &columns, &rows)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Summary block for inventory statistics.
pub fn render_stats(ctx: &UiContext, stats: &InventoryStats, currency: &str) -> String {
    if stats.is_empty() {
        return "No books in inventory".to_string();
    }

    let mut lines = vec![
        kv(ctx, "Titles", &stats.total_titles.to_string()),
        kv(ctx, "Units", &stats.total_units.to_string()),
        kv(ctx, "Total Value", &format_price(stats.total_value, currency)),
    ];
    if let Some(avg) = stats.average_price {
        lines.push(kv(ctx, "Average Price", &format_price(avg, currency)));
    }
    if let Some(top) = &stats.top_genre {
        lines.push(kv(
            ctx,
            "Top Genre",
            &format!(
                "{} ({})",
                format_genre(top.genre.as_deref()),
                count_noun(top.titles, "title", "titles")
            ),
        ));
    }
    if let Some(p) = &stats.most_expensive {
        lines.push(kv(
            ctx,
            "Most Expensive",
            &format!("{} ({})", p.title, format_price(p.price, currency)),
        ));
    }
    if let Some(p) = &stats.cheapest {
        lines.push(kv(
            ctx,
            "Cheapest",
            &format!("{} ({})", p.title, format_price(p.price, currency)),
        ));
    }

    let rows: Vec<Vec<String>> = stats
        .genre_counts
        .iter()
        .map(|(genre, titles)| {
            vec![
                format_genre(genre.as_deref()).to_string(),
                titles.to_string(),
            ]
        })
        .collect();
    lines.push(table(
        ctx,
        &[Column::new("Genre"), Column::numeric("Titles")],
        &rows,
    ));

    lines.join("\n")
}
