//! Output formatting helpers for the CLI.
//!
//! Text renderers return strings so the one-shot commands and the
//! interactive menu can send them to different writers.

mod json;
mod text;

// Re-export public API
pub use json::{book_json, books_json, print_json, shelves_json};
pub use text::{render_book_detail, render_book_list, render_shelves, render_stats};
