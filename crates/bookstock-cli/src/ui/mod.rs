//! UI primitives for the Bookstock CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens and color styles
//! - **Render**: Tables, headers, receipts, hints
//! - **Format**: Price, genre and string helpers
//! - **Prompt**: Line input for the interactive menu

mod context;
pub mod format;
mod mode;
pub mod prompt;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

// Re-export commonly used render functions
pub use render::{badge, divider, header, kv, print_error, receipt, table, Column};

// Re-export commonly used format functions
pub use format::{format_genre, format_price, truncate};
