//! Command handlers, one per subcommand.

pub mod books;
pub mod listing;
pub mod menu;
pub mod misc;
pub mod seed;
pub mod stats;
