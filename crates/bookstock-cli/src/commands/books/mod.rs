//! Single-book commands: add, remove, update and show.

mod add;
mod remove;
mod show;
mod update;

pub use add::handle_add;
pub use remove::handle_remove;
pub use show::handle_show;
pub use update::{handle_set_price, handle_set_quantity};
