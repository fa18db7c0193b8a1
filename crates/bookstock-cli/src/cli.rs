use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use bookstock_core::VERSION;

/// Bookstock - inventory tracker for a bookstore
#[derive(Parser)]
#[command(name = "bookstock")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the inventory database file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub store: Option<String>,

    /// Path to the config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Log filter (e.g. "info", "bookstock_core=debug")
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive numbered menu (default)
    Menu,

    /// Add a new book
    Add(AddArgs),

    /// Remove a book by ID
    Remove(IdArgs),

    /// Set the stock quantity of a book
    SetQuantity(SetQuantityArgs),

    /// Set the unit price of a book
    SetPrice(SetPriceArgs),

    /// Show one book by ID
    Show(ShowArgs),

    /// Search books by title, author or ID
    Search(SearchArgs),

    /// List books, optionally filtered by genre
    List(ListArgs),

    /// List books grouped by genre
    Shelves(JsonArgs),

    /// Show inventory statistics
    Stats(JsonArgs),

    /// Load the sample catalog (existing IDs are kept)
    Seed,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Book ID (whole number, must be unused)
    #[arg(long, allow_hyphen_values = true)]
    pub id: String,

    /// Book title
    #[arg(long)]
    pub title: String,

    /// Book author
    #[arg(long)]
    pub author: String,

    /// Units in stock
    #[arg(long, allow_hyphen_values = true)]
    pub quantity: String,

    /// Unit price
    #[arg(long, allow_hyphen_values = true)]
    pub price: String,

    /// Genre (optional)
    #[arg(long)]
    pub genre: Option<String>,
}

/// Arguments for commands addressing one book
#[derive(Args)]
pub struct IdArgs {
    /// Book ID
    #[arg(value_name = "ID", allow_hyphen_values = true)]
    pub id: String,
}

/// Arguments for the `set-quantity` command
#[derive(Args)]
pub struct SetQuantityArgs {
    /// Book ID
    #[arg(value_name = "ID", allow_hyphen_values = true)]
    pub id: String,

    /// New quantity
    #[arg(value_name = "QUANTITY", allow_hyphen_values = true)]
    pub quantity: String,
}

/// Arguments for the `set-price` command
#[derive(Args)]
pub struct SetPriceArgs {
    /// Book ID
    #[arg(value_name = "ID", allow_hyphen_values = true)]
    pub id: String,

    /// New unit price
    #[arg(value_name = "PRICE", allow_hyphen_values = true)]
    pub price: String,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Book ID
    #[arg(value_name = "ID", allow_hyphen_values = true)]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Title/author fragment or exact ID
    #[arg(value_name = "TERM")]
    pub term: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Only books with exactly this genre (case-sensitive)
    #[arg(long)]
    pub genre: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for read-only commands with JSON output
#[derive(Args)]
pub struct JsonArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}
