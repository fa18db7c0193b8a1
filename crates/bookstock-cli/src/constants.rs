//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure (config, IO, anything without a narrower code).
    pub const FAILURE: i32 = 1;

    /// No book with the requested ID.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// A book with the requested ID already exists.
    pub const DUPLICATE: i32 = 5;

    /// The inventory database could not be read or written.
    pub const STORAGE_FAILED: i32 = 6;
}

/// Name used for config and data directories.
pub const APP_DIR: &str = "bookstock";

/// Default database file name inside the data directory.
pub const STORE_FILE: &str = "inventory.db";

/// Default log filter when neither flag nor config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "error";

/// Default currency symbol for prices.
pub const DEFAULT_CURRENCY: &str = "$";
