//! Application-level utilities for the Bookstock CLI.
//!
//! This module provides:
//! - Path resolution for config and store files
//! - The per-run context shared by command handlers

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
