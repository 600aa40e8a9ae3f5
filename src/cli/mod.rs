//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `migrate` - Database migrations
//! - `seed` - Load the catalog from a JSON file

pub mod args;

pub use args::{Cli, Commands};
