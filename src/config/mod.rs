//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, defaults)
//! - HTTP request header table
//! - Configuration structs and CLI option types
//! - The command-line interface definition

mod cli;
mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use cli::{Cli, Command, ScrapeArgs};
pub use types::{Config, DomainConfig, ExportFormat, LogFormat, LogLevel, ScrapeConfig};
