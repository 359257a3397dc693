//! Run reporting helpers.
//!
//! This module provides progress logging and the end-of-run summaries
//! (processing counters, domain statistics, connectivity diagnostics).

pub mod logging;
pub mod statistics;

// Re-export public API
pub use logging::log_progress;
pub use statistics::{print_diagnostics, print_domain_statistics, print_error_statistics};
