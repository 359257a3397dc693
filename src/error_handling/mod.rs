//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions for initialization and export
//! - Skip-and-continue event counters (errors and warnings)
//! - Retry strategy configuration for page fetches
//! - Fetch error categorization
//!
//! Nothing in the extraction or domain pipeline aborts a run. Failures that
//! are absorbed locally are counted here instead:
//! - **Errors**: a page that produced no content, a probe that failed
//! - **Warnings**: a listing or field that was dropped during validation

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, get_retry_strategy};
pub use stats::ProcessingStats;
pub use types::{ErrorType, ExportError, InitializationError, WarningType};
