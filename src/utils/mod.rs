//! Shared helpers.
//!
//! This module provides:
//! - Field validation (email, URL, domain syntax) and phone normalization
//! - Filename sanitization for export files
//! - CSS selector and regex compilation for static patterns

pub mod sanitize;
mod selector;
mod validation;

pub use sanitize::sanitize_filename;
pub use selector::{compile_regex_unsafe, parse_selector_unsafe};
pub use validation::{normalize_phone_number, validate_domain, validate_email, validate_url};
