//! Company name to domain candidate derivation.
//!
//! This module provides:
//! - `normalize_company_name()` - raw company name to ASCII slug
//! - `expand_variants()` - slug to a bounded, ordered list of alternative labels
//! - `DomainGenerator` - variants × TLDs with syntax validation and optional probing
//! - `domain_statistics()` - run-level aggregates over enriched records
//!
//! Normalization and expansion are pure and synchronous; only availability
//! probing is async.

mod candidates;
mod slug;
mod statistics;
mod variants;

// Re-export public API
pub use candidates::DomainGenerator;
pub use slug::{normalize_company_name, DIACRITIC_FOLDS, LEGAL_SUFFIXES};
pub use statistics::{domain_statistics, DomainStatistics};
pub use variants::{expand_variants, NUMERIC_SUFFIXES, STOP_WORDS};

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
