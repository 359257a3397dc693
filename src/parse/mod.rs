//! HTML parsing and company record extraction.
//!
//! This module turns a directory page into company records:
//! - Listing discovery (ordered structural selectors, content fallback)
//! - Field extraction from one listing (name, address, phone, email, website,
//!   booth, industry)
//! - Address block parsing and record validation
//!
//! All parsing is done using CSS selectors via the `scraper` crate. Nothing in
//! here fails: missing data yields `None` fields or skipped listings.

mod address;
mod extract;
mod locate;

// Re-export public API
pub use address::{extract_postal_code, parse_address, ParsedAddress};
pub use extract::{validate_company_record, FieldExtractor};
pub use locate::{locate_listings, LISTING_SELECTORS};

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
