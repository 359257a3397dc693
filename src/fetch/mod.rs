//! Directory page retrieval.
//!
//! This module provides:
//! - The `PageFetcher` seam and its HTTP implementation with bounded retries
//! - Pagination link discovery from the first directory page
//! - A connectivity test that reports what one page fetch and parse yields
//!
//! A fetch never returns an error: once the retry budget is spent the page
//! is reported as missing and the failure is counted in `ProcessingStats`.

mod diagnostics;
mod pagination;
mod request;

use async_trait::async_trait;

// Re-export public API
pub use diagnostics::{test_scraping, ScrapeDiagnostics};
pub use pagination::{discover_pagination_urls, extract_pagination_links};
pub use request::HttpFetcher;

/// A fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    /// Final URL after redirects
    pub url: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

/// Retrieves page bodies by URL.
///
/// `None` means "no content": the page could not be fetched within the
/// implementation's retry budget.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Option<PageContent>;
}
