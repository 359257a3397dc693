//! Page-level scraping loop.
//!
//! Fetches directory pages one after another, locates the listings on each
//! and extracts company records. Domain enrichment and export happen in the
//! run module on top of this.

use std::time::Duration;

use scraper::Html;

use crate::fetch::PageFetcher;
use crate::models::CompanyRecord;
use crate::parse::{locate_listings, FieldExtractor};

/// Extracts every company record from one page body.
///
/// Listings without a usable name are skipped; the order of the returned
/// records follows document order.
pub fn parse_listings(
    html: &str,
    source_url: &str,
    extractor: &FieldExtractor,
) -> Vec<CompanyRecord> {
    let document = Html::parse_document(html);
    let listings = locate_listings(&document);
    log::info!("Processing {} potential company elements", listings.len());

    listings
        .iter()
        .filter_map(|element| extractor.extract(element, Some(source_url)))
        .collect()
}

/// Fetches and parses `urls` in order, pausing `delay` between pages.
///
/// A page that cannot be fetched contributes no records; the loop carries on
/// with the next one.
pub async fn scrape_pages(
    fetcher: &dyn PageFetcher,
    extractor: &FieldExtractor,
    urls: &[String],
    delay: Duration,
) -> Vec<CompanyRecord> {
    let total = urls.len();
    let mut companies = Vec::new();

    for (index, url) in urls.iter().enumerate() {
        let page_number = index + 1;
        log::info!("Scraping page {page_number}/{total}: {url}");

        match fetcher.fetch(url).await {
            Some(page) => {
                let found = parse_listings(&page.body, url, extractor);
                log::info!("Found {} companies on page {page_number}", found.len());
                companies.extend(found);
            }
            None => log::error!("No content for page {page_number} ({url})"),
        }

        if page_number < total && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    log::info!(
        "Scraping completed. Total companies found: {}",
        companies.len()
    );
    companies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::ProcessingStats;
    use crate::fetch::PageContent;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// Serves canned bodies and records the request order.
    struct MapFetcher {
        pages: HashMap<String, String>,
        requested: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl PageFetcher for MapFetcher {
        async fn fetch(&self, url: &str) -> Option<PageContent> {
            self.requested
                .lock()
                .expect("lock poisoned")
                .push(url.to_string());
            self.pages.get(url).map(|body| PageContent {
                url: url.to_string(),
                status: 200,
                content_type: None,
                body: body.clone(),
            })
        }
    }

    fn extractor() -> FieldExtractor {
        FieldExtractor::new("https://directory.example/a", Arc::new(ProcessingStats::new()))
    }

    #[test]
    fn test_parse_listings_sets_source_url() {
        let html = r#"
            <div class="company-item"><h3>Alpha GmbH</h3></div>
            <div class="company-item"></div>
            <div class="company-item"><h3>Beta AG</h3></div>"#;
        let records = parse_listings(html, "https://directory.example/b", &extractor());

        let names: Vec<&str> = records.iter().map(|r| r.company_name.as_str()).collect();
        assert_eq!(names, vec!["Alpha GmbH", "Beta AG"]);
        assert!(records
            .iter()
            .all(|r| r.source_url.as_deref() == Some("https://directory.example/b")));
    }

    #[test]
    fn test_parse_listings_empty_page() {
        assert!(parse_listings("", "https://directory.example/a", &extractor()).is_empty());
    }

    #[tokio::test]
    async fn test_scrape_pages_skips_missing_pages() {
        let mut pages = HashMap::new();
        pages.insert(
            "https://directory.example/a".to_string(),
            r#"<div class="company-item"><h3>Alpha GmbH</h3></div>"#.to_string(),
        );
        pages.insert(
            "https://directory.example/c".to_string(),
            r#"<div class="company-item"><h3>Gamma KG</h3></div>"#.to_string(),
        );
        let fetcher = MapFetcher {
            pages,
            requested: Mutex::new(Vec::new()),
        };
        let urls = vec![
            "https://directory.example/a".to_string(),
            "https://directory.example/b".to_string(),
            "https://directory.example/c".to_string(),
        ];

        let records = scrape_pages(&fetcher, &extractor(), &urls, Duration::ZERO).await;

        let names: Vec<&str> = records.iter().map(|r| r.company_name.as_str()).collect();
        assert_eq!(names, vec!["Alpha GmbH", "Gamma KG"]);
        assert_eq!(*fetcher.requested.lock().unwrap(), urls);
    }

    #[tokio::test]
    async fn test_scrape_pages_waits_between_pages_only() {
        let fetcher = MapFetcher {
            pages: HashMap::new(),
            requested: Mutex::new(Vec::new()),
        };
        let urls = vec!["u1".to_string(), "u2".to_string(), "u3".to_string()];

        let delay = Duration::from_millis(200);
        let started = std::time::Instant::now();
        scrape_pages(&fetcher, &extractor(), &urls, delay).await;
        let elapsed = started.elapsed();

        // Two pauses for three pages, none after the last
        assert!(elapsed >= delay * 2, "elapsed {elapsed:?}");
        assert!(elapsed < delay * 3, "elapsed {elapsed:?}");
    }
}
