//! Connectivity test against the directory.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use serde::Serialize;

use crate::config::SAMPLE_COMPANIES_LIMIT;
use crate::models::CompanyRecord;
use crate::parse::FieldExtractor;
use crate::pipeline::parse_listings;
use crate::utils::parse_selector_unsafe;

use super::PageFetcher;

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("title", "TITLE_SELECTOR"));

/// What a single fetch and parse of the directory's first page produced.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScrapeDiagnostics {
    pub success: bool,
    pub url: String,
    pub status_code: Option<u16>,
    pub page_title: Option<String>,
    pub sample_companies_found: usize,
    pub sample_companies: Vec<CompanyRecord>,
    /// Body size in bytes
    pub page_size: usize,
    pub content_type: Option<String>,
    pub error: Option<String>,
}

/// Fetches `base_url` once and reports what the parser finds on it.
pub async fn test_scraping(
    fetcher: &dyn PageFetcher,
    extractor: &FieldExtractor,
    base_url: &str,
) -> ScrapeDiagnostics {
    log::info!("Running scraping test against {base_url}");

    let Some(page) = fetcher.fetch(base_url).await else {
        return ScrapeDiagnostics {
            success: false,
            url: base_url.to_string(),
            error: Some(format!("Could not connect to {base_url}")),
            ..Default::default()
        };
    };

    let page_title = page_title(&page.body);
    let companies = parse_listings(&page.body, base_url, extractor);

    ScrapeDiagnostics {
        success: true,
        url: base_url.to_string(),
        status_code: Some(page.status),
        page_title,
        sample_companies_found: companies.len(),
        sample_companies: companies.into_iter().take(SAMPLE_COMPANIES_LIMIT).collect(),
        page_size: page.body.len(),
        content_type: page.content_type,
        error: None,
    }
}

fn page_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|title| title.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::ProcessingStats;
    use crate::fetch::PageContent;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct StaticFetcher(Option<&'static str>);

    #[async_trait]
    impl PageFetcher for StaticFetcher {
        async fn fetch(&self, url: &str) -> Option<PageContent> {
            self.0.map(|body| PageContent {
                url: url.to_string(),
                status: 200,
                content_type: Some("text/html".to_string()),
                body: body.to_string(),
            })
        }
    }

    const BASE: &str = "https://directory.example/a";

    fn extractor() -> FieldExtractor {
        FieldExtractor::new(BASE, Arc::new(ProcessingStats::new()))
    }

    #[tokio::test]
    async fn test_scraping_reports_samples() {
        let body = r#"
            <html><head><title> Exhibitors A </title></head><body>
              <div class="company-item"><h3>Alpha GmbH</h3></div>
              <div class="company-item"><h3>Beta AG</h3></div>
              <div class="company-item"><h3>Gamma KG</h3></div>
              <div class="company-item"><h3>Delta Ltd.</h3></div>
            </body></html>"#;
        let fetcher = StaticFetcher(Some(body));
        let diagnostics = test_scraping(&fetcher, &extractor(), BASE).await;

        assert!(diagnostics.success);
        assert_eq!(diagnostics.status_code, Some(200));
        assert_eq!(diagnostics.page_title.as_deref(), Some("Exhibitors A"));
        assert_eq!(diagnostics.sample_companies_found, 4);
        assert_eq!(diagnostics.sample_companies.len(), SAMPLE_COMPANIES_LIMIT);
        assert_eq!(diagnostics.sample_companies[0].company_name, "Alpha GmbH");
        assert_eq!(diagnostics.page_size, body.len());
        assert!(diagnostics.error.is_none());
    }

    #[tokio::test]
    async fn test_scraping_reports_connection_failure() {
        let fetcher = StaticFetcher(None);
        let diagnostics = test_scraping(&fetcher, &extractor(), BASE).await;

        assert!(!diagnostics.success);
        assert_eq!(diagnostics.url, BASE);
        assert!(diagnostics.error.is_some());
        assert_eq!(diagnostics.sample_companies_found, 0);
    }

    #[tokio::test]
    async fn test_scraping_without_title() {
        let fetcher = StaticFetcher(Some("<html><body></body></html>"));
        let diagnostics = test_scraping(&fetcher, &extractor(), BASE).await;
        assert!(diagnostics.success);
        assert_eq!(diagnostics.page_title, None);
        assert_eq!(diagnostics.sample_companies_found, 0);
    }
}
