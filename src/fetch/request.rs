//! HTTP page fetcher with fixed-interval retries.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tokio_retry::Retry;

use crate::config::ScrapeConfig;
use crate::error_handling::{categorize_reqwest_error, get_retry_strategy, ProcessingStats};

use super::{PageContent, PageFetcher};

/// Fetches pages over HTTP.
///
/// Each page gets `retry_attempts` attempts separated by the configured
/// delay. Non-2xx responses count as failed attempts.
pub struct HttpFetcher {
    client: Arc<reqwest::Client>,
    retry_attempts: usize,
    retry_delay: Duration,
    stats: Arc<ProcessingStats>,
}

impl HttpFetcher {
    pub fn new(
        client: Arc<reqwest::Client>,
        config: &ScrapeConfig,
        stats: Arc<ProcessingStats>,
    ) -> Self {
        Self {
            client,
            retry_attempts: config.retry_attempts.max(1),
            retry_delay: config.delay_between_requests,
            stats,
        }
    }

    async fn fetch_once(&self, url: &str) -> Result<PageContent, reqwest::Error> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;

        Ok(PageContent {
            url: final_url,
            status,
            content_type,
            body,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Option<PageContent> {
        let attempts = AtomicUsize::new(0);
        let attempt = &attempts;
        let result = Retry::spawn(
            get_retry_strategy(self.retry_attempts, self.retry_delay),
            || async move {
                let n = attempt.fetch_add(1, Ordering::SeqCst) + 1;
                self.fetch_once(url).await.inspect_err(|e| {
                    log::warn!("Request attempt {n} failed for {url}: {e}");
                })
            },
        )
        .await;

        match result {
            Ok(page) => Some(page),
            Err(e) => {
                log::error!(
                    "All {} attempts failed for {url}: {e}",
                    attempts.load(Ordering::SeqCst)
                );
                self.stats.increment_error(categorize_reqwest_error(&e));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::ErrorType;
    use crate::initialization::init_client;
    use httptest::{matchers::*, responders::*, Expectation, Server};

    fn test_fetcher(stats: Arc<ProcessingStats>) -> HttpFetcher {
        let config = ScrapeConfig {
            request_timeout_seconds: 5,
            retry_attempts: 3,
            delay_between_requests: Duration::from_millis(10),
            ..Default::default()
        };
        let client = init_client(&config).expect("client should build");
        HttpFetcher::new(client, &config, stats)
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/directory")).respond_with(
                status_code(200)
                    .insert_header("Content-Type", "text/html; charset=utf-8")
                    .body("<html><title>Directory</title></html>"),
            ),
        );

        let fetcher = test_fetcher(Arc::new(ProcessingStats::new()));
        let page = fetcher
            .fetch(&server.url_str("/directory"))
            .await
            .expect("page should be fetched");

        assert_eq!(page.status, 200);
        assert_eq!(page.body, "<html><title>Directory</title></html>");
        assert_eq!(
            page.content_type.as_deref(),
            Some("text/html; charset=utf-8")
        );
    }

    #[tokio::test]
    async fn test_fetch_retries_then_gives_up() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/broken"))
                .times(3)
                .respond_with(status_code(500)),
        );

        let stats = Arc::new(ProcessingStats::new());
        let fetcher = test_fetcher(Arc::clone(&stats));
        assert!(fetcher.fetch(&server.url_str("/broken")).await.is_none());
        assert_eq!(stats.get_error_count(ErrorType::PageFetchStatus), 1);
    }

    #[tokio::test]
    async fn test_fetch_recovers_after_failure() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/flaky"))
                .times(2)
                .respond_with(httptest::cycle![
                    status_code(503),
                    status_code(200).body("ok")
                ]),
        );

        let stats = Arc::new(ProcessingStats::new());
        let fetcher = test_fetcher(Arc::clone(&stats));
        let page = fetcher.fetch(&server.url_str("/flaky")).await;
        assert_eq!(page.map(|p| p.body).as_deref(), Some("ok"));
        assert_eq!(stats.total_errors(), 0);
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        // Nothing listens on port 9 on a test machine
        let stats = Arc::new(ProcessingStats::new());
        let fetcher = test_fetcher(Arc::clone(&stats));
        assert!(fetcher.fetch("http://127.0.0.1:9/").await.is_none());
        assert_eq!(stats.total_errors(), 1);
    }
}
