//! End-to-end scrape runs against a local HTTP server.

use std::time::Duration;

use exhibitor_scraper::config::OUTPUT_FIELDS;
use exhibitor_scraper::{run_scrape, run_test, Config, ExportFormat, ScrapeConfig};
use httptest::{matchers::*, responders::*, Expectation, Server};

const PAGE_A: &str = r#"
<html><head><title>Exhibitors A</title></head><body>
  <div class="exhibitor-item">
    <h3 class="company-name">Alpha Maschinen GmbH</h3>
    <p class="address">Hauptstraße 1<br>10115 Berlin</p>
    <p>E-Mail: info@alpha-maschinen.de</p>
    <a href="https://www.alpha-maschinen.example">Website</a>
  </div>
  <div class="exhibitor-item">
    <h3 class="company-name">Beta Kunststoff AG</h3>
  </div>
  <div class="exhibitor-item"></div>
  <div class="pagination"><a href="/directory/b">2</a></div>
</body></html>
"#;

const PAGE_B: &str = r#"
<html><body>
  <div class="exhibitor-item">
    <h3 class="company-name">Gamma Folien KG</h3>
  </div>
</body></html>
"#;

fn scrape_config(server: &Server, dir: &std::path::Path) -> Config {
    Config {
        scrape: ScrapeConfig {
            base_url: server.url_str("/directory/a"),
            request_timeout_seconds: 5,
            retry_attempts: 1,
            delay_between_requests: Duration::ZERO,
            ..Default::default()
        },
        output_dir: dir.to_path_buf(),
        output_file: Some("exhibitors".to_string()),
        include_timestamp: false,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_scrape_follows_pagination_and_exports() {
    let server = Server::run();
    // Fetched for the connectivity check, pagination discovery and extraction
    server.expect(
        Expectation::matching(request::method_path("GET", "/directory/a"))
            .times(3)
            .respond_with(status_code(200).body(PAGE_A)),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/directory/b"))
            .times(1)
            .respond_with(status_code(200).body(PAGE_B)),
    );

    let dir = tempfile::tempdir().expect("tempdir");
    let report = run_scrape(scrape_config(&server, dir.path()))
        .await
        .expect("scrape should succeed");

    assert_eq!(report.pages_visited, 2);
    assert_eq!(report.companies_extracted, 3);
    assert_eq!(report.statistics.total_companies, 3);
    assert_eq!(report.statistics.companies_with_domains, 3);

    let path = report.output_path.expect("records were exported");
    assert_eq!(path, dir.path().join("exhibitors.csv"));

    let mut reader = csv::Reader::from_path(&path).expect("csv should open");
    let headers: Vec<&str> = reader.headers().expect("header row").iter().collect();
    assert_eq!(headers, OUTPUT_FIELDS);
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.expect("row")).collect();
    let names: Vec<&str> = rows.iter().map(|r| &r[0]).collect();
    assert_eq!(
        names,
        vec!["Alpha Maschinen GmbH", "Beta Kunststoff AG", "Gamma Folien KG"]
    );

    assert_eq!(&rows[0][1], "Hauptstraße 1");
    assert_eq!(&rows[0][2], "Berlin");
    assert_eq!(&rows[0][4], "10115");
    assert_eq!(&rows[0][6], "info@alpha-maschinen.de");
    assert_eq!(&rows[0][7], "https://www.alpha-maschinen.example");
    assert!(rows[0][8].starts_with("alpha-maschinen.de (unknown)"));
    assert_eq!(&rows[0][10], &server.url_str("/directory/a"));
    assert_eq!(&rows[2][10], &server.url_str("/directory/b"));
}

#[tokio::test]
async fn test_scrape_max_pages_and_no_domains() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/directory/a"))
            .times(3)
            .respond_with(status_code(200).body(PAGE_A)),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/directory/b"))
            .times(0)
            .respond_with(status_code(200).body(PAGE_B)),
    );

    let dir = tempfile::tempdir().expect("tempdir");
    let config = Config {
        max_pages: Some(1),
        generate_domains: false,
        output_format: ExportFormat::Json,
        ..scrape_config(&server, dir.path())
    };
    let report = run_scrape(config).await.expect("scrape should succeed");

    assert_eq!(report.pages_visited, 1);
    assert_eq!(report.companies_extracted, 2);
    assert_eq!(report.statistics.total_domains, 0);

    let path = report.output_path.expect("records were exported");
    let text = std::fs::read_to_string(&path).expect("json file");
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(value["metadata"]["total_companies"], 2);
    assert_eq!(value["companies"][0]["domain_count"], 0);
}

#[tokio::test]
async fn test_scrape_aborts_when_directory_unreachable() {
    let server = Server::run();
    // Only the connectivity check reaches the server
    server.expect(
        Expectation::matching(request::method_path("GET", "/directory/a"))
            .times(1)
            .respond_with(status_code(503)),
    );

    let dir = tempfile::tempdir().expect("tempdir");
    let err = run_scrape(scrape_config(&server, dir.path()))
        .await
        .expect_err("an unreachable directory aborts the run");

    assert!(err.to_string().contains("Directory check failed"), "{err:#}");
    assert!(!dir.path().join("exhibitors.csv").exists());
}

#[tokio::test]
async fn test_scrape_without_listings_exports_nothing() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/directory/a"))
            .times(3)
            .respond_with(status_code(200).body("<html><body><p>Coming soon</p></body></html>")),
    );

    let dir = tempfile::tempdir().expect("tempdir");
    let report = run_scrape(scrape_config(&server, dir.path()))
        .await
        .expect("a reachable directory without listings is not an error");

    assert_eq!(report.pages_visited, 1);
    assert_eq!(report.companies_extracted, 0);
    assert!(report.output_path.is_none());
    assert!(!dir.path().join("exhibitors.csv").exists());
}

#[tokio::test]
async fn test_connectivity_check() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/directory/a"))
            .respond_with(
                status_code(200)
                    .insert_header("Content-Type", "text/html")
                    .body(PAGE_A),
            ),
    );

    let scrape = ScrapeConfig {
        base_url: server.url_str("/directory/a"),
        retry_attempts: 1,
        delay_between_requests: Duration::ZERO,
        ..Default::default()
    };
    let diagnostics = run_test(&scrape).await.expect("client should build");

    assert!(diagnostics.success);
    assert_eq!(diagnostics.status_code, Some(200));
    assert_eq!(diagnostics.page_title.as_deref(), Some("Exhibitors A"));
    assert_eq!(diagnostics.sample_companies_found, 2);
    assert_eq!(diagnostics.content_type.as_deref(), Some("text/html"));
}
