//! Configuration constants.
//!
//! This module defines the defaults used throughout the application: the
//! directory location, request pacing, domain generation limits and export
//! settings.

// Directory source
/// Base URL of the exhibitor directory (first page of the listing)
pub const DEFAULT_BASE_URL: &str = "https://www.k-online.de/vis/v1/de/directory/a";

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Request pacing
/// Per-request timeout in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
/// Attempts per page fetch (initial attempt included)
pub const RETRY_ATTEMPTS: usize = 3;
/// Delay between retries of one page and between consecutive pages, in milliseconds
pub const DELAY_BETWEEN_REQUESTS_MS: u64 = 1000;
/// Maximum number of in-flight domain enrichment tasks
pub const MAX_CONCURRENT_REQUESTS: usize = 5;

// Domain generation
/// TLDs appended to every slug variant during a full scrape
pub const DEFAULT_TLDS: &[&str] = &[".de", ".com", ".org", ".net", ".eu", ".at", ".ch"];
/// TLDs used by the single-company `generate-domains` command
pub const GENERATE_COMMAND_TLDS: &[&str] = &[".de", ".com"];
/// Maximum slug variants generated per company
pub const MAX_VARIANTS_PER_COMPANY: usize = 5;
/// DNS availability probe timeout in seconds
pub const DNS_TIMEOUT_SECS: u64 = 5;
/// DNS resolver attempts per query
/// Kept low: a slow answer is reported as `error`, not retried at length
pub const DNS_ATTEMPTS: usize = 1;

// Export
/// Directory export files are written to
pub const DEFAULT_OUTPUT_DIR: &str = "output";
/// Filename prefix used when no custom name is given
pub const DEFAULT_FILENAME_PREFIX: &str = "exhibitor_companies";
/// Maximum length of a sanitized export filename stem
pub const MAX_FILENAME_LENGTH: usize = 100;
/// Columns of the flattened export, in order
pub const OUTPUT_FIELDS: &[&str] = &[
    "company_name",
    "address",
    "city",
    "country",
    "postal_code",
    "phone",
    "email",
    "original_website",
    "generated_domains",
    "domain_status",
    "source_url",
    "scrape_timestamp",
];

// Reporting
/// Log progress every N records during domain enrichment
pub const LOGGING_INTERVAL: usize = 5;
/// Number of sample companies included in connectivity diagnostics
pub const SAMPLE_COMPANIES_LIMIT: usize = 3;
