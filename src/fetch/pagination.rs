//! Pagination link discovery.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};
use url::Url;

use crate::utils::{compile_regex_unsafe, parse_selector_unsafe};

use super::PageFetcher;

const PAGINATION_SELECTORS: &[&str] = &[
    ".pagination a",
    ".pager a",
    ".page-numbers a",
    r#"[class*="page"] a"#,
    r#"a[href*="page"]"#,
    r#"a[href*="offset"]"#,
];
const NEXT_LINK_TEXT_PATTERN: &str = r"(?i)next|weiter|more|mehr";

static PAGINATION_SELECTOR_LIST: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    PAGINATION_SELECTORS
        .iter()
        .map(|s| parse_selector_unsafe(s, "PAGINATION_SELECTOR_LIST"))
        .collect()
});
static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("a[href]", "ANCHOR_SELECTOR"));
static NEXT_LINK_TEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(NEXT_LINK_TEXT_PATTERN, "NEXT_LINK_TEXT_RE"));

/// Collects pagination targets from a directory page.
///
/// Returns absolute URLs resolved against `base_url`, deduplicated in
/// first-seen order: links under the pagination selectors first, then
/// anchors labelled like a "next" link. `base_url` itself is never included.
pub fn extract_pagination_links(html: &str, base_url: &str) -> Vec<String> {
    let Ok(base) = Url::parse(base_url) else {
        log::warn!("Cannot resolve pagination links against invalid URL: {base_url}");
        return Vec::new();
    };

    let document = Html::parse_document(html);
    let mut links: Vec<String> = Vec::new();
    let mut push = |href: &str| {
        let Ok(resolved) = base.join(href.trim()) else {
            return;
        };
        let resolved = resolved.to_string();
        if resolved != base.as_str() && !links.contains(&resolved) {
            links.push(resolved);
        }
    };

    for selector in PAGINATION_SELECTOR_LIST.iter() {
        for link in document.select(selector) {
            if let Some(href) = link.value().attr("href").filter(|h| !h.trim().is_empty()) {
                push(href);
            }
        }
    }

    for link in document.select(&ANCHOR_SELECTOR) {
        let text: String = link.text().collect();
        if !NEXT_LINK_TEXT_RE.is_match(&text) {
            continue;
        }
        if let Some(href) = link.value().attr("href").filter(|h| !h.trim().is_empty()) {
            push(href);
        }
    }

    links
}

/// Lists the directory pages to scrape, starting with `base_url`.
///
/// Fetches the first page and appends the pagination links found on it.
/// When the page cannot be fetched only `base_url` is returned.
pub async fn discover_pagination_urls(fetcher: &dyn PageFetcher, base_url: &str) -> Vec<String> {
    let mut urls = vec![base_url.to_string()];

    let Some(page) = fetcher.fetch(base_url).await else {
        log::warn!("Could not fetch {base_url}; scraping the first page only");
        return urls;
    };

    let links = extract_pagination_links(&page.body, base_url);
    if !links.is_empty() {
        log::info!("Discovered {} additional pages", links.len());
    }
    urls.extend(links);
    urls
}
