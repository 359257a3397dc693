//! Listing element discovery.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::utils::{compile_regex_unsafe, parse_selector_unsafe};

/// Structural selectors tried in order; the first with any match wins.
pub const LISTING_SELECTORS: &[&str] = &[
    ".exhibitor-item",
    ".company-item",
    ".listing-item",
    ".directory-entry",
    r#"[class*="exhibitor"]"#,
    r#"[class*="company"]"#,
    r#"[class*="listing"]"#,
];

/// Substrings marking a block as company-like in the content fallback.
const LEGAL_ENTITY_KEYWORDS: &[&str] = &["gmbh", "ag", "kg", "ltd", "inc", "corp"];
const FALLBACK_CONTAINER_SELECTOR_STR: &str = "div, article, section";
const FALLBACK_MIN_TEXT_CHARS: usize = 50;
const FIVE_DIGIT_RUN_PATTERN: &str = r"\d{5}";

static LISTING_SELECTOR_LIST: LazyLock<Vec<(&'static str, Selector)>> = LazyLock::new(|| {
    LISTING_SELECTORS
        .iter()
        .map(|s| (*s, parse_selector_unsafe(s, "LISTING_SELECTOR_LIST")))
        .collect()
});
static FALLBACK_CONTAINER_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(FALLBACK_CONTAINER_SELECTOR_STR, "FALLBACK_CONTAINER_SELECTOR")
});
static FIVE_DIGIT_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(FIVE_DIGIT_RUN_PATTERN, "FIVE_DIGIT_RUN_RE"));

/// Finds the elements of `document` that each describe one company.
///
/// Returns the matches of the first selector in [`LISTING_SELECTORS`] that
/// matches anything. When none does, falls back to a content heuristic over
/// `div`/`article`/`section` blocks; the fallback can return both a block
/// and one of its ancestors.
pub fn locate_listings(document: &Html) -> Vec<ElementRef<'_>> {
    for (raw, selector) in LISTING_SELECTOR_LIST.iter() {
        let elements: Vec<ElementRef<'_>> = document.select(selector).collect();
        if !elements.is_empty() {
            log::info!(
                "Found {} company elements using selector: {}",
                elements.len(),
                raw
            );
            return elements;
        }
    }

    let elements: Vec<ElementRef<'_>> = document
        .select(&FALLBACK_CONTAINER_SELECTOR)
        .filter(|element| looks_like_company(element))
        .collect();
    log::debug!(
        "No listing selector matched; content heuristic found {} elements",
        elements.len()
    );
    elements
}

fn looks_like_company(element: &ElementRef<'_>) -> bool {
    let text: String = element.text().map(str::trim).collect();
    if text.chars().count() <= FALLBACK_MIN_TEXT_CHARS {
        return false;
    }
    let lower = text.to_lowercase();
    LEGAL_ENTITY_KEYWORDS.iter().any(|k| lower.contains(k))
        && (FIVE_DIGIT_RUN_RE.is_match(&text) || text.contains('@'))
}
