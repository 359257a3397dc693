//! Address block parsing.
//!
//! Best-effort heuristics for German-style addresses. The city is only found
//! when it shares a line with the postal code.

use std::sync::LazyLock;

use regex::Regex;

use crate::utils::compile_regex_unsafe;

const POSTAL_CODE_PATTERN: &str = r"\b(\d{5})\b";

static POSTAL_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(POSTAL_CODE_PATTERN, "POSTAL_CODE_RE"));

/// Components recovered from a free-text address block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedAddress {
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

/// Returns the first standalone five-digit run in `text`.
pub fn extract_postal_code(text: &str) -> Option<String> {
    POSTAL_CODE_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Splits an address block into street line, postal code and city.
///
/// `address` is the first non-empty line. `city` is the first line holding
/// the postal code, with the code removed.
pub fn parse_address(text: &str) -> ParsedAddress {
    let postal_code = extract_postal_code(text);
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let city = postal_code.as_deref().and_then(|code| {
        lines
            .iter()
            .find(|line| line.contains(code))
            .map(|line| line.replace(code, "").trim().to_string())
            .filter(|city| !city.is_empty())
    });

    ParsedAddress {
        address: lines.first().map(|line| line.to_string()),
        city,
        postal_code,
    }
}
