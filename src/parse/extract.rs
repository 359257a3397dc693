//! Field extraction from a single listing element.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use scraper::{ElementRef, Node, Selector};

use crate::error_handling::{ProcessingStats, WarningType};
use crate::models::CompanyRecord;
use crate::utils::{
    compile_regex_unsafe, normalize_phone_number, parse_selector_unsafe, validate_email,
    validate_url,
};

use super::address::parse_address;

// Patterns applied to the full listing text, first match wins
const PHONE_GENERIC_PATTERN: &str =
    r"(?i)(\+?\d{1,3}[\s\-]?\(?\d{1,4}\)?[\s\-]?\d{1,4}[\s\-]?\d{1,9})";
const PHONE_TEL_PATTERN: &str = r"(?i)(Tel\.?\s*:?\s*\+?\d[\d\s\-\(\)]{7,})";
const PHONE_TELEFON_PATTERN: &str = r"(?i)(Telefon\s*:?\s*\+?\d[\d\s\-\(\)]{7,})";
const EMAIL_PATTERN: &str = r"([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})";
const BOOTH_PATTERN: &str = r"(?i)(Stand|Booth|Halle)\s*:?\s*([A-Z]?\d+[A-Z]?\d*)";

// Class token patterns
const NAME_CLASS_PATTERN: &str = r"(?i)name|title";
const ADDRESS_CLASS_PATTERN: &str = r"(?i)address|contact";
const INDUSTRY_CLASS_PATTERN: &str = r"(?i)category|industry|sector";

const HEADING_SELECTOR_STR: &str = "h2, h3, h4";
const STRONG_SELECTOR_STR: &str = "strong";
const ADDRESS_CONTAINER_SELECTOR_STR: &str = "p, div";
const INDUSTRY_CONTAINER_SELECTOR_STR: &str = "span, div";
const LINK_SELECTOR_STR: &str = "a[href]";

/// Elements inside an address block that end the current line.
const LINE_BREAK_ELEMENTS: &[&str] = &["br", "p", "div", "li"];

/// A `<strong>` name must be longer than this and start without digits.
const STRONG_NAME_MIN_CHARS: usize = 5;

static PHONE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [PHONE_GENERIC_PATTERN, PHONE_TEL_PATTERN, PHONE_TELEFON_PATTERN]
        .iter()
        .map(|p| compile_regex_unsafe(p, "PHONE_RES"))
        .collect()
});
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(EMAIL_PATTERN, "EMAIL_RE"));
static BOOTH_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(BOOTH_PATTERN, "BOOTH_RE"));
static NAME_CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(NAME_CLASS_PATTERN, "NAME_CLASS_RE"));
static ADDRESS_CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(ADDRESS_CLASS_PATTERN, "ADDRESS_CLASS_RE"));
static INDUSTRY_CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(INDUSTRY_CLASS_PATTERN, "INDUSTRY_CLASS_RE"));

static HEADING_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(HEADING_SELECTOR_STR, "HEADING_SELECTOR"));
static STRONG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(STRONG_SELECTOR_STR, "STRONG_SELECTOR"));
static ADDRESS_CONTAINER_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(ADDRESS_CONTAINER_SELECTOR_STR, "ADDRESS_CONTAINER_SELECTOR")
});
static INDUSTRY_CONTAINER_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(INDUSTRY_CONTAINER_SELECTOR_STR, "INDUSTRY_CONTAINER_SELECTOR")
});
static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(LINK_SELECTOR_STR, "LINK_SELECTOR"));

/// Extracts company records from listing elements.
///
/// Holds the directory base URL (the default `source_url`) and the
/// directory's own host, whose links are never taken as company websites.
#[derive(Clone)]
pub struct FieldExtractor {
    base_url: String,
    site_domain: String,
    stats: Arc<ProcessingStats>,
}

impl FieldExtractor {
    pub fn new(base_url: &str, stats: Arc<ProcessingStats>) -> Self {
        let site_domain = url::Url::parse(base_url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_lowercase))
            .map(|host| host.trim_start_matches("www.").to_string())
            .unwrap_or_default();
        Self {
            base_url: base_url.to_string(),
            site_domain,
            stats,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn stats(&self) -> &Arc<ProcessingStats> {
        &self.stats
    }

    /// Extracts one company record from a listing element.
    ///
    /// Returns `None` when no usable company name is found; every other
    /// field is optional.
    pub fn extract(
        &self,
        element: &ElementRef<'_>,
        source_url: Option<&str>,
    ) -> Option<CompanyRecord> {
        let Some(company_name) = extract_name(element) else {
            log::debug!("Skipping listing without company name");
            self.stats.increment_warning(WarningType::ListingWithoutName);
            return None;
        };

        let mut record = CompanyRecord {
            company_name,
            source_url: Some(source_url.unwrap_or(&self.base_url).to_string()),
            ..Default::default()
        };

        let address_block = collect_address_block(element);
        if !address_block.is_empty() {
            let parsed = parse_address(&address_block);
            record.address = parsed.address;
            record.city = parsed.city;
            record.postal_code = parsed.postal_code;
        }

        let text = joined_text(element);
        record.phone = extract_phone(&text);
        record.email = EMAIL_RE
            .captures(&text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string());
        record.website = self.extract_website(element);
        record.booth_number = BOOTH_RE
            .captures(&text)
            .and_then(|caps| caps.get(2))
            .map(|m| m.as_str().to_string());
        record.industry = extract_industry(element);

        validate_company_record(record, &self.stats)
    }

    fn extract_website(&self, element: &ElementRef<'_>) -> Option<String> {
        element
            .select(&LINK_SELECTOR)
            .filter_map(|link| link.value().attr("href"))
            .map(str::trim)
            .find(|href| href.starts_with("http") && !self.is_own_site(href))
            .map(str::to_string)
    }

    fn is_own_site(&self, href: &str) -> bool {
        if self.site_domain.is_empty() {
            return false;
        }
        match url::Url::parse(href) {
            Ok(parsed) => parsed
                .host_str()
                .is_some_and(|host| host.to_lowercase().contains(&self.site_domain)),
            Err(_) => href.contains(&self.site_domain),
        }
    }
}

/// Trims every field, drops empty ones and invalid contact fields.
///
/// Returns `None` only when the company name is empty after trimming. An
/// invalid email or website is dropped from the record, not the record
/// itself.
pub fn validate_company_record(
    record: CompanyRecord,
    stats: &ProcessingStats,
) -> Option<CompanyRecord> {
    let company_name = record.company_name.trim().to_string();
    if company_name.is_empty() {
        stats.increment_warning(WarningType::ListingWithoutName);
        return None;
    }

    let email = clean(record.email).filter(|email| {
        let valid = validate_email(email);
        if !valid {
            log::debug!("Dropping invalid email for {company_name}: {email}");
            stats.increment_warning(WarningType::InvalidEmailDropped);
        }
        valid
    });
    let website = clean(record.website).filter(|website| {
        let valid = validate_url(website);
        if !valid {
            log::debug!("Dropping invalid website for {company_name}: {website}");
            stats.increment_warning(WarningType::InvalidWebsiteDropped);
        }
        valid
    });

    Some(CompanyRecord {
        address: clean(record.address),
        city: clean(record.city),
        country: clean(record.country),
        postal_code: clean(record.postal_code),
        phone: clean(record.phone),
        email,
        website,
        description: clean(record.description),
        industry: clean(record.industry),
        booth_number: clean(record.booth_number),
        contact_person: clean(record.contact_person),
        source_url: clean(record.source_url),
        company_name,
    })
}

fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Descendants of `element` matching `selector`, excluding `element` itself.
fn descendants<'a>(
    element: &ElementRef<'a>,
    selector: &'a Selector,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    let scope = element.id();
    element.select(selector).filter(move |e| e.id() != scope)
}

fn has_class_matching(element: &ElementRef<'_>, re: &Regex) -> bool {
    element.value().classes().any(|class| re.is_match(class))
}

/// Trimmed, non-empty text nodes joined by single spaces.
fn joined_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn extract_name(element: &ElementRef<'_>) -> Option<String> {
    let headings: Vec<ElementRef<'_>> = descendants(element, &HEADING_SELECTOR).collect();
    let heading = headings
        .iter()
        .find(|h| has_class_matching(h, &NAME_CLASS_RE))
        .or_else(|| headings.first());

    if let Some(heading) = heading {
        let name = joined_text(heading);
        return (!name.is_empty()).then_some(name);
    }

    descendants(element, &STRONG_SELECTOR)
        .map(|strong| joined_text(&strong))
        .find(|text| {
            text.chars().count() > STRONG_NAME_MIN_CHARS
                && !text
                    .chars()
                    .take(STRONG_NAME_MIN_CHARS)
                    .any(|c| c.is_ascii_digit())
        })
}

/// Address-like blocks, one line per matching element.
///
/// Text inside an element is joined with spaces. `<br>` and nested block
/// elements start a new line.
fn collect_address_block(element: &ElementRef<'_>) -> String {
    let mut lines = Vec::new();
    for block in descendants(element, &ADDRESS_CONTAINER_SELECTOR)
        .filter(|e| has_class_matching(e, &ADDRESS_CLASS_RE))
    {
        let mut parts = Vec::new();
        for node in block.descendants() {
            match node.value() {
                Node::Text(text) => {
                    let text = text.trim();
                    if !text.is_empty() {
                        parts.push(text);
                    }
                }
                Node::Element(e) if LINE_BREAK_ELEMENTS.contains(&e.name()) => {
                    flush_line(&mut lines, &mut parts)
                }
                _ => {}
            }
        }
        flush_line(&mut lines, &mut parts);
    }
    lines.join("\n")
}

fn flush_line(lines: &mut Vec<String>, parts: &mut Vec<&str>) {
    if !parts.is_empty() {
        lines.push(parts.join(" "));
        parts.clear();
    }
}

fn extract_phone(text: &str) -> Option<String> {
    PHONE_RES.iter().find_map(|re| {
        let raw = re.captures(text)?.get(1)?.as_str();
        let phone = normalize_phone_number(raw);
        (!phone.is_empty()).then_some(phone)
    })
}

fn extract_industry(element: &ElementRef<'_>) -> Option<String> {
    descendants(element, &INDUSTRY_CONTAINER_SELECTOR)
        .filter(|e| has_class_matching(e, &INDUSTRY_CLASS_RE))
        .map(|e| joined_text(&e))
        .find(|text| !text.is_empty())
}
