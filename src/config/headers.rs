//! HTTP request header table.
//!
//! The directory serves German content, so the default request headers mimic a
//! desktop browser with a German language preference.

/// Accept header sent with every page request
pub const HEADER_ACCEPT_VALUE: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
/// Accept-Language header sent with every page request
pub const HEADER_ACCEPT_LANGUAGE_VALUE: &str = "de-DE,de;q=0.9,en;q=0.8";
/// Upgrade-Insecure-Requests header value
pub const HEADER_UPGRADE_INSECURE_REQUESTS_VALUE: &str = "1";

/// Default request headers as (name, value) pairs.
///
/// User-Agent is not listed here; it is configured on the client builder.
/// Accept-Encoding is left to reqwest so decompression stays transparent.
pub const DEFAULT_REQUEST_HEADERS: &[(&str, &str)] = &[
    ("Accept", HEADER_ACCEPT_VALUE),
    ("Accept-Language", HEADER_ACCEPT_LANGUAGE_VALUE),
    ("Upgrade-Insecure-Requests", HEADER_UPGRADE_INSECURE_REQUESTS_VALUE),
];
