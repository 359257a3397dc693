//! Field validation and normalization.
//!
//! Syntax checks only: nothing here touches the network.

use validator::ValidateEmail;

const MAX_DOMAIN_LENGTH: usize = 253;
const MAX_LABEL_LENGTH: usize = 63;

/// Checks that `domain` is a registrable name under a known public suffix.
///
/// Every label must be 1-63 ASCII alphanumerics with inner hyphens only, the
/// whole name at most 253 characters. The suffix must be listed in the public
/// suffix list and at least one label must precede it.
pub fn validate_domain(domain: &str) -> bool {
    if domain.is_empty() || domain.len() > MAX_DOMAIN_LENGTH {
        return false;
    }
    if !domain.split('.').all(is_valid_label) {
        return false;
    }

    let lowercase = domain.to_ascii_lowercase();
    psl::domain(lowercase.as_bytes()).is_some_and(|registrable| registrable.suffix().is_known())
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LENGTH
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Checks that `email` is a syntactically valid address with a registrable
/// domain.
pub fn validate_email(email: &str) -> bool {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return false;
    };
    email.validate_email() && validate_domain(domain)
}

/// Checks that `url` is an absolute http(s) URL with a host.
pub fn validate_url(url: &str) -> bool {
    match url::Url::parse(url) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
                && parsed.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

/// Normalizes a phone number to `+<country><digits>`.
///
/// Every character except digits and `+` is removed. Numbers without a
/// country code are assumed to be German: a leading trunk `0` is replaced by
/// `+49`, otherwise `+49` is prepended. Input without any digits yields an
/// empty string.
pub fn normalize_phone_number(phone: &str) -> String {
    let normalized: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    if !normalized.chars().any(|c| c.is_ascii_digit()) {
        return String::new();
    }

    if normalized.starts_with('+') {
        normalized
    } else if let Some(domestic) = normalized.strip_prefix('0') {
        format!("+49{domestic}")
    } else {
        format!("+49{normalized}")
    }
}
