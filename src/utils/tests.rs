// Utils module tests.

use super::*;

#[test]
fn test_normalize_phone_domestic_with_trunk_zero() {
    assert_eq!(normalize_phone_number("030 1234567"), "+49301234567");
}

#[test]
fn test_normalize_phone_international_keeps_country_code() {
    assert_eq!(normalize_phone_number("+49 30 1234567"), "+49301234567");
}

#[test]
fn test_normalize_phone_without_trunk_zero() {
    assert_eq!(normalize_phone_number("30/123-45-67"), "+49301234567");
}

#[test]
fn test_normalize_phone_strips_labels_and_brackets() {
    assert_eq!(normalize_phone_number("Tel.: +49 (0)211 4560-01"), "+490211456001");
}

#[test]
fn test_normalize_phone_empty_and_digitless() {
    assert_eq!(normalize_phone_number(""), "");
    assert_eq!(normalize_phone_number("Tel.: +"), "");
}

#[test]
fn test_validate_domain_accepts_common_names() {
    assert!(validate_domain("mustermann.de"));
    assert!(validate_domain("mueller-co.com"));
    assert!(validate_domain("a1.eu"));
    assert!(validate_domain("sub.example.co.uk"));
}

#[test]
fn test_validate_domain_rejects_bad_labels() {
    assert!(!validate_domain(""));
    assert!(!validate_domain("mustermann"));
    assert!(!validate_domain("-mustermann.de"));
    assert!(!validate_domain("mustermann-.de"));
    assert!(!validate_domain("muster_mann.de"));
    assert!(!validate_domain("müller.de"));
    assert!(!validate_domain(".de"));
    assert!(!validate_domain("mustermann.d"));
    assert!(!validate_domain("mustermann.123"));
    assert!(!validate_domain("a..de"));
}

#[test]
fn test_validate_domain_requires_known_suffix() {
    assert!(validate_domain("Mustermann.DE"));
    assert!(!validate_domain("mustermann.invalidtld"));
    assert!(!validate_domain("co.uk"));
    assert!(!validate_domain("mustermann.de."));
}

#[test]
fn test_validate_domain_label_length_limit() {
    let ok = format!("{}.de", "a".repeat(63));
    let too_long = format!("{}.de", "a".repeat(64));
    assert!(validate_domain(&ok));
    assert!(!validate_domain(&too_long));
}

#[test]
fn test_validate_email() {
    assert!(validate_email("info@mustermann.de"));
    assert!(validate_email("first.last+tag@sub.example.com"));
    assert!(!validate_email("info@mustermann"));
    assert!(!validate_email("info@mustermann.invalidtld"));
    assert!(!validate_email("info@-mustermann.de"));
    assert!(!validate_email("@mustermann.de"));
    assert!(!validate_email("info mustermann.de"));
    assert!(!validate_email("info@@mustermann.de"));
}

#[test]
fn test_validate_url() {
    assert!(validate_url("https://www.mustermann.de"));
    assert!(validate_url("http://mustermann.de/kontakt?lang=de"));
    assert!(!validate_url("www.mustermann.de"));
    assert!(!validate_url("mailto:info@mustermann.de"));
    assert!(!validate_url("ftp://mustermann.de"));
    assert!(!validate_url("http://"));
}

#[test]
fn test_sanitize_filename() {
    assert_eq!(sanitize_filename("my:export/file?"), "my_export_file");
    assert_eq!(sanitize_filename("a<<>>b"), "a_b");
    assert_eq!(sanitize_filename("plain_name"), "plain_name");
}

#[test]
fn test_sanitize_filename_length_cap() {
    let long = "x".repeat(250);
    assert_eq!(sanitize_filename(&long).len(), 100);
}

#[test]
#[should_panic(expected = "programming error")]
fn test_parse_selector_unsafe_panics_on_invalid() {
    parse_selector_unsafe("div[", "test");
}

#[test]
fn test_compile_regex_unsafe_valid() {
    let re = compile_regex_unsafe(r"\d{5}", "test");
    assert!(re.is_match("10115"));
}
