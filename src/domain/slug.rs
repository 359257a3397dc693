//! Company name normalization.
//!
//! Turns a raw company name into a lowercase, hyphen-delimited ASCII slug
//! suitable as a domain label.

use std::sync::LazyLock;

use regex::Regex;

use crate::utils::compile_regex_unsafe;

/// Legal-entity tokens removed from company names before slugging.
///
/// Matching is case-insensitive and requires the token not to be glued to a
/// word character on either side.
pub const LEGAL_SUFFIXES: &[&str] = &[
    "GmbH", "AG", "KG", "OHG", "e.V.", "e.K.", "UG", "Ltd.", "Inc.", "Corp.", "LLC", "& Co.",
    "Co.", "mbH", "gGmbH",
];

/// Lowercase diacritic folding table, applied after lowercasing.
pub const DIACRITIC_FOLDS: &[(char, &str)] = &[
    ('ä', "ae"),
    ('ö', "oe"),
    ('ü', "ue"),
    ('ß', "ss"),
    ('á', "a"),
    ('à', "a"),
    ('â', "a"),
    ('ã', "a"),
    ('é', "e"),
    ('è', "e"),
    ('ê', "e"),
    ('ë', "e"),
    ('í', "i"),
    ('ì', "i"),
    ('î', "i"),
    ('ï', "i"),
    ('ó', "o"),
    ('ò', "o"),
    ('ô', "o"),
    ('õ', "o"),
    ('ú', "u"),
    ('ù', "u"),
    ('û', "u"),
    ('ñ', "n"),
    ('ç', "c"),
];

// Upper bound on suffix-stripping passes; each pass removes at least one token.
const MAX_STRIP_PASSES: usize = 8;

static LEGAL_SUFFIX_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    LEGAL_SUFFIXES
        .iter()
        .map(|suffix| {
            let pattern = format!(r"(?i)(^|[^\w]){}([^\w]|$)", regex::escape(suffix));
            compile_regex_unsafe(&pattern, "LEGAL_SUFFIX_RES")
        })
        .collect()
});

/// Punctuation-free legal tokens, lowercased. Diacritic folding can produce
/// one of these ("Ág" becomes "ag"), so they are dropped from the slug too.
static BARE_LEGAL_WORDS: LazyLock<Vec<String>> = LazyLock::new(|| {
    LEGAL_SUFFIXES
        .iter()
        .filter(|suffix| suffix.chars().all(char::is_alphanumeric))
        .map(|suffix| suffix.to_lowercase())
        .collect()
});

static SPECIAL_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"[^\w\s-]", "SPECIAL_CHARS_RE"));
static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"\s+", "WHITESPACE_RUN_RE"));
static HYPHEN_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"-+", "HYPHEN_RUN_RE"));

/// Normalizes a company name into a domain slug.
///
/// Never fails; names consisting only of legal suffixes or punctuation yield
/// an empty string.
///
/// # Examples
///
/// ```
/// use exhibitor_scraper::domain::normalize_company_name;
///
/// assert_eq!(normalize_company_name("Mustermann GmbH"), "mustermann");
/// assert_eq!(normalize_company_name("Müller & Co. KG"), "mueller");
/// assert_eq!(normalize_company_name("Tech Solutions Ltd."), "tech-solutions");
/// ```
pub fn normalize_company_name(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    let stripped = strip_legal_suffixes(raw);
    let cleaned = SPECIAL_CHARS_RE.replace_all(&stripped, "");
    let hyphenated = WHITESPACE_RUN_RE.replace_all(cleaned.trim(), "-");
    let folded = fold_diacritics(&hyphenated.to_lowercase());
    let collapsed = HYPHEN_RUN_RE.replace_all(&folded, "-");

    collapsed
        .split('-')
        .filter(|word| !word.is_empty() && !is_bare_legal_word(word))
        .collect::<Vec<_>>()
        .join("-")
}

fn is_bare_legal_word(word: &str) -> bool {
    BARE_LEGAL_WORDS.iter().any(|token| token == word)
}

/// Removes legal-entity tokens until none is left.
///
/// A single `replace_all` consumes the delimiter after a match, so adjacent
/// tokens ("AG AG") need another pass.
fn strip_legal_suffixes(name: &str) -> String {
    let mut current = name.to_string();
    for _ in 0..MAX_STRIP_PASSES {
        let mut next = current.clone();
        for re in LEGAL_SUFFIX_RES.iter() {
            next = re.replace_all(&next, "${1}${2}").into_owned();
        }
        if next == current {
            break;
        }
        current = next;
    }
    current
}

fn fold_diacritics(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.chars() {
        match DIACRITIC_FOLDS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => folded.push_str(to),
            None => folded.push(c),
        }
    }
    folded
}
