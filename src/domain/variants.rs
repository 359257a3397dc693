//! Slug variant expansion.

/// Words dropped from the short variant.
pub const STOP_WORDS: &[&str] = &[
    "gmbh",
    "ag",
    "kg",
    "ohg",
    "ev",
    "ek",
    "ug",
    "ltd",
    "inc",
    "corp",
    "llc",
    "co",
    "company",
    "systems",
    "solutions",
    "services",
    "international",
    "group",
    "holding",
    "consulting",
    "engineering",
    "technology",
    "tech",
    "software",
    "digital",
    "and",
    "und",
    "the",
    "der",
    "die",
    "das",
];

/// Suffixes appended to the slug while the variant budget allows.
pub const NUMERIC_SUFFIXES: &[&str] = &["24", "365", "2024"];

/// Expands a slug into at most `max_variants` alternative labels.
///
/// Variants are produced in priority order and duplicates collapse onto
/// their first occurrence:
///
/// 1. the slug itself
/// 2. the slug without hyphens
/// 3. the initials of its words (multi-word slugs, at least two letters)
/// 4. the slug with stop words removed
/// 5. the slug with each of [`NUMERIC_SUFFIXES`] appended
///
/// # Examples
///
/// ```
/// use exhibitor_scraper::domain::expand_variants;
///
/// assert_eq!(
///     expand_variants("schneider-partner", 5),
///     vec!["schneider-partner", "schneiderpartner", "sp", "schneider-partner24", "schneider-partner365"]
/// );
/// ```
pub fn expand_variants(slug: &str, max_variants: usize) -> Vec<String> {
    let mut variants: Vec<String> = Vec::new();
    if slug.is_empty() || max_variants == 0 {
        return variants;
    }

    push(&mut variants, slug.to_string());
    push(&mut variants, slug.replace('-', ""));

    let words: Vec<&str> = slug.split('-').filter(|w| !w.is_empty()).collect();
    if words.len() > 1 {
        let initials: String = words.iter().filter_map(|w| w.chars().next()).collect();
        if initials.chars().count() >= 2 {
            push(&mut variants, initials);
        }
    }

    push(&mut variants, short_variant(&words, slug));

    for suffix in NUMERIC_SUFFIXES {
        if variants.len() >= max_variants {
            break;
        }
        push(&mut variants, format!("{slug}{suffix}"));
    }

    variants.truncate(max_variants);
    variants
}

fn push(variants: &mut Vec<String>, candidate: String) {
    if !candidate.is_empty() && !variants.contains(&candidate) {
        variants.push(candidate);
    }
}

/// Joins the non-stop words; falls back to the slug when nothing is left.
fn short_variant(words: &[&str], slug: &str) -> String {
    let kept: Vec<&str> = words
        .iter()
        .copied()
        .filter(|w| !STOP_WORDS.contains(&w.to_lowercase().as_str()))
        .collect();
    if kept.is_empty() {
        slug.to_string()
    } else {
        kept.join("-")
    }
}
