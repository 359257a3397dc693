//! Filename sanitization for export files.

use std::sync::LazyLock;

use regex::Regex;

use super::compile_regex_unsafe;
use crate::config::MAX_FILENAME_LENGTH;

const INVALID_FILENAME_CHARS_PATTERN: &str = r#"[<>:"/\\|?*]"#;
const UNDERSCORE_RUN_PATTERN: &str = r"_+";

static INVALID_FILENAME_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(INVALID_FILENAME_CHARS_PATTERN, "INVALID_FILENAME_CHARS_RE")
});
static UNDERSCORE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(UNDERSCORE_RUN_PATTERN, "UNDERSCORE_RUN_RE"));

/// Makes a user-supplied name safe to use as a filename stem.
///
/// Characters that are invalid on common file systems become `_`, runs of
/// underscores collapse to one, leading/trailing underscores are removed and
/// the result is capped at `MAX_FILENAME_LENGTH` characters.
pub fn sanitize_filename(filename: &str) -> String {
    let replaced = INVALID_FILENAME_CHARS_RE.replace_all(filename, "_");
    let collapsed = UNDERSCORE_RUN_RE.replace_all(&replaced, "_");
    collapsed
        .trim_matches('_')
        .chars()
        .take(MAX_FILENAME_LENGTH)
        .collect()
}
