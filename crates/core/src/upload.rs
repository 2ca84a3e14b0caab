//! Rules for accepting uploaded image files.
//!
//! An upload is accepted when its original filename carries an allowed
//! extension and still yields a non-empty name after sanitizing.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Characters outside this set are dropped from stored filenames.
static UNSAFE_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_.-]").expect("valid regex"));

/// Whether `filename` ends in one of `allowed` (compared case-insensitively).
///
/// The extension is whatever follows the last `.`; a name without a dot has none.
pub fn has_allowed_extension<S: AsRef<str>>(filename: &str, allowed: &[S]) -> bool {
    match filename.rsplit_once('.') {
        Some((_, ext)) => {
            let ext = ext.to_lowercase();
            allowed.iter().any(|a| a.as_ref().eq_ignore_ascii_case(&ext))
        }
        None => false,
    }
}

/// Reduce a client-supplied filename to a flat, ASCII-only name safe to join
/// onto the upload directory.
///
/// Accented letters are decomposed (NFKD) so their base letter survives the
/// ASCII filter. Path separators become word breaks and runs of whitespace
/// collapse to `_`. Anything outside `[A-Za-z0-9_.-]` is then removed, and
/// leading or trailing `.`/`_` are stripped. The result may be empty.
///
/// ```
/// use planboard_core::upload::sanitize_filename;
///
/// assert_eq!(sanitize_filename("My cool plan.png"), "My_cool_plan.png");
/// assert_eq!(sanitize_filename("../../etc/passwd"), "etc_passwd");
/// ```
pub fn sanitize_filename(filename: &str) -> String {
    let ascii: String = filename
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();
    let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");
    UNSAFE_CHARS_RE
        .replace_all(&joined, "")
        .trim_matches(|c: char| c == '.' || c == '_')
        .to_string()
}

/// The name to store an upload under, or `None` if it must be refused.
pub fn accepted_filename<S: AsRef<str>>(filename: &str, allowed: &[S]) -> Option<String> {
    if !has_allowed_extension(filename, allowed) {
        return None;
    }
    let sanitized = sanitize_filename(filename);
    (!sanitized.is_empty()).then_some(sanitized)
}
