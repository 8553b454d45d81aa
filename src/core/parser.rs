// Clippy Analyzer - core/parser.rs
//
// Line classification and record extraction for clippy reports.
// Core layer: operates on already-sanitized lines, never touches I/O.
//
// A data line looks like:
//
//   **  translation  SUGGESTED/STROKE <annotation>
//
// Lines that fail the grammar yield `None` and are skipped by the caller.
// That is the normal outcome for noise in a report, not a failure.

use crate::core::model::ParsedRecord;
use crate::util::constants::{END_SENTINEL, RECORD_PATTERN, SEVERITY_MARKER, START_SENTINEL};
use regex::Regex;
use std::sync::OnceLock;

fn record_regex() -> &'static Regex {
    static RECORD: OnceLock<Regex> = OnceLock::new();
    RECORD.get_or_init(|| {
        // Constant pattern, covered by the tests below.
        Regex::new(RECORD_PATTERN).expect("parser: invalid record regex")
    })
}

/// Cheap pre-filter: could this sanitized line be a data record?
///
/// Rejects section sentinels and anything not starting with the severity
/// marker. Passing does not guarantee that `parse_record` succeeds.
pub fn is_candidate(sanitized_line: &str) -> bool {
    let line = sanitized_line.trim();
    !(line.starts_with(START_SENTINEL)
        || line.starts_with(END_SENTINEL)
        || !line.starts_with(SEVERITY_MARKER))
}

/// Extract severity, key and suggestion from a candidate line.
///
/// The grammar is matched against the whole trimmed line. The key is the
/// shortest text before the first run of two or more whitespace characters;
/// the suggestion is the shortest non-empty text before the `<` annotation.
pub fn parse_record(candidate_line: &str) -> Option<ParsedRecord> {
    let caps = record_regex().captures(candidate_line.trim())?;
    let stars = caps.get(1)?.as_str();
    let key = caps.get(2)?.as_str();
    let suggestion = caps.get(3)?.as_str();

    Some(ParsedRecord {
        severity: stars.chars().count() as u64,
        key: key.to_string(),
        suggestion: suggestion.to_string(),
    })
}
