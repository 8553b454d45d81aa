// Clippy Analyzer - core/rank.rs
//
// Finalizes aggregate entries into result records and orders them.
// Core layer: pure logic, no I/O or UI dependencies.
//
// All sorting here is stable, so rows that compare equal keep the order
// they arrived in (first appearance in the report for `finalize`).

use crate::core::model::{AggregateEntry, ResultRecord, SortColumn};
use crate::util::constants::{SEVERITY_MARKER, SUGGESTION_SEPARATOR};
use std::cmp::Ordering;

/// Build one result record from an aggregate entry.
pub fn finalize_entry(entry: AggregateEntry) -> ResultRecord {
    // BTreeSet iterates in lexicographic order already.
    let suggestions_joined = entry
        .suggestions
        .into_iter()
        .collect::<Vec<_>>()
        .join(SUGGESTION_SEPARATOR);
    let severity_marker = SEVERITY_MARKER
        .to_string()
        .repeat(entry.severity as usize);

    ResultRecord {
        key: entry.key,
        suggestions_joined,
        severity_marker,
        severity: entry.severity,
        count: entry.count,
        score: entry.severity * entry.count,
    }
}

/// Convert aggregate entries into result records sorted by score, highest
/// first. Equal scores keep the input order.
pub fn finalize<I>(entries: I) -> Vec<ResultRecord>
where
    I: IntoIterator<Item = AggregateEntry>,
{
    let mut records: Vec<ResultRecord> = entries.into_iter().map(finalize_entry).collect();
    records.sort_by(|a, b| b.score.cmp(&a.score));
    records
}

/// Compare two records on one column, ascending.
///
/// Text columns compare lexicographically; Severity/Count/Score compare the
/// integers, never the display strings.
pub fn compare(a: &ResultRecord, b: &ResultRecord, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Translation => a.key.cmp(&b.key),
        SortColumn::Suggestions => a.suggestions_joined.cmp(&b.suggestions_joined),
        SortColumn::Severity => a.severity.cmp(&b.severity),
        SortColumn::Count => a.count.cmp(&b.count),
        SortColumn::Score => a.score.cmp(&b.score),
    }
}

/// Return a re-ordered copy of `records`.
///
/// Pure and stable in both directions: descending reverses the comparison,
/// not the result, so ties keep their current relative order.
pub fn sort_by(records: &[ResultRecord], column: SortColumn, descending: bool) -> Vec<ResultRecord> {
    let mut sorted = records.to_vec();
    if descending {
        sorted.sort_by(|a, b| compare(b, a, column));
    } else {
        sorted.sort_by(|a, b| compare(a, b, column));
    }
    sorted
}
