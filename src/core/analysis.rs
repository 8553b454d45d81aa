// Clippy Analyzer - core/analysis.rs
//
// The processing pass: raw report text in, ranked result records out.
//
//   raw text -> sanitize -> is_candidate -> parse_record -> Aggregator
//            -> finalize (score descending)
//
// Each call builds and drops its own Aggregator, so nothing leaks between
// runs.

use crate::core::aggregate::Aggregator;
use crate::core::model::ResultRecord;
use crate::core::parser::{is_candidate, parse_record};
use crate::core::rank::finalize;
use crate::core::sanitize::sanitize;

/// Aggregate every matching line of `raw_text`.
pub fn aggregate(raw_text: &str) -> Aggregator {
    raw_text
        .lines()
        .map(sanitize)
        .filter(|line| is_candidate(line))
        .filter_map(|line| parse_record(&line))
        .collect()
}

/// Process a whole report into ranked result records.
///
/// Lines that are not records are skipped; an input with no records gives
/// an empty Vec.
pub fn process(raw_text: &str) -> Vec<ResultRecord> {
    finalize(aggregate(raw_text).into_entries())
}
