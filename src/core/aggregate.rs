// Clippy Analyzer - core/aggregate.rs
//
// Folds parsed records into one accumulator per translation.
// Core layer: pure logic, no I/O or UI dependencies.
//
// Entries are kept in first-appearance order (a Vec plus a key -> index
// map) so that iteration is reproducible without relying on hash order.

use crate::core::model::{AggregateEntry, ParsedRecord};
use std::collections::{BTreeSet, HashMap};

/// Per-pass aggregate of parsed records, keyed by translation.
///
/// Unbounded: memory grows with the number of distinct keys.
#[derive(Debug, Default)]
pub struct Aggregator {
    /// Key -> position in `entries`.
    index: HashMap<String, usize>,

    /// Entries in order of first appearance.
    entries: Vec<AggregateEntry>,
}

impl Aggregator {
    /// Create an empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into the aggregate.
    ///
    /// A repeated key increments its count, overwrites its severity with the
    /// record's (last occurrence wins, not the maximum), and adds the
    /// suggestion to its set.
    pub fn fold(&mut self, record: ParsedRecord) {
        if let Some(&idx) = self.index.get(&record.key) {
            let entry = &mut self.entries[idx];
            entry.count += 1;
            entry.severity = record.severity;
            entry.suggestions.insert(record.suggestion);
            return;
        }

        self.index.insert(record.key.clone(), self.entries.len());
        self.entries.push(AggregateEntry {
            key: record.key,
            count: 1,
            severity: record.severity,
            suggestions: BTreeSet::from([record.suggestion]),
        });
    }

    /// Look up the entry for a key.
    ///
    /// Library callers use this to inspect counts before ranking; the
    /// pipeline itself only consumes `into_entries`.
    pub fn get(&self, key: &str) -> Option<&AggregateEntry> {
        self.index.get(key).and_then(|&idx| self.entries.get(idx))
    }

    /// Number of distinct keys folded so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the aggregate, yielding entries in first-appearance order.
    pub fn into_entries(self) -> Vec<AggregateEntry> {
        self.entries
    }
}

impl Extend<ParsedRecord> for Aggregator {
    fn extend<I: IntoIterator<Item = ParsedRecord>>(&mut self, records: I) {
        for record in records {
            self.fold(record);
        }
    }
}

impl FromIterator<ParsedRecord> for Aggregator {
    fn from_iter<I: IntoIterator<Item = ParsedRecord>>(records: I) -> Self {
        let mut aggregator = Self::new();
        aggregator.extend(records);
        aggregator
    }
}
