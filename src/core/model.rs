// Clippy Analyzer - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Parsed record (one matching report line)
// =============================================================================

/// A single report line that matched the record grammar.
///
/// Transient: folded into an `AggregateEntry` and then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecord {
    /// Length of the leading `*` run. Always at least 1.
    pub severity: u64,

    /// The translation this line reports on.
    pub key: String,

    /// The stroke suggested for the translation on this line.
    pub suggestion: String,
}

// =============================================================================
// Aggregate entry (per-key accumulator)
// =============================================================================

/// Everything accumulated for one translation during a processing pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateEntry {
    pub key: String,

    /// Number of matching lines seen with this key.
    pub count: u64,

    /// Severity of the most recent matching line (last write wins).
    pub severity: u64,

    /// Distinct suggestions, exact and case-sensitive. A `BTreeSet` keeps
    /// them in the lexicographic order the finalizer joins them in.
    pub suggestions: BTreeSet<String>,
}

// =============================================================================
// Result record (finalized output)
// =============================================================================

/// One row of the result set, as displayed and exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRecord {
    /// Translation (the aggregate key).
    pub key: String,

    /// Sorted suggestions joined with `"; "`.
    pub suggestions_joined: String,

    /// `severity` repetitions of `*`.
    pub severity_marker: String,

    /// Numeric severity backing `severity_marker`; used for sorting.
    pub severity: u64,

    pub count: u64,

    /// `severity * count`.
    pub score: u64,
}

// =============================================================================
// Sort column
// =============================================================================

/// A column of the result table that rows can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Translation,
    Suggestions,
    Severity,
    Count,
    Score,
}

impl SortColumn {
    /// Returns all columns in table order.
    pub fn all() -> &'static [SortColumn] {
        &[
            SortColumn::Translation,
            SortColumn::Suggestions,
            SortColumn::Severity,
            SortColumn::Count,
            SortColumn::Score,
        ]
    }

    /// Column heading used in the table and the export header row.
    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::Translation => "Translation",
            SortColumn::Suggestions => "Suggestions",
            SortColumn::Severity => "Severity",
            SortColumn::Count => "Count",
            SortColumn::Score => "Score",
        }
    }

    /// True for columns compared by their underlying integer.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            SortColumn::Severity | SortColumn::Count | SortColumn::Score
        )
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortColumn {
    type Err = String;

    /// Case-insensitive column name. `key` is accepted for `Translation`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "translation" | "key" => Ok(SortColumn::Translation),
            "suggestions" => Ok(SortColumn::Suggestions),
            "severity" => Ok(SortColumn::Severity),
            "count" => Ok(SortColumn::Count),
            "score" => Ok(SortColumn::Score),
            other => Err(format!(
                "unknown column '{other}' (expected translation, suggestions, severity, count or score)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_column_labels_match_export_header() {
        let labels: Vec<_> = SortColumn::all().iter().map(|c| c.label()).collect();
        assert_eq!(labels, crate::util::constants::COLUMN_HEADERS);
    }

    #[test]
    fn test_sort_column_from_str_is_case_insensitive() {
        assert_eq!("Score".parse::<SortColumn>(), Ok(SortColumn::Score));
        assert_eq!("COUNT".parse::<SortColumn>(), Ok(SortColumn::Count));
        assert_eq!("key".parse::<SortColumn>(), Ok(SortColumn::Translation));
        assert!("stars".parse::<SortColumn>().is_err());
    }

    #[test]
    fn test_numeric_columns() {
        assert!(SortColumn::Severity.is_numeric());
        assert!(SortColumn::Score.is_numeric());
        assert!(!SortColumn::Suggestions.is_numeric());
    }
}
