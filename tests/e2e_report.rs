// Clippy Analyzer - tests/e2e_report.rs
//
// End-to-end tests: fixture report on disk -> load -> rank -> export ->
// read back.
//
// Fixture: tests/fixtures/clippy_sample.org, two report sessions with
// colour escapes, sentinels, a line without annotation, and free text.

use clippy_analyzer::app::report::{export_report, load_report};
use clippy_analyzer::core::model::{ResultRecord, SortColumn};
use clippy_analyzer::core::analysis::aggregate;
use clippy_analyzer::core::{process, serialize, sort_by};
use clippy_analyzer::util::constants::COLUMN_HEADERS;
use clippy_analyzer::util::error::ReportError;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn find<'a>(records: &'a [ResultRecord], key: &str) -> &'a ResultRecord {
    records
        .iter()
        .find(|r| r.key == key)
        .unwrap_or_else(|| panic!("no record for {key:?}"))
}

// =============================================================================
// Processing
// =============================================================================

#[test]
fn e2e_fixture_aggregates_across_sessions() {
    let records = load_report(&fixture("clippy_sample.org")).unwrap();

    let keys: Vec<_> = records.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(
        keys,
        vec!["the", "because", "in the", "and", "comma,", "Because"],
        "score descending, ties in first-appearance order"
    );

    let the = find(&records, "the");
    assert_eq!((the.count, the.severity, the.score), (3, 1, 3));
    assert_eq!(the.suggestions_joined, "-T");

    let in_the = find(&records, "in the");
    assert_eq!(in_the.count, 3);
    assert_eq!(in_the.severity, 1, "last occurrence wins");
    assert_eq!(in_the.suggestions_joined, "TPH-T; TPHEUT");

    // The second "and" line has no annotation and is skipped.
    assert_eq!(find(&records, "and").count, 1);
}

#[test]
fn e2e_every_record_satisfies_score_invariant() {
    let records = load_report(&fixture("clippy_sample.org")).unwrap();
    for r in &records {
        assert_eq!(r.score, r.severity * r.count, "{r:?}");
        assert_eq!(r.severity_marker, "*".repeat(r.severity as usize));

        let parts: Vec<_> = r.suggestions_joined.split("; ").collect();
        let mut sorted = parts.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(parts, sorted, "suggestions must be sorted and unique");
    }
}

#[test]
fn e2e_repeated_key_last_severity_wins() {
    let text = ["*  alpha  beta <note1>", "**  alpha  gamma <note2>", "START", "garbage"].join("\n");
    let records = process(&text);

    assert_eq!(records.len(), 1);
    let r = &records[0];
    assert_eq!(r.key, "alpha");
    assert_eq!(r.count, 2);
    assert_eq!(r.severity, 2);
    assert_eq!(r.suggestions_joined, "beta; gamma");
    assert_eq!(r.score, 4);
}

#[test]
fn e2e_aggregate_is_inspectable_before_ranking() {
    let text = std::fs::read_to_string(fixture("clippy_sample.org")).unwrap();
    let agg = aggregate(&text);

    assert_eq!(agg.len(), 6);
    let in_the = agg.get("in the").unwrap();
    assert_eq!(in_the.count, 3);
    assert_eq!(in_the.severity, 1);
    assert_eq!(in_the.suggestions.len(), 2);
    assert!(agg.get("session resumed").is_none());
}

#[test]
fn e2e_empty_key_line_is_kept_as_a_record() {
    let records = process("*   X <y>\n");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].key, "");
    assert_eq!(records[0].suggestions_joined, "X");
    assert_eq!(serialize(&records).unwrap().lines().nth(1), Some(",X,*,1,1"));
}

#[test]
fn e2e_empty_report_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.org");
    std::fs::write(&path, "").unwrap();

    let records = load_report(&path).unwrap();
    assert!(records.is_empty());
}

#[test]
fn e2e_missing_report_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_report(&dir.path().join("absent.org"));
    assert!(matches!(result, Err(ReportError::NotFound { .. })));
}

// =============================================================================
// Sorting
// =============================================================================

#[test]
fn e2e_resort_is_lossless() {
    let records = load_report(&fixture("clippy_sample.org")).unwrap();

    let by_name = sort_by(&records, SortColumn::Translation, false);
    let by_count = sort_by(&by_name, SortColumn::Count, true);
    let restored = sort_by(&by_count, SortColumn::Score, true);

    let mut original = records.clone();
    let mut round_tripped = restored.clone();
    original.sort_by(|a, b| a.key.cmp(&b.key));
    round_tripped.sort_by(|a, b| a.key.cmp(&b.key));
    assert_eq!(original, round_tripped, "contents unchanged");

    let scores: Vec<_> = restored.iter().map(|r| r.score).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

// =============================================================================
// Export
// =============================================================================

#[test]
fn e2e_csv_round_trip_preserves_columns_and_rows() {
    let text = std::fs::read_to_string(fixture("clippy_sample.org")).unwrap();
    let records = process(&text);
    let csv_text = serialize(&records).unwrap();

    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, COLUMN_HEADERS);

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), records.len());
    for (row, record) in rows.iter().zip(&records) {
        assert_eq!(row.len(), 5);
        assert_eq!(&row[0], record.key);
        assert_eq!(&row[1], record.suggestions_joined);
        assert_eq!(&row[2], record.severity_marker);
        assert_eq!(row[3].parse::<u64>().unwrap(), record.count);
        assert_eq!(row[4].parse::<u64>().unwrap(), record.score);
    }
}

#[test]
fn e2e_export_file_quotes_embedded_comma() {
    let dir = tempfile::tempdir().unwrap();
    let records = load_report(&fixture("clippy_sample.org")).unwrap();
    let dest = dir.path().join("sorted_translations.csv");

    let rows = export_report(&records, &dest).unwrap();
    assert_eq!(rows, records.len());

    let written = std::fs::read_to_string(&dest).unwrap();
    assert!(written.contains("\"comma,\",KW-BG,**,1,2\r\n"), "got:\n{written}");
}

#[test]
fn e2e_failed_export_leaves_results_usable() {
    let dir = tempfile::tempdir().unwrap();
    let records = load_report(&fixture("clippy_sample.org")).unwrap();

    let bad = dir.path().join("no-such-dir").join("out.csv");
    assert!(export_report(&records, &bad).is_err());

    let good = dir.path().join("out.csv");
    assert_eq!(export_report(&records, &good).unwrap(), records.len());
}
