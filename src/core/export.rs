// Clippy Analyzer - core/export.rs
//
// CSV and JSON serialisation of result records.
// Core layer: writes to any Write trait object; the app layer opens files
// and attaches path context to errors.
//
// CSV layout: Translation,Suggestions,Severity,Count,Score with minimal
// quoting and CRLF record terminators. Severity holds the star marker.

use crate::core::model::ResultRecord;
use crate::util::constants::COLUMN_HEADERS;
use std::io::{self, Write};

fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer)
}

/// Write the header row and one row per record. Returns the row count.
pub fn export_csv<W: Write>(records: &[ResultRecord], writer: W) -> Result<usize, csv::Error> {
    let mut csv_writer = csv_writer(writer);
    csv_writer.write_record(COLUMN_HEADERS)?;

    let mut count = 0;
    for record in records {
        let count_field = record.count.to_string();
        let score_field = record.score.to_string();
        csv_writer.write_record([
            record.key.as_str(),
            record.suggestions_joined.as_str(),
            record.severity_marker.as_str(),
            count_field.as_str(),
            score_field.as_str(),
        ])?;
        count += 1;
    }

    csv_writer.flush()?;
    Ok(count)
}

/// Serialise records to CSV text.
pub fn serialize(records: &[ResultRecord]) -> Result<String, csv::Error> {
    let mut buf = Vec::new();
    export_csv(records, &mut buf)?;
    // Every field is a Rust String, so the output is valid UTF-8.
    String::from_utf8(buf)
        .map_err(|e| csv::Error::from(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Export records as a pretty-printed JSON array of objects.
pub fn export_json<W: Write>(
    records: &[ResultRecord],
    writer: W,
) -> Result<usize, serde_json::Error> {
    serde_json::to_writer_pretty(writer, records)?;
    Ok(records.len())
}
