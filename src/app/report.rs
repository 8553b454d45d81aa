// Clippy Analyzer - app/report.rs
//
// Report load/export orchestration. Joins the platform file access to the
// core pipeline and attaches path context to every failure.
// Used by both the GUI and the headless `--export` mode.

use crate::core::analysis;
use crate::core::export;
use crate::core::model::ResultRecord;
use crate::platform::fs;
use crate::util::constants;
use crate::util::error::{ExportError, ReportError};
use std::io::Write;
use std::path::Path;
use std::time::Instant;

/// Output format of an export, chosen from the destination's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// `.json` (any case) selects JSON; everything else is CSV.
    pub fn from_path(path: &Path) -> Self {
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(constants::JSON_EXTENSION));
        if is_json {
            ExportFormat::Json
        } else {
            ExportFormat::Csv
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
        }
    }
}

/// Read and process one report file into ranked records.
///
/// A read failure returns before any processing, so there is never a
/// partial result.
pub fn load_report(path: &Path) -> Result<Vec<ResultRecord>, ReportError> {
    let started = Instant::now();
    let text = fs::read_report(path)?;
    let records = analysis::process(&text);

    tracing::info!(
        path = %path.display(),
        bytes = text.len(),
        translations = records.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Report processed"
    );
    Ok(records)
}

/// Write `records` to `path` in the order given. Returns the row count.
pub fn export_report(records: &[ResultRecord], path: &Path) -> Result<usize, ExportError> {
    let format = ExportFormat::from_path(path);
    let mut writer = fs::create_export_file(path)?;

    let count = match format {
        ExportFormat::Csv => {
            export::export_csv(records, &mut writer).map_err(|e| ExportError::Csv {
                path: path.to_path_buf(),
                source: e,
            })?
        }
        ExportFormat::Json => {
            export::export_json(records, &mut writer).map_err(|e| ExportError::Json {
                path: path.to_path_buf(),
                source: e,
            })?
        }
    };

    writer.flush().map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(
        path = %path.display(),
        format = format.label(),
        rows = count,
        "Export written"
    );
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_export_format_from_extension() {
        assert_eq!(ExportFormat::from_path(Path::new("out.csv")), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path(Path::new("out.JSON")), ExportFormat::Json);
        assert_eq!(ExportFormat::from_path(Path::new("out")), ExportFormat::Csv);
    }

    #[test]
    fn test_load_then_export_csv() {
        let dir = tempfile::tempdir().unwrap();
        let report = dir.path().join("clippy.org");
        std::fs::write(&report, "START\n* a  B <x>\n** c  D <y>\nEND\n").unwrap();

        let records = load_report(&report).unwrap();
        assert_eq!(records.len(), 2);

        let dest = dir.path().join("out.csv");
        let rows = export_report(&records, &dest).unwrap();
        assert_eq!(rows, 2);

        let written = std::fs::read_to_string(&dest).unwrap();
        assert!(written.starts_with("Translation,Suggestions,Severity,Count,Score\r\n"));
        assert!(written.contains("c,D,**,1,2"));
    }

    #[test]
    fn test_export_json_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let records = analysis::process("* a  B <x>\n");
        let dest = dir.path().join("out.json");
        export_report(&records, &dest).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&dest).unwrap()).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_load_missing_report_fails() {
        let result = load_report(&PathBuf::from("/nonexistent/clippy-analyzer/report.org"));
        assert!(matches!(result, Err(ReportError::NotFound { .. })));
    }

    #[test]
    fn test_export_to_unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let records = analysis::process("* a  B <x>\n");
        let result = export_report(&records, &dir.path().join("no").join("such.csv"));
        assert!(matches!(result, Err(ExportError::Io { .. })));
    }
}
