// Clippy Analyzer - platform/fs.rs
//
// Filesystem access for reports and export targets.
// Errors carry the path they occurred on.

use crate::util::error::{ExportError, ReportError};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

/// Read a whole report as UTF-8 text.
///
/// Invalid UTF-8 is an error rather than being replaced, so a wrongly
/// chosen binary file is reported instead of silently yielding nothing.
pub fn read_report(path: &Path) -> Result<String, ReportError> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ReportError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ReportError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    String::from_utf8(bytes).map_err(|e| ReportError::InvalidEncoding {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Create (or truncate) an export destination for buffered writing.
pub fn create_export_file(path: &Path) -> Result<BufWriter<File>, ExportError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| ExportError::Io {
            path: path.to_path_buf(),
            source: e,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_report_returns_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clippy.org");
        std::fs::write(&path, "START\n* a  B <x>\n").unwrap();
        assert_eq!(read_report(&path).unwrap(), "START\n* a  B <x>\n");
    }

    #[test]
    fn test_read_report_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_report(&dir.path().join("nope.org"));
        assert!(matches!(result, Err(ReportError::NotFound { .. })));
    }

    #[test]
    fn test_read_report_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.org");
        std::fs::write(&path, [0x2a, 0x20, 0xff, 0xfe, 0x0a]).unwrap();
        assert!(matches!(
            read_report(&path),
            Err(ReportError::InvalidEncoding { .. })
        ));
    }

    #[test]
    fn test_read_report_on_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_report(dir.path()),
            Err(ReportError::Io { .. })
        ));
    }

    #[test]
    fn test_create_export_file_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = create_export_file(&dir.path().join("missing").join("out.csv"));
        assert!(matches!(result, Err(ExportError::Io { .. })));
    }
}
