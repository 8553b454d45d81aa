// Clippy Analyzer - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation. All errors preserve the causal chain
// for diagnostic logging.
//
// Lines that do not match the record grammar are NOT errors and have no
// variant here: the parser returns `None` and the line is skipped.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all Clippy Analyzer operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum AnalyzerError {
    /// The source report could not be read.
    Report(ReportError),

    /// The result set could not be written.
    Export(ExportError),

    /// Configuration loading or validation failed.
    Config(ConfigError),
}

impl fmt::Display for AnalyzerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Report(e) => write!(f, "Report error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for AnalyzerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Report(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Report (source read) errors
// ---------------------------------------------------------------------------

/// The input report could not be read. No partial result is produced.
#[derive(Debug)]
pub enum ReportError {
    /// The report file does not exist.
    NotFound { path: PathBuf },

    /// The report is not valid UTF-8.
    InvalidEncoding {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },

    /// Any other I/O failure (permissions, path is a directory, ...).
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "Report '{}' does not exist", path.display())
            }
            Self::InvalidEncoding { path, source } => {
                write!(f, "'{}': invalid UTF-8 encoding: {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "Failed to read report '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidEncoding { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::NotFound { .. } => None,
        }
    }
}

impl From<ReportError> for AnalyzerError {
    fn from(e: ReportError) -> Self {
        Self::Report(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations. The in-memory results stay valid.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error creating or writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON export error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for AnalyzerError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
///
/// Never fatal: `platform::config` turns these into warnings and defaults.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is not one of the accepted values.
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::InvalidValue {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is not valid. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::InvalidValue { .. } => None,
        }
    }
}

impl From<ConfigError> for AnalyzerError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for Clippy Analyzer results.
pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_report_error_display_names_path() {
        let err = ReportError::NotFound {
            path: PathBuf::from("missing.org"),
        };
        assert_eq!(err.to_string(), "Report 'missing.org' does not exist");
    }

    #[test]
    fn test_top_level_error_preserves_source_chain() {
        let io = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: AnalyzerError = ExportError::Io {
            path: PathBuf::from("out.csv"),
            source: io,
        }
        .into();

        assert!(err.to_string().starts_with("Export error: Export I/O error 'out.csv'"));
        let export = err.source().expect("export error should be the source");
        let io = export.source().expect("io error should be the root cause");
        assert_eq!(io.to_string(), "denied");
    }
}
