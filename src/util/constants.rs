// Clippy Analyzer - util/constants.rs
//
// Single source of truth for named constants, report grammar tokens,
// export layout, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Clippy Analyzer";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "ClippyAnalyzer";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Report grammar
// =============================================================================

/// Sentinel that opens a report section. Lines starting with it are ignored.
pub const START_SENTINEL: &str = "START";

/// Sentinel that closes a report section. Lines starting with it are ignored.
pub const END_SENTINEL: &str = "END";

/// Marker character whose run length at the start of a line is the severity.
pub const SEVERITY_MARKER: char = '*';

/// Full-line record grammar: stars, key, two-or-more-space gap, suggestion,
/// then a mandatory `<...>` annotation that is discarded.
pub const RECORD_PATTERN: &str = r"^(\*+)\s+(.*?)\s{2,}(.+?)\s*<.+$";

/// Terminal control sequences stripped before classification.
pub const ESCAPE_SEQUENCE_PATTERN: &str = r"\x1B\[[0-9;]*[mK]";

// =============================================================================
// Results
// =============================================================================

/// Separator placed between deduplicated suggestions of one translation.
pub const SUGGESTION_SEPARATOR: &str = "; ";

/// Column headings, in table and export order.
pub const COLUMN_HEADERS: [&str; 5] = ["Translation", "Suggestions", "Severity", "Count", "Score"];

// =============================================================================
// Dialogs
// =============================================================================

/// Suggested file name offered by the export dialog.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "sorted_translations.csv";

/// Plover keeps its clippy output under `<local data dir>/plover/plover`.
pub const PLOVER_DATA_SUBDIRS: [&str; 2] = ["plover", "plover"];

/// Extensions offered by the "Org files" filter of the open dialog.
pub const ORG_EXTENSIONS: &[&str] = &["org"];

/// Extensions offered by the "Text files" filter of the open dialog.
pub const TEXT_EXTENSIONS: &[&str] = &["txt"];

/// Export destinations with this extension are written as JSON instead of CSV.
pub const JSON_EXTENSION: &str = "json";

// =============================================================================
// Window
// =============================================================================

/// Initial window size in logical points.
pub const WINDOW_SIZE: [f32; 2] = [1000.0, 600.0];

/// Minimum window size in logical points.
pub const MIN_WINDOW_SIZE: [f32; 2] = [640.0, 360.0];

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Levels accepted by `[logging] level` in config.toml.
pub const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
