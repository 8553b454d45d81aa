// Clippy Analyzer - app/state.rs
//
// Application state management. Holds the latest result set, the display
// order, the sort state, and the status line.
// Owned by the eframe::App implementation; never touched by the core.

use crate::app::report;
use crate::core::model::{ResultRecord, SortColumn};
use crate::core::rank;
use crate::platform::config::AppConfig;
use crate::util::error::AnalyzerError;
use std::path::{Path, PathBuf};

/// Active column sort chosen by clicking a table header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: SortColumn,
    pub descending: bool,
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Validated configuration (dialog locations, export file name).
    pub config: AppConfig,

    /// Report the current results came from.
    pub source_path: Option<PathBuf>,

    /// Results in ranking order (score descending). This is what gets exported.
    pub records: Vec<ResultRecord>,

    /// Results in display order; re-sorted on header clicks.
    pub view: Vec<ResultRecord>,

    /// Current header sort. `None` = ranking order.
    pub sort: Option<SortState>,

    /// True once a report has been processed successfully.
    pub results_loaded: bool,

    /// Status message for the status bar.
    pub status_message: String,

    /// Whether `status_message` describes a failure.
    pub status_is_error: bool,

    /// Report to load on the next frame (set from the command line).
    pub pending_open: Option<PathBuf>,

    /// Whether to show the About dialog.
    pub show_about: bool,
}

impl AppState {
    /// Create initial state with the loaded configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            source_path: None,
            records: Vec::new(),
            view: Vec::new(),
            sort: None,
            results_loaded: false,
            status_message: "No file selected".to_string(),
            status_is_error: false,
            pending_open: None,
            show_about: false,
        }
    }

    fn set_status(&mut self, message: String, is_error: bool) {
        self.status_message = message;
        self.status_is_error = is_error;
    }

    /// Process `path` and replace the current results with its records.
    ///
    /// On failure the previous results stay in place and the status line
    /// reports the error. Returns the number of translations on success.
    pub fn open_report(&mut self, path: PathBuf) -> Result<usize, AnalyzerError> {
        match report::load_report(&path) {
            Ok(records) => {
                let count = records.len();
                self.view = records.clone();
                self.records = records;
                self.sort = None;
                self.results_loaded = true;
                self.set_status(
                    format!("Selected: {} ({count} translations)", path.display()),
                    false,
                );
                self.source_path = Some(path);
                Ok(count)
            }
            Err(e) => {
                self.set_status(format!("Failed to process file: {e}"), true);
                Err(e.into())
            }
        }
    }

    /// Handle a header click on `column`.
    ///
    /// A new column sorts ascending; the active column flips direction.
    /// The current display order is re-sorted, so ties keep their order.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        let descending = match self.sort {
            Some(active) if active.column == column => !active.descending,
            _ => false,
        };
        self.view = rank::sort_by(&self.view, column, descending);
        self.sort = Some(SortState { column, descending });
        tracing::debug!(column = %column, descending, "Results re-sorted");
    }

    /// Header text for `column`, with an arrow on the active sort column.
    pub fn header_label(&self, column: SortColumn) -> String {
        match self.sort {
            Some(active) if active.column == column => {
                let arrow = if active.descending { '\u{2193}' } else { '\u{2191}' };
                format!("{} {arrow}", column.label())
            }
            _ => column.label().to_string(),
        }
    }

    /// Export the results, in ranking order, to `dest`.
    ///
    /// With nothing loaded, nothing is written and Ok(0) is returned. A
    /// write failure leaves the results untouched so the export can be
    /// retried elsewhere.
    pub fn export_to(&mut self, dest: &Path) -> Result<usize, AnalyzerError> {
        if self.records.is_empty() {
            self.set_status("No data to export".to_string(), true);
            return Ok(0);
        }

        match report::export_report(&self.records, dest) {
            Ok(count) => {
                self.set_status(format!("Data exported to {}", dest.display()), false);
                Ok(count)
            }
            Err(e) => {
                self.set_status(format!("Failed to export data: {e}"), true);
                Err(e.into())
            }
        }
    }
}
