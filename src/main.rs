// Clippy Analyzer - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation (debug mode support)
// 4. Headless export (--export) or eframe GUI launch

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::ui::...` etc.
pub use clippy_analyzer::app;
pub use clippy_analyzer::core;
pub use clippy_analyzer::platform;
pub use clippy_analyzer::ui;
pub use clippy_analyzer::util;

use clap::Parser;
use crate::core::model::SortColumn;
use std::path::{Path, PathBuf};

/// Clippy Analyzer - rank the translations in a Plover clippy report.
///
/// Opens a window showing each translation with its suggested strokes,
/// severity, count, and score. With --export, writes the ranked table to a
/// CSV (or .json) file instead and exits.
#[derive(Parser, Debug)]
#[command(name = "clippy-analyzer", version, about)]
struct Cli {
    /// Clippy report to load (.org or .txt).
    report: Option<PathBuf>,

    /// Write the results to this file and exit without opening a window.
    #[arg(short = 'e', long = "export", requires = "report")]
    export: Option<PathBuf>,

    /// Order exported rows by this column (translation, suggestions,
    /// severity, count, score). Default: score, highest first.
    #[arg(short = 's', long = "sort", requires = "export")]
    sort: Option<SortColumn>,

    /// Sort ascending instead of descending (with --sort).
    #[arg(long = "ascending", requires = "sort")]
    ascending: bool,

    /// Use this config file instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// Process `report` and write it to `dest` without a GUI.
fn run_headless(
    report: &Path,
    dest: &Path,
    sort: Option<SortColumn>,
    ascending: bool,
) -> util::error::Result<usize> {
    let records = app::report::load_report(report)?;
    let ordered = match sort {
        Some(column) => crate::core::sort_by(&records, column, !ascending),
        None => records,
    };
    Ok(app::report::export_report(&ordered, dest)?)
}

fn main() {
    let cli = Cli::parse();

    // Config first so its log level can feed the subscriber.
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_file());
    let (config, config_warnings) = platform::config::load_config(&config_path);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "Clippy Analyzer starting"
    );
    for warning in &config_warnings {
        tracing::warn!(error = %warning, "Config warning");
    }

    if let (Some(report), Some(dest)) = (&cli.report, &cli.export) {
        match run_headless(report, dest, cli.sort, cli.ascending) {
            Ok(rows) => {
                println!("Exported {rows} translations to {}", dest.display());
                return;
            }
            Err(e) => {
                tracing::error!(error = %e, "Headless export failed");
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }

    let mut state = app::state::AppState::new(config);
    state.pending_open = cli.report.clone();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size(util::constants::WINDOW_SIZE)
            .with_min_inner_size(util::constants::MIN_WINDOW_SIZE),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::AnalyzerApp::new(state)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch Clippy Analyzer GUI: {e}");
        std::process::exit(1);
    }
}
