// Clippy Analyzer - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug
//   - Config file: [logging] level = "debug"
//
// Output: stderr. Report contents are never logged above debug level.

use tracing_subscriber::EnvFilter;

/// Build the env filter for the given inputs.
///
/// Priority: RUST_LOG env var > CLI --debug flag > config level > default "info".
fn build_filter(debug_flag: bool, config_level: Option<&str>) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else if let Some(level) = config_level {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL)
    }
}

/// Initialise the logging subsystem.
///
/// `debug_flag` is true when the user passed --debug on the CLI.
/// `config_level` is the validated level from config.toml (if present).
///
/// Safe to call more than once; later calls are no-ops.
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(build_filter(debug_flag, config_level))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .try_init();

    if result.is_err() {
        return;
    }

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        "Logging initialised"
    );
}
