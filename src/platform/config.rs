// Clippy Analyzer - platform/config.rs
//
// Platform-specific configuration, directory resolution, and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::{BaseDirs, ProjectDirs, UserDirs};
use std::path::{Path, PathBuf};

/// Resolved platform paths for Clippy Analyzer configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/clippyanalyzer/ or %APPDATA%\ClippyAnalyzer\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Full path of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// Default dialog locations
// =============================================================================

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Where the open dialog starts: Plover's data directory when it exists
/// (the clippy plugin writes its report there), otherwise the working
/// directory.
pub fn default_open_directory() -> PathBuf {
    BaseDirs::new()
        .map(|dirs| {
            constants::PLOVER_DATA_SUBDIRS
                .iter()
                .fold(dirs.data_local_dir().to_path_buf(), |path, part| path.join(part))
        })
        .filter(|path| path.is_dir())
        .unwrap_or_else(current_dir)
}

/// Where the export dialog starts: the user's Downloads directory when it
/// exists, otherwise the working directory.
pub fn default_export_directory() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
        .filter(|path| path.is_dir())
        .unwrap_or_else(current_dir)
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[logging]` section.
    pub logging: LoggingSection,
    /// `[dialogs]` section.
    pub dialogs: DialogsSection,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// `[dialogs]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct DialogsSection {
    /// Directory the open dialog starts in.
    pub open_directory: Option<PathBuf>,
    /// Directory the export dialog starts in.
    pub export_directory: Option<PathBuf>,
    /// File name suggested by the export dialog.
    pub export_file_name: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Configured open-dialog directory; `None` = platform default.
    pub open_directory: Option<PathBuf>,
    /// Configured export-dialog directory; `None` = platform default.
    pub export_directory: Option<PathBuf>,
    /// Suggested export file name.
    pub export_file_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: None,
            open_directory: None,
            export_directory: None,
            export_file_name: constants::DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }
}

impl AppConfig {
    /// Directory the open dialog should start in.
    pub fn open_dialog_directory(&self) -> PathBuf {
        self.open_directory
            .clone()
            .unwrap_or_else(default_open_directory)
    }

    /// Directory the export dialog should start in.
    pub fn export_dialog_directory(&self) -> PathBuf {
        self.export_directory
            .clone()
            .unwrap_or_else(default_export_directory)
    }
}

/// Validate an optional directory setting; `None` plus a warning if it is
/// not an existing directory.
fn validate_directory(
    field: &str,
    value: Option<PathBuf>,
    warnings: &mut Vec<ConfigError>,
) -> Option<PathBuf> {
    let dir = value?;
    if dir.is_dir() {
        Some(dir)
    } else {
        warnings.push(ConfigError::InvalidValue {
            field: field.to_string(),
            value: dir.display().to_string(),
            expected: "an existing directory. Using default".to_string(),
        });
        None
    }
}

/// Validate a parsed config, accumulating all problems.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<ConfigError>) {
    let mut warnings = Vec::new();
    let mut config = AppConfig::default();

    // -- Logging: level --
    if let Some(level) = raw.logging.level {
        let lower = level.to_lowercase();
        if constants::VALID_LOG_LEVELS.contains(&lower.as_str()) {
            config.log_level = Some(lower);
        } else {
            warnings.push(ConfigError::InvalidValue {
                field: "[logging] level".to_string(),
                value: level,
                expected: constants::VALID_LOG_LEVELS.join(", "),
            });
        }
    }

    // -- Dialogs --
    config.open_directory = validate_directory(
        "[dialogs] open_directory",
        raw.dialogs.open_directory,
        &mut warnings,
    );
    config.export_directory = validate_directory(
        "[dialogs] export_directory",
        raw.dialogs.export_directory,
        &mut warnings,
    );

    if let Some(name) = raw.dialogs.export_file_name {
        let has_separator = name.contains('/') || name.contains('\\');
        if name.trim().is_empty() || has_separator {
            warnings.push(ConfigError::InvalidValue {
                field: "[dialogs] export_file_name".to_string(),
                value: name,
                expected: format!(
                    "a plain file name. Using default ({})",
                    constants::DEFAULT_EXPORT_FILE_NAME
                ),
            });
        } else {
            config.export_file_name = name;
        }
    }

    (config, warnings)
}

/// Load and validate the config file at `config_path`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal problems.
/// A missing file is the first-run case: defaults, no warnings.
/// An unreadable or unparseable file gives defaults plus one warning; the
/// application still starts.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<ConfigError>) {
    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), Vec::new());
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: config_path.to_path_buf(),
                source: e,
            };
            return (AppConfig::default(), vec![err]);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let err = ConfigError::TomlParse {
                path: config_path.to_path_buf(),
                source: e,
            };
            return (AppConfig::default(), vec![err]);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");
    validate(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(constants::CONFIG_FILE_NAME);
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(&dir.path().join("absent.toml"));
        assert!(warnings.is_empty());
        assert_eq!(config.export_file_name, constants::DEFAULT_EXPORT_FILE_NAME);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_valid_config_is_applied() {
        let target = tempfile::tempdir().unwrap();
        let content = format!(
            "[logging]\nlevel = \"DEBUG\"\n\n[dialogs]\nopen_directory = {:?}\nexport_file_name = \"ranked.csv\"\n",
            target.path().display().to_string()
        );
        let (_dir, path) = write_config(&content);

        let (config, warnings) = load_config(&path);
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.open_directory.as_deref(), Some(target.path()));
        assert_eq!(config.open_dialog_directory(), target.path());
        assert_eq!(config.export_file_name, "ranked.csv");
    }

    #[test]
    fn test_invalid_values_fall_back_with_warnings() {
        let (_dir, path) = write_config(
            "[logging]\nlevel = \"loud\"\n\n[dialogs]\nexport_directory = \"/definitely/not/here\"\nexport_file_name = \"../escape.csv\"\n",
        );

        let (config, warnings) = load_config(&path);
        assert_eq!(warnings.len(), 3, "got {warnings:?}");
        assert!(config.log_level.is_none());
        assert!(config.export_directory.is_none());
        assert_eq!(config.export_file_name, constants::DEFAULT_EXPORT_FILE_NAME);
        assert!(warnings
            .iter()
            .all(|w| matches!(w, ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_unparseable_file_gives_defaults_and_one_warning() {
        let (_dir, path) = write_config("[logging\nlevel = ");
        let (config, warnings) = load_config(&path);
        assert_eq!(warnings.len(), 1);
        assert!(matches!(warnings[0], ConfigError::TomlParse { .. }));
        assert_eq!(config.export_file_name, constants::DEFAULT_EXPORT_FILE_NAME);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let (_dir, path) = write_config("[future]\nflag = true\n\n[logging]\nlevel = \"warn\"\n");
        let (config, warnings) = load_config(&path);
        assert!(warnings.is_empty());
        assert_eq!(config.log_level.as_deref(), Some("warn"));
    }
}
