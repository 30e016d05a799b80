use crate::error::Result;
use crate::utils::get_config_dir;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.json";

/// Settings for the `toolbelt` command-line tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolbeltConfig {
    /// Fixed RNG seed for `shuffle`; `None` draws a fresh seed every run
    #[serde(default)]
    pub seed: Option<u64>,
    /// Default length for `truncate` when `--length` is not given
    #[serde(default = "default_truncate_length")]
    pub truncate_length: usize,
    #[serde(default = "default_true")]
    pub add_ellipsis: bool,
    /// Any `tracing` level name (`error`, `warn`, `info`, `debug`, `trace`)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ToolbeltConfig {
    fn default() -> Self {
        Self {
            seed: None,
            truncate_length: default_truncate_length(),
            add_ellipsis: true,
            log_level: default_log_level(),
        }
    }
}

fn default_truncate_length() -> usize {
    32
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl ToolbeltConfig {
    /// Parsed `log_level`, falling back to WARN for unknown names.
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::WARN)
    }
}

/// Full path of the config file, if a config directory can be determined.
pub fn config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the config from its default location. Defaults are returned when
/// no config directory can be determined or the file does not exist yet.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed. The
/// caller decides whether to fall back to defaults, usually after logging
/// has been set up.
pub fn load_config() -> Result<ToolbeltConfig> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(ToolbeltConfig::default()),
    }
}

/// Loads the config from `path`, or returns defaults if the file is missing.
pub fn load_config_from(path: &Path) -> Result<ToolbeltConfig> {
    match crate::json::decode_file::<ToolbeltConfig>(path) {
        Err(crate::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            Ok(ToolbeltConfig::default())
        }
        result => result,
    }
}

/// Saves the config to its default location.
pub fn save_config(config: &ToolbeltConfig) -> Result<()> {
    crate::utils::ensure_dirs()?;
    match config_path() {
        Some(path) => save_config_to(config, &path),
        None => Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "No home directory: cannot determine config location",
        )
        .into()),
    }
}

/// Saves the config to `path` using an atomic write pattern.
/// 1. Writes to a temporary file in the same directory (created 0o600 on Unix).
/// 2. Flushes it to disk.
/// 3. Atomically renames it over the target path.
pub fn save_config_to(config: &ToolbeltConfig, path: &Path) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let json = crate::json::encode_pretty(config)?;

    let mut temp = tempfile::NamedTempFile::new_in(dir)?;
    temp.write_all(json.as_bytes())?;
    temp.as_file().sync_all()?;

    temp.persist(path).map_err(|e| {
        if e.error.kind() == std::io::ErrorKind::StorageFull {
            std::io::Error::new(
                std::io::ErrorKind::StorageFull,
                "Disk full: cannot save configuration. Free up space and try again.",
            )
        } else {
            e.error
        }
    })?;
    tracing::debug!("Saved config to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ToolbeltConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.truncate_length, 32);
        assert!(config.add_ellipsis);
        assert_eq!(config.tracing_level(), tracing::Level::WARN);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: ToolbeltConfig = serde_json::from_str(r#"{"seed": 12}"#).unwrap();
        assert_eq!(config.seed, Some(12));
        assert_eq!(config.truncate_length, 32);
        assert!(config.add_ellipsis);
    }

    #[test]
    fn test_tracing_level_parsing() {
        let config = ToolbeltConfig {
            log_level: "debug".to_string(),
            ..ToolbeltConfig::default()
        };
        assert_eq!(config.tracing_level(), tracing::Level::DEBUG);

        let config = ToolbeltConfig {
            log_level: "chatty".to_string(),
            ..ToolbeltConfig::default()
        };
        assert_eq!(config.tracing_level(), tracing::Level::WARN);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let config = ToolbeltConfig {
            seed: Some(99),
            truncate_length: 10,
            add_ellipsis: false,
            log_level: "info".to_string(),
        };

        save_config_to(&config, &path).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), config);
    }

    #[test]
    fn test_save_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "stale").unwrap();

        save_config_to(&ToolbeltConfig::default(), &path).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), ToolbeltConfig::default());
    }

    #[test]
    fn test_load_missing_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        assert_eq!(load_config_from(&path).unwrap(), ToolbeltConfig::default());
    }

    #[test]
    fn test_load_corrupt_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            load_config_from(&path),
            Err(crate::Error::Serialization(_))
        ));

        std::fs::write(&path, r#"{"truncate_length": "long"}"#).unwrap();
        assert!(load_config_from(&path).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_config_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        save_config_to(&ToolbeltConfig::default(), &path).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
