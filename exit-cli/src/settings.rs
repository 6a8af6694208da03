//! Last-used preferences, persisted between runs.
//!
//! A trivial key-value file: whole-file read on start, whole-file overwrite
//! on exit, last write wins. No locking, no merging. A missing or
//! unreadable file just means defaults.

use std::fs;
use std::io;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use exit_core::Currency;
use exit_core::data::{DEFAULT_PROVINCE, DEFAULT_STATE};

/// Errors that can occur when persisting settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to write settings to {path}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize settings")]
    Serialize(#[from] toml::ser::Error),
}

/// Last-used calculator selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub currency: Currency,
    pub ownership_percentage: Decimal,
    pub state: String,
    pub province: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: Currency::Usd,
            ownership_percentage: Decimal::ONE_HUNDRED,
            state: DEFAULT_STATE.to_string(),
            province: DEFAULT_PROVINCE.to_string(),
        }
    }
}

impl Settings {
    /// Reads settings from `path`, falling back to defaults when the file
    /// is missing, unreadable or malformed.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!(path = %path.display(), "ignoring malformed settings file: {e}");
                    Self::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                warn!(path = %path.display(), "failed to read settings file: {e}");
                Self::default()
            }
        }
    }

    /// Writes settings to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let contents = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Write {
                path: path.display().to_string(),
                source,
            })?;
        }

        fs::write(path, contents).map_err(|source| SettingsError::Write {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("exit-calc-{}-{name}", std::process::id()))
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = temp_path("roundtrip.toml");
        let settings = Settings {
            currency: Currency::Cad,
            ownership_percentage: dec!(42.5),
            state: "CA".to_string(),
            province: "BC".to_string(),
        };

        settings.save(&path).unwrap();
        let loaded = Settings::load(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, settings);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let loaded = Settings::load(&temp_path("does-not-exist.toml"));

        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let path = temp_path("malformed.toml");
        std::fs::write(&path, "currency = 17").unwrap();

        let loaded = Settings::load(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let path = temp_path("partial.toml");
        std::fs::write(&path, "currency = \"CAD\"\n").unwrap();

        let loaded = Settings::load(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.currency, Currency::Cad);
        assert_eq!(loaded.ownership_percentage, dec!(100));
        assert_eq!(loaded.state, "CA");
        assert_eq!(loaded.province, "ON");
    }

    #[test]
    fn last_write_wins() {
        let path = temp_path("last-write.toml");
        let first = Settings::default();
        let second = Settings {
            province: "QC".to_string(),
            ..Settings::default()
        };

        first.save(&path).unwrap();
        second.save(&path).unwrap();
        let loaded = Settings::load(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, second);
    }
}
