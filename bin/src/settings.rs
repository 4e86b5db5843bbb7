//! User settings loaded from an optional JSON file.
//!
//! The file is looked up in this order:
//! 1. the `--config` flag
//! 2. the `BODYFAT_CONFIG` environment variable
//! 3. `settings.json` in the platform config directory
//!
//! A missing file at the platform location yields the defaults. A path given
//! explicitly must exist.

use anyhow::{Context, Result};
use bodyfat_lib::{Measurements, UnitSystem};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::display::Format;

/// Environment variable naming a settings file.
const CONFIG_ENV: &str = "BODYFAT_CONFIG";

/// File name inside the platform config directory.
const CONFIG_FILE: &str = "settings.json";

/// Initial values for an interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct InitialValues {
    pub(crate) abdomen: Option<f64>,
    pub(crate) wrist: Option<f64>,
    pub(crate) height: Option<f64>,
}

impl Default for InitialValues {
    fn default() -> Self {
        let defaults = Measurements::default_for(UnitSystem::default());
        Self {
            abdomen: defaults.abdomen,
            wrist: defaults.wrist,
            height: defaults.height,
        }
    }
}

/// CLI settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Settings {
    /// Unit system used when `--unit` is not given.
    pub(crate) unit: UnitSystem,
    /// Output format used when `--format` is not given.
    pub(crate) format: Format,
    /// Values an interactive session starts with.
    pub(crate) initial: InitialValues,
}

impl Settings {
    /// Loads settings, falling back to defaults when no file exists.
    pub(crate) fn load(explicit: Option<&Path>) -> Result<Self> {
        let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);

        match explicit.map(Path::to_path_buf).or(env_path) {
            Some(path) => Self::from_path(&path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_path(&path),
                _ => {
                    debug!("no settings file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Returns `settings.json` in the platform config directory.
    ///
    /// - Linux: `~/.config/bodyfat/settings.json`
    /// - macOS: `~/Library/Application Support/bodyfat/settings.json`
    /// - Windows: `C:\Users\<User>\AppData\Roaming\bodyfat\config\settings.json`
    pub(crate) fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "bodyfat").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Reads and parses a settings file.
    pub(crate) fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings: Self = serde_json::from_str(&json)
            .with_context(|| format!("Invalid settings file {}", path.display()))?;
        info!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Returns the measurements an interactive session starts with.
    pub(crate) const fn initial_measurements(&self) -> Measurements {
        Measurements::from_parts(
            self.unit,
            self.initial.abdomen,
            self.initial.wrist,
            self.initial.height,
        )
    }
}
