//! Configuration for Contacts.
//!
//! Reads `~/.contacts/config.toml`:
//!
//! ```toml
//! [app]
//! theme = "system"   # "light" | "dark" | "system"
//! ascii_only = false
//! high_contrast = false
//! ```
//!
//! Every field is optional and a missing file is not an error.

mod theme;

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;
use thiserror::Error;

use contacts_types::ui::{ThemePreference, UiOptions};

pub use theme::{detect_system_theme, theme_from_colorfgbg};

/// Overrides `[app] theme` when set.
pub const THEME_ENV_VAR: &str = "CONTACTS_THEME";

#[derive(Debug, Default, Deserialize)]
pub struct ContactsConfig {
    pub app: Option<AppConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Palette selection. Defaults to following the terminal.
    #[serde(default)]
    pub theme: ThemePreference,
    /// Use ASCII-only glyphs for icons and avatars.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
}

impl ContactsConfig {
    /// Loads the config from its default location.
    ///
    /// `Ok(None)` when there is no home directory or no file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// Errors carry the path; callers decide whether a bad file is fatal.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Theme preference after applying [`THEME_ENV_VAR`].
    #[must_use]
    pub fn theme_preference(config: Option<&Self>) -> ThemePreference {
        if let Ok(raw) = env::var(THEME_ENV_VAR) {
            match ThemePreference::parse(&raw) {
                Some(pref) => return pref,
                None => tracing::warn!("Unknown theme in {}: {}", THEME_ENV_VAR, raw),
            }
        }
        config
            .and_then(|cfg| cfg.app.as_ref())
            .map(|app| app.theme)
            .unwrap_or_default()
    }

    /// Resolves the options the UI runs with for the lifetime of the process.
    #[must_use]
    pub fn ui_options(config: Option<&Self>) -> UiOptions {
        let theme = Self::theme_preference(config).resolve(detect_system_theme());
        let app = config.and_then(|cfg| cfg.app.as_ref());
        UiOptions {
            theme,
            ascii_only: app.is_some_and(|app| app.ascii_only),
            high_contrast: app.is_some_and(|app| app.high_contrast),
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".contacts").join("config.toml"))
}
