//! Configuration file support for persistent filter defaults.
//!
//! This module loads a TOML file of filter defaults. Reading it is opt-in: a
//! run only consults a file named with `--config`, or the per-user file at
//! `~/.config/filecat/config.toml` (or the platform-specific equivalent) when
//! `--user-config` is given. Values from the file serve as defaults that can
//! be overridden by CLI arguments.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! [filters]
//! exclude_dirs = [".git", "target", "node_modules"]
//! exclude_exts = ["lock", "png"]
//! include_dirs = []
//! include_exts = []
//! ignore_extensionless = false
//! include_extensionless = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present in the
/// config file and apply layered configuration (CLI > config file > defaults).
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Filter defaults
    #[serde(default)]
    pub filters: FileFilterConfig,
}

/// Filter options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileFilterConfig {
    /// Directory names to prune
    pub exclude_dirs: Option<Vec<String>>,

    /// Extensions to exclude (`""` means extensionless)
    pub exclude_exts: Option<Vec<String>>,

    /// Directory paths files must live in
    pub include_dirs: Option<Vec<PathBuf>>,

    /// Extensions files must carry (`""` means extensionless)
    pub include_exts: Option<Vec<String>>,

    /// Exclude files without an extension
    pub ignore_extensionless: Option<bool>,

    /// Accept files without an extension in the include list
    pub include_extensionless: Option<bool>,
}

/// Expand a leading `~` in a path to the user's home directory.
///
/// Paths that don't start with `~` are returned unchanged.
///
/// # Examples
///
/// ```
/// # use std::path::PathBuf;
/// # use filecat::config::file::expand_tilde;
/// let absolute = PathBuf::from("/absolute/path");
/// assert_eq!(expand_tilde(&absolute), PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The configuration file is located at `<config_dir>/filecat/config.toml`,
    /// where `<config_dir>` is the platform-specific configuration directory
    /// (e.g., `~/.config` on Linux, `%APPDATA%` on Windows).
    ///
    /// # Returns
    ///
    /// `Some(PathBuf)` with the config file path, or `None` if the config
    /// directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("filecat").join("config.toml"))
    }

    /// Load configuration from the per-user config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty) configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but cannot be read
    /// - The config file exists but contains invalid TOML or unexpected fields
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from an explicit file.
    ///
    /// Unlike [`FileConfig::load`], a missing file is an error here.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        Self::parse(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or has unexpected fields.
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let mut config: Self = toml::from_str(content)?;

        if let Some(dirs) = config.filters.include_dirs.as_mut() {
            for dir in dirs.iter_mut() {
                *dir = expand_tilde(dir);
            }
        }

        Ok(config)
    }
}
