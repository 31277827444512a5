//! Configuration management for rota.
//!
//! Loads configuration from ${ROTA_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Identity service section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// API key for the identity service (falls back to `FIREBASE_API_KEY`).
    pub api_key: Option<String>,
    /// Base URL override for the identity service.
    pub base_url: Option<String>,
}

/// Roster database section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Base URL of the roster database (falls back to
    /// `FIREBASE_DATABASE_URL`).
    pub database_url: Option<String>,
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Identity service configuration.
    #[serde(default)]
    pub identity: IdentityConfig,

    /// Roster database configuration.
    #[serde(default)]
    pub roster: RosterConfig,
}

impl Config {
    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the commented default template to `path`.
    ///
    /// # Errors
    /// Fails if a config already exists there or the file cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            bail!("Config already exists at {}", path.display());
        }
        Self::write_config(path, default_config_template())
    }

    fn write_config(path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(path, contents)
            .with_context(|| format!("Failed to write to {}", path.display()))
    }
}

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for rota configuration.
    //!
    //! ROTA_HOME resolution order:
    //! 1. ROTA_HOME environment variable (if set)
    //! 2. ~/.config/rota (default)

    use std::path::PathBuf;

    /// Returns the rota home directory.
    ///
    /// Checks ROTA_HOME env var first, falls back to ~/.config/rota
    pub fn rota_home() -> PathBuf {
        if let Ok(home) = std::env::var("ROTA_HOME") {
            return PathBuf::from(home);
        }

        home_dir()
            .map(|h| h.join(".config").join("rota"))
            .expect("Could not determine home directory")
    }

    /// Returns the user's home directory.
    pub fn home_dir() -> Option<PathBuf> {
        std::env::var_os("HOME").map(PathBuf::from)
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        rota_home().join("config.toml")
    }
}
