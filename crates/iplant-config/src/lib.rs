//! Configuration management for the iPlant wiki tools.
//!
//! Parses `iplant.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `confluence.base_url`
//! - `confluence.user`
//! - `confluence.password`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "iplant.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Confluence configuration.
    pub confluence: Option<WikiConfig>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Confluence wiki configuration.
///
/// Immutable once loaded; the client reads these values and never writes
/// them back.
#[derive(Debug, Clone, Deserialize)]
pub struct WikiConfig {
    /// Confluence server base URL.
    pub base_url: String,
    /// Login user name.
    pub user: String,
    /// Login password.
    pub password: String,
    /// Space that holds the managed pages.
    pub space: String,
    /// Title of the parent page new pages are filed under.
    pub parent_page: String,
    /// Public URL prefix for pages in the space; the page title is
    /// appended verbatim to form a page's public URL.
    pub space_url: String,
}

impl WikiConfig {
    /// Validate that all required fields are properly set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty or has
    /// invalid format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.base_url, "confluence.base_url")?;
        require_http_url(&self.base_url, "confluence.base_url")?;
        require_non_empty(&self.user, "confluence.user")?;
        require_non_empty(&self.password, "confluence.password")?;
        require_non_empty(&self.space, "confluence.space")?;
        require_non_empty(&self.parent_page, "confluence.parent_page")?;
        require_non_empty(&self.space_url, "confluence.space_url")?;
        require_http_url(&self.space_url, "confluence.space_url")?;
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`confluence.password`").
        field: String,
        /// Error message (e.g., "${`CONFLUENCE_PASSWORD`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `iplant.toml` in current directory and
    /// parents.
    ///
    /// # Errors
    ///
    /// Returns error if an explicit `config_path` doesn't exist, no config
    /// can be discovered, or parsing fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)
        } else {
            Err(ConfigError::NotFound(PathBuf::from(CONFIG_FILENAME)))
        }
    }

    /// Get validated Confluence configuration.
    ///
    /// Returns the wiki config if the `[confluence]` section is present and
    /// all fields are valid. Use this instead of accessing the `confluence`
    /// field directly when the caller requires Confluence.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the section is missing or
    /// invalid.
    pub fn require_confluence(&self) -> Result<&WikiConfig, ConfigError> {
        let conf = self.confluence.as_ref().ok_or_else(|| {
            ConfigError::Validation("[confluence] section required in config".into())
        })?;
        conf.validate()?;
        Ok(conf)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref mut confluence) = self.confluence {
            confluence.base_url = expand::expand_env(&confluence.base_url, "confluence.base_url")?;
            confluence.user = expand::expand_env(&confluence.user, "confluence.user")?;
            confluence.password = expand::expand_env(&confluence.password, "confluence.password")?;
        }
        Ok(())
    }
}
