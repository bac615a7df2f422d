//! Configuration management for spanmark.
//!
//! Parses `spanmark.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `render.header_prefix`
//! - `render.base_url`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override source-position attribute emission.
    pub include_origin: Option<bool>,
    /// Override heading ID emission.
    pub header_ids: Option<bool>,
    /// Override heading ID prefix.
    pub header_prefix: Option<String>,
    /// Override XHTML-style void elements.
    pub xhtml: Option<bool>,
    /// Override URL sanitization.
    pub sanitize: Option<bool>,
    /// Override base URL for relative links.
    pub base_url: Option<String>,
    /// Override GFM parsing.
    pub gfm: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "spanmark.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Renderer configuration.
    pub render: RenderConfig,
    /// Markdown parsing configuration.
    pub markdown: MarkdownConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Renderer configuration (`[render]`).
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Emit `data-origin-start`/`data-origin-end` attributes.
    pub include_origin: bool,
    /// Emit heading `id` attributes.
    pub header_ids: bool,
    /// Prefix for heading IDs.
    pub header_prefix: String,
    /// Prefix for the code block language class.
    pub lang_prefix: String,
    /// Self-close void elements.
    pub xhtml: bool,
    /// Reject `javascript:`, `vbscript:` and `data:` URLs.
    pub sanitize: bool,
    /// Base for resolving relative link and image URLs.
    pub base_url: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            include_origin: false,
            header_ids: true,
            header_prefix: String::new(),
            lang_prefix: "language-".to_owned(),
            xhtml: false,
            sanitize: false,
            base_url: None,
        }
    }
}

/// Markdown parsing configuration (`[markdown]`).
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Enable GitHub Flavored Markdown (tables, strikethrough, task lists).
    pub gfm: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self { gfm: true }
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
        /// Config field path (e.g., "`render.base_url`").
        field: String,
        /// Error message (e.g., "${`DOCS_HOST`} not set").
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

/// Require a string field to contain no whitespace.
fn require_no_whitespace(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "{field} cannot contain whitespace"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `spanmark.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config(&cwd))
        {
            tracing::info!(path = %discovered.display(), "Discovered configuration file");
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No configuration file found, using defaults");
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(include_origin) = settings.include_origin {
            self.render.include_origin = include_origin;
        }
        if let Some(header_ids) = settings.header_ids {
            self.render.header_ids = header_ids;
        }
        if let Some(header_prefix) = &settings.header_prefix {
            self.render.header_prefix.clone_from(header_prefix);
        }
        if let Some(xhtml) = settings.xhtml {
            self.render.xhtml = xhtml;
        }
        if let Some(sanitize) = settings.sanitize {
            self.render.sanitize = sanitize;
        }
        if let Some(base_url) = &settings.base_url {
            self.render.base_url = Some(base_url.clone());
        }
        if let Some(gfm) = settings.gfm {
            self.markdown.gfm = gfm;
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
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
        config.validate()?;

        tracing::debug!(path = %path.display(), render = ?config.render, "Loaded configuration");
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(base_url) = &self.render.base_url {
            require_non_empty(base_url, "render.base_url")?;
            require_no_whitespace(base_url, "render.base_url")?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.render.header_prefix =
            expand::expand_env(&self.render.header_prefix, "render.header_prefix")?;

        if let Some(base_url) = &self.render.base_url {
            self.render.base_url = Some(expand::expand_env(base_url, "render.base_url")?);
        }

        Ok(())
    }
}
