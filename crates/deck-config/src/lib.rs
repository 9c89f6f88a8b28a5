//! Configuration management for deck builds.
//!
//! Parses `deck.toml` configuration files with serde and provides
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
//! - a leading `~` expands to the home directory
//!
//! Expanded fields:
//! - `output.dir`

mod expand;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override document title.
    pub title: Option<String>,
    /// Override static-tabs rendering flag.
    pub static_tabs: Option<bool>,
    /// Override output directory.
    pub output_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "deck.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Document configuration.
    pub document: DocumentConfig,
    /// Tab rendering configuration.
    pub tabs: TabsConfig,
    /// Output configuration (paths are relative strings from TOML).
    output: OutputConfigRaw,
    /// Label overrides (segment name → display label).
    pub labels: HashMap<String, String>,

    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Document configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Document title.
    pub title: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: "Report".to_owned(),
        }
    }
}

/// Tab rendering configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    /// Render CSS-only radio-input tabs instead of script-driven buttons.
    #[serde(rename = "static")]
    pub static_tabs: bool,
}

/// Raw output configuration as parsed from TOML (paths as strings).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OutputConfigRaw {
    dir: Option<String>,
}

/// Resolved output configuration with absolute paths.
#[derive(Debug, Default)]
pub struct OutputConfig {
    /// Directory emitted pages are written to.
    pub dir: PathBuf,
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
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`output.dir`").
        field: String,
        /// Error message (e.g., "${`DECK_OUT`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `deck.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing
    /// CLI arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(title) = &settings.title {
            self.document.title.clone_from(title);
        }
        if let Some(static_tabs) = settings.static_tabs {
            self.tabs.static_tabs = static_tabs;
        }
        if let Some(output_dir) = &settings.output_dir {
            self.output_resolved.dir.clone_from(output_dir);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        Self::discover_config_from(std::env::current_dir().ok()?)
    }

    /// Search for config file starting at `start` and walking up.
    fn discover_config_from(start: PathBuf) -> Option<PathBuf> {
        let mut current = start;
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

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            document: DocumentConfig::default(),
            tabs: TabsConfig::default(),
            output: OutputConfigRaw::default(),
            labels: HashMap::new(),
            output_resolved: OutputConfig {
                dir: base.join("build"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir)?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Expand and resolve raw path values relative to the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        let dir = match &self.output.dir {
            Some(raw) => {
                let expanded = expand::expand_value(raw, "output.dir")?;
                let expanded = PathBuf::from(expanded);
                if expanded.is_absolute() {
                    expanded
                } else {
                    config_dir.join(expanded)
                }
            }
            None => config_dir.join("build"),
        };
        self.output_resolved = OutputConfig { dir };
        Ok(())
    }
}
