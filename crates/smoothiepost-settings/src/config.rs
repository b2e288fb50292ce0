//! Configuration for smoothiepost
//!
//! Settings are stored as JSON or TOML, chosen by file extension. Every
//! field has a default so partial files load.

use crate::error::{Result, SettingsError};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use smoothiepost_post::{PostOptions, DEFAULT_HEADER, DEFAULT_TIMESTAMP_FORMAT};
use std::path::{Path, PathBuf};

/// Directory name under the platform config directory
pub const APP_DIR_NAME: &str = "smoothiepost";

/// Default config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Output file settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Prefix blocks with `N<number>`
    pub line_numbers_enabled: bool,
    /// First block number
    pub line_number_start: u32,
    /// Extension used when deriving an output file name
    pub default_extension: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            line_numbers_enabled: false,
            line_number_start: 1,
            default_extension: "nc".to_string(),
        }
    }
}

/// Program header settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramSettings {
    pub header_comment: String,
    pub timestamp_format: String,
}

impl Default for ProgramSettings {
    fn default() -> Self {
        Self {
            header_comment: DEFAULT_HEADER.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputSettings,
    pub program: ProgramSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(SettingsError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform location of the config file
    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no configuration directory on this platform".into())
        })?;
        Ok(dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the file at the default path, or defaults when there is none
    pub fn load_or_default() -> Result<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let format = Format::from_path(path)?;

        let content = match format {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Write a default config to `path`, refusing to replace an existing
    /// file unless `force` is set
    pub fn init_file(path: &Path, force: bool) -> Result<Self> {
        if path.exists() && !force {
            return Err(SettingsError::AlreadyExists(path.to_path_buf()));
        }
        let config = Self::default();
        config.save_to_file(path)?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.output.default_extension.trim().is_empty() {
            return Err(SettingsError::invalid(
                "output.default_extension",
                "must not be empty",
            ));
        }

        if self.program.header_comment.trim().is_empty() {
            return Err(SettingsError::invalid(
                "program.header_comment",
                "must not be empty",
            ));
        }

        let format = &self.program.timestamp_format;
        if format.is_empty() {
            return Err(SettingsError::invalid(
                "program.timestamp_format",
                "must not be empty",
            ));
        }
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return Err(SettingsError::invalid(
                "program.timestamp_format",
                format!("'{}' is not a valid strftime format", format),
            ));
        }

        Ok(())
    }

    /// Options for a translator session
    pub fn post_options(&self) -> PostOptions {
        PostOptions {
            line_numbers: self
                .output
                .line_numbers_enabled
                .then_some(self.output.line_number_start),
            header_comment: self.program.header_comment.clone(),
            timestamp_format: self.program.timestamp_format.clone(),
        }
    }

    /// Output path for `script`, using the configured extension
    pub fn output_path_for(&self, script: &Path) -> PathBuf {
        script.with_extension(&self.output.default_extension)
    }
}
