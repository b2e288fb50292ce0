//! Error types for the settings crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, saving, or validating settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// A configuration value is invalid.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// The file extension does not name a supported format.
    #[error("Unsupported config format for {}: expected .json or .toml", .0.display())]
    UnsupportedFormat(PathBuf),

    /// The platform has no configuration directory.
    #[error("Config directory error: {0}")]
    ConfigDirectory(String),

    /// The target file exists and overwriting was not requested.
    #[error("Config file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

impl SettingsError {
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_setting_display() {
        let err = SettingsError::invalid("output.default_extension", "must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid setting 'output.default_extension': must not be empty"
        );
    }

    #[test]
    fn test_unsupported_format_display() {
        let err = SettingsError::UnsupportedFormat(PathBuf::from("settings.ini"));
        assert!(err.to_string().contains("settings.ini"));
    }
}
