//! smoothiepost Settings Crate
//!
//! Loads and saves the post-processor configuration.

pub mod config;
pub mod error;

pub use config::{Config, OutputSettings, ProgramSettings, APP_DIR_NAME, CONFIG_FILE_NAME};
pub use error::{Result, SettingsError};
