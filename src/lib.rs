//! # smoothiepost
//!
//! A post-processor that turns logical CNC operations into G-code for the
//! Smoothieware firmware.
//!
//! ## Architecture
//!
//! smoothiepost is organized as a workspace with multiple crates:
//!
//! 1. **smoothiepost-core** - Axis letters, modal selectors, capability catalogue, errors
//! 2. **smoothiepost-post** - The `NcCreator` interface, the Smoothieware creator, program scripts
//! 3. **smoothiepost-settings** - JSON/TOML configuration
//! 4. **smoothiepost** - This crate: script loading, logging setup, and the CLI binary

use anyhow::Context;
use std::io::Write;
use std::path::Path;

pub use smoothiepost_core::{
    Axis, CapabilitiesTrait, Capability, DistanceMode, Error, MeasurementSystem, Plane, Result,
};
pub use smoothiepost_post::{
    Command, MachineState, NcCreator, PostOptions, Program, SmoothiewareCapabilities,
    SmoothiewareCreator,
};
pub use smoothiepost_settings::{Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Log output goes to stderr so G-code written to stdout stays clean.
/// `RUST_LOG` overrides the default `warn` level.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

/// Parse a program script
///
/// `.json` files hold a JSON array of commands; anything else is read as
/// one JSON command per line.
pub fn parse_script(path: &Path, content: &str) -> Result<Program> {
    if path.extension().is_some_and(|ext| ext == "json") {
        Program::from_json(content)
    } else {
        Program::from_json_lines(content)
    }
}

/// Read and parse a program script from disk
pub fn load_script(path: &Path) -> anyhow::Result<Program> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    let program = parse_script(path, &content)
        .with_context(|| format!("Failed to parse script {}", path.display()))?;
    tracing::info!(
        "Loaded {} commands from {}",
        program.len(),
        path.display()
    );
    Ok(program)
}

/// Replay `program` as Smoothieware G-code into `out`
pub fn post_program<W: Write>(program: &Program, options: PostOptions, out: W) -> Result<W> {
    let mut creator = SmoothiewareCreator::with_options(out, options);
    program.run(&mut creator)?;
    creator.finish()
}

/// Capability names paired with Smoothieware support
pub fn capability_report() -> Vec<(Capability, bool)> {
    let target = SmoothiewareCapabilities;
    Capability::ALL
        .iter()
        .map(|&capability| (capability, target.has_capability(capability)))
        .collect()
}
