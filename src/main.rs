//! smoothiepost CLI - replay CNC operation scripts as Smoothieware G-code

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use smoothiepost::{init_logging, load_script, post_program, Config};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "smoothiepost")]
#[command(about = "Smoothieware G-code post-processor", long_about = None)]
#[command(version = LONG_VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a program script into G-code
    Run(RunArgs),
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// List every operation and whether Smoothieware supports it
    Capabilities,
}

#[derive(Args)]
struct RunArgs {
    /// Script file (.json array, otherwise one JSON command per line)
    script: PathBuf,
    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Write next to the script using the configured output extension
    #[arg(short, long, conflicts_with = "output")]
    write: bool,
    /// Config file (.toml or .json); the default location is used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Prefix blocks with N numbers
    #[arg(long)]
    line_numbers: bool,
    /// First block number (implies --line-numbers)
    #[arg(long, value_name = "N")]
    start: Option<u32>,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write the default configuration
    Init {
        /// Target file (.toml or .json); the platform config location when omitted
        path: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("BUILD_DATE"),
    ")"
);

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            run_script(&args)?;
        }
        Commands::Config {
            action: ConfigAction::Init { path, force },
        } => {
            init_config(path, force)?;
        }
        Commands::Capabilities => {
            show_capabilities();
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::load_or_default().context("Failed to load default config")?,
    };
    Ok(config)
}

fn run_script(args: &RunArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if args.line_numbers || args.start.is_some() {
        config.output.line_numbers_enabled = true;
    }
    if let Some(start) = args.start {
        config.output.line_number_start = start;
    }

    let program = load_script(&args.script)?;
    let options = config.post_options();

    let output = match (&args.output, args.write) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => Some(config.output_path_for(&args.script)),
        (None, false) => None,
    };

    match output.as_deref() {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            post_program(&program, options, std::io::BufWriter::new(file))?;
            eprintln!("Wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = post_program(&program, options, stdout.lock())?;
            lock.flush()?;
        }
    }

    Ok(())
}

fn init_config(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => Config::default_path()?,
    };

    Config::init_file(&path, force)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

fn show_capabilities() {
    for (capability, supported) in smoothiepost::capability_report() {
        let mark = if supported { "yes" } else { "no" };
        println!("{:<40} {}", capability.name(), mark);
    }
}
