//! CLI definitions and entry point

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::demo;
use crate::output::OutputMode;
use crate::storage::{CsvFileStore, WriteMode};

/// fixlet - create, read, update, and delete fixlets in a CSV file
#[derive(Parser, Debug)]
#[command(
    name = "fixlet",
    version,
    about = "Run the fixlet create/read/update/delete demonstration",
    long_about = "Runs a fixed sequence against a CSV-backed fixlet file:\n\
                  create fixlet001, read, update it, delete it, read.\n\n\
                  Every step loads the whole file and rewrites it."
)]
pub struct Cli {
    /// Fixlet CSV file (overrides the config file)
    pub file: Option<PathBuf>,

    /// Config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Truncate and rewrite the file directly instead of renaming a temp file
    #[arg(long)]
    pub in_place: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Output mode selected by the flags
    #[must_use]
    pub const fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }

    /// Resolve the store from config, with CLI arguments taking precedence
    pub fn store(&self) -> anyhow::Result<CsvFileStore> {
        let mut config = Config::load(&self.config)?;
        if let Some(file) = &self.file {
            config.store.path.clone_from(file);
        }
        if self.in_place {
            config.store.write_mode = WriteMode::InPlace;
        }
        Ok(config.store())
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    execute(&cli)
}

/// Run the demonstration described by already-parsed arguments
pub fn execute(cli: &Cli) -> anyhow::Result<()> {
    let store = cli.store()?;
    let output_mode = cli.output_mode();

    store
        .init()
        .with_context(|| format!("initialize {}", store.path().display()))?;

    demo::run(&store, |listing| listing.render(output_mode))
        .with_context(|| format!("fixlet demonstration on {}", store.path().display()))?;
    Ok(())
}
