//! Clonable CLI: ahead-of-time generation of `Clonable` impls.
//!
//! ```bash
//! clonable generate --schema records.toml --out src/generated/clonable.rs
//! clonable check --schema records.toml
//! clonable expand src/models.rs
//! ```
//!
//! See `clonable --help` for all available commands and options.

mod commands;
mod config;
mod logging;

use clap::{Parser, Subcommand};
use clonable_codegen::CloneStrategy;
use std::path::PathBuf;

use crate::config::{ClonableConfig, DEFAULT_CONFIG_FILE};

#[derive(Parser)]
#[command(
    name = "clonable",
    about = "Generate deep/shallow Clonable impls from record schemas",
    version
)]
struct Cli {
    /// Config file (defaults to ./clonable.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Rust source for every record in a schema
    Generate {
        /// TOML record schema
        #[arg(long)]
        schema: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Path generated code uses to reach the Clonable trait
        #[arg(long)]
        runtime_crate: Option<String>,

        /// Strategy for fields with no strategy and no record default
        #[arg(long)]
        default_strategy: Option<CloneStrategy>,

        /// Omit the @generated banner
        #[arg(long)]
        no_header: bool,
    },
    /// Validate a schema without writing anything
    Check {
        /// TOML record schema
        #[arg(long)]
        schema: PathBuf,
    },
    /// Print what #[derive(Clonable)] generates for a Rust source file
    Expand {
        /// Rust source file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = load_config(cli.config.as_ref()).and_then(|mut config| {
        // Command-line flags take priority over file and environment
        if let Commands::Generate { runtime_crate, default_strategy, no_header, .. } = &cli.command {
            if let Some(path) = runtime_crate {
                config.codegen.runtime_crate = path.clone();
            }
            if let Some(strategy) = default_strategy {
                config.codegen.default_strategy = *strategy;
            }
            if *no_header {
                config.codegen.header = false;
            }
        }
        config.validate()?;
        logging::init(&config.logging);
        log::debug!("configuration: {:?}", config);

        match &cli.command {
            Commands::Generate { schema, out, .. } => {
                commands::generate::run(schema, out.as_deref(), &config.codegen)
            }
            Commands::Check { schema } => commands::check::run(schema, &config.codegen),
            Commands::Expand { file } => commands::expand::run(file),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<ClonableConfig> {
    match path {
        Some(path) => {
            let mut config = ClonableConfig::from_file(path)?;
            config.apply_env_vars();
            Ok(config)
        }
        None => ClonableConfig::load_from(DEFAULT_CONFIG_FILE),
    }
}
