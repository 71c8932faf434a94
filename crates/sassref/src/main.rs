//! sassref CLI - Sass API reference generator.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "sassref")]
#[command(about = "Generate a Sass API reference page from sassdoc output")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to sassref.toml config file
    #[arg(short, long, default_value = "sassref.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },

    /// Build the Sass API reference page
    Build {
        /// Output file (defaults to config or "source/sass-api-reference.md")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List components and overrides shipped in the library package
    Contents,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Build { output } => {
            commands::build::run(&cli.config, output)?;
        }
        Commands::Contents => {
            commands::contents::run(&cli.config)?;
        }
    }

    Ok(())
}
