//! CLI for the UniDic downloader.

mod commands;
mod progress;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use unidic_core::{catalog, config};

use commands::{run_download, run_info, run_list, run_validate};

/// Top-level CLI for the UniDic downloader.
#[derive(Debug, Parser)]
#[command(name = "unidic")]
#[command(about = "Download and install the UniDic dictionary", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download a dictionary version and install it as `dicdir`.
    Download {
        /// Version label from the manifest (see `unidic list`).
        #[arg(default_value = catalog::DEFAULT_LABEL)]
        label: String,
        /// Base directory that receives `dicdir` (default: from config).
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// List the versions available in the manifest.
    List,

    /// Check a local archive by reading back every member.
    Validate {
        /// Path to the zip file.
        path: PathBuf,
    },

    /// Show the installed dictionary directory and version.
    Info {
        /// Base directory that holds `dicdir` (default: from config).
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Download { label, dir } => run_download(&cfg, &label, dir.as_deref())?,
            CliCommand::List => run_list(&cfg)?,
            CliCommand::Validate { path } => run_validate(&path)?,
            CliCommand::Info { dir } => run_info(&cfg, dir.as_deref())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
