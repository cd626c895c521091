//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use stockroom_observability::LogFormat;

use crate::config::StockroomConfig;

#[derive(Debug, Parser)]
#[command(name = "stockroom", version, about = "Typed entity stores with durable logs")]
pub struct Cli {
    /// Log output format (`json` or `pretty`); overrides STOCKROOM_LOG_FORMAT.
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Seed the warehouse stores, list them and walk through the failure cases.
    Warehouse,
    /// Seed a durable inventory log, save it, and reload it in a fresh session.
    Logger {
        /// Log file; overrides STOCKROOM_LOG_PATH.
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Load an existing inventory log and list its items.
    Show {
        /// Log file; overrides STOCKROOM_LOG_PATH.
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

impl Cli {
    /// Apply command-line overrides on top of environment configuration.
    pub fn apply(&self, config: &mut StockroomConfig) {
        if let Some(format) = self.log_format {
            config.log_format = format;
        }
        match &self.command {
            Command::Logger { path: Some(path) } | Command::Show { path: Some(path) } => {
                config.log_path = path.clone();
            }
            _ => {}
        }
    }
}
