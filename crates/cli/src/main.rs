use std::io;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;

use stockroom_cli::args::{Cli, Command};
use stockroom_cli::config::StockroomConfig;
use stockroom_cli::{inventory_app, warehouse};
use stockroom_infra::FileBackend;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = StockroomConfig::from_env().context("invalid environment configuration")?;
    cli.apply(&mut config);

    stockroom_observability::init_with(config.log_format);

    if config.uses_default_log_path() && !matches!(cli.command, Command::Warehouse) {
        tracing::warn!(
            path = %config.log_path.display(),
            "STOCKROOM_LOG_PATH not set; using default log path"
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let now = Utc::now();

    match cli.command {
        Command::Warehouse => warehouse::run(&mut out, now),
        Command::Logger { .. } => {
            inventory_app::run_logger(FileBackend::new(&config.log_path), &mut out, now)
        }
        Command::Show { .. } => inventory_app::run_show(FileBackend::new(&config.log_path), &mut out),
    }
}
