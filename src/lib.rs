//! bikeshare library root.
//! Exposes the CLI parser, the high-level run() function and the
//! load → filter → aggregate → report pipeline.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod report;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::PathBuf;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: PathBuf) -> AppResult<()> {
    match cli.command.as_ref() {
        None | Some(Commands::Explore) => cli::commands::explore::handle(cfg),
        Some(cmd @ Commands::Stats { .. }) => cli::commands::stats::handle(cmd, cfg),
        Some(Commands::Cities) => cli::commands::cities::handle(cfg),
        Some(cmd @ Commands::Config { .. }) => {
            cli::commands::config::handle(cmd, cfg, &config_path)
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ diagnostics on stderr
    logging::init(cli.verbose);

    // 3️⃣ load config once
    let config_path = cli.config.clone().unwrap_or_else(Config::config_file);
    let mut cfg = Config::load_from(&config_path)?;

    // 4️⃣ command line override of the data directory
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }
    tracing::debug!(
        config = %config_path.display(),
        data_dir = %cfg.data_dir,
        "configuration ready"
    );

    dispatch(&cli, &cfg, config_path)
}
