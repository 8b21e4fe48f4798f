use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        force,
    } = cmd
    {
        if *init {
            Config::init_file(path, *force)?;
            success(format!("Configuration file written: {}", path.display()));
        }

        if *print_config {
            print!("{}", cfg.to_yaml()?);
        }

        if !*init && !*print_config {
            info(format!("Configuration file: {}", path.display()));
            if !path.exists() {
                info("Not created yet, defaults are in use (see `bikeshare config --init`).");
            }
        }
    }
    Ok(())
}
