use crate::models::city::City;
use crate::models::selector::{DayFilter, MonthFilter};
use crate::report::ReportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for bikeshare
#[derive(Parser)]
#[command(
    name = "bikeshare",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bike-share trip data: filter by month and weekday and print travel statistics",
    long_about = None
)]
pub struct Cli {
    /// Directory containing chicago.csv, new_york_city.csv and washington.csv
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Use this configuration file instead of ~/.bikeshare/bikeshare.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print debug diagnostics on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    /// Without a command an interactive session is started
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive session: choose city, month and day, then browse statistics
    Explore,

    /// Print the statistics for one selection without prompting
    Stats {
        /// chicago, "new york city" or washington
        #[arg(long)]
        city: City,

        /// january..december or all
        #[arg(long, default_value = "all")]
        month: MonthFilter,

        /// monday..sunday or all
        #[arg(long, default_value = "all")]
        day: DayFilter,

        #[arg(long, value_enum, default_value = "text")]
        format: ReportFormat,

        /// Also print every selected row
        #[arg(long, help = "Also print every selected row")]
        raw: bool,
    },

    /// List supported cities and their data files
    Cities,

    /// Show or create the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a configuration file with default values")]
        init: bool,

        #[arg(
            long,
            short = 'f',
            requires = "init",
            help = "Overwrite an existing configuration file"
        )]
        force: bool,
    },
}
