use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quotefeed")]
#[command(about = "QuoteFeed - a synthetic market-data producer")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Log output format (pretty, json, compact)
    #[arg(long, global = true, default_value = "pretty")]
    pub log_format: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the quote producer with the given configuration
    Start {
        /// Path to the configuration file
        #[arg(short, long, default_value = "quotefeed.yaml")]
        config: PathBuf,

        /// Override HTTP port
        #[arg(long)]
        http: Option<u16>,
    },

    /// Validate configuration without starting the producer
    Validate {
        /// Path to the configuration file
        #[arg(short, long, default_value = "quotefeed.yaml")]
        config: PathBuf,
    },

    /// Initialize a new configuration file with all defaults
    Init {
        /// Output path for the new configuration file
        #[arg(short, long, default_value = "quotefeed.yaml")]
        output: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
