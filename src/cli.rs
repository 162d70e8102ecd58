use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "prefixd")]
#[command(about = "prefixd - Trie-backed prefix search and autocomplete server.")]
#[command(version = env!("VERSION"))]
pub struct Cli {
    /// Path to one or more config files (merged in order).
    #[arg(long, default_value = "config.toml", action = clap::ArgAction::Append)]
    pub config: Vec<PathBuf>,

    /// Path to the CSV vocabulary file. Overrides the path in the config.
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a sample config file.
    NewConfig {
        /// Output path for config file.
        #[arg(short, long, default_value = "config.toml")]
        path: PathBuf,
    },
}
