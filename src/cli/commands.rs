//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jsdoc")]
#[command(about = "Parse JSDoc-style documentation comments", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse docstrings and print their structure
    Parse {
        /// Files or directories to parse (default: read one docstring from stdin)
        paths: Vec<PathBuf>,

        /// Output format (text, json); overrides the configured format
        #[arg(short, long)]
        format: Option<String>,

        /// Report inputs that fail to parse and continue with the rest
        #[arg(short, long)]
        keep_going: bool,
    },

    /// List the distinct tag names used
    Tags {
        /// Files or directories to scan (default: stdin)
        paths: Vec<PathBuf>,
    },

    /// View or modify configuration in ./jsdoc.toml
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
