//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-cli")]
#[command(about = "Build, rebuild and export sandbox geometry scenes", long_about = None)]
pub struct Cli {
    /// Log at debug level (RUST_LOG still takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Default circle segment count
    #[arg(long, global = true)]
    pub segments: Option<u32>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Import geometry rows from a CSV file
    Import {
        /// CSV file with a header line
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Load the built-in example scene
    Example {
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Write a JSON snapshot to this path
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Write the records back out as CSV
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,
}
