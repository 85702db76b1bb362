//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;
use crate::selector::SampleMode;

/// Runs Jupyter notebooks as tests, culling a few to stay on budget
#[derive(Parser)]
#[command(name = "nbcull")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "NBCULL_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Execute every notebook the skip plan keeps
    Run(RunArgs),
    /// Show the discovered notebooks and what the skip plan would do
    List(ListArgs),
}

/// Flags shared by every command that computes a skip plan.
#[derive(clap::Args)]
pub struct SelectionArgs {
    /// Directory containing notebooks (overrides config)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Notebook to always skip, in addition to the configured denylist
    #[arg(long = "ignore", value_name = "NAME")]
    pub ignore: Vec<String>,

    /// Number of additional notebooks to randomly skip (overrides config)
    #[arg(long, value_name = "N")]
    pub sample: Option<usize>,

    /// Sampling semantics for random skips
    #[arg(long, value_name = "MODE")]
    pub mode: Option<SampleMode>,

    /// Seed the random skip draw for reproducible sessions
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}

#[derive(clap::Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Per-notebook execution timeout in seconds (overrides config)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Execution backend binary (for testing)
    #[arg(long, hide = true, value_name = "BIN")]
    pub jupyter: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines, one per notebook
    Text,
    /// Machine-readable report on stdout
    Json,
}
