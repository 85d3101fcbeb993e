//! Command-line structures for `prim`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Reference primitives and their cross-language conformance matrix
#[derive(Parser)]
#[command(name = "prim")]
#[command(about = "prim - evaluate primitive operations and check conformance", long_about = None)]
#[command(version)]
pub(crate) struct Cli {
    /// Enable verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// List every registered operation with its signature
    List {
        /// Print a JSON array instead of text
        #[arg(long)]
        json: bool,
    },

    /// Invoke one operation with literal arguments
    Call {
        /// Operation name, e.g. "String.substring" or "divide"
        op: String,

        /// Arguments parsed per the operation's signature (lists as JSON arrays)
        #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
        args: Vec<String>,
    },

    /// Run conformance suites
    Conform(ConformArgs),

    /// Check the algebraic laws over the sample grids
    Laws(LawsArgs),

    /// Write the built-in matrix as a JSON suite
    Export {
        /// Destination file
        path: PathBuf,
    },
}

#[derive(Args)]
pub(crate) struct ConformArgs {
    /// Suite files or directories of *.json suites
    pub paths: Vec<PathBuf>,

    /// Also run the built-in matrix (implied when no paths are given)
    #[arg(long)]
    pub builtin: bool,

    /// JSON configuration file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only run cases whose name or operation matches this regex
    #[arg(long, value_name = "REGEX")]
    pub only: Option<String>,

    /// Skip cases whose name contains this text (repeatable, comma-separated)
    #[arg(long, value_name = "TEXT", value_delimiter = ',')]
    pub skip: Vec<String>,

    /// Default absolute tolerance for approximate expectations
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Stop at the first failing case
    #[arg(long)]
    pub fail_fast: bool,

    /// Print outcomes as JSON lines
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub(crate) struct LawsArgs {
    /// JSON configuration file (its tolerance and filter apply)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only check laws whose name matches this regex
    #[arg(long, value_name = "REGEX")]
    pub only: Option<String>,

    /// Absolute tolerance for the tolerance-bounded laws
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Print one JSON object per law, then a summary line
    #[arg(long)]
    pub json: bool,
}
