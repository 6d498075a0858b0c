//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use cldf_ingest::DATASET_DIR_ENV_VAR;
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "relpron-cldf",
    version,
    about = "Build the relative-pronoun CLDF dataset",
    long_about = "Convert the relative-pronoun appendix, its configuration tables and \
                  bibliography into a CLDF StructureDataset.\n\n\
                  Writes CSV tables, a JSON metadata descriptor and sources.bib."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load, derive, validate and write the CLDF dataset.
    Make(MakeArgs),

    /// List the declared output tables.
    Tables,
}

#[derive(Parser)]
pub struct MakeArgs {
    /// Dataset directory containing etc/ and raw/.
    #[arg(value_name = "DATASET_DIR", env = DATASET_DIR_ENV_VAR)]
    pub dataset_dir: PathBuf,

    /// Output directory (default: <DATASET_DIR>/cldf).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Validate and report digests without writing any file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
