//! CLI argument definitions for the obstetra validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "obstetra",
    version,
    about = "Obstetra - field validation for obstetric clinical records",
    long_about = "Validate obstetric clinical record fields.\n\n\
                  Checks Chilean RUT identifiers, clinical measurement ranges,\n\
                  and contact details, one value at a time or over CSV batches."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
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

    /// Allow patient identifiers in log output (redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a single field value.
    Check(CheckArgs),

    /// Validate a CSV file of patient intake rows.
    Intake(BatchArgs),

    /// Validate a CSV file of prenatal control rows.
    Controls(BatchArgs),

    /// List staff roles and the clinical actions they may perform.
    Roles,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Field kind to validate.
    #[arg(value_enum)]
    pub field: FieldArg,

    /// Value to validate (blood pressure takes two: systolic diastolic).
    #[arg(value_name = "VALUE", required = true, num_args = 1..=2)]
    pub values: Vec<String>,

    /// Print the normalized form on success (rut and phone only).
    #[arg(long = "normalize")]
    pub normalize: bool,
}

#[derive(Parser)]
pub struct BatchArgs {
    /// Path to the CSV file.
    #[arg(value_name = "CSV_FILE")]
    pub input: PathBuf,

    /// Write validation_report.json into this directory.
    #[arg(long = "report-dir", value_name = "DIR")]
    pub report_dir: Option<PathBuf>,

    /// Reference date for date checks, YYYY-MM-DD (default: today).
    #[arg(long = "as-of", value_name = "DATE")]
    pub as_of: Option<String>,
}

/// Field kinds accepted by `check`.
#[derive(Clone, Copy, ValueEnum)]
pub enum FieldArg {
    Rut,
    Age,
    Phone,
    Email,
    Pressure,
    Glucemia,
    Weight,
    Weeks,
    Description,
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
