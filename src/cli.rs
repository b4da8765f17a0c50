// src/cli.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum, ValueHint};

/// Fixed usage line printed when the positional arguments are wrong.
pub const USAGE: &str = "usage: cpdir <source> <destination>";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliDirMode {
    /// Mirror each source directory's permissions
    #[default]
    Source,
    /// Create directories as rwxr-x--x
    Fixed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    None,
    Text,
    Json,
}

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "cpdir",
    version = crate::VERSION,
    about = "Recursively copy a directory tree, preserving file permissions",
    override_usage = "cpdir [OPTIONS] <source> <destination>"
)]
pub struct Args {
    /// Directory to copy from
    #[arg(value_hint = ValueHint::DirPath)]
    pub source: PathBuf,

    /// Directory to copy into; created if missing
    #[arg(value_hint = ValueHint::DirPath)]
    pub destination: PathBuf,

    /// Keep copying after a failure and report every failure at the end
    #[arg(short = 'k', long)]
    pub keep_going: bool,

    /// Permissions for created directories
    #[arg(long, value_enum, default_value_t = CliDirMode::Source)]
    pub dir_mode: CliDirMode,

    /// Print a summary after the copy
    #[arg(long, value_enum, default_value_t = ReportFormat::None)]
    pub report: ReportFormat,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}
