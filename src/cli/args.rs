// src/cli/args.rs
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Parser, ValueHint};

use super::{
    parsers,
    value_enum::{CliDecodeMode, SummaryFormat},
};

#[derive(Parser, Debug)]
#[command(
    name = "nfo_sweep",
    version,
    about = "Rename .nfo files modified on a given day that carry no studio, genre or label tag"
)]
pub struct Args {
    /// Root directory to walk (the root folder itself is included)
    #[arg(value_hint = ValueHint::DirPath)]
    pub root: PathBuf,

    /// Only inspect files last modified on this local date (YYYY-MM-DD or "today")
    #[arg(long, value_parser = parsers::parse_target_date, help_heading = "Selection")]
    pub date: NaiveDate,

    /// Extension of metadata files (leading dot optional)
    #[arg(
        long,
        default_value = ".nfo",
        value_parser = parsers::parse_extension,
        help_heading = "Selection"
    )]
    pub ext: String,

    /// Folders with fewer metadata files than this are skipped entirely
    #[arg(
        long,
        default_value_t = 2,
        value_parser = parsers::parse_positive_usize,
        help_heading = "Selection"
    )]
    pub min_files: usize,

    /// Content marker; a file is invalid only if it contains none of them.
    /// Repeat to give several; any value replaces the defaults (<studio>, <genre>, label)
    #[arg(long = "marker", value_name = "TEXT", help_heading = "Classification")]
    pub markers: Vec<String>,

    /// How undecodable bytes in metadata files are treated
    #[arg(long, value_enum, default_value = "ignore", help_heading = "Classification")]
    pub decode: CliDecodeMode,

    /// Extension given to invalid files (leading dot optional)
    #[arg(
        long,
        default_value = ".invalidnfo",
        value_parser = parsers::parse_extension,
        help_heading = "Renaming"
    )]
    pub invalid_ext: String,

    /// Report what would be renamed without touching any file
    #[arg(long, help_heading = "Renaming")]
    pub dry_run: bool,

    /// Format of the end-of-run summary
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: SummaryFormat,

    /// More diagnostic logging on stderr (-v info, -vv debug)
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        conflicts_with = "quiet",
        help_heading = "Output"
    )]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, help_heading = "Output")]
    pub quiet: bool,
}

impl Args {
    /// Default `tracing` filter directive derived from `-v`/`-q`.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
