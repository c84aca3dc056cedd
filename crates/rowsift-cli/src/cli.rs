//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use rowsift_model::{DEFAULT_FUZZY_THRESHOLD, MatchMode};

#[derive(Parser)]
#[command(
    name = "rowsift",
    version,
    about = "Rowsift - locate and extract rows from tabular data",
    long_about = "Search one column of a CSV dataset by keyword.\n\n\
                  Supports exact, partial (substring), and fuzzy matching with a\n\
                  configurable similarity threshold, previews ranked matches, and\n\
                  exports them together with the query that produced them."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Search one column of a CSV file and preview the matches.
    Search(SearchArgs),

    /// List the column names of a CSV file.
    Columns(ColumnsArgs),

    /// Write the bundled sample dataset for trying the tool out.
    Sample(SampleArgs),

    /// Score a single keyword/value pair with the composite similarity.
    Score(ScoreArgs),
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Path to the CSV file to search.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Column to match the keyword against.
    #[arg(long, short = 'c', value_name = "NAME")]
    pub column: String,

    /// Keyword to search for.
    #[arg(long, short = 'k', value_name = "TEXT")]
    pub keyword: String,

    /// Match mode.
    #[arg(long, short = 'm', value_enum, default_value = "exact")]
    pub mode: MatchModeArg,

    /// Minimum similarity (0-100) a row must reach in fuzzy mode.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_FUZZY_THRESHOLD)]
    pub threshold: u8,

    /// Distinguish upper and lower case when matching.
    #[arg(long)]
    pub case_sensitive: bool,

    /// Export the full result set to this CSV path (a .query.json
    /// provenance sidecar is written next to it).
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Maximum number of rows to preview (the export is never truncated).
    #[arg(long, value_name = "N", default_value_t = 50)]
    pub limit: usize,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// Path to the CSV file to inspect.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct SampleArgs {
    /// Where to write the sample CSV.
    #[arg(value_name = "PATH", default_value = "sample_companies.csv")]
    pub path: PathBuf,
}

#[derive(Parser)]
pub struct ScoreArgs {
    /// Keyword side of the pair.
    #[arg(value_name = "KEYWORD")]
    pub keyword: String,

    /// Value side of the pair.
    #[arg(value_name = "VALUE")]
    pub value: String,

    /// Distinguish upper and lower case when scoring.
    #[arg(long)]
    pub case_sensitive: bool,
}

/// CLI match mode choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum MatchModeArg {
    Exact,
    Partial,
    Fuzzy,
}

impl From<MatchModeArg> for MatchMode {
    fn from(arg: MatchModeArg) -> Self {
        match arg {
            MatchModeArg::Exact => Self::Exact,
            MatchModeArg::Partial => Self::Partial,
            MatchModeArg::Fuzzy => Self::Fuzzy,
        }
    }
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
