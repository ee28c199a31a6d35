//! CLI argument definitions for shelfview.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "shelfview",
    version,
    about = "Filterable product table for the terminal",
    long_about = "Render a product catalog as a table, filtered by search text\n\
                  and an in-stock-only flag. Categories appear as header rows\n\
                  ahead of their products."
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
    /// Render the filtered product table once and exit.
    Show(ShowArgs),

    /// Browse the catalog interactively, updating the filter from stdin.
    Browse(BrowseArgs),

    /// List the catalog's categories with product counts.
    Categories(CatalogArg),
}

#[derive(Parser)]
pub struct ShowArgs {
    #[command(flatten)]
    pub catalog: CatalogArg,

    /// Search text matched case-insensitively against product names.
    #[arg(long = "filter", value_name = "TEXT", default_value = "")]
    pub filter: String,

    /// Only show products that are in stock.
    #[arg(long = "in-stock")]
    pub in_stock: bool,

    /// Output format for the derived rows.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,
}

#[derive(Parser)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub catalog: CatalogArg,

    /// Initial search text (the search box's seed value).
    #[arg(long = "filter", value_name = "TEXT", default_value = "")]
    pub filter: String,

    /// Start with the in-stock-only restriction enabled.
    #[arg(long = "in-stock")]
    pub in_stock: bool,
}

#[derive(Parser)]
pub struct CatalogArg {
    /// Product catalog file (.json or .csv); defaults to the embedded demo
    /// catalog.
    #[arg(long = "catalog", value_name = "FILE")]
    pub catalog: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
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
