//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Ledgerlink union field decoder CLI
#[derive(Parser, Debug)]
#[command(name = "ledgerlink")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Union catalog file (YAML)
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a union field value
    Decode {
        /// Wire name of the union field (e.g. accounting_period)
        field: String,

        /// Input file (JSON), stdin if omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Path of the value inside the input (e.g. $.results[0].vendor)
        #[arg(short, long)]
        path: Option<String>,

        /// Decode every element of the selected array separately
        #[arg(long)]
        each: bool,
    },

    /// Check that a value matches one of a union field's alternatives
    Validate {
        /// Wire name of the union field
        field: String,

        /// Input file (JSON), stdin if omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Path of the value inside the input
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Decode a whole record (e.g. journal_entry, vendor_credit, purchase_order)
    Record {
        /// Record type name
        record: String,

        /// Input file (JSON), stdin if omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Path of the record inside the input
        #[arg(short, long)]
        path: Option<String>,
    },

    /// List union fields and their alternatives
    Fields,

    /// Show the JSON Schema of a union field or record
    Schema {
        /// Union field or record type name
        name: String,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}
