//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dmiq")]
#[command(author, version, about = "Query dmidecode hardware identity fields", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: SubCommand,

    /// Verbose output (enables debug-level diagnostics)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write the generated text to a file instead of stdout
    #[arg(long, global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Generate without writing anywhere (useful with --verbose)
    #[arg(long, global = true, conflicts_with = "output")]
    pub no_output: bool,

    /// Search path for the dmidecode binary (defaults to $PATH)
    #[arg(long, global = true, env = "DMIQ_SEARCH_PATH", value_name = "PATH")]
    pub search_path: Option<String>,
}

#[derive(Subcommand)]
pub enum SubCommand {
    /// Collect all fields and emit them as pretty-printed JSON
    Json,

    /// Collect all fields and emit them as a categorized XML document
    Xml,

    /// Collect fields and emit SQL INSERT or UPDATE statement text
    Sql {
        /// Target table name
        #[arg(long)]
        table: String,

        /// Identifier column name
        #[arg(long, default_value = "id")]
        id_column: String,

        /// Identifier value for this host
        #[arg(long)]
        id: String,

        /// Statement kind: insert or update (case-insensitive)
        #[arg(long, default_value = "insert")]
        mode: String,

        /// Comma-separated keyword subset (defaults to all 22 keywords)
        #[arg(long, value_delimiter = ',', value_name = "KEYWORDS")]
        keys: Option<Vec<String>>,
    },
}
