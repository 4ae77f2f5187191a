//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// caseuco - Build and inspect CASE/UCO observable facet fragments.
#[derive(Debug, Parser)]
#[command(name = "caseuco")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "CASEUCO_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Compact JSON
    Json,
    /// Indented JSON
    Pretty,
    /// Table of wire keys and values
    Table,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Emit a wireless network connection facet
    Wireless(WirelessArgs),

    /// Show the wire keys of the wireless network connection facet
    Schema,

    /// Parse a facet fragment and print it back
    Parse(ParseArgs),
}

/// Arguments for the wireless command.
#[derive(Debug, Parser)]
pub struct WirelessArgs {
    /// Network SSID (omitted from output when not given)
    #[arg(short, long)]
    pub ssid: Option<String>,

    /// Object id to use instead of a generated one (UUID or `_:<uuid>`)
    #[arg(long)]
    pub id: Option<String>,
}

/// Arguments for the parse command.
#[derive(Debug, Parser)]
pub struct ParseArgs {
    /// JSON file to read, or `-` for stdin
    #[arg(default_value = "-")]
    pub input: String,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Pretty => crate::config::OutputFormat::Pretty,
            CliFormat::Table => crate::config::OutputFormat::Table,
        }
    }
}
