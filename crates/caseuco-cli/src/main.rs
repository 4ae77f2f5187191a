//! caseuco CLI - Build and inspect CASE/UCO observable facet fragments.

use anyhow::Context;
use caseuco_cli::commands;
use caseuco_cli::config::OutputFormat;
use caseuco_cli::output::color_enabled;
use caseuco_cli::{Cli, Command, Config, Formatter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Color is resolved before anything can fail so the error line honors it
    let config = Config::load(cli.config.as_deref());
    let color = color_enabled(cli.no_color, config.as_ref().ok());

    let result = config
        .context("failed to load configuration")
        .and_then(|config| run(cli, config, color));

    if let Err(e) = result {
        let formatter = Formatter::new(OutputFormat::Json, color);
        eprintln!("{}", formatter.error(&format!("{:#}", e)));
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: Config, color_enabled: bool) -> anyhow::Result<()> {
    // Initialize tracing (log to stderr, stdout carries the fragment)
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Handle commands
    match cli.command {
        Command::Wireless(args) => commands::execute_wireless(args, &formatter)?,
        Command::Schema => commands::execute_schema(&formatter)?,
        Command::Parse(args) => commands::execute_parse(args, &formatter)?,
    }

    Ok(())
}
