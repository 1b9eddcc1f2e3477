//! Formgate CLI - the sign-up form on a terminal.
//!
//! Provides an interactive form screen plus one-shot validation, schema and
//! configuration commands.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{config, fill, schema, validate};
use formgate_core::observability;
use output::OutputFormat;

/// Formgate - sign-up form validation
#[derive(Parser)]
#[command(
    name = "formgate",
    author = "Aezi <aezi.zhu@icloud.com>",
    version = "0.1.0",
    about = "Formgate - sign-up form validation",
    long_about = "Fill in, validate and inspect the sign-up form from the terminal.",
    propagate_version = true
)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "table")]
    output: OutputFormat,

    /// Configuration file (defaults to ~/.formgate/config.toml when present)
    #[arg(short, long, global = true, env = "FORMGATE_CONFIG")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in the form interactively
    Fill,

    /// Validate a set of values and submit them
    Validate(validate::ValidateArgs),

    /// Show the fields and their constraints
    Schema,

    /// Configuration management
    #[command(subcommand)]
    Config(config::ConfigCommands),
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let format = cli.output;
    if let Err(e) = run(cli, format) {
        output::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: Cli, format: OutputFormat) -> Result<()> {
    let loaded = config::load(cli.config.as_deref())?;
    observability::init(&loaded.config.observability)?;

    match cli.command {
        Commands::Fill => fill::execute(&loaded.config, format),
        Commands::Validate(args) => validate::execute(args, &loaded.config, format),
        Commands::Schema => schema::execute(&loaded.config, format),
        Commands::Config(cmd) => config::execute(cmd, &loaded, format),
    }
}
