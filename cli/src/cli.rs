//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use crate::output::OutputContext;

/// Inspect tasking modules and generate their payloads
#[derive(Parser)]
#[command(
    name = "tasking",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (any non-empty NO_COLOR except "0"/"false" enables it)
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List built-in modules
    List,

    /// Show module metadata
    Info(commands::ModuleArgs),

    /// Show module options and their current values
    Options(commands::ModuleArgs),

    /// Generate the payload for a module
    Generate(commands::generate::GenerateArgs),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the module cannot be loaded or the payload fails
    /// strict validation.
    pub fn run(self) -> Result<()> {
        let Cli {
            no_color,
            quiet,
            json,
            command,
        } = self;
        let ctx = OutputContext::new(no_color, quiet);
        match command {
            Command::List => commands::list::run(&ctx, json),
            Command::Info(args) => commands::info::run(&ctx, &args, json),
            Command::Options(args) => commands::options::run(&ctx, &args, json),
            Command::Generate(args) => commands::generate::run(&args, json),
            Command::Version => {
                commands::version::run(json);
                Ok(())
            }
        }
    }
}
