//! Tasking CLI - inspect modules and generate payloads

#![cfg_attr(test, allow(clippy::expect_used))]

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tasking_cli::cli::Cli;
use tasking_cli::output::json;

fn main() {
    // Logs go to stderr so stdout carries only the payload.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let as_json = cli.json;
    if let Err(e) = cli.run() {
        if as_json {
            match json::format_error(&format!("{e:#}"), json::error_code(&e), Some(&e)) {
                Ok(obj) => println!("{obj}"),
                Err(_) => eprintln!("Error: {e:#}"),
            }
        } else {
            eprintln!("Error: {e:#}");
        }
        std::process::exit(1);
    }
}
