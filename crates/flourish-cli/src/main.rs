//! Flourish CLI - Command-line interface for harmonograph curves
//!
//! This binary builds random curves, dumps their sample points, and lists
//! nearby variants and seeded galleries as query strings.

mod cli_args;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::Level;

use cli_args::{Cli, Commands, GenerationArgs};
use flourish_cli::commands;
use flourish_cli::commands::points::PointsOptions;
use flourish_curve::GenerationConfig;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    // Logs go to stderr so stdout stays clean for query strings and CSV.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn resolve_config(args: &GenerationArgs) -> Result<GenerationConfig> {
    commands::config::resolve(args.config.as_deref(), &args.overrides())
}

fn dispatch(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Random {
            generation,
            links,
            json,
        } => commands::random::run(&resolve_config(&generation)?, &links.options(), json),
        Commands::Points {
            query,
            dims,
            dt,
            width,
            normalize,
            limit,
        } => {
            let options = PointsOptions {
                dims,
                dt,
                width,
                normalize,
                limit,
            };
            commands::points::run(&query, &options)
        }
        Commands::Neighbors { query, links, json } => {
            commands::neighbors::run(&query, &links.options(), json)
        }
        Commands::Gallery {
            generation,
            links,
            json,
        } => commands::gallery::run(&resolve_config(&generation)?, &links.options(), json),
        Commands::Config { generation } => commands::config::run(&resolve_config(&generation)?),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match dispatch(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
