//! Random command implementation
//!
//! Builds one random curve from a generation config and prints its short
//! parameters.

use anyhow::{Context, Result};
use colored::Colorize;
use flourish_curve::{GenerationConfig, Harmonograph};
use flourish_params::ShortParams;
use serde::Serialize;
use std::process::ExitCode;

use super::LinkOptions;

/// Machine-readable output of `random --json`.
#[derive(Debug, Serialize)]
pub struct RandomReport {
    pub seed: u32,
    pub query: String,
    pub params: ShortParams,
    pub curve: Harmonograph,
}

/// Builds the curve and its report.
pub fn report(config: &GenerationConfig) -> Result<RandomReport> {
    let curve = config.build().context("Failed to build random curve")?;
    let params = curve.short_parameters();
    Ok(RandomReport {
        seed: config.seed,
        query: params.to_query_string(),
        params,
        curve,
    })
}

/// Run the random command
///
/// # Arguments
/// * `config` - Resolved generation config
/// * `links` - Link formatting for the printed query
/// * `json` - Print a JSON report instead of a single line
pub fn run(config: &GenerationConfig, links: &LinkOptions, json: bool) -> Result<ExitCode> {
    let report = report(config)?;
    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", out);
    } else {
        eprintln!(
            "{} seed {} ({} pendulums)",
            "Random:".cyan().bold(),
            config.seed,
            config.pendulums
        );
        println!("{}", links.render(&report.params));
    }
    Ok(ExitCode::SUCCESS)
}
