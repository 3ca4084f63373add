//! Neighbors command implementation
//!
//! Lists, for every parameter of a curve, the curves one step away.

use anyhow::{Context, Result};
use colored::Colorize;
use flourish_curve::{adjacent_variants, VariantGroup};
use std::process::ExitCode;

use super::LinkOptions;

/// Variant groups for the curve in `query`.
pub fn groups(query: &str) -> Result<Vec<VariantGroup>> {
    let curve = super::parse_curve(query)?;
    Ok(adjacent_variants(&curve))
}

/// Run the neighbors command
///
/// # Arguments
/// * `query` - Curve query string or link
/// * `links` - Link formatting for each variant
/// * `json` - Print the groups as JSON
pub fn run(query: &str, links: &LinkOptions, json: bool) -> Result<ExitCode> {
    let groups = groups(query)?;

    if json {
        let out = serde_json::to_string_pretty(&groups).context("Failed to serialize variants")?;
        println!("{}", out);
        return Ok(ExitCode::SUCCESS);
    }

    for group in groups.iter().filter(|g| !g.variants.is_empty()) {
        println!(
            "{} {}",
            group.label.cyan().bold(),
            format!("({} = {})", group.key, group.current).dimmed()
        );
        for variant in &group.variants {
            println!("  {:>10}  {}", variant.value, links.render(&variant.params));
        }
    }
    Ok(ExitCode::SUCCESS)
}
