//! Gallery command implementation

use anyhow::{Context, Result};
use colored::Colorize;
use flourish_curve::{gallery, item_seed, GenerationConfig};
use serde::Serialize;
use std::process::ExitCode;

use super::LinkOptions;

/// One gallery entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryItem {
    pub index: usize,
    pub seed: u32,
    pub link: String,
}

/// Builds the gallery for `config` and renders one link per curve.
pub fn items(config: &GenerationConfig, links: &LinkOptions) -> Result<Vec<GalleryItem>> {
    let curves = gallery(config).context("Failed to build gallery")?;
    Ok(curves
        .iter()
        .enumerate()
        .map(|(index, curve)| GalleryItem {
            index,
            seed: item_seed(config, index),
            link: links.render(&curve.short_parameters()),
        })
        .collect())
}

/// Run the gallery command
///
/// Prints one query string (or link) per curve, in gallery order.
pub fn run(config: &GenerationConfig, links: &LinkOptions, json: bool) -> Result<ExitCode> {
    let items = items(config, links)?;
    if json {
        let out = serde_json::to_string_pretty(&items).context("Failed to serialize gallery")?;
        println!("{}", out);
        return Ok(ExitCode::SUCCESS);
    }

    eprintln!(
        "{} {} curves from seed {}",
        "Gallery:".cyan().bold(),
        items.len(),
        config.seed
    );
    for item in &items {
        println!("{}", item.link);
    }
    Ok(ExitCode::SUCCESS)
}
