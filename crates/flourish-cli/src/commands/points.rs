//! Points command implementation
//!
//! Rebuilds a curve from its query string and dumps sample tuples as CSV.

use anyhow::{Context, Result};
use colored::Colorize;
use flourish_curve::Harmonograph;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use tracing::info;

/// Output width used to pick a sample step when `--dt` is absent.
pub const DEFAULT_WIDTH: u32 = 800;

/// Sampling options for the points command.
#[derive(Debug, Clone, PartialEq)]
pub struct PointsOptions {
    /// Dimensions to sample. Empty means the style preset's dimensions.
    pub dims: Vec<String>,
    /// Sample step. `None` picks the style's step for `width`.
    pub dt: Option<f64>,
    pub width: u32,
    /// Rescale all components jointly into `[-0.5, 0.5]`.
    pub normalize: bool,
    /// Stop after this many rows.
    pub limit: Option<usize>,
}

impl Default for PointsOptions {
    fn default() -> Self {
        Self {
            dims: Vec::new(),
            dt: None,
            width: DEFAULT_WIDTH,
            normalize: false,
            limit: None,
        }
    }
}

/// Resolves the dimension list and step for `curve`.
pub fn sampling(curve: &Harmonograph, options: &PointsOptions) -> Result<(Vec<String>, f64)> {
    let style = curve.render_style().context("Curve has no usable style")?;
    let dims = if options.dims.is_empty() {
        style.dimensions().iter().map(|d| d.to_string()).collect()
    } else {
        options.dims.clone()
    };
    let dt = options.dt.unwrap_or_else(|| style.dt_for_width(options.width));
    Ok((dims, dt))
}

/// Writes the CSV header and rows for `curve` to `out`. Returns the row count.
pub fn write_csv(curve: &Harmonograph, options: &PointsOptions, out: &mut impl Write) -> Result<usize> {
    let (dims, dt) = sampling(curve, options)?;
    let names: Vec<&str> = dims.iter().map(String::as_str).collect();
    let limit = options.limit.unwrap_or(usize::MAX);
    info!(dims = ?names, dt, normalize = options.normalize, "sampling curve");

    writeln!(out, "{}", names.join(","))?;
    let rows: Box<dyn Iterator<Item = Vec<f64>> + '_> = if options.normalize {
        Box::new(curve.normalized_points(&names, dt)?.into_iter())
    } else {
        Box::new(curve.points(&names, dt)?)
    };

    let mut count = 0;
    for row in rows.take(limit) {
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        writeln!(out, "{}", line.join(","))?;
        count += 1;
    }
    Ok(count)
}

/// Run the points command
///
/// # Arguments
/// * `query` - Curve query string or link
/// * `options` - Dimensions, step, normalization and row limit
pub fn run(query: &str, options: &PointsOptions) -> Result<ExitCode> {
    let curve = super::parse_curve(query)?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let count = write_csv(&curve, options, &mut out)?;
    out.flush().context("Failed to write points")?;

    eprintln!("{} {} rows", "Points:".cyan().bold(), count);
    Ok(ExitCode::SUCCESS)
}
