//! Render style presets.
//!
//! The curve only stores a style index. These presets describe, for
//! renderers, which dimensions each style consumes and how finely to sample
//! for a given output width. No drawing happens here.

use serde::{Deserialize, Serialize};

use crate::error::CurveError;

/// Sample step lookup: first entry whose width limit exceeds the width.
type DtTable = &'static [(u32, f64)];

const ELEGANT_DTS: DtTable = &[(400, 0.02), (1000, 0.01), (u32::MAX, 0.002)];
const COLOR_DTS: DtTable = &[(400, 0.04), (1000, 0.01), (u32::MAX, 0.002)];

const GEOMETRY: &[&str] = &["x", "y"];
const GEOMETRY_WITH_HUE: &[&str] = &["x", "y", "j"];

/// A line-drawing preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderStyle {
    /// One continuous stroke in a single gray level.
    ElegantLine { line_width: f64, alpha: f64, gray: f64 },
    /// Per-segment strokes colored by the `j` dimension as hue.
    ColorLine {
        line_width: f64,
        alpha: f64,
        lightness: f64,
    },
}

/// Presets addressed by the curve's style index.
pub static STYLES: [RenderStyle; 4] = [
    RenderStyle::ElegantLine {
        line_width: 3.0,
        alpha: 1.0,
        gray: 0.0,
    },
    RenderStyle::ColorLine {
        line_width: 50.0,
        alpha: 0.1,
        lightness: 0.0,
    },
    RenderStyle::ColorLine {
        line_width: 10.0,
        alpha: 0.5,
        lightness: 0.5,
    },
    RenderStyle::ColorLine {
        line_width: 50.0,
        alpha: 0.1,
        lightness: 0.5,
    },
];

impl RenderStyle {
    /// Looks up a preset by index.
    pub fn preset(index: usize) -> Result<&'static RenderStyle, CurveError> {
        STYLES.get(index).ok_or(CurveError::UnknownStyle(index))
    }

    /// Dimensions this style reads from the point stream, in order.
    pub fn dimensions(&self) -> &'static [&'static str] {
        match self {
            RenderStyle::ElegantLine { .. } => GEOMETRY,
            RenderStyle::ColorLine { .. } => GEOMETRY_WITH_HUE,
        }
    }

    /// Sample step for an output `width` in pixels.
    pub fn dt_for_width(&self, width: u32) -> f64 {
        let table = match self {
            RenderStyle::ElegantLine { .. } => ELEGANT_DTS,
            RenderStyle::ColorLine { .. } => COLOR_DTS,
        };
        table
            .iter()
            .find(|(limit, _)| width < *limit)
            .map(|(_, dt)| *dt)
            .unwrap_or(0.002)
    }

    /// Stroke width relative to the output width.
    pub fn stroke_width(&self, width: u32) -> f64 {
        let line_width = match self {
            RenderStyle::ElegantLine { line_width, .. } => *line_width,
            RenderStyle::ColorLine { line_width, .. } => *line_width,
        };
        width as f64 * line_width / 10000.0
    }
}
