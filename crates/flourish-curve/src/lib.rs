//! Flourish Curve Engine
//!
//! Harmonograph curves built from the parameter schema in
//! [`flourish_params`]:
//!
//! - **Waves**: damped sinusoids, one per pendulum
//! - **Ramp**: a linear envelope from zero
//! - **Time span**: the sampled window of the curve
//! - **Harmonograph**: named dimensions of summed waves, shaped by the ramp
//!
//! # Determinism
//!
//! Random construction draws from a seeded PCG32 stream, so a seed and a
//! [`GenerationConfig`] always produce the same curve. Every sampled value
//! is quantized to its encoding, so a curve rebuilt from its own short
//! parameters produces the identical point stream.
//!
//! # Example
//!
//! ```
//! use flourish_curve::{GenerationConfig, Harmonograph};
//!
//! let curve = GenerationConfig::default().with_seed(7).build()?;
//! let query = curve.short_parameters().to_query_string();
//!
//! let params = flourish_params::ShortParams::from_query_string(&query)?;
//! let rebuilt = Harmonograph::from_short_params("", &params)?;
//!
//! let a: Vec<Vec<f64>> = curve.points(&["x", "y"], 0.1)?.collect();
//! let b: Vec<Vec<f64>> = rebuilt.points(&["x", "y"], 0.1)?.collect();
//! assert_eq!(a, b);
//! # Ok::<(), flourish_curve::CurveError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`wave`], [`ramp`], [`timespan`] - The parameterized building blocks
//! - [`harmonograph`] - Curve assembly, decoding and random construction
//! - [`points`] - The lazy point stream and joint normalization
//! - [`symmetry`] - Frequency parity constraints
//! - [`style`] - Render style presets
//! - [`explore`] - One-parameter-away variants
//! - [`gallery`] - Seeded batches of random curves
//! - [`config`] - Random-generation settings

pub mod config;
pub mod error;
pub mod explore;
pub mod gallery;
pub mod harmonograph;
pub mod points;
pub mod ramp;
pub mod style;
pub mod symmetry;
pub mod timespan;
pub mod wave;

pub use config::GenerationConfig;
pub use error::CurveError;
pub use explore::{adjacent_variants, Variant, VariantGroup};
pub use gallery::{gallery, item_seed};
pub use harmonograph::{
    infer_pendulum_count, pendulum_name, CurveParameter, CurveSettings, Dimension, DimensionRole,
    Harmonograph, MAX_PENDULUMS,
};
pub use points::{normalize_jointly, Points, NORMALIZED_RANGE};
pub use ramp::Ramp;
pub use style::{RenderStyle, STYLES};
pub use symmetry::Symmetry;
pub use timespan::TimeSpan;
pub use wave::{Parity, Wave};
