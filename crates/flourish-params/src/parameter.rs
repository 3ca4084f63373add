//! Parameter descriptors.
//!
//! A [`ParameterSpec`] describes one scalar field of a parameterized type:
//! how it is named, how it is written into a short parameter string, which
//! neighboring values an explorer should offer, and how to sample it.
//! Specs are plain `const` data so a type can publish its ordered schema as
//! a `static` slice.

use serde::{Deserialize, Serialize};

use crate::context::RandomContext;
use crate::error::ParamError;

/// Sampler for a parameter. Reads the rng and any active overrides.
pub type RandomFn = fn(&mut RandomContext) -> f64;

/// Produces the ordered neighbor candidates of a value.
pub type AdjacentFn = fn(f64) -> Vec<f64>;

/// Numeric domain of a parameter's encoded form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Encoded value must be integral (e.g. frequency, style index).
    Integer,
    /// Any finite decimal.
    Real,
}

/// How neighbor values are generated for exploration.
///
/// A step and a custom function are mutually exclusive by construction.
#[derive(Debug, Clone, Copy)]
pub enum Adjacency {
    /// No neighbors.
    None,
    /// `[v - 2s, v - s, v + s, v + 2s]`.
    Step(f64),
    /// Whatever ordered list the function returns.
    Custom(AdjacentFn),
}

/// Descriptor for one declared parameter.
#[derive(Debug, Clone, Copy)]
pub struct ParameterSpec {
    name: &'static str,
    key: &'static str,
    default: f64,
    kind: ValueKind,
    places: Option<u32>,
    scale: f64,
    adjacency: Adjacency,
    random: Option<RandomFn>,
}

impl ParameterSpec {
    /// Creates a real-valued spec with unit scale, no rounding, no neighbors
    /// and no sampler.
    pub const fn new(name: &'static str, key: &'static str, default: f64) -> Self {
        Self {
            name,
            key,
            default,
            kind: ValueKind::Real,
            places: None,
            scale: 1.0,
            adjacency: Adjacency::None,
            random: None,
        }
    }

    /// Marks the encoded value as integral.
    pub const fn integer(mut self) -> Self {
        self.kind = ValueKind::Integer;
        self
    }

    /// Rounds the encoded value to `places` decimals.
    pub const fn places(mut self, places: u32) -> Self {
        self.places = Some(places);
        self
    }

    /// Sets the multiplier applied from stored value to encoded value.
    pub const fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Uses a symmetric four-point neighborhood. Replaces any custom function.
    pub const fn adjacent_step(mut self, step: f64) -> Self {
        self.adjacency = Adjacency::Step(step);
        self
    }

    /// Uses an explicit neighbor function. Replaces any step.
    pub const fn adjacent_fn(mut self, f: AdjacentFn) -> Self {
        self.adjacency = Adjacency::Custom(f);
        self
    }

    /// Sets the random sampler.
    pub const fn random(mut self, f: RandomFn) -> Self {
        self.random = Some(f);
        self
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Short key, unique within the owning type.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Value used when a short param is absent.
    pub fn default(&self) -> f64 {
        self.default
    }

    /// Numeric domain of the encoded form.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Decimal rounding applied when encoding.
    pub fn decimal_places(&self) -> Option<u32> {
        self.places
    }

    /// Stored-to-encoded multiplier.
    pub fn scale_factor(&self) -> f64 {
        self.scale
    }

    /// Neighbor rule.
    pub fn adjacency(&self) -> Adjacency {
        self.adjacency
    }

    /// Whether this spec has a sampler.
    pub fn is_random(&self) -> bool {
        self.random.is_some()
    }

    /// The number the short string of `value` will spell: scaled, rounded to
    /// the declared places, and to a whole number for integer specs.
    ///
    /// Rounding is skipped where it would overflow, so every finite result
    /// stays finite.
    fn encoded_number(&self, value: f64) -> f64 {
        let mut scaled = value * self.scale;
        if let Some(places) = self.places {
            let factor = 10f64.powi(places as i32);
            let shifted = scaled * factor;
            if shifted.is_finite() {
                scaled = shifted.round() / factor;
            }
        }
        if self.kind == ValueKind::Integer {
            scaled = scaled.round();
        }
        if scaled == 0.0 {
            // Drops the sign of negative zero.
            scaled = 0.0;
        }
        scaled
    }

    /// Encodes a stored value into its short string form.
    ///
    /// The value is scaled, rounded to the declared places (whole numbers
    /// for integer specs) and rendered with the shortest decimal that parses
    /// back to the same number.
    pub fn encode(&self, value: f64) -> String {
        format!("{}", self.encoded_number(value))
    }

    /// Decodes a short string back to a stored value.
    ///
    /// `key` is the full short key and is only used to name the failure.
    pub fn decode(&self, key: &str, raw: &str) -> Result<f64, ParamError> {
        let parsed: f64 = raw
            .trim()
            .parse()
            .map_err(|e| ParamError::parse(key, raw, format!("not a number ({})", e)))?;
        if !parsed.is_finite() {
            return Err(ParamError::parse(key, raw, "value must be finite"));
        }
        if self.kind == ValueKind::Integer && parsed.fract() != 0.0 {
            return Err(ParamError::parse(key, raw, "expected an integer"));
        }
        Ok(parsed / self.scale)
    }

    /// Returns the value as it will be after an encode/decode round trip.
    ///
    /// Values whose scaled form is not finite have no short string and are
    /// returned unchanged.
    pub fn quantize(&self, value: f64) -> f64 {
        let encoded = self.encoded_number(value);
        if encoded.is_finite() {
            encoded / self.scale
        } else {
            value
        }
    }

    /// Returns the ordered neighbor candidates of `value`.
    pub fn neighbors(&self, value: f64) -> Vec<f64> {
        match self.adjacency {
            Adjacency::None => Vec::new(),
            Adjacency::Step(step) => vec![
                value - 2.0 * step,
                value - step,
                value + step,
                value + 2.0 * step,
            ],
            Adjacency::Custom(f) => f(value),
        }
    }

    /// Draws a value, or returns the default when there is no sampler.
    ///
    /// Sampled values are quantized so they survive encoding unchanged.
    pub fn sample(&self, ctx: &mut RandomContext) -> f64 {
        match self.random {
            Some(f) => self.quantize(f(ctx)),
            None => self.default,
        }
    }
}
