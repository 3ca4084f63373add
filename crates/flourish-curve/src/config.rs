//! Random-generation settings.
//!
//! A [`GenerationConfig`] captures everything random construction needs, so
//! a curve or gallery can be reproduced from the config alone.

use flourish_params::RandomContext;
use serde::{Deserialize, Serialize};

use crate::error::CurveError;
use crate::harmonograph::{self, Harmonograph, MAX_PENDULUMS};
use crate::symmetry::Symmetry;

/// Inputs to random curve construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Rng seed. Galleries derive per-item seeds from it.
    pub seed: u32,
    /// Pendulums per geometric dimension.
    pub pendulums: usize,
    /// Symmetries to choose from.
    pub symmetries: Vec<Symmetry>,
    /// Time at which the ramp envelope reaches one.
    pub ramp_stop: f64,
    /// Number of curves in a gallery.
    pub gallery_size: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: Self::DEFAULT_SEED,
            pendulums: Self::DEFAULT_PENDULUMS,
            symmetries: Self::DEFAULT_SYMMETRIES.to_vec(),
            ramp_stop: Self::DEFAULT_RAMP_STOP,
            gallery_size: Self::DEFAULT_GALLERY_SIZE,
        }
    }
}

impl GenerationConfig {
    pub const DEFAULT_SEED: u32 = 0;

    pub const DEFAULT_PENDULUMS: usize = 2;

    pub const DEFAULT_SYMMETRIES: &'static [Symmetry] = &Symmetry::SYMMETRIC;

    pub const DEFAULT_RAMP_STOP: f64 = harmonograph::DEFAULT_RAMP_STOP;

    /// Thumbnails on one gallery page.
    pub const DEFAULT_GALLERY_SIZE: usize = 30;

    /// Same config with a different seed.
    pub fn with_seed(&self, seed: u32) -> Self {
        Self {
            seed,
            ..self.clone()
        }
    }

    /// Checks the fields random construction depends on.
    pub fn validate(&self) -> Result<(), CurveError> {
        if self.symmetries.is_empty() {
            return Err(CurveError::EmptySymmetryChoices);
        }
        if self.pendulums > MAX_PENDULUMS {
            return Err(CurveError::TooManyPendulums {
                count: self.pendulums,
                max: MAX_PENDULUMS,
            });
        }
        if !self.ramp_stop.is_finite() || self.ramp_stop <= 0.0 {
            return Err(CurveError::InvalidSampling(format!(
                "ramp stop must be finite and positive, got {}",
                self.ramp_stop
            )));
        }
        Ok(())
    }

    /// Builds the random curve this config describes.
    pub fn build(&self) -> Result<Harmonograph, CurveError> {
        self.validate()?;
        let mut ctx = RandomContext::new(self.seed);
        Harmonograph::make_random(&mut ctx, self.pendulums, &self.symmetries, self.ramp_stop)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
