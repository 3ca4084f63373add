//! Seeded galleries of random curves.

use flourish_params::{DeterministicRng, RandomContext};
use tracing::{debug, info};

use crate::config::GenerationConfig;
use crate::error::CurveError;
use crate::harmonograph::Harmonograph;

/// Seed of the `index`-th gallery item.
pub fn item_seed(config: &GenerationConfig, index: usize) -> u32 {
    DeterministicRng::derive_variant_seed(config.seed, index as u32)
}

/// Builds `config.gallery_size` random curves, each from an independent
/// rng stream seeded by [`item_seed`].
pub fn gallery(config: &GenerationConfig) -> Result<Vec<Harmonograph>, CurveError> {
    config.validate()?;
    info!(seed = config.seed, size = config.gallery_size, "building gallery");
    (0..config.gallery_size)
        .map(|index| {
            let seed = item_seed(config, index);
            debug!(index, seed, "gallery item");
            let mut ctx = RandomContext::new(seed);
            Harmonograph::make_random(&mut ctx, config.pendulums, &config.symmetries, config.ramp_stop)
        })
        .collect()
}
