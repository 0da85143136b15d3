//! Default placement for boxes added without a drag.
//!
//! Any valid, visible rectangle would do; a little randomness keeps several
//! quickly added boxes from stacking exactly on top of each other.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::config::PlacementConfig;
use crate::model::LabelRect;

/// Seedable generator of default box rectangles.
#[derive(Debug, Clone)]
pub struct BoxPlacer {
    origin: (f32, f32),
    size: (f32, f32),
    rng: Pcg64Mcg,
}

impl BoxPlacer {
    /// Create a placer from configuration.
    ///
    /// Ranges are clamped into `[0, 1]` and reordered if given backwards.
    pub fn new(config: &PlacementConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => Pcg64Mcg::seed_from_u64(seed),
            None => Pcg64Mcg::from_rng(&mut rand::rng()),
        };

        Self {
            origin: unit_range(config.origin_min, config.origin_max),
            size: unit_range(config.size_min, config.size_max),
            rng,
        }
    }

    /// Create a placer with default ranges and a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(&PlacementConfig {
            seed: Some(seed),
            ..PlacementConfig::default()
        })
    }

    /// Produce the next default rectangle, already validated.
    pub fn next_rect(&mut self) -> LabelRect {
        let rect = LabelRect {
            x: self.sample(self.origin),
            y: self.sample(self.origin),
            width: self.sample(self.size),
            height: self.sample(self.size),
        };
        rect.validated()
    }

    fn sample(&mut self, (min, max): (f32, f32)) -> f32 {
        self.rng.random_range(min..=max)
    }
}

impl Default for BoxPlacer {
    fn default() -> Self {
        Self::new(&PlacementConfig::default())
    }
}

fn unit_range(a: f32, b: f32) -> (f32, f32) {
    let a = if a.is_finite() { a.clamp(0.0, 1.0) } else { 0.0 };
    let b = if b.is_finite() { b.clamp(0.0, 1.0) } else { 1.0 };
    (a.min(b), a.max(b))
}
