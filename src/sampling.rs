use crate::{grid::Orientation, MapError};

use rand::{prelude::*, rngs::SmallRng};
use rand_distr::{Bernoulli, Distribution, Uniform};

pub const DEFAULT_HORIZONTAL_SPLIT_CHANCE: f64 = 0.5;

/// Seeds a `SmallRng` from four words, so map specs can carry their seed as plain data.
pub fn small_rng(seed: [u32; 4]) -> SmallRng {
    let mut bytes = [0u8; 16];
    for (chunk, word) in bytes.chunks_exact_mut(4).zip(seed.iter()) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }

    SmallRng::from_seed(bytes)
}

/// The random choices made while partitioning a map. Implemented over any `Rng` by
/// `RngSplitSampler`; tests script it directly.
pub trait SplitSampler {
    fn sample_orientation(&mut self) -> Orientation;

    /// A raw door draw in `0..span`, before the midpoint tie-break. `span` is never zero.
    fn sample_door(&mut self, span: usize) -> usize;
}

pub struct RngSplitSampler<R> {
    rng: R,
    horizontal: Bernoulli,
}

impl<R: Rng> RngSplitSampler<R> {
    pub fn new(rng: R) -> Result<Self, MapError> {
        Self::with_horizontal_chance(rng, DEFAULT_HORIZONTAL_SPLIT_CHANCE)
    }

    pub fn with_horizontal_chance(rng: R, chance: f64) -> Result<Self, MapError> {
        let horizontal = Bernoulli::new(chance).map_err(|_| {
            MapError::InvalidSpec(format!(
                "horizontal split chance {} is not within [0, 1]",
                chance
            ))
        })?;

        Ok(RngSplitSampler { rng, horizontal })
    }
}

impl<R: Rng> SplitSampler for RngSplitSampler<R> {
    fn sample_orientation(&mut self) -> Orientation {
        if self.horizontal.sample(&mut self.rng) {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    fn sample_door(&mut self, span: usize) -> usize {
        Uniform::from(0..span).sample(&mut self.rng)
    }
}

/// Where the door goes for a raw draw along a wall of `span` cells. A draw landing on the
/// midpoint `(span - 1) / 2` moves one cell later, so doors never sit dead center. On a
/// one-cell wall the midpoint is also the last cell, and the door stays there.
pub fn door_position(draw: usize, span: usize) -> usize {
    let middle = span.saturating_sub(1) / 2;
    if draw == middle {
        (middle + 1).min(span.saturating_sub(1))
    } else {
        draw
    }
}
