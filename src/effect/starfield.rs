//! Starfield effect
//!
//! Stars light up at random cells and slowly fade out.

use super::Effect;
use crate::{
    color::Rgb,
    frame::FrameBuffer,
    grid::{COLS, Grid, ROWS},
    random::RandomSource,
};

/// A star is spawned with probability `1 / SPAWN_ODDS` per frame
const SPAWN_ODDS: u8 = 4;

/// New stars get a brightness in `[STAR_MIN, STAR_MAX)`
const STAR_MIN: u8 = 0xA0;
const STAR_MAX: u8 = 0xFF;

const FADE: u8 = 2;

/// Starfield simulation
#[derive(Debug, Clone)]
pub struct StarfieldEffect<R> {
    stars: Grid<u8>,
    rng: R,
}

impl StarfieldEffect<fastrand::Rng> {
    /// Create a starfield seeded with a [`fastrand::Rng`]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(fastrand::Rng::with_seed(seed))
    }
}

impl<R: RandomSource> StarfieldEffect<R> {
    /// Create an empty starfield
    pub const fn new(rng: R) -> Self {
        Self {
            stars: Grid::filled(0),
            rng,
        }
    }

    /// Brightness of a cell
    pub fn intensity(&self, row: u8, col: u8) -> u8 {
        self.stars.get(row, col)
    }

    pub fn color_at(&self, row: u8, col: u8) -> Rgb {
        let value = self.stars.get(row, col);
        Rgb::new(value, value, value)
    }
}

impl<R: RandomSource> Effect for StarfieldEffect<R> {
    const FPS: u8 = 60;

    fn render(&self, frame: &mut FrameBuffer) {
        frame.fill_with(|row, col| self.color_at(row, col));
    }

    fn advance(&mut self) {
        // Fade before spawning so a new star keeps its full brightness for
        // the next frame.
        for star in self.stars.cells_mut() {
            *star = star.saturating_sub(FADE);
        }

        if self.rng.random8(SPAWN_ODDS) == 0 {
            let row = self.rng.random8(ROWS);
            let col = self.rng.random8(COLS);
            let brightness = self.rng.random8_between(STAR_MIN, STAR_MAX);
            self.stars.set(row, col, brightness);
        }
    }

    fn reset(&mut self) {
        self.stars.fill(0);
    }
}
