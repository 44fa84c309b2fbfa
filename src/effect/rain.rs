//! Digital rain effect
//!
//! A sparse set of "heads" falls down every column, wrapping around from the
//! bottom back to the top. Each head lights its cell at full intensity and
//! leaves a green trail that fades over a few frames. A handful of heads
//! jump to random cells every frame so the pattern never settles.

use super::Effect;
use crate::{
    color::Rgb,
    frame::FrameBuffer,
    grid::{COLS, Grid, NUM_LEDS},
    math8::scale_by_255,
    random::RandomSource,
};

/// Every cell starts as a head with probability `1 / HEAD_ODDS`
const HEAD_ODDS: u8 = 8;

/// Number of random head moves attempted per frame
const SHUFFLE_ATTEMPTS: u8 = 24;

/// Trail fade per frame
const TRAIL_FADE: u8 = 0x30;

/// Full-intensity channel levels
const RED_LEVEL: u8 = 0x20;
const GREEN_LEVEL: u8 = 0xC4;
const BLUE_LEVEL: u8 = 0x20;

#[allow(clippy::cast_possible_truncation)]
const CELL_COUNT: u16 = NUM_LEDS as u16;

/// Digital rain simulation
#[derive(Debug, Clone)]
pub struct RainEffect<R> {
    heads: Grid<bool>,
    trail: Grid<u8>,
    rng: R,
}

impl RainEffect<fastrand::Rng> {
    /// Create a rain effect seeded with a [`fastrand::Rng`]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(fastrand::Rng::with_seed(seed))
    }
}

impl<R: RandomSource> RainEffect<R> {
    /// Create a rain effect with randomly placed heads and no trails
    pub fn new(rng: R) -> Self {
        let mut effect = Self {
            heads: Grid::filled(false),
            trail: Grid::filled(0),
            rng,
        };
        effect.scatter_heads();
        effect
    }

    /// Whether a cell currently holds a head
    pub fn is_head(&self, row: u8, col: u8) -> bool {
        self.heads.get(row, col)
    }

    /// Trail intensity of a cell
    pub fn intensity(&self, row: u8, col: u8) -> u8 {
        self.trail.get(row, col)
    }

    /// Number of heads on the whole matrix
    pub fn head_count(&self) -> usize {
        self.heads.as_slice().iter().filter(|head| **head).count()
    }

    /// Colour of a cell for the current state
    pub fn color_at(&self, row: u8, col: u8) -> Rgb {
        let intensity = self.trail.get(row, col);
        Rgb {
            r: scale_by_255(intensity, RED_LEVEL),
            g: scale_by_255(intensity, GREEN_LEVEL),
            b: scale_by_255(intensity, BLUE_LEVEL),
        }
    }

    fn scatter_heads(&mut self) {
        for head in self.heads.cells_mut() {
            *head = self.rng.random8(HEAD_ODDS) == 0;
        }
    }

    /// Move a few heads to random free cells
    fn shuffle_heads(&mut self) {
        let heads = self.heads.cells_mut();
        for _ in 0..SHUFFLE_ATTEMPTS {
            let from = usize::from(self.rng.random16(CELL_COUNT));
            let to = usize::from(self.rng.random16(CELL_COUNT));
            if heads[from] && !heads[to] {
                heads[from] = false;
                heads[to] = true;
            }
        }
    }
}

impl<R: RandomSource> Effect for RainEffect<R> {
    const FPS: u8 = 10;

    fn render(&self, frame: &mut FrameBuffer) {
        frame.fill_with(|row, col| self.color_at(row, col));
    }

    fn advance(&mut self) {
        self.shuffle_heads();

        for intensity in self.trail.cells_mut() {
            *intensity = intensity.saturating_sub(TRAIL_FADE);
        }

        // Heads fall one row, the bottom one wraps to the top.
        for col in 0..COLS {
            self.heads.column_mut(col).rotate_left(1);
        }

        for (intensity, head) in self
            .trail
            .cells_mut()
            .iter_mut()
            .zip(self.heads.as_slice())
        {
            if *head {
                *intensity = u8::MAX;
            }
        }
    }

    fn reset(&mut self) {
        self.trail.fill(0);
        self.scatter_heads();
    }
}
