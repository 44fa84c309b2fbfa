//! Fire effect
//!
//! Each cell holds an ember value used as an index into a fire palette
//! (low = bright yellow, high = dark red). Embers rise one row per frame and
//! cool down on the way up. The bottom row is reseeded every frame.

use super::Effect;
use crate::{
    color::{Palette16, Rgb, color_from_palette, palette_from_u32},
    frame::FrameBuffer,
    grid::{COLS, Grid, ROWS},
    random::RandomSource,
};

const FIRE_PALETTE: Palette16 = palette_from_u32([
    0xFF_D0_33, 0xFF_BE_33, 0xFE_AE_01, 0xFE_9A_01, //
    0xFE_8F_01, 0xFA_7D_01, 0xEF_71_01, 0xD8_60_01, //
    0xAF_4A_01, 0x92_37_01, 0x65_18_02, 0x47_02_02, //
    0x2E_00_01, 0x14_01_01, 0x07_01_01, 0x05_00_00, //
]);

/// Initial ember value, the darkest palette stop
const DARK_EMBER: u8 = 0xF0;

/// Saturating boost applied to an ember as it rises
const RISE_BOOST: u8 = 0x1F;
/// Subtracted after the boost
const RISE_DECAY: u8 = 0x0F;

/// Fresh bottom-row embers are drawn from `[SPARK_MIN, SPARK_MAX)`
const SPARK_MIN: u8 = 0x20;
const SPARK_MAX: u8 = 0x90;

/// Fire simulation
#[derive(Debug, Clone)]
pub struct FireEffect<R> {
    embers: Grid<u8>,
    rng: R,
}

impl FireEffect<fastrand::Rng> {
    /// Create a fire seeded with a [`fastrand::Rng`]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(fastrand::Rng::with_seed(seed))
    }
}

impl<R: RandomSource> FireEffect<R> {
    /// Create a fire with every cell dark
    pub const fn new(rng: R) -> Self {
        Self {
            embers: Grid::filled(DARK_EMBER),
            rng,
        }
    }

    /// Ember value of a cell
    pub fn heat(&self, row: u8, col: u8) -> u8 {
        self.embers.get(row, col)
    }

    /// Colour of a cell for the current state
    pub fn color_at(&self, row: u8, col: u8) -> Rgb {
        color_from_palette(&FIRE_PALETTE, self.embers.get(row, col))
    }
}

impl<R: RandomSource> Effect for FireEffect<R> {
    const FPS: u8 = 30;

    fn render(&self, frame: &mut FrameBuffer) {
        frame.fill_with(|row, col| self.color_at(row, col));
    }

    fn advance(&mut self) {
        // Top to bottom, so every row reads the previous frame's row below.
        for row in (1..ROWS).rev() {
            for col in 0..COLS {
                let below = self.embers.get(row - 1, col);
                let risen = below.saturating_add(RISE_BOOST).saturating_sub(RISE_DECAY);
                self.embers.set(row, col, risen);
            }
        }

        for col in 0..COLS {
            let spark = self.rng.random8_between(SPARK_MIN, SPARK_MAX);
            self.embers.set(0, col, spark);
        }
    }

    fn reset(&mut self) {
        self.embers.fill(DARK_EMBER);
    }
}
