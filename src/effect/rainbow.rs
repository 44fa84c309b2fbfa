//! Rainbow effect
//!
//! Fills the whole matrix with one colour that slowly walks around the hue
//! wheel, one palette step per frame.

use super::Effect;
use crate::{
    color::{RAINBOW_COLORS, Rgb, color_from_palette},
    frame::FrameBuffer,
};

/// Solid colour cycling through the rainbow palette
#[derive(Debug, Clone, Default)]
pub struct RainbowEffect {
    hue_index: u8,
}

impl RainbowEffect {
    pub const fn new() -> Self {
        Self { hue_index: 0 }
    }

    /// Current position in the rainbow palette
    pub const fn hue_index(&self) -> u8 {
        self.hue_index
    }

    /// Colour shown on every cell
    pub fn color(&self) -> Rgb {
        color_from_palette(&RAINBOW_COLORS, self.hue_index)
    }
}

impl Effect for RainbowEffect {
    const FPS: u8 = 2;

    fn render(&self, frame: &mut FrameBuffer) {
        frame.fill(self.color());
    }

    fn advance(&mut self) {
        self.hue_index = self.hue_index.wrapping_add(1);
    }

    fn reset(&mut self) {
        self.hue_index = 0;
    }
}
