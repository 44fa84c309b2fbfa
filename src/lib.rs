#![no_std]

pub mod color;
pub mod effect;
pub mod frame;
pub mod frame_scheduler;
pub mod grid;
pub mod math8;
pub mod output;
pub mod random;
pub mod renderer;

pub use color::{Palette16, RAINBOW_COLORS, Rgb, color_from_palette};
pub use effect::{
    Effect, EffectId, EffectSlot, FireEffect, RainEffect, RainbowEffect, StarfieldEffect,
};
pub use frame::FrameBuffer;
pub use frame_scheduler::FramePacer;
pub use grid::{COLS, Grid, NUM_LEDS, ROWS};
pub use output::SmartLedsOutput;
pub use random::RandomSource;
pub use renderer::Renderer;

pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The renderer is generic over this trait.
pub trait OutputDriver {
    /// Write a complete frame to the LED matrix
    ///
    /// `colors` always holds [`NUM_LEDS`] entries in linear-index order
    /// (see [`grid::index`]). `fps` is the rate the frame is paced at, for
    /// drivers that refresh or dither between frames.
    fn write(&mut self, colors: &[Rgb], fps: u8);
}
