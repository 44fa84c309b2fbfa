//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait.

mod fire;
mod rain;
mod rainbow;
mod starfield;

#[cfg(feature = "esp32-log")]
use esp_println::println;

pub use fire::FireEffect;
pub use rain::RainEffect;
pub use rainbow::RainbowEffect;
pub use starfield::StarfieldEffect;

use crate::{OutputDriver, frame::FrameBuffer, random::RandomSource, renderer::Renderer};

const EFFECT_NAME_FIRE: &str = "fire";
const EFFECT_NAME_MATRIX: &str = "matrix";
const EFFECT_NAME_STARS: &str = "stars";
const EFFECT_NAME_RAINBOW: &str = "rainbow";

const EFFECT_ID_FIRE: u8 = 0;
const EFFECT_ID_MATRIX: u8 = 1;
const EFFECT_ID_STARS: u8 = 2;
const EFFECT_ID_RAINBOW: u8 = 3;

pub trait Effect {
    /// Target frame rate
    const FPS: u8;

    /// Write the current state into the frame buffer
    fn render(&self, frame: &mut FrameBuffer);

    /// Compute the state for the next frame
    fn advance(&mut self);

    /// Return to the initial state
    fn reset(&mut self) {}
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot<R = fastrand::Rng> {
    /// Rising embers
    Fire(FireEffect<R>),
    /// Falling green trails
    Matrix(RainEffect<R>),
    /// Twinkling stars
    Stars(StarfieldEffect<R>),
    /// Solid colour hue cycle
    Rainbow(RainbowEffect),
}

/// Known effect ids
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    Fire = EFFECT_ID_FIRE,
    Matrix = EFFECT_ID_MATRIX,
    Stars = EFFECT_ID_STARS,
    Rainbow = EFFECT_ID_RAINBOW,
}

impl EffectId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_FIRE => Self::Fire,
            EFFECT_ID_MATRIX => Self::Matrix,
            EFFECT_ID_STARS => Self::Stars,
            EFFECT_ID_RAINBOW => Self::Rainbow,
            _ => return None,
        })
    }

    /// Build a fresh effect, drawing randomness from `rng`
    pub fn to_slot<R: RandomSource>(self, rng: R) -> EffectSlot<R> {
        match self {
            Self::Fire => EffectSlot::Fire(FireEffect::new(rng)),
            Self::Matrix => EffectSlot::Matrix(RainEffect::new(rng)),
            Self::Stars => EffectSlot::Stars(StarfieldEffect::new(rng)),
            Self::Rainbow => EffectSlot::Rainbow(RainbowEffect::new()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fire => EFFECT_NAME_FIRE,
            Self::Matrix => EFFECT_NAME_MATRIX,
            Self::Stars => EFFECT_NAME_STARS,
            Self::Rainbow => EFFECT_NAME_RAINBOW,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_FIRE => Some(Self::Fire),
            EFFECT_NAME_MATRIX => Some(Self::Matrix),
            EFFECT_NAME_STARS => Some(Self::Stars),
            EFFECT_NAME_RAINBOW => Some(Self::Rainbow),
            _ => None,
        }
    }
}

impl<R: RandomSource> EffectSlot<R> {
    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::Fire(_) => EffectId::Fire,
            Self::Matrix(_) => EffectId::Matrix,
            Self::Stars(_) => EffectId::Stars,
            Self::Rainbow(_) => EffectId::Rainbow,
        }
    }

    /// Target frame rate of the current effect
    ///
    /// Derived from each effect's `Effect::FPS` constant.
    pub fn fps(&self) -> u8 {
        match self {
            Self::Fire(_) => FireEffect::<R>::FPS,
            Self::Matrix(_) => RainEffect::<R>::FPS,
            Self::Stars(_) => StarfieldEffect::<R>::FPS,
            Self::Rainbow(_) => RainbowEffect::FPS,
        }
    }

    /// Render the current effect
    pub fn render(&self, frame: &mut FrameBuffer) {
        match self {
            Self::Fire(effect) => effect.render(frame),
            Self::Matrix(effect) => effect.render(frame),
            Self::Stars(effect) => effect.render(frame),
            Self::Rainbow(effect) => effect.render(frame),
        }
    }

    /// Advance the current effect by one frame
    pub fn advance(&mut self) {
        match self {
            Self::Fire(effect) => effect.advance(),
            Self::Matrix(effect) => effect.advance(),
            Self::Stars(effect) => effect.advance(),
            Self::Rainbow(effect) => effect.advance(),
        }
    }

    /// Reset the effect state
    pub fn reset(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!("[EffectSlot.reset] resetting {}", self.id().as_str());
        match self {
            Self::Fire(effect) => Effect::reset(effect),
            Self::Matrix(effect) => Effect::reset(effect),
            Self::Stars(effect) => Effect::reset(effect),
            Self::Rainbow(effect) => Effect::reset(effect),
        }
    }

    /// Show one frame of the current effect, see [`Renderer::update`]
    pub fn update<O: OutputDriver>(&mut self, renderer: &mut Renderer<O>) {
        match self {
            Self::Fire(effect) => renderer.update(effect),
            Self::Matrix(effect) => renderer.update(effect),
            Self::Stars(effect) => renderer.update(effect),
            Self::Rainbow(effect) => renderer.update(effect),
        }
    }
}
