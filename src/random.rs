//! Random number source used by the effects
//!
//! Effects are generic over [`RandomSource`] so tests and host tools can
//! inject a scripted or seeded source. [`fastrand::Rng`] is the default.

/// Uniform random integers
pub trait RandomSource {
    /// Uniform value in `[0, n)`
    fn random8(&mut self, n: u8) -> u8;

    /// Uniform value in `[low, high)`
    fn random8_between(&mut self, low: u8, high: u8) -> u8;

    /// Uniform value in `[0, n)`
    fn random16(&mut self, n: u16) -> u16;
}

impl RandomSource for fastrand::Rng {
    fn random8(&mut self, n: u8) -> u8 {
        self.u8(..n)
    }

    fn random8_between(&mut self, low: u8, high: u8) -> u8 {
        self.u8(low..high)
    }

    fn random16(&mut self, n: u16) -> u16 {
        self.u16(..n)
    }
}
