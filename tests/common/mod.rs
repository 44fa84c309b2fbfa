#![allow(dead_code)]

use lamp_effects::{NUM_LEDS, OutputDriver, RandomSource, Rgb};

/// Random source that always returns the largest value allowed
///
/// `random8(8) == 0` never holds, so no rain heads are created and no stars
/// are ever spawned.
pub struct MaxRandom;

impl RandomSource for MaxRandom {
    fn random8(&mut self, n: u8) -> u8 {
        n - 1
    }

    fn random8_between(&mut self, _low: u8, high: u8) -> u8 {
        high - 1
    }

    fn random16(&mut self, n: u16) -> u16 {
        n - 1
    }
}

/// Random source that always returns the smallest value allowed
pub struct MinRandom;

impl RandomSource for MinRandom {
    fn random8(&mut self, _n: u8) -> u8 {
        0
    }

    fn random8_between(&mut self, low: u8, _high: u8) -> u8 {
        low
    }

    fn random16(&mut self, _n: u16) -> u16 {
        0
    }
}

/// Random source replaying a fixed script, wrapping around at the end
pub struct ScriptedRandom {
    values: Vec<u16>,
    position: usize,
}

impl ScriptedRandom {
    pub fn new(values: &[u16]) -> Self {
        Self {
            values: values.to_vec(),
            position: 0,
        }
    }

    fn next(&mut self) -> u16 {
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}

impl RandomSource for ScriptedRandom {
    fn random8(&mut self, n: u8) -> u8 {
        u8::try_from(self.next() % u16::from(n)).unwrap()
    }

    fn random8_between(&mut self, low: u8, high: u8) -> u8 {
        low + u8::try_from(self.next() % u16::from(high - low)).unwrap()
    }

    fn random16(&mut self, n: u16) -> u16 {
        self.next() % n
    }
}

/// Output driver keeping a copy of every written frame
#[derive(Default)]
pub struct RecordingOutput {
    pub frames: Vec<Vec<Rgb>>,
    pub rates: Vec<u8>,
}

impl OutputDriver for RecordingOutput {
    fn write(&mut self, colors: &[Rgb], fps: u8) {
        assert_eq!(colors.len(), NUM_LEDS);
        self.frames.push(colors.to_vec());
        self.rates.push(fps);
    }
}
