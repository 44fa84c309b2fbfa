//! Adapter for `smart-leds` strip drivers

use smart_leds::{RGB8, SmartLedsWrite};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{OutputDriver, color::Rgb};

/// Output driver backed by any [`SmartLedsWrite`] implementation
///
/// Write errors are dropped: a failed frame is simply replaced by the next
/// one. With the `esp32-log` feature they are printed.
pub struct SmartLedsOutput<W> {
    writer: W,
}

impl<W> SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = RGB8>,
    W::Error: core::fmt::Debug,
{
    /// Wrap an already initialized strip driver
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Release the wrapped driver
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = RGB8>,
    W::Error: core::fmt::Debug,
{
    fn write(&mut self, colors: &[Rgb], _fps: u8) {
        if let Err(_error) = self.writer.write(colors.iter().copied()) {
            #[cfg(feature = "esp32-log")]
            println!("[SmartLedsOutput.write] failed to write frame: {:?}", _error);
        }
    }
}
