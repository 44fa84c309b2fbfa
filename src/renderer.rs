#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    OutputDriver,
    effect::Effect,
    frame::{FrameBuffer, blank_frame},
    frame_scheduler::FramePacer,
};

/// Drives effects frame by frame
///
/// The renderer owns the frame buffer and the output driver. The driver is
/// expected to be fully initialized (pins, power limits, colour correction)
/// before it is handed over.
pub struct Renderer<O: OutputDriver> {
    output: O,
    frame: FrameBuffer,
    pacer: FramePacer,
}

impl<O: OutputDriver> Renderer<O> {
    /// Create a new renderer writing to `output`
    pub fn new(output: O) -> Self {
        #[cfg(feature = "esp32-log")]
        println!("[Renderer.new] matrix {}x{}", crate::ROWS, crate::COLS);
        Self {
            output,
            frame: blank_frame(),
            pacer: FramePacer::new(),
        }
    }

    /// Show one frame of `effect`
    ///
    /// Renders the current state, writes it out, waits for the frame
    /// period of the effect and only then advances the effect state. The
    /// frame written out therefore always reflects the state before this
    /// call.
    pub fn update<E: Effect>(&mut self, effect: &mut E) {
        self.pacer.begin_frame();

        effect.render(&mut self.frame);
        self.output.write(self.frame.as_slice(), E::FPS);
        self.pacer.wait(E::FPS);

        effect.advance();
    }

    /// The last rendered frame
    pub const fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    pub const fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Release the output driver
    pub fn into_output(self) -> O {
        self.output
    }
}
