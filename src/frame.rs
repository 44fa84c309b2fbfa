//! Frame buffer handed to the output driver

use crate::{color::Rgb, grid::Grid};

/// Colours of the next frame to display
///
/// The buffer is rewritten in full every frame. Anything that has to
/// survive between frames lives in the effect state instead.
pub type FrameBuffer = Grid<Rgb>;

/// Create an all-black frame buffer
pub const fn blank_frame() -> FrameBuffer {
    Grid::filled(Rgb { r: 0, g: 0, b: 0 })
}
