//! Frame pacing
//!
//! Effects run at a fixed frame rate. The pacer blocks the calling thread
//! until a full frame period has passed since the frame started, so
//! consecutive frames are never closer together than `1000 / fps` ms.
//! There is no drift correction: a slow frame simply shortens the wait.

use embassy_time::{Duration, Instant, block_for};

/// Duration of one frame at `fps` frames per second
///
/// A rate of 0 is treated as 1 FPS.
#[allow(clippy::cast_lossless)]
pub const fn frame_duration(fps: u8) -> Duration {
    let fps = if fps == 0 { 1 } else { fps as u64 };
    Duration::from_millis(1000 / fps)
}

/// Blocking frame pacer
#[derive(Debug, Default, Clone)]
pub struct FramePacer {
    frame_start: Option<Instant>,
}

impl FramePacer {
    pub const fn new() -> Self {
        Self { frame_start: None }
    }

    /// Mark the start of a new frame
    pub fn begin_frame(&mut self) {
        self.frame_start = Some(Instant::now());
    }

    /// Block until the current frame has lasted a full period at `fps`
    ///
    /// Without a preceding [`begin_frame`](Self::begin_frame) the whole
    /// period is waited out.
    pub fn wait(&mut self, fps: u8) {
        let period = frame_duration(fps);
        let Some(frame_start) = self.frame_start.take() else {
            block_for(period);
            return;
        };

        let deadline = frame_start + period;
        let now = Instant::now();
        if now < deadline {
            block_for(deadline - now);
        }
    }
}
