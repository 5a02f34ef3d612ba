pub mod fade;

pub use fade::ColorFade;

use std::time::{Duration, Instant};

/// Target frame rate
pub const TARGET_FPS: u32 = 30;

/// Frame duration for target FPS
pub const FRAME_DURATION: Duration = Duration::from_millis(1000 / TARGET_FPS as u64);

/// Paces redraws and measures the achieved frame rate
pub struct FrameClock {
    last_frame: Instant,
    fps_sample_start: Instant,
    fps_sample_count: u32,
    current_fps: u32,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_frame: now,
            fps_sample_start: now,
            fps_sample_count: 0,
            current_fps: TARGET_FPS,
        }
    }

    /// Check if it's time for a new frame
    pub fn should_render(&self) -> bool {
        self.last_frame.elapsed() >= FRAME_DURATION
    }

    /// Mark frame as rendered
    pub fn frame_rendered(&mut self) {
        self.last_frame = Instant::now();
        self.fps_sample_count += 1;

        if self.fps_sample_start.elapsed() >= Duration::from_secs(1) {
            self.current_fps = self.fps_sample_count;
            self.fps_sample_count = 0;
            self.fps_sample_start = Instant::now();
        }
    }

    pub fn fps(&self) -> u32 {
        self.current_fps
    }

    /// Time until next frame
    pub fn time_until_next_frame(&self) -> Duration {
        FRAME_DURATION.saturating_sub(self.last_frame.elapsed())
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
