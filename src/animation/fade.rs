use std::time::{Duration, Instant};

use palette::Srgb;

use crate::render::colors::Gradient;

/// How long an indicator takes to reach a new color
pub const FADE_DURATION: Duration = Duration::from_millis(400);

/// Ease out cubic - fast start, slow end
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Color transition towards the latest target color.
///
/// The target is what the dispatcher set; `current` is only what gets drawn.
#[derive(Debug, Clone)]
pub struct ColorFade {
    from: Srgb<u8>,
    to: Srgb<u8>,
    started_at: Instant,
    duration: Duration,
}

impl ColorFade {
    /// A fade that already sits on `color`
    pub fn settled(color: Srgb<u8>) -> Self {
        Self {
            from: color,
            to: color,
            started_at: Instant::now(),
            duration: FADE_DURATION,
        }
    }

    /// Start moving from the currently drawn color towards `color`
    pub fn retarget(&mut self, color: Srgb<u8>, now: Instant) {
        self.from = self.current(now);
        self.to = color;
        self.started_at = now;
    }

    pub fn target(&self) -> Srgb<u8> {
        self.to
    }

    /// Color to draw at `now`
    pub fn current(&self, now: Instant) -> Srgb<u8> {
        if self.from == self.to || self.duration.is_zero() {
            return self.to;
        }

        let elapsed = now.saturating_duration_since(self.started_at);
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        if t >= 1.0 {
            return self.to;
        }

        Gradient::new(self.from, self.to).interpolate(ease_out_cubic(t) as f64)
    }
}
