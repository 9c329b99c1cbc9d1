//! Simulated breathing signal used to drive the renderers.

use core::f64::consts::PI;

use embassy_time::{Duration, Instant};
use libm::cos;

/// Shortest breath period in seconds
pub const MIN_BREATH_DURATION: f32 = 5.0;

/// Phase advance per millisecond for a one second breath, in half turns
const PHASE_PER_MS: f64 = 0.002;

/// Breath amplitude at the top of an inhale
const BREATH_PEAK: f64 = 100.0;

/// Sample a raised cosine breath after `elapsed` time
///
/// `duration` is the length of one full breath in seconds and is clamped to
/// at least [`MIN_BREATH_DURATION`]. The result is percent (0-100), starting
/// at 0 on exhale.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn simulate_breath(elapsed: Duration, duration: f32) -> f32 {
    let duration = if duration.is_nan() {
        MIN_BREATH_DURATION
    } else {
        duration.max(MIN_BREATH_DURATION)
    };
    let ms = elapsed.as_millis() as f64;
    let phase = PI * ms * PHASE_PER_MS / f64::from(duration);
    (BREATH_PEAK / 2.0 * (1.0 - cos(phase))) as f32
}

/// Breath signal anchored at a start instant
#[derive(Debug, Clone, Copy)]
pub struct BreathSignal {
    origin: Instant,
    duration: f32,
}

impl BreathSignal {
    /// Create a signal that starts exhaled at `origin`
    pub const fn new(origin: Instant, duration: f32) -> Self {
        Self { origin, duration }
    }

    /// Breath period in seconds, as configured
    pub const fn duration(&self) -> f32 {
        self.duration
    }

    /// Sample the signal, 0 for instants before the origin
    pub fn sample(&self, now: Instant) -> f32 {
        simulate_breath(now.saturating_duration_since(self.origin), self.duration)
    }
}
