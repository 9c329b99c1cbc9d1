//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::scene::SignalSink;
use crate::signal::BreathSignal;

/// Default target frame rate (50 FPS).
pub const DEFAULT_FPS: u32 = 50;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The signal value that was rendered (percent).
    pub value: f32,
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// This scheduler:
/// - Tracks frame timing with drift correction
/// - Samples the breath signal and redraws the sink with it
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let target = MatrixTarget::new(display, SceneId::Disk.to_scene());
/// let mut scheduler = FrameScheduler::new(target, BreathSignal::new(Instant::now(), 5.0));
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     Timer::after(result.sleep_duration).await;
/// }
/// ```
pub struct FrameScheduler<T: SignalSink> {
    sink: T,
    signal: BreathSignal,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<T: SignalSink> FrameScheduler<T> {
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (50 FPS) for frame timing.
    pub fn new(sink: T, signal: BreathSignal) -> Self {
        Self::with_frame_duration(sink, signal, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(sink: T, signal: BreathSignal, frame_duration: Duration) -> Self {
        Self {
            sink,
            signal,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Samples the signal and renders it into the sink
    /// 3. Returns the deadline for the next frame
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Skip the backlog after long stalls instead of bursting to catch up
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            #[cfg(feature = "esp32-log")]
            println!(
                "[FrameScheduler.tick] behind by {}ms, resetting deadline",
                now.as_millis() - self.next_frame.as_millis()
            );
            self.next_frame = now;
        }

        let value = self.signal.sample(now);
        self.sink.render_value(value);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            value,
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Replace the signal, e.g. to change the breath period.
    pub fn set_signal(&mut self, signal: BreathSignal) {
        self.signal = signal;
    }

    /// Get a reference to the sink.
    pub fn sink(&self) -> &T {
        &self.sink
    }

    /// Get a mutable reference to the sink.
    pub fn sink_mut(&mut self) -> &mut T {
        &mut self.sink
    }
}
