#![no_std]

pub mod color;
pub mod direction;
pub mod frame_scheduler;
pub mod math8;
pub mod matrix;
pub mod scale;
pub mod scene;
pub mod signal;
pub mod spiral;
pub mod strip;

pub use direction::{InvalidRotation, RotationDir};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use matrix::{MatrixDriver, MatrixFrame};
pub use scale::{percent_to_u8, scale};
pub use scene::{MatrixScene, MatrixTarget, SceneId, SignalSink, StripTarget};
pub use signal::{BreathSignal, simulate_breath};
pub use strip::{StripBuffer, StripDriver, StripLayout};

pub use color::{Rgb, rgb_from_u32};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// [`StripBuffer`] pushes every shown frame through it.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
