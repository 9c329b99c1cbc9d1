//! Rendering onto addressable LED strips.
//!
//! The strip is wired as a square panel, so a 1D index walk can draw a 2D
//! spiral. See [`StripLayout`] for the wiring description.

mod buffer;
mod spiral;

pub use buffer::StripBuffer;
pub use spiral::{draw_spiral, draw_spiral_on};

use crate::color::Rgb;
use crate::direction::RotationDir;

/// Strip collaborator
///
/// Implement this trait to render onto a concrete strip. Index range
/// checks are the implementation's responsibility.
pub trait StripDriver {
    /// Turn every pixel off
    fn clear(&mut self);

    /// Set the global brightness register (0-255)
    fn set_brightness(&mut self, brightness: u8);

    /// Set a single pixel color
    fn set_pixel_color(&mut self, index: usize, color: Rgb);

    /// Present the buffered pixels
    fn show(&mut self);
}

impl<T: StripDriver + ?Sized> StripDriver for &mut T {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn set_brightness(&mut self, brightness: u8) {
        (**self).set_brightness(brightness);
    }

    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        (**self).set_pixel_color(index, color);
    }

    fn show(&mut self) {
        (**self).show();
    }
}

/// Physical arrangement of a strip folded into a square panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripLayout {
    /// Index of the pixel the spiral starts from
    pub center: usize,
    /// Index distance between vertically adjacent pixels
    pub stride: usize,
    /// Number of pixels the spiral may cover
    pub length: u16,
}

impl StripLayout {
    /// 64 pixel strip wired as an 8x8 panel, centered on pixel 36
    pub const NEOPIXEL_8X8: Self = Self {
        center: 36,
        stride: 8,
        length: 64,
    };

    /// Step table for a spiral in the given direction
    #[allow(clippy::cast_possible_wrap)]
    pub const fn steps(&self, direction: RotationDir) -> [isize; 4] {
        let row = self.stride as isize;
        match direction {
            RotationDir::Clockwise => [-1, -row, 1, row],
            RotationDir::CounterClockwise => [-row, -1, row, 1],
        }
    }
}

impl Default for StripLayout {
    fn default() -> Self {
        Self::NEOPIXEL_8X8
    }
}
