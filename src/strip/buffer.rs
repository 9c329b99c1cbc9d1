use super::StripDriver;
use crate::OutputDriver;
use crate::color::{OFF, Rgb};
use crate::math8::scale8;

/// In-memory strip collaborator
///
/// Keeps the pixel colors and the brightness register apart, like the
/// addressable strip firmware does, and only combines them on `show()`
/// when the frame is pushed to the output driver.
pub struct StripBuffer<O: OutputDriver, const N: usize> {
    output: O,
    pixels: [Rgb; N],
    frame: [Rgb; N],
    brightness: u8,
}

impl<O: OutputDriver, const N: usize> StripBuffer<O, N> {
    /// Create a blank strip at full brightness
    pub fn new(output: O) -> Self {
        Self {
            output,
            pixels: [OFF; N],
            frame: [OFF; N],
            brightness: u8::MAX,
        }
    }

    /// Unscaled pixel colors
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Current brightness register
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Number of pixels that are not off
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|pixel| **pixel != OFF).count()
    }

    /// Get a reference to the output driver
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Get a mutable reference to the output driver
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}

impl<O: OutputDriver, const N: usize> StripDriver for StripBuffer<O, N> {
    fn clear(&mut self) {
        self.pixels.fill(OFF);
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn show(&mut self) {
        let brightness = self.brightness;
        for (out, pixel) in self.frame.iter_mut().zip(self.pixels.iter()) {
            *out = match brightness {
                0 => OFF,
                255 => *pixel,
                _ => Rgb {
                    r: scale8(pixel.r, brightness),
                    g: scale8(pixel.g, brightness),
                    b: scale8(pixel.b, brightness),
                },
            };
        }
        self.output.write(&self.frame);
    }
}
