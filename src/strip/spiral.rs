#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{StripDriver, StripLayout};
use crate::color::Rgb;
use crate::direction::RotationDir;
use crate::scale::{percent_to_u8, scale_count};
use crate::spiral::Spiral;

/// Draw a spiral on a strip wired as [`StripLayout::NEOPIXEL_8X8`]
///
/// `length` and `brightness` are percent (0-100). A missing strip is a
/// no-op.
pub fn draw_spiral<S: StripDriver>(
    strip: Option<&mut S>,
    length: f32,
    color: Rgb,
    brightness: f32,
    direction: RotationDir,
) {
    draw_spiral_on(
        &StripLayout::NEOPIXEL_8X8,
        strip,
        length,
        color,
        brightness,
        direction,
    );
}

/// Draw a spiral on a strip with a custom layout
///
/// The strip is cleared, the brightness register is set, and then exactly
/// `scale(length, layout.length)` pixels are written along the spiral
/// before a single `show()`.
pub fn draw_spiral_on<S: StripDriver>(
    layout: &StripLayout,
    strip: Option<&mut S>,
    length: f32,
    color: Rgb,
    brightness: f32,
    direction: RotationDir,
) {
    let Some(strip) = strip else {
        #[cfg(feature = "esp32-log")]
        println!("[strip::draw_spiral] no strip attached, skipping");
        return;
    };

    let length = scale_count(length, layout.length);

    strip.clear();
    strip.set_brightness(percent_to_u8(brightness));
    for index in Spiral::new(layout.center, layout.steps(direction)).take(length) {
        strip.set_pixel_color(index, color);
    }
    strip.show();
}
