use libm::sqrtf;

use super::MatrixDriver;
use crate::math8::attenuate8;
use crate::scale::{clamp_percent, percent_to_u8};

/// Disk radius in cells per percent of input (100% = 3 cells)
const RADIUS_PER_PERCENT: f32 = 0.03;

/// Furthest cell offset from the center on either axis
const REACH: i8 = 2;

/// Draw a soft edged disk centered on the matrix
///
/// `radius` and `brightness` are percent (0-100). Each cell gets
/// `clamp(r - distance, 0, 1)^3 * brightness`, so the edge fades out over
/// one cell. All 25 cells are written on every call, dark ones included.
pub fn draw_disk<M: MatrixDriver>(matrix: &mut M, radius: f32, brightness: f32) {
    let brightness = percent_to_u8(brightness);
    let radius = RADIUS_PER_PERCENT * clamp_percent(radius);

    for dx in -REACH..=REACH {
        for dy in -REACH..=REACH {
            let distance = sqrtf(f32::from(dx * dx + dy * dy));
            let falloff = (radius - distance).clamp(0.0, 1.0);
            let level = attenuate8(brightness, falloff * falloff * falloff);
            #[allow(clippy::cast_sign_loss)]
            let (col, row) = ((dx + REACH) as u8, (dy + REACH) as u8);
            matrix.plot_brightness(col, row, level);
        }
    }
}
