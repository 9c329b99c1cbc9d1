//! Percent based scaling shared by every renderer.
//!
//! Renderers accept their inputs as percent (0-100). Anything outside that
//! range saturates instead of failing, and NaN reads as zero.

/// Upper bound of the percent input range
pub const PERCENT_MAX: f32 = 100.0;

/// Clamp a percent value to 0-100
#[inline]
pub fn clamp_percent(x: f32) -> f32 {
    if x.is_nan() {
        return 0.0;
    }
    x.clamp(0.0, PERCENT_MAX)
}

/// Rescale a percent value to the integer range `0..=max`
///
/// Computes `x * (max + 1) / 100`, clamps it to `0..=max` and truncates
/// toward zero.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scale(x: f32, max: u16) -> u16 {
    if x.is_nan() {
        return 0;
    }
    let upper = f32::from(max);
    let scaled = x * (upper + 1.0) / PERCENT_MAX;
    scaled.clamp(0.0, upper) as u16
}

/// Rescale a percent value to a 0-255 brightness
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn percent_to_u8(x: f32) -> u8 {
    scale(x, u16::from(u8::MAX)) as u8
}

/// Rescale a percent value to `0..=max` as a `usize` count
#[inline]
pub(crate) fn scale_count(x: f32, max: u16) -> usize {
    usize::from(scale(x, max))
}
