/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Attenuate an 8-bit value by a float factor
///
/// The factor is clamped to 0.0-1.0 and the result truncated.
#[inline]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn attenuate8(value: u8, factor: f32) -> u8 {
    let factor = if factor.is_nan() {
        0.0
    } else {
        factor.clamp(0.0, 1.0)
    };
    (factor * f32::from(value)) as u8
}
