/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Scale an 8-bit value by `numerator / 255`
///
/// Exact counterpart of [`scale8`] for callers that need `value` to map to
/// `numerator` at full scale.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale_by_255(value: u8, numerator: u8) -> u8 {
    (numerator as u16 * value as u16 / 0xFF) as u8
}
