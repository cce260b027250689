const CHANNEL_SCALE: f64 = 10_000.0;

/// Round a color channel to 4 decimal digits, ties to even.
///
/// Channels sampled from 8-bit sources and converted through color spaces pick up noise in
/// the low bits; comparing the rounded values absorbs it.
pub(crate) fn round_channel(v: f32) -> f64 {
    (f64::from(v) * CHANNEL_SCALE).round_ties_even() / CHANNEL_SCALE
}

/// `floor(num / den)` for a strictly positive `den`.
pub(crate) fn floor_div(num: i64, den: i64) -> i64 {
    debug_assert!(den > 0);
    num.div_euclid(den)
}

pub(crate) fn unorm8_to_f32(v: u8) -> f32 {
    f32::from(v) / 255.0
}

pub(crate) fn f32_to_unorm8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
