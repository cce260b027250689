use super::*;

#[test]
fn round_channel_absorbs_conversion_noise() {
    assert_eq!(round_channel(0.500_01), round_channel(0.5));
    assert_eq!(round_channel(0.999_999_9), 1.0);
    assert_ne!(round_channel(0.5001), round_channel(0.5));
}

#[test]
fn floor_div_rounds_towards_negative_infinity() {
    assert_eq!(floor_div(7, 2), 3);
    assert_eq!(floor_div(-1, 2), -1);
    assert_eq!(floor_div(0, 5), 0);
}

#[test]
fn unorm8_endpoints_are_exact() {
    assert_eq!(unorm8_to_f32(0), 0.0);
    assert_eq!(unorm8_to_f32(255), 1.0);
    assert_eq!(f32_to_unorm8(1.0), 255);
    assert_eq!(f32_to_unorm8(-3.0), 0);
    assert_eq!(f32_to_unorm8(unorm8_to_f32(128)), 128);
}
