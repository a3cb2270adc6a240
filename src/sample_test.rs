use super::*;

#[test]
fn test_comparison_policies() {
    assert_eq!(u8::COMPARISON, ComparisonPolicy::UnsignedMagnitude);
    assert_eq!(i16::COMPARISON, ComparisonPolicy::NativeSigned);
    assert_eq!(i32::COMPARISON, ComparisonPolicy::NativeSigned);
    assert_eq!(f32::COMPARISON, ComparisonPolicy::NativeSigned);
    assert_eq!(f64::COMPARISON, ComparisonPolicy::NativeSigned);
}

#[test]
fn test_u8_compares_as_unsigned_magnitude() {
    // 200 would be negative if the byte were read as signed.
    assert!(200u8.exceeds(100));
    assert!(255u8.exceeds(0));
    assert!(!100u8.exceeds(100));
}

#[test]
fn test_wide_kinds_compare_signed() {
    assert!(!(-1i16).exceeds(100));
    assert!(!i16::MIN.exceeds(0));
    assert!(i16::MAX.exceeds(0));
    assert!(!(-5i32).exceeds(-5));
    assert!((-4i32).exceeds(-5));
    assert!(0.5f32.exceeds(0.25));
    assert!(!(-0.5f64).exceeds(0.0));
}

#[test]
fn test_exceeds_is_strict() {
    assert!(!7u8.exceeds(7));
    assert!(!7i16.exceeds(7));
    assert!(!7i32.exceeds(7));
    assert!(!7.0f32.exceeds(7.0));
    assert!(!7.0f64.exceeds(7.0));
}

#[test]
fn test_nan_never_exceeds() {
    assert!(!f32::NAN.exceeds(0.0));
    assert!(!f64::NAN.exceeds(0.0));
}

#[test]
fn test_interpolation_factor_is_real_valued() {
    // Integer division would truncate these to zero.
    assert_eq!(u8::interpolation_factor(100, 50, 150), 0.5);
    assert_eq!(i16::interpolation_factor(100, 50, 150), 0.5);
    assert_eq!(i32::interpolation_factor(100, 50, 150), 0.5);
    assert_eq!(f32::interpolation_factor(100.0, 50.0, 150.0), 0.5);
    assert_eq!(f64::interpolation_factor(100.0, 50.0, 150.0), 0.5);
}

#[test]
fn test_interpolation_factor_direction() {
    assert_eq!(u8::interpolation_factor(100, 200, 0), 0.5);
    assert_eq!(i16::interpolation_factor(-10, -20, 20), 0.25);
}

#[test]
fn test_equal_corners_give_non_finite_factor() {
    assert!(!f32::interpolation_factor(1.0, 2.0, 2.0).is_finite());
    assert!(u8::interpolation_factor(2, 2, 2).is_nan());
}

#[test]
fn test_kind_tags() {
    assert_eq!(u8::KIND, SampleKind::U8);
    assert_eq!(i16::KIND.to_string(), "i16");
    assert_eq!(f64::KIND.to_string(), "f64");
}
