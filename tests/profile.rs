use utf_transcode::{
    is_high_surrogate, is_low_surrogate, is_scalar_value, is_surrogate, ErrorCode,
    HIGH_SURROGATE_MAX, HIGH_SURROGATE_MIN, LOW_SURROGATE_MAX, LOW_SURROGATE_MIN, MAX_CODE_POINT,
    SUPPLEMENTARY_MIN, SURROGATE_MAX, SURROGATE_MIN,
};

#[test]
fn scalar_value_bounds() {
    assert!(is_scalar_value(0));
    assert!(is_scalar_value(SURROGATE_MIN - 1));
    assert!(!is_scalar_value(SURROGATE_MIN));
    assert!(!is_scalar_value(SURROGATE_MAX));
    assert!(is_scalar_value(SURROGATE_MAX + 1));
    assert!(is_scalar_value(MAX_CODE_POINT));
    assert!(!is_scalar_value(MAX_CODE_POINT + 1));
    assert!(!is_scalar_value(u32::MAX));
}

#[test]
fn scalar_values_are_exactly_chars() {
    for cp in (0..=MAX_CODE_POINT + 0x100).step_by(0x3f) {
        assert_eq!(is_scalar_value(cp), char::from_u32(cp).is_some(), "{cp:#x}");
    }
    for cp in SURROGATE_MIN - 2..=SURROGATE_MAX + 2 {
        assert_eq!(is_scalar_value(cp), char::from_u32(cp).is_some(), "{cp:#x}");
        assert_eq!(is_surrogate(cp), char::from_u32(cp).is_none(), "{cp:#x}");
    }
}

#[test]
fn surrogate_halves_partition_the_range() {
    assert_eq!(u32::from(HIGH_SURROGATE_MIN), SURROGATE_MIN);
    assert_eq!(u32::from(LOW_SURROGATE_MAX), SURROGATE_MAX);
    assert_eq!(HIGH_SURROGATE_MAX + 1, LOW_SURROGATE_MIN);

    for unit in 0xd7f0u16..=0xe010 {
        let high = is_high_surrogate(unit);
        let low = is_low_surrogate(unit);
        assert!(!(high && low));
        assert_eq!(high || low, is_surrogate(u32::from(unit)), "{unit:#x}");
    }
    assert_eq!(SUPPLEMENTARY_MIN, 0x1_0000);
}

#[test]
fn resource_codes_are_not_malformed_input() {
    assert!(ErrorCode::LengthOverflow.is_resource());
    assert!(ErrorCode::AllocationFailed.is_resource());
    assert!(!ErrorCode::Overlong.is_resource());
    assert!(!ErrorCode::LoneLowSurrogate.is_resource());
}
