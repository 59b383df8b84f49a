// Property-based tests for transcoding roundtrips and validator/converter agreement.
//
// Arbitrary byte and unit vectors are biased towards the interesting ranges (continuation bytes,
// surrogates, the U+10FFFF boundary) so malformed inputs are common.
#![cfg(feature = "alloc")]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;

use utf_transcode::{
    is_valid_utf16, is_valid_utf32, is_valid_utf8, utf16_to_utf32, utf16_to_utf8, utf32_to_utf16,
    utf32_to_utf8, utf8_to_utf16, utf8_to_utf32, validate_utf16, validate_utf32, validate_utf8,
};

fn arb_utf8_byte() -> impl Strategy<Value = u8> {
    prop_oneof![
        0x00u8..0x80,
        0x80u8..0xc0,
        0xc0u8..0xe0,
        0xe0u8..0xf0,
        0xf0u8..=0xff,
        Just(0xedu8),
        Just(0xf4u8),
    ]
}

fn arb_utf16_unit() -> impl Strategy<Value = u16> {
    prop_oneof![
        4 => 0x0000u16..0xd800,
        2 => 0xd800u16..0xdc00,
        2 => 0xdc00u16..0xe000,
        1 => 0xe000u16..=0xffff,
    ]
}

fn arb_utf32_unit() -> impl Strategy<Value = u32> {
    prop_oneof![
        4 => 0u32..0xd800,
        1 => 0xd800u32..0xe000,
        4 => 0xe000u32..=0x10_ffff,
        1 => 0x11_0000u32..=u32::MAX,
    ]
}

proptest! {
    #[test]
    fn valid_text_roundtrips(s in any::<String>()) {
        let utf8 = s.as_bytes();

        let utf16 = utf8_to_utf16(utf8).unwrap();
        prop_assert_eq!(&utf16, &s.encode_utf16().collect::<Vec<_>>());
        prop_assert_eq!(utf16_to_utf8(&utf16).unwrap(), utf8);

        let utf32 = utf8_to_utf32(utf8).unwrap();
        prop_assert_eq!(&utf32, &s.chars().map(u32::from).collect::<Vec<_>>());
        prop_assert_eq!(utf32_to_utf8(&utf32).unwrap(), utf8);

        prop_assert_eq!(utf16_to_utf32(&utf16).unwrap(), utf32.clone());
        prop_assert_eq!(utf32_to_utf16(&utf32).unwrap(), utf16);
    }

    #[test]
    fn utf8_validator_matches_converters(bytes in proptest::collection::vec(arb_utf8_byte(), 0..24)) {
        let valid = is_valid_utf8(&bytes);
        prop_assert_eq!(valid, core::str::from_utf8(&bytes).is_ok());
        prop_assert_eq!(valid, utf8_to_utf16(&bytes).is_ok());
        prop_assert_eq!(valid, utf8_to_utf32(&bytes).is_ok());

        if let Err(err) = validate_utf8(&bytes) {
            prop_assert_eq!(Some(err), utf8_to_utf16(&bytes).err());
            prop_assert_eq!(Some(err), utf8_to_utf32(&bytes).err());
            // Everything before the offending sequence is valid.
            prop_assert!(is_valid_utf8(&bytes[..err.offset]));
        }
    }

    #[test]
    fn utf16_validator_matches_converters(units in proptest::collection::vec(arb_utf16_unit(), 0..24)) {
        let valid = is_valid_utf16(&units);
        prop_assert_eq!(valid, String::from_utf16(&units).is_ok());
        prop_assert_eq!(valid, utf16_to_utf8(&units).is_ok());
        prop_assert_eq!(valid, utf16_to_utf32(&units).is_ok());

        if let Err(err) = validate_utf16(&units) {
            prop_assert_eq!(Some(err), utf16_to_utf8(&units).err());
            prop_assert_eq!(Some(err), utf16_to_utf32(&units).err());
            prop_assert!(is_valid_utf16(&units[..err.offset]));
        }
    }

    #[test]
    fn utf32_validator_matches_converters(units in proptest::collection::vec(arb_utf32_unit(), 0..24)) {
        let valid = is_valid_utf32(&units);
        prop_assert_eq!(valid, units.iter().all(|&u| char::from_u32(u).is_some()));
        prop_assert_eq!(valid, utf32_to_utf8(&units).is_ok());
        prop_assert_eq!(valid, utf32_to_utf16(&units).is_ok());

        if let Err(err) = validate_utf32(&units) {
            prop_assert_eq!(Some(err), utf32_to_utf8(&units).err());
            prop_assert_eq!(Some(err), utf32_to_utf16(&units).err());
        }
    }

    #[test]
    fn valid_utf16_roundtrips(units in proptest::collection::vec(arb_utf16_unit(), 0..24)) {
        if let Ok(utf8) = utf16_to_utf8(&units) {
            prop_assert_eq!(utf8_to_utf16(&utf8).unwrap(), units.clone());
            let utf32 = utf16_to_utf32(&units).unwrap();
            prop_assert_eq!(utf32_to_utf16(&utf32).unwrap(), units);
        }
    }

    #[test]
    fn valid_utf32_roundtrips(units in proptest::collection::vec(arb_utf32_unit(), 0..24)) {
        if let Ok(utf8) = utf32_to_utf8(&units) {
            prop_assert_eq!(utf8_to_utf32(&utf8).unwrap(), units.clone());
            let utf16 = utf32_to_utf16(&units).unwrap();
            prop_assert_eq!(utf16_to_utf32(&utf16).unwrap(), units);
        }
    }
}
