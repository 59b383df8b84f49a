#![no_main]

use libfuzzer_sys::fuzz_target;

use utf_transcode::{is_valid_utf16, utf16_to_utf32, utf16_to_utf8, utf32_to_utf16, utf8_to_utf16};

fuzz_target!(|data: &[u8]| {
    let units: Vec<u16> = data
        .chunks_exact(2)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .collect();

    let valid = is_valid_utf16(&units);
    assert_eq!(valid, String::from_utf16(&units).is_ok());

    if let Ok(utf8) = utf16_to_utf8(&units) {
        assert!(valid);
        assert_eq!(utf8_to_utf16(&utf8).unwrap(), units);
        let utf32 = utf16_to_utf32(&units).unwrap();
        assert_eq!(utf32_to_utf16(&utf32).unwrap(), units);
    } else {
        assert!(!valid);
        assert!(utf16_to_utf32(&units).is_err());
    }
});
