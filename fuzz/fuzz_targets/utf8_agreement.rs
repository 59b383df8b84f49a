#![no_main]

use libfuzzer_sys::fuzz_target;

use utf_transcode::{is_valid_utf8, utf16_to_utf8, utf32_to_utf8, utf8_to_utf16, utf8_to_utf32};

fuzz_target!(|data: &[u8]| {
    let valid = is_valid_utf8(data);
    assert_eq!(valid, core::str::from_utf8(data).is_ok());

    match (utf8_to_utf16(data), utf8_to_utf32(data)) {
        (Ok(utf16), Ok(utf32)) => {
            assert!(valid);
            assert_eq!(utf16_to_utf8(&utf16).unwrap(), data);
            assert_eq!(utf32_to_utf8(&utf32).unwrap(), data);
        }
        (Err(a), Err(b)) => {
            assert!(!valid);
            assert_eq!(a, b);
        }
        _ => panic!("UTF-16 and UTF-32 decoders disagree"),
    }
});
