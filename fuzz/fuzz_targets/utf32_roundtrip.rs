#![no_main]

use libfuzzer_sys::fuzz_target;

use utf_transcode::{is_valid_utf32, utf16_to_utf32, utf32_to_utf16, utf32_to_utf8, utf8_to_utf32};

fuzz_target!(|data: &[u8]| {
    let units: Vec<u32> = data
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();

    let valid = is_valid_utf32(&units);
    match (utf32_to_utf8(&units), utf32_to_utf16(&units)) {
        (Ok(utf8), Ok(utf16)) => {
            assert!(valid);
            assert_eq!(utf8_to_utf32(&utf8).unwrap(), units);
            assert_eq!(utf16_to_utf32(&utf16).unwrap(), units);
        }
        (Err(a), Err(b)) => {
            assert!(!valid);
            assert_eq!(a, b);
        }
        _ => panic!("UTF-8 and UTF-16 encoders disagree"),
    }
});
