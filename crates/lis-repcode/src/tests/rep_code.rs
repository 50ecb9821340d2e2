// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::error::RepCodeError;
use crate::rep_code::RepCode;

#[test]
fn test_try_from_known_codes() {
    assert_eq!(RepCode::try_from(49u8), Ok(RepCode::Rc49));
    assert_eq!(RepCode::try_from(68u8), Ok(RepCode::Rc68));
}

#[test]
fn test_try_from_unknown_code() {
    // 50 is the other LIS float code, not supported here
    assert_eq!(RepCode::try_from(50u8), Err(RepCodeError::Unknown(50)));
    assert_eq!(RepCode::try_from(0u8), Err(RepCodeError::Unknown(0)));
}

#[test]
fn test_code_roundtrip() {
    for rep_code in [RepCode::Rc49, RepCode::Rc68] {
        assert_eq!(RepCode::try_from(rep_code.code()), Ok(rep_code));
        assert_eq!(u8::from(rep_code), rep_code.code());
    }
}

#[test]
fn test_size() {
    assert_eq!(RepCode::Rc49.size(), 2);
    assert_eq!(RepCode::Rc68.size(), 4);
}

#[test]
fn test_min_max_value() {
    assert_eq!(RepCode::Rc49.min_max_value(), (-32768.0, 32752.0));
    assert_eq!(
        RepCode::Rc68.min_max_value(),
        (-1.7014118346046923e+38, 1.7014116317805963e+38)
    );
}

#[test]
fn test_decode_big_endian() {
    assert_eq!(RepCode::Rc68.decode(&[0x44, 0x4C, 0x80, 0x00]), Ok(153.0));
    assert_eq!(RepCode::Rc68.decode(&[0xBB, 0xB3, 0x80, 0x00]), Ok(-153.0));
    assert_eq!(RepCode::Rc49.decode(&[0x4C, 0x88]), Ok(153.0));
    assert_eq!(RepCode::Rc49.decode(&[0xB3, 0x88]), Ok(-153.0));
}

#[test]
fn test_decode_ignores_trailing_bytes() {
    let bytes = [0x44, 0x4C, 0x80, 0x00, 0xFF, 0xFF];
    assert_eq!(RepCode::Rc68.decode(&bytes), Ok(153.0));
    assert_eq!(RepCode::Rc49.decode(&bytes[4..]), Ok(-16.0));
}

#[test]
fn test_decode_buffer_too_short() {
    assert_eq!(
        RepCode::Rc68.decode(&[0x44, 0x4C, 0x80]),
        Err(RepCodeError::BufferTooShort {
            code: 68,
            needed: 4,
            available: 3,
        })
    );
    assert_eq!(
        RepCode::Rc49.decode(&[]),
        Err(RepCodeError::BufferTooShort {
            code: 49,
            needed: 2,
            available: 0,
        })
    );
}

#[test]
fn test_encode_big_endian() {
    let mut out = [0u8; 4];

    assert_eq!(RepCode::Rc68.encode(153.0, &mut out), Ok(4));
    assert_eq!(out, [0x44, 0x4C, 0x80, 0x00]);

    assert_eq!(RepCode::Rc68.encode(0.0, &mut out), Ok(4));
    assert_eq!(out, [0x40, 0x00, 0x00, 0x00]);

    let mut out = [0u8; 2];
    assert_eq!(RepCode::Rc49.encode(-153.0, &mut out), Ok(2));
    assert_eq!(out, [0xB3, 0x88]);
}

#[test]
fn test_encode_leaves_trailing_bytes() {
    let mut out = [0xAAu8; 6];
    assert_eq!(RepCode::Rc49.encode(153.0, &mut out), Ok(2));
    assert_eq!(out, [0x4C, 0x88, 0xAA, 0xAA, 0xAA, 0xAA]);
}

#[test]
fn test_encode_buffer_too_short() {
    let mut out = [0xAAu8; 3];
    assert_eq!(
        RepCode::Rc68.encode(153.0, &mut out),
        Err(RepCodeError::BufferTooShort {
            code: 68,
            needed: 4,
            available: 3,
        })
    );
    // Nothing written
    assert_eq!(out, [0xAA; 3]);

    let mut out = [0xAAu8; 1];
    assert_eq!(
        RepCode::Rc49.encode(153.0, &mut out),
        Err(RepCodeError::BufferTooShort {
            code: 49,
            needed: 2,
            available: 1,
        })
    );
    assert_eq!(out, [0xAA]);
}

#[test]
fn test_error_display() {
    assert_eq!(
        RepCodeError::Unknown(50).to_string(),
        "unknown representation code: 50"
    );
    assert_eq!(
        RepCodeError::BufferTooShort {
            code: 68,
            needed: 4,
            available: 3,
        }
        .to_string(),
        "representation code 68 needs 4 bytes, buffer has 3"
    );
}

proptest! {
    #[test]
    fn unknown_codes_rejected(code in any::<u8>()) {
        prop_assume!(code != 49 && code != 68);
        prop_assert_eq!(RepCode::try_from(code), Err(RepCodeError::Unknown(code)));
    }

    #[test]
    fn bytes_match_word_conversions(word in any::<u32>(), value in -1.0e6f64..1.0e6) {
        prop_assert_eq!(
            RepCode::Rc68.decode(&word.to_be_bytes()),
            Ok(crate::decode68(word))
        );

        let half = (word >> 16) as u16;
        prop_assert_eq!(
            RepCode::Rc49.decode(&half.to_be_bytes()),
            Ok(crate::decode49(half))
        );

        let mut out = [0u8; 4];
        RepCode::Rc68.encode(value, &mut out).expect("Failed to encode(..)");
        prop_assert_eq!(out, crate::encode68(value).to_be_bytes());

        let mut out = [0u8; 2];
        RepCode::Rc49.encode(value, &mut out).expect("Failed to encode(..)");
        prop_assert_eq!(out, crate::encode49(value).to_be_bytes());
    }
}
