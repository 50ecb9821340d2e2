// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Representation code 49 (`0x31`), 16-bit floating point.
//!
//! ```text
//!  15                 4 3        0
//! +--------------------+----------+
//! |      mantissa      | exponent |
//! +--------------------+----------+
//! ```
//!
//! The mantissa is a 12-bit two's complement fraction (bit 15 is its sign),
//! the exponent a 4-bit power of two stored without bias.
//!
//! +153.0 is `0x4C88`, -153.0 is `0xB388`.

use tracing::trace;

use crate::float::{frexp, ldexp};

/// Word size in bytes.
pub const SIZE: usize = 2;

/// Zero word, also returned on underflow.
pub const WORD_ZERO: u16 = 0x0000;

/// Word returned when a positive value overflows the format.
pub const WORD_POSITIVE_OVERFLOW: u16 = 0x7FFF;

/// Word returned when a negative value overflows the format.
pub const WORD_NEGATIVE_OVERFLOW: u16 = 0xFFFF;

/// Most negative value, -2^15 (`0x800F`).
pub const MIN_VALUE: f64 = -32768.0;

/// Largest value, (1 - 2^-11) * 2^15 (`0x7FFF`).
pub const MAX_VALUE: f64 = 32752.0;

/// Smallest positive value, 2^-11 (`0x0010`).
pub const SMALLEST_POSITIVE: f64 = 1.0 / 2048.0;

const SIGN_BIT: u16 = 0x8000;
const MANTISSA_WORD_MASK: u16 = 0xFFF0;
const MANTISSA_FIELD_MASK: u16 = 0x0FFF;
const EXPONENT_MASK: u16 = 0x000F;
const EXPONENT_BITS: u32 = 4;

/// Mantissa bits in the word sit 15 places above the binary point: 11
/// fraction bits plus the 4 exponent bits below them.
const WORD_MANTISSA_SCALE: i32 = 15;

/// 2^11
const MANTISSA_SCALE: f64 = 2048.0;

/// `frexp` exponents at or below this encode as zero.
const UNDERFLOW_EXPONENT: i32 = -11;
/// `frexp` exponents above this overflow.
const OVERFLOW_EXPONENT: i32 = 15;
/// Below this the mantissa is denormalised.
const MIN_NORMAL_EXPONENT: i32 = 0;

/// Decodes a representation code 49 word.
///
/// The exponent nibble is applied as stored.
///
/// # Example
///
/// ```rust
/// use lis_repcode::rc49::decode49;
///
/// assert_eq!(decode49(0x4C88), 153.0);
/// assert_eq!(decode49(0xB388), -153.0);
/// ```
#[inline]
pub fn decode49(word: u16) -> f64 {
    let mut mantissa = (word & MANTISSA_WORD_MASK) as i32;
    if word & SIGN_BIT != 0 {
        mantissa -= 0x1_0000;
    }

    let exponent = (word & EXPONENT_MASK) as i32;
    ldexp(mantissa as f64, exponent - WORD_MANTISSA_SCALE)
}

/// Encodes a value as a representation code 49 word.
///
/// Truncates the mantissa to 12 bits. Values too large clamp to
/// [`WORD_POSITIVE_OVERFLOW`] / [`WORD_NEGATIVE_OVERFLOW`], values too small
/// to [`WORD_ZERO`]. Infinities clamp like overflow, NaN encodes as zero.
///
/// # Example
///
/// ```rust
/// use lis_repcode::rc49::{encode49, WORD_ZERO};
///
/// assert_eq!(encode49(153.0), 0x4C88);
/// assert_eq!(encode49(1.0e-6), WORD_ZERO);
/// ```
pub fn encode49(value: f64) -> u16 {
    if value.is_nan() {
        trace!("rep code 49: NaN encoded as zero");
        return WORD_ZERO;
    }

    let (mut mantissa, mut exponent) = frexp(value);

    if exponent <= UNDERFLOW_EXPONENT {
        trace!(value, exponent, "rep code 49: underflow clamped to zero");
        return WORD_ZERO;
    }
    if value.is_infinite() || exponent > OVERFLOW_EXPONENT {
        trace!(value, exponent, "rep code 49: overflow clamped");
        return if value < 0.0 {
            WORD_NEGATIVE_OVERFLOW
        } else {
            WORD_POSITIVE_OVERFLOW
        };
    }

    if exponent < MIN_NORMAL_EXPONENT {
        // mantissa / 2^(-exponent)
        mantissa = ldexp(mantissa, exponent - MIN_NORMAL_EXPONENT);
        exponent = MIN_NORMAL_EXPONENT;
    }

    // |mantissa| < 1 so the scaled value fits 12 bits including the sign.
    let field = ((mantissa * MANTISSA_SCALE) as i16) as u16 & MANTISSA_FIELD_MASK;

    (field << EXPONENT_BITS) | (exponent as u16 & EXPONENT_MASK)
}
