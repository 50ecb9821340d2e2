// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Representation code 68 (`0x44`), 32-bit floating point.
//!
//! ```text
//!  31 30      23 22                     0
//! +--+----------+------------------------+
//! |S | exponent |        mantissa        |
//! +--+----------+------------------------+
//! ```
//!
//! The exponent is excess-128. The mantissa is a 24-bit two's complement
//! fraction whose top bit is the sign bit `S`, so a negative word carries its
//! sign both in the value and in the sign extension of the mantissa.
//!
//! +153.0 is `0x444C8000`, -153.0 is `0xBBB38000`.

use tracing::trace;

use crate::float::{frexp, ldexp};

/// Word size in bytes.
pub const SIZE: usize = 4;

/// Canonical zero word, also returned on underflow.
pub const WORD_ZERO: u32 = 0x4000_0000;

/// Word returned when a positive value overflows the format.
pub const WORD_POSITIVE_OVERFLOW: u32 = 0x7FFF_FFFF;

/// Word returned when a negative value overflows the format.
pub const WORD_NEGATIVE_OVERFLOW: u32 = 0xFFC0_0000;

/// Most negative value, -2^127 (`0x80000000`).
pub const MIN_VALUE: f64 = -1.7014118346046923e38;

/// Largest value, (1 - 2^-23) * 2^127 (`0x7FFFFFFF`).
pub const MAX_VALUE: f64 = 1.7014116317805963e38;

/// Smallest positive value, 2^-151 (`0x00000001`): a single mantissa bit at
/// the lowest exponent.
pub const SMALLEST_POSITIVE: f64 = 3.503246160812043e-46;

const SIGN_BIT: u32 = 0x8000_0000;
const EXPONENT_MASK: u32 = 0x7F80_0000;
const MANTISSA_MASK: u32 = 0x007F_FFFF;
const MANTISSA_BITS: u32 = 23;

/// -2^23: mantissa bits above bit 22 all set.
const NEGATIVE_MANTISSA_SEED: i32 = -0x80_0000;

/// 2^23
const MANTISSA_SCALE: f64 = 8388608.0;

/// `frexp` exponents at or below this encode as zero, -(128 + 23).
const UNDERFLOW_EXPONENT: i32 = -151;
/// `frexp` exponents above this overflow.
const OVERFLOW_EXPONENT: i32 = 127;
/// Below this the mantissa is denormalised.
const MIN_NORMAL_EXPONENT: i32 = -128;

/// Bit fields of a code 68 word with the mantissa sign-extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fields {
    pub(crate) negative: bool,
    /// Raw exponent byte, 0..=255
    pub(crate) exponent: i32,
    /// True mantissa * 2^23, in [-2^23, 2^23 - 1]
    pub(crate) mantissa: i32,
}

impl Fields {
    #[inline(always)]
    pub(crate) fn unpack(word: u32) -> Self {
        let negative = word & SIGN_BIT != 0;
        let seed = if negative { NEGATIVE_MANTISSA_SEED } else { 0 };

        Self {
            negative,
            exponent: ((word & EXPONENT_MASK) >> MANTISSA_BITS) as i32,
            mantissa: seed | (word & MANTISSA_MASK) as i32,
        }
    }

    /// Power of two that scales the integer mantissa to the value.
    ///
    /// 104 is 127 - 23 and 151 is 128 + 23: the excess-128 bias with the 2^23
    /// mantissa scale folded in. Ranges over [-151, 104] for every word.
    #[inline(always)]
    pub(crate) fn scale(&self) -> i32 {
        if self.negative {
            104 - self.exponent
        } else {
            self.exponent - 151
        }
    }
}

/// Decodes a representation code 68 word.
///
/// Defined for every one of the 2^32 words; the result is always finite.
///
/// # Example
///
/// ```rust
/// use lis_repcode::rc68::{decode68, WORD_ZERO};
///
/// assert_eq!(decode68(0x444C8000), 153.0);
/// assert_eq!(decode68(WORD_ZERO), 0.0);
/// ```
#[inline]
pub fn decode68(word: u32) -> f64 {
    let fields = Fields::unpack(word);
    ldexp(fields.mantissa as f64, fields.scale())
}

/// Encodes a value as a representation code 68 word.
///
/// Truncates the mantissa to 24 bits. Values too large clamp to
/// [`WORD_POSITIVE_OVERFLOW`] / [`WORD_NEGATIVE_OVERFLOW`], values too small
/// to [`WORD_ZERO`]. Infinities clamp like overflow, NaN encodes as zero.
///
/// # Example
///
/// ```rust
/// use lis_repcode::rc68::{encode68, WORD_POSITIVE_OVERFLOW};
///
/// assert_eq!(encode68(-153.0), 0xBBB38000);
/// assert_eq!(encode68(1.0e39), WORD_POSITIVE_OVERFLOW);
/// ```
pub fn encode68(value: f64) -> u32 {
    if value.is_nan() {
        trace!("rep code 68: NaN encoded as zero");
        return WORD_ZERO;
    }

    let (mut mantissa, mut exponent) = frexp(value);

    if exponent <= UNDERFLOW_EXPONENT {
        trace!(value, exponent, "rep code 68: underflow clamped to zero");
        return WORD_ZERO;
    }
    if value.is_infinite() || exponent > OVERFLOW_EXPONENT {
        trace!(value, exponent, "rep code 68: overflow clamped");
        return if value < 0.0 {
            WORD_NEGATIVE_OVERFLOW
        } else {
            WORD_POSITIVE_OVERFLOW
        };
    }

    if exponent < MIN_NORMAL_EXPONENT {
        // mantissa / 2^(-128 - exponent)
        mantissa = ldexp(mantissa, exponent - MIN_NORMAL_EXPONENT);
        exponent = MIN_NORMAL_EXPONENT;
    }

    let (sign, biased) = if value < 0.0 {
        (1u32, 127 - exponent)
    } else {
        (0u32, exponent - 128)
    };

    let high = (sign << 8) | (biased as u32 & 0xFF);
    let low = ((mantissa * MANTISSA_SCALE) as i32) as u32 & MANTISSA_MASK;

    (high << MANTISSA_BITS) | low
}
