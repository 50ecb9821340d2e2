// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `frexp` / `ldexp` on `f64` bit patterns.
//!
//! `core` provides neither, so both work directly on the IEEE-754 fields.

const EXPONENT_MASK: u64 = 0x7FF;
const EXPONENT_BIAS: i32 = 0x3FF;
const MANTISSA_BITS: u32 = 52;

/// 2^64, used to lift subnormals into the normal range.
const TWO_POW_64: f64 = 18446744073709551616.0;

/// Returns `2^n` for `n` in the normal exponent range `[-1022, 1023]`.
#[inline(always)]
fn pow2(n: i32) -> f64 {
    debug_assert!((-1022..=1023).contains(&n), "pow2({}) out of range", n);
    f64::from_bits(((EXPONENT_BIAS + n) as u64) << MANTISSA_BITS)
}

/// Splits `x` into `(fraction, exponent)` with `x == fraction * 2^exponent`
/// and `0.5 <= |fraction| < 1.0`.
///
/// Zero, NaN and infinities come back unchanged with exponent 0.
#[inline]
pub(crate) fn frexp(x: f64) -> (f64, i32) {
    let bits = x.to_bits();
    let exponent_bits = ((bits >> MANTISSA_BITS) & EXPONENT_MASK) as i32;

    match exponent_bits {
        0 if x == 0.0 => (x, 0),
        0 => {
            let (fraction, exponent) = frexp(x * TWO_POW_64);
            (fraction, exponent - 64)
        }
        0x7FF => (x, 0),
        _ => {
            // Keep sign and mantissa, force the exponent field to 2^-1.
            let fraction = f64::from_bits((bits & 0x800F_FFFF_FFFF_FFFF) | 0x3FE0_0000_0000_0000);
            (fraction, exponent_bits - (EXPONENT_BIAS - 1))
        }
    }
}

/// Returns `x * 2^n` without going through `powi`.
#[inline]
pub(crate) fn ldexp(mut x: f64, mut n: i32) -> f64 {
    if n > 1023 {
        let scale = pow2(1023);
        x *= scale;
        n -= 1023;
        if n > 1023 {
            x *= scale;
            n -= 1023;
            if n > 1023 {
                n = 1023;
            }
        }
    } else if n < -1022 {
        // 2^-1022 * 2^53, keeps intermediate results out of the subnormal range
        let scale = pow2(-969);
        x *= scale;
        n += 969;
        if n < -1022 {
            x *= scale;
            n += 969;
            if n < -1022 {
                n = -1022;
            }
        }
    }

    x * pow2(n)
}
