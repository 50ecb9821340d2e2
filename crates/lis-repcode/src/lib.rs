// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # lis_repcode
//!
//! Bit-exact conversion between `f64` and the two LIS floating point
//! representation codes found in legacy well-log data.
//!
//! ## Representation codes
//!
//! - **68** (`0x44`): 32-bit word, 8-bit excess-128 exponent, 24-bit sign-folded mantissa
//! - **49** (`0x31`): 16-bit word, 12-bit two's complement mantissa, 4-bit exponent
//!
//! Neither format has NaN or infinity. Encoding never fails: values beyond the
//! format's range clamp to its overflow words, values too small clamp to its
//! zero word. Every word decodes to a finite `f64`.
//!
//! ## Example
//!
//! ```rust
//! use lis_repcode::{decode49, decode68, encode49, encode68};
//!
//! assert_eq!(encode68(153.0), 0x444C8000);
//! assert_eq!(decode68(0xBBB38000), -153.0);
//!
//! assert_eq!(encode49(-153.0), 0xB388);
//! assert_eq!(decode49(0x4C88), 153.0);
//! ```
//!
//! ## Byte layer
//!
//! [`RepCode`] describes a code (word size, numeric range) and reads or writes a
//! single big-endian word, which is how the words appear on tape:
//!
//! ```rust
//! use lis_repcode::RepCode;
//!
//! let code = RepCode::try_from(68u8).expect("Failed to resolve rep code");
//! let value = code.decode(&[0x44, 0x4C, 0x80, 0x00]).expect("Failed to decode(..)");
//! assert_eq!(value, 153.0);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod float;
mod rep_code;

pub mod rc49;
pub mod rc68;

pub use error::RepCodeError;
pub use rc49::{decode49, encode49};
pub use rc68::{decode68, encode68};
pub use rep_code::RepCode;
