// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use tracing::debug;

use crate::error::RepCodeError;
use crate::rc49::{self, decode49, encode49};
use crate::rc68::{self, decode68, encode68};

/// A supported LIS floating point representation code.
///
/// Words are big-endian on tape; [`RepCode::decode`] and [`RepCode::encode`]
/// handle exactly one word at the front of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RepCode {
    /// Code 49 (`0x31`), 16-bit floating point
    Rc49 = 49,
    /// Code 68 (`0x44`), 32-bit floating point
    Rc68 = 68,
}

impl RepCode {
    /// Numeric representation code.
    #[inline(always)]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Size of one word in bytes.
    #[inline(always)]
    pub const fn size(self) -> usize {
        match self {
            Self::Rc49 => rc49::SIZE,
            Self::Rc68 => rc68::SIZE,
        }
    }

    /// Most negative value the code can hold.
    #[inline(always)]
    pub const fn min_value(self) -> f64 {
        match self {
            Self::Rc49 => rc49::MIN_VALUE,
            Self::Rc68 => rc68::MIN_VALUE,
        }
    }

    /// Largest value the code can hold.
    #[inline(always)]
    pub const fn max_value(self) -> f64 {
        match self {
            Self::Rc49 => rc49::MAX_VALUE,
            Self::Rc68 => rc68::MAX_VALUE,
        }
    }

    /// `(min_value(), max_value())`
    #[inline(always)]
    pub const fn min_max_value(self) -> (f64, f64) {
        (self.min_value(), self.max_value())
    }

    /// Decodes the big-endian word at the front of `bytes`.
    ///
    /// Bytes past the first word are ignored.
    ///
    /// # Errors
    ///
    /// [`RepCodeError::BufferTooShort`] if `bytes` is shorter than [`Self::size`].
    pub fn decode(self, bytes: &[u8]) -> Result<f64, RepCodeError> {
        let value = match self {
            Self::Rc49 => bytes
                .first_chunk::<{ rc49::SIZE }>()
                .map(|word| decode49(u16::from_be_bytes(*word))),
            Self::Rc68 => bytes
                .first_chunk::<{ rc68::SIZE }>()
                .map(|word| decode68(u32::from_be_bytes(*word))),
        };

        value.ok_or_else(|| self.too_short(bytes.len()))
    }

    /// Encodes `value` as a big-endian word at the front of `out`.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// [`RepCodeError::BufferTooShort`] if `out` is shorter than [`Self::size`].
    /// Nothing is written in that case.
    pub fn encode(self, value: f64, out: &mut [u8]) -> Result<usize, RepCodeError> {
        let available = out.len();

        match self {
            Self::Rc49 => {
                let word = out
                    .first_chunk_mut::<{ rc49::SIZE }>()
                    .ok_or_else(|| self.too_short(available))?;
                *word = encode49(value).to_be_bytes();
            }
            Self::Rc68 => {
                let word = out
                    .first_chunk_mut::<{ rc68::SIZE }>()
                    .ok_or_else(|| self.too_short(available))?;
                *word = encode68(value).to_be_bytes();
            }
        }

        Ok(self.size())
    }

    fn too_short(self, available: usize) -> RepCodeError {
        debug!(
            code = self.code(),
            needed = self.size(),
            available,
            "buffer too short for representation code word"
        );

        RepCodeError::BufferTooShort {
            code: self.code(),
            needed: self.size(),
            available,
        }
    }
}

impl TryFrom<u8> for RepCode {
    type Error = RepCodeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            49 => Ok(Self::Rc49),
            68 => Ok(Self::Rc68),
            _ => {
                debug!(code, "unknown representation code");
                Err(RepCodeError::Unknown(code))
            }
        }
    }
}

impl From<RepCode> for u8 {
    fn from(rep_code: RepCode) -> Self {
        rep_code.code()
    }
}
