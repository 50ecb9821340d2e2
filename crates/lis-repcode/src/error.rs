// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors raised by the representation code byte layer.
///
/// The word conversions themselves are total and never fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepCodeError {
    /// The numeric code is not one of the supported floating point codes.
    #[error("unknown representation code: {0}")]
    Unknown(u8),

    /// The buffer cannot hold one word of the representation code.
    #[error("representation code {code} needs {needed} bytes, buffer has {available}")]
    BufferTooShort {
        /// Representation code being read or written
        code: u8,
        /// Word size of the code in bytes
        needed: usize,
        /// Bytes available in the buffer
        available: usize,
    },
}
