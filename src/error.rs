//! Error types for the decoder (C10).
//!
//! The original `bwtdecode.c` never validates its input alphabet and
//! silently returns success on a failed `open()`; spec.md §9 item 3
//! explicitly calls for hardening both paths in a reimplementation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("byte {byte:#04x} at offset {offset} is not in the alphabet {{\\n, A, C, G, T}}")]
    InvalidSymbol { byte: u8, offset: u64 },

    #[error("input length {len} exceeds the configured capacity ceiling of {limit} bytes")]
    CapacityExceeded { len: u64, limit: u64 },

    #[error("input contains no sentinel ('\\n') byte")]
    MissingSentinel,

    #[error("input contains more than one sentinel: first at {first}, second at {second}")]
    MultipleSentinels { first: u64, second: u64 },
}

pub type Result<T> = std::result::Result<T, DecodeError>;
