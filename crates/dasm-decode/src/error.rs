//! Decode error types.

use thiserror::Error;

/// Error type for instruction decoding.
///
/// Every failure is classified; the decoder never panics on any input and
/// never reads past the supplied buffer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The buffer ended before the instruction was complete.
    #[error("truncated instruction at byte {position}: need {needed} more byte(s)")]
    InsufficientBytes { position: usize, needed: usize },

    /// The opcode (or the selected table slot) is not a valid instruction in
    /// the current CPU mode.
    #[error("invalid opcode for {bitness}-bit mode at byte {position}")]
    InvalidOpcodeForMode { position: usize, bitness: u32 },

    /// A prefix is not allowed where it was found.
    #[error("invalid prefix combination at byte {position}: {reason}")]
    InvalidPrefixCombination { position: usize, reason: &'static str },

    /// A must-be-zero / must-be-one encoding bit has the wrong value.
    #[error("reserved encoding bits set at byte {position}")]
    ReservedEncodingBits { position: usize },

    /// The encoding exceeds the architectural 15-byte limit.
    #[error("instruction exceeds 15 bytes")]
    InstructionTooLong,
}

impl DecodeError {
    /// Creates a new InsufficientBytes error.
    pub fn insufficient(position: usize, needed: usize) -> Self {
        Self::InsufficientBytes { position, needed }
    }

    /// Creates a new InvalidOpcodeForMode error.
    pub fn invalid_opcode(position: usize, bitness: u32) -> Self {
        Self::InvalidOpcodeForMode { position, bitness }
    }

    /// Creates a new InvalidPrefixCombination error.
    pub fn invalid_prefix(position: usize, reason: &'static str) -> Self {
        Self::InvalidPrefixCombination { position, reason }
    }

    /// Creates a new ReservedEncodingBits error.
    pub fn reserved_bits(position: usize) -> Self {
        Self::ReservedEncodingBits { position }
    }
}
