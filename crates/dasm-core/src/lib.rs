//! Core data model shared by the decoder and the formatters.
//!
//! This crate defines the instruction representation ([`Instruction`]), the
//! instruction code space ([`Code`]), the register set ([`Register`]) and the
//! small enums that describe operands. It has no decoding or formatting logic
//! of its own.

mod code;
mod instruction;
mod register;
mod tables;

pub use code::Code;
pub use instruction::{
    EncodingKind, Instruction, MemorySize, OpKind, RoundingControl, MAX_OPERANDS,
};
pub use register::{Register, RegisterClass};
pub use tables::register_name;
