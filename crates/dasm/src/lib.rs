//! An x86/x64 disassembler.
//!
//! This crate re-exports the whole stack: the instruction model from
//! `dasm-core`, the decoder from `dasm-decode` and the four text
//! formatters from `dasm-fmt`.
//!
//! ```
//! use dasm::{Decoder, Formatter, NasmFormatter};
//!
//! let code = [0x48, 0x8B, 0x44, 0x8B, 0x10, 0xC3];
//! let mut formatter = NasmFormatter::new();
//! let mut lines = Vec::new();
//! for instr in Decoder::new(64, &code).with_ip(0x1000).flatten() {
//!     lines.push(formatter.format_to_string(&instr));
//! }
//! assert_eq!(lines, ["mov rax,[rbx+rcx*4+10h]", "ret"]);
//! ```

pub use dasm_core::{
    Code, EncodingKind, Instruction, MemorySize, OpKind, Register, RegisterClass,
    RoundingControl,
};
pub use dasm_decode::{DecodeError, Decoder, DecoderOptions, MAX_INSTRUCTION_LEN};
pub use dasm_fmt::{
    Formatter, FormatterOptions, FormatterOutput, FormatterTextKind, GasFormatter,
    IntelFormatter, MasmFormatter, MemorySizeOptions, NasmFormatter, NumberBase,
    NumberFormatter, OptionError, SymbolResolver, SymbolResult,
};
