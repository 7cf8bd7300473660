//! x86/x64 instruction decoder.
//!
//! [`Decoder`] turns bytes into [`dasm_core::Instruction`] values. It handles
//! 16-, 32- and 64-bit code, every prefix class, and the legacy, REX, VEX,
//! EVEX, XOP and 3DNow! encodings. It never panics on any input and never
//! reads past the supplied buffer.
//!
//! ```
//! use dasm_decode::Decoder;
//!
//! let bytes = [0x48, 0x01, 0xd8]; // add rax, rbx
//! let mut decoder = Decoder::new(64, &bytes).with_ip(0x1000);
//! let instr = decoder.decode().unwrap();
//! assert_eq!(instr.mnemonic(), "add");
//! assert_eq!(instr.len(), 3);
//! ```

mod decoder;
mod error;
mod maps;
mod prefix;
mod reader;
mod table;

pub use decoder::{Decoder, DecoderOptions};
pub use error::DecodeError;
pub use reader::MAX_INSTRUCTION_LEN;
