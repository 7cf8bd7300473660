//! Text formatters for decoded x86 instructions.
//!
//! Four dialects are supported, one type per assembler: [`GasFormatter`]
//! (AT&T), [`IntelFormatter`], [`MasmFormatter`] and [`NasmFormatter`].
//! They share one engine and one [`FormatterOptions`] bag, so a dialect
//! switch never changes which options exist, only which defaults apply.
//!
//! ```
//! use dasm_decode::Decoder;
//! use dasm_fmt::{Formatter, IntelFormatter};
//!
//! let instr = Decoder::new(64, &[0x48, 0x01, 0xD8]).decode().unwrap();
//! let mut formatter = IntelFormatter::new();
//! assert_eq!(formatter.format_to_string(&instr), "add rax,rbx");
//! ```
//!
//! Output goes through the [`FormatterOutput`] sink trait, which tags each
//! fragment with a [`FormatterTextKind`] so callers can colorize; `String`
//! implements it for the plain-text case. A [`SymbolResolver`] hooks
//! addresses and immediates.

mod engine;
mod gas;
mod intel;
mod masm;
mod nasm;
mod num;
mod options;
mod output;
mod pseudo;
mod symres;

use dasm_core::Instruction;

pub use gas::GasFormatter;
pub use intel::IntelFormatter;
pub use masm::MasmFormatter;
pub use nasm::NasmFormatter;
pub use num::NumberFormatter;
pub use options::{FormatterOptions, MemorySizeOptions, NumberBase, OptionError};
pub use output::{FormatterOutput, FormatterTextKind};
pub use symres::{SymbolResolver, SymbolResult};

/// Common surface of the four dialect formatters.
pub trait Formatter {
    fn options(&self) -> &FormatterOptions;

    fn options_mut(&mut self) -> &mut FormatterOptions;

    /// Writes the instruction to `output`, one tagged fragment at a time.
    fn format(&mut self, instruction: &Instruction, output: &mut dyn FormatterOutput);

    /// Convenience wrapper collecting the fragments into a `String`.
    fn format_to_string(&mut self, instruction: &Instruction) -> String {
        let mut text = String::new();
        self.format(instruction, &mut text);
        text
    }
}
