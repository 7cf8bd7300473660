//! MASM syntax.

use dasm_core::Instruction;

use crate::engine::{Engine, Syntax};
use crate::options::FormatterOptions;
use crate::output::FormatterOutput;
use crate::symres::SymbolResolver;
use crate::Formatter;

/// Formats instructions the way Microsoft's assembler prints them: Intel
/// operand shape plus `ds:` prefixes on bare addresses and `near ptr`
/// branch keywords.
pub struct MasmFormatter {
    engine: Engine,
}

impl MasmFormatter {
    pub fn new() -> Self {
        Self::with_options(FormatterOptions::masm())
    }

    pub fn with_options(options: FormatterOptions) -> Self {
        Self {
            engine: Engine::new(Syntax::Masm, options),
        }
    }

    pub fn with_symbol_resolver(resolver: Box<dyn SymbolResolver>) -> Self {
        let mut formatter = Self::new();
        formatter.engine.resolver = Some(resolver);
        formatter
    }
}

impl Default for MasmFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for MasmFormatter {
    fn options(&self) -> &FormatterOptions {
        &self.engine.options
    }

    fn options_mut(&mut self) -> &mut FormatterOptions {
        &mut self.engine.options
    }

    fn format(&mut self, instruction: &Instruction, output: &mut dyn FormatterOutput) {
        self.engine.format(instruction, output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dasm_decode::Decoder;

    fn fmt(bitness: u32, bytes: &[u8]) -> String {
        let instr = Decoder::new(bitness, bytes).decode().unwrap();
        MasmFormatter::new().format_to_string(&instr)
    }

    #[test]
    fn intel_operand_shape() {
        assert_eq!(fmt(64, &[0x48, 0x01, 0xD8]), "add rax,rbx");
        assert_eq!(fmt(32, &[0x8B, 0x44, 0x8B, 0x10]), "mov eax,[ebx+ecx*4+10h]");
    }

    #[test]
    fn bare_address_gets_a_ds_prefix() {
        assert_eq!(
            fmt(32, &[0xA1, 0x34, 0x12, 0x00, 0x00]),
            "mov eax,ds:[1234h]"
        );
    }

    #[test]
    fn displacement_can_leave_the_brackets() {
        let instr = Decoder::new(32, &[0xA1, 0x34, 0x12, 0x00, 0x00])
            .decode()
            .unwrap();
        let mut formatter = MasmFormatter::new();
        formatter.options_mut().masm_displ_in_brackets = false;
        assert_eq!(formatter.format_to_string(&instr), "mov eax,ds:1234h");
    }

    #[test]
    fn ds_prefix_can_be_disabled() {
        let instr = Decoder::new(32, &[0xA1, 0x34, 0x12, 0x00, 0x00])
            .decode()
            .unwrap();
        let mut formatter = MasmFormatter::new();
        formatter.options_mut().masm_add_ds_prefix32 = false;
        assert_eq!(formatter.format_to_string(&instr), "mov eax,[1234h]");
    }

    #[test]
    fn near_branches_take_near_ptr() {
        assert_eq!(
            fmt(32, &[0xE9, 0x00, 0x01, 0x00, 0x00]),
            "jmp near ptr 00000105h"
        );
        assert_eq!(fmt(32, &[0x75, 0x05]), "jne short 00000007h");
    }

    #[test]
    fn explicit_segment_override() {
        assert_eq!(fmt(32, &[0x64, 0x8B, 0x00]), "mov eax,fs:[eax]");
    }
}
