//! NASM syntax.

use dasm_core::Instruction;

use crate::engine::{Engine, Syntax};
use crate::options::FormatterOptions;
use crate::output::FormatterOutput;
use crate::symres::SymbolResolver;
use crate::Formatter;

/// Formats instructions for the Netwide Assembler: Intel operand order,
/// bare size keywords without `ptr`, segment overrides inside the brackets
/// and `st0`-style FPU register names.
pub struct NasmFormatter {
    engine: Engine,
}

impl NasmFormatter {
    pub fn new() -> Self {
        Self::with_options(FormatterOptions::nasm())
    }

    pub fn with_options(options: FormatterOptions) -> Self {
        Self {
            engine: Engine::new(Syntax::Nasm, options),
        }
    }

    pub fn with_symbol_resolver(resolver: Box<dyn SymbolResolver>) -> Self {
        let mut formatter = Self::new();
        formatter.engine.resolver = Some(resolver);
        formatter
    }
}

impl Default for NasmFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for NasmFormatter {
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
        NasmFormatter::new().format_to_string(&instr)
    }

    #[test]
    fn intel_operand_shape() {
        assert_eq!(fmt(64, &[0x48, 0x01, 0xD8]), "add rax,rbx");
        assert_eq!(fmt(32, &[0xB8, 0x01, 0x00, 0x00, 0x00]), "mov eax,1");
    }

    #[test]
    fn size_keyword_has_no_ptr() {
        assert_eq!(fmt(64, &[0xFF, 0x30]), "push qword [rax]");
    }

    #[test]
    fn segment_override_sits_inside_the_brackets() {
        assert_eq!(fmt(32, &[0x64, 0x8B, 0x00]), "mov eax,[fs:eax]");
    }

    #[test]
    fn fpu_registers_are_numbered() {
        assert_eq!(fmt(64, &[0xD8, 0xC1]), "fadd st,st1");
    }

    #[test]
    fn sign_extended_immediate_size_keyword() {
        let instr = Decoder::new(32, &[0x83, 0xC0, 0xFF]).decode().unwrap();
        let mut formatter = NasmFormatter::new();
        assert_eq!(formatter.format_to_string(&instr), "add eax,0FFFFFFFFh");
        formatter
            .options_mut()
            .nasm_show_sign_extended_immediate_size = true;
        assert_eq!(
            formatter.format_to_string(&instr),
            "add eax,byte 0FFFFFFFFh"
        );
    }

    #[test]
    fn signed_immediates_option() {
        let instr = Decoder::new(32, &[0x83, 0xC0, 0xFF]).decode().unwrap();
        let mut formatter = NasmFormatter::new();
        formatter.options_mut().signed_immediate_operands = true;
        assert_eq!(formatter.format_to_string(&instr), "add eax,-1");
    }

    #[test]
    fn separator_spacing_option() {
        let instr = Decoder::new(64, &[0x48, 0x01, 0xD8]).decode().unwrap();
        let mut formatter = NasmFormatter::new();
        formatter.options_mut().space_after_operand_separator = true;
        assert_eq!(formatter.format_to_string(&instr), "add rax, rbx");
    }
}
