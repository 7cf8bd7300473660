//! Intel (XED-style) syntax.

use dasm_core::Instruction;

use crate::engine::{Engine, Syntax};
use crate::options::FormatterOptions;
use crate::output::FormatterOutput;
use crate::symres::SymbolResolver;
use crate::Formatter;

/// Formats instructions in Intel syntax: destination first, bare register
/// names, `[base+index*scale+disp]` memory operands with `ptr` size keywords.
pub struct IntelFormatter {
    engine: Engine,
}

impl IntelFormatter {
    pub fn new() -> Self {
        Self::with_options(FormatterOptions::intel())
    }

    pub fn with_options(options: FormatterOptions) -> Self {
        Self {
            engine: Engine::new(Syntax::Intel, options),
        }
    }

    pub fn with_symbol_resolver(resolver: Box<dyn SymbolResolver>) -> Self {
        let mut formatter = Self::new();
        formatter.engine.resolver = Some(resolver);
        formatter
    }
}

impl Default for IntelFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for IntelFormatter {
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
        IntelFormatter::new().format_to_string(&instr)
    }

    #[test]
    fn destination_comes_first() {
        assert_eq!(fmt(64, &[0x48, 0x01, 0xD8]), "add rax,rbx");
        assert_eq!(fmt(32, &[0xB8, 0x01, 0x00, 0x00, 0x00]), "mov eax,1");
    }

    #[test]
    fn memory_operand_shape() {
        assert_eq!(fmt(32, &[0x01, 0x18]), "add [eax],ebx");
        assert_eq!(fmt(32, &[0x8B, 0x44, 0x8B, 0x10]), "mov eax,[ebx+ecx*4+10h]");
    }

    #[test]
    fn negative_displacement_is_signed() {
        assert_eq!(fmt(32, &[0x89, 0x45, 0xFC]), "mov [ebp-4h],eax");
    }

    #[test]
    fn size_keyword_only_when_ambiguous() {
        assert_eq!(fmt(64, &[0xFF, 0x30]), "push qword ptr [rax]");
        let instr = Decoder::new(64, &[0xFF, 0x30]).decode().unwrap();
        let mut formatter = IntelFormatter::new();
        formatter.options_mut().set_memory_size_options_u32(3).unwrap();
        assert_eq!(formatter.format_to_string(&instr), "push [rax]");
    }

    #[test]
    fn short_branches_take_the_keyword() {
        assert_eq!(fmt(32, &[0x75, 0x05]), "jne short 00000007h");
        let instr = Decoder::new(32, &[0x75, 0x05]).decode().unwrap();
        let mut formatter = IntelFormatter::new();
        formatter.options_mut().show_branch_size = false;
        assert_eq!(formatter.format_to_string(&instr), "jne 00000007h");
    }

    #[test]
    fn evex_decorators() {
        let instr = Decoder::new(64, &[0x62, 0xF1, 0x74, 0x49, 0x58, 0xC2])
            .decode()
            .unwrap();
        assert_eq!(
            IntelFormatter::new().format_to_string(&instr),
            "vaddps zmm0{k1},zmm1,zmm2"
        );
    }

    #[test]
    fn broadcast_memory_names_the_element() {
        let instr = Decoder::new(64, &[0x62, 0xF1, 0x74, 0x18, 0x58, 0x08])
            .decode()
            .unwrap();
        assert_eq!(
            IntelFormatter::new().format_to_string(&instr),
            "vaddps xmm1,xmm1,dword ptr [rax]{1to4}"
        );
    }

    #[test]
    fn rounding_trails_the_operands() {
        let instr = Decoder::new(64, &[0x62, 0xF1, 0x74, 0x18, 0x58, 0xC2])
            .decode()
            .unwrap();
        assert_eq!(
            IntelFormatter::new().format_to_string(&instr),
            "vaddps zmm0,zmm1,zmm2,{rn-sae}"
        );
    }

    #[test]
    fn pseudo_ops_replace_the_predicate_immediate() {
        let bytes = [0x0F, 0xC2, 0xC1, 0x00];
        let instr = Decoder::new(64, &bytes).decode().unwrap();
        let mut formatter = IntelFormatter::new();
        assert_eq!(formatter.format_to_string(&instr), "cmpeqps xmm0,xmm1");
        formatter.options_mut().use_pseudo_ops = false;
        assert_eq!(formatter.format_to_string(&instr), "cmpps xmm0,xmm1,0");
    }

    #[test]
    fn uppercase_everything() {
        let instr = Decoder::new(64, &[0x48, 0x01, 0xD8]).decode().unwrap();
        let mut formatter = IntelFormatter::new();
        formatter.options_mut().uppercase_all = true;
        assert_eq!(formatter.format_to_string(&instr), "ADD RAX,RBX");
    }

    #[test]
    fn operand_column_padding() {
        let instr = Decoder::new(64, &[0x48, 0x01, 0xD8]).decode().unwrap();
        let mut formatter = IntelFormatter::new();
        formatter.options_mut().first_operand_char_index = 8;
        assert_eq!(formatter.format_to_string(&instr), "add     rax,rbx");
    }

    #[test]
    fn prefixes_lead_the_line() {
        assert_eq!(fmt(64, &[0xF0, 0x01, 0x18]), "lock add [rax],ebx");
        assert_eq!(fmt(64, &[0xF3, 0xA4]), "rep movsb");
    }
}
