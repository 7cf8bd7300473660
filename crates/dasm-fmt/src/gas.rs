//! AT&T (GNU assembler) syntax.

use dasm_core::Instruction;

use crate::engine::{Engine, Syntax};
use crate::options::FormatterOptions;
use crate::output::FormatterOutput;
use crate::symres::SymbolResolver;
use crate::Formatter;

/// Formats instructions the way the GNU assembler writes them: reversed
/// operand order, `%` register sigils, `$` immediates and `disp(base,index,scale)`
/// memory operands.
pub struct GasFormatter {
    engine: Engine,
}

impl GasFormatter {
    pub fn new() -> Self {
        Self::with_options(FormatterOptions::gas())
    }

    pub fn with_options(options: FormatterOptions) -> Self {
        Self {
            engine: Engine::new(Syntax::Gas, options),
        }
    }

    pub fn with_symbol_resolver(resolver: Box<dyn SymbolResolver>) -> Self {
        let mut formatter = Self::new();
        formatter.engine.resolver = Some(resolver);
        formatter
    }
}

impl Default for GasFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for GasFormatter {
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
        GasFormatter::new().format_to_string(&instr)
    }

    #[test]
    fn operands_are_reversed() {
        assert_eq!(fmt(64, &[0x48, 0x01, 0xD8]), "add %rbx,%rax");
    }

    #[test]
    fn immediates_take_a_dollar_sign() {
        assert_eq!(fmt(32, &[0xB8, 0x01, 0x00, 0x00, 0x00]), "mov $1,%eax");
    }

    #[test]
    fn memory_operand_shape() {
        assert_eq!(fmt(32, &[0x01, 0x18]), "add %ebx,(%eax)");
        assert_eq!(
            fmt(32, &[0x8B, 0x44, 0x8B, 0x10]),
            "mov 0x10(%ebx,%ecx,4),%eax"
        );
    }

    #[test]
    fn negative_displacement() {
        assert_eq!(fmt(32, &[0x89, 0x45, 0xFC]), "mov %eax,-0x4(%ebp)");
    }

    #[test]
    fn ambiguous_memory_gets_a_size_suffix() {
        assert_eq!(fmt(64, &[0xFF, 0x30]), "pushq (%rax)");
    }

    #[test]
    fn suffix_option_applies_to_unambiguous_forms() {
        let instr = Decoder::new(32, &[0x01, 0x18]).decode().unwrap();
        let mut formatter = GasFormatter::new();
        formatter.options_mut().gas_show_mnemonic_size_suffix = true;
        assert_eq!(formatter.format_to_string(&instr), "addl %ebx,(%eax)");
    }

    #[test]
    fn naked_registers_drop_the_sigil() {
        let instr = Decoder::new(64, &[0x48, 0x01, 0xD8]).decode().unwrap();
        let mut formatter = GasFormatter::new();
        formatter.options_mut().gas_naked_registers = true;
        assert_eq!(formatter.format_to_string(&instr), "add rbx,rax");
    }

    #[test]
    fn branch_targets_are_bare_addresses() {
        let instr = Decoder::new(32, &[0x75, 0x05])
            .decode()
            .unwrap();
        assert_eq!(
            GasFormatter::new().format_to_string(&instr),
            "jne 0x00000007"
        );
    }

    #[test]
    fn rip_relative_collapses_to_absolute() {
        let instr = Decoder::new(64, &[0x8B, 0x05, 0x10, 0x00, 0x00, 0x00])
            .decode()
            .unwrap();
        let mut formatter = GasFormatter::new();
        assert_eq!(formatter.format_to_string(&instr), "mov 0x16,%eax");
        formatter.options_mut().rip_relative_addresses = true;
        assert_eq!(formatter.format_to_string(&instr), "mov 0x10(%rip),%eax");
    }

    #[test]
    fn evex_rounding_decorator_leads_the_operand_list() {
        let instr = Decoder::new(64, &[0x62, 0xF1, 0x74, 0x18, 0x58, 0xC2])
            .decode()
            .unwrap();
        assert_eq!(
            GasFormatter::new().format_to_string(&instr),
            "vaddps {rn-sae},%zmm2,%zmm1,%zmm0"
        );
    }

    #[test]
    fn st0_spelling() {
        assert_eq!(fmt(64, &[0xD8, 0xC1]), "fadd %st(1),%st");
        let instr = Decoder::new(64, &[0xD8, 0xC1]).decode().unwrap();
        let mut formatter = GasFormatter::new();
        formatter.options_mut().prefer_st0 = true;
        assert_eq!(formatter.format_to_string(&instr), "fadd %st(1),%st(0)");
    }
}
