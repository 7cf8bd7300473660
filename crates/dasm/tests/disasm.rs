//! End-to-end decode-and-format tests across the four dialects.

use dasm::{
    Code, DecodeError, Decoder, Formatter, GasFormatter, Instruction, IntelFormatter,
    MasmFormatter, NasmFormatter, SymbolResolver, SymbolResult,
};

fn decode(bitness: u32, bytes: &[u8]) -> Instruction {
    Decoder::new(bitness, bytes).decode().unwrap()
}

#[test]
fn one_instruction_four_dialects() {
    let instr = decode(32, &[0xB8, 0x01, 0x00, 0x00, 0x00]);
    assert_eq!(GasFormatter::new().format_to_string(&instr), "mov $1,%eax");
    assert_eq!(IntelFormatter::new().format_to_string(&instr), "mov eax,1");
    assert_eq!(MasmFormatter::new().format_to_string(&instr), "mov eax,1");
    assert_eq!(NasmFormatter::new().format_to_string(&instr), "mov eax,1");
}

#[test]
fn mode_dependent_opcodes_are_rejected() {
    // push es exists in 16/32-bit mode only
    assert_eq!(decode(32, &[0x06]).mnemonic(), "push");
    assert!(matches!(
        Decoder::new(64, &[0x06]).decode(),
        Err(DecodeError::InvalidOpcodeForMode { bitness: 64, .. })
    ));
    // syscall needs 64-bit mode; 0F 04 is an unassigned row everywhere
    assert_eq!(decode(64, &[0x0F, 0x05]).mnemonic(), "syscall");
    assert!(matches!(
        Decoder::new(32, &[0x0F, 0x05]).decode(),
        Err(DecodeError::InvalidOpcodeForMode { bitness: 32, .. })
    ));
    assert!(matches!(
        Decoder::new(64, &[0x0F, 0x04]).decode(),
        Err(DecodeError::InvalidOpcodeForMode { .. })
    ));
}

#[test]
fn evex_reserved_bits_are_rejected() {
    // P1 bit 2 must be set
    assert!(matches!(
        Decoder::new(64, &[0x62, 0xF1, 0x78, 0x48, 0x58, 0xC2]).decode(),
        Err(DecodeError::ReservedEncodingBits { .. })
    ));
}

#[test]
fn prefix_run_exceeds_the_length_ceiling() {
    assert_eq!(
        Decoder::new(64, &[0x66; 16]).decode(),
        Err(DecodeError::InstructionTooLong)
    );
}

#[test]
fn pseudo_ops_across_dialects() {
    let instr = decode(64, &[0x0F, 0xC2, 0xC1, 0x02]);
    assert_eq!(
        GasFormatter::new().format_to_string(&instr),
        "cmpleps %xmm1,%xmm0"
    );
    assert_eq!(
        NasmFormatter::new().format_to_string(&instr),
        "cmpleps xmm0,xmm1"
    );
    let mut formatter = IntelFormatter::new();
    formatter.options_mut().use_pseudo_ops = false;
    assert_eq!(formatter.format_to_string(&instr), "cmpps xmm0,xmm1,2");
}

#[test]
fn iterator_resynchronizes_and_formats() {
    // valid, invalid-in-64-bit, valid
    let code = [0x01, 0xD8, 0x06, 0x90];
    let mut texts = Vec::new();
    let mut formatter = IntelFormatter::new();
    for result in Decoder::new(64, &code) {
        match result {
            Ok(instr) => texts.push(formatter.format_to_string(&instr)),
            Err(_) => texts.push("(bad)".to_string()),
        }
    }
    assert_eq!(texts, ["add eax,ebx", "(bad)", "nop"]);
}

#[test]
fn branch_targets_follow_the_instruction_pointer() {
    let instr = Decoder::new(64, &[0xE8, 0x00, 0x01, 0x00, 0x00])
        .with_ip(0x4000)
        .decode()
        .unwrap();
    assert_eq!(instr.branch_target(), 0x4105);
    assert_eq!(
        IntelFormatter::new().format_to_string(&instr),
        "call 0000000000004105h"
    );
}

struct MapResolver;

impl SymbolResolver for MapResolver {
    fn resolve(
        &mut self,
        _instruction: &Instruction,
        _operand: usize,
        address: u64,
        _size: u32,
    ) -> Option<SymbolResult> {
        if (0x4100..0x4200).contains(&address) {
            Some(SymbolResult::new(0x4100, "helper"))
        } else {
            None
        }
    }
}

#[test]
fn symbols_replace_branch_targets() {
    let instr = Decoder::new(64, &[0xE8, 0x00, 0x01, 0x00, 0x00])
        .with_ip(0x4000)
        .decode()
        .unwrap();
    let mut formatter = IntelFormatter::with_symbol_resolver(Box::new(MapResolver));
    assert_eq!(formatter.format_to_string(&instr), "call helper+5");

    formatter.options_mut().show_symbol_address = true;
    assert_eq!(
        formatter.format_to_string(&instr),
        "call helper+5 (0000000000004105h)"
    );
}

#[test]
fn formatting_never_mutates_the_instruction() {
    let instr = decode(64, &[0x48, 0x8B, 0x44, 0x8B, 0x10]);
    let copy = instr;
    let mut formatter = GasFormatter::new();
    let first = formatter.format_to_string(&instr);
    let second = formatter.format_to_string(&instr);
    assert_eq!(first, second);
    assert_eq!(instr, copy);
}

#[test]
fn every_two_byte_pattern_formats_in_every_dialect() {
    let mut gas = GasFormatter::new();
    let mut intel = IntelFormatter::new();
    let mut masm = MasmFormatter::new();
    let mut nasm = NasmFormatter::new();
    let mut buf = [0u8; 15];
    for hi in 0..=255u8 {
        for lo in 0..=255u8 {
            buf[0] = hi;
            buf[1] = lo;
            for bitness in [16, 32, 64] {
                if let Ok(instr) = Decoder::new(bitness, &buf).decode() {
                    assert!(!gas.format_to_string(&instr).is_empty());
                    assert!(!intel.format_to_string(&instr).is_empty());
                    assert!(!masm.format_to_string(&instr).is_empty());
                    assert!(!nasm.format_to_string(&instr).is_empty());
                }
            }
        }
    }
}

#[test]
fn default_instruction_formats_as_bad() {
    let instr = Instruction::new();
    assert_eq!(IntelFormatter::new().format_to_string(&instr), "(bad)");
}

#[test]
fn every_code_formats_in_every_dialect() {
    let mut gas = GasFormatter::new();
    let mut intel = IntelFormatter::new();
    let mut masm = MasmFormatter::new();
    let mut nasm = NasmFormatter::new();
    for &code in Code::ALL {
        let mut instr = Instruction::new();
        instr.set_code(code);
        assert!(!gas.format_to_string(&instr).is_empty());
        assert!(!intel.format_to_string(&instr).is_empty());
        assert!(!masm.format_to_string(&instr).is_empty());
        assert!(!nasm.format_to_string(&instr).is_empty());
    }
}

#[test]
fn options_act_independently() {
    let instr = decode(64, &[0x48, 0x8B, 0x44, 0x8B, 0x10]);
    let mut formatter = IntelFormatter::new();
    let baseline = formatter.format_to_string(&instr);

    // An option that cannot apply to this instruction changes nothing.
    formatter.options_mut().use_pseudo_ops = false;
    formatter.options_mut().nasm_show_sign_extended_immediate_size = true;
    assert_eq!(formatter.format_to_string(&instr), baseline);

    // Mnemonic casing leaves operands alone.
    formatter.options_mut().uppercase_mnemonics = true;
    assert_eq!(
        formatter.format_to_string(&instr),
        format!("MOV{}", &baseline[3..])
    );
}

#[test]
fn far_branch_operand_shapes() {
    let instr = decode(32, &[0x9A, 0x00, 0x10, 0x00, 0x00, 0x34, 0x12]);
    assert_eq!(
        IntelFormatter::new().format_to_string(&instr),
        "call 1234h:00001000h"
    );
    assert_eq!(
        GasFormatter::new().format_to_string(&instr),
        "call $0x1234,$0x00001000"
    );
}
