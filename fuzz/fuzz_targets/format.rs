#![no_main]

use dasm_decode::Decoder;
use dasm_fmt::{Formatter, GasFormatter, IntelFormatter, MasmFormatter, NasmFormatter};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let bitness = match data[0] % 3 {
        0 => 16,
        1 => 32,
        _ => 64,
    };
    let mut gas = GasFormatter::new();
    let mut intel = IntelFormatter::new();
    let mut masm = MasmFormatter::new();
    let mut nasm = NasmFormatter::new();
    for instr in Decoder::new(bitness, &data[1..]).with_ip(0x1000).flatten() {
        let _ = gas.format_to_string(&instr);
        let _ = intel.format_to_string(&instr);
        let _ = masm.format_to_string(&instr);
        let _ = nasm.format_to_string(&instr);
    }
});
