#![no_main]

use dasm_decode::Decoder;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoding must never panic, and the iterator must consume the whole
    // input, one byte minimum per step.
    let mut consumed = 0;
    for result in Decoder::new(64, data).with_ip(0x1000) {
        if let Ok(instr) = result {
            consumed += instr.len();
        } else {
            consumed += 1;
        }
    }
    assert_eq!(consumed, data.len());
});
