//! Property tests: formatting any decodable byte string always produces
//! stable, non-empty text in every dialect.

use proptest::prelude::*;

use dasm_decode::Decoder;
use dasm_fmt::{
    Formatter, FormatterOptions, GasFormatter, IntelFormatter, MasmFormatter, NasmFormatter,
};

fn formatters() -> [Box<dyn Formatter>; 4] {
    [
        Box::new(GasFormatter::new()),
        Box::new(IntelFormatter::new()),
        Box::new(MasmFormatter::new()),
        Box::new(NasmFormatter::new()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    #[test]
    fn formatting_never_panics(
        bytes in prop::collection::vec(any::<u8>(), 1..32),
        bitness in prop::sample::select(vec![16u32, 32, 64]),
    ) {
        if let Ok(instr) = Decoder::new(bitness, &bytes).decode() {
            for mut formatter in formatters() {
                let text = formatter.format_to_string(&instr);
                prop_assert!(!text.is_empty());
            }
        }
    }

    #[test]
    fn formatting_is_deterministic(
        bytes in prop::collection::vec(any::<u8>(), 1..16),
        bitness in prop::sample::select(vec![16u32, 32, 64]),
    ) {
        if let Ok(instr) = Decoder::new(bitness, &bytes).decode() {
            for mut formatter in formatters() {
                let first = formatter.format_to_string(&instr);
                let second = formatter.format_to_string(&instr);
                prop_assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn non_gas_dialects_share_operand_order(
        bytes in prop::collection::vec(any::<u8>(), 1..16),
    ) {
        // With identical options the three Intel-order dialects differ only
        // in dialect-specific keywords, never in comma count.
        if let Ok(instr) = Decoder::new(64, &bytes).decode() {
            let options = FormatterOptions::intel();
            let mut intel = IntelFormatter::with_options(options.clone());
            let mut masm = MasmFormatter::with_options(options.clone());
            let mut nasm = NasmFormatter::with_options(options);
            let commas = |s: String| s.matches(',').count();
            let n = commas(intel.format_to_string(&instr));
            prop_assert_eq!(commas(masm.format_to_string(&instr)), n);
            prop_assert_eq!(commas(nasm.format_to_string(&instr)), n);
        }
    }
}
