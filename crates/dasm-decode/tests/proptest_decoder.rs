//! Property-based tests for the decoder.
//!
//! These verify invariants that must hold for every input:
//! - Decoding never panics on arbitrary bytes
//! - Decoded instruction length is within architectural bounds
//! - Decoding is deterministic (same input, same output)
//! - An instruction re-decodes identically from exactly its own bytes
//! - Block iteration covers the whole buffer with no gaps or overlaps

use proptest::prelude::*;

use dasm_decode::{Decoder, MAX_INSTRUCTION_LEN};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10000))]

    /// Decoding arbitrary bytes never panics, in any mode.
    #[test]
    fn decode_never_panics(
        bytes in prop::collection::vec(any::<u8>(), 0..32),
        mode in prop::sample::select(vec![16u32, 32, 64])
    ) {
        let _ = Decoder::new(mode, &bytes).decode();
    }

    /// Successfully decoded instructions have a valid length.
    #[test]
    fn decoded_len_is_valid(
        bytes in prop::collection::vec(any::<u8>(), 1..32),
        mode in prop::sample::select(vec![16u32, 32, 64])
    ) {
        if let Ok(instr) = Decoder::new(mode, &bytes).decode() {
            prop_assert!(instr.len() >= 1, "length must be at least 1");
            prop_assert!(instr.len() <= MAX_INSTRUCTION_LEN, "length must be at most 15");
            prop_assert!(instr.len() <= bytes.len(), "length cannot exceed the input");
            prop_assert!(!instr.is_invalid(), "a decoded instruction has a valid code");
        }
    }

    /// Decoding is deterministic.
    #[test]
    fn decode_is_deterministic(
        bytes in prop::collection::vec(any::<u8>(), 1..32),
        mode in prop::sample::select(vec![16u32, 32, 64])
    ) {
        let a = Decoder::new(mode, &bytes).with_ip(0x1000).decode();
        let b = Decoder::new(mode, &bytes).with_ip(0x1000).decode();
        prop_assert_eq!(a, b);
    }

    /// The decoded ip matches the decoder's starting ip.
    #[test]
    fn decoded_ip_matches(
        bytes in prop::collection::vec(any::<u8>(), 1..32),
        ip in 0x1000u64..0xFFFF_FFFF_FFFF_0000u64
    ) {
        if let Ok(instr) = Decoder::new(64, &bytes).with_ip(ip).decode() {
            prop_assert_eq!(instr.ip(), ip);
            prop_assert_eq!(instr.next_ip(), ip + instr.len() as u64);
        }
    }

    /// Truncating the buffer to exactly the decoded length changes nothing:
    /// the instruction owns its bytes and no more.
    #[test]
    fn decode_of_exact_length_prefix_is_identical(
        bytes in prop::collection::vec(any::<u8>(), 1..32),
        mode in prop::sample::select(vec![16u32, 32, 64])
    ) {
        if let Ok(instr) = Decoder::new(mode, &bytes).with_ip(0x1000).decode() {
            let again = Decoder::new(mode, &bytes[..instr.len()])
                .with_ip(0x1000)
                .decode();
            prop_assert_eq!(again, Ok(instr));
        }
    }

    /// Decoded instructions have non-empty mnemonics.
    #[test]
    fn decoded_has_mnemonic(bytes in prop::collection::vec(any::<u8>(), 1..32)) {
        if let Ok(instr) = Decoder::new(64, &bytes).decode() {
            prop_assert!(!instr.mnemonic().is_empty());
        }
    }

    /// Iterating a block covers every byte exactly once: each success advances
    /// by the instruction length, each failure by a single byte.
    #[test]
    fn block_iteration_covers_all_bytes(bytes in prop::collection::vec(any::<u8>(), 16..128)) {
        let mut decoder = Decoder::new(64, &bytes);
        let mut expected = 0usize;
        while let Some(result) = decoder.next() {
            match result {
                Ok(instr) => {
                    prop_assert!(instr.len() > 0);
                    expected += instr.len();
                }
                Err(_) => expected += 1,
            }
            prop_assert_eq!(decoder.position(), expected, "gap or overlap in block walk");
        }
        prop_assert_eq!(decoder.position(), bytes.len());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// REX-prefixed bytes never crash the decoder.
    #[test]
    fn rex_prefix_handling(
        rex in 0x40u8..=0x4F,
        opcode in any::<u8>(),
        modrm in any::<u8>(),
        extra in prop::collection::vec(any::<u8>(), 0..8)
    ) {
        let mut bytes = vec![rex, opcode, modrm];
        bytes.extend_from_slice(&extra);
        let _ = Decoder::new(64, &bytes).decode();
    }

    /// 2- and 3-byte VEX payloads never crash the decoder, in any mode.
    #[test]
    fn vex_prefix_handling(
        two_byte in prop::bool::ANY,
        b1 in any::<u8>(),
        b2 in any::<u8>(),
        opcode in any::<u8>(),
        tail in prop::collection::vec(any::<u8>(), 0..8),
        mode in prop::sample::select(vec![16u32, 32, 64])
    ) {
        let mut bytes = if two_byte {
            vec![0xC5, b1, opcode]
        } else {
            vec![0xC4, b1, b2, opcode]
        };
        bytes.extend_from_slice(&tail);
        let _ = Decoder::new(mode, &bytes).decode();
    }

    /// EVEX payloads never crash the decoder.
    #[test]
    fn evex_prefix_handling(
        p0 in any::<u8>(),
        p1 in any::<u8>(),
        p2 in any::<u8>(),
        opcode in any::<u8>(),
        tail in prop::collection::vec(any::<u8>(), 0..8)
    ) {
        let mut bytes = vec![0x62, p0, p1, p2, opcode];
        bytes.extend_from_slice(&tail);
        let _ = Decoder::new(64, &bytes).decode();
    }

    /// The 0F, 0F 38, 0F 3A and 0F 0F escapes never crash the decoder.
    #[test]
    fn escape_sequences(
        escape in 0u8..4,
        opcode in any::<u8>(),
        modrm in any::<u8>(),
        extra in any::<u8>()
    ) {
        let bytes = match escape {
            0 => vec![0x0F, opcode, modrm, extra],
            1 => vec![0x0F, 0x38, opcode, modrm, extra],
            2 => vec![0x0F, 0x3A, opcode, modrm, extra],
            _ => vec![0x0F, 0x0F, modrm, opcode, extra],
        };
        let _ = Decoder::new(64, &bytes).decode();
    }

    /// Long prefix runs either decode within 15 bytes or report a length
    /// error; they never read past the ceiling.
    #[test]
    fn prefix_runs(
        prefix in prop::sample::select(vec![0x66u8, 0x67, 0xF0, 0xF2, 0xF3, 0x2E, 0x3E]),
        count in 1usize..20,
        opcode in any::<u8>(),
        modrm in any::<u8>()
    ) {
        let mut bytes = vec![prefix; count];
        bytes.push(opcode);
        bytes.push(modrm);
        if let Ok(instr) = Decoder::new(32, &bytes).decode() {
            prop_assert!(instr.len() <= MAX_INSTRUCTION_LEN);
        }
    }
}
