//! Shared lookup tables.

use std::sync::OnceLock;

use crate::register::{Register, REGISTER_LIST};

pub(crate) const REGISTER_COUNT: usize = REGISTER_LIST.len();

/// Register from its enum discriminant. Callers stay within a register bank,
/// so `i` is always a valid discriminant.
pub(crate) fn register_from_index(i: u16) -> Register {
    REGISTER_LIST[i as usize]
}

fn name_table(upper: bool) -> &'static [String] {
    static LOWER: OnceLock<Box<[String]>> = OnceLock::new();
    static UPPER: OnceLock<Box<[String]>> = OnceLock::new();
    let cell = if upper { &UPPER } else { &LOWER };
    cell.get_or_init(|| {
        (0..REGISTER_COUNT as u16)
            .map(|i| {
                // Variant identifiers are the upper-case spellings.
                let s = format!("{:?}", register_from_index(i));
                if upper {
                    s
                } else {
                    s.to_ascii_lowercase()
                }
            })
            .collect()
    })
}

/// Spelling of `reg` in the requested case. `Register::None` renders empty.
pub fn register_name(reg: Register, upper: bool) -> &'static str {
    if reg == Register::None {
        return "";
    }
    &name_table(upper)[reg as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_discriminants() {
        assert_eq!(register_from_index(Register::RAX as u16), Register::RAX);
        assert_eq!(register_from_index(Register::ZMM31 as u16), Register::ZMM31);
        assert_eq!(register_from_index(0), Register::None);
    }

    #[test]
    fn list_covers_every_discriminant() {
        assert_eq!(REGISTER_COUNT, Register::DR7 as usize + 1);
        for i in 0..REGISTER_COUNT as u16 {
            assert_eq!(register_from_index(i) as u16, i);
        }
    }

    #[test]
    fn both_cases() {
        assert_eq!(register_name(Register::R8D, false), "r8d");
        assert_eq!(register_name(Register::R8D, true), "R8D");
        assert_eq!(register_name(Register::None, false), "");
    }
}
