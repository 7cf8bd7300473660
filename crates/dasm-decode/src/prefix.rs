//! Prefix byte parsing.
//!
//! The accumulation loop lives in the decoder; this module only knows how to
//! pull the bit fields out of the individual prefix encodings.

use dasm_core::Register;

/// Legacy prefixes accumulated in front of an opcode. Conflicting prefixes
/// of the same class follow "last one wins".
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Prefixes {
    /// LOCK prefix (0xF0)
    pub lock: bool,
    /// REPNE/REPNZ prefix (0xF2)
    pub repne: bool,
    /// REP/REPE/REPZ prefix (0xF3)
    pub rep: bool,
    /// Segment override, `Register::None` when absent.
    pub segment: Register,
    /// Operand size override (0x66)
    pub operand_size: bool,
    /// Address size override (0x67)
    pub address_size: bool,
    /// REX prefix; only meaningful in 64-bit mode, and only when it is the
    /// byte immediately before the opcode.
    pub rex: Option<Rex>,
}

impl Prefixes {
    /// Returns true if any legacy prefix that may not precede a VEX/EVEX/XOP
    /// escape is present.
    pub(crate) fn blocks_vector_escape(&self) -> bool {
        self.lock || self.rep || self.repne || self.operand_size || self.rex.is_some()
    }
}

/// REX prefix fields.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Rex {
    /// REX.W - 64-bit operand size
    pub w: bool,
    /// REX.R - extends ModR/M reg field
    pub r: bool,
    /// REX.X - extends SIB index field
    pub x: bool,
    /// REX.B - extends ModR/M r/m, SIB base, or opcode reg
    pub b: bool,
}

impl Rex {
    /// Parse a REX byte (0x40..=0x4F).
    pub(crate) fn from_byte(byte: u8) -> Self {
        Self {
            w: byte & 0x08 != 0,
            r: byte & 0x04 != 0,
            x: byte & 0x02 != 0,
            b: byte & 0x01 != 0,
        }
    }
}

/// Fields shared by the VEX, EVEX and XOP payloads, widened to the EVEX
/// ranges so the operand assembler can treat the three alike.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct VectorPrefix {
    /// Extends ModR/M reg (R, and EVEX R' as bit 4).
    pub r: u8,
    /// Extends SIB index.
    pub x: bool,
    /// Extends ModR/M r/m / SIB base (EVEX gives it 2 bits via X).
    pub b: bool,
    /// W bit.
    pub w: bool,
    /// Non-destructive source register (up to 5 bits with EVEX V').
    pub vvvv: u8,
    /// Vector length selector: 0 = 128, 1 = 256, 2 = 512.
    pub ll: u8,
    /// Implied mandatory prefix (00=none, 01=66, 10=F3, 11=F2).
    pub pp: u8,
    /// Opcode map (VEX mmmmm: 1=0F, 2=0F38, 3=0F3A; XOP: 8/9/10; EVEX mm).
    pub map: u8,
    /// EVEX only: opmask register number (aaa).
    pub aaa: u8,
    /// EVEX only: zeroing-masking (z).
    pub z: bool,
    /// EVEX only: broadcast / rounding (b).
    pub bcst: bool,
    /// Set when the payload came from an EVEX escape; the wide register
    /// fields (R', V', X-as-rm-bit-4) only exist there.
    pub evex: bool,
}

impl VectorPrefix {
    /// Parse a 2-byte VEX prefix payload (0xC5 xx).
    pub(crate) fn from_vex2(p0: u8) -> Self {
        // C5 RvvvvLpp, R and vvvv inverted.
        Self {
            r: ((!p0 >> 7) & 1),
            w: false,
            vvvv: (!p0 >> 3) & 0x0F,
            ll: (p0 >> 2) & 1,
            pp: p0 & 3,
            map: 1,
            ..Self::default()
        }
    }

    /// Parse a 3-byte VEX prefix payload (0xC4 xx xx). Also used for XOP,
    /// whose payload has the same layout with a different map space.
    pub(crate) fn from_vex3(p0: u8, p1: u8) -> Self {
        // C4 RXBmmmmm WvvvvLpp; R/X/B/vvvv inverted.
        Self {
            r: (!p0 >> 7) & 1,
            x: p0 & 0x40 == 0,
            b: p0 & 0x20 == 0,
            w: p1 & 0x80 != 0,
            vvvv: (!p1 >> 3) & 0x0F,
            ll: (p1 >> 2) & 1,
            pp: p1 & 3,
            map: p0 & 0x1F,
            ..Self::default()
        }
    }

    /// Parse an EVEX payload (0x62 P0 P1 P2). Returns `None` when a reserved
    /// bit has the wrong value (P0 bits 3:2 must be 0, P1 bit 2 must be 1).
    pub(crate) fn from_evex(p0: u8, p1: u8, p2: u8) -> Option<Self> {
        if p0 & 0x0C != 0 || p1 & 0x04 == 0 {
            return None;
        }
        let r = ((!p0 >> 7) & 1) | (((!p0 >> 4) & 1) << 1); // R, R'
        let vvvv = ((!p1 >> 3) & 0x0F) | (((!p2 >> 3) & 1) << 4); // vvvv, V'
        Some(Self {
            r,
            x: p0 & 0x40 == 0,
            b: p0 & 0x20 == 0,
            w: p1 & 0x80 != 0,
            vvvv,
            ll: (p2 >> 5) & 3,
            pp: p1 & 3,
            map: p0 & 3,
            aaa: p2 & 7,
            z: p2 & 0x80 != 0,
            bcst: p2 & 0x10 != 0,
            evex: true,
        })
    }

    /// Extended reg field value for ModR/M.reg (adds R/R').
    pub(crate) fn reg_extend(&self) -> u32 {
        (self.r as u32) << 3
    }

    /// Vector length in bits, or `None` for the reserved L'L=3 encoding.
    pub(crate) fn vector_len(&self) -> Option<u16> {
        match self.ll {
            0 => Some(128),
            1 => Some(256),
            2 => Some(512),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vex2_fields() {
        // C5 F8: R=1(inv->0 ext), vvvv=1111(inv->0), L=0, pp=00
        let v = VectorPrefix::from_vex2(0xF8);
        assert_eq!(v.r, 0);
        assert_eq!(v.vvvv, 0);
        assert_eq!(v.ll, 0);
        assert_eq!(v.pp, 0);
        assert_eq!(v.map, 1);
    }

    #[test]
    fn vex3_fields() {
        // C4 E2 69: map=2, W=0, vvvv=!0b1101=2, pp=01
        let v = VectorPrefix::from_vex3(0xE2, 0x69);
        assert_eq!(v.map, 2);
        assert!(!v.w);
        assert_eq!(v.vvvv, 2);
        assert_eq!(v.pp, 1);
    }

    #[test]
    fn evex_reserved_bits_rejected() {
        // P0 bit 2 set
        assert!(VectorPrefix::from_evex(0xF5, 0x7D, 0x48).is_none());
        // P1 bit 2 clear
        assert!(VectorPrefix::from_evex(0xF1, 0x79, 0x48).is_none());
        // Well-formed
        assert!(VectorPrefix::from_evex(0xF1, 0x7D, 0x48).is_some());
    }

    #[test]
    fn evex_wide_fields() {
        let v = VectorPrefix::from_evex(0xF1, 0x7D, 0x48).unwrap();
        assert_eq!(v.ll, 2);
        assert_eq!(v.pp, 1);
        assert_eq!(v.map, 1);
        assert!(!v.z);
    }
}
