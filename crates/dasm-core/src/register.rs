//! x86 register set.
//!
//! Registers are a flat enum so that the formatters can spell them through
//! generated name tables instead of reconstructing names at run time.

/// Declares [`Register`] together with a companion table in the same
/// discriminant order, which backs the index-to-register lookups.
macro_rules! registers {
    ($($reg:ident),* $(,)?) => {
        /// An x86 register, or [`Register::None`] for an absent register slot.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[allow(non_camel_case_types)]
        #[repr(u16)]
        pub enum Register {
            #[default]
            None = 0,
            $($reg,)*
        }

        /// Every register in discriminant order; `REGISTER_LIST[r as usize]`
        /// is `r`.
        pub(crate) const REGISTER_LIST: &[Register] = &[
            Register::None,
            $(Register::$reg,)*
        ];
    };
}

registers! {
    // 8-bit GPRs. The REX-only low-byte forms (SPL..DIL) follow AH..BH so
    // that `gpr8(n, rex)` can pick between the two encodings.
    AL, CL, DL, BL, AH, CH, DH, BH,
    SPL, BPL, SIL, DIL,
    R8B, R9B, R10B, R11B, R12B, R13B, R14B, R15B,

    // 16-bit GPRs.
    AX, CX, DX, BX, SP, BP, SI, DI,
    R8W, R9W, R10W, R11W, R12W, R13W, R14W, R15W,

    // 32-bit GPRs.
    EAX, ECX, EDX, EBX, ESP, EBP, ESI, EDI,
    R8D, R9D, R10D, R11D, R12D, R13D, R14D, R15D,

    // 64-bit GPRs.
    RAX, RCX, RDX, RBX, RSP, RBP, RSI, RDI,
    R8, R9, R10, R11, R12, R13, R14, R15,

    // Instruction pointer.
    IP, EIP, RIP,

    // Segment registers, in encoding order.
    ES, CS, SS, DS, FS, GS,

    // x87 stack registers.
    ST0, ST1, ST2, ST3, ST4, ST5, ST6, ST7,

    // MMX registers.
    MM0, MM1, MM2, MM3, MM4, MM5, MM6, MM7,

    // XMM registers (EVEX can reach 16..31).
    XMM0, XMM1, XMM2, XMM3, XMM4, XMM5, XMM6, XMM7,
    XMM8, XMM9, XMM10, XMM11, XMM12, XMM13, XMM14, XMM15,
    XMM16, XMM17, XMM18, XMM19, XMM20, XMM21, XMM22, XMM23,
    XMM24, XMM25, XMM26, XMM27, XMM28, XMM29, XMM30, XMM31,

    // YMM registers.
    YMM0, YMM1, YMM2, YMM3, YMM4, YMM5, YMM6, YMM7,
    YMM8, YMM9, YMM10, YMM11, YMM12, YMM13, YMM14, YMM15,
    YMM16, YMM17, YMM18, YMM19, YMM20, YMM21, YMM22, YMM23,
    YMM24, YMM25, YMM26, YMM27, YMM28, YMM29, YMM30, YMM31,

    // ZMM registers.
    ZMM0, ZMM1, ZMM2, ZMM3, ZMM4, ZMM5, ZMM6, ZMM7,
    ZMM8, ZMM9, ZMM10, ZMM11, ZMM12, ZMM13, ZMM14, ZMM15,
    ZMM16, ZMM17, ZMM18, ZMM19, ZMM20, ZMM21, ZMM22, ZMM23,
    ZMM24, ZMM25, ZMM26, ZMM27, ZMM28, ZMM29, ZMM30, ZMM31,

    // Opmask registers.
    K0, K1, K2, K3, K4, K5, K6, K7,

    // Control registers.
    CR0, CR1, CR2, CR3, CR4, CR5, CR6, CR7, CR8,

    // Debug registers.
    DR0, DR1, DR2, DR3, DR4, DR5, DR6, DR7,
}

/// Broad register class, mostly used by the formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegisterClass {
    None,
    /// General purpose register of any width.
    General,
    /// Instruction pointer.
    InstructionPointer,
    Segment,
    /// x87 stack register.
    Fpu,
    Mmx,
    Xmm,
    Ymm,
    Zmm,
    Opmask,
    Control,
    Debug,
}

const GPR8: [Register; 20] = [
    Register::AL, Register::CL, Register::DL, Register::BL,
    Register::AH, Register::CH, Register::DH, Register::BH,
    Register::SPL, Register::BPL, Register::SIL, Register::DIL,
    Register::R8B, Register::R9B, Register::R10B, Register::R11B,
    Register::R12B, Register::R13B, Register::R14B, Register::R15B,
];
const GPR16: [Register; 16] = [
    Register::AX, Register::CX, Register::DX, Register::BX,
    Register::SP, Register::BP, Register::SI, Register::DI,
    Register::R8W, Register::R9W, Register::R10W, Register::R11W,
    Register::R12W, Register::R13W, Register::R14W, Register::R15W,
];
const GPR32: [Register; 16] = [
    Register::EAX, Register::ECX, Register::EDX, Register::EBX,
    Register::ESP, Register::EBP, Register::ESI, Register::EDI,
    Register::R8D, Register::R9D, Register::R10D, Register::R11D,
    Register::R12D, Register::R13D, Register::R14D, Register::R15D,
];
const GPR64: [Register; 16] = [
    Register::RAX, Register::RCX, Register::RDX, Register::RBX,
    Register::RSP, Register::RBP, Register::RSI, Register::RDI,
    Register::R8, Register::R9, Register::R10, Register::R11,
    Register::R12, Register::R13, Register::R14, Register::R15,
];
const SEGMENT: [Register; 6] = [
    Register::ES, Register::CS, Register::SS,
    Register::DS, Register::FS, Register::GS,
];

impl Register {
    /// 8-bit GPR from a 4-bit encoding. When `rex` is set, encodings 4..=7
    /// select SPL..DIL instead of AH..BH.
    pub fn gpr8(n: u32, rex: bool) -> Register {
        debug_assert!(n < 16);
        if rex && (4..8).contains(&n) {
            GPR8[n as usize + 4]
        } else if n < 4 {
            GPR8[n as usize]
        } else if n < 8 {
            GPR8[n as usize]
        } else {
            GPR8[n as usize + 4]
        }
    }

    /// 16-bit GPR from a 4-bit encoding.
    pub fn gpr16(n: u32) -> Register {
        GPR16[(n & 0xF) as usize]
    }

    /// 32-bit GPR from a 4-bit encoding.
    pub fn gpr32(n: u32) -> Register {
        GPR32[(n & 0xF) as usize]
    }

    /// 64-bit GPR from a 4-bit encoding.
    pub fn gpr64(n: u32) -> Register {
        GPR64[(n & 0xF) as usize]
    }

    /// GPR of the given width in bits.
    pub fn gpr(n: u32, size: u32, rex: bool) -> Register {
        match size {
            8 => Register::gpr8(n, rex),
            16 => Register::gpr16(n),
            32 => Register::gpr32(n),
            _ => Register::gpr64(n),
        }
    }

    /// Segment register from a 3-bit encoding, or `None` if reserved.
    pub fn segment(n: u32) -> Register {
        if n < 6 {
            SEGMENT[n as usize]
        } else {
            Register::None
        }
    }

    /// x87 stack register ST(i).
    pub fn st(n: u32) -> Register {
        reg_add(Register::ST0, n & 7)
    }

    /// MMX register from a 3-bit encoding.
    pub fn mm(n: u32) -> Register {
        reg_add(Register::MM0, n & 7)
    }

    /// XMM register from a 5-bit encoding.
    pub fn xmm(n: u32) -> Register {
        reg_add(Register::XMM0, n & 0x1F)
    }

    /// YMM register from a 5-bit encoding.
    pub fn ymm(n: u32) -> Register {
        reg_add(Register::YMM0, n & 0x1F)
    }

    /// ZMM register from a 5-bit encoding.
    pub fn zmm(n: u32) -> Register {
        reg_add(Register::ZMM0, n & 0x1F)
    }

    /// Vector register of the given width in bits (128/256/512).
    pub fn vector(n: u32, size: u32) -> Register {
        match size {
            128 => Register::xmm(n),
            256 => Register::ymm(n),
            _ => Register::zmm(n),
        }
    }

    /// Opmask register from a 3-bit encoding.
    pub fn k(n: u32) -> Register {
        reg_add(Register::K0, n & 7)
    }

    /// Control register, or `None` for an unimplemented one.
    pub fn cr(n: u32) -> Register {
        if n <= 8 {
            reg_add(Register::CR0, n)
        } else {
            Register::None
        }
    }

    /// Debug register, or `None` for an unimplemented one.
    pub fn dr(n: u32) -> Register {
        if n < 8 {
            reg_add(Register::DR0, n)
        } else {
            Register::None
        }
    }

    /// Register class.
    pub fn class(self) -> RegisterClass {
        use Register::*;
        match self {
            None => RegisterClass::None,
            r if (AL as u16..=R15 as u16).contains(&(r as u16)) => RegisterClass::General,
            IP | EIP | RIP => RegisterClass::InstructionPointer,
            ES | CS | SS | DS | FS | GS => RegisterClass::Segment,
            r if (ST0 as u16..=ST7 as u16).contains(&(r as u16)) => RegisterClass::Fpu,
            r if (MM0 as u16..=MM7 as u16).contains(&(r as u16)) => RegisterClass::Mmx,
            r if (XMM0 as u16..=XMM31 as u16).contains(&(r as u16)) => RegisterClass::Xmm,
            r if (YMM0 as u16..=YMM31 as u16).contains(&(r as u16)) => RegisterClass::Ymm,
            r if (ZMM0 as u16..=ZMM31 as u16).contains(&(r as u16)) => RegisterClass::Zmm,
            r if (K0 as u16..=K7 as u16).contains(&(r as u16)) => RegisterClass::Opmask,
            r if (CR0 as u16..=CR8 as u16).contains(&(r as u16)) => RegisterClass::Control,
            _ => RegisterClass::Debug,
        }
    }

    /// Register size in bits, or 0 for `None`.
    pub fn size(self) -> u32 {
        match self.class() {
            RegisterClass::None => 0,
            RegisterClass::General => {
                let n = self as u16;
                if n <= Register::R15B as u16 {
                    8
                } else if n <= Register::R15W as u16 {
                    16
                } else if n <= Register::R15D as u16 {
                    32
                } else {
                    64
                }
            }
            RegisterClass::InstructionPointer => match self {
                Register::IP => 16,
                Register::EIP => 32,
                _ => 64,
            },
            RegisterClass::Segment => 16,
            RegisterClass::Fpu => 80,
            RegisterClass::Mmx => 64,
            RegisterClass::Xmm => 128,
            RegisterClass::Ymm => 256,
            RegisterClass::Zmm => 512,
            RegisterClass::Opmask => 64,
            RegisterClass::Control | RegisterClass::Debug => 64,
        }
    }

    /// True for any general purpose register.
    pub fn is_gpr(self) -> bool {
        self.class() == RegisterClass::General
    }

    /// True for XMM/YMM/ZMM.
    pub fn is_vector(self) -> bool {
        matches!(
            self.class(),
            RegisterClass::Xmm | RegisterClass::Ymm | RegisterClass::Zmm
        )
    }

    /// The register's canonical lower-case name.
    pub fn name(self) -> &'static str {
        crate::tables::register_name(self, false)
    }
}

fn reg_add(base: Register, n: u32) -> Register {
    // All register banks are laid out contiguously in encoding order.
    crate::tables::register_from_index(base as u16 + n as u16)
}

impl std::fmt::Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gpr8_rex_split() {
        assert_eq!(Register::gpr8(4, false), Register::AH);
        assert_eq!(Register::gpr8(4, true), Register::SPL);
        assert_eq!(Register::gpr8(5, true), Register::BPL);
        assert_eq!(Register::gpr8(12, true), Register::R12B);
        assert_eq!(Register::gpr8(12, false), Register::R12B);
    }

    #[test]
    fn sizes() {
        assert_eq!(Register::AL.size(), 8);
        assert_eq!(Register::BP.size(), 16);
        assert_eq!(Register::R10D.size(), 32);
        assert_eq!(Register::RSP.size(), 64);
        assert_eq!(Register::XMM31.size(), 128);
        assert_eq!(Register::ZMM7.size(), 512);
        assert_eq!(Register::None.size(), 0);
    }

    #[test]
    fn classes() {
        assert_eq!(Register::GS.class(), RegisterClass::Segment);
        assert_eq!(Register::ST3.class(), RegisterClass::Fpu);
        assert_eq!(Register::K5.class(), RegisterClass::Opmask);
        assert_eq!(Register::CR4.class(), RegisterClass::Control);
        assert_eq!(Register::DR7.class(), RegisterClass::Debug);
    }

    #[test]
    fn names() {
        assert_eq!(Register::RAX.name(), "rax");
        assert_eq!(Register::R13W.name(), "r13w");
        assert_eq!(Register::YMM20.name(), "ymm20");
        assert_eq!(Register::ST6.name(), "st6");
    }
}
