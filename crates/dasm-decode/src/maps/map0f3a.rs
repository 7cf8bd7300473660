//! Three-byte (0F 3A) opcode map. Every instruction here takes a trailing
//! imm8; palignr is the only row with an NP (MMX) form.

use dasm_core::{Code as C, MemorySize as MS};

use crate::table::*;
use crate::table::{Handler as H, InstrDesc as D, OpSpec::*};

macro_rules! p66 {
    ($code:ident) => {
        p66!($code, V_W_IB, MS::Xmmword)
    };
    ($code:ident, $ops:expr, $mem:expr) => {{
        const SLOTS: [H; 4] = [
            H::Invalid,
            H::Op(D::new(C::$code, $ops).vl(128).mem($mem)),
            H::Invalid,
            H::Invalid,
        ];
        H::Prefix(&SLOTS)
    }};
}

// pextrd/pextrq and pinsrd/pinsrq share an opcode and split on REX.W.
macro_rules! p66_w {
    ($d32:expr, $d64:expr) => {{
        const SLOTS: [H; 4] = [
            H::Invalid,
            H::OpSize([$d32, $d32, $d64]),
            H::Invalid,
            H::Invalid,
        ];
        H::Prefix(&SLOTS)
    }};
}

/// The 0F 3A opcode map.
pub(crate) static MAP_0F3A: [H; 256] = {
    let mut t = [H::Invalid; 256];
    t[0x08] = p66!(Roundps_xmm_xmmm128_imm8);
    t[0x09] = p66!(Roundpd_xmm_xmmm128_imm8);
    t[0x0A] = p66!(Roundss_xmm_xmmm32_imm8, V_W_IB, MS::Dword);
    t[0x0B] = p66!(Roundsd_xmm_xmmm64_imm8, V_W_IB, MS::Qword);
    t[0x0C] = p66!(Blendps_xmm_xmmm128_imm8);
    t[0x0D] = p66!(Blendpd_xmm_xmmm128_imm8);
    t[0x0E] = p66!(Pblendw_xmm_xmmm128_imm8);
    const PALIGNR: [H; 4] = [
        H::Op(D::new(C::Palignr_mm_mmm64_imm8, P_Q_IB).mem(MS::Qword)),
        H::Op(D::new(C::Palignr_xmm_xmmm128_imm8, V_W_IB).vl(128).mem(MS::Xmmword)),
        H::Invalid,
        H::Invalid,
    ];
    t[0x0F] = H::Prefix(&PALIGNR);
    t[0x14] = p66!(Pextrb_r32m8_xmm_imm8, &[Ed, V, Ib], MS::Byte);
    t[0x15] = p66!(Pextrw_r32m16_xmm_imm8, &[Ed, V, Ib], MS::Word);
    t[0x16] = p66_w!(
        D::new(C::Pextrd_rm32_xmm_imm8, &[Ed, V, Ib]).vl(128).mem(MS::Dword),
        D::new(C::Pextrq_rm64_xmm_imm8, &[Eq, V, Ib]).vl(128).mem(MS::Qword)
    );
    t[0x20] = p66!(Pinsrb_xmm_r32m8_imm8, &[V, Ed, Ib], MS::Byte);
    t[0x22] = p66_w!(
        D::new(C::Pinsrd_xmm_rm32_imm8, &[V, Ed, Ib]).vl(128).mem(MS::Dword),
        D::new(C::Pinsrq_xmm_rm64_imm8, &[V, Eq, Ib]).vl(128).mem(MS::Qword)
    );
    t[0x40] = p66!(Dpps_xmm_xmmm128_imm8);
    t[0x41] = p66!(Dppd_xmm_xmmm128_imm8);
    t[0x42] = p66!(Mpsadbw_xmm_xmmm128_imm8);
    t[0x44] = p66!(Pclmulqdq_xmm_xmmm128_imm8);
    t[0x63] = p66!(Pcmpistri_xmm_xmmm128_imm8);
    t[0xDF] = p66!(Aeskeygenassist_xmm_xmmm128_imm8);
    t
};
