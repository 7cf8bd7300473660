//! XOP opcode maps (map 8, 9 and A, selected by the 8F prefix's mmmmm
//! field). XOP encodes no mandatory prefixes; pp must be zero, which the
//! decoder checks before indexing here.

use dasm_core::{Code as C, MemorySize as MS};

use crate::table::*;
use crate::table::{Handler as H, InstrDesc as D, OpSpec::*};

const fn x128(code: C, ops: &'static [OpSpec]) -> H {
    H::Op(D::new(code, ops).vl(128).mem(MS::Xmmword))
}

/// XOP map 8: compare forms with a trailing predicate imm8.
pub(crate) static XOP_MAP8: [H; 256] = {
    let mut t = [H::Invalid; 256];
    t[0xCC] = x128(C::XOP_Vpcomb_xmm_xmm_xmmm128_imm8, V_H_W_IB);
    t[0xCD] = x128(C::XOP_Vpcomw_xmm_xmm_xmmm128_imm8, V_H_W_IB);
    t[0xCE] = x128(C::XOP_Vpcomd_xmm_xmm_xmmm128_imm8, V_H_W_IB);
    t[0xCF] = x128(C::XOP_Vpcomq_xmm_xmm_xmmm128_imm8, V_H_W_IB);
    t
};

/// XOP map 9: arithmetic without immediates.
pub(crate) static XOP_MAP9: [H; 256] = {
    let mut t = [H::Invalid; 256];
    const FRCZPS: [H; 2] = [
        H::Op(D::new(C::XOP_Vfrczps_xmm_xmmm128, V_W).vl(128).mem(MS::Xmmword)),
        H::Op(D::new(C::XOP_Vfrczps_ymm_ymmm256, V_W).vl(256).mem(MS::Ymmword)),
    ];
    const FRCZPD: [H; 2] = [
        H::Op(D::new(C::XOP_Vfrczpd_xmm_xmmm128, V_W).vl(128).mem(MS::Xmmword)),
        H::Op(D::new(C::XOP_Vfrczpd_ymm_ymmm256, V_W).vl(256).mem(MS::Ymmword)),
    ];
    t[0x80] = H::VexL(&FRCZPS);
    t[0x81] = H::VexL(&FRCZPD);
    t[0x90] = x128(C::XOP_Vprotb_xmm_xmmm128_xmm, &[V, W, H]);
    t[0x91] = x128(C::XOP_Vprotw_xmm_xmmm128_xmm, &[V, W, H]);
    t[0x92] = x128(C::XOP_Vprotd_xmm_xmmm128_xmm, &[V, W, H]);
    t[0x93] = x128(C::XOP_Vprotq_xmm_xmmm128_xmm, &[V, W, H]);
    t
};

/// XOP map A: bextr with its fixed imm32.
pub(crate) static XOP_MAPA: [H; 256] = {
    let mut t = [H::Invalid; 256];
    const BEXTR: [H; 2] = [
        H::Op(D::new(C::XOP_Bextr_r32_rm32_imm32, &[Gd, Ed, Iz]).mem(MS::Dword)),
        H::Op(D::new(C::XOP_Bextr_r64_rm64_imm32, &[Gq, Eq, Iz]).mem(MS::Qword)),
    ];
    t[0x10] = H::VexW(&BEXTR);
    t
};
