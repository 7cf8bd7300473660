//! Three-byte (0F 38) opcode map. Sparse; almost everything here carries a
//! 66 mandatory prefix, with movbe/crc32 at F0/F1 as the NP/F2 exceptions.

use dasm_core::{Code as C, MemorySize as MS};

use crate::table::*;
use crate::table::{Handler as H, InstrDesc as D, OpSpec::*};

// 66-only row: xmm, xmm/m128 (or a narrower memory form for pmovsx/pmovzx).
// The slot array lives in a local const so the borrow is promotable wherever
// the macro expands.
macro_rules! p66 {
    ($code:ident) => {
        p66!($code, MS::Xmmword)
    };
    ($code:ident, $mem:expr) => {{
        const SLOTS: [H; 4] = [
            H::Invalid,
            H::Op(D::new(C::$code, V_W).vl(128).mem($mem)),
            H::Invalid,
            H::Invalid,
        ];
        H::Prefix(&SLOTS)
    }};
}

/// The 0F 38 opcode map.
pub(crate) static MAP_0F38: [H; 256] = {
    let mut t = [H::Invalid; 256];
    const PSHUFB: [H; 4] = [
        H::Op(D::new(C::Pshufb_mm_mmm64, P_Q).mem(MS::Qword)),
        H::Op(D::new(C::Pshufb_xmm_xmmm128, V_W).vl(128).mem(MS::Xmmword)),
        H::Invalid,
        H::Invalid,
    ];
    t[0x00] = H::Prefix(&PSHUFB);
    t[0x17] = p66!(Ptest_xmm_xmmm128);
    t[0x1C] = p66!(Pabsb_xmm_xmmm128);
    t[0x1D] = p66!(Pabsw_xmm_xmmm128);
    t[0x1E] = p66!(Pabsd_xmm_xmmm128);
    t[0x20] = p66!(Pmovsxbw_xmm_xmmm64, MS::Qword);
    t[0x21] = p66!(Pmovsxbd_xmm_xmmm32, MS::Dword);
    t[0x23] = p66!(Pmovsxwd_xmm_xmmm64, MS::Qword);
    t[0x25] = p66!(Pmovsxdq_xmm_xmmm64, MS::Qword);
    t[0x29] = p66!(Pcmpeqq_xmm_xmmm128);
    t[0x2B] = p66!(Packusdw_xmm_xmmm128);
    t[0x30] = p66!(Pmovzxbw_xmm_xmmm64, MS::Qword);
    t[0x31] = p66!(Pmovzxbd_xmm_xmmm32, MS::Dword);
    t[0x33] = p66!(Pmovzxwd_xmm_xmmm64, MS::Qword);
    t[0x35] = p66!(Pmovzxdq_xmm_xmmm64, MS::Qword);
    t[0x37] = p66!(Pcmpgtq_xmm_xmmm128);
    t[0x38] = p66!(Pminsb_xmm_xmmm128);
    t[0x39] = p66!(Pminsd_xmm_xmmm128);
    t[0x3C] = p66!(Pmaxsb_xmm_xmmm128);
    t[0x3D] = p66!(Pmaxsd_xmm_xmmm128);
    t[0x40] = p66!(Pmulld_xmm_xmmm128);
    t[0x41] = p66!(Phminposuw_xmm_xmmm128);
    t[0xDB] = p66!(Aesimc_xmm_xmmm128);
    t[0xDC] = p66!(Aesenc_xmm_xmmm128);
    t[0xDD] = p66!(Aesenclast_xmm_xmmm128);
    t[0xDE] = p66!(Aesdec_xmm_xmmm128);
    t[0xDF] = p66!(Aesdeclast_xmm_xmmm128);
    // crc32 keeps its F2 prefix even when 66 also selects the 16-bit form,
    // which is why the F2 slot is still size-split.
    const MOVBE_LOAD: [H; 4] = [
        osz3(
            D::new(C::Movbe_r16_m16, GV_M).mem(MS::Word),
            D::new(C::Movbe_r32_m32, GV_M).mem(MS::Dword),
            D::new(C::Movbe_r64_m64, GV_M).mem(MS::Qword),
        ),
        osz3(
            D::new(C::Movbe_r16_m16, GV_M).mem(MS::Word),
            D::new(C::Movbe_r32_m32, GV_M).mem(MS::Dword),
            D::new(C::Movbe_r64_m64, GV_M).mem(MS::Qword),
        ),
        H::Invalid,
        H::OpSize([
            D::new(C::Crc32_r32_rm8, &[Gd, Eb]).mem(MS::Byte),
            D::new(C::Crc32_r32_rm8, &[Gd, Eb]).mem(MS::Byte),
            D::new(C::Crc32_r64_rm8, &[Gq, Eb]).mem(MS::Byte),
        ]),
    ];
    t[0xF0] = H::Prefix(&MOVBE_LOAD);
    const MOVBE_STORE: [H; 4] = [
        osz3(
            D::new(C::Movbe_m16_r16, &[M, Gv]).mem(MS::Word),
            D::new(C::Movbe_m32_r32, &[M, Gv]).mem(MS::Dword),
            D::new(C::Movbe_m64_r64, &[M, Gv]).mem(MS::Qword),
        ),
        osz3(
            D::new(C::Movbe_m16_r16, &[M, Gv]).mem(MS::Word),
            D::new(C::Movbe_m32_r32, &[M, Gv]).mem(MS::Dword),
            D::new(C::Movbe_m64_r64, &[M, Gv]).mem(MS::Qword),
        ),
        H::Invalid,
        H::OpSize([
            D::new(C::Crc32_r32_rm16, &[Gd, Ew]).mem(MS::Word),
            D::new(C::Crc32_r32_rm32, &[Gd, Ed]).mem(MS::Dword),
            D::new(C::Crc32_r64_rm64, &[Gq, Eq]).mem(MS::Qword),
        ]),
    ];
    t[0xF1] = H::Prefix(&MOVBE_STORE);
    t
};
