//! EVEX opcode maps (mmm = 1, 2, 3).
//!
//! Every row nests prefix, W and L'L selectors; the descriptor flags say
//! which EVEX.b meaning applies (broadcast element width for memory forms,
//! {er}/{sae} for register forms) and whether an opmask is accepted.

use dasm_core::{Code as C, MemorySize as MS};

use crate::table::*;
use crate::table::{Handler as H, InstrDesc as D, OpSpec::*};

macro_rules! pfx {
    ($np:expr, $p66:expr, $f3:expr, $f2:expr) => {{
        const S: [H; 4] = [$np, $p66, $f3, $f2];
        H::Prefix(&S)
    }};
}

macro_rules! vw {
    ($w0:expr, $w1:expr) => {{
        const W2: [H; 2] = [$w0, $w1];
        H::VexW(&W2)
    }};
}

// L'L triple for full-width loads/stores and moves (no broadcast).
macro_rules! el3 {
    ($c128:ident, $c256:ident, $c512:ident, $ops:expr) => {{
        const L: [H; 3] = [
            H::Op(D::new(C::$c128, $ops).vl(128).mem(MS::Xmmword).flag(F_MASK)),
            H::Op(D::new(C::$c256, $ops).vl(256).mem(MS::Ymmword).flag(F_MASK)),
            H::Op(D::new(C::$c512, $ops).vl(512).mem(MS::Zmmword).flag(F_MASK)),
        ];
        H::EvexL(&L)
    }};
}

// L'L triple for broadcastable arithmetic; the zmm form may also take the
// extra flag ({er} or {sae}).
macro_rules! el3b {
    ($c128:ident, $c256:ident, $c512:ident, $ops:expr, $bcst:expr, $zflag:expr) => {{
        const L: [H; 3] = [
            H::Op(D::new(C::$c128, $ops).vl(128).mem(MS::Xmmword).flag(F_MASK | $bcst)),
            H::Op(D::new(C::$c256, $ops).vl(256).mem(MS::Ymmword).flag(F_MASK | $bcst)),
            H::Op(D::new(C::$c512, $ops).vl(512).mem(MS::Zmmword).flag(F_MASK | $bcst | $zflag)),
        ];
        H::EvexL(&L)
    }};
}

/// Scalar form, L'L ignored.
const fn esc(code: C, ops: &'static [OpSpec], mem: MS, flags: u16) -> H {
    H::Op(D::new(code, ops).vl(128).mem(mem).flag(F_MASK | flags))
}

/// EVEX map 1.
pub(crate) static EVEX_MAP1: [H; 256] = {
    let mut t = [H::Invalid; 256];
    t[0x10] = pfx!(
        vw!(el3!(EVEX_Vmovups_xmm_xmmm128, EVEX_Vmovups_ymm_ymmm256, EVEX_Vmovups_zmm_zmmm512, V_W), H::Invalid),
        vw!(H::Invalid, el3!(EVEX_Vmovupd_xmm_xmmm128, EVEX_Vmovupd_ymm_ymmm256, EVEX_Vmovupd_zmm_zmmm512, V_W)),
        H::Invalid,
        H::Invalid
    );
    t[0x11] = pfx!(
        vw!(el3!(EVEX_Vmovups_xmmm128_xmm, EVEX_Vmovups_ymmm256_ymm, EVEX_Vmovups_zmmm512_zmm, W_V), H::Invalid),
        vw!(H::Invalid, el3!(EVEX_Vmovupd_xmmm128_xmm, EVEX_Vmovupd_ymmm256_ymm, EVEX_Vmovupd_zmmm512_zmm, W_V)),
        H::Invalid,
        H::Invalid
    );
    t[0x58] = pfx!(
        vw!(
            el3b!(EVEX_Vaddps_xmm_xmm_xmmm128b32, EVEX_Vaddps_ymm_ymm_ymmm256b32, EVEX_Vaddps_zmm_zmm_zmmm512b32_er, V_H_W, F_BCST32, F_ER),
            H::Invalid
        ),
        vw!(
            H::Invalid,
            el3b!(EVEX_Vaddpd_xmm_xmm_xmmm128b64, EVEX_Vaddpd_ymm_ymm_ymmm256b64, EVEX_Vaddpd_zmm_zmm_zmmm512b64_er, V_H_W, F_BCST64, F_ER)
        ),
        vw!(esc(C::EVEX_Vaddss_xmm_xmm_xmmm32_er, V_H_W, MS::Dword, F_ER), H::Invalid),
        vw!(H::Invalid, esc(C::EVEX_Vaddsd_xmm_xmm_xmmm64_er, V_H_W, MS::Qword, F_ER))
    );
    t[0x59] = pfx!(
        vw!(
            el3b!(EVEX_Vmulps_xmm_xmm_xmmm128b32, EVEX_Vmulps_ymm_ymm_ymmm256b32, EVEX_Vmulps_zmm_zmm_zmmm512b32_er, V_H_W, F_BCST32, F_ER),
            H::Invalid
        ),
        vw!(
            H::Invalid,
            el3b!(EVEX_Vmulpd_xmm_xmm_xmmm128b64, EVEX_Vmulpd_ymm_ymm_ymmm256b64, EVEX_Vmulpd_zmm_zmm_zmmm512b64_er, V_H_W, F_BCST64, F_ER)
        ),
        H::Invalid,
        H::Invalid
    );
    t[0x5C] = pfx!(
        vw!(
            el3b!(EVEX_Vsubps_xmm_xmm_xmmm128b32, EVEX_Vsubps_ymm_ymm_ymmm256b32, EVEX_Vsubps_zmm_zmm_zmmm512b32_er, V_H_W, F_BCST32, F_ER),
            H::Invalid
        ),
        vw!(
            H::Invalid,
            el3b!(EVEX_Vsubpd_xmm_xmm_xmmm128b64, EVEX_Vsubpd_ymm_ymm_ymmm256b64, EVEX_Vsubpd_zmm_zmm_zmmm512b64_er, V_H_W, F_BCST64, F_ER)
        ),
        H::Invalid,
        H::Invalid
    );
    t[0x6F] = pfx!(
        H::Invalid,
        H::Invalid,
        vw!(
            el3!(EVEX_Vmovdqu32_xmm_xmmm128, EVEX_Vmovdqu32_ymm_ymmm256, EVEX_Vmovdqu32_zmm_zmmm512, V_W),
            el3!(EVEX_Vmovdqu64_xmm_xmmm128, EVEX_Vmovdqu64_ymm_ymmm256, EVEX_Vmovdqu64_zmm_zmmm512, V_W)
        ),
        H::Invalid
    );
    t[0x7F] = pfx!(
        H::Invalid,
        H::Invalid,
        vw!(
            el3!(EVEX_Vmovdqu32_xmmm128_xmm, EVEX_Vmovdqu32_ymmm256_ymm, EVEX_Vmovdqu32_zmmm512_zmm, W_V),
            el3!(EVEX_Vmovdqu64_xmmm128_xmm, EVEX_Vmovdqu64_ymmm256_ymm, EVEX_Vmovdqu64_zmmm512_zmm, W_V)
        ),
        H::Invalid
    );
    const K_H_W_IB: &[OpSpec] = &[K, H, W, Ib];
    t[0xC2] = pfx!(
        vw!(
            el3b!(EVEX_Vcmpps_kr_xmm_xmmm128b32_imm8, EVEX_Vcmpps_kr_ymm_ymmm256b32_imm8, EVEX_Vcmpps_kr_zmm_zmmm512b32_imm8_sae, K_H_W_IB, F_BCST32, F_SAE),
            H::Invalid
        ),
        vw!(
            H::Invalid,
            el3b!(EVEX_Vcmppd_kr_xmm_xmmm128b64_imm8, EVEX_Vcmppd_kr_ymm_ymmm256b64_imm8, EVEX_Vcmppd_kr_zmm_zmmm512b64_imm8_sae, K_H_W_IB, F_BCST64, F_SAE)
        ),
        vw!(esc(C::EVEX_Vcmpss_kr_xmm_xmmm32_imm8_sae, K_H_W_IB, MS::Dword, F_SAE), H::Invalid),
        vw!(H::Invalid, esc(C::EVEX_Vcmpsd_kr_xmm_xmmm64_imm8_sae, K_H_W_IB, MS::Qword, F_SAE))
    );
    t[0xEF] = pfx!(
        H::Invalid,
        vw!(
            el3b!(EVEX_Vpxord_xmm_xmm_xmmm128b32, EVEX_Vpxord_ymm_ymm_ymmm256b32, EVEX_Vpxord_zmm_zmm_zmmm512b32, V_H_W, F_BCST32, 0),
            el3b!(EVEX_Vpxorq_xmm_xmm_xmmm128b64, EVEX_Vpxorq_ymm_ymm_ymmm256b64, EVEX_Vpxorq_zmm_zmm_zmmm512b64, V_H_W, F_BCST64, 0)
        ),
        H::Invalid,
        H::Invalid
    );
    t
};

/// EVEX map 2.
pub(crate) static EVEX_MAP2: [H; 256] = {
    let mut t = [H::Invalid; 256];
    // vpbroadcastd reads an xmm/m32 source at every destination width.
    const BCASTD: [H; 3] = [
        H::Op(D::new(C::EVEX_Vpbroadcastd_xmm_xmmm32, &[V, Wx]).vl(128).mem(MS::Dword).flag(F_MASK)),
        H::Op(D::new(C::EVEX_Vpbroadcastd_ymm_xmmm32, &[V, Wx]).vl(256).mem(MS::Dword).flag(F_MASK)),
        H::Op(D::new(C::EVEX_Vpbroadcastd_zmm_xmmm32, &[V, Wx]).vl(512).mem(MS::Dword).flag(F_MASK)),
    ];
    t[0x58] = pfx!(
        H::Invalid,
        vw!(H::EvexL(&BCASTD), H::Invalid),
        H::Invalid,
        H::Invalid
    );
    t
};

/// EVEX map 3.
pub(crate) static EVEX_MAP3: [H; 256] = {
    let mut t = [H::Invalid; 256];
    t[0x25] = pfx!(
        H::Invalid,
        vw!(
            el3b!(EVEX_Vpternlogd_xmm_xmm_xmmm128b32_imm8, EVEX_Vpternlogd_ymm_ymm_ymmm256b32_imm8, EVEX_Vpternlogd_zmm_zmm_zmmm512b32_imm8, V_H_W_IB, F_BCST32, 0),
            H::Invalid
        ),
        H::Invalid,
        H::Invalid
    );
    t
};
