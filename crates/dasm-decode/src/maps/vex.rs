//! VEX opcode maps (mmmmm = 1, 2, 3).
//!
//! The handler shapes mirror the legacy 0F maps: mandatory prefix first, then
//! VEX.L or VEX.W where a row splits on them. `vvvv` operands appear as `H`
//! (vector) or `Bd`/`Bq` (BMI GPR) specs; the decoder rejects a non-1111
//! `vvvv` on descriptors that carry neither.

use dasm_core::{Code as C, MemorySize as MS};

use crate::table::*;
use crate::table::{Handler as H, InstrDesc as D, OpSpec::*};

// L-split pair with xmm/m128 and ymm/m256 forms.
macro_rules! vl2 {
    ($c128:ident, $c256:ident, $ops:expr) => {{
        const L: [H; 2] = [
            H::Op(D::new(C::$c128, $ops).vl(128).mem(MS::Xmmword)),
            H::Op(D::new(C::$c256, $ops).vl(256).mem(MS::Ymmword)),
        ];
        H::VexL(&L)
    }};
}

// Mandatory-prefix row.
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

macro_rules! mr {
    ($mem:expr, $reg:expr) => {{
        const MEMH: H = $mem;
        const REGH: H = $reg;
        H::ModRm { mem: &MEMH, reg: &REGH }
    }};
}

/// Scalar form, L ignored.
const fn sc(code: C, ops: &'static [OpSpec], mem: MS) -> H {
    H::Op(D::new(code, ops).vl(128).mem(mem))
}

/// VEX map 1 (0F equivalents).
pub(crate) static VEX_MAP1: [H; 256] = {
    let mut t = [H::Invalid; 256];
    t[0x10] = pfx!(
        vl2!(VEX_Vmovups_xmm_xmmm128, VEX_Vmovups_ymm_ymmm256, V_W),
        vl2!(VEX_Vmovupd_xmm_xmmm128, VEX_Vmovupd_ymm_ymmm256, V_W),
        mr!(
            sc(C::VEX_Vmovss_xmm_m32, &[V, M], MS::Dword),
            sc(C::VEX_Vmovss_xmm_xmm_xmm, &[V, H, U], MS::Unknown)
        ),
        mr!(
            sc(C::VEX_Vmovsd_xmm_m64, &[V, M], MS::Qword),
            sc(C::VEX_Vmovsd_xmm_xmm_xmm, &[V, H, U], MS::Unknown)
        )
    );
    t[0x11] = pfx!(
        vl2!(VEX_Vmovups_xmmm128_xmm, VEX_Vmovups_ymmm256_ymm, W_V),
        vl2!(VEX_Vmovupd_xmmm128_xmm, VEX_Vmovupd_ymmm256_ymm, W_V),
        mr!(
            sc(C::VEX_Vmovss_m32_xmm, &[M, V], MS::Dword),
            sc(C::VEX_Vmovss_xmm_xmm_xmm, &[U, H, V], MS::Unknown)
        ),
        mr!(
            sc(C::VEX_Vmovsd_m64_xmm, &[M, V], MS::Qword),
            sc(C::VEX_Vmovsd_xmm_xmm_xmm, &[U, H, V], MS::Unknown)
        )
    );
    t[0x28] = pfx!(
        vl2!(VEX_Vmovaps_xmm_xmmm128, VEX_Vmovaps_ymm_ymmm256, V_W),
        vl2!(VEX_Vmovapd_xmm_xmmm128, VEX_Vmovapd_ymm_ymmm256, V_W),
        H::Invalid,
        H::Invalid
    );
    t[0x29] = pfx!(
        vl2!(VEX_Vmovaps_xmmm128_xmm, VEX_Vmovaps_ymmm256_ymm, W_V),
        vl2!(VEX_Vmovapd_xmmm128_xmm, VEX_Vmovapd_ymmm256_ymm, W_V),
        H::Invalid,
        H::Invalid
    );
    t[0x2E] = pfx!(
        sc(C::VEX_Vucomiss_xmm_xmmm32, V_W, MS::Dword),
        sc(C::VEX_Vucomisd_xmm_xmmm64, V_W, MS::Qword),
        H::Invalid,
        H::Invalid
    );
    t[0x2F] = pfx!(
        sc(C::VEX_Vcomiss_xmm_xmmm32, V_W, MS::Dword),
        sc(C::VEX_Vcomisd_xmm_xmmm64, V_W, MS::Qword),
        H::Invalid,
        H::Invalid
    );
    t[0x50] = pfx!(
        vl2!(VEX_Vmovmskps_r32_xmm, VEX_Vmovmskps_r32_ymm, &[Gd, U]),
        vl2!(VEX_Vmovmskpd_r32_xmm, VEX_Vmovmskpd_r32_ymm, &[Gd, U]),
        H::Invalid,
        H::Invalid
    );
    t[0x51] = pfx!(
        vl2!(VEX_Vsqrtps_xmm_xmmm128, VEX_Vsqrtps_ymm_ymmm256, V_W),
        vl2!(VEX_Vsqrtpd_xmm_xmmm128, VEX_Vsqrtpd_ymm_ymmm256, V_W),
        sc(C::VEX_Vsqrtss_xmm_xmm_xmmm32, V_H_W, MS::Dword),
        sc(C::VEX_Vsqrtsd_xmm_xmm_xmmm64, V_H_W, MS::Qword)
    );
    t[0x54] = pfx!(
        vl2!(VEX_Vandps_xmm_xmm_xmmm128, VEX_Vandps_ymm_ymm_ymmm256, V_H_W),
        vl2!(VEX_Vandpd_xmm_xmm_xmmm128, VEX_Vandpd_ymm_ymm_ymmm256, V_H_W),
        H::Invalid,
        H::Invalid
    );
    t[0x55] = pfx!(
        vl2!(VEX_Vandnps_xmm_xmm_xmmm128, VEX_Vandnps_ymm_ymm_ymmm256, V_H_W),
        vl2!(VEX_Vandnpd_xmm_xmm_xmmm128, VEX_Vandnpd_ymm_ymm_ymmm256, V_H_W),
        H::Invalid,
        H::Invalid
    );
    t[0x56] = pfx!(
        vl2!(VEX_Vorps_xmm_xmm_xmmm128, VEX_Vorps_ymm_ymm_ymmm256, V_H_W),
        vl2!(VEX_Vorpd_xmm_xmm_xmmm128, VEX_Vorpd_ymm_ymm_ymmm256, V_H_W),
        H::Invalid,
        H::Invalid
    );
    t[0x57] = pfx!(
        vl2!(VEX_Vxorps_xmm_xmm_xmmm128, VEX_Vxorps_ymm_ymm_ymmm256, V_H_W),
        vl2!(VEX_Vxorpd_xmm_xmm_xmmm128, VEX_Vxorpd_ymm_ymm_ymmm256, V_H_W),
        H::Invalid,
        H::Invalid
    );
    t[0x58] = pfx!(
        vl2!(VEX_Vaddps_xmm_xmm_xmmm128, VEX_Vaddps_ymm_ymm_ymmm256, V_H_W),
        vl2!(VEX_Vaddpd_xmm_xmm_xmmm128, VEX_Vaddpd_ymm_ymm_ymmm256, V_H_W),
        sc(C::VEX_Vaddss_xmm_xmm_xmmm32, V_H_W, MS::Dword),
        sc(C::VEX_Vaddsd_xmm_xmm_xmmm64, V_H_W, MS::Qword)
    );
    t[0x59] = pfx!(
        vl2!(VEX_Vmulps_xmm_xmm_xmmm128, VEX_Vmulps_ymm_ymm_ymmm256, V_H_W),
        vl2!(VEX_Vmulpd_xmm_xmm_xmmm128, VEX_Vmulpd_ymm_ymm_ymmm256, V_H_W),
        sc(C::VEX_Vmulss_xmm_xmm_xmmm32, V_H_W, MS::Dword),
        sc(C::VEX_Vmulsd_xmm_xmm_xmmm64, V_H_W, MS::Qword)
    );
    t[0x5C] = pfx!(
        vl2!(VEX_Vsubps_xmm_xmm_xmmm128, VEX_Vsubps_ymm_ymm_ymmm256, V_H_W),
        vl2!(VEX_Vsubpd_xmm_xmm_xmmm128, VEX_Vsubpd_ymm_ymm_ymmm256, V_H_W),
        sc(C::VEX_Vsubss_xmm_xmm_xmmm32, V_H_W, MS::Dword),
        sc(C::VEX_Vsubsd_xmm_xmm_xmmm64, V_H_W, MS::Qword)
    );
    t[0x5D] = pfx!(
        vl2!(VEX_Vminps_xmm_xmm_xmmm128, VEX_Vminps_ymm_ymm_ymmm256, V_H_W),
        vl2!(VEX_Vminpd_xmm_xmm_xmmm128, VEX_Vminpd_ymm_ymm_ymmm256, V_H_W),
        sc(C::VEX_Vminss_xmm_xmm_xmmm32, V_H_W, MS::Dword),
        sc(C::VEX_Vminsd_xmm_xmm_xmmm64, V_H_W, MS::Qword)
    );
    t[0x5E] = pfx!(
        vl2!(VEX_Vdivps_xmm_xmm_xmmm128, VEX_Vdivps_ymm_ymm_ymmm256, V_H_W),
        vl2!(VEX_Vdivpd_xmm_xmm_xmmm128, VEX_Vdivpd_ymm_ymm_ymmm256, V_H_W),
        sc(C::VEX_Vdivss_xmm_xmm_xmmm32, V_H_W, MS::Dword),
        sc(C::VEX_Vdivsd_xmm_xmm_xmmm64, V_H_W, MS::Qword)
    );
    t[0x5F] = pfx!(
        vl2!(VEX_Vmaxps_xmm_xmm_xmmm128, VEX_Vmaxps_ymm_ymm_ymmm256, V_H_W),
        vl2!(VEX_Vmaxpd_xmm_xmm_xmmm128, VEX_Vmaxpd_ymm_ymm_ymmm256, V_H_W),
        sc(C::VEX_Vmaxss_xmm_xmm_xmmm32, V_H_W, MS::Dword),
        sc(C::VEX_Vmaxsd_xmm_xmm_xmmm64, V_H_W, MS::Qword)
    );
    t[0x6E] = pfx!(
        H::Invalid,
        vw!(
            sc(C::VEX_Vmovd_xmm_rm32, &[V, Ed], MS::Dword),
            sc(C::VEX_Vmovq_xmm_rm64, &[V, Eq], MS::Qword)
        ),
        H::Invalid,
        H::Invalid
    );
    t[0x6F] = pfx!(
        H::Invalid,
        vl2!(VEX_Vmovdqa_xmm_xmmm128, VEX_Vmovdqa_ymm_ymmm256, V_W),
        vl2!(VEX_Vmovdqu_xmm_xmmm128, VEX_Vmovdqu_ymm_ymmm256, V_W),
        H::Invalid
    );
    t[0x70] = pfx!(
        H::Invalid,
        vl2!(VEX_Vpshufd_xmm_xmmm128_imm8, VEX_Vpshufd_ymm_ymmm256_imm8, V_W_IB),
        vl2!(VEX_Vpshufhw_xmm_xmmm128_imm8, VEX_Vpshufhw_ymm_ymmm256_imm8, V_W_IB),
        vl2!(VEX_Vpshuflw_xmm_xmmm128_imm8, VEX_Vpshuflw_ymm_ymmm256_imm8, V_W_IB)
    );
    t[0x74] = pfx!(
        H::Invalid,
        vl2!(VEX_Vpcmpeqb_xmm_xmm_xmmm128, VEX_Vpcmpeqb_ymm_ymm_ymmm256, V_H_W),
        H::Invalid,
        H::Invalid
    );
    t[0x76] = pfx!(
        H::Invalid,
        vl2!(VEX_Vpcmpeqd_xmm_xmm_xmmm128, VEX_Vpcmpeqd_ymm_ymm_ymmm256, V_H_W),
        H::Invalid,
        H::Invalid
    );
    const ZERO: [H; 2] = [op(C::VEX_Vzeroupper, NONE), op(C::VEX_Vzeroall, NONE)];
    t[0x77] = pfx!(H::VexL(&ZERO), H::Invalid, H::Invalid, H::Invalid);
    t[0x7E] = pfx!(
        H::Invalid,
        vw!(
            sc(C::VEX_Vmovd_rm32_xmm, &[Ed, V], MS::Dword),
            sc(C::VEX_Vmovq_rm64_xmm, &[Eq, V], MS::Qword)
        ),
        sc(C::VEX_Vmovq_xmm_xmmm64, V_W, MS::Qword),
        H::Invalid
    );
    t[0x7F] = pfx!(
        H::Invalid,
        vl2!(VEX_Vmovdqa_xmmm128_xmm, VEX_Vmovdqa_ymmm256_ymm, W_V),
        vl2!(VEX_Vmovdqu_xmmm128_xmm, VEX_Vmovdqu_ymmm256_ymm, W_V),
        H::Invalid
    );
    t[0xC2] = pfx!(
        vl2!(VEX_Vcmpps_xmm_xmm_xmmm128_imm8, VEX_Vcmpps_ymm_ymm_ymmm256_imm8, V_H_W_IB),
        vl2!(VEX_Vcmppd_xmm_xmm_xmmm128_imm8, VEX_Vcmppd_ymm_ymm_ymmm256_imm8, V_H_W_IB),
        sc(C::VEX_Vcmpss_xmm_xmm_xmmm32_imm8, V_H_W_IB, MS::Dword),
        sc(C::VEX_Vcmpsd_xmm_xmm_xmmm64_imm8, V_H_W_IB, MS::Qword)
    );
    t[0xC6] = pfx!(
        vl2!(VEX_Vshufps_xmm_xmm_xmmm128_imm8, VEX_Vshufps_ymm_ymm_ymmm256_imm8, V_H_W_IB),
        vl2!(VEX_Vshufpd_xmm_xmm_xmmm128_imm8, VEX_Vshufpd_ymm_ymm_ymmm256_imm8, V_H_W_IB),
        H::Invalid,
        H::Invalid
    );
    t[0xD6] = pfx!(
        H::Invalid,
        sc(C::VEX_Vmovq_xmmm64_xmm, W_V, MS::Qword),
        H::Invalid,
        H::Invalid
    );
    t[0xDB] = pfx!(
        H::Invalid,
        vl2!(VEX_Vpand_xmm_xmm_xmmm128, VEX_Vpand_ymm_ymm_ymmm256, V_H_W),
        H::Invalid,
        H::Invalid
    );
    t[0xDF] = pfx!(
        H::Invalid,
        vl2!(VEX_Vpandn_xmm_xmm_xmmm128, VEX_Vpandn_ymm_ymm_ymmm256, V_H_W),
        H::Invalid,
        H::Invalid
    );
    t[0xEB] = pfx!(
        H::Invalid,
        vl2!(VEX_Vpor_xmm_xmm_xmmm128, VEX_Vpor_ymm_ymm_ymmm256, V_H_W),
        H::Invalid,
        H::Invalid
    );
    t[0xEF] = pfx!(
        H::Invalid,
        vl2!(VEX_Vpxor_xmm_xmm_xmmm128, VEX_Vpxor_ymm_ymm_ymmm256, V_H_W),
        H::Invalid,
        H::Invalid
    );
    t[0xF8] = pfx!(
        H::Invalid,
        vl2!(VEX_Vpsubb_xmm_xmm_xmmm128, VEX_Vpsubb_ymm_ymm_ymmm256, V_H_W),
        H::Invalid,
        H::Invalid
    );
    t[0xFA] = pfx!(
        H::Invalid,
        vl2!(VEX_Vpsubd_xmm_xmm_xmmm128, VEX_Vpsubd_ymm_ymm_ymmm256, V_H_W),
        H::Invalid,
        H::Invalid
    );
    t[0xFC] = pfx!(
        H::Invalid,
        vl2!(VEX_Vpaddb_xmm_xmm_xmmm128, VEX_Vpaddb_ymm_ymm_ymmm256, V_H_W),
        H::Invalid,
        H::Invalid
    );
    t[0xFE] = pfx!(
        H::Invalid,
        vl2!(VEX_Vpaddd_xmm_xmm_xmmm128, VEX_Vpaddd_ymm_ymm_ymmm256, V_H_W),
        H::Invalid,
        H::Invalid
    );
    t
};

const GD_BD_ED: &[OpSpec] = &[Gd, Bd, Ed];
const GQ_BQ_EQ: &[OpSpec] = &[Gq, Bq, Eq];
const GD_ED_BD: &[OpSpec] = &[Gd, Ed, Bd];
const GQ_EQ_BQ: &[OpSpec] = &[Gq, Eq, Bq];

// BMI vvvv-destination forms (blsr/blsmsk/blsi).
macro_rules! bmi_vvvv {
    ($c32:ident, $c64:ident) => {
        vw!(
            opm(C::$c32, &[Bd, Ed], MS::Dword),
            opm(C::$c64, &[Bq, Eq], MS::Qword)
        )
    };
}

static VEX_GRP17: [H; 8] = [
    H::Invalid,
    bmi_vvvv!(VEX_Blsr_r32_rm32, VEX_Blsr_r64_rm64),
    bmi_vvvv!(VEX_Blsmsk_r32_rm32, VEX_Blsmsk_r64_rm64),
    bmi_vvvv!(VEX_Blsi_r32_rm32, VEX_Blsi_r64_rm64),
    H::Invalid, H::Invalid, H::Invalid, H::Invalid,
];

/// VEX map 2 (0F38 equivalents).
pub(crate) static VEX_MAP2: [H; 256] = {
    let mut t = [H::Invalid; 256];
    t[0x00] = pfx!(
        H::Invalid,
        vl2!(VEX_Vpshufb_xmm_xmm_xmmm128, VEX_Vpshufb_ymm_ymm_ymmm256, V_H_W),
        H::Invalid,
        H::Invalid
    );
    t[0x0C] = pfx!(
        H::Invalid,
        vl2!(VEX_Vpermilps_xmm_xmm_xmmm128, VEX_Vpermilps_ymm_ymm_ymmm256, V_H_W),
        H::Invalid,
        H::Invalid
    );
    // vbroadcastss reads an xmm/m32 source at either destination width.
    const BCASTSS: [H; 2] = [
        H::Op(D::new(C::VEX_Vbroadcastss_xmm_xmmm32, &[V, Wx]).vl(128).mem(MS::Dword)),
        H::Op(D::new(C::VEX_Vbroadcastss_ymm_xmmm32, &[V, Wx]).vl(256).mem(MS::Dword)),
    ];
    t[0x18] = pfx!(
        H::Invalid,
        vw!(H::VexL(&BCASTSS), H::Invalid),
        H::Invalid,
        H::Invalid
    );
    t[0xF2] = pfx!(
        vw!(
            opm(C::VEX_Andn_r32_r32_rm32, GD_BD_ED, MS::Dword),
            opm(C::VEX_Andn_r64_r64_rm64, GQ_BQ_EQ, MS::Qword)
        ),
        H::Invalid,
        H::Invalid,
        H::Invalid
    );
    t[0xF3] = pfx!(H::Group(&VEX_GRP17), H::Invalid, H::Invalid, H::Invalid);
    t[0xF5] = pfx!(
        vw!(
            opm(C::VEX_Bzhi_r32_rm32_r32, GD_ED_BD, MS::Dword),
            opm(C::VEX_Bzhi_r64_rm64_r64, GQ_EQ_BQ, MS::Qword)
        ),
        H::Invalid,
        vw!(
            opm(C::VEX_Pext_r32_r32_rm32, GD_BD_ED, MS::Dword),
            opm(C::VEX_Pext_r64_r64_rm64, GQ_BQ_EQ, MS::Qword)
        ),
        vw!(
            opm(C::VEX_Pdep_r32_r32_rm32, GD_BD_ED, MS::Dword),
            opm(C::VEX_Pdep_r64_r64_rm64, GQ_BQ_EQ, MS::Qword)
        )
    );
    t[0xF6] = pfx!(
        H::Invalid,
        H::Invalid,
        H::Invalid,
        vw!(
            opm(C::VEX_Mulx_r32_r32_rm32, GD_BD_ED, MS::Dword),
            opm(C::VEX_Mulx_r64_r64_rm64, GQ_BQ_EQ, MS::Qword)
        )
    );
    t[0xF7] = pfx!(
        H::Invalid,
        vw!(
            opm(C::VEX_Shlx_r32_rm32_r32, GD_ED_BD, MS::Dword),
            opm(C::VEX_Shlx_r64_rm64_r64, GQ_EQ_BQ, MS::Qword)
        ),
        vw!(
            opm(C::VEX_Sarx_r32_rm32_r32, GD_ED_BD, MS::Dword),
            opm(C::VEX_Sarx_r64_rm64_r64, GQ_EQ_BQ, MS::Qword)
        ),
        vw!(
            opm(C::VEX_Shrx_r32_rm32_r32, GD_ED_BD, MS::Dword),
            opm(C::VEX_Shrx_r64_rm64_r64, GQ_EQ_BQ, MS::Qword)
        )
    );
    t
};

/// VEX map 3 (0F3A equivalents). Everything takes a trailing imm8.
pub(crate) static VEX_MAP3: [H; 256] = {
    let mut t = [H::Invalid; 256];
    // vperm2f128/vinsertf128/vextractf128 are W0, 256-bit only.
    const PERM2: [H; 2] = [
        H::Op(D::new(C::VEX_Vperm2f128_ymm_ymm_ymmm256_imm8, V_H_W_IB).vl(256).mem(MS::Ymmword)),
        H::Invalid,
    ];
    const INSERT: [H; 2] = [
        H::Op(D::new(C::VEX_Vinsertf128_ymm_ymm_xmmm128_imm8, &[V, H, Wx, Ib]).vl(256).mem(MS::Xmmword)),
        H::Invalid,
    ];
    const EXTRACT: [H; 2] = [
        H::Op(D::new(C::VEX_Vextractf128_xmmm128_ymm_imm8, &[Wx, V, Ib]).vl(256).mem(MS::Xmmword)),
        H::Invalid,
    ];
    const L256_PERM2: [H; 2] = [H::Invalid, H::VexW(&PERM2)];
    const L256_INSERT: [H; 2] = [H::Invalid, H::VexW(&INSERT)];
    const L256_EXTRACT: [H; 2] = [H::Invalid, H::VexW(&EXTRACT)];
    t[0x06] = pfx!(H::Invalid, H::VexL(&L256_PERM2), H::Invalid, H::Invalid);
    t[0x0C] = pfx!(
        H::Invalid,
        vl2!(VEX_Vblendps_xmm_xmm_xmmm128_imm8, VEX_Vblendps_ymm_ymm_ymmm256_imm8, V_H_W_IB),
        H::Invalid,
        H::Invalid
    );
    t[0x0F] = pfx!(
        H::Invalid,
        vl2!(VEX_Vpalignr_xmm_xmm_xmmm128_imm8, VEX_Vpalignr_ymm_ymm_ymmm256_imm8, V_H_W_IB),
        H::Invalid,
        H::Invalid
    );
    t[0x18] = pfx!(H::Invalid, H::VexL(&L256_INSERT), H::Invalid, H::Invalid);
    t[0x19] = pfx!(H::Invalid, H::VexL(&L256_EXTRACT), H::Invalid, H::Invalid);
    t[0x44] = pfx!(
        H::Invalid,
        sc(C::VEX_Vpclmulqdq_xmm_xmm_xmmm128_imm8, V_H_W_IB, MS::Xmmword),
        H::Invalid,
        H::Invalid
    );
    t[0xF0] = pfx!(
        H::Invalid,
        H::Invalid,
        H::Invalid,
        vw!(
            opm(C::VEX_Rorx_r32_rm32_imm8, &[Gd, Ed, Ib], MS::Dword),
            opm(C::VEX_Rorx_r64_rm64_imm8, &[Gq, Eq, Ib], MS::Qword)
        )
    );
    t
};
