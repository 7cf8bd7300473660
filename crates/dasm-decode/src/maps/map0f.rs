//! Two-byte (0F) opcode map.
//!
//! Rows with mandatory-prefix dispatch use `Prefix`; the 66-selected slot may
//! still see the operand-size effect of 0x66 when the row is size-split (bsf
//! vs tzcnt style rows), which is why the decoder does not strip 0x66 when it
//! selects slot 1.

use dasm_core::{Code as C, MemorySize as MS, Register as R};

use crate::table::*;
use crate::table::{Handler as H, InstrDesc as D, OpSpec::*};

/// Packed-single SSE form: xmm, xmm/m128.
const fn ps(code: C) -> H {
    H::Op(D::new(code, V_W).vl(128).mem(MS::Xmmword))
}

/// Scalar-single SSE form: xmm, xmm/m32.
const fn ss(code: C) -> H {
    H::Op(D::new(code, V_W).vl(128).mem(MS::Dword))
}

/// Scalar-double SSE form: xmm, xmm/m64.
const fn sd(code: C) -> H {
    H::Op(D::new(code, V_W).vl(128).mem(MS::Qword))
}

/// MMX form: mm, mm/m64.
const fn mmx(code: C) -> H {
    H::Op(D::new(code, P_Q).mem(MS::Qword))
}

/// REX.W pair: `[q]` selected only by REX.W.
const fn wsel(d32: D, d64: D) -> H {
    H::OpSize([d32, d32, d64])
}

macro_rules! jcc_z {
    ($c16:ident, $c32:ident, $c64:ident) => {
        H::Mode {
            legacy: &osz2(C::$c16, C::$c32, RELZ),
            x64: &op(C::$c64, RELZ),
        }
    };
}

macro_rules! cmov {
    ($c16:ident, $c32:ident, $c64:ident) => {
        osz(C::$c16, C::$c32, C::$c64, GV_EV)
    };
}

static GRP6: [H; 8] = [
    opm(C::Sldt_rm16, EW, MS::Word),
    opm(C::Str_rm16, EW, MS::Word),
    opm(C::Lldt_rm16, EW, MS::Word),
    opm(C::Ltr_rm16, EW, MS::Word),
    opm(C::Verr_rm16, EW, MS::Word),
    opm(C::Verw_rm16, EW, MS::Word),
    H::Invalid,
    H::Invalid,
];

static GRP7: [H; 8] = [
    H::ModRm { mem: &op(C::Sgdt_m, MEM), reg: &H::Invalid },
    H::ModRm { mem: &op(C::Sidt_m, MEM), reg: &H::Invalid },
    H::ModRm { mem: &op(C::Lgdt_m, MEM), reg: &H::Invalid },
    H::ModRm { mem: &op(C::Lidt_m, MEM), reg: &H::Invalid },
    osz3(
        D::new(C::Smsw_rm16, EV).mem(MS::Word),
        D::new(C::Smsw_rm32, EV).mem(MS::Word),
        D::new(C::Smsw_rm64, EV).mem(MS::Word),
    ),
    H::Invalid,
    opm(C::Lmsw_rm16, EW, MS::Word),
    H::ModRm { mem: &opm(C::Invlpg_m, MEM, MS::Byte), reg: &H::Invalid },
];

static GRP_0F0D: [H; 8] = [
    H::Invalid,
    H::ModRm { mem: &opm(C::Prefetchw_m8, MEM, MS::Byte), reg: &H::Invalid },
    H::Invalid, H::Invalid, H::Invalid, H::Invalid, H::Invalid, H::Invalid,
];

static GRP_0F18: [H; 8] = [
    H::ModRm { mem: &opm(C::Prefetchnta_m8, MEM, MS::Byte), reg: &H::Invalid },
    H::ModRm { mem: &opm(C::Prefetcht0_m8, MEM, MS::Byte), reg: &H::Invalid },
    H::ModRm { mem: &opm(C::Prefetcht1_m8, MEM, MS::Byte), reg: &H::Invalid },
    H::ModRm { mem: &opm(C::Prefetcht2_m8, MEM, MS::Byte), reg: &H::Invalid },
    H::Invalid, H::Invalid, H::Invalid, H::Invalid,
];

static GRP8_BA: [H; 8] = [
    H::Invalid,
    H::Invalid,
    H::Invalid,
    H::Invalid,
    osz(C::Bt_rm16_imm8, C::Bt_rm32_imm8, C::Bt_rm64_imm8, &[Ev, Ib]),
    osz_lock(C::Bts_rm16_imm8, C::Bts_rm32_imm8, C::Bts_rm64_imm8, &[Ev, Ib]),
    osz_lock(C::Btr_rm16_imm8, C::Btr_rm32_imm8, C::Btr_rm64_imm8, &[Ev, Ib]),
    osz_lock(C::Btc_rm16_imm8, C::Btc_rm32_imm8, C::Btc_rm64_imm8, &[Ev, Ib]),
];

static GRP9_C7: [H; 8] = [
    H::Invalid,
    H::ModRm {
        mem: &wsel(
            D::new(C::Cmpxchg8b_m64, MEM).mem(MS::Qword).flag(F_LOCK),
            D::new(C::Cmpxchg16b_m128, MEM).mem(MS::Xmmword).flag(F_LOCK),
        ),
        reg: &H::Invalid,
    },
    H::Invalid,
    H::Invalid,
    H::Invalid,
    H::Invalid,
    H::ModRm {
        mem: &H::Invalid,
        reg: &osz(C::Rdrand_r16, C::Rdrand_r32, C::Rdrand_r64, EV),
    },
    H::ModRm {
        mem: &H::Invalid,
        reg: &osz(C::Rdseed_r16, C::Rdseed_r32, C::Rdseed_r64, EV),
    },
];

static GRP15_AE: [H; 8] = [
    H::ModRm { mem: &op(C::Fxsave_m, MEM), reg: &H::Invalid },
    H::ModRm { mem: &op(C::Fxrstor_m, MEM), reg: &H::Invalid },
    H::ModRm { mem: &opm(C::Ldmxcsr_m32, MEM, MS::Dword), reg: &H::Invalid },
    H::ModRm { mem: &opm(C::Stmxcsr_m32, MEM, MS::Dword), reg: &H::Invalid },
    H::Invalid,
    H::ModRm { mem: &H::Invalid, reg: &op(C::Lfence, NONE) },
    H::ModRm { mem: &H::Invalid, reg: &op(C::Mfence, NONE) },
    H::ModRm { mem: &opm(C::Clflush_m8, MEM, MS::Byte), reg: &op(C::Sfence, NONE) },
];

/// The 0F opcode map.
pub(crate) static MAP_0F: [H; 256] = [
    /* 00 */ H::Group(&GRP6),
    /* 01 */ H::Group(&GRP7),
    /* 02 */ osz3(
        D::new(C::Lar_r16_rm16, &[Gv, Ew]).mem(MS::Word),
        D::new(C::Lar_r32_rm32, &[Gv, Ew]).mem(MS::Word),
        D::new(C::Lar_r64_rm64, &[Gv, Ew]).mem(MS::Word),
    ),
    /* 03 */ osz3(
        D::new(C::Lsl_r16_rm16, &[Gv, Ew]).mem(MS::Word),
        D::new(C::Lsl_r32_rm32, &[Gv, Ew]).mem(MS::Word),
        D::new(C::Lsl_r64_rm64, &[Gv, Ew]).mem(MS::Word),
    ),
    /* 04 */ H::Invalid,
    /* 05 */ only64(&op(C::Syscall, NONE)),
    /* 06 */ op(C::Clts, NONE),
    /* 07 */ only64(&op(C::Sysret, NONE)),
    /* 08 */ op(C::Invd, NONE),
    /* 09 */ op(C::Wbinvd, NONE),
    /* 0A */ H::Invalid,
    /* 0B */ op(C::Ud2, NONE),
    /* 0C */ H::Invalid,
    /* 0D */ H::Group(&GRP_0F0D),
    /* 0E */ op(C::Femms, NONE),
    /* 0F */ H::Invalid, // 3DNow escape, decoder-classified
    /* 10 */ H::Prefix(&[
        ps(C::Movups_xmm_xmmm128),
        ps(C::Movupd_xmm_xmmm128),
        ss(C::Movss_xmm_xmmm32),
        sd(C::Movsd_xmm_xmmm64),
    ]),
    /* 11 */ H::Prefix(&[
        H::Op(D::new(C::Movups_xmmm128_xmm, W_V).vl(128).mem(MS::Xmmword)),
        H::Op(D::new(C::Movupd_xmmm128_xmm, W_V).vl(128).mem(MS::Xmmword)),
        H::Op(D::new(C::Movss_xmmm32_xmm, W_V).vl(128).mem(MS::Dword)),
        H::Op(D::new(C::Movsd_xmmm64_xmm, W_V).vl(128).mem(MS::Qword)),
    ]),
    /* 12 */ H::Invalid,
    /* 13 */ H::Invalid,
    /* 14 */ H::Prefix(&[ps(C::Unpcklps_xmm_xmmm128), ps(C::Unpcklpd_xmm_xmmm128), H::Invalid, H::Invalid]),
    /* 15 */ H::Prefix(&[ps(C::Unpckhps_xmm_xmmm128), ps(C::Unpckhpd_xmm_xmmm128), H::Invalid, H::Invalid]),
    /* 16 */ H::Invalid,
    /* 17 */ H::Invalid,
    /* 18 */ H::Group(&GRP_0F18),
    /* 19 */ H::Invalid,
    /* 1A */ H::Invalid,
    /* 1B */ H::Invalid,
    /* 1C */ H::Invalid,
    /* 1D */ H::Invalid,
    /* 1E */ H::Invalid,
    /* 1F */ osz(C::Nop_rm16, C::Nop_rm32, C::Nop_rm64, EV),
    /* 20 */ H::Mode {
        legacy: &op(C::Mov_r32_cr, &[Ed, Cr]),
        x64: &op(C::Mov_r64_cr, &[Eq, Cr]),
    },
    /* 21 */ H::Mode {
        legacy: &op(C::Mov_r32_dr, &[Ed, Dr]),
        x64: &op(C::Mov_r64_dr, &[Eq, Dr]),
    },
    /* 22 */ H::Mode {
        legacy: &op(C::Mov_cr_r32, &[Cr, Ed]),
        x64: &op(C::Mov_cr_r64, &[Cr, Eq]),
    },
    /* 23 */ H::Mode {
        legacy: &op(C::Mov_dr_r32, &[Dr, Ed]),
        x64: &op(C::Mov_dr_r64, &[Dr, Eq]),
    },
    /* 24 */ H::Invalid,
    /* 25 */ H::Invalid,
    /* 26 */ H::Invalid,
    /* 27 */ H::Invalid,
    /* 28 */ H::Prefix(&[ps(C::Movaps_xmm_xmmm128), ps(C::Movapd_xmm_xmmm128), H::Invalid, H::Invalid]),
    /* 29 */ H::Prefix(&[
        H::Op(D::new(C::Movaps_xmmm128_xmm, W_V).vl(128).mem(MS::Xmmword)),
        H::Op(D::new(C::Movapd_xmmm128_xmm, W_V).vl(128).mem(MS::Xmmword)),
        H::Invalid,
        H::Invalid,
    ]),
    /* 2A */ H::Prefix(&[
        H::Invalid,
        H::Invalid,
        wsel(
            D::new(C::Cvtsi2ss_xmm_rm32, &[V, Ed]).vl(128).mem(MS::Dword),
            D::new(C::Cvtsi2ss_xmm_rm64, &[V, Eq]).vl(128).mem(MS::Qword),
        ),
        wsel(
            D::new(C::Cvtsi2sd_xmm_rm32, &[V, Ed]).vl(128).mem(MS::Dword),
            D::new(C::Cvtsi2sd_xmm_rm64, &[V, Eq]).vl(128).mem(MS::Qword),
        ),
    ]),
    /* 2B */ H::Prefix(&[
        H::Op(D::new(C::Movntps_m128_xmm, &[M, V]).vl(128).mem(MS::Xmmword)),
        H::Op(D::new(C::Movntpd_m128_xmm, &[M, V]).vl(128).mem(MS::Xmmword)),
        H::Invalid,
        H::Invalid,
    ]),
    /* 2C */ H::Prefix(&[
        H::Invalid,
        H::Invalid,
        wsel(
            D::new(C::Cvttss2si_r32_xmmm32, &[Gd, W]).vl(128).mem(MS::Dword),
            D::new(C::Cvttss2si_r64_xmmm32, &[Gq, W]).vl(128).mem(MS::Dword),
        ),
        wsel(
            D::new(C::Cvttsd2si_r32_xmmm64, &[Gd, W]).vl(128).mem(MS::Qword),
            D::new(C::Cvttsd2si_r64_xmmm64, &[Gq, W]).vl(128).mem(MS::Qword),
        ),
    ]),
    /* 2D */ H::Invalid,
    /* 2E */ H::Prefix(&[ss(C::Ucomiss_xmm_xmmm32), sd(C::Ucomisd_xmm_xmmm64), H::Invalid, H::Invalid]),
    /* 2F */ H::Prefix(&[ss(C::Comiss_xmm_xmmm32), sd(C::Comisd_xmm_xmmm64), H::Invalid, H::Invalid]),
    /* 30 */ op(C::Wrmsr, NONE),
    /* 31 */ op(C::Rdtsc, NONE),
    /* 32 */ op(C::Rdmsr, NONE),
    /* 33 */ op(C::Rdpmc, NONE),
    /* 34 */ op(C::Sysenter, NONE),
    /* 35 */ op(C::Sysexit, NONE),
    /* 36 */ H::Invalid,
    /* 37 */ H::Invalid,
    /* 38 */ H::Invalid, // 0F38 escape
    /* 39 */ H::Invalid,
    /* 3A */ H::Invalid, // 0F3A escape
    /* 3B */ H::Invalid,
    /* 3C */ H::Invalid,
    /* 3D */ H::Invalid,
    /* 3E */ H::Invalid,
    /* 3F */ H::Invalid,
    /* 40 */ cmov!(Cmovo_r16_rm16, Cmovo_r32_rm32, Cmovo_r64_rm64),
    /* 41 */ cmov!(Cmovno_r16_rm16, Cmovno_r32_rm32, Cmovno_r64_rm64),
    /* 42 */ cmov!(Cmovb_r16_rm16, Cmovb_r32_rm32, Cmovb_r64_rm64),
    /* 43 */ cmov!(Cmovae_r16_rm16, Cmovae_r32_rm32, Cmovae_r64_rm64),
    /* 44 */ cmov!(Cmove_r16_rm16, Cmove_r32_rm32, Cmove_r64_rm64),
    /* 45 */ cmov!(Cmovne_r16_rm16, Cmovne_r32_rm32, Cmovne_r64_rm64),
    /* 46 */ cmov!(Cmovbe_r16_rm16, Cmovbe_r32_rm32, Cmovbe_r64_rm64),
    /* 47 */ cmov!(Cmova_r16_rm16, Cmova_r32_rm32, Cmova_r64_rm64),
    /* 48 */ cmov!(Cmovs_r16_rm16, Cmovs_r32_rm32, Cmovs_r64_rm64),
    /* 49 */ cmov!(Cmovns_r16_rm16, Cmovns_r32_rm32, Cmovns_r64_rm64),
    /* 4A */ cmov!(Cmovp_r16_rm16, Cmovp_r32_rm32, Cmovp_r64_rm64),
    /* 4B */ cmov!(Cmovnp_r16_rm16, Cmovnp_r32_rm32, Cmovnp_r64_rm64),
    /* 4C */ cmov!(Cmovl_r16_rm16, Cmovl_r32_rm32, Cmovl_r64_rm64),
    /* 4D */ cmov!(Cmovge_r16_rm16, Cmovge_r32_rm32, Cmovge_r64_rm64),
    /* 4E */ cmov!(Cmovle_r16_rm16, Cmovle_r32_rm32, Cmovle_r64_rm64),
    /* 4F */ cmov!(Cmovg_r16_rm16, Cmovg_r32_rm32, Cmovg_r64_rm64),
    /* 50 */ H::Prefix(&[
        H::Op(D::new(C::Movmskps_r32_xmm, &[Gd, U]).vl(128)),
        H::Op(D::new(C::Movmskpd_r32_xmm, &[Gd, U]).vl(128)),
        H::Invalid,
        H::Invalid,
    ]),
    /* 51 */ H::Prefix(&[ps(C::Sqrtps_xmm_xmmm128), ps(C::Sqrtpd_xmm_xmmm128), ss(C::Sqrtss_xmm_xmmm32), sd(C::Sqrtsd_xmm_xmmm64)]),
    /* 52 */ H::Invalid,
    /* 53 */ H::Invalid,
    /* 54 */ H::Prefix(&[ps(C::Andps_xmm_xmmm128), ps(C::Andpd_xmm_xmmm128), H::Invalid, H::Invalid]),
    /* 55 */ H::Prefix(&[ps(C::Andnps_xmm_xmmm128), ps(C::Andnpd_xmm_xmmm128), H::Invalid, H::Invalid]),
    /* 56 */ H::Prefix(&[ps(C::Orps_xmm_xmmm128), ps(C::Orpd_xmm_xmmm128), H::Invalid, H::Invalid]),
    /* 57 */ H::Prefix(&[ps(C::Xorps_xmm_xmmm128), ps(C::Xorpd_xmm_xmmm128), H::Invalid, H::Invalid]),
    /* 58 */ H::Prefix(&[ps(C::Addps_xmm_xmmm128), ps(C::Addpd_xmm_xmmm128), ss(C::Addss_xmm_xmmm32), sd(C::Addsd_xmm_xmmm64)]),
    /* 59 */ H::Prefix(&[ps(C::Mulps_xmm_xmmm128), ps(C::Mulpd_xmm_xmmm128), ss(C::Mulss_xmm_xmmm32), sd(C::Mulsd_xmm_xmmm64)]),
    /* 5A */ H::Prefix(&[sd(C::Cvtps2pd_xmm_xmmm64), ps(C::Cvtpd2ps_xmm_xmmm128), ss(C::Cvtss2sd_xmm_xmmm32), sd(C::Cvtsd2ss_xmm_xmmm64)]),
    /* 5B */ H::Prefix(&[ps(C::Cvtdq2ps_xmm_xmmm128), ps(C::Cvtps2dq_xmm_xmmm128), ps(C::Cvttps2dq_xmm_xmmm128), H::Invalid]),
    /* 5C */ H::Prefix(&[ps(C::Subps_xmm_xmmm128), ps(C::Subpd_xmm_xmmm128), ss(C::Subss_xmm_xmmm32), sd(C::Subsd_xmm_xmmm64)]),
    /* 5D */ H::Prefix(&[ps(C::Minps_xmm_xmmm128), ps(C::Minpd_xmm_xmmm128), ss(C::Minss_xmm_xmmm32), sd(C::Minsd_xmm_xmmm64)]),
    /* 5E */ H::Prefix(&[ps(C::Divps_xmm_xmmm128), ps(C::Divpd_xmm_xmmm128), ss(C::Divss_xmm_xmmm32), sd(C::Divsd_xmm_xmmm64)]),
    /* 5F */ H::Prefix(&[ps(C::Maxps_xmm_xmmm128), ps(C::Maxpd_xmm_xmmm128), ss(C::Maxss_xmm_xmmm32), sd(C::Maxsd_xmm_xmmm64)]),
    /* 60 */ H::Prefix(&[
        H::Op(D::new(C::Punpcklbw_mm_mmm32, P_Q).mem(MS::Dword)),
        ps(C::Punpcklbw_xmm_xmmm128),
        H::Invalid,
        H::Invalid,
    ]),
    /* 61 */ H::Invalid,
    /* 62 */ H::Invalid,
    /* 63 */ H::Invalid,
    /* 64 */ H::Invalid,
    /* 65 */ H::Invalid,
    /* 66 */ H::Invalid,
    /* 67 */ H::Invalid,
    /* 68 */ H::Invalid,
    /* 69 */ H::Invalid,
    /* 6A */ H::Invalid,
    /* 6B */ H::Invalid,
    /* 6C */ H::Invalid,
    /* 6D */ H::Invalid,
    /* 6E */ H::Prefix(&[
        wsel(
            D::new(C::Movd_mm_rm32, &[P, Ed]).mem(MS::Dword),
            D::new(C::Movq_mm_rm64, &[P, Eq]).mem(MS::Qword),
        ),
        wsel(
            D::new(C::Movd_xmm_rm32, &[V, Ed]).vl(128).mem(MS::Dword),
            D::new(C::Movq_xmm_rm64, &[V, Eq]).vl(128).mem(MS::Qword),
        ),
        H::Invalid,
        H::Invalid,
    ]),
    /* 6F */ H::Prefix(&[mmx(C::Movq_mm_mmm64), ps(C::Movdqa_xmm_xmmm128), ps(C::Movdqu_xmm_xmmm128), H::Invalid]),
    /* 70 */ H::Prefix(&[
        H::Op(D::new(C::Pshufw_mm_mmm64_imm8, P_Q_IB).mem(MS::Qword)),
        H::Op(D::new(C::Pshufd_xmm_xmmm128_imm8, V_W_IB).vl(128).mem(MS::Xmmword)),
        H::Op(D::new(C::Pshufhw_xmm_xmmm128_imm8, V_W_IB).vl(128).mem(MS::Xmmword)),
        H::Op(D::new(C::Pshuflw_xmm_xmmm128_imm8, V_W_IB).vl(128).mem(MS::Xmmword)),
    ]),
    /* 71 */ H::Invalid,
    /* 72 */ H::Invalid,
    /* 73 */ H::Invalid,
    /* 74 */ H::Prefix(&[mmx(C::Pcmpeqb_mm_mmm64), ps(C::Pcmpeqb_xmm_xmmm128), H::Invalid, H::Invalid]),
    /* 75 */ H::Invalid,
    /* 76 */ H::Prefix(&[mmx(C::Pcmpeqd_mm_mmm64), ps(C::Pcmpeqd_xmm_xmmm128), H::Invalid, H::Invalid]),
    /* 77 */ H::Prefix(&[op(C::Emms, NONE), H::Invalid, H::Invalid, H::Invalid]),
    /* 78 */ H::Invalid,
    /* 79 */ H::Invalid,
    /* 7A */ H::Invalid,
    /* 7B */ H::Invalid,
    /* 7C */ H::Invalid,
    /* 7D */ H::Invalid,
    /* 7E */ H::Prefix(&[
        wsel(
            D::new(C::Movd_rm32_mm, &[Ed, P]).mem(MS::Dword),
            D::new(C::Movq_rm64_mm, &[Eq, P]).mem(MS::Qword),
        ),
        wsel(
            D::new(C::Movd_rm32_xmm, &[Ed, V]).vl(128).mem(MS::Dword),
            D::new(C::Movq_rm64_xmm, &[Eq, V]).vl(128).mem(MS::Qword),
        ),
        sd(C::Movq_xmm_xmmm64),
        H::Invalid,
    ]),
    /* 7F */ H::Prefix(&[
        H::Op(D::new(C::Movq_mmm64_mm, Q_P).mem(MS::Qword)),
        H::Op(D::new(C::Movdqa_xmmm128_xmm, W_V).vl(128).mem(MS::Xmmword)),
        H::Op(D::new(C::Movdqu_xmmm128_xmm, W_V).vl(128).mem(MS::Xmmword)),
        H::Invalid,
    ]),
    /* 80 */ jcc_z!(Jo_rel16, Jo_rel32_32, Jo_rel32_64),
    /* 81 */ jcc_z!(Jno_rel16, Jno_rel32_32, Jno_rel32_64),
    /* 82 */ jcc_z!(Jb_rel16, Jb_rel32_32, Jb_rel32_64),
    /* 83 */ jcc_z!(Jae_rel16, Jae_rel32_32, Jae_rel32_64),
    /* 84 */ jcc_z!(Je_rel16, Je_rel32_32, Je_rel32_64),
    /* 85 */ jcc_z!(Jne_rel16, Jne_rel32_32, Jne_rel32_64),
    /* 86 */ jcc_z!(Jbe_rel16, Jbe_rel32_32, Jbe_rel32_64),
    /* 87 */ jcc_z!(Ja_rel16, Ja_rel32_32, Ja_rel32_64),
    /* 88 */ jcc_z!(Js_rel16, Js_rel32_32, Js_rel32_64),
    /* 89 */ jcc_z!(Jns_rel16, Jns_rel32_32, Jns_rel32_64),
    /* 8A */ jcc_z!(Jp_rel16, Jp_rel32_32, Jp_rel32_64),
    /* 8B */ jcc_z!(Jnp_rel16, Jnp_rel32_32, Jnp_rel32_64),
    /* 8C */ jcc_z!(Jl_rel16, Jl_rel32_32, Jl_rel32_64),
    /* 8D */ jcc_z!(Jge_rel16, Jge_rel32_32, Jge_rel32_64),
    /* 8E */ jcc_z!(Jle_rel16, Jle_rel32_32, Jle_rel32_64),
    /* 8F */ jcc_z!(Jg_rel16, Jg_rel32_32, Jg_rel32_64),
    /* 90 */ op8(C::Seto_rm8, EB),
    /* 91 */ op8(C::Setno_rm8, EB),
    /* 92 */ op8(C::Setb_rm8, EB),
    /* 93 */ op8(C::Setae_rm8, EB),
    /* 94 */ op8(C::Sete_rm8, EB),
    /* 95 */ op8(C::Setne_rm8, EB),
    /* 96 */ op8(C::Setbe_rm8, EB),
    /* 97 */ op8(C::Seta_rm8, EB),
    /* 98 */ op8(C::Sets_rm8, EB),
    /* 99 */ op8(C::Setns_rm8, EB),
    /* 9A */ op8(C::Setp_rm8, EB),
    /* 9B */ op8(C::Setnp_rm8, EB),
    /* 9C */ op8(C::Setl_rm8, EB),
    /* 9D */ op8(C::Setge_rm8, EB),
    /* 9E */ op8(C::Setle_rm8, EB),
    /* 9F */ op8(C::Setg_rm8, EB),
    /* A0 */ op(C::Push_FS, &[Reg(R::FS)]),
    /* A1 */ op(C::Pop_FS, &[Reg(R::FS)]),
    /* A2 */ op(C::Cpuid, NONE),
    /* A3 */ osz(C::Bt_rm16_r16, C::Bt_rm32_r32, C::Bt_rm64_r64, EV_GV),
    /* A4 */ osz(C::Shld_rm16_r16_imm8, C::Shld_rm32_r32_imm8, C::Shld_rm64_r64_imm8, &[Ev, Gv, Ib]),
    /* A5 */ osz(C::Shld_rm16_r16_CL, C::Shld_rm32_r32_CL, C::Shld_rm64_r64_CL, &[Ev, Gv, Reg(R::CL)]),
    /* A6 */ H::Invalid,
    /* A7 */ H::Invalid,
    /* A8 */ op(C::Push_GS, &[Reg(R::GS)]),
    /* A9 */ op(C::Pop_GS, &[Reg(R::GS)]),
    /* AA */ H::Invalid,
    /* AB */ osz_lock(C::Bts_rm16_r16, C::Bts_rm32_r32, C::Bts_rm64_r64, EV_GV),
    /* AC */ osz(C::Shrd_rm16_r16_imm8, C::Shrd_rm32_r32_imm8, C::Shrd_rm64_r64_imm8, &[Ev, Gv, Ib]),
    /* AD */ osz(C::Shrd_rm16_r16_CL, C::Shrd_rm32_r32_CL, C::Shrd_rm64_r64_CL, &[Ev, Gv, Reg(R::CL)]),
    /* AE */ H::Group(&GRP15_AE),
    /* AF */ osz(C::Imul_r16_rm16, C::Imul_r32_rm32, C::Imul_r64_rm64, GV_EV),
    /* B0 */ op8_lock(C::Cmpxchg_rm8_r8, EB_GB),
    /* B1 */ osz_lock(C::Cmpxchg_rm16_r16, C::Cmpxchg_rm32_r32, C::Cmpxchg_rm64_r64, EV_GV),
    /* B2 */ osz3(
        D::new(C::Lss_r16_m1616, GV_M).mem(MS::Ptr1616),
        D::new(C::Lss_r32_m1632, GV_M).mem(MS::Ptr1632),
        D::new(C::Lss_r64_m1664, GV_M).mem(MS::Ptr1664),
    ),
    /* B3 */ osz_lock(C::Btr_rm16_r16, C::Btr_rm32_r32, C::Btr_rm64_r64, EV_GV),
    /* B4 */ osz3(
        D::new(C::Lfs_r16_m1616, GV_M).mem(MS::Ptr1616),
        D::new(C::Lfs_r32_m1632, GV_M).mem(MS::Ptr1632),
        D::new(C::Lfs_r64_m1664, GV_M).mem(MS::Ptr1664),
    ),
    /* B5 */ osz3(
        D::new(C::Lgs_r16_m1616, GV_M).mem(MS::Ptr1616),
        D::new(C::Lgs_r32_m1632, GV_M).mem(MS::Ptr1632),
        D::new(C::Lgs_r64_m1664, GV_M).mem(MS::Ptr1664),
    ),
    /* B6 */ osz3(
        D::new(C::Movzx_r16_rm8, &[Gv, Eb]).mem(MS::Byte),
        D::new(C::Movzx_r32_rm8, &[Gv, Eb]).mem(MS::Byte),
        D::new(C::Movzx_r64_rm8, &[Gv, Eb]).mem(MS::Byte),
    ),
    /* B7 */ osz3(
        D::new(C::Movzx_r16_rm16, &[Gv, Ew]).mem(MS::Word),
        D::new(C::Movzx_r32_rm16, &[Gv, Ew]).mem(MS::Word),
        D::new(C::Movzx_r64_rm16, &[Gv, Ew]).mem(MS::Word),
    ),
    /* B8 */ H::Prefix(&[
        H::Invalid,
        H::Invalid,
        osz(C::Popcnt_r16_rm16, C::Popcnt_r32_rm32, C::Popcnt_r64_rm64, GV_EV),
        H::Invalid,
    ]),
    /* B9 */ H::Invalid,
    /* BA */ H::Group(&GRP8_BA),
    /* BB */ osz_lock(C::Btc_rm16_r16, C::Btc_rm32_r32, C::Btc_rm64_r64, EV_GV),
    /* BC */ H::Prefix(&[
        osz(C::Bsf_r16_rm16, C::Bsf_r32_rm32, C::Bsf_r64_rm64, GV_EV),
        osz(C::Bsf_r16_rm16, C::Bsf_r32_rm32, C::Bsf_r64_rm64, GV_EV),
        osz(C::Tzcnt_r16_rm16, C::Tzcnt_r32_rm32, C::Tzcnt_r64_rm64, GV_EV),
        H::Invalid,
    ]),
    /* BD */ H::Prefix(&[
        osz(C::Bsr_r16_rm16, C::Bsr_r32_rm32, C::Bsr_r64_rm64, GV_EV),
        osz(C::Bsr_r16_rm16, C::Bsr_r32_rm32, C::Bsr_r64_rm64, GV_EV),
        osz(C::Lzcnt_r16_rm16, C::Lzcnt_r32_rm32, C::Lzcnt_r64_rm64, GV_EV),
        H::Invalid,
    ]),
    /* BE */ osz3(
        D::new(C::Movsx_r16_rm8, &[Gv, Eb]).mem(MS::Byte),
        D::new(C::Movsx_r32_rm8, &[Gv, Eb]).mem(MS::Byte),
        D::new(C::Movsx_r64_rm8, &[Gv, Eb]).mem(MS::Byte),
    ),
    /* BF */ osz3(
        D::new(C::Movsx_r16_rm16, &[Gv, Ew]).mem(MS::Word),
        D::new(C::Movsx_r32_rm16, &[Gv, Ew]).mem(MS::Word),
        D::new(C::Movsx_r64_rm16, &[Gv, Ew]).mem(MS::Word),
    ),
    /* C0 */ op8_lock(C::Xadd_rm8_r8, EB_GB),
    /* C1 */ osz_lock(C::Xadd_rm16_r16, C::Xadd_rm32_r32, C::Xadd_rm64_r64, EV_GV),
    /* C2 */ H::Prefix(&[
        H::Op(D::new(C::Cmpps_xmm_xmmm128_imm8, V_W_IB).vl(128).mem(MS::Xmmword)),
        H::Op(D::new(C::Cmppd_xmm_xmmm128_imm8, V_W_IB).vl(128).mem(MS::Xmmword)),
        H::Op(D::new(C::Cmpss_xmm_xmmm32_imm8, V_W_IB).vl(128).mem(MS::Dword)),
        H::Op(D::new(C::Cmpsd_xmm_xmmm64_imm8, V_W_IB).vl(128).mem(MS::Qword)),
    ]),
    /* C3 */ H::Prefix(&[
        wsel(
            D::new(C::Movnti_m32_r32, &[M, Gd]).mem(MS::Dword),
            D::new(C::Movnti_m64_r64, &[M, Gq]).mem(MS::Qword),
        ),
        H::Invalid,
        H::Invalid,
        H::Invalid,
    ]),
    /* C4 */ H::Prefix(&[
        H::Op(D::new(C::Pinsrw_mm_r32m16_imm8, &[P, Ed, Ib]).mem(MS::Word)),
        H::Op(D::new(C::Pinsrw_xmm_r32m16_imm8, &[V, Ed, Ib]).vl(128).mem(MS::Word)),
        H::Invalid,
        H::Invalid,
    ]),
    /* C5 */ H::Prefix(&[
        H::Op(D::new(C::Pextrw_r32_mm_imm8, &[Gd, N, Ib])),
        H::Op(D::new(C::Pextrw_r32_xmm_imm8, &[Gd, U, Ib]).vl(128)),
        H::Invalid,
        H::Invalid,
    ]),
    /* C6 */ H::Prefix(&[
        H::Op(D::new(C::Shufps_xmm_xmmm128_imm8, V_W_IB).vl(128).mem(MS::Xmmword)),
        H::Op(D::new(C::Shufpd_xmm_xmmm128_imm8, V_W_IB).vl(128).mem(MS::Xmmword)),
        H::Invalid,
        H::Invalid,
    ]),
    /* C7 */ H::Group(&GRP9_C7),
    /* C8 */ osz3(D::new(C::Bswap_r32, &[OpReg32]), D::new(C::Bswap_r32, &[OpReg32]), D::new(C::Bswap_r64, &[OpReg64])),
    /* C9 */ osz3(D::new(C::Bswap_r32, &[OpReg32]), D::new(C::Bswap_r32, &[OpReg32]), D::new(C::Bswap_r64, &[OpReg64])),
    /* CA */ osz3(D::new(C::Bswap_r32, &[OpReg32]), D::new(C::Bswap_r32, &[OpReg32]), D::new(C::Bswap_r64, &[OpReg64])),
    /* CB */ osz3(D::new(C::Bswap_r32, &[OpReg32]), D::new(C::Bswap_r32, &[OpReg32]), D::new(C::Bswap_r64, &[OpReg64])),
    /* CC */ osz3(D::new(C::Bswap_r32, &[OpReg32]), D::new(C::Bswap_r32, &[OpReg32]), D::new(C::Bswap_r64, &[OpReg64])),
    /* CD */ osz3(D::new(C::Bswap_r32, &[OpReg32]), D::new(C::Bswap_r32, &[OpReg32]), D::new(C::Bswap_r64, &[OpReg64])),
    /* CE */ osz3(D::new(C::Bswap_r32, &[OpReg32]), D::new(C::Bswap_r32, &[OpReg32]), D::new(C::Bswap_r64, &[OpReg64])),
    /* CF */ osz3(D::new(C::Bswap_r32, &[OpReg32]), D::new(C::Bswap_r32, &[OpReg32]), D::new(C::Bswap_r64, &[OpReg64])),
    /* D0 */ H::Invalid,
    /* D1 */ H::Invalid,
    /* D2 */ H::Invalid,
    /* D3 */ H::Invalid,
    /* D4 */ H::Prefix(&[mmx(C::Paddq_mm_mmm64), ps(C::Paddq_xmm_xmmm128), H::Invalid, H::Invalid]),
    /* D5 */ H::Prefix(&[mmx(C::Pmullw_mm_mmm64), ps(C::Pmullw_xmm_xmmm128), H::Invalid, H::Invalid]),
    /* D6 */ H::Prefix(&[
        H::Invalid,
        H::Op(D::new(C::Movq_xmmm64_xmm, W_V).vl(128).mem(MS::Qword)),
        H::Invalid,
        H::Invalid,
    ]),
    /* D7 */ H::Prefix(&[
        H::Op(D::new(C::Pmovmskb_r32_mm, &[Gd, N])),
        H::Op(D::new(C::Pmovmskb_r32_xmm, &[Gd, U]).vl(128)),
        H::Invalid,
        H::Invalid,
    ]),
    /* D8 */ H::Invalid,
    /* D9 */ H::Invalid,
    /* DA */ H::Invalid,
    /* DB */ H::Prefix(&[mmx(C::Pand_mm_mmm64), ps(C::Pand_xmm_xmmm128), H::Invalid, H::Invalid]),
    /* DC */ H::Invalid,
    /* DD */ H::Invalid,
    /* DE */ H::Invalid,
    /* DF */ H::Prefix(&[mmx(C::Pandn_mm_mmm64), ps(C::Pandn_xmm_xmmm128), H::Invalid, H::Invalid]),
    /* E0 */ H::Prefix(&[mmx(C::Pavgb_mm_mmm64), ps(C::Pavgb_xmm_xmmm128), H::Invalid, H::Invalid]),
    /* E1 */ H::Invalid,
    /* E2 */ H::Invalid,
    /* E3 */ H::Invalid,
    /* E4 */ H::Invalid,
    /* E5 */ H::Invalid,
    /* E6 */ H::Invalid,
    /* E7 */ H::Prefix(&[
        H::Op(D::new(C::Movntq_m64_mm, &[M, P]).mem(MS::Qword)),
        H::Op(D::new(C::Movntdq_m128_xmm, &[M, V]).vl(128).mem(MS::Xmmword)),
        H::Invalid,
        H::Invalid,
    ]),
    /* E8 */ H::Invalid,
    /* E9 */ H::Invalid,
    /* EA */ H::Invalid,
    /* EB */ H::Prefix(&[mmx(C::Por_mm_mmm64), ps(C::Por_xmm_xmmm128), H::Invalid, H::Invalid]),
    /* EC */ H::Invalid,
    /* ED */ H::Invalid,
    /* EE */ H::Invalid,
    /* EF */ H::Prefix(&[mmx(C::Pxor_mm_mmm64), ps(C::Pxor_xmm_xmmm128), H::Invalid, H::Invalid]),
    /* F0 */ H::Invalid,
    /* F1 */ H::Invalid,
    /* F2 */ H::Invalid,
    /* F3 */ H::Invalid,
    /* F4 */ H::Prefix(&[mmx(C::Pmuludq_mm_mmm64), ps(C::Pmuludq_xmm_xmmm128), H::Invalid, H::Invalid]),
    /* F5 */ H::Invalid,
    /* F6 */ H::Prefix(&[mmx(C::Psadbw_mm_mmm64), ps(C::Psadbw_xmm_xmmm128), H::Invalid, H::Invalid]),
    /* F7 */ H::Invalid,
    /* F8 */ H::Prefix(&[mmx(C::Psubb_mm_mmm64), ps(C::Psubb_xmm_xmmm128), H::Invalid, H::Invalid]),
    /* F9 */ H::Prefix(&[mmx(C::Psubw_mm_mmm64), ps(C::Psubw_xmm_xmmm128), H::Invalid, H::Invalid]),
    /* FA */ H::Prefix(&[mmx(C::Psubd_mm_mmm64), ps(C::Psubd_xmm_xmmm128), H::Invalid, H::Invalid]),
    /* FB */ H::Prefix(&[mmx(C::Psubq_mm_mmm64), ps(C::Psubq_xmm_xmmm128), H::Invalid, H::Invalid]),
    /* FC */ H::Prefix(&[mmx(C::Paddb_mm_mmm64), ps(C::Paddb_xmm_xmmm128), H::Invalid, H::Invalid]),
    /* FD */ H::Prefix(&[mmx(C::Paddw_mm_mmm64), ps(C::Paddw_xmm_xmmm128), H::Invalid, H::Invalid]),
    /* FE */ H::Prefix(&[mmx(C::Paddd_mm_mmm64), ps(C::Paddd_xmm_xmmm128), H::Invalid, H::Invalid]),
    /* FF */ H::Invalid,
];
