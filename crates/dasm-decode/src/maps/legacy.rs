//! One-byte opcode map.
//!
//! Slots holding prefix bytes (26/2E/36/3E/64/65/66/67/F0/F2/F3), the 0F
//! escape, and the bytes the decoder classifies itself (C4/C5/62/8F vector
//! escapes, 40..4F REX) are `Invalid` here; the decoder never consults the
//! map for them in the modes where they mean something else.

use dasm_core::{Code as C, MemorySize as MS, Register as R};

use crate::table::*;
use crate::table::{Handler as H, InstrDesc as D, OpSpec::*};

/// Short branch with a rel8 displacement: operand-size-selected target in
/// 16/32-bit modes, always 64-bit in long mode.
macro_rules! short_branch {
    ($c16:ident, $c32:ident, $c64:ident) => {
        H::Mode {
            legacy: &osz2(C::$c16, C::$c32, REL8),
            x64: &op(C::$c64, REL8),
        }
    };
}

static GRP1_80: [H; 8] = [
    op8_lock(C::Add_rm8_imm8, EB_IB),
    op8_lock(C::Or_rm8_imm8, EB_IB),
    op8_lock(C::Adc_rm8_imm8, EB_IB),
    op8_lock(C::Sbb_rm8_imm8, EB_IB),
    op8_lock(C::And_rm8_imm8, EB_IB),
    op8_lock(C::Sub_rm8_imm8, EB_IB),
    op8_lock(C::Xor_rm8_imm8, EB_IB),
    op8(C::Cmp_rm8_imm8, EB_IB),
];

static GRP1_81: [H; 8] = [
    osz_lock(C::Add_rm16_imm16, C::Add_rm32_imm32, C::Add_rm64_imm32, EV_IZ),
    osz_lock(C::Or_rm16_imm16, C::Or_rm32_imm32, C::Or_rm64_imm32, EV_IZ),
    osz_lock(C::Adc_rm16_imm16, C::Adc_rm32_imm32, C::Adc_rm64_imm32, EV_IZ),
    osz_lock(C::Sbb_rm16_imm16, C::Sbb_rm32_imm32, C::Sbb_rm64_imm32, EV_IZ),
    osz_lock(C::And_rm16_imm16, C::And_rm32_imm32, C::And_rm64_imm32, EV_IZ),
    osz_lock(C::Sub_rm16_imm16, C::Sub_rm32_imm32, C::Sub_rm64_imm32, EV_IZ),
    osz_lock(C::Xor_rm16_imm16, C::Xor_rm32_imm32, C::Xor_rm64_imm32, EV_IZ),
    osz(C::Cmp_rm16_imm16, C::Cmp_rm32_imm32, C::Cmp_rm64_imm32, EV_IZ),
];

static GRP1_83: [H; 8] = [
    osz_lock(C::Add_rm16_imm8, C::Add_rm32_imm8, C::Add_rm64_imm8, EV_IBSX),
    osz_lock(C::Or_rm16_imm8, C::Or_rm32_imm8, C::Or_rm64_imm8, EV_IBSX),
    osz_lock(C::Adc_rm16_imm8, C::Adc_rm32_imm8, C::Adc_rm64_imm8, EV_IBSX),
    osz_lock(C::Sbb_rm16_imm8, C::Sbb_rm32_imm8, C::Sbb_rm64_imm8, EV_IBSX),
    osz_lock(C::And_rm16_imm8, C::And_rm32_imm8, C::And_rm64_imm8, EV_IBSX),
    osz_lock(C::Sub_rm16_imm8, C::Sub_rm32_imm8, C::Sub_rm64_imm8, EV_IBSX),
    osz_lock(C::Xor_rm16_imm8, C::Xor_rm32_imm8, C::Xor_rm64_imm8, EV_IBSX),
    osz(C::Cmp_rm16_imm8, C::Cmp_rm32_imm8, C::Cmp_rm64_imm8, EV_IBSX),
];

static GRP_8F: [H; 8] = [
    H::OpSizeD64([
        D::new(C::Pop_rm16, EV).mem(MS::Word),
        D::new(C::Pop_rm32, EV).mem(MS::Dword),
        D::new(C::Pop_rm64, EV).mem(MS::Qword),
    ]),
    H::Invalid,
    H::Invalid,
    H::Invalid,
    H::Invalid,
    H::Invalid,
    H::Invalid,
    H::Invalid,
];

static GRP2_C0: [H; 8] = [
    op8(C::Rol_rm8_imm8, EB_IB),
    op8(C::Ror_rm8_imm8, EB_IB),
    op8(C::Rcl_rm8_imm8, EB_IB),
    op8(C::Rcr_rm8_imm8, EB_IB),
    op8(C::Shl_rm8_imm8, EB_IB),
    op8(C::Shr_rm8_imm8, EB_IB),
    // SAL is an alias encoding of SHL.
    op8(C::Shl_rm8_imm8, EB_IB),
    op8(C::Sar_rm8_imm8, EB_IB),
];

static GRP2_C1: [H; 8] = [
    osz(C::Rol_rm16_imm8, C::Rol_rm32_imm8, C::Rol_rm64_imm8, &[Ev, Ib]),
    osz(C::Ror_rm16_imm8, C::Ror_rm32_imm8, C::Ror_rm64_imm8, &[Ev, Ib]),
    osz(C::Rcl_rm16_imm8, C::Rcl_rm32_imm8, C::Rcl_rm64_imm8, &[Ev, Ib]),
    osz(C::Rcr_rm16_imm8, C::Rcr_rm32_imm8, C::Rcr_rm64_imm8, &[Ev, Ib]),
    osz(C::Shl_rm16_imm8, C::Shl_rm32_imm8, C::Shl_rm64_imm8, &[Ev, Ib]),
    osz(C::Shr_rm16_imm8, C::Shr_rm32_imm8, C::Shr_rm64_imm8, &[Ev, Ib]),
    osz(C::Shl_rm16_imm8, C::Shl_rm32_imm8, C::Shl_rm64_imm8, &[Ev, Ib]),
    osz(C::Sar_rm16_imm8, C::Sar_rm32_imm8, C::Sar_rm64_imm8, &[Ev, Ib]),
];

static GRP2_D0: [H; 8] = [
    op8(C::Rol_rm8_1, EB_1),
    op8(C::Ror_rm8_1, EB_1),
    op8(C::Rcl_rm8_1, EB_1),
    op8(C::Rcr_rm8_1, EB_1),
    op8(C::Shl_rm8_1, EB_1),
    op8(C::Shr_rm8_1, EB_1),
    op8(C::Shl_rm8_1, EB_1),
    op8(C::Sar_rm8_1, EB_1),
];

static GRP2_D1: [H; 8] = [
    osz(C::Rol_rm16_1, C::Rol_rm32_1, C::Rol_rm64_1, EV_1),
    osz(C::Ror_rm16_1, C::Ror_rm32_1, C::Ror_rm64_1, EV_1),
    osz(C::Rcl_rm16_1, C::Rcl_rm32_1, C::Rcl_rm64_1, EV_1),
    osz(C::Rcr_rm16_1, C::Rcr_rm32_1, C::Rcr_rm64_1, EV_1),
    osz(C::Shl_rm16_1, C::Shl_rm32_1, C::Shl_rm64_1, EV_1),
    osz(C::Shr_rm16_1, C::Shr_rm32_1, C::Shr_rm64_1, EV_1),
    osz(C::Shl_rm16_1, C::Shl_rm32_1, C::Shl_rm64_1, EV_1),
    osz(C::Sar_rm16_1, C::Sar_rm32_1, C::Sar_rm64_1, EV_1),
];

static GRP2_D2: [H; 8] = [
    op8(C::Rol_rm8_CL, EB_CL),
    op8(C::Ror_rm8_CL, EB_CL),
    op8(C::Rcl_rm8_CL, EB_CL),
    op8(C::Rcr_rm8_CL, EB_CL),
    op8(C::Shl_rm8_CL, EB_CL),
    op8(C::Shr_rm8_CL, EB_CL),
    op8(C::Shl_rm8_CL, EB_CL),
    op8(C::Sar_rm8_CL, EB_CL),
];

static GRP2_D3: [H; 8] = [
    osz(C::Rol_rm16_CL, C::Rol_rm32_CL, C::Rol_rm64_CL, EV_CL),
    osz(C::Ror_rm16_CL, C::Ror_rm32_CL, C::Ror_rm64_CL, EV_CL),
    osz(C::Rcl_rm16_CL, C::Rcl_rm32_CL, C::Rcl_rm64_CL, EV_CL),
    osz(C::Rcr_rm16_CL, C::Rcr_rm32_CL, C::Rcr_rm64_CL, EV_CL),
    osz(C::Shl_rm16_CL, C::Shl_rm32_CL, C::Shl_rm64_CL, EV_CL),
    osz(C::Shr_rm16_CL, C::Shr_rm32_CL, C::Shr_rm64_CL, EV_CL),
    osz(C::Shl_rm16_CL, C::Shl_rm32_CL, C::Shl_rm64_CL, EV_CL),
    osz(C::Sar_rm16_CL, C::Sar_rm32_CL, C::Sar_rm64_CL, EV_CL),
];

static GRP_C6: [H; 8] = [
    op8(C::Mov_rm8_imm8, EB_IB),
    H::Invalid, H::Invalid, H::Invalid, H::Invalid, H::Invalid, H::Invalid, H::Invalid,
];

static GRP_C7: [H; 8] = [
    osz(C::Mov_rm16_imm16, C::Mov_rm32_imm32, C::Mov_rm64_imm32, EV_IZ),
    H::Invalid, H::Invalid, H::Invalid, H::Invalid, H::Invalid, H::Invalid, H::Invalid,
];

static GRP3_F6: [H; 8] = [
    op8(C::Test_rm8_imm8, EB_IB),
    op8(C::Test_rm8_imm8, EB_IB),
    op8_lock(C::Not_rm8, EB),
    op8_lock(C::Neg_rm8, EB),
    op8(C::Mul_rm8, EB),
    op8(C::Imul_rm8, EB),
    op8(C::Div_rm8, EB),
    op8(C::Idiv_rm8, EB),
];

static GRP3_F7: [H; 8] = [
    osz(C::Test_rm16_imm16, C::Test_rm32_imm32, C::Test_rm64_imm32, EV_IZ),
    osz(C::Test_rm16_imm16, C::Test_rm32_imm32, C::Test_rm64_imm32, EV_IZ),
    osz_lock(C::Not_rm16, C::Not_rm32, C::Not_rm64, EV),
    osz_lock(C::Neg_rm16, C::Neg_rm32, C::Neg_rm64, EV),
    osz(C::Mul_rm16, C::Mul_rm32, C::Mul_rm64, EV),
    osz(C::Imul_rm16, C::Imul_rm32, C::Imul_rm64, EV),
    osz(C::Div_rm16, C::Div_rm32, C::Div_rm64, EV),
    osz(C::Idiv_rm16, C::Idiv_rm32, C::Idiv_rm64, EV),
];

static GRP4_FE: [H; 8] = [
    op8_lock(C::Inc_rm8, EB),
    op8_lock(C::Dec_rm8, EB),
    H::Invalid, H::Invalid, H::Invalid, H::Invalid, H::Invalid, H::Invalid,
];

static GRP5_FF: [H; 8] = [
    osz_lock(C::Inc_rm16, C::Inc_rm32, C::Inc_rm64, EV),
    osz_lock(C::Dec_rm16, C::Dec_rm32, C::Dec_rm64, EV),
    H::OpSizeD64([
        D::new(C::Call_rm16, EV).mem(MS::Word),
        D::new(C::Call_rm32, EV).mem(MS::Dword),
        D::new(C::Call_rm64, EV).mem(MS::Qword),
    ]),
    osz3(
        D::new(C::Call_m1616, MEM).mem(MS::Ptr1616),
        D::new(C::Call_m1632, MEM).mem(MS::Ptr1632),
        D::new(C::Call_m1664, MEM).mem(MS::Ptr1664),
    ),
    H::OpSizeD64([
        D::new(C::Jmp_rm16, EV).mem(MS::Word),
        D::new(C::Jmp_rm32, EV).mem(MS::Dword),
        D::new(C::Jmp_rm64, EV).mem(MS::Qword),
    ]),
    osz3(
        D::new(C::Jmp_m1616, MEM).mem(MS::Ptr1616),
        D::new(C::Jmp_m1632, MEM).mem(MS::Ptr1632),
        D::new(C::Jmp_m1664, MEM).mem(MS::Ptr1664),
    ),
    H::OpSizeD64([
        D::new(C::Push_rm16, EV).mem(MS::Word),
        D::new(C::Push_rm32, EV).mem(MS::Dword),
        D::new(C::Push_rm64, EV).mem(MS::Qword),
    ]),
    H::Invalid,
];

// x87 escapes D8..DF. Memory forms by ModRM.reg; register forms by the full
// ModRM byte minus 0xC0. Only the commonly emitted subset is populated.

const fn sti_run(code: C) -> [H; 8] {
    [
        op(code, &[Reg(R::ST0), STi]), op(code, &[Reg(R::ST0), STi]),
        op(code, &[Reg(R::ST0), STi]), op(code, &[Reg(R::ST0), STi]),
        op(code, &[Reg(R::ST0), STi]), op(code, &[Reg(R::ST0), STi]),
        op(code, &[Reg(R::ST0), STi]), op(code, &[Reg(R::ST0), STi]),
    ]
}

const fn sti_only_run(code: C) -> [H; 8] {
    [
        op(code, &[STi]), op(code, &[STi]), op(code, &[STi]), op(code, &[STi]),
        op(code, &[STi]), op(code, &[STi]), op(code, &[STi]), op(code, &[STi]),
    ]
}

const fn sti_st0_run(code: C) -> [H; 8] {
    [
        op(code, &[STi, Reg(R::ST0)]), op(code, &[STi, Reg(R::ST0)]),
        op(code, &[STi, Reg(R::ST0)]), op(code, &[STi, Reg(R::ST0)]),
        op(code, &[STi, Reg(R::ST0)]), op(code, &[STi, Reg(R::ST0)]),
        op(code, &[STi, Reg(R::ST0)]), op(code, &[STi, Reg(R::ST0)]),
    ]
}

const INVALID8: [H; 8] = [
    H::Invalid, H::Invalid, H::Invalid, H::Invalid,
    H::Invalid, H::Invalid, H::Invalid, H::Invalid,
];

const fn fpu_reg(runs: [[H; 8]; 8]) -> [H; 64] {
    let mut t = [H::Invalid; 64];
    let mut i = 0;
    while i < 64 {
        t[i] = runs[i / 8][i % 8];
        i += 1;
    }
    t
}

static FPU_D8_MEM: [H; 8] = [
    opm(C::Fadd_m32fp, MEM, MS::Float32),
    opm(C::Fmul_m32fp, MEM, MS::Float32),
    opm(C::Fcom_m32fp, MEM, MS::Float32),
    opm(C::Fcomp_m32fp, MEM, MS::Float32),
    opm(C::Fsub_m32fp, MEM, MS::Float32),
    opm(C::Fsubr_m32fp, MEM, MS::Float32),
    opm(C::Fdiv_m32fp, MEM, MS::Float32),
    opm(C::Fdivr_m32fp, MEM, MS::Float32),
];

static FPU_D8_REG: [H; 64] = fpu_reg([
    sti_run(C::Fadd_st0_sti),
    sti_run(C::Fmul_st0_sti),
    sti_run(C::Fcom_st0_sti),
    sti_run(C::Fcomp_st0_sti),
    sti_run(C::Fsub_st0_sti),
    sti_run(C::Fsubr_st0_sti),
    sti_run(C::Fdiv_st0_sti),
    sti_run(C::Fdivr_st0_sti),
]);

static FPU_D9_MEM: [H; 8] = [
    opm(C::Fld_m32fp, MEM, MS::Float32),
    H::Invalid,
    opm(C::Fst_m32fp, MEM, MS::Float32),
    opm(C::Fstp_m32fp, MEM, MS::Float32),
    H::Invalid,
    opm(C::Fldcw_m2byte, MEM, MS::FpuEnv16),
    H::Invalid,
    opm(C::Fnstcw_m2byte, MEM, MS::FpuEnv16),
];

static FPU_D9_REG: [H; 64] = {
    let mut t = fpu_reg([
        sti_only_run(C::Fld_sti),
        sti_only_run(C::Fxch_sti),
        INVALID8,
        INVALID8,
        INVALID8,
        INVALID8,
        INVALID8,
        INVALID8,
    ]);
    t[0x10] = op(C::Fnop, NONE); // D9 D0
    t[0x20] = op(C::Fchs, NONE); // D9 E0
    t[0x21] = op(C::Fabs, NONE); // D9 E1
    t[0x24] = op(C::Ftst, NONE); // D9 E4
    t[0x25] = op(C::Fxam, NONE); // D9 E5
    t[0x28] = op(C::Fld1, NONE); // D9 E8
    t[0x2E] = op(C::Fldz, NONE); // D9 EE
    t
};

static FPU_DD_MEM: [H; 8] = [
    opm(C::Fld_m64fp, MEM, MS::Float64),
    H::Invalid,
    opm(C::Fst_m64fp, MEM, MS::Float64),
    opm(C::Fstp_m64fp, MEM, MS::Float64),
    H::Invalid, H::Invalid, H::Invalid, H::Invalid,
];

static FPU_DD_REG: [H; 64] = fpu_reg([
    sti_only_run(C::Ffree_sti),
    INVALID8,
    sti_only_run(C::Fst_sti),
    sti_only_run(C::Fstp_sti),
    INVALID8,
    INVALID8,
    INVALID8,
    INVALID8,
]);

static FPU_DE_REG: [H; 64] = {
    let mut t = fpu_reg([
        sti_st0_run(C::Faddp_sti_st0),
        sti_st0_run(C::Fmulp_sti_st0),
        INVALID8,
        INVALID8,
        sti_st0_run(C::Fsubrp_sti_st0),
        sti_st0_run(C::Fsubp_sti_st0),
        sti_st0_run(C::Fdivrp_sti_st0),
        sti_st0_run(C::Fdivp_sti_st0),
    ]);
    t[0x19] = op(C::Fcompp, NONE); // DE D9
    t
};

static FPU_DF_REG: [H; 64] = {
    let mut t = [H::Invalid; 64];
    t[0x20] = op(C::Fnstsw_AX, &[Reg(R::AX)]); // DF E0
    t
};

/// The one-byte opcode map.
pub(crate) static MAP_LEGACY: [H; 256] = [
    /* 00 */ op8_lock(C::Add_rm8_r8, EB_GB),
    /* 01 */ osz_lock(C::Add_rm16_r16, C::Add_rm32_r32, C::Add_rm64_r64, EV_GV),
    /* 02 */ op8(C::Add_r8_rm8, GB_EB),
    /* 03 */ osz(C::Add_r16_rm16, C::Add_r32_rm32, C::Add_r64_rm64, GV_EV),
    /* 04 */ op(C::Add_AL_imm8, AL_IB),
    /* 05 */ osz3(D::new(C::Add_AX_imm16, AX_IW), D::new(C::Add_EAX_imm32, EAX_IZ), D::new(C::Add_RAX_imm32, RAX_IZ)),
    /* 06 */ invalid64(&op(C::Push_ES, &[Reg(R::ES)])),
    /* 07 */ invalid64(&op(C::Pop_ES, &[Reg(R::ES)])),
    /* 08 */ op8_lock(C::Or_rm8_r8, EB_GB),
    /* 09 */ osz_lock(C::Or_rm16_r16, C::Or_rm32_r32, C::Or_rm64_r64, EV_GV),
    /* 0A */ op8(C::Or_r8_rm8, GB_EB),
    /* 0B */ osz(C::Or_r16_rm16, C::Or_r32_rm32, C::Or_r64_rm64, GV_EV),
    /* 0C */ op(C::Or_AL_imm8, AL_IB),
    /* 0D */ osz3(D::new(C::Or_AX_imm16, AX_IW), D::new(C::Or_EAX_imm32, EAX_IZ), D::new(C::Or_RAX_imm32, RAX_IZ)),
    /* 0E */ invalid64(&op(C::Push_CS, &[Reg(R::CS)])),
    /* 0F */ H::Invalid, // escape to the 0F map
    /* 10 */ op8_lock(C::Adc_rm8_r8, EB_GB),
    /* 11 */ osz_lock(C::Adc_rm16_r16, C::Adc_rm32_r32, C::Adc_rm64_r64, EV_GV),
    /* 12 */ op8(C::Adc_r8_rm8, GB_EB),
    /* 13 */ osz(C::Adc_r16_rm16, C::Adc_r32_rm32, C::Adc_r64_rm64, GV_EV),
    /* 14 */ op(C::Adc_AL_imm8, AL_IB),
    /* 15 */ osz3(D::new(C::Adc_AX_imm16, AX_IW), D::new(C::Adc_EAX_imm32, EAX_IZ), D::new(C::Adc_RAX_imm32, RAX_IZ)),
    /* 16 */ invalid64(&op(C::Push_SS, &[Reg(R::SS)])),
    /* 17 */ invalid64(&op(C::Pop_SS, &[Reg(R::SS)])),
    /* 18 */ op8_lock(C::Sbb_rm8_r8, EB_GB),
    /* 19 */ osz_lock(C::Sbb_rm16_r16, C::Sbb_rm32_r32, C::Sbb_rm64_r64, EV_GV),
    /* 1A */ op8(C::Sbb_r8_rm8, GB_EB),
    /* 1B */ osz(C::Sbb_r16_rm16, C::Sbb_r32_rm32, C::Sbb_r64_rm64, GV_EV),
    /* 1C */ op(C::Sbb_AL_imm8, AL_IB),
    /* 1D */ osz3(D::new(C::Sbb_AX_imm16, AX_IW), D::new(C::Sbb_EAX_imm32, EAX_IZ), D::new(C::Sbb_RAX_imm32, RAX_IZ)),
    /* 1E */ invalid64(&op(C::Push_DS, &[Reg(R::DS)])),
    /* 1F */ invalid64(&op(C::Pop_DS, &[Reg(R::DS)])),
    /* 20 */ op8_lock(C::And_rm8_r8, EB_GB),
    /* 21 */ osz_lock(C::And_rm16_r16, C::And_rm32_r32, C::And_rm64_r64, EV_GV),
    /* 22 */ op8(C::And_r8_rm8, GB_EB),
    /* 23 */ osz(C::And_r16_rm16, C::And_r32_rm32, C::And_r64_rm64, GV_EV),
    /* 24 */ op(C::And_AL_imm8, AL_IB),
    /* 25 */ osz3(D::new(C::And_AX_imm16, AX_IW), D::new(C::And_EAX_imm32, EAX_IZ), D::new(C::And_RAX_imm32, RAX_IZ)),
    /* 26 */ H::Invalid, // ES prefix
    /* 27 */ invalid64(&op(C::Daa, NONE)),
    /* 28 */ op8_lock(C::Sub_rm8_r8, EB_GB),
    /* 29 */ osz_lock(C::Sub_rm16_r16, C::Sub_rm32_r32, C::Sub_rm64_r64, EV_GV),
    /* 2A */ op8(C::Sub_r8_rm8, GB_EB),
    /* 2B */ osz(C::Sub_r16_rm16, C::Sub_r32_rm32, C::Sub_r64_rm64, GV_EV),
    /* 2C */ op(C::Sub_AL_imm8, AL_IB),
    /* 2D */ osz3(D::new(C::Sub_AX_imm16, AX_IW), D::new(C::Sub_EAX_imm32, EAX_IZ), D::new(C::Sub_RAX_imm32, RAX_IZ)),
    /* 2E */ H::Invalid, // CS prefix
    /* 2F */ invalid64(&op(C::Das, NONE)),
    /* 30 */ op8_lock(C::Xor_rm8_r8, EB_GB),
    /* 31 */ osz_lock(C::Xor_rm16_r16, C::Xor_rm32_r32, C::Xor_rm64_r64, EV_GV),
    /* 32 */ op8(C::Xor_r8_rm8, GB_EB),
    /* 33 */ osz(C::Xor_r16_rm16, C::Xor_r32_rm32, C::Xor_r64_rm64, GV_EV),
    /* 34 */ op(C::Xor_AL_imm8, AL_IB),
    /* 35 */ osz3(D::new(C::Xor_AX_imm16, AX_IW), D::new(C::Xor_EAX_imm32, EAX_IZ), D::new(C::Xor_RAX_imm32, RAX_IZ)),
    /* 36 */ H::Invalid, // SS prefix
    /* 37 */ invalid64(&op(C::Aaa, NONE)),
    /* 38 */ op8(C::Cmp_rm8_r8, EB_GB),
    /* 39 */ osz(C::Cmp_rm16_r16, C::Cmp_rm32_r32, C::Cmp_rm64_r64, EV_GV),
    /* 3A */ op8(C::Cmp_r8_rm8, GB_EB),
    /* 3B */ osz(C::Cmp_r16_rm16, C::Cmp_r32_rm32, C::Cmp_r64_rm64, GV_EV),
    /* 3C */ op(C::Cmp_AL_imm8, AL_IB),
    /* 3D */ osz3(D::new(C::Cmp_AX_imm16, AX_IW), D::new(C::Cmp_EAX_imm32, EAX_IZ), D::new(C::Cmp_RAX_imm32, RAX_IZ)),
    /* 3E */ H::Invalid, // DS prefix
    /* 3F */ invalid64(&op(C::Aas, NONE)),
    // 40..4F: inc/dec r in 16/32-bit modes, REX in 64-bit mode.
    /* 40 */ invalid64(&osz2(C::Inc_r16, C::Inc_r32, &[OpReg16])),
    /* 41 */ invalid64(&osz2(C::Inc_r16, C::Inc_r32, &[OpReg16])),
    /* 42 */ invalid64(&osz2(C::Inc_r16, C::Inc_r32, &[OpReg16])),
    /* 43 */ invalid64(&osz2(C::Inc_r16, C::Inc_r32, &[OpReg16])),
    /* 44 */ invalid64(&osz2(C::Inc_r16, C::Inc_r32, &[OpReg16])),
    /* 45 */ invalid64(&osz2(C::Inc_r16, C::Inc_r32, &[OpReg16])),
    /* 46 */ invalid64(&osz2(C::Inc_r16, C::Inc_r32, &[OpReg16])),
    /* 47 */ invalid64(&osz2(C::Inc_r16, C::Inc_r32, &[OpReg16])),
    /* 48 */ invalid64(&osz2(C::Dec_r16, C::Dec_r32, &[OpReg16])),
    /* 49 */ invalid64(&osz2(C::Dec_r16, C::Dec_r32, &[OpReg16])),
    /* 4A */ invalid64(&osz2(C::Dec_r16, C::Dec_r32, &[OpReg16])),
    /* 4B */ invalid64(&osz2(C::Dec_r16, C::Dec_r32, &[OpReg16])),
    /* 4C */ invalid64(&osz2(C::Dec_r16, C::Dec_r32, &[OpReg16])),
    /* 4D */ invalid64(&osz2(C::Dec_r16, C::Dec_r32, &[OpReg16])),
    /* 4E */ invalid64(&osz2(C::Dec_r16, C::Dec_r32, &[OpReg16])),
    /* 4F */ invalid64(&osz2(C::Dec_r16, C::Dec_r32, &[OpReg16])),
    /* 50 */ H::OpSizeD64([D::new(C::Push_r16, &[OpReg16]), D::new(C::Push_r32, &[OpReg32]), D::new(C::Push_r64, &[OpReg64])]),
    /* 51 */ H::OpSizeD64([D::new(C::Push_r16, &[OpReg16]), D::new(C::Push_r32, &[OpReg32]), D::new(C::Push_r64, &[OpReg64])]),
    /* 52 */ H::OpSizeD64([D::new(C::Push_r16, &[OpReg16]), D::new(C::Push_r32, &[OpReg32]), D::new(C::Push_r64, &[OpReg64])]),
    /* 53 */ H::OpSizeD64([D::new(C::Push_r16, &[OpReg16]), D::new(C::Push_r32, &[OpReg32]), D::new(C::Push_r64, &[OpReg64])]),
    /* 54 */ H::OpSizeD64([D::new(C::Push_r16, &[OpReg16]), D::new(C::Push_r32, &[OpReg32]), D::new(C::Push_r64, &[OpReg64])]),
    /* 55 */ H::OpSizeD64([D::new(C::Push_r16, &[OpReg16]), D::new(C::Push_r32, &[OpReg32]), D::new(C::Push_r64, &[OpReg64])]),
    /* 56 */ H::OpSizeD64([D::new(C::Push_r16, &[OpReg16]), D::new(C::Push_r32, &[OpReg32]), D::new(C::Push_r64, &[OpReg64])]),
    /* 57 */ H::OpSizeD64([D::new(C::Push_r16, &[OpReg16]), D::new(C::Push_r32, &[OpReg32]), D::new(C::Push_r64, &[OpReg64])]),
    /* 58 */ H::OpSizeD64([D::new(C::Pop_r16, &[OpReg16]), D::new(C::Pop_r32, &[OpReg32]), D::new(C::Pop_r64, &[OpReg64])]),
    /* 59 */ H::OpSizeD64([D::new(C::Pop_r16, &[OpReg16]), D::new(C::Pop_r32, &[OpReg32]), D::new(C::Pop_r64, &[OpReg64])]),
    /* 5A */ H::OpSizeD64([D::new(C::Pop_r16, &[OpReg16]), D::new(C::Pop_r32, &[OpReg32]), D::new(C::Pop_r64, &[OpReg64])]),
    /* 5B */ H::OpSizeD64([D::new(C::Pop_r16, &[OpReg16]), D::new(C::Pop_r32, &[OpReg32]), D::new(C::Pop_r64, &[OpReg64])]),
    /* 5C */ H::OpSizeD64([D::new(C::Pop_r16, &[OpReg16]), D::new(C::Pop_r32, &[OpReg32]), D::new(C::Pop_r64, &[OpReg64])]),
    /* 5D */ H::OpSizeD64([D::new(C::Pop_r16, &[OpReg16]), D::new(C::Pop_r32, &[OpReg32]), D::new(C::Pop_r64, &[OpReg64])]),
    /* 5E */ H::OpSizeD64([D::new(C::Pop_r16, &[OpReg16]), D::new(C::Pop_r32, &[OpReg32]), D::new(C::Pop_r64, &[OpReg64])]),
    /* 5F */ H::OpSizeD64([D::new(C::Pop_r16, &[OpReg16]), D::new(C::Pop_r32, &[OpReg32]), D::new(C::Pop_r64, &[OpReg64])]),
    /* 60 */ invalid64(&osz2(C::Pushaw, C::Pushad, NONE)),
    /* 61 */ invalid64(&osz2(C::Popaw, C::Popad, NONE)),
    /* 62 */ invalid64(&osz3(
        D::new(C::Bound_r16_m1616, GV_M).mem(MS::Dword),
        D::new(C::Bound_r32_m3232, GV_M).mem(MS::Qword),
        D::new(C::Bound_r32_m3232, GV_M).mem(MS::Qword),
    )), // EVEX escape in 64-bit mode (decoder-classified)
    /* 63 */ H::Mode {
        legacy: &opm(C::Arpl_rm16_r16, &[Ew, Gw], MS::Word),
        x64: &osz3(
            D::new(C::Movsxd_r16_rm16, &[Gv, Ew]).mem(MS::Word),
            D::new(C::Movsxd_r32_rm32, &[Gv, Ed]).mem(MS::Dword),
            D::new(C::Movsxd_r64_rm32, &[Gv, Ed]).mem(MS::Dword),
        ),
    },
    /* 64 */ H::Invalid, // FS prefix
    /* 65 */ H::Invalid, // GS prefix
    /* 66 */ H::Invalid, // operand size prefix
    /* 67 */ H::Invalid, // address size prefix
    /* 68 */ H::OpSizeD64([D::new(C::Push_imm16, &[Iw]), D::new(C::Pushd_imm32, &[Iz]), D::new(C::Pushq_imm32, &[Iz])]),
    /* 69 */ osz(C::Imul_r16_rm16_imm16, C::Imul_r32_rm32_imm32, C::Imul_r64_rm64_imm32, &[Gv, Ev, Iz]),
    /* 6A */ H::OpSizeD64([D::new(C::Pushw_imm8, &[IbSx]), D::new(C::Pushd_imm8, &[IbSx]), D::new(C::Pushq_imm8, &[IbSx])]),
    /* 6B */ osz(C::Imul_r16_rm16_imm8, C::Imul_r32_rm32_imm8, C::Imul_r64_rm64_imm8, &[Gv, Ev, IbSx]),
    /* 6C */ op(C::Insb, NONE),
    /* 6D */ osz2(C::Insw, C::Insd, NONE),
    /* 6E */ op(C::Outsb, NONE),
    /* 6F */ osz2(C::Outsw, C::Outsd, NONE),
    /* 70 */ short_branch!(Jo_rel8_16, Jo_rel8_32, Jo_rel8_64),
    /* 71 */ short_branch!(Jno_rel8_16, Jno_rel8_32, Jno_rel8_64),
    /* 72 */ short_branch!(Jb_rel8_16, Jb_rel8_32, Jb_rel8_64),
    /* 73 */ short_branch!(Jae_rel8_16, Jae_rel8_32, Jae_rel8_64),
    /* 74 */ short_branch!(Je_rel8_16, Je_rel8_32, Je_rel8_64),
    /* 75 */ short_branch!(Jne_rel8_16, Jne_rel8_32, Jne_rel8_64),
    /* 76 */ short_branch!(Jbe_rel8_16, Jbe_rel8_32, Jbe_rel8_64),
    /* 77 */ short_branch!(Ja_rel8_16, Ja_rel8_32, Ja_rel8_64),
    /* 78 */ short_branch!(Js_rel8_16, Js_rel8_32, Js_rel8_64),
    /* 79 */ short_branch!(Jns_rel8_16, Jns_rel8_32, Jns_rel8_64),
    /* 7A */ short_branch!(Jp_rel8_16, Jp_rel8_32, Jp_rel8_64),
    /* 7B */ short_branch!(Jnp_rel8_16, Jnp_rel8_32, Jnp_rel8_64),
    /* 7C */ short_branch!(Jl_rel8_16, Jl_rel8_32, Jl_rel8_64),
    /* 7D */ short_branch!(Jge_rel8_16, Jge_rel8_32, Jge_rel8_64),
    /* 7E */ short_branch!(Jle_rel8_16, Jle_rel8_32, Jle_rel8_64),
    /* 7F */ short_branch!(Jg_rel8_16, Jg_rel8_32, Jg_rel8_64),
    /* 80 */ H::Group(&GRP1_80),
    /* 81 */ H::Group(&GRP1_81),
    /* 82 */ invalid64(&H::Group(&GRP1_80)), // alias of 80 outside long mode
    /* 83 */ H::Group(&GRP1_83),
    /* 84 */ op8(C::Test_rm8_r8, EB_GB),
    /* 85 */ osz(C::Test_rm16_r16, C::Test_rm32_r32, C::Test_rm64_r64, EV_GV),
    /* 86 */ op8_lock(C::Xchg_rm8_r8, EB_GB),
    /* 87 */ osz_lock(C::Xchg_rm16_r16, C::Xchg_rm32_r32, C::Xchg_rm64_r64, EV_GV),
    /* 88 */ op8(C::Mov_rm8_r8, EB_GB),
    /* 89 */ osz(C::Mov_rm16_r16, C::Mov_rm32_r32, C::Mov_rm64_r64, EV_GV),
    /* 8A */ op8(C::Mov_r8_rm8, GB_EB),
    /* 8B */ osz(C::Mov_r16_rm16, C::Mov_r32_rm32, C::Mov_r64_rm64, GV_EV),
    /* 8C */ osz3(
        D::new(C::Mov_rm16_Sreg, &[Ev, Sreg]).mem(MS::Word),
        D::new(C::Mov_rm32_Sreg, &[Ev, Sreg]).mem(MS::Word),
        D::new(C::Mov_rm64_Sreg, &[Ev, Sreg]).mem(MS::Word),
    ),
    /* 8D */ osz3(D::new(C::Lea_r16_m, GV_M), D::new(C::Lea_r32_m, GV_M), D::new(C::Lea_r64_m, GV_M)),
    /* 8E */ opm(C::Mov_Sreg_rm16, &[Sreg, Ew], MS::Word),
    /* 8F */ H::Group(&GRP_8F), // XOP escape is decoder-classified
    /* 90 */ H::Prefix(&[op(C::Nop, NONE), op(C::Nop, NONE), op(C::Pause, NONE), op(C::Nop, NONE)]),
    /* 91 */ osz3(D::new(C::Xchg_r16_AX, &[OpReg16, Reg(R::AX)]), D::new(C::Xchg_r32_EAX, &[OpReg32, Reg(R::EAX)]), D::new(C::Xchg_r64_RAX, &[OpReg64, Reg(R::RAX)])),
    /* 92 */ osz3(D::new(C::Xchg_r16_AX, &[OpReg16, Reg(R::AX)]), D::new(C::Xchg_r32_EAX, &[OpReg32, Reg(R::EAX)]), D::new(C::Xchg_r64_RAX, &[OpReg64, Reg(R::RAX)])),
    /* 93 */ osz3(D::new(C::Xchg_r16_AX, &[OpReg16, Reg(R::AX)]), D::new(C::Xchg_r32_EAX, &[OpReg32, Reg(R::EAX)]), D::new(C::Xchg_r64_RAX, &[OpReg64, Reg(R::RAX)])),
    /* 94 */ osz3(D::new(C::Xchg_r16_AX, &[OpReg16, Reg(R::AX)]), D::new(C::Xchg_r32_EAX, &[OpReg32, Reg(R::EAX)]), D::new(C::Xchg_r64_RAX, &[OpReg64, Reg(R::RAX)])),
    /* 95 */ osz3(D::new(C::Xchg_r16_AX, &[OpReg16, Reg(R::AX)]), D::new(C::Xchg_r32_EAX, &[OpReg32, Reg(R::EAX)]), D::new(C::Xchg_r64_RAX, &[OpReg64, Reg(R::RAX)])),
    /* 96 */ osz3(D::new(C::Xchg_r16_AX, &[OpReg16, Reg(R::AX)]), D::new(C::Xchg_r32_EAX, &[OpReg32, Reg(R::EAX)]), D::new(C::Xchg_r64_RAX, &[OpReg64, Reg(R::RAX)])),
    /* 97 */ osz3(D::new(C::Xchg_r16_AX, &[OpReg16, Reg(R::AX)]), D::new(C::Xchg_r32_EAX, &[OpReg32, Reg(R::EAX)]), D::new(C::Xchg_r64_RAX, &[OpReg64, Reg(R::RAX)])),
    /* 98 */ osz3(D::new(C::Cbw, NONE), D::new(C::Cwde, NONE), D::new(C::Cdqe, NONE)),
    /* 99 */ osz3(D::new(C::Cwd, NONE), D::new(C::Cdq, NONE), D::new(C::Cqo, NONE)),
    /* 9A */ invalid64(&osz2(C::Call_ptr1616, C::Call_ptr1632, &[Ap])),
    /* 9B */ op(C::Wait, NONE),
    /* 9C */ H::OpSizeD64([D::new(C::Pushfw, NONE), D::new(C::Pushfd, NONE), D::new(C::Pushfq, NONE)]),
    /* 9D */ H::OpSizeD64([D::new(C::Popfw, NONE), D::new(C::Popfd, NONE), D::new(C::Popfq, NONE)]),
    /* 9E */ op(C::Sahf, NONE),
    /* 9F */ op(C::Lahf, NONE),
    /* A0 */ opm(C::Mov_AL_moffs8, &[Reg(R::AL), Moffs], MS::Byte),
    /* A1 */ osz3(
        D::new(C::Mov_AX_moffs16, &[Reg(R::AX), Moffs]).mem(MS::Word),
        D::new(C::Mov_EAX_moffs32, &[Reg(R::EAX), Moffs]).mem(MS::Dword),
        D::new(C::Mov_RAX_moffs64, &[Reg(R::RAX), Moffs]).mem(MS::Qword),
    ),
    /* A2 */ opm(C::Mov_moffs8_AL, &[Moffs, Reg(R::AL)], MS::Byte),
    /* A3 */ osz3(
        D::new(C::Mov_moffs16_AX, &[Moffs, Reg(R::AX)]).mem(MS::Word),
        D::new(C::Mov_moffs32_EAX, &[Moffs, Reg(R::EAX)]).mem(MS::Dword),
        D::new(C::Mov_moffs64_RAX, &[Moffs, Reg(R::RAX)]).mem(MS::Qword),
    ),
    /* A4 */ op(C::Movsb, NONE),
    /* A5 */ osz3(D::new(C::Movsw, NONE), D::new(C::Movsd, NONE), D::new(C::Movsq, NONE)),
    /* A6 */ op(C::Cmpsb, NONE),
    /* A7 */ osz3(D::new(C::Cmpsw, NONE), D::new(C::Cmpsd, NONE), D::new(C::Cmpsq, NONE)),
    /* A8 */ op(C::Test_AL_imm8, AL_IB),
    /* A9 */ osz3(D::new(C::Test_AX_imm16, AX_IW), D::new(C::Test_EAX_imm32, EAX_IZ), D::new(C::Test_RAX_imm32, RAX_IZ)),
    /* AA */ op(C::Stosb, NONE),
    /* AB */ osz3(D::new(C::Stosw, NONE), D::new(C::Stosd, NONE), D::new(C::Stosq, NONE)),
    /* AC */ op(C::Lodsb, NONE),
    /* AD */ osz3(D::new(C::Lodsw, NONE), D::new(C::Lodsd, NONE), D::new(C::Lodsq, NONE)),
    /* AE */ op(C::Scasb, NONE),
    /* AF */ osz3(D::new(C::Scasw, NONE), D::new(C::Scasd, NONE), D::new(C::Scasq, NONE)),
    /* B0 */ op(C::Mov_r8_imm8, &[OpReg8, Ib]),
    /* B1 */ op(C::Mov_r8_imm8, &[OpReg8, Ib]),
    /* B2 */ op(C::Mov_r8_imm8, &[OpReg8, Ib]),
    /* B3 */ op(C::Mov_r8_imm8, &[OpReg8, Ib]),
    /* B4 */ op(C::Mov_r8_imm8, &[OpReg8, Ib]),
    /* B5 */ op(C::Mov_r8_imm8, &[OpReg8, Ib]),
    /* B6 */ op(C::Mov_r8_imm8, &[OpReg8, Ib]),
    /* B7 */ op(C::Mov_r8_imm8, &[OpReg8, Ib]),
    /* B8 */ osz3(D::new(C::Mov_r16_imm16, &[OpReg16, Iw]), D::new(C::Mov_r32_imm32, &[OpReg32, Iz]), D::new(C::Mov_r64_imm64, &[OpReg64, Iq])),
    /* B9 */ osz3(D::new(C::Mov_r16_imm16, &[OpReg16, Iw]), D::new(C::Mov_r32_imm32, &[OpReg32, Iz]), D::new(C::Mov_r64_imm64, &[OpReg64, Iq])),
    /* BA */ osz3(D::new(C::Mov_r16_imm16, &[OpReg16, Iw]), D::new(C::Mov_r32_imm32, &[OpReg32, Iz]), D::new(C::Mov_r64_imm64, &[OpReg64, Iq])),
    /* BB */ osz3(D::new(C::Mov_r16_imm16, &[OpReg16, Iw]), D::new(C::Mov_r32_imm32, &[OpReg32, Iz]), D::new(C::Mov_r64_imm64, &[OpReg64, Iq])),
    /* BC */ osz3(D::new(C::Mov_r16_imm16, &[OpReg16, Iw]), D::new(C::Mov_r32_imm32, &[OpReg32, Iz]), D::new(C::Mov_r64_imm64, &[OpReg64, Iq])),
    /* BD */ osz3(D::new(C::Mov_r16_imm16, &[OpReg16, Iw]), D::new(C::Mov_r32_imm32, &[OpReg32, Iz]), D::new(C::Mov_r64_imm64, &[OpReg64, Iq])),
    /* BE */ osz3(D::new(C::Mov_r16_imm16, &[OpReg16, Iw]), D::new(C::Mov_r32_imm32, &[OpReg32, Iz]), D::new(C::Mov_r64_imm64, &[OpReg64, Iq])),
    /* BF */ osz3(D::new(C::Mov_r16_imm16, &[OpReg16, Iw]), D::new(C::Mov_r32_imm32, &[OpReg32, Iz]), D::new(C::Mov_r64_imm64, &[OpReg64, Iq])),
    /* C0 */ H::Group(&GRP2_C0),
    /* C1 */ H::Group(&GRP2_C1),
    /* C2 */ H::OpSizeD64([D::new(C::Retnw_imm16, &[Iw]), D::new(C::Retnd_imm16, &[Iw]), D::new(C::Retnq_imm16, &[Iw])]),
    /* C3 */ H::OpSizeD64([D::new(C::Retnw, NONE), D::new(C::Retnd, NONE), D::new(C::Retnq, NONE)]),
    /* C4 */ invalid64(&osz2(C::Les_r16_m1616, C::Les_r32_m1632, GV_M)), // VEX escape (decoder-classified)
    /* C5 */ invalid64(&osz2(C::Lds_r16_m1616, C::Lds_r32_m1632, GV_M)), // VEX escape (decoder-classified)
    /* C6 */ H::Group(&GRP_C6),
    /* C7 */ H::Group(&GRP_C7),
    /* C8 */ H::OpSizeD64([
        D::new(C::Enterw_imm16_imm8, &[Iw, Ib2]),
        D::new(C::Enterd_imm16_imm8, &[Iw, Ib2]),
        D::new(C::Enterq_imm16_imm8, &[Iw, Ib2]),
    ]),
    /* C9 */ op(C::Leave, NONE),
    /* CA */ osz3(D::new(C::Retfw_imm16, &[Iw]), D::new(C::Retfd_imm16, &[Iw]), D::new(C::Retfq_imm16, &[Iw])),
    /* CB */ osz3(D::new(C::Retfw, NONE), D::new(C::Retfd, NONE), D::new(C::Retfq, NONE)),
    /* CC */ op(C::Int3, NONE),
    /* CD */ op(C::Int_imm8, &[Ib]),
    /* CE */ invalid64(&op(C::Into, NONE)),
    /* CF */ osz3(D::new(C::Iretw, NONE), D::new(C::Iretd, NONE), D::new(C::Iretq, NONE)),
    /* D0 */ H::Group(&GRP2_D0),
    /* D1 */ H::Group(&GRP2_D1),
    /* D2 */ H::Group(&GRP2_D2),
    /* D3 */ H::Group(&GRP2_D3),
    /* D4 */ invalid64(&op(C::Aam_imm8, &[Ib])),
    /* D5 */ invalid64(&op(C::Aad_imm8, &[Ib])),
    /* D6 */ H::Invalid,
    /* D7 */ op(C::Xlatb, NONE),
    /* D8 */ H::Fpu { mem: &FPU_D8_MEM, reg: &FPU_D8_REG },
    /* D9 */ H::Fpu { mem: &FPU_D9_MEM, reg: &FPU_D9_REG },
    /* DA */ H::Fpu { mem: &INVALID8, reg: &[H::Invalid; 64] },
    /* DB */ H::Fpu { mem: &INVALID8, reg: &[H::Invalid; 64] },
    /* DC */ H::Fpu { mem: &INVALID8, reg: &[H::Invalid; 64] },
    /* DD */ H::Fpu { mem: &FPU_DD_MEM, reg: &FPU_DD_REG },
    /* DE */ H::Fpu { mem: &INVALID8, reg: &FPU_DE_REG },
    /* DF */ H::Fpu { mem: &INVALID8, reg: &FPU_DF_REG },
    /* E0 */ short_branch!(Loopne_rel8_16, Loopne_rel8_32, Loopne_rel8_64),
    /* E1 */ short_branch!(Loope_rel8_16, Loope_rel8_32, Loope_rel8_64),
    /* E2 */ short_branch!(Loop_rel8_16, Loop_rel8_32, Loop_rel8_64),
    /* E3 */ H::AddrSize(&[
        // a16: jcxz, target size by operand size
        osz2(C::Jcxz_rel8_16, C::Jcxz_rel8_32, REL8),
        // a32: jecxz
        H::Mode {
            legacy: &osz2(C::Jecxz_rel8_16, C::Jecxz_rel8_32, REL8),
            x64: &op(C::Jecxz_rel8_64, REL8),
        },
        // a64: jrcxz
        op(C::Jrcxz_rel8_64, REL8),
    ]),
    /* E4 */ op(C::In_AL_imm8, AL_IB),
    /* E5 */ osz3(D::new(C::In_AX_imm8, &[Reg(R::AX), Ib]), D::new(C::In_EAX_imm8, &[Reg(R::EAX), Ib]), D::new(C::In_EAX_imm8, &[Reg(R::EAX), Ib])),
    /* E6 */ op(C::Out_imm8_AL, &[Ib, Reg(R::AL)]),
    /* E7 */ osz3(D::new(C::Out_imm8_AX, &[Ib, Reg(R::AX)]), D::new(C::Out_imm8_EAX, &[Ib, Reg(R::EAX)]), D::new(C::Out_imm8_EAX, &[Ib, Reg(R::EAX)])),
    /* E8 */ H::Mode {
        legacy: &osz2(C::Call_rel16, C::Call_rel32_32, RELZ),
        x64: &op(C::Call_rel32_64, RELZ),
    },
    /* E9 */ H::Mode {
        legacy: &osz2(C::Jmp_rel16, C::Jmp_rel32_32, RELZ),
        x64: &op(C::Jmp_rel32_64, RELZ),
    },
    /* EA */ invalid64(&osz2(C::Jmp_ptr1616, C::Jmp_ptr1632, &[Ap])),
    /* EB */ H::Mode {
        legacy: &osz2(C::Jmp_rel8_16, C::Jmp_rel8_32, REL8),
        x64: &op(C::Jmp_rel8_64, REL8),
    },
    /* EC */ op(C::In_AL_DX, &[Reg(R::AL), Reg(R::DX)]),
    /* ED */ osz3(
        D::new(C::In_AX_DX, &[Reg(R::AX), Reg(R::DX)]),
        D::new(C::In_EAX_DX, &[Reg(R::EAX), Reg(R::DX)]),
        D::new(C::In_EAX_DX, &[Reg(R::EAX), Reg(R::DX)]),
    ),
    /* EE */ op(C::Out_DX_AL, &[Reg(R::DX), Reg(R::AL)]),
    /* EF */ osz3(
        D::new(C::Out_DX_AX, &[Reg(R::DX), Reg(R::AX)]),
        D::new(C::Out_DX_EAX, &[Reg(R::DX), Reg(R::EAX)]),
        D::new(C::Out_DX_EAX, &[Reg(R::DX), Reg(R::EAX)]),
    ),
    /* F0 */ H::Invalid, // LOCK prefix
    /* F1 */ op(C::Int1, NONE),
    /* F2 */ H::Invalid, // REPNE prefix
    /* F3 */ H::Invalid, // REP prefix
    /* F4 */ op(C::Hlt, NONE),
    /* F5 */ op(C::Cmc, NONE),
    /* F6 */ H::Group(&GRP3_F6),
    /* F7 */ H::Group(&GRP3_F7),
    /* F8 */ op(C::Clc, NONE),
    /* F9 */ op(C::Stc, NONE),
    /* FA */ op(C::Cli, NONE),
    /* FB */ op(C::Sti, NONE),
    /* FC */ op(C::Cld, NONE),
    /* FD */ op(C::Std, NONE),
    /* FE */ H::Group(&GRP4_FE),
    /* FF */ H::Group(&GRP5_FF),
];
