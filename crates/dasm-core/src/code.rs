//! Instruction codes.
//!
//! One [`Code`] value per distinct encoded form (mnemonic and operand shape),
//! not per mnemonic string. The table is generated-style data: the macro
//! builds the enum, the mnemonic lookup and the `ALL` slice in one pass.

macro_rules! codes {
    ($(($v:ident, $mn:literal)),+ $(,)?) => {
        /// Identifies the exact instruction form a decoded [`crate::Instruction`] carries.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[allow(non_camel_case_types)]
        #[repr(u16)]
        pub enum Code {
            /// Not a valid instruction; also the value of a default-constructed instruction.
            #[default]
            INVALID = 0,
            $($v),+
        }

        /// Lower-case mnemonic per code, indexed by `Code as usize`.
        pub(crate) static MNEMONICS: &[&str] = &["(bad)", $($mn),+];

        impl Code {
            /// Every defined code, `INVALID` included.
            pub const ALL: &'static [Code] = &[Code::INVALID, $(Code::$v),+];
        }
    };
}

codes! {
    // ---- one-byte map: ALU families --------------------------------------
    (Add_rm8_r8, "add"), (Add_rm16_r16, "add"), (Add_rm32_r32, "add"), (Add_rm64_r64, "add"),
    (Add_r8_rm8, "add"), (Add_r16_rm16, "add"), (Add_r32_rm32, "add"), (Add_r64_rm64, "add"),
    (Add_AL_imm8, "add"), (Add_AX_imm16, "add"), (Add_EAX_imm32, "add"), (Add_RAX_imm32, "add"),
    (Add_rm8_imm8, "add"), (Add_rm16_imm16, "add"), (Add_rm32_imm32, "add"), (Add_rm64_imm32, "add"),
    (Add_rm16_imm8, "add"), (Add_rm32_imm8, "add"), (Add_rm64_imm8, "add"),
    (Or_rm8_r8, "or"), (Or_rm16_r16, "or"), (Or_rm32_r32, "or"), (Or_rm64_r64, "or"),
    (Or_r8_rm8, "or"), (Or_r16_rm16, "or"), (Or_r32_rm32, "or"), (Or_r64_rm64, "or"),
    (Or_AL_imm8, "or"), (Or_AX_imm16, "or"), (Or_EAX_imm32, "or"), (Or_RAX_imm32, "or"),
    (Or_rm8_imm8, "or"), (Or_rm16_imm16, "or"), (Or_rm32_imm32, "or"), (Or_rm64_imm32, "or"),
    (Or_rm16_imm8, "or"), (Or_rm32_imm8, "or"), (Or_rm64_imm8, "or"),
    (Adc_rm8_r8, "adc"), (Adc_rm16_r16, "adc"), (Adc_rm32_r32, "adc"), (Adc_rm64_r64, "adc"),
    (Adc_r8_rm8, "adc"), (Adc_r16_rm16, "adc"), (Adc_r32_rm32, "adc"), (Adc_r64_rm64, "adc"),
    (Adc_AL_imm8, "adc"), (Adc_AX_imm16, "adc"), (Adc_EAX_imm32, "adc"), (Adc_RAX_imm32, "adc"),
    (Adc_rm8_imm8, "adc"), (Adc_rm16_imm16, "adc"), (Adc_rm32_imm32, "adc"), (Adc_rm64_imm32, "adc"),
    (Adc_rm16_imm8, "adc"), (Adc_rm32_imm8, "adc"), (Adc_rm64_imm8, "adc"),
    (Sbb_rm8_r8, "sbb"), (Sbb_rm16_r16, "sbb"), (Sbb_rm32_r32, "sbb"), (Sbb_rm64_r64, "sbb"),
    (Sbb_r8_rm8, "sbb"), (Sbb_r16_rm16, "sbb"), (Sbb_r32_rm32, "sbb"), (Sbb_r64_rm64, "sbb"),
    (Sbb_AL_imm8, "sbb"), (Sbb_AX_imm16, "sbb"), (Sbb_EAX_imm32, "sbb"), (Sbb_RAX_imm32, "sbb"),
    (Sbb_rm8_imm8, "sbb"), (Sbb_rm16_imm16, "sbb"), (Sbb_rm32_imm32, "sbb"), (Sbb_rm64_imm32, "sbb"),
    (Sbb_rm16_imm8, "sbb"), (Sbb_rm32_imm8, "sbb"), (Sbb_rm64_imm8, "sbb"),
    (And_rm8_r8, "and"), (And_rm16_r16, "and"), (And_rm32_r32, "and"), (And_rm64_r64, "and"),
    (And_r8_rm8, "and"), (And_r16_rm16, "and"), (And_r32_rm32, "and"), (And_r64_rm64, "and"),
    (And_AL_imm8, "and"), (And_AX_imm16, "and"), (And_EAX_imm32, "and"), (And_RAX_imm32, "and"),
    (And_rm8_imm8, "and"), (And_rm16_imm16, "and"), (And_rm32_imm32, "and"), (And_rm64_imm32, "and"),
    (And_rm16_imm8, "and"), (And_rm32_imm8, "and"), (And_rm64_imm8, "and"),
    (Sub_rm8_r8, "sub"), (Sub_rm16_r16, "sub"), (Sub_rm32_r32, "sub"), (Sub_rm64_r64, "sub"),
    (Sub_r8_rm8, "sub"), (Sub_r16_rm16, "sub"), (Sub_r32_rm32, "sub"), (Sub_r64_rm64, "sub"),
    (Sub_AL_imm8, "sub"), (Sub_AX_imm16, "sub"), (Sub_EAX_imm32, "sub"), (Sub_RAX_imm32, "sub"),
    (Sub_rm8_imm8, "sub"), (Sub_rm16_imm16, "sub"), (Sub_rm32_imm32, "sub"), (Sub_rm64_imm32, "sub"),
    (Sub_rm16_imm8, "sub"), (Sub_rm32_imm8, "sub"), (Sub_rm64_imm8, "sub"),
    (Xor_rm8_r8, "xor"), (Xor_rm16_r16, "xor"), (Xor_rm32_r32, "xor"), (Xor_rm64_r64, "xor"),
    (Xor_r8_rm8, "xor"), (Xor_r16_rm16, "xor"), (Xor_r32_rm32, "xor"), (Xor_r64_rm64, "xor"),
    (Xor_AL_imm8, "xor"), (Xor_AX_imm16, "xor"), (Xor_EAX_imm32, "xor"), (Xor_RAX_imm32, "xor"),
    (Xor_rm8_imm8, "xor"), (Xor_rm16_imm16, "xor"), (Xor_rm32_imm32, "xor"), (Xor_rm64_imm32, "xor"),
    (Xor_rm16_imm8, "xor"), (Xor_rm32_imm8, "xor"), (Xor_rm64_imm8, "xor"),
    (Cmp_rm8_r8, "cmp"), (Cmp_rm16_r16, "cmp"), (Cmp_rm32_r32, "cmp"), (Cmp_rm64_r64, "cmp"),
    (Cmp_r8_rm8, "cmp"), (Cmp_r16_rm16, "cmp"), (Cmp_r32_rm32, "cmp"), (Cmp_r64_rm64, "cmp"),
    (Cmp_AL_imm8, "cmp"), (Cmp_AX_imm16, "cmp"), (Cmp_EAX_imm32, "cmp"), (Cmp_RAX_imm32, "cmp"),
    (Cmp_rm8_imm8, "cmp"), (Cmp_rm16_imm16, "cmp"), (Cmp_rm32_imm32, "cmp"), (Cmp_rm64_imm32, "cmp"),
    (Cmp_rm16_imm8, "cmp"), (Cmp_rm32_imm8, "cmp"), (Cmp_rm64_imm8, "cmp"),

    // ---- one-byte map: stack / segment / BCD ----------------------------
    (Push_ES, "push"), (Pop_ES, "pop"), (Push_CS, "push"), (Push_SS, "push"), (Pop_SS, "pop"),
    (Push_DS, "push"), (Pop_DS, "pop"), (Push_FS, "push"), (Pop_FS, "pop"),
    (Push_GS, "push"), (Pop_GS, "pop"),
    (Daa, "daa"), (Das, "das"), (Aaa, "aaa"), (Aas, "aas"), (Aam_imm8, "aam"), (Aad_imm8, "aad"),
    (Inc_r16, "inc"), (Inc_r32, "inc"), (Dec_r16, "dec"), (Dec_r32, "dec"),
    (Push_r16, "push"), (Push_r32, "push"), (Push_r64, "push"),
    (Pop_r16, "pop"), (Pop_r32, "pop"), (Pop_r64, "pop"),
    (Pushaw, "pusha"), (Pushad, "pushad"), (Popaw, "popa"), (Popad, "popad"),
    (Bound_r16_m1616, "bound"), (Bound_r32_m3232, "bound"),
    (Arpl_rm16_r16, "arpl"),
    (Movsxd_r16_rm16, "movsxd"), (Movsxd_r32_rm32, "movsxd"), (Movsxd_r64_rm32, "movsxd"),
    (Push_imm16, "push"), (Pushd_imm32, "push"), (Pushq_imm32, "push"),
    (Pushw_imm8, "push"), (Pushd_imm8, "push"), (Pushq_imm8, "push"),
    (Imul_r16_rm16_imm16, "imul"), (Imul_r32_rm32_imm32, "imul"), (Imul_r64_rm64_imm32, "imul"),
    (Imul_r16_rm16_imm8, "imul"), (Imul_r32_rm32_imm8, "imul"), (Imul_r64_rm64_imm8, "imul"),
    (Insb, "insb"), (Insw, "insw"), (Insd, "insd"),
    (Outsb, "outsb"), (Outsw, "outsw"), (Outsd, "outsd"),

    // ---- one-byte map: short conditional branches -----------------------
    (Jo_rel8_16, "jo"), (Jo_rel8_32, "jo"), (Jo_rel8_64, "jo"),
    (Jno_rel8_16, "jno"), (Jno_rel8_32, "jno"), (Jno_rel8_64, "jno"),
    (Jb_rel8_16, "jb"), (Jb_rel8_32, "jb"), (Jb_rel8_64, "jb"),
    (Jae_rel8_16, "jae"), (Jae_rel8_32, "jae"), (Jae_rel8_64, "jae"),
    (Je_rel8_16, "je"), (Je_rel8_32, "je"), (Je_rel8_64, "je"),
    (Jne_rel8_16, "jne"), (Jne_rel8_32, "jne"), (Jne_rel8_64, "jne"),
    (Jbe_rel8_16, "jbe"), (Jbe_rel8_32, "jbe"), (Jbe_rel8_64, "jbe"),
    (Ja_rel8_16, "ja"), (Ja_rel8_32, "ja"), (Ja_rel8_64, "ja"),
    (Js_rel8_16, "js"), (Js_rel8_32, "js"), (Js_rel8_64, "js"),
    (Jns_rel8_16, "jns"), (Jns_rel8_32, "jns"), (Jns_rel8_64, "jns"),
    (Jp_rel8_16, "jp"), (Jp_rel8_32, "jp"), (Jp_rel8_64, "jp"),
    (Jnp_rel8_16, "jnp"), (Jnp_rel8_32, "jnp"), (Jnp_rel8_64, "jnp"),
    (Jl_rel8_16, "jl"), (Jl_rel8_32, "jl"), (Jl_rel8_64, "jl"),
    (Jge_rel8_16, "jge"), (Jge_rel8_32, "jge"), (Jge_rel8_64, "jge"),
    (Jle_rel8_16, "jle"), (Jle_rel8_32, "jle"), (Jle_rel8_64, "jle"),
    (Jg_rel8_16, "jg"), (Jg_rel8_32, "jg"), (Jg_rel8_64, "jg"),

    // ---- one-byte map: test/xchg/mov/lea --------------------------------
    (Test_rm8_r8, "test"), (Test_rm16_r16, "test"), (Test_rm32_r32, "test"), (Test_rm64_r64, "test"),
    (Xchg_rm8_r8, "xchg"), (Xchg_rm16_r16, "xchg"), (Xchg_rm32_r32, "xchg"), (Xchg_rm64_r64, "xchg"),
    (Mov_rm8_r8, "mov"), (Mov_rm16_r16, "mov"), (Mov_rm32_r32, "mov"), (Mov_rm64_r64, "mov"),
    (Mov_r8_rm8, "mov"), (Mov_r16_rm16, "mov"), (Mov_r32_rm32, "mov"), (Mov_r64_rm64, "mov"),
    (Mov_rm16_Sreg, "mov"), (Mov_rm32_Sreg, "mov"), (Mov_rm64_Sreg, "mov"), (Mov_Sreg_rm16, "mov"),
    (Lea_r16_m, "lea"), (Lea_r32_m, "lea"), (Lea_r64_m, "lea"),
    (Pop_rm16, "pop"), (Pop_rm32, "pop"), (Pop_rm64, "pop"),
    (Nop, "nop"), (Pause, "pause"),
    (Xchg_r16_AX, "xchg"), (Xchg_r32_EAX, "xchg"), (Xchg_r64_RAX, "xchg"),
    (Cbw, "cbw"), (Cwde, "cwde"), (Cdqe, "cdqe"), (Cwd, "cwd"), (Cdq, "cdq"), (Cqo, "cqo"),
    (Call_ptr1616, "call"), (Call_ptr1632, "call"), (Wait, "wait"),
    (Pushfw, "pushf"), (Pushfd, "pushfd"), (Pushfq, "pushfq"),
    (Popfw, "popf"), (Popfd, "popfd"), (Popfq, "popfq"),
    (Sahf, "sahf"), (Lahf, "lahf"),
    (Mov_AL_moffs8, "mov"), (Mov_AX_moffs16, "mov"), (Mov_EAX_moffs32, "mov"), (Mov_RAX_moffs64, "mov"),
    (Mov_moffs8_AL, "mov"), (Mov_moffs16_AX, "mov"), (Mov_moffs32_EAX, "mov"), (Mov_moffs64_RAX, "mov"),

    // ---- one-byte map: string ops ---------------------------------------
    (Movsb, "movsb"), (Movsw, "movsw"), (Movsd, "movsd"), (Movsq, "movsq"),
    (Cmpsb, "cmpsb"), (Cmpsw, "cmpsw"), (Cmpsd, "cmpsd"), (Cmpsq, "cmpsq"),
    (Stosb, "stosb"), (Stosw, "stosw"), (Stosd, "stosd"), (Stosq, "stosq"),
    (Lodsb, "lodsb"), (Lodsw, "lodsw"), (Lodsd, "lodsd"), (Lodsq, "lodsq"),
    (Scasb, "scasb"), (Scasw, "scasw"), (Scasd, "scasd"), (Scasq, "scasq"),
    (Test_AL_imm8, "test"), (Test_AX_imm16, "test"), (Test_EAX_imm32, "test"), (Test_RAX_imm32, "test"),
    (Mov_r8_imm8, "mov"), (Mov_r16_imm16, "mov"), (Mov_r32_imm32, "mov"), (Mov_r64_imm64, "mov"),

    // ---- one-byte map: shifts and rotates -------------------------------
    (Rol_rm8_imm8, "rol"), (Rol_rm16_imm8, "rol"), (Rol_rm32_imm8, "rol"), (Rol_rm64_imm8, "rol"),
    (Rol_rm8_1, "rol"), (Rol_rm16_1, "rol"), (Rol_rm32_1, "rol"), (Rol_rm64_1, "rol"),
    (Rol_rm8_CL, "rol"), (Rol_rm16_CL, "rol"), (Rol_rm32_CL, "rol"), (Rol_rm64_CL, "rol"),
    (Ror_rm8_imm8, "ror"), (Ror_rm16_imm8, "ror"), (Ror_rm32_imm8, "ror"), (Ror_rm64_imm8, "ror"),
    (Ror_rm8_1, "ror"), (Ror_rm16_1, "ror"), (Ror_rm32_1, "ror"), (Ror_rm64_1, "ror"),
    (Ror_rm8_CL, "ror"), (Ror_rm16_CL, "ror"), (Ror_rm32_CL, "ror"), (Ror_rm64_CL, "ror"),
    (Rcl_rm8_imm8, "rcl"), (Rcl_rm16_imm8, "rcl"), (Rcl_rm32_imm8, "rcl"), (Rcl_rm64_imm8, "rcl"),
    (Rcl_rm8_1, "rcl"), (Rcl_rm16_1, "rcl"), (Rcl_rm32_1, "rcl"), (Rcl_rm64_1, "rcl"),
    (Rcl_rm8_CL, "rcl"), (Rcl_rm16_CL, "rcl"), (Rcl_rm32_CL, "rcl"), (Rcl_rm64_CL, "rcl"),
    (Rcr_rm8_imm8, "rcr"), (Rcr_rm16_imm8, "rcr"), (Rcr_rm32_imm8, "rcr"), (Rcr_rm64_imm8, "rcr"),
    (Rcr_rm8_1, "rcr"), (Rcr_rm16_1, "rcr"), (Rcr_rm32_1, "rcr"), (Rcr_rm64_1, "rcr"),
    (Rcr_rm8_CL, "rcr"), (Rcr_rm16_CL, "rcr"), (Rcr_rm32_CL, "rcr"), (Rcr_rm64_CL, "rcr"),
    (Shl_rm8_imm8, "shl"), (Shl_rm16_imm8, "shl"), (Shl_rm32_imm8, "shl"), (Shl_rm64_imm8, "shl"),
    (Shl_rm8_1, "shl"), (Shl_rm16_1, "shl"), (Shl_rm32_1, "shl"), (Shl_rm64_1, "shl"),
    (Shl_rm8_CL, "shl"), (Shl_rm16_CL, "shl"), (Shl_rm32_CL, "shl"), (Shl_rm64_CL, "shl"),
    (Shr_rm8_imm8, "shr"), (Shr_rm16_imm8, "shr"), (Shr_rm32_imm8, "shr"), (Shr_rm64_imm8, "shr"),
    (Shr_rm8_1, "shr"), (Shr_rm16_1, "shr"), (Shr_rm32_1, "shr"), (Shr_rm64_1, "shr"),
    (Shr_rm8_CL, "shr"), (Shr_rm16_CL, "shr"), (Shr_rm32_CL, "shr"), (Shr_rm64_CL, "shr"),
    (Sar_rm8_imm8, "sar"), (Sar_rm16_imm8, "sar"), (Sar_rm32_imm8, "sar"), (Sar_rm64_imm8, "sar"),
    (Sar_rm8_1, "sar"), (Sar_rm16_1, "sar"), (Sar_rm32_1, "sar"), (Sar_rm64_1, "sar"),
    (Sar_rm8_CL, "sar"), (Sar_rm16_CL, "sar"), (Sar_rm32_CL, "sar"), (Sar_rm64_CL, "sar"),

    // ---- one-byte map: calls/returns/misc -------------------------------
    (Retnw_imm16, "ret"), (Retnd_imm16, "ret"), (Retnq_imm16, "ret"),
    (Retnw, "ret"), (Retnd, "ret"), (Retnq, "ret"),
    (Les_r16_m1616, "les"), (Les_r32_m1632, "les"),
    (Lds_r16_m1616, "lds"), (Lds_r32_m1632, "lds"),
    (Mov_rm8_imm8, "mov"), (Mov_rm16_imm16, "mov"), (Mov_rm32_imm32, "mov"), (Mov_rm64_imm32, "mov"),
    (Enterw_imm16_imm8, "enter"), (Enterd_imm16_imm8, "enter"), (Enterq_imm16_imm8, "enter"),
    (Leave, "leave"),
    (Retfw_imm16, "retf"), (Retfd_imm16, "retf"), (Retfq_imm16, "retf"),
    (Retfw, "retf"), (Retfd, "retf"), (Retfq, "retf"),
    (Int3, "int3"), (Int_imm8, "int"), (Into, "into"),
    (Iretw, "iret"), (Iretd, "iretd"), (Iretq, "iretq"),
    (Xlatb, "xlatb"),

    // ---- x87 subset ------------------------------------------------------
    (Fadd_m32fp, "fadd"), (Fmul_m32fp, "fmul"), (Fcom_m32fp, "fcom"), (Fcomp_m32fp, "fcomp"),
    (Fsub_m32fp, "fsub"), (Fsubr_m32fp, "fsubr"), (Fdiv_m32fp, "fdiv"), (Fdivr_m32fp, "fdivr"),
    (Fadd_st0_sti, "fadd"), (Fmul_st0_sti, "fmul"), (Fcom_st0_sti, "fcom"), (Fcomp_st0_sti, "fcomp"),
    (Fsub_st0_sti, "fsub"), (Fsubr_st0_sti, "fsubr"), (Fdiv_st0_sti, "fdiv"), (Fdivr_st0_sti, "fdivr"),
    (Fld_m32fp, "fld"), (Fst_m32fp, "fst"), (Fstp_m32fp, "fstp"),
    (Fldcw_m2byte, "fldcw"), (Fnstcw_m2byte, "fnstcw"),
    (Fld_sti, "fld"), (Fxch_sti, "fxch"), (Fnop, "fnop"),
    (Fchs, "fchs"), (Fabs, "fabs"), (Ftst, "ftst"), (Fxam, "fxam"), (Fld1, "fld1"), (Fldz, "fldz"),
    (Fld_m64fp, "fld"), (Fst_m64fp, "fst"), (Fstp_m64fp, "fstp"),
    (Ffree_sti, "ffree"), (Fst_sti, "fst"), (Fstp_sti, "fstp"),
    (Faddp_sti_st0, "faddp"), (Fmulp_sti_st0, "fmulp"), (Fsubp_sti_st0, "fsubp"),
    (Fsubrp_sti_st0, "fsubrp"), (Fdivp_sti_st0, "fdivp"), (Fdivrp_sti_st0, "fdivrp"),
    (Fcompp, "fcompp"), (Fnstsw_AX, "fnstsw"),

    // ---- one-byte map: loops / IO / flow --------------------------------
    (Loopne_rel8_16, "loopne"), (Loopne_rel8_32, "loopne"), (Loopne_rel8_64, "loopne"),
    (Loope_rel8_16, "loope"), (Loope_rel8_32, "loope"), (Loope_rel8_64, "loope"),
    (Loop_rel8_16, "loop"), (Loop_rel8_32, "loop"), (Loop_rel8_64, "loop"),
    (Jcxz_rel8_16, "jcxz"), (Jcxz_rel8_32, "jcxz"),
    (Jecxz_rel8_16, "jecxz"), (Jecxz_rel8_32, "jecxz"), (Jecxz_rel8_64, "jecxz"),
    (Jrcxz_rel8_64, "jrcxz"),
    (In_AL_imm8, "in"), (In_AX_imm8, "in"), (In_EAX_imm8, "in"),
    (Out_imm8_AL, "out"), (Out_imm8_AX, "out"), (Out_imm8_EAX, "out"),
    (In_AL_DX, "in"), (In_AX_DX, "in"), (In_EAX_DX, "in"),
    (Out_DX_AL, "out"), (Out_DX_AX, "out"), (Out_DX_EAX, "out"),
    (Call_rel16, "call"), (Call_rel32_32, "call"), (Call_rel32_64, "call"),
    (Jmp_rel16, "jmp"), (Jmp_rel32_32, "jmp"), (Jmp_rel32_64, "jmp"),
    (Jmp_ptr1616, "jmp"), (Jmp_ptr1632, "jmp"),
    (Jmp_rel8_16, "jmp"), (Jmp_rel8_32, "jmp"), (Jmp_rel8_64, "jmp"),
    (Int1, "int1"), (Hlt, "hlt"), (Cmc, "cmc"),
    (Test_rm8_imm8, "test"), (Test_rm16_imm16, "test"), (Test_rm32_imm32, "test"), (Test_rm64_imm32, "test"),
    (Not_rm8, "not"), (Not_rm16, "not"), (Not_rm32, "not"), (Not_rm64, "not"),
    (Neg_rm8, "neg"), (Neg_rm16, "neg"), (Neg_rm32, "neg"), (Neg_rm64, "neg"),
    (Mul_rm8, "mul"), (Mul_rm16, "mul"), (Mul_rm32, "mul"), (Mul_rm64, "mul"),
    (Imul_rm8, "imul"), (Imul_rm16, "imul"), (Imul_rm32, "imul"), (Imul_rm64, "imul"),
    (Div_rm8, "div"), (Div_rm16, "div"), (Div_rm32, "div"), (Div_rm64, "div"),
    (Idiv_rm8, "idiv"), (Idiv_rm16, "idiv"), (Idiv_rm32, "idiv"), (Idiv_rm64, "idiv"),
    (Clc, "clc"), (Stc, "stc"), (Cli, "cli"), (Sti, "sti"), (Cld, "cld"), (Std, "std"),
    (Inc_rm8, "inc"), (Inc_rm16, "inc"), (Inc_rm32, "inc"), (Inc_rm64, "inc"),
    (Dec_rm8, "dec"), (Dec_rm16, "dec"), (Dec_rm32, "dec"), (Dec_rm64, "dec"),
    (Call_rm16, "call"), (Call_rm32, "call"), (Call_rm64, "call"),
    (Call_m1616, "call"), (Call_m1632, "call"), (Call_m1664, "call"),
    (Jmp_rm16, "jmp"), (Jmp_rm32, "jmp"), (Jmp_rm64, "jmp"),
    (Jmp_m1616, "jmp"), (Jmp_m1632, "jmp"), (Jmp_m1664, "jmp"),
    (Push_rm16, "push"), (Push_rm32, "push"), (Push_rm64, "push"),

    // ---- 0F map: system -------------------------------------------------
    (Sldt_rm16, "sldt"), (Str_rm16, "str"), (Lldt_rm16, "lldt"), (Ltr_rm16, "ltr"),
    (Verr_rm16, "verr"), (Verw_rm16, "verw"),
    (Sgdt_m, "sgdt"), (Sidt_m, "sidt"), (Lgdt_m, "lgdt"), (Lidt_m, "lidt"),
    (Smsw_rm16, "smsw"), (Smsw_rm32, "smsw"), (Smsw_rm64, "smsw"),
    (Lmsw_rm16, "lmsw"), (Invlpg_m, "invlpg"),
    (Lar_r16_rm16, "lar"), (Lar_r32_rm32, "lar"), (Lar_r64_rm64, "lar"),
    (Lsl_r16_rm16, "lsl"), (Lsl_r32_rm32, "lsl"), (Lsl_r64_rm64, "lsl"),
    (Syscall, "syscall"), (Sysret, "sysret"), (Clts, "clts"),
    (Invd, "invd"), (Wbinvd, "wbinvd"), (Ud2, "ud2"),
    (Sysenter, "sysenter"), (Sysexit, "sysexit"),
    (Wrmsr, "wrmsr"), (Rdtsc, "rdtsc"), (Rdmsr, "rdmsr"), (Rdpmc, "rdpmc"),
    (Cpuid, "cpuid"),
    (Mov_r32_cr, "mov"), (Mov_r64_cr, "mov"), (Mov_cr_r32, "mov"), (Mov_cr_r64, "mov"),
    (Mov_r32_dr, "mov"), (Mov_r64_dr, "mov"), (Mov_dr_r32, "mov"), (Mov_dr_r64, "mov"),
    (Prefetchnta_m8, "prefetchnta"), (Prefetcht0_m8, "prefetcht0"),
    (Prefetcht1_m8, "prefetcht1"), (Prefetcht2_m8, "prefetcht2"), (Prefetchw_m8, "prefetchw"),
    (Nop_rm16, "nop"), (Nop_rm32, "nop"), (Nop_rm64, "nop"),
    (Fxsave_m, "fxsave"), (Fxrstor_m, "fxrstor"),
    (Ldmxcsr_m32, "ldmxcsr"), (Stmxcsr_m32, "stmxcsr"),
    (Lfence, "lfence"), (Mfence, "mfence"), (Sfence, "sfence"), (Clflush_m8, "clflush"),

    // ---- 0F map: 3DNow ---------------------------------------------------
    (Femms, "femms"),
    (D3NOW_Pi2fd, "pi2fd"), (D3NOW_Pf2id, "pf2id"),
    (D3NOW_Pfcmpeq, "pfcmpeq"), (D3NOW_Pfcmpge, "pfcmpge"), (D3NOW_Pfcmpgt, "pfcmpgt"),
    (D3NOW_Pfadd, "pfadd"), (D3NOW_Pfsub, "pfsub"), (D3NOW_Pfsubr, "pfsubr"),
    (D3NOW_Pfmul, "pfmul"), (D3NOW_Pfmax, "pfmax"), (D3NOW_Pfmin, "pfmin"),
    (D3NOW_Pfrcp, "pfrcp"), (D3NOW_Pfrsqrt, "pfrsqrt"),
    (D3NOW_Pavgusb, "pavgusb"), (D3NOW_Pmulhrw, "pmulhrw"),

    // ---- 0F map: SSE/SSE2 moves and arithmetic --------------------------
    (Movups_xmm_xmmm128, "movups"), (Movups_xmmm128_xmm, "movups"),
    (Movupd_xmm_xmmm128, "movupd"), (Movupd_xmmm128_xmm, "movupd"),
    (Movss_xmm_xmmm32, "movss"), (Movss_xmmm32_xmm, "movss"),
    (Movsd_xmm_xmmm64, "movsd"), (Movsd_xmmm64_xmm, "movsd"),
    (Unpcklps_xmm_xmmm128, "unpcklps"), (Unpcklpd_xmm_xmmm128, "unpcklpd"),
    (Unpckhps_xmm_xmmm128, "unpckhps"), (Unpckhpd_xmm_xmmm128, "unpckhpd"),
    (Movaps_xmm_xmmm128, "movaps"), (Movaps_xmmm128_xmm, "movaps"),
    (Movapd_xmm_xmmm128, "movapd"), (Movapd_xmmm128_xmm, "movapd"),
    (Cvtsi2ss_xmm_rm32, "cvtsi2ss"), (Cvtsi2ss_xmm_rm64, "cvtsi2ss"),
    (Cvtsi2sd_xmm_rm32, "cvtsi2sd"), (Cvtsi2sd_xmm_rm64, "cvtsi2sd"),
    (Movntps_m128_xmm, "movntps"), (Movntpd_m128_xmm, "movntpd"),
    (Cvttss2si_r32_xmmm32, "cvttss2si"), (Cvttss2si_r64_xmmm32, "cvttss2si"),
    (Cvttsd2si_r32_xmmm64, "cvttsd2si"), (Cvttsd2si_r64_xmmm64, "cvttsd2si"),
    (Ucomiss_xmm_xmmm32, "ucomiss"), (Ucomisd_xmm_xmmm64, "ucomisd"),
    (Comiss_xmm_xmmm32, "comiss"), (Comisd_xmm_xmmm64, "comisd"),
    (Movmskps_r32_xmm, "movmskps"), (Movmskpd_r32_xmm, "movmskpd"),
    (Sqrtps_xmm_xmmm128, "sqrtps"), (Sqrtss_xmm_xmmm32, "sqrtss"),
    (Sqrtpd_xmm_xmmm128, "sqrtpd"), (Sqrtsd_xmm_xmmm64, "sqrtsd"),
    (Andps_xmm_xmmm128, "andps"), (Andpd_xmm_xmmm128, "andpd"),
    (Andnps_xmm_xmmm128, "andnps"), (Andnpd_xmm_xmmm128, "andnpd"),
    (Orps_xmm_xmmm128, "orps"), (Orpd_xmm_xmmm128, "orpd"),
    (Xorps_xmm_xmmm128, "xorps"), (Xorpd_xmm_xmmm128, "xorpd"),
    (Addps_xmm_xmmm128, "addps"), (Addss_xmm_xmmm32, "addss"),
    (Addpd_xmm_xmmm128, "addpd"), (Addsd_xmm_xmmm64, "addsd"),
    (Mulps_xmm_xmmm128, "mulps"), (Mulss_xmm_xmmm32, "mulss"),
    (Mulpd_xmm_xmmm128, "mulpd"), (Mulsd_xmm_xmmm64, "mulsd"),
    (Cvtps2pd_xmm_xmmm64, "cvtps2pd"), (Cvtpd2ps_xmm_xmmm128, "cvtpd2ps"),
    (Cvtss2sd_xmm_xmmm32, "cvtss2sd"), (Cvtsd2ss_xmm_xmmm64, "cvtsd2ss"),
    (Cvtdq2ps_xmm_xmmm128, "cvtdq2ps"), (Cvtps2dq_xmm_xmmm128, "cvtps2dq"),
    (Cvttps2dq_xmm_xmmm128, "cvttps2dq"),
    (Subps_xmm_xmmm128, "subps"), (Subss_xmm_xmmm32, "subss"),
    (Subpd_xmm_xmmm128, "subpd"), (Subsd_xmm_xmmm64, "subsd"),
    (Minps_xmm_xmmm128, "minps"), (Minss_xmm_xmmm32, "minss"),
    (Minpd_xmm_xmmm128, "minpd"), (Minsd_xmm_xmmm64, "minsd"),
    (Divps_xmm_xmmm128, "divps"), (Divss_xmm_xmmm32, "divss"),
    (Divpd_xmm_xmmm128, "divpd"), (Divsd_xmm_xmmm64, "divsd"),
    (Maxps_xmm_xmmm128, "maxps"), (Maxss_xmm_xmmm32, "maxss"),
    (Maxpd_xmm_xmmm128, "maxpd"), (Maxsd_xmm_xmmm64, "maxsd"),

    // ---- 0F map: MMX/SSE2 integer ---------------------------------------
    (Punpcklbw_mm_mmm32, "punpcklbw"), (Punpcklbw_xmm_xmmm128, "punpcklbw"),
    (Movd_mm_rm32, "movd"), (Movq_mm_rm64, "movq"),
    (Movd_xmm_rm32, "movd"), (Movq_xmm_rm64, "movq"),
    (Movd_rm32_mm, "movd"), (Movq_rm64_mm, "movq"),
    (Movd_rm32_xmm, "movd"), (Movq_rm64_xmm, "movq"),
    (Movq_mm_mmm64, "movq"), (Movq_mmm64_mm, "movq"),
    (Movdqa_xmm_xmmm128, "movdqa"), (Movdqa_xmmm128_xmm, "movdqa"),
    (Movdqu_xmm_xmmm128, "movdqu"), (Movdqu_xmmm128_xmm, "movdqu"),
    (Movq_xmm_xmmm64, "movq"), (Movq_xmmm64_xmm, "movq"),
    (Pshufw_mm_mmm64_imm8, "pshufw"), (Pshufd_xmm_xmmm128_imm8, "pshufd"),
    (Pshuflw_xmm_xmmm128_imm8, "pshuflw"), (Pshufhw_xmm_xmmm128_imm8, "pshufhw"),
    (Pcmpeqb_mm_mmm64, "pcmpeqb"), (Pcmpeqb_xmm_xmmm128, "pcmpeqb"),
    (Pcmpeqd_mm_mmm64, "pcmpeqd"), (Pcmpeqd_xmm_xmmm128, "pcmpeqd"),
    (Emms, "emms"),
    (Pinsrw_mm_r32m16_imm8, "pinsrw"), (Pinsrw_xmm_r32m16_imm8, "pinsrw"),
    (Pextrw_r32_mm_imm8, "pextrw"), (Pextrw_r32_xmm_imm8, "pextrw"),
    (Pavgb_mm_mmm64, "pavgb"), (Pavgb_xmm_xmmm128, "pavgb"),
    (Paddq_mm_mmm64, "paddq"), (Paddq_xmm_xmmm128, "paddq"),
    (Pmullw_mm_mmm64, "pmullw"), (Pmullw_xmm_xmmm128, "pmullw"),
    (Pmovmskb_r32_mm, "pmovmskb"), (Pmovmskb_r32_xmm, "pmovmskb"),
    (Pand_mm_mmm64, "pand"), (Pand_xmm_xmmm128, "pand"),
    (Pandn_mm_mmm64, "pandn"), (Pandn_xmm_xmmm128, "pandn"),
    (Por_mm_mmm64, "por"), (Por_xmm_xmmm128, "por"),
    (Pxor_mm_mmm64, "pxor"), (Pxor_xmm_xmmm128, "pxor"),
    (Movntq_m64_mm, "movntq"), (Movntdq_m128_xmm, "movntdq"),
    (Pmuludq_mm_mmm64, "pmuludq"), (Pmuludq_xmm_xmmm128, "pmuludq"),
    (Psadbw_mm_mmm64, "psadbw"), (Psadbw_xmm_xmmm128, "psadbw"),
    (Psubb_mm_mmm64, "psubb"), (Psubb_xmm_xmmm128, "psubb"),
    (Psubw_mm_mmm64, "psubw"), (Psubw_xmm_xmmm128, "psubw"),
    (Psubd_mm_mmm64, "psubd"), (Psubd_xmm_xmmm128, "psubd"),
    (Psubq_mm_mmm64, "psubq"), (Psubq_xmm_xmmm128, "psubq"),
    (Paddb_mm_mmm64, "paddb"), (Paddb_xmm_xmmm128, "paddb"),
    (Paddw_mm_mmm64, "paddw"), (Paddw_xmm_xmmm128, "paddw"),
    (Paddd_mm_mmm64, "paddd"), (Paddd_xmm_xmmm128, "paddd"),

    // ---- 0F map: long conditional branches and setcc --------------------
    (Jo_rel16, "jo"), (Jo_rel32_32, "jo"), (Jo_rel32_64, "jo"),
    (Jno_rel16, "jno"), (Jno_rel32_32, "jno"), (Jno_rel32_64, "jno"),
    (Jb_rel16, "jb"), (Jb_rel32_32, "jb"), (Jb_rel32_64, "jb"),
    (Jae_rel16, "jae"), (Jae_rel32_32, "jae"), (Jae_rel32_64, "jae"),
    (Je_rel16, "je"), (Je_rel32_32, "je"), (Je_rel32_64, "je"),
    (Jne_rel16, "jne"), (Jne_rel32_32, "jne"), (Jne_rel32_64, "jne"),
    (Jbe_rel16, "jbe"), (Jbe_rel32_32, "jbe"), (Jbe_rel32_64, "jbe"),
    (Ja_rel16, "ja"), (Ja_rel32_32, "ja"), (Ja_rel32_64, "ja"),
    (Js_rel16, "js"), (Js_rel32_32, "js"), (Js_rel32_64, "js"),
    (Jns_rel16, "jns"), (Jns_rel32_32, "jns"), (Jns_rel32_64, "jns"),
    (Jp_rel16, "jp"), (Jp_rel32_32, "jp"), (Jp_rel32_64, "jp"),
    (Jnp_rel16, "jnp"), (Jnp_rel32_32, "jnp"), (Jnp_rel32_64, "jnp"),
    (Jl_rel16, "jl"), (Jl_rel32_32, "jl"), (Jl_rel32_64, "jl"),
    (Jge_rel16, "jge"), (Jge_rel32_32, "jge"), (Jge_rel32_64, "jge"),
    (Jle_rel16, "jle"), (Jle_rel32_32, "jle"), (Jle_rel32_64, "jle"),
    (Jg_rel16, "jg"), (Jg_rel32_32, "jg"), (Jg_rel32_64, "jg"),
    (Seto_rm8, "seto"), (Setno_rm8, "setno"), (Setb_rm8, "setb"), (Setae_rm8, "setae"),
    (Sete_rm8, "sete"), (Setne_rm8, "setne"), (Setbe_rm8, "setbe"), (Seta_rm8, "seta"),
    (Sets_rm8, "sets"), (Setns_rm8, "setns"), (Setp_rm8, "setp"), (Setnp_rm8, "setnp"),
    (Setl_rm8, "setl"), (Setge_rm8, "setge"), (Setle_rm8, "setle"), (Setg_rm8, "setg"),

    // ---- 0F map: cmovcc --------------------------------------------------
    (Cmovo_r16_rm16, "cmovo"), (Cmovo_r32_rm32, "cmovo"), (Cmovo_r64_rm64, "cmovo"),
    (Cmovno_r16_rm16, "cmovno"), (Cmovno_r32_rm32, "cmovno"), (Cmovno_r64_rm64, "cmovno"),
    (Cmovb_r16_rm16, "cmovb"), (Cmovb_r32_rm32, "cmovb"), (Cmovb_r64_rm64, "cmovb"),
    (Cmovae_r16_rm16, "cmovae"), (Cmovae_r32_rm32, "cmovae"), (Cmovae_r64_rm64, "cmovae"),
    (Cmove_r16_rm16, "cmove"), (Cmove_r32_rm32, "cmove"), (Cmove_r64_rm64, "cmove"),
    (Cmovne_r16_rm16, "cmovne"), (Cmovne_r32_rm32, "cmovne"), (Cmovne_r64_rm64, "cmovne"),
    (Cmovbe_r16_rm16, "cmovbe"), (Cmovbe_r32_rm32, "cmovbe"), (Cmovbe_r64_rm64, "cmovbe"),
    (Cmova_r16_rm16, "cmova"), (Cmova_r32_rm32, "cmova"), (Cmova_r64_rm64, "cmova"),
    (Cmovs_r16_rm16, "cmovs"), (Cmovs_r32_rm32, "cmovs"), (Cmovs_r64_rm64, "cmovs"),
    (Cmovns_r16_rm16, "cmovns"), (Cmovns_r32_rm32, "cmovns"), (Cmovns_r64_rm64, "cmovns"),
    (Cmovp_r16_rm16, "cmovp"), (Cmovp_r32_rm32, "cmovp"), (Cmovp_r64_rm64, "cmovp"),
    (Cmovnp_r16_rm16, "cmovnp"), (Cmovnp_r32_rm32, "cmovnp"), (Cmovnp_r64_rm64, "cmovnp"),
    (Cmovl_r16_rm16, "cmovl"), (Cmovl_r32_rm32, "cmovl"), (Cmovl_r64_rm64, "cmovl"),
    (Cmovge_r16_rm16, "cmovge"), (Cmovge_r32_rm32, "cmovge"), (Cmovge_r64_rm64, "cmovge"),
    (Cmovle_r16_rm16, "cmovle"), (Cmovle_r32_rm32, "cmovle"), (Cmovle_r64_rm64, "cmovle"),
    (Cmovg_r16_rm16, "cmovg"), (Cmovg_r32_rm32, "cmovg"), (Cmovg_r64_rm64, "cmovg"),

    // ---- 0F map: bit ops, shifts, wide mul ------------------------------
    (Bt_rm16_r16, "bt"), (Bt_rm32_r32, "bt"), (Bt_rm64_r64, "bt"),
    (Bts_rm16_r16, "bts"), (Bts_rm32_r32, "bts"), (Bts_rm64_r64, "bts"),
    (Btr_rm16_r16, "btr"), (Btr_rm32_r32, "btr"), (Btr_rm64_r64, "btr"),
    (Btc_rm16_r16, "btc"), (Btc_rm32_r32, "btc"), (Btc_rm64_r64, "btc"),
    (Bt_rm16_imm8, "bt"), (Bt_rm32_imm8, "bt"), (Bt_rm64_imm8, "bt"),
    (Bts_rm16_imm8, "bts"), (Bts_rm32_imm8, "bts"), (Bts_rm64_imm8, "bts"),
    (Btr_rm16_imm8, "btr"), (Btr_rm32_imm8, "btr"), (Btr_rm64_imm8, "btr"),
    (Btc_rm16_imm8, "btc"), (Btc_rm32_imm8, "btc"), (Btc_rm64_imm8, "btc"),
    (Shld_rm16_r16_imm8, "shld"), (Shld_rm32_r32_imm8, "shld"), (Shld_rm64_r64_imm8, "shld"),
    (Shld_rm16_r16_CL, "shld"), (Shld_rm32_r32_CL, "shld"), (Shld_rm64_r64_CL, "shld"),
    (Shrd_rm16_r16_imm8, "shrd"), (Shrd_rm32_r32_imm8, "shrd"), (Shrd_rm64_r64_imm8, "shrd"),
    (Shrd_rm16_r16_CL, "shrd"), (Shrd_rm32_r32_CL, "shrd"), (Shrd_rm64_r64_CL, "shrd"),
    (Imul_r16_rm16, "imul"), (Imul_r32_rm32, "imul"), (Imul_r64_rm64, "imul"),
    (Cmpxchg_rm8_r8, "cmpxchg"), (Cmpxchg_rm16_r16, "cmpxchg"),
    (Cmpxchg_rm32_r32, "cmpxchg"), (Cmpxchg_rm64_r64, "cmpxchg"),
    (Lss_r16_m1616, "lss"), (Lss_r32_m1632, "lss"), (Lss_r64_m1664, "lss"),
    (Lfs_r16_m1616, "lfs"), (Lfs_r32_m1632, "lfs"), (Lfs_r64_m1664, "lfs"),
    (Lgs_r16_m1616, "lgs"), (Lgs_r32_m1632, "lgs"), (Lgs_r64_m1664, "lgs"),
    (Movzx_r16_rm8, "movzx"), (Movzx_r32_rm8, "movzx"), (Movzx_r64_rm8, "movzx"),
    (Movzx_r16_rm16, "movzx"), (Movzx_r32_rm16, "movzx"), (Movzx_r64_rm16, "movzx"),
    (Movsx_r16_rm8, "movsx"), (Movsx_r32_rm8, "movsx"), (Movsx_r64_rm8, "movsx"),
    (Movsx_r16_rm16, "movsx"), (Movsx_r32_rm16, "movsx"), (Movsx_r64_rm16, "movsx"),
    (Popcnt_r16_rm16, "popcnt"), (Popcnt_r32_rm32, "popcnt"), (Popcnt_r64_rm64, "popcnt"),
    (Bsf_r16_rm16, "bsf"), (Bsf_r32_rm32, "bsf"), (Bsf_r64_rm64, "bsf"),
    (Bsr_r16_rm16, "bsr"), (Bsr_r32_rm32, "bsr"), (Bsr_r64_rm64, "bsr"),
    (Tzcnt_r16_rm16, "tzcnt"), (Tzcnt_r32_rm32, "tzcnt"), (Tzcnt_r64_rm64, "tzcnt"),
    (Lzcnt_r16_rm16, "lzcnt"), (Lzcnt_r32_rm32, "lzcnt"), (Lzcnt_r64_rm64, "lzcnt"),
    (Xadd_rm8_r8, "xadd"), (Xadd_rm16_r16, "xadd"), (Xadd_rm32_r32, "xadd"), (Xadd_rm64_r64, "xadd"),
    (Movnti_m32_r32, "movnti"), (Movnti_m64_r64, "movnti"),
    (Cmpxchg8b_m64, "cmpxchg8b"), (Cmpxchg16b_m128, "cmpxchg16b"),
    (Rdrand_r16, "rdrand"), (Rdrand_r32, "rdrand"), (Rdrand_r64, "rdrand"),
    (Rdseed_r16, "rdseed"), (Rdseed_r32, "rdseed"), (Rdseed_r64, "rdseed"),
    (Bswap_r32, "bswap"), (Bswap_r64, "bswap"),

    // ---- 0F map: compares and shuffles with immediates -------------------
    (Cmpps_xmm_xmmm128_imm8, "cmpps"), (Cmpss_xmm_xmmm32_imm8, "cmpss"),
    (Cmppd_xmm_xmmm128_imm8, "cmppd"), (Cmpsd_xmm_xmmm64_imm8, "cmpsd"),
    (Shufps_xmm_xmmm128_imm8, "shufps"), (Shufpd_xmm_xmmm128_imm8, "shufpd"),

    // ---- 0F38 map --------------------------------------------------------
    (Pshufb_mm_mmm64, "pshufb"), (Pshufb_xmm_xmmm128, "pshufb"),
    (Ptest_xmm_xmmm128, "ptest"),
    (Pabsb_xmm_xmmm128, "pabsb"), (Pabsw_xmm_xmmm128, "pabsw"), (Pabsd_xmm_xmmm128, "pabsd"),
    (Pmovsxbw_xmm_xmmm64, "pmovsxbw"), (Pmovsxbd_xmm_xmmm32, "pmovsxbd"),
    (Pmovsxwd_xmm_xmmm64, "pmovsxwd"), (Pmovsxdq_xmm_xmmm64, "pmovsxdq"),
    (Pmovzxbw_xmm_xmmm64, "pmovzxbw"), (Pmovzxbd_xmm_xmmm32, "pmovzxbd"),
    (Pmovzxwd_xmm_xmmm64, "pmovzxwd"), (Pmovzxdq_xmm_xmmm64, "pmovzxdq"),
    (Pcmpeqq_xmm_xmmm128, "pcmpeqq"), (Pcmpgtq_xmm_xmmm128, "pcmpgtq"),
    (Packusdw_xmm_xmmm128, "packusdw"),
    (Pminsb_xmm_xmmm128, "pminsb"), (Pminsd_xmm_xmmm128, "pminsd"),
    (Pmaxsb_xmm_xmmm128, "pmaxsb"), (Pmaxsd_xmm_xmmm128, "pmaxsd"),
    (Pmulld_xmm_xmmm128, "pmulld"), (Phminposuw_xmm_xmmm128, "phminposuw"),
    (Aesimc_xmm_xmmm128, "aesimc"), (Aesenc_xmm_xmmm128, "aesenc"),
    (Aesenclast_xmm_xmmm128, "aesenclast"), (Aesdec_xmm_xmmm128, "aesdec"),
    (Aesdeclast_xmm_xmmm128, "aesdeclast"),
    (Movbe_r16_m16, "movbe"), (Movbe_r32_m32, "movbe"), (Movbe_r64_m64, "movbe"),
    (Movbe_m16_r16, "movbe"), (Movbe_m32_r32, "movbe"), (Movbe_m64_r64, "movbe"),
    (Crc32_r32_rm8, "crc32"), (Crc32_r32_rm16, "crc32"), (Crc32_r32_rm32, "crc32"),
    (Crc32_r64_rm8, "crc32"), (Crc32_r64_rm64, "crc32"),

    // ---- 0F3A map --------------------------------------------------------
    (Roundps_xmm_xmmm128_imm8, "roundps"), (Roundpd_xmm_xmmm128_imm8, "roundpd"),
    (Roundss_xmm_xmmm32_imm8, "roundss"), (Roundsd_xmm_xmmm64_imm8, "roundsd"),
    (Blendps_xmm_xmmm128_imm8, "blendps"), (Blendpd_xmm_xmmm128_imm8, "blendpd"),
    (Pblendw_xmm_xmmm128_imm8, "pblendw"),
    (Palignr_mm_mmm64_imm8, "palignr"), (Palignr_xmm_xmmm128_imm8, "palignr"),
    (Pextrb_r32m8_xmm_imm8, "pextrb"), (Pextrw_r32m16_xmm_imm8, "pextrw"),
    (Pextrd_rm32_xmm_imm8, "pextrd"), (Pextrq_rm64_xmm_imm8, "pextrq"),
    (Pinsrb_xmm_r32m8_imm8, "pinsrb"), (Pinsrd_xmm_rm32_imm8, "pinsrd"),
    (Pinsrq_xmm_rm64_imm8, "pinsrq"),
    (Dpps_xmm_xmmm128_imm8, "dpps"), (Dppd_xmm_xmmm128_imm8, "dppd"),
    (Mpsadbw_xmm_xmmm128_imm8, "mpsadbw"),
    (Pclmulqdq_xmm_xmmm128_imm8, "pclmulqdq"),
    (Pcmpistri_xmm_xmmm128_imm8, "pcmpistri"),
    (Aeskeygenassist_xmm_xmmm128_imm8, "aeskeygenassist"),

    // ---- VEX map 1 -------------------------------------------------------
    (VEX_Vmovups_xmm_xmmm128, "vmovups"), (VEX_Vmovups_ymm_ymmm256, "vmovups"),
    (VEX_Vmovups_xmmm128_xmm, "vmovups"), (VEX_Vmovups_ymmm256_ymm, "vmovups"),
    (VEX_Vmovupd_xmm_xmmm128, "vmovupd"), (VEX_Vmovupd_ymm_ymmm256, "vmovupd"),
    (VEX_Vmovupd_xmmm128_xmm, "vmovupd"), (VEX_Vmovupd_ymmm256_ymm, "vmovupd"),
    (VEX_Vmovss_xmm_xmm_xmm, "vmovss"), (VEX_Vmovss_xmm_m32, "vmovss"), (VEX_Vmovss_m32_xmm, "vmovss"),
    (VEX_Vmovsd_xmm_xmm_xmm, "vmovsd"), (VEX_Vmovsd_xmm_m64, "vmovsd"), (VEX_Vmovsd_m64_xmm, "vmovsd"),
    (VEX_Vmovaps_xmm_xmmm128, "vmovaps"), (VEX_Vmovaps_ymm_ymmm256, "vmovaps"),
    (VEX_Vmovaps_xmmm128_xmm, "vmovaps"), (VEX_Vmovaps_ymmm256_ymm, "vmovaps"),
    (VEX_Vmovapd_xmm_xmmm128, "vmovapd"), (VEX_Vmovapd_ymm_ymmm256, "vmovapd"),
    (VEX_Vmovapd_xmmm128_xmm, "vmovapd"), (VEX_Vmovapd_ymmm256_ymm, "vmovapd"),
    (VEX_Vucomiss_xmm_xmmm32, "vucomiss"), (VEX_Vucomisd_xmm_xmmm64, "vucomisd"),
    (VEX_Vcomiss_xmm_xmmm32, "vcomiss"), (VEX_Vcomisd_xmm_xmmm64, "vcomisd"),
    (VEX_Vmovmskps_r32_xmm, "vmovmskps"), (VEX_Vmovmskps_r32_ymm, "vmovmskps"),
    (VEX_Vmovmskpd_r32_xmm, "vmovmskpd"), (VEX_Vmovmskpd_r32_ymm, "vmovmskpd"),
    (VEX_Vsqrtps_xmm_xmmm128, "vsqrtps"), (VEX_Vsqrtps_ymm_ymmm256, "vsqrtps"),
    (VEX_Vsqrtpd_xmm_xmmm128, "vsqrtpd"), (VEX_Vsqrtpd_ymm_ymmm256, "vsqrtpd"),
    (VEX_Vsqrtss_xmm_xmm_xmmm32, "vsqrtss"), (VEX_Vsqrtsd_xmm_xmm_xmmm64, "vsqrtsd"),
    (VEX_Vandps_xmm_xmm_xmmm128, "vandps"), (VEX_Vandps_ymm_ymm_ymmm256, "vandps"),
    (VEX_Vandpd_xmm_xmm_xmmm128, "vandpd"), (VEX_Vandpd_ymm_ymm_ymmm256, "vandpd"),
    (VEX_Vandnps_xmm_xmm_xmmm128, "vandnps"), (VEX_Vandnps_ymm_ymm_ymmm256, "vandnps"),
    (VEX_Vandnpd_xmm_xmm_xmmm128, "vandnpd"), (VEX_Vandnpd_ymm_ymm_ymmm256, "vandnpd"),
    (VEX_Vorps_xmm_xmm_xmmm128, "vorps"), (VEX_Vorps_ymm_ymm_ymmm256, "vorps"),
    (VEX_Vorpd_xmm_xmm_xmmm128, "vorpd"), (VEX_Vorpd_ymm_ymm_ymmm256, "vorpd"),
    (VEX_Vxorps_xmm_xmm_xmmm128, "vxorps"), (VEX_Vxorps_ymm_ymm_ymmm256, "vxorps"),
    (VEX_Vxorpd_xmm_xmm_xmmm128, "vxorpd"), (VEX_Vxorpd_ymm_ymm_ymmm256, "vxorpd"),
    (VEX_Vaddps_xmm_xmm_xmmm128, "vaddps"), (VEX_Vaddps_ymm_ymm_ymmm256, "vaddps"),
    (VEX_Vaddpd_xmm_xmm_xmmm128, "vaddpd"), (VEX_Vaddpd_ymm_ymm_ymmm256, "vaddpd"),
    (VEX_Vaddss_xmm_xmm_xmmm32, "vaddss"), (VEX_Vaddsd_xmm_xmm_xmmm64, "vaddsd"),
    (VEX_Vmulps_xmm_xmm_xmmm128, "vmulps"), (VEX_Vmulps_ymm_ymm_ymmm256, "vmulps"),
    (VEX_Vmulpd_xmm_xmm_xmmm128, "vmulpd"), (VEX_Vmulpd_ymm_ymm_ymmm256, "vmulpd"),
    (VEX_Vmulss_xmm_xmm_xmmm32, "vmulss"), (VEX_Vmulsd_xmm_xmm_xmmm64, "vmulsd"),
    (VEX_Vsubps_xmm_xmm_xmmm128, "vsubps"), (VEX_Vsubps_ymm_ymm_ymmm256, "vsubps"),
    (VEX_Vsubpd_xmm_xmm_xmmm128, "vsubpd"), (VEX_Vsubpd_ymm_ymm_ymmm256, "vsubpd"),
    (VEX_Vsubss_xmm_xmm_xmmm32, "vsubss"), (VEX_Vsubsd_xmm_xmm_xmmm64, "vsubsd"),
    (VEX_Vminps_xmm_xmm_xmmm128, "vminps"), (VEX_Vminps_ymm_ymm_ymmm256, "vminps"),
    (VEX_Vminpd_xmm_xmm_xmmm128, "vminpd"), (VEX_Vminpd_ymm_ymm_ymmm256, "vminpd"),
    (VEX_Vminss_xmm_xmm_xmmm32, "vminss"), (VEX_Vminsd_xmm_xmm_xmmm64, "vminsd"),
    (VEX_Vdivps_xmm_xmm_xmmm128, "vdivps"), (VEX_Vdivps_ymm_ymm_ymmm256, "vdivps"),
    (VEX_Vdivpd_xmm_xmm_xmmm128, "vdivpd"), (VEX_Vdivpd_ymm_ymm_ymmm256, "vdivpd"),
    (VEX_Vdivss_xmm_xmm_xmmm32, "vdivss"), (VEX_Vdivsd_xmm_xmm_xmmm64, "vdivsd"),
    (VEX_Vmaxps_xmm_xmm_xmmm128, "vmaxps"), (VEX_Vmaxps_ymm_ymm_ymmm256, "vmaxps"),
    (VEX_Vmaxpd_xmm_xmm_xmmm128, "vmaxpd"), (VEX_Vmaxpd_ymm_ymm_ymmm256, "vmaxpd"),
    (VEX_Vmaxss_xmm_xmm_xmmm32, "vmaxss"), (VEX_Vmaxsd_xmm_xmm_xmmm64, "vmaxsd"),
    (VEX_Vmovd_xmm_rm32, "vmovd"), (VEX_Vmovq_xmm_rm64, "vmovq"),
    (VEX_Vmovd_rm32_xmm, "vmovd"), (VEX_Vmovq_rm64_xmm, "vmovq"),
    (VEX_Vmovq_xmm_xmmm64, "vmovq"), (VEX_Vmovq_xmmm64_xmm, "vmovq"),
    (VEX_Vmovdqa_xmm_xmmm128, "vmovdqa"), (VEX_Vmovdqa_ymm_ymmm256, "vmovdqa"),
    (VEX_Vmovdqa_xmmm128_xmm, "vmovdqa"), (VEX_Vmovdqa_ymmm256_ymm, "vmovdqa"),
    (VEX_Vmovdqu_xmm_xmmm128, "vmovdqu"), (VEX_Vmovdqu_ymm_ymmm256, "vmovdqu"),
    (VEX_Vmovdqu_xmmm128_xmm, "vmovdqu"), (VEX_Vmovdqu_ymmm256_ymm, "vmovdqu"),
    (VEX_Vpshufd_xmm_xmmm128_imm8, "vpshufd"), (VEX_Vpshufd_ymm_ymmm256_imm8, "vpshufd"),
    (VEX_Vpshuflw_xmm_xmmm128_imm8, "vpshuflw"), (VEX_Vpshuflw_ymm_ymmm256_imm8, "vpshuflw"),
    (VEX_Vpshufhw_xmm_xmmm128_imm8, "vpshufhw"), (VEX_Vpshufhw_ymm_ymmm256_imm8, "vpshufhw"),
    (VEX_Vpcmpeqb_xmm_xmm_xmmm128, "vpcmpeqb"), (VEX_Vpcmpeqb_ymm_ymm_ymmm256, "vpcmpeqb"),
    (VEX_Vpcmpeqd_xmm_xmm_xmmm128, "vpcmpeqd"), (VEX_Vpcmpeqd_ymm_ymm_ymmm256, "vpcmpeqd"),
    (VEX_Vzeroupper, "vzeroupper"), (VEX_Vzeroall, "vzeroall"),
    (VEX_Vcmpps_xmm_xmm_xmmm128_imm8, "vcmpps"), (VEX_Vcmpps_ymm_ymm_ymmm256_imm8, "vcmpps"),
    (VEX_Vcmppd_xmm_xmm_xmmm128_imm8, "vcmppd"), (VEX_Vcmppd_ymm_ymm_ymmm256_imm8, "vcmppd"),
    (VEX_Vcmpss_xmm_xmm_xmmm32_imm8, "vcmpss"), (VEX_Vcmpsd_xmm_xmm_xmmm64_imm8, "vcmpsd"),
    (VEX_Vshufps_xmm_xmm_xmmm128_imm8, "vshufps"), (VEX_Vshufps_ymm_ymm_ymmm256_imm8, "vshufps"),
    (VEX_Vshufpd_xmm_xmm_xmmm128_imm8, "vshufpd"), (VEX_Vshufpd_ymm_ymm_ymmm256_imm8, "vshufpd"),
    (VEX_Vpand_xmm_xmm_xmmm128, "vpand"), (VEX_Vpand_ymm_ymm_ymmm256, "vpand"),
    (VEX_Vpandn_xmm_xmm_xmmm128, "vpandn"), (VEX_Vpandn_ymm_ymm_ymmm256, "vpandn"),
    (VEX_Vpor_xmm_xmm_xmmm128, "vpor"), (VEX_Vpor_ymm_ymm_ymmm256, "vpor"),
    (VEX_Vpxor_xmm_xmm_xmmm128, "vpxor"), (VEX_Vpxor_ymm_ymm_ymmm256, "vpxor"),
    (VEX_Vpaddb_xmm_xmm_xmmm128, "vpaddb"), (VEX_Vpaddb_ymm_ymm_ymmm256, "vpaddb"),
    (VEX_Vpaddd_xmm_xmm_xmmm128, "vpaddd"), (VEX_Vpaddd_ymm_ymm_ymmm256, "vpaddd"),
    (VEX_Vpsubb_xmm_xmm_xmmm128, "vpsubb"), (VEX_Vpsubb_ymm_ymm_ymmm256, "vpsubb"),
    (VEX_Vpsubd_xmm_xmm_xmmm128, "vpsubd"), (VEX_Vpsubd_ymm_ymm_ymmm256, "vpsubd"),

    // ---- VEX map 2 -------------------------------------------------------
    (VEX_Vpshufb_xmm_xmm_xmmm128, "vpshufb"), (VEX_Vpshufb_ymm_ymm_ymmm256, "vpshufb"),
    (VEX_Vbroadcastss_xmm_xmmm32, "vbroadcastss"), (VEX_Vbroadcastss_ymm_xmmm32, "vbroadcastss"),
    (VEX_Vpermilps_xmm_xmm_xmmm128, "vpermilps"), (VEX_Vpermilps_ymm_ymm_ymmm256, "vpermilps"),
    (VEX_Andn_r32_r32_rm32, "andn"), (VEX_Andn_r64_r64_rm64, "andn"),
    (VEX_Blsr_r32_rm32, "blsr"), (VEX_Blsr_r64_rm64, "blsr"),
    (VEX_Blsmsk_r32_rm32, "blsmsk"), (VEX_Blsmsk_r64_rm64, "blsmsk"),
    (VEX_Blsi_r32_rm32, "blsi"), (VEX_Blsi_r64_rm64, "blsi"),
    (VEX_Bzhi_r32_rm32_r32, "bzhi"), (VEX_Bzhi_r64_rm64_r64, "bzhi"),
    (VEX_Pext_r32_r32_rm32, "pext"), (VEX_Pext_r64_r64_rm64, "pext"),
    (VEX_Pdep_r32_r32_rm32, "pdep"), (VEX_Pdep_r64_r64_rm64, "pdep"),
    (VEX_Mulx_r32_r32_rm32, "mulx"), (VEX_Mulx_r64_r64_rm64, "mulx"),
    (VEX_Shlx_r32_rm32_r32, "shlx"), (VEX_Shlx_r64_rm64_r64, "shlx"),
    (VEX_Sarx_r32_rm32_r32, "sarx"), (VEX_Sarx_r64_rm64_r64, "sarx"),
    (VEX_Shrx_r32_rm32_r32, "shrx"), (VEX_Shrx_r64_rm64_r64, "shrx"),

    // ---- VEX map 3 -------------------------------------------------------
    (VEX_Vpalignr_xmm_xmm_xmmm128_imm8, "vpalignr"), (VEX_Vpalignr_ymm_ymm_ymmm256_imm8, "vpalignr"),
    (VEX_Vblendps_xmm_xmm_xmmm128_imm8, "vblendps"), (VEX_Vblendps_ymm_ymm_ymmm256_imm8, "vblendps"),
    (VEX_Vpclmulqdq_xmm_xmm_xmmm128_imm8, "vpclmulqdq"),
    (VEX_Vperm2f128_ymm_ymm_ymmm256_imm8, "vperm2f128"),
    (VEX_Vinsertf128_ymm_ymm_xmmm128_imm8, "vinsertf128"),
    (VEX_Vextractf128_xmmm128_ymm_imm8, "vextractf128"),
    (VEX_Rorx_r32_rm32_imm8, "rorx"), (VEX_Rorx_r64_rm64_imm8, "rorx"),

    // ---- EVEX ------------------------------------------------------------
    (EVEX_Vmovups_xmm_xmmm128, "vmovups"), (EVEX_Vmovups_ymm_ymmm256, "vmovups"), (EVEX_Vmovups_zmm_zmmm512, "vmovups"),
    (EVEX_Vmovups_xmmm128_xmm, "vmovups"), (EVEX_Vmovups_ymmm256_ymm, "vmovups"), (EVEX_Vmovups_zmmm512_zmm, "vmovups"),
    (EVEX_Vmovupd_xmm_xmmm128, "vmovupd"), (EVEX_Vmovupd_ymm_ymmm256, "vmovupd"), (EVEX_Vmovupd_zmm_zmmm512, "vmovupd"),
    (EVEX_Vmovupd_xmmm128_xmm, "vmovupd"), (EVEX_Vmovupd_ymmm256_ymm, "vmovupd"), (EVEX_Vmovupd_zmmm512_zmm, "vmovupd"),
    (EVEX_Vmovdqu32_xmm_xmmm128, "vmovdqu32"), (EVEX_Vmovdqu32_ymm_ymmm256, "vmovdqu32"), (EVEX_Vmovdqu32_zmm_zmmm512, "vmovdqu32"),
    (EVEX_Vmovdqu32_xmmm128_xmm, "vmovdqu32"), (EVEX_Vmovdqu32_ymmm256_ymm, "vmovdqu32"), (EVEX_Vmovdqu32_zmmm512_zmm, "vmovdqu32"),
    (EVEX_Vmovdqu64_xmm_xmmm128, "vmovdqu64"), (EVEX_Vmovdqu64_ymm_ymmm256, "vmovdqu64"), (EVEX_Vmovdqu64_zmm_zmmm512, "vmovdqu64"),
    (EVEX_Vmovdqu64_xmmm128_xmm, "vmovdqu64"), (EVEX_Vmovdqu64_ymmm256_ymm, "vmovdqu64"), (EVEX_Vmovdqu64_zmmm512_zmm, "vmovdqu64"),
    (EVEX_Vaddps_xmm_xmm_xmmm128b32, "vaddps"), (EVEX_Vaddps_ymm_ymm_ymmm256b32, "vaddps"), (EVEX_Vaddps_zmm_zmm_zmmm512b32_er, "vaddps"),
    (EVEX_Vaddpd_xmm_xmm_xmmm128b64, "vaddpd"), (EVEX_Vaddpd_ymm_ymm_ymmm256b64, "vaddpd"), (EVEX_Vaddpd_zmm_zmm_zmmm512b64_er, "vaddpd"),
    (EVEX_Vaddss_xmm_xmm_xmmm32_er, "vaddss"), (EVEX_Vaddsd_xmm_xmm_xmmm64_er, "vaddsd"),
    (EVEX_Vmulps_xmm_xmm_xmmm128b32, "vmulps"), (EVEX_Vmulps_ymm_ymm_ymmm256b32, "vmulps"), (EVEX_Vmulps_zmm_zmm_zmmm512b32_er, "vmulps"),
    (EVEX_Vmulpd_xmm_xmm_xmmm128b64, "vmulpd"), (EVEX_Vmulpd_ymm_ymm_ymmm256b64, "vmulpd"), (EVEX_Vmulpd_zmm_zmm_zmmm512b64_er, "vmulpd"),
    (EVEX_Vsubps_xmm_xmm_xmmm128b32, "vsubps"), (EVEX_Vsubps_ymm_ymm_ymmm256b32, "vsubps"), (EVEX_Vsubps_zmm_zmm_zmmm512b32_er, "vsubps"),
    (EVEX_Vsubpd_xmm_xmm_xmmm128b64, "vsubpd"), (EVEX_Vsubpd_ymm_ymm_ymmm256b64, "vsubpd"), (EVEX_Vsubpd_zmm_zmm_zmmm512b64_er, "vsubpd"),
    (EVEX_Vpxord_xmm_xmm_xmmm128b32, "vpxord"), (EVEX_Vpxord_ymm_ymm_ymmm256b32, "vpxord"), (EVEX_Vpxord_zmm_zmm_zmmm512b32, "vpxord"),
    (EVEX_Vpxorq_xmm_xmm_xmmm128b64, "vpxorq"), (EVEX_Vpxorq_ymm_ymm_ymmm256b64, "vpxorq"), (EVEX_Vpxorq_zmm_zmm_zmmm512b64, "vpxorq"),
    (EVEX_Vcmpps_kr_xmm_xmmm128b32_imm8, "vcmpps"), (EVEX_Vcmpps_kr_ymm_ymmm256b32_imm8, "vcmpps"), (EVEX_Vcmpps_kr_zmm_zmmm512b32_imm8_sae, "vcmpps"),
    (EVEX_Vcmppd_kr_xmm_xmmm128b64_imm8, "vcmppd"), (EVEX_Vcmppd_kr_ymm_ymmm256b64_imm8, "vcmppd"), (EVEX_Vcmppd_kr_zmm_zmmm512b64_imm8_sae, "vcmppd"),
    (EVEX_Vcmpss_kr_xmm_xmmm32_imm8_sae, "vcmpss"), (EVEX_Vcmpsd_kr_xmm_xmmm64_imm8_sae, "vcmpsd"),
    (EVEX_Vpbroadcastd_xmm_xmmm32, "vpbroadcastd"), (EVEX_Vpbroadcastd_ymm_xmmm32, "vpbroadcastd"), (EVEX_Vpbroadcastd_zmm_xmmm32, "vpbroadcastd"),
    (EVEX_Vpternlogd_xmm_xmm_xmmm128b32_imm8, "vpternlogd"), (EVEX_Vpternlogd_ymm_ymm_ymmm256b32_imm8, "vpternlogd"), (EVEX_Vpternlogd_zmm_zmm_zmmm512b32_imm8, "vpternlogd"),

    // ---- XOP -------------------------------------------------------------
    (XOP_Vpcomb_xmm_xmm_xmmm128_imm8, "vpcomb"), (XOP_Vpcomw_xmm_xmm_xmmm128_imm8, "vpcomw"),
    (XOP_Vpcomd_xmm_xmm_xmmm128_imm8, "vpcomd"), (XOP_Vpcomq_xmm_xmm_xmmm128_imm8, "vpcomq"),
    (XOP_Vfrczps_xmm_xmmm128, "vfrczps"), (XOP_Vfrczps_ymm_ymmm256, "vfrczps"),
    (XOP_Vfrczpd_xmm_xmmm128, "vfrczpd"), (XOP_Vfrczpd_ymm_ymmm256, "vfrczpd"),
    (XOP_Vprotb_xmm_xmmm128_xmm, "vprotb"), (XOP_Vprotw_xmm_xmmm128_xmm, "vprotw"),
    (XOP_Vprotd_xmm_xmmm128_xmm, "vprotd"), (XOP_Vprotq_xmm_xmmm128_xmm, "vprotq"),
    (XOP_Bextr_r32_rm32_imm32, "bextr"), (XOP_Bextr_r64_rm64_imm32, "bextr"),
}

impl Code {
    /// Total number of defined codes, `INVALID` included.
    pub const COUNT: usize = Code::ALL.len();

    /// The canonical lower-case mnemonic for this code.
    pub fn mnemonic(self) -> &'static str {
        MNEMONICS[self as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mnemonic_lookup() {
        assert_eq!(Code::INVALID.mnemonic(), "(bad)");
        assert_eq!(Code::Add_rm8_r8.mnemonic(), "add");
        assert_eq!(Code::Mov_r32_imm32.mnemonic(), "mov");
        assert_eq!(Code::EVEX_Vaddps_zmm_zmm_zmmm512b32_er.mnemonic(), "vaddps");
        assert_eq!(Code::XOP_Bextr_r64_rm64_imm32.mnemonic(), "bextr");
    }

    #[test]
    fn table_is_total() {
        assert_eq!(MNEMONICS.len(), Code::COUNT);
        for &code in Code::ALL {
            assert!(!code.mnemonic().is_empty());
        }
    }

    #[test]
    fn string_and_sse_movsd_are_distinct_codes() {
        assert_ne!(Code::Movsd as u16, Code::Movsd_xmm_xmmm64 as u16);
        assert_eq!(Code::Movsd.mnemonic(), Code::Movsd_xmm_xmmm64.mnemonic());
    }
}
