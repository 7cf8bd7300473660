//! Opcode table machinery.
//!
//! Each opcode map is a 256-entry array of [`Handler`] values. A handler is
//! either a terminal instruction descriptor or a selector that narrows on one
//! dimension (CPU mode, effective operand size, mandatory prefix, ModRM.reg,
//! ModRM.mod, vector length, W bit). Selector payloads are borrowed constant
//! arrays, so the whole table graph is immutable static data and every slot
//! resolves to a descriptor or an explicit [`Handler::Invalid`].

use dasm_core::{Code, MemorySize, Register};

/// Shape of one operand, resolved against the decoded bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OpSpec {
    /// ModRM r/m: byte GPR or memory.
    Eb,
    /// ModRM r/m: word GPR or memory.
    Ew,
    /// ModRM r/m: GPR of the effective operand size, or memory.
    Ev,
    /// ModRM r/m: dword GPR or memory (memory size still from the descriptor).
    Ed,
    /// ModRM r/m: qword GPR or memory.
    Eq,
    /// ModRM reg: byte GPR.
    Gb,
    /// ModRM reg: word GPR.
    Gw,
    /// ModRM reg: GPR of the effective operand size.
    Gv,
    /// ModRM reg: dword GPR.
    Gd,
    /// ModRM reg: qword GPR.
    Gq,
    /// ModRM reg: segment register.
    Sreg,
    /// ModRM reg: control register.
    Cr,
    /// ModRM reg: debug register.
    Dr,
    /// ModRM r/m: memory only.
    M,
    /// 8-bit immediate.
    Ib,
    /// 8-bit immediate sign-extended to the effective operand size.
    IbSx,
    /// 16-bit immediate.
    Iw,
    /// 16- or 32-bit immediate by operand size (sign-extended to 64).
    Iz,
    /// 64-bit immediate.
    Iq,
    /// Second 8-bit immediate (`enter`).
    Ib2,
    /// The constant 1 (shift forms).
    Const1,
    /// 8-bit relative branch displacement.
    Rel8,
    /// 16- or 32-bit relative branch displacement by operand size.
    RelZ,
    /// Far pointer immediate (ptr16:16 / ptr16:32).
    Ap,
    /// Direct memory offset (moffs); width from the address size.
    Moffs,
    /// A fixed register.
    Reg(Register),
    /// Byte GPR from opcode bits 2:0 (+REX.B).
    OpReg8,
    /// Word GPR from opcode bits 2:0.
    OpReg16,
    /// Dword GPR from opcode bits 2:0.
    OpReg32,
    /// Qword GPR from opcode bits 2:0.
    OpReg64,
    /// x87 stack register from ModRM.rm.
    STi,
    /// ModRM reg: MMX register.
    P,
    /// ModRM r/m: MMX register or memory.
    Q,
    /// ModRM r/m: MMX register only.
    N,
    /// ModRM reg: vector register of the descriptor's vector length.
    V,
    /// ModRM r/m: vector register or memory.
    W,
    /// ModRM r/m: vector register only.
    U,
    /// ModRM r/m: xmm register or memory, independent of the descriptor's
    /// vector length (vbroadcastss, vinsertf128 and similar mixed widths).
    Wx,
    /// VEX/EVEX.vvvv vector register.
    H,
    /// VEX.vvvv dword GPR (BMI).
    Bd,
    /// VEX.vvvv qword GPR (BMI).
    Bq,
    /// ModRM reg: opmask register (EVEX compare destinations).
    K,
}

/// Descriptor flags.
pub(crate) const F_LOCK: u16 = 1 << 0;
/// EVEX.b with a memory operand selects a 32-bit element broadcast.
pub(crate) const F_BCST32: u16 = 1 << 1;
/// EVEX.b with a memory operand selects a 64-bit element broadcast.
pub(crate) const F_BCST64: u16 = 1 << 2;
/// EVEX.b with a register operand selects embedded rounding.
pub(crate) const F_ER: u16 = 1 << 3;
/// EVEX.b with a register operand selects {sae}.
pub(crate) const F_SAE: u16 = 1 << 4;
/// An opmask ({k1}/{z}) is accepted.
pub(crate) const F_MASK: u16 = 1 << 5;

/// A fully selected instruction form.
#[derive(Debug, Clone, Copy)]
pub(crate) struct InstrDesc {
    pub code: Code,
    pub ops: &'static [OpSpec],
    /// Size of the r/m operand when it is memory.
    pub mem: MemorySize,
    /// Vector register width in bits for V/W/U/H operands.
    pub vl: u16,
    pub flags: u16,
}

impl InstrDesc {
    pub(crate) const fn new(code: Code, ops: &'static [OpSpec]) -> Self {
        Self {
            code,
            ops,
            mem: MemorySize::Unknown,
            vl: 0,
            flags: 0,
        }
    }

    pub(crate) const fn mem(mut self, mem: MemorySize) -> Self {
        self.mem = mem;
        self
    }

    pub(crate) const fn vl(mut self, vl: u16) -> Self {
        self.vl = vl;
        self
    }

    pub(crate) const fn flag(mut self, flags: u16) -> Self {
        self.flags |= flags;
        self
    }

    /// True if any operand consumes a ModRM byte.
    pub(crate) fn uses_modrm(&self) -> bool {
        self.ops.iter().any(|op| {
            matches!(
                op,
                OpSpec::Eb
                    | OpSpec::Ew
                    | OpSpec::Ev
                    | OpSpec::Ed
                    | OpSpec::Eq
                    | OpSpec::Gb
                    | OpSpec::Gw
                    | OpSpec::Gv
                    | OpSpec::Gd
                    | OpSpec::Gq
                    | OpSpec::Sreg
                    | OpSpec::Cr
                    | OpSpec::Dr
                    | OpSpec::M
                    | OpSpec::STi
                    | OpSpec::P
                    | OpSpec::Q
                    | OpSpec::N
                    | OpSpec::V
                    | OpSpec::W
                    | OpSpec::U
                    | OpSpec::Wx
                    | OpSpec::K
            )
        })
    }
}

/// One slot of an opcode map.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Handler {
    /// No instruction here.
    Invalid,
    /// A single form, independent of operand size.
    Op(InstrDesc),
    /// Select by effective operand size: `[o16, o32, o64]`.
    OpSize([InstrDesc; 3]),
    /// Like `OpSize`, but the operand size defaults to 64 in 64-bit mode
    /// (stack, near-branch and similar forms; `o32` is unreachable there).
    OpSizeD64([InstrDesc; 3]),
    /// Select by CPU mode.
    Mode {
        legacy: &'static Handler,
        x64: &'static Handler,
    },
    /// Select by mandatory prefix: `[none, 66, F3, F2]`.
    Prefix(&'static [Handler; 4]),
    /// Select by ModRM.reg.
    Group(&'static [Handler; 8]),
    /// Select by ModRM.mod: memory forms vs register forms.
    ModRm {
        mem: &'static Handler,
        reg: &'static Handler,
    },
    /// x87 escape: memory forms by ModRM.reg, register forms by the full
    /// ModRM byte (`modrm - 0xC0`).
    Fpu {
        mem: &'static [Handler; 8],
        reg: &'static [Handler; 64],
    },
    /// Select by VEX.L: `[128, 256]`.
    VexL(&'static [Handler; 2]),
    /// Select by VEX/EVEX/XOP.W.
    VexW(&'static [Handler; 2]),
    /// Select by EVEX.L'L: `[128, 256, 512]`.
    EvexL(&'static [Handler; 3]),
    /// Select by effective address size: `[16, 32, 64]` (`jcxz` family).
    AddrSize(&'static [Handler; 3]),
}

// Shorthand constructors used by the map modules.

pub(crate) const fn op(code: Code, ops: &'static [OpSpec]) -> Handler {
    Handler::Op(InstrDesc::new(code, ops))
}

pub(crate) const fn opm(code: Code, ops: &'static [OpSpec], mem: MemorySize) -> Handler {
    Handler::Op(InstrDesc::new(code, ops).mem(mem))
}

/// Operand-size trio sharing one operand template; the r/m memory size
/// follows the operand size.
pub(crate) const fn osz(c16: Code, c32: Code, c64: Code, ops: &'static [OpSpec]) -> Handler {
    Handler::OpSize([
        InstrDesc::new(c16, ops).mem(MemorySize::Word),
        InstrDesc::new(c32, ops).mem(MemorySize::Dword),
        InstrDesc::new(c64, ops).mem(MemorySize::Qword),
    ])
}

/// Like [`osz`], with the LOCK flag on every form.
pub(crate) const fn osz_lock(c16: Code, c32: Code, c64: Code, ops: &'static [OpSpec]) -> Handler {
    Handler::OpSize([
        InstrDesc::new(c16, ops).mem(MemorySize::Word).flag(F_LOCK),
        InstrDesc::new(c32, ops).mem(MemorySize::Dword).flag(F_LOCK),
        InstrDesc::new(c64, ops).mem(MemorySize::Qword).flag(F_LOCK),
    ])
}

/// Operand-size trio from full descriptors.
pub(crate) const fn osz3(d16: InstrDesc, d32: InstrDesc, d64: InstrDesc) -> Handler {
    Handler::OpSize([d16, d32, d64])
}

/// Operand-size pair for forms where REX.W changes nothing; the 32-bit form
/// also serves as the 64-bit slot.
pub(crate) const fn osz2(c16: Code, c32: Code, ops: &'static [OpSpec]) -> Handler {
    Handler::OpSize([
        InstrDesc::new(c16, ops).mem(MemorySize::Word),
        InstrDesc::new(c32, ops).mem(MemorySize::Dword),
        InstrDesc::new(c32, ops).mem(MemorySize::Dword),
    ])
}

/// Byte-sized ALU form with LOCK.
pub(crate) const fn op8_lock(code: Code, ops: &'static [OpSpec]) -> Handler {
    Handler::Op(InstrDesc::new(code, ops).mem(MemorySize::Byte).flag(F_LOCK))
}

pub(crate) const fn op8(code: Code, ops: &'static [OpSpec]) -> Handler {
    Handler::Op(InstrDesc::new(code, ops).mem(MemorySize::Byte))
}

pub(crate) const fn invalid64(h: &'static Handler) -> Handler {
    Handler::Mode {
        legacy: h,
        x64: &Handler::Invalid,
    }
}

pub(crate) const fn only64(h: &'static Handler) -> Handler {
    Handler::Mode {
        legacy: &Handler::Invalid,
        x64: h,
    }
}

// Common operand templates.
pub(crate) const EB_GB: &[OpSpec] = &[OpSpec::Eb, OpSpec::Gb];
pub(crate) const EV_GV: &[OpSpec] = &[OpSpec::Ev, OpSpec::Gv];
pub(crate) const GB_EB: &[OpSpec] = &[OpSpec::Gb, OpSpec::Eb];
pub(crate) const GV_EV: &[OpSpec] = &[OpSpec::Gv, OpSpec::Ev];
pub(crate) const AL_IB: &[OpSpec] = &[OpSpec::Reg(Register::AL), OpSpec::Ib];
pub(crate) const AX_IW: &[OpSpec] = &[OpSpec::Reg(Register::AX), OpSpec::Iw];
pub(crate) const EAX_IZ: &[OpSpec] = &[OpSpec::Reg(Register::EAX), OpSpec::Iz];
pub(crate) const RAX_IZ: &[OpSpec] = &[OpSpec::Reg(Register::RAX), OpSpec::Iz];
pub(crate) const EB_IB: &[OpSpec] = &[OpSpec::Eb, OpSpec::Ib];
pub(crate) const EV_IZ: &[OpSpec] = &[OpSpec::Ev, OpSpec::Iz];
pub(crate) const EV_IBSX: &[OpSpec] = &[OpSpec::Ev, OpSpec::IbSx];
pub(crate) const EV_1: &[OpSpec] = &[OpSpec::Ev, OpSpec::Const1];
pub(crate) const EV_CL: &[OpSpec] = &[OpSpec::Ev, OpSpec::Reg(Register::CL)];
pub(crate) const EB_1: &[OpSpec] = &[OpSpec::Eb, OpSpec::Const1];
pub(crate) const EB_CL: &[OpSpec] = &[OpSpec::Eb, OpSpec::Reg(Register::CL)];
pub(crate) const EV: &[OpSpec] = &[OpSpec::Ev];
pub(crate) const EB: &[OpSpec] = &[OpSpec::Eb];
pub(crate) const EW: &[OpSpec] = &[OpSpec::Ew];
pub(crate) const MEM: &[OpSpec] = &[OpSpec::M];
pub(crate) const REL8: &[OpSpec] = &[OpSpec::Rel8];
pub(crate) const RELZ: &[OpSpec] = &[OpSpec::RelZ];
pub(crate) const NONE: &[OpSpec] = &[];
pub(crate) const GV_M: &[OpSpec] = &[OpSpec::Gv, OpSpec::M];
pub(crate) const V_W: &[OpSpec] = &[OpSpec::V, OpSpec::W];
pub(crate) const W_V: &[OpSpec] = &[OpSpec::W, OpSpec::V];
pub(crate) const V_W_IB: &[OpSpec] = &[OpSpec::V, OpSpec::W, OpSpec::Ib];
pub(crate) const V_H_W: &[OpSpec] = &[OpSpec::V, OpSpec::H, OpSpec::W];
pub(crate) const V_H_W_IB: &[OpSpec] = &[OpSpec::V, OpSpec::H, OpSpec::W, OpSpec::Ib];
pub(crate) const P_Q: &[OpSpec] = &[OpSpec::P, OpSpec::Q];
pub(crate) const Q_P: &[OpSpec] = &[OpSpec::Q, OpSpec::P];
pub(crate) const P_Q_IB: &[OpSpec] = &[OpSpec::P, OpSpec::Q, OpSpec::Ib];
