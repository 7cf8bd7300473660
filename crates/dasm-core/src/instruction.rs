//! Decoded instruction representation.
//!
//! [`Instruction`] is a flat value type: fixed-size operand arrays, no heap
//! allocation, cheap to copy. The decoder fills one in; the formatters only
//! read it. All fields can also be set directly, so callers may hand-build
//! instructions, and the formatters render whatever they are given without
//! panicking.

use crate::code::Code;
use crate::register::Register;

/// Maximum number of operands an instruction can carry.
pub const MAX_OPERANDS: usize = 5;

/// How an instruction was encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncodingKind {
    /// Legacy (and REX-prefixed) encoding.
    #[default]
    Legacy,
    /// VEX (C4/C5) encoding.
    Vex,
    /// EVEX (62) encoding.
    Evex,
    /// XOP (8F) encoding.
    Xop,
    /// 3DNow! (0F 0F with opcode suffix byte).
    D3now,
}

/// What an operand slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpKind {
    /// A register; see [`Instruction::op_register`].
    #[default]
    Register,
    /// Near branch target, 16-bit instruction pointer.
    NearBranch16,
    /// Near branch target, 32-bit instruction pointer.
    NearBranch32,
    /// Near branch target, 64-bit instruction pointer.
    NearBranch64,
    /// Far branch, 16-bit selector and 16-bit offset.
    FarBranch16,
    /// Far branch, 16-bit selector and 32-bit offset.
    FarBranch32,
    /// 8-bit immediate.
    Imm8,
    /// Second 8-bit immediate (`enter`).
    Imm8_2nd,
    /// 16-bit immediate.
    Imm16,
    /// 32-bit immediate.
    Imm32,
    /// 64-bit immediate.
    Imm64,
    /// 8-bit immediate sign-extended to 16 bits.
    Imm8to16,
    /// 8-bit immediate sign-extended to 32 bits.
    Imm8to32,
    /// 8-bit immediate sign-extended to 64 bits.
    Imm8to64,
    /// 32-bit immediate sign-extended to 64 bits.
    Imm32to64,
    /// Memory operand; see the `memory_*` accessors.
    Memory,
}

/// Size and interpretation of a memory operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MemorySize {
    /// Size not known or not meaningful (descriptor tables, save areas).
    #[default]
    Unknown,
    Byte,
    Word,
    Dword,
    Qword,
    /// 128-bit packed data.
    Xmmword,
    /// 256-bit packed data.
    Ymmword,
    /// 512-bit packed data.
    Zmmword,
    /// 16:16 far pointer in memory.
    Ptr1616,
    /// 16:32 far pointer in memory.
    Ptr1632,
    /// 16:64 far pointer in memory.
    Ptr1664,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
    /// 80-bit floating point.
    Float80,
    /// x87 control/status word.
    FpuEnv16,
    /// Broadcast a 32-bit element.
    Bcst32,
    /// Broadcast a 64-bit element.
    Bcst64,
}

impl MemorySize {
    /// Operand size in bytes, 0 when unknown.
    pub fn size(self) -> u32 {
        match self {
            MemorySize::Unknown => 0,
            MemorySize::Byte => 1,
            MemorySize::Word | MemorySize::FpuEnv16 => 2,
            MemorySize::Dword | MemorySize::Float32 | MemorySize::Ptr1616 | MemorySize::Bcst32 => 4,
            MemorySize::Qword | MemorySize::Float64 | MemorySize::Bcst64 => 8,
            MemorySize::Ptr1632 => 6,
            MemorySize::Float80 | MemorySize::Ptr1664 => 10,
            MemorySize::Xmmword => 16,
            MemorySize::Ymmword => 32,
            MemorySize::Zmmword => 64,
        }
    }

    /// True for single-element broadcast forms.
    pub fn is_broadcast(self) -> bool {
        matches!(self, MemorySize::Bcst32 | MemorySize::Bcst64)
    }
}

/// Embedded rounding mode of an EVEX instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingControl {
    #[default]
    None,
    RoundToNearest,
    RoundDown,
    RoundUp,
    RoundTowardZero,
}

/// A single decoded (or hand-built) instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instruction {
    code: Code,
    encoding: EncodingKind,
    bitness: u8,
    ip: u64,
    len: u8,
    op_count: u8,
    op_kinds: [OpKind; MAX_OPERANDS],
    op_registers: [Register; MAX_OPERANDS],

    mem_base: Register,
    mem_index: Register,
    mem_scale: u8,
    mem_displ: i64,
    mem_displ_size: u8,
    mem_size: MemorySize,
    segment_prefix: Register,

    immediate: u64,
    immediate2: u8,
    branch_target: u64,
    far_selector: u16,

    has_lock: bool,
    has_rep: bool,
    has_repne: bool,

    opmask: Register,
    zeroing: bool,
    suppress_all_exceptions: bool,
    rounding: RoundingControl,
}

impl Instruction {
    /// A zeroed instruction with [`Code::INVALID`].
    pub fn new() -> Instruction {
        Instruction::default()
    }

    pub fn code(&self) -> Code {
        self.code
    }

    pub fn set_code(&mut self, code: Code) {
        self.code = code;
    }

    /// Canonical lower-case mnemonic of [`Self::code`].
    pub fn mnemonic(&self) -> &'static str {
        self.code.mnemonic()
    }

    pub fn is_invalid(&self) -> bool {
        self.code == Code::INVALID
    }

    pub fn encoding(&self) -> EncodingKind {
        self.encoding
    }

    pub fn set_encoding(&mut self, encoding: EncodingKind) {
        self.encoding = encoding;
    }

    /// CPU mode the instruction was decoded for: 16, 32 or 64. Zero for a
    /// default-constructed instruction.
    pub fn bitness(&self) -> u32 {
        self.bitness as u32
    }

    pub fn set_bitness(&mut self, bitness: u32) {
        self.bitness = bitness as u8;
    }

    /// Address of the first byte of the instruction.
    pub fn ip(&self) -> u64 {
        self.ip
    }

    pub fn set_ip(&mut self, ip: u64) {
        self.ip = ip;
    }

    /// Address of the byte following the instruction.
    pub fn next_ip(&self) -> u64 {
        self.ip.wrapping_add(self.len as u64)
    }

    /// Encoded length in bytes. At most 15.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn set_len(&mut self, len: usize) {
        self.len = len as u8;
    }

    pub fn op_count(&self) -> usize {
        self.op_count as usize
    }

    pub fn set_op_count(&mut self, count: usize) {
        debug_assert!(count <= MAX_OPERANDS);
        self.op_count = count as u8;
    }

    /// Kind of operand `index`. Out-of-range slots read as `OpKind::Register`
    /// with `Register::None`.
    pub fn op_kind(&self, index: usize) -> OpKind {
        self.op_kinds.get(index).copied().unwrap_or_default()
    }

    pub fn set_op_kind(&mut self, index: usize, kind: OpKind) {
        self.op_kinds[index] = kind;
    }

    /// Register of operand `index` when its kind is `OpKind::Register`.
    pub fn op_register(&self, index: usize) -> Register {
        self.op_registers.get(index).copied().unwrap_or_default()
    }

    pub fn set_op_register(&mut self, index: usize, reg: Register) {
        self.op_registers[index] = reg;
    }

    /// Appends a register operand.
    pub fn push_register(&mut self, reg: Register) {
        let i = self.op_count as usize;
        self.op_kinds[i] = OpKind::Register;
        self.op_registers[i] = reg;
        self.op_count += 1;
    }

    /// Appends a non-register operand.
    pub fn push_op(&mut self, kind: OpKind) {
        self.op_kinds[self.op_count as usize] = kind;
        self.op_count += 1;
    }

    pub fn memory_base(&self) -> Register {
        self.mem_base
    }

    pub fn set_memory_base(&mut self, reg: Register) {
        self.mem_base = reg;
    }

    pub fn memory_index(&self) -> Register {
        self.mem_index
    }

    pub fn set_memory_index(&mut self, reg: Register) {
        self.mem_index = reg;
    }

    /// Index register scale, 1, 2, 4 or 8.
    pub fn memory_index_scale(&self) -> u32 {
        self.mem_scale.max(1) as u32
    }

    pub fn set_memory_index_scale(&mut self, scale: u32) {
        self.mem_scale = scale as u8;
    }

    /// Sign-extended memory displacement.
    pub fn memory_displacement(&self) -> i64 {
        self.mem_displ
    }

    pub fn set_memory_displacement(&mut self, displ: i64) {
        self.mem_displ = displ;
    }

    /// Encoded displacement width in bytes (0, 1, 2, 4 or 8).
    pub fn memory_displ_size(&self) -> u32 {
        self.mem_displ_size as u32
    }

    pub fn set_memory_displ_size(&mut self, size: u32) {
        self.mem_displ_size = size as u8;
    }

    pub fn memory_size(&self) -> MemorySize {
        self.mem_size
    }

    pub fn set_memory_size(&mut self, size: MemorySize) {
        self.mem_size = size;
    }

    /// Explicit segment override, or `Register::None`.
    pub fn segment_prefix(&self) -> Register {
        self.segment_prefix
    }

    pub fn set_segment_prefix(&mut self, reg: Register) {
        self.segment_prefix = reg;
    }

    /// Primary immediate, zero- or sign-extended per the operand kind.
    pub fn immediate(&self) -> u64 {
        self.immediate
    }

    pub fn set_immediate(&mut self, imm: u64) {
        self.immediate = imm;
    }

    /// Second immediate byte (`enter imm16, imm8`).
    pub fn immediate8_2nd(&self) -> u8 {
        self.immediate2
    }

    pub fn set_immediate8_2nd(&mut self, imm: u8) {
        self.immediate2 = imm;
    }

    /// Near branch target, or far branch offset.
    pub fn branch_target(&self) -> u64 {
        self.branch_target
    }

    pub fn set_branch_target(&mut self, target: u64) {
        self.branch_target = target;
    }

    /// Far branch code segment selector.
    pub fn far_branch_selector(&self) -> u16 {
        self.far_selector
    }

    pub fn set_far_branch_selector(&mut self, selector: u16) {
        self.far_selector = selector;
    }

    pub fn has_lock_prefix(&self) -> bool {
        self.has_lock
    }

    pub fn set_has_lock_prefix(&mut self, v: bool) {
        self.has_lock = v;
    }

    pub fn has_rep_prefix(&self) -> bool {
        self.has_rep
    }

    pub fn set_has_rep_prefix(&mut self, v: bool) {
        self.has_rep = v;
    }

    pub fn has_repne_prefix(&self) -> bool {
        self.has_repne
    }

    pub fn set_has_repne_prefix(&mut self, v: bool) {
        self.has_repne = v;
    }

    /// Opmask register, or `Register::None` / `K0` when unmasked.
    pub fn opmask(&self) -> Register {
        self.opmask
    }

    pub fn set_opmask(&mut self, reg: Register) {
        self.opmask = reg;
    }

    pub fn has_opmask(&self) -> bool {
        self.opmask != Register::None && self.opmask != Register::K0
    }

    /// EVEX zeroing-masking.
    pub fn zeroing_masking(&self) -> bool {
        self.zeroing
    }

    pub fn set_zeroing_masking(&mut self, v: bool) {
        self.zeroing = v;
    }

    /// EVEX `{sae}`.
    pub fn suppress_all_exceptions(&self) -> bool {
        self.suppress_all_exceptions
    }

    pub fn set_suppress_all_exceptions(&mut self, v: bool) {
        self.suppress_all_exceptions = v;
    }

    pub fn rounding_control(&self) -> RoundingControl {
        self.rounding
    }

    pub fn set_rounding_control(&mut self, rc: RoundingControl) {
        self.rounding = rc;
    }

    /// True if the memory operand is a single-element broadcast.
    pub fn is_broadcast(&self) -> bool {
        self.mem_size.is_broadcast()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_invalid() {
        let instr = Instruction::new();
        assert!(instr.is_invalid());
        assert_eq!(instr.op_count(), 0);
        assert_eq!(instr.op_kind(0), OpKind::Register);
        assert_eq!(instr.op_register(0), Register::None);
    }

    #[test]
    fn push_operands() {
        let mut instr = Instruction::new();
        instr.set_code(Code::Add_rm32_r32);
        instr.push_register(Register::EAX);
        instr.push_register(Register::ECX);
        assert_eq!(instr.op_count(), 2);
        assert_eq!(instr.op_register(1), Register::ECX);
        assert_eq!(instr.mnemonic(), "add");
    }

    #[test]
    fn out_of_range_operand_reads_are_safe() {
        let instr = Instruction::new();
        assert_eq!(instr.op_kind(9), OpKind::Register);
        assert_eq!(instr.op_register(9), Register::None);
    }

    #[test]
    fn next_ip_wraps() {
        let mut instr = Instruction::new();
        instr.set_ip(u64::MAX);
        instr.set_len(1);
        assert_eq!(instr.next_ip(), 0);
    }
}
