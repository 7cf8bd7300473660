//! The instruction decoder.
//!
//! Decoding walks a handler tree: the opcode byte indexes a 256-entry map and
//! each selector narrows on one dimension (mode, operand size, mandatory
//! prefix, ModRM fields, vector length, W) until a terminal descriptor is
//! reached, whose operand specs then drive the byte consumption. The ModRM
//! byte is read at most once, lazily, because some selectors need it before
//! the operand pass does.

use dasm_core::{
    Code, EncodingKind, Instruction, MemorySize, OpKind, Register, RoundingControl,
};

use crate::error::DecodeError;
use crate::maps;
use crate::prefix::{Prefixes, Rex, VectorPrefix};
use crate::reader::Reader;
use crate::table::{
    Handler, InstrDesc, OpSpec, F_BCST32, F_BCST64, F_ER, F_LOCK, F_MASK, F_SAE,
};

/// Which optional encodings the decoder recognizes. Disabling one makes its
/// escape bytes decode as invalid (or as the overlapping legacy instruction
/// where one exists).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderOptions {
    pub vex: bool,
    pub evex: bool,
    pub xop: bool,
    pub d3now: bool,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            vex: true,
            evex: true,
            xop: true,
            d3now: true,
        }
    }
}

/// Streaming x86 instruction decoder over a byte buffer.
///
/// `decode` pulls the next instruction; the [`Iterator`] impl does the same
/// but resynchronizes one byte forward after a failure so a block of mixed
/// code and data can still be walked to the end.
#[derive(Debug)]
pub struct Decoder<'a> {
    bitness: u32,
    data: &'a [u8],
    position: usize,
    ip: u64,
    options: DecoderOptions,
}

/// Per-instruction mutable state threaded through the handler walk.
struct Ctx {
    prefixes: Prefixes,
    vector: Option<VectorPrefix>,
    modrm: Option<u8>,
    opcode: u8,
    /// Operand-size index: 0 = 16, 1 = 32, 2 = 64.
    osize: usize,
    /// Address-size index: 0 = 16, 1 = 32, 2 = 64.
    asize: usize,
}

/// A relative branch recorded during the operand pass and resolved once the
/// total length is known.
enum PendingBranch {
    Near(i64),
}

impl<'a> Decoder<'a> {
    /// Creates a decoder for the given mode.
    ///
    /// # Panics
    ///
    /// Panics if `bitness` is not 16, 32 or 64.
    pub fn new(bitness: u32, data: &'a [u8]) -> Self {
        assert!(
            bitness == 16 || bitness == 32 || bitness == 64,
            "bitness must be 16, 32 or 64"
        );
        Self {
            bitness,
            data,
            position: 0,
            ip: 0,
            options: DecoderOptions::default(),
        }
    }

    /// Sets the instruction pointer of the first byte of `data`.
    pub fn with_ip(mut self, ip: u64) -> Self {
        self.ip = ip;
        self
    }

    pub fn with_options(mut self, options: DecoderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn bitness(&self) -> u32 {
        self.bitness
    }

    /// Byte offset of the next instruction within the buffer.
    pub fn position(&self) -> usize {
        self.position
    }

    /// True if any bytes remain.
    pub fn can_decode(&self) -> bool {
        self.position < self.data.len()
    }

    /// Decodes the instruction at the current position and advances past it
    /// on success. On failure the position is left unchanged.
    pub fn decode(&mut self) -> Result<Instruction, DecodeError> {
        let mut reader = Reader::new(&self.data[self.position..]);
        let mut instr = Instruction::new();
        instr.set_bitness(self.bitness);
        instr.set_ip(self.ip);
        self.decode_one(&mut reader, &mut instr)?;
        let len = reader.position();
        instr.set_len(len);
        self.position += len;
        self.ip = self.ip.wrapping_add(len as u64);
        Ok(instr)
    }

    fn decode_one(
        &self,
        r: &mut Reader<'_>,
        instr: &mut Instruction,
    ) -> Result<(), DecodeError> {
        let mut ctx = Ctx {
            prefixes: Prefixes::default(),
            vector: None,
            modrm: None,
            opcode: 0,
            osize: 0,
            asize: 0,
        };

        // Prefix accumulation; conflicting prefixes are last-one-wins, and a
        // REX only counts when it is the byte immediately before the opcode.
        let opcode = loop {
            let byte = r.read_u8()?;
            match byte {
                0xF0 => ctx.prefixes.lock = true,
                0xF2 => {
                    ctx.prefixes.repne = true;
                    ctx.prefixes.rep = false;
                }
                0xF3 => {
                    ctx.prefixes.rep = true;
                    ctx.prefixes.repne = false;
                }
                0x26 => ctx.prefixes.segment = Register::ES,
                0x2E => ctx.prefixes.segment = Register::CS,
                0x36 => ctx.prefixes.segment = Register::SS,
                0x3E => ctx.prefixes.segment = Register::DS,
                0x64 => ctx.prefixes.segment = Register::FS,
                0x65 => ctx.prefixes.segment = Register::GS,
                0x66 => ctx.prefixes.operand_size = true,
                0x67 => ctx.prefixes.address_size = true,
                0x40..=0x4F if self.bitness == 64 => {
                    ctx.prefixes.rex = Some(Rex::from_byte(byte));
                    continue;
                }
                _ => break byte,
            }
            ctx.prefixes.rex = None;
        };
        ctx.opcode = opcode;

        ctx.osize = match self.bitness {
            16 => usize::from(ctx.prefixes.operand_size),
            32 => usize::from(!ctx.prefixes.operand_size),
            _ => {
                if ctx.prefixes.rex.is_some_and(|rex| rex.w) {
                    2
                } else {
                    usize::from(!ctx.prefixes.operand_size)
                }
            }
        };
        ctx.asize = match self.bitness {
            16 => usize::from(ctx.prefixes.address_size),
            32 => usize::from(!ctx.prefixes.address_size),
            _ => 2 - usize::from(ctx.prefixes.address_size),
        };

        match opcode {
            0xC5 if self.vex2_eligible(r) => return self.decode_vex2(r, instr, ctx),
            0xC4 if self.vex3_eligible(r) => return self.decode_vex3(r, instr, ctx),
            0x62 if self.evex_eligible(r) => return self.decode_evex(r, instr, ctx),
            0x8F if self.xop_eligible(r) => return self.decode_xop(r, instr, ctx),
            0x0F => {
                let second = r.read_u8()?;
                match second {
                    0x0F => return self.decode_d3now(r, instr, ctx),
                    0x38 => {
                        ctx.opcode = r.read_u8()?;
                        return self.decode_from(r, instr, ctx, &maps::MAP_0F38);
                    }
                    0x3A => {
                        ctx.opcode = r.read_u8()?;
                        return self.decode_from(r, instr, ctx, &maps::MAP_0F3A);
                    }
                    _ => {
                        ctx.opcode = second;
                        return self.decode_from(r, instr, ctx, &maps::MAP_0F);
                    }
                }
            }
            _ => {}
        }
        self.decode_from(r, instr, ctx, &maps::MAP_LEGACY)
    }

    /// In 16/32-bit mode, C5/C4/62 only escape when the following byte's top
    /// two bits are both set (otherwise it is lds/les/bound); in 64-bit mode
    /// they always escape.
    fn vex2_eligible(&self, r: &Reader<'_>) -> bool {
        self.bitness == 64 || r.peek_at(0).is_some_and(|b| b & 0xC0 == 0xC0)
    }

    fn vex3_eligible(&self, r: &Reader<'_>) -> bool {
        self.bitness == 64 || r.peek_at(0).is_some_and(|b| b & 0xC0 == 0xC0)
    }

    fn evex_eligible(&self, r: &Reader<'_>) -> bool {
        self.bitness == 64 || r.peek_at(0).is_some_and(|b| b & 0xC0 == 0xC0)
    }

    /// 8F is XOP only when the would-be ModRM.reg field is non-zero (reg 0 is
    /// `pop r/m`), in every mode.
    fn xop_eligible(&self, r: &Reader<'_>) -> bool {
        r.peek_at(0).is_some_and(|b| b & 0x38 != 0)
    }

    fn check_vector_prefixes(&self, r: &Reader<'_>, ctx: &Ctx) -> Result<(), DecodeError> {
        if ctx.prefixes.blocks_vector_escape() {
            return Err(DecodeError::invalid_prefix(
                r.position(),
                "legacy prefix before a vector escape",
            ));
        }
        Ok(())
    }

    fn decode_vex2(
        &self,
        r: &mut Reader<'_>,
        instr: &mut Instruction,
        mut ctx: Ctx,
    ) -> Result<(), DecodeError> {
        self.check_vector_prefixes(r, &ctx)?;
        if !self.options.vex {
            return Err(DecodeError::invalid_opcode(r.position(), self.bitness));
        }
        let p0 = r.read_u8()?;
        ctx.vector = Some(VectorPrefix::from_vex2(p0));
        ctx.opcode = r.read_u8()?;
        instr.set_encoding(EncodingKind::Vex);
        self.decode_from(r, instr, ctx, &maps::VEX_MAP1)
    }

    fn decode_vex3(
        &self,
        r: &mut Reader<'_>,
        instr: &mut Instruction,
        mut ctx: Ctx,
    ) -> Result<(), DecodeError> {
        self.check_vector_prefixes(r, &ctx)?;
        if !self.options.vex {
            return Err(DecodeError::invalid_opcode(r.position(), self.bitness));
        }
        let p0 = r.read_u8()?;
        let p1 = r.read_u8()?;
        let vp = VectorPrefix::from_vex3(p0, p1);
        let map: &[Handler; 256] = match vp.map {
            1 => &maps::VEX_MAP1,
            2 => &maps::VEX_MAP2,
            3 => &maps::VEX_MAP3,
            _ => return Err(DecodeError::invalid_opcode(r.position(), self.bitness)),
        };
        ctx.vector = Some(vp);
        ctx.opcode = r.read_u8()?;
        instr.set_encoding(EncodingKind::Vex);
        self.decode_from(r, instr, ctx, map)
    }

    fn decode_evex(
        &self,
        r: &mut Reader<'_>,
        instr: &mut Instruction,
        mut ctx: Ctx,
    ) -> Result<(), DecodeError> {
        self.check_vector_prefixes(r, &ctx)?;
        if !self.options.evex {
            return Err(DecodeError::invalid_opcode(r.position(), self.bitness));
        }
        let payload_pos = r.position();
        let p0 = r.read_u8()?;
        let p1 = r.read_u8()?;
        let p2 = r.read_u8()?;
        let vp = VectorPrefix::from_evex(p0, p1, p2)
            .ok_or_else(|| DecodeError::reserved_bits(payload_pos))?;
        // L'L = 3 is reserved unless EVEX.b repurposes it as rounding control.
        if vp.vector_len().is_none() && !vp.bcst {
            return Err(DecodeError::reserved_bits(payload_pos));
        }
        let map: &[Handler; 256] = match vp.map {
            1 => &maps::EVEX_MAP1,
            2 => &maps::EVEX_MAP2,
            3 => &maps::EVEX_MAP3,
            _ => return Err(DecodeError::invalid_opcode(r.position(), self.bitness)),
        };
        ctx.vector = Some(vp);
        ctx.opcode = r.read_u8()?;
        instr.set_encoding(EncodingKind::Evex);
        self.decode_from(r, instr, ctx, map)
    }

    fn decode_xop(
        &self,
        r: &mut Reader<'_>,
        instr: &mut Instruction,
        mut ctx: Ctx,
    ) -> Result<(), DecodeError> {
        self.check_vector_prefixes(r, &ctx)?;
        if !self.options.xop {
            return Err(DecodeError::invalid_opcode(r.position(), self.bitness));
        }
        let p0 = r.read_u8()?;
        let p1 = r.read_u8()?;
        let vp = VectorPrefix::from_vex3(p0, p1);
        if vp.pp != 0 {
            return Err(DecodeError::invalid_opcode(r.position(), self.bitness));
        }
        let map: &[Handler; 256] = match vp.map {
            8 => &maps::XOP_MAP8,
            9 => &maps::XOP_MAP9,
            10 => &maps::XOP_MAPA,
            _ => return Err(DecodeError::invalid_opcode(r.position(), self.bitness)),
        };
        ctx.vector = Some(vp);
        ctx.opcode = r.read_u8()?;
        instr.set_encoding(EncodingKind::Xop);
        self.decode_from(r, instr, ctx, map)
    }

    /// 0F 0F: the operands come first and the operation byte last.
    fn decode_d3now(
        &self,
        r: &mut Reader<'_>,
        instr: &mut Instruction,
        mut ctx: Ctx,
    ) -> Result<(), DecodeError> {
        if !self.options.d3now {
            return Err(DecodeError::invalid_opcode(r.position(), self.bitness));
        }
        instr.set_encoding(EncodingKind::D3now);
        const D3NOW_DESC: InstrDesc =
            InstrDesc::new(Code::INVALID, &[OpSpec::P, OpSpec::Q]).mem(MemorySize::Qword);
        self.assemble(r, instr, &mut ctx, &D3NOW_DESC)?;
        let suffix_pos = r.position();
        let suffix = r.read_u8()?;
        let code = maps::D3NOW_CODES[suffix as usize];
        if code == Code::INVALID {
            return Err(DecodeError::invalid_opcode(suffix_pos, self.bitness));
        }
        instr.set_code(code);
        self.finish(r, instr, &ctx, &D3NOW_DESC)
    }

    fn decode_from(
        &self,
        r: &mut Reader<'_>,
        instr: &mut Instruction,
        mut ctx: Ctx,
        map: &'static [Handler; 256],
    ) -> Result<(), DecodeError> {
        let entry = &map[ctx.opcode as usize];
        let desc = self.walk(r, &mut ctx, entry)?;
        instr.set_code(desc.code);
        self.check_vector_fields(r, &ctx, &desc)?;
        let pending = self.assemble(r, instr, &mut ctx, &desc)?;
        if let Some(branch) = pending {
            self.resolve_branch(r, instr, &ctx, branch);
        }
        self.finish(r, instr, &ctx, &desc)
    }

    /// Narrows a handler to a terminal descriptor.
    fn walk(
        &self,
        r: &mut Reader<'_>,
        ctx: &mut Ctx,
        mut handler: &'static Handler,
    ) -> Result<InstrDesc, DecodeError> {
        loop {
            handler = match *handler {
                Handler::Invalid => {
                    return Err(DecodeError::invalid_opcode(r.position(), self.bitness))
                }
                Handler::Op(desc) => return Ok(desc),
                Handler::OpSize(ref descs) => return Ok(descs[ctx.osize]),
                Handler::OpSizeD64(ref descs) => {
                    // The promotion also has to reach Ev/Iz sizing below.
                    if self.bitness == 64 && !ctx.prefixes.operand_size {
                        ctx.osize = 2;
                    }
                    return Ok(descs[ctx.osize]);
                }
                Handler::Mode { legacy, x64 } => {
                    if self.bitness == 64 {
                        x64
                    } else {
                        legacy
                    }
                }
                Handler::Prefix(slots) => {
                    if let Some(vp) = ctx.vector {
                        &slots[vp.pp as usize]
                    } else if ctx.prefixes.repne {
                        // F2/F3 are consumed as mandatory prefixes; 66 is
                        // not, so its operand-size effect still applies to a
                        // size-split slot (bsf/tzcnt style rows).
                        ctx.prefixes.repne = false;
                        &slots[3]
                    } else if ctx.prefixes.rep {
                        ctx.prefixes.rep = false;
                        &slots[2]
                    } else if ctx.prefixes.operand_size {
                        &slots[1]
                    } else {
                        &slots[0]
                    }
                }
                Handler::Group(group) => {
                    let modrm = self.peek_modrm(r, ctx)?;
                    &group[((modrm >> 3) & 7) as usize]
                }
                Handler::ModRm { mem, reg } => {
                    if self.peek_modrm(r, ctx)? >= 0xC0 {
                        reg
                    } else {
                        mem
                    }
                }
                Handler::Fpu { mem, reg } => {
                    let modrm = self.peek_modrm(r, ctx)?;
                    if modrm >= 0xC0 {
                        &reg[(modrm - 0xC0) as usize]
                    } else {
                        &mem[((modrm >> 3) & 7) as usize]
                    }
                }
                Handler::VexL(pair) => {
                    let vp = self.vector(r, ctx)?;
                    match vp.ll {
                        0 => &pair[0],
                        1 => &pair[1],
                        _ => {
                            return Err(DecodeError::invalid_opcode(
                                r.position(),
                                self.bitness,
                            ))
                        }
                    }
                }
                Handler::VexW(pair) => {
                    let w = match ctx.vector {
                        Some(vp) => vp.w,
                        None => ctx.prefixes.rex.is_some_and(|rex| rex.w),
                    };
                    &pair[usize::from(w)]
                }
                Handler::EvexL(triple) => {
                    let vp = self.vector(r, ctx)?;
                    // With EVEX.b on a register form, L'L carries the
                    // rounding control and the operation is full-width.
                    if vp.bcst && self.peek_modrm(r, ctx)? >= 0xC0 {
                        &triple[2]
                    } else {
                        match vp.ll {
                            0 => &triple[0],
                            1 => &triple[1],
                            2 => &triple[2],
                            _ => return Err(DecodeError::reserved_bits(r.position())),
                        }
                    }
                }
                Handler::AddrSize(slots) => &slots[ctx.asize],
            };
        }
    }

    fn vector(&self, r: &Reader<'_>, ctx: &Ctx) -> Result<VectorPrefix, DecodeError> {
        ctx.vector
            .ok_or_else(|| DecodeError::invalid_opcode(r.position(), self.bitness))
    }

    fn peek_modrm(&self, r: &mut Reader<'_>, ctx: &mut Ctx) -> Result<u8, DecodeError> {
        if let Some(modrm) = ctx.modrm {
            return Ok(modrm);
        }
        let modrm = r.read_u8()?;
        ctx.modrm = Some(modrm);
        Ok(modrm)
    }

    /// Post-selection validation of the vector prefix fields against the
    /// descriptor.
    fn check_vector_fields(
        &self,
        r: &Reader<'_>,
        ctx: &Ctx,
        desc: &InstrDesc,
    ) -> Result<(), DecodeError> {
        let Some(vp) = ctx.vector else { return Ok(()) };
        let takes_vvvv = desc.ops.iter().any(|op| {
            matches!(op, OpSpec::H | OpSpec::Bd | OpSpec::Bq)
        });
        if !takes_vvvv && vp.vvvv != 0 {
            return Err(DecodeError::invalid_opcode(r.position(), self.bitness));
        }
        if vp.aaa != 0 && desc.flags & F_MASK == 0 {
            return Err(DecodeError::invalid_opcode(r.position(), self.bitness));
        }
        if vp.z && vp.aaa == 0 {
            return Err(DecodeError::invalid_opcode(r.position(), self.bitness));
        }
        Ok(())
    }

    /// Resolves every operand spec of the descriptor against the remaining
    /// bytes.
    fn assemble(
        &self,
        r: &mut Reader<'_>,
        instr: &mut Instruction,
        ctx: &mut Ctx,
        desc: &InstrDesc,
    ) -> Result<Option<PendingBranch>, DecodeError> {
        let mut pending = None;
        if desc.uses_modrm() {
            self.peek_modrm(r, ctx)?;
        }
        for &spec in desc.ops {
            match spec {
                OpSpec::Eb => self.rm_gpr(r, instr, ctx, desc, 8)?,
                OpSpec::Ew => self.rm_gpr(r, instr, ctx, desc, 16)?,
                OpSpec::Ev => {
                    let size = [16, 32, 64][ctx.osize];
                    self.rm_gpr(r, instr, ctx, desc, size)?;
                }
                OpSpec::Ed => self.rm_gpr(r, instr, ctx, desc, 32)?,
                OpSpec::Eq => self.rm_gpr(r, instr, ctx, desc, 64)?,
                OpSpec::Gb => {
                    instr.push_register(Register::gpr8(self.modrm_reg(ctx), ctx.prefixes.rex.is_some()));
                }
                OpSpec::Gw => instr.push_register(Register::gpr16(self.modrm_reg(ctx))),
                OpSpec::Gv => {
                    let size = [16, 32, 64][ctx.osize];
                    instr.push_register(Register::gpr(self.modrm_reg(ctx), size, false));
                }
                OpSpec::Gd => instr.push_register(Register::gpr32(self.modrm_reg(ctx))),
                OpSpec::Gq => instr.push_register(Register::gpr64(self.modrm_reg(ctx))),
                OpSpec::Sreg => {
                    let seg = Register::segment(self.modrm_reg(ctx) & 7);
                    if seg == Register::None {
                        return Err(DecodeError::invalid_opcode(r.position(), self.bitness));
                    }
                    instr.push_register(seg);
                }
                OpSpec::Cr => {
                    let cr = Register::cr(self.modrm_reg(ctx));
                    if cr == Register::None {
                        return Err(DecodeError::invalid_opcode(r.position(), self.bitness));
                    }
                    instr.push_register(cr);
                }
                OpSpec::Dr => {
                    let dr = Register::dr(self.modrm_reg(ctx));
                    if dr == Register::None {
                        return Err(DecodeError::invalid_opcode(r.position(), self.bitness));
                    }
                    instr.push_register(dr);
                }
                OpSpec::M => {
                    let modrm = ctx.modrm.unwrap_or(0xC0);
                    if modrm >= 0xC0 {
                        return Err(DecodeError::invalid_opcode(r.position(), self.bitness));
                    }
                    self.memory_operand(r, instr, ctx, desc)?;
                }
                OpSpec::Ib => {
                    instr.set_immediate(u64::from(r.read_u8()?));
                    instr.push_op(OpKind::Imm8);
                }
                OpSpec::IbSx => {
                    let value = r.read_u8()? as i8 as i64;
                    instr.set_immediate(value as u64);
                    instr.push_op([OpKind::Imm8to16, OpKind::Imm8to32, OpKind::Imm8to64][ctx.osize]);
                }
                OpSpec::Iw => {
                    instr.set_immediate(u64::from(r.read_u16()?));
                    instr.push_op(OpKind::Imm16);
                }
                OpSpec::Iz => match ctx.osize {
                    0 => {
                        instr.set_immediate(u64::from(r.read_u16()?));
                        instr.push_op(OpKind::Imm16);
                    }
                    1 => {
                        instr.set_immediate(u64::from(r.read_u32()?));
                        instr.push_op(OpKind::Imm32);
                    }
                    _ => {
                        instr.set_immediate(r.read_u32()? as i32 as i64 as u64);
                        instr.push_op(OpKind::Imm32to64);
                    }
                },
                OpSpec::Iq => {
                    instr.set_immediate(r.read_u64()?);
                    instr.push_op(OpKind::Imm64);
                }
                OpSpec::Ib2 => {
                    instr.set_immediate8_2nd(r.read_u8()?);
                    instr.push_op(OpKind::Imm8_2nd);
                }
                OpSpec::Const1 => {
                    instr.set_immediate(1);
                    instr.push_op(OpKind::Imm8);
                }
                OpSpec::Rel8 => {
                    let displ = r.read_u8()? as i8 as i64;
                    pending = Some(PendingBranch::Near(displ));
                }
                OpSpec::RelZ => {
                    let displ = if ctx.osize == 0 {
                        r.read_u16()? as i16 as i64
                    } else {
                        r.read_u32()? as i32 as i64
                    };
                    pending = Some(PendingBranch::Near(displ));
                }
                OpSpec::Ap => {
                    if ctx.osize == 0 {
                        let offset = r.read_u16()?;
                        let selector = r.read_u16()?;
                        instr.set_branch_target(u64::from(offset));
                        instr.set_far_branch_selector(selector);
                        instr.push_op(OpKind::FarBranch16);
                    } else {
                        let offset = r.read_u32()?;
                        let selector = r.read_u16()?;
                        instr.set_branch_target(u64::from(offset));
                        instr.set_far_branch_selector(selector);
                        instr.push_op(OpKind::FarBranch32);
                    }
                }
                OpSpec::Moffs => {
                    let (displ, displ_size) = match ctx.asize {
                        0 => (u64::from(r.read_u16()?), 2),
                        1 => (u64::from(r.read_u32()?), 4),
                        _ => (r.read_u64()?, 8),
                    };
                    instr.set_memory_displacement(displ as i64);
                    instr.set_memory_displ_size(displ_size);
                    instr.set_memory_size(desc.mem);
                    instr.push_op(OpKind::Memory);
                }
                OpSpec::Reg(reg) => instr.push_register(reg),
                OpSpec::OpReg8 => {
                    instr.push_register(Register::gpr8(self.opcode_reg(ctx), ctx.prefixes.rex.is_some()));
                }
                OpSpec::OpReg16 => instr.push_register(Register::gpr16(self.opcode_reg(ctx))),
                OpSpec::OpReg32 => instr.push_register(Register::gpr32(self.opcode_reg(ctx))),
                OpSpec::OpReg64 => instr.push_register(Register::gpr64(self.opcode_reg(ctx))),
                OpSpec::STi => {
                    let modrm = ctx.modrm.unwrap_or(0xC0);
                    instr.push_register(Register::st(u32::from(modrm & 7)));
                }
                OpSpec::P => instr.push_register(Register::mm(self.modrm_reg(ctx) & 7)),
                OpSpec::Q => {
                    let modrm = self.peek_modrm(r, ctx)?;
                    if modrm >= 0xC0 {
                        instr.push_register(Register::mm(u32::from(modrm & 7)));
                    } else {
                        self.memory_operand(r, instr, ctx, desc)?;
                    }
                }
                OpSpec::N => {
                    let modrm = ctx.modrm.unwrap_or(0xC0);
                    instr.push_register(Register::mm(u32::from(modrm & 7)));
                }
                OpSpec::V => {
                    instr.push_register(Register::vector(self.modrm_reg(ctx), u32::from(desc.vl)));
                }
                OpSpec::W => {
                    let modrm = self.peek_modrm(r, ctx)?;
                    if modrm >= 0xC0 {
                        instr.push_register(Register::vector(
                            self.modrm_rm_vec(ctx),
                            u32::from(desc.vl),
                        ));
                    } else {
                        self.memory_operand(r, instr, ctx, desc)?;
                    }
                }
                OpSpec::U => {
                    instr.push_register(Register::vector(
                        self.modrm_rm_vec(ctx),
                        u32::from(desc.vl),
                    ));
                }
                OpSpec::Wx => {
                    let modrm = self.peek_modrm(r, ctx)?;
                    if modrm >= 0xC0 {
                        instr.push_register(Register::xmm(self.modrm_rm_vec(ctx)));
                    } else {
                        self.memory_operand(r, instr, ctx, desc)?;
                    }
                }
                OpSpec::H => {
                    let vvvv = ctx.vector.map_or(0, |vp| u32::from(vp.vvvv));
                    instr.push_register(Register::vector(vvvv, u32::from(desc.vl)));
                }
                OpSpec::Bd => {
                    let vvvv = ctx.vector.map_or(0, |vp| u32::from(vp.vvvv));
                    instr.push_register(Register::gpr32(vvvv));
                }
                OpSpec::Bq => {
                    let vvvv = ctx.vector.map_or(0, |vp| u32::from(vp.vvvv));
                    instr.push_register(Register::gpr64(vvvv));
                }
                OpSpec::K => {
                    instr.push_register(Register::k(self.modrm_reg(ctx) & 7));
                }
            }
        }
        Ok(pending)
    }

    /// ModRM.reg with the REX.R / vector R (and R') extension.
    fn modrm_reg(&self, ctx: &Ctx) -> u32 {
        let reg = u32::from((ctx.modrm.unwrap_or(0) >> 3) & 7);
        if let Some(vp) = ctx.vector {
            reg | vp.reg_extend()
        } else if ctx.prefixes.rex.is_some_and(|rex| rex.r) {
            reg | 8
        } else {
            reg
        }
    }

    /// ModRM.rm for register forms, with the REX.B / vector B extension.
    fn modrm_rm(&self, ctx: &Ctx) -> u32 {
        let rm = u32::from(ctx.modrm.unwrap_or(0) & 7);
        let ext = match ctx.vector {
            Some(vp) => vp.b,
            None => ctx.prefixes.rex.is_some_and(|rex| rex.b),
        };
        if ext {
            rm | 8
        } else {
            rm
        }
    }

    /// ModRM.rm for vector register forms. EVEX has no SIB byte to index
    /// here, so X doubles as bit 4 of the register number; GPR forms stay
    /// at 4 bits.
    fn modrm_rm_vec(&self, ctx: &Ctx) -> u32 {
        let rm = self.modrm_rm(ctx);
        match ctx.vector {
            Some(vp) if vp.evex && vp.x => rm | 16,
            _ => rm,
        }
    }

    fn opcode_reg(&self, ctx: &Ctx) -> u32 {
        let n = u32::from(ctx.opcode & 7);
        if ctx.prefixes.rex.is_some_and(|rex| rex.b) {
            n | 8
        } else {
            n
        }
    }

    /// A ModRM r/m operand that resolves to a GPR or memory.
    fn rm_gpr(
        &self,
        r: &mut Reader<'_>,
        instr: &mut Instruction,
        ctx: &mut Ctx,
        desc: &InstrDesc,
        size: u32,
    ) -> Result<(), DecodeError> {
        let modrm = self.peek_modrm(r, ctx)?;
        if modrm >= 0xC0 {
            let rex = ctx.prefixes.rex.is_some();
            instr.push_register(Register::gpr(self.modrm_rm(ctx), size, rex));
            Ok(())
        } else {
            self.memory_operand(r, instr, ctx, desc)
        }
    }

    /// Decodes the memory form of the current ModRM byte, consuming SIB and
    /// displacement bytes.
    fn memory_operand(
        &self,
        r: &mut Reader<'_>,
        instr: &mut Instruction,
        ctx: &mut Ctx,
        desc: &InstrDesc,
    ) -> Result<(), DecodeError> {
        let modrm = self.peek_modrm(r, ctx)?;
        let md = modrm >> 6;
        let rm = modrm & 7;

        if ctx.asize == 0 {
            self.memory_operand_16(r, instr, md, rm)?;
        } else {
            self.memory_operand_32_64(r, instr, ctx, desc, md, rm)?;
        }

        let mem_size = match (ctx.vector, desc.flags & (F_BCST32 | F_BCST64)) {
            (Some(vp), F_BCST32) if vp.bcst => MemorySize::Bcst32,
            (Some(vp), F_BCST64) if vp.bcst => MemorySize::Bcst64,
            _ => desc.mem,
        };
        instr.set_memory_size(mem_size);
        instr.push_op(OpKind::Memory);
        Ok(())
    }

    fn memory_operand_16(
        &self,
        r: &mut Reader<'_>,
        instr: &mut Instruction,
        md: u8,
        rm: u8,
    ) -> Result<(), DecodeError> {
        const BASES: [(Register, Register); 8] = [
            (Register::BX, Register::SI),
            (Register::BX, Register::DI),
            (Register::BP, Register::SI),
            (Register::BP, Register::DI),
            (Register::SI, Register::None),
            (Register::DI, Register::None),
            (Register::BP, Register::None),
            (Register::BX, Register::None),
        ];
        if md == 0 && rm == 6 {
            instr.set_memory_displacement(i64::from(r.read_u16()?));
            instr.set_memory_displ_size(2);
            return Ok(());
        }
        let (base, index) = BASES[rm as usize];
        instr.set_memory_base(base);
        instr.set_memory_index(index);
        match md {
            1 => {
                instr.set_memory_displacement(i64::from(r.read_u8()? as i8));
                instr.set_memory_displ_size(1);
            }
            2 => {
                instr.set_memory_displacement(i64::from(r.read_u16()? as i16));
                instr.set_memory_displ_size(2);
            }
            _ => {}
        }
        Ok(())
    }

    fn memory_operand_32_64(
        &self,
        r: &mut Reader<'_>,
        instr: &mut Instruction,
        ctx: &Ctx,
        desc: &InstrDesc,
        md: u8,
        rm: u8,
    ) -> Result<(), DecodeError> {
        let long = ctx.asize == 2;
        let (b_ext, x_ext) = match ctx.vector {
            Some(vp) => (vp.b, vp.x),
            None => match ctx.prefixes.rex {
                Some(rex) => (rex.b, rex.x),
                None => (false, false),
            },
        };
        let gpr_width = if long { 64 } else { 32 };
        let mut base = Register::None;
        let mut index = Register::None;

        if rm == 4 {
            let sib = r.read_u8()?;
            let scale = 1u32 << (sib >> 6);
            let index_n = u32::from((sib >> 3) & 7) | if x_ext { 8 } else { 0 };
            if index_n != 4 {
                index = Register::gpr(index_n, gpr_width, false);
                instr.set_memory_index_scale(scale);
            }
            let base_n = u32::from(sib & 7) | if b_ext { 8 } else { 0 };
            if sib & 7 == 5 && md == 0 {
                instr.set_memory_displacement(i64::from(r.read_u32()? as i32));
                instr.set_memory_displ_size(4);
            } else {
                base = Register::gpr(base_n, gpr_width, false);
            }
        } else if rm == 5 && md == 0 {
            // disp32, RIP-relative in 64-bit mode.
            let displ = i64::from(r.read_u32()? as i32);
            if self.bitness == 64 {
                base = if long { Register::RIP } else { Register::EIP };
            }
            instr.set_memory_displacement(displ);
            instr.set_memory_displ_size(4);
        } else {
            let base_n = u32::from(rm) | if b_ext { 8 } else { 0 };
            base = Register::gpr(base_n, gpr_width, false);
        }

        match md {
            1 => {
                let disp8 = i64::from(r.read_u8()? as i8);
                // EVEX compresses disp8 by the memory operand's element or
                // full size.
                let scale = match ctx.vector {
                    Some(vp) if instr.encoding() == EncodingKind::Evex => {
                        if vp.bcst && desc.flags & F_BCST32 != 0 {
                            4
                        } else if vp.bcst && desc.flags & F_BCST64 != 0 {
                            8
                        } else {
                            i64::from(desc.mem.size().max(1))
                        }
                    }
                    _ => 1,
                };
                instr.set_memory_displacement(disp8 * scale);
                instr.set_memory_displ_size(1);
            }
            2 => {
                instr.set_memory_displacement(i64::from(r.read_u32()? as i32));
                instr.set_memory_displ_size(4);
            }
            _ => {}
        }

        instr.set_memory_base(base);
        if index != Register::None {
            instr.set_memory_index(index);
        }
        Ok(())
    }

    fn resolve_branch(
        &self,
        r: &Reader<'_>,
        instr: &mut Instruction,
        ctx: &Ctx,
        branch: PendingBranch,
    ) {
        let PendingBranch::Near(displ) = branch;
        let next_ip = instr.ip().wrapping_add(r.position() as u64);
        let target = next_ip.wrapping_add(displ as u64);
        if self.bitness == 64 {
            instr.set_branch_target(target);
            instr.push_op(OpKind::NearBranch64);
        } else if ctx.osize == 0 {
            instr.set_branch_target(target & 0xFFFF);
            instr.push_op(OpKind::NearBranch16);
        } else {
            instr.set_branch_target(target & 0xFFFF_FFFF);
            instr.push_op(OpKind::NearBranch32);
        }
    }

    /// Final prefix bookkeeping and validation shared by all paths.
    fn finish(
        &self,
        r: &Reader<'_>,
        instr: &mut Instruction,
        ctx: &Ctx,
        desc: &InstrDesc,
    ) -> Result<(), DecodeError> {
        if ctx.prefixes.lock {
            let lockable = desc.flags & F_LOCK != 0 && instr.op_kind(0) == OpKind::Memory;
            if !lockable {
                return Err(DecodeError::invalid_prefix(
                    r.position(),
                    "lock on a non-lockable form",
                ));
            }
            instr.set_has_lock_prefix(true);
        }
        instr.set_has_rep_prefix(ctx.prefixes.rep);
        instr.set_has_repne_prefix(ctx.prefixes.repne);
        instr.set_segment_prefix(ctx.prefixes.segment);

        if let Some(vp) = ctx.vector {
            if vp.aaa != 0 {
                instr.set_opmask(Register::k(u32::from(vp.aaa)));
                instr.set_zeroing_masking(vp.z);
            }
            let reg_form = ctx.modrm.map_or(true, |m| m >= 0xC0);
            if vp.bcst && !reg_form && desc.flags & (F_BCST32 | F_BCST64) == 0 {
                return Err(DecodeError::reserved_bits(r.position()));
            }
            if vp.bcst && reg_form {
                if desc.flags & F_ER != 0 {
                    instr.set_rounding_control(match vp.ll {
                        0 => RoundingControl::RoundToNearest,
                        1 => RoundingControl::RoundDown,
                        2 => RoundingControl::RoundUp,
                        _ => RoundingControl::RoundTowardZero,
                    });
                } else if desc.flags & F_SAE != 0 {
                    instr.set_suppress_all_exceptions(true);
                } else {
                    return Err(DecodeError::reserved_bits(r.position()));
                }
            }
        }
        Ok(())
    }
}

/// Yields decode results until the buffer is exhausted; a failed position is
/// skipped by a single byte so decoding can resume.
impl Iterator for Decoder<'_> {
    type Item = Result<Instruction, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.can_decode() {
            return None;
        }
        match self.decode() {
            Ok(instr) => Some(Ok(instr)),
            Err(err) => {
                self.position += 1;
                self.ip = self.ip.wrapping_add(1);
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode64(bytes: &[u8]) -> Instruction {
        Decoder::new(64, bytes).decode().unwrap()
    }

    fn decode32(bytes: &[u8]) -> Instruction {
        Decoder::new(32, bytes).decode().unwrap()
    }

    fn decode16(bytes: &[u8]) -> Instruction {
        Decoder::new(16, bytes).decode().unwrap()
    }

    #[test]
    fn mov_r32_imm32() {
        let instr = decode32(&[0xB8, 0x01, 0x00, 0x00, 0x00]);
        assert_eq!(instr.code(), Code::Mov_r32_imm32);
        assert_eq!(instr.len(), 5);
        assert_eq!(instr.op_register(0), Register::EAX);
        assert_eq!(instr.immediate(), 1);
    }

    #[test]
    fn add_with_modrm_and_sib() {
        // add dword ptr [rax+rcx*4+0x10], edx
        let instr = decode64(&[0x01, 0x54, 0x88, 0x10]);
        assert_eq!(instr.code(), Code::Add_rm32_r32);
        assert_eq!(instr.op_kind(0), OpKind::Memory);
        assert_eq!(instr.memory_base(), Register::RAX);
        assert_eq!(instr.memory_index(), Register::RCX);
        assert_eq!(instr.memory_index_scale(), 4);
        assert_eq!(instr.memory_displacement(), 0x10);
        assert_eq!(instr.op_register(1), Register::EDX);
    }

    #[test]
    fn rex_w_selects_64_bit_form() {
        let instr = decode64(&[0x48, 0x01, 0xD8]);
        assert_eq!(instr.code(), Code::Add_rm64_r64);
        assert_eq!(instr.op_register(0), Register::RAX);
        assert_eq!(instr.op_register(1), Register::RBX);
    }

    #[test]
    fn rex_b_extends_opcode_register() {
        let instr = decode64(&[0x49, 0xB8, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(instr.code(), Code::Mov_r64_imm64);
        assert_eq!(instr.op_register(0), Register::R8);
        assert_eq!(instr.immediate(), 0x0807_0605_0403_0201);
    }

    #[test]
    fn rex_before_legacy_prefix_is_ignored() {
        // REX.W followed by 66: the REX no longer counts.
        let instr = decode64(&[0x48, 0x66, 0x01, 0xD8]);
        assert_eq!(instr.code(), Code::Add_rm16_r16);
        assert_eq!(instr.op_register(0), Register::AX);
    }

    #[test]
    fn rip_relative() {
        // mov eax, [rip+0x100]
        let instr = decode64(&[0x8B, 0x05, 0x00, 0x01, 0x00, 0x00]);
        assert_eq!(instr.code(), Code::Mov_r32_rm32);
        assert_eq!(instr.memory_base(), Register::RIP);
        assert_eq!(instr.memory_displacement(), 0x100);
    }

    #[test]
    fn sixteen_bit_addressing() {
        // mov ax, [bx+si+0x12]
        let instr = decode16(&[0x8B, 0x40, 0x12]);
        assert_eq!(instr.code(), Code::Mov_r16_rm16);
        assert_eq!(instr.memory_base(), Register::BX);
        assert_eq!(instr.memory_index(), Register::SI);
        assert_eq!(instr.memory_displacement(), 0x12);
    }

    #[test]
    fn short_branch_target() {
        // jne +5 at ip 0x1000: target 0x1000 + 2 + 5
        let instr = Decoder::new(64, &[0x75, 0x05]).with_ip(0x1000).decode().unwrap();
        assert_eq!(instr.code(), Code::Jne_rel8_64);
        assert_eq!(instr.op_kind(0), OpKind::NearBranch64);
        assert_eq!(instr.branch_target(), 0x1007);
    }

    #[test]
    fn branch_target_wraps_in_16_bit_mode() {
        let instr = Decoder::new(16, &[0xEB, 0xFE]).with_ip(0x0000).decode().unwrap();
        assert_eq!(instr.branch_target(), 0x0000);
        assert_eq!(instr.op_kind(0), OpKind::NearBranch16);
    }

    #[test]
    fn mandatory_prefix_selects_pause() {
        let instr = decode64(&[0xF3, 0x90]);
        assert_eq!(instr.code(), Code::Pause);
        assert!(!instr.has_rep_prefix());
    }

    #[test]
    fn rep_prefix_survives_on_string_ops() {
        let instr = decode64(&[0xF3, 0xA4]);
        assert_eq!(instr.code(), Code::Movsb);
        assert!(instr.has_rep_prefix());
    }

    #[test]
    fn sixty_six_is_not_consumed_by_prefix_rows() {
        // 66 F3 0F BC: tzcnt with the 16-bit operand size intact.
        let instr = decode64(&[0x66, 0xF3, 0x0F, 0xBC, 0xC1]);
        assert_eq!(instr.code(), Code::Tzcnt_r16_rm16);
        assert_eq!(instr.op_register(0), Register::AX);
    }

    #[test]
    fn lock_requires_memory_destination() {
        let err = Decoder::new(64, &[0xF0, 0x01, 0xC0]).decode().unwrap_err();
        assert!(matches!(err, DecodeError::InvalidPrefixCombination { .. }));
        let instr = decode64(&[0xF0, 0x01, 0x03]);
        assert!(instr.has_lock_prefix());
    }

    #[test]
    fn insufficient_bytes() {
        let err = Decoder::new(64, &[0x01]).decode().unwrap_err();
        assert!(matches!(err, DecodeError::InsufficientBytes { .. }));
    }

    #[test]
    fn prefix_run_hits_length_ceiling() {
        let err = Decoder::new(64, &[0x66; 16]).decode().unwrap_err();
        assert_eq!(err, DecodeError::InstructionTooLong);
    }

    #[test]
    fn vex2_in_64_bit_mode() {
        // vaddps xmm0, xmm1, xmm2 = C5 F0 58 C2
        let instr = decode64(&[0xC5, 0xF0, 0x58, 0xC2]);
        assert_eq!(instr.code(), Code::VEX_Vaddps_xmm_xmm_xmmm128);
        assert_eq!(instr.encoding(), EncodingKind::Vex);
        assert_eq!(instr.op_register(0), Register::XMM0);
        assert_eq!(instr.op_register(1), Register::XMM1);
        assert_eq!(instr.op_register(2), Register::XMM2);
    }

    #[test]
    fn c5_falls_back_to_lds_in_32_bit_mode() {
        // C5 06: mod=00 -> lds ax/eax, [..]; not a VEX escape.
        let instr = decode32(&[0xC5, 0x06, 0x78, 0x56, 0x34, 0x12]);
        assert_eq!(instr.code(), Code::Lds_r32_m1632);
        assert_eq!(instr.encoding(), EncodingKind::Legacy);
    }

    #[test]
    fn evex_reserved_bit_rejected() {
        // 62 F1 7C 48 58 C2 with P1 bit 2 cleared (0x78).
        let err = Decoder::new(64, &[0x62, 0xF1, 0x78, 0x48, 0x58, 0xC2])
            .decode()
            .unwrap_err();
        assert!(matches!(err, DecodeError::ReservedEncodingBits { .. }));
    }

    #[test]
    fn evex_zmm_with_opmask() {
        // vaddps zmm0 {k1}, zmm1, zmm2 = 62 F1 74 49 58 C2
        let instr = decode64(&[0x62, 0xF1, 0x74, 0x49, 0x58, 0xC2]);
        assert_eq!(instr.code(), Code::EVEX_Vaddps_zmm_zmm_zmmm512b32_er);
        assert_eq!(instr.encoding(), EncodingKind::Evex);
        assert_eq!(instr.op_register(0), Register::ZMM0);
        assert_eq!(instr.opmask(), Register::K1);
    }

    #[test]
    fn evex_high_register_in_rm_slot() {
        // vaddps zmm0, zmm1, zmm26 = 62 91 74 48 58 C2; X and B together
        // give rm its fourth and fifth bits.
        let instr = decode64(&[0x62, 0x91, 0x74, 0x48, 0x58, 0xC2]);
        assert_eq!(instr.code(), Code::EVEX_Vaddps_zmm_zmm_zmmm512b32_er);
        assert_eq!(instr.op_register(0), Register::ZMM0);
        assert_eq!(instr.op_register(1), Register::ZMM1);
        assert_eq!(instr.op_register(2), Register::ZMM26);
    }

    #[test]
    fn vex_rm_register_stays_four_bits() {
        // VEX has no fifth rm bit; C4 C1 74 58 C2 is vaddps ymm0, ymm1, ymm10.
        let instr = decode64(&[0xC4, 0xC1, 0x74, 0x58, 0xC2]);
        assert_eq!(instr.op_register(2), Register::YMM10);
    }

    #[test]
    fn evex_disp8_is_scaled() {
        // vmovups xmm1, [rax+0x10] = 62 F1 7C 08 10 48 01 (disp8 1 * 16)
        let instr = decode64(&[0x62, 0xF1, 0x7C, 0x08, 0x10, 0x48, 0x01]);
        assert_eq!(instr.code(), Code::EVEX_Vmovups_xmm_xmmm128);
        assert_eq!(instr.memory_displacement(), 16);
    }

    #[test]
    fn xop_vs_pop() {
        // 8F with reg=0 stays pop r/m64.
        let instr = decode64(&[0x8F, 0xC0]);
        assert_eq!(instr.code(), Code::Pop_rm64);
        // 8F E8 ... selects XOP map A (bextr).
        let instr = decode64(&[0x8F, 0xEA, 0x78, 0x10, 0xC1, 0x04, 0x00, 0x00, 0x00]);
        assert_eq!(instr.code(), Code::XOP_Bextr_r32_rm32_imm32);
        assert_eq!(instr.encoding(), EncodingKind::Xop);
    }

    #[test]
    fn d3now_suffix() {
        // pfadd mm0, mm1 = 0F 0F C1 9E
        let instr = decode64(&[0x0F, 0x0F, 0xC1, 0x9E]);
        assert_eq!(instr.code(), Code::D3NOW_Pfadd);
        assert_eq!(instr.encoding(), EncodingKind::D3now);
        assert_eq!(instr.op_register(0), Register::MM0);
        assert_eq!(instr.op_register(1), Register::MM1);
    }

    #[test]
    fn d3now_unknown_suffix_is_invalid() {
        let err = Decoder::new(64, &[0x0F, 0x0F, 0xC1, 0x00]).decode().unwrap_err();
        assert!(matches!(err, DecodeError::InvalidOpcodeForMode { .. }));
    }

    #[test]
    fn options_disable_vex() {
        let options = DecoderOptions {
            vex: false,
            ..DecoderOptions::default()
        };
        let err = Decoder::new(64, &[0xC5, 0xF0, 0x58, 0xC2])
            .with_options(options)
            .decode()
            .unwrap_err();
        assert!(matches!(err, DecodeError::InvalidOpcodeForMode { .. }));
    }

    #[test]
    fn block_iteration_resynchronizes() {
        // add eax, ebx; an invalid byte; nop
        let bytes = [0x01, 0xD8, 0x0E, 0x90];
        let results: Vec<_> = Decoder::new(64, &bytes).collect();
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().code(), Code::Nop);
    }

    #[test]
    fn decoding_is_deterministic() {
        let bytes = [0x48, 0x8B, 0x05, 0x10, 0x00, 0x00, 0x00];
        let a = decode64(&bytes);
        let b = decode64(&bytes);
        assert_eq!(a.code(), b.code());
        assert_eq!(a.len(), b.len());
        assert_eq!(a.memory_displacement(), b.memory_displacement());
    }

    #[test]
    fn fpu_register_forms() {
        // fadd st, st(1) = D8 C1
        let instr = decode64(&[0xD8, 0xC1]);
        assert_eq!(instr.code(), Code::Fadd_st0_sti);
        // fnstsw ax = DF E0
        let instr = decode64(&[0xDF, 0xE0]);
        assert_eq!(instr.code(), Code::Fnstsw_AX);
    }

    #[test]
    fn jcxz_dispatches_on_address_size() {
        let instr = decode64(&[0xE3, 0x00]);
        assert_eq!(instr.code(), Code::Jrcxz_rel8_64);
        let instr = Decoder::new(64, &[0x67, 0xE3, 0x00]).decode().unwrap();
        assert_eq!(instr.code(), Code::Jecxz_rel8_64);
    }
}
