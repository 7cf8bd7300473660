//! The shared formatting skeleton.
//!
//! One algorithm walks the instruction; the four dialects differ only at the
//! documented hook points (operand order, register sigils, memory operand
//! shape, size keywords, dialect toggles). Each hook branches on [`Syntax`]
//! so a divergence is visible at the point where it happens rather than
//! spread over four parallel pipelines.

use std::borrow::Cow;
use std::sync::OnceLock;

use dasm_core::{
    register_name, Code, Instruction, MemorySize, OpKind, Register, RegisterClass,
    RoundingControl,
};

use crate::num::NumberFormatter;
use crate::options::{FormatterOptions, MemorySizeOptions};
use crate::output::{FormatterOutput, FormatterTextKind};
use crate::pseudo;
use crate::symres::{SymbolResolver, SymbolResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Syntax {
    Gas,
    Intel,
    Masm,
    Nasm,
}

/// Upper-case mnemonics, cached once beside the lower-case table.
fn mnemonic_upper(code: Code) -> &'static str {
    static UPPER: OnceLock<Box<[String]>> = OnceLock::new();
    let table = UPPER.get_or_init(|| {
        Code::ALL
            .iter()
            .map(|c| c.mnemonic().to_ascii_uppercase())
            .collect()
    });
    &table[code as usize]
}

pub(crate) struct Engine {
    syntax: Syntax,
    pub(crate) options: FormatterOptions,
    pub(crate) resolver: Option<Box<dyn SymbolResolver>>,
    num: NumberFormatter,
    /// Characters emitted so far on the current line, for operand alignment.
    column: usize,
}

impl Engine {
    pub(crate) fn new(syntax: Syntax, options: FormatterOptions) -> Self {
        Self {
            syntax,
            options,
            resolver: None,
            num: NumberFormatter::new(),
            column: 0,
        }
    }

    fn w(&mut self, out: &mut dyn FormatterOutput, text: &str, kind: FormatterTextKind) {
        self.column += text.chars().count();
        out.write(text, kind);
    }

    pub(crate) fn format(&mut self, instr: &Instruction, out: &mut dyn FormatterOutput) {
        self.column = 0;
        self.prefixes(instr, out);

        // Pseudo-op substitution drops the selecting immediate.
        let mut op_count = instr.op_count();
        let mut mnemonic: Cow<'static, str> = Cow::Borrowed(instr.mnemonic());
        if self.options.use_pseudo_ops
            && op_count > 0
            && instr.op_kind(op_count - 1) == OpKind::Imm8
        {
            if let Some(p) = pseudo::substitute(instr.code(), instr.immediate()) {
                mnemonic = Cow::Owned(p);
                op_count -= 1;
            }
        }

        let upper = self.options.uppercase_mnemonics || self.options.uppercase_all;
        let mnemonic: Cow<'static, str> = if upper {
            match mnemonic {
                Cow::Borrowed(_) => Cow::Borrowed(mnemonic_upper(instr.code())),
                Cow::Owned(s) => Cow::Owned(s.to_ascii_uppercase()),
            }
        } else {
            mnemonic
        };
        let suffix = self.gas_suffix(instr);
        self.column += mnemonic.chars().count();
        out.write_mnemonic(&mnemonic);
        if let Some(suffix) = suffix {
            let s = if upper {
                suffix.to_ascii_uppercase()
            } else {
                suffix
            };
            self.column += 1;
            out.write(s.encode_utf8(&mut [0; 4]), FormatterTextKind::Mnemonic);
        }

        let rounding = self.rounding_decorator(instr);
        if op_count == 0 && rounding.is_none() {
            return;
        }
        self.pad_before_operands(out);

        let mut first = true;
        let mut sep = |e: &mut Self, out: &mut dyn FormatterOutput| {
            if !first {
                e.w(out, ",", FormatterTextKind::Punctuation);
                if e.options.space_after_operand_separator {
                    e.w(out, " ", FormatterTextKind::Text);
                }
            }
            first = false;
        };

        // The rounding/sae decorator trails the logical operand list, which
        // in AT&T order means it is written first.
        if self.syntax == Syntax::Gas {
            if let Some(ref dec) = rounding {
                sep(self, out);
                self.decorator(out, dec);
            }
            for i in (0..op_count).rev() {
                sep(self, out);
                self.operand(instr, out, i);
            }
        } else {
            for i in 0..op_count {
                sep(self, out);
                self.operand(instr, out, i);
            }
            if let Some(ref dec) = rounding {
                sep(self, out);
                self.decorator(out, dec);
            }
        }
    }

    fn prefixes(&mut self, instr: &Instruction, out: &mut dyn FormatterOutput) {
        let upper = self.options.uppercase_prefixes || self.options.uppercase_all;
        let mut emit = |e: &mut Self, out: &mut dyn FormatterOutput, name: &str| {
            let text = if upper {
                Cow::Owned(name.to_ascii_uppercase())
            } else {
                Cow::Borrowed(name)
            };
            e.column += text.chars().count() + 1;
            out.write_prefix(&text);
            out.write(" ", FormatterTextKind::Text);
        };
        if instr.has_lock_prefix() {
            emit(self, out, "lock");
        }
        if instr.has_rep_prefix() {
            emit(self, out, "rep");
        }
        if instr.has_repne_prefix() {
            emit(self, out, "repne");
        }
    }

    /// AT&T encodes the operand size in the mnemonic. A suffix is attached
    /// when asked for, or when no register operand pins the size down.
    fn gas_suffix(&self, instr: &Instruction) -> Option<char> {
        if self.syntax != Syntax::Gas {
            return None;
        }
        let has_mem = (0..instr.op_count()).any(|i| instr.op_kind(i) == OpKind::Memory);
        if !has_mem {
            return None;
        }
        let ambiguous = !(0..instr.op_count()).any(|i| {
            instr.op_kind(i) == OpKind::Register
                && instr.op_register(i).class() == RegisterClass::General
        });
        if !self.options.gas_show_mnemonic_size_suffix && !ambiguous {
            return None;
        }
        match instr.memory_size() {
            MemorySize::Byte => Some('b'),
            MemorySize::Word => Some('w'),
            MemorySize::Dword => Some('l'),
            MemorySize::Qword => Some('q'),
            _ => None,
        }
    }

    fn pad_before_operands(&mut self, out: &mut dyn FormatterOutput) {
        let target = self.options.first_operand_char_index as usize;
        if target <= self.column {
            self.w(out, " ", FormatterTextKind::Text);
            return;
        }
        let tab = self.options.tab_size as usize;
        if tab > 0 {
            // Advance through tab stops, finishing with spaces.
            while (self.column / tab + 1) * tab <= target {
                let stop = (self.column / tab + 1) * tab;
                out.write("\t", FormatterTextKind::Text);
                self.column = stop;
            }
        }
        while self.column < target {
            self.w(out, " ", FormatterTextKind::Text);
        }
    }

    fn rounding_decorator(&self, instr: &Instruction) -> Option<String> {
        let text = match instr.rounding_control() {
            RoundingControl::None => {
                if instr.suppress_all_exceptions() {
                    "sae"
                } else {
                    return None;
                }
            }
            RoundingControl::RoundToNearest => "rn-sae",
            RoundingControl::RoundDown => "rd-sae",
            RoundingControl::RoundUp => "ru-sae",
            RoundingControl::RoundTowardZero => "rz-sae",
        };
        Some(text.to_string())
    }

    fn decorator(&mut self, out: &mut dyn FormatterOutput, text: &str) {
        let body = if self.options.uppercase_decorators || self.options.uppercase_all {
            Cow::Owned(text.to_ascii_uppercase())
        } else {
            Cow::Borrowed(text)
        };
        self.column += body.chars().count() + 2;
        out.write("{", FormatterTextKind::Punctuation);
        out.write_decorator(&body);
        out.write("}", FormatterTextKind::Punctuation);
    }

    fn operand(&mut self, instr: &Instruction, out: &mut dyn FormatterOutput, i: usize) {
        match instr.op_kind(i) {
            OpKind::Register => {
                self.register(out, instr.op_register(i));
                if i == 0 {
                    self.opmask_decorators(instr, out);
                }
            }
            OpKind::NearBranch16 => self.branch(instr, out, i, 16),
            OpKind::NearBranch32 => self.branch(instr, out, i, 32),
            OpKind::NearBranch64 => self.branch(instr, out, i, 64),
            OpKind::FarBranch16 => self.far_branch(instr, out, 16),
            OpKind::FarBranch32 => self.far_branch(instr, out, 32),
            OpKind::Imm8 => self.immediate(instr, out, i, instr.immediate(), 8, None),
            OpKind::Imm8_2nd => {
                let v = u64::from(instr.immediate8_2nd());
                self.immediate(instr, out, i, v, 8, None);
            }
            OpKind::Imm16 => self.immediate(instr, out, i, instr.immediate(), 16, None),
            OpKind::Imm32 => self.immediate(instr, out, i, instr.immediate(), 32, None),
            OpKind::Imm64 => self.immediate(instr, out, i, instr.immediate(), 64, None),
            OpKind::Imm8to16 => self.immediate(instr, out, i, instr.immediate(), 16, Some("byte")),
            OpKind::Imm8to32 => self.immediate(instr, out, i, instr.immediate(), 32, Some("byte")),
            OpKind::Imm8to64 => self.immediate(instr, out, i, instr.immediate(), 64, Some("byte")),
            OpKind::Imm32to64 => {
                self.immediate(instr, out, i, instr.immediate(), 64, Some("dword"))
            }
            OpKind::Memory => {
                self.memory(instr, out, i);
                if i == 0 {
                    self.opmask_decorators(instr, out);
                }
            }
        }
    }

    fn opmask_decorators(&mut self, instr: &Instruction, out: &mut dyn FormatterOutput) {
        if !instr.has_opmask() {
            return;
        }
        let name = self.register_text(instr.opmask());
        self.decorator(out, &name);
        if instr.zeroing_masking() {
            self.decorator(out, "z");
        }
    }

    /// Dialect spelling of a register, sigil included.
    fn register_text(&self, reg: Register) -> String {
        let upper = self.options.uppercase_registers || self.options.uppercase_all;
        let mut name: Cow<'static, str> = Cow::Borrowed(register_name(reg, upper));
        if reg.class() == RegisterClass::Fpu {
            let n = reg as u16 - Register::ST0 as u16;
            name = if n == 0 && !self.options.prefer_st0 {
                Cow::Borrowed(if upper { "ST" } else { "st" })
            } else {
                match self.syntax {
                    // nasm spells them st0..st7, which the name table already is
                    Syntax::Nasm => name,
                    _ => Cow::Owned(if upper {
                        format!("ST({n})")
                    } else {
                        format!("st({n})")
                    }),
                }
            };
        }
        if self.syntax == Syntax::Gas && !self.options.gas_naked_registers {
            format!("%{name}")
        } else {
            name.into_owned()
        }
    }

    fn register(&mut self, out: &mut dyn FormatterOutput, reg: Register) {
        let text = self.register_text(reg);
        self.column += text.chars().count();
        out.write_register(&text);
    }

    fn keyword(&mut self, out: &mut dyn FormatterOutput, text: &str) {
        let text = if self.options.uppercase_keywords || self.options.uppercase_all {
            Cow::Owned(text.to_ascii_uppercase())
        } else {
            Cow::Borrowed(text)
        };
        self.column += text.chars().count();
        out.write(&text, FormatterTextKind::Keyword);
    }

    fn number(&mut self, out: &mut dyn FormatterOutput, text: &str) {
        self.column += text.chars().count();
        out.write_number(text);
    }

    fn resolve(
        &mut self,
        instr: &Instruction,
        operand: usize,
        address: u64,
        size: u32,
    ) -> Option<SymbolResult> {
        self.resolver
            .as_mut()
            .and_then(|r| r.resolve(instr, operand, address, size))
    }

    /// Writes a resolved symbol, its distance when the addresses differ, and
    /// optionally the raw address.
    fn symbol(
        &mut self,
        out: &mut dyn FormatterOutput,
        sym: &SymbolResult,
        address: u64,
        bits: u32,
    ) {
        self.column += sym.text.chars().count();
        out.write_symbol(&sym.text);
        if sym.address != address {
            let delta = address.wrapping_sub(sym.address) as i64;
            if delta < 0 && sym.signed {
                self.w(out, "-", FormatterTextKind::Operator);
                let text = self.num.format_u64(&self.options, delta.unsigned_abs());
                self.number(out, &text);
            } else {
                self.w(out, "+", FormatterTextKind::Operator);
                let text = self.num.format_u64(&self.options, delta as u64);
                self.number(out, &text);
            }
        }
        if self.options.show_symbol_address {
            self.w(out, " (", FormatterTextKind::Punctuation);
            let text = self.num.format_u64_width(
                &self.options,
                address,
                bits,
                self.options.branch_leading_zeroes,
            );
            self.number(out, &text);
            self.w(out, ")", FormatterTextKind::Punctuation);
        }
    }

    fn branch(&mut self, instr: &Instruction, out: &mut dyn FormatterOutput, i: usize, bits: u32) {
        if self.options.show_branch_size && self.syntax != Syntax::Gas {
            if is_short_branch(instr.code()) {
                self.keyword(out, "short");
                self.w(out, " ", FormatterTextKind::Text);
            } else if self.syntax == Syntax::Masm {
                self.keyword(out, "near ptr");
                self.w(out, " ", FormatterTextKind::Text);
            }
        }
        let target = instr.branch_target();
        if let Some(sym) = self.resolve(instr, i, target, bits / 8) {
            self.symbol(out, &sym, target, bits);
        } else {
            let text = self.num.format_u64_width(
                &self.options,
                target,
                bits,
                self.options.branch_leading_zeroes,
            );
            self.number(out, &text);
        }
    }

    fn far_branch(&mut self, instr: &Instruction, out: &mut dyn FormatterOutput, bits: u32) {
        let selector = u64::from(instr.far_branch_selector());
        let offset = instr.branch_target();
        let sel = self
            .num
            .format_u64_width(&self.options, selector, 16, self.options.branch_leading_zeroes);
        let off = self
            .num
            .format_u64_width(&self.options, offset, bits, self.options.branch_leading_zeroes);
        if self.syntax == Syntax::Gas {
            // AT&T far form: $selector,$offset
            self.w(out, "$", FormatterTextKind::Punctuation);
            self.number(out, &sel);
            self.w(out, ",", FormatterTextKind::Punctuation);
            if self.options.space_after_operand_separator {
                self.w(out, " ", FormatterTextKind::Text);
            }
            self.w(out, "$", FormatterTextKind::Punctuation);
            self.number(out, &off);
        } else {
            self.number(out, &sel);
            self.w(out, ":", FormatterTextKind::Punctuation);
            self.number(out, &off);
        }
    }

    fn immediate(
        &mut self,
        instr: &Instruction,
        out: &mut dyn FormatterOutput,
        i: usize,
        value: u64,
        bits: u32,
        sign_extended_from: Option<&'static str>,
    ) {
        if self.syntax == Syntax::Nasm && self.options.nasm_show_sign_extended_immediate_size {
            if let Some(kw) = sign_extended_from {
                self.keyword(out, kw);
                self.w(out, " ", FormatterTextKind::Text);
            }
        }
        if self.syntax == Syntax::Gas {
            self.w(out, "$", FormatterTextKind::Punctuation);
        }
        if bits >= 16 {
            if let Some(sym) = self.resolve(instr, i, value, bits / 8) {
                self.symbol(out, &sym, value, bits);
                return;
            }
        }
        let text = if self.options.signed_immediate_operands {
            let signed = if bits < 64 {
                ((value << (64 - bits)) as i64) >> (64 - bits)
            } else {
                value as i64
            };
            self.num.format_i64(&self.options, signed)
        } else {
            // Sign-extended forms carry the full 64-bit extension; display
            // clips it to the operand width.
            let masked = if bits < 64 {
                value & ((1 << bits) - 1)
            } else {
                value
            };
            if self.options.leading_zeroes {
                self.num.format_u64_width(&self.options, masked, bits, true)
            } else {
                self.num.format_u64(&self.options, masked)
            }
        };
        self.number(out, &text);
    }

    // ---- memory operands -------------------------------------------------

    fn memory(&mut self, instr: &Instruction, out: &mut dyn FormatterOutput, op: usize) {
        let mut base = instr.memory_base();
        let index = instr.memory_index();
        let mut displ = instr.memory_displacement();
        let displ_size = instr.memory_displ_size();

        // RIP-relative forms collapse to the absolute target unless the
        // caller asked for the relative spelling.
        let mut rip_abs = false;
        if matches!(base, Register::RIP | Register::EIP) && !self.options.rip_relative_addresses {
            let mask = if base == Register::EIP {
                0xFFFF_FFFF
            } else {
                u64::MAX
            };
            displ = (instr.next_ip().wrapping_add(displ as u64) & mask) as i64;
            base = Register::None;
            rip_abs = true;
        }
        let no_regs = base == Register::None && index == Register::None;

        if self.syntax == Syntax::Gas {
            self.memory_gas(instr, out, op, base, index, displ, displ_size, no_regs, rip_abs);
        } else {
            self.memory_intel(instr, out, op, base, index, displ, displ_size, no_regs, rip_abs);
        }
        if instr.is_broadcast() {
            let dec = broadcast_decorator(instr);
            self.decorator(out, &dec);
        }
    }

    fn segment_to_show(&self, instr: &Instruction, base: Register) -> Option<Register> {
        let seg = instr.segment_prefix();
        if seg != Register::None {
            return Some(seg);
        }
        if self.options.always_show_segment_register {
            let default = match base {
                Register::BP | Register::EBP | Register::RBP | Register::ESP | Register::RSP
                | Register::SP => Register::SS,
                _ => Register::DS,
            };
            return Some(default);
        }
        None
    }

    #[allow(clippy::too_many_arguments)]
    fn memory_intel(
        &mut self,
        instr: &Instruction,
        out: &mut dyn FormatterOutput,
        op: usize,
        base: Register,
        index: Register,
        displ: i64,
        displ_size: u32,
        no_regs: bool,
        rip_abs: bool,
    ) {
        if self.memory_size_keyword_needed(instr) {
            if let Some(kw) = size_keyword(instr.memory_size()) {
                self.keyword(out, kw);
                if self.syntax != Syntax::Nasm {
                    self.w(out, " ", FormatterTextKind::Text);
                    self.keyword(out, "ptr");
                }
                self.w(out, " ", FormatterTextKind::Text);
            }
        }

        let seg = self.segment_to_show(instr, base);
        let seg_inside = self.syntax == Syntax::Nasm;
        if let Some(seg) = seg {
            if !seg_inside {
                self.register(out, seg);
                self.w(out, ":", FormatterTextKind::Punctuation);
            }
        } else if self.syntax == Syntax::Masm
            && no_regs
            && !rip_abs
            && self.options.masm_add_ds_prefix32
        {
            self.register(out, Register::DS);
            self.w(out, ":", FormatterTextKind::Punctuation);
        }

        let no_reg_sym = if no_regs {
            let bits = instr.bitness().max(16);
            self.resolve(instr, op, displ as u64, bits / 8)
        } else {
            None
        };

        // MASM can put a lone displacement, or a lone symbol, outside the
        // brackets.
        let displ_in_brackets = if no_reg_sym.is_some() {
            self.options.masm_symbol_displ_in_brackets
        } else {
            self.options.masm_displ_in_brackets
        };
        let brackets = !(self.syntax == Syntax::Masm && no_regs && !displ_in_brackets);
        if brackets {
            self.w(out, "[", FormatterTextKind::Punctuation);
            if self.options.space_after_memory_bracket {
                self.w(out, " ", FormatterTextKind::Text);
            }
        }
        if let (Some(seg), true) = (seg, seg_inside) {
            self.register(out, seg);
            self.w(out, ":", FormatterTextKind::Punctuation);
        }

        let mut wrote_term = false;
        if base != Register::None {
            self.register(out, base);
            wrote_term = true;
        }
        if index != Register::None {
            if wrote_term {
                self.plus(out);
            }
            let scale = instr.memory_index_scale();
            let show_scale = scale != 1 || self.options.always_show_scale;
            if show_scale && self.options.scale_before_index {
                self.number(out, &scale.to_string());
                self.mul(out);
                self.register(out, index);
            } else if show_scale {
                self.register(out, index);
                self.mul(out);
                self.number(out, &scale.to_string());
            } else {
                self.register(out, index);
            }
            wrote_term = true;
        }

        let show_displ = no_regs
            || displ != 0
            || (self.options.show_zero_displacements && displ_size != 0);
        if show_displ {
            let bits = if no_regs {
                instr.bitness().max(16)
            } else {
                (displ_size * 8).max(8)
            };
            if !wrote_term {
                if let Some(ref sym) = no_reg_sym {
                    self.symbol(out, sym, displ as u64, bits);
                } else {
                    let text = self.num.format_u64_width(
                        &self.options,
                        displ as u64,
                        bits,
                        self.options.displacement_leading_zeroes,
                    );
                    self.number(out, &text);
                }
            } else if self.options.signed_memory_displacements && displ < 0 {
                self.minus(out);
                let text = self.num.format_u64_width(
                    &self.options,
                    displ.unsigned_abs(),
                    bits,
                    self.options.displacement_leading_zeroes,
                );
                self.number(out, &text);
            } else {
                self.plus(out);
                let value = if self.options.signed_memory_displacements {
                    displ as u64
                } else {
                    // Two's-complement form at the encoded width.
                    displ as u64 & width_mask(displ_size)
                };
                let text = self.num.format_u64_width(
                    &self.options,
                    value,
                    bits,
                    self.options.displacement_leading_zeroes,
                );
                self.number(out, &text);
            }
        }

        if brackets {
            if self.options.space_after_memory_bracket {
                self.w(out, " ", FormatterTextKind::Text);
            }
            self.w(out, "]", FormatterTextKind::Punctuation);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn memory_gas(
        &mut self,
        instr: &Instruction,
        out: &mut dyn FormatterOutput,
        op: usize,
        base: Register,
        index: Register,
        displ: i64,
        displ_size: u32,
        no_regs: bool,
        _rip_abs: bool,
    ) {
        if let Some(seg) = self.segment_to_show(instr, base) {
            self.register(out, seg);
            self.w(out, ":", FormatterTextKind::Punctuation);
        }

        let show_displ = no_regs
            || displ != 0
            || (self.options.show_zero_displacements && displ_size != 0);
        if show_displ {
            let bits = if no_regs {
                instr.bitness().max(16)
            } else {
                (displ_size * 8).max(8)
            };
            if no_regs {
                if let Some(sym) = self.resolve(instr, op, displ as u64, bits / 8) {
                    self.symbol(out, &sym, displ as u64, bits);
                } else {
                    let text = self.num.format_u64_width(
                        &self.options,
                        displ as u64,
                        bits,
                        self.options.displacement_leading_zeroes,
                    );
                    self.number(out, &text);
                }
            } else if displ < 0 && self.options.signed_memory_displacements {
                self.w(out, "-", FormatterTextKind::Operator);
                let text = self.num.format_u64_width(
                    &self.options,
                    displ.unsigned_abs(),
                    bits,
                    self.options.displacement_leading_zeroes,
                );
                self.number(out, &text);
            } else {
                let value = if self.options.signed_memory_displacements {
                    displ as u64
                } else {
                    displ as u64 & width_mask(displ_size)
                };
                let text = self.num.format_u64_width(
                    &self.options,
                    value,
                    bits,
                    self.options.displacement_leading_zeroes,
                );
                self.number(out, &text);
            }
        }

        if no_regs {
            return;
        }
        self.w(out, "(", FormatterTextKind::Punctuation);
        if base != Register::None {
            self.register(out, base);
        }
        if index != Register::None {
            self.w(out, ",", FormatterTextKind::Punctuation);
            self.register(out, index);
            self.w(out, ",", FormatterTextKind::Punctuation);
            self.number(out, &instr.memory_index_scale().to_string());
        }
        self.w(out, ")", FormatterTextKind::Punctuation);
    }

    fn plus(&mut self, out: &mut dyn FormatterOutput) {
        if self.options.space_between_memory_add_operators {
            self.w(out, " + ", FormatterTextKind::Operator);
        } else {
            self.w(out, "+", FormatterTextKind::Operator);
        }
    }

    fn minus(&mut self, out: &mut dyn FormatterOutput) {
        if self.options.space_between_memory_add_operators {
            self.w(out, " - ", FormatterTextKind::Operator);
        } else {
            self.w(out, "-", FormatterTextKind::Operator);
        }
    }

    fn mul(&mut self, out: &mut dyn FormatterOutput) {
        if self.options.space_between_memory_mul_operators {
            self.w(out, " * ", FormatterTextKind::Operator);
        } else {
            self.w(out, "*", FormatterTextKind::Operator);
        }
    }

    /// Size keyword policy. Gas never emits one; `Default`/`Minimum` emit one
    /// only when no data-register operand pins the access size down.
    fn memory_size_keyword_needed(&self, instr: &Instruction) -> bool {
        if self.syntax == Syntax::Gas {
            return false;
        }
        // The broadcast element size is never recoverable from the register
        // operands, so it is always spelled out.
        if instr.is_broadcast() {
            return self.options.memory_size_options != MemorySizeOptions::Never;
        }
        match self.options.memory_size_options {
            MemorySizeOptions::Never => false,
            MemorySizeOptions::Always => true,
            MemorySizeOptions::Default | MemorySizeOptions::Minimum => {
                !(0..instr.op_count()).any(|i| {
                    instr.op_kind(i) == OpKind::Register
                        && matches!(
                            instr.op_register(i).class(),
                            RegisterClass::General
                                | RegisterClass::Mmx
                                | RegisterClass::Xmm
                                | RegisterClass::Ymm
                                | RegisterClass::Zmm
                                | RegisterClass::Fpu
                        )
                })
            }
        }
    }
}

fn width_mask(displ_size: u32) -> u64 {
    match displ_size {
        1 => 0xFF,
        2 => 0xFFFF,
        4 => 0xFFFF_FFFF,
        _ => u64::MAX,
    }
}

fn size_keyword(size: MemorySize) -> Option<&'static str> {
    Some(match size {
        MemorySize::Byte => "byte",
        MemorySize::Word | MemorySize::FpuEnv16 => "word",
        MemorySize::Dword | MemorySize::Float32 | MemorySize::Ptr1616 | MemorySize::Bcst32 => {
            "dword"
        }
        MemorySize::Qword | MemorySize::Float64 | MemorySize::Bcst64 => "qword",
        MemorySize::Ptr1632 => "fword",
        MemorySize::Float80 | MemorySize::Ptr1664 => "tbyte",
        MemorySize::Xmmword => "xmmword",
        MemorySize::Ymmword => "ymmword",
        MemorySize::Zmmword => "zmmword",
        MemorySize::Unknown => return None,
    })
}

/// Broadcast element repeat count: destination vector width over element
/// width. The first vector register operand supplies the width.
fn broadcast_decorator(instr: &Instruction) -> String {
    let elem_bits = match instr.memory_size() {
        MemorySize::Bcst64 => 64,
        _ => 32,
    };
    let vec_bits = (0..instr.op_count())
        .find_map(|i| match instr.op_register(i).class() {
            RegisterClass::Xmm => Some(128),
            RegisterClass::Ymm => Some(256),
            RegisterClass::Zmm => Some(512),
            _ => None,
        })
        .unwrap_or(128);
    format!("1to{}", vec_bits / elem_bits)
}

/// True for the rel8-encoded branch forms, which take the `short` keyword.
fn is_short_branch(code: Code) -> bool {
    use Code::*;
    matches!(
        code,
        Jo_rel8_16 | Jo_rel8_32 | Jo_rel8_64
            | Jno_rel8_16 | Jno_rel8_32 | Jno_rel8_64
            | Jb_rel8_16 | Jb_rel8_32 | Jb_rel8_64
            | Jae_rel8_16 | Jae_rel8_32 | Jae_rel8_64
            | Je_rel8_16 | Je_rel8_32 | Je_rel8_64
            | Jne_rel8_16 | Jne_rel8_32 | Jne_rel8_64
            | Jbe_rel8_16 | Jbe_rel8_32 | Jbe_rel8_64
            | Ja_rel8_16 | Ja_rel8_32 | Ja_rel8_64
            | Js_rel8_16 | Js_rel8_32 | Js_rel8_64
            | Jns_rel8_16 | Jns_rel8_32 | Jns_rel8_64
            | Jp_rel8_16 | Jp_rel8_32 | Jp_rel8_64
            | Jnp_rel8_16 | Jnp_rel8_32 | Jnp_rel8_64
            | Jl_rel8_16 | Jl_rel8_32 | Jl_rel8_64
            | Jge_rel8_16 | Jge_rel8_32 | Jge_rel8_64
            | Jle_rel8_16 | Jle_rel8_32 | Jle_rel8_64
            | Jg_rel8_16 | Jg_rel8_32 | Jg_rel8_64
            | Jmp_rel8_16 | Jmp_rel8_32 | Jmp_rel8_64
            | Loopne_rel8_16 | Loopne_rel8_32 | Loopne_rel8_64
            | Loope_rel8_16 | Loope_rel8_32 | Loope_rel8_64
            | Loop_rel8_16 | Loop_rel8_32 | Loop_rel8_64
            | Jcxz_rel8_16 | Jcxz_rel8_32
            | Jecxz_rel8_16 | Jecxz_rel8_32 | Jecxz_rel8_64
            | Jrcxz_rel8_64
    )
}
