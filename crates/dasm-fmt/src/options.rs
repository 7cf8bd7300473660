//! Formatter configuration.
//!
//! [`FormatterOptions`] is a plain value object. Every option is read at
//! format time only; nothing here caches derived state, so callers can toggle
//! fields between calls. The four constructors supply the documented defaults
//! of each assembler dialect.

use thiserror::Error;

/// Error produced when an option is assigned an out-of-range raw value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    #[error("{option}: {value} is out of range")]
    OptionOutOfRange { option: &'static str, value: u32 },
}

/// Numeral base used for immediates, displacements and branch targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberBase {
    #[default]
    Hexadecimal,
    Decimal,
    Octal,
    Binary,
}

impl NumberBase {
    /// Validating conversion from a raw value; rejected here, never at use.
    pub fn from_u32(value: u32) -> Result<Self, OptionError> {
        match value {
            0 => Ok(NumberBase::Hexadecimal),
            1 => Ok(NumberBase::Decimal),
            2 => Ok(NumberBase::Octal),
            3 => Ok(NumberBase::Binary),
            _ => Err(OptionError::OptionOutOfRange {
                option: "NumberBase",
                value,
            }),
        }
    }
}

/// When to emit a memory operand size keyword (`dword ptr` and friends).
/// The Gas syntax never emits them regardless of this option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemorySizeOptions {
    /// Only when the assembler needs it to disambiguate.
    #[default]
    Default,
    Always,
    /// Only when a reader could not infer the size from the operands.
    Minimum,
    Never,
}

impl MemorySizeOptions {
    pub fn from_u32(value: u32) -> Result<Self, OptionError> {
        match value {
            0 => Ok(MemorySizeOptions::Default),
            1 => Ok(MemorySizeOptions::Always),
            2 => Ok(MemorySizeOptions::Minimum),
            3 => Ok(MemorySizeOptions::Never),
            _ => Err(OptionError::OptionOutOfRange {
                option: "MemorySizeOptions",
                value,
            }),
        }
    }
}

/// All formatting options. Construct with one of the syntax presets and
/// adjust fields as needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterOptions {
    // Case.
    pub uppercase_prefixes: bool,
    pub uppercase_mnemonics: bool,
    pub uppercase_registers: bool,
    pub uppercase_keywords: bool,
    pub uppercase_decorators: bool,
    pub uppercase_all: bool,

    // Layout.
    /// Column of the first operand character; 0 means a single space.
    pub first_operand_char_index: u32,
    /// Tab size used when padding to `first_operand_char_index`; 0 uses spaces.
    pub tab_size: u32,
    pub space_after_operand_separator: bool,
    pub space_after_memory_bracket: bool,
    pub space_between_memory_add_operators: bool,
    pub space_between_memory_mul_operators: bool,
    pub scale_before_index: bool,
    pub always_show_scale: bool,
    pub always_show_segment_register: bool,
    pub show_zero_displacements: bool,

    // Numbers.
    pub hex_prefix: &'static str,
    pub hex_suffix: &'static str,
    pub hex_digit_group_size: u32,
    pub decimal_prefix: &'static str,
    pub decimal_suffix: &'static str,
    pub decimal_digit_group_size: u32,
    pub octal_prefix: &'static str,
    pub octal_suffix: &'static str,
    pub octal_digit_group_size: u32,
    pub binary_prefix: &'static str,
    pub binary_suffix: &'static str,
    pub binary_digit_group_size: u32,
    /// Separator inserted every digit-group; empty disables grouping.
    pub digit_separator: &'static str,
    pub leading_zeroes: bool,
    pub uppercase_hex: bool,
    pub small_hex_numbers_in_decimal: bool,
    pub add_leading_zero_to_hex_numbers: bool,
    pub number_base: NumberBase,
    pub branch_leading_zeroes: bool,
    pub signed_immediate_operands: bool,
    pub signed_memory_displacements: bool,
    pub displacement_leading_zeroes: bool,

    // Operand rendering.
    pub memory_size_options: MemorySizeOptions,
    pub rip_relative_addresses: bool,
    pub show_branch_size: bool,
    pub use_pseudo_ops: bool,
    pub show_symbol_address: bool,
    pub prefer_st0: bool,

    // Syntax-specific toggles.
    pub gas_naked_registers: bool,
    pub gas_show_mnemonic_size_suffix: bool,
    pub masm_add_ds_prefix32: bool,
    pub masm_symbol_displ_in_brackets: bool,
    pub masm_displ_in_brackets: bool,
    pub nasm_show_sign_extended_immediate_size: bool,
}

impl FormatterOptions {
    /// Defaults shared by every dialect; the presets override the numeral
    /// affixes and dialect toggles.
    fn common() -> Self {
        Self {
            uppercase_prefixes: false,
            uppercase_mnemonics: false,
            uppercase_registers: false,
            uppercase_keywords: false,
            uppercase_decorators: false,
            uppercase_all: false,
            first_operand_char_index: 0,
            tab_size: 0,
            space_after_operand_separator: false,
            space_after_memory_bracket: false,
            space_between_memory_add_operators: false,
            space_between_memory_mul_operators: false,
            scale_before_index: false,
            always_show_scale: false,
            always_show_segment_register: false,
            show_zero_displacements: false,
            hex_prefix: "",
            hex_suffix: "",
            hex_digit_group_size: 4,
            decimal_prefix: "",
            decimal_suffix: "",
            decimal_digit_group_size: 3,
            octal_prefix: "",
            octal_suffix: "",
            octal_digit_group_size: 4,
            binary_prefix: "",
            binary_suffix: "",
            binary_digit_group_size: 4,
            digit_separator: "",
            leading_zeroes: false,
            uppercase_hex: true,
            small_hex_numbers_in_decimal: true,
            add_leading_zero_to_hex_numbers: true,
            number_base: NumberBase::Hexadecimal,
            branch_leading_zeroes: true,
            signed_immediate_operands: false,
            signed_memory_displacements: true,
            displacement_leading_zeroes: false,
            memory_size_options: MemorySizeOptions::Default,
            rip_relative_addresses: false,
            show_branch_size: true,
            use_pseudo_ops: true,
            show_symbol_address: false,
            prefer_st0: false,
            gas_naked_registers: false,
            gas_show_mnemonic_size_suffix: false,
            masm_add_ds_prefix32: true,
            masm_symbol_displ_in_brackets: true,
            masm_displ_in_brackets: true,
            nasm_show_sign_extended_immediate_size: false,
        }
    }

    /// GNU assembler (AT&T) defaults.
    pub fn gas() -> Self {
        Self {
            hex_prefix: "0x",
            octal_prefix: "0",
            binary_prefix: "0b",
            ..Self::common()
        }
    }

    /// Intel (XED-style) defaults.
    pub fn intel() -> Self {
        Self {
            hex_suffix: "h",
            octal_suffix: "o",
            binary_suffix: "b",
            ..Self::common()
        }
    }

    /// MASM defaults.
    pub fn masm() -> Self {
        Self {
            hex_suffix: "h",
            octal_suffix: "o",
            binary_suffix: "b",
            ..Self::common()
        }
    }

    /// NASM defaults.
    pub fn nasm() -> Self {
        Self {
            hex_suffix: "h",
            octal_suffix: "o",
            binary_suffix: "b",
            ..Self::common()
        }
    }

    /// Sets [`Self::number_base`] from a raw value, validating the range.
    pub fn set_number_base_u32(&mut self, value: u32) -> Result<(), OptionError> {
        self.number_base = NumberBase::from_u32(value)?;
        Ok(())
    }

    /// Sets [`Self::memory_size_options`] from a raw value, validating the range.
    pub fn set_memory_size_options_u32(&mut self, value: u32) -> Result<(), OptionError> {
        self.memory_size_options = MemorySizeOptions::from_u32(value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_affixes() {
        assert_eq!(FormatterOptions::gas().hex_prefix, "0x");
        assert_eq!(FormatterOptions::gas().hex_suffix, "");
        assert_eq!(FormatterOptions::intel().hex_suffix, "h");
        assert_eq!(FormatterOptions::masm().octal_suffix, "o");
        assert_eq!(FormatterOptions::nasm().binary_suffix, "b");
    }

    #[test]
    fn out_of_range_is_rejected_at_assignment() {
        let mut options = FormatterOptions::nasm();
        assert!(options.set_number_base_u32(3).is_ok());
        assert_eq!(
            options.set_number_base_u32(4),
            Err(OptionError::OptionOutOfRange {
                option: "NumberBase",
                value: 4
            })
        );
        assert_eq!(options.number_base, NumberBase::Binary);
        assert!(options.set_memory_size_options_u32(9).is_err());
    }

    #[test]
    fn shared_defaults() {
        let options = FormatterOptions::masm();
        assert!(options.use_pseudo_ops);
        assert!(options.signed_memory_displacements);
        assert!(options.masm_add_ds_prefix32);
        assert_eq!(options.hex_digit_group_size, 4);
        assert_eq!(options.decimal_digit_group_size, 3);
    }
}
