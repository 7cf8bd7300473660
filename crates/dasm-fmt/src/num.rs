//! Integer-to-text rendering shared by all syntax formatters.
//!
//! Pure and deterministic: the output depends only on the value and the
//! options. The affixes, grouping and case rules all come from
//! [`FormatterOptions`]; the caller decides signedness and width policy.

use crate::options::{FormatterOptions, NumberBase};

/// Renders immediates, displacements and addresses.
#[derive(Debug, Default)]
pub struct NumberFormatter {}

impl NumberFormatter {
    pub fn new() -> Self {
        Self {}
    }

    /// Renders an unsigned value. Small values may come out in decimal when
    /// `small_hex_numbers_in_decimal` is set.
    pub fn format_u64(&self, options: &FormatterOptions, value: u64) -> String {
        self.render(options, value, 0, false, true)
    }

    /// Renders a signed value as `-magnitude` / `magnitude`.
    pub fn format_i64(&self, options: &FormatterOptions, value: i64) -> String {
        if value < 0 {
            let mut s = String::from("-");
            s.push_str(&self.render(options, value.unsigned_abs(), 0, false, true));
            s
        } else {
            self.render(options, value as u64, 0, false, true)
        }
    }

    /// Renders a value padded to the digit width of `bits` when
    /// `leading_zeroes` is set. Used for branch targets and displacements,
    /// which never take the small-decimal shortcut.
    pub fn format_u64_width(
        &self,
        options: &FormatterOptions,
        value: u64,
        bits: u32,
        leading_zeroes: bool,
    ) -> String {
        self.render(options, value, bits, leading_zeroes, false)
    }

    fn render(
        &self,
        options: &FormatterOptions,
        value: u64,
        bits: u32,
        leading_zeroes: bool,
        allow_small_decimal: bool,
    ) -> String {
        let base = options.number_base;
        if allow_small_decimal
            && base == NumberBase::Hexadecimal
            && options.small_hex_numbers_in_decimal
            && value <= 9
        {
            return value.to_string();
        }

        let (radix, group, prefix, suffix) = match base {
            NumberBase::Hexadecimal => (
                16,
                options.hex_digit_group_size,
                options.hex_prefix,
                options.hex_suffix,
            ),
            NumberBase::Decimal => (
                10,
                options.decimal_digit_group_size,
                options.decimal_prefix,
                options.decimal_suffix,
            ),
            NumberBase::Octal => (
                8,
                options.octal_digit_group_size,
                options.octal_prefix,
                options.octal_suffix,
            ),
            NumberBase::Binary => (
                4, // group default; radix handled below
                options.binary_digit_group_size,
                options.binary_prefix,
                options.binary_suffix,
            ),
        };
        let radix: u64 = if base == NumberBase::Binary { 2 } else { radix };

        // Least-significant first, then reversed during grouping.
        let mut digits = Vec::with_capacity(20);
        let mut v = value;
        loop {
            let d = (v % radix) as u32;
            digits.push(std::char::from_digit(d, radix as u32).unwrap_or('0'));
            v /= radix;
            if v == 0 {
                break;
            }
        }

        if leading_zeroes && bits != 0 {
            let width = match base {
                NumberBase::Hexadecimal => (bits as usize).div_ceil(4),
                NumberBase::Decimal => digits.len(),
                NumberBase::Octal => (bits as usize).div_ceil(3),
                NumberBase::Binary => bits as usize,
            };
            while digits.len() < width {
                digits.push('0');
            }
        }

        let grouped = !options.digit_separator.is_empty() && group > 0;
        let mut out = String::with_capacity(prefix.len() + digits.len() * 2 + suffix.len());
        out.push_str(prefix);
        let body_start = out.len();
        for (i, &d) in digits.iter().enumerate().rev() {
            let d = if options.uppercase_hex {
                d.to_ascii_uppercase()
            } else {
                d
            };
            out.push(d);
            if grouped && i != 0 && i as u32 % group == 0 {
                out.push_str(options.digit_separator);
            }
        }
        // Suffix-denoted hex starting with a letter needs a leading zero so
        // an assembler lexer cannot read it as an identifier.
        if base == NumberBase::Hexadecimal
            && prefix.is_empty()
            && options.add_leading_zero_to_hex_numbers
            && out[body_start..]
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic())
        {
            out.insert(body_start, '0');
        }
        out.push_str(suffix);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gas() -> FormatterOptions {
        FormatterOptions::gas()
    }

    fn nasm() -> FormatterOptions {
        FormatterOptions::nasm()
    }

    #[test]
    fn hex_prefix_and_suffix_styles() {
        let f = NumberFormatter::new();
        assert_eq!(f.format_u64(&gas(), 0x1234), "0x1234");
        assert_eq!(f.format_u64(&nasm(), 0x1234), "1234h");
    }

    #[test]
    fn small_values_fall_back_to_decimal() {
        let f = NumberFormatter::new();
        assert_eq!(f.format_u64(&gas(), 9), "9");
        assert_eq!(f.format_u64(&gas(), 10), "0xA");
        let mut options = gas();
        options.small_hex_numbers_in_decimal = false;
        assert_eq!(f.format_u64(&options, 9), "0x9");
    }

    #[test]
    fn leading_zero_before_letter_digit() {
        let f = NumberFormatter::new();
        // fah would lex as an identifier; 0FAh does not.
        assert_eq!(f.format_u64(&nasm(), 0xFA), "0FAh");
        let mut options = nasm();
        options.add_leading_zero_to_hex_numbers = false;
        assert_eq!(f.format_u64(&options, 0xFA), "FAh");
        // A prefix already disambiguates.
        assert_eq!(f.format_u64(&gas(), 0xFA), "0xFA");
    }

    #[test]
    fn uppercase_hex_is_independent() {
        let f = NumberFormatter::new();
        let mut options = gas();
        options.uppercase_hex = false;
        assert_eq!(f.format_u64(&options, 0xAB), "0xab");
    }

    #[test]
    fn grouping_counts_from_least_significant_digit() {
        let f = NumberFormatter::new();
        let mut options = gas();
        options.digit_separator = "_";
        assert_eq!(f.format_u64(&options, 0x12345), "0x1_2345");
        options.number_base = NumberBase::Decimal;
        assert_eq!(f.format_u64(&options, 1234567), "1_234_567");
        options.number_base = NumberBase::Binary;
        assert_eq!(f.format_u64(&options, 0b101101), "0b10_1101");
    }

    #[test]
    fn width_padding() {
        let f = NumberFormatter::new();
        assert_eq!(f.format_u64_width(&gas(), 0x1F, 32, true), "0x0000001F");
        assert_eq!(f.format_u64_width(&gas(), 0x1F, 32, false), "0x1F");
        assert_eq!(f.format_u64_width(&gas(), 0x1F, 16, true), "0x001F");
    }

    #[test]
    fn signed_rendering() {
        let f = NumberFormatter::new();
        assert_eq!(f.format_i64(&gas(), -16), "-0x10");
        assert_eq!(f.format_i64(&gas(), 16), "0x10");
        assert_eq!(f.format_i64(&gas(), i64::MIN), "-0x8000000000000000");
    }

    #[test]
    fn octal_and_binary() {
        let f = NumberFormatter::new();
        let mut options = gas();
        options.number_base = NumberBase::Octal;
        assert_eq!(f.format_u64(&options, 8), "010");
        options.number_base = NumberBase::Binary;
        assert_eq!(f.format_u64(&options, 5), "0b101");
    }

    #[test]
    fn deterministic() {
        let f = NumberFormatter::new();
        let options = nasm();
        assert_eq!(f.format_u64(&options, 0xDEAD), f.format_u64(&options, 0xDEAD));
    }
}
