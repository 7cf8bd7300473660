//! Pseudo-op mnemonic substitution.
//!
//! Some compare-style instructions encode their exact operation in a trailing
//! immediate; assemblers accept a short alternate mnemonic per immediate
//! value. When `UsePseudoOps` is on, the formatter swaps in the short
//! spelling and drops the immediate operand.

use dasm_core::Code;

/// SSE compare predicates (imm 0..=7).
const CMP8: [&str; 8] = ["eq", "lt", "le", "unord", "neq", "nlt", "nle", "ord"];

/// AVX/AVX-512 compare predicates (imm 0..=31).
const CMP32: [&str; 32] = [
    "eq", "lt", "le", "unord", "neq", "nlt", "nle", "ord", "eq_uq", "nge", "ngt", "false",
    "neq_oq", "ge", "gt", "true", "eq_os", "lt_oq", "le_oq", "unord_s", "neq_us", "nlt_uq",
    "nle_uq", "ord_s", "eq_us", "nge_uq", "ngt_uq", "false_os", "neq_os", "ge_oq", "gt_oq",
    "true_us",
];

/// XOP integer compare predicates (imm 0..=7).
const VPCOM: [&str; 8] = ["lt", "le", "gt", "ge", "eq", "neq", "false", "true"];

/// Carry-less multiply selectors; only four immediates have names.
fn pclmul_suffix(imm: u64) -> Option<&'static str> {
    match imm {
        0x00 => Some("lqlqdq"),
        0x01 => Some("hqlqdq"),
        0x10 => Some("lqhqdq"),
        0x11 => Some("hqhqdq"),
        _ => None,
    }
}

/// Returns the pseudo mnemonic for `code` with immediate `imm`, or `None`
/// when the form has no alternate spelling for that immediate. A `Some`
/// result means the immediate operand must be omitted.
pub(crate) fn substitute(code: Code, imm: u64) -> Option<String> {
    use Code::*;
    let (head, preds, tail): (&str, &[&str], &str) = match code {
        Cmpps_xmm_xmmm128_imm8 => ("cmp", &CMP8, "ps"),
        Cmppd_xmm_xmmm128_imm8 => ("cmp", &CMP8, "pd"),
        Cmpss_xmm_xmmm32_imm8 => ("cmp", &CMP8, "ss"),
        Cmpsd_xmm_xmmm64_imm8 => ("cmp", &CMP8, "sd"),

        VEX_Vcmpps_xmm_xmm_xmmm128_imm8
        | VEX_Vcmpps_ymm_ymm_ymmm256_imm8
        | EVEX_Vcmpps_kr_xmm_xmmm128b32_imm8
        | EVEX_Vcmpps_kr_ymm_ymmm256b32_imm8
        | EVEX_Vcmpps_kr_zmm_zmmm512b32_imm8_sae => ("vcmp", &CMP32, "ps"),
        VEX_Vcmppd_xmm_xmm_xmmm128_imm8
        | VEX_Vcmppd_ymm_ymm_ymmm256_imm8
        | EVEX_Vcmppd_kr_xmm_xmmm128b64_imm8
        | EVEX_Vcmppd_kr_ymm_ymmm256b64_imm8
        | EVEX_Vcmppd_kr_zmm_zmmm512b64_imm8_sae => ("vcmp", &CMP32, "pd"),
        VEX_Vcmpss_xmm_xmm_xmmm32_imm8 | EVEX_Vcmpss_kr_xmm_xmmm32_imm8_sae => {
            ("vcmp", &CMP32, "ss")
        }
        VEX_Vcmpsd_xmm_xmm_xmmm64_imm8 | EVEX_Vcmpsd_kr_xmm_xmmm64_imm8_sae => {
            ("vcmp", &CMP32, "sd")
        }

        XOP_Vpcomb_xmm_xmm_xmmm128_imm8 => ("vpcom", &VPCOM, "b"),
        XOP_Vpcomw_xmm_xmm_xmmm128_imm8 => ("vpcom", &VPCOM, "w"),
        XOP_Vpcomd_xmm_xmm_xmmm128_imm8 => ("vpcom", &VPCOM, "d"),
        XOP_Vpcomq_xmm_xmm_xmmm128_imm8 => ("vpcom", &VPCOM, "q"),

        Pclmulqdq_xmm_xmmm128_imm8 => {
            return pclmul_suffix(imm).map(|s| format!("pclmul{s}"));
        }
        VEX_Vpclmulqdq_xmm_xmm_xmmm128_imm8 => {
            return pclmul_suffix(imm).map(|s| format!("vpclmul{s}"));
        }

        _ => return None,
    };
    preds
        .get(imm as usize)
        .map(|pred| format!("{head}{pred}{tail}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sse_compare_predicates() {
        assert_eq!(
            substitute(Code::Cmpps_xmm_xmmm128_imm8, 0).as_deref(),
            Some("cmpeqps")
        );
        assert_eq!(
            substitute(Code::Cmpsd_xmm_xmmm64_imm8, 7).as_deref(),
            Some("cmpordsd")
        );
        // Predicates 8..=31 only exist in the AVX encodings.
        assert_eq!(substitute(Code::Cmpps_xmm_xmmm128_imm8, 8), None);
    }

    #[test]
    fn avx_compare_has_32_predicates() {
        assert_eq!(
            substitute(Code::VEX_Vcmpps_xmm_xmm_xmmm128_imm8, 31).as_deref(),
            Some("vcmptrue_usps")
        );
        assert_eq!(
            substitute(Code::EVEX_Vcmppd_kr_zmm_zmmm512b64_imm8_sae, 13).as_deref(),
            Some("vcmpgepd")
        );
        assert_eq!(substitute(Code::VEX_Vcmpps_xmm_xmm_xmmm128_imm8, 32), None);
    }

    #[test]
    fn pclmul_selectors_are_sparse() {
        assert_eq!(
            substitute(Code::Pclmulqdq_xmm_xmmm128_imm8, 0x10).as_deref(),
            Some("pclmullqhqdq")
        );
        assert_eq!(substitute(Code::Pclmulqdq_xmm_xmmm128_imm8, 0x02), None);
        assert_eq!(
            substitute(Code::VEX_Vpclmulqdq_xmm_xmm_xmmm128_imm8, 0x11).as_deref(),
            Some("vpclmulhqhqdq")
        );
    }

    #[test]
    fn xop_compares() {
        assert_eq!(
            substitute(Code::XOP_Vpcomb_xmm_xmm_xmmm128_imm8, 0).as_deref(),
            Some("vpcomltb")
        );
        assert_eq!(
            substitute(Code::XOP_Vpcomq_xmm_xmm_xmmm128_imm8, 7).as_deref(),
            Some("vpcomtrueq")
        );
    }

    #[test]
    fn unrelated_codes_pass_through() {
        assert_eq!(substitute(Code::Add_rm32_r32, 0), None);
    }
}
