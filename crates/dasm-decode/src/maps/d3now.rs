//! 3DNow! suffix table.
//!
//! 0F 0F encodes the operation in an imm8 that follows the operands, so this
//! is a plain suffix-to-code lookup rather than a handler tree. Every form is
//! mm, mm/m64.

use dasm_core::Code as C;

/// Maps the trailing opcode byte to a code, or `INVALID`.
pub(crate) static D3NOW_CODES: [C; 256] = {
    let mut t = [C::INVALID; 256];
    t[0x0D] = C::D3NOW_Pi2fd;
    t[0x1D] = C::D3NOW_Pf2id;
    t[0x90] = C::D3NOW_Pfcmpge;
    t[0x94] = C::D3NOW_Pfmin;
    t[0x96] = C::D3NOW_Pfrcp;
    t[0x97] = C::D3NOW_Pfrsqrt;
    t[0x9A] = C::D3NOW_Pfsub;
    t[0x9E] = C::D3NOW_Pfadd;
    t[0xA0] = C::D3NOW_Pfcmpgt;
    t[0xA4] = C::D3NOW_Pfmax;
    t[0xAA] = C::D3NOW_Pfsubr;
    t[0xB0] = C::D3NOW_Pfcmpeq;
    t[0xB4] = C::D3NOW_Pfmul;
    t[0xB7] = C::D3NOW_Pmulhrw;
    t[0xBF] = C::D3NOW_Pavgusb;
    t
};
