//! Static opcode tables, one module per map.

mod d3now;
mod evex;
mod legacy;
mod map0f;
mod map0f38;
mod map0f3a;
mod vex;
mod xop;

pub(crate) use d3now::D3NOW_CODES;
pub(crate) use evex::{EVEX_MAP1, EVEX_MAP2, EVEX_MAP3};
pub(crate) use legacy::MAP_LEGACY;
pub(crate) use map0f::MAP_0F;
pub(crate) use map0f38::MAP_0F38;
pub(crate) use map0f3a::MAP_0F3A;
pub(crate) use vex::{VEX_MAP1, VEX_MAP2, VEX_MAP3};
pub(crate) use xop::{XOP_MAP8, XOP_MAP9, XOP_MAPA};
