//! Symbol resolution extension point.

use dasm_core::Instruction;

/// A resolved symbol returned by a [`SymbolResolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolResult {
    /// Address the symbol itself lives at. When this differs from the looked
    /// up address, the formatter renders `symbol+displ` (or `symbol-displ`
    /// when [`Self::signed`] is set and the symbol is above the address).
    pub address: u64,
    pub text: String,
    /// Render the distance to the symbol as a signed value.
    pub signed: bool,
}

impl SymbolResult {
    pub fn new(address: u64, text: impl Into<String>) -> Self {
        Self {
            address,
            text: text.into(),
            signed: false,
        }
    }
}

/// Maps addresses to names. Supplied by the caller; a formatter without a
/// resolver behaves exactly like one whose resolver always returns `None`.
pub trait SymbolResolver {
    /// Called for branch targets, absolute memory addresses and full-width
    /// immediates. `operand` is the operand index being formatted and `size`
    /// the value width in bytes.
    fn resolve(
        &mut self,
        instruction: &Instruction,
        operand: usize,
        address: u64,
        size: u32,
    ) -> Option<SymbolResult>;
}
