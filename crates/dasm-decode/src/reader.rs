//! Bounds-checked instruction byte reader.

use crate::error::DecodeError;

/// Architectural limit on the encoded length of one instruction.
pub const MAX_INSTRUCTION_LEN: usize = 15;

/// Cursor over the bytes of a single instruction.
///
/// Enforces both the buffer bound (`InsufficientBytes`) and the 15-byte
/// instruction ceiling (`InstructionTooLong`), so the decoder proper never
/// has to index the buffer directly.
pub(crate) struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes consumed so far.
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Next byte without consuming it, if there is one within both limits.
    pub(crate) fn peek(&self) -> Option<u8> {
        if self.pos < MAX_INSTRUCTION_LEN {
            self.data.get(self.pos).copied()
        } else {
            None
        }
    }

    /// Byte at `offset` past the cursor, ignoring the length ceiling.
    /// Used for lookahead that decides how a byte is classified (VEX vs LES).
    pub(crate) fn peek_at(&self, offset: usize) -> Option<u8> {
        self.data.get(self.pos + offset).copied()
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8, DecodeError> {
        if self.pos >= MAX_INSTRUCTION_LEN {
            return Err(DecodeError::InstructionTooLong);
        }
        let b = *self
            .data
            .get(self.pos)
            .ok_or(DecodeError::insufficient(self.pos, 1))?;
        self.pos += 1;
        Ok(b)
    }

    pub(crate) fn read_u16(&mut self) -> Result<u16, DecodeError> {
        let lo = self.read_u8()? as u16;
        let hi = self.read_u8()? as u16;
        Ok(lo | (hi << 8))
    }

    pub(crate) fn read_u32(&mut self) -> Result<u32, DecodeError> {
        let lo = self.read_u16()? as u32;
        let hi = self.read_u16()? as u32;
        Ok(lo | (hi << 16))
    }

    pub(crate) fn read_u64(&mut self) -> Result<u64, DecodeError> {
        let lo = self.read_u32()? as u64;
        let hi = self.read_u32()? as u64;
        Ok(lo | (hi << 32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian() {
        let mut r = Reader::new(&[0x78, 0x56, 0x34, 0x12]);
        assert_eq!(r.read_u32().unwrap(), 0x1234_5678);
        assert_eq!(r.position(), 4);
    }

    #[test]
    fn runs_out_of_bytes() {
        let mut r = Reader::new(&[0xAA]);
        assert_eq!(r.read_u8().unwrap(), 0xAA);
        assert_eq!(r.read_u8(), Err(DecodeError::insufficient(1, 1)));
    }

    #[test]
    fn enforces_length_ceiling() {
        let data = [0x66u8; 20];
        let mut r = Reader::new(&data);
        for _ in 0..MAX_INSTRUCTION_LEN {
            r.read_u8().unwrap();
        }
        assert_eq!(r.read_u8(), Err(DecodeError::InstructionTooLong));
        assert_eq!(r.peek(), None);
    }
}
