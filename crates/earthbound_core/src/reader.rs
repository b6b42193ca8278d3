use crate::error::LayoutError;

/// Positioned little-endian reader over a complete save record buffer.
///
/// Every read takes the name of the field being decoded so that a short
/// buffer reports which field ran out of bytes, not just where.
pub struct SaveReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> SaveReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn read_u8(&mut self, field: &'static str) -> Result<u8, LayoutError> {
        let bytes = self.read_bytes(field, 1)?;
        Ok(bytes[0])
    }

    pub fn read_u16(&mut self, field: &'static str) -> Result<u16, LayoutError> {
        let bytes = self.read_bytes(field, 2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32(&mut self, field: &'static str) -> Result<u32, LayoutError> {
        let bytes = self.read_bytes(field, 4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_bytes(&mut self, field: &'static str, n: usize) -> Result<&'a [u8], LayoutError> {
        if self.remaining() < n {
            return Err(LayoutError::TruncatedBuffer {
                field,
                offset: self.pos,
                needed: n,
                available: self.remaining(),
            });
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_array<const N: usize>(
        &mut self,
        field: &'static str,
    ) -> Result<[u8; N], LayoutError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(field, N)?);
        Ok(out)
    }
}
