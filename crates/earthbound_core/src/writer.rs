use crate::error::LayoutError;

/// Little-endian writer accumulating an encoded save record.
///
/// Encoding always targets a fresh buffer; callers commit the finished bytes
/// only after the whole record encodes successfully.
#[derive(Default)]
pub struct SaveWriter {
    buf: Vec<u8>,
}

impl SaveWriter {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn position(&self) -> usize {
        self.buf.len()
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn write_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Consume the writer, validating that exactly `expected_len` bytes were
    /// emitted. Offset drift anywhere in the assembler surfaces here rather
    /// than as a silently corrupt record.
    pub fn finish(self, context: &'static str, expected_len: usize) -> Result<Vec<u8>, LayoutError> {
        if self.buf.len() != expected_len {
            return Err(LayoutError::LengthMismatch {
                context,
                expected: expected_len,
                actual: self.buf.len(),
            });
        }
        Ok(self.buf)
    }
}
