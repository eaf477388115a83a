use crate::SniError;

/// A linear byte source over a borrowed slice.
///
/// Every read either consumes exactly the requested bytes or fails with
/// [`SniError::TruncatedInput`], leaving no partial progress visible to
/// the caller beyond the bytes already consumed.
pub struct ParseBuffer<'b> {
    buffer: &'b [u8],
    offset: usize,
}

impl<'b> ParseBuffer<'b> {
    pub fn new(buffer: &'b [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// The unconsumed bytes.
    pub fn as_slice(&self) -> &'b [u8] {
        &self.buffer[self.offset..]
    }

    /// Consume `len` bytes and return them as a sub-buffer.
    pub fn slice(&mut self, len: usize) -> Result<ParseBuffer<'b>, SniError> {
        if self.remaining() < len {
            return Err(SniError::TruncatedInput);
        }
        let slice = &self.buffer[self.offset..self.offset + len];
        self.offset += len;
        Ok(ParseBuffer::new(slice))
    }

    pub fn read_u8(&mut self) -> Result<u8, SniError> {
        if self.remaining() < 1 {
            return Err(SniError::TruncatedInput);
        }
        let byte = self.buffer[self.offset];
        self.offset += 1;
        Ok(byte)
    }

    pub fn read_u16(&mut self) -> Result<u16, SniError> {
        if self.remaining() < 2 {
            return Err(SniError::TruncatedInput);
        }
        let value = u16::from_be_bytes([self.buffer[self.offset], self.buffer[self.offset + 1]]);
        self.offset += 2;
        Ok(value)
    }
}
