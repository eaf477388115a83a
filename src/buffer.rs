use crate::SniError;

/// A byte sink over a caller-supplied slice.
pub struct EncodeBuffer<'b> {
    buf: &'b mut [u8],
    len: usize,
}

impl<'b> EncodeBuffer<'b> {
    pub fn wrap(buf: &'b mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push(&mut self, b: u8) -> Result<(), SniError> {
        if self.len == self.buf.len() {
            return Err(SniError::InsufficientSpace);
        }
        self.buf[self.len] = b;
        self.len += 1;
        Ok(())
    }

    pub fn push_u16(&mut self, num: u16) -> Result<(), SniError> {
        self.extend_from_slice(&num.to_be_bytes())
    }

    pub fn extend_from_slice(&mut self, other: &[u8]) -> Result<(), SniError> {
        if self.buf.len() - self.len < other.len() {
            return Err(SniError::InsufficientSpace);
        }
        self.buf[self.len..self.len + other.len()].copy_from_slice(other);
        self.len += other.len();
        Ok(())
    }

    /// Run `f` and prefix whatever it wrote with a 16-bit big-endian
    /// length. The caller guarantees the written length fits in a `u16`.
    pub fn with_u16_length(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<(), SniError>,
    ) -> Result<(), SniError> {
        let prefix = self.len;
        self.push_u16(0)?;
        f(self)?;
        let written = (self.len - prefix - 2) as u16;
        self.buf[prefix..prefix + 2].copy_from_slice(&written.to_be_bytes());
        Ok(())
    }
}

impl AsRef<[u8]> for EncodeBuffer<'_> {
    fn as_ref(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}
