//! Bounded output cursor over a caller-owned buffer

use crate::error::GenerateError;

/// Append-only writer over a fixed buffer.
///
/// A write that does not fit is rejected whole; the position never moves back.
#[derive(Debug)]
pub struct OutputCursor<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> OutputCursor<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn push_str(&mut self, s: &str) -> Result<(), GenerateError> {
        let bytes = s.as_bytes();
        if bytes.len() > self.remaining() {
            return Err(GenerateError::BufferExhausted {
                capacity: self.capacity(),
            });
        }
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }

    pub fn push(&mut self, c: char) -> Result<(), GenerateError> {
        let mut utf8 = [0u8; 4];
        self.push_str(c.encode_utf8(&mut utf8))
    }

    /// Bytes written since `start`
    pub fn written_since(&self, start: usize) -> &[u8] {
        &self.buf[start.min(self.pos)..self.pos]
    }
}
