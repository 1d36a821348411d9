//! Growable buffer of unconsumed input.

use log::trace;

use crate::{Error, Result};

/// A contiguous region of unconsumed bytes, grown by doubling up to a cap.
///
/// Consumed bytes are always removed from the front, so the buffer only
/// ever holds input that no parser has accepted yet.
#[derive(Debug)]
pub struct ParseBuffer {
    /// Backing storage. Its length is the current capacity.
    buf: Vec<u8>,
    /// Number of logical bytes at the front of `buf`.
    len: usize,
    /// Capacity is never grown past this.
    max: usize,
}

impl ParseBuffer {
    /// Create a buffer with `initial` bytes of room that never grows past `max`.
    pub fn new(initial: usize, max: usize) -> Self {
        let max = max.max(1);
        let initial = initial.max(1).min(max);
        Self {
            buf: vec![0; initial],
            len: 0,
            max,
        }
    }

    /// The unconsumed bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Number of unconsumed bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current allocation size.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// The growth cap.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Copy `bytes` after the unconsumed region, growing if needed.
    ///
    /// Fails with [`Error::BufferLimitExceeded`] if the buffer would have to
    /// hold more than `max` bytes.
    pub fn append(&mut self, bytes: &[u8]) -> Result<()> {
        let needed = self.len + bytes.len();
        if needed > self.max {
            return Err(Error::BufferLimitExceeded);
        }
        while self.capacity() < needed {
            self.grow()?;
        }
        self.buf[self.len..needed].copy_from_slice(bytes);
        self.len = needed;
        Ok(())
    }

    /// Writable room after the unconsumed region, for reading directly into.
    ///
    /// Grows the buffer first when it is full. Pair with [`commit`].
    ///
    /// [`commit`]: ParseBuffer::commit
    pub fn spare_mut(&mut self) -> Result<&mut [u8]> {
        if self.len == self.capacity() {
            self.grow()?;
        }
        Ok(&mut self.buf[self.len..])
    }

    /// Mark `n` bytes written into [`spare_mut`] as unconsumed input.
    ///
    /// [`spare_mut`]: ParseBuffer::spare_mut
    pub fn commit(&mut self, n: usize) {
        assert!(self.len + n <= self.capacity(), "commit past capacity");
        self.len += n;
    }

    /// Drop the first `n` bytes, shifting the remainder to the front.
    pub fn consume(&mut self, n: usize) {
        assert!(n <= self.len, "consume past end of buffer");
        if n == 0 {
            return;
        }
        self.buf.copy_within(n..self.len, 0);
        self.len -= n;
    }

    fn grow(&mut self) -> Result<()> {
        let capacity = self.capacity();
        if capacity >= self.max {
            return Err(Error::BufferLimitExceeded);
        }
        let next = capacity.saturating_mul(2).min(self.max);
        trace!("growing parse buffer from {} to {} bytes", capacity, next);
        self.buf.resize(next, 0);
        Ok(())
    }
}
