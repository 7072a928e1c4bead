// Size accounting for the frame region of an ID3v2 block

use std::io::{self, Read};

use crate::utils::io::{read_fill, skip};

/// Remaining byte budget of the frame region
///
/// The region is not a reader wrapper. Frame headers and the extended header
/// are read through it and can never cross the limit. Payloads are read from
/// the stream directly and only charged afterwards, so an oversized payload
/// runs past the limit and simply empties the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRegion {
    remaining: u64,
}

impl FrameRegion {
    pub fn new(size: u32) -> Self {
        FrameRegion {
            remaining: size as u64,
        }
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Read up to `buf.len()` bytes without crossing the limit
    ///
    /// Returns the count actually read; 0 means the region or the stream is
    /// exhausted.
    pub fn read<R: Read>(&mut self, reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
        let want = (buf.len() as u64).min(self.remaining) as usize;
        let n = read_fill(reader, &mut buf[..want])?;
        self.remaining -= n as u64;
        Ok(n)
    }

    /// Discard up to `count` bytes inside the region
    pub fn skip<R: Read>(&mut self, reader: &mut R, count: u64) -> io::Result<u64> {
        let skipped = skip(reader, count.min(self.remaining))?;
        self.remaining -= skipped;
        Ok(skipped)
    }

    /// Charge bytes that were read outside the region
    pub fn consume_unbounded(&mut self, len: u64) {
        self.remaining = self.remaining.saturating_sub(len);
    }
}
