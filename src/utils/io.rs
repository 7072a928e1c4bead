// I/O utilities for reading tag data

use std::io::{self, Read};

/// Decode a synchsafe integer (7 bits per byte, big-endian)
///
/// The high bit of each byte is not masked, so malformed input decodes to
/// whatever the overlapping groups produce instead of failing.
pub fn synchsafe(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .fold(0u32, |acc, &b| (acc << 7) | b as u32)
}

/// Fill as much of `buf` as the reader can supply
///
/// Returns the number of bytes read. Unlike `read_exact`, hitting the end of
/// input is not an error, so callers can tell a clean end (0) from a partial
/// read (anything short of `buf.len()`).
pub fn read_fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Discard up to `count` bytes, returning how many were actually skipped
pub fn skip<R: Read>(reader: &mut R, count: u64) -> io::Result<u64> {
    io::copy(&mut reader.by_ref().take(count), &mut io::sink())
}
