//! Single-byte scans over fixed-size buffers.

use crate::error::{ScanError, prefix};

/// Length of `buf` once trailing `0x00` bytes are dropped.
///
/// Interior NULs are kept. An empty or all-zero buffer has length `0`.
pub fn trimmed_len(buf: &[u8]) -> usize {
    buf.iter().rposition(|&b| b != 0).map_or(0, |last| last + 1)
}

/// Index of the last occurrence of `needle` within `buf[..n]`.
///
/// Returns `Ok(None)` when the byte does not occur (or `n == 0`), and an error
/// when `n` is larger than the buffer.
pub fn find_last_byte(buf: &[u8], needle: u8, n: usize) -> Result<Option<usize>, ScanError> {
    let scoped = prefix(buf, n)?;
    Ok(scoped.iter().rposition(|&b| b == needle))
}
