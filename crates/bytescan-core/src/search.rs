//! Substring search over explicit-length byte buffers.
//!
//! All functions report the leftmost match. An empty pattern matches at
//! offset `0` of every source, including an empty one.

use crate::buffer::ByteBuffer;
use crate::error::{ScanError, prefix};

/// Finds the first offset at which `pattern` occurs in `source`.
///
/// Candidate offsets are tried in increasing order from `0` to
/// `source.len() - pattern.len()`. Returns `None` when no candidate matches,
/// which includes every case where the pattern is longer than the source.
pub fn find_first(source: &[u8], pattern: &[u8]) -> Option<usize> {
    find_first_in(source, pattern)
}

/// [`find_first`] over any [`ByteBuffer`].
///
/// Reads are confined to `source[0..source.len())` and
/// `pattern[0..pattern.len())`. Each candidate comparison stops at the first
/// mismatching byte.
pub fn find_first_in<S, P>(source: &S, pattern: &P) -> Option<usize>
where
    S: ByteBuffer + ?Sized,
    P: ByteBuffer + ?Sized,
{
    let source_len = source.len();
    let pattern_len = pattern.len();

    if pattern_len == 0 {
        return Some(0);
    }
    if pattern_len > source_len {
        return None;
    }

    (0..=source_len - pattern_len).find(|&start| {
        (0..pattern_len).all(|j| source.byte_at(start + j) == pattern.byte_at(j))
    })
}

/// Explicit-length form of [`find_first`].
///
/// Searches `source[..source_len]` for `pattern[..pattern_len]`. The declared
/// lengths are authoritative: bytes past them are never examined, and a
/// declared length longer than its slice is an error rather than being clamped.
pub fn find_first_n(
    source: &[u8],
    source_len: usize,
    pattern: &[u8],
    pattern_len: usize,
) -> Result<Option<usize>, ScanError> {
    let source = prefix(source, source_len)?;
    let pattern = prefix(pattern, pattern_len)?;
    Ok(find_first(source, pattern))
}
