//! Error type for explicit-length entry points.

use thiserror::Error;

/// Errors raised when a caller-declared length cannot be honoured.
///
/// A missing match is never an error; searches report it as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("declared length {declared} exceeds buffer length {actual}")]
    LengthExceedsBuffer { declared: usize, actual: usize },
}

/// Returns `buf[..len]`, or an error if `len` runs past the end of `buf`.
pub(crate) fn prefix(buf: &[u8], len: usize) -> Result<&[u8], ScanError> {
    buf.get(..len).ok_or(ScanError::LengthExceedsBuffer {
        declared: len,
        actual: buf.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_within_bounds() {
        assert_eq!(prefix(b"hello", 3), Ok(&b"hel"[..]));
        assert_eq!(prefix(b"hello", 5), Ok(&b"hello"[..]));
        assert_eq!(prefix(b"", 0), Ok(&b""[..]));
    }

    #[test]
    fn prefix_past_end_is_rejected() {
        assert_eq!(
            prefix(b"abc", 4),
            Err(ScanError::LengthExceedsBuffer {
                declared: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn error_message_names_both_lengths() {
        let err = ScanError::LengthExceedsBuffer {
            declared: 100,
            actual: 19,
        };
        assert_eq!(
            err.to_string(),
            "declared length 100 exceeds buffer length 19"
        );
    }
}
