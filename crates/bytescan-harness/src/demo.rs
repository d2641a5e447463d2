//! Demonstration over a NUL-padded fixed-size buffer.
//!
//! Three runs of text separated by NULs are stored in a zero-filled 100-byte
//! buffer, and the search is run over the whole buffer with its full length.

use serde::Serialize;

use bytescan_core::{ScanError, find_first, find_last_byte, trimmed_len};

/// Capacity of the demonstration buffer.
pub const DEMO_CAPACITY: usize = 100;
/// Content placed at the start of the demonstration buffer.
pub const DEMO_TEXT: &[u8] = b"miao\0\0\0\0miao233\0\0\0miao123\0";
/// Pattern searched for.
pub const DEMO_PATTERN: &[u8] = b"iao2";
/// Byte located by the last-occurrence scan.
pub const DEMO_LAST_BYTE: u8 = b'i';

/// Everything the demonstration computes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub buffer_len: usize,
    pub trimmed_len: usize,
    pub last_byte_index: Option<usize>,
    pub match_offset: Option<usize>,
}

impl DemoReport {
    /// The one-line console form, `Match:<offset>` or `Match:none`.
    #[must_use]
    pub fn match_line(&self) -> String {
        match self.match_offset {
            Some(offset) => format!("Match:{offset}"),
            None => String::from("Match:none"),
        }
    }
}

/// Builds the zero-padded demonstration buffer.
#[must_use]
pub fn demo_buffer() -> [u8; DEMO_CAPACITY] {
    let mut buf = [0u8; DEMO_CAPACITY];
    buf[..DEMO_TEXT.len()].copy_from_slice(DEMO_TEXT);
    buf
}

/// Runs the demonstration.
pub fn run_demo() -> Result<DemoReport, ScanError> {
    let buf = demo_buffer();
    let trimmed = trimmed_len(&buf);
    Ok(DemoReport {
        buffer_len: buf.len(),
        trimmed_len: trimmed,
        last_byte_index: find_last_byte(&buf, DEMO_LAST_BYTE, trimmed)?,
        match_offset: find_first(&buf, DEMO_PATTERN),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_matches_inside_second_run() {
        let report = run_demo().unwrap();
        assert_eq!(
            report,
            DemoReport {
                buffer_len: 100,
                trimmed_len: 25,
                last_byte_index: Some(19),
                match_offset: Some(9),
            }
        );
        assert_eq!(report.match_line(), "Match:9");
    }

    #[test]
    fn match_line_without_match() {
        let report = DemoReport {
            buffer_len: 0,
            trimmed_len: 0,
            last_byte_index: None,
            match_offset: None,
        };
        assert_eq!(report.match_line(), "Match:none");
    }
}
