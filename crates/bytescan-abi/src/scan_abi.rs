//! ABI layer for the scan family.
//!
//! Each entry point:
//! 1. Rejects null pointers paired with a non-zero length
//! 2. Builds a slice of exactly the declared length
//! 3. Delegates to `bytescan-core` and maps `Option` onto a return code

use std::ffi::c_int;

use bytescan_core::{find_first, find_last_byte, trimmed_len};

use crate::{BYTESCAN_EINVAL, BYTESCAN_FOUND, BYTESCAN_NOT_FOUND};

/// Views `len` bytes at `ptr`, treating a null pointer with zero length as empty.
///
/// # Safety
///
/// When `ptr` is non-null it must be valid for reads of `len` bytes for `'a`.
unsafe fn raw_bytes<'a>(ptr: *const u8, len: usize) -> Option<&'a [u8]> {
    if len == 0 {
        return Some(&[] as &[u8]);
    }
    if ptr.is_null() {
        return None;
    }
    // SAFETY: non-null and, per the caller contract, readable for `len` bytes.
    Some(unsafe { std::slice::from_raw_parts(ptr, len) })
}

fn report(found: Option<usize>, out: &mut usize) -> c_int {
    match found {
        Some(value) => {
            *out = value;
            BYTESCAN_FOUND
        }
        None => BYTESCAN_NOT_FOUND,
    }
}

/// Finds the first occurrence of `pat[..pat_len]` in `src[..src_len]`.
///
/// Writes the offset to `*out_offset` and returns `1` when found, returns `0`
/// when absent, `-1` on invalid arguments. An empty pattern is found at `0`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytescan_find_first(
    src: *const u8,
    src_len: usize,
    pat: *const u8,
    pat_len: usize,
    out_offset: *mut usize,
) -> c_int {
    if out_offset.is_null() {
        return BYTESCAN_EINVAL;
    }
    // SAFETY: caller guarantees each non-null pointer covers its declared length.
    let (source, pattern) = unsafe {
        match (raw_bytes(src, src_len), raw_bytes(pat, pat_len)) {
            (Some(source), Some(pattern)) => (source, pattern),
            _ => return BYTESCAN_EINVAL,
        }
    };
    // SAFETY: `out_offset` was checked for null above.
    let out = unsafe { &mut *out_offset };
    report(find_first(source, pattern), out)
}

/// Length of `buf[..len]` with trailing NUL bytes removed.
///
/// Returns a length rather than a status code, so a null `buf` is treated as
/// empty and yields `0` whatever `len` is.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytescan_trimmed_len(buf: *const u8, len: usize) -> usize {
    // SAFETY: caller guarantees a non-null `buf` covers `len` bytes.
    match unsafe { raw_bytes(buf, len) } {
        Some(bytes) => trimmed_len(bytes),
        None => 0,
    }
}

/// Finds the last byte equal to `c` (truncated to `u8`) within `buf[..len]`.
///
/// Same return-code contract as [`bytescan_find_first`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytescan_find_last_byte(
    buf: *const u8,
    len: usize,
    c: c_int,
    out_index: *mut usize,
) -> c_int {
    if out_index.is_null() {
        return BYTESCAN_EINVAL;
    }
    // SAFETY: caller guarantees a non-null `buf` covers `len` bytes.
    let Some(bytes) = (unsafe { raw_bytes(buf, len) }) else {
        return BYTESCAN_EINVAL;
    };
    match find_last_byte(bytes, c as u8, len) {
        Ok(found) => {
            // SAFETY: `out_index` was checked for null above.
            let out = unsafe { &mut *out_index };
            report(found, out)
        }
        Err(_) => BYTESCAN_EINVAL,
    }
}
