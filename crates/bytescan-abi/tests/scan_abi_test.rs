//! Integration test: extern C scan boundary
//!
//! Exercises the ABI entry points the way a C caller would: raw pointers,
//! explicit lengths, and an out-pointer that is only written on a match.
//!
//! Run: cargo test -p bytescan-abi --test scan_abi_test

use std::ptr;

use bytescan_abi::scan_abi::{bytescan_find_first, bytescan_find_last_byte, bytescan_trimmed_len};
use bytescan_abi::{BYTESCAN_EINVAL, BYTESCAN_FOUND, BYTESCAN_NOT_FOUND};

const UNTOUCHED: usize = usize::MAX;

fn find(src: &[u8], pat: &[u8]) -> (i32, usize) {
    let mut out = UNTOUCHED;
    // SAFETY: both slices are valid for their lengths; `out` is a live local.
    let rc = unsafe {
        bytescan_find_first(src.as_ptr(), src.len(), pat.as_ptr(), pat.len(), &mut out)
    };
    (rc, out)
}

#[test]
fn find_first_reports_offset() {
    assert_eq!(find(b"miaomiao233miao123", b"iao2"), (BYTESCAN_FOUND, 5));
    assert_eq!(find(b"abcabc", b"abc"), (BYTESCAN_FOUND, 0));
}

#[test]
fn find_first_absent_leaves_out_untouched() {
    assert_eq!(find(b"xxxxx", b"y"), (BYTESCAN_NOT_FOUND, UNTOUCHED));
    assert_eq!(find(b"abc", b"abcd"), (BYTESCAN_NOT_FOUND, UNTOUCHED));
}

#[test]
fn find_first_declared_length_is_authoritative() {
    let src = b"aaaXYZ";
    let pat = b"XYZ";
    let mut out = UNTOUCHED;
    // SAFETY: 4 <= src.len(); the match at offset 3 lies outside the declared range.
    let rc = unsafe { bytescan_find_first(src.as_ptr(), 4, pat.as_ptr(), 3, &mut out) };
    assert_eq!(rc, BYTESCAN_NOT_FOUND);
    assert_eq!(out, UNTOUCHED);
}

#[test]
fn null_with_zero_length_is_empty() {
    let mut out = UNTOUCHED;
    // SAFETY: zero-length buffers are never dereferenced.
    let rc = unsafe { bytescan_find_first(ptr::null(), 0, ptr::null(), 0, &mut out) };
    assert_eq!((rc, out), (BYTESCAN_FOUND, 0));
}

#[test]
fn null_with_length_is_rejected() {
    let mut out = UNTOUCHED;
    let pat = b"a";
    // SAFETY: the null source is rejected before any read.
    let rc = unsafe { bytescan_find_first(ptr::null(), 8, pat.as_ptr(), 1, &mut out) };
    assert_eq!(rc, BYTESCAN_EINVAL);
    assert_eq!(out, UNTOUCHED);
}

#[test]
fn null_out_pointer_is_rejected() {
    let src = b"abc";
    // SAFETY: the null out-pointer is rejected before any write.
    let rc = unsafe {
        bytescan_find_first(src.as_ptr(), src.len(), src.as_ptr(), 1, ptr::null_mut())
    };
    assert_eq!(rc, BYTESCAN_EINVAL);
}

#[test]
fn trimmed_len_drops_trailing_nuls() {
    let buf = b"miao\0\0miao\0\0\0";
    // SAFETY: pointer and length come from the same array.
    assert_eq!(unsafe { bytescan_trimmed_len(buf.as_ptr(), buf.len()) }, 10);
    // SAFETY: all-zero buffer of the declared length.
    assert_eq!(unsafe { bytescan_trimmed_len([0u8; 8].as_ptr(), 8) }, 0);
    // SAFETY: null with length is treated as empty.
    assert_eq!(unsafe { bytescan_trimmed_len(ptr::null(), 8) }, 0);
}

#[test]
fn find_last_byte_reports_index() {
    let buf = b"miao\0\0miao\0";
    let mut out = UNTOUCHED;
    // SAFETY: pointer and length come from the same array.
    let rc = unsafe { bytescan_find_last_byte(buf.as_ptr(), buf.len(), c_int_of(b'i'), &mut out) };
    assert_eq!((rc, out), (BYTESCAN_FOUND, 7));

    let mut out = UNTOUCHED;
    // SAFETY: as above; only the first 4 bytes are in scope.
    let rc = unsafe { bytescan_find_last_byte(buf.as_ptr(), 4, c_int_of(b'm'), &mut out) };
    assert_eq!((rc, out), (BYTESCAN_FOUND, 0));

    let mut out = UNTOUCHED;
    // SAFETY: as above.
    let rc = unsafe { bytescan_find_last_byte(buf.as_ptr(), buf.len(), c_int_of(b'z'), &mut out) };
    assert_eq!((rc, out), (BYTESCAN_NOT_FOUND, UNTOUCHED));
}

#[test]
fn find_last_byte_rejects_null_out() {
    let buf = b"abc";
    // SAFETY: the null out-pointer is rejected before any write.
    let rc = unsafe {
        bytescan_find_last_byte(buf.as_ptr(), buf.len(), c_int_of(b'a'), ptr::null_mut())
    };
    assert_eq!(rc, BYTESCAN_EINVAL);
}

#[test]
fn find_last_byte_rejects_null_buf_with_len() {
    let mut out = UNTOUCHED;
    // SAFETY: the null buffer is rejected before any read.
    let rc = unsafe { bytescan_find_last_byte(ptr::null(), 3, c_int_of(b'a'), &mut out) };
    assert_eq!((rc, out), (BYTESCAN_EINVAL, UNTOUCHED));

    let mut out = UNTOUCHED;
    // SAFETY: a zero-length buffer is never dereferenced.
    let rc = unsafe { bytescan_find_last_byte(ptr::null(), 0, c_int_of(b'a'), &mut out) };
    assert_eq!((rc, out), (BYTESCAN_NOT_FOUND, UNTOUCHED));
}

fn c_int_of(b: u8) -> std::ffi::c_int {
    std::ffi::c_int::from(b)
}
