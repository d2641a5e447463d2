// All extern "C" exports accept raw pointers from C callers; argument checks
// happen at runtime in `scan_abi::raw_bytes`.
#![allow(clippy::missing_safety_doc)]
//! # bytescan-abi
//!
//! `extern "C"` boundary for `bytescan-core`.
//!
//! ```text
//! C caller -> ABI entry (this crate) -> pointer/length checks -> core impl -> return code
//! ```
//!
//! Every buffer crosses the boundary as a pointer plus an explicit length. The
//! length is authoritative: no entry point scans for a terminator. "Not found"
//! is reported through the return code, never by overloading an offset value.

pub mod scan_abi;

/// Return code: the operation found a match and wrote it to the out-pointer.
pub const BYTESCAN_FOUND: i32 = 1;
/// Return code: no match; the out-pointer is left untouched.
pub const BYTESCAN_NOT_FOUND: i32 = 0;
/// Return code: invalid arguments (null pointer with non-zero length, null out-pointer).
pub const BYTESCAN_EINVAL: i32 = -1;
