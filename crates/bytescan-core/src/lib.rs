//! # bytescan-core
//!
//! Safe Rust scanning over fixed-length byte buffers.
//!
//! Every operation takes its buffers as slices (or [`ByteBuffer`] views) whose
//! length is authoritative. Nothing here infers a length by looking for a
//! terminator byte, and no `unsafe` code is permitted at the crate level.

#![deny(unsafe_code)]

pub mod buffer;
pub mod error;
pub mod scan;
pub mod search;

pub use buffer::ByteBuffer;
pub use error::ScanError;
pub use scan::{find_last_byte, trimmed_len};
pub use search::{find_first, find_first_in, find_first_n};
