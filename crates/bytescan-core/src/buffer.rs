//! Read-only byte buffer views.

/// A fixed-length, read-only sequence of bytes.
///
/// The search routines only ever touch a buffer through this trait, and only at
/// indices below [`ByteBuffer::len`]. Implementors may panic on an
/// out-of-range index; the slice implementation does.
pub trait ByteBuffer {
    /// Number of readable bytes.
    fn len(&self) -> usize;

    /// The byte at `index`. Callers guarantee `index < self.len()`.
    fn byte_at(&self, index: usize) -> u8;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ByteBuffer for [u8] {
    #[inline]
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self[index]
    }
}

impl<const N: usize> ByteBuffer for [u8; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self[index]
    }
}

impl ByteBuffer for Vec<u8> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self[index]
    }
}

impl<B: ByteBuffer + ?Sized> ByteBuffer for &B {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        (**self).byte_at(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total<B: ByteBuffer + ?Sized>(buf: &B) -> u32 {
        (0..buf.len()).map(|i| u32::from(buf.byte_at(i))).sum()
    }

    #[test]
    fn slice_array_and_vec_agree() {
        let arr = [1u8, 2, 3];
        let vec = arr.to_vec();
        assert_eq!(total(&arr[..]), 6);
        assert_eq!(total(&arr), 6);
        assert_eq!(total(&vec), 6);
        assert_eq!(total(&&arr[..]), 6);
    }

    #[test]
    fn empty_views() {
        let empty: [u8; 0] = [];
        assert!(ByteBuffer::is_empty(&empty));
        assert!(ByteBuffer::is_empty(&b""[..]));
        assert!(!ByteBuffer::is_empty(&vec![0u8]));
    }

    #[test]
    #[should_panic]
    fn slice_read_past_end_panics() {
        let buf = [7u8; 2];
        let _ = buf[..].byte_at(2);
    }
}
