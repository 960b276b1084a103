//! A byte buffer that zeroes itself on drop, used for the secret and
//! message accumulator the engine owns between `construct` and
//! `dispose`.
//!
//! Grounded the same way `block.rs`'s `Matrix` zeroizes its arena on
//! drop, and the same way `nathanielknight-password-hashes`'s
//! `Instance` zeroizes `blockhash`/`blockhash_bytes` once they've been
//! consumed.

use zeroize::Zeroize;

/// Owned bytes that are wiped the moment they go out of scope.
#[derive(Default)]
pub struct SecretBuffer(Vec<u8>);

impl SecretBuffer {
    pub fn new(bytes: &[u8]) -> SecretBuffer {
        SecretBuffer(bytes.to_vec())
    }

    pub fn empty() -> SecretBuffer {
        SecretBuffer(Vec::new())
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.0.extend_from_slice(bytes);
    }

    /// Wipes and empties the buffer without dropping it, so a long-lived
    /// `SecretBuffer` (e.g. the engine's message accumulator) can be
    /// reused across `finalize`/`reset` calls.
    pub fn clear(&mut self) {
        self.0.zeroize();
        self.0.clear();
    }
}

impl Drop for SecretBuffer {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_wipes_and_empties() {
        let mut buf = SecretBuffer::new(b"sensitive material");
        buf.clear();
        assert!(buf.is_empty());
    }

    #[test]
    fn extend_from_slice_accumulates() {
        let mut buf = SecretBuffer::empty();
        buf.extend_from_slice(b"hello, ");
        buf.extend_from_slice(b"world");
        assert_eq!(buf.as_slice(), b"hello, world");
    }
}
