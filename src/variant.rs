//! Which of the two supported Argon2 addressing rules is in effect.
//!
//! Argon2id is out of scope: it interleaves one Argon2i pass with
//! Argon2d passes, which would mean threading a "pass 0 only" exception
//! through the indexer and segment filler for no benefit this engine
//! needs.

/// Selects how the segment filler obtains its reference-block index.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Variant {
    /// Data-dependent addressing: the reference block is derived from
    /// the content of the previously written block.
    Argon2d = 0,
    /// Data-independent addressing: the reference block is derived from
    /// a counter-driven address generator, never from block content.
    Argon2i = 1,
}

impl Variant {
    /// The `addressingFlag` value baked into the pre-hash and the
    /// address generator's synthetic input block.
    #[inline]
    pub fn addressing_flag(self) -> u32 {
        self as u32
    }
}
