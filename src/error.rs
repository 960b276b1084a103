//! The engine's error taxonomy.
//!
//! A single `thiserror`-derived enum, in the style this pack's other
//! `argon2`/`password-hash` crates (and `nexa-sys-nexa-os`'s own
//! `thiserror` usage) use: one variant per caller-reachable failure
//! mode, `Display` messages specific enough to act on without a
//! debugger. Violated internal invariants (the indexer referencing an
//! unfilled block, for instance) are `debug_assert!`/`unreachable!()`
//! in the modules that can hit them, not a variant here -- those are
//! fatal bugs, not recoverable conditions.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("secret buffer must not be null")]
    NullSecret,

    #[error("salt buffer must not be null")]
    NullSalt,

    #[error("salt must be at least 8 bytes, got {0}")]
    SaltTooShort(usize),

    #[error("output buffer must not be null")]
    NullOutput,

    #[error("hash length must be at least 4 bytes, got {0}")]
    HashLengthTooShort(u32),

    #[error("lanes must be greater than zero")]
    ZeroLanes,

    #[error("threads must be greater than zero")]
    ZeroThreads,

    #[error("time cost must be greater than zero")]
    ZeroTimeCost,

    #[error("memory cost must be greater than zero")]
    ZeroMemoryCost,

    #[error(
        "output range [{offset}, {offset}+{hash_length}) exceeds buffer length {buffer_len}"
    )]
    OutputOutOfRange {
        offset: usize,
        hash_length: usize,
        buffer_len: usize,
    },

    #[error("update range [{offset}, {offset}+{len}) exceeds buffer length {buffer_len}")]
    UpdateOutOfRange {
        offset: usize,
        len: usize,
        buffer_len: usize,
    },

    #[error("engine used after dispose")]
    Disposed,
}

pub type Result<T> = std::result::Result<T, Error>;
