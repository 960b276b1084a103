//! Argon2i pseudo-random address generation.
//!
//! Argon2i cannot pick its reference block from the content of the
//! previous block — that would make the memory access pattern depend on
//! secret data. Instead it runs the compression function twice over a
//! synthetic "address" input block and harvests 128 pseudo-random 64-bit
//! words per call, refreshing every 128 blocks of the segment. Ported from
//! the teacher's `Gen2i`, restructured as a single precomputation over the
//! whole segment (matching how the segment filler consumes it) rather than
//! a lazily-advancing iterator.

use crate::block::Block;
use crate::compress::fill_block;

/// Number of pseudo-random words produced by one pair of compressions.
pub const ADDRESSES_IN_BLOCK: u32 = 128;

/// Precomputes the `segment_length` pseudo-random 64-bit words an Argon2i
/// (or Argon2id data-independent) segment needs, one per block position.
pub fn pseudo_random_words(
    pass: u32,
    lane: u32,
    slice: u32,
    block_count: u32,
    passes: u32,
    addressing_flag: u32,
    segment_length: u32,
) -> Vec<u64> {
    let mut input = Block::zero();
    input[0] = pass as u64;
    input[1] = lane as u64;
    input[2] = slice as u64;
    input[3] = block_count as u64;
    input[4] = passes as u64;
    input[5] = addressing_flag as u64;

    let zero = Block::zero();
    let mut addresses = Block::zero();
    let mut counter: u64 = 0;
    let mut out = Vec::with_capacity(segment_length as usize);

    for i in 0..segment_length {
        if i % ADDRESSES_IN_BLOCK == 0 {
            counter += 1;
            input[6] = counter;
            let mut t = Block::zero();
            fill_block(&mut t, &zero, &input);
            fill_block(&mut addresses, &zero, &t);
        }
        out.push(addresses[(i % ADDRESSES_IN_BLOCK) as usize]);
    }

    out
}
