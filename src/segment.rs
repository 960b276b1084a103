//! Fills one segment (a quarter-lane slice) of the memory matrix.
//!
//! Ported from the teacher's `fill_slice`/`fill_block`/`prev`: each
//! destination block's "previous" neighbor is recomputed from its own
//! offset every iteration (`prev(n) = n > 0 ? n - 1 : laneLength - 1`)
//! rather than tracked as a running counter, which is what keeps the
//! lane-0-wraparound case correct without any extra bookkeeping.

use crate::address::pseudo_random_words;
use crate::block::Matrix;
use crate::compress::{fill_block, fill_block_xor};
use crate::index::index_alpha;
use crate::variant::Variant;

/// Number of equal-sized slices each lane is divided into for
/// synchronization purposes.
pub const SLICES_PER_LANE: u32 = 4;

fn split_u64(n: u64) -> (u32, u32) {
    ((n & 0xffff_ffff) as u32, (n >> 32) as u32)
}

/// The offset, within its lane, of the block immediately before `n`.
fn prev_offset(n: u32, lane_length: u32) -> u32 {
    if n > 0 {
        n - 1
    } else {
        lane_length - 1
    }
}

/// Fills every not-yet-seeded block of one `(pass, lane, slice)` segment.
///
/// For `(pass, slice) == (0, 0)`, blocks at offset 0 and 1 are assumed
/// already seeded by the initializer; filling starts at offset 2.
pub fn fill_segment(
    blocks: &mut Matrix,
    variant: Variant,
    pass: u32,
    lane: u32,
    slice: u32,
    passes: u32,
) {
    let lanes = blocks.lanes();
    let lane_length = blocks.lane_length();
    let segment_length = lane_length / SLICES_PER_LANE;
    let block_count = blocks.block_count() as u32;

    let starting_index = if pass == 0 && slice == 0 { 2 } else { 0 };

    let pseudo_rands = if variant == Variant::Argon2i {
        Some(pseudo_random_words(
            pass,
            lane,
            slice,
            block_count,
            passes,
            variant.addressing_flag(),
            segment_length,
        ))
    } else {
        None
    };

    for index in starting_index..segment_length {
        let cur = slice * segment_length + index;
        let prev = prev_offset(cur, lane_length);

        let (j1, j2) = match &pseudo_rands {
            Some(words) => split_u64(words[index as usize]),
            None => split_u64(blocks[(lane, prev)][0]),
        };

        let ref_lane = if pass == 0 && slice == 0 {
            lane
        } else {
            j2 % lanes
        };
        let same_lane = ref_lane == lane;
        let ref_index = index_alpha(pass, slice, segment_length, index, j1, same_lane);

        let (dest, prev_blk, refb) = blocks.get3((lane, cur), (lane, prev), (ref_lane, ref_index));
        if pass == 0 {
            fill_block(dest, prev_blk, refb);
        } else {
            fill_block_xor(dest, prev_blk, refb);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Block, ARGON2_BLOCK_BYTES};

    fn seeded_matrix(lanes: u32, lane_length: u32) -> Matrix {
        let mut m = Matrix::new(lanes, lane_length);
        for lane in 0..lanes {
            m[(lane, 0)] = Block::load_le(&[0x11; ARGON2_BLOCK_BYTES]);
            m[(lane, 1)] = Block::load_le(&[0x22; ARGON2_BLOCK_BYTES]);
        }
        m
    }

    #[test]
    fn first_segment_is_deterministic_and_touches_only_its_lane() {
        let mut a = seeded_matrix(2, 16);
        let mut b = seeded_matrix(2, 16);
        fill_segment(&mut a, Variant::Argon2d, 0, 0, 0, 1);
        fill_segment(&mut b, Variant::Argon2d, 0, 0, 0, 1);

        for offset in 2..4 {
            assert_eq!(
                a[(0, offset)].iter().collect::<Vec<_>>(),
                b[(0, offset)].iter().collect::<Vec<_>>()
            );
        }
        // Lane 0's first pass, first slice never reads or writes lane 1.
        for offset in 0..16 {
            assert_eq!(
                a[(1, offset)].iter().collect::<Vec<_>>(),
                b[(1, offset)].iter().collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn argon2d_and_argon2i_diverge_on_the_same_seed() {
        // Same seeded input, different addressing rule: the two variants
        // must not coincidentally produce the same memory contents.
        let mut d = seeded_matrix(1, 16);
        let mut i = seeded_matrix(1, 16);
        fill_segment(&mut d, Variant::Argon2d, 0, 0, 0, 1);
        fill_segment(&mut i, Variant::Argon2i, 0, 0, 0, 1);

        let diverged = (2..4).any(|offset| {
            d[(0, offset)].iter().collect::<Vec<_>>() != i[(0, offset)].iter().collect::<Vec<_>>()
        });
        assert!(diverged);
    }
}
