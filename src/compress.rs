//! The Argon2 compression function `G`.
//!
//! `G(prev, ref)` xors the two input blocks together, then applies the
//! BLAKE2b round function (no message schedule, so it degenerates to a
//! fixed permutation `P`) to all eight "column" groups of the block and
//! then all eight "row" groups, and xors the pre-permutation value back in.
//! This is ported directly from the teacher crate's scalar `g`/`p`/`p_row`/
//! `p_col` (the `lower_mult`/`wrapping_add` draft, not the nightly SIMD
//! one) and generalized to support version 0x13's XOR-with-previous-pass
//! behavior, which the teacher's 0x10-only implementation never needed.

use crate::block::Block;

#[inline(always)]
fn lower_mult(a: u64, b: u64) -> u64 {
    fn lo(x: u64) -> u64 {
        x & 0xffff_ffff
    }
    lo(a).wrapping_mul(lo(b)).wrapping_mul(2)
}

macro_rules! g_blake2b {
    ($a:expr, $b:expr, $c:expr, $d:expr) => {
        $a = $a.wrapping_add($b).wrapping_add(lower_mult($a, $b));
        $d = ($d ^ $a).rotate_right(32);
        $c = $c.wrapping_add($d).wrapping_add(lower_mult($c, $d));
        $b = ($b ^ $c).rotate_right(24);
        $a = $a.wrapping_add($b).wrapping_add(lower_mult($a, $b));
        $d = ($d ^ $a).rotate_right(16);
        $c = $c.wrapping_add($d).wrapping_add(lower_mult($c, $d));
        $b = ($b ^ $c).rotate_right(63);
    };
}

macro_rules! permute {
    ($v0:expr, $v1:expr, $v2:expr, $v3:expr, $v4:expr, $v5:expr, $v6:expr, $v7:expr,
     $v8:expr, $v9:expr, $v10:expr, $v11:expr, $v12:expr, $v13:expr, $v14:expr, $v15:expr) => {
        g_blake2b!($v0, $v4, $v8, $v12);
        g_blake2b!($v1, $v5, $v9, $v13);
        g_blake2b!($v2, $v6, $v10, $v14);
        g_blake2b!($v3, $v7, $v11, $v15);
        g_blake2b!($v0, $v5, $v10, $v15);
        g_blake2b!($v1, $v6, $v11, $v12);
        g_blake2b!($v2, $v7, $v8, $v13);
        g_blake2b!($v3, $v4, $v9, $v14);
    };
}

#[rustfmt::skip]
fn permute_row(row: usize, b: &mut Block) {
    permute!(
        b[16 * row], b[16 * row + 1], b[16 * row + 2], b[16 * row + 3],
        b[16 * row + 4], b[16 * row + 5], b[16 * row + 6], b[16 * row + 7],
        b[16 * row + 8], b[16 * row + 9], b[16 * row + 10], b[16 * row + 11],
        b[16 * row + 12], b[16 * row + 13], b[16 * row + 14], b[16 * row + 15]
    );
}

#[rustfmt::skip]
fn permute_col(col: usize, b: &mut Block) {
    permute!(
        b[2 * col], b[2 * col + 1],
        b[2 * col + 16], b[2 * col + 17],
        b[2 * col + 32], b[2 * col + 33],
        b[2 * col + 48], b[2 * col + 49],
        b[2 * col + 64], b[2 * col + 65],
        b[2 * col + 80], b[2 * col + 81],
        b[2 * col + 96], b[2 * col + 97],
        b[2 * col + 112], b[2 * col + 113]
    );
}

/// `dest <- G(prev, ref)`, discarding whatever `dest` held before. This is
/// the pass-0 behavior, and also how the address generator derives its
/// pseudo-random blocks (always against a zero "previous" block).
pub fn fill_block(dest: &mut Block, prev: &Block, refb: &Block) {
    dest.copy_xor(prev, refb); // dest now holds R = prev ^ ref, doubling as Q
    for row in 0..8 {
        permute_row(row, dest);
    }
    for col in 0..8 {
        permute_col(col, dest);
    }
    dest.xor_with(prev);
    dest.xor_with(refb);
}

/// `dest <- G(prev, ref) ^ dest`, the version-0x13 behavior for passes ≥ 1:
/// the freshly compressed block is folded into whatever the destination
/// already held from the previous pass instead of replacing it.
pub fn fill_block_xor(dest: &mut Block, prev: &Block, refb: &Block) {
    let mut fresh = Block::zero();
    fill_block(&mut fresh, prev, refb);
    dest.xor_with(&fresh);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compressing_zero_blocks_is_zero() {
        let zero = Block::zero();
        let mut out = Block::zero();
        fill_block(&mut out, &zero, &zero);
        assert!(out.iter().all(|&w| w == 0));
    }

    #[test]
    fn fill_block_xor_folds_into_existing_destination() {
        let prev = Block::load_le(&[0x11; crate::block::ARGON2_BLOCK_BYTES]);
        let refb = Block::load_le(&[0x22; crate::block::ARGON2_BLOCK_BYTES]);

        let mut fresh = Block::zero();
        fill_block(&mut fresh, &prev, &refb);

        let mut dest = Block::load_le(&[0x33; crate::block::ARGON2_BLOCK_BYTES]);
        let old = dest;
        fill_block_xor(&mut dest, &prev, &refb);

        for ((d, f), o) in dest.iter().zip(fresh.iter()).zip(old.iter()) {
            assert_eq!(*d, f ^ o);
        }
    }
}
