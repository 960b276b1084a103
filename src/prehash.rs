//! Pre-hash (`H0`) and Argon2's variable-length hash `H'`, both built on
//! BLAKE2b.
//!
//! Ported from the teacher's `h0`/`h_prime`/`b2hash!` macro. BLAKE2b's
//! settable output length already gives `H'` its short case for free;
//! `H'` only needs the chained-finalize loop once the requested length
//! exceeds one native BLAKE2b digest.

use blake2_rfc::blake2b::Blake2b;

use crate::block::Block;
use crate::variant::Variant;

/// BLAKE2b's native maximum digest length, and the unit `H'` chains in.
const B2_MAX_LEN: usize = 64;

/// Size of the pre-hash buffer: 64 bytes of `H0` plus 8 bytes reserved
/// for the `(blockIndex, lane)` pair a first-block seed call appends.
pub const H0_BUF_LEN: usize = B2_MAX_LEN + 8;

fn len_prefixed(buf: &[u8]) -> [u8; 4] {
    (buf.len() as u32).to_le_bytes()
}

fn b2hash_into(out: &mut [u8], parts: &[&[u8]]) {
    let mut hasher = Blake2b::new(out.len());
    for part in parts {
        hasher.update(part);
    }
    out.copy_from_slice(hasher.finalize().as_bytes());
}

/// Computes `H0` into a 72-byte buffer whose last 8 bytes are left zero,
/// ready for [`seed_first_blocks`] to fill in per lane.
#[allow(clippy::too_many_arguments)]
pub fn h0(
    lanes: u32,
    hash_length: u32,
    memory_cost: u32,
    time_cost: u32,
    version: u32,
    variant: Variant,
    message: &[u8],
    salt: &[u8],
    secret: &[u8],
    ad: &[u8],
) -> [u8; H0_BUF_LEN] {
    let mut buf = [0u8; H0_BUF_LEN];
    b2hash_into(
        &mut buf[0..B2_MAX_LEN],
        &[
            &lanes.to_le_bytes(),
            &hash_length.to_le_bytes(),
            &memory_cost.to_le_bytes(),
            &time_cost.to_le_bytes(),
            &version.to_le_bytes(),
            &variant.addressing_flag().to_le_bytes(),
            &len_prefixed(message),
            message,
            &len_prefixed(salt),
            salt,
            &len_prefixed(secret),
            secret,
            &len_prefixed(ad),
            ad,
        ],
    );
    buf
}

/// Argon2's variable-length hash. For `out.len() <= 64` this is a single
/// BLAKE2b call; longer outputs chain half-overlapping 64-byte digests,
/// each input to the next, until the remainder fits in one final call.
pub fn h_prime(out: &mut [u8], input: &[u8]) {
    let prefix = len_prefixed(out);

    if out.len() <= B2_MAX_LEN {
        b2hash_into(out, &[&prefix, input]);
        return;
    }

    let mut block = [0u8; B2_MAX_LEN];
    b2hash_into(&mut block, &[&prefix, input]);
    out[0..B2_MAX_LEN].copy_from_slice(&block);
    let mut written = B2_MAX_LEN / 2;

    while out.len() - written > B2_MAX_LEN {
        let prev = block;
        b2hash_into(&mut block, &[&prev]);
        out[written..written + B2_MAX_LEN].copy_from_slice(&block);
        written += B2_MAX_LEN / 2;
    }

    let remaining = out.len() - written;
    let prev = block;
    b2hash_into(&mut out[written..written + remaining], &[&prev]);
}

/// Seeds the first two blocks of every lane from `H0`, per RFC 9106
/// §3.2 step 3: `B[l][0] = H'(H0 || LE32(0) || LE32(l), 1024)`,
/// `B[l][1] = H'(H0 || LE32(1) || LE32(l), 1024)`.
pub fn seed_first_blocks(blocks: &mut crate::block::Matrix, mut h0: [u8; H0_BUF_LEN]) {
    let mut expansion = [0u8; 1024];
    for lane in 0..blocks.lanes() {
        h0[64..68].copy_from_slice(&0u32.to_le_bytes());
        h0[68..72].copy_from_slice(&lane.to_le_bytes());
        h_prime(&mut expansion, &h0);
        blocks[(lane, 0)] = Block::load_le(&expansion);

        h0[64..68].copy_from_slice(&1u32.to_le_bytes());
        h_prime(&mut expansion, &h0);
        blocks[(lane, 1)] = Block::load_le(&expansion);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn h_prime_short_output_is_a_single_blake2b_call() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        h_prime(&mut a, b"same input");
        h_prime(&mut b, b"same input");
        assert_eq!(a, b);
        assert_ne!(a, [0u8; 32]);
    }

    #[test]
    fn h_prime_long_output_is_deterministic() {
        let mut a = [0u8; 1024];
        let mut b = [0u8; 1024];
        h_prime(&mut a, b"argon2 seeds its first two blocks this way");
        h_prime(&mut b, b"argon2 seeds its first two blocks this way");
        assert_eq!(&a[..], &b[..]);
    }

    #[test]
    fn h0_changes_with_every_parameter() {
        let base = h0(
            1,
            32,
            8,
            1,
            0x13,
            Variant::Argon2d,
            b"msg",
            b"salt1234",
            b"",
            b"",
        );
        let diff_variant = h0(
            1,
            32,
            8,
            1,
            0x13,
            Variant::Argon2i,
            b"msg",
            b"salt1234",
            b"",
            b"",
        );
        assert_ne!(base, diff_variant);
    }

    #[test]
    fn seed_first_blocks_differ_per_lane() {
        let h0_buf = h0(
            2,
            32,
            16,
            1,
            0x13,
            Variant::Argon2d,
            b"msg",
            b"saltsaltsalt",
            b"",
            b"",
        );
        let mut matrix = crate::block::Matrix::new(2, 4);
        seed_first_blocks(&mut matrix, h0_buf);
        assert_ne!(
            matrix[(0, 0)].iter().collect::<Vec<_>>(),
            matrix[(1, 0)].iter().collect::<Vec<_>>()
        );
        assert_ne!(
            matrix[(0, 0)].iter().collect::<Vec<_>>(),
            matrix[(0, 1)].iter().collect::<Vec<_>>()
        );
    }
}
