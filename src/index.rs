//! Maps a pseudo-random word and a segment position to a concrete
//! reference-block offset within a lane, following Argon2's quadratic
//! windowing rule (favor recently-written blocks, but allow any block the
//! slice barrier has already made visible). Ported from the teacher's
//! free-standing `index_alpha`.

/// Computes the reference block's offset within its lane.
///
/// `segment_length` is one quarter of `lane_length`. `index` is the
/// position within the current segment. `j1` is the low 32 bits of the
/// pseudo-random word for this block; `same_lane` is whether the
/// reference lane (chosen separately, from the high 32 bits) equals the
/// lane being filled.
pub fn index_alpha(
    pass: u32,
    slice: u32,
    segment_length: u32,
    index: u32,
    j1: u32,
    same_lane: bool,
) -> u32 {
    let lane_length = segment_length * 4;

    let window = if pass == 0 {
        if slice == 0 {
            index - 1
        } else if same_lane {
            slice * segment_length + index - 1
        } else {
            slice * segment_length - if index == 0 { 1 } else { 0 }
        }
    } else if same_lane {
        lane_length - segment_length + index - 1
    } else {
        lane_length - segment_length - if index == 0 { 1 } else { 0 }
    };

    // Bias the pseudo-random offset toward the end of the window (i.e.
    // toward recently-written blocks): square j1, take its high half, use
    // that to shrink the window from the far end.
    let (w, j1) = (window as u64, j1 as u64);
    let relative = (w - 1 - ((w * (j1 * j1 >> 32)) >> 32)) as u32;

    let start = if pass == 0 {
        0
    } else if slice == 3 {
        0
    } else {
        (slice + 1) * segment_length
    };

    (start + relative) % lane_length
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_within_lane_bounds() {
        let segment_length = 8;
        let lane_length = segment_length * 4;
        for pass in 0..2 {
            for slice in 0..4u32 {
                for index in 0..segment_length {
                    // The segment filler never asks the indexer about the
                    // first two blocks of (pass 0, slice 0): those are
                    // seeded directly by the initializer.
                    if pass == 0 && slice == 0 && index < 2 {
                        continue;
                    }
                    for &j1 in &[0u32, 1, 0xffff_ffff, 0x1234_5678] {
                        for same_lane in [true, false] {
                            let r = index_alpha(pass, slice, segment_length, index, j1, same_lane);
                            assert!(r < lane_length);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn first_fillable_block_of_pass_zero_has_exactly_one_candidate() {
        // index == 2 is the first block the segment filler actually fills
        // for (pass 0, slice 0); blocks 0 and 1 are pre-seeded, so the
        // only eligible reference (excluding the immediately previous
        // block) is offset 0.
        let r = index_alpha(0, 0, 8, 2, 0, true);
        assert_eq!(r, 0);
    }
}
