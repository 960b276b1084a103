//! Drives the full `passes × 4 slices × lanes` fill loop with a slice
//! barrier between each slice, per the teacher's `hash_impl`/`fill_slice`
//! loop structure (there inlined into `hash_impl`; split out here so the
//! engine facade can drive the initializer and finalizer around it).

use crate::block::Matrix;
use crate::segment::{fill_segment, SLICES_PER_LANE};
use crate::variant::Variant;
use crate::workers::Workers;

/// Runs every pass of the memory-filling loop in place over `blocks`.
///
/// The first two blocks of every lane must already be seeded (pass 0,
/// slice 0's `startingIndex == 2` relies on it). `threads` is a pure
/// performance knob: the resulting contents of `blocks` do not depend on
/// it, only on `blocks.lanes()` and `passes`.
pub fn run_passes(blocks: &mut Matrix, variant: Variant, passes: u32, threads: u32) {
    let lanes = blocks.lanes();
    let mut workers = Workers::new(lanes, threads);

    for pass in 0..passes {
        for slice in 0..SLICES_PER_LANE {
            workers.dispatch(blocks, &move |blocks, lane| {
                fill_segment(blocks, variant, pass, lane, slice, passes);
            });
            // Barrier: Workers::dispatch already joins every lane's
            // worker before returning, which is what bounds the next
            // slice's cross-lane reads to fully written data.
        }
    }
}
