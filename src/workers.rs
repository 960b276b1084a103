//! Per-slice dispatch of [`segment::fill_segment`](crate::segment::fill_segment)
//! across lanes.
//!
//! Ported from the teacher's `workers` module: a `scoped_threadpool::Pool`
//! behind the `threaded` feature, a sequential fallback without it. The
//! teacher always sized its pool to `lanes`; this one sizes it to
//! `min(threads, lanes)`, since `threads` is a caller-tunable performance
//! knob that must never change the resulting tag (only `lanes` does).

use crate::block::Matrix;

#[cfg(feature = "threaded")]
pub use self::threadpool::Workers;

#[cfg(feature = "threaded")]
mod threadpool {
    use super::Matrix;

    /// Dispatches one closure per lane, run on a bounded worker pool.
    pub struct Workers(u32, Option<scoped_threadpool::Pool>);

    impl Workers {
        /// `threads` is clamped to `[1, lanes]`: the pool never grows
        /// past one worker per lane, since a slice only ever has `lanes`
        /// independent tasks to run.
        pub fn new(lanes: u32, threads: u32) -> Workers {
            let workers = threads.max(1).min(lanes);
            match workers {
                1 => Workers(lanes, None),
                n => Workers(lanes, Some(scoped_threadpool::Pool::new(n))),
            }
        }

        /// Runs `fill_lane(blocks, lane)` once for every `lane` in
        /// `0..lanes`, waiting for all of them before returning.
        pub fn dispatch<F>(&mut self, blocks: &mut Matrix, fill_lane: &F)
        where
            F: Fn(&mut Matrix, u32) + Sync,
        {
            match self {
                Workers(lanes, None) => {
                    for lane in 0..*lanes {
                        fill_lane(blocks, lane);
                    }
                }
                Workers(lanes, Some(pool)) => {
                    let lanes = *lanes;
                    pool.scoped(|scope| {
                        for lane in 0..lanes {
                            // Safety: distinct lanes never share a block
                            // within one slice, and the caller only moves
                            // on to the next slice after this scope joins
                            // every worker.
                            let matrix = unsafe { blocks.mut_ref() };
                            scope.execute(move || fill_lane(matrix, lane));
                        }
                    });
                }
            }
        }
    }
}

#[cfg(not(feature = "threaded"))]
pub use self::sequential::Workers;

#[cfg(not(feature = "threaded"))]
mod sequential {
    use super::Matrix;

    /// Sequential fallback: runs every lane on the calling thread.
    pub struct Workers(u32);

    impl Workers {
        pub fn new(lanes: u32, _threads: u32) -> Workers {
            Workers(lanes)
        }

        pub fn dispatch<F>(&mut self, blocks: &mut Matrix, fill_lane: &F)
        where
            F: Fn(&mut Matrix, u32) + Sync,
        {
            for lane in 0..self.0 {
                fill_lane(blocks, lane);
            }
        }
    }
}
