//! Parallel loop expansion over a work-stealing fork-join pool.
//!
//! The leading one, two, or three dimensions are handed to rayon as a
//! splittable index block; each worker iterates its assigned tile
//! sequentially in lexicographic order. Dimensions past the third are never
//! parallelized: they are expanded inside each tile through the sequential
//! recursion in [`crate::nest`]. Tiles may run concurrently and in any
//! order, and the calling thread blocks until every tile has completed.

use std::ops::Range;

use rayon::iter::ParallelIterator;
use tracing::trace;

use crate::block::{Block, Block2, Block3};
use crate::counter::Counter;
use crate::nest::{dim, RangeNest};

/// Invoke `op` once for every counter in `r0`, with tiles of the range
/// dispatched across the worker pool.
///
/// The set of visited counters is exactly that of the sequential form; no
/// ordering is guaranteed across tiles. `op` may be invoked from several
/// workers at once, which the `Fn + Sync` bound makes safe by construction.
pub fn par_for_each_1d<I, F>(op: F, r0: Range<I>)
where
    I: Counter,
    F: Fn(I) + Sync,
{
    let block = Block::new(r0);
    trace!(points = block.points(), "dispatching 1d parallel loop");
    rayon::iter::split(block, Block::split).for_each(|tile| {
        let mut i = tile.axis.start;
        while i < tile.axis.end {
            op(i);
            i = i.successor();
        }
    });
}

/// Invoke `op` once for every point of `r0 × r1`, with rectangular tiles of
/// the index plane dispatched across the worker pool.
pub fn par_for_each_2d<I, F>(op: F, r0: Range<I>, r1: Range<I>)
where
    I: Counter,
    F: Fn(I, I) + Sync,
{
    let block = Block2::new(r0, r1);
    trace!(points = block.points(), "dispatching 2d parallel loop");
    rayon::iter::split(block, Block2::split).for_each(|tile| {
        let mut i = tile.rows.start;
        while i < tile.rows.end {
            let mut j = tile.cols.start;
            while j < tile.cols.end {
                op(i, j);
                j = j.successor();
            }
            i = i.successor();
        }
    });
}

/// Trailing ranges of a three-dimensional parallel loop.
///
/// The unit impl invokes the operation with the three tile-local indices
/// directly; tuple impls (one through nine trailing ranges) expand the tail
/// sequentially inside the tile, binding the tile-local indices as the
/// leading arguments.
pub trait TrailingRanges<I: Counter, F>: Clone + Send + Sync {
    /// Enumerate the trailing dimensions for one resolved leading tuple.
    fn expand(self, i: I, j: I, k: I, op: &F);
}

impl<I: Counter, F: Fn(I, I, I) + Sync> TrailingRanges<I, F> for () {
    #[inline]
    fn expand(self, i: I, j: I, k: I, op: &F) {
        op(i, j, k)
    }
}

macro_rules! impl_trailing_ranges {
    ($($r:ident),+) => {
        impl<I: Counter, F: Fn(I, I, I, $(dim!($r => I)),+) + Sync> TrailingRanges<I, F>
            for ($(dim!($r => Range<I>),)+)
        {
            fn expand(self, i: I, j: I, k: I, op: &F) {
                self.nest(&mut |$($r),+| op(i, j, k, $($r),+))
            }
        }
    };
}

impl_trailing_ranges!(r3);
impl_trailing_ranges!(r3, r4);
impl_trailing_ranges!(r3, r4, r5);
impl_trailing_ranges!(r3, r4, r5, r6);
impl_trailing_ranges!(r3, r4, r5, r6, r7);
impl_trailing_ranges!(r3, r4, r5, r6, r7, r8);
impl_trailing_ranges!(r3, r4, r5, r6, r7, r8, r9);
impl_trailing_ranges!(r3, r4, r5, r6, r7, r8, r9, r10);
impl_trailing_ranges!(r3, r4, r5, r6, r7, r8, r9, r10, r11);

/// Invoke `op` once for every point of `r0 × r1 × r2 × tail`, with the three
/// leading dimensions tiled across the worker pool.
///
/// `tail` is a tuple of zero to nine further ranges (`()` for none); the
/// operation takes three arguments plus one per trailing range. Trailing
/// dimensions are enumerated sequentially, in lexicographic order, inside
/// every tile — only the leading three are ever parallelized.
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let visits = AtomicUsize::new(0);
/// nestor::par_for_each_3d(
///     |_i, _j, _k, _l| {
///         visits.fetch_add(1, Ordering::Relaxed);
///     },
///     0u32..4,
///     0u32..3,
///     0u32..2,
///     (0u32..5,),
/// );
/// assert_eq!(visits.load(Ordering::Relaxed), 4 * 3 * 2 * 5);
/// ```
pub fn par_for_each_3d<I, F, T>(op: F, r0: Range<I>, r1: Range<I>, r2: Range<I>, tail: T)
where
    I: Counter,
    F: Sync,
    T: TrailingRanges<I, F>,
{
    let block = Block3::new(r0, r1, r2);
    trace!(points = block.points(), "dispatching 3d parallel loop");
    rayon::iter::split(block, Block3::split).for_each(|tile| {
        let mut i = tile.pages.start;
        while i < tile.pages.end {
            let mut j = tile.rows.start;
            while j < tile.rows.end {
                let mut k = tile.cols.start;
                while k < tile.cols.end {
                    tail.clone().expand(i, j, k, &op);
                    k = k.successor();
                }
                j = j.successor();
            }
            i = i.successor();
        }
    });
}
