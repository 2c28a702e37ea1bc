//! Sequential recursive loop expansion.
//!
//! An ordered list of half-open ranges becomes that many nested loops: each
//! expansion level iterates its first range and, per counter value, binds
//! that value as the leading argument of the operation before recursing over
//! the trailing ranges. The recursion bottoms out at one range, where the
//! operation is invoked with the full index tuple.

use std::ops::Range;

use crate::counter::Counter;

/// An ordered list of loop ranges that can be expanded into nested loops
/// around an operation.
///
/// Implemented for tuples of [`Range`] up to twelve dimensions, and for a
/// bare [`Range`] as the one-dimensional shorthand. The operation's arity
/// must match the tuple's; a mismatch is a type error at the call site.
pub trait RangeNest<I: Counter, F> {
    /// Expand into nested loops, invoking `op` once per point of the
    /// Cartesian product, in lexicographic order.
    fn nest(self, op: &mut F);
}

impl<I: Counter, F: FnMut(I)> RangeNest<I, F> for Range<I> {
    fn nest(self, op: &mut F) {
        (self,).nest(op)
    }
}

// Substitutes a type for a matched identifier, so the impls below can repeat
// `I` once per trailing dimension.
macro_rules! dim {
    ($r:ident => $t:ty) => {
        $t
    };
}

pub(crate) use dim;

macro_rules! impl_range_nest {
    ($r0:ident) => {
        impl<I: Counter, F: FnMut(I)> RangeNest<I, F> for (Range<I>,) {
            fn nest(self, op: &mut F) {
                let ($r0,) = self;
                let mut i = $r0.start;
                while i < $r0.end {
                    op(i);
                    i = i.successor();
                }
            }
        }
    };
    ($r0:ident, $($rest:ident),+) => {
        impl<I: Counter, F: FnMut(I, $(dim!($rest => I)),+)> RangeNest<I, F>
            for (Range<I>, $(dim!($rest => Range<I>)),+)
        {
            fn nest(self, op: &mut F) {
                let ($r0, $($rest),+) = self;
                let mut i = $r0.start;
                while i < $r0.end {
                    // Bind the leading index, then expand the trailing
                    // ranges with the partially-applied operation.
                    ($($rest.clone(),)+).nest(&mut |$($rest),+| op(i, $($rest),+));
                    i = i.successor();
                }
            }
        }
    };
}

impl_range_nest!(r0);
impl_range_nest!(r0, r1);
impl_range_nest!(r0, r1, r2);
impl_range_nest!(r0, r1, r2, r3);
impl_range_nest!(r0, r1, r2, r3, r4);
impl_range_nest!(r0, r1, r2, r3, r4, r5);
impl_range_nest!(r0, r1, r2, r3, r4, r5, r6);
impl_range_nest!(r0, r1, r2, r3, r4, r5, r6, r7);
impl_range_nest!(r0, r1, r2, r3, r4, r5, r6, r7, r8);
impl_range_nest!(r0, r1, r2, r3, r4, r5, r6, r7, r8, r9);
impl_range_nest!(r0, r1, r2, r3, r4, r5, r6, r7, r8, r9, r10);
impl_range_nest!(r0, r1, r2, r3, r4, r5, r6, r7, r8, r9, r10, r11);

/// Invoke `op` once for every point of the Cartesian product of `ranges`,
/// sequentially on the calling thread.
///
/// Order is strictly lexicographic: the first range varies slowest
/// (outermost loop), the last varies fastest. An empty range anywhere in the
/// list yields zero invocations.
///
/// ```
/// let mut sum = 0u32;
/// nestor::for_each(|i, j| sum += i * j, (0u32..3, 0u32..4));
/// assert_eq!(sum, 18);
/// ```
///
/// A bare counter where a range belongs is rejected before anything runs:
///
/// ```compile_fail
/// nestor::for_each(|i: u32, _j: u32| drop(i), (0u32..2, 3u32));
/// ```
///
/// So is an operation whose arity disagrees with the range list:
///
/// ```compile_fail
/// nestor::for_each(|i: u32| drop(i), (0u32..2, 0u32..3));
/// ```
pub fn for_each<I, T, F>(mut op: F, ranges: T)
where
    I: Counter,
    T: RangeNest<I, F>,
{
    ranges.nest(&mut op)
}
