//! Nested multi-dimensional iteration without writing the nested loops.
//!
//! Given an operation and an ordered list of half-open ranges, [`for_each`]
//! invokes the operation once for every point of the Cartesian product of
//! the ranges, in nested-loop (lexicographic) order. The parallel entry
//! points ([`par_for_each_1d`], [`par_for_each_2d`], [`par_for_each_3d`])
//! do the same job but split the leading one, two, or three dimensions into
//! tiles scheduled across rayon's work-stealing pool; any further trailing
//! dimensions of the 3d form are expanded sequentially inside each tile.
//!
//! Ranges are ordinary [`std::ops::Range`] values, so a malformed range
//! list — half a range, a mismatched operation arity, or mixed counter
//! types — is a type error at the call site, never a runtime failure:
//!
//! ```compile_fail
//! // Counter types must agree across dimensions.
//! nestor::for_each(|i, j| drop((i, j)), (0u32..2, 0u64..3));
//! ```
//!
//! Sequential expansion visits every point on the calling thread, first
//! range outermost:
//!
//! ```
//! let mut visited = Vec::new();
//! nestor::for_each(|i, j| visited.push((i, j)), (0u8..2, 0u8..3));
//! assert_eq!(
//!     visited,
//!     [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)],
//! );
//! ```
//!
//! Parallel expansion visits exactly the same set of points, with no
//! ordering guarantee across tiles. The operation may be invoked from
//! several workers at once, so it takes `&self` captures only (`Fn + Sync`);
//! shared accumulation goes through the caller's own synchronization:
//!
//! ```
//! use std::sync::atomic::{AtomicU64, Ordering};
//!
//! let sum = AtomicU64::new(0);
//! nestor::par_for_each_2d(
//!     |i, j| {
//!         sum.fetch_add((i * j) as u64, Ordering::Relaxed);
//!     },
//!     0u32..100,
//!     0u32..100,
//! );
//! assert_eq!(sum.load(Ordering::Relaxed), 4950 * 4950);
//! ```
//!
//! The engine holds no state of its own: nothing outlives a call, and the
//! parallel forms return only after every tile has completed.

mod block;
mod counter;
mod nest;
mod parallel;
mod pool;

pub use counter::Counter;
pub use nest::{for_each, RangeNest};
pub use parallel::{par_for_each_1d, par_for_each_2d, par_for_each_3d, TrailingRanges};
pub use pool::{PoolError, WorkerPool};
