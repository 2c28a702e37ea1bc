//! Tests for parallel expansion: set coverage, trailing-dimension
//! recursion, and the join barrier. No test assumes any cross-tile order.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use nestor::{par_for_each_1d, par_for_each_2d, par_for_each_3d};

// ========== 1D Tests ==========

#[test]
fn test_1d_visits_each_counter_once() {
    let visited = Mutex::new(Vec::new());
    par_for_each_1d(|i| visited.lock().unwrap().push(i), 5u32..8);
    let mut visited = visited.into_inner().unwrap();
    visited.sort_unstable();
    assert_eq!(visited, vec![5, 6, 7]);
}

#[test]
fn test_1d_large_range_sums_exactly() {
    let sum = AtomicUsize::new(0);
    par_for_each_1d(
        |i: usize| {
            sum.fetch_add(i, Ordering::Relaxed);
        },
        0..10_000,
    );
    assert_eq!(sum.load(Ordering::Relaxed), 10_000 * 9_999 / 2);
}

// ========== 2D Tests ==========

#[test]
fn test_2d_set_matches_sequential() {
    let visited = Mutex::new(HashSet::new());
    par_for_each_2d(
        |i, j| assert!(visited.lock().unwrap().insert((i, j))),
        0u32..2,
        0u32..3,
    );
    let expected: HashSet<_> = [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        .into_iter()
        .collect();
    assert_eq!(visited.into_inner().unwrap(), expected);
}

#[test]
fn test_2d_uneven_extents_full_coverage() {
    let count = AtomicUsize::new(0);
    par_for_each_2d(
        |_i, _j| {
            count.fetch_add(1, Ordering::Relaxed);
        },
        0u64..127,
        0u64..3,
    );
    assert_eq!(count.load(Ordering::Relaxed), 127 * 3);
}

// ========== 3D Tests ==========

#[test]
fn test_3d_no_tail_coverage() {
    let count = AtomicUsize::new(0);
    par_for_each_3d(
        |_i, _j, _k| {
            count.fetch_add(1, Ordering::Relaxed);
        },
        0u64..7,
        0u64..5,
        0u64..3,
        (),
    );
    assert_eq!(count.load(Ordering::Relaxed), 7 * 5 * 3);
}

#[test]
fn test_3d_trailing_dimension_expanded_in_every_tile() {
    let visited = Mutex::new(HashSet::new());
    par_for_each_3d(
        |i, j, k, l| assert!(visited.lock().unwrap().insert((i, j, k, l))),
        0u32..4,
        0u32..3,
        0u32..2,
        (0u32..5,),
    );
    assert_eq!(visited.into_inner().unwrap().len(), 4 * 3 * 2 * 5);
}

#[test]
fn test_3d_two_trailing_dimensions() {
    let count = AtomicUsize::new(0);
    par_for_each_3d(
        |_i, _j, _k, _l, _m| {
            count.fetch_add(1, Ordering::Relaxed);
        },
        0u32..3,
        0u32..4,
        0u32..5,
        (0u32..2, 0u32..3),
    );
    assert_eq!(count.load(Ordering::Relaxed), 3 * 4 * 5 * 2 * 3);
}

// ========== Empty Range Tests ==========

#[test]
fn test_2d_empty_leading_range() {
    par_for_each_2d(
        |_i, _j| panic!("expanded an empty range"),
        0u32..0,
        0u32..10,
    );
}

#[test]
fn test_3d_empty_trailing_range() {
    par_for_each_3d(
        |_i, _j, _k, _l| panic!("expanded an empty range"),
        0u32..3,
        0u32..3,
        0u32..3,
        (7u32..7,),
    );
}

// ========== Join Barrier Tests ==========

#[test]
fn test_all_writes_visible_after_return() {
    let grid: Vec<AtomicUsize> = (0..64).map(|_| AtomicUsize::new(0)).collect();
    par_for_each_2d(
        |i: usize, j: usize| {
            grid[i * 8 + j].store(i * 8 + j + 1, Ordering::Relaxed);
        },
        0..8,
        0..8,
    );
    // The call blocks at the join barrier, so every tile's writes are
    // visible here.
    for (idx, cell) in grid.iter().enumerate() {
        assert_eq!(cell.load(Ordering::Relaxed), idx + 1);
    }
}
