//! Tests for worker-pool scoping.

use std::collections::HashSet;
use std::sync::Mutex;

use nestor::{par_for_each_2d, WorkerPool};

#[test]
fn test_pool_reports_thread_count() {
    let pool = WorkerPool::new(2).unwrap();
    assert_eq!(pool.current_num_threads(), 2);
}

#[test]
fn test_zero_threads_means_runtime_default() {
    let pool = WorkerPool::new(0).unwrap();
    assert!(pool.current_num_threads() >= 1);
}

#[test]
fn test_loops_run_to_completion_inside_pool() {
    let pool = WorkerPool::new(2).unwrap();
    let visited = Mutex::new(HashSet::new());
    let total = pool.install(|| {
        par_for_each_2d(
            |i, j| {
                visited.lock().unwrap().insert((i, j));
            },
            0u32..8,
            0u32..8,
        );
        visited.lock().unwrap().len()
    });
    assert_eq!(total, 64);
}

#[test]
fn test_single_thread_pool_still_covers_everything() {
    let pool = WorkerPool::new(1).unwrap();
    let visited = Mutex::new(Vec::new());
    pool.install(|| {
        par_for_each_2d(
            |i, j| visited.lock().unwrap().push((i, j)),
            0u8..3,
            0u8..3,
        );
    });
    let mut visited = visited.into_inner().unwrap();
    visited.sort_unstable();
    let expected: Vec<_> = (0u8..3)
        .flat_map(|i| (0u8..3).map(move |j| (i, j)))
        .collect();
    assert_eq!(visited, expected);
}
