//! Confinement of the parallel expanders to a dedicated worker pool.
//!
//! The expanders run on rayon's global pool unless told otherwise. A
//! [`WorkerPool`] scopes them to its own threads instead, which keeps a
//! heavily loaded loop from competing with the rest of the process for the
//! global pool.

use thiserror::Error;

/// Failure to construct a [`WorkerPool`].
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("failed to build worker pool: {0}")]
    Build(#[from] rayon::ThreadPoolBuildError),
}

/// A dedicated fork-join pool for the parallel expanders.
pub struct WorkerPool {
    pool: rayon::ThreadPool,
}

impl WorkerPool {
    /// Build a pool with `num_threads` workers. Zero means the runtime's
    /// default, one worker per available core.
    pub fn new(num_threads: usize) -> Result<Self, PoolError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()?;
        Ok(Self { pool })
    }

    /// Number of worker threads in this pool.
    pub fn current_num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Run `f` with tile scheduling confined to this pool.
    ///
    /// Parallel loops issued inside `f` draw workers from this pool; the
    /// call returns once `f` and all of its tiles have completed.
    pub fn install<R: Send>(&self, f: impl FnOnce() -> R + Send) -> R {
        self.pool.install(f)
    }
}
