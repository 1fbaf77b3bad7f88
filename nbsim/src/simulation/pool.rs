//! Reusable worker pool for the fork-join phases of a step
//!
//! Wraps a rayon `ThreadPool` with a fixed thread count. The pool lives across
//! steps and is rebuilt only when a caller asks for a different count.

use log::debug;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::SimResult;

pub struct WorkerPool {
    threads: usize,
    pool: ThreadPool,
}

impl WorkerPool {
    pub fn new(threads: usize) -> SimResult<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("nbsim-worker-{i}"))
            .build()?;
        debug!("started worker pool with {threads} threads");
        Ok(Self { threads, pool })
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Run `op` inside the pool and block until it and everything it spawned
    /// has finished. Returning from here is the phase barrier.
    pub fn join<R, F>(&self, op: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(op)
    }
}

/// Holds at most one pool and swaps it out when the thread count changes
#[derive(Default)]
pub struct PoolCache {
    current: Option<WorkerPool>,
}

impl PoolCache {
    /// Pool for `threads` workers, or `None` when the work should run inline
    pub fn get(&mut self, threads: usize) -> SimResult<Option<&WorkerPool>> {
        if threads <= 1 {
            return Ok(None);
        }
        let stale = self.current.as_ref().map_or(true, |p| p.threads() != threads);
        if stale {
            self.current = Some(WorkerPool::new(threads)?);
        }
        Ok(self.current.as_ref())
    }
}
