//! Parallel net-force computation
//!
//! The `n(n-1)/2` pair indices are split into contiguous blocks, one per
//! worker (see [`partition`]). Every worker owns its output: a disjoint slice
//! of the pair buffer, or a private per-body accumulator. Nothing is shared
//! mutably, so no locks or atomics are needed. Partial accumulators are
//! summed in block order once every worker has joined.
//!
//! Two strategies produce the same forces:
//! - [`Strategy::PairBuffer`]: one pass writes the signed force of every pair
//!   into a pair-indexed buffer, a second pass scatters that buffer into
//!   per-worker body accumulators.
//! - [`Strategy::Direct`]: a single pass evaluates each pair and scatters it
//!   straight into the worker's body accumulator.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use log::{debug, warn};
use rayon::prelude::*;
use serde::Deserialize;

use crate::error::{SimError, SimResult};
use crate::simulation::forces::PairForce;
use crate::simulation::pairs::{pair_count, partition, PairIter};
use crate::simulation::pool::{PoolCache, WorkerPool};
use crate::simulation::states::{Body, Vec2};

/// How pair forces are turned into per-body net forces
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[serde(rename = "pair_buffer")] // two phases: pair forces, then accumulation
    PairBuffer,

    #[default]
    #[serde(rename = "direct")] // one phase: accumulate while evaluating
    Direct,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::PairBuffer => write!(f, "pair_buffer"),
            Strategy::Direct => write!(f, "direct"),
        }
    }
}

impl FromStr for Strategy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pair_buffer" => Ok(Strategy::PairBuffer),
            "direct" => Ok(Strategy::Direct),
            other => Err(SimError::InvalidConfig(format!(
                "unknown strategy '{other}', expected 'pair_buffer' or 'direct'"
            ))),
        }
    }
}

/// Computes net forces for a body slice with a fixed strategy and a cached worker pool
#[derive(Default)]
pub struct ForceEngine {
    strategy: Strategy,
    pools: PoolCache,
}

impl ForceEngine {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            pools: PoolCache::default(),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    /// Worker pool for `threads`, shared with the integration phase.
    /// `None` means run inline on the calling thread.
    pub fn pool(&mut self, threads: usize) -> SimResult<Option<&WorkerPool>> {
        if threads == 0 {
            return Err(SimError::InvalidThreadCount(threads));
        }
        self.pools.get(threads)
    }

    /// Net force on every body, `out[i] = sum_j force(i, j)`.
    ///
    /// Blocks until all workers have finished. With `threads == 1` every pair
    /// is evaluated in order on the calling thread.
    pub fn net_forces<K>(&mut self, kernel: &K, bodies: &[Body], threads: usize) -> SimResult<Vec<Vec2>>
    where
        K: PairForce + ?Sized,
    {
        if threads == 0 {
            return Err(SimError::InvalidThreadCount(threads));
        }

        let n = bodies.len();
        let pairs = pair_count(n);
        if pairs == 0 {
            return Ok(vec![Vec2::zeros(); n]);
        }

        let blocks = partition(pairs, threads);
        if blocks.len() < threads {
            warn!("{threads} threads requested for {pairs} pairs, only {} get work", blocks.len());
        }
        debug!(
            "net forces: {n} bodies, {pairs} pairs, {} blocks, strategy {}",
            blocks.len(),
            self.strategy
        );

        let strategy = self.strategy;
        let pool = self.pools.get(threads)?;

        let partials = match strategy {
            Strategy::PairBuffer => {
                let mut pair_forces = vec![Vec2::zeros(); pairs];
                evaluate_pairs(pool, kernel, bodies, &blocks, &mut pair_forces);

                let pair_forces = &pair_forces;
                accumulate_blocks(pool, &blocks, |range| {
                    let mut acc = vec![Vec2::zeros(); n];
                    for (k, (i, j)) in range.clone().zip(PairIter::new(range, n)) {
                        let f = pair_forces[k];
                        acc[i] += f;
                        acc[j] -= f;
                    }
                    acc
                })
            }
            Strategy::Direct => accumulate_blocks(pool, &blocks, |range| {
                let mut acc = vec![Vec2::zeros(); n];
                for (i, j) in PairIter::new(range, n) {
                    let f = kernel.force(&bodies[i], &bodies[j]);
                    acc[i] += f;
                    acc[j] -= f;
                }
                acc
            }),
        };

        Ok(merge_partials(&partials, n))
    }
}

/// First phase of [`Strategy::PairBuffer`]: `out[k]` is the force of pair `k`
/// on its lower-index body. Each block writes only its own slice of `out`.
fn evaluate_pairs<K>(
    pool: Option<&WorkerPool>,
    kernel: &K,
    bodies: &[Body],
    blocks: &[Range<usize>],
    out: &mut [Vec2],
) where
    K: PairForce + ?Sized,
{
    let n = bodies.len();
    let fill = |range: Range<usize>, slice: &mut [Vec2]| {
        for (slot, (i, j)) in slice.iter_mut().zip(PairIter::new(range, n)) {
            *slot = kernel.force(&bodies[i], &bodies[j]);
        }
    };

    // carve `out` into one slice per block, same ranges the accumulation pass walks
    let mut slices = Vec::with_capacity(blocks.len());
    let mut rest = out;
    let mut offset = 0;
    for range in blocks {
        debug_assert_eq!(range.start, offset, "blocks must be contiguous from 0");
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(range.len());
        slices.push((range.clone(), head));
        rest = tail;
        offset = range.end;
    }
    debug_assert!(rest.is_empty(), "blocks must cover every pair");

    match pool {
        None => {
            for (range, slice) in slices {
                fill(range, slice);
            }
        }
        Some(pool) => {
            pool.join(|| {
                slices
                    .into_par_iter()
                    .for_each(|(range, slice)| fill(range, slice));
            });
        }
    }
}

/// Run `per_block` once per block, each producing a private accumulator.
/// The result keeps block order.
fn accumulate_blocks<F>(pool: Option<&WorkerPool>, blocks: &[Range<usize>], per_block: F) -> Vec<Vec<Vec2>>
where
    F: Fn(Range<usize>) -> Vec<Vec2> + Sync,
{
    match pool {
        None => blocks.iter().cloned().map(&per_block).collect(),
        Some(pool) => pool.join(|| blocks.par_iter().cloned().map(&per_block).collect()),
    }
}

/// Element-wise sum of per-worker accumulators, in slice order
pub fn merge_partials(partials: &[Vec<Vec2>], n: usize) -> Vec<Vec2> {
    let mut total = vec![Vec2::zeros(); n];
    for partial in partials {
        debug_assert_eq!(partial.len(), n);
        for (t, p) in total.iter_mut().zip(partial) {
            *t += p;
        }
    }
    total
}

/// Plain double loop over `i < j`; the reference the parallel paths must match
pub fn serial_net_forces<K>(kernel: &K, bodies: &[Body]) -> Vec<Vec2>
where
    K: PairForce + ?Sized,
{
    let n = bodies.len();
    let mut out = vec![Vec2::zeros(); n];
    for i in 0..n {
        for j in (i + 1)..n {
            let f = kernel.force(&bodies[i], &bodies[j]);
            out[i] += f;
            out[j] -= f;
        }
    }
    out
}
