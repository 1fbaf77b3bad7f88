use std::time::Instant;

use log::info;

use crate::configuration::config::GeneratorConfig;
use crate::error::SimResult;
use crate::simulation::engine::Strategy;
use crate::simulation::galaxy::Galaxy;
use crate::simulation::generator::random_bodies;

/// One timing sample: wall time of `steps` calls to `simulate`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchRecord {
    pub bodies: usize,
    pub threads: usize,
    pub time_sec: f64,
}

/// Deterministic disk of `n` bodies, same seed for every run
fn bench_bodies(n: usize) -> GeneratorConfig {
    GeneratorConfig {
        count: n,
        seed: 42,
        mass: [1.0e22, 1.0e25],
        radius: [1.0e9, 1.0e11],
        speed: [0.0, 3.0e4],
    }
}

/// Time `steps` simulation steps for every (body count, thread count) combination.
/// Each combination starts from the same generated bodies; one warm-up step
/// (which also builds the worker pool) is excluded from the timing.
pub fn bench_threads(
    body_counts: &[usize],
    thread_counts: &[usize],
    steps: u64,
    timestep: f64,
    strategy: Strategy,
) -> SimResult<Vec<BenchRecord>> {
    let mut records = Vec::with_capacity(body_counts.len() * thread_counts.len());

    for &n in body_counts {
        let template = random_bodies(&bench_bodies(n))?;

        for &threads in thread_counts {
            let mut galaxy = Galaxy::new(template.clone(), strategy)?;

            // Warm-up
            galaxy.simulate(timestep, threads)?;

            let t0 = Instant::now();
            for _ in 0..steps {
                galaxy.simulate(timestep, threads)?;
            }
            let time_sec = t0.elapsed().as_secs_f64();

            info!("bench: {n} bodies, {threads} threads, {strategy}: {time_sec:.6} s");
            records.push(BenchRecord {
                bodies: n,
                threads,
                time_sec,
            });
        }
    }

    Ok(records)
}

/// CSV in the `bodies,threads,time_sec` layout the plotting script reads
pub fn to_csv(records: &[BenchRecord]) -> String {
    let mut out = String::from("bodies,threads,time_sec\n");
    for r in records {
        out.push_str(&format!("{},{},{:.6}\n", r.bodies, r.threads, r.time_sec));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_one_record_per_combination() {
        let records = bench_threads(&[8, 16], &[1, 2], 1, 1.0, Strategy::Direct).unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!((records[3].bodies, records[3].threads), (16, 2));

        let csv = to_csv(&records);
        assert!(csv.starts_with("bodies,threads,time_sec\n"));
        assert_eq!(csv.lines().count(), 5);
    }
}
