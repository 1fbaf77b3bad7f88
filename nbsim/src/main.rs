use nbsim::simulation::diagnostics::{angular_momentum, total_energy, total_momentum};
use nbsim::{bench_threads, to_csv, Scenario, ScenarioConfig, Strategy};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(about = "Multithreaded 2D N-body gravity simulation")]
struct Args {
    /// Scenario YAML, looked up in `scenarios/` unless it is an existing path.
    /// Without it the built-in solar system runs.
    #[arg(short, long)]
    file_name: Option<String>,

    /// Override the scenario's worker thread count
    #[arg(long)]
    threads: Option<usize>,

    /// Override the scenario's step count
    #[arg(long)]
    steps: Option<u64>,

    /// Override the force strategy: pair_buffer or direct
    #[arg(long)]
    strategy: Option<Strategy>,

    /// Run the thread-scaling benchmark and print CSV instead of a scenario
    #[arg(long)]
    bench: bool,

    #[arg(long, value_delimiter = ',', default_values_t = vec![100, 500, 1000, 2000])]
    bench_bodies: Vec<usize>,

    #[arg(long, value_delimiter = ',', default_values_t = vec![1, 2, 4, 8])]
    bench_threads: Vec<usize>,

    #[arg(long, default_value_t = 10)]
    bench_steps: u64,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let direct = Path::new(file_name);
    if direct.exists() {
        return direct.to_path_buf();
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<Scenario> {
    let mut scenario = match &args.file_name {
        Some(file_name) => {
            let path = scenario_path(file_name);
            let cfg = ScenarioConfig::from_path(&path)
                .with_context(|| format!("failed to load scenario {}", path.display()))?;
            Scenario::build_scenario(cfg).context("invalid scenario")?
        }
        None => Scenario::solar_system().context("invalid built-in scenario")?,
    };

    if let Some(threads) = args.threads {
        anyhow::ensure!(threads >= 1, "--threads must be at least 1");
        scenario.threads = threads;
    }
    if let Some(steps) = args.steps {
        scenario.steps = steps;
    }
    if let Some(strategy) = args.strategy {
        scenario.galaxy.set_strategy(strategy);
    }

    Ok(scenario)
}

fn run(mut scenario: Scenario) -> Result<()> {
    let constants = scenario.constants;
    let e0 = total_energy(scenario.galaxy.bodies(), &constants);
    let l0 = angular_momentum(scenario.galaxy.bodies());

    for step in 1..=scenario.steps {
        scenario.galaxy.simulate(scenario.timestep, scenario.threads)?;

        if scenario.report_every > 0 && step % scenario.report_every == 0 {
            let bodies = scenario.galaxy.bodies();
            let e = total_energy(bodies, &constants);
            let drift = if e0 != 0.0 { (e - e0) / e0.abs() } else { e - e0 };
            info!(
                "step {step}/{}: t = {:.4e}, rel. energy drift = {drift:.3e}, dL = {:.3e}, |p| = {:.3e}",
                scenario.steps,
                scenario.galaxy.time(),
                angular_momentum(bodies) - l0,
                total_momentum(bodies).norm(),
            );
        }
    }

    println!("{:>4} {:>12} {:>14} {:>14} {:>12} {:>12}", "#", "mass", "x", "y", "vx", "vy");
    for (i, b) in scenario.galaxy.into_bodies().iter().enumerate() {
        println!(
            "{:>4} {:>12.4e} {:>14.6e} {:>14.6e} {:>12.4e} {:>12.4e}",
            i, b.mass, b.position.x, b.position.y, b.velocity.x, b.velocity.y
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        let strategy = args.strategy.unwrap_or_default();
        let records = bench_threads(&args.bench_bodies, &args.bench_threads, args.bench_steps, 1.0, strategy)?;
        print!("{}", to_csv(&records));
        return Ok(());
    }

    let scenario = load_scenario(&args)?;
    run(scenario)
}
