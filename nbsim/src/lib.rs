pub mod error;
pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use error::{SimError, SimResult};

pub use simulation::states::{Body, Appearance, Vec2};
pub use simulation::params::Constants;
pub use simulation::pairs::{pair_count, index_to_pair, pair_to_index, partition, PairIter};
pub use simulation::forces::{PairForce, NewtonianGravity};
pub use simulation::engine::{ForceEngine, Strategy, merge_partials, serial_net_forces};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::galaxy::Galaxy;
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, ParametersConfig, BodyConfig, GeneratorConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_threads, to_csv, BenchRecord};
