pub mod states;
pub mod params;
pub mod pairs;
pub mod forces;
pub mod pool;
pub mod engine;
pub mod integrator;
pub mod galaxy;
pub mod diagnostics;
pub mod generator;
pub mod scenario;
