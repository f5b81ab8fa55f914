// Equity curve simulation engine
pub mod curve;
pub mod outcomes;
pub mod runner;

pub use curve::EquityCurveBuilder;
pub use outcomes::OutcomeGenerator;
pub use runner::SimulationRunner;
