// Core modules
pub mod error;
pub mod ids;
pub mod models;
pub mod simulation;

// Re-export commonly used types
pub use error::SimulationError;
pub use models::*;
pub use simulation::{EquityCurveBuilder, OutcomeGenerator, SimulationRunner};

// Error handling
pub type Result<T> = std::result::Result<T, SimulationError>;
