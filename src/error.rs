use thiserror::Error;

/// Errors surfaced by the simulation core
#[derive(Debug, Error)]
pub enum SimulationError {
    /// A numeric input fell outside its valid domain
    #[error("invalid parameter `{name}`: {detail}")]
    InvalidParameter { name: &'static str, detail: String },
}

impl SimulationError {
    pub(crate) fn invalid(name: &'static str, detail: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            detail: detail.into(),
        }
    }
}
