use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SimulationError;
use crate::models::TradeOutcome;
use crate::Result;

/// Generates randomized win/loss sequences
pub struct OutcomeGenerator<R: Rng = StdRng> {
    rng: R,
}

impl OutcomeGenerator<StdRng> {
    /// Create a generator with a seed for reproducibility
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl<R: Rng> OutcomeGenerator<R> {
    /// Create a generator over a caller-supplied random source
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a randomized sequence of wins and losses
    ///
    /// # Arguments
    /// * `win_probability` - probability of any one trade being a win, as a percentage (0-100)
    /// * `length` - number of trades in the sequence
    ///
    /// # Returns
    /// Vec of outcomes, one per trade. Empty for `length == 0`.
    pub fn generate(&mut self, win_probability: f64, length: usize) -> Result<Vec<TradeOutcome>> {
        if !(0.0..=100.0).contains(&win_probability) {
            return Err(SimulationError::invalid(
                "win_probability",
                format!("{} is outside 0-100", win_probability),
            ));
        }

        let threshold = win_probability / 100.0;
        let mut sequence = Vec::with_capacity(length);

        // One independent draw per position, even at 0 or 100 percent
        for _ in 0..length {
            let draw: f64 = self.rng.gen();
            let outcome = if draw <= threshold {
                TradeOutcome::Win
            } else {
                TradeOutcome::Loss
            };
            sequence.push(outcome);
        }

        Ok(sequence)
    }
}
