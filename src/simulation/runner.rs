use rand::rngs::StdRng;
use rand::Rng;

use crate::ids::{IdGenerator, UuidIdGenerator};
use crate::models::{SimulationParams, TradeRecord};
use crate::simulation::{EquityCurveBuilder, OutcomeGenerator};
use crate::Result;

/// Runs the full multi-sequence simulation
///
/// Owns its outcome generator and curve builder, so two runners never
/// share random draws or id state.
pub struct SimulationRunner<R: Rng = StdRng, I: IdGenerator = UuidIdGenerator> {
    generator: OutcomeGenerator<R>,
    builder: EquityCurveBuilder<I>,
}

impl SimulationRunner<StdRng, UuidIdGenerator> {
    /// Create a runner with a seed for reproducible draws
    pub fn new(seed: u64) -> Self {
        Self {
            generator: OutcomeGenerator::new(seed),
            builder: EquityCurveBuilder::new(),
        }
    }

    /// Create a runner seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            generator: OutcomeGenerator::from_entropy(),
            builder: EquityCurveBuilder::new(),
        }
    }
}

impl<R: Rng, I: IdGenerator> SimulationRunner<R, I> {
    /// Assemble a runner from explicit parts
    pub fn with_parts(generator: OutcomeGenerator<R>, builder: EquityCurveBuilder<I>) -> Self {
        Self { generator, builder }
    }

    /// Run `num_sequences` independent sequences of `num_trades` trades.
    ///
    /// Records come back in generation order: all of sequence 1, then
    /// all of sequence 2, and so on. Every sequence restarts its static
    /// and compound accumulation from the starting balance.
    ///
    /// Parameters are validated up front; an invalid input aborts the
    /// run before any record is produced.
    pub fn run(&mut self, params: &SimulationParams) -> Result<Vec<TradeRecord>> {
        params.validate()?;

        tracing::info!(
            "Starting simulation: {} sequences x {} trades",
            params.num_sequences,
            params.num_trades
        );

        let mut records =
            Vec::with_capacity(params.num_sequences as usize * params.num_trades as usize);

        for seq in 1..=params.num_sequences {
            let outcomes = self
                .generator
                .generate(params.win_rate, params.num_trades as usize)?;

            let curve = self.builder.build(
                seq,
                &outcomes,
                params.r_multiple,
                params.starting_balance,
                params.risk_percentage,
            );

            tracing::debug!("Sequence {} complete: {} trades", seq, curve.len());
            records.extend(curve);
        }

        Ok(records)
    }
}
