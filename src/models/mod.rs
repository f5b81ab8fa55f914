use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::Result;

/// Outcome of a single simulated trade
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TradeOutcome {
    Win,
    Loss,
}

/// One simulated trade with its PnL and balance under both risk models
///
/// Static fields carry full precision; compound fields are rounded to
/// cents when they are computed. Records are never mutated after they
/// are built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    /// Globally unique opaque id
    pub item_id: String,
    /// 1-based sequence number this trade belongs to
    pub sequence: u32,
    /// 1-based position within the sequence
    pub trade: u32,
    pub result: TradeOutcome,
    pub static_pnl: f64,
    pub static_balance: f64,
    pub compound_pnl: f64,
    pub compound_balance: f64,
}

/// Input parameters for a simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Number of independent sequences to generate
    pub num_sequences: u32,
    /// Number of trades per sequence
    pub num_trades: u32,
    /// Win rate percentage (0-100)
    pub win_rate: f64,
    /// Payoff multiple applied to the risk amount on winning trades
    pub r_multiple: f64,
    /// Starting account balance for every sequence
    pub starting_balance: f64,
    /// Percentage of balance risked per trade (0-100)
    pub risk_percentage: f64,
}

impl SimulationParams {
    /// Check counts and percentages against their valid domains.
    ///
    /// Runs before any record is produced, so a failing call yields no
    /// partial output. Other numeric pathologies (NaN balance, infinite
    /// R multiple) are not caught here and flow through the arithmetic.
    pub fn validate(&self) -> Result<()> {
        if self.num_sequences == 0 {
            return Err(SimulationError::invalid(
                "num_sequences",
                "must be at least 1",
            ));
        }
        if !(0.0..=100.0).contains(&self.win_rate) {
            return Err(SimulationError::invalid(
                "win_rate",
                format!("{} is outside 0-100", self.win_rate),
            ));
        }
        if !(0.0..=100.0).contains(&self.risk_percentage) {
            return Err(SimulationError::invalid(
                "risk_percentage",
                format!("{} is outside 0-100", self.risk_percentage),
            ));
        }
        Ok(())
    }
}
