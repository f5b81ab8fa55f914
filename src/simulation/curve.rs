use crate::ids::{IdGenerator, UuidIdGenerator};
use crate::models::{TradeOutcome, TradeRecord};

/// Round to 2 decimal places
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Converts a win/loss sequence into per-trade PnL and balances
///
/// Two sizing policies run side by side over the same outcomes:
/// static sizing risks a fixed slice of the starting balance on every
/// trade, compound sizing risks a slice of the latest compound balance.
/// Compound figures are rounded to cents as they are computed; static
/// figures are left unrounded.
pub struct EquityCurveBuilder<I: IdGenerator = UuidIdGenerator> {
    ids: I,
}

impl EquityCurveBuilder<UuidIdGenerator> {
    pub fn new() -> Self {
        Self {
            ids: UuidIdGenerator,
        }
    }
}

impl Default for EquityCurveBuilder<UuidIdGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdGenerator> EquityCurveBuilder<I> {
    /// Create a builder over a caller-supplied id source
    pub fn with_ids(ids: I) -> Self {
        Self { ids }
    }

    /// Build trade records for one outcome sequence.
    ///
    /// # Arguments
    /// * `sequence` - 1-based sequence number stamped into every record
    /// * `outcomes` - ordered win/loss outcomes, one per trade
    /// * `r_multiple` - payoff multiple applied to the risk amount on wins
    /// * `starting_balance` - account balance before the first trade
    /// * `risk_percentage` - percentage of balance risked per trade (0-100)
    ///
    /// # Returns
    /// One record per outcome, `trade` numbered from 1.
    ///
    /// Inputs are not range-checked here; callers validate. NaN or
    /// infinite inputs propagate into the computed fields.
    pub fn build(
        &mut self,
        sequence: u32,
        outcomes: &[TradeOutcome],
        r_multiple: f64,
        starting_balance: f64,
        risk_percentage: f64,
    ) -> Vec<TradeRecord> {
        // Static risk is fixed for the whole sequence
        let static_risk = starting_balance * risk_percentage / 100.0;

        let mut records = Vec::with_capacity(outcomes.len());
        let mut static_balance = starting_balance;
        let mut compound_balance = starting_balance;

        for (i, outcome) in outcomes.iter().enumerate() {
            let static_pnl = match outcome {
                TradeOutcome::Loss => -static_risk,
                TradeOutcome::Win => static_risk * r_multiple,
            };
            static_balance += static_pnl;

            // First trade risks the same amount as static sizing; after
            // that the risk tracks the previous compound balance
            let compound_risk = if i == 0 {
                static_risk
            } else {
                compound_balance * risk_percentage / 100.0
            };
            let compound_pnl = round_cents(match outcome {
                TradeOutcome::Loss => -compound_risk,
                TradeOutcome::Win => compound_risk * r_multiple,
            });
            compound_balance = round_cents(compound_balance + compound_pnl);

            records.push(TradeRecord {
                item_id: self.ids.next_id(),
                sequence,
                trade: (i + 1) as u32,
                result: *outcome,
                static_pnl,
                static_balance,
                compound_pnl,
                compound_balance,
            });
        }

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIdGenerator;
    use TradeOutcome::{Loss, Win};

    fn build_with_sequential_ids(
        outcomes: &[TradeOutcome],
        r_multiple: f64,
        starting_balance: f64,
        risk_percentage: f64,
    ) -> Vec<TradeRecord> {
        let mut builder = EquityCurveBuilder::with_ids(SequentialIdGenerator::default());
        builder.build(1, outcomes, r_multiple, starting_balance, risk_percentage)
    }

    #[test]
    fn test_all_wins_scenario() {
        // 3 wins, R=2, balance 1000, risk 10%
        let records = build_with_sequential_ids(&[Win, Win, Win], 2.0, 1000.0, 10.0);

        assert_eq!(records.len(), 3);

        // Static: fixed $100 risk, $200 per win
        assert_eq!(records[0].static_pnl, 200.0);
        assert_eq!(records[0].static_balance, 1200.0);
        assert_eq!(records[1].static_pnl, 200.0);
        assert_eq!(records[1].static_balance, 1400.0);
        assert_eq!(records[2].static_pnl, 200.0);
        assert_eq!(records[2].static_balance, 1600.0);

        // Compound: risk grows with the balance (100, 120, 144)
        assert_eq!(records[0].compound_pnl, 200.0);
        assert_eq!(records[0].compound_balance, 1200.0);
        assert_eq!(records[1].compound_pnl, 240.0);
        assert_eq!(records[1].compound_balance, 1440.0);
        assert_eq!(records[2].compound_pnl, 288.0);
        assert_eq!(records[2].compound_balance, 1728.0);
    }

    #[test]
    fn test_all_losses_balances_strictly_decrease() {
        let records = build_with_sequential_ids(&[Loss; 10], 2.0, 1000.0, 10.0);

        for pair in records.windows(2) {
            assert!(pair[1].static_balance < pair[0].static_balance);
            assert!(pair[1].compound_balance < pair[0].compound_balance);
        }
    }

    #[test]
    fn test_compound_balance_stays_positive_below_full_risk() {
        // Risking less than 100% can never take the compound balance
        // through zero, no matter how long the losing streak
        let records = build_with_sequential_ids(&[Loss; 200], 2.0, 1000.0, 10.0);

        for record in &records {
            assert!(record.compound_balance > 0.0);
        }
    }

    #[test]
    fn test_static_risk_is_path_independent() {
        let outcomes = [Win, Loss, Loss, Win, Loss, Win, Win, Loss];
        let records = build_with_sequential_ids(&outcomes, 3.0, 5000.0, 2.0);

        // Every loss costs exactly the same, every win pays exactly the same
        let static_risk = 5000.0 * 2.0 / 100.0;
        for record in &records {
            match record.result {
                TradeOutcome::Loss => assert_eq!(record.static_pnl, -static_risk),
                TradeOutcome::Win => assert_eq!(record.static_pnl, static_risk * 3.0),
            }
        }
    }

    #[test]
    fn test_trade_numbers_start_at_one_without_gaps() {
        let records = build_with_sequential_ids(&[Win, Loss, Win, Loss], 2.0, 1000.0, 10.0);

        let trades: Vec<u32> = records.iter().map(|r| r.trade).collect();
        assert_eq!(trades, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_sequence_number_is_stamped_on_every_record() {
        let mut builder = EquityCurveBuilder::with_ids(SequentialIdGenerator::default());
        let records = builder.build(7, &[Win, Loss, Win], 2.0, 1000.0, 10.0);

        assert!(records.iter().all(|r| r.sequence == 7));
    }

    #[test]
    fn test_empty_outcomes_yield_no_records() {
        let records = build_with_sequential_ids(&[], 2.0, 1000.0, 10.0);
        assert!(records.is_empty());
    }

    #[test]
    fn test_build_is_pure_given_fixed_outcomes() {
        let outcomes = [Win, Loss, Loss, Win, Win, Loss, Win];

        let first = build_with_sequential_ids(&outcomes, 2.5, 2500.0, 4.0);
        let second = build_with_sequential_ids(&outcomes, 2.5, 2500.0, 4.0);

        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.static_pnl, b.static_pnl);
            assert_eq!(a.static_balance, b.static_balance);
            assert_eq!(a.compound_pnl, b.compound_pnl);
            assert_eq!(a.compound_balance, b.compound_balance);
        }
    }

    #[test]
    fn test_compound_values_are_rounded_to_cents() {
        // 3.33% risk of $1000 = $33.30, win pays $49.95 at R=1.5;
        // the next compound risk is a messy fraction that must come
        // back rounded
        let records = build_with_sequential_ids(&[Win, Win, Loss], 1.5, 1000.0, 3.33);

        for record in &records {
            let pnl_scaled = record.compound_pnl * 100.0;
            let balance_scaled = record.compound_balance * 100.0;
            assert!((pnl_scaled - pnl_scaled.round()).abs() < 1e-9);
            assert!((balance_scaled - balance_scaled.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_static_values_are_not_rounded() {
        // Static sizing keeps full precision: 1.234% of $999.99
        let records = build_with_sequential_ids(&[Loss], 2.0, 999.99, 1.234);

        let static_risk = 999.99 * 1.234 / 100.0;
        assert_eq!(records[0].static_pnl, -static_risk);
        assert_eq!(records[0].static_balance, 999.99 - static_risk);
    }

    #[test]
    fn test_static_balance_is_running_sum_of_pnl() {
        let outcomes = [Win, Loss, Win, Win, Loss];
        let records = build_with_sequential_ids(&outcomes, 2.0, 1000.0, 5.0);

        let mut running = 1000.0;
        for record in &records {
            running += record.static_pnl;
            assert_eq!(record.static_balance, running);
        }
    }

    #[test]
    fn test_nan_inputs_propagate_instead_of_erroring() {
        let records = build_with_sequential_ids(&[Win], 2.0, f64::NAN, 10.0);

        assert_eq!(records.len(), 1);
        assert!(records[0].static_pnl.is_nan());
        assert!(records[0].static_balance.is_nan());
    }
}
