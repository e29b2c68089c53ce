//! Supply conservation invariant checker.
//!
//! Mathematical invariant enforced after every applied batch:
//! ```text
//! Σ(balance + locked) == Σ(deposits) - Σ(fees burned)
//! ```
//!
//! Claims and refunds only move value between accounts; the only way
//! circulating supply may shrink is the fee burned by a Lock. If the
//! invariant ever breaks, something has gone catastrophically wrong.

use openswap_types::{Amount, OpenswapError, Result};

/// Tracks deposits and fee burns, and validates the circulating supply
/// the ledger actually holds.
#[derive(Debug, Clone, Default)]
pub struct SupplyConservation {
    deposited: Amount,
    fees_burned: Amount,
}

impl SupplyConservation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an external deposit (genesis / faucet credit).
    pub fn record_deposit(&mut self, amount: Amount) {
        self.deposited = self.deposited.saturating_add(amount);
    }

    /// Record a fee leaving circulation.
    pub fn record_fee_burn(&mut self, amount: Amount) {
        self.fees_burned = self.fees_burned.saturating_add(amount);
    }

    /// Supply the ledger should hold: deposits minus burned fees.
    #[must_use]
    pub fn expected_supply(&self) -> Amount {
        self.deposited.saturating_sub(self.fees_burned)
    }

    /// Verify the actual supply against the expected supply.
    ///
    /// # Errors
    /// Returns `SupplyInvariantViolation` if actual != expected.
    pub fn verify(&self, actual_supply: Amount) -> Result<()> {
        let expected = self.expected_supply();
        if actual_supply != expected {
            return Err(OpenswapError::SupplyInvariantViolation {
                reason: format!(
                    "actual supply {actual_supply} != expected {expected} \
                     (deposited={}, fees_burned={})",
                    self.deposited, self.fees_burned,
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_supply_nets_out_fees() {
        let mut supply = SupplyConservation::new();
        supply.record_deposit(Amount::new(1_000));
        supply.record_deposit(Amount::new(500));
        supply.record_fee_burn(Amount::new(30));
        assert_eq!(supply.expected_supply(), Amount::new(1_470));
    }

    #[test]
    fn verify_matches() {
        let mut supply = SupplyConservation::new();
        supply.record_deposit(Amount::new(1_000));
        supply.verify(Amount::new(1_000)).unwrap();

        supply.record_fee_burn(Amount::new(10));
        supply.verify(Amount::new(990)).unwrap();
    }

    #[test]
    fn verify_rejects_drift() {
        let mut supply = SupplyConservation::new();
        supply.record_deposit(Amount::new(1_000));
        let err = supply.verify(Amount::new(999)).unwrap_err();
        assert!(matches!(
            err,
            OpenswapError::SupplyInvariantViolation { .. }
        ));
    }
}
