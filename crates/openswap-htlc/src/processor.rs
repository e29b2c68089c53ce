//! Transaction dispatch over the asset variant.
//!
//! One processor drives all three transaction kinds through the same
//! pipeline shape: `prepare` declares what to preload, `validate` runs
//! rules independent of other ledger state, `apply` mutates the snapshot
//! or returns the rejection list, `undo` inverts a prior apply.

use openswap_ledger::{LedgerView, Prefetch};
use openswap_types::{OpenswapError, ProtocolParams, Timestamp, Transaction, TransactionAsset};

use crate::{claim, lock, refund};

/// Applies Lock / Claim / Refund transactions against a ledger view.
#[derive(Debug, Clone, Default)]
pub struct HtlcProcessor {
    params: ProtocolParams,
}

impl HtlcProcessor {
    /// Processor with the default protocol parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_params(params: ProtocolParams) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn params(&self) -> &ProtocolParams {
        &self.params
    }

    /// Declare which accounts and transactions the apply step will read,
    /// so the caller can batch-load them from slow storage.
    pub fn prepare<L: LedgerView>(&self, ledger: &L, tx: &Transaction) -> Prefetch {
        match &tx.asset {
            TransactionAsset::Lock(_) => lock::prepare(tx),
            TransactionAsset::Claim(asset) => claim::prepare(ledger, tx, asset),
            TransactionAsset::Refund(asset) => refund::prepare(tx, asset),
        }
    }

    /// Structural and fee checks independent of other ledger state.
    pub fn validate(&self, tx: &Transaction) -> Vec<OpenswapError> {
        match &tx.asset {
            TransactionAsset::Lock(_) => lock::validate(tx, &self.params),
            TransactionAsset::Claim(asset) => claim::validate(tx, asset, &self.params),
            TransactionAsset::Refund(_) => refund::validate(tx, &self.params),
        }
    }

    /// Validate and apply one transaction against the snapshot at the
    /// given logical time.
    ///
    /// Returns the rejection list; an empty list means the mutation was
    /// persisted. Any non-empty list means the ledger is untouched.
    pub fn apply<L: LedgerView>(
        &self,
        ledger: &mut L,
        tx: &Transaction,
        now: Timestamp,
    ) -> Vec<OpenswapError> {
        let mut errors = self.validate(tx);
        if errors.is_empty() {
            errors = match &tx.asset {
                TransactionAsset::Lock(asset) => lock::apply(ledger, tx, asset, &self.params),
                TransactionAsset::Claim(asset) => claim::apply(ledger, tx, asset),
                TransactionAsset::Refund(asset) => refund::apply(ledger, tx, asset, now),
            };
        }
        if !errors.is_empty() {
            tracing::warn!(
                tx_id = %tx.id,
                kind = %tx.transaction_type(),
                count = errors.len(),
                "transaction rejected"
            );
        }
        errors
    }

    /// Invert a previously applied transaction.
    pub fn undo<L: LedgerView>(&self, ledger: &mut L, tx: &Transaction) -> Vec<OpenswapError> {
        match &tx.asset {
            TransactionAsset::Lock(asset) => lock::undo(ledger, tx, asset),
            TransactionAsset::Claim(asset) => claim::undo(ledger, tx, asset),
            TransactionAsset::Refund(asset) => refund::undo(ledger, tx, asset),
        }
    }

    /// Apply a batch strictly in submission order. Failed transactions
    /// are reported in the per-transaction outcome lists and leave no
    /// trace in the ledger; later transactions still run.
    pub fn apply_batch<L: LedgerView>(
        &self,
        ledger: &mut L,
        transactions: &[Transaction],
        now: Timestamp,
    ) -> Vec<Vec<OpenswapError>> {
        let outcomes: Vec<_> = transactions
            .iter()
            .map(|tx| self.apply(ledger, tx, now))
            .collect();
        let rejected = outcomes.iter().filter(|errors| !errors.is_empty()).count();
        tracing::info!(
            total = transactions.len(),
            applied = transactions.len() - rejected,
            rejected,
            "batch applied"
        );
        outcomes
    }
}

#[cfg(test)]
mod tests {
    use openswap_ledger::MemoryLedger;
    use openswap_types::constants::FIXED_POINT;
    use openswap_types::{Address, Amount, Hashlock, TxId};

    use super::*;

    fn coins(n: u128) -> Amount {
        Amount::new(n * FIXED_POINT)
    }

    const TIMELOCK: Timestamp = Timestamp(1_700_000_000);

    fn lock_tx(sender: &Address, amount: Amount, claim_address: &Address) -> Transaction {
        Transaction::dummy_lock(
            TxId::deterministic(1),
            sender.clone(),
            amount,
            TIMELOCK,
            Hashlock::of_preimage("secret"),
            claim_address.clone(),
        )
    }

    #[test]
    fn fee_mismatch_short_circuits_apply() {
        let mut ledger = MemoryLedger::new();
        let sender = Address::dummy(1);
        ledger.deposit(&sender, coins(5_000)).unwrap();
        let snapshot = ledger.clone();

        let mut tx = lock_tx(&sender, coins(100), &Address::dummy(2));
        tx.fee = Amount::new(1);

        let processor = HtlcProcessor::new();
        let errors = processor.apply(&mut ledger, &tx, TIMELOCK);
        assert!(matches!(errors[0], OpenswapError::FeeMismatch { .. }));
        assert_eq!(ledger, snapshot);
    }

    #[test]
    fn dispatches_each_kind() {
        let mut ledger = MemoryLedger::new();
        let locker = Address::dummy(1);
        let claimant = Address::dummy(2);
        ledger.deposit(&locker, coins(5_000)).unwrap();

        let processor = HtlcProcessor::new();
        let lock = lock_tx(&locker, coins(1_000), &claimant);
        assert!(processor.apply(&mut ledger, &lock, TIMELOCK).is_empty());
        ledger.insert_transaction(lock.clone());

        let claim = Transaction::dummy_claim(
            TxId::deterministic(2),
            claimant.clone(),
            lock.id.clone(),
            "secret",
        );
        assert!(processor.apply(&mut ledger, &claim, TIMELOCK).is_empty());

        // record already consumed, so the refund must fail
        let refund = Transaction::dummy_refund(TxId::deterministic(3), locker, lock.id.clone());
        let errors = processor.apply(&mut ledger, &refund, TIMELOCK);
        assert!(matches!(errors[0], OpenswapError::LockRecordMissing { .. }));
    }

    #[test]
    fn batch_preserves_submission_order() {
        let mut ledger = MemoryLedger::new();
        let locker = Address::dummy(1);
        let claimant = Address::dummy(2);
        ledger.deposit(&locker, coins(5_000)).unwrap();

        let lock = lock_tx(&locker, coins(1_000), &claimant);
        // the claim references a lock applied earlier in the same batch;
        // the caller commits history between items
        let processor = HtlcProcessor::new();
        let outcomes = processor.apply_batch(&mut ledger, std::slice::from_ref(&lock), TIMELOCK);
        assert!(outcomes[0].is_empty());
        ledger.insert_transaction(lock.clone());

        let claim = Transaction::dummy_claim(
            TxId::deterministic(2),
            claimant.clone(),
            lock.id.clone(),
            "secret",
        );
        let bad_refund =
            Transaction::dummy_refund(TxId::deterministic(3), locker, lock.id.clone());
        let outcomes = processor.apply_batch(&mut ledger, &[claim, bad_refund], TIMELOCK);
        assert!(outcomes[0].is_empty());
        assert!(matches!(
            outcomes[1][0],
            OpenswapError::LockRecordMissing { .. }
        ));
        assert_eq!(ledger.get_account(&claimant).unwrap().balance, coins(1_000));
    }

    #[test]
    fn prepare_dispatches_by_kind() {
        let ledger = MemoryLedger::new();
        let processor = HtlcProcessor::new();
        let sender = Address::dummy(1);

        let lock = lock_tx(&sender, coins(1), &Address::dummy(2));
        let prefetch = processor.prepare(&ledger, &lock);
        assert_eq!(prefetch.accounts, vec![sender.clone()]);
        assert!(prefetch.transactions.is_empty());

        let refund =
            Transaction::dummy_refund(TxId::deterministic(2), sender, TxId::deterministic(1));
        let prefetch = processor.prepare(&ledger, &refund);
        assert_eq!(prefetch.transactions, vec![TxId::deterministic(1)]);
    }
}
