//! Refund handler — returns an expired escrow to the original locker.
//!
//! Only the locker may reclaim, and only once the caller-supplied current
//! time has reached the lock's timelock. Time equal to the timelock is
//! already refundable.

use openswap_ledger::{LedgerView, Prefetch};
use openswap_types::{
    OpenswapError, ProtocolParams, RefundAsset, Result, Timestamp, Transaction, TransactionAsset,
};

/// Ledger records a Refund will need.
pub fn prepare(tx: &Transaction, asset: &RefundAsset) -> Prefetch {
    Prefetch::new()
        .account(tx.sender_id.clone())
        .transaction(asset.lock_transaction_id.clone())
}

/// Structural checks independent of other ledger state.
pub fn validate(tx: &Transaction, params: &ProtocolParams) -> Vec<OpenswapError> {
    let mut errors = Vec::new();
    if tx.fee != params.refund_fee {
        errors.push(OpenswapError::FeeMismatch {
            expected: params.refund_fee,
            actual: tx.fee,
        });
    }
    errors
}

/// Apply a Refund against the ledger snapshot at the given logical time.
pub fn apply<L: LedgerView>(
    ledger: &mut L,
    tx: &Transaction,
    asset: &RefundAsset,
    now: Timestamp,
) -> Vec<OpenswapError> {
    match try_apply(ledger, tx, asset, now) {
        Ok(()) => Vec::new(),
        Err(err) => vec![err],
    }
}

fn try_apply<L: LedgerView>(
    ledger: &mut L,
    tx: &Transaction,
    asset: &RefundAsset,
    now: Timestamp,
) -> Result<()> {
    let lock_tx = ledger.get_transaction(&asset.lock_transaction_id)?;
    let TransactionAsset::Lock(lock_asset) = &lock_tx.asset else {
        return Err(OpenswapError::NotALockTransaction(lock_tx.id.clone()));
    };

    if tx.sender_id != lock_tx.sender_id {
        return Err(OpenswapError::RefundSenderMismatch {
            sender: tx.sender_id.clone(),
            locker: lock_tx.sender_id.clone(),
        });
    }

    if now < lock_asset.timelock {
        return Err(OpenswapError::TimelockNotExpired {
            now,
            timelock: lock_asset.timelock,
        });
    }

    let mut sender = ledger.get_account(&tx.sender_id)?;
    let record = sender
        .take_lock(&lock_tx.id)
        .ok_or_else(|| OpenswapError::LockRecordMissing {
            address: tx.sender_id.clone(),
            lock_transaction_id: lock_tx.id.clone(),
        })?;

    sender.credit(record.amount)?;
    ledger.set_account(sender);
    Ok(())
}

/// Revert an applied Refund: debit the restored amount, re-create the
/// record.
pub fn undo<L: LedgerView>(
    ledger: &mut L,
    tx: &Transaction,
    asset: &RefundAsset,
) -> Vec<OpenswapError> {
    match try_undo(ledger, tx, asset) {
        Ok(()) => Vec::new(),
        Err(err) => vec![err],
    }
}

fn try_undo<L: LedgerView>(ledger: &mut L, tx: &Transaction, asset: &RefundAsset) -> Result<()> {
    let lock_tx = ledger.get_transaction(&asset.lock_transaction_id)?;
    if !matches!(lock_tx.asset, TransactionAsset::Lock(_)) {
        return Err(OpenswapError::NotALockTransaction(lock_tx.id.clone()));
    }

    let mut sender = ledger.get_account(&tx.sender_id)?;
    sender.debit(lock_tx.amount)?;
    sender.push_lock(openswap_types::LockRecord {
        lock_transaction_id: lock_tx.id.clone(),
        amount: lock_tx.amount,
    })?;
    ledger.set_account(sender);
    Ok(())
}
