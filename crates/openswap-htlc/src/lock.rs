//! Lock handler — escrows funds under a hash + time condition.
//!
//! A Lock debits `amount + fee` from the sender and appends a
//! [`LockRecord`] tagged by the lock transaction's own id. The hashlock
//! and timelock are not copied onto the record; Claim and Refund read
//! them back from the committed lock transaction.

use openswap_ledger::{LedgerView, Prefetch};
use openswap_types::{
    Account, Amount, LockAsset, LockRecord, OpenswapError, ProtocolParams, Result, Transaction,
};

/// Ledger records a Lock will need: just the sender's account.
pub fn prepare(tx: &Transaction) -> Prefetch {
    Prefetch::new().account(tx.sender_id.clone())
}

/// Structural checks independent of other ledger state.
pub fn validate(tx: &Transaction, params: &ProtocolParams) -> Vec<OpenswapError> {
    let mut errors = Vec::new();
    if tx.fee != params.lock_fee {
        errors.push(OpenswapError::FeeMismatch {
            expected: params.lock_fee,
            actual: tx.fee,
        });
    }
    errors
}

/// Shared balance gate: the sender's spendable balance must cover
/// `amount + fee`.
#[must_use]
pub fn verify_amount_balance(
    account: &Account,
    amount: Amount,
    fee: Amount,
) -> Option<OpenswapError> {
    let Some(needed) = amount.checked_add(fee) else {
        return Some(OpenswapError::BalanceOverflow {
            address: account.address.clone(),
        });
    };
    if account.balance < needed {
        return Some(OpenswapError::InsufficientFunds {
            address: account.address.clone(),
            needed,
            available: account.balance,
        });
    }
    None
}

/// Apply a Lock against the ledger snapshot.
///
/// Exactly one balance decrease and one new record on success; nothing
/// on failure.
pub fn apply<L: LedgerView>(
    ledger: &mut L,
    tx: &Transaction,
    asset: &LockAsset,
    params: &ProtocolParams,
) -> Vec<OpenswapError> {
    match try_apply(ledger, tx, asset, params) {
        Ok(()) => Vec::new(),
        Err(err) => vec![err],
    }
}

fn try_apply<L: LedgerView>(
    ledger: &mut L,
    tx: &Transaction,
    _asset: &LockAsset,
    params: &ProtocolParams,
) -> Result<()> {
    let mut sender = ledger.get_account(&tx.sender_id)?;

    if sender.lock_record(&tx.id).is_some() {
        return Err(OpenswapError::DuplicateLockRecord(tx.id.clone()));
    }
    if sender.locks.len() >= params.max_pending_locks {
        return Err(OpenswapError::PendingLockLimitExceeded {
            count: sender.locks.len(),
            limit: params.max_pending_locks,
        });
    }
    if let Some(err) = verify_amount_balance(&sender, tx.amount, tx.fee) {
        return Err(err);
    }

    // verify_amount_balance proved amount + fee fits and is covered
    let debit_total =
        tx.amount
            .checked_add(tx.fee)
            .ok_or_else(|| OpenswapError::BalanceOverflow {
                address: sender.address.clone(),
            })?;
    sender.debit(debit_total)?;
    sender.push_lock(LockRecord {
        lock_transaction_id: tx.id.clone(),
        amount: tx.amount,
    })?;

    ledger.set_account(sender);

    tracing::debug!(
        tx_id = %tx.id,
        sender = %tx.sender_id,
        amount = %tx.amount,
        "escrowed hash time-locked balance"
    );
    Ok(())
}

/// Revert an applied Lock: remove the record, restore `amount + fee`.
pub fn undo<L: LedgerView>(
    ledger: &mut L,
    tx: &Transaction,
    asset: &LockAsset,
) -> Vec<OpenswapError> {
    match try_undo(ledger, tx, asset) {
        Ok(()) => Vec::new(),
        Err(err) => vec![err],
    }
}

fn try_undo<L: LedgerView>(ledger: &mut L, tx: &Transaction, _asset: &LockAsset) -> Result<()> {
    let mut sender = ledger.get_account(&tx.sender_id)?;
    let record = sender
        .take_lock(&tx.id)
        .ok_or_else(|| OpenswapError::LockRecordMissing {
            address: tx.sender_id.clone(),
            lock_transaction_id: tx.id.clone(),
        })?;

    let restore_total =
        record
            .amount
            .checked_add(tx.fee)
            .ok_or_else(|| OpenswapError::BalanceOverflow {
                address: sender.address.clone(),
            })?;
    sender.credit(restore_total)?;

    ledger.set_account(sender);
    Ok(())
}
