//! Claim handler — releases an escrowed balance to the designated
//! recipient in exchange for the hashlock preimage.
//!
//! The claim references the lock by transaction id; the lock record lives
//! on the *original locker's* account, not the claimant's. A record that
//! is already gone means the lock was consumed (or never existed) and the
//! claim fails closed.

use openswap_ledger::{LedgerView, Prefetch};
use openswap_types::constants::{MAX_PREIMAGE_LEN, MIN_PREIMAGE_LEN};
use openswap_types::{
    ClaimAsset, Hashlock, OpenswapError, ProtocolParams, Result, Transaction, TransactionAsset,
};

/// Ledger records a Claim will need. Resolves the lock transaction first
/// so the locker's and claim-address accounts can be named too.
pub fn prepare<L: LedgerView>(ledger: &L, tx: &Transaction, asset: &ClaimAsset) -> Prefetch {
    let mut prefetch = Prefetch::new()
        .account(tx.sender_id.clone())
        .transaction(asset.lock_transaction_id.clone());

    if let Ok(lock_tx) = ledger.get_transaction(&asset.lock_transaction_id) {
        if let TransactionAsset::Lock(lock_asset) = &lock_tx.asset {
            prefetch = prefetch
                .account(lock_tx.sender_id.clone())
                .account(lock_asset.claim_address.clone());
        }
    }
    prefetch
}

/// Structural checks independent of other ledger state.
pub fn validate(
    tx: &Transaction,
    asset: &ClaimAsset,
    params: &ProtocolParams,
) -> Vec<OpenswapError> {
    let mut errors = Vec::new();
    if tx.fee != params.claim_fee {
        errors.push(OpenswapError::FeeMismatch {
            expected: params.claim_fee,
            actual: tx.fee,
        });
    }
    let len = asset.preimage.chars().count();
    if !(MIN_PREIMAGE_LEN..=MAX_PREIMAGE_LEN).contains(&len) {
        errors.push(OpenswapError::SchemaViolation {
            field: "asset.claim.preimage".to_string(),
            expected: "string of 1..64 characters".to_string(),
            actual: asset.preimage.clone(),
        });
    }
    errors
}

/// Apply a Claim against the ledger snapshot.
///
/// Credits the claim address and removes the record from the locker; no
/// other account is touched. Nothing changes on failure.
pub fn apply<L: LedgerView>(
    ledger: &mut L,
    tx: &Transaction,
    asset: &ClaimAsset,
) -> Vec<OpenswapError> {
    match try_apply(ledger, tx, asset) {
        Ok(()) => Vec::new(),
        Err(err) => vec![err],
    }
}

fn try_apply<L: LedgerView>(ledger: &mut L, tx: &Transaction, asset: &ClaimAsset) -> Result<()> {
    let lock_tx = ledger.get_transaction(&asset.lock_transaction_id)?;
    let TransactionAsset::Lock(lock_asset) = &lock_tx.asset else {
        return Err(OpenswapError::NotALockTransaction(lock_tx.id.clone()));
    };

    if tx.sender_id != lock_asset.claim_address {
        return Err(OpenswapError::ClaimSenderMismatch {
            sender: tx.sender_id.clone(),
            claim_address: lock_asset.claim_address.clone(),
        });
    }

    let computed = Hashlock::digest(&asset.preimage);
    if computed != lock_asset.hashlock.as_str() {
        return Err(OpenswapError::PreimageMismatch {
            computed,
            expected: lock_asset.hashlock.clone(),
        });
    }

    let mut locker = ledger.get_account(&lock_tx.sender_id)?;
    let record = locker
        .take_lock(&lock_tx.id)
        .ok_or_else(|| OpenswapError::LockRecordMissing {
            address: lock_tx.sender_id.clone(),
            lock_transaction_id: lock_tx.id.clone(),
        })?;

    // Self-lock: locker and claim address are the same account, so the
    // credit and the record removal must land on one clone.
    if locker.address == lock_asset.claim_address {
        locker.credit(record.amount)?;
        ledger.set_account(locker);
    } else {
        let mut recipient = ledger.get_or_create_account(&lock_asset.claim_address);
        recipient.credit(record.amount)?;
        ledger.set_account(recipient);
        ledger.set_account(locker);
    }

    tracing::debug!(
        tx_id = %tx.id,
        lock_tx_id = %lock_tx.id,
        recipient = %lock_asset.claim_address,
        amount = %record.amount,
        "claimed hash time-locked balance"
    );
    Ok(())
}

/// Revert an applied Claim: take the amount back from the claim address
/// and restore the record on the original locker.
pub fn undo<L: LedgerView>(
    ledger: &mut L,
    tx: &Transaction,
    asset: &ClaimAsset,
) -> Vec<OpenswapError> {
    match try_undo(ledger, tx, asset) {
        Ok(()) => Vec::new(),
        Err(err) => vec![err],
    }
}

fn try_undo<L: LedgerView>(ledger: &mut L, _tx: &Transaction, asset: &ClaimAsset) -> Result<()> {
    let lock_tx = ledger.get_transaction(&asset.lock_transaction_id)?;
    let TransactionAsset::Lock(lock_asset) = &lock_tx.asset else {
        return Err(OpenswapError::NotALockTransaction(lock_tx.id.clone()));
    };

    let record = openswap_types::LockRecord {
        lock_transaction_id: lock_tx.id.clone(),
        amount: lock_tx.amount,
    };

    let mut locker = ledger.get_account(&lock_tx.sender_id)?;
    if locker.address == lock_asset.claim_address {
        locker.debit(lock_tx.amount)?;
        locker.push_lock(record)?;
        ledger.set_account(locker);
    } else {
        let mut claimant = ledger.get_account(&lock_asset.claim_address)?;
        claimant.debit(lock_tx.amount)?;
        locker.push_lock(record)?;
        ledger.set_account(claimant);
        ledger.set_account(locker);
    }
    Ok(())
}
