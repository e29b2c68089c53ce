//! Account records and their pending hash time-locked balances.
//!
//! Every escrowed amount lives as a [`LockRecord`] on the *locker's*
//! account until exactly one Claim or Refund consumes it. A record id is
//! unique within its owning account.

use serde::{Deserialize, Serialize};

use crate::error::{OpenswapError, Result};
use crate::{Address, Amount, TxId};

/// A pending escrow entry, keyed by the lock transaction that created it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockRecord {
    pub lock_transaction_id: TxId,
    pub amount: Amount,
}

/// A ledger account: spendable balance plus pending lock records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub address: Address,
    pub balance: Amount,
    pub locks: Vec<LockRecord>,
}

impl Account {
    /// Fresh account with zero balance and no pending locks.
    #[must_use]
    pub fn new(address: Address) -> Self {
        Self {
            address,
            balance: Amount::ZERO,
            locks: Vec::new(),
        }
    }

    /// Add to the spendable balance.
    ///
    /// # Errors
    /// Returns `BalanceOverflow` if the credit does not fit.
    pub fn credit(&mut self, amount: Amount) -> Result<()> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(OpenswapError::BalanceOverflow {
                address: self.address.clone(),
            })?;
        Ok(())
    }

    /// Subtract from the spendable balance.
    ///
    /// # Errors
    /// Returns `BalanceUnderflow` if the balance cannot cover the debit.
    pub fn debit(&mut self, amount: Amount) -> Result<()> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(OpenswapError::BalanceUnderflow {
                address: self.address.clone(),
            })?;
        Ok(())
    }

    /// Look up a pending lock by the transaction id that created it.
    #[must_use]
    pub fn lock_record(&self, id: &TxId) -> Option<&LockRecord> {
        self.locks.iter().find(|r| r.lock_transaction_id == *id)
    }

    /// Append a pending lock, enforcing id uniqueness within this account.
    ///
    /// # Errors
    /// Returns `DuplicateLockRecord` if a record with the same id exists.
    pub fn push_lock(&mut self, record: LockRecord) -> Result<()> {
        if self.lock_record(&record.lock_transaction_id).is_some() {
            return Err(OpenswapError::DuplicateLockRecord(
                record.lock_transaction_id,
            ));
        }
        self.locks.push(record);
        Ok(())
    }

    /// Remove and return the pending lock with the given id, if present.
    /// A consumed record can never be taken again.
    #[must_use]
    pub fn take_lock(&mut self, id: &TxId) -> Option<LockRecord> {
        let index = self
            .locks
            .iter()
            .position(|r| r.lock_transaction_id == *id)?;
        Some(self.locks.remove(index))
    }

    /// Sum of all pending lock amounts.
    #[must_use]
    pub fn locked_total(&self) -> Amount {
        self.locks
            .iter()
            .fold(Amount::ZERO, |acc, r| acc.saturating_add(r.amount))
    }

    /// Spendable plus escrowed holdings.
    #[must_use]
    pub fn total(&self) -> Amount {
        self.balance.saturating_add(self.locked_total())
    }
}
