//! In-memory reference ledger.
//!
//! Backs the integration tests and any single-process deployment. All
//! state lives in two maps; cloning the ledger snapshots it, which the
//! determinism tests rely on.

use std::collections::HashMap;

use openswap_types::{Account, Address, Amount, OpenswapError, Result, Transaction, TxId};

use crate::view::LedgerView;

/// HashMap-backed ledger: accounts plus committed transaction history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryLedger {
    accounts: HashMap<Address, Account>,
    transactions: HashMap<TxId, Transaction>,
}

impl MemoryLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit an address from outside the protocol (genesis / faucet).
    /// Creates the account if it does not exist.
    ///
    /// # Errors
    /// Returns `BalanceOverflow` if the credit does not fit.
    pub fn deposit(&mut self, address: &Address, amount: Amount) -> Result<()> {
        let entry = self
            .accounts
            .entry(address.clone())
            .or_insert_with(|| Account::new(address.clone()));
        entry.credit(amount)
    }

    /// Commit a transaction into the history. This is the caller's step
    /// after a successful apply; the handlers only ever read the history.
    pub fn insert_transaction(&mut self, transaction: Transaction) {
        self.transactions
            .insert(transaction.id.clone(), transaction);
    }

    #[must_use]
    pub fn contains_transaction(&self, id: &TxId) -> bool {
        self.transactions.contains_key(id)
    }

    #[must_use]
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Iterate all accounts (order unspecified).
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    /// Total circulating supply: every account's spendable balance plus
    /// its pending lock amounts.
    #[must_use]
    pub fn total_supply(&self) -> Amount {
        self.accounts
            .values()
            .fold(Amount::ZERO, |acc, account| {
                acc.saturating_add(account.total())
            })
    }
}

impl LedgerView for MemoryLedger {
    fn get_account(&self, address: &Address) -> Result<Account> {
        self.accounts
            .get(address)
            .cloned()
            .ok_or_else(|| OpenswapError::AccountNotFound(address.clone()))
    }

    fn get_or_create_account(&self, address: &Address) -> Account {
        self.accounts
            .get(address)
            .cloned()
            .unwrap_or_else(|| Account::new(address.clone()))
    }

    fn set_account(&mut self, account: Account) {
        self.accounts.insert(account.address.clone(), account);
    }

    fn get_transaction(&self, id: &TxId) -> Result<Transaction> {
        self.transactions
            .get(id)
            .cloned()
            .ok_or_else(|| OpenswapError::TransactionNotFound(id.clone()))
    }
}
