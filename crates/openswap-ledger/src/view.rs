//! The ledger-view contract.

use openswap_types::{Account, Address, Result, Transaction, TxId};

/// Read/write access to account state and read-only access to the
/// committed transaction history.
///
/// Accounts are handed out as owned values; callers mutate their copy and
/// persist it with [`set_account`](LedgerView::set_account). Nothing is
/// stored until `set_account` runs, which keeps a failed apply free of
/// side effects. The transaction history is populated by the surrounding
/// pipeline and is never mutated from here.
pub trait LedgerView {
    /// Fetch an existing account.
    ///
    /// # Errors
    /// Returns `AccountNotFound` if the address has no account.
    fn get_account(&self, address: &Address) -> Result<Account>;

    /// Fetch an account, or a fresh zero-balance account if the address
    /// has none. The fresh account is not stored until `set_account`.
    fn get_or_create_account(&self, address: &Address) -> Account;

    /// Persist an account, replacing any previous state for its address.
    fn set_account(&mut self, account: Account);

    /// Fetch a committed transaction by id.
    ///
    /// # Errors
    /// Returns `TransactionNotFound` if the id is not in the history.
    fn get_transaction(&self, id: &TxId) -> Result<Transaction>;
}

/// What a handler will need from the ledger, declared before apply so the
/// caller can batch-load records from slow storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefetch {
    pub accounts: Vec<Address>,
    pub transactions: Vec<TxId>,
}

impl Prefetch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Name an account address to preload.
    #[must_use]
    pub fn account(mut self, address: Address) -> Self {
        if !self.accounts.contains(&address) {
            self.accounts.push(address);
        }
        self
    }

    /// Name a committed transaction id to preload.
    #[must_use]
    pub fn transaction(mut self, id: TxId) -> Self {
        if !self.transactions.contains(&id) {
            self.transactions.push(id);
        }
        self
    }
}
