//! # openswap-ledger
//!
//! The ledger-view contract consumed by the transaction handlers, an
//! in-memory reference implementation, and the supply auditor.
//!
//! ## Architecture
//!
//! Handlers never reach into storage on their own. They read accounts and
//! committed transactions through [`LedgerView`], mutate *clones*, and
//! persist whole accounts with `set_account` only after every check has
//! passed — so a rejected transaction leaves the ledger untouched.
//!
//! The surrounding pipeline can batch-load everything a transaction will
//! need from the [`Prefetch`] each handler declares up front.

pub mod memory;
pub mod supply;
pub mod view;

pub use memory::MemoryLedger;
pub use supply::SupplyConservation;
pub use view::{LedgerView, Prefetch};
