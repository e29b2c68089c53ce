//! # openswap-types
//!
//! Shared types, errors, and configuration for the **OpenSwap** hash
//! time-locked balance engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`Address`], [`TxId`], [`TransactionType`]
//! - **Value types**: [`Amount`], [`Timestamp`], [`Hashlock`]
//! - **Ledger records**: [`Account`], [`LockRecord`]
//! - **Transaction model**: [`Transaction`], [`TransactionAsset`],
//!   [`LockAsset`], [`ClaimAsset`], [`RefundAsset`]
//! - **Configuration**: [`ProtocolParams`]
//! - **Errors**: [`OpenswapError`] with `OS_ERR_` prefix codes
//! - **Constants**: fixed-point scale, fee schedule, wire type codes

pub mod account;
pub mod amount;
pub mod config;
pub mod constants;
pub mod error;
pub mod hashlock;
pub mod ids;
pub mod timestamp;
pub mod transaction;

// Re-export all primary types at crate root for ergonomic imports:
//   use openswap_types::{Account, Amount, Transaction, ...};

pub use account::*;
pub use amount::*;
pub use config::*;
pub use error::*;
pub use hashlock::*;
pub use ids::*;
pub use timestamp::*;
pub use transaction::*;

// Constants are accessed via `openswap_types::constants::FOO`
// (not re-exported to avoid name collisions).
