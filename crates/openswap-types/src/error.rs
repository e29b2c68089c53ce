//! Error types for the OpenSwap engine.
//!
//! All errors use the `OS_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Schema / structural validation errors
//! - 2xx: Balance errors
//! - 3xx: Authorization errors
//! - 4xx: Timing / preimage errors
//! - 5xx: Reference errors (missing locks, records, accounts)
//! - 6xx: Fee / limit errors
//! - 8xx: Safety invariant errors
//! - 9xx: General / internal errors
//!
//! Validation and business-rule failures are returned as lists
//! (`Vec<OpenswapError>`), never raised as control flow — an empty list
//! means success, and a non-empty list means the transaction produced no
//! ledger mutation at all.

use thiserror::Error;

use crate::{Address, Amount, Hashlock, Timestamp, TxId};

/// Central error enum for all OpenSwap operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpenswapError {
    // =================================================================
    // Schema Errors (1xx)
    // =================================================================
    /// A wire field is missing or malformed.
    #[error("OS_ERR_100: Schema violation at '{field}': expected {expected}, got {actual}")]
    SchemaViolation {
        field: String,
        expected: String,
        actual: String,
    },

    /// The asset envelope names no known transaction kind.
    #[error("OS_ERR_101: Unknown asset kind: {found}")]
    UnknownAssetKind { found: String },

    // =================================================================
    // Balance Errors (2xx)
    // =================================================================
    /// Balance does not cover amount plus fee.
    #[error("OS_ERR_200: Insufficient funds on {address}: need {needed}, have {available}")]
    InsufficientFunds {
        address: Address,
        needed: Amount,
        available: Amount,
    },

    /// A credit would overflow the balance representation.
    #[error("OS_ERR_201: Balance overflow on {address}")]
    BalanceOverflow { address: Address },

    /// A debit would take the balance below zero.
    #[error("OS_ERR_202: Balance underflow on {address}")]
    BalanceUnderflow { address: Address },

    // =================================================================
    // Authorization Errors (3xx)
    // =================================================================
    /// Claim submitted by someone other than the designated claim address.
    #[error("OS_ERR_300: Sender {sender} does not match claim address {claim_address}")]
    ClaimSenderMismatch {
        sender: Address,
        claim_address: Address,
    },

    /// Refund submitted by someone other than the original locker.
    #[error("OS_ERR_301: Sender {sender} does not match lock owner {locker}")]
    RefundSenderMismatch { sender: Address, locker: Address },

    // =================================================================
    // Timing / Preimage Errors (4xx)
    // =================================================================
    /// Refund attempted before the timelock elapsed.
    #[error("OS_ERR_400: Balance is still locked: now {now}, refundable at {timelock}")]
    TimelockNotExpired { now: Timestamp, timelock: Timestamp },

    /// The presented preimage does not hash to the stored commitment.
    #[error("OS_ERR_401: Hashed preimage {computed} does not match hashlock {expected}")]
    PreimageMismatch { computed: String, expected: Hashlock },

    // =================================================================
    // Reference Errors (5xx)
    // =================================================================
    /// The referenced transaction is not in the committed history.
    #[error("OS_ERR_500: Transaction not found: {0}")]
    TransactionNotFound(TxId),

    /// The referenced transaction exists but is not a Lock.
    #[error("OS_ERR_501: Transaction {0} is not a lock")]
    NotALockTransaction(TxId),

    /// The lock record was already consumed or never created.
    #[error("OS_ERR_502: No pending lock {lock_transaction_id} on account {address}")]
    LockRecordMissing {
        address: Address,
        lock_transaction_id: TxId,
    },

    /// The account does not exist in the ledger view.
    #[error("OS_ERR_503: Account not found: {0}")]
    AccountNotFound(Address),

    /// A pending lock with this id already exists on the account.
    #[error("OS_ERR_504: Pending lock already exists: {0}")]
    DuplicateLockRecord(TxId),

    // =================================================================
    // Fee / Limit Errors (6xx)
    // =================================================================
    /// The envelope fee does not match the protocol fee for the type.
    #[error("OS_ERR_600: Fee mismatch: expected {expected}, got {actual}")]
    FeeMismatch { expected: Amount, actual: Amount },

    /// The account holds too many pending locks.
    #[error("OS_ERR_601: Pending lock limit exceeded: {count} locks, limit {limit}")]
    PendingLockLimitExceeded { count: usize, limit: usize },

    // =================================================================
    // Safety Invariants (8xx)
    // =================================================================
    /// Supply conservation invariant violated — critical safety alert.
    #[error("OS_ERR_800: Supply invariant violation: {reason}")]
    SupplyInvariantViolation { reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("OS_ERR_900: Internal error: {0}")]
    Internal(String),

    /// Serialization / deserialization error.
    #[error("OS_ERR_901: Serialization error: {0}")]
    Serialization(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, OpenswapError>;
