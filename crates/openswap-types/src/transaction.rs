//! The transaction envelope and its per-kind payloads.
//!
//! Lock, Claim, and Refund share one envelope (id, sender, fee, amount)
//! and differ only in the asset payload, modeled as a tagged sum type.
//! Handlers dispatch with a `match` over the variant.

use serde::{Deserialize, Serialize};

use crate::{Address, Amount, Hashlock, Timestamp, TransactionType, TxId};

/// Payload of a Lock: escrow under a hash commitment and a timelock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockAsset {
    /// Absolute unix time after which the lock becomes refundable.
    pub timelock: Timestamp,
    /// Commitment the claimant must open.
    pub hashlock: Hashlock,
    /// The only address allowed to claim.
    pub claim_address: Address,
}

/// Payload of a Claim: open a prior lock by revealing the preimage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimAsset {
    pub lock_transaction_id: TxId,
    pub preimage: String,
}

/// Payload of a Refund: reclaim a prior lock after its timelock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundAsset {
    pub lock_transaction_id: TxId,
}

/// The per-kind payload, tagged exactly as it appears on the wire:
/// `{"lock": {...}}`, `{"claim": {...}}`, `{"refund": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionAsset {
    #[serde(rename = "lock")]
    Lock(LockAsset),
    #[serde(rename = "claim")]
    Claim(ClaimAsset),
    #[serde(rename = "refund")]
    Refund(RefundAsset),
}

impl TransactionAsset {
    #[must_use]
    pub fn transaction_type(&self) -> TransactionType {
        match self {
            Self::Lock(_) => TransactionType::Lock,
            Self::Claim(_) => TransactionType::Claim,
            Self::Refund(_) => TransactionType::Refund,
        }
    }
}

/// A full transaction: common envelope plus the kind-specific asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TxId,
    pub sender_id: Address,
    pub fee: Amount,
    pub amount: Amount,
    pub asset: TransactionAsset,
}

impl Transaction {
    #[must_use]
    pub fn transaction_type(&self) -> TransactionType {
        self.asset.transaction_type()
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Transaction {
    pub fn dummy_lock(
        id: TxId,
        sender_id: Address,
        amount: Amount,
        timelock: Timestamp,
        hashlock: Hashlock,
        claim_address: Address,
    ) -> Self {
        Self {
            id,
            sender_id,
            fee: Amount::new(crate::constants::LOCK_FEE),
            amount,
            asset: TransactionAsset::Lock(LockAsset {
                timelock,
                hashlock,
                claim_address,
            }),
        }
    }

    pub fn dummy_claim(
        id: TxId,
        sender_id: Address,
        lock_transaction_id: TxId,
        preimage: impl Into<String>,
    ) -> Self {
        Self {
            id,
            sender_id,
            fee: Amount::new(crate::constants::CLAIM_FEE),
            amount: Amount::ZERO,
            asset: TransactionAsset::Claim(ClaimAsset {
                lock_transaction_id,
                preimage: preimage.into(),
            }),
        }
    }

    pub fn dummy_refund(id: TxId, sender_id: Address, lock_transaction_id: TxId) -> Self {
        Self {
            id,
            sender_id,
            fee: Amount::new(crate::constants::REFUND_FEE),
            amount: Amount::ZERO,
            asset: TransactionAsset::Refund(RefundAsset {
                lock_transaction_id,
            }),
        }
    }
}
