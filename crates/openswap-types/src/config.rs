//! Protocol parameters.

use serde::{Deserialize, Serialize};

use crate::{Amount, TransactionType, constants};

/// Tunable parameters of the conditional-transfer protocol.
///
/// Defaults come from the protocol constants; deployments may tighten the
/// pending-lock cap but must not change fees without a wire version bump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolParams {
    /// Fee a Lock transaction must carry.
    pub lock_fee: Amount,
    /// Fee a Claim transaction must carry.
    pub claim_fee: Amount,
    /// Fee a Refund transaction must carry.
    pub refund_fee: Amount,
    /// Maximum pending locks a single account may hold.
    pub max_pending_locks: usize,
}

impl ProtocolParams {
    /// The fee the envelope must carry for a given transaction type.
    #[must_use]
    pub fn fee_for(&self, transaction_type: TransactionType) -> Amount {
        match transaction_type {
            TransactionType::Lock => self.lock_fee,
            TransactionType::Claim => self.claim_fee,
            TransactionType::Refund => self.refund_fee,
        }
    }
}

impl Default for ProtocolParams {
    fn default() -> Self {
        Self {
            lock_fee: Amount::new(constants::LOCK_FEE),
            claim_fee: Amount::new(constants::CLAIM_FEE),
            refund_fee: Amount::new(constants::REFUND_FEE),
            max_pending_locks: constants::DEFAULT_MAX_PENDING_LOCKS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_constants() {
        let params = ProtocolParams::default();
        assert_eq!(params.lock_fee, Amount::new(constants::FIXED_POINT / 10));
        assert_eq!(params.fee_for(TransactionType::Claim), params.claim_fee);
        assert_eq!(params.fee_for(TransactionType::Refund), params.refund_fee);
        assert_eq!(params.max_pending_locks, 10_000);
    }

    #[test]
    fn serde_roundtrip() {
        let params = ProtocolParams::default();
        let json = serde_json::to_string(&params).unwrap();
        let back: ProtocolParams = serde_json::from_str(&json).unwrap();
        assert_eq!(params, back);
    }
}
