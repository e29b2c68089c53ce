//! Identifiers used throughout OpenSwap.
//!
//! Addresses use the numeric-digits-plus-`L` form; transaction ids are
//! opaque strings assigned by the enclosing transaction pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_ADDRESS_LEN, TYPE_CLAIM, TYPE_LOCK, TYPE_REFUND};
use crate::error::OpenswapError;

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// Account address: 1..=20 ASCII digits followed by a single `'L'`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Parse and validate an address.
    pub fn parse(s: impl Into<String>) -> Result<Self, OpenswapError> {
        let s = s.into();
        let well_formed = s.len() >= 2
            && s.len() <= MAX_ADDRESS_LEN
            && s.ends_with('L')
            && s[..s.len() - 1].bytes().all(|b| b.is_ascii_digit());
        if well_formed {
            Ok(Self(s))
        } else {
            Err(OpenswapError::SchemaViolation {
                field: "address".to_string(),
                expected: "1..20 digits followed by 'L'".to_string(),
                actual: s,
            })
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Address {
    type Error = OpenswapError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Address {
    /// Deterministic address derived from a counter.
    #[must_use]
    pub fn dummy(n: u64) -> Self {
        Self(format!("{n}L"))
    }

    /// Freshly generated random address.
    #[must_use]
    pub fn random() -> Self {
        Self(format!("{}L", rand::random::<u64>()))
    }
}

// ---------------------------------------------------------------------------
// TxId
// ---------------------------------------------------------------------------

/// Opaque transaction identifier assigned by the enclosing pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TxId(String);

impl TxId {
    /// Parse a transaction id. Any non-empty string is accepted.
    pub fn parse(s: impl Into<String>) -> Result<Self, OpenswapError> {
        let s = s.into();
        if s.is_empty() {
            return Err(OpenswapError::SchemaViolation {
                field: "id".to_string(),
                expected: "non-empty string".to_string(),
                actual: s,
            });
        }
        Ok(Self(s))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Deterministic `TxId` from a seed.
    ///
    /// Every caller generates the **exact same** id for the same seed —
    /// used wherever reproducible identifiers are needed.
    #[must_use]
    pub fn deterministic(seed: u64) -> Self {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(b"openswap:tx_id:v1:");
        hasher.update(seed.to_le_bytes());
        Self(hex::encode(hasher.finalize()))
    }
}

impl TryFrom<String> for TxId {
    type Error = OpenswapError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<TxId> for String {
    fn from(id: TxId) -> Self {
        id.0
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl TxId {
    /// Freshly generated unique id (UUIDv7, time-ordered).
    #[must_use]
    pub fn random() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }
}

// ---------------------------------------------------------------------------
// TransactionType
// ---------------------------------------------------------------------------

/// Wire-stable transaction type codes: Lock=8, Claim=9, Refund=10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum TransactionType {
    Lock,
    Claim,
    Refund,
}

impl TransactionType {
    /// Numeric wire code of this type.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Lock => TYPE_LOCK,
            Self::Claim => TYPE_CLAIM,
            Self::Refund => TYPE_REFUND,
        }
    }

    /// Reverse lookup from a wire code.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            TYPE_LOCK => Some(Self::Lock),
            TYPE_CLAIM => Some(Self::Claim),
            TYPE_REFUND => Some(Self::Refund),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lock => write!(f, "LOCK"),
            Self::Claim => write!(f, "CLAIM"),
            Self::Refund => write!(f, "REFUND"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_accepts_digits_plus_l() {
        assert!(Address::parse("12345678901234567890L").is_ok());
        assert!(Address::parse("1L").is_ok());
    }

    #[test]
    fn address_rejects_malformed() {
        for bad in ["", "L", "123", "123X", "12a45L", "123456789012345678901L"] {
            assert!(Address::parse(bad).is_err(), "accepted: {bad:?}");
        }
    }

    #[test]
    fn tx_id_rejects_empty() {
        assert!(TxId::parse("").is_err());
        assert!(TxId::parse("15150779193594545094").is_ok());
    }

    #[test]
    fn tx_id_deterministic() {
        let a = TxId::deterministic(7);
        let b = TxId::deterministic(7);
        assert_eq!(a, b);
        assert_ne!(a, TxId::deterministic(8));
        assert_eq!(a.as_str().len(), 64);
    }

    #[test]
    fn tx_id_random_unique() {
        assert_ne!(TxId::random(), TxId::random());
        assert_ne!(Address::random(), Address::random());
    }

    #[test]
    fn type_codes_are_stable() {
        assert_eq!(TransactionType::Lock.code(), 8);
        assert_eq!(TransactionType::Claim.code(), 9);
        assert_eq!(TransactionType::Refund.code(), 10);
        assert_eq!(TransactionType::from_code(9), Some(TransactionType::Claim));
        assert_eq!(TransactionType::from_code(7), None);
    }

    #[test]
    fn serde_roundtrips() {
        let address = Address::dummy(42);
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, "\"42L\"");
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(address, back);

        let bad: Result<Address, _> = serde_json::from_str("\"notanaddress\"");
        assert!(bad.is_err());
    }
}
