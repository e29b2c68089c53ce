//! Hashlock commitments.
//!
//! A hashlock is the lowercase-hex SHA-256 digest a claimant must open by
//! presenting the matching preimage. The digest algorithm is fixed: any
//! divergence breaks cross-implementation compatibility.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::constants::HASHLOCK_HEX_LEN;
use crate::error::OpenswapError;

/// A 64-hex-character SHA-256 commitment, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hashlock(String);

impl Hashlock {
    /// Parse a hashlock. Hex case is normalized to lowercase so that
    /// comparison against computed digests is exact string equality.
    pub fn parse(s: impl Into<String>) -> Result<Self, OpenswapError> {
        let s = s.into();
        if s.len() != HASHLOCK_HEX_LEN || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(OpenswapError::SchemaViolation {
                field: "hashlock".to_string(),
                expected: format!("{HASHLOCK_HEX_LEN} hex characters"),
                actual: s,
            });
        }
        Ok(Self(s.to_ascii_lowercase()))
    }

    /// Commitment for a preimage: lowercase hex SHA-256 of its UTF-8 bytes.
    #[must_use]
    pub fn of_preimage(preimage: &str) -> Self {
        Self(Self::digest(preimage))
    }

    /// Lowercase hex SHA-256 of a preimage's UTF-8 bytes.
    #[must_use]
    pub fn digest(preimage: &str) -> String {
        hex::encode(Sha256::digest(preimage.as_bytes()))
    }

    /// Whether the preimage opens this commitment.
    #[must_use]
    pub fn matches(&self, preimage: &str) -> bool {
        Self::digest(preimage) == self.0
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Hashlock {
    type Error = OpenswapError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<Hashlock> for String {
    fn from(hashlock: Hashlock) -> Self {
        hashlock.0
    }
}

impl fmt::Display for Hashlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
