//! Exact smallest-unit currency amounts.
//!
//! All protocol arithmetic is unsigned integer arithmetic with explicit
//! overflow/underflow checks. Amounts cross the wire as base-10 strings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::OpenswapError;

/// An unsigned currency amount in smallest units.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Amount(u128);

impl Amount {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn new(units: u128) -> Self {
        Self(units)
    }

    #[must_use]
    pub const fn units(self) -> u128 {
        self.0
    }

    /// Parse a non-negative base-10 amount string.
    pub fn parse(s: &str) -> Result<Self, OpenswapError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(OpenswapError::SchemaViolation {
                field: "amount".to_string(),
                expected: "base-10 digit string".to_string(),
                actual: s.to_string(),
            });
        }
        s.parse::<u128>()
            .map(Self)
            .map_err(|_| OpenswapError::SchemaViolation {
                field: "amount".to_string(),
                expected: "unsigned integer within range".to_string(),
                actual: s.to_string(),
            })
    }

    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    #[must_use]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    #[must_use]
    pub fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    #[must_use]
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<u128> for Amount {
    fn from(units: u128) -> Self {
        Self(units)
    }
}

impl TryFrom<String> for Amount {
    type Error = OpenswapError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Amount> for String {
    fn from(amount: Amount) -> Self {
        amount.0.to_string()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_digit_strings() {
        assert_eq!(Amount::parse("0").unwrap(), Amount::ZERO);
        assert_eq!(Amount::parse("1000").unwrap(), Amount::new(1000));
        assert_eq!(Amount::parse("007").unwrap(), Amount::new(7));
    }

    #[test]
    fn parse_rejects_non_numeric() {
        for bad in ["", "-1", "1.5", "1e3", " 10", "abc"] {
            assert!(Amount::parse(bad).is_err(), "accepted: {bad:?}");
        }
    }

    #[test]
    fn parse_rejects_out_of_range() {
        // one more digit than u128::MAX
        let too_big = format!("{}0", u128::MAX);
        assert!(Amount::parse(&too_big).is_err());
    }

    #[test]
    fn checked_arithmetic() {
        let a = Amount::new(100);
        let b = Amount::new(40);
        assert_eq!(a.checked_add(b), Some(Amount::new(140)));
        assert_eq!(a.checked_sub(b), Some(Amount::new(60)));
        assert_eq!(b.checked_sub(a), None);
        assert_eq!(Amount::new(u128::MAX).checked_add(Amount::new(1)), None);
    }

    #[test]
    fn serde_uses_string_form() {
        let amount = Amount::new(123_456);
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"123456\"");
        let back: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(amount, back);

        let bad: Result<Amount, _> = serde_json::from_str("\"-5\"");
        assert!(bad.is_err());
    }
}
