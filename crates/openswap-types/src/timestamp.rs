//! Logical time for timelocks.
//!
//! The engine never reads a clock on its own: every apply step takes the
//! current time from the caller. [`Timestamp::now`] is a convenience for
//! callers that do live at a wall clock.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unix time in whole seconds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Default, Serialize, Deserialize,
)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// Current wall-clock time in unix seconds.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn now() -> Self {
        Self(chrono::Utc::now().timestamp().max(0) as u64)
    }

    #[must_use]
    pub fn saturating_add(self, secs: u64) -> Self {
        Self(self.0.saturating_add(secs))
    }

    #[must_use]
    pub fn saturating_sub(self, secs: u64) -> Self {
        Self(self.0.saturating_sub(secs))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_is_after_2020() {
        assert!(Timestamp::now() > Timestamp(1_577_836_800));
    }

    #[test]
    fn ordering_and_arithmetic() {
        let t = Timestamp(100);
        assert!(t < t.saturating_add(1));
        assert_eq!(t.saturating_sub(200), Timestamp(0));
    }

    #[test]
    fn serde_is_plain_integer() {
        let t = Timestamp(1_700_000_000);
        assert_eq!(serde_json::to_string(&t).unwrap(), "1700000000");
    }
}
