//! System-wide constants for the OpenSwap engine.

/// Smallest-unit scale of the base currency: 10^8 units per coin.
pub const FIXED_POINT: u128 = 100_000_000;

/// Fee charged for a Lock transaction (one-tenth of a coin).
pub const LOCK_FEE: u128 = FIXED_POINT / 10;

/// Fee carried by a Claim transaction (one-tenth of a coin).
pub const CLAIM_FEE: u128 = FIXED_POINT / 10;

/// Fee carried by a Refund transaction (one-tenth of a coin).
pub const REFUND_FEE: u128 = FIXED_POINT / 10;

/// Wire type code of a Lock transaction. Stable for wire compatibility.
pub const TYPE_LOCK: u8 = 8;

/// Wire type code of a Claim transaction. Stable for wire compatibility.
pub const TYPE_CLAIM: u8 = 9;

/// Wire type code of a Refund transaction. Stable for wire compatibility.
pub const TYPE_REFUND: u8 = 10;

/// Exact hex length of a hashlock digest (SHA-256, hex-encoded).
pub const HASHLOCK_HEX_LEN: usize = 64;

/// Minimum preimage length in characters.
pub const MIN_PREIMAGE_LEN: usize = 1;

/// Maximum preimage length in characters.
pub const MAX_PREIMAGE_LEN: usize = 64;

/// Maximum total length of an address (up to 20 digits plus the `L` suffix).
pub const MAX_ADDRESS_LEN: usize = 21;

/// Default cap on pending locks held by a single account.
pub const DEFAULT_MAX_PENDING_LOCKS: usize = 10_000;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "OpenSwap";
