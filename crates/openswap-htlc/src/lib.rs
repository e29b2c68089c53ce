//! # openswap-htlc
//!
//! **Conditional-transfer core**: the three state-transition rules of the
//! hash time-locked balance protocol, applied against a caller-supplied
//! ledger snapshot.
//!
//! ## Architecture
//!
//! 1. **schema**: typed parsing of the wire shapes into validated assets
//! 2. **lock / claim / refund**: one handler module per transaction kind
//! 3. **`HtlcProcessor`**: dispatches prepare / validate / apply / undo
//!    over the asset variant
//!
//! ## Transaction Flow
//!
//! ```text
//! wire JSON → schema::parse_transaction → HtlcProcessor::prepare
//!           → caller batch-loads the Prefetch → HtlcProcessor::apply
//! ```
//!
//! Application is synchronous and deterministic: identical snapshot plus
//! identical payload always yields the identical mutation or error list.
//! Any non-empty error list means the ledger was not touched.

pub mod claim;
pub mod lock;
pub mod processor;
pub mod refund;
pub mod schema;

pub use processor::HtlcProcessor;
pub use schema::{parse_asset, parse_transaction};
