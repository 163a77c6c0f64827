//! Simulated chain harness for the RFC monitoring registry.
//!
//! The harness plays the role of the host ledger/consensus collaborator:
//! it supplies caller identity, applies contract calls one at a time in
//! block order, and returns tagged receipts. It is a call-convention
//! simulator, not a chain — no consensus, no mining, no signatures.

pub mod call;
pub mod chain;
pub mod receipt;

pub use call::ContractCall;
pub use chain::Chain;
pub use receipt::{ErrorCode, Receipt, ReturnValue};
