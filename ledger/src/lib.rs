//! Balance ledger with a contract-held escrow pool.
//!
//! The ledger is the external collaborator the registry uses for funds:
//! it debits a creator's balance into escrow when a proposal is created
//! and credits a reviewer's balance when the bounty is released.
//! Only `deposit` mints — lock and release conserve total supply.

pub mod error;
pub mod ledger;

pub use error::LedgerError;
pub use ledger::Ledger;
