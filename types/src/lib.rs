//! Fundamental types for the RFC monitoring registry.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: principals, token amounts, and record identifiers.

pub mod amount;
pub mod id;
pub mod principal;

pub use amount::Amount;
pub use id::{ProposalId, ReviewId};
pub use principal::Principal;
