//! The proposal registry — the RFC monitoring state machine.
//!
//! Principals create proposals with an escrowed bounty, other principals
//! submit scored reviews, and the proposal creator settles a review,
//! releasing the bounty to the reviewer.
//!
//! This crate handles:
//! - Monotonic id allocation (independent proposal and review sequences)
//! - The three entry points: create, submit, complete
//! - The forward-only proposal lifecycle: Open → UnderReview → Completed
//! - Persistence to a [`rfcmon_store::RegistryStore`]

pub mod engine;
pub mod error;
pub mod params;
pub mod proposal;
pub mod review;

pub use engine::RegistryEngine;
pub use error::RegistryError;
pub use params::RegistryParams;
pub use proposal::{Proposal, ProposalStatus};
pub use review::Review;
