//! Sequential record identifiers.
//!
//! Both sequences start at 1 and increase monotonically. Proposal ids and
//! review ids are allocated from independent counters.

/// Unique identifier for a proposal.
pub type ProposalId = u64;

/// Unique identifier for a review.
pub type ReviewId = u64;
