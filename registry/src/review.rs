//! Reviews submitted against proposals.

use rfcmon_types::{Principal, ProposalId, ReviewId};
use serde::{Deserialize, Serialize};

/// A scored review of a proposal.
///
/// Many reviews may reference one proposal; the review does not own it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Sequential id from the global review counter (independent of
    /// proposal numbering).
    pub id: ReviewId,
    /// The proposal this review targets. Must exist at submission time.
    pub proposal_id: ProposalId,
    /// UTF-8 review text.
    pub content: String,
    /// Score on the registry's closed scale.
    pub score: u8,
    /// Who submitted the review.
    pub reviewer: Principal,
    /// Whether the bounty has been released for this review.
    pub completed: bool,
}
