//! Proposals and their lifecycle.

use rfcmon_types::{Amount, Principal, ProposalId};
use serde::{Deserialize, Serialize};

/// The lifecycle of a proposal. Strictly forward: a proposal never
/// regresses to an earlier status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalStatus {
    /// Created, no reviews submitted yet.
    Open,
    /// At least one review has been submitted.
    UnderReview,
    /// A review was settled and the bounty released.
    Completed,
}

/// A proposal under RFC monitoring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    /// Sequential id, assigned from 1, never reused.
    pub id: ProposalId,
    /// Short ASCII title.
    pub title: String,
    /// Longer UTF-8 description.
    pub description: String,
    /// The escrowed reward. Immutable once set.
    pub bounty: Amount,
    /// Who created the proposal. Only the creator may complete a review.
    pub creator: Principal,
    /// Current lifecycle status.
    pub status: ProposalStatus,
}

impl Proposal {
    pub fn is_completed(&self) -> bool {
        self.status == ProposalStatus::Completed
    }
}
