//! Contract call representation — operation name plus typed arguments.

use rfcmon_types::{Amount, ProposalId};
use serde::{Deserialize, Serialize};

/// The three callable registry operations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractCall {
    CreateProposal {
        title: String,
        description: String,
        bounty: Amount,
    },
    SubmitReview {
        proposal_id: ProposalId,
        content: String,
        score: u8,
    },
    CompleteReview {
        proposal_id: ProposalId,
    },
}

impl ContractCall {
    /// The contract-facing operation name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateProposal { .. } => "create-proposal",
            Self::SubmitReview { .. } => "submit-review",
            Self::CompleteReview { .. } => "complete-review",
        }
    }
}
