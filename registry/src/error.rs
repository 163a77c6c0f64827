//! Registry-specific errors.

use rfcmon_types::{Principal, ProposalId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("title is {len} bytes, limit is {max}")]
    TitleTooLong { len: usize, max: usize },

    #[error("title must be ASCII")]
    TitleNotAscii,

    #[error("description is {len} characters, limit is {max}")]
    DescriptionTooLong { len: usize, max: usize },

    #[error("review content is {len} characters, limit is {max}")]
    ContentTooLong { len: usize, max: usize },

    #[error("score {score} is outside the {min}..={max} scale")]
    ScoreOutOfRange { score: u8, min: u8, max: u8 },

    #[error("proposal {0} not found")]
    ProposalNotFound(ProposalId),

    #[error("proposal {0} has no reviews to settle")]
    NoReviews(ProposalId),

    #[error("proposal {0} is already completed")]
    ProposalCompleted(ProposalId),

    #[error("caller {caller} is not the creator of proposal {proposal}")]
    NotCreator {
        proposal: ProposalId,
        caller: Principal,
    },

    #[error("id space exhausted")]
    IdOverflow,

    #[error("ledger error: {0}")]
    Ledger(#[from] rfcmon_ledger::LedgerError),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}
