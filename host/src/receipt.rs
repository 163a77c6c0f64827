//! Receipts — the tagged result convention the host exposes to callers.

use rfcmon_registry::RegistryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire-level error taxonomy. Every [`RegistryError`] collapses onto
/// exactly one of these codes; the full error is logged at dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Malformed or out-of-range argument.
    InvalidInput,
    /// Referenced proposal or review is absent.
    NotFound,
    /// Caller lacks the required role.
    Unauthorized,
    /// The bounty was already released.
    AlreadyCompleted,
}

impl ErrorCode {
    /// Numeric code, as a Clarity-style `(err uN)` payload.
    pub fn as_u32(&self) -> u32 {
        match self {
            Self::InvalidInput => 1,
            Self::NotFound => 2,
            Self::Unauthorized => 3,
            Self::AlreadyCompleted => 4,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidInput => "invalid-input",
            Self::NotFound => "not-found",
            Self::Unauthorized => "unauthorized",
            Self::AlreadyCompleted => "already-completed",
        };
        write!(f, "{name}")
    }
}

impl From<&RegistryError> for ErrorCode {
    fn from(err: &RegistryError) -> Self {
        match err {
            RegistryError::TitleTooLong { .. }
            | RegistryError::TitleNotAscii
            | RegistryError::DescriptionTooLong { .. }
            | RegistryError::ContentTooLong { .. }
            | RegistryError::ScoreOutOfRange { .. }
            | RegistryError::IdOverflow
            | RegistryError::Ledger(_)
            | RegistryError::Storage(_)
            | RegistryError::Serialization(_) => Self::InvalidInput,
            RegistryError::ProposalNotFound(_) | RegistryError::NoReviews(_) => Self::NotFound,
            RegistryError::NotCreator { .. } => Self::Unauthorized,
            RegistryError::ProposalCompleted(_) => Self::AlreadyCompleted,
        }
    }
}

/// Successful return payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnValue {
    /// An allocated id (create-proposal, submit-review).
    Uint(u64),
    /// Bare success (complete-review).
    Unit,
}

/// The outcome of one applied contract call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    /// The operation that was invoked.
    pub operation: &'static str,
    /// Tagged success/failure result.
    pub result: Result<ReturnValue, ErrorCode>,
}

impl Receipt {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}
