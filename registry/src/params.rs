//! Registry validation parameters.
//!
//! Field bounds follow the Clarity string shapes the contract interface
//! exposes: a short ASCII title and longer UTF-8 description/content.

use serde::{Deserialize, Serialize};

/// Bounds applied when validating proposals and reviews.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryParams {
    /// Maximum title length in bytes (ASCII only).
    pub max_title_len: usize,
    /// Maximum description length in characters.
    pub max_description_len: usize,
    /// Maximum review content length in characters.
    pub max_content_len: usize,
    /// Lowest accepted review score (inclusive).
    pub min_score: u8,
    /// Highest accepted review score (inclusive).
    pub max_score: u8,
}

impl RegistryParams {
    /// The standard bounds: `string-ascii 64` titles, `string-utf8 256`
    /// descriptions and content, scores on a 1–10 scale.
    pub fn standard() -> Self {
        Self {
            max_title_len: 64,
            max_description_len: 256,
            max_content_len: 256,
            min_score: 1,
            max_score: 10,
        }
    }
}

impl Default for RegistryParams {
    fn default() -> Self {
        Self::standard()
    }
}
