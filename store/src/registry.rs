//! Registry storage trait.

use crate::StoreError;
use rfcmon_types::{ProposalId, ReviewId};

/// Trait for storing registry state (proposals, reviews, counters).
///
/// Records are stored as opaque bytes; the registry owns the encoding.
pub trait RegistryStore {
    /// Store a proposal record.
    fn put_proposal(&self, id: ProposalId, data: &[u8]) -> Result<(), StoreError>;

    /// Get a proposal record by id.
    fn get_proposal(&self, id: ProposalId) -> Result<Vec<u8>, StoreError>;

    /// Iterate all proposal records.
    fn iter_proposals(&self) -> Result<Vec<(ProposalId, Vec<u8>)>, StoreError>;

    /// Store a review record.
    fn put_review(&self, id: ReviewId, data: &[u8]) -> Result<(), StoreError>;

    /// Iterate all review records.
    fn iter_reviews(&self) -> Result<Vec<(ReviewId, Vec<u8>)>, StoreError>;

    /// Store a metadata value (counters, params).
    fn put_meta(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;

    /// Retrieve a metadata value.
    fn get_meta(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;
}
