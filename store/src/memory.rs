//! Thread-safe in-memory storage backend.

use crate::registry::RegistryStore;
use crate::StoreError;
use rfcmon_types::{ProposalId, ReviewId};
use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory registry store for testing and embedding.
pub struct MemoryStore {
    proposals: Mutex<HashMap<ProposalId, Vec<u8>>>,
    reviews: Mutex<HashMap<ReviewId, Vec<u8>>>,
    meta: Mutex<HashMap<Vec<u8>, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            proposals: Mutex::new(HashMap::new()),
            reviews: Mutex::new(HashMap::new()),
            meta: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryStore for MemoryStore {
    fn put_proposal(&self, id: ProposalId, data: &[u8]) -> Result<(), StoreError> {
        self.proposals.lock().unwrap().insert(id, data.to_vec());
        Ok(())
    }

    fn get_proposal(&self, id: ProposalId) -> Result<Vec<u8>, StoreError> {
        self.proposals
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("proposal {id}")))
    }

    fn iter_proposals(&self) -> Result<Vec<(ProposalId, Vec<u8>)>, StoreError> {
        Ok(self
            .proposals
            .lock()
            .unwrap()
            .iter()
            .map(|(id, data)| (*id, data.clone()))
            .collect())
    }

    fn put_review(&self, id: ReviewId, data: &[u8]) -> Result<(), StoreError> {
        self.reviews.lock().unwrap().insert(id, data.to_vec());
        Ok(())
    }

    fn iter_reviews(&self) -> Result<Vec<(ReviewId, Vec<u8>)>, StoreError> {
        Ok(self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .map(|(id, data)| (*id, data.clone()))
            .collect())
    }

    fn put_meta(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.meta
            .lock()
            .unwrap()
            .insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn get_meta(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.meta.lock().unwrap().get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_get_proposal() {
        let store = MemoryStore::new();
        store.put_proposal(1, b"proposal_data").unwrap();
        assert_eq!(store.get_proposal(1).unwrap(), b"proposal_data");
    }

    #[test]
    fn missing_proposal_is_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.get_proposal(42).unwrap_err(),
            StoreError::NotFound(_)
        ));
    }

    #[test]
    fn iter_returns_all_reviews() {
        let store = MemoryStore::new();
        store.put_review(1, b"a").unwrap();
        store.put_review(2, b"b").unwrap();
        let mut reviews = store.iter_reviews().unwrap();
        reviews.sort_by_key(|(id, _)| *id);
        assert_eq!(reviews, vec![(1, b"a".to_vec()), (2, b"b".to_vec())]);
    }

    #[test]
    fn meta_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.get_meta(b"next_proposal_id").unwrap().is_none());
        store.put_meta(b"next_proposal_id", &7u64.to_be_bytes()).unwrap();
        let bytes = store.get_meta(b"next_proposal_id").unwrap().unwrap();
        assert_eq!(bytes, 7u64.to_be_bytes());
    }
}
