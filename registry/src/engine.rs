//! Core registry engine — allocates ids, validates input, drives the
//! proposal lifecycle, and settles bounties through the ledger.

use crate::error::RegistryError;
use crate::params::RegistryParams;
use crate::proposal::{Proposal, ProposalStatus};
use crate::review::Review;
use rfcmon_ledger::Ledger;
use rfcmon_types::{Amount, Principal, ProposalId, ReviewId};
use std::collections::HashMap;

/// The proposal registry.
///
/// Each entry point is a serialized, atomic state transition: every
/// precondition (including the ledger transfer) is checked before the
/// first write, so a failed call leaves the registry and ledger
/// untouched. Counters are owned exclusively by the engine and only
/// advance on success.
pub struct RegistryEngine {
    params: RegistryParams,
    next_proposal_id: ProposalId,
    next_review_id: ReviewId,
    proposals: HashMap<ProposalId, Proposal>,
    reviews: HashMap<ReviewId, Review>,
}

impl RegistryEngine {
    pub fn new() -> Self {
        Self::with_params(RegistryParams::standard())
    }

    /// Create an engine with explicit validation bounds.
    pub fn with_params(params: RegistryParams) -> Self {
        Self {
            params,
            next_proposal_id: 1,
            next_review_id: 1,
            proposals: HashMap::new(),
            reviews: HashMap::new(),
        }
    }

    pub fn params(&self) -> &RegistryParams {
        &self.params
    }

    /// Create a new proposal, escrowing `bounty` from the caller.
    ///
    /// Returns the allocated proposal id (sequential from 1).
    pub fn create_proposal(
        &mut self,
        caller: &Principal,
        title: &str,
        description: &str,
        bounty: Amount,
        ledger: &mut Ledger,
    ) -> Result<ProposalId, RegistryError> {
        if !title.is_ascii() {
            return Err(RegistryError::TitleNotAscii);
        }
        if title.len() > self.params.max_title_len {
            return Err(RegistryError::TitleTooLong {
                len: title.len(),
                max: self.params.max_title_len,
            });
        }
        let description_len = description.chars().count();
        if description_len > self.params.max_description_len {
            return Err(RegistryError::DescriptionTooLong {
                len: description_len,
                max: self.params.max_description_len,
            });
        }

        let id = self.next_proposal_id;
        let next = id.checked_add(1).ok_or(RegistryError::IdOverflow)?;
        ledger.escrow_lock(caller, bounty)?;
        self.proposals.insert(
            id,
            Proposal {
                id,
                title: title.to_string(),
                description: description.to_string(),
                bounty,
                creator: caller.clone(),
                status: ProposalStatus::Open,
            },
        );
        self.next_proposal_id = next;
        tracing::info!(proposal = id, creator = %caller, bounty = %bounty, "proposal created");
        Ok(id)
    }

    /// Submit a review against an existing proposal.
    ///
    /// Returns the allocated review id (a global sequence independent of
    /// proposal numbering). Advances the proposal from `Open` to
    /// `UnderReview` on the first review.
    pub fn submit_review(
        &mut self,
        caller: &Principal,
        proposal_id: ProposalId,
        content: &str,
        score: u8,
    ) -> Result<ReviewId, RegistryError> {
        let proposal = self
            .proposals
            .get(&proposal_id)
            .ok_or(RegistryError::ProposalNotFound(proposal_id))?;
        if proposal.is_completed() {
            return Err(RegistryError::ProposalCompleted(proposal_id));
        }
        if score < self.params.min_score || score > self.params.max_score {
            return Err(RegistryError::ScoreOutOfRange {
                score,
                min: self.params.min_score,
                max: self.params.max_score,
            });
        }
        let content_len = content.chars().count();
        if content_len > self.params.max_content_len {
            return Err(RegistryError::ContentTooLong {
                len: content_len,
                max: self.params.max_content_len,
            });
        }

        let id = self.next_review_id;
        let next = id.checked_add(1).ok_or(RegistryError::IdOverflow)?;
        self.reviews.insert(
            id,
            Review {
                id,
                proposal_id,
                content: content.to_string(),
                score,
                reviewer: caller.clone(),
                completed: false,
            },
        );
        self.next_review_id = next;
        if let Some(proposal) = self.proposals.get_mut(&proposal_id) {
            if proposal.status == ProposalStatus::Open {
                proposal.status = ProposalStatus::UnderReview;
                tracing::debug!(proposal = proposal_id, "proposal moved under review");
            }
        }
        Ok(id)
    }

    /// Settle the earliest uncompleted review of a proposal.
    ///
    /// Only the proposal creator may call this. Marks the review
    /// completed, releases the escrowed bounty to its reviewer, and
    /// transitions the proposal to `Completed`.
    pub fn complete_review(
        &mut self,
        caller: &Principal,
        proposal_id: ProposalId,
        ledger: &mut Ledger,
    ) -> Result<(), RegistryError> {
        let proposal = self
            .proposals
            .get(&proposal_id)
            .ok_or(RegistryError::ProposalNotFound(proposal_id))?;
        if proposal.creator != *caller {
            return Err(RegistryError::NotCreator {
                proposal: proposal_id,
                caller: caller.clone(),
            });
        }
        if proposal.is_completed() {
            return Err(RegistryError::ProposalCompleted(proposal_id));
        }
        let bounty = proposal.bounty;
        let review_id = self
            .reviews
            .values()
            .filter(|r| r.proposal_id == proposal_id && !r.completed)
            .map(|r| r.id)
            .min()
            .ok_or(RegistryError::NoReviews(proposal_id))?;
        let reviewer = self.reviews[&review_id].reviewer.clone();

        ledger.escrow_release(&reviewer, bounty)?;
        if let Some(review) = self.reviews.get_mut(&review_id) {
            review.completed = true;
        }
        if let Some(proposal) = self.proposals.get_mut(&proposal_id) {
            proposal.status = ProposalStatus::Completed;
        }
        tracing::info!(
            proposal = proposal_id,
            review = review_id,
            reviewer = %reviewer,
            amount = %bounty,
            "bounty released"
        );
        Ok(())
    }

    /// Get a proposal by id.
    pub fn get_proposal(&self, id: ProposalId) -> Option<&Proposal> {
        self.proposals.get(&id)
    }

    /// Get a review by id.
    pub fn get_review(&self, id: ReviewId) -> Option<&Review> {
        self.reviews.get(&id)
    }

    /// All reviews referencing a proposal, ordered by review id.
    pub fn reviews_for(&self, proposal_id: ProposalId) -> Vec<&Review> {
        let mut reviews: Vec<&Review> = self
            .reviews
            .values()
            .filter(|r| r.proposal_id == proposal_id)
            .collect();
        reviews.sort_by_key(|r| r.id);
        reviews
    }

    pub fn proposal_count(&self) -> usize {
        self.proposals.len()
    }

    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }
}

impl RegistryEngine {
    /// Persist all engine state to a registry store.
    pub fn save_to_store(&self, store: &dyn rfcmon_store::RegistryStore) -> Result<(), RegistryError> {
        store
            .put_meta(b"next_proposal_id", &self.next_proposal_id.to_be_bytes())
            .map_err(|e| RegistryError::Storage(e.to_string()))?;
        store
            .put_meta(b"next_review_id", &self.next_review_id.to_be_bytes())
            .map_err(|e| RegistryError::Storage(e.to_string()))?;

        let params_bytes = bincode::serialize(&self.params)
            .map_err(|e| RegistryError::Serialization(e.to_string()))?;
        store
            .put_meta(b"params", &params_bytes)
            .map_err(|e| RegistryError::Storage(e.to_string()))?;

        for (id, proposal) in &self.proposals {
            let bytes = bincode::serialize(proposal)
                .map_err(|e| RegistryError::Serialization(e.to_string()))?;
            store
                .put_proposal(*id, &bytes)
                .map_err(|e| RegistryError::Storage(e.to_string()))?;
        }
        for (id, review) in &self.reviews {
            let bytes = bincode::serialize(review)
                .map_err(|e| RegistryError::Serialization(e.to_string()))?;
            store
                .put_review(*id, &bytes)
                .map_err(|e| RegistryError::Storage(e.to_string()))?;
        }
        Ok(())
    }

    /// Restore engine state from a registry store.
    ///
    /// An empty store yields a fresh engine with standard params.
    pub fn load_from_store(store: &dyn rfcmon_store::RegistryStore) -> Result<Self, RegistryError> {
        let next_proposal_id = match store.get_meta(b"next_proposal_id") {
            Ok(Some(bytes)) if bytes.len() >= 8 => {
                u64::from_be_bytes(bytes[..8].try_into().unwrap())
            }
            _ => 1,
        };
        let next_review_id = match store.get_meta(b"next_review_id") {
            Ok(Some(bytes)) if bytes.len() >= 8 => {
                u64::from_be_bytes(bytes[..8].try_into().unwrap())
            }
            _ => 1,
        };
        let params = match store.get_meta(b"params") {
            Ok(Some(bytes)) => bincode::deserialize(&bytes)
                .map_err(|e| RegistryError::Serialization(e.to_string()))?,
            _ => RegistryParams::standard(),
        };

        let mut proposals = HashMap::new();
        for (id, bytes) in store
            .iter_proposals()
            .map_err(|e| RegistryError::Storage(e.to_string()))?
        {
            let proposal: Proposal = bincode::deserialize(&bytes)
                .map_err(|e| RegistryError::Serialization(e.to_string()))?;
            proposals.insert(id, proposal);
        }
        let mut reviews = HashMap::new();
        for (id, bytes) in store
            .iter_reviews()
            .map_err(|e| RegistryError::Storage(e.to_string()))?
        {
            let review: Review = bincode::deserialize(&bytes)
                .map_err(|e| RegistryError::Serialization(e.to_string()))?;
            reviews.insert(id, review);
        }
        Ok(Self {
            params,
            next_proposal_id,
            next_review_id,
            proposals,
            reviews,
        })
    }
}

impl Default for RegistryEngine {
    fn default() -> Self {
        Self::new()
    }
}
