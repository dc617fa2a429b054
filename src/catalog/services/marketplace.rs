//! Service layer for publishing, reviewing and discovering agents.
//!
//! Provides [`MarketplaceService`], the boundary between transport adapters
//! (HTTP handlers, CLI commands) and the catalog store. The service turns raw
//! drafts into validated domain values, stamps timestamps from its clock and
//! logs every mutation.

use crate::catalog::{
    domain::{
        AgentId, AgentListing, AgentReview, CatalogDomainError, ListingDraft, ReviewDraft,
        SearchFilter,
    },
    ports::{AgentCatalog, CatalogError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for marketplace operations.
#[derive(Debug, Error)]
pub enum MarketplaceServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] CatalogDomainError),
    /// The catalog rejected the operation.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl MarketplaceServiceError {
    /// Returns whether the error reports a missing listing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Catalog(CatalogError::NotFound(_)))
    }
}

/// Result type for marketplace service operations.
pub type MarketplaceServiceResult<T> = Result<T, MarketplaceServiceError>;

/// Marketplace orchestration service.
pub struct MarketplaceService<C, K>
where
    C: AgentCatalog,
    K: Clock + Send + Sync,
{
    catalog: Arc<C>,
    clock: Arc<K>,
}

impl<C, K> Clone for MarketplaceService<C, K>
where
    C: AgentCatalog,
    K: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C, K> MarketplaceService<C, K>
where
    C: AgentCatalog,
    K: Clock + Send + Sync,
{
    /// Creates a new marketplace service.
    #[must_use]
    pub const fn new(catalog: Arc<C>, clock: Arc<K>) -> Self {
        Self { catalog, clock }
    }

    /// Returns the underlying catalog store.
    #[must_use]
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Validates and registers a listing, replacing any listing with the same
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceServiceError::Validation`] when the draft fails
    /// validation; nothing is registered in that case.
    pub fn publish(&self, draft: ListingDraft) -> MarketplaceServiceResult<AgentListing> {
        let listing = AgentListing::from_draft(draft, &*self.clock).inspect_err(|err| {
            warn!(error = %err, "rejected listing");
        })?;
        self.catalog.register(listing.clone());
        info!(
            agent_id = %listing.agent_id(),
            version = listing.version(),
            "published listing"
        );
        Ok(listing)
    }

    /// Returns the listing with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceServiceError::Catalog`] when no listing exists.
    pub fn get(&self, agent_id: &str) -> MarketplaceServiceResult<AgentListing> {
        Ok(self.catalog.get(&AgentId::new(agent_id))?)
    }

    /// Returns listings matching `filter`, highest rated first.
    #[must_use]
    pub fn search(&self, filter: &SearchFilter) -> Vec<AgentListing> {
        let results = self.catalog.search(filter);
        debug!(?filter, matches = results.len(), "searched catalog");
        results
    }

    /// Validates a review and attaches it to a listing, recomputing the
    /// listing rating.
    ///
    /// The review is validated before the listing is looked up.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceServiceError::Validation`] when the review fails
    /// validation, or [`MarketplaceServiceError::Catalog`] when
    /// no listing exists. Nothing is recorded on failure.
    pub fn submit_review(
        &self,
        agent_id: &str,
        draft: ReviewDraft,
    ) -> MarketplaceServiceResult<AgentReview> {
        let id = AgentId::new(agent_id);
        let review = AgentReview::from_draft(draft, &*self.clock)?;
        let updated = self
            .catalog
            .add_review(&id, review.clone())
            .inspect_err(|err| warn!(error = %err, "rejected review"))?;
        info!(
            agent_id = %id,
            reviewer = review.reviewer(),
            rating = %updated.rating(),
            "recorded review"
        );
        Ok(review)
    }

    /// Returns the review history for a listing, empty when none exists.
    #[must_use]
    pub fn reviews(&self, agent_id: &str) -> Vec<AgentReview> {
        self.catalog.get_reviews(&AgentId::new(agent_id))
    }

    /// Returns up to `limit` listings, highest rated first.
    #[must_use]
    pub fn top_rated(&self, limit: usize) -> Vec<AgentListing> {
        self.catalog.top_rated(limit)
    }

    /// Returns up to `limit` listings, most downloaded first.
    #[must_use]
    pub fn trending(&self, limit: usize) -> Vec<AgentListing> {
        self.catalog.trending(limit)
    }
}
