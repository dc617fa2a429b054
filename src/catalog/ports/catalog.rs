//! Catalog store port: registration, lookup, search, reviews and rankings.

use crate::catalog::domain::{AgentId, AgentListing, AgentReview, SearchFilter};
use thiserror::Error;

/// Result type for catalog operations that can fail.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Authoritative registry of listings and their review histories.
///
/// Listings and reviews are keyed independently by [`AgentId`]: replacing a
/// listing never clears its reviews. All operations are in-memory
/// computations; only lookups of a specific identifier can fail.
pub trait AgentCatalog: Send + Sync {
    /// Inserts `listing`, replacing any listing with the same identifier in
    /// full.
    fn register(&self, listing: AgentListing);

    /// Returns the listing stored under `agent_id`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no listing has that identifier.
    fn get(&self, agent_id: &AgentId) -> CatalogResult<AgentListing>;

    /// Returns every listing matching `filter`, highest rated first.
    fn search(&self, filter: &SearchFilter) -> Vec<AgentListing>;

    /// Appends `review` to the listing's history and recomputes its rating as
    /// the rounded mean of every review recorded for it.
    ///
    /// Returns the updated listing.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no listing has that identifier;
    /// nothing is recorded in that case.
    fn add_review(&self, agent_id: &AgentId, review: AgentReview) -> CatalogResult<AgentListing>;

    /// Returns up to `limit` listings, highest rated first.
    fn top_rated(&self, limit: usize) -> Vec<AgentListing>;

    /// Returns up to `limit` listings, most downloaded first.
    fn trending(&self, limit: usize) -> Vec<AgentListing>;

    /// Returns the review history for `agent_id` in submission order, empty
    /// when none exists.
    fn get_reviews(&self, agent_id: &AgentId) -> Vec<AgentReview>;
}

/// Errors returned by catalog implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No listing is registered under the identifier.
    #[error("agent '{0}' not found")]
    NotFound(AgentId),
}
