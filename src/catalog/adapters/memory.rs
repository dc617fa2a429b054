//! Thread-safe in-memory catalog store.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::catalog::{
    domain::{
        AgentId, AgentListing, AgentReview, Rating, SearchFilter, rank_by_downloads,
        rank_by_rating,
    },
    ports::{AgentCatalog, CatalogError, CatalogResult},
};

/// In-memory catalog holding listings and review histories in two maps.
///
/// Clones share the same underlying state. Listings are kept ordered by
/// identifier, so listings with equal ranking keys come out in identifier
/// order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAgentCatalog {
    state: Arc<RwLock<CatalogState>>,
}

#[derive(Debug, Default)]
struct CatalogState {
    listings: BTreeMap<AgentId, AgentListing>,
    reviews: HashMap<AgentId, Vec<AgentReview>>,
}

impl InMemoryAgentCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of registered listings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().listings.len()
    }

    /// Returns whether no listing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().listings.is_empty()
    }

    // Critical sections never leave the maps half-updated, so a poisoned
    // lock still guards consistent state.
    fn read(&self) -> RwLockReadGuard<'_, CatalogState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CatalogState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn ranked(&self, limit: usize, rank: fn(&mut [AgentListing])) -> Vec<AgentListing> {
        if limit == 0 {
            return Vec::new();
        }
        let mut listings: Vec<AgentListing> = self.read().listings.values().cloned().collect();
        rank(&mut listings);
        listings.truncate(limit);
        listings
    }
}

impl AgentCatalog for InMemoryAgentCatalog {
    fn register(&self, listing: AgentListing) {
        let mut state = self.write();
        state.listings.insert(listing.agent_id().clone(), listing);
    }

    fn get(&self, agent_id: &AgentId) -> CatalogResult<AgentListing> {
        self.read()
            .listings
            .get(agent_id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(agent_id.clone()))
    }

    fn search(&self, filter: &SearchFilter) -> Vec<AgentListing> {
        let mut matches: Vec<AgentListing> = self
            .read()
            .listings
            .values()
            .filter(|listing| filter.matches(listing))
            .cloned()
            .collect();
        rank_by_rating(&mut matches);
        matches
    }

    fn add_review(&self, agent_id: &AgentId, review: AgentReview) -> CatalogResult<AgentListing> {
        let mut state = self.write();
        if !state.listings.contains_key(agent_id) {
            return Err(CatalogError::NotFound(agent_id.clone()));
        }

        let history = state.reviews.entry(agent_id.clone()).or_default();
        history.push(review);
        let mean = Rating::mean_of(history.iter().map(AgentReview::rating))
            .unwrap_or(Rating::ZERO);

        let listing = state
            .listings
            .get_mut(agent_id)
            .ok_or_else(|| CatalogError::NotFound(agent_id.clone()))?;
        *listing = listing.with_rating(mean);
        Ok(listing.clone())
    }

    fn top_rated(&self, limit: usize) -> Vec<AgentListing> {
        self.ranked(limit, rank_by_rating)
    }

    fn trending(&self, limit: usize) -> Vec<AgentListing> {
        self.ranked(limit, rank_by_downloads)
    }

    fn get_reviews(&self, agent_id: &AgentId) -> Vec<AgentReview> {
        self.read()
            .reviews
            .get(agent_id)
            .cloned()
            .unwrap_or_default()
    }
}
