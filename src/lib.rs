//! Agentmarket: an in-memory marketplace for pre-built AI agents.
//!
//! The crate lets authors publish agent listings, lets users search them by
//! text, capability, tag and rating, attaches reviews that drive each
//! listing's rating, and ranks listings into top-rated and trending
//! leaderboards.
//!
//! # Architecture
//!
//! Agentmarket follows hexagonal architecture principles:
//!
//! - **Domain**: Listings, reviews, ratings and search filters
//! - **Ports**: The catalog store contract
//! - **Adapters**: The in-memory store, the HTTP API and the CLI
//!
//! # Modules
//!
//! - [`catalog`]: Catalog domain, store and marketplace service
//! - [`server`]: HTTP API over the marketplace service
//! - [`cli`]: Command-line front end
//! - [`telemetry`]: Tracing subscriber setup

pub mod catalog;
pub mod cli;
pub mod server;
pub mod telemetry;

use catalog::{adapters::memory::InMemoryAgentCatalog, services::MarketplaceService};
use mockable::DefaultClock;
use std::sync::Arc;

/// Marketplace service wired to the in-memory catalog and the system clock.
pub type Marketplace = MarketplaceService<InMemoryAgentCatalog, DefaultClock>;

/// Creates a marketplace over a fresh, empty in-memory catalog.
#[must_use]
pub fn in_memory_marketplace() -> Marketplace {
    MarketplaceService::new(Arc::new(InMemoryAgentCatalog::new()), Arc::new(DefaultClock))
}
