//! Domain model for agent marketplace listings.
//!
//! Listings, reviews and search filters are plain values. Every value that
//! reaches the catalog store has already passed through a validated
//! constructor, so the store itself never re-checks field ranges.

mod error;
mod filter;
mod ids;
mod listing;
mod ranking;
mod rating;
mod review;
mod timestamp;

pub use error::CatalogDomainError;
pub use filter::SearchFilter;
pub use ids::AgentId;
pub use listing::{AgentListing, DEFAULT_LISTING_VERSION, ListingDraft};
pub use ranking::{DEFAULT_LEADERBOARD_LIMIT, rank_by_downloads, rank_by_rating};
pub use rating::Rating;
pub use review::{AgentReview, ReviewDraft};
pub use timestamp::parse_timestamp;
