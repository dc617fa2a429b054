//! Application services for the agent marketplace.

mod marketplace;

pub use marketplace::{MarketplaceService, MarketplaceServiceError, MarketplaceServiceResult};
