//! Leaderboard ordering for listings.

use super::AgentListing;
use std::cmp::Reverse;

/// Number of entries returned by leaderboards when the caller gives no limit.
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 10;

/// Sorts listings by rating, highest first. The sort is stable, so tied
/// listings keep their incoming order.
pub fn rank_by_rating(listings: &mut [AgentListing]) {
    listings.sort_by(|left, right| right.rating().value().total_cmp(&left.rating().value()));
}

/// Sorts listings by download count, highest first. The sort is stable.
pub fn rank_by_downloads(listings: &mut [AgentListing]) {
    listings.sort_by_key(|listing| Reverse(listing.downloads()));
}
