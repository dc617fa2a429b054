//! Validation errors raised while constructing catalog domain values.

use thiserror::Error;

/// Errors returned while constructing listings, reviews and search filters.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogDomainError {
    /// A listing rating lies outside `[0.0, 5.0]` or is not a number.
    #[error("listing rating {0} must be between 0.0 and 5.0")]
    ListingRatingOutOfRange(f64),

    /// A review rating lies outside `[0.0, 5.0]` or is not a number.
    #[error("review rating {0} must be between 0.0 and 5.0")]
    ReviewRatingOutOfRange(f64),

    /// A minimum-rating search threshold lies outside `[0.0, 5.0]`.
    #[error("min_rating {0} must be between 0.0 and 5.0")]
    MinRatingOutOfRange(f64),
}
