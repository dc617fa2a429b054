//! Conjunctive search filter over listings.

use super::{AgentListing, CatalogDomainError, Rating};

/// Optional conjunction of listing predicates.
///
/// Each constraint is independently optional and an absent constraint matches
/// everything. A present but empty capability or tag list also matches every
/// listing, since "every required item is declared" holds vacuously over zero
/// items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilter {
    query: Option<String>,
    capabilities: Option<Vec<String>>,
    min_rating: Option<Rating>,
    tags: Option<Vec<String>>,
}

impl SearchFilter {
    /// Creates a filter with no constraints.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires `query` to appear, case-insensitively, in the listing name or
    /// description.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Requires every capability in `capabilities` to be declared by the
    /// listing.
    #[must_use]
    pub fn with_capabilities<I, S>(mut self, capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.capabilities = Some(capabilities.into_iter().map(Into::into).collect());
        self
    }

    /// Requires every tag in `tags` to be declared by the listing.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Requires the listing rating to be at least `min_rating`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError::MinRatingOutOfRange`] when the threshold
    /// is outside `[0.0, 5.0]`.
    pub fn with_min_rating(mut self, min_rating: f64) -> Result<Self, CatalogDomainError> {
        let threshold =
            Rating::new(min_rating).ok_or(CatalogDomainError::MinRatingOutOfRange(min_rating))?;
        self.min_rating = Some(threshold);
        Ok(self)
    }

    /// Returns the text query, if any.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns the required capabilities, if constrained.
    #[must_use]
    pub fn capabilities(&self) -> Option<&[String]> {
        self.capabilities.as_deref()
    }

    /// Returns the minimum rating, if constrained.
    #[must_use]
    pub const fn min_rating(&self) -> Option<Rating> {
        self.min_rating
    }

    /// Returns the required tags, if constrained.
    #[must_use]
    pub fn tags(&self) -> Option<&[String]> {
        self.tags.as_deref()
    }

    /// Returns whether `listing` satisfies every present constraint.
    #[must_use]
    pub fn matches(&self, listing: &AgentListing) -> bool {
        self.matches_query(listing)
            && self
                .capabilities()
                .is_none_or(|required| declares_all(listing.capabilities(), required))
            && self
                .min_rating
                .is_none_or(|threshold| listing.rating() >= threshold)
            && self
                .tags()
                .is_none_or(|required| declares_all(listing.tags(), required))
    }

    fn matches_query(&self, listing: &AgentListing) -> bool {
        self.query().is_none_or(|query| {
            let needle = query.to_lowercase();
            listing.name().to_lowercase().contains(&needle)
                || listing.description().to_lowercase().contains(&needle)
        })
    }
}

fn declares_all(declared: &[String], required: &[String]) -> bool {
    required.iter().all(|item| declared.contains(item))
}
