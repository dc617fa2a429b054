//! Reviews attached to marketplace listings.

use super::{CatalogDomainError, Rating, timestamp};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Unvalidated review payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReviewDraft {
    /// Username or display name of the reviewer.
    pub reviewer: String,
    /// Star rating.
    pub rating: f64,
    /// Optional review text.
    #[serde(default)]
    pub comment: String,
    /// Creation timestamp; defaults to the validation clock when absent.
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ReviewDraft {
    /// Creates a draft with an empty comment.
    #[must_use]
    pub fn new(reviewer: impl Into<String>, rating: f64) -> Self {
        Self {
            reviewer: reviewer.into(),
            rating,
            comment: String::new(),
            created_at: None,
        }
    }

    /// Sets the review text.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

/// One reviewer's rating and comment for a listing. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentReview {
    reviewer: String,
    rating: Rating,
    comment: String,
    created_at: DateTime<Utc>,
}

impl AgentReview {
    /// Validates a draft and builds a review.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError::ReviewRatingOutOfRange`] when the rating
    /// is outside `[0.0, 5.0]`.
    pub fn from_draft(draft: ReviewDraft, clock: &impl Clock) -> Result<Self, CatalogDomainError> {
        let ReviewDraft {
            reviewer,
            rating,
            comment,
            created_at,
        } = draft;
        let validated_rating =
            Rating::new(rating).ok_or(CatalogDomainError::ReviewRatingOutOfRange(rating))?;
        Ok(Self {
            reviewer,
            rating: validated_rating,
            comment,
            created_at: created_at.unwrap_or_else(|| clock.utc()),
        })
    }

    /// Returns the reviewer name.
    #[must_use]
    pub fn reviewer(&self) -> &str {
        &self.reviewer
    }

    /// Returns the review rating.
    #[must_use]
    pub const fn rating(&self) -> Rating {
        self.rating
    }

    /// Returns the review text, empty when none was given.
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
