//! Marketplace listing aggregate and its unvalidated draft form.

use super::{AgentId, CatalogDomainError, Rating, timestamp};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Version recorded for listings published without one.
pub const DEFAULT_LISTING_VERSION: &str = "1.0.0";

fn default_version() -> String {
    DEFAULT_LISTING_VERSION.to_owned()
}

/// Unvalidated listing payload, as received from a publish request or a
/// listing file.
///
/// Optional fields carry the marketplace defaults when omitted from JSON:
/// version `1.0.0`, no capabilities or tags, zero downloads, a zero rating and
/// a creation time taken from the clock at validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListingDraft {
    /// Unique identifier for the agent.
    pub agent_id: String,
    /// Human-readable agent name.
    pub name: String,
    /// What the agent does.
    pub description: String,
    /// Version string.
    #[serde(default = "default_version")]
    pub version: String,
    /// Author or organisation name.
    pub author: String,
    /// Functional capabilities the agent provides.
    #[serde(default)]
    pub capabilities: Vec<String>,
    /// Free-form search tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Total download count.
    #[serde(default)]
    pub downloads: u64,
    /// Mean star rating at publish time.
    #[serde(default)]
    pub rating: f64,
    /// SPDX license identifier or name.
    pub license: String,
    /// Shell command that installs the agent.
    pub install_command: String,
    /// Creation timestamp; defaults to the validation clock when absent.
    /// Values without an offset are read as UTC.
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ListingDraft {
    /// Creates a draft from the required fields, leaving every optional field
    /// at its default.
    #[must_use]
    pub fn new(
        agent_id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        author: impl Into<String>,
        license: impl Into<String>,
        install_command: impl Into<String>,
    ) -> Self {
        Self {
            agent_id: agent_id.into(),
            name: name.into(),
            description: description.into(),
            version: default_version(),
            author: author.into(),
            capabilities: Vec::new(),
            tags: Vec::new(),
            downloads: 0,
            rating: 0.0,
            license: license.into(),
            install_command: install_command.into(),
            created_at: None,
        }
    }

    /// Sets the version string.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Sets the capability list.
    #[must_use]
    pub fn with_capabilities<I, S>(mut self, capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.capabilities = capabilities.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the tag list.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the download count.
    #[must_use]
    pub const fn with_downloads(mut self, downloads: u64) -> Self {
        self.downloads = downloads;
        self
    }

    /// Sets the publish-time rating.
    #[must_use]
    pub const fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Sets an explicit creation timestamp.
    #[must_use]
    pub const fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

/// A published agent's marketplace record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentListing {
    agent_id: AgentId,
    name: String,
    description: String,
    version: String,
    author: String,
    capabilities: Vec<String>,
    tags: Vec<String>,
    downloads: u64,
    rating: Rating,
    license: String,
    install_command: String,
    created_at: DateTime<Utc>,
}

impl AgentListing {
    /// Validates a draft and builds a listing.
    ///
    /// The creation timestamp is taken from `clock` unless the draft carries
    /// one.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError::ListingRatingOutOfRange`] when the
    /// rating is outside `[0.0, 5.0]`.
    pub fn from_draft(draft: ListingDraft, clock: &impl Clock) -> Result<Self, CatalogDomainError> {
        let ListingDraft {
            agent_id,
            name,
            description,
            version,
            author,
            capabilities,
            tags,
            downloads,
            rating,
            license,
            install_command,
            created_at,
        } = draft;

        let validated_rating =
            Rating::new(rating).ok_or(CatalogDomainError::ListingRatingOutOfRange(rating))?;

        Ok(Self {
            agent_id: AgentId::new(agent_id),
            name,
            description,
            version,
            author,
            capabilities,
            tags,
            downloads,
            rating: validated_rating,
            license,
            install_command,
            created_at: created_at.unwrap_or_else(|| clock.utc()),
        })
    }

    /// Returns the listing identifier.
    #[must_use]
    pub const fn agent_id(&self) -> &AgentId {
        &self.agent_id
    }

    /// Returns the human-readable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the version string.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the declared capabilities in publish order.
    #[must_use]
    pub fn capabilities(&self) -> &[String] {
        &self.capabilities
    }

    /// Returns the declared tags in publish order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the total download count.
    #[must_use]
    pub const fn downloads(&self) -> u64 {
        self.downloads
    }

    /// Returns the current rating.
    #[must_use]
    pub const fn rating(&self) -> Rating {
        self.rating
    }

    /// Returns the license identifier.
    #[must_use]
    pub fn license(&self) -> &str {
        &self.license
    }

    /// Returns the install command.
    #[must_use]
    pub fn install_command(&self) -> &str {
        &self.install_command
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns a copy of this listing carrying `rating`, every other field
    /// unchanged.
    #[must_use]
    pub fn with_rating(&self, rating: Rating) -> Self {
        Self {
            rating,
            ..self.clone()
        }
    }
}
