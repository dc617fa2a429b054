//! Shared world state for marketplace catalog BDD scenarios.

use agentmarket::Marketplace;
use agentmarket::catalog::domain::{AgentListing, AgentReview, ListingDraft};
use agentmarket::catalog::services::MarketplaceServiceError;
use rstest::fixture;

/// Scenario world for catalog behaviour tests.
pub struct CatalogWorld {
    /// The marketplace under test.
    pub marketplace: Marketplace,
    /// Result of the last review submission.
    pub last_review_result: Option<Result<AgentReview, MarketplaceServiceError>>,
    /// Listings returned by the last search.
    pub last_search: Option<Vec<AgentListing>>,
}

impl CatalogWorld {
    /// Creates a world over an empty marketplace.
    #[must_use]
    pub fn new() -> Self {
        Self {
            marketplace: agentmarket::in_memory_marketplace(),
            last_review_result: None,
            last_search: None,
        }
    }
}

impl Default for CatalogWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> CatalogWorld {
    CatalogWorld::default()
}

/// Builds a draft with placeholder text fields.
pub fn build_draft(agent_id: &str, rating: f64, downloads: u64) -> ListingDraft {
    ListingDraft::new(
        agent_id,
        agent_id,
        format!("Scenario listing {agent_id}"),
        "Scenario Author",
        "MIT",
        format!("pip install {agent_id}"),
    )
    .with_rating(rating)
    .with_downloads(downloads)
}

/// Five listings with distinct ratings, download counts and capabilities.
pub fn sample_drafts() -> Vec<ListingDraft> {
    vec![
        build_draft("code-review-agent-v2", 4.7, 8_450)
            .with_capabilities(["code_review", "security_analysis"]),
        build_draft("invoice-parser-v3", 4.5, 12_200)
            .with_capabilities(["pdf_parsing", "ocr", "structured_output"]),
        build_draft("sql-query-agent-v1", 4.3, 5_800).with_capabilities(["text_to_sql"]),
        build_draft("doc-summarizer-v1", 4.1, 980)
            .with_capabilities(["document_summarization", "structured_output"]),
        build_draft("web-scraper-v2", 4.6, 15_600)
            .with_capabilities(["web_scraping", "structured_output"]),
    ]
}

/// Splits a comma-separated identifier list from a step.
pub fn split_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Extracts listing identifiers in order.
pub fn listing_ids(listings: &[AgentListing]) -> Vec<String> {
    listings
        .iter()
        .map(|listing| listing.agent_id().to_string())
        .collect()
}
