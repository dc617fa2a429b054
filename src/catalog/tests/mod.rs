//! Unit tests for the catalog module.


use crate::catalog::domain::{AgentListing, ListingDraft, Rating};
use mockable::DefaultClock;

/// Tolerance for comparing rounded ratings.
const EPSILON: f64 = 1e-9;

fn assert_rating(actual: Rating, expected: f64) {
    assert!(
        (actual.value() - expected).abs() < EPSILON,
        "expected rating {expected}, got {actual}"
    );
}

fn draft(agent_id: &str, rating: f64, downloads: u64) -> ListingDraft {
    ListingDraft::new(
        agent_id,
        format!("{agent_id} agent"),
        format!("Listing for {agent_id}"),
        "Test Author",
        "MIT",
        format!("pip install {agent_id}"),
    )
    .with_rating(rating)
    .with_downloads(downloads)
}

fn listing(agent_id: &str, rating: f64, downloads: u64) -> AgentListing {
    AgentListing::from_draft(draft(agent_id, rating, downloads), &DefaultClock)
        .expect("test listing should be valid")
}

fn code_review_listing() -> AgentListing {
    let draft = ListingDraft::new(
        "code-review-v1",
        "Code Review Agent",
        "Automated code review with security and style checks.",
        "Test Author",
        "Apache-2.0",
        "pip install code-review-agent",
    )
    .with_version("1.2.0")
    .with_capabilities(["code-review", "linting", "suggestions"])
    .with_tags(["code", "review", "automation"])
    .with_downloads(1_500)
    .with_rating(4.2);
    AgentListing::from_draft(draft, &DefaultClock).expect("code review listing should be valid")
}

fn doc_writer_listing() -> AgentListing {
    let draft = ListingDraft::new(
        "doc-writer-v1",
        "Documentation Writer",
        "Generates project documentation from source comments.",
        "Docs Team",
        "MIT",
        "pip install doc-writer-agent",
    )
    .with_capabilities(["documentation", "markdown"])
    .with_tags(["docs", "writing"])
    .with_downloads(800)
    .with_rating(3.8);
    AgentListing::from_draft(draft, &DefaultClock).expect("doc writer listing should be valid")
}
