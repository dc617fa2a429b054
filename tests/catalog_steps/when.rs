//! When steps for marketplace catalog BDD scenarios.

use super::world::{CatalogWorld, build_draft};
use agentmarket::catalog::domain::{ReviewDraft, SearchFilter};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#"the listing "{agent_id}" rated {rating} with {downloads} downloads is published"#)]
fn publish_listing(
    world: &mut CatalogWorld,
    agent_id: String,
    rating: f64,
    downloads: u64,
) -> Result<(), eyre::Report> {
    world
        .marketplace
        .publish(build_draft(&agent_id, rating, downloads))
        .wrap_err("publish listing")?;
    Ok(())
}

#[when(r#""{reviewer}" reviews "{agent_id}" with rating {rating}"#)]
fn submit_review(world: &mut CatalogWorld, reviewer: String, agent_id: String, rating: f64) {
    let result = world
        .marketplace
        .submit_review(&agent_id, ReviewDraft::new(reviewer, rating));
    world.last_review_result = Some(result);
}

#[when(r#"searching for capability "{capability}" rated at least {min_rating}"#)]
fn search_by_capability(
    world: &mut CatalogWorld,
    capability: String,
    min_rating: f64,
) -> Result<(), eyre::Report> {
    let filter = SearchFilter::new()
        .with_capabilities([capability])
        .with_min_rating(min_rating)
        .wrap_err("build search filter")?;
    world.last_search = Some(world.marketplace.search(&filter));
    Ok(())
}
