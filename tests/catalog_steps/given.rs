//! Given steps for marketplace catalog BDD scenarios.

use super::world::{CatalogWorld, build_draft, sample_drafts};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("an empty marketplace")]
fn an_empty_marketplace(world: &mut CatalogWorld) -> Result<(), eyre::Report> {
    if !world.marketplace.catalog().is_empty() {
        return Err(eyre::eyre!("expected a fresh marketplace"));
    }
    Ok(())
}

#[given(r#"a published listing "{agent_id}" rated {rating} with {downloads} downloads"#)]
fn a_published_listing(
    world: &mut CatalogWorld,
    agent_id: String,
    rating: f64,
    downloads: u64,
) -> Result<(), eyre::Report> {
    world
        .marketplace
        .publish(build_draft(&agent_id, rating, downloads))
        .wrap_err("publish listing for scenario")?;
    Ok(())
}

#[given("the sample catalog")]
fn the_sample_catalog(world: &mut CatalogWorld) -> Result<(), eyre::Report> {
    for draft in sample_drafts() {
        world
            .marketplace
            .publish(draft)
            .wrap_err("publish sample listing")?;
    }
    Ok(())
}
