//! Then steps for marketplace catalog BDD scenarios.

use super::world::{CatalogWorld, listing_ids, split_ids};
use rstest_bdd_macros::then;

const RATING_TOLERANCE: f64 = 1e-9;

#[then(r#"the agent "{agent_id}" can be retrieved"#)]
fn agent_can_be_retrieved(world: &CatalogWorld, agent_id: String) -> Result<(), eyre::Report> {
    let listing = world
        .marketplace
        .get(&agent_id)
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?;
    if listing.agent_id().as_str() != agent_id {
        return Err(eyre::eyre!(
            "expected '{agent_id}', got '{}'",
            listing.agent_id()
        ));
    }
    Ok(())
}

#[then("the catalog holds {count:usize} listings")]
fn catalog_holds(world: &CatalogWorld, count: usize) -> Result<(), eyre::Report> {
    let held = world.marketplace.catalog().len();
    if held != count {
        return Err(eyre::eyre!("expected {count} listings, found {held}"));
    }
    Ok(())
}

#[then(r#"the agent "{agent_id}" is rated {rating}"#)]
fn agent_is_rated(world: &CatalogWorld, agent_id: String, rating: f64) -> Result<(), eyre::Report> {
    let listing = world
        .marketplace
        .get(&agent_id)
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?;
    let actual = listing.rating().value();
    if (actual - rating).abs() > RATING_TOLERANCE {
        return Err(eyre::eyre!("expected rating {rating}, found {actual}"));
    }
    Ok(())
}

#[then(r#"the agent "{agent_id}" has {count:usize} reviews"#)]
fn agent_has_reviews(
    world: &CatalogWorld,
    agent_id: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let reviews = world.marketplace.reviews(&agent_id);
    if reviews.len() != count {
        return Err(eyre::eyre!(
            "expected {count} reviews, found {}",
            reviews.len()
        ));
    }
    Ok(())
}

#[then("the last review fails because the agent was not found")]
fn last_review_not_found(world: &CatalogWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_review_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing review result in scenario world"))?;
    match result {
        Err(err) if err.is_not_found() => Ok(()),
        other => Err(eyre::eyre!("expected not found error, got {other:?}")),
    }
}

#[then(r#"the top {limit:usize} rated agents are "{ids}""#)]
fn top_rated_are(world: &CatalogWorld, limit: usize, ids: String) -> Result<(), eyre::Report> {
    let actual = listing_ids(&world.marketplace.top_rated(limit));
    let expected = split_ids(&ids);
    if actual != expected {
        return Err(eyre::eyre!("expected {expected:?}, got {actual:?}"));
    }
    Ok(())
}

#[then(r#"the top {limit:usize} trending agents are "{ids}""#)]
fn trending_are(world: &CatalogWorld, limit: usize, ids: String) -> Result<(), eyre::Report> {
    let actual = listing_ids(&world.marketplace.trending(limit));
    let expected = split_ids(&ids);
    if actual != expected {
        return Err(eyre::eyre!("expected {expected:?}, got {actual:?}"));
    }
    Ok(())
}

#[then(r#"the search returns "{ids}""#)]
fn search_returns(world: &CatalogWorld, ids: String) -> Result<(), eyre::Report> {
    let results = world
        .last_search
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no search was run in this scenario"))?;
    let actual = listing_ids(results);
    let expected = split_ids(&ids);
    if actual != expected {
        return Err(eyre::eyre!("expected {expected:?}, got {actual:?}"));
    }
    Ok(())
}
