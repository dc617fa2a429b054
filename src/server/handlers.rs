//! Route handlers for the marketplace API.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use super::{AppState, response};
use crate::catalog::{
    domain::{
        CatalogDomainError, DEFAULT_LEADERBOARD_LIMIT, ListingDraft, ReviewDraft, SearchFilter,
    },
    services::MarketplaceServiceError,
};

/// Query parameters accepted by the listing search route.
///
/// Each parameter holds a single value; empty `tag` and `capability` values
/// are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Text matched against listing name and description.
    pub query: Option<String>,
    /// Minimum listing rating.
    pub min_rating: Option<f64>,
    /// Required tag.
    pub tag: Option<String>,
    /// Required capability.
    pub capability: Option<String>,
}

impl SearchParams {
    /// Converts the parameters into a validated search filter.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError::MinRatingOutOfRange`] when `min_rating`
    /// is outside `[0.0, 5.0]`.
    pub fn into_filter(self) -> Result<SearchFilter, CatalogDomainError> {
        let Self {
            query,
            min_rating,
            tag,
            capability,
        } = self;

        let mut filter = SearchFilter::new();
        if let Some(text) = query {
            filter = filter.with_query(text);
        }
        if let Some(required_tag) = tag.filter(|value| !value.is_empty()) {
            filter = filter.with_tags([required_tag]);
        }
        if let Some(required) = capability.filter(|value| !value.is_empty()) {
            filter = filter.with_capabilities([required]);
        }
        match min_rating {
            Some(threshold) => filter.with_min_rating(threshold),
            None => Ok(filter),
        }
    }
}

/// Query parameters accepted by leaderboard routes.
#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    /// Maximum number of entries; zero or negative yields an empty list.
    pub limit: Option<i64>,
}

impl LimitParams {
    /// Returns the requested entry count, defaulting to
    /// [`DEFAULT_LEADERBOARD_LIMIT`] and clamping negative values to zero.
    #[must_use]
    pub fn count(&self) -> usize {
        self.limit.map_or(DEFAULT_LEADERBOARD_LIMIT, |limit| {
            usize::try_from(limit).unwrap_or(0)
        })
    }
}

pub async fn list_agents(
    State(marketplace): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    match params.into_filter() {
        Ok(filter) => Json(marketplace.search(&filter)).into_response(),
        Err(err) => response::service_error(&MarketplaceServiceError::from(err)),
    }
}

pub async fn trending_agents(
    State(marketplace): State<AppState>,
    Query(params): Query<LimitParams>,
) -> Response {
    Json(marketplace.trending(params.count())).into_response()
}

pub async fn get_agent(
    State(marketplace): State<AppState>,
    Path(agent_id): Path<String>,
) -> Response {
    match marketplace.get(&agent_id) {
        Ok(listing) => Json(listing).into_response(),
        Err(err) => response::service_error(&err),
    }
}

pub async fn publish_agent(
    State(marketplace): State<AppState>,
    payload: Result<Json<ListingDraft>, JsonRejection>,
) -> Response {
    let Json(draft) = match payload {
        Ok(body) => body,
        Err(rejection) => return response::rejected_body(&rejection),
    };
    match marketplace.publish(draft) {
        Ok(listing) => (StatusCode::CREATED, Json(listing)).into_response(),
        Err(err) => response::service_error(&err),
    }
}

pub async fn submit_review(
    State(marketplace): State<AppState>,
    Path(agent_id): Path<String>,
    payload: Result<Json<ReviewDraft>, JsonRejection>,
) -> Response {
    let Json(draft) = match payload {
        Ok(body) => body,
        Err(rejection) => return response::rejected_body(&rejection),
    };
    match marketplace.submit_review(&agent_id, draft) {
        Ok(review) => (StatusCode::CREATED, Json(review)).into_response(),
        Err(err) => response::service_error(&err),
    }
}
