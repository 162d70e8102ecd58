use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use super::{json, ApiErr, ApiResp, Ctx, Result};

/// Search query params.
#[derive(Debug, Deserialize, Default)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub found: bool,
}

#[derive(Serialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<String>,
}

/// Exact-match lookup: reports whether the query is a vocabulary entry.
pub async fn search(
    State(ctx): State<Arc<Ctx>>,
    Query(query): Query<SearchQuery>,
) -> Result<ApiResp<SearchResponse>> {
    let q = require_q(query)?;
    let result = ctx.trie.search(&q);

    Ok(json(SearchResponse {
        found: result.found,
    }))
}

/// Completion suggestions rooted at the deepest matched prefix of the query.
pub async fn recommendations(
    State(ctx): State<Arc<Ctx>>,
    Query(query): Query<SearchQuery>,
) -> Result<ApiResp<RecommendationResponse>> {
    let q = require_q(query)?;
    let result = ctx.trie.search(&q);

    Ok(json(RecommendationResponse {
        recommendations: result.recommendations,
    }))
}

/// The `q` param must be present. An empty value is fine: the trie treats it
/// as a non-match with no suggestions.
fn require_q(query: SearchQuery) -> Result<String> {
    query
        .q
        .ok_or_else(|| ApiErr::new("missing `q` query param", StatusCode::BAD_REQUEST))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_q_is_a_bad_request() {
        let err = require_q(SearchQuery { q: None }).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "missing `q` query param");
    }

    #[test]
    fn empty_q_is_a_valid_query() {
        let q = require_q(SearchQuery {
            q: Some(String::new()),
        })
        .unwrap();
        assert_eq!(q, "");
    }
}
