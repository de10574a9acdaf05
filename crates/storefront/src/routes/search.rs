//! Search autocomplete handler.
//!
//! The header search box issues an HTMX request per keystroke; this handler
//! returns a small results fragment rendered into the dropdown.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use crate::state::AppState;

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// One row in the autocomplete dropdown.
pub struct SearchResultView {
    pub id: String,
    pub name: String,
    pub category: String,
}

/// Search results fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/search_results.html")]
pub struct SearchResultsTemplate {
    pub query: String,
    pub results: Vec<SearchResultView>,
}

/// Return the autocomplete fragment for a query.
#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> impl IntoResponse {
    let q = query.q.unwrap_or_default();
    let results = state
        .catalog()
        .search(&q)
        .into_iter()
        .map(|p| SearchResultView {
            id: p.id.to_string(),
            name: p.name.clone(),
            category: p.category.clone(),
        })
        .collect();

    SearchResultsTemplate {
        query: q.trim().to_owned(),
        results,
    }
}
