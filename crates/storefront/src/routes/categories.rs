//! Category route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use tracing::instrument;

use crate::filters;
use crate::routes::products::ProductView;
use crate::state::AppState;

/// Category listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "categories/index.html")]
pub struct CategoriesIndexTemplate {
    pub categories: Vec<String>,
}

/// Single-category page template.
///
/// `known` is false for category names the catalog has never seen; the
/// template renders a not-found state instead of an empty grid.
#[derive(Template, WebTemplate)]
#[template(path = "categories/show.html")]
pub struct CategoryShowTemplate {
    pub name: String,
    pub known: bool,
    pub products: Vec<ProductView>,
}

/// Display the category listing.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let categories = state
        .catalog()
        .categories()
        .into_iter()
        .map(str::to_owned)
        .collect();

    CategoriesIndexTemplate { categories }
}

/// Display all games in one category.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(name): Path<String>) -> impl IntoResponse {
    let catalog = state.catalog();
    let known = catalog.has_category(&name);
    let products = catalog
        .by_category(&name)
        .into_iter()
        .map(ProductView::from)
        .collect();

    CategoryShowTemplate {
        name,
        known,
        products,
    }
}
