//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Landing page
//! GET  /health                 - Health check
//!
//! # Catalog
//! GET  /products               - All games grouped by category
//! GET  /products/{id}          - Game profile page
//! GET  /categories             - Category listing
//! GET  /categories/{name}      - Games in one category
//! GET  /search?q=              - Autocomplete results fragment (HTMX)
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add product (returns cart_count fragment)
//! POST /cart/increase          - Increase quantity (returns cart_items fragment)
//! POST /cart/decrease          - Decrease quantity (returns cart_items fragment)
//! POST /cart/remove            - Remove line (returns cart_items fragment)
//! GET  /cart/count             - Cart count badge (fragment)
//! ```

pub mod cart;
pub mod categories;
pub mod home;
pub mod products;
pub mod search;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the category routes router.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::index))
        .route("/{name}", get(categories::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/increase", post(cart::increase))
        .route("/decrease", post(cart::decrease))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Landing page
        .route("/", get(home::home))
        // Catalog routes
        .nest("/products", product_routes())
        .nest("/categories", category_routes())
        // Search autocomplete
        .route("/search", get(search::search))
        // Cart routes
        .nest("/cart", cart_routes())
}
