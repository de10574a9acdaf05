//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use tower_sessions::Session;
use tracing::instrument;

use pixel_paradise_core::{Product, ProductId};

use crate::error::Result;
use crate::filters;
use crate::routes::cart::load_cart;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub category: String,
    pub image: String,
    pub description: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price.display(),
            category: product.category.clone(),
            image: product.image.clone(),
            description: product.description.clone(),
        }
    }
}

/// One category section on the product listing page.
pub struct CategorySection {
    pub name: String,
    pub products: Vec<ProductView>,
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub sections: Vec<CategorySection>,
}

/// Game profile page template.
///
/// `product` is `None` for unknown ids; the template renders a not-found
/// state in that case, mirroring how the store treats stale links.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: Option<ProductView>,
    pub in_cart: bool,
}

/// Display all games grouped by category.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.catalog();
    let sections = catalog
        .categories()
        .into_iter()
        .map(|name| CategorySection {
            name: name.to_owned(),
            products: catalog
                .by_category(name)
                .into_iter()
                .map(ProductView::from)
                .collect(),
        })
        .collect();

    ProductsIndexTemplate { sections }
}

/// Display the game profile page.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = ProductId::new(id);
    let product = state.catalog().get(&id);

    // The add/remove button reflects whether the game is already in the cart.
    let in_cart = match product {
        Some(_) => load_cart(&session).await?.contains(&id),
        None => false,
    };

    Ok(ProductShowTemplate {
        product: product.map(ProductView::from),
        in_cart,
    })
}
