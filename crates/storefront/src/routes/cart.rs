//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart snapshot itself lives in the session: a mutation loads the
//! current `CartState`, applies exactly one `CartCommand` through the pure
//! reducer, and stores the complete new snapshot back before the response
//! is rendered. The next read in the same session sees the new state; the
//! `HX-Trigger: cart-updated` response header is the change notification
//! other page fragments (the header badge) subscribe to.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use pixel_paradise_core::{CartCommand, CartState};

use crate::error::Result;
use crate::filters;
use crate::state::AppState;

/// Session key the cart snapshot is stored under.
const CART_SESSION_KEY: &str = "cart";

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartLineView {
    pub id: String,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub subtotal: String,
    pub total_quantity: u32,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self::from(&CartState::new())
    }
}

impl From<&CartState> for CartView {
    fn from(state: &CartState) -> Self {
        Self {
            lines: state
                .lines()
                .iter()
                .map(|line| CartLineView {
                    id: line.product.id.to_string(),
                    name: line.product.name.clone(),
                    image: line.product.image.clone(),
                    quantity: line.quantity(),
                    unit_price: line.product.price.display(),
                    line_total: line.line_total().display(),
                })
                .collect(),
            subtotal: state.total_cost().display(),
            total_quantity: state.total_quantity(),
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the cart snapshot from the session, defaulting to an empty cart.
pub async fn load_cart(session: &Session) -> Result<CartState> {
    Ok(session
        .get::<CartState>(CART_SESSION_KEY)
        .await?
        .unwrap_or_default())
}

/// Store the new cart snapshot in the session.
async fn save_cart(session: &Session, cart: &CartState) -> Result<()> {
    session.insert(CART_SESSION_KEY, cart).await?;
    Ok(())
}

/// Apply one command to the session cart and return the new snapshot.
async fn apply_command(session: &Session, command: CartCommand) -> Result<CartState> {
    let cart = load_cart(session).await?.apply(command);
    save_cart(session, &cart).await?;
    Ok(cart)
}

// =============================================================================
// Forms and Templates
// =============================================================================

/// Cart mutation form data. Every cart command addresses a product id.
#[derive(Debug, Deserialize)]
pub struct CartForm {
    pub product_id: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the cart page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<impl IntoResponse> {
    let cart = load_cart(&session).await?;

    Ok(CartShowTemplate {
        cart: CartView::from(&cart),
    })
}

/// Add a product to the cart (HTMX).
///
/// Appends a new line with quantity 1, or increments the existing line.
/// An id the catalog does not know is a no-op: the click raced a catalog
/// change, and there is nothing to add. Returns the cart count badge with
/// an HTMX trigger so other fragments can refresh.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CartForm>,
) -> Result<Response> {
    let id = form.product_id.as_str().into();

    let cart = match state.catalog().get(&id) {
        Some(product) => apply_command(&session, CartCommand::Add(product.clone())).await?,
        None => {
            tracing::debug!(product_id = %id, "Add for unknown product ignored");
            load_cart(&session).await?
        }
    };

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate {
            count: cart.total_quantity(),
        },
    )
        .into_response())
}

/// Increase a line's quantity by one (HTMX).
#[instrument(skip(session))]
pub async fn increase(session: Session, Form(form): Form<CartForm>) -> Result<Response> {
    let cart = apply_command(&session, CartCommand::Increase(form.product_id.into())).await?;
    Ok(cart_items_response(&cart))
}

/// Decrease a line's quantity by one, removing the line at zero (HTMX).
#[instrument(skip(session))]
pub async fn decrease(session: Session, Form(form): Form<CartForm>) -> Result<Response> {
    let cart = apply_command(&session, CartCommand::Decrease(form.product_id.into())).await?;
    Ok(cart_items_response(&cart))
}

/// Remove a line from the cart regardless of quantity (HTMX).
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<CartForm>) -> Result<Response> {
    let cart = apply_command(&session, CartCommand::Remove(form.product_id.into())).await?;
    Ok(cart_items_response(&cart))
}

/// Get the cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<impl IntoResponse> {
    let cart = load_cart(&session).await?;

    Ok(CartCountTemplate {
        count: cart.total_quantity(),
    })
}

/// Render the cart items fragment with the update trigger header.
fn cart_items_response(cart: &CartState) -> Response {
    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(cart),
        },
    )
        .into_response()
}
