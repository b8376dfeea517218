//! Cart route handlers.
//!
//! The cart is stored in the session record, so every handler follows the
//! same shape: load the cart, run the engine operation, flush notifications,
//! save the cart back.

use axum::{
    Form, Json,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use pulseira_core::{Cart, CurrencyCode, Notification, Price, ProductId, ProductSnapshot};

use crate::error::Result;
use crate::models::session_keys;
use crate::services;
use crate::state::AppState;

/// Cart line display data for the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct CartItemView {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_price: String,
    pub image_url: String,
}

/// Cart display data for the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: u32,
}

/// Item count badge data.
#[derive(Debug, Clone, Serialize)]
pub struct CartCountView {
    pub count: u32,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart
                .lines()
                .iter()
                .map(|line| CartItemView {
                    product_id: line.product_id.to_string(),
                    name: line.name.clone(),
                    quantity: line.quantity,
                    unit_price: line.unit_price.display(),
                    line_price: line.subtotal().display(),
                    image_url: line.image_url.clone(),
                })
                .collect(),
            total: cart.total().display(),
            item_count: cart.item_count(),
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the session's cart, defaulting to an empty one.
async fn load_cart(session: &Session) -> Result<Cart> {
    Ok(session
        .get::<Cart>(session_keys::CART)
        .await?
        .unwrap_or_default())
}

/// Save the cart back into the session.
async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(session_keys::CART, cart).await?;
    Ok(())
}

/// Add to cart form data: the product card's fields as displayed, not a
/// fresh catalog lookup.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    pub name: String,
    pub price: Decimal,
    pub image_url: Option<String>,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: String,
}

/// Display the cart.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Json<CartView>> {
    let cart = load_cart(&session).await?;
    Ok(Json(CartView::from(&cart)))
}

/// Add an item to the cart.
///
/// Returns the updated item count. An empty product identifier is a
/// contract violation and answers 400.
#[instrument(skip(session))]
pub async fn add(
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Json<CartCountView>> {
    let snapshot = ProductSnapshot {
        id: ProductId::new(form.product_id),
        name: form.name,
        unit_price: Price::new(form.price, CurrencyCode::BRL),
        image_url: form.image_url.unwrap_or_default(),
    };

    let mut cart = load_cart(&session).await?;
    let mut notifications: Vec<Notification> = Vec::new();

    services::cart::add_to_cart(&mut cart, snapshot, &mut notifications)?;

    services::notify::queue_notifications(&session, notifications).await?;
    save_cart(&session, &cart).await?;

    Ok(Json(CartCountView {
        count: cart.item_count(),
    }))
}

/// Remove an item from the cart.
///
/// Removing an absent identifier is a no-op, not an error; the response is
/// the updated cart either way.
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Json<CartView>> {
    let mut cart = load_cart(&session).await?;
    let mut notifications: Vec<Notification> = Vec::new();

    services::cart::remove_from_cart(
        &mut cart,
        &ProductId::new(form.product_id),
        &mut notifications,
    );

    services::notify::queue_notifications(&session, notifications).await?;
    save_cart(&session, &cart).await?;

    Ok(Json(CartView::from(&cart)))
}

/// Get the cart item count.
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<Json<CartCountView>> {
    let cart = load_cart(&session).await?;
    Ok(Json(CartCountView {
        count: cart.item_count(),
    }))
}

/// Run checkout and redirect to the WhatsApp deep link.
///
/// An empty cart is refused: no hand-off, just a redirect back to the cart.
/// For a non-empty cart the session's cart is cleared before the redirect
/// is even delivered - whether the shopper's browser actually opens
/// WhatsApp is outside our control and never awaited.
#[instrument(skip(state, session))]
pub async fn checkout(State(state): State<AppState>, session: Session) -> Result<Response> {
    let mut cart = load_cart(&session).await?;
    let mut notifications: Vec<Notification> = Vec::new();

    let Some(url) =
        services::cart::checkout(&mut cart, &state.config().whatsapp, &mut notifications)
    else {
        return Ok(Redirect::to("/cart").into_response());
    };

    services::notify::queue_notifications(&session, notifications).await?;
    save_cart(&session, &cart).await?;

    Ok(Redirect::to(&url).into_response())
}
