//! HTTP route handlers for the storefront.
//!
//! The storefront exposes a JSON surface; the presentation layer (a
//! separate front end) consumes these endpoints and renders them.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Product listing (alias of /products)
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /products               - Product listing (empty on catalog failure)
//!
//! # Cart
//! GET  /cart                   - Cart view (items, total, item count)
//! POST /cart/add               - Add a product snapshot to the cart
//! POST /cart/remove            - Remove a line (no-op when absent)
//! GET  /cart/count             - Item count badge data
//!
//! # Checkout
//! GET  /checkout               - Redirect to the WhatsApp deep link
//!                                (empty cart: redirect to /cart instead)
//!
//! # Notifications
//! GET  /notifications          - Drain pending toast notifications
//! ```

pub mod cart;
pub mod notifications;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Product listing doubles as the home page data
        .route("/", get(products::index))
        .route("/products", get(products::index))
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout redirect
        .route("/checkout", get(cart::checkout))
        // Notification drain
        .route("/notifications", get(notifications::drain))
}
