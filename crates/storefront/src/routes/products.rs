//! Product route handlers.

use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;
use tracing::instrument;

use crate::catalog::Product;
use crate::state::AppState;

/// Product display data for the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: String,
    pub image_url: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.display(),
            image_url: product.image_url.clone(),
        }
    }
}

/// List available products, newest first.
///
/// A failed catalog fetch renders as an empty catalog; error display is the
/// presentation layer's concern, not ours.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let products = match state.catalog().list_products().await {
        Ok(products) => products,
        Err(e) => {
            tracing::warn!("Failed to fetch catalog: {e}");
            Vec::new()
        }
    };

    let views: Vec<ProductView> = products.iter().map(ProductView::from).collect();
    Json(views)
}
