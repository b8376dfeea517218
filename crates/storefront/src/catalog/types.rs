//! Catalog domain types and wire conversions.
//!
//! `ProductRow` mirrors the backend's `products` table row; `Product` is the
//! clean domain shape handed to the rest of the storefront.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pulseira_core::{CurrencyCode, Price, ProductId};

/// Raw product row as returned by the backend's REST surface.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRow {
    /// Opaque row identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional description text.
    pub description: Option<String>,
    /// Unit price in the store currency's standard unit.
    pub price: Decimal,
    /// Public image URL, if an image was uploaded.
    pub image_url: Option<String>,
    /// Row creation timestamp (the backend's listing order key).
    pub created_at: Option<DateTime<Utc>>,
}

/// A purchasable product as seen by the storefront.
///
/// Read-only input: created, updated, and deleted entirely by the backend's
/// admin flow; the cart engine treats it as immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Opaque stable identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Optional description text.
    pub description: Option<String>,
    /// Unit price (store currency is BRL).
    pub price: Price,
    /// Public image URL; empty string when no image was uploaded.
    pub image_url: String,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::new(row.id),
            name: row.name,
            description: row.description,
            price: Price::new(row.price, CurrencyCode::BRL),
            image_url: row.image_url.unwrap_or_default(),
        }
    }
}
