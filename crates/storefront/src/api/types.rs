//! Wire types for the ordering API.
//!
//! These mirror the server's JSON shapes exactly. Prices are decimals (the
//! server serializes them as strings) and timestamps arrive as either
//! RFC 3339 or RFC 2822, so `created_at` uses a lenient deserializer.

use breadbox_core::{OrderId, OrderStatus, ProductId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::cart::CartLine;

// =============================================================================
// Catalog Types
// =============================================================================

/// A product in the catalog.
///
/// Immutable once fetched; the catalog is replaced wholesale on refetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price (non-negative).
    pub price: Decimal,
    /// Plain text description.
    pub description: String,
}

/// Response body of `GET /products`.
///
/// The server returns a bare array normally, but wraps an empty catalog in
/// `{"warning": ..., "products": []}`. Both shapes decode to a product list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CatalogResponse {
    Products(Vec<Product>),
    Empty {
        #[serde(default)]
        warning: Option<String>,
        products: Vec<Product>,
    },
}

impl CatalogResponse {
    /// Flatten either response shape into the product list.
    #[must_use]
    pub fn into_products(self) -> Vec<Product> {
        match self {
            Self::Products(products) | Self::Empty { products, .. } => products,
        }
    }
}

// =============================================================================
// Order Submission Types
// =============================================================================

/// A line item submitted with an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemInput {
    /// Product being ordered.
    pub product_id: ProductId,
    /// Quantity (always > 0 in a submitted order).
    pub quantity: i64,
}

impl From<&CartLine> for OrderItemInput {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id,
            quantity: line.quantity,
        }
    }
}

/// Request body of `POST /orders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Customer name (non-empty).
    pub customer_name: String,
    /// Customer email. Format is not validated here; leniency matches the
    /// server, which accepts any string.
    pub customer_email: String,
    /// Items to order (non-empty, all quantities > 0).
    pub items: Vec<OrderItemInput>,
}

/// Response body of a successful `POST /orders`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlacedOrder {
    /// Server-assigned order ID.
    pub order_id: OrderId,
    /// Human-readable confirmation message, if the server sent one.
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// Order Lookup Types
// =============================================================================

/// A line item within a fetched order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Product name at order time.
    pub product_name: String,
    /// Quantity ordered.
    pub quantity: i64,
    /// Unit price captured at order time (non-negative).
    pub unit_price: Decimal,
}

/// An order as returned by `GET /orders/{id}`. Read-only to this client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Order ID.
    pub id: OrderId,
    /// Customer name.
    pub customer_name: String,
    /// Current status.
    pub status: OrderStatus,
    /// Creation timestamp.
    #[serde(deserialize_with = "deserialize_lenient_datetime")]
    pub created_at: DateTime<Utc>,
    /// Line items.
    pub items: Vec<OrderLine>,
}

/// Error body the server sends with non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Server-provided error text.
    pub error: String,
}

/// Accept both RFC 3339 and RFC 2822 timestamps.
///
/// Flask's default JSON encoder emits RFC 2822 (`Wed, 02 Oct 2024 08:00:00
/// GMT`) for datetimes, while other backends emit RFC 3339.
fn deserialize_lenient_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&raw)
        .or_else(|_| DateTime::parse_from_rfc2822(&raw))
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| serde::de::Error::custom(format!("invalid timestamp {raw:?}: {e}")))
}
