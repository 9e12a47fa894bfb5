//! In-memory cart.
//!
//! `CartStore` maps product IDs to requested quantities. It holds at most
//! one line per product, never stores a zero or negative quantity, and
//! remembers the order in which products first received a non-zero
//! quantity so the submitted line items are stable.
//!
//! The store is created empty at session start, mutated by discrete UI
//! events, cleared on successful submission, and never persisted.

use breadbox_core::ProductId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cart mutation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// Quantity below zero was requested.
    #[error("Invalid quantity: {quantity} (must be >= 0)")]
    InvalidQuantity { quantity: i64 },
}

/// A single product/quantity pair in the cart.
///
/// Stored lines always have `quantity > 0`; a line at zero is logically
/// absent and is removed rather than kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product being ordered.
    pub product_id: ProductId,
    /// Requested quantity (> 0).
    pub quantity: i64,
}

/// In-memory mapping from product ID to requested quantity.
///
/// Backed by a `Vec` to preserve insertion order; carts are small enough
/// that linear scans beat the bookkeeping of an ordered map.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Set the requested quantity for a product.
    ///
    /// A quantity of zero removes any existing line (no-op if absent);
    /// otherwise the line is inserted or updated in place. Repeated
    /// identical calls are idempotent.
    ///
    /// # Errors
    ///
    /// Returns `CartError::InvalidQuantity` if `quantity < 0`; the cart is
    /// left unchanged.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) -> Result<(), CartError> {
        if quantity < 0 {
            return Err(CartError::InvalidQuantity { quantity });
        }

        if quantity == 0 {
            self.lines.retain(|l| l.product_id != product_id);
            return Ok(());
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity;
        } else {
            self.lines.push(CartLine {
                product_id,
                quantity,
            });
        }

        Ok(())
    }

    /// Increase the quantity for a product by one, starting from zero if
    /// the product is not in the cart. Returns the new quantity.
    pub fn increment(&mut self, product_id: ProductId) -> i64 {
        let next = self.quantity(product_id) + 1;
        // next >= 1, so this cannot fail
        let _ = self.set_quantity(product_id, next);
        next
    }

    /// Current quantity for a product; zero if absent.
    #[must_use]
    pub fn quantity(&self, product_id: ProductId) -> i64 {
        self.lines
            .iter()
            .find(|l| l.product_id == product_id)
            .map_or(0, |l| l.quantity)
    }

    /// The lines that would be submitted with an order, in insertion order
    /// of first non-zero assignment.
    ///
    /// Never contains a zero-quantity line or a duplicate product ID.
    #[must_use]
    pub fn snapshot(&self) -> Vec<CartLine> {
        self.lines.clone()
    }

    /// Remove all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }
}
