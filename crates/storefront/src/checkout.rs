//! Order request construction.
//!
//! An `OrderRequest` exists only at submission time: it is built from a
//! cart snapshot and rejected locally - before any network call - when the
//! cart is empty.

use thiserror::Error;

use crate::api::{OrderItemInput, OrderRequest};
use crate::cart::CartStore;

/// User-facing text shown when submitting with nothing in the cart.
pub const EMPTY_CART_MESSAGE: &str = "Please add at least one item to your order.";

/// Checkout errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// The cart has no lines to submit.
    #[error("{EMPTY_CART_MESSAGE}")]
    EmptyCart,

    /// An order submission is already outstanding.
    ///
    /// The upstream UI never guarded against double-clicking "place order";
    /// this client rejects the second attempt instead.
    #[error("An order is already being submitted. Please wait.")]
    SubmissionInFlight,
}

/// Build an order request from the customer details and the cart.
///
/// Email format is deliberately not validated here; the server accepts any
/// string and validation belongs to the presentation layer if a deployment
/// wants it.
///
/// # Errors
///
/// Returns `CheckoutError::EmptyCart` if the cart snapshot is empty.
pub fn build_request(
    customer_name: &str,
    customer_email: &str,
    cart: &CartStore,
) -> Result<OrderRequest, CheckoutError> {
    let snapshot = cart.snapshot();
    if snapshot.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    Ok(OrderRequest {
        customer_name: customer_name.to_string(),
        customer_email: customer_email.to_string(),
        items: snapshot.iter().map(OrderItemInput::from).collect(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use breadbox_core::ProductId;

    #[test]
    fn test_build_request_empty_cart() {
        let cart = CartStore::new();
        let err = build_request("Ann", "a@x.com", &cart).unwrap_err();
        assert_eq!(err, CheckoutError::EmptyCart);
    }

    #[test]
    fn test_build_request_zeroed_cart_is_empty() {
        let mut cart = CartStore::new();
        cart.set_quantity(ProductId::new(3), 2).unwrap();
        cart.set_quantity(ProductId::new(3), 0).unwrap();
        assert_eq!(
            build_request("Ann", "a@x.com", &cart).unwrap_err(),
            CheckoutError::EmptyCart
        );
    }

    #[test]
    fn test_build_request_single_line() {
        let mut cart = CartStore::new();
        cart.set_quantity(ProductId::new(3), 2).unwrap();

        let request = build_request("Ann", "a@x.com", &cart).unwrap();
        assert_eq!(request.customer_name, "Ann");
        assert_eq!(request.customer_email, "a@x.com");
        assert_eq!(request.items, vec![OrderItemInput {
            product_id: ProductId::new(3),
            quantity: 2,
        }]);
    }

    #[test]
    fn test_build_request_accepts_any_email() {
        let mut cart = CartStore::new();
        cart.increment(ProductId::new(1));
        assert!(build_request("Ann", "not-an-email", &cart).is_ok());
        assert!(build_request("Ann", "", &cart).is_ok());
    }

    #[test]
    fn test_build_request_preserves_line_order() {
        let mut cart = CartStore::new();
        cart.set_quantity(ProductId::new(5), 1).unwrap();
        cart.set_quantity(ProductId::new(2), 3).unwrap();

        let request = build_request("Ann", "a@x.com", &cart).unwrap();
        let ids: Vec<i64> = request.items.iter().map(|i| i.product_id.as_i64()).collect();
        assert_eq!(ids, vec![5, 2]);
    }
}
