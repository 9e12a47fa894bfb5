//! Storefront orchestrator.
//!
//! `StorefrontApp` owns the cart, the current catalog, and the two
//! collaborator seams (API client, renderer). Each public method is one
//! discrete UI event: all cart mutation happens synchronously inside it,
//! and the only suspension points are awaits on the API client, so no
//! locking is needed.
//!
//! Errors are recovered here, at the point of the triggering action: the
//! method renders the user-facing message and also returns the error so
//! callers can observe the outcome.

use breadbox_core::{OrderId, ProductId};
use tracing::{info, warn};

use crate::api::{OrdersApi, Product};
use crate::cart::CartStore;
use crate::checkout::{self, CheckoutError};
use crate::error::{Result, StorefrontError};
use crate::render::Renderer;
use crate::view::OrderSummary;

/// The storefront session: catalog, cart, and in-flight submission state.
pub struct StorefrontApp<A, R> {
    api: A,
    renderer: R,
    cart: CartStore,
    catalog: Vec<Product>,
    submitting: bool,
}

impl<A: OrdersApi, R: Renderer> StorefrontApp<A, R> {
    /// Create a session with an empty cart and no catalog.
    pub const fn new(api: A, renderer: R) -> Self {
        Self {
            api,
            renderer,
            cart: CartStore::new(),
            catalog: Vec::new(),
            submitting: false,
        }
    }

    /// The catalog as last fetched.
    #[must_use]
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    /// Read access to the cart.
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Fetch the catalog and render it.
    ///
    /// On failure the catalog display is replaced with a static error
    /// message and the previous catalog is kept.
    ///
    /// # Errors
    ///
    /// Returns the API error after rendering it.
    pub async fn load_catalog(&mut self) -> Result<()> {
        match self.api.fetch_products().await {
            Ok(products) => {
                // Replaced wholesale on every successful refetch
                self.catalog = products;
                self.renderer.show_catalog(&self.catalog);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "Failed to load catalog");
                self.renderer.show_catalog_error();
                Err(err.into())
            }
        }
    }

    /// Add one unit of a product to the cart ("Add to Order").
    ///
    /// Adding a product that is not in the catalog is ignored, matching a
    /// click on a stale button.
    pub fn add_to_cart(&mut self, product_id: ProductId) {
        if !self.catalog.iter().any(|p| p.id == product_id) {
            warn!(%product_id, "Ignoring add for unknown product");
            return;
        }
        self.cart.increment(product_id);
        self.renderer.show_cart(&self.cart.snapshot());
    }

    /// Set the quantity for a product (quantity input change).
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuantity` (after rendering it) for a negative
    /// quantity; the cart is unchanged.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) -> Result<()> {
        if let Err(err) = self.cart.set_quantity(product_id, quantity) {
            let err = StorefrontError::from(err);
            self.renderer.show_error(&err.user_message());
            return Err(err);
        }
        self.renderer.show_cart(&self.cart.snapshot());
        Ok(())
    }

    /// Submit the cart as an order.
    ///
    /// The request is built and rejected locally when the cart is empty -
    /// no network call is made. On success the cart is cleared and the
    /// renderer is told to reset its quantity inputs; on failure the cart
    /// is left intact for another attempt.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCart`, `SubmissionInFlight`, or the API error, each
    /// after rendering its user-facing message.
    pub async fn submit_order(
        &mut self,
        customer_name: &str,
        customer_email: &str,
    ) -> Result<OrderId> {
        if self.submitting {
            let err = StorefrontError::from(CheckoutError::SubmissionInFlight);
            self.renderer.show_error(&err.user_message());
            return Err(err);
        }

        let request = match checkout::build_request(customer_name, customer_email, &self.cart) {
            Ok(request) => request,
            Err(err) => {
                let err = StorefrontError::from(err);
                self.renderer.show_error(&err.user_message());
                return Err(err);
            }
        };

        self.submitting = true;
        let outcome = self.api.place_order(&request).await;
        self.submitting = false;

        match outcome {
            Ok(placed) => {
                info!(order_id = %placed.order_id, "Order placed");
                // Post-conditions of a successful submission
                self.cart.clear();
                self.renderer.reset_quantity_inputs();
                self.renderer.show_order_placed(&placed.order_id.to_string());
                Ok(placed.order_id)
            }
            Err(err) => {
                let err = StorefrontError::from(err);
                self.renderer.show_error(&err.user_message());
                Err(err)
            }
        }
    }

    /// Look up an order and render its summary.
    ///
    /// # Errors
    ///
    /// Returns the API error after rendering its user-facing message.
    pub async fn check_status(&mut self, order_id: OrderId) -> Result<OrderSummary> {
        match self.api.fetch_order(order_id).await {
            Ok(record) => {
                let summary = OrderSummary::from_record(&record);
                self.renderer.show_order_summary(&summary);
                Ok(summary)
            }
            Err(err) => {
                let err = StorefrontError::from(err);
                self.renderer.show_error(&err.user_message());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::str::FromStr;

    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    use crate::api::{ApiError, OrderLine, OrderRecord, OrderRequest, PlacedOrder};
    use breadbox_core::OrderStatus;

    // =========================================================================
    // Fakes
    // =========================================================================

    #[derive(Default)]
    struct FakeApi {
        products: Vec<Product>,
        fail_fetch: bool,
        reject_order: Option<String>,
        submitted: RefCell<Vec<OrderRequest>>,
        order: Option<OrderRecord>,
    }

    impl OrdersApi for FakeApi {
        async fn fetch_products(&self) -> std::result::Result<Vec<Product>, ApiError> {
            if self.fail_fetch {
                return Err(ApiError::FetchFailure);
            }
            Ok(self.products.clone())
        }

        async fn place_order(
            &self,
            request: &OrderRequest,
        ) -> std::result::Result<PlacedOrder, ApiError> {
            self.submitted.borrow_mut().push(request.clone());
            if let Some(message) = &self.reject_order {
                return Err(ApiError::SubmissionFailure(message.clone()));
            }
            Ok(PlacedOrder {
                order_id: OrderId::new(42),
                message: Some("Order placed successfully".to_string()),
            })
        }

        async fn fetch_order(
            &self,
            order_id: OrderId,
        ) -> std::result::Result<OrderRecord, ApiError> {
            self.order
                .clone()
                .ok_or_else(|| ApiError::LookupFailure(format!("Order {order_id} not found")))
        }
    }

    #[derive(Debug, PartialEq, Eq)]
    enum Rendered {
        Catalog(usize),
        CatalogError,
        Cart(Vec<(i64, i64)>),
        OrderPlaced(String),
        Summary(String),
        Error(String),
        ResetInputs,
    }

    #[derive(Default)]
    struct RecordingRenderer {
        events: Vec<Rendered>,
    }

    impl Renderer for RecordingRenderer {
        fn show_catalog(&mut self, products: &[Product]) {
            self.events.push(Rendered::Catalog(products.len()));
        }

        fn show_catalog_error(&mut self) {
            self.events.push(Rendered::CatalogError);
        }

        fn show_cart(&mut self, lines: &[crate::cart::CartLine]) {
            self.events.push(Rendered::Cart(
                lines
                    .iter()
                    .map(|l| (l.product_id.as_i64(), l.quantity))
                    .collect(),
            ));
        }

        fn show_order_placed(&mut self, order_id: &str) {
            self.events.push(Rendered::OrderPlaced(order_id.to_string()));
        }

        fn show_order_summary(&mut self, summary: &OrderSummary) {
            self.events.push(Rendered::Summary(summary.total.clone()));
        }

        fn show_error(&mut self, message: &str) {
            self.events.push(Rendered::Error(message.to_string()));
        }

        fn reset_quantity_inputs(&mut self) {
            self.events.push(Rendered::ResetInputs);
        }
    }

    fn product(id: i64, name: &str, price: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Decimal::from_str(price).unwrap(),
            description: String::new(),
        }
    }

    fn app_with_catalog() -> StorefrontApp<FakeApi, RecordingRenderer> {
        let api = FakeApi {
            products: vec![product(3, "Baguette", "4.50"), product(7, "Croissant", "3.25")],
            ..FakeApi::default()
        };
        StorefrontApp::new(api, RecordingRenderer::default())
    }

    #[tokio::test]
    async fn test_load_catalog_renders_products() {
        let mut app = app_with_catalog();
        app.load_catalog().await.unwrap();
        assert_eq!(app.catalog().len(), 2);
        assert_eq!(app.renderer.events, vec![Rendered::Catalog(2)]);
    }

    #[tokio::test]
    async fn test_load_catalog_failure_renders_static_error() {
        let api = FakeApi {
            fail_fetch: true,
            ..FakeApi::default()
        };
        let mut app = StorefrontApp::new(api, RecordingRenderer::default());
        assert!(app.load_catalog().await.is_err());
        assert_eq!(app.renderer.events, vec![Rendered::CatalogError]);
        assert!(app.catalog().is_empty());
    }

    #[tokio::test]
    async fn test_add_to_cart_unknown_product_ignored() {
        let mut app = app_with_catalog();
        app.load_catalog().await.unwrap();
        app.add_to_cart(ProductId::new(99));
        assert!(app.cart().is_empty());
        // No cart render for an ignored click
        assert_eq!(app.renderer.events, vec![Rendered::Catalog(2)]);
    }

    #[tokio::test]
    async fn test_submit_empty_cart_makes_no_network_call() {
        let mut app = app_with_catalog();
        app.load_catalog().await.unwrap();

        let err = app.submit_order("Ann", "a@x.com").await.unwrap_err();
        assert!(matches!(
            err,
            StorefrontError::Checkout(CheckoutError::EmptyCart)
        ));
        assert!(app.api.submitted.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_submit_order_clears_cart_and_resets_inputs() {
        let mut app = app_with_catalog();
        app.load_catalog().await.unwrap();
        app.add_to_cart(ProductId::new(3));
        app.set_quantity(ProductId::new(3), 2).unwrap();

        let order_id = app.submit_order("Ann", "a@x.com").await.unwrap();
        assert_eq!(order_id, OrderId::new(42));
        assert!(app.cart().is_empty());

        let submitted = app.api.submitted.borrow();
        assert_eq!(submitted.len(), 1);
        let request = submitted.first().unwrap();
        assert_eq!(request.customer_name, "Ann");
        assert_eq!(request.items.len(), 1);
        assert_eq!(request.items.first().unwrap().quantity, 2);

        assert!(app.renderer.events.contains(&Rendered::ResetInputs));
        assert!(app
            .renderer
            .events
            .contains(&Rendered::OrderPlaced("42".to_string())));
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_cart_and_shows_server_text() {
        let api = FakeApi {
            products: vec![product(3, "Baguette", "4.50")],
            reject_order: Some("Product with ID 3 not found".to_string()),
            ..FakeApi::default()
        };
        let mut app = StorefrontApp::new(api, RecordingRenderer::default());
        app.load_catalog().await.unwrap();
        app.add_to_cart(ProductId::new(3));

        assert!(app.submit_order("Ann", "a@x.com").await.is_err());
        // Cart survives a failed submission
        assert_eq!(app.cart().len(), 1);
        assert!(app
            .renderer
            .events
            .contains(&Rendered::Error("Product with ID 3 not found".to_string())));
        assert!(!app.renderer.events.contains(&Rendered::ResetInputs));
    }

    #[tokio::test]
    async fn test_submit_refused_while_one_is_in_flight() {
        let mut app = app_with_catalog();
        app.load_catalog().await.unwrap();
        app.add_to_cart(ProductId::new(3));

        app.submitting = true;
        let err = app.submit_order("Ann", "a@x.com").await.unwrap_err();
        assert!(matches!(
            err,
            StorefrontError::Checkout(CheckoutError::SubmissionInFlight)
        ));
        assert!(app.api.submitted.borrow().is_empty());
        // The cart is untouched for the retry
        assert_eq!(app.cart().len(), 1);
    }

    #[tokio::test]
    async fn test_check_status_renders_summary() {
        let api = FakeApi {
            order: Some(OrderRecord {
                id: OrderId::new(12),
                customer_name: "Ann".to_string(),
                status: OrderStatus::Processing,
                created_at: Utc.with_ymd_and_hms(2024, 10, 2, 8, 0, 0).unwrap(),
                items: vec![OrderLine {
                    product_name: "Croissant".to_string(),
                    quantity: 2,
                    unit_price: Decimal::from_str("9.99").unwrap(),
                }],
            }),
            ..FakeApi::default()
        };
        let mut app = StorefrontApp::new(api, RecordingRenderer::default());

        let summary = app.check_status(OrderId::new(12)).await.unwrap();
        assert_eq!(summary.total, "$19.98");
        assert_eq!(
            app.renderer.events,
            vec![Rendered::Summary("$19.98".to_string())]
        );
    }

    #[tokio::test]
    async fn test_check_status_unknown_order_shows_error() {
        let mut app = StorefrontApp::new(FakeApi::default(), RecordingRenderer::default());
        assert!(app.check_status(OrderId::new(5)).await.is_err());
        assert_eq!(
            app.renderer.events,
            vec![Rendered::Error("Order 5 not found".to_string())]
        );
    }

    #[tokio::test]
    async fn test_set_quantity_negative_renders_error() {
        let mut app = app_with_catalog();
        app.load_catalog().await.unwrap();
        assert!(app.set_quantity(ProductId::new(3), -2).is_err());
        assert!(app
            .renderer
            .events
            .iter()
            .any(|e| matches!(e, Rendered::Error(_))));
    }
}
