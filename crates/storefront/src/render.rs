//! Rendering seam.
//!
//! The ordering core hands display data to a [`Renderer`] and never formats
//! output itself. [`TextRenderer`] is the terminal implementation used by
//! the binary; tests substitute a recording fake.

use crate::api::Product;
use crate::cart::CartLine;
use crate::view::OrderSummary;
use breadbox_core::format_usd;

/// Static text shown when the catalog could not be fetched.
pub const CATALOG_ERROR_MESSAGE: &str = "Failed to load products. Please try again later.";

/// Visual presentation contract.
///
/// Implementations own all formatting decisions; the core only supplies
/// data. No business logic belongs here.
pub trait Renderer {
    /// Show the product catalog.
    fn show_catalog(&mut self, products: &[Product]);

    /// Replace the catalog display with a static error message.
    fn show_catalog_error(&mut self);

    /// Show the current cart lines.
    fn show_cart(&mut self, lines: &[CartLine]);

    /// Confirm a placed order by its ID.
    fn show_order_placed(&mut self, order_id: &str);

    /// Show a fetched order summary.
    fn show_order_summary(&mut self, summary: &OrderSummary);

    /// Show an inline error message for a failed action.
    fn show_error(&mut self, message: &str);

    /// Reset quantity inputs after a successful submission.
    fn reset_quantity_inputs(&mut self);
}

/// Plain-text renderer for the terminal storefront.
#[derive(Debug, Default)]
pub struct TextRenderer;

#[allow(clippy::print_stdout)]
impl Renderer for TextRenderer {
    fn show_catalog(&mut self, products: &[Product]) {
        if products.is_empty() {
            println!("No products available");
            return;
        }
        for product in products {
            println!(
                "[{}] {} - {}\n    {}",
                product.id,
                product.name,
                format_usd(product.price),
                product.description
            );
        }
    }

    fn show_catalog_error(&mut self) {
        println!("{CATALOG_ERROR_MESSAGE}");
    }

    fn show_cart(&mut self, lines: &[CartLine]) {
        if lines.is_empty() {
            println!("Your cart is empty");
            return;
        }
        for line in lines {
            println!("product {} x {}", line.product_id, line.quantity);
        }
    }

    fn show_order_placed(&mut self, order_id: &str) {
        println!("Order placed successfully! Your order ID is: {order_id}");
    }

    fn show_order_summary(&mut self, summary: &OrderSummary) {
        println!("Order #{}", summary.order_id);
        println!("Customer: {}", summary.customer_name);
        println!("Order Date: {}", summary.order_date);
        println!(
            "Status: {} [{}]",
            summary.status_label,
            summary.status_class.css_class()
        );
        println!("Items:");
        for line in &summary.lines {
            println!(
                "  {} x {}  {}",
                line.product_name, line.quantity, line.line_total
            );
        }
        println!("Total: {}", summary.total);
    }

    fn show_error(&mut self, message: &str) {
        println!("Error: {message}");
    }

    fn reset_quantity_inputs(&mut self) {
        // Terminal output has no persistent inputs to reset
    }
}
