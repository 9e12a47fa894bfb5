//! Order status view models.
//!
//! Pure functions from a fetched [`OrderRecord`] to display data. Totals
//! use exact decimal arithmetic - the classic `0.1 + 0.2` float drift must
//! never show up on a receipt - and amounts render with exactly two
//! fractional digits.

use breadbox_core::{DisplayClass, format_usd, line_total};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::api::OrderRecord;

/// Grand total of an order: sum of `quantity * unit_price` over its items.
#[must_use]
pub fn compute_total(order: &OrderRecord) -> Decimal {
    order
        .items
        .iter()
        .map(|item| line_total(item.quantity, item.unit_price))
        .sum()
}

/// Format a server timestamp for display.
///
/// Purely presentational; renderers that need locale-aware output can
/// format the raw `created_at` themselves.
#[must_use]
pub fn format_date(created_at: DateTime<Utc>) -> String {
    created_at.format("%Y-%m-%d %H:%M").to_string()
}

/// A single rendered line of an order summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    /// Product name at order time.
    pub product_name: String,
    /// Quantity ordered.
    pub quantity: i64,
    /// Extended price for the line, formatted (e.g., `$19.98`).
    pub line_total: String,
}

/// Display data for a fetched order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    /// Order ID, for the `Order #N` header.
    pub order_id: String,
    /// Customer name.
    pub customer_name: String,
    /// Raw status text.
    pub status_label: String,
    /// Badge classification for the status.
    pub status_class: DisplayClass,
    /// Formatted order date.
    pub order_date: String,
    /// Per-item lines.
    pub lines: Vec<SummaryLine>,
    /// Formatted grand total (e.g., `$20.48`).
    pub total: String,
}

impl OrderSummary {
    /// Build the summary view for an order record.
    #[must_use]
    pub fn from_record(order: &OrderRecord) -> Self {
        Self {
            order_id: order.id.to_string(),
            customer_name: order.customer_name.clone(),
            status_label: order.status.to_string(),
            status_class: order.status.display_class(),
            order_date: format_date(order.created_at),
            lines: order
                .items
                .iter()
                .map(|item| SummaryLine {
                    product_name: item.product_name.clone(),
                    quantity: item.quantity,
                    line_total: format_usd(line_total(item.quantity, item.unit_price)),
                })
                .collect(),
            total: format_usd(compute_total(order)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use breadbox_core::{OrderId, OrderStatus};
    use chrono::TimeZone;
    use std::str::FromStr;

    use crate::api::OrderLine;

    fn record(status: OrderStatus, items: Vec<OrderLine>) -> OrderRecord {
        OrderRecord {
            id: OrderId::new(12),
            customer_name: "Ann".to_string(),
            status,
            created_at: Utc.with_ymd_and_hms(2024, 10, 2, 8, 30, 0).unwrap(),
            items,
        }
    }

    fn item(name: &str, quantity: i64, unit_price: &str) -> OrderLine {
        OrderLine {
            product_name: name.to_string(),
            quantity,
            unit_price: Decimal::from_str(unit_price).unwrap(),
        }
    }

    #[test]
    fn test_compute_total_exact() {
        // 2 x 9.99 + 1 x 0.50 = 20.48 exactly; this is where binary floats
        // would drift
        let order = record(
            OrderStatus::Pending,
            vec![item("Croissant", 2, "9.99"), item("Roll", 1, "0.50")],
        );
        assert_eq!(compute_total(&order), Decimal::from_str("20.48").unwrap());
    }

    #[test]
    fn test_compute_total_empty_order() {
        let order = record(OrderStatus::Pending, vec![]);
        assert_eq!(compute_total(&order), Decimal::ZERO);
    }

    #[test]
    fn test_summary_formats_total_two_digits() {
        let order = record(
            OrderStatus::Completed,
            vec![item("Croissant", 2, "9.99"), item("Roll", 1, "0.50")],
        );
        let summary = OrderSummary::from_record(&order);
        assert_eq!(summary.total, "$20.48");
        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.lines.first().unwrap().line_total, "$19.98");
    }

    #[test]
    fn test_summary_classifies_status() {
        let order = record(OrderStatus::Processing, vec![]);
        let summary = OrderSummary::from_record(&order);
        assert_eq!(summary.status_class, DisplayClass::Processing);
        assert_eq!(summary.status_label, "processing");

        let order = record(OrderStatus::Other, vec![]);
        let summary = OrderSummary::from_record(&order);
        assert_eq!(summary.status_class, DisplayClass::Pending);
    }

    #[test]
    fn test_summary_header_fields() {
        let order = record(OrderStatus::Pending, vec![]);
        let summary = OrderSummary::from_record(&order);
        assert_eq!(summary.order_id, "12");
        assert_eq!(summary.customer_name, "Ann");
        assert_eq!(summary.order_date, "2024-10-02 08:30");
    }
}
