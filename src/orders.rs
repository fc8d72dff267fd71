use serde::Serialize;

use crate::records::Order;

/// Subtotals strictly above this amount earn the discount.
pub const DISCOUNT_THRESHOLD: f64 = 500.0;
pub const DISCOUNT_RATE: f64 = 0.10;
/// VAT is levied on the post-discount amount.
pub const VAT_RATE: f64 = 0.075;

#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedOrder {
    pub order_id: String,
    pub customer_name: String,
    pub subtotal: f64,
    pub discount_applied: bool,
    pub final_total: f64,
}

/// Prices a single order. Values are left unrounded.
pub fn price_order(order: &Order) -> ProcessedOrder {
    let subtotal: f64 = order.items.iter().map(|item| item.line_total()).sum();
    let discount_applied = subtotal > DISCOUNT_THRESHOLD;
    let discount = if discount_applied {
        subtotal * DISCOUNT_RATE
    } else {
        0.0
    };
    let vat = (subtotal - discount) * VAT_RATE;

    ProcessedOrder {
        order_id: order.order_id.clone(),
        customer_name: order.customer_name.clone(),
        subtotal,
        discount_applied,
        final_total: subtotal - discount + vat,
    }
}

/// Prices every order that has at least one item, keeping input order.
///
/// `on_skip` is called for each itemless order as it is dropped.
pub fn process_orders<F>(orders: &[Order], mut on_skip: F) -> Vec<ProcessedOrder>
where
    F: FnMut(&Order),
{
    let mut result = Vec::with_capacity(orders.len());

    for order in orders {
        if order.items.is_empty() {
            tracing::debug!(order_id = %order.order_id, "order has no items, skipping");
            on_skip(order);
            continue;
        }

        let processed = price_order(order);
        tracing::debug!(
            order_id = %processed.order_id,
            subtotal = processed.subtotal,
            discount_applied = processed.discount_applied,
            final_total = processed.final_total,
            "priced order"
        );
        result.push(processed);
    }

    result
}
