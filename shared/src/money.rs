//! Money calculation for order billing using rust_decimal for precision
//!
//! All arithmetic is done with `Decimal` internally, rounded half-up to
//! two decimal places, then converted back to `f64` for storage and
//! serialization.

use crate::error::ValidationError;
use crate::models::{Order, OrderDraft, OrderItem};
use rust_decimal::prelude::*;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed unit price per item
const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per item
const MAX_QUANTITY: i32 = 9999;

fn round2(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

fn dec(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

/// Line total for a quantity at a unit price.
pub fn line_total(qty: i32, unit_price: f64) -> f64 {
    round2(Decimal::from(qty) * dec(unit_price))
}

/// Recompute `line_total` on every item from its current qty and price.
pub fn recalculate_items(items: &mut [OrderItem]) {
    for item in items.iter_mut() {
        item.line_total = line_total(item.qty, item.unit_price);
    }
}

/// Subtotal across all items.
pub fn subtotal(items: &[OrderItem]) -> f64 {
    round2(items.iter().map(|i| dec(i.line_total)).sum())
}

/// Recompute every derived money field on an order in place:
/// line totals, subtotal, `total = subtotal - discount + tax`, and
/// `due = total - paid`.
pub fn recalculate(order: &mut Order) {
    recalculate_items(&mut order.items);
    order.subtotal = subtotal(&order.items);
    order.total = round2(dec(order.subtotal) - dec(order.discount) + dec(order.tax));
    order.due = round2(dec(order.total) - dec(order.paid));
}

#[inline]
fn require_money(value: f64, field: &'static str) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 || value > MAX_PRICE {
        return Err(ValidationError::InvalidAmount { field, value });
    }
    Ok(())
}

/// Validate an item before it is accepted into an order.
pub fn validate_item(item: &OrderItem) -> Result<(), ValidationError> {
    if item.name.trim().is_empty() {
        return Err(ValidationError::MissingItemName);
    }
    if item.qty < 1 || item.qty > MAX_QUANTITY {
        return Err(ValidationError::InvalidQuantity(item.qty));
    }
    require_money(item.unit_price, "unit_price")
}

fn validate_common(
    customer_name: &str,
    customer_phone: &str,
    items: &[OrderItem],
    discount: f64,
    tax: f64,
    paid: f64,
) -> Result<(), ValidationError> {
    if customer_name.trim().is_empty() {
        return Err(ValidationError::MissingCustomerName);
    }
    if customer_phone.trim().is_empty() {
        return Err(ValidationError::MissingCustomerPhone);
    }
    if items.is_empty() {
        return Err(ValidationError::NoItems);
    }
    for item in items {
        validate_item(item)?;
    }
    require_money(discount, "discount")?;
    require_money(tax, "tax")?;
    // Overpayment is accepted (change due); only the sign is enforced.
    require_money(paid, "paid")
}

/// Validate an order before persistence.
pub fn validate_order(order: &Order) -> Result<(), ValidationError> {
    validate_common(
        &order.customer_name,
        &order.customer_phone,
        &order.items,
        order.discount,
        order.tax,
        order.paid,
    )
}

/// Validate a create-order payload before it is built into an order.
pub fn validate_draft(draft: &OrderDraft) -> Result<(), ValidationError> {
    validate_common(
        &draft.customer_name,
        &draft.customer_phone,
        &draft.items,
        draft.discount,
        draft.tax,
        draft.paid,
    )
}
