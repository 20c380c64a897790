//! Order lifecycle
//!
//! State machine and derived-field rules applied when an order is
//! created or edited. The store persists whatever it is handed; the
//! rules about what a valid next state looks like live here.

use shared::money::{recalculate, validate_draft};
use shared::{Order, OrderDraft, OrderStatus, ValidationError};

/// Transition errors surfaced to the action handler
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Cannot move order from {from:?} to {to:?}")]
    NotAllowed { from: OrderStatus, to: OrderStatus },
}

/// Build a new Pending order from the new-order form.
///
/// Computes every derived money field, sets both timestamps to `now`
/// and leaves the paid amount as the advance entered on the form.
pub fn new_order(
    draft: OrderDraft,
    invoice_number: String,
    now: i64,
) -> Result<Order, ValidationError> {
    validate_draft(&draft)?;

    let mut order = Order {
        id: draft.id,
        invoice_number,
        created_at: now,
        updated_at: now,
        customer_name: draft.customer_name,
        customer_phone: draft.customer_phone,
        customer_address: draft.customer_address,
        items: draft.items,
        subtotal: 0.0,
        discount: draft.discount,
        tax: draft.tax,
        total: 0.0,
        paid: draft.paid,
        due: 0.0,
        payment_method: draft.payment_method,
        delivery_date: draft.delivery_date,
        priority: draft.priority,
        notes: draft.notes,
        status: OrderStatus::Pending,
        completion_date: None,
    };
    recalculate(&mut order);
    Ok(order)
}

/// Whether the status action buttons should offer `to` from `from`.
pub fn can_transition(from: OrderStatus, to: OrderStatus) -> bool {
    use OrderStatus::*;
    matches!(
        (from, to),
        (Pending, Processing) | (Processing, Completed) | (Pending, Cancelled) | (Processing, Cancelled)
    )
}

/// Apply a status transition.
///
/// Moving to Completed stamps `completion_date`; every transition
/// refreshes `updated_at`. Completed and Cancelled are absorbing.
pub fn transition(order: &mut Order, to: OrderStatus, now: i64) -> Result<(), TransitionError> {
    if !can_transition(order.status, to) {
        return Err(TransitionError::NotAllowed {
            from: order.status,
            to,
        });
    }
    order.status = to;
    if to == OrderStatus::Completed {
        order.completion_date = Some(now);
    }
    order.updated_at = now;
    Ok(())
}

/// Settle the outstanding balance: paid becomes the full total and the
/// due amount drops to zero. Orthogonal to status, allowed in any state.
pub fn collect_payment(order: &mut Order, now: i64) {
    order.paid = order.total;
    order.due = 0.0;
    order.updated_at = now;
}

/// Re-derive money fields after an edit and refresh `updated_at`.
pub fn apply_edit(order: &mut Order, now: i64) {
    recalculate(order);
    order.updated_at = now;
}
