//! First-run sample data
//!
//! A fresh (or unreadable) database is seeded with two finished-looking
//! orders so the dashboard has something to show before the shop enters
//! real work.

use shared::models::{Order, OrderItem, OrderStatus, PaymentMethod, Priority};

const DAY_MS: i64 = 86_400_000;

/// Two sample orders dated relative to `now`.
///
/// Sequence numbers 1 and 2 of the current year are considered consumed
/// by these, so the caller must advance the year counter to 2 after
/// persisting them.
pub fn sample_orders(now: i64, invoice_prefix: &str) -> Vec<Order> {
    let business_cards = OrderItem {
        id: "seed-item-1".to_string(),
        name: "Business Cards (Premium)".to_string(),
        qty: 500,
        unit_price: 5.0,
        line_total: 2500.0,
    };
    let flyers = OrderItem {
        id: "seed-item-2".to_string(),
        name: "Flyers A5 (Full Color)".to_string(),
        qty: 1000,
        unit_price: 8.0,
        line_total: 8000.0,
    };

    vec![
        Order {
            id: Some("seed-order-1".to_string()),
            invoice_number: format!("{invoice_prefix}00001"),
            created_at: now - 2 * DAY_MS,
            updated_at: now - 2 * DAY_MS,
            customer_name: "Ahmed Raza".to_string(),
            customer_phone: "0321-5556789".to_string(),
            customer_address: Some("House 45, Gulberg III, Lahore".to_string()),
            items: vec![business_cards],
            subtotal: 2500.0,
            discount: 0.0,
            tax: 0.0,
            total: 2500.0,
            paid: 2500.0,
            due: 0.0,
            payment_method: PaymentMethod::Cash,
            delivery_date: now - DAY_MS,
            priority: Priority::Normal,
            notes: "Matte finish, rounded corners".to_string(),
            status: OrderStatus::Completed,
            completion_date: Some(now - DAY_MS),
        },
        Order {
            id: Some("seed-order-2".to_string()),
            invoice_number: format!("{invoice_prefix}00002"),
            created_at: now - DAY_MS,
            updated_at: now - DAY_MS,
            customer_name: "Sana Mirza".to_string(),
            customer_phone: "0333-7778899".to_string(),
            customer_address: None,
            items: vec![flyers],
            subtotal: 8000.0,
            discount: 500.0,
            tax: 0.0,
            total: 7500.0,
            paid: 3000.0,
            due: 4500.0,
            payment_method: PaymentMethod::BankTransfer,
            delivery_date: now + 2 * DAY_MS,
            priority: Priority::Urgent,
            notes: String::new(),
            status: OrderStatus::Processing,
            completion_date: None,
        },
    ]
}

/// Number of invoice sequence slots the sample orders consume.
pub const SEED_SEQUENCE: u64 = 2;

#[cfg(test)]
mod tests {
    use super::*;
    use shared::money::validate_order;
    use shared::util::now_millis;

    #[test]
    fn test_sample_orders_are_valid() {
        let now = now_millis();
        let orders = sample_orders(now, "RT-2024-");
        assert_eq!(orders.len() as u64, SEED_SEQUENCE);
        for order in &orders {
            validate_order(order).unwrap();
            assert!(order.created_at <= now);
        }
    }

    #[test]
    fn test_sample_invoice_numbers_use_prefix() {
        let orders = sample_orders(0, "QP-");
        assert_eq!(orders[0].invoice_number, "QP-00001");
        assert_eq!(orders[1].invoice_number, "QP-00002");
    }
}
