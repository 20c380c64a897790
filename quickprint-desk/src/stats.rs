//! Dashboard statistics
//!
//! Pure aggregations over a snapshot of orders. Everything takes `now`
//! as a parameter instead of reading the clock so results are stable
//! under test.

use shared::util::start_of_day;
use shared::{Order, OrderStatus};

const DAY_MS: i64 = 86_400_000;

/// One bar of the 7-day revenue chart
#[derive(Debug, Clone, PartialEq)]
pub struct DayRevenue {
    /// Start of the day (epoch millis)
    pub day_start: i64,
    /// Weekday label, e.g. "Mon"
    pub label: String,
    /// Sum of order totals created that day
    pub revenue: f64,
}

/// Order counts per status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub pending: usize,
    pub processing: usize,
    pub completed: usize,
    pub cancelled: usize,
}

/// Headline numbers for the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    /// Orders created today
    pub today_orders: usize,
    /// Pending plus Processing
    pub open_orders: usize,
    pub overdue_orders: usize,
    pub by_status: StatusCounts,
    /// Σ total across all orders
    pub total_revenue: f64,
    /// Σ due across all orders
    pub total_due: f64,
    /// Last seven days, oldest first, today last
    pub revenue_series: Vec<DayRevenue>,
}

/// Compute all dashboard numbers for one snapshot.
pub fn dashboard_stats(orders: &[Order], now: i64) -> DashboardStats {
    let today_start = start_of_day(now);

    DashboardStats {
        today_orders: orders
            .iter()
            .filter(|o| start_of_day(o.created_at) == today_start)
            .count(),
        open_orders: orders
            .iter()
            .filter(|o| {
                matches!(o.status, OrderStatus::Pending | OrderStatus::Processing)
            })
            .count(),
        overdue_orders: overdue(orders, now).len(),
        by_status: status_counts(orders),
        total_revenue: orders.iter().map(|o| o.total).sum(),
        total_due: orders.iter().map(|o| o.due).sum(),
        revenue_series: revenue_series(orders, now),
    }
}

/// Count orders per status.
pub fn status_counts(orders: &[Order]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for order in orders {
        match order.status {
            OrderStatus::Pending => counts.pending += 1,
            OrderStatus::Processing => counts.processing += 1,
            OrderStatus::Completed => counts.completed += 1,
            OrderStatus::Cancelled => counts.cancelled += 1,
        }
    }
    counts
}

/// Orders whose delivery day has passed without the order being
/// completed. Compared at day granularity: an order due today is not
/// overdue yet.
pub fn overdue<'a>(orders: &'a [Order], now: i64) -> Vec<&'a Order> {
    let today_start = start_of_day(now);
    orders
        .iter()
        .filter(|o| o.status != OrderStatus::Completed && start_of_day(o.delivery_date) < today_start)
        .collect()
}

/// Per-day revenue for the last seven days, today included, oldest
/// first. An order counts toward the day it was created.
pub fn revenue_series(orders: &[Order], now: i64) -> Vec<DayRevenue> {
    let today_start = start_of_day(now);
    (0..7)
        .map(|i| {
            let day_start = today_start - (6 - i) * DAY_MS;
            let day_end = day_start + DAY_MS;
            let revenue = orders
                .iter()
                .filter(|o| o.created_at >= day_start && o.created_at < day_end)
                .map(|o| o.total)
                .sum();
            let label = chrono::DateTime::from_timestamp_millis(day_start)
                .map(|d| d.format("%a").to_string())
                .unwrap_or_default();
            DayRevenue {
                day_start,
                label,
                revenue,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{OrderItem, PaymentMethod, Priority};

    fn order(status: OrderStatus, total: f64, due: f64, created_at: i64, delivery: i64) -> Order {
        Order {
            id: Some("s".to_string()),
            invoice_number: "QP".to_string(),
            created_at,
            updated_at: created_at,
            customer_name: "C".to_string(),
            customer_phone: "0300".to_string(),
            customer_address: None,
            items: vec![OrderItem {
                id: "i".to_string(),
                name: "Prints".to_string(),
                qty: 1,
                unit_price: total,
                line_total: total,
            }],
            subtotal: total,
            discount: 0.0,
            tax: 0.0,
            total,
            paid: total - due,
            due,
            payment_method: PaymentMethod::Cash,
            delivery_date: delivery,
            priority: Priority::Normal,
            notes: String::new(),
            status,
            completion_date: None,
        }
    }

    // Midday on an arbitrary day
    const NOW: i64 = 100 * DAY_MS + DAY_MS / 2;

    #[test]
    fn test_totals_sum_over_all_orders() {
        let orders = vec![
            order(OrderStatus::Pending, 500.0, 500.0, NOW, NOW),
            order(OrderStatus::Completed, 250.0, 0.0, NOW - DAY_MS, NOW),
            order(OrderStatus::Cancelled, 100.0, 100.0, NOW - 2 * DAY_MS, NOW),
        ];
        let stats = dashboard_stats(&orders, NOW);
        assert_eq!(stats.total_revenue, 850.0);
        assert_eq!(stats.total_due, 600.0);
        assert_eq!(stats.today_orders, 1);
        assert_eq!(stats.open_orders, 1);
        assert_eq!(
            stats.by_status,
            StatusCounts {
                pending: 1,
                processing: 0,
                completed: 1,
                cancelled: 1
            }
        );
    }

    #[test]
    fn test_overdue_is_day_granular() {
        let yesterday = NOW - DAY_MS;
        let orders = vec![
            // Due yesterday, still pending: overdue
            order(OrderStatus::Pending, 100.0, 100.0, NOW, yesterday),
            // Due today: not overdue yet
            order(OrderStatus::Pending, 100.0, 100.0, NOW, NOW),
            // Due yesterday but completed: not overdue
            order(OrderStatus::Completed, 100.0, 0.0, NOW, yesterday),
        ];
        assert_eq!(overdue(&orders, NOW).len(), 1);
    }

    #[test]
    fn test_revenue_series_buckets_by_creation_day() {
        let orders = vec![
            order(OrderStatus::Pending, 100.0, 0.0, NOW, NOW),
            order(OrderStatus::Pending, 50.0, 0.0, NOW - DAY_MS, NOW),
            order(OrderStatus::Pending, 25.0, 0.0, NOW - DAY_MS + 1, NOW),
            // Eight days ago, outside the window
            order(OrderStatus::Pending, 999.0, 0.0, NOW - 8 * DAY_MS, NOW),
        ];
        let series = revenue_series(&orders, NOW);
        assert_eq!(series.len(), 7);
        assert_eq!(series[6].revenue, 100.0);
        assert_eq!(series[5].revenue, 75.0);
        assert_eq!(series[0].revenue, 0.0);
        // Oldest first
        assert!(series[0].day_start < series[6].day_start);
        assert_eq!(series.iter().map(|d| d.revenue).sum::<f64>(), 175.0);
    }
}
