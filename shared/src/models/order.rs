//! Order model

use serde::{Deserialize, Serialize};

/// Fulfillment status of an order.
///
/// `Completed` and `Cancelled` are absorbing: no UI-driven transition
/// leads out of them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Human-facing label, as printed on documents.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

/// Order priority
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    #[default]
    Normal,
    Urgent,
}

/// Payment method selected by the customer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[default]
    Cash,
    BankTransfer,
    Easypaisa,
    JazzCash,
    Other,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::Easypaisa => "Easypaisa",
            PaymentMethod::JazzCash => "JazzCash",
            PaymentMethod::Other => "Other",
        }
    }
}

/// One line of an order.
///
/// Invariant: `line_total == qty * unit_price` after every edit to
/// `qty` or `unit_price` (enforced by `money::recalculate`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub qty: i32,
    /// Price per unit in currency units
    pub unit_price: f64,
    /// Computed: qty * unit_price
    pub line_total: f64,
}

/// Order entity - one customer transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Internal id, assigned by the store at creation if absent
    pub id: Option<String>,
    /// Human-facing sequential identifier, unique within the store
    pub invoice_number: String,
    /// Epoch millis
    pub created_at: i64,
    pub updated_at: i64,
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_address: Option<String>,
    pub items: Vec<OrderItem>,
    /// Computed: sum of line totals
    pub subtotal: f64,
    pub discount: f64,
    pub tax: f64,
    /// Computed: subtotal - discount + tax
    pub total: f64,
    pub paid: f64,
    /// Computed: total - paid
    pub due: f64,
    pub payment_method: PaymentMethod,
    /// Epoch millis, date-significant only
    pub delivery_date: i64,
    pub priority: Priority,
    pub notes: String,
    pub status: OrderStatus,
    /// Set exactly when status transitions to Completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<i64>,
}

/// Create-order payload: everything the new-order form collects.
///
/// The id, invoice number, timestamps, derived money fields and status
/// are filled in when the draft is turned into an [`Order`].
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrderDraft {
    #[serde(default)]
    pub id: Option<String>,
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(default)]
    pub customer_address: Option<String>,
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub tax: f64,
    /// Advance taken at the counter, if any
    #[serde(default)]
    pub paid: f64,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    pub delivery_date: i64,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub notes: String,
}
