//! Validation errors raised before any write reaches storage.

use thiserror::Error;

/// Pre-persistence validation failure.
///
/// These are surfaced to the caller synchronously; the operation is
/// aborted and no partial write occurs.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("customer name is required")]
    MissingCustomerName,

    #[error("customer phone is required")]
    MissingCustomerPhone,

    #[error("order must contain at least one item")]
    NoItems,

    #[error("item name is required")]
    MissingItemName,

    #[error("invalid quantity: {0}")]
    InvalidQuantity(i32),

    #[error("invalid amount for {field}: {value}")]
    InvalidAmount { field: &'static str, value: f64 },
}
