//! Shared domain types and money math for the QuickPrint order desk.
//!
//! # Module structure
//!
//! ```text
//! shared/src/
//! ├── models/        # Order, OrderItem, ShopSettings, enums
//! ├── money.rs       # Derived-field computation and validation
//! ├── error.rs       # Validation error type
//! └── util.rs        # Timestamps, random tokens
//! ```

pub mod error;
pub mod models;
pub mod money;
pub mod util;

pub use error::ValidationError;
pub use models::{
    Order, OrderDraft, OrderItem, OrderStatus, PaymentMethod, Priority, ShopSettings,
    ShopSettingsUpdate,
};
