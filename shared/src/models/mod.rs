//! Domain models

pub mod order;
pub mod settings;

pub use order::{Order, OrderDraft, OrderItem, OrderStatus, PaymentMethod, Priority};
pub use settings::{ShopSettings, ShopSettingsUpdate};
