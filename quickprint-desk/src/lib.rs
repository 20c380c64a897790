//! QuickPrint order desk
//!
//! Application core for a single-tenant print-shop dashboard: records
//! customer orders, tracks fulfillment, computes billing totals,
//! produces printable invoices and pickup tokens, and surfaces basic
//! revenue statistics. All state lives in one embedded database file.
//!
//! # Module structure
//!
//! ```text
//! quickprint-desk/src/
//! ├── state.rs       # Desk facade: user-level actions
//! ├── store/         # Order collection, settings, redb persistence
//! ├── lifecycle.rs   # Status machine and derived-field rules
//! ├── invoicing.rs   # Invoice number formatting
//! ├── documents.rs   # Save/print dispatch for rendered PDFs
//! ├── stats.rs       # Dashboard aggregations
//! ├── insights.rs    # Best-effort advisory client
//! ├── config.rs      # Environment configuration
//! └── logging.rs     # tracing setup
//! ```

pub mod config;
pub mod documents;
pub mod insights;
pub mod invoicing;
pub mod lifecycle;
pub mod logging;
pub mod state;
pub mod stats;
pub mod store;

pub use config::Config;
pub use documents::DocumentKind;
pub use state::{Desk, DeskError, DeskResult};
pub use store::{OrderStore, StoreError, StoreEvent};
