//! # quickprint-pdf
//!
//! Fixed-layout PDF rendering for the QuickPrint order desk - page layout
//! capabilities only.
//!
//! ## Scope
//!
//! This crate handles HOW to lay out a printable page:
//! - A4 invoice document
//! - 80x150mm pickup token slip
//! - Money and date formatting for documents
//!
//! Deciding WHEN to render, and whether the result is saved to disk or
//! sent to a print spooler, stays in application code (`quickprint-desk`).
//!
//! ## Example
//!
//! ```ignore
//! use quickprint_pdf::{render_invoice, render_token};
//!
//! let bytes = render_invoice(&order, &settings)?;
//! std::fs::write(format!("{}.pdf", order.invoice_number), bytes)?;
//! ```

mod draw;
mod error;
mod format;
mod invoice;
mod token;

// Re-exports
pub use error::{RenderError, RenderResult};
pub use format::{format_date, format_datetime, format_money, format_pkr};
pub use invoice::render_invoice;
pub use token::render_token;
