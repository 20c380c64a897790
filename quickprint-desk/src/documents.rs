//! Document output
//!
//! Turns an order into its printable artifacts (customer invoice,
//! pickup token) and gets them out of the process: either saved into
//! the configured output directory or handed to the platform print
//! spooler. Rendering never mutates the order.

use std::path::{Path, PathBuf};
use std::process::Command;

use quickprint_pdf::{render_invoice, render_token, RenderError};
use shared::util::now_millis;
use shared::{Order, ShopSettings};

/// Which artifact to produce for an order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// A4 customer invoice
    Invoice,
    /// Receipt-width pickup token
    Token,
}

impl DocumentKind {
    /// File name for a saved document, derived from the invoice number.
    pub fn file_name(&self, invoice_number: &str) -> String {
        match self {
            DocumentKind::Invoice => format!("{invoice_number}.pdf"),
            DocumentKind::Token => format!("{invoice_number}-Token.pdf"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No print command accepted the document")]
    SpoolFailed,
}

pub type DocumentResult<T> = Result<T, DocumentError>;

fn render(order: &Order, settings: &ShopSettings, kind: DocumentKind) -> DocumentResult<Vec<u8>> {
    let bytes = match kind {
        DocumentKind::Invoice => render_invoice(order, settings)?,
        DocumentKind::Token => render_token(order, settings, now_millis())?,
    };
    Ok(bytes)
}

/// Render and save a document under `output_dir`, creating the
/// directory if needed. Returns the path of the written file.
pub fn save_document(
    order: &Order,
    settings: &ShopSettings,
    kind: DocumentKind,
    output_dir: impl AsRef<Path>,
) -> DocumentResult<PathBuf> {
    let bytes = render(order, settings, kind)?;

    let output_dir = output_dir.as_ref();
    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(kind.file_name(&order.invoice_number));
    std::fs::write(&path, bytes)?;

    tracing::info!(path = %path.display(), "document saved");
    Ok(path)
}

/// Render a document to a temporary file and hand it to the platform
/// print flow: `lp`, then `lpr`, then the default PDF viewer as a last
/// resort so the user can print manually.
pub fn print_document(
    order: &Order,
    settings: &ShopSettings,
    kind: DocumentKind,
) -> DocumentResult<PathBuf> {
    let bytes = render(order, settings, kind)?;

    let path = std::env::temp_dir().join(kind.file_name(&order.invoice_number));
    std::fs::write(&path, bytes)?;

    for spooler in ["lp", "lpr"] {
        match Command::new(spooler).arg(&path).status() {
            Ok(status) if status.success() => {
                tracing::info!(spooler, path = %path.display(), "document spooled");
                return Ok(path);
            }
            Ok(status) => {
                tracing::debug!(spooler, code = ?status.code(), "print command failed");
            }
            Err(err) => {
                tracing::debug!(spooler, error = %err, "print command unavailable");
            }
        }
    }

    // No spooler worked, open a viewer instead so printing stays possible
    let viewer = if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    };
    match Command::new(viewer).arg(&path).status() {
        Ok(status) if status.success() => {
            tracing::warn!(viewer, path = %path.display(), "no spooler available, opened viewer");
            Ok(path)
        }
        _ => Err(DocumentError::SpoolFailed),
    }
}
